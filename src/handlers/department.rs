use actix_web::{web, HttpResponse};
use serde::Deserialize;
use serde_json::json;
use sqlx::SqlitePool;
use validator::Validate;

use crate::config::Config;
use crate::db;
use crate::errors::AppError;
use crate::handlers::cv::remove_cv;
use crate::models::department::Department;
use crate::utils::validation::validate_payload;

#[derive(Deserialize, Validate)]
pub struct DepartmentIn {
    #[validate(length(min = 1, max = 100))]
    name: String,
}

async fn find_department(pool: &SqlitePool, id: i64) -> Result<Department, AppError> {
    db::departments::find(pool, id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Department {} not found", id)))
}

pub async fn create_department(
    pool: web::Data<SqlitePool>,
    payload: web::Json<DepartmentIn>,
) -> Result<HttpResponse, AppError> {
    validate_payload(&*payload)?;

    let department = db::departments::insert(&pool, &payload.name).await?;

    log::info!("Created department {} ({})", department.id, department.name);
    Ok(HttpResponse::Ok().json(department))
}

pub async fn get_department(
    pool: web::Data<SqlitePool>,
    department_id: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    let department = find_department(&pool, department_id.into_inner()).await?;
    Ok(HttpResponse::Ok().json(department))
}

pub async fn list_departments(pool: web::Data<SqlitePool>) -> Result<HttpResponse, AppError> {
    let departments = db::departments::list(&pool).await?;
    Ok(HttpResponse::Ok().json(departments))
}

pub async fn update_department(
    pool: web::Data<SqlitePool>,
    department_id: web::Path<i64>,
    payload: web::Json<DepartmentIn>,
) -> Result<HttpResponse, AppError> {
    validate_payload(&*payload)?;

    let mut department = find_department(&pool, department_id.into_inner()).await?;
    department.name = payload.into_inner().name;
    db::departments::save(&pool, &department).await?;

    Ok(HttpResponse::Ok().json(department))
}

pub async fn delete_department(
    pool: web::Data<SqlitePool>,
    config: web::Data<Config>,
    department_id: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    let department = find_department(&pool, department_id.into_inner()).await?;

    let employees = db::departments::count_employees(&pool, department.id).await?;
    let cvs = db::employees::cv_paths_in_department(&pool, department.id).await?;
    db::departments::delete(&pool, department.id).await?;
    for cv in &cvs {
        remove_cv(&config.media_root, cv).await;
    }

    log::info!(
        "Deleted department {} along with {} employee(s)",
        department.id,
        employees
    );
    Ok(HttpResponse::Ok().json(json!({ "success": true })))
}
