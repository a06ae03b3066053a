use actix_web::{web, HttpResponse};
use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::json;
use sqlx::SqlitePool;
use validator::Validate;

use crate::config::Config;
use crate::db;
use crate::errors::AppError;
use crate::handlers::cv::remove_cv;
use crate::models::employee::{Employee, NewEmployee};
use crate::models::salary::Salary;
use crate::utils::validation::validate_payload;

#[derive(Deserialize, Validate, Debug)]
pub struct EmployeeIn {
    #[validate(length(max = 100))]
    first_name: String,
    #[validate(length(max = 100))]
    last_name: String,
    department: i64,
    salary: String,
    /// `None` when the key is absent, `Some(None)` for an explicit `null`.
    #[serde(default, deserialize_with = "present")]
    birthdate: Option<Option<NaiveDate>>,
}

fn present<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    T::deserialize(deserializer).map(Some)
}

#[derive(Serialize, Debug)]
pub struct EmployeeOut {
    id: i64,
    first_name: String,
    last_name: String,
    department: i64,
    salary: String,
    birthdate: Option<NaiveDate>,
    cv: Option<String>,
}

impl From<Employee> for EmployeeOut {
    fn from(employee: Employee) -> Self {
        EmployeeOut {
            id: employee.id,
            first_name: employee.first_name,
            last_name: employee.last_name,
            department: employee.department_id,
            salary: employee.salary.to_string(),
            birthdate: employee.birthdate,
            cv: employee.cv,
        }
    }
}

impl EmployeeIn {
    fn parsed_salary(&self) -> Result<Salary, AppError> {
        self.salary
            .parse()
            .map_err(|err| AppError::ValidationError(format!("salary: {}", err)))
    }
}

pub(crate) async fn find_employee(pool: &SqlitePool, id: i64) -> Result<Employee, AppError> {
    db::employees::find(pool, id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Employee {} not found", id)))
}

async fn require_department(pool: &SqlitePool, id: i64) -> Result<(), AppError> {
    db::departments::find(pool, id)
        .await?
        .map(|_| ())
        .ok_or_else(|| AppError::NotFound(format!("Department {} not found", id)))
}

pub async fn create_employee(
    pool: web::Data<SqlitePool>,
    payload: web::Json<EmployeeIn>,
) -> Result<HttpResponse, AppError> {
    validate_payload(&*payload)?;
    let salary = payload.parsed_salary()?;
    require_department(&pool, payload.department).await?;

    let payload = payload.into_inner();
    let employee = db::employees::insert(
        &pool,
        &NewEmployee {
            first_name: payload.first_name,
            last_name: payload.last_name,
            department_id: payload.department,
            salary,
            birthdate: payload.birthdate.flatten(),
        },
    )
    .await?;

    log::info!(
        "Created employee {} in department {}",
        employee.id,
        employee.department_id
    );
    Ok(HttpResponse::Ok().json(EmployeeOut::from(employee)))
}

pub async fn get_employee(
    pool: web::Data<SqlitePool>,
    employee_id: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    let employee = find_employee(&pool, employee_id.into_inner()).await?;
    Ok(HttpResponse::Ok().json(EmployeeOut::from(employee)))
}

pub async fn list_employees(pool: web::Data<SqlitePool>) -> Result<HttpResponse, AppError> {
    let employees: Vec<EmployeeOut> = db::employees::list(&pool)
        .await?
        .into_iter()
        .map(EmployeeOut::from)
        .collect();
    Ok(HttpResponse::Ok().json(employees))
}

pub async fn update_employee(
    pool: web::Data<SqlitePool>,
    employee_id: web::Path<i64>,
    payload: web::Json<EmployeeIn>,
) -> Result<HttpResponse, AppError> {
    validate_payload(&*payload)?;
    let salary = payload.parsed_salary()?;

    let mut employee = find_employee(&pool, employee_id.into_inner()).await?;
    require_department(&pool, payload.department).await?;

    let payload = payload.into_inner();
    employee.first_name = payload.first_name;
    employee.last_name = payload.last_name;
    employee.department_id = payload.department;
    employee.salary = salary;
    if let Some(birthdate) = payload.birthdate {
        employee.birthdate = birthdate;
    }
    db::employees::save(&pool, &employee).await?;

    log::info!("Updated employee {}", employee.id);
    Ok(HttpResponse::Ok().json(EmployeeOut::from(employee)))
}

pub async fn delete_employee(
    pool: web::Data<SqlitePool>,
    config: web::Data<Config>,
    employee_id: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    let employee = find_employee(&pool, employee_id.into_inner()).await?;
    db::employees::delete(&pool, employee.id).await?;
    if let Some(cv) = &employee.cv {
        remove_cv(&config.media_root, cv).await;
    }

    log::info!("Deleted employee {}", employee.id);
    Ok(HttpResponse::Ok().json(json!({ "success": true })))
}
