use actix_web::{web, HttpResponse};
use futures_util::StreamExt;
use sqlx::SqlitePool;
use std::path::Path;
use uuid::Uuid;

use crate::config::Config;
use crate::db;
use crate::errors::AppError;
use crate::handlers::employee::{find_employee, EmployeeOut};

const CV_DIR: &str = "cv";

const ALLOWED_MIME_TYPES: &[&str] = &[
    "application/pdf",
    "application/msword",
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
    "application/vnd.oasis.opendocument.text",
];

/// Stores the request body as the employee's CV and records its path
/// relative to the media root. A previously stored CV file is removed.
pub async fn upload_cv(
    pool: web::Data<SqlitePool>,
    config: web::Data<Config>,
    employee_id: web::Path<i64>,
    payload: web::Payload,
) -> Result<HttpResponse, AppError> {
    let mut employee = find_employee(&pool, employee_id.into_inner()).await?;
    let file = read_limited(payload, config.max_cv_size).await?;

    let file_type = infer::get(&file)
        .filter(|kind| ALLOWED_MIME_TYPES.contains(&kind.mime_type()))
        .ok_or_else(|| {
            AppError::ValidationError(
                "cv: only PDF, DOC, DOCX and ODT files are allowed".to_string(),
            )
        })?;

    let file_name = format!("{}.{}", Uuid::new_v4(), file_type.extension());
    let directory = config.media_root.join(CV_DIR);
    tokio::fs::create_dir_all(&directory).await.map_err(|err| {
        log::error!("Failed to create {}: {:?}", directory.display(), err);
        AppError::InternalServerError("Failed to store file".to_string())
    })?;

    let path = directory.join(&file_name);
    tokio::fs::write(&path, &file).await.map_err(|err| {
        log::error!("Failed to write {}: {:?}", path.display(), err);
        AppError::InternalServerError("Failed to store file".to_string())
    })?;

    let previous = employee.cv.replace(format!("{}/{}", CV_DIR, file_name));
    if let Err(err) = db::employees::save(&pool, &employee).await {
        remove_file(&path).await;
        return Err(err.into());
    }
    if let Some(previous) = previous {
        remove_cv(&config.media_root, &previous).await;
    }

    log::info!("Stored CV for employee {} at {}", employee.id, path.display());
    Ok(HttpResponse::Ok().json(EmployeeOut::from(employee)))
}

/// Collects the body, failing as soon as it grows past `limit` bytes.
async fn read_limited(mut payload: web::Payload, limit: usize) -> Result<web::BytesMut, AppError> {
    let mut body = web::BytesMut::new();
    while let Some(chunk) = payload.next().await {
        let chunk = chunk.map_err(|err| AppError::ValidationError(format!("cv: {}", err)))?;
        if body.len() + chunk.len() > limit {
            return Err(AppError::PayloadTooLarge(format!(
                "CV exceeds the {} byte limit",
                limit
            )));
        }
        body.extend_from_slice(&chunk);
    }
    Ok(body)
}

/// Removes a stored CV given its path relative to the media root.
pub(crate) async fn remove_cv(media_root: &Path, cv: &str) {
    remove_file(&media_root.join(cv)).await;
}

async fn remove_file(path: &Path) {
    if let Err(err) = tokio::fs::remove_file(path).await {
        log::warn!("Failed to remove {}: {:?}", path.display(), err);
    }
}
