//! Shared setup for the HTTP integration tests.
//!
//! Every test gets its own in-memory SQLite database with the migrations
//! applied and its own media directory.

#![allow(dead_code)]

use apidemo_backend::config::Config;
use apidemo_backend::db;
use apidemo_backend::models::department::Department;
use apidemo_backend::models::employee::{Employee, NewEmployee};
use sqlx::SqlitePool;
use tempfile::TempDir;

pub struct TestContext {
    pub pool: SqlitePool,
    pub config: Config,
    // Removed when the context is dropped.
    pub media: TempDir,
}

pub async fn setup() -> TestContext {
    setup_with_cv_limit(1024 * 1024).await
}

pub async fn setup_with_cv_limit(max_cv_size: usize) -> TestContext {
    let pool = db::create_in_memory_pool().await.expect("failed to open in-memory database");
    db::migrate(&pool).await.expect("failed to run migrations");

    let media = TempDir::new().expect("failed to create media directory");
    let config = Config {
        database_url: "sqlite::memory:".to_string(),
        host: "127.0.0.1".to_string(),
        port: 0,
        media_root: media.path().to_path_buf(),
        max_cv_size,
    };

    TestContext { pool, config, media }
}

/// Builds the application service for a [`TestContext`].
macro_rules! init_app {
    ($ctx:expr) => {
        actix_web::test::init_service(
            actix_web::App::new()
                .app_data(actix_web::web::Data::new($ctx.pool.clone()))
                .app_data(actix_web::web::Data::new($ctx.config.clone()))
                .configure(apidemo_backend::routes::configure),
        )
        .await
    };
}

pub async fn department(pool: &SqlitePool, name: &str) -> Department {
    db::departments::insert(pool, name).await.expect("failed to create department")
}

pub async fn employee(
    pool: &SqlitePool,
    first_name: &str,
    last_name: &str,
    department: &Department,
    salary: &str,
) -> Employee {
    db::employees::insert(
        pool,
        &NewEmployee {
            first_name: first_name.to_string(),
            last_name: last_name.to_string(),
            department_id: department.id,
            salary: salary.parse().expect("invalid salary"),
            birthdate: None,
        },
    )
    .await
    .expect("failed to create employee")
}
