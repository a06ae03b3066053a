use actix_web::web;

use crate::errors::{json_error_handler, path_error_handler, query_error_handler};
use crate::handlers;

/// Registers the `/api` scope. The pool (`web::Data<SqlitePool>`) and
/// `web::Data<Config>` are expected as application data.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            .app_data(web::JsonConfig::default().error_handler(json_error_handler))
            .app_data(web::QueryConfig::default().error_handler(query_error_handler))
            .app_data(web::PathConfig::default().error_handler(path_error_handler))
            .service(
                web::resource("/employees")
                    .route(web::post().to(handlers::employee::create_employee))
                    .route(web::get().to(handlers::employee::list_employees)),
            )
            .service(
                web::resource("/employees/{employee_id}")
                    .route(web::get().to(handlers::employee::get_employee))
                    .route(web::put().to(handlers::employee::update_employee))
                    .route(web::delete().to(handlers::employee::delete_employee)),
            )
            .service(
                web::resource("/employees/{employee_id}/cv")
                    .route(web::put().to(handlers::cv::upload_cv)),
            )
            .service(
                web::resource("/departments")
                    .route(web::post().to(handlers::department::create_department))
                    .route(web::get().to(handlers::department::list_departments)),
            )
            .service(
                web::resource("/departments/{department_id}")
                    .route(web::get().to(handlers::department::get_department))
                    .route(web::put().to(handlers::department::update_department))
                    .route(web::delete().to(handlers::department::delete_department)),
            )
            .service(
                web::resource("/add")
                    .route(web::get().to(handlers::diagnostic::add)),
            ),
    );
}
