//! Raw-body CV uploads stored under the media root.

#[macro_use]
mod common;

use actix_web::http::StatusCode;
use actix_web::test;
use apidemo_backend::db;
use serde_json::Value;

const PDF: &[u8] =
    b"%PDF-1.4\n1 0 obj\n<< /Type /Catalog >>\nendobj\ntrailer\n<< /Root 1 0 R >>\n%%EOF\n";

#[actix_web::test]
async fn test_upload_cv() {
    let ctx = common::setup().await;
    let department = common::department(&ctx.pool, "Engineering").await;
    let employee = common::employee(&ctx.pool, "John", "Doe", &department, "75000.00").await;
    let app = init_app!(ctx);

    let req = test::TestRequest::put()
        .uri(&format!("/api/employees/{}/cv", employee.id))
        .set_payload(PDF)
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let data: Value = test::read_body_json(resp).await;
    let cv = data["cv"].as_str().expect("cv should be set").to_string();
    assert!(cv.starts_with("cv/"));
    assert!(cv.ends_with(".pdf"));
    assert_eq!(data["salary"], "75000.00");

    let stored = std::fs::read(ctx.media.path().join(&cv)).unwrap();
    assert_eq!(stored, PDF);

    let updated = db::employees::find(&ctx.pool, employee.id).await.unwrap().unwrap();
    assert_eq!(updated.cv.as_deref(), Some(cv.as_str()));
}

#[actix_web::test]
async fn test_update_keeps_uploaded_cv() {
    let ctx = common::setup().await;
    let department = common::department(&ctx.pool, "Engineering").await;
    let employee = common::employee(&ctx.pool, "John", "Doe", &department, "75000.00").await;
    let app = init_app!(ctx);

    let req = test::TestRequest::put()
        .uri(&format!("/api/employees/{}/cv", employee.id))
        .set_payload(PDF)
        .to_request();
    let uploaded: Value = test::call_and_read_body_json(&app, req).await;

    let req = test::TestRequest::put()
        .uri(&format!("/api/employees/{}", employee.id))
        .set_json(serde_json::json!({
            "first_name": "Johnny",
            "last_name": "Doe",
            "department": department.id,
            "salary": "80000.00",
        }))
        .to_request();
    let updated: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(updated["cv"], uploaded["cv"]);
}

#[actix_web::test]
async fn test_upload_cv_rejects_unknown_types() {
    let ctx = common::setup().await;
    let department = common::department(&ctx.pool, "Engineering").await;
    let employee = common::employee(&ctx.pool, "John", "Doe", &department, "75000.00").await;
    let app = init_app!(ctx);

    let req = test::TestRequest::put()
        .uri(&format!("/api/employees/{}/cv", employee.id))
        .set_payload("just some plain text")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let unchanged = db::employees::find(&ctx.pool, employee.id).await.unwrap().unwrap();
    assert!(unchanged.cv.is_none());
}

#[actix_web::test]
async fn test_upload_cv_over_limit() {
    let ctx = common::setup_with_cv_limit(16).await;
    let department = common::department(&ctx.pool, "Engineering").await;
    let employee = common::employee(&ctx.pool, "John", "Doe", &department, "75000.00").await;
    let app = init_app!(ctx);

    let req = test::TestRequest::put()
        .uri(&format!("/api/employees/{}/cv", employee.id))
        .set_payload(PDF)
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::PAYLOAD_TOO_LARGE);
    let data: Value = test::read_body_json(resp).await;
    assert_eq!(data["error"], "CV exceeds the 16 byte limit");

    let unchanged = db::employees::find(&ctx.pool, employee.id).await.unwrap().unwrap();
    assert!(unchanged.cv.is_none());
    assert!(!ctx.media.path().join("cv").exists());
}

#[actix_web::test]
async fn test_oversized_upload_for_unknown_employee_is_not_found() {
    let ctx = common::setup_with_cv_limit(16).await;
    let app = init_app!(ctx);

    let req = test::TestRequest::put()
        .uri("/api/employees/999/cv")
        .set_payload(PDF)
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn test_replacing_cv_removes_previous_file() {
    let ctx = common::setup().await;
    let department = common::department(&ctx.pool, "Engineering").await;
    let employee = common::employee(&ctx.pool, "John", "Doe", &department, "75000.00").await;
    let app = init_app!(ctx);
    let uri = format!("/api/employees/{}/cv", employee.id);

    let req = test::TestRequest::put().uri(&uri).set_payload(PDF).to_request();
    let first: Value = test::call_and_read_body_json(&app, req).await;
    let first = ctx.media.path().join(first["cv"].as_str().unwrap());
    assert!(first.exists());

    let req = test::TestRequest::put().uri(&uri).set_payload(PDF).to_request();
    let second: Value = test::call_and_read_body_json(&app, req).await;
    let second = ctx.media.path().join(second["cv"].as_str().unwrap());

    assert_ne!(first, second);
    assert!(!first.exists());
    assert!(second.exists());
}

#[actix_web::test]
async fn test_deleting_employee_removes_cv() {
    let ctx = common::setup().await;
    let department = common::department(&ctx.pool, "Engineering").await;
    let employee = common::employee(&ctx.pool, "John", "Doe", &department, "75000.00").await;
    let app = init_app!(ctx);

    let req = test::TestRequest::put()
        .uri(&format!("/api/employees/{}/cv", employee.id))
        .set_payload(PDF)
        .to_request();
    let uploaded: Value = test::call_and_read_body_json(&app, req).await;
    let file = ctx.media.path().join(uploaded["cv"].as_str().unwrap());
    assert!(file.exists());

    let req = test::TestRequest::delete()
        .uri(&format!("/api/employees/{}", employee.id))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert!(!file.exists());
}

#[actix_web::test]
async fn test_deleting_department_removes_employee_cvs() {
    let ctx = common::setup().await;
    let engineering = common::department(&ctx.pool, "Engineering").await;
    let sales = common::department(&ctx.pool, "Sales").await;
    let john = common::employee(&ctx.pool, "John", "Doe", &engineering, "75000.00").await;
    let sam = common::employee(&ctx.pool, "Sam", "Seller", &sales, "55000.00").await;
    let app = init_app!(ctx);

    let mut files = Vec::new();
    for id in [john.id, sam.id] {
        let req = test::TestRequest::put()
            .uri(&format!("/api/employees/{}/cv", id))
            .set_payload(PDF)
            .to_request();
        let uploaded: Value = test::call_and_read_body_json(&app, req).await;
        files.push(ctx.media.path().join(uploaded["cv"].as_str().unwrap()));
    }

    let req = test::TestRequest::delete()
        .uri(&format!("/api/departments/{}", engineering.id))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    assert!(!files[0].exists());
    assert!(files[1].exists());
}

#[actix_web::test]
async fn test_upload_cv_for_unknown_employee() {
    let ctx = common::setup().await;
    let app = init_app!(ctx);

    let req = test::TestRequest::put()
        .uri("/api/employees/999/cv")
        .set_payload(PDF)
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}
