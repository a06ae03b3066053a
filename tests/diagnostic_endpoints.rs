//! `GET /api/add` smoke endpoint.

#[macro_use]
mod common;

use actix_web::http::StatusCode;
use actix_web::test;
use serde_json::{json, Value};

#[actix_web::test]
async fn test_add() {
    let ctx = common::setup().await;
    let app = init_app!(ctx);

    for (uri, expected) in [("/api/add?a=3&b=4", 7), ("/api/add?a=-1&b=1", 0)] {
        let req = test::TestRequest::get().uri(uri).to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
        let data: Value = test::read_body_json(resp).await;
        assert_eq!(data, json!({ "result": expected }));
    }
}

#[actix_web::test]
async fn test_add_rejects_bad_parameters() {
    let ctx = common::setup().await;
    let app = init_app!(ctx);

    for uri in [
        "/api/add",
        "/api/add?a=3",
        "/api/add?a=three&b=4",
        "/api/add?a=1.5&b=2",
        "/api/add?a=9223372036854775807&b=1",
    ] {
        let req = test::TestRequest::get().uri(uri).to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY, "uri: {}", uri);
    }
}
