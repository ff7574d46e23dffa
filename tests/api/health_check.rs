use actix_web::http::StatusCode;

use crate::helpers::get;

#[actix_web::test]
async fn health_check_works() {
    let (status, body) = get("/api/v1/health_check").await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.is_null());
}

#[actix_web::test]
async fn unknown_paths_get_a_json_404() {
    let (status, body) = get("/api/v1/nowhere").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["success"], false);
    assert_eq!(body["message"], "No route for /api/v1/nowhere");
}
