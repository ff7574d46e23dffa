use actix_web::http::StatusCode;
use serde_json::Value;

use crate::helpers::get;

fn ids(body: &Value) -> Vec<u64> {
    body["data"]
        .as_array()
        .expect("data should be an array")
        .iter()
        .filter_map(|item| item["id"].as_u64())
        .collect()
}

#[actix_web::test]
async fn query_listing_serves_the_requested_page() {
    let (status, body) = get("/api/v1/items?page=2&q=rust").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(ids(&body), (11..=20).collect::<Vec<_>>());
    assert_eq!(body["pagination"]["current_page"], 2);
    assert_eq!(body["pagination"]["total_pages"], 5);
    assert_eq!(body["pagination"]["offset"], 10);
}

#[actix_web::test]
async fn query_listing_links_keep_other_parameters() {
    let (_, body) = get("/api/v1/items?page=2&q=rust").await;
    let links = &body["links"];

    assert_eq!(links["first"], "http://localhost/api/v1/items?q=rust");
    assert_eq!(links["previous"], "http://localhost/api/v1/items?q=rust");
    assert_eq!(links["self"], "http://localhost/api/v1/items?page=2&q=rust");
    assert_eq!(links["next"], "http://localhost/api/v1/items?page=3&q=rust");
    assert_eq!(links["last"], "http://localhost/api/v1/items?page=5&q=rust");
}

#[actix_web::test]
async fn pages_past_the_end_serve_the_last_page() {
    let (status, body) = get("/api/v1/items?page=99").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["pagination"]["current_page"], 5);
    assert_eq!(ids(&body), vec![41, 42, 43, 44, 45]);
    assert!(body["links"].get("next").is_none());
}

#[actix_web::test]
async fn malformed_page_serves_the_first_page() {
    let (status, body) = get("/api/v1/items?page=abc").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["pagination"]["current_page"], 1);
    assert!(body["links"].get("previous").is_none());
}

#[actix_web::test]
async fn limit_override_changes_the_page_size() {
    let (status, body) = get("/api/v1/items?limit=20").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["pagination"]["per_page"], 20);
    assert_eq!(body["pagination"]["total_pages"], 3);
    assert_eq!(body["links"]["first"], "http://localhost/api/v1/items?limit=20");
    assert_eq!(
        body["links"]["next"],
        "http://localhost/api/v1/items?limit=20&page=2"
    );
}

#[actix_web::test]
async fn oversized_limit_is_rejected() {
    let (status, body) = get("/api/v1/items?limit=500").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["success"], false);
}

#[actix_web::test]
async fn route_listing_reads_the_page_from_the_path() {
    let (status, body) = get("/api/v1/catalog/page/3?q=x").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["pagination"]["current_page"], 3);
    assert_eq!(ids(&body), (21..=30).collect::<Vec<_>>());

    let links = &body["links"];
    assert_eq!(links["first"], "http://localhost/api/v1/catalog?q=x");
    assert_eq!(links["self"], "http://localhost/api/v1/catalog/page/3?q=x");
    assert_eq!(links["next"], "http://localhost/api/v1/catalog/page/4?q=x");
}

#[actix_web::test]
async fn route_listing_without_a_page_is_the_first_page() {
    let (status, body) = get("/api/v1/catalog").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["pagination"]["current_page"], 1);
    assert_eq!(body["links"]["self"], "http://localhost/api/v1/catalog");
    assert_eq!(body["links"]["next"], "http://localhost/api/v1/catalog/page/2");
}

#[actix_web::test]
async fn route_listing_ignores_a_page_query_parameter() {
    let (_, body) = get("/api/v1/catalog/page/2?page=4").await;

    assert_eq!(body["pagination"]["current_page"], 2);
}
