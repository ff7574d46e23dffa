use std::path::Path;

use actix_web::http::StatusCode;
use actix_web::{test, web::Data, App};
use once_cell::sync::Lazy;
use page_links::core::config::Environment;
use page_links::core::{get_subscriber, init_subscriber, AppConfig};
use page_links::routes::{page_links_routes, ListingState};
use serde_json::Value;
use tracing_actix_web::TracingLogger;

// Ensure that the `tracing` stack is only initialised once using `once_cell`
static TRACING: Lazy<()> = Lazy::new(|| {
    let default_filter_level = "info".to_string();
    let subscriber_name = "test".to_string();
    if std::env::var("TEST_LOG").is_ok() {
        let subscriber = get_subscriber(subscriber_name, default_filter_level, std::io::stdout);
        init_subscriber(subscriber);
    } else {
        let subscriber = get_subscriber(subscriber_name, default_filter_level, std::io::sink);
        init_subscriber(subscriber);
    }
});

pub fn test_config() -> AppConfig {
    let config_dir = Path::new(env!("CARGO_MANIFEST_DIR")).join("src/core/configurations");
    let mut config =
        AppConfig::load(&config_dir, Environment::Local).expect("Failed to load test configuration");
    config.site.base_url = "http://localhost".to_string();
    config.pagination.limit = 10;
    config.catalog.total_items = 45;
    config
}

/// Sends a GET through the full app and returns the status and the JSON body
/// (`Null` when the body is empty).
pub async fn get(uri: &str) -> (StatusCode, Value) {
    Lazy::force(&TRACING);

    let listing_state =
        ListingState::from_config(&test_config()).expect("Failed to build listing state");
    let app = test::init_service(
        App::new()
            .wrap(TracingLogger::default())
            .app_data(Data::new(listing_state))
            .configure(page_links_routes),
    )
    .await;

    let request = test::TestRequest::get().uri(uri).to_request();
    let response = test::call_service(&app, request).await;
    let status = response.status();
    let body = test::read_body(response).await;

    (status, serde_json::from_slice(&body).unwrap_or(Value::Null))
}
