use actix_web::web::{scope, ServiceConfig};
use actix_web::{HttpRequest, HttpResponse, Scope};
use items::{list_catalog, list_catalog_page, list_items};

use crate::core::AppError;

mod health_check;
mod items;

pub use items::{ListingState, MAX_PAGE_SIZE};

use crate::routes::health_check::*;

fn api_routes() -> Scope {
    scope("api/v1")
        .service(list_items)
        .service(list_catalog)
        .service(list_catalog_page)
        .service(health_check)
}

pub async fn not_found(req: HttpRequest) -> Result<HttpResponse, AppError> {
    Err(AppError::not_found(format!("No route for {}", req.path())))
}

pub fn page_links_routes(conf: &mut ServiceConfig) {
    conf.service(api_routes())
        .default_service(actix_web::web::route().to(not_found));
}
