use std::sync::Arc;

use actix_web::{
    get,
    web::{self},
    HttpRequest, HttpResponse, Responder,
};
use tracing::instrument;

use crate::{
    core::{AppConfig, AppError, AppSuccessResponse, SettingsError},
    models::{
        items::Catalog,
        pagination::{PageLinks, PaginationMeta, PaginationQuery},
    },
    pagination::{PageSource, Paginator, PaginatorFactory},
};

pub const MAX_PAGE_SIZE: i64 = 100;

/// Paginators for both listing styles plus the catalog they page through.
#[derive(Debug, Clone)]
pub struct ListingState {
    pub by_query: PaginatorFactory,
    pub by_route: PaginatorFactory,
    pub catalog: Catalog,
}

impl ListingState {
    pub fn from_config(config: &AppConfig) -> Result<Self, SettingsError> {
        let by_query = PaginatorFactory::new(
            Arc::new(config.routes.items_query_template()?),
            config.pagination.clone(),
            config.site.clone(),
        )
        .with_source(PageSource::Query);

        let by_route = PaginatorFactory::new(
            Arc::new(config.routes.items_route_template()?),
            config.pagination.clone(),
            config.site.clone(),
        )
        .with_source(PageSource::Route);

        Ok(Self {
            by_query,
            by_route,
            catalog: Catalog::new(config.catalog.total_items),
        })
    }
}

fn checked_limit(query: &PaginationQuery) -> Result<Option<i64>, AppError> {
    match query.limit() {
        Some(limit) if limit > MAX_PAGE_SIZE => Err(AppError::validation_error(format!(
            "limit must not exceed {}",
            MAX_PAGE_SIZE
        ))),
        limit => Ok(limit),
    }
}

fn page_response(paginator: &Paginator, catalog: &Catalog) -> HttpResponse {
    let data = catalog.slice(paginator.offset(), paginator.limit());

    tracing::info!(
        page = paginator.current_page(),
        total_pages = paginator.total_pages(),
        returned = data.len(),
        "serving catalog page"
    );

    HttpResponse::Ok().json(AppSuccessResponse {
        success: true,
        message: "Items retrieved successfully".to_string(),
        data,
        pagination: Some(PaginationMeta::from(paginator)),
        links: Some(PageLinks::from(paginator)),
    })
}

#[instrument(name = "List Items", skip(req, state))]
#[get("/items")]
pub async fn list_items(
    req: HttpRequest,
    state: web::Data<ListingState>,
    query: web::Query<PaginationQuery>,
) -> Result<impl Responder, AppError> {
    let limit = checked_limit(&query)?;
    let paginator = state
        .by_query
        .paginate_http(&req, state.catalog.total_items(), limit, None);

    Ok(page_response(&paginator, &state.catalog))
}

#[instrument(name = "List Catalog", skip(req, state))]
#[get("/catalog")]
pub async fn list_catalog(
    req: HttpRequest,
    state: web::Data<ListingState>,
    query: web::Query<PaginationQuery>,
) -> Result<impl Responder, AppError> {
    catalog_page(&req, &state, &query)
}

#[instrument(name = "List Catalog Page", skip(req, state))]
#[get("/catalog/page/{page}")]
pub async fn list_catalog_page(
    req: HttpRequest,
    state: web::Data<ListingState>,
    query: web::Query<PaginationQuery>,
) -> Result<impl Responder, AppError> {
    catalog_page(&req, &state, &query)
}

fn catalog_page(
    req: &HttpRequest,
    state: &ListingState,
    query: &PaginationQuery,
) -> Result<HttpResponse, AppError> {
    let limit = checked_limit(query)?;
    let paginator = state
        .by_route
        .paginate_http(req, state.catalog.total_items(), limit, None);

    Ok(page_response(&paginator, &state.catalog))
}
