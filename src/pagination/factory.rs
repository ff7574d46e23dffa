use std::sync::Arc;

use actix_web::HttpRequest;

use super::{PageSource, PaginationConfig, Paginator, RequestSnapshot, Route, SiteUrl};

/// Shared route, configuration and site for handlers that paginate.
///
/// Meant to live in `web::Data`; each request gets its own [`Paginator`].
#[derive(Debug, Clone)]
pub struct PaginatorFactory {
    route: Arc<dyn Route>,
    config: PaginationConfig,
    site: SiteUrl,
}

impl PaginatorFactory {
    pub fn new(route: Arc<dyn Route>, config: PaginationConfig, site: SiteUrl) -> Self {
        Self {
            route,
            config,
            site,
        }
    }

    pub fn with_source(mut self, source: PageSource) -> Self {
        self.config.source = source;
        self
    }

    pub fn config(&self) -> &PaginationConfig {
        &self.config
    }

    pub fn paginate(
        &self,
        request: RequestSnapshot,
        total: u64,
        limit: Option<i64>,
        current: Option<i64>,
    ) -> Paginator {
        Paginator::new(
            total,
            limit,
            current,
            request,
            Arc::clone(&self.route),
            self.config.clone(),
            self.site.clone(),
        )
    }

    pub fn paginate_http(
        &self,
        req: &HttpRequest,
        total: u64,
        limit: Option<i64>,
        current: Option<i64>,
    ) -> Paginator {
        self.paginate(RequestSnapshot::from_http_request(req), total, limit, current)
    }
}

#[cfg(test)]
mod tests {
    use actix_web::test::TestRequest;

    use super::*;
    use crate::pagination::UriTemplate;

    fn factory(pattern: &str) -> PaginatorFactory {
        let route = Arc::new(UriTemplate::parse(pattern).expect("valid test pattern"));
        PaginatorFactory::new(route, PaginationConfig::default(), SiteUrl::new("http://localhost"))
    }

    #[test]
    fn paginates_straight_from_an_http_request() {
        let req = TestRequest::with_uri("/items?page=2&q=x").to_http_request();
        let paginator = factory("items").paginate_http(&req, 45, None, None);

        assert_eq!(paginator.current_page(), 2);
        assert_eq!(paginator.url(3), "http://localhost/items?page=3&q=x");
    }

    #[test]
    fn source_override_applies_to_every_paginator() {
        let req = TestRequest::with_uri("/catalog/page/3")
            .param("page", "3")
            .to_http_request();
        let paginator = factory("catalog(/page/<page>)")
            .with_source(PageSource::Route)
            .paginate_http(&req, 45, None, None);

        assert_eq!(paginator.current_page(), 3);
        assert_eq!(paginator.url(4), "http://localhost/catalog/page/4");
    }
}
