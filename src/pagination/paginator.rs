use std::sync::Arc;

use super::{lenient_int, PageSource, PaginationConfig, Params, RequestSnapshot, Route, SiteUrl};

/// Pagination arithmetic and page links for one request.
///
/// ```
/// use std::sync::Arc;
/// use page_links::pagination::{Paginator, PaginationConfig, RequestSnapshot, SiteUrl, UriTemplate};
///
/// let route = Arc::new(UriTemplate::parse("items").unwrap());
/// let paginator = Paginator::new(
///     100,
///     Some(20),
///     Some(3),
///     RequestSnapshot::new(),
///     route,
///     PaginationConfig::default(),
///     SiteUrl::default(),
/// );
/// assert_eq!(paginator.offset(), 40);
/// assert_eq!(paginator.url(4), "/items?page=4");
/// ```
#[derive(Debug, Clone)]
pub struct Paginator {
    total: u64,
    limit: u64,
    current: i64,
    request: RequestSnapshot,
    route: Arc<dyn Route>,
    route_params: Params,
    config: PaginationConfig,
    site: SiteUrl,
}

impl Paginator {
    /// `limit` falls back to the configured default unless positive.
    /// `current` is read from the request when not given.
    pub fn new(
        total: u64,
        limit: Option<i64>,
        current: Option<i64>,
        request: RequestSnapshot,
        route: Arc<dyn Route>,
        config: PaginationConfig,
        site: SiteUrl,
    ) -> Self {
        let route_params = request.default_route_params();
        let current = current.unwrap_or_else(|| detect_current_page(&request, &config));
        let limit = limit
            .filter(|limit| *limit > 0)
            .map(i64::unsigned_abs)
            .unwrap_or(config.limit)
            .max(1);

        let paginator = Self {
            total,
            limit,
            current,
            request,
            route,
            route_params,
            config,
            site,
        };

        if paginator.current_page() != paginator.current.max(1).unsigned_abs() {
            tracing::trace!(
                requested = paginator.current,
                clamped = paginator.current_page(),
                "requested page out of range"
            );
        }
        paginator
    }

    pub fn total(&self) -> u64 {
        self.total
    }

    pub fn limit(&self) -> u64 {
        self.limit
    }

    /// Zero-based index of the first item on the current page.
    pub fn offset(&self) -> u64 {
        (self.current_page() - 1) * self.limit
    }

    /// The requested page clamped into `1..=max(1, total_pages)`.
    pub fn current_page(&self) -> u64 {
        self.current.max(1).unsigned_abs().min(self.last_page())
    }

    pub fn total_pages(&self) -> u64 {
        self.total.div_ceil(self.limit)
    }

    pub fn first_page(&self) -> u64 {
        1
    }

    /// Never below 1, even with nothing to paginate.
    pub fn last_page(&self) -> u64 {
        self.total_pages().max(1)
    }

    pub fn previous_page(&self) -> Option<u64> {
        let current = self.current_page();
        (current > 1).then(|| current - 1)
    }

    pub fn next_page(&self) -> Option<u64> {
        let current = self.current_page();
        (current < self.total_pages()).then(|| current + 1)
    }

    pub fn has_previous(&self) -> bool {
        self.previous_page().is_some()
    }

    pub fn has_next(&self) -> bool {
        self.next_page().is_some()
    }

    /// One-based numbers of the first and last item on the current page.
    pub fn items_range(&self) -> Option<(u64, u64)> {
        if self.total == 0 {
            return None;
        }
        let offset = self.offset();
        let last = offset.saturating_add(self.limit).min(self.total);
        Some((offset + 1, last))
    }

    pub fn config(&self) -> &PaginationConfig {
        &self.config
    }

    pub fn request(&self) -> &RequestSnapshot {
        &self.request
    }

    pub fn set_request(&mut self, request: RequestSnapshot) -> &mut Self {
        self.request = request;
        self
    }

    pub fn route(&self) -> &Arc<dyn Route> {
        &self.route
    }

    pub fn set_route(&mut self, route: Arc<dyn Route>) -> &mut Self {
        self.route = route;
        self
    }

    pub fn route_params(&self) -> &Params {
        &self.route_params
    }

    pub fn set_route_params(&mut self, route_params: Params) -> &mut Self {
        self.route_params = route_params;
        self
    }

    /// Full URL of `page`. Pages below 1 link to page 1, and page 1 drops its
    /// parameter unless `first_page_in_url` is set.
    pub fn url(&self, page: i64) -> String {
        self.page_url(page.max(1).unsigned_abs())
    }

    /// [`Paginator::url`] for page numbers as the counters report them, so
    /// pages past `i64::MAX` still get their own link.
    pub fn page_url(&self, page: u64) -> String {
        let page = page.max(1);
        let value = if page == 1 && !self.config.first_page_in_url {
            None
        } else {
            Some(page.to_string())
        };
        let mut page_param = Params::new();
        page_param.insert(self.config.key.as_str(), value);

        match self.config.source {
            PageSource::Query => {
                let path = self.route.uri(&self.route_params);
                self.site
                    .site(&format!("{}{}", path, self.query(Some(&page_param))))
            }
            PageSource::Route => {
                let path = self.route.uri(&self.route_params.merged(&page_param));
                self.site.site(&format!("{}{}", path, self.query(None)))
            }
            PageSource::Unsupported => "#".to_string(),
        }
    }

    /// Query string for links from this request, `?` included.
    ///
    /// `params` override the request's own query parameters. Returns an empty
    /// string when nothing would be encoded.
    pub fn query(&self, params: Option<&Params>) -> String {
        let params = match params {
            Some(overrides) => self.request.query.merged(overrides),
            None => self.request.query.clone(),
        };

        if params.is_empty() {
            return String::new();
        }

        let encoded = params.to_query_string();
        if encoded.is_empty() {
            String::new()
        } else {
            format!("?{}", encoded)
        }
    }
}

fn detect_current_page(request: &RequestSnapshot, config: &PaginationConfig) -> i64 {
    let raw = match config.source {
        PageSource::Route => request.route_params.get(&config.key),
        _ => request.query.get(&config.key),
    };

    let page = raw.map(lenient_int).filter(|page| *page != 0).unwrap_or(1);
    tracing::debug!(key = %config.key, source = ?config.source, page, "detected current page");
    page
}
