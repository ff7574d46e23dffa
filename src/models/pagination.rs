use serde::{Deserialize, Serialize};

use crate::pagination::{lenient_int, Paginator};

/// Optional page-size override on listing endpoints. Read leniently so a
/// malformed value behaves like a missing one.
#[derive(Debug, Deserialize)]
pub struct PaginationQuery {
    pub limit: Option<String>,
}

impl PaginationQuery {
    pub fn limit(&self) -> Option<i64> {
        self.limit.as_deref().map(lenient_int)
    }
}

#[derive(Debug, Serialize, PartialEq)]
pub struct PaginationMeta {
    pub current_page: u64,
    pub per_page: u64,
    pub total_items: u64,
    pub total_pages: u64,
    pub offset: u64,
}

impl From<&Paginator> for PaginationMeta {
    fn from(paginator: &Paginator) -> Self {
        Self {
            current_page: paginator.current_page(),
            per_page: paginator.limit(),
            total_items: paginator.total(),
            total_pages: paginator.total_pages(),
            offset: paginator.offset(),
        }
    }
}

#[derive(Debug, Serialize, PartialEq)]
pub struct PageLinks {
    pub first: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub previous: Option<String>,
    #[serde(rename = "self")]
    pub current: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next: Option<String>,
    pub last: String,
}

impl From<&Paginator> for PageLinks {
    fn from(paginator: &Paginator) -> Self {
        let url = |page: u64| paginator.page_url(page);

        Self {
            first: url(paginator.first_page()),
            previous: paginator.previous_page().map(url),
            current: url(paginator.current_page()),
            next: paginator.next_page().map(url),
            last: url(paginator.last_page()),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use claim::{assert_none, assert_some_eq};

    use super::*;
    use crate::pagination::{PaginationConfig, Params, RequestSnapshot, SiteUrl, UriTemplate};

    fn paginator(current: i64) -> Paginator {
        let route = Arc::new(UriTemplate::parse("items").expect("valid test pattern"));
        let request = RequestSnapshot::new().with_query(Params::new().with("q", "rust"));
        Paginator::new(
            45,
            Some(10),
            Some(current),
            request,
            route,
            PaginationConfig::default(),
            SiteUrl::default(),
        )
    }

    #[test]
    fn meta_mirrors_the_paginator() {
        let meta = PaginationMeta::from(&paginator(2));
        assert_eq!(
            meta,
            PaginationMeta {
                current_page: 2,
                per_page: 10,
                total_items: 45,
                total_pages: 5,
                offset: 10,
            }
        );
    }

    #[test]
    fn links_on_a_middle_page() {
        let links = PageLinks::from(&paginator(3));
        assert_eq!(links.first, "/items?q=rust");
        assert_some_eq!(links.previous, "/items?q=rust&page=2");
        assert_eq!(links.current, "/items?q=rust&page=3");
        assert_some_eq!(links.next, "/items?q=rust&page=4");
        assert_eq!(links.last, "/items?q=rust&page=5");
    }

    #[test]
    fn first_page_has_no_previous_link() {
        let links = PageLinks::from(&paginator(1));
        assert_none!(links.previous);
        assert_eq!(links.current, links.first);
    }

    #[test]
    fn last_link_is_exact_past_i64_max() {
        let route = Arc::new(UriTemplate::parse("items").expect("valid test pattern"));
        let p = Paginator::new(
            u64::MAX,
            Some(1),
            Some(i64::MAX),
            RequestSnapshot::new(),
            route,
            PaginationConfig::default(),
            SiteUrl::default(),
        );
        let links = PageLinks::from(&p);
        assert_eq!(links.last, "/items?page=18446744073709551615");
        assert_eq!(links.current, "/items?page=9223372036854775807");
        assert_some_eq!(links.next, "/items?page=9223372036854775808");
    }

    #[test]
    fn limit_override_is_read_leniently() {
        let query = PaginationQuery {
            limit: Some("25abc".to_string()),
        };
        assert_eq!(query.limit(), Some(25));
        assert_eq!(PaginationQuery { limit: None }.limit(), None);
    }
}
