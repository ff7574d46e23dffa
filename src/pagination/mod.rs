//! Pagination state and page-link building.
//!
//! [`Paginator`] turns a total, a limit and the requested page into offsets and
//! URLs. Its collaborators ([`RequestSnapshot`], [`Route`], [`SiteUrl`] and
//! [`PaginationConfig`]) are passed in explicitly.

mod coerce;
pub mod config;
mod factory;
mod paginator;
mod params;
mod request;
mod route;
mod site;

pub use coerce::lenient_int;
pub use config::{PageSource, PaginationConfig};
pub use factory::PaginatorFactory;
pub use paginator::Paginator;
pub use params::Params;
pub use request::RequestSnapshot;
pub use route::{Route, RouteError, UriTemplate};
pub use site::SiteUrl;
