pub mod core;
pub mod models;
pub mod pagination;
pub mod page_links_web_server;
pub mod routes;
