use actix_web::{web, HttpRequest};

use super::Params;

/// Owned view of the parts of a request the paginator reads.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestSnapshot {
    pub query: Params,
    pub route_params: Params,
    pub directory: Option<String>,
    pub controller: Option<String>,
    pub action: Option<String>,
}

impl RequestSnapshot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_query(mut self, query: Params) -> Self {
        self.query = query;
        self
    }

    pub fn with_route_params(mut self, route_params: Params) -> Self {
        self.route_params = route_params;
        self
    }

    pub fn with_target(
        mut self,
        directory: Option<&str>,
        controller: Option<&str>,
        action: Option<&str>,
    ) -> Self {
        self.directory = directory.map(str::to_string);
        self.controller = controller.map(str::to_string);
        self.action = action.map(str::to_string);
        self
    }

    /// Captures the query string and the matched path segments.
    /// A query string that cannot be decoded is treated as empty.
    pub fn from_http_request(req: &HttpRequest) -> Self {
        let query = match web::Query::<Vec<(String, String)>>::from_query(req.query_string()) {
            Ok(pairs) => pairs.into_inner().into_iter().collect(),
            Err(e) => {
                tracing::debug!(error = %e, "ignoring undecodable query string");
                Params::new()
            }
        };

        let match_info = req.match_info();
        let route_params = match_info
            .iter()
            .map(|(key, value)| (key.to_string(), value.to_string()))
            .collect();

        Self {
            query,
            route_params,
            directory: match_info.get("directory").map(str::to_string),
            controller: match_info.get("controller").map(str::to_string),
            action: match_info.get("action").map(str::to_string),
        }
    }

    /// Route parameters that reproduce this request's URI: the named target
    /// fields first, then every other matched parameter.
    pub fn default_route_params(&self) -> Params {
        let mut params = Params::new();
        params.insert("directory", self.directory.clone());
        params.insert("controller", self.controller.clone());
        params.insert("action", self.action.clone());

        for (key, value) in self.route_params.iter() {
            if !params.contains_key(key) {
                params.insert(key, value.map(str::to_string));
            }
        }
        params
    }
}
