use serde::Deserialize;
use validator::Validate;

/// Where the current page number lives in a URL.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PageSource {
    #[default]
    Query,
    Route,
    /// Any other configured value. Links degrade to `#`.
    #[serde(other)]
    Unsupported,
}

/// The `pagination` configuration group.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Validate)]
pub struct PaginationConfig {
    #[serde(default = "default_limit")]
    #[validate(range(min = 1, message = "Default limit must be at least 1"))]
    pub limit: u64,
    #[serde(default = "default_key")]
    #[validate(length(min = 1, message = "Page key is required"))]
    pub key: String,
    #[serde(default)]
    pub source: PageSource,
    #[serde(default)]
    pub first_page_in_url: bool,
}

fn default_limit() -> u64 {
    10
}

fn default_key() -> String {
    "page".to_string()
}

impl Default for PaginationConfig {
    fn default() -> Self {
        Self {
            limit: default_limit(),
            key: default_key(),
            source: PageSource::default(),
            first_page_in_url: false,
        }
    }
}

impl PaginationConfig {
    pub fn with_source(mut self, source: PageSource) -> Self {
        self.source = source;
        self
    }

    pub fn with_limit(mut self, limit: u64) -> Self {
        self.limit = limit;
        self
    }

    pub fn with_first_page_in_url(mut self, first_page_in_url: bool) -> Self {
        self.first_page_in_url = first_page_in_url;
        self
    }
}
