use std::path::Path;

use serde::Deserialize;
use validator::Validate;

use crate::pagination::{PaginationConfig, RouteError, SiteUrl, UriTemplate};

#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("cannot resolve the working directory: {0}")]
    WorkingDir(#[from] std::io::Error),
    #[error("failed to load configuration: {0}")]
    Load(#[from] config::ConfigError),
    #[error("{0}")]
    Environment(String),
    #[error("invalid pagination settings: {0}")]
    Invalid(#[from] validator::ValidationErrors),
    #[error("invalid route template `{pattern}`: {source}")]
    Route {
        pattern: String,
        #[source]
        source: RouteError,
    },
}

#[derive(Deserialize, Clone, Debug)]
pub struct AppConfig {
    pub page_links_server_config: PageLinksServer,
    #[serde(default)]
    pub site: SiteUrl,
    #[serde(default)]
    pub pagination: PaginationConfig,
    #[serde(default)]
    pub routes: RoutesConfig,
    #[serde(default)]
    pub catalog: CatalogConfig,
}

impl AppConfig {
    pub fn new() -> Result<Self, SettingsError> {
        let base_path = std::env::current_dir()?;
        let config_dir = base_path.join("src/core/configurations");

        let app_environment: Environment = std::env::var("PAGE_LINKS_APP_ENVIRONMENT")
            .unwrap_or_else(|_| "local".into())
            .try_into()
            .map_err(SettingsError::Environment)?;

        Self::load(&config_dir, app_environment)
    }

    /// Reads `<config_dir>/<environment>.*`, then `PAGE_LINKS__*` overrides
    /// such as `PAGE_LINKS__PAGINATION__LIMIT=25`.
    pub fn load(config_dir: &Path, environment: Environment) -> Result<Self, SettingsError> {
        let configurations = config::Config::builder()
            .add_source(config::File::from(config_dir.join(environment.as_str())).required(true))
            .add_source(
                config::Environment::with_prefix("PAGE_LINKS")
                    .prefix_separator("__")
                    .separator("__"),
            )
            .build()?;

        let app_config: AppConfig = configurations.try_deserialize()?;
        app_config.validate()?;
        Ok(app_config)
    }

    pub fn validate(&self) -> Result<(), SettingsError> {
        self.pagination.validate()?;
        self.routes.items_query_template()?;
        self.routes.items_route_template()?;
        Ok(())
    }
}

#[derive(Deserialize, Clone, Debug)]
pub struct PageLinksServer {
    pub port: u16,
    pub host: String,
}

/// URI templates the listing endpoints build their page links from.
#[derive(Deserialize, Clone, Debug)]
pub struct RoutesConfig {
    #[serde(default = "default_items_query")]
    pub items_query: String,
    #[serde(default = "default_items_route")]
    pub items_route: String,
}

fn default_items_query() -> String {
    "api/v1/items".to_string()
}

fn default_items_route() -> String {
    "api/v1/catalog(/page/<page>)".to_string()
}

impl Default for RoutesConfig {
    fn default() -> Self {
        Self {
            items_query: default_items_query(),
            items_route: default_items_route(),
        }
    }
}

impl RoutesConfig {
    pub fn items_query_template(&self) -> Result<UriTemplate, SettingsError> {
        parse_template(&self.items_query)
    }

    pub fn items_route_template(&self) -> Result<UriTemplate, SettingsError> {
        parse_template(&self.items_route)
    }
}

fn parse_template(pattern: &str) -> Result<UriTemplate, SettingsError> {
    UriTemplate::parse(pattern).map_err(|source| SettingsError::Route {
        pattern: pattern.to_string(),
        source,
    })
}

#[derive(Deserialize, Clone, Debug)]
pub struct CatalogConfig {
    #[serde(default = "default_total_items")]
    pub total_items: u64,
}

fn default_total_items() -> u64 {
    95
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            total_items: default_total_items(),
        }
    }
}

#[derive(Debug)]
pub enum Environment {
    Local,
    Production,
}

impl Environment {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Local => "local",
            Self::Production => "production",
        }
    }
}

impl TryFrom<String> for Environment {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        match value.to_lowercase().as_str() {
            "local" => Ok(Self::Local),
            "production" => Ok(Self::Production),
            other => Err(format!(
                "{} is not supported environment. Use either `local` or `production` ",
                other
            )),
        }
    }
}
