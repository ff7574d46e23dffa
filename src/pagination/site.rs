use serde::Deserialize;

/// Resolves application paths into full URLs.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct SiteUrl {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default)]
    pub index_file: Option<String>,
}

fn default_base_url() -> String {
    "/".to_string()
}

impl Default for SiteUrl {
    fn default() -> Self {
        Self::new(default_base_url())
    }
}

impl SiteUrl {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            index_file: None,
        }
    }

    pub fn with_index_file(mut self, index_file: impl Into<String>) -> Self {
        self.index_file = Some(index_file.into());
        self
    }

    /// `base_url[/index_file]/path`, with the slashes between parts collapsed.
    pub fn site(&self, path: &str) -> String {
        let mut url = self.base_url.trim_end_matches('/').to_string();

        if let Some(index_file) = self
            .index_file
            .as_deref()
            .map(|file| file.trim_matches('/'))
            .filter(|file| !file.is_empty())
        {
            url.push('/');
            url.push_str(index_file);
        }

        url.push('/');
        url.push_str(path.trim_start_matches('/'));
        url
    }
}
