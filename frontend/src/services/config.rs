/// Base locations the app talks to.
///
/// `base_url` prefixes every API call and ends with a slash; `app_context`
/// prefixes full-page navigation targets the same way.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub base_url: String,
    pub app_context: String,
}

impl AppConfig {
    /// Configuration pointing at the default goal service location
    pub fn new() -> Self {
        Self {
            base_url: "http://localhost:3000/api/v1/".to_string(),
            app_context: "/".to_string(),
        }
    }

    /// Configuration with a custom API base URL
    pub fn with_base_url(base_url: String) -> Self {
        Self {
            base_url,
            app_context: "/".to_string(),
        }
    }

    /// Absolute URL for an API path relative to the base
    pub fn api_url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Full-page location for an application path
    pub fn app_url(&self, path: &str) -> String {
        format!("{}{}", self.app_context, path)
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::new()
    }
}
