//! Frontend configuration.
//!
//! URLs the client needs are resolved at build time so a deployment can
//! override them without touching the source.

/// Frontend configuration for backend and external URLs.
#[derive(Debug, Clone)]
pub struct FrontendConfig {
    /// Base URL for backend API calls.
    pub api_base_url: String,
    /// Location of the hosted user guide.
    pub documentation_url: String,
}

impl Default for FrontendConfig {
    fn default() -> Self {
        Self {
            api_base_url: option_env!("CAMPANILE_API_BASE_URL")
                .unwrap_or("/api")
                .to_string(),
            documentation_url: option_env!("CAMPANILE_DOCUMENTATION_URL")
                .unwrap_or("https://github.com/campanile/campanile/wiki")
                .to_string(),
        }
    }
}

impl FrontendConfig {
    /// Create a new frontend configuration instance.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the API base URL.
    pub fn api_base_url(&self) -> &str {
        &self.api_base_url
    }

    /// Get the documentation URL.
    pub fn documentation_url(&self) -> &str {
        &self.documentation_url
    }
}
