//! Client Configuration

/// Backend used when nothing else is configured
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:9090";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub api_base_url: String,
}

impl ClientConfig {
    pub fn with_base_url(url: &str) -> Self {
        Self {
            api_base_url: url.trim().trim_end_matches('/').to_string(),
        }
    }

    /// Reads `CONNECTLY_API_URL` as captured at compile time.
    pub fn from_build_env() -> Self {
        match option_env!("CONNECTLY_API_URL") {
            Some(url) if !url.trim().is_empty() => Self::with_base_url(url),
            _ => Self::default(),
        }
    }

    /// Absolute URL for an API path such as `/initiatives`
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.api_base_url, path)
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::with_base_url(DEFAULT_API_BASE_URL)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trailing_slash_stripped() {
        let config = ClientConfig::with_base_url("https://api.connectly.org/ ");
        assert_eq!(config.url("/login"), "https://api.connectly.org/login");
    }

    #[test]
    fn test_default_points_at_local_backend() {
        assert_eq!(ClientConfig::default().url("/initiatives"), "http://localhost:9090/initiatives");
    }
}
