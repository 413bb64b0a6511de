/// Environment variable holding the API base URL.
pub const API_URL_ENV: &str = "BLOG_API_URL";

/// Base URL used when nothing else is configured.
pub const DEFAULT_API_URL: &str = "http://localhost:8000/api";

#[derive(Debug, Clone, PartialEq, Eq)]
/// Client configuration. Read once, then handed to `BlogClient::new`.
pub struct ClientConfig {
    /// Root address prefixed to every `/posts/...` path.
    pub base_url: String,
}

impl ClientConfig {
    /// Uses `base_url` as is.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    /// Reads `BLOG_API_URL`; missing or blank values fall back to
    /// [`DEFAULT_API_URL`].
    pub fn from_env() -> Self {
        Self::from_value(std::env::var(API_URL_ENV).ok())
    }

    /// Same fallback rules as [`ClientConfig::from_env`] for an already
    /// looked-up value.
    pub fn from_value(raw: Option<String>) -> Self {
        let base_url = raw
            .map(|value| value.trim().to_string())
            .filter(|value| !value.is_empty())
            .unwrap_or_else(|| DEFAULT_API_URL.to_string());
        Self { base_url }
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new(DEFAULT_API_URL)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_value_uses_default() {
        assert_eq!(ClientConfig::from_value(None).base_url, DEFAULT_API_URL);
    }

    #[test]
    fn blank_value_uses_default() {
        let config = ClientConfig::from_value(Some("   ".to_string()));
        assert_eq!(config, ClientConfig::default());
    }

    #[test]
    fn explicit_value_is_trimmed() {
        let config = ClientConfig::from_value(Some(" https://blog.example.com/api ".to_string()));
        assert_eq!(config.base_url, "https://blog.example.com/api");
    }
}
