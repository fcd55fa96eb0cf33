use std::env;
use std::time::Duration;

const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8082";
const DEFAULT_API_URL: &str = "http://127.0.0.1:8082/api.php";
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Endpoints of the commerce backend.
#[derive(Debug, Clone)]
pub struct CommerceConfig {
    /// Site base, used to resolve media paths.
    pub base_url: String,
    /// The single JSON endpoint.
    pub api_url: String,
    pub timeout: Duration,
}

impl CommerceConfig {
    /// Environment variables:
    /// - COMMERCE_BASE_URL (default: "http://127.0.0.1:8082")
    /// - COMMERCE_API_URL (default: "http://127.0.0.1:8082/api.php")
    /// - COMMERCE_TIMEOUT_SECS (default: 30)
    pub fn from_env() -> Self {
        Self::from_values(
            env::var("COMMERCE_BASE_URL").ok(),
            env::var("COMMERCE_API_URL").ok(),
            env::var("COMMERCE_TIMEOUT_SECS").ok(),
        )
    }

    fn from_values(
        base_url: Option<String>,
        api_url: Option<String>,
        timeout_secs: Option<String>,
    ) -> Self {
        let base_url = non_blank(base_url).unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        let api_url = non_blank(api_url).unwrap_or_else(|| DEFAULT_API_URL.to_string());
        let timeout_secs = timeout_secs
            .and_then(|raw| raw.trim().parse::<u64>().ok())
            .filter(|secs| *secs > 0)
            .unwrap_or(DEFAULT_TIMEOUT_SECS);

        Self {
            base_url,
            api_url,
            timeout: Duration::from_secs(timeout_secs),
        }
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_use_local_development_endpoints_by_default() {
        let config = CommerceConfig::from_values(None, None, None);

        assert_eq!(config.base_url, "http://127.0.0.1:8082");
        assert_eq!(config.api_url, "http://127.0.0.1:8082/api.php");
        assert_eq!(config.timeout, Duration::from_secs(30));
    }

    #[test]
    fn should_prefer_supplied_endpoints() {
        let config = CommerceConfig::from_values(
            Some("https://shop.example.com".to_string()),
            Some("https://shop.example.com/api.php".to_string()),
            Some("5".to_string()),
        );

        assert_eq!(config.base_url, "https://shop.example.com");
        assert_eq!(config.api_url, "https://shop.example.com/api.php");
        assert_eq!(config.timeout, Duration::from_secs(5));
    }

    #[test]
    fn should_ignore_blank_or_invalid_values() {
        let config = CommerceConfig::from_values(Some("  ".to_string()), None, Some("0".to_string()));

        assert_eq!(config.base_url, "http://127.0.0.1:8082");
        assert_eq!(config.timeout, Duration::from_secs(30));
    }
}
