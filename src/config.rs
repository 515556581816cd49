use tracing::info;

/// Application configuration, read once at startup.
/// In debug builds a `.env` file is loaded first.
#[derive(Clone, Debug)]
pub struct Config {
    /// Base URL of the creations API.
    pub api_base_url: String,
    /// Base URL of the identity provider. Defaults to the API base URL.
    pub identity_base_url: String,
}

const DEFAULT_API_URL: &str = "http://localhost:3000";

impl Config {
    /// Load configuration from environment variables.
    pub fn load() -> Self {
        #[cfg(debug_assertions)]
        if dotenvy::dotenv().is_ok() {
            info!("Config: loaded .env file");
        }

        let api_base_url = std::env::var("ATELIER_API_URL")
            .map(normalize_base_url)
            .unwrap_or_else(|_| DEFAULT_API_URL.to_string());

        let identity_base_url = std::env::var("ATELIER_IDENTITY_URL")
            .map(normalize_base_url)
            .unwrap_or_else(|_| api_base_url.clone());

        info!("Config: API base URL {}", api_base_url);
        info!("Config: identity base URL {}", identity_base_url);

        Self {
            api_base_url,
            identity_base_url,
        }
    }
}

/// Endpoint paths are appended with a leading slash, so the base must not
/// carry a trailing one.
fn normalize_base_url(url: String) -> String {
    url.trim_end_matches('/').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_url_loses_trailing_slashes() {
        assert_eq!(
            normalize_base_url("http://localhost:3000/".to_string()),
            "http://localhost:3000"
        );
        assert_eq!(
            normalize_base_url("https://api.example.com".to_string()),
            "https://api.example.com"
        );
    }
}
