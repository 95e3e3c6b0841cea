use std::env;

use log::{debug, error, info};
use url::Url;

use crate::error::{BotError, Result};

const DEFAULT_GIPHY_API_URL: &str = "https://api.giphy.com";

#[derive(Debug, Clone)]
pub struct Config {
    pub discord_token: String,
    pub giphy_api_key: String,
    pub giphy_api_url: Url,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        debug!("Loading configuration from environment");
        dotenvy::dotenv().ok();

        let discord_token = env::var("DISCORD_TOKEN").map_err(|e| {
            error!("Failed to load DISCORD_TOKEN from environment: {}", e);
            e
        })?;

        let giphy_api_key = env::var("GIPHY_API_KEY").map_err(|e| {
            error!("Failed to load GIPHY_API_KEY from environment: {}", e);
            e
        })?;

        let giphy_api_url = env::var("GIPHY_API_URL").ok();
        let giphy_api_url = parse_api_url(giphy_api_url.as_deref())?;

        info!("Configuration loaded successfully");
        debug!("Discord token length: {} characters", discord_token.len());
        debug!("GIPHY API key length: {} characters", giphy_api_key.len());
        debug!("GIPHY API URL: {}", giphy_api_url);

        Ok(Self {
            discord_token,
            giphy_api_key,
            giphy_api_url,
        })
    }
}

/// Parse the search API base URL, falling back to the public GIPHY host.
fn parse_api_url(raw: Option<&str>) -> Result<Url> {
    let raw = raw.map(str::trim).filter(|s| !s.is_empty());
    let url = Url::parse(raw.unwrap_or(DEFAULT_GIPHY_API_URL))?;

    if url.cannot_be_a_base() || !matches!(url.scheme(), "http" | "https") {
        return Err(BotError::Config(format!(
            "GIPHY_API_URL must be an http(s) base URL, got '{url}'"
        )));
    }

    Ok(url)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_url_uses_default() -> Result<()> {
        let url = parse_api_url(None)?;
        assert_eq!(url.as_str(), "https://api.giphy.com/");
        Ok(())
    }

    #[test]
    fn blank_url_uses_default() -> Result<()> {
        let url = parse_api_url(Some("   "))?;
        assert_eq!(url.host_str(), Some("api.giphy.com"));
        Ok(())
    }

    #[test]
    fn custom_url_is_kept() -> Result<()> {
        let url = parse_api_url(Some("http://127.0.0.1:8080"))?;
        assert_eq!(url.port(), Some(8080));
        Ok(())
    }

    #[test]
    fn non_http_url_is_rejected() {
        assert!(matches!(
            parse_api_url(Some("mailto:bot@example.com")),
            Err(BotError::Config(_))
        ));
    }

    #[test]
    fn garbage_url_is_rejected() {
        assert!(matches!(
            parse_api_url(Some("not a url")),
            Err(BotError::Url(_))
        ));
    }
}
