use anyhow::{Context, Result};
use std::env;
use url::Url;

/// Public summarizer backend, used when no override is configured.
pub const DEFAULT_BACKEND_URL: &str = "https://summarizer-backend-7my0.onrender.com";

#[derive(Debug, Clone)]
pub struct Config {
    pub backend_url: Url,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        // Try to load .env from multiple locations
        Self::try_load_dotenv();

        let raw = env::var("SUMMARIZER_BACKEND_URL")
            .unwrap_or_else(|_| DEFAULT_BACKEND_URL.to_string());

        Self::with_backend(&raw)
    }

    /// Build a config from an explicit backend origin (CLI override, tests).
    pub fn with_backend(raw: &str) -> Result<Self> {
        // A trailing slash would double up when the request path is appended
        let backend_url = Url::parse(raw.trim_end_matches('/')).with_context(|| {
            format!(
                "Invalid backend URL: {}\n\n\
                Expected an origin like http://127.0.0.1:5000 or a full https URL.",
                raw
            )
        })?;

        Ok(Self { backend_url })
    }

    fn try_load_dotenv() {
        // Try locations in order of preference:

        // 1. Current directory (for development)
        if dotenvy::dotenv().is_ok() {
            return;
        }

        // 2. ~/.config/summarize-topic/.env (standard config location)
        if let Some(config_dir) = dirs::config_dir() {
            let config_path = config_dir.join("summarize-topic").join(".env");
            if config_path.exists() {
                if dotenvy::from_path(&config_path).is_ok() {
                    return;
                }
            }
        }

        // 3. ~/.env (home directory)
        if let Some(home_dir) = dirs::home_dir() {
            let home_path = home_dir.join(".env");
            if home_path.exists() {
                let _ = dotenvy::from_path(&home_path);
            }
        }

        // If none found, that's okay - the built-in default backend applies
    }
}
