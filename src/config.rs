// src/config.rs
use crate::constants::{
    ENV_CATEGORIES_DATABASE_ID, ENV_NOTION_API_BASE_URL, ENV_NOTION_TOKEN,
    ENV_PROMPTS_DATABASE_ID, NOTION_API_BASE_URL,
};
use crate::error::AppError;
use crate::types::{ApiKey, DatabaseId, ValidatedUrl};
use clap::Parser;
use std::net::SocketAddr;

/// Parsed command-line input for the server binary.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct CommandLineInput {
    /// Address to bind the HTTP server to
    #[arg(long, env = "PROMPT_DIRECTORY_HOST", default_value = "127.0.0.1")]
    pub host: String,

    /// Port to listen on
    #[arg(short, long, env = "PROMPT_DIRECTORY_PORT", default_value_t = 3000)]
    pub port: u16,

    /// Allowed CORS origin for browser clients (repeatable)
    #[arg(long = "cors-origin")]
    pub cors_origins: Vec<String>,

    /// Enable verbose logging (debug level)
    #[arg(short, long, default_value_t = false)]
    pub verbose: bool,
}

/// Resolved server configuration.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub bind_addr: SocketAddr,
    pub cors_origins: Vec<String>,
    pub verbose: bool,
}

impl ServerConfig {
    /// Resolves the listening address and CORS origins from CLI input.
    pub fn resolve(cli: &CommandLineInput) -> Result<Self, AppError> {
        let bind_addr = format!("{}:{}", cli.host, cli.port)
            .parse::<SocketAddr>()
            .map_err(|e| {
                AppError::MissingConfiguration(format!(
                    "Invalid bind address {}:{}: {}",
                    cli.host, cli.port, e
                ))
            })?;

        for origin in &cli.cors_origins {
            ValidatedUrl::parse(origin)?;
        }

        Ok(Self {
            bind_addr,
            cors_origins: cli.cors_origins.clone(),
            verbose: cli.verbose,
        })
    }
}

/// Connection settings for the Notion workspace.
///
/// Values are captured as-is at startup and only validated when a request
/// needs them, so a server with an incomplete `.env` still starts and
/// reports the missing piece on the first call that uses it.
#[derive(Clone, Default)]
pub struct NotionSettings {
    pub token: Option<String>,
    pub prompts_database: Option<String>,
    pub categories_database: Option<String>,
    pub api_base_url: Option<String>,
}

impl NotionSettings {
    /// Reads the settings from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Reads the settings through an arbitrary lookup; blank values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let read = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        Self {
            token: read(ENV_NOTION_TOKEN),
            prompts_database: read(ENV_PROMPTS_DATABASE_ID),
            categories_database: read(ENV_CATEGORIES_DATABASE_ID),
            api_base_url: read(ENV_NOTION_API_BASE_URL),
        }
    }

    /// The validated integration token.
    pub fn api_key(&self) -> Result<ApiKey, AppError> {
        let token = self.token.as_deref().ok_or_else(|| {
            AppError::MissingConfiguration(format!(
                "{} environment variable is not set",
                ENV_NOTION_TOKEN
            ))
        })?;
        ApiKey::new(token).map_err(|e| {
            AppError::MissingConfiguration(format!(
                "{} is not a valid integration token: {}",
                ENV_NOTION_TOKEN, e
            ))
        })
    }

    /// The database holding prompt records.
    pub fn prompts_database(&self) -> Result<DatabaseId, AppError> {
        Self::database(self.prompts_database.as_deref(), ENV_PROMPTS_DATABASE_ID)
    }

    /// The database holding category records.
    pub fn categories_database(&self) -> Result<DatabaseId, AppError> {
        Self::database(
            self.categories_database.as_deref(),
            ENV_CATEGORIES_DATABASE_ID,
        )
    }

    /// The Notion API base address, defaulting to the public endpoint.
    pub fn api_base_url(&self) -> Result<ValidatedUrl, AppError> {
        let raw = self.api_base_url.as_deref().unwrap_or(NOTION_API_BASE_URL);
        ValidatedUrl::parse(raw).map_err(|e| {
            AppError::MissingConfiguration(format!(
                "{} is not a valid URL: {}",
                ENV_NOTION_API_BASE_URL, e
            ))
        })
    }

    fn database(value: Option<&str>, variable: &str) -> Result<DatabaseId, AppError> {
        let raw = value.ok_or_else(|| {
            AppError::MissingConfiguration(format!("{} environment variable is not set", variable))
        })?;
        DatabaseId::parse(raw).map_err(|e| {
            AppError::MissingConfiguration(format!("{} is not a valid database ID: {}", variable, e))
        })
    }
}

impl std::fmt::Debug for NotionSettings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NotionSettings")
            .field("token", &self.token.as_ref().map(|_| "<redacted>"))
            .field("prompts_database", &self.prompts_database)
            .field("categories_database", &self.categories_database)
            .field("api_base_url", &self.api_base_url)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn settings(pairs: &[(&str, &str)]) -> NotionSettings {
        let env: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        NotionSettings::from_lookup(|key| env.get(key).cloned())
    }

    #[test]
    fn test_missing_values_fail_on_use() {
        let settings = settings(&[]);
        let err = settings.prompts_database().unwrap_err();
        assert_eq!(
            err.to_string(),
            "Missing configuration: NOTION_PROMPTS_DATABASE_ID environment variable is not set"
        );
        assert!(matches!(
            settings.api_key(),
            Err(AppError::MissingConfiguration(_))
        ));
    }

    #[test]
    fn test_blank_values_count_as_unset() {
        let settings = settings(&[(ENV_CATEGORIES_DATABASE_ID, "   ")]);
        assert!(settings.categories_database.is_none());
    }

    #[test]
    fn test_database_ids_accept_urls() {
        let settings = settings(&[(
            ENV_PROMPTS_DATABASE_ID,
            "https://www.notion.so/ws/0123456789abcdef0123456789abcdef?v=1",
        )]);
        assert_eq!(
            settings.prompts_database().unwrap().as_str(),
            "0123456789abcdef0123456789abcdef"
        );
    }

    #[test]
    fn test_malformed_token_is_a_configuration_error() {
        let settings = settings(&[(ENV_NOTION_TOKEN, "not-a-token")]);
        let err = settings.api_key().unwrap_err();
        assert!(matches!(err, AppError::MissingConfiguration(_)));
        assert!(!err.is_client_error());
    }

    #[test]
    fn test_default_base_url() {
        let settings = settings(&[]);
        assert_eq!(
            settings.api_base_url().unwrap().as_base(),
            "https://api.notion.com/v1"
        );
    }

    #[test]
    fn test_server_config_resolution() {
        let cli = CommandLineInput {
            host: "0.0.0.0".to_string(),
            port: 8080,
            cors_origins: vec!["http://localhost:5173".to_string()],
            verbose: false,
        };
        let config = ServerConfig::resolve(&cli).unwrap();
        assert_eq!(config.bind_addr.port(), 8080);

        let bad = CommandLineInput {
            cors_origins: vec!["not an origin".to_string()],
            ..cli
        };
        assert!(ServerConfig::resolve(&bad).is_err());
    }
}
