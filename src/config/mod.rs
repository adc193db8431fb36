use crate::core::context::Context;
use crate::utils::error::{ClientError, Result};
use crate::utils::validation::{validate_non_empty_string, validate_url, Validate};
use std::env;

pub const DEFAULT_BASE_URL: &str = "https://api.datahub.example.com";

/// Client configuration sourced from the environment, consumed once at
/// startup to build a [`Context`].
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub api_key: String,
    pub project: String,
    pub base_url: String,
}

impl ClientConfig {
    /// Read `API_KEY`, `PROJECT` and optional `BASE_URL`.
    pub fn from_env() -> Result<Self> {
        let config = Self {
            api_key: env::var("API_KEY").map_err(|_| ClientError::MissingConfigError {
                field: "API_KEY".to_string(),
            })?,
            project: env::var("PROJECT").map_err(|_| ClientError::MissingConfigError {
                field: "PROJECT".to_string(),
            })?,
            base_url: env::var("BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string()),
        };

        tracing::debug!(
            "loaded client config for project {} against {}",
            config.project,
            config.base_url
        );

        Ok(config)
    }

    /// Build the connection context the transport layer consumes.
    pub fn to_context(&self) -> Context {
        let mut ctx = Context::new();
        ctx.set_api_key(&self.api_key).set_project(&self.project);
        ctx
    }
}

impl Validate for ClientConfig {
    fn validate(&self) -> Result<()> {
        validate_non_empty_string("API_KEY", &self.api_key)?;
        validate_non_empty_string("PROJECT", &self.project)?;
        validate_url("BASE_URL", &self.base_url)?;
        Ok(())
    }
}
