use anyhow::{anyhow, Context, Result};
use std::env;
use tracing::debug;

use crate::api_connection::endpoints::{Provider, DEFAULT_MODEL, DEFAULT_OLLAMA_URL};
use crate::conversion::REFERENCE_TEMPERATURE_C;

pub const OLLAMA_URL_ENV_VAR: &str = "OLLAMA_URL";
pub const OLLAMA_MODEL_ENV_VAR: &str = "OLLAMA_MODEL";
pub const KITCHEN_TEMPERATURE_ENV_VAR: &str = "KITCHEN_TEMPERATURE_C";

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub ollama_url: String,
    pub model: String,
    pub kitchen_temperature_c: f64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            ollama_url: DEFAULT_OLLAMA_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
            kitchen_temperature_c: REFERENCE_TEMPERATURE_C,
        }
    }
}

impl AppConfig {
    /// Reads the process environment, after loading `.env` if there is one.
    pub fn from_env() -> Result<Self> {
        dotenv::dotenv().ok();
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Builds the config from any variable source; unset or blank variables
    /// fall back to the defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let defaults = Self::default();
        let read = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());

        let kitchen_temperature_c = match read(KITCHEN_TEMPERATURE_ENV_VAR) {
            Some(raw) => parse_temperature(&raw)
                .with_context(|| format!("Invalid {} value '{}'", KITCHEN_TEMPERATURE_ENV_VAR, raw))?,
            None => defaults.kitchen_temperature_c,
        };

        let config = Self {
            ollama_url: read(OLLAMA_URL_ENV_VAR).unwrap_or(defaults.ollama_url),
            model: read(OLLAMA_MODEL_ENV_VAR).unwrap_or(defaults.model),
            kitchen_temperature_c,
        };
        debug!(?config, "resolved configuration");
        Ok(config)
    }

    /// Applies command-line overrides on top of the environment values.
    pub fn with_overrides(
        mut self,
        ollama_url: Option<String>,
        model: Option<String>,
        temperature_c: Option<f64>,
    ) -> Self {
        if let Some(url) = ollama_url {
            self.ollama_url = url;
        }
        if let Some(model) = model {
            self.model = model;
        }
        if let Some(temperature_c) = temperature_c {
            self.kitchen_temperature_c = temperature_c;
        }
        self
    }

    pub fn provider(&self) -> Provider {
        Provider::ollama(self.ollama_url.clone(), self.model.clone())
    }
}

fn parse_temperature(raw: &str) -> Result<f64> {
    let value: f64 = raw.trim().parse()?;
    if !value.is_finite() {
        return Err(anyhow!("temperature must be finite"));
    }
    Ok(value)
}
