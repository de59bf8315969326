//! Runtime configuration loaded from the environment (and `.env`).

use std::env;

use anyhow::{Context, Result};

use crate::contract::Branding;

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 8080;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    /// Origins allowed by CORS; empty means same-origin only
    pub allowed_origins: Vec<String>,
    pub branding: Branding,
}

impl AppConfig {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build the configuration from any key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| {
            lookup(key)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };

        let port = match get("PORT") {
            Some(raw) => raw
                .parse::<u16>()
                .with_context(|| format!("PORT must be a valid TCP port, got '{raw}'"))?,
            None => DEFAULT_PORT,
        };

        let allowed_origins = get("CORS_ALLOWED_ORIGINS")
            .map(|raw| {
                raw.split(',')
                    .map(str::trim)
                    .filter(|origin| !origin.is_empty())
                    .map(str::to_string)
                    .collect()
            })
            .unwrap_or_default();

        let defaults = Branding::default();
        let branding = Branding {
            name: get("BRAND_NAME").unwrap_or(defaults.name),
            website: get("BRAND_WEBSITE").unwrap_or(defaults.website),
            address: get("BRAND_ADDRESS").unwrap_or(defaults.address),
        };

        Ok(Self {
            host: get("HOST").unwrap_or_else(|| DEFAULT_HOST.to_string()),
            port,
            allowed_origins,
            branding,
        })
    }
}
