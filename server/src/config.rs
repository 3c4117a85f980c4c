use config::{ConfigBuilder, Environment, File, builder::DefaultState};
use eyre::WrapErr;
use serde::Deserialize;
use types::Result;
use url::Url;

#[derive(Clone, Debug, Deserialize)]
pub struct Config {
    /// Base URL of the backend that owns the activation endpoint.
    pub api_url: Url,
}

impl Config {
    /// `confirmation.toml` (optional), overridden by `CONFIRMATION_*` env vars.
    pub fn load() -> Result<Self> {
        Self::from_builder(
            config::Config::builder()
                .add_source(File::with_name("confirmation").required(false))
                .add_source(Environment::with_prefix("CONFIRMATION")),
        )
    }

    fn from_builder(builder: ConfigBuilder<DefaultState>) -> Result<Self> {
        let config = builder
            .build()
            .wrap_err("failed to read configuration")?
            .try_deserialize()
            .wrap_err("invalid configuration")?;
        Ok(config)
    }
}
