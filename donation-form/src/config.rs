// Form configuration
//
// Layered with the `config` crate: built-in defaults, then an optional TOML
// file, then `DONATION_FORM_*` environment variables.

use crate::models::options::{default_clothing_types, default_crisis_regions, ChoiceOption};
use crate::utils::validation::validate_office_prefix;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// First two digits of postal codes considered near the office (e.g. 10115 => "10").
pub const OFFICE_POSTCODE_PREFIX: &str = "10";

/// Session-store key the submitted record is written under.
pub const STORAGE_KEY: &str = "kleiderspende";

/// Where a successful submission navigates to.
pub const CONFIRM_LOCATION: &str = "confirm.html";

/// Config file picked up from the working directory when `--config` is not given.
pub const DEFAULT_CONFIG_FILE: &str = "donation-form.toml";

pub const ENV_PREFIX: &str = "DONATION_FORM";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormConfig {
    pub office_postcode_prefix: String,
    /// Overrides the resolved log folder.
    pub log_dir: Option<PathBuf>,
    pub clothing_types: Vec<ChoiceOption>,
    pub crisis_regions: Vec<ChoiceOption>,
}

impl Default for FormConfig {
    fn default() -> Self {
        Self {
            office_postcode_prefix: OFFICE_POSTCODE_PREFIX.to_string(),
            log_dir: None,
            clothing_types: default_clothing_types(),
            crisis_regions: default_crisis_regions(),
        }
    }
}

impl FormConfig {
    /// Load from `path` (required when given) or `donation-form.toml` (optional),
    /// then the process environment.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        Self::load_with_env(path, None)
    }

    /// Same as [`FormConfig::load`], reading environment overrides from `env`
    /// instead of the process environment when provided.
    pub fn load_with_env(
        path: Option<&Path>,
        env: Option<config::Map<String, String>>,
    ) -> Result<Self> {
        let file_source = match path {
            Some(p) => config::File::from(p).required(true),
            None => config::File::from(Path::new(DEFAULT_CONFIG_FILE)).required(false),
        };

        let settings = config::Config::builder()
            .add_source(file_source)
            .add_source(config::Environment::with_prefix(ENV_PREFIX).source(env))
            .build()
            .context("Failed to read form configuration")?;

        let cfg: FormConfig = settings
            .try_deserialize()
            .context("Form configuration has an invalid shape")?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn validate(&self) -> Result<()> {
        validate_office_prefix(&self.office_postcode_prefix)?;

        if self.clothing_types.is_empty() {
            return Err(anyhow::anyhow!("At least one clothing type must be configured"));
        }
        if self.crisis_regions.is_empty() {
            return Err(anyhow::anyhow!("At least one crisis region must be configured"));
        }
        if let Some(o) = self
            .clothing_types
            .iter()
            .chain(self.crisis_regions.iter())
            .find(|o| o.value.trim().is_empty())
        {
            return Err(anyhow::anyhow!(
                "Option '{}' has an empty value; empty means 'nothing selected'",
                o.label
            ));
        }

        Ok(())
    }

    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string_pretty(self).context("Failed to render configuration as TOML")
    }
}
