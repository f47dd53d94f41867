use crate::config::{
    CONFIG_FILE_NAME, ConfigOverrides, ENV_KEYS, ENV_PREFIX, ReqsortConfig, default_output,
    default_root,
};
use crate::error::{ConfigError, Result};
use figment::{
    Figment,
    providers::{Env, Format as _, Json, Serialized, Toml},
};
use reqsort_graph::CycleCheck;
use std::path::{Path, PathBuf};
use tracing::debug;

impl ReqsortConfig {
    /// Load configuration from multiple sources.
    /// Priority: CLI args > environment variables > config file > defaults
    pub fn load(overrides: &ConfigOverrides, config_path: Option<&Path>) -> Result<Self> {
        let mut figment = Figment::new().merge(Serialized::defaults(Self::default_config()));

        if let Some(path) = Self::locate_file(overrides, config_path)? {
            debug!(path = %path.display(), "Loading config file");
            figment = match path.extension().and_then(|ext| ext.to_str()) {
                Some("json") => figment.merge(Json::file(path)),
                _ => figment.merge(Toml::file(path)),
            };
        }

        // REQSORT_MODE, REQSORT_CYCLE_CHECK, ...
        figment = figment.merge(Env::prefixed(ENV_PREFIX).only(ENV_KEYS));

        figment = figment.merge(Serialized::defaults(overrides));

        figment
            .extract()
            .map_err(|e| ConfigError::Extract(e.to_string()).into())
    }

    /// Load, validate and canonicalize the root in one step.
    pub fn load_resolved(overrides: &ConfigOverrides, config_path: Option<&Path>) -> Result<Self> {
        let mut config = Self::load(overrides, config_path)?;
        config.validate()?;
        config.resolve_root()?;
        Ok(config)
    }

    /// Explicit path, else `reqsort.toml` in the root, else in the working
    /// directory.
    fn locate_file(overrides: &ConfigOverrides, explicit: Option<&Path>) -> Result<Option<PathBuf>> {
        if let Some(path) = explicit {
            if !path.is_file() {
                return Err(ConfigError::NotFound(path.to_path_buf()).into());
            }
            return Ok(Some(path.to_path_buf()));
        }

        let root = overrides.root.clone().unwrap_or_else(default_root);
        Ok([root.join(CONFIG_FILE_NAME), PathBuf::from(CONFIG_FILE_NAME)]
            .into_iter()
            .find(|candidate| candidate.is_file()))
    }

    /// Get default configuration values.
    pub fn default_config() -> Self {
        Self {
            root: default_root(),
            mode: Default::default(),
            output: default_output(),
            cycle_check: CycleCheck::Strict,
            follow_links: false,
        }
    }
}
