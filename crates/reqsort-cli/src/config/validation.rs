use crate::config::ReqsortConfig;
use crate::error::{ConfigError, Result};
use reqsort_scan::resolve_under;
use std::path::PathBuf;

impl ReqsortConfig {
    /// Validate configuration against the filesystem.
    pub fn validate(&self) -> Result<()> {
        if !self.root.is_dir() {
            return Err(ConfigError::InvalidValue {
                field: "root".to_string(),
                value: self.root.display().to_string(),
                hint: "The root must be an existing directory".to_string(),
            }
            .into());
        }

        if self.output.as_os_str().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "output".to_string(),
                value: String::new(),
                hint: "Provide a file name such as sorted.txt".to_string(),
            }
            .into());
        }

        if self.output_path().is_dir() {
            return Err(ConfigError::InvalidValue {
                field: "output".to_string(),
                value: self.output.display().to_string(),
                hint: "The output must be a file, not a directory".to_string(),
            }
            .into());
        }

        Ok(())
    }

    /// Where the output file will be written.
    pub fn output_path(&self) -> PathBuf {
        resolve_under(&self.root, &self.output)
    }

    /// Replace `root` with its canonical absolute form.
    pub fn resolve_root(&mut self) -> Result<()> {
        self.root = std::fs::canonicalize(&self.root).map_err(|e| ConfigError::InvalidValue {
            field: "root".to_string(),
            value: self.root.display().to_string(),
            hint: format!("Could not resolve the directory: {e}"),
        })?;
        Ok(())
    }
}
