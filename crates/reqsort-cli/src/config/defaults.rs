use std::path::PathBuf;

/// Config file looked up in the root and then the working directory.
pub const CONFIG_FILE_NAME: &str = "reqsort.toml";

/// Prefix of configuration environment variables (`REQSORT_MODE`, ...).
pub const ENV_PREFIX: &str = "REQSORT_";

/// Keys accepted from the environment.
pub const ENV_KEYS: &[&str] = &["root", "mode", "output", "cycle_check", "follow_links"];

pub fn default_root() -> PathBuf {
    PathBuf::from(".")
}

pub fn default_output() -> PathBuf {
    PathBuf::from("sorted.txt")
}
