//! Stress test configuration files.
//!
//! The format is picked from the file extension: `.toml`, `.yaml`/`.yml`,
//! or `.json`. Missing fields fall back to [`StressTestConfig::default`].

use std::fs;
use std::path::Path;

use portstress_sim::StressTestConfig;
use tracing::debug;

use crate::error::{CliError, CliResult};

/// Loads a stress test configuration from `path`.
pub fn load_config(path: &Path) -> CliResult<StressTestConfig> {
    let contents = fs::read_to_string(path)?;
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase)
        .unwrap_or_default();

    debug!(path = %path.display(), format = %extension, "loading configuration");
    parse_config(&contents, &extension)
}

fn parse_config(contents: &str, extension: &str) -> CliResult<StressTestConfig> {
    match extension {
        "toml" => toml::from_str(contents).map_err(|e| CliError::Config(e.to_string())),
        "yaml" | "yml" => {
            serde_yaml::from_str(contents).map_err(|e| CliError::Config(e.to_string()))
        }
        "json" => serde_json::from_str(contents).map_err(|e| CliError::Config(e.to_string())),
        other => Err(CliError::Config(format!(
            "unsupported config file extension '{other}'; use .toml, .yaml, .yml or .json"
        ))),
    }
}
