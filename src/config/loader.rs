use std::path::Path;

use anyhow::{Context, Result};

use super::types::Config;

/// File name looked up in the working directory when no `--config` is given.
pub const CONFIG_FILE: &str = ".alphafold-singularity.yaml";

/// Load config from an explicit file, or from [`CONFIG_FILE`] in `dir`.
///
/// An explicit path must exist. The implicit file is optional and its absence
/// yields the defaults.
pub fn load(dir: &Path, explicit: Option<&Path>) -> Result<Config> {
    let path = match explicit {
        Some(p) => p.to_path_buf(),
        None => {
            let p = dir.join(CONFIG_FILE);
            if !p.exists() {
                return Ok(Config::default());
            }
            p
        }
    };

    let contents = std::fs::read_to_string(&path)
        .with_context(|| format!("failed to read config {}", path.display()))?;
    // An empty file deserializes to unit, not to a map.
    if contents.trim().is_empty() {
        return Ok(Config::default());
    }
    let config: Config = serde_yaml::from_str(&contents)
        .with_context(|| format!("invalid config {}", path.display()))?;
    tracing::debug!(path = %path.display(), "loaded config");
    Ok(config)
}
