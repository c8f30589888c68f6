use std::collections::BTreeMap;

use serde::Deserialize;

/// Runtime-level settings for the launcher. Every field falls back to the
/// built-in value when absent from the config file.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Container runtime binary.
    pub runtime: String,
    pub image: String,
    /// Script run inside the container.
    pub entrypoint: String,
    /// Directory inside the container under which every bind mount lands.
    pub mount_root: String,
    /// Pass `--nv` so the container sees the host GPUs.
    pub gpu: bool,
    /// Injected with `--env`, in key order.
    pub env: BTreeMap<String, String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            runtime: "singularity".to_string(),
            image: "docker://catgumag/alphafold:latest".to_string(),
            entrypoint: "/app/run_alphafold.sh".to_string(),
            mount_root: "/mnt".to_string(),
            gpu: true,
            env: BTreeMap::from([
                ("TF_FORCE_UNIFIED_MEMORY".to_string(), "1".to_string()),
                (
                    "XLA_PYTHON_CLIENT_MEM_FRACTION".to_string(),
                    "4.0".to_string(),
                ),
            ]),
        }
    }
}
