use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Render options loadable from YAML. Unset fields fall back to CLI
/// arguments and built-in defaults.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PlotConfig {
    pub grid_degrees: Option<f64>,
    pub document_name: Option<String>,
}

impl PlotConfig {
    pub fn load<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let path_ref = path.as_ref();
        let contents = fs::read_to_string(path_ref)
            .with_context(|| format!("reading plot config {}", path_ref.display()))?;
        let config: PlotConfig = serde_yaml::from_str(&contents)
            .with_context(|| format!("parsing plot config {}", path_ref.display()))?;
        Ok(config)
    }
}
