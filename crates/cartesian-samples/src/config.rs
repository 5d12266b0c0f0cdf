// File: crates/cartesian-samples/src/config.rs
// Summary: Harness configuration loaded from TOML, with CLI overrides applied on top.

use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::Deserialize;

#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct HarnessConfig {
    /// Root directory for PNG and CSV output; each page writes into its own subdirectory.
    pub output_dir: PathBuf,
    /// Seed for the random category generator.
    pub seed: u64,
    /// Write PNG snapshots and fire save controls.
    pub export: bool,
    /// Dump each page's final datasets as CSV.
    pub dump_csv: bool,
    /// Theme preset name (`light` or `dark`).
    pub theme: String,
    /// Width of full-width charts.
    pub page_width: u32,
    /// Refresh budget per animation run.
    pub max_frames: u64,
}

impl Default for HarnessConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("target/out"),
            seed: 42,
            export: true,
            dump_csv: false,
            theme: "light".to_string(),
            page_width: 800,
            max_frames: 1_000,
        }
    }
}

impl HarnessConfig {
    pub fn from_toml(text: &str) -> anyhow::Result<Self> {
        toml::from_str(text).context("invalid harness configuration")
    }

    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let text = std::fs::read_to_string(path).with_context(|| format!("reading config '{}'", path.display()))?;
        Self::from_toml(&text).with_context(|| format!("in '{}'", path.display()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_file_keeps_defaults() {
        let cfg = HarnessConfig::from_toml("seed = 7\ntheme = \"dark\"\n").unwrap();
        assert_eq!(cfg.seed, 7);
        assert_eq!(cfg.theme, "dark");
        assert_eq!(cfg.page_width, 800);
        assert!(cfg.export);
    }

    #[test]
    fn unknown_keys_are_rejected() {
        assert!(HarnessConfig::from_toml("colour = \"red\"").is_err());
    }
}
