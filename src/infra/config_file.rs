// ============================================================
// Layer 6 — Build Config Files
// ============================================================
// Saves and loads a BuildConfig as pretty-printed JSON so a
// glossary build can be repeated without retyping paths.
//
// Example glossary.json:
//   {
//     "input": "data/terms.txt",
//     "output_dir": "site",
//     "create_output_dir": true,
//     "self_links": true,
//     "dry_run": false
//   }
//
// Every field may be left out. The CLI prompts for a missing
// input or output_dir; other missing fields fall back to
// BuildConfig::default().
//
// Reference: Rust Book §9 (Error Handling)
//            serde_json documentation

use anyhow::{Context, Result};
use serde::Deserialize;
use std::{fs, path::Path};

use crate::application::build_use_case::BuildConfig;

/// A config file as written, before defaults are filled in.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ConfigFile {
    pub input:             Option<String>,
    pub output_dir:        Option<String>,
    pub create_output_dir: Option<bool>,
    pub self_links:        Option<bool>,
    pub dry_run:           Option<bool>,
}

impl ConfigFile {
    /// Fill every missing field from BuildConfig::default().
    pub fn into_config(self) -> BuildConfig {
        let defaults = BuildConfig::default();
        BuildConfig {
            input:             self.input.unwrap_or(defaults.input),
            output_dir:        self.output_dir.unwrap_or(defaults.output_dir),
            create_output_dir: self.create_output_dir.unwrap_or(defaults.create_output_dir),
            self_links:        self.self_links.unwrap_or(defaults.self_links),
            dry_run:           self.dry_run.unwrap_or(defaults.dry_run),
        }
    }
}

/// Read a config file from JSON.
pub fn load_config(path: impl AsRef<Path>) -> Result<ConfigFile> {
    let path = path.as_ref();

    let json = fs::read_to_string(path)
        .with_context(|| format!("Cannot read config from '{}'", path.display()))?;

    let file = serde_json::from_str(&json)
        .with_context(|| format!("Invalid config in '{}'", path.display()))?;

    tracing::debug!("Loaded build config from '{}'", path.display());
    Ok(file)
}

/// Write a BuildConfig to a JSON file.
pub fn save_config(path: impl AsRef<Path>, cfg: &BuildConfig) -> Result<()> {
    let path = path.as_ref();

    let json = serde_json::to_string_pretty(cfg)?;

    fs::write(path, json)
        .with_context(|| format!("Cannot write config to '{}'", path.display()))?;

    tracing::info!("Saved build config to '{}'", path.display());
    Ok(())
}
