//! Configuration file support for cvarbook.
//!
//! Loads optional `.cvarbook/config.toml` from the working directory.

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::categorize::{self, CategoryRule};

/// Root configuration structure
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(default)]
pub struct CvarbookConfig {
    /// Catalog CSV path used when `--data` is not given.
    pub data_file: Option<PathBuf>,
    /// Favorites file path used when `--favorites` is not given.
    pub favorites_file: Option<PathBuf>,
    /// Extra category rules, evaluated before the built-in table.
    /// Example: `[[extra_rules]] label = "Movement" needles = ["gravity"]`
    #[serde(default)]
    pub extra_rules: Vec<ExtraRule>,
}

/// A user-supplied category rule.
#[derive(Debug, Clone, Deserialize)]
pub struct ExtraRule {
    pub label: String,
    #[serde(default)]
    pub needles: Vec<String>,
}

impl CvarbookConfig {
    /// Load config from `.cvarbook/config.toml` in the given root directory.
    /// Returns default config if the file doesn't exist or is invalid.
    pub fn load(root: &Path) -> Self {
        let config_path = root.join(".cvarbook").join("config.toml");
        Self::load_from_path(&config_path)
    }

    /// Load config from a specific path.
    pub fn load_from_path(path: &Path) -> Self {
        if !path.exists() {
            return Self::default();
        }

        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(config) => config,
                Err(err) => {
                    eprintln!("[cvarbook][warn] failed to parse {}: {}", path.display(), err);
                    Self::default()
                }
            },
            Err(err) => {
                eprintln!("[cvarbook][warn] failed to read {}: {}", path.display(), err);
                Self::default()
            }
        }
    }

    /// The effective rule table: extra rules first, then the built-ins.
    /// Needles are lowercased so they match the categorizer's comparison.
    pub fn category_rules(&self) -> Vec<CategoryRule> {
        let mut rules: Vec<CategoryRule> = self
            .extra_rules
            .iter()
            .map(|rule| CategoryRule {
                label: rule.label.clone(),
                needles: rule.needles.iter().map(|n| n.to_lowercase()).collect(),
            })
            .collect();
        rules.extend(categorize::builtin_rules().iter().cloned());
        rules
    }
}
