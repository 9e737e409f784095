//! This module handles the application's configuration, including loading and
//! saving user preferences to a `settings.toml` file.
//!
//! # Examples
//!
//! ```no_run
//! use dirsync::config::{self, Config};
//!
//! // Load existing configuration
//! let mut config = config::load().unwrap_or_default();
//!
//! // Remember a preferred language
//! config.language = Some("ar".to_string());
//!
//! // Save the modified configuration
//! config::save(&config).expect("Failed to save config");
//! ```

use crate::error::Result;
use crate::layout::{LayoutEngine, StylesheetIds};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";
const APP_NAME: &str = "DirSync";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Preferred language declaration (BCP-47 form, e.g. `fa` or `ar-SA`).
    pub language: Option<String>,
    /// Additional RTL primary subtags honored on top of the built-in set.
    /// The built-in set is never shrunk.
    #[serde(default)]
    pub extra_rtl_codes: Vec<String>,
    /// Identifier of the RTL stylesheet resource, when it differs from the
    /// default `rtl-styles`.
    #[serde(default)]
    pub rtl_stylesheet: Option<String>,
    /// Identifier of the LTR stylesheet resource, when it differs from the
    /// default `ltr-styles`.
    #[serde(default)]
    pub ltr_stylesheet: Option<String>,
}

impl Config {
    /// Stylesheet identifiers with defaults filled in.
    #[must_use]
    pub fn stylesheet_ids(&self) -> StylesheetIds {
        let mut ids = StylesheetIds::default();
        if let Some(rtl) = &self.rtl_stylesheet {
            ids.rtl = rtl.clone();
        }
        if let Some(ltr) = &self.ltr_stylesheet {
            ids.ltr = ltr.clone();
        }
        ids
    }

    /// Builds the layout engine described by this configuration.
    #[must_use]
    pub fn layout_engine(&self) -> LayoutEngine {
        LayoutEngine::new(self.stylesheet_ids()).with_extra_rtl_codes(&self.extra_rtl_codes)
    }
}

fn get_default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path.push(CONFIG_FILE);
        path
    })
}

pub fn load() -> Result<Config> {
    if let Some(path) = get_default_config_path() {
        if path.exists() {
            return load_from_path(&path);
        }
    }
    Ok(Config::default())
}

pub fn save(config: &Config) -> Result<()> {
    if let Some(path) = get_default_config_path() {
        return save_to_path(config, &path);
    }
    Ok(())
}

pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    Ok(toml::from_str(&content).unwrap_or_default())
}

pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config)?;
    fs::write(path, content)?;
    Ok(())
}
