//! Planner configuration.
//!
//! Handles loading, validating, and merging `wochenplan.toml`. Stock defaults
//! are the base layer; the user file only needs the keys it wants to change.
//!
//! ## Configuration Options
//!
//! ```toml
//! # All options are optional - defaults shown below
//!
//! output_dir = "wochenplaene"   # Where plans, aliases and index.html live
//! generation_day = "friday"     # Weekday on which unforced runs may generate
//! quick_max_minutes = 15        # Upper bound (inclusive) for a quick meal
//!
//! [index]
//! title = "Alle Wochenplaene"   # Heading of index.html
//! ```
//!
//! A missing file yields the defaults. Unknown keys are rejected to catch
//! typos early.

use chrono::Weekday;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::select::SelectionRules;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("TOML serialize error: {0}")]
    Serialize(#[from] toml::ser::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Planner configuration loaded from `wochenplan.toml`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PlannerConfig {
    /// Directory holding plan files, aliases and the index.
    pub output_dir: String,
    /// English weekday name or abbreviation (`friday`, `Fri`).
    pub generation_day: String,
    /// Meals whose preparation time parses to at most this many minutes are quick.
    pub quick_max_minutes: u32,
    /// Index page settings.
    pub index: IndexConfig,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            output_dir: "wochenplaene".to_string(),
            generation_day: "friday".to_string(),
            quick_max_minutes: 15,
            index: IndexConfig::default(),
        }
    }
}

impl PlannerConfig {
    /// Validate config values are within acceptable ranges.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.output_dir.trim().is_empty() {
            return Err(ConfigError::Validation(
                "output_dir must not be empty".into(),
            ));
        }
        if self.quick_max_minutes == 0 {
            return Err(ConfigError::Validation(
                "quick_max_minutes must be greater than 0".into(),
            ));
        }
        self.generation_weekday()?;
        Ok(())
    }

    pub fn generation_weekday(&self) -> Result<Weekday, ConfigError> {
        self.generation_day.parse().map_err(|_| {
            ConfigError::Validation(format!(
                "generation_day '{}' is not a weekday",
                self.generation_day
            ))
        })
    }

    pub fn output_path(&self) -> PathBuf {
        PathBuf::from(&self.output_dir)
    }

    pub fn selection_rules(&self) -> SelectionRules {
        SelectionRules {
            quick_max_minutes: self.quick_max_minutes,
        }
    }
}

/// Index page settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct IndexConfig {
    pub title: String,
}

impl Default for IndexConfig {
    fn default() -> Self {
        Self {
            title: "Alle Wochenplaene".to_string(),
        }
    }
}

// =============================================================================
// Config loading, merging, and validation
// =============================================================================

/// Returns the stock default config as a `toml::Value::Table`.
pub fn stock_defaults_value() -> Result<toml::Value, ConfigError> {
    Ok(toml::Value::try_from(PlannerConfig::default())?)
}

/// Recursively merge `overlay` on top of `base`.
///
/// - Tables are merged key-by-key (overlay keys override base keys).
/// - Non-table values in overlay replace base values entirely.
/// - Keys in base that are not in overlay are preserved.
pub fn merge_toml(base: toml::Value, overlay: toml::Value) -> toml::Value {
    match (base, overlay) {
        (toml::Value::Table(mut base_table), toml::Value::Table(overlay_table)) => {
            for (key, overlay_val) in overlay_table {
                let merged = match base_table.remove(&key) {
                    Some(base_val) => merge_toml(base_val, overlay_val),
                    None => overlay_val,
                };
                base_table.insert(key, merged);
            }
            toml::Value::Table(base_table)
        }
        (_, overlay) => overlay,
    }
}

/// Read a config file as a raw TOML value. `Ok(None)` if it does not exist.
pub fn load_raw_config(path: &Path) -> Result<Option<toml::Value>, ConfigError> {
    if !path.exists() {
        return Ok(None);
    }
    let content = fs::read_to_string(path)?;
    let value: toml::Value = toml::from_str(&content)?;
    Ok(Some(value))
}

/// Merge an optional overlay onto a base value, then deserialize and validate.
pub fn resolve_config(
    base: toml::Value,
    overlay: Option<toml::Value>,
) -> Result<PlannerConfig, ConfigError> {
    let merged = match overlay {
        Some(ov) => merge_toml(base, ov),
        None => base,
    };
    let config: PlannerConfig = merged.try_into()?;
    config.validate()?;
    Ok(config)
}

/// Load the config file at `path` on top of the stock defaults.
pub fn load_config(path: &Path) -> Result<PlannerConfig, ConfigError> {
    let base = stock_defaults_value()?;
    let overlay = load_raw_config(path)?;
    resolve_config(base, overlay)
}

/// Returns a fully-commented stock `wochenplan.toml` with all keys.
///
/// Used by the `gen-config` CLI command.
pub fn stock_config_toml() -> &'static str {
    r##"# Wochenplan Configuration
# ========================
# All settings are optional. Remove or comment out any you don't need.
# Values shown below are the defaults. Unknown keys will cause an error.

# Directory for plan files (wochenplan_YYYY-MM-DD.*), week aliases
# (kwWW-YYYY.*, kwWW.*) and index.html. The --dir flag overrides it.
output_dir = "wochenplaene"

# Weekday on which `generate` runs without --force.
# English names or three-letter abbreviations: monday .. sunday, mon .. sun.
generation_day = "friday"

# A meal counts as quick when its preparation time is at most this many
# minutes. Every plan contains at least one quick meal.
quick_max_minutes = 15

# ---------------------------------------------------------------------------
# Index page
# ---------------------------------------------------------------------------
[index]
# Heading of index.html.
title = "Alle Wochenplaene"
"##
}
