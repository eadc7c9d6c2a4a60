//! Configuration management for `piimask-core`.
//!
//! Detection rules themselves are fixed in code; configuration only chooses
//! which detectors run and which character masks a match. Configs are YAML,
//! and this module handles loading, validating, and merging them.
//!
//! License: MIT OR Apache-2.0

use anyhow::{Context, Result};
use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use std::path::Path;

use piimask_scan::Category;

use crate::errors::PiimaskError;

/// Mask used when a config does not set one.
pub const DEFAULT_MASK: char = '*';

/// Enables or disables one built-in detector.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct DetectorRule {
    /// Detector identifier (`credit_card`, `email`, `phone`, `ssn`, `dob`).
    pub name: String,
    pub description: Option<String>,
    /// Explicit override for enabling/disabling the detector.
    pub enabled: Option<bool>,
    /// If true, the detector only runs when explicitly enabled.
    pub opt_in: bool,
}

impl DetectorRule {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            ..Self::default()
        }
    }

    fn is_active(&self) -> bool {
        match self.enabled {
            Some(enabled) => enabled,
            None => !self.opt_in,
        }
    }
}

/// Top-level configuration for a redactor.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct RedactorConfig {
    /// Character written over every matched byte. Must be visible ASCII.
    pub mask: Option<char>,
    pub detectors: Vec<DetectorRule>,
}

impl RedactorConfig {
    /// Loads a detector configuration from a YAML file.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        info!("Loading detector config from: {}", path.display());
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config = Self::from_yaml_str(&text)
            .with_context(|| format!("Failed to parse config file {}", path.display()))?;

        info!("Loaded {} detector rules from file {}.", config.detectors.len(), path.display());
        Ok(config)
    }

    /// Parses and validates a YAML document.
    pub fn from_yaml_str(text: &str) -> Result<Self> {
        let config: RedactorConfig = serde_yml::from_str(text).context("Invalid detector config YAML")?;
        validate_config(&config)?;
        Ok(config)
    }

    /// Loads the built-in configuration: every detector, masked with `*`.
    pub fn load_default() -> Result<Self> {
        debug!("Loading default detector config from embedded string...");
        let default_yaml = include_str!("../config/default_detectors.yaml");
        let config: RedactorConfig =
            serde_yml::from_str(default_yaml).context("Failed to parse default detector config")?;

        debug!("Loaded {} default detector rules.", config.detectors.len());
        Ok(config)
    }

    pub fn mask_char(&self) -> char {
        self.mask.unwrap_or(DEFAULT_MASK)
    }

    /// The mask as the single byte it replaces each matched byte with.
    pub fn mask_byte(&self) -> Result<u8, PiimaskError> {
        mask_to_byte(self.mask_char())
    }

    /// Applies enable/disable lists, e.g. from command-line flags.
    ///
    /// Disabled detectors are removed; opt-in detectors survive only when enabled.
    pub fn set_active_detectors(&mut self, enable: &[String], disable: &[String]) {
        let enable_set: HashSet<&str> = enable.iter().map(String::as_str).collect();
        let disable_set: HashSet<&str> = disable.iter().map(String::as_str).collect();

        debug!("Initial detector count before filtering: {}", self.detectors.len());

        let all_names: HashSet<&str> = self.detectors.iter().map(|r| r.name.as_str()).collect();

        for name in enable_set.difference(&all_names) {
            warn!("Detector '{}' in `enable` list does not exist.", name);
        }

        for name in disable_set.difference(&all_names) {
            warn!("Detector '{}' in `disable` list does not exist.", name);
        }

        self.detectors.retain(|rule| {
            let name = rule.name.as_str();
            !disable_set.contains(name) && (!rule.opt_in || enable_set.contains(name))
        });

        for rule in &mut self.detectors {
            if enable_set.contains(rule.name.as_str()) {
                rule.enabled = Some(true);
            }
        }

        debug!("Final active detector count after filtering: {}", self.detectors.len());
    }

    /// Categories of the active detectors, in canonical run order.
    pub fn active_categories(&self) -> Result<Vec<Category>, PiimaskError> {
        let mut active = HashSet::new();
        for rule in &self.detectors {
            let category = Category::from_name(&rule.name)
                .ok_or_else(|| PiimaskError::UnknownDetector(rule.name.clone()))?;
            if rule.is_active() {
                active.insert(category);
            }
        }

        Ok(Category::ALL.into_iter().filter(|c| active.contains(c)).collect())
    }
}

/// Merges a user config over the defaults. User rules replace defaults by name.
pub fn merge_config(default_config: RedactorConfig, user_config: Option<RedactorConfig>) -> RedactorConfig {
    debug!("merge_config called. Initial default detector count: {}", default_config.detectors.len());

    let mut order: Vec<String> = default_config.detectors.iter().map(|r| r.name.clone()).collect();
    let mut rules: HashMap<String, DetectorRule> = default_config
        .detectors
        .into_iter()
        .map(|rule| (rule.name.clone(), rule))
        .collect();
    let mut mask = default_config.mask;

    if let Some(user_cfg) = user_config {
        debug!("User config provided. Merging {} user rules.", user_cfg.detectors.len());
        for user_rule in user_cfg.detectors {
            if !rules.contains_key(&user_rule.name) {
                order.push(user_rule.name.clone());
            }
            rules.insert(user_rule.name.clone(), user_rule);
        }

        if let Some(user_mask) = user_cfg.mask {
            debug!("Overriding mask with user value: {:?}", user_mask);
            mask = Some(user_mask);
        }
    }

    let detectors: Vec<DetectorRule> = order.into_iter().filter_map(|name| rules.remove(&name)).collect();
    debug!("Final detector count after merge: {}", detectors.len());

    RedactorConfig { mask, detectors }
}

pub(crate) fn mask_to_byte(mask: char) -> Result<u8, PiimaskError> {
    if mask.is_ascii_graphic() {
        Ok(mask as u8)
    } else {
        Err(PiimaskError::InvalidMask(mask))
    }
}

/// Validates names and mask, collecting every problem into one error.
fn validate_config(config: &RedactorConfig) -> Result<(), PiimaskError> {
    let mut names = HashSet::new();
    let mut errors = Vec::new();

    if let Some(mask) = config.mask {
        if let Err(e) = mask_to_byte(mask) {
            errors.push(e.to_string());
        }
    }

    for rule in &config.detectors {
        if rule.name.is_empty() {
            errors.push("A detector rule has an empty `name` field.".to_string());
        } else if !names.insert(rule.name.as_str()) {
            errors.push(format!("Duplicate detector name found: '{}'.", rule.name));
        } else if Category::from_name(&rule.name).is_none() {
            errors.push(PiimaskError::UnknownDetector(rule.name.clone()).to_string());
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(PiimaskError::ConfigValidation(errors.join("\n")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_enables_everything() {
        let config = RedactorConfig::load_default().unwrap();
        assert_eq!(config.mask_char(), '*');
        assert_eq!(config.active_categories().unwrap(), Category::ALL.to_vec());
    }

    #[test]
    fn test_opt_in_rule_inactive_until_enabled() {
        let mut rule = DetectorRule::new("dob");
        rule.opt_in = true;
        let mut config = RedactorConfig {
            mask: None,
            detectors: vec![DetectorRule::new("email"), rule],
        };
        assert_eq!(config.active_categories().unwrap(), vec![Category::Email]);

        config.set_active_detectors(&["dob".to_string()], &[]);
        assert_eq!(config.active_categories().unwrap(), vec![Category::Email, Category::Dob]);
    }

    #[test]
    fn test_mask_must_be_visible_ascii() {
        assert_eq!(mask_to_byte('#').unwrap(), b'#');
        assert!(matches!(mask_to_byte('█'), Err(PiimaskError::InvalidMask('█'))));
        assert!(mask_to_byte(' ').is_err());
    }

    #[test]
    fn test_validation_collects_all_problems() {
        let config = RedactorConfig {
            mask: Some('\n'),
            detectors: vec![DetectorRule::new(""), DetectorRule::new("ssn"), DetectorRule::new("ssn"), DetectorRule::new("iban")],
        };
        let err = validate_config(&config).unwrap_err().to_string();
        assert!(err.contains("Mask character"));
        assert!(err.contains("empty `name`"));
        assert!(err.contains("Duplicate detector name found: 'ssn'"));
        assert!(err.contains("Unknown detector 'iban'"));
    }
}
