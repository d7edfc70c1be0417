//! Flag registry configuration loading

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::warn;

use crate::flags::{FlagSet, FlagSpec};

/// Environment variable naming an extra config file applied last
pub const CONFIG_ENV: &str = "CMDSIG_CONFIG";

/// Registry configuration
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct ClassifierConfig {
    /// Start from the built-in global flags (default: true)
    pub builtin_flags: Option<bool>,

    /// Additional global flags of the host program
    #[serde(default)]
    pub flags: Vec<FlagSpec>,
}

impl ClassifierConfig {
    /// Build the effective registry, validating every configured flag
    pub fn into_flag_set(self) -> Result<FlagSet> {
        let mut set = if self.builtin_flags.unwrap_or(true) {
            FlagSet::builtin()
        } else {
            FlagSet::new()
        };

        for spec in self.flags {
            let name = spec.name.clone();
            set.insert(spec)
                .with_context(|| format!("Invalid flag in config: {}", name))?;
        }

        Ok(set)
    }
}

/// Load config with precedence:
/// 1. User config (~/.cmdsig/config.toml) - lowest priority
/// 2. Project config (.cmdsig/config.toml)
/// 3. Local config (.cmdsig/config.local.toml)
/// 4. File named by CMDSIG_CONFIG - highest priority
pub fn load_config_with_precedence() -> Result<ClassifierConfig> {
    let home = dirs::home_dir();
    load_config_from(home.as_deref(), Path::new("."))
}

/// [`load_config_with_precedence`] with explicit home and project roots
pub fn load_config_from(home: Option<&Path>, project_root: &Path) -> Result<ClassifierConfig> {
    let mut config = ClassifierConfig::default();

    // 1. User config (optional, broken file is skipped)
    if let Some(home_dir) = home {
        let user_config = home_dir.join(".cmdsig/config.toml");
        if user_config.exists() {
            match load_config_from_file(&user_config) {
                Ok(cfg) => merge_config(&mut config, cfg),
                Err(e) => warn!("Failed to load user config: {:#}", e),
            }
        }
    }

    // 2. Project config
    let project_config = project_root.join(".cmdsig/config.toml");
    if project_config.exists() {
        merge_config(&mut config, load_config_from_file(&project_config)?);
    }

    // 3. Local config (optional override)
    let local_config = project_root.join(".cmdsig/config.local.toml");
    if local_config.exists() {
        match load_config_from_file(&local_config) {
            Ok(cfg) => merge_config(&mut config, cfg),
            Err(e) => warn!("Failed to load local config: {:#}", e),
        }
    }

    // 4. Environment override
    if let Some(path) = env::var_os(CONFIG_ENV) {
        let path = PathBuf::from(path);
        let cfg = load_config_from_file(&path)
            .with_context(|| format!("{} points at an unusable file", CONFIG_ENV))?;
        merge_config(&mut config, cfg);
    }

    Ok(config)
}

/// Effective registry from all config layers
pub fn load_flag_set() -> Result<FlagSet> {
    load_config_with_precedence()?.into_flag_set()
}

/// Load a single config file
pub fn load_config_from_file(path: &Path) -> Result<ClassifierConfig> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config: {}", path.display()))?;
    let config: ClassifierConfig = toml::from_str(&content)
        .with_context(|| format!("Failed to parse config: {}", path.display()))?;
    Ok(config)
}

/// Later layers append flags; the last explicit `builtin_flags` wins
fn merge_config(base: &mut ClassifierConfig, new: ClassifierConfig) {
    if new.builtin_flags.is_some() {
        base.builtin_flags = new.builtin_flags;
    }
    base.flags.extend(new.flags);
}
