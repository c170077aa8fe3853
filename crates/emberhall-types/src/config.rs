//! World configuration.
//!
//! Loaded from a TOML file at server startup. Every field has a sensible
//! default so a missing or partial file still yields a usable config.

use serde::Deserialize;

use crate::error::{EmberError, Result};

/// Tunable world rules consulted by talkaction handlers.
#[derive(Debug, Clone, Deserialize)]
pub struct WorldConfig {
    /// Minimum guild name length accepted by `createguild`.
    #[serde(default = "default_min_guild_name")]
    pub min_guild_name: usize,
    /// Maximum guild name length accepted by `createguild`.
    #[serde(default = "default_max_guild_name")]
    pub max_guild_name: usize,
    /// Minimum character level required to form a guild.
    #[serde(default = "default_level_to_create_guild")]
    pub level_to_create_guild: u32,
    /// How long an IP ban issued by `banplayer` lasts, in seconds.
    #[serde(default = "default_ip_ban_secs")]
    pub ip_ban_secs: u64,
    /// Directory that receives per-player talkaction audit logs.
    #[serde(default = "default_audit_log_dir")]
    pub audit_log_dir: String,
}

fn default_min_guild_name() -> usize {
    4
}

fn default_max_guild_name() -> usize {
    29
}

fn default_level_to_create_guild() -> u32 {
    8
}

fn default_ip_ban_secs() -> u64 {
    86_400
}

fn default_audit_log_dir() -> String {
    "data/logs".to_string()
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            min_guild_name: default_min_guild_name(),
            max_guild_name: default_max_guild_name(),
            level_to_create_guild: default_level_to_create_guild(),
            ip_ban_secs: default_ip_ban_secs(),
            audit_log_dir: default_audit_log_dir(),
        }
    }
}

impl WorldConfig {
    /// Parse a config from TOML text.
    pub fn from_toml_str(toml_str: &str) -> Result<Self> {
        toml::from_str(toml_str).map_err(|e| EmberError::Config(format!("world config: {e}")))
    }

    /// Load a config from a TOML file on disk.
    pub fn load(path: &str) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }
}
