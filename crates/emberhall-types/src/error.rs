//! Error types for emberhall.

use std::io;

/// Errors produced by the emberhall crates.
#[derive(Debug, thiserror::Error)]
pub enum EmberError {
    #[error("config error: {0}")]
    Config(String),

    #[error("talkaction error: {0}")]
    Talk(String),

    #[error("script error: {0}")]
    Script(String),

    #[error("world error: {0}")]
    World(String),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),
}

/// Convenience alias.
pub type Result<T> = std::result::Result<T, EmberError>;
