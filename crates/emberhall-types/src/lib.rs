//! Foundation types for emberhall.
//!
//! This crate contains the types shared by every emberhall crate: the error
//! enum, map positions, speech classification, and the world configuration
//! loaded from TOML.

pub mod config;
pub mod error;
pub mod position;
pub mod speech;

pub use config::WorldConfig;
pub use error::{EmberError, Result};
pub use position::Position;
pub use speech::SpeakClass;
