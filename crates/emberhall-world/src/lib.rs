//! World and actor collaborator boundary for emberhall.
//!
//! The talkaction engine never owns game state. It borrows a [`World`] for
//! the duration of one dispatch call and issues opaque side-effecting
//! operations on it (cancel messages, effects, bans, guild changes). The
//! in-memory [`MemoryWorld`] records every such operation and backs the test
//! suites and the demo binary.

pub mod player;
pub mod world;

pub use player::{Player, PlayerId, SkillKind};
pub use world::{Advancement, EffectKind, GuildId, MemoryWorld, MessageKind, World};
