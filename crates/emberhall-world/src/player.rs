//! Player records.

use emberhall_types::Position;

use crate::world::GuildId;

/// Stable identifier for a connected player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PlayerId(pub u32);

/// Trainable skills a player can advance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkillKind {
    Fist,
    Club,
    Sword,
    Axe,
    Distance,
    Shielding,
    Fishing,
}

impl SkillKind {
    /// Parse a skill from its spoken name. Case-insensitive.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "fist" => Some(SkillKind::Fist),
            "club" => Some(SkillKind::Club),
            "sword" => Some(SkillKind::Sword),
            "axe" => Some(SkillKind::Axe),
            "distance" | "dist" => Some(SkillKind::Distance),
            "shielding" | "shield" => Some(SkillKind::Shielding),
            "fishing" | "fish" => Some(SkillKind::Fishing),
            _ => None,
        }
    }
}

/// A connected player, as seen by the talkaction engine.
///
/// Only the fields the engine and its built-in handlers consult live here;
/// inventory, vocation, and the rest of the character sheet belong to the
/// wider server.
#[derive(Debug, Clone)]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
    /// Authorization tier. 0 is an ordinary player; higher grants access to
    /// restricted talkactions.
    pub access_level: u32,
    pub level: u32,
    pub position: Position,
    pub premium: bool,
    /// Players flagged unbannable shrug off `banplayer`.
    pub unbannable: bool,
    pub guild: Option<GuildId>,
    pub guild_invites: Vec<GuildId>,
    /// Last known IPv4 address, 0 when unknown.
    pub last_ip: u32,
}

impl Player {
    /// A fresh level-1 player with no privileges.
    pub fn new(id: PlayerId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            access_level: 0,
            level: 1,
            position: Position::default(),
            premium: false,
            unbannable: false,
            guild: None,
            guild_invites: Vec::new(),
            last_ip: 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn skill_from_name_known() {
        assert_eq!(SkillKind::from_name("sword"), Some(SkillKind::Sword));
        assert_eq!(SkillKind::from_name("Shielding"), Some(SkillKind::Shielding));
        assert_eq!(SkillKind::from_name("DIST"), Some(SkillKind::Distance));
    }

    #[test]
    fn skill_from_name_unknown() {
        assert_eq!(SkillKind::from_name("juggling"), None);
        assert_eq!(SkillKind::from_name(""), None);
    }

    #[test]
    fn new_player_defaults() {
        let p = Player::new(PlayerId(1), "Arel");
        assert_eq!(p.access_level, 0);
        assert_eq!(p.level, 1);
        assert!(!p.premium);
        assert!(!p.unbannable);
        assert!(p.guild.is_none());
        assert_eq!(p.last_ip, 0);
    }
}
