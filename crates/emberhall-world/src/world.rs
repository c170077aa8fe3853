//! The `World` collaborator trait and its in-memory implementation.

use emberhall_types::Position;

use crate::player::{Player, PlayerId, SkillKind};

/// Stable identifier for a guild.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GuildId(pub u32);

/// Client-visible message channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageKind {
    /// Blue console text.
    ConsoleBlue,
    /// Red console text.
    ConsoleRed,
    /// Small status text at the bottom of the screen.
    StatusSmall,
    /// Green descriptive text.
    InfoDescr,
}

/// Visual effects spawned on the map.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EffectKind {
    /// The puff-of-smoke shown on a rejected command.
    Poff,
    Teleport,
    MagicEnergy,
}

/// A progression advancement granted by `addskill`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Advancement {
    Level,
    MagicLevel,
    Skill(SkillKind),
}

/// Everything the talkaction engine may do to the game world.
///
/// Borrowed mutably for the duration of one dispatch call. Implementations
/// outside tests are expected to forward these to the real game systems;
/// the engine treats every call as opaque and fire-and-forget.
pub trait World {
    fn player(&self, id: PlayerId) -> Option<&Player>;

    /// Look up a connected player by name, case-insensitively.
    fn player_id_by_name(&self, name: &str) -> Option<PlayerId>;

    /// Send a cancel message (white status text) to a player.
    fn send_cancel(&mut self, to: PlayerId, text: &str);

    fn send_message(&mut self, to: PlayerId, kind: MessageKind, text: &str);

    fn add_effect(&mut self, pos: Position, kind: EffectKind);

    /// Record an IP ban expiring at the given unix timestamp.
    fn add_ip_ban(&mut self, ip: u32, expires_at: u64);

    /// Disconnect a player.
    fn kick_player(&mut self, id: PlayerId);

    /// Grant a progression advancement.
    fn advance(&mut self, id: PlayerId, what: Advancement);

    fn guild_id_by_name(&self, name: &str) -> Option<GuildId>;

    /// Create a guild and enroll the founder.
    fn create_guild(&mut self, founder: PlayerId, name: &str) -> GuildId;

    /// Enroll a player in an existing guild.
    fn join_guild(&mut self, id: PlayerId, guild: GuildId);

    /// Broadcast a line on a guild's channel.
    fn broadcast_to_guild(&mut self, guild: GuildId, text: &str);
}

#[derive(Debug, Clone)]
struct Guild {
    id: GuildId,
    name: String,
    members: Vec<PlayerId>,
}

/// An in-memory world that records every side effect.
///
/// Backs the test suites and the demo binary the way a real server would
/// back the trait with its game state.
#[derive(Default)]
pub struct MemoryWorld {
    players: Vec<Player>,
    guilds: Vec<Guild>,
    next_guild_id: u32,
    pub cancels: Vec<(PlayerId, String)>,
    pub messages: Vec<(PlayerId, MessageKind, String)>,
    pub effects: Vec<(Position, EffectKind)>,
    pub ip_bans: Vec<(u32, u64)>,
    pub kicked: Vec<PlayerId>,
    pub advancements: Vec<(PlayerId, Advancement)>,
    pub guild_broadcasts: Vec<(GuildId, String)>,
}

impl MemoryWorld {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a player; returns its id for convenience.
    pub fn add_player(&mut self, player: Player) -> PlayerId {
        let id = player.id;
        self.players.push(player);
        id
    }

    /// Mutable access for test setup; the dispatch path itself only goes
    /// through the `World` trait.
    pub fn player_mut(&mut self, id: PlayerId) -> Option<&mut Player> {
        self.players.iter_mut().find(|p| p.id == id)
    }

    pub fn guild_members(&self, guild: GuildId) -> &[PlayerId] {
        self.guilds
            .iter()
            .find(|g| g.id == guild)
            .map(|g| g.members.as_slice())
            .unwrap_or(&[])
    }
}

impl World for MemoryWorld {
    fn player(&self, id: PlayerId) -> Option<&Player> {
        self.players.iter().find(|p| p.id == id)
    }

    fn player_id_by_name(&self, name: &str) -> Option<PlayerId> {
        self.players
            .iter()
            .find(|p| p.name.eq_ignore_ascii_case(name))
            .map(|p| p.id)
    }

    fn send_cancel(&mut self, to: PlayerId, text: &str) {
        self.cancels.push((to, text.to_string()));
    }

    fn send_message(&mut self, to: PlayerId, kind: MessageKind, text: &str) {
        self.messages.push((to, kind, text.to_string()));
    }

    fn add_effect(&mut self, pos: Position, kind: EffectKind) {
        self.effects.push((pos, kind));
    }

    fn add_ip_ban(&mut self, ip: u32, expires_at: u64) {
        self.ip_bans.push((ip, expires_at));
    }

    fn kick_player(&mut self, id: PlayerId) {
        self.kicked.push(id);
    }

    fn advance(&mut self, id: PlayerId, what: Advancement) {
        self.advancements.push((id, what));
    }

    fn guild_id_by_name(&self, name: &str) -> Option<GuildId> {
        self.guilds
            .iter()
            .find(|g| g.name.eq_ignore_ascii_case(name))
            .map(|g| g.id)
    }

    fn create_guild(&mut self, founder: PlayerId, name: &str) -> GuildId {
        self.next_guild_id += 1;
        let id = GuildId(self.next_guild_id);
        self.guilds.push(Guild {
            id,
            name: name.to_string(),
            members: vec![founder],
        });
        if let Some(p) = self.player_mut(founder) {
            p.guild = Some(id);
        }
        log::debug!("guild '{name}' created by player {founder:?}");
        id
    }

    fn join_guild(&mut self, id: PlayerId, guild: GuildId) {
        if let Some(g) = self.guilds.iter_mut().find(|g| g.id == guild) {
            g.members.push(id);
        }
        if let Some(p) = self.player_mut(id) {
            p.guild = Some(guild);
            p.guild_invites.retain(|g| *g != guild);
        }
    }

    fn broadcast_to_guild(&mut self, guild: GuildId, text: &str) {
        self.guild_broadcasts.push((guild, text.to_string()));
    }
}
