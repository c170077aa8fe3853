//! Built-in native handlers and their name registry.
//!
//! Definitions reference these by function name (`function = "banplayer"`);
//! the loader resolves the name once at load time. Each handler consumes
//! the utterance (`Break`) and reports through `succeeded` whether the game
//! action actually happened.

use std::time::{SystemTime, UNIX_EPOCH};

use emberhall_world::{Advancement, MessageKind, PlayerId, SkillKind};

use crate::dispatch::TalkContext;
use crate::entry::{HandlerReport, NativeFn};

/// Resolve a built-in handler by its definition name. Case-insensitive.
pub fn lookup(name: &str) -> Option<NativeFn> {
    match name.to_ascii_lowercase().as_str() {
        "banplayer" => Some(ban_player),
        "addskill" => Some(add_skill),
        "createguild" => Some(create_guild),
        "joinguild" => Some(join_guild),
        _ => None,
    }
}

fn now_unix() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0)
}

/// Ban the named player: notify, record an IP ban, disconnect.
fn ban_player(
    ctx: &mut TalkContext<'_>,
    speaker: PlayerId,
    _words: &str,
    param: &str,
) -> HandlerReport {
    let Some(target_id) = ctx.world.player_id_by_name(param) else {
        return HandlerReport::consumed(false);
    };
    let Some(target) = ctx.world.player(target_id) else {
        return HandlerReport::consumed(false);
    };
    let (unbannable, ip) = (target.unbannable, target.last_ip);

    if unbannable {
        ctx.world
            .send_message(speaker, MessageKind::ConsoleBlue, "You cannot ban this player.");
        return HandlerReport::consumed(false);
    }

    ctx.world
        .send_message(target_id, MessageKind::ConsoleRed, "You have been banned.");
    if ip > 0 {
        ctx.world.add_ip_ban(ip, now_unix() + ctx.config.ip_ban_secs);
    }
    ctx.world.kick_player(target_id);
    HandlerReport::consumed(true)
}

/// Grant a progression advancement: parameter is `name, mode` where mode is
/// `l`/`e` (level), `m` (magic level), or a skill name.
fn add_skill(
    ctx: &mut TalkContext<'_>,
    speaker: PlayerId,
    _words: &str,
    param: &str,
) -> HandlerReport {
    let (name, mode) = match param.split_once(',') {
        Some((a, b)) => (a.trim(), b.trim()),
        None => (param.trim(), ""),
    };

    let Some(target) = ctx.world.player_id_by_name(name) else {
        ctx.world
            .send_message(speaker, MessageKind::StatusSmall, "Couldn't find target.");
        return HandlerReport::consumed(false);
    };

    let advancement = if mode.starts_with(['l', 'e', 'L', 'E']) {
        Advancement::Level
    } else if mode.starts_with(['m', 'M']) {
        Advancement::MagicLevel
    } else if let Some(skill) = SkillKind::from_name(mode) {
        Advancement::Skill(skill)
    } else {
        ctx.world.send_message(
            speaker,
            MessageKind::StatusSmall,
            &format!("Unknown skill '{mode}'."),
        );
        return HandlerReport::consumed(false);
    };

    ctx.world.advance(target, advancement);
    HandlerReport::consumed(true)
}

/// Letters plus single interior spaces.
fn is_valid_guild_name(name: &str) -> bool {
    !name.is_empty()
        && !name.starts_with(' ')
        && !name.ends_with(' ')
        && !name.contains("  ")
        && name.chars().all(|c| c.is_ascii_alphabetic() || c == ' ')
}

/// Form a guild named by the parameter, subject to the configured rules.
fn create_guild(
    ctx: &mut TalkContext<'_>,
    speaker: PlayerId,
    _words: &str,
    param: &str,
) -> HandlerReport {
    let Some(player) = ctx.world.player(speaker) else {
        return HandlerReport::consumed(false);
    };
    let (in_guild, level, premium) = (player.guild.is_some(), player.level, player.premium);

    if in_guild {
        ctx.world.send_cancel(speaker, "You are already in a guild.");
        return HandlerReport::consumed(false);
    }

    let name = param.trim();
    if name.len() < ctx.config.min_guild_name {
        ctx.world.send_cancel(
            speaker,
            &format!(
                "That guild name is too short, it has to be at least {} characters.",
                ctx.config.min_guild_name
            ),
        );
        return HandlerReport::consumed(false);
    }
    if name.len() > ctx.config.max_guild_name {
        ctx.world.send_cancel(
            speaker,
            &format!(
                "That guild name is too long, it can not be longer than {} characters.",
                ctx.config.max_guild_name
            ),
        );
        return HandlerReport::consumed(false);
    }
    if !is_valid_guild_name(name) {
        ctx.world.send_cancel(speaker, "Invalid guild name format.");
        return HandlerReport::consumed(false);
    }
    if ctx.world.guild_id_by_name(name).is_some() {
        ctx.world
            .send_cancel(speaker, "There is already a guild with that name.");
        return HandlerReport::consumed(false);
    }
    if level < ctx.config.level_to_create_guild {
        ctx.world.send_cancel(
            speaker,
            &format!(
                "You have to be at least Level {} to form a guild.",
                ctx.config.level_to_create_guild
            ),
        );
        return HandlerReport::consumed(false);
    }
    if !premium {
        ctx.world
            .send_cancel(speaker, "You need a premium account to form a guild.");
        return HandlerReport::consumed(false);
    }

    ctx.world.send_message(
        speaker,
        MessageKind::InfoDescr,
        &format!("You have formed the guild: {name}!"),
    );
    ctx.world.create_guild(speaker, name);
    HandlerReport::consumed(true)
}

/// Join the guild named by the parameter, if invited.
fn join_guild(
    ctx: &mut TalkContext<'_>,
    speaker: PlayerId,
    _words: &str,
    param: &str,
) -> HandlerReport {
    let Some(player) = ctx.world.player(speaker) else {
        return HandlerReport::consumed(false);
    };
    let in_guild = player.guild.is_some();
    let invites = player.guild_invites.clone();
    let speaker_name = player.name.clone();

    if in_guild {
        ctx.world.send_cancel(speaker, "You are already in a guild.");
        return HandlerReport::consumed(false);
    }

    let name = param.trim();
    let Some(guild) = ctx.world.guild_id_by_name(name) else {
        ctx.world
            .send_cancel(speaker, "There's no guild with that name.");
        return HandlerReport::consumed(false);
    };
    if !invites.contains(&guild) {
        ctx.world
            .send_cancel(speaker, "You are not invited to that guild.");
        return HandlerReport::consumed(false);
    }

    ctx.world
        .send_message(speaker, MessageKind::InfoDescr, "You have joined the guild.");
    ctx.world.join_guild(speaker, guild);
    ctx.world
        .broadcast_to_guild(guild, &format!("{speaker_name} has joined the guild."));
    HandlerReport::consumed(true)
}
