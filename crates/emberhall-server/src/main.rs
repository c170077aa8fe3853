//! Interactive world console.
//!
//! Drives the talkaction engine against an in-memory world from stdin.
//! Each input line is dispatched as a say-class utterance from the current
//! speaker; `@Name` switches the speaker. Lines the engine does not consume
//! are echoed back as ordinary speech, the way the game would broadcast
//! them to nearby players.

use std::io::{self, BufRead};
use std::path::Path;

use anyhow::{Context, Result};

use emberhall_script::{ScriptEngine, ScriptValue};
use emberhall_talk::{
    FileAuditSink, Propagation, TalkActions, TalkContext, build_table, parse_defs,
};
use emberhall_types::{SpeakClass, WorldConfig};
use emberhall_world::{MemoryWorld, Player, PlayerId, World};

fn load_world_config(path: &Path) -> WorldConfig {
    match WorldConfig::load(&path.to_string_lossy()) {
        Ok(config) => config,
        Err(e) => {
            log::warn!("world config {}: {e}; using defaults", path.display());
            WorldConfig::default()
        },
    }
}

fn seed_world() -> MemoryWorld {
    let mut world = MemoryWorld::new();

    let mut arel = Player::new(PlayerId(1), "Arel");
    arel.access_level = 3;
    arel.level = 100;
    arel.premium = true;
    world.add_player(arel);

    let mut brakk = Player::new(PlayerId(2), "Brakk");
    brakk.level = 20;
    brakk.premium = true;
    brakk.last_ip = 0x0a00_0001;
    world.add_player(brakk);

    world.add_player(Player::new(PlayerId(3), "Cole"));
    world
}

fn speaker_name(world: &MemoryWorld, id: PlayerId) -> String {
    world
        .player(id)
        .map(|p| p.name.clone())
        .unwrap_or_else(|| format!("#{}", id.0))
}

/// Print and discard the side effects the last dispatch recorded.
fn drain_feedback(world: &mut MemoryWorld) {
    let cancels = std::mem::take(&mut world.cancels);
    for (to, text) in cancels {
        println!("  [cancel -> {}] {text}", speaker_name(world, to));
    }
    let messages = std::mem::take(&mut world.messages);
    for (to, kind, text) in messages {
        println!("  [{kind:?} -> {}] {text}", speaker_name(world, to));
    }
    for (pos, kind) in std::mem::take(&mut world.effects) {
        println!("  [effect] {kind:?} at {pos}");
    }
    for (ip, until) in std::mem::take(&mut world.ip_bans) {
        println!("  [ban] ip {ip:#010x} until unix {until}");
    }
    let kicked = std::mem::take(&mut world.kicked);
    for id in kicked {
        println!("  [kick] {}", speaker_name(world, id));
    }
    for (id, what) in std::mem::take(&mut world.advancements) {
        println!("  [advance] {} gains {what:?}", speaker_name(world, id));
    }
    for (guild, text) in std::mem::take(&mut world.guild_broadcasts) {
        println!("  [guild {}] {text}", guild.0);
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let data_dir = Path::new(env!("CARGO_MANIFEST_DIR")).join("data");
    let config = load_world_config(&data_dir.join("world.toml"));

    let defs_path = data_dir.join("talkactions.toml");
    let defs_text = std::fs::read_to_string(&defs_path)
        .with_context(|| format!("reading {}", defs_path.display()))?;
    let defs = parse_defs(&defs_text).context("parsing talkaction definitions")?;

    let mut scripts = ScriptEngine::new();
    let greeting = scripts.register_hook("onSay", |actor, words, _param| {
        log::info!("script greeting: actor {} said '{words}'", actor.0);
        // Truthy: the hail still goes out as ordinary speech.
        ScriptValue::Bool(true)
    });

    let table = build_table(&defs, |name| (name == "greeting").then_some(greeting));
    log::info!("Loaded {} talkactions from {}", table.len(), defs_path.display());
    let talk = TalkActions::new(table);

    let mut world = seed_world();
    let audit = FileAuditSink::new(&config.audit_log_dir);

    println!("emberhall world console -- players: Arel (gm), Brakk, Cole");
    println!("Speak as the current player; '@Name' switches speaker. Ctrl-D quits.");

    let mut current = PlayerId(1);
    println!("speaking as Arel");

    for line in io::stdin().lock().lines() {
        let line = line?;
        let line = line.trim_end_matches(['\r', '\n']);
        if line.is_empty() {
            continue;
        }

        if let Some(name) = line.strip_prefix('@') {
            match world.player_id_by_name(name.trim()) {
                Some(id) => {
                    current = id;
                    println!("speaking as {}", speaker_name(&world, id));
                },
                None => println!("no such player: {}", name.trim()),
            }
            continue;
        }

        let verdict = {
            let mut ctx = TalkContext {
                world: &mut world,
                config: &config,
                scripts: &scripts,
                audit: &audit,
            };
            talk.on_player_speak(&mut ctx, current, SpeakClass::Say, line)
        };

        drain_feedback(&mut world);
        if verdict == Propagation::Continue {
            println!("{} says: {line}", speaker_name(&world, current));
        }
    }

    log::info!("console closed");
    Ok(())
}
