//! The dispatch engine.
//!
//! `TalkActions` owns the loaded table; everything else it needs for one
//! dispatch pass (world, config, script engine, audit sink) is borrowed per
//! call through [`TalkContext`] rather than reached through globals.

use emberhall_script::ScriptEngine;
use emberhall_types::{SpeakClass, WorldConfig};
use emberhall_world::{EffectKind, PlayerId, World};

use crate::audit::AuditSink;
use crate::bridge;
use crate::entry::{MatchFilter, Propagation};
use crate::table::TalkTable;
use crate::tokenize::tokenize;

/// Collaborators borrowed for the duration of one dispatch call.
pub struct TalkContext<'a> {
    pub world: &'a mut dyn World,
    pub config: &'a WorldConfig,
    pub scripts: &'a ScriptEngine,
    pub audit: &'a dyn AuditSink,
}

/// The talkaction dispatch engine.
pub struct TalkActions {
    table: TalkTable,
}

impl TalkActions {
    pub fn new(table: TalkTable) -> Self {
        Self { table }
    }

    pub fn table(&self) -> &TalkTable {
        &self.table
    }

    /// Replace the whole table, as on a reload.
    pub fn reload(&mut self, table: TalkTable) {
        self.table = table;
    }

    /// Dispatch one utterance.
    ///
    /// Returns [`Propagation::Continue`] when the utterance should still be
    /// treated as ordinary speech (non-say class, no matching entry, or a
    /// scripted handler that asked for propagation) and
    /// [`Propagation::Break`] when it was consumed as a command.
    pub fn on_player_speak(
        &self,
        ctx: &mut TalkContext<'_>,
        speaker: PlayerId,
        class: SpeakClass,
        words: &str,
    ) -> Propagation {
        if !class.is_say() {
            return Propagation::Continue;
        }

        let Some(player) = ctx.world.player(speaker) else {
            return Propagation::Continue;
        };
        let access = player.access_level;
        let position = player.position;
        let speaker_name = player.name.clone();

        let tokens = tokenize(words);

        for entry in self.table.iter() {
            let (token, param) = match entry.filter {
                MatchFilter::Quotation => (&tokens.quote_words, &tokens.quote_param),
                MatchFilter::FirstWord => (&tokens.first_words, &tokens.first_param),
            };
            if !entry.matches(token) {
                continue;
            }

            // First match wins; later entries with the same key are
            // unreachable by design.
            if access < entry.access {
                if access == 0 {
                    // The command does not exist for untrusted speakers:
                    // no feedback, no effect, no audit line.
                    return Propagation::Break;
                }
                ctx.world
                    .send_cancel(speaker, "You are not able to execute this action.");
                ctx.world.add_effect(position, EffectKind::Poff);
                if entry.log {
                    self.audit(ctx, &speaker_name, words);
                }
                return Propagation::Break;
            }

            let report = bridge::invoke(&entry.handler, ctx, speaker, token, param);
            log::debug!(
                "talkaction '{}' by {speaker_name}: propagation={:?} succeeded={}",
                entry.words,
                report.propagation,
                report.succeeded,
            );
            if entry.log {
                self.audit(ctx, &speaker_name, words);
            }
            return report.propagation;
        }

        Propagation::Continue
    }

    /// Best-effort audit append; failures are logged and swallowed.
    fn audit(&self, ctx: &TalkContext<'_>, speaker_name: &str, words: &str) {
        if let Err(e) = ctx.audit.append(speaker_name, words) {
            log::warn!("audit log append failed for {speaker_name}: {e}");
        }
    }
}
