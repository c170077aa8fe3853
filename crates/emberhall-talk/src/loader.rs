//! Loading talkaction definitions from TOML.
//!
//! A definition file holds `[[talkaction]]` tables. Each names its command
//! words, an optional filter and flags, and exactly one handler: either
//! `function` (a built-in resolved through `builtins::lookup`) or `script`
//! (a script name resolved to a registered `onSay` hook by the caller).
//! Malformed definitions are skipped with an error log; the rest of the
//! table still loads.

use emberhall_script::HookId;
use emberhall_types::{EmberError, Result};
use serde::Deserialize;

use crate::builtins;
use crate::entry::{Handler, MatchFilter, TalkEntry};
use crate::table::TalkTable;

/// One raw definition, as written in the TOML file.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TalkDef {
    #[serde(default)]
    pub words: String,
    /// `"quotation"` (default) or `"first word"`.
    #[serde(default)]
    pub filter: Option<String>,
    #[serde(default)]
    pub sensitive: bool,
    #[serde(default)]
    pub log: bool,
    #[serde(default)]
    pub access: u32,
    #[serde(default)]
    pub function: Option<String>,
    #[serde(default)]
    pub script: Option<String>,
}

#[derive(Deserialize)]
struct DefFile {
    #[serde(default)]
    talkaction: Vec<TalkDef>,
}

/// Parse a definition file. Syntax errors fail the whole parse; semantic
/// problems in individual definitions are left for `build_table`.
pub fn parse_defs(toml_str: &str) -> Result<Vec<TalkDef>> {
    let file: DefFile = toml::from_str(toml_str)
        .map_err(|e| EmberError::Talk(format!("talkaction definitions: {e}")))?;
    Ok(file.talkaction)
}

/// Build the dispatch table from parsed definitions.
///
/// `resolve_script` maps a script name to a registered `onSay` hook.
/// Definitions with empty words, an unknown function, an unresolvable
/// script, or not exactly one handler are skipped with an error log.
pub fn build_table(
    defs: &[TalkDef],
    resolve_script: impl Fn(&str) -> Option<HookId>,
) -> TalkTable {
    let mut table = TalkTable::new();

    for def in defs {
        if def.words.is_empty() {
            log::error!("skipping talkaction with empty words");
            continue;
        }

        let handler = match (&def.function, &def.script) {
            (Some(_), Some(_)) => {
                log::error!("talkaction '{}' names both a function and a script", def.words);
                continue;
            },
            (None, None) => {
                log::error!("talkaction '{}' names no handler", def.words);
                continue;
            },
            (Some(function), None) => match builtins::lookup(function) {
                Some(f) => Handler::Native(f),
                None => {
                    log::error!("talkaction '{}': unknown function '{function}'", def.words);
                    continue;
                },
            },
            (None, Some(script)) => match resolve_script(script) {
                Some(hook) => Handler::Scripted(hook),
                None => {
                    log::error!("talkaction '{}': cannot resolve script '{script}'", def.words);
                    continue;
                },
            },
        };

        let filter = match &def.filter {
            None => MatchFilter::default(),
            Some(s) => MatchFilter::from_config_str(s).unwrap_or_else(|| {
                log::warn!("talkaction '{}': unknown filter '{s}', using quotation", def.words);
                MatchFilter::default()
            }),
        };

        let mut entry = TalkEntry::new(def.words.clone(), handler);
        entry.filter = filter;
        entry.case_sensitive = def.sensitive;
        entry.log = def.log;
        entry.access = def.access;
        if let Err(e) = table.register(entry) {
            log::error!("talkaction '{}': {e}", def.words);
        }
    }

    table
}
