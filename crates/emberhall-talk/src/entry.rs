//! Registered talkaction entries.

use emberhall_script::HookId;
use emberhall_world::PlayerId;

use crate::dispatch::TalkContext;

/// Which tokenization an entry consumes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MatchFilter {
    #[default]
    Quotation,
    FirstWord,
}

impl MatchFilter {
    /// Parse the filter selector used in definitions. Case-insensitive.
    pub fn from_config_str(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "quotation" => Some(MatchFilter::Quotation),
            "first word" => Some(MatchFilter::FirstWord),
            _ => None,
        }
    }
}

/// Whether the utterance should still be treated as ordinary speech after
/// dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Propagation {
    /// Keep processing the utterance as speech.
    Continue,
    /// The utterance was consumed as a command; do not broadcast it.
    Break,
}

/// What a handler reports back.
///
/// The propagation verdict and the business outcome are deliberately kept
/// apart: a guild command that rejects a too-short name still consumes the
/// utterance (`Break`) while reporting `succeeded = false`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HandlerReport {
    pub propagation: Propagation,
    /// Whether the game action the command stands for actually happened.
    pub succeeded: bool,
}

impl HandlerReport {
    /// The utterance was consumed as a command.
    pub fn consumed(succeeded: bool) -> Self {
        Self {
            propagation: Propagation::Break,
            succeeded,
        }
    }
}

/// A native handler: a direct in-process function.
pub type NativeFn = fn(&mut TalkContext<'_>, PlayerId, &str, &str) -> HandlerReport;

/// The handler attached to an entry. Exactly one kind, fixed at
/// registration time.
#[derive(Debug, Clone, Copy)]
pub enum Handler {
    Native(NativeFn),
    /// A callback registered with the script engine under `onSay`.
    Scripted(HookId),
}

/// One registered talkaction. Immutable once it enters the table.
#[derive(Debug, Clone)]
pub struct TalkEntry {
    /// The literal command key, non-empty.
    pub words: String,
    pub filter: MatchFilter,
    pub case_sensitive: bool,
    /// Append an audit line whenever this entry runs.
    pub log: bool,
    /// Minimum access level required of the speaker.
    pub access: u32,
    pub handler: Handler,
}

impl TalkEntry {
    /// An entry with the default quotation filter, case-insensitive, no
    /// logging, no access restriction.
    pub fn new(words: impl Into<String>, handler: Handler) -> Self {
        Self {
            words: words.into(),
            filter: MatchFilter::default(),
            case_sensitive: false,
            log: false,
            access: 0,
            handler,
        }
    }

    /// Whether a token matches this entry's words: exact match always, and
    /// an ASCII case-insensitive match unless the entry is case sensitive.
    pub fn matches(&self, token: &str) -> bool {
        token == self.words || (!self.case_sensitive && self.words.eq_ignore_ascii_case(token))
    }
}
