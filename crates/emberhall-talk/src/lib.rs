//! Talkaction engine for emberhall.
//!
//! A talkaction turns a chat utterance into a command: the raw text is
//! tokenized under two grammars (quotation-delimited and first-word), the
//! registered entries are scanned in priority order, the first match is
//! authorized and routed to either a native handler or a scripted `onSay`
//! callback, and the caller gets back a propagation verdict saying whether
//! the utterance should still be treated as ordinary speech.

pub mod audit;
pub mod bridge;
pub mod builtins;
pub mod dispatch;
pub mod entry;
pub mod loader;
pub mod table;
pub mod tokenize;

pub use audit::{AuditSink, FileAuditSink, MemoryAuditSink};
pub use dispatch::{TalkActions, TalkContext};
pub use entry::{Handler, HandlerReport, MatchFilter, NativeFn, Propagation, TalkEntry};
pub use loader::{TalkDef, build_table, parse_defs};
pub use table::TalkTable;
pub use tokenize::{Tokenization, tokenize};
