//! The ordered talkaction table.
//!
//! A plain ordered sequence, not a map: registration order is priority
//! order, and first-match-wins resolution of shadowed duplicate keys is
//! part of the contract.

use emberhall_types::{EmberError, Result};

use crate::entry::TalkEntry;

/// Append-only collection of registered talkactions.
///
/// Built once at load time, read-only during dispatch. A reload discards
/// the whole table (`clear`) and rebuilds it; entries are never edited in
/// place.
#[derive(Debug, Default)]
pub struct TalkTable {
    entries: Vec<TalkEntry>,
}

impl TalkTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an entry. Rejects empty command words.
    pub fn register(&mut self, entry: TalkEntry) -> Result<()> {
        if entry.words.is_empty() {
            return Err(EmberError::Talk("entry has empty words".into()));
        }
        self.entries.push(entry);
        Ok(())
    }

    /// Entries in registration (= priority) order.
    pub fn iter(&self) -> impl Iterator<Item = &TalkEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Discard everything, ahead of a rebuild.
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
