//! Per-speaker audit logging.
//!
//! Entries flagged `log` get one line per invocation appended to a resource
//! named after the speaker. The append is best-effort: failures are logged
//! and swallowed, never surfaced to the speaker or the dispatch path.

use std::cell::RefCell;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::PathBuf;

use chrono::NaiveDateTime;
use emberhall_types::Result;

/// Destination for audit lines.
pub trait AuditSink {
    /// Append one line for the named speaker. The sink supplies the
    /// timestamp.
    fn append(&self, speaker: &str, utterance: &str) -> Result<()>;
}

/// Format one audit line: `[DD/MM/YYYY HH:MM] TalkAction: <utterance>`.
pub fn audit_line(at: NaiveDateTime, utterance: &str) -> String {
    format!("[{}] TalkAction: {}", at.format("%d/%m/%Y %H:%M"), utterance)
}

/// Appends to `<dir>/<speaker>.txt`, creating the directory on demand.
pub struct FileAuditSink {
    dir: PathBuf,
}

impl FileAuditSink {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }
}

impl AuditSink for FileAuditSink {
    fn append(&self, speaker: &str, utterance: &str) -> Result<()> {
        std::fs::create_dir_all(&self.dir)?;
        let path = self.dir.join(format!("{speaker}.txt"));
        let mut file = OpenOptions::new().create(true).append(true).open(path)?;
        writeln!(
            file,
            "{}",
            audit_line(chrono::Local::now().naive_local(), utterance)
        )?;
        Ok(())
    }
}

/// Records (speaker, utterance) pairs in memory. Test support.
#[derive(Default)]
pub struct MemoryAuditSink {
    lines: RefCell<Vec<(String, String)>>,
}

impl MemoryAuditSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> Vec<(String, String)> {
        self.lines.borrow().clone()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.borrow().is_empty()
    }
}

impl AuditSink for MemoryAuditSink {
    fn append(&self, speaker: &str, utterance: &str) -> Result<()> {
        self.lines
            .borrow_mut()
            .push((speaker.to_string(), utterance.to_string()));
        Ok(())
    }
}
