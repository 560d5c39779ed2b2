use crate::error::Result;
use crate::{paths, store};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::Path;

// ---------------------------------------------------------------------------
// Events
// ---------------------------------------------------------------------------

/// A local interaction event. Inspection-only: nothing here ever leaves
/// the machine.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Event {
    pub id: String,
    pub kind: String,
    #[serde(default)]
    pub detail: String,
    pub timestamp: DateTime<Utc>,
}

/// The event blob at `.playbook/analytics.json`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventLog {
    #[serde(default = "default_version")]
    pub version: u32,
    #[serde(default)]
    pub events: Vec<Event>,
}

fn default_version() -> u32 {
    1
}

impl Default for EventLog {
    fn default() -> Self {
        Self {
            version: 1,
            events: Vec::new(),
        }
    }
}

/// Keep the log bounded; older events fall off on write.
const MAX_EVENTS: usize = 500;

impl EventLog {
    pub fn load(root: &Path) -> Result<Self> {
        store::require_initialized(root)?;
        store::load_blob(&paths::analytics_path(root))
    }

    pub fn save(&self, root: &Path) -> Result<()> {
        store::save_blob(&paths::analytics_path(root), self)
    }

    pub fn append(&mut self, kind: impl Into<String>, detail: impl Into<String>) {
        self.events.push(Event {
            id: uuid::Uuid::new_v4().to_string(),
            kind: kind.into(),
            detail: detail.into(),
            timestamp: Utc::now(),
        });
        if self.events.len() > MAX_EVENTS {
            self.events.drain(..self.events.len() - MAX_EVENTS);
        }
    }

    pub fn clear(&mut self) {
        self.events.clear();
    }
}

/// Load-append-save in one step. Used by CLI commands and server routes
/// that want to note an interaction without threading the log around.
pub fn record(root: &Path, kind: &str, detail: &str) -> Result<()> {
    let mut log = EventLog::load(root)?;
    log.append(kind, detail);
    log.save(root)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn append_and_clear() {
        let mut log = EventLog::default();
        log.append("search", "query=pricing");
        log.append("persona_viewed", "cfo");
        assert_eq!(log.events.len(), 2);
        assert_eq!(log.events[0].kind, "search");
        assert_ne!(log.events[0].id, log.events[1].id);

        log.clear();
        assert!(log.events.is_empty());
    }

    #[test]
    fn log_trims_to_cap() {
        let mut log = EventLog::default();
        for i in 0..(MAX_EVENTS + 25) {
            log.append("tick", format!("{i}"));
        }
        assert_eq!(log.events.len(), MAX_EVENTS);
        // Oldest entries dropped, newest kept
        assert_eq!(log.events.last().unwrap().detail, format!("{}", MAX_EVENTS + 24));
        assert_eq!(log.events[0].detail, "25");
    }

    #[test]
    fn record_persists_across_loads() {
        let dir = TempDir::new().unwrap();
        crate::io::ensure_dir(&dir.path().join(".playbook")).unwrap();

        record(dir.path(), "search", "query=demo").unwrap();
        record(dir.path(), "resource_added", "roi-calc").unwrap();

        let log = EventLog::load(dir.path()).unwrap();
        assert_eq!(log.events.len(), 2);
        assert_eq!(log.events[1].kind, "resource_added");
    }

    #[test]
    fn corrupt_log_starts_fresh() {
        let dir = TempDir::new().unwrap();
        crate::io::ensure_dir(&dir.path().join(".playbook")).unwrap();
        std::fs::write(dir.path().join(".playbook/analytics.json"), "[oops").unwrap();

        let log = EventLog::load(dir.path()).unwrap();
        assert!(log.events.is_empty());
    }
}
