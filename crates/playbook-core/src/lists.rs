use crate::error::Result;
use crate::types::ListKind;
use crate::{paths, store};
use serde::{Deserialize, Serialize};
use std::path::Path;

// ---------------------------------------------------------------------------
// Lists
// ---------------------------------------------------------------------------

/// Managed vocabularies blob at `.playbook/lists.json`: the tag, category,
/// and line-of-business values the admin panel offers as choices.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Lists {
    #[serde(default = "default_version")]
    pub version: u32,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub categories: Vec<String>,
    #[serde(default)]
    pub lobs: Vec<String>,
}

fn default_version() -> u32 {
    1
}

impl Default for Lists {
    fn default() -> Self {
        Self {
            version: 1,
            tags: Vec::new(),
            categories: Vec::new(),
            lobs: Vec::new(),
        }
    }
}

impl Lists {
    /// The vocabularies written at init.
    pub fn seeded() -> Self {
        Self {
            version: 1,
            tags: vec![
                "pricing".into(),
                "compliance".into(),
                "integration".into(),
                "demo".into(),
            ],
            categories: vec!["enablement".into(), "collateral".into(), "tooling".into()],
            lobs: vec!["enterprise".into(), "mid-market".into(), "smb".into()],
        }
    }

    pub fn load(root: &Path) -> Result<Self> {
        store::require_initialized(root)?;
        store::load_blob(&paths::lists_path(root))
    }

    pub fn save(&self, root: &Path) -> Result<()> {
        store::save_blob(&paths::lists_path(root), self)
    }

    pub fn values(&self, kind: ListKind) -> &[String] {
        match kind {
            ListKind::Tags => &self.tags,
            ListKind::Categories => &self.categories,
            ListKind::Lobs => &self.lobs,
        }
    }

    fn values_mut(&mut self, kind: ListKind) -> &mut Vec<String> {
        match kind {
            ListKind::Tags => &mut self.tags,
            ListKind::Categories => &mut self.categories,
            ListKind::Lobs => &mut self.lobs,
        }
    }

    /// Add a value, skipping duplicates. Returns true if added.
    pub fn add(&mut self, kind: ListKind, value: impl Into<String>) -> bool {
        let value = value.into();
        let list = self.values_mut(kind);
        if list.contains(&value) {
            return false;
        }
        list.push(value);
        true
    }

    /// Remove a value. Returns true if it was present.
    pub fn remove(&mut self, kind: ListKind, value: &str) -> bool {
        let list = self.values_mut(kind);
        let before = list.len();
        list.retain(|v| v != value);
        list.len() != before
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn add_is_deduplicating() {
        let mut lists = Lists::default();
        assert!(lists.add(ListKind::Tags, "pricing"));
        assert!(!lists.add(ListKind::Tags, "pricing"));
        assert_eq!(lists.tags, vec!["pricing"]);
    }

    #[test]
    fn remove_reports_presence() {
        let mut lists = Lists::seeded();
        assert!(lists.remove(ListKind::Lobs, "smb"));
        assert!(!lists.remove(ListKind::Lobs, "smb"));
    }

    #[test]
    fn values_by_kind() {
        let lists = Lists::seeded();
        assert!(lists.values(ListKind::Categories).contains(&"collateral".to_string()));
        assert!(lists.values(ListKind::Tags).contains(&"demo".to_string()));
    }

    #[test]
    fn lists_roundtrip() {
        let dir = TempDir::new().unwrap();
        crate::io::ensure_dir(&dir.path().join(".playbook")).unwrap();

        let mut lists = Lists::seeded();
        lists.add(ListKind::Categories, "battlecards");
        lists.save(dir.path()).unwrap();

        let loaded = Lists::load(dir.path()).unwrap();
        assert!(loaded.categories.contains(&"battlecards".to_string()));
    }
}
