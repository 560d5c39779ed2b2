use crate::error::{PlaybookError, Result};
use crate::types::ResourceType;
use crate::{paths, store};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::Path;

// ---------------------------------------------------------------------------
// Resource
// ---------------------------------------------------------------------------

/// A link or document reference the team shares during the cycle.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Resource {
    pub id: String,
    pub title: String,
    pub url: String,
    pub resource_type: ResourceType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub industry: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    pub created_at: DateTime<Utc>,
}

impl Resource {
    pub fn new(
        title: impl Into<String>,
        url: impl Into<String>,
        resource_type: ResourceType,
    ) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            title: title.into(),
            url: url.into(),
            resource_type,
            industry: None,
            tags: Vec::new(),
            created_at: Utc::now(),
        }
    }
}

// ---------------------------------------------------------------------------
// ResourceLibrary
// ---------------------------------------------------------------------------

/// The custom-resource blob at `.playbook/resources.json`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResourceLibrary {
    #[serde(default = "default_version")]
    pub version: u32,
    #[serde(default)]
    pub items: Vec<Resource>,
}

fn default_version() -> u32 {
    1
}

impl Default for ResourceLibrary {
    fn default() -> Self {
        Self {
            version: 1,
            items: Vec::new(),
        }
    }
}

impl ResourceLibrary {
    pub fn load(root: &Path) -> Result<Self> {
        store::require_initialized(root)?;
        store::load_blob(&paths::resources_path(root))
    }

    pub fn save(&self, root: &Path) -> Result<()> {
        store::save_blob(&paths::resources_path(root), self)
    }

    pub fn get(&self, id: &str) -> Result<&Resource> {
        self.items
            .iter()
            .find(|r| r.id == id)
            .ok_or_else(|| PlaybookError::ResourceNotFound(id.to_string()))
    }

    /// Add a resource and return its generated id.
    pub fn add(&mut self, resource: Resource) -> String {
        let id = resource.id.clone();
        self.items.push(resource);
        id
    }

    pub fn remove(&mut self, id: &str) -> Result<Resource> {
        let idx = self
            .items
            .iter()
            .position(|r| r.id == id)
            .ok_or_else(|| PlaybookError::ResourceNotFound(id.to_string()))?;
        Ok(self.items.remove(idx))
    }

    /// Replace the tag set on a resource. Tags are deduplicated, first
    /// occurrence wins.
    pub fn set_tags(&mut self, id: &str, tags: Vec<String>) -> Result<()> {
        let resource = self
            .items
            .iter_mut()
            .find(|r| r.id == id)
            .ok_or_else(|| PlaybookError::ResourceNotFound(id.to_string()))?;
        let mut seen = Vec::new();
        for tag in tags {
            if !seen.contains(&tag) {
                seen.push(tag);
            }
        }
        resource.tags = seen;
        Ok(())
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
    fn add_get_remove() {
        let mut lib = ResourceLibrary::default();
        let id = lib.add(Resource::new(
            "Security whitepaper",
            "https://example.com/wp.pdf",
            ResourceType::Doc,
        ));
        assert_eq!(lib.get(&id).unwrap().title, "Security whitepaper");

        let removed = lib.remove(&id).unwrap();
        assert_eq!(removed.id, id);
        assert!(matches!(
            lib.get(&id),
            Err(PlaybookError::ResourceNotFound(_))
        ));
    }

    #[test]
    fn set_tags_dedups() {
        let mut lib = ResourceLibrary::default();
        let id = lib.add(Resource::new("Demo deck", "https://x", ResourceType::Deck));
        lib.set_tags(
            &id,
            vec!["demo".into(), "pricing".into(), "demo".into()],
        )
        .unwrap();
        assert_eq!(lib.get(&id).unwrap().tags, vec!["demo", "pricing"]);
    }

    #[test]
    fn library_roundtrip() {
        let dir = TempDir::new().unwrap();
        crate::io::ensure_dir(&dir.path().join(".playbook")).unwrap();

        let mut lib = ResourceLibrary::default();
        lib.add(Resource::new(
            "ROI calculator",
            "https://example.com/roi",
            ResourceType::Tool,
        ));
        lib.save(dir.path()).unwrap();

        let loaded = ResourceLibrary::load(dir.path()).unwrap();
        assert_eq!(loaded.items.len(), 1);
        assert_eq!(loaded.items[0].resource_type, ResourceType::Tool);
    }

    #[test]
    fn ids_are_unique() {
        let a = Resource::new("a", "https://a", ResourceType::Link);
        let b = Resource::new("b", "https://b", ResourceType::Link);
        assert_ne!(a.id, b.id);
    }
}
