use crate::error::{PlaybookError, Result};
use crate::persona::Persona;
use crate::stage::{default_stages, Stage};
use crate::types::StageKey;
use crate::{paths, store};
use serde::{Deserialize, Serialize};
use std::path::Path;

// ---------------------------------------------------------------------------
// GuideState
// ---------------------------------------------------------------------------

/// The main content blob: personas plus the fixed set of sales stages.
/// Saved whole to `.playbook/guide.json` on every mutation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GuideState {
    #[serde(default = "default_version")]
    pub version: u32,
    #[serde(default)]
    pub personas: Vec<Persona>,
    #[serde(default)]
    pub stages: Vec<Stage>,
}

fn default_version() -> u32 {
    1
}

impl Default for GuideState {
    fn default() -> Self {
        Self {
            version: 1,
            personas: Vec::new(),
            stages: Vec::new(),
        }
    }
}

impl GuideState {
    /// The state written by `playbook init`: no personas yet, every stage
    /// seeded with starter content.
    pub fn seeded() -> Self {
        Self {
            version: 1,
            personas: Vec::new(),
            stages: default_stages(),
        }
    }

    // -----------------------------------------------------------------------
    // Persistence
    // -----------------------------------------------------------------------

    pub fn load(root: &Path) -> Result<Self> {
        store::require_initialized(root)?;
        store::load_blob(&paths::guide_path(root))
    }

    pub fn save(&self, root: &Path) -> Result<()> {
        store::save_blob(&paths::guide_path(root), self)
    }

    // -----------------------------------------------------------------------
    // Personas
    // -----------------------------------------------------------------------

    pub fn persona(&self, slug: &str) -> Result<&Persona> {
        self.personas
            .iter()
            .find(|p| p.slug == slug)
            .ok_or_else(|| PlaybookError::PersonaNotFound(slug.to_string()))
    }

    pub fn persona_mut(&mut self, slug: &str) -> Result<&mut Persona> {
        self.personas
            .iter_mut()
            .find(|p| p.slug == slug)
            .ok_or_else(|| PlaybookError::PersonaNotFound(slug.to_string()))
    }

    pub fn add_persona(&mut self, persona: Persona) -> Result<()> {
        paths::validate_slug(&persona.slug)?;
        if self.personas.iter().any(|p| p.slug == persona.slug) {
            return Err(PlaybookError::PersonaExists(persona.slug));
        }
        self.personas.push(persona);
        Ok(())
    }

    pub fn remove_persona(&mut self, slug: &str) -> Result<Persona> {
        let idx = self
            .personas
            .iter()
            .position(|p| p.slug == slug)
            .ok_or_else(|| PlaybookError::PersonaNotFound(slug.to_string()))?;
        Ok(self.personas.remove(idx))
    }

    // -----------------------------------------------------------------------
    // Stages
    // -----------------------------------------------------------------------

    pub fn stage(&self, key: StageKey) -> Result<&Stage> {
        self.stages
            .iter()
            .find(|s| s.key == key)
            .ok_or_else(|| PlaybookError::StageNotFound(key.to_string()))
    }

    pub fn stage_mut(&mut self, key: StageKey) -> Result<&mut Stage> {
        self.stages
            .iter_mut()
            .find(|s| s.key == key)
            .ok_or_else(|| PlaybookError::StageNotFound(key.to_string()))
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn init_root(dir: &TempDir) {
        crate::io::ensure_dir(&dir.path().join(".playbook")).unwrap();
    }

    #[test]
    fn load_without_init_fails() {
        let dir = TempDir::new().unwrap();
        assert!(matches!(
            GuideState::load(dir.path()),
            Err(PlaybookError::NotInitialized)
        ));
    }

    #[test]
    fn load_after_init_defaults_to_empty() {
        let dir = TempDir::new().unwrap();
        init_root(&dir);
        let state = GuideState::load(dir.path()).unwrap();
        assert_eq!(state.version, 1);
        assert!(state.personas.is_empty());
    }

    #[test]
    fn guide_roundtrip() {
        let dir = TempDir::new().unwrap();
        init_root(&dir);

        let mut state = GuideState::seeded();
        state
            .add_persona(Persona::new("cco", "Chief Compliance Officer"))
            .unwrap();
        state.save(dir.path()).unwrap();

        let loaded = GuideState::load(dir.path()).unwrap();
        assert_eq!(loaded.personas.len(), 1);
        assert_eq!(loaded.stages.len(), StageKey::all().len());
        assert_eq!(loaded.persona("cco").unwrap().title, "Chief Compliance Officer");
    }

    #[test]
    fn duplicate_persona_rejected() {
        let mut state = GuideState::seeded();
        state.add_persona(Persona::new("cfo", "CFO")).unwrap();
        assert!(matches!(
            state.add_persona(Persona::new("cfo", "Another CFO")),
            Err(PlaybookError::PersonaExists(_))
        ));
    }

    #[test]
    fn invalid_persona_slug_rejected() {
        let mut state = GuideState::seeded();
        assert!(matches!(
            state.add_persona(Persona::new("Bad Slug", "Nope")),
            Err(PlaybookError::InvalidSlug(_))
        ));
    }

    #[test]
    fn remove_persona_returns_record() {
        let mut state = GuideState::seeded();
        state.add_persona(Persona::new("cfo", "CFO")).unwrap();
        let removed = state.remove_persona("cfo").unwrap();
        assert_eq!(removed.slug, "cfo");
        assert!(matches!(
            state.remove_persona("cfo"),
            Err(PlaybookError::PersonaNotFound(_))
        ));
    }

    #[test]
    fn stage_lookup_by_key() {
        let mut state = GuideState::seeded();
        state
            .stage_mut(StageKey::Discover)
            .unwrap()
            .add_question("What changed recently?");
        let stage = state.stage(StageKey::Discover).unwrap();
        assert!(stage.questions.iter().any(|q| q.contains("changed")));
    }

    #[test]
    fn corrupt_guide_blob_degrades_to_default() {
        let dir = TempDir::new().unwrap();
        init_root(&dir);
        std::fs::write(dir.path().join(".playbook/guide.json"), "{broken").unwrap();
        let state = GuideState::load(dir.path()).unwrap();
        assert!(state.personas.is_empty());
        assert!(state.stages.is_empty());
    }
}
