use crate::error::{PlaybookError, Result};
use crate::paths;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::path::Path;

// ---------------------------------------------------------------------------
// Blob store
//
// Content lives as whole JSON documents under fixed names inside .playbook/.
// Every save rewrites the whole blob (last write wins); every load falls
// back to the type's default when the blob is missing or unparseable.
// ---------------------------------------------------------------------------

/// True once `playbook init` has created the `.playbook/` directory.
pub fn is_initialized(root: &Path) -> bool {
    paths::playbook_dir(root).is_dir()
}

/// Return `NotInitialized` unless `.playbook/` exists.
pub fn require_initialized(root: &Path) -> Result<()> {
    if !is_initialized(root) {
        return Err(PlaybookError::NotInitialized);
    }
    Ok(())
}

/// Load a JSON blob, falling back to `T::default()` when the file is
/// missing. A file that exists but fails to parse also yields the default,
/// with a warning — a corrupt blob degrades the guide to its built-in
/// content rather than failing the whole command.
pub fn load_blob<T: DeserializeOwned + Default>(path: &Path) -> Result<T> {
    if !path.exists() {
        return Ok(T::default());
    }
    let data = std::fs::read_to_string(path)?;
    match serde_json::from_str(&data) {
        Ok(value) => Ok(value),
        Err(e) => {
            tracing::warn!(
                path = %path.display(),
                error = %e,
                "corrupt blob, falling back to defaults"
            );
            Ok(T::default())
        }
    }
}

/// Serialize and atomically overwrite a JSON blob.
pub fn save_blob<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    let data = serde_json::to_string_pretty(value)?;
    crate::io::atomic_write(path, data.as_bytes())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use tempfile::TempDir;

    #[derive(Debug, Default, PartialEq, Serialize, Deserialize)]
    struct Blob {
        version: u32,
        entries: Vec<String>,
    }

    #[test]
    fn missing_blob_yields_default() {
        let dir = TempDir::new().unwrap();
        let blob: Blob = load_blob(&dir.path().join("guide.json")).unwrap();
        assert_eq!(blob, Blob::default());
    }

    #[test]
    fn blob_roundtrip() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("guide.json");
        let blob = Blob {
            version: 1,
            entries: vec!["a".into(), "b".into()],
        };
        save_blob(&path, &blob).unwrap();
        let loaded: Blob = load_blob(&path).unwrap();
        assert_eq!(loaded, blob);
    }

    #[test]
    fn corrupt_blob_yields_default() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("guide.json");
        std::fs::write(&path, "{not json at all").unwrap();
        let blob: Blob = load_blob(&path).unwrap();
        assert_eq!(blob, Blob::default());
    }

    #[test]
    fn save_overwrites_whole_blob() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("guide.json");
        save_blob(
            &path,
            &Blob {
                version: 1,
                entries: vec!["old".into()],
            },
        )
        .unwrap();
        save_blob(
            &path,
            &Blob {
                version: 2,
                entries: vec![],
            },
        )
        .unwrap();
        let loaded: Blob = load_blob(&path).unwrap();
        assert_eq!(loaded.version, 2);
        assert!(loaded.entries.is_empty());
    }

    #[test]
    fn require_initialized_checks_playbook_dir() {
        let dir = TempDir::new().unwrap();
        assert!(matches!(
            require_initialized(dir.path()),
            Err(PlaybookError::NotInitialized)
        ));
        std::fs::create_dir_all(dir.path().join(".playbook")).unwrap();
        require_initialized(dir.path()).unwrap();
    }
}
