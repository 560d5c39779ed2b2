use playbook_core::paths;
use std::path::{Path, PathBuf};

/// Resolve the playbook root directory.
///
/// Priority:
/// 1. `--root` flag / `PLAYBOOK_ROOT` env var (passed in as `explicit`)
/// 2. Nearest ancestor of `cwd` containing `.playbook/`
/// 3. Nearest ancestor of `cwd` containing `.git/`
/// 4. Fall back to `cwd`
pub fn resolve_root(explicit: Option<&Path>) -> PathBuf {
    if let Some(p) = explicit {
        return p.to_path_buf();
    }

    let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    ancestor_with(&cwd, paths::PLAYBOOK_DIR)
        .or_else(|| ancestor_with(&cwd, ".git"))
        .unwrap_or(cwd)
}

fn ancestor_with(start: &Path, marker: &str) -> Option<PathBuf> {
    start
        .ancestors()
        .find(|dir| dir.join(marker).is_dir())
        .map(Path::to_path_buf)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn explicit_root_wins() {
        let dir = TempDir::new().unwrap();
        let result = resolve_root(Some(dir.path()));
        assert_eq!(result, dir.path());
    }

    #[test]
    fn finds_playbook_dir_from_subdirectory() {
        let dir = TempDir::new().unwrap();
        std::fs::create_dir_all(dir.path().join(".playbook")).unwrap();
        let deep = dir.path().join("docs/personas");
        std::fs::create_dir_all(&deep).unwrap();

        let found = ancestor_with(&deep, paths::PLAYBOOK_DIR).unwrap();
        assert_eq!(found, dir.path());
    }

    #[test]
    fn falls_back_to_git_dir() {
        let dir = TempDir::new().unwrap();
        std::fs::create_dir_all(dir.path().join(".git")).unwrap();
        let deep = dir.path().join("src");
        std::fs::create_dir_all(&deep).unwrap();

        assert_eq!(ancestor_with(&deep, paths::PLAYBOOK_DIR), None);
        assert_eq!(ancestor_with(&deep, ".git").unwrap(), dir.path());
    }

    #[test]
    fn playbook_dir_beats_enclosing_git_dir() {
        // A playbook nested inside a git checkout resolves to the playbook.
        let dir = TempDir::new().unwrap();
        std::fs::create_dir_all(dir.path().join(".git")).unwrap();
        let nested = dir.path().join("sales/playbook");
        std::fs::create_dir_all(nested.join(".playbook")).unwrap();

        let found = ancestor_with(&nested, paths::PLAYBOOK_DIR).unwrap();
        assert_eq!(found, nested);
    }

    #[test]
    fn no_marker_yields_none() {
        let dir = TempDir::new().unwrap();
        assert_eq!(ancestor_with(dir.path(), paths::PLAYBOOK_DIR), None);
    }
}
