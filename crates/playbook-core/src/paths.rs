use crate::error::{PlaybookError, Result};
use regex::Regex;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

// ---------------------------------------------------------------------------
// Directory constants
// ---------------------------------------------------------------------------

pub const PLAYBOOK_DIR: &str = ".playbook";
pub const SESSION_DIR: &str = ".playbook/session";

/// Fixed blob names. Each one is a single JSON document, overwritten whole
/// on every save — the storage layout is a handful of named keys, not a
/// database.
pub const GUIDE_FILE: &str = ".playbook/guide.json";
pub const RESOURCES_FILE: &str = ".playbook/resources.json";
pub const LISTS_FILE: &str = ".playbook/lists.json";
pub const ANALYTICS_FILE: &str = ".playbook/analytics.json";

pub const CONFIG_FILE: &str = ".playbook/config.yaml";
pub const API_KEY_FILE: &str = ".playbook/session/api_key";

// ---------------------------------------------------------------------------
// Path helpers
// ---------------------------------------------------------------------------

pub fn playbook_dir(root: &Path) -> PathBuf {
    root.join(PLAYBOOK_DIR)
}

pub fn session_dir(root: &Path) -> PathBuf {
    root.join(SESSION_DIR)
}

pub fn guide_path(root: &Path) -> PathBuf {
    root.join(GUIDE_FILE)
}

pub fn resources_path(root: &Path) -> PathBuf {
    root.join(RESOURCES_FILE)
}

pub fn lists_path(root: &Path) -> PathBuf {
    root.join(LISTS_FILE)
}

pub fn analytics_path(root: &Path) -> PathBuf {
    root.join(ANALYTICS_FILE)
}

pub fn config_path(root: &Path) -> PathBuf {
    root.join(CONFIG_FILE)
}

pub fn api_key_path(root: &Path) -> PathBuf {
    root.join(API_KEY_FILE)
}

// ---------------------------------------------------------------------------
// Slug validation
// ---------------------------------------------------------------------------

static SLUG_RE: OnceLock<Regex> = OnceLock::new();

fn slug_re() -> &'static Regex {
    SLUG_RE.get_or_init(|| Regex::new(r"^[a-z0-9][a-z0-9\-]*[a-z0-9]$|^[a-z0-9]$").unwrap())
}

pub fn validate_slug(slug: &str) -> Result<()> {
    if slug.is_empty() || slug.len() > 64 || !slug_re().is_match(slug) {
        return Err(PlaybookError::InvalidSlug(slug.to_string()));
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_slugs() {
        for slug in ["cfo", "a", "vp-engineering-2", "x1"] {
            validate_slug(slug).unwrap_or_else(|_| panic!("expected valid: {slug}"));
        }
    }

    #[test]
    fn invalid_slugs() {
        for slug in [
            "",
            "-starts-with-dash",
            "ends-with-dash-",
            "has spaces",
            "UPPER",
            "a_b",
        ] {
            assert!(validate_slug(slug).is_err(), "expected invalid: {slug}");
        }
    }

    #[test]
    fn path_helpers() {
        let root = Path::new("/tmp/proj");
        assert_eq!(
            config_path(root),
            PathBuf::from("/tmp/proj/.playbook/config.yaml")
        );
        assert_eq!(
            guide_path(root),
            PathBuf::from("/tmp/proj/.playbook/guide.json")
        );
        assert_eq!(
            analytics_path(root),
            PathBuf::from("/tmp/proj/.playbook/analytics.json")
        );
    }
}
