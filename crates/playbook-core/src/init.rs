use crate::config::Config;
use crate::error::Result;
use crate::guide::GuideState;
use crate::lists::Lists;
use crate::{io, paths, store};
use std::path::Path;

/// Outcome of `init`: what already existed and what was written.
#[derive(Debug, Clone, Copy)]
pub struct InitReport {
    pub created: bool,
}

/// Initialize (or re-initialize) a playbook root. Idempotent: existing
/// blobs are left alone, only missing pieces are written.
pub fn init(root: &Path, project_name: &str) -> Result<InitReport> {
    let already = store::is_initialized(root);

    io::ensure_dir(&paths::playbook_dir(root))?;
    io::ensure_dir(&paths::session_dir(root))?;

    if !paths::config_path(root).exists() {
        Config::new(project_name).save(root)?;
    }
    if !paths::guide_path(root).exists() {
        GuideState::seeded().save(root)?;
    }
    if !paths::lists_path(root).exists() {
        Lists::seeded().save(root)?;
    }

    io::ensure_gitignore_entry(root, paths::SESSION_DIR)?;

    Ok(InitReport { created: !already })
}
