use std::path::PathBuf;
use tokio::sync::broadcast;

/// Shared application state passed to all route handlers.
#[derive(Clone)]
pub struct AppState {
    pub root: PathBuf,
    /// Carries the relative path of the data blob that changed.
    pub event_tx: broadcast::Sender<String>,
}

impl AppState {
    pub fn new(root: PathBuf) -> Self {
        let (tx, _) = broadcast::channel(64);
        let state = Self {
            root,
            event_tx: tx.clone(),
        };

        // Watch the data blobs' mtimes and broadcast the one that changed.
        // This catches both web-UI mutations and external CLI edits.
        // Guard: only spawn if inside a Tokio runtime (skipped in sync unit tests).
        if tokio::runtime::Handle::try_current().is_ok() {
            let watched: Vec<(&'static str, PathBuf)> = [
                playbook_core::paths::GUIDE_FILE,
                playbook_core::paths::RESOURCES_FILE,
                playbook_core::paths::LISTS_FILE,
            ]
            .iter()
            .map(|f| (*f, state.root.join(f)))
            .collect();

            tokio::spawn(async move {
                let mut last = vec![None::<std::time::SystemTime>; watched.len()];
                loop {
                    tokio::time::sleep(std::time::Duration::from_millis(800)).await;
                    for (i, (name, path)) in watched.iter().enumerate() {
                        if let Ok(meta) = tokio::fs::metadata(path).await {
                            if let Ok(mtime) = meta.modified() {
                                if last[i] != Some(mtime) {
                                    last[i] = Some(mtime);
                                    let _ = tx.send(name.to_string());
                                }
                            }
                        }
                    }
                }
            });
        }

        state
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_state_stores_root() {
        let state = AppState::new(PathBuf::from("/tmp/test"));
        assert_eq!(state.root, PathBuf::from("/tmp/test"));
    }

    #[test]
    fn subscribers_receive_sent_blob_name() {
        let state = AppState::new(PathBuf::from("/tmp/test"));
        let mut rx = state.event_tx.subscribe();
        state
            .event_tx
            .send(playbook_core::paths::GUIDE_FILE.to_string())
            .unwrap();
        assert_eq!(rx.try_recv().unwrap(), playbook_core::paths::GUIDE_FILE);
    }
}
