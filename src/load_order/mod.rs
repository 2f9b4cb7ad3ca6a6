//! Load order state and refresh pipeline
//!
//! Discovers installed logic mod folders, reconciles them against the saved
//! manifest, holds the result as shared state for presentation layers, and
//! persists it back to disk.

pub mod discovery;
pub mod manifest;
pub mod merge;

use parking_lot::RwLock;
use std::path::Path;
use std::sync::Arc;

use crate::config::AppConfig;
use crate::locator;
use crate::logging::{log_error, log_info};
use crate::paths::{self, MANIFEST_FILE, MANIFEST_OUT_FILE};

// ============================================================================
// Core Types
// ============================================================================

/// A single logic mod: the folder it lives in and whether the loader
/// should apply it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogicMod {
    pub folder_name: String,
    pub enabled: bool,
}

// ============================================================================
// Load Order Manager
// ============================================================================

/// Owns the canonical load order and the refresh pipeline.
///
/// The order is rebuilt from scratch on every refresh and swapped in as a
/// whole; a reader holding the previous snapshot keeps a consistent list
/// and never observes a partially rebuilt one.
pub struct LoadOrderManager {
    config: AppConfig,
    mods: RwLock<Arc<Vec<LogicMod>>>,
}

impl LoadOrderManager {
    pub fn new(config: AppConfig) -> Self {
        Self {
            config,
            mods: RwLock::new(Arc::new(Vec::new())),
        }
    }

    /// Current load order snapshot.
    pub fn current(&self) -> Arc<Vec<LogicMod>> {
        self.mods.read().clone()
    }

    /// Rebuild the load order from disk and persist it.
    ///
    /// Fails only when the game install path cannot be resolved; nothing is
    /// mutated in that case and the message is suitable for showing to the
    /// user. Every other problem (unreadable mods directory, missing or
    /// damaged manifest, failed write) degrades with a logged message and
    /// the refreshed in-memory order is still returned.
    pub fn refresh(&self) -> Result<Arc<Vec<LogicMod>>, String> {
        let Some(game_path) = locator::find_install_path(&self.config) else {
            log_error("Error getting game path");
            return Err(
                "Could not refresh logic mods: unable to locate the Hogwarts Legacy install folder."
                    .to_string(),
            );
        };

        let mods_dir = paths::logic_mods_dir(&game_path);
        Ok(self.refresh_from(&mods_dir))
    }

    /// Refresh against an already resolved mods directory.
    fn refresh_from(&self, mods_dir: &Path) -> Arc<Vec<LogicMod>> {
        let folders = discovery::list_mod_folders(mods_dir);

        // Entries for folders gone from disk are stale; drop them before
        // merging.
        let mut saved = manifest::parse_manifest(&mods_dir.join(MANIFEST_FILE));
        saved.retain(|e| {
            folders
                .iter()
                .any(|f| f.to_lowercase() == e.folder_name.to_lowercase())
        });

        let new_order = Arc::new(merge::merge_load_order(&folders, &saved));
        *self.mods.write() = new_order.clone();
        log_info(&format!("New load order: {} mods", new_order.len()));

        if let Err(err) = manifest::write_manifest(&new_order, &mods_dir.join(MANIFEST_OUT_FILE)) {
            // Best-effort persistence: the in-memory order is already
            // current, so the refresh still succeeds.
            log_error(&format!("Unable to write load order file: {}", err));
        }

        new_order
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::PathBuf;

    fn game_root_with_mods(folders: &[&str], manifest: Option<&str>) -> (tempfile::TempDir, PathBuf)
    {
        let dir = tempfile::tempdir().unwrap();
        let mods_dir = paths::logic_mods_dir(dir.path());
        fs::create_dir_all(&mods_dir).unwrap();
        for folder in folders {
            fs::create_dir(mods_dir.join(folder)).unwrap();
        }
        if let Some(content) = manifest {
            fs::write(mods_dir.join(MANIFEST_FILE), content).unwrap();
        }
        (dir, mods_dir)
    }

    fn manager_for(game_root: &Path) -> LoadOrderManager {
        LoadOrderManager::new(AppConfig {
            game_path: Some(game_root.to_path_buf()),
        })
    }

    fn find<'a>(order: &'a [LogicMod], name: &str) -> Option<&'a LogicMod> {
        order.iter().find(|m| m.folder_name == name)
    }

    #[test]
    fn test_refresh_merges_and_writes() {
        let (root, mods_dir) =
            game_root_with_mods(&["Alpha", "Beta", "shared"], Some("Alpha : 0\r\nGamma : 1"));
        let manager = manager_for(root.path());

        let order = manager.refresh().unwrap();

        assert_eq!(order.len(), 2);
        assert_eq!(find(&order, "Alpha").unwrap().enabled, false);
        assert_eq!(find(&order, "Beta").unwrap().enabled, true);
        assert!(find(&order, "Gamma").is_none());
        assert!(find(&order, "shared").is_none());

        let written = fs::read_to_string(mods_dir.join(MANIFEST_OUT_FILE)).unwrap();
        assert!(written.contains("Alpha : 0"));
        assert!(written.contains("Beta : 1"));
        assert!(!written.contains("Gamma"));
        assert!(written.ends_with("Keybinds : 1"));
    }

    #[test]
    fn test_refresh_updates_shared_state() {
        let (root, _mods_dir) = game_root_with_mods(&["Alpha"], None);
        let manager = manager_for(root.path());

        assert!(manager.current().is_empty());
        let order = manager.refresh().unwrap();
        assert_eq!(manager.current(), order);
    }

    #[test]
    fn test_refresh_missing_manifest_defaults_enabled() {
        let (root, _mods_dir) = game_root_with_mods(&["Alpha", "Beta"], None);
        let manager = manager_for(root.path());

        let order = manager.refresh().unwrap();
        assert_eq!(order.len(), 2);
        assert!(order.iter().all(|m| m.enabled));
    }

    #[test]
    fn test_refresh_missing_mods_dir_degrades_to_empty() {
        // Game root exists but the Mods directory does not.
        let dir = tempfile::tempdir().unwrap();
        let manager = manager_for(dir.path());

        let order = manager.refresh().unwrap();
        assert!(order.is_empty());
    }

    #[test]
    fn test_refresh_unknown_install_path_is_fatal() {
        // A configured game path is authoritative, so pointing it at a
        // directory that no longer exists makes resolution fail without
        // touching the environment.
        let dir = tempfile::tempdir().unwrap();
        let manager = LoadOrderManager::new(AppConfig {
            game_path: Some(dir.path().join("uninstalled")),
        });

        let message = manager.refresh().unwrap_err();
        assert!(message.contains("Could not refresh logic mods"));
        assert!(manager.current().is_empty());
    }

    #[test]
    fn test_refresh_idempotent_output() {
        let (root, mods_dir) =
            game_root_with_mods(&["Alpha", "Beta"], Some("Alpha : 0\r\nBeta : 1"));
        let manager = manager_for(root.path());

        manager.refresh().unwrap();
        let first = fs::read_to_string(mods_dir.join(MANIFEST_OUT_FILE)).unwrap();
        manager.refresh().unwrap();
        let second = fs::read_to_string(mods_dir.join(MANIFEST_OUT_FILE)).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_concurrent_refreshes_settle_on_valid_state() {
        let (root, _mods_dir) = game_root_with_mods(&["Alpha", "Beta"], Some("Alpha : 0"));
        let manager = std::sync::Arc::new(manager_for(root.path()));

        std::thread::scope(|scope| {
            for _ in 0..4 {
                let manager = manager.clone();
                scope.spawn(move || manager.refresh().unwrap());
            }
        });

        // With no filesystem changes, every interleaving computes the same
        // order, so whichever refresh finished last left that order behind.
        let expected = manager.refresh().unwrap();
        assert_eq!(manager.current(), expected);
    }
}
