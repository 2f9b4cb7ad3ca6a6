//! Load order reconciliation

use super::LogicMod;

/// Merge discovered folders with the saved load order.
///
/// Discovery order is authoritative: every discovered folder produces
/// exactly one entry, re-sequenced to discovery order on every call. A
/// saved entry whose folder name matches case-insensitively is reused
/// verbatim, keeping its casing and enabled flag; a folder with no saved
/// entry defaults to enabled. Saved entries for folders no longer on disk
/// produce nothing.
pub fn merge_load_order(folders: &[String], saved: &[LogicMod]) -> Vec<LogicMod> {
    folders
        .iter()
        .map(|folder| {
            saved
                .iter()
                .find(|e| e.folder_name.to_lowercase() == folder.to_lowercase())
                .cloned()
                .unwrap_or_else(|| LogicMod {
                    folder_name: folder.clone(),
                    enabled: true,
                })
        })
        .collect()
}
