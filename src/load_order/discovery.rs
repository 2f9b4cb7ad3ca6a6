//! Logic mod folder discovery

use std::fs;
use std::path::Path;

use crate::logging::{log_error, log_warning};
use crate::paths::SHARED_FOLDER;

/// List candidate mod folders directly under the logic mods directory.
///
/// Entries with a file extension in their name are assumed to be files, the
/// reserved shared folder is skipped, and entries whose metadata cannot be
/// read are skipped with a warning. An unreadable mods directory yields an
/// empty list; discovery failure never aborts a refresh.
///
/// The order of the returned names is whatever the directory enumeration
/// yields. That order becomes the load order, so it must not be re-sorted
/// here.
pub fn list_mod_folders(mods_path: &Path) -> Vec<String> {
    let entries = match fs::read_dir(mods_path) {
        Ok(entries) => entries,
        Err(err) => {
            log_error(&format!(
                "Error getting folder list for logic mods load order: {}",
                err
            ));
            return Vec::new();
        }
    };

    let mut folders = Vec::new();
    for entry in entries {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) => {
                log_warning(&format!("Error reading directory entry: {}", err));
                continue;
            }
        };

        let name = entry.file_name().to_string_lossy().to_string();
        if Path::new(&name).extension().is_some() {
            continue;
        }
        if name.to_lowercase() == SHARED_FOLDER {
            continue;
        }

        match fs::metadata(mods_path.join(&name)) {
            Ok(meta) if meta.is_dir() => folders.push(name),
            Ok(_) => {}
            Err(err) => {
                log_warning(&format!("Error in directory check for {}: {}", name, err));
            }
        }
    }

    folders
}
