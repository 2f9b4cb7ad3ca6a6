//! Game install detection
//!
//! Locates the Hogwarts Legacy install root by scanning known Steam
//! installation paths (native, Flatpak, Snap) and their library folders.
//! A configured game path overrides detection entirely.

use std::fs;
use std::path::{Path, PathBuf};

use crate::config::AppConfig;
use crate::logging::{log_info, log_warning};
use crate::paths::{GAME_FOLDER, STEAM_APP_ID};

/// All possible Steam installation paths to check, relative to $HOME
const STEAM_PATHS: &[&str] = &[
    ".local/share/Steam",
    ".steam/debian-installation",
    ".steam/steam",
    ".var/app/com.valvesoftware.Steam/data/Steam",
    ".var/app/com.valvesoftware.Steam/.local/share/Steam",
    "snap/steam/common/.local/share/Steam",
];

/// Resolve the game install root, or `None` if it cannot be found.
///
/// A configured override is authoritative: when it is set but the directory
/// is gone, resolution fails with a warning instead of silently picking up
/// some other copy of the game via Steam detection.
pub fn find_install_path(config: &AppConfig) -> Option<PathBuf> {
    if let Some(path) = &config.game_path {
        if path.is_dir() {
            return Some(path.clone());
        }
        log_warning(&format!(
            "Configured game path does not exist: {}",
            path.display()
        ));
        return None;
    }

    let home = dirs::home_dir()?;
    detect_steam_install(&home)
}

/// Scan the Steam installations under `home` for the game.
///
/// A library only counts when it holds the appmanifest for the game's app
/// id; a bare `common/<game>` directory with no manifest is a leftover, not
/// an install.
fn detect_steam_install(home: &Path) -> Option<PathBuf> {
    let manifest_name = format!("appmanifest_{}.acf", STEAM_APP_ID);

    for relative_path in STEAM_PATHS {
        let steam_root = home.join(relative_path);
        if !steam_root.join("steamapps").exists() {
            continue;
        }

        for library in library_folders(&steam_root) {
            let steamapps = library.join("steamapps");
            if !steamapps.join(&manifest_name).is_file() {
                continue;
            }
            let install = steamapps.join("common").join(GAME_FOLDER);
            if install.is_dir() {
                log_info(&format!("Found game install at {}", install.display()));
                return Some(install);
            }
        }
    }

    None
}

/// All Steam library roots known to an installation, including the
/// installation itself. Extra libraries come from libraryfolders.vdf.
fn library_folders(steam_root: &Path) -> Vec<PathBuf> {
    let mut libraries = vec![steam_root.to_path_buf()];

    let vdf_path = steam_root.join("steamapps/libraryfolders.vdf");
    if let Ok(content) = fs::read_to_string(&vdf_path) {
        for path in parse_library_paths(&content) {
            let path = PathBuf::from(path);
            if !libraries.contains(&path) {
                libraries.push(path);
            }
        }
    }

    libraries
}

/// Extract "path" values from a libraryfolders.vdf document.
///
/// The format is Valve KeyValues; we only need the path entries, so a line
/// scan for `"path" "<value>"` pairs is enough.
fn parse_library_paths(content: &str) -> Vec<String> {
    let mut paths = Vec::new();

    for line in content.lines() {
        let line = line.trim();
        if !line.starts_with("\"path\"") {
            continue;
        }
        // Value is the second quoted token on the line
        let mut quoted = line.split('"').filter(|s| !s.trim().is_empty());
        let _key = quoted.next();
        if let Some(value) = quoted.next() {
            paths.push(value.to_string());
        }
    }

    paths
}
