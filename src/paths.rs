//! Application and game path constants

use std::path::{Path, PathBuf};
use std::sync::LazyLock;

/// Steam App ID for Hogwarts Legacy
pub const STEAM_APP_ID: &str = "990080";

/// Install folder name under steamapps/common
pub const GAME_FOLDER: &str = "Hogwarts Legacy";

/// Logic mods directory, relative to the game install root
pub const MODS_RELATIVE_PATH: &[&str] = &["Phoenix", "Binaries", "Win64", "Mods"];

/// Manifest file read by the engine loader (and by us)
pub const MANIFEST_FILE: &str = "Mods.txt";

/// Manifest file we write. Deliberately not the same file we read;
/// the loader's own file is left untouched until that behavior is confirmed.
pub const MANIFEST_OUT_FILE: &str = "mods1.txt";

/// Reserved folder holding shared lua libraries, never a mod entry
pub const SHARED_FOLDER: &str = "shared";

/// Reserved built-in entry, always appended enabled by the writer
pub const KEYBINDS_ENTRY: &str = "Keybinds";

/// Logic mods directory for a given game install root
pub fn logic_mods_dir(install_path: &Path) -> PathBuf {
    MODS_RELATIVE_PATH
        .iter()
        .fold(install_path.to_path_buf(), |p, seg| p.join(seg))
}

pub static DEFAULT_APP_PATH: LazyLock<PathBuf> = LazyLock::new(|| {
    let mut path = dirs::home_dir().unwrap_or_default();

    if std::env::var("LOGICMODS_XDG_PATH").is_ok() {
        path.push(".config")
    }

    path.push("LogicMods");
    path
});

/// Computes a path under the LogicMods app directory.
///
/// Returns a `&Path` referencing the app directory itself if no arguments are
/// passed in, or a `PathBuf` created by joining all of the arguments to the
/// base directory if at least one argument is passed in.
#[macro_export]
macro_rules! app_path {
    () => {
        $crate::paths::DEFAULT_APP_PATH.as_path()
    };

    ( $( $path:expr ),+ $(,)? ) => {
        [
            $crate::paths::DEFAULT_APP_PATH.as_path(),
            $( std::path::Path::new(&$path) ),+
        ].into_iter().collect::<std::path::PathBuf>()
    };
}
