//! Mods.txt manifest parsing and writing
//!
//! The manifest is an ordered list of `folderName : 0|1` lines with `;`
//! comments, consumed by the engine loader. We read the loader's file and
//! write our own copy next to it.

use std::fs;
use std::io;
use std::path::Path;

use super::LogicMod;
use crate::logging::{log_error, log_warning};
use crate::paths::{KEYBINDS_ENTRY, SHARED_FOLDER};

const HEADER: &str = "; Logic Mods Load order generated by LogicMods";
const FOOTER: &str = "; Built-in keybinds, do not move up!\r\nKeybinds : 1";

/// Parse the manifest at `path`. A missing or unreadable file is logged
/// and treated as an empty load order, never as a fatal error.
pub fn parse_manifest(path: &Path) -> Vec<LogicMod> {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(err) => {
            log_error(&format!(
                "Could not parse logic mods manifest {}: {}",
                path.display(),
                err
            ));
            return Vec::new();
        }
    };
    parse_manifest_text(&content)
}

/// Parse manifest text into entries.
///
/// Lines are split on CRLF as the engine loader writes them. Blank lines
/// and `;` comments are dropped. Each remaining line is split on its last
/// colon: folder name before it, enabled flag after it, both trimmed. A
/// line whose flag does not parse as an integer is skipped with a warning;
/// a single bad line never loses the rest of the file. The flag enables
/// the mod only when it is exactly 1.
///
/// Known limitation: a folder name containing a colon is split at the
/// wrong place when the text after its last colon parses as an integer.
pub fn parse_manifest_text(content: &str) -> Vec<LogicMod> {
    let mut mods = Vec::new();

    for line in content.split("\r\n") {
        if line.is_empty() || line.starts_with(';') {
            continue;
        }
        let text = line.trim();

        let Some(colon) = text.rfind(':') else {
            log_warning(&format!("Invalid logic mod entry: {}", line));
            continue;
        };
        let flag = match text[colon + 1..].trim().parse::<i64>() {
            Ok(flag) => flag,
            Err(_) => {
                log_warning(&format!("Invalid logic mod entry: {}", line));
                continue;
            }
        };

        mods.push(LogicMod {
            folder_name: text[..colon].trim().to_string(),
            enabled: flag == 1,
        });
    }

    mods
}

/// Render a load order as a full manifest document.
///
/// The reserved `shared` and `Keybinds` entries are never user-editable
/// lines; they are filtered out and `Keybinds : 1` is force-appended by the
/// fixed footer regardless of any prior state.
pub fn render_manifest(load_order: &[LogicMod]) -> String {
    let body = load_order
        .iter()
        .filter(|m| {
            let name = m.folder_name.to_lowercase();
            name != SHARED_FOLDER && name != KEYBINDS_ENTRY.to_lowercase()
        })
        .map(|m| format!("{} : {}", m.folder_name, if m.enabled { 1 } else { 0 }))
        .collect::<Vec<_>>()
        .join("\n");

    format!("{}\r\n{}\r\n\r\n{}", HEADER, body, FOOTER)
}

/// Write the rendered manifest to `path`, overwriting any existing file.
pub fn write_manifest(load_order: &[LogicMod], path: &Path) -> io::Result<()> {
    fs::write(path, render_manifest(load_order))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(name: &str, enabled: bool) -> LogicMod {
        LogicMod {
            folder_name: name.to_string(),
            enabled,
        }
    }

    #[test]
    fn test_parse_basic() {
        let mods = parse_manifest_text("Alpha : 1\r\nBeta : 0");
        assert_eq!(mods, vec![entry("Alpha", true), entry("Beta", false)]);
    }

    #[test]
    fn test_parse_skips_comments_and_blanks() {
        let text = "; generated\r\n\r\nAlpha : 1\r\n\r\n; footer\r\nKeybinds : 1";
        let mods = parse_manifest_text(text);
        assert_eq!(mods, vec![entry("Alpha", true), entry("Keybinds", true)]);
    }

    #[test]
    fn test_parse_malformed_line_tolerated() {
        let text = "Alpha : 1\r\nthis line is broken\r\nBeta : 0";
        let mods = parse_manifest_text(text);
        assert_eq!(mods, vec![entry("Alpha", true), entry("Beta", false)]);
    }

    #[test]
    fn test_parse_non_numeric_flag_tolerated() {
        let text = "Alpha : yes\r\nBeta : 1";
        let mods = parse_manifest_text(text);
        assert_eq!(mods, vec![entry("Beta", true)]);
    }

    #[test]
    fn test_parse_only_one_enables() {
        let text = "A : 2\r\nB : 0\r\nC : -1\r\nD : 1";
        let mods = parse_manifest_text(text);
        assert_eq!(
            mods,
            vec![
                entry("A", false),
                entry("B", false),
                entry("C", false),
                entry("D", true)
            ]
        );
    }

    #[test]
    fn test_parse_missing_file_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        assert!(parse_manifest(&dir.path().join("Mods.txt")).is_empty());
    }

    #[test]
    fn test_render_filters_reserved_and_appends_keybinds() {
        let order = vec![
            entry("Alpha", false),
            entry("shared", true),
            entry("Keybinds", false),
            entry("Beta", true),
        ];
        let doc = render_manifest(&order);

        assert!(doc.starts_with("; Logic Mods Load order"));
        assert!(doc.contains("Alpha : 0\nBeta : 1"));
        // Reserved entries never appear as user lines, but the footer always
        // re-adds Keybinds enabled.
        assert!(!doc.contains("shared"));
        assert!(!doc.contains("Keybinds : 0"));
        assert!(doc.ends_with("; Built-in keybinds, do not move up!\r\nKeybinds : 1"));
    }

    #[test]
    fn test_write_overwrites() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("mods1.txt");
        fs::write(&path, "old content").unwrap();

        write_manifest(&[entry("Alpha", true)], &path).unwrap();
        let written = fs::read_to_string(&path).unwrap();
        assert_eq!(written, render_manifest(&[entry("Alpha", true)]));
    }
}
