// Chunk: docs/chunks/overlay_options - Persisted overlay options

//! Persisted overlay options.
//!
//! # Design
//!
//! Options live in a small JSON file under the platform config directory
//! (`~/.config/inline-input/options.json` on Linux). Loading degrades
//! gracefully: a missing, malformed, or version-mismatched file yields the
//! defaults plus a diagnostic on stderr, never an error the host has to
//! handle. Saving writes a temp file in the same directory and renames it
//! into place so a crash cannot leave a truncated options file behind.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Bumped when the options file layout changes incompatibly.
const SCHEMA_VERSION: u32 = 1;

const APP_DIR_NAME: &str = "inline-input";
const OPTIONS_FILENAME: &str = "options.json";

/// Tunable overlay behavior, shared by the controller (placeholder) and
/// the widget and geometry (zone shape).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OverlayOptions {
    /// Hint shown while the field is empty.
    pub placeholder: String,
    /// Zone height below the anchor line, in editor rows.
    pub height_in_lines: usize,
    /// Thickness of the zone's frame strips, in pixels.
    pub frame_width: f32,
    /// Whether the zone draws an arrow pointing at the anchor column.
    pub show_arrow: bool,
}

impl Default for OverlayOptions {
    fn default() -> Self {
        Self {
            placeholder: "Enter text to insert...".to_string(),
            height_in_lines: 2,
            frame_width: 1.0,
            show_arrow: true,
        }
    }
}

/// On-disk envelope around the options.
#[derive(Debug, Serialize, Deserialize)]
struct OptionsData {
    schema_version: u32,
    options: OverlayOptions,
}

/// Returns the options file path, creating the app's config directory if
/// needed. Returns `None` when no config directory is available.
fn options_file_path() -> Option<PathBuf> {
    let config_dir = dirs::config_dir()?;
    let app_dir = config_dir.join(APP_DIR_NAME);
    if let Err(e) = fs::create_dir_all(&app_dir) {
        eprintln!("Failed to create config directory {:?}: {}", app_dir, e);
        return None;
    }
    Some(app_dir.join(OPTIONS_FILENAME))
}

fn write_options_file(path: &Path, options: &OverlayOptions) -> io::Result<()> {
    let data = OptionsData {
        schema_version: SCHEMA_VERSION,
        options: options.clone(),
    };
    let json = serde_json::to_string_pretty(&data)?;

    // Temp file plus rename keeps the swap atomic on the same filesystem.
    let tmp_path = path.with_extension("json.tmp");
    fs::write(&tmp_path, json)?;
    fs::rename(&tmp_path, path)?;
    Ok(())
}

fn read_options_file(path: &Path) -> Option<OverlayOptions> {
    let json = match fs::read_to_string(path) {
        Ok(json) => json,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return None,
        Err(e) => {
            eprintln!("Failed to read options file {:?}: {}", path, e);
            return None;
        }
    };

    let data: OptionsData = match serde_json::from_str(&json) {
        Ok(data) => data,
        Err(e) => {
            eprintln!("Ignoring malformed options file {:?}: {}", path, e);
            return None;
        }
    };

    if data.schema_version != SCHEMA_VERSION {
        eprintln!(
            "Ignoring options file with schema version {} (expected {})",
            data.schema_version, SCHEMA_VERSION
        );
        return None;
    }

    Some(data.options)
}

/// Saves `options` to the platform config directory.
pub fn save_options(options: &OverlayOptions) -> io::Result<()> {
    let Some(path) = options_file_path() else {
        return Ok(());
    };
    write_options_file(&path, options)
}

/// Loads options from the platform config directory, falling back to the
/// defaults when no usable file exists.
pub fn load_options() -> OverlayOptions {
    options_file_path()
        .and_then(|path| read_options_file(&path))
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    // ==================== Round trip ====================

    #[test]
    fn test_write_then_read_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(OPTIONS_FILENAME);

        let options = OverlayOptions {
            placeholder: "Type here".to_string(),
            height_in_lines: 3,
            frame_width: 2.0,
            show_arrow: false,
        };
        write_options_file(&path, &options).unwrap();

        assert_eq!(read_options_file(&path), Some(options));
    }

    #[test]
    fn test_write_leaves_no_temp_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(OPTIONS_FILENAME);

        write_options_file(&path, &OverlayOptions::default()).unwrap();

        assert!(path.exists());
        assert!(!path.with_extension("json.tmp").exists());
    }

    // ==================== Degradation ====================

    #[test]
    fn test_missing_file_reads_as_none() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(OPTIONS_FILENAME);

        assert_eq!(read_options_file(&path), None);
    }

    #[test]
    fn test_malformed_file_reads_as_none() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(OPTIONS_FILENAME);
        fs::write(&path, "{ this is not json").unwrap();

        assert_eq!(read_options_file(&path), None);
    }

    #[test]
    fn test_schema_version_mismatch_reads_as_none() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(OPTIONS_FILENAME);
        let json = r#"{
            "schema_version": 99,
            "options": {
                "placeholder": "x",
                "height_in_lines": 2,
                "frame_width": 1.0,
                "show_arrow": true
            }
        }"#;
        fs::write(&path, json).unwrap();

        assert_eq!(read_options_file(&path), None);
    }

    // ==================== Defaults ====================

    #[test]
    fn test_default_options() {
        let options = OverlayOptions::default();
        assert_eq!(options.placeholder, "Enter text to insert...");
        assert_eq!(options.height_in_lines, 2);
        assert_eq!(options.frame_width, 1.0);
        assert!(options.show_arrow);
    }
}
