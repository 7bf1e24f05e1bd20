// Application settings
// Loaded from ~/.config/gridport/settings.json

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Directory file dialogs open in. None = the home directory.
    pub dialog_start_dir: Option<PathBuf>,

    /// Show the confirmation message box after a successful conversion
    /// (dialog-driven runs only).
    pub show_success_dialog: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            dialog_start_dir: None,
            show_success_dialog: true,
        }
    }
}

impl Settings {
    fn config_path() -> PathBuf {
        let config_dir = dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("gridport");
        config_dir.join("settings.json")
    }

    /// Load settings from disk, falling back to defaults
    pub fn load() -> Self {
        Self::load_from(&Self::config_path())
    }

    pub fn load_from(path: &Path) -> Self {
        if !path.exists() {
            return Self::default();
        }

        match fs::read_to_string(path) {
            Ok(contents) => {
                // Strip comments (lines starting with //)
                let cleaned: String = contents
                    .lines()
                    .filter(|line| !line.trim().starts_with("//"))
                    .collect::<Vec<_>>()
                    .join("\n");

                match serde_json::from_str(&cleaned) {
                    Ok(settings) => settings,
                    Err(e) => {
                        eprintln!("Error parsing {}: {}", path.display(), e);
                        eprintln!("Using default settings");
                        Self::default()
                    }
                }
            }
            Err(e) => {
                eprintln!("Error reading {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Save settings to the default location
    pub fn save(&self) -> Result<(), String> {
        self.save_to(&Self::config_path())
    }

    pub fn save_to(&self, path: &Path) -> Result<(), String> {
        // Ensure directory exists
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| e.to_string())?;
        }

        let json = serde_json::to_string_pretty(self).map_err(|e| e.to_string())?;

        fs::write(path, json).map_err(|e| e.to_string())
    }

    /// Directory file dialogs should open in.
    pub fn effective_start_dir(&self) -> PathBuf {
        self.dialog_start_dir
            .clone()
            .or_else(dirs::home_dir)
            .unwrap_or_else(|| PathBuf::from("."))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn defaults_when_file_missing() {
        let dir = tempdir().unwrap();
        let settings = Settings::load_from(&dir.path().join("settings.json"));
        assert!(settings.dialog_start_dir.is_none());
        assert!(settings.show_success_dialog);
    }

    #[test]
    fn save_and_reload() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("settings.json");

        let settings = Settings {
            dialog_start_dir: Some(PathBuf::from("/data/incoming")),
            show_success_dialog: false,
        };
        settings.save_to(&path).unwrap();

        let reloaded = Settings::load_from(&path);
        assert_eq!(reloaded.dialog_start_dir, Some(PathBuf::from("/data/incoming")));
        assert!(!reloaded.show_success_dialog);
    }

    #[test]
    fn comment_lines_are_ignored() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("settings.json");
        fs::write(
            &path,
            "// gridport settings\n{\n  \"show_success_dialog\": false\n}\n",
        )
        .unwrap();

        let settings = Settings::load_from(&path);
        assert!(!settings.show_success_dialog);
    }

    #[test]
    fn malformed_json_falls_back_to_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("settings.json");
        fs::write(&path, "{ not json").unwrap();

        let settings = Settings::load_from(&path);
        assert!(settings.show_success_dialog);
    }

    #[test]
    fn unknown_fields_do_not_break_loading() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("settings.json");
        fs::write(&path, "{ \"future_option\": 1 }").unwrap();

        let settings = Settings::load_from(&path);
        assert!(settings.show_success_dialog);
    }

    #[test]
    fn start_dir_override_wins() {
        let settings = Settings {
            dialog_start_dir: Some(PathBuf::from("/srv/drop")),
            show_success_dialog: true,
        };
        assert_eq!(settings.effective_start_dir(), PathBuf::from("/srv/drop"));
    }
}
