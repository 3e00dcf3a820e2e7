use log::{debug, warn};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// The one value remembered between runs: the last dropdown option picked.
/// Each view checks it against its own options before using it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Preferences {
    #[serde(default)]
    pub selected_dropdown: Option<String>,
}

impl Preferences {
    /// A missing or unreadable file is the same as no preference.
    pub fn load_from(path: &Path) -> Self {
        let Ok(content) = std::fs::read_to_string(path) else {
            return Self::default();
        };
        serde_json::from_str(&content).unwrap_or_else(|e| {
            warn!("ignoring corrupt preferences at {}: {e}", path.display());
            Self::default()
        })
    }

    pub fn save_to(&self, path: &Path) -> Result<(), String> {
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent).map_err(|e| format!("create dir failed: {e}"))?;
        }
        let payload = serde_json::to_string_pretty(self)
            .map_err(|e| format!("serialize preferences failed: {e}"))?;
        std::fs::write(path, payload).map_err(|e| format!("write preferences failed: {e}"))?;
        debug!("saved preferences to {}", path.display());
        Ok(())
    }
}

pub fn preferences_path() -> PathBuf {
    resolve_path(
        std::env::var("XDG_CONFIG_HOME").ok(),
        std::env::var("HOME").ok(),
    )
}

fn resolve_path(xdg_config_home: Option<String>, home: Option<String>) -> PathBuf {
    if let Some(config_dir) = xdg_config_home
        && !config_dir.trim().is_empty()
    {
        return PathBuf::from(config_dir).join("sideline").join("preferences.json");
    }
    if let Some(home) = home
        && !home.trim().is_empty()
    {
        return PathBuf::from(home)
            .join(".config")
            .join("sideline")
            .join("preferences.json");
    }
    PathBuf::from("preferences.json")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scratch(name: &str) -> PathBuf {
        std::env::temp_dir()
            .join(format!("sideline-prefs-{}-{name}", std::process::id()))
            .join("preferences.json")
    }

    #[test]
    fn path_prefers_xdg_then_home_then_cwd() {
        assert_eq!(
            resolve_path(Some("/xdg".into()), Some("/home/me".into())),
            PathBuf::from("/xdg/sideline/preferences.json")
        );
        assert_eq!(
            resolve_path(Some(" ".into()), Some("/home/me".into())),
            PathBuf::from("/home/me/.config/sideline/preferences.json")
        );
        assert_eq!(resolve_path(None, None), PathBuf::from("preferences.json"));
    }

    #[test]
    fn round_trips_through_disk() {
        let path = scratch("roundtrip");
        let prefs = Preferences { selected_dropdown: Some("Completed Games".into()) };
        prefs.save_to(&path).unwrap();
        assert_eq!(Preferences::load_from(&path), prefs);
        let _ = std::fs::remove_dir_all(path.parent().unwrap());
    }

    #[test]
    fn missing_or_corrupt_file_means_no_preference() {
        let missing = scratch("missing");
        assert_eq!(Preferences::load_from(&missing), Preferences::default());

        let corrupt = scratch("corrupt");
        std::fs::create_dir_all(corrupt.parent().unwrap()).unwrap();
        std::fs::write(&corrupt, "{not json").unwrap();
        assert_eq!(Preferences::load_from(&corrupt).selected_dropdown, None);
        let _ = std::fs::remove_dir_all(corrupt.parent().unwrap());
    }
}
