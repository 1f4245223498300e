//! User settings stored as settings.json in the app data directory

use crate::handler::HandlerConfig;
use serde::{Deserialize, Serialize};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

const SETTINGS_FILE: &str = "settings.json";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // Window geometry
    pub window_x: Option<f32>,
    pub window_y: Option<f32>,
    pub window_w: Option<f32>,
    pub window_h: Option<f32>,

    // Endpoint override, e.g. a redeployed Apps Script URL
    pub endpoint_url: Option<String>,
}

impl Settings {
    pub fn path(data_dir: &Path) -> PathBuf {
        data_dir.join(SETTINGS_FILE)
    }

    /// Read settings, falling back to defaults when the file is absent or unusable
    pub fn load(data_dir: &Path) -> Self {
        let path = Self::path(data_dir);
        let raw = match std::fs::read_to_string(&path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(path = %path.display(), "No settings yet, starting with defaults");
                return Self::default();
            }
            Err(e) => {
                warn!(path = %path.display(), error = %e, "Settings unreadable, starting with defaults");
                return Self::default();
            }
        };
        serde_json::from_str(&raw).unwrap_or_else(|e| {
            warn!(path = %path.display(), error = %e, "Settings malformed, starting with defaults");
            Self::default()
        })
    }

    /// Write settings; failures are logged, the window closes regardless
    pub fn save(&self, data_dir: &Path) {
        let path = Self::path(data_dir);
        let written = serde_json::to_string_pretty(self)
            .map_err(std::io::Error::from)
            .and_then(|json| {
                std::fs::create_dir_all(data_dir)?;
                std::fs::write(&path, json)
            });
        match written {
            Ok(()) => debug!(path = %path.display(), "Settings saved"),
            Err(e) => warn!(path = %path.display(), error = %e, "Could not save settings"),
        }
    }

    /// Handler configuration, honoring a non-blank endpoint override
    pub fn handler_config(&self) -> HandlerConfig {
        match self.endpoint_url.as_deref().map(str::trim) {
            Some(url) if !url.is_empty() => HandlerConfig {
                endpoint_url: url.to_string(),
            },
            _ => HandlerConfig::default(),
        }
    }
}

/// Per-user data directory holding settings and logs
pub fn data_dir() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(crate::constants::APP_NAME)
}
