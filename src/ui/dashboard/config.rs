use std::path::{Path, PathBuf};

use egui::Vec2;
use log::warn;
use serde::{Deserialize, Serialize};

use raceboard::{RaceboardError, View};

const CONFIG_DIR_NAME: &str = "raceboard";
const CONFIG_FILE_NAME: &str = "config.json";

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub(crate) struct WindowSize {
    pub(crate) width: f32,
    pub(crate) height: f32,
}

impl Default for WindowSize {
    fn default() -> Self {
        Self {
            width: 960.,
            height: 640.,
        }
    }
}

impl From<WindowSize> for Vec2 {
    fn from(value: WindowSize) -> Self {
        Vec2::new(value.width, value.height)
    }
}

#[derive(Serialize, Deserialize, Debug, Default, PartialEq)]
#[serde(default)]
pub(crate) struct AppConfig {
    pub(crate) last_dataset: Option<PathBuf>,
    pub(crate) last_view: View,
    pub(crate) last_race_index: usize,
    pub(crate) window_size: WindowSize,
}

impl AppConfig {
    fn config_path() -> Option<PathBuf> {
        Some(
            dirs::config_dir()?
                .join(CONFIG_DIR_NAME)
                .join(CONFIG_FILE_NAME),
        )
    }

    pub(crate) fn from_local_file() -> Option<Self> {
        Self::from_path(&Self::config_path()?)
    }

    /// Reads a config file. Unreadable files are logged and ignored.
    pub(crate) fn from_path(config_path: &Path) -> Option<Self> {
        if !config_path.exists() {
            return None;
        }

        let file = std::fs::File::open(config_path)
            .map_err(|e| warn!("Could not open config file {:?}: {}", config_path, e))
            .ok()?;
        serde_json::from_reader(file)
            .map_err(|e| warn!("Could not parse config file {:?}: {}", config_path, e))
            .ok()
    }

    pub(crate) fn save(&self) -> Result<(), RaceboardError> {
        let config_path = Self::config_path().ok_or(RaceboardError::NoConfigDir)?;
        self.save_to(&config_path)
    }

    pub(crate) fn save_to(&self, config_path: &Path) -> Result<(), RaceboardError> {
        if let Some(parent) = config_path.parent()
            && !parent.exists()
        {
            std::fs::create_dir_all(parent)
                .map_err(|e| RaceboardError::ConfigIOError { source: e })?;
        }

        let file = std::fs::File::create(config_path)
            .map_err(|e| RaceboardError::ConfigIOError { source: e })?;
        serde_json::to_writer_pretty(file, self)
            .map_err(|e| RaceboardError::ConfigSerializeError { source: e })
    }
}
