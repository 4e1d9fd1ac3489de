mod schema;
mod store;

pub use schema::Settings;
pub use store::{DiskSettings, MemorySettings, SettingsStore};

use anyhow::{Context, Result};
use atomic_write_file::AtomicWriteFile;
use std::fs::{self, File};
use std::path::{Path, PathBuf};

/// Get the settings directory path (~/.config/update-notifier/)
pub fn get_settings_dir() -> PathBuf {
    let home = dirs::home_dir().expect("Could not determine home directory");
    home.join(".config").join("update-notifier")
}

/// Get the default settings file path (~/.config/update-notifier/settings.json)
pub fn get_settings_path() -> PathBuf {
    get_settings_dir().join("settings.json")
}

/// Load settings from a JSON file
///
/// If the file doesn't exist, returns defaults. A file that exists but
/// cannot be read or parsed is an error.
pub fn load_settings(path: &Path) -> Result<Settings> {
    if !path.exists() {
        return Ok(Settings::default());
    }

    let file = File::open(path)
        .with_context(|| format!("Failed to open settings file at {}", path.display()))?;

    let settings: Settings =
        serde_json::from_reader(file).context("Failed to parse settings file")?;

    Ok(settings)
}

/// Save settings to a JSON file atomically
///
/// Uses atomic-write-file so the file is never left half-written. Creates
/// the parent directory if it doesn't exist.
pub fn save_settings(path: &Path, settings: &Settings) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.exists() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create settings directory at {}", parent.display())
            })?;
        }
    }

    let mut file = AtomicWriteFile::open(path)
        .with_context(|| format!("Failed to open atomic write file at {}", path.display()))?;

    serde_json::to_writer_pretty(&mut file, settings).context("Failed to serialize settings")?;

    file.commit().context("Failed to save settings")?;

    Ok(())
}
