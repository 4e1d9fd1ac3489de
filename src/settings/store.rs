use super::schema::Settings;
use super::{load_settings, save_settings};
use anyhow::Result;
use chrono::{DateTime, Utc};
use std::path::PathBuf;

/// Process-wide settings store the notifier reads its state from
///
/// Reads are infallible: an absent value is a valid state, not a failure.
/// Implementations own persistence; the notifier only gets and sets.
pub trait SettingsStore {
    /// Whether the user asked to suppress update prompts
    fn sleep_update_check(&self) -> bool;

    fn set_sleep_update_check(&mut self, enabled: bool);

    /// When snoozing was last engaged; `None` means never
    fn last_update_notify(&self) -> Option<DateTime<Utc>>;

    fn set_last_update_notify(&mut self, at: Option<DateTime<Utc>>);
}

/// In-memory settings store for tests and embedding without persistence
#[derive(Debug, Clone, Default)]
pub struct MemorySettings {
    settings: Settings,
}

impl MemorySettings {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SettingsStore for MemorySettings {
    fn sleep_update_check(&self) -> bool {
        self.settings.sleep_update_check
    }

    fn set_sleep_update_check(&mut self, enabled: bool) {
        self.settings.sleep_update_check = enabled;
    }

    fn last_update_notify(&self) -> Option<DateTime<Utc>> {
        self.settings.last_update_notify
    }

    fn set_last_update_notify(&mut self, at: Option<DateTime<Utc>>) {
        self.settings.last_update_notify = at;
    }
}

/// File-backed settings store persisted as JSON
///
/// Mutations are written through to disk immediately. Persistence failures
/// are logged and swallowed: the in-memory state stays authoritative for the
/// rest of the session, matching the "no errors originate from the settings
/// store" contract.
#[derive(Debug)]
pub struct DiskSettings {
    path: PathBuf,
    settings: Settings,
}

impl DiskSettings {
    /// Load the store from the default settings path
    pub fn load() -> Result<Self> {
        Self::load_from(super::get_settings_path())
    }

    /// Load the store from an explicit path (tests, portable installs)
    pub fn load_from(path: PathBuf) -> Result<Self> {
        let settings = load_settings(&path)?;
        Ok(Self { path, settings })
    }

    fn persist(&self) {
        // Best-effort write-through; keep running on a read-only disk
        if let Err(e) = save_settings(&self.path, &self.settings) {
            log::warn!("Failed to persist settings to {}: {}", self.path.display(), e);
        }
    }
}

impl SettingsStore for DiskSettings {
    fn sleep_update_check(&self) -> bool {
        self.settings.sleep_update_check
    }

    fn set_sleep_update_check(&mut self, enabled: bool) {
        self.settings.sleep_update_check = enabled;
        self.persist();
    }

    fn last_update_notify(&self) -> Option<DateTime<Utc>> {
        self.settings.last_update_notify
    }

    fn set_last_update_notify(&mut self, at: Option<DateTime<Utc>>) {
        self.settings.last_update_notify = at;
        self.persist();
    }
}
