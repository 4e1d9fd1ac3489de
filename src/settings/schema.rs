use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Persisted user settings for the update notifier
///
/// Field names on the wire are camelCase to stay compatible with settings
/// files written by earlier releases of the application.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Settings {
    /// Whether the user asked to suppress update prompts
    #[serde(rename = "sleepUpdateCheck", default)]
    pub sleep_update_check: bool,

    /// When snoozing was last engaged; `None` means never
    #[serde(rename = "lastUpdateNotify", default)]
    pub last_update_notify: Option<DateTime<Utc>>,
}
