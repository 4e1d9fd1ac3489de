//! Decide whether a desktop app should prompt the user about an available
//! update, and manage the snooze window that suppresses repeated prompting.
//!
//! Two public pieces:
//! - [`notifier::UpdateNotifier`] answers "should I check for updates right
//!   now?" from persisted settings and the release-type policy, expiring a
//!   stale snooze as a side effect.
//! - [`notifier::notify`] opens the update prompt through an injected
//!   [`notifier::PromptService`] and returns the user's response.
//!
//! This crate is not a scheduler: nothing here fires on a timer. The hosting
//! application decides when to ask.

pub mod notifier;
pub mod release;
pub mod settings;
pub mod units;

pub use notifier::{
    notify, NotifierError, NotifierOptions, PromptOptions, PromptResponse, PromptService,
    UpdateNotifier,
};
pub use release::ReleaseType;
pub use settings::{DiskSettings, MemorySettings, SettingsStore};
