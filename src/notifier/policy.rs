use super::error::NotifierError;
use crate::release::ReleaseType;
use crate::settings::SettingsStore;
use crate::units::days_to_milliseconds;
use chrono::Utc;

/// Recognized construction options for the notifier
#[derive(Debug, Clone, Copy)]
pub struct NotifierOptions {
    /// Length of the snooze window in days; must be greater than zero
    pub sleep_days: u32,
}

/// Sleep policy evaluator: decides if an update check should happen now and
/// expires stale snoozes.
///
/// Owns no schedule. The hosting application calls
/// [`should_check_for_updates`](UpdateNotifier::should_check_for_updates)
/// whenever it is about to look for updates, typically at startup.
pub struct UpdateNotifier<S: SettingsStore> {
    store: S,
    sleep_days: u32,
}

impl<S: SettingsStore> UpdateNotifier<S> {
    pub fn new(store: S, options: NotifierOptions) -> Result<Self, NotifierError> {
        if options.sleep_days == 0 {
            return Err(NotifierError::InvalidArgument(
                "sleep_days must be greater than zero".to_string(),
            ));
        }

        Ok(Self {
            store,
            sleep_days: options.sleep_days,
        })
    }

    /// Determine if it's time to check for updates
    ///
    /// Always true when the snooze flag is off, the snooze was never
    /// engaged, or the release type does not allow snoozing. Otherwise the
    /// snooze window decides: once it has run out, the flag is cleared in
    /// the store (the only mutation this method performs) and the answer is
    /// true again from then on.
    pub fn should_check_for_updates(&mut self, release_type: ReleaseType) -> bool {
        let Some(last_update_notify) = self.store.last_update_notify() else {
            return true;
        };

        if !self.store.sleep_update_check() || !release_type.allows_sleep() {
            return true;
        }

        // Comparison direction is deliberate: `lastUpdateNotify` holds a
        // point that may lie in the future, so the elapsed value is the
        // stamp minus now, not the other way around.
        let elapsed_ms = (last_update_notify - Utc::now()).num_milliseconds();

        if elapsed_ms > days_to_milliseconds(self.sleep_days) {
            log::debug!("Snooze window elapsed, clearing sleepUpdateCheck");
            self.store.set_sleep_update_check(false);
            return true;
        }

        false
    }

    /// Engage the snooze: suppress prompts and stamp the engagement time
    ///
    /// Called by the host when the user picks "remind me later".
    pub fn engage_sleep(&mut self) {
        self.store.set_sleep_update_check(true);
        self.store.set_last_update_notify(Some(Utc::now()));
    }

    /// Access the underlying settings store
    pub fn store(&self) -> &S {
        &self.store
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::MemorySettings;
    use chrono::Duration;

    const SLEEP_DAYS: u32 = 7;

    fn notifier() -> UpdateNotifier<MemorySettings> {
        UpdateNotifier::new(
            MemorySettings::new(),
            NotifierOptions {
                sleep_days: SLEEP_DAYS,
            },
        )
        .unwrap()
    }

    #[test]
    fn test_rejects_zero_sleep_days() {
        let result = UpdateNotifier::new(MemorySettings::new(), NotifierOptions { sleep_days: 0 });
        assert!(matches!(result, Err(NotifierError::InvalidArgument(_))));
    }

    #[test]
    fn test_checks_when_sleep_disabled() {
        for release_type in [
            ReleaseType::Production,
            ReleaseType::Snapshot,
            ReleaseType::Unknown,
        ] {
            let mut notifier = notifier();
            notifier.store.set_sleep_update_check(false);
            notifier
                .store
                .set_last_update_notify(Some(Utc::now() + Duration::milliseconds(1000)));

            assert!(notifier.should_check_for_updates(release_type));
        }
    }

    #[test]
    fn test_checks_when_never_engaged() {
        for release_type in [
            ReleaseType::Production,
            ReleaseType::Snapshot,
            ReleaseType::Unknown,
        ] {
            let mut notifier = notifier();
            notifier.store.set_sleep_update_check(true);
            notifier.store.set_last_update_notify(None);

            assert!(notifier.should_check_for_updates(release_type));
        }
    }

    #[test]
    fn test_snooze_ineffective_for_snapshot() {
        let mut notifier = notifier();
        notifier.store.set_sleep_update_check(true);
        notifier
            .store
            .set_last_update_notify(Some(Utc::now() + Duration::milliseconds(1000)));

        assert!(notifier.should_check_for_updates(ReleaseType::Snapshot));
        // Flag untouched: only window expiry clears it
        assert!(notifier.store.sleep_update_check());
    }

    #[test]
    fn test_production_within_window_does_not_check() {
        let mut notifier = notifier();
        notifier.store.set_sleep_update_check(true);
        notifier
            .store
            .set_last_update_notify(Some(Utc::now() + Duration::milliseconds(1000)));

        assert!(!notifier.should_check_for_updates(ReleaseType::Production));
        assert!(notifier.store.sleep_update_check());
    }

    #[test]
    fn test_production_elapsed_window_checks_and_clears_flag() {
        let mut notifier = notifier();
        let window_ms = days_to_milliseconds(SLEEP_DAYS);
        notifier.store.set_sleep_update_check(true);
        notifier.store.set_last_update_notify(Some(
            Utc::now() + Duration::milliseconds(window_ms + 1000),
        ));

        assert!(notifier.store.sleep_update_check());
        assert!(notifier.should_check_for_updates(ReleaseType::Production));
        assert!(!notifier.store.sleep_update_check());
    }

    #[test]
    fn test_repeated_calls_after_expiry_are_idempotent() {
        let mut notifier = notifier();
        let window_ms = days_to_milliseconds(SLEEP_DAYS);
        let stamp = Utc::now() + Duration::milliseconds(window_ms + 1000);
        notifier.store.set_sleep_update_check(true);
        notifier.store.set_last_update_notify(Some(stamp));

        assert!(notifier.should_check_for_updates(ReleaseType::Production));

        // Second call takes the "flag disabled" path; no further mutation
        assert!(notifier.should_check_for_updates(ReleaseType::Production));
        assert!(!notifier.store.sleep_update_check());
        assert_eq!(notifier.store.last_update_notify(), Some(stamp));
    }

    #[test]
    fn test_engage_sleep_sets_flag_and_stamp() {
        let mut notifier = notifier();
        assert!(!notifier.store.sleep_update_check());

        notifier.engage_sleep();

        assert!(notifier.store.sleep_update_check());
        assert!(notifier.store.last_update_notify().is_some());
    }
}
