const MILLISECONDS_PER_DAY: i64 = 24 * 60 * 60 * 1000;

/// Convert a number of days to milliseconds
///
/// The snooze window is configured in days but compared against millisecond
/// timestamps, so both sides of the expiry check go through this.
pub fn days_to_milliseconds(days: u32) -> i64 {
    i64::from(days) * MILLISECONDS_PER_DAY
}
