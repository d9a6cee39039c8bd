//! Cache validity policy
//!
//! A snapshot stays valid for seven calendar days after it was saved. The
//! check is a pure function of the snapshot timestamp and a caller-supplied
//! reference time so it can be tested without a real clock.

use chrono::{DateTime, Days, Utc};

/// Maximum snapshot age in calendar days
const MAX_AGE_DAYS: u64 = 7;

/// Returns true when a snapshot saved at `timestamp` is still valid at `now`
///
/// Validity ends exactly [`MAX_AGE_DAYS`] calendar days after the
/// timestamp: the boundary instant itself is already invalid. The age is
/// computed with calendar-day arithmetic rather than a fixed number of
/// hours. A timestamp whose maximum age is not representable is invalid.
pub fn validate(timestamp: DateTime<Utc>, now: DateTime<Utc>) -> bool {
    match timestamp.checked_add_days(Days::new(MAX_AGE_DAYS)) {
        Some(max_age) => now < max_age,
        None => false,
    }
}
