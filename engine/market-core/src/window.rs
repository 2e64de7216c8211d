//! Market window policy
//!
//! Single source of truth for "is the market open right now". Every call
//! site that needs a window check goes through these two functions rather
//! than re-deriving the rule inline.

use crate::week::Week;
use chrono::{DateTime, Utc};

/// Select the active week for transfer-gating purposes.
///
/// Deterministic: the soonest week whose `unlocked_at` is still in the
/// future, ordered by `first_broadcast_at` ascending, ties broken by week
/// number ascending. Returns `None` when no such week exists, in which case
/// the market is treated as open (fail-open policy: an empty schedule must
/// not deadlock trading).
pub fn active_week<'a>(weeks: &'a [Week], now: DateTime<Utc>) -> Option<&'a Week> {
    weeks
        .iter()
        .filter(|w| w.unlocked_at > now)
        .min_by(|a, b| {
            a.first_broadcast_at
                .cmp(&b.first_broadcast_at)
                .then(a.number.cmp(&b.number))
        })
}

/// True when the market is open for the given week at `now`.
///
/// Closed while `now` is inside `[first_broadcast_at, unlocked_at)` or the
/// manual lock override is set.
pub fn is_open(week: &Week, now: DateTime<Utc>) -> bool {
    if week.is_locked {
        return false;
    }
    !(now >= week.first_broadcast_at && now < week.unlocked_at)
}

/// Convenience over the full schedule: open unless the active week says
/// otherwise.
pub fn market_open(weeks: &[Week], now: DateTime<Utc>) -> bool {
    match active_week(weeks, now) {
        Some(week) => is_open(week, now),
        None => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn week_at(number: u32, broadcast: DateTime<Utc>, unlock: DateTime<Utc>) -> Week {
        Week::new(number, broadcast - Duration::days(1), broadcast, unlock)
    }

    #[test]
    fn test_window_open_closed_transitions() {
        let t = Utc.with_ymd_and_hms(2025, 9, 7, 18, 0, 0).unwrap();
        let week = week_at(1, t, t + Duration::hours(3));

        // Inside the broadcast window: closed
        assert!(!is_open(&week, t + Duration::hours(1)));
        // After the unlock: open again
        assert!(is_open(&week, t + Duration::hours(4)));
        // Just before the window: open
        assert!(is_open(&week, t - Duration::seconds(1)));
        // Boundary: closed at first_broadcast_at, open at unlocked_at
        assert!(!is_open(&week, t));
        assert!(is_open(&week, t + Duration::hours(3)));
    }

    #[test]
    fn test_manual_lock_overrides_window() {
        let t = Utc.with_ymd_and_hms(2025, 9, 7, 18, 0, 0).unwrap();
        let mut week = week_at(1, t, t + Duration::hours(3));
        week.is_locked = true;

        // Even well past the unlock instant the manual lock holds
        assert!(!is_open(&week, t + Duration::hours(4)));
    }

    #[test]
    fn test_active_week_selection() {
        let t = Utc.with_ymd_and_hms(2025, 9, 7, 18, 0, 0).unwrap();
        let past = week_at(1, t - Duration::days(14), t - Duration::days(13));
        let near = week_at(2, t + Duration::days(1), t + Duration::days(2));
        let far = week_at(3, t + Duration::days(8), t + Duration::days(9));
        let weeks = vec![far.clone(), past, near.clone()];

        let active = active_week(&weeks, t).expect("one upcoming week");
        assert_eq!(active.number, near.number);

        // Ties on first_broadcast_at break by week number
        let mut twin = near.clone();
        twin.number = 5;
        twin.id = crate::ids::WeekId::new();
        let weeks = vec![twin, near.clone(), far];
        assert_eq!(active_week(&weeks, t).unwrap().number, near.number);
    }

    #[test]
    fn test_no_schedule_fails_open() {
        let t = Utc.with_ymd_and_hms(2025, 9, 7, 18, 0, 0).unwrap();
        assert!(active_week(&[], t).is_none());
        assert!(market_open(&[], t));
    }
}
