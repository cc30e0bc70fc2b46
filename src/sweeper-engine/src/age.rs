//! Whole-day age arithmetic.

use chrono::{DateTime, TimeDelta, Utc};

const SECONDS_PER_DAY: i64 = 24 * 60 * 60;

/// Whole days elapsed from `modified` to `reference`, rounded toward negative infinity.
///
/// A modification time later than `reference` always yields a negative count.
pub fn days_between(reference: DateTime<Utc>, modified: DateTime<Utc>) -> i64 {
    let elapsed = reference - modified;
    // `num_seconds` truncates toward zero; floor it so sub-second futures stay negative.
    let mut seconds = elapsed.num_seconds();
    if elapsed < TimeDelta::zero() && elapsed.subsec_nanos() != 0 {
        seconds -= 1;
    }
    seconds.div_euclid(SECONDS_PER_DAY)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn reference() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2017, 1, 13, 0, 0, 0).unwrap()
    }

    #[test]
    fn test_whole_days() {
        let modified = Utc.with_ymd_and_hms(2016, 1, 13, 0, 0, 0).unwrap();
        assert_eq!(days_between(reference(), modified), 366);
    }

    #[test]
    fn test_partial_day_truncates() {
        let modified = reference() - Duration::hours(47);
        assert_eq!(days_between(reference(), modified), 1);
    }

    #[test]
    fn test_same_instant_is_zero() {
        assert_eq!(days_between(reference(), reference()), 0);
    }

    #[test]
    fn test_future_modification_is_negative() {
        let modified = reference() + Duration::minutes(5);
        assert_eq!(days_between(reference(), modified), -1);

        let modified = reference() + Duration::days(3);
        assert_eq!(days_between(reference(), modified), -3);
    }

    #[test]
    fn test_sub_second_future_is_negative() {
        let modified = reference() + Duration::milliseconds(500);
        assert_eq!(days_between(reference(), modified), -1);

        let modified = reference() + Duration::nanoseconds(1);
        assert_eq!(days_between(reference(), modified), -1);
    }

    #[test]
    fn test_sub_second_past_is_zero() {
        let modified = reference() - Duration::milliseconds(500);
        assert_eq!(days_between(reference(), modified), 0);
    }
}
