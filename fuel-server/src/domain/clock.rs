//! Trading-hours clock handling.
//!
//! FuelCheck reports closing times as 12-hour strings ("10:00 PM"). They
//! carry no date, so they are anchored to the day of a reference time.

use chrono::{Duration, NaiveDateTime, NaiveTime};

use crate::fuelcheck::TradingHour;

/// Error returned when parsing an invalid clock string.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid clock time: {reason}")]
pub struct ClockError {
    reason: &'static str,
}

impl ClockError {
    fn new(reason: &'static str) -> Self {
        Self { reason }
    }
}

/// Window before closing in which a station counts as closing soon.
pub fn closing_soon_window() -> Duration {
    Duration::hours(1)
}

/// Parse an "H:MM AM|PM" string onto the calendar day of `reference`.
///
/// 12 AM is midnight and 12 PM is noon.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use fuel_server::domain::parse_clock;
///
/// let reference = NaiveDate::from_ymd_opt(2024, 3, 15)
///     .unwrap()
///     .and_hms_opt(9, 0, 0)
///     .unwrap();
///
/// let closing = parse_clock("10:30 PM", reference).unwrap();
/// assert_eq!(closing.to_string(), "2024-03-15 22:30:00");
///
/// assert!(parse_clock("22:30", reference).is_err());
/// assert!(parse_clock("13:00 PM", reference).is_err());
/// ```
pub fn parse_clock(s: &str, reference: NaiveDateTime) -> Result<NaiveDateTime, ClockError> {
    let (clock, period) = s
        .trim()
        .split_once(' ')
        .ok_or_else(|| ClockError::new("expected H:MM AM|PM format"))?;

    let (hours, minutes) = clock
        .split_once(':')
        .ok_or_else(|| ClockError::new("missing ':' separator"))?;

    let hours: u32 = hours
        .parse()
        .map_err(|_| ClockError::new("hour is not a number"))?;
    let minutes: u32 = minutes
        .parse()
        .map_err(|_| ClockError::new("minute is not a number"))?;

    if !(1..=12).contains(&hours) {
        return Err(ClockError::new("hour must be 1-12"));
    }

    let hours = match period.trim() {
        p if p.eq_ignore_ascii_case("AM") => hours % 12,
        p if p.eq_ignore_ascii_case("PM") => hours % 12 + 12,
        _ => return Err(ClockError::new("period must be AM or PM")),
    };

    let time = NaiveTime::from_hms_opt(hours, minutes, 0)
        .ok_or_else(|| ClockError::new("minute must be 0-59"))?;

    Ok(reference.date().and_time(time))
}

/// Whether a station closes within the next hour.
///
/// False when there is no entry for today, the station is open 24 hours,
/// or the closing time cannot be parsed.
pub fn is_closing_soon(today: Option<&TradingHour>, now: NaiveDateTime) -> bool {
    let Some(hours) = today else {
        return false;
    };
    if hours.is_open_24_hours {
        return false;
    }

    match parse_clock(&hours.end_time, now) {
        Ok(end) => {
            let remaining = end - now;
            remaining > Duration::zero() && remaining <= closing_soon_window()
        }
        Err(e) => {
            tracing::debug!(end_time = %hours.end_time, error = %e, "ignoring unparseable closing time");
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(h: u32, m: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 1, 1)
            .unwrap()
            .and_hms_opt(h, m, 0)
            .unwrap()
    }

    fn closing_at(end_time: &str) -> TradingHour {
        TradingHour {
            day: "Monday".to_string(),
            is_open_now: true,
            is_open_24_hours: false,
            end_time: end_time.to_string(),
        }
    }

    #[test]
    fn parses_am_and_pm() {
        assert_eq!(parse_clock("10:00 AM", at(0, 0)).unwrap(), at(10, 0));
        assert_eq!(parse_clock("2:30 PM", at(0, 0)).unwrap(), at(14, 30));
        assert_eq!(parse_clock("11:59 PM", at(0, 0)).unwrap(), at(23, 59));
    }

    #[test]
    fn twelve_oclock_edges() {
        assert_eq!(parse_clock("12:00 AM", at(9, 0)).unwrap(), at(0, 0));
        assert_eq!(parse_clock("12:00 PM", at(9, 0)).unwrap(), at(12, 0));
        assert_eq!(parse_clock("12:45 AM", at(9, 0)).unwrap(), at(0, 45));
    }

    #[test]
    fn period_is_case_insensitive() {
        assert_eq!(parse_clock("9:15 pm", at(0, 0)).unwrap(), at(21, 15));
    }

    #[test]
    fn anchors_to_reference_day() {
        let reference = NaiveDate::from_ymd_opt(2024, 6, 30)
            .unwrap()
            .and_hms_opt(23, 0, 0)
            .unwrap();
        let parsed = parse_clock("1:00 AM", reference).unwrap();
        assert_eq!(parsed.date(), reference.date());
    }

    #[test]
    fn rejects_malformed_clock_strings() {
        for input in ["", "10:00", "10 PM", "ab:00 PM", "10:xx PM", "0:30 AM", "13:00 PM", "10:60 AM", "10:00 XM"] {
            assert!(parse_clock(input, at(0, 0)).is_err(), "{input}");
        }
    }

    #[test]
    fn clock_error_message() {
        let err = parse_clock("10:00", at(0, 0)).unwrap_err();
        assert_eq!(err.to_string(), "invalid clock time: expected H:MM AM|PM format");
    }

    #[test]
    fn closing_within_the_hour() {
        let hours = closing_at("10:00 PM");
        assert!(is_closing_soon(Some(&hours), at(21, 30)));
        assert!(is_closing_soon(Some(&hours), at(21, 0)));
    }

    #[test]
    fn not_closing_soon_outside_window() {
        let hours = closing_at("10:00 PM");
        assert!(!is_closing_soon(Some(&hours), at(20, 30)));
        assert!(!is_closing_soon(Some(&hours), at(22, 0)));
        assert!(!is_closing_soon(Some(&hours), at(22, 30)));
    }

    #[test]
    fn window_edges() {
        let hours = closing_at("10:00 PM");
        let close = at(22, 0);
        for (minutes_before, expected) in [(61, false), (60, true), (1, true), (0, false), (-1, false)] {
            let now = close - Duration::minutes(minutes_before);
            assert_eq!(is_closing_soon(Some(&hours), now), expected, "{minutes_before} minutes before close");
        }
    }

    #[test]
    fn open_24_hours_never_closes() {
        let mut hours = closing_at("10:00 PM");
        hours.is_open_24_hours = true;
        assert!(!is_closing_soon(Some(&hours), at(21, 30)));
    }

    #[test]
    fn missing_or_unparseable_hours() {
        assert!(!is_closing_soon(None, at(21, 30)));
        assert!(!is_closing_soon(Some(&closing_at("late")), at(21, 30)));
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use chrono::NaiveDate;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn closing_soon_only_in_last_hour(minutes_to_close in -119i64..=300) {
            let close = NaiveDate::from_ymd_opt(2024, 1, 1)
                .unwrap()
                .and_hms_opt(22, 0, 0)
                .unwrap();
            let now = close - Duration::minutes(minutes_to_close);
            let hours = TradingHour {
                day: "Monday".to_string(),
                is_open_now: true,
                is_open_24_hours: false,
                end_time: "10:00 PM".to_string(),
            };

            prop_assert_eq!(
                is_closing_soon(Some(&hours), now),
                (1..=60).contains(&minutes_to_close)
            );
        }

        #[test]
        fn parsed_clock_stays_on_reference_day(
            hour in 1u32..=12,
            minute in 0u32..60,
            pm in any::<bool>(),
        ) {
            let reference = NaiveDate::from_ymd_opt(2024, 2, 29)
                .unwrap()
                .and_hms_opt(12, 0, 0)
                .unwrap();
            let period = if pm { "PM" } else { "AM" };
            let parsed = parse_clock(&format!("{hour}:{minute:02} {period}"), reference).unwrap();
            prop_assert_eq!(parsed.date(), reference.date());
        }
    }
}
