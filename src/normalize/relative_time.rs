use std::fmt;

use jiff::tz::TimeZone;
use jiff::{Timestamp, Unit};
use strum::AsRefStr;
use tracing::warn;

#[derive(Debug, Clone, Copy, PartialEq, Eq, AsRefStr)]
pub enum DistanceUnit {
    #[strum(serialize = "y")]
    Year,
    #[strum(serialize = "mo")]
    Month,
    #[strum(serialize = "w")]
    Week,
    #[strum(serialize = "d")]
    Day,
    #[strum(serialize = "h")]
    Hour,
    #[strum(serialize = "m")]
    Minute,
    #[strum(serialize = "s")]
    Second,
}

/// A whole count of the largest unit that fits into an elapsed time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Distance {
    pub count: i64,
    pub unit: DistanceUnit,
}

impl Distance {
    fn new(count: i64, unit: DistanceUnit) -> Self {
        Self { count, unit }
    }
}

impl fmt::Display for Distance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.count, self.unit.as_ref())
    }
}

/// Abbreviated time elapsed since `past`, e.g. `5h` or `3mo`.
pub fn format_distance_abbrev(past: Timestamp) -> String {
    format_distance_abbrev_from(past, Timestamp::now())
}

pub fn format_distance_abbrev_from(past: Timestamp, now: Timestamp) -> String {
    strict_distance(past, now).to_string()
}

/// Elapsed time from `past` to `now`, truncated to the largest non-zero unit.
///
/// Calendar units are measured in UTC, so a month is a calendar month rather
/// than thirty days. Instants at or after `now` yield zero seconds.
pub fn strict_distance(past: Timestamp, now: Timestamp) -> Distance {
    if past >= now {
        return Distance::new(0, DistanceUnit::Second);
    }

    let start = past.to_zoned(TimeZone::UTC);
    let end = now.to_zoned(TimeZone::UTC);
    let span = match start.until((Unit::Year, &end)) {
        Ok(span) => span,
        Err(err) => {
            warn!(%err, "calendar distance failed, reporting seconds");
            return Distance::new(now.as_second() - past.as_second(), DistanceUnit::Second);
        }
    };

    let days = i64::from(span.get_days());
    [
        (i64::from(span.get_years()), DistanceUnit::Year),
        (i64::from(span.get_months()), DistanceUnit::Month),
        (days / 7, DistanceUnit::Week),
        (days, DistanceUnit::Day),
        (i64::from(span.get_hours()), DistanceUnit::Hour),
        (span.get_minutes(), DistanceUnit::Minute),
        (span.get_seconds(), DistanceUnit::Second),
    ]
    .into_iter()
    .find(|&(count, _)| count > 0)
    .map_or(Distance::new(0, DistanceUnit::Second), |(count, unit)| {
        Distance::new(count, unit)
    })
}
