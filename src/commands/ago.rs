use anyhow::{Context, Result};
use jiff::Timestamp;
use serde::Serialize;

use crate::normalize::format_distance_abbrev;

#[derive(Debug, Serialize)]
pub struct AgoResult {
    pub instant: Timestamp,
    pub ago: String,
}

pub fn run(instant: &str) -> Result<AgoResult> {
    let instant = parse_instant(instant)?;
    Ok(AgoResult {
        instant,
        ago: format_distance_abbrev(instant),
    })
}

/// Accepts unix seconds or an RFC 3339 timestamp.
pub fn parse_instant(input: &str) -> Result<Timestamp> {
    let input = input.trim();
    if let Ok(seconds) = input.parse::<i64>() {
        return Timestamp::from_second(seconds)
            .with_context(|| format!("Timestamp out of range: {input}"));
    }

    input
        .parse::<Timestamp>()
        .with_context(|| format!("Invalid instant: {input}. Use unix seconds or RFC 3339."))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::unix_seconds("1700000000", 1_700_000_000)]
    #[case::padded(" 1700000000\n", 1_700_000_000)]
    #[case::rfc3339("2023-11-14T22:13:20Z", 1_700_000_000)]
    #[case::offset("2023-11-14T23:13:20+01:00", 1_700_000_000)]
    fn parses_instants(#[case] input: &str, #[case] seconds: i64) {
        assert_eq!(parse_instant(input).unwrap().as_second(), seconds);
    }

    #[rstest]
    #[case::words("yesterday")]
    #[case::out_of_range("999999999999999999")]
    fn rejects_bad_instants(#[case] input: &str) {
        assert!(parse_instant(input).is_err());
    }
}
