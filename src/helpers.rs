use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result};

/// Wei per 0.0001 ETH.
const WEI_PER_TICK: u128 = 100_000_000_000_000;

/// Formats a wei amount as ETH with four decimals, rounding half up.
pub fn format_ether(wei: u128) -> String {
    let remainder = wei % WEI_PER_TICK;
    let ticks = wei / WEI_PER_TICK + u128::from(remainder >= WEI_PER_TICK / 2);
    format!("{}.{:04}", ticks / 10_000, ticks % 10_000)
}

/// Reads `path`, or all of stdin when no path is given.
pub fn read_input(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display())),
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read stdin")?;
            Ok(buf)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::zero(0, "0.0000")]
    #[case::one_eth(1_000_000_000_000_000_000, "1.0000")]
    #[case::fraction(2_500_000_000_000_000_000, "2.5000")]
    #[case::truncated(12_345_600_000_000_000, "0.0123")]
    #[case::rounds_up(50_000_000_000_000, "0.0001")]
    #[case::rounds_down(49_999_999_999_999, "0.0000")]
    #[case::carries(9_999_950_000_000_000_000, "10.0000")]
    fn formats_wei(#[case] wei: u128, #[case] expected: &str) {
        assert_eq!(format_ether(wei), expected);
    }

    #[rstest]
    fn reads_file_input() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("stories.json");
        std::fs::write(&path, "[]").unwrap();
        assert_eq!(read_input(Some(&path)).unwrap(), "[]");
    }
}
