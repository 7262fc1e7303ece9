use std::path::PathBuf;

use chrono::NaiveDate;
use clap::Parser;

use crate::core::zone::Zone;

#[derive(Parser)]
#[command(version, about)]
pub struct Args {
    /// Bidding zone to query.
    #[clap(long, env = "ELPRIS_ZONE", ignore_case = true)]
    pub zone: Zone,

    /// Day to query, `YYYY-MM-DD`. Defaults to today.
    #[clap(long)]
    pub date: Option<NaiveDate>,

    /// Order the listing by price, most expensive first, instead of by time.
    #[clap(long, visible_alias = "sort")]
    pub sorted: bool,

    /// Hours of charging to plan; prints the cheapest contiguous window.
    #[clap(long, visible_alias = "hours", value_name = "HOURS", value_parser = parse_hours)]
    pub charging: Option<usize>,

    /// Keep the charging window inside the fetched hours instead of letting
    /// it wrap past the last one into the earliest.
    #[clap(long)]
    pub no_wrap: bool,

    /// Disable both cache tiers and always go to the feed.
    #[clap(long, env = "ELPRIS_NO_CACHE")]
    pub no_cache: bool,

    /// Where the disk tier keeps raw feed payloads.
    #[clap(long, env = "ELPRIS_CACHE_DIR")]
    pub cache_dir: Option<PathBuf>,

    /// Remote feed timeout, in seconds.
    #[clap(long, default_value = "10", env = "ELPRIS_TIMEOUT_SECS")]
    pub timeout_secs: u64,
}

impl Args {
    /// The disk-tier location: the flag, or `.elpris-cache` in the home
    /// directory, or nothing when neither resolves.
    pub fn cache_directory(&self) -> Option<PathBuf> {
        self.cache_dir
            .clone()
            .or_else(|| Some(std::env::home_dir()?.join(".elpris-cache")))
    }
}

/// A plain hour count with an optional `h` suffix: `4` or `4h`.
fn parse_hours(value: &str) -> Result<usize, std::num::ParseIntError> {
    value.strip_suffix('h').unwrap_or(value).parse()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hours_suffix() {
        assert_eq!(parse_hours("4"), Ok(4));
        assert_eq!(parse_hours("4h"), Ok(4));
        assert!(parse_hours("4hrs").is_err());
    }
}
