//! Minimum-cost contiguous window search over a circular price sequence.

use itertools::Itertools;

use crate::{core::price::SpotPrice, quantity::rate::SekPerKilowattHour};

/// Whether a window may continue past the end of the sequence into its
/// beginning.
///
/// With only one day of prices available, a wrapped window reuses that same
/// day's early hours as a stand-in for the following day, which may not
/// reflect actual next-day prices. Callers choose whether that trade-off is
/// acceptable; with two days of data the seam sits at the end of tomorrow and
/// rarely matters.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Wrap {
    Allowed,
    Forbidden,
}

/// Find the cheapest contiguous run of `hours` records.
///
/// Returns exactly `hours` records in window order (wrapped records follow
/// the day-end records they continue), or an empty vector when fewer records
/// than that are available. The first window reaching the strictly lowest
/// total wins, so ties favour the earliest start.
#[must_use]
pub fn find_cheapest_window(prices: &[SpotPrice], hours: usize, wrap: Wrap) -> Vec<SpotPrice> {
    if hours == 0 || prices.len() < hours {
        return Vec::new();
    }

    let sorted = prices.iter().copied().sorted_by_key(|price| price.starts_at).collect_vec();
    let record = |index: usize| sorted[index % sorted.len()];
    let last_start = match wrap {
        Wrap::Allowed => sorted.len() - 1,
        Wrap::Forbidden => sorted.len() - hours,
    };

    // Running accumulator: add the record entering the window, drop the one
    // leaving it, instead of resumming every window.
    let mut sum: SekPerKilowattHour =
        sorted[..hours].iter().map(|price| price.sek_per_kwh).sum();
    let mut best_sum = sum;
    let mut best_start = 0;
    for start in 1..=last_start {
        sum = sum - record(start - 1).sek_per_kwh + record(start + hours - 1).sek_per_kwh;
        if sum < best_sum {
            best_sum = sum;
            best_start = start;
        }
    }

    (best_start..best_start + hours).map(record).collect()
}
