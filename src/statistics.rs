//! Descriptive statistics over a day or two of price records.

use chrono::Timelike;

use crate::{core::price::SpotPrice, quantity::rate::SekPerKilowattHour};

/// One hour of the day together with its average rate.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct HourlyRate {
    pub hour: u32,
    pub rate: SekPerKilowattHour,
}

#[must_use]
#[derive(Copy, Clone, Debug)]
pub struct Summary {
    /// The cheapest hour of the day, by per-hour average.
    pub min_hourly: HourlyRate,

    /// The priciest hour of the day, by per-hour average.
    pub max_hourly: HourlyRate,

    /// Record-weighted mean over all individual records, not the mean of
    /// the per-hour averages, which differs when hours carry unequal record
    /// counts.
    pub mean: SekPerKilowattHour,
}

/// Accumulates the records sharing one local hour.
#[derive(Copy, Clone)]
struct RateAccumulator {
    sum: SekPerKilowattHour,
    count: usize,
}

impl Default for RateAccumulator {
    fn default() -> Self {
        Self { sum: SekPerKilowattHour::ZERO, count: 0 }
    }
}

impl RateAccumulator {
    fn push(&mut self, rate: SekPerKilowattHour) {
        self.sum += rate;
        self.count += 1;
    }

    #[allow(clippy::cast_precision_loss)]
    fn average(self) -> Option<SekPerKilowattHour> {
        (self.count != 0).then(|| self.sum / self.count as f64)
    }
}

/// The record-weighted mean rate, `None` for an empty input.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn mean(prices: &[SpotPrice]) -> Option<SekPerKilowattHour> {
    (!prices.is_empty()).then(|| {
        prices.iter().map(|price| price.sek_per_kwh).sum::<SekPerKilowattHour>()
            / prices.len() as f64
    })
}

/// Summarize by the local calendar hour of each record's interval start, in
/// the record's own UTC offset.
///
/// Sub-hour records sharing an hour are averaged together first; the
/// per-hour average is the unit compared for min and max. Ties resolve to
/// the earliest hour.
#[must_use]
pub fn summarize(prices: &[SpotPrice]) -> Option<Summary> {
    let mean = mean(prices)?;

    let mut hourly = [RateAccumulator::default(); 24];
    for price in prices {
        hourly[price.starts_at.hour() as usize].push(price.sek_per_kwh);
    }

    let mut min_hourly: Option<HourlyRate> = None;
    let mut max_hourly: Option<HourlyRate> = None;
    for (hour, accumulator) in hourly.iter().enumerate() {
        let Some(rate) = accumulator.average() else {
            continue;
        };
        let hourly_rate = HourlyRate { hour: u32::try_from(hour).unwrap_or_default(), rate };
        if min_hourly.is_none_or(|min| rate < min.rate) {
            min_hourly = Some(hourly_rate);
        }
        if max_hourly.is_none_or(|max| rate > max.rate) {
            max_hourly = Some(hourly_rate);
        }
    }

    Some(Summary { min_hourly: min_hourly?, max_hourly: max_hourly?, mean })
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;
    use chrono::{DateTime, TimeDelta};

    use super::*;
    use crate::quantity::rate::{EurPerKilowattHour, SekPerEur};

    #[test]
    fn test_one_record_per_hour() {
        let prices: Vec<_> =
            [0.10, 0.20, 0.30, 0.40].iter().enumerate().map(|(hour, rate)| {
                SpotPrice::test_hour(u32::try_from(hour).unwrap(), *rate)
            }).collect();
        let summary = summarize(&prices).unwrap();
        assert_relative_eq!(summary.mean.0, 0.25, epsilon = 1e-12);
        assert_eq!(summary.min_hourly.hour, 0);
        assert_relative_eq!(summary.min_hourly.rate.0, 0.10);
        assert_eq!(summary.max_hourly.hour, 3);
        assert_relative_eq!(summary.max_hourly.rate.0, 0.40);
    }

    #[test]
    fn test_sub_hour_records_average_within_their_hour() {
        let quarter = |hour: u32, minute: u32, rate: f64| {
            let starts_at = DateTime::parse_from_rfc3339(&format!(
                "2025-08-30T{hour:02}:{minute:02}:00+02:00"
            ))
            .unwrap();
            SpotPrice {
                sek_per_kwh: SekPerKilowattHour(rate),
                eur_per_kwh: EurPerKilowattHour(rate / 11.4),
                exchange_rate: SekPerEur(11.4),
                starts_at,
                ends_at: starts_at + TimeDelta::minutes(15),
            }
        };
        let prices =
            vec![quarter(2, 0, 0.10), quarter(2, 15, 0.30), SpotPrice::test_hour(3, 0.25)];

        let summary = summarize(&prices).unwrap();
        assert_eq!(summary.min_hourly.hour, 2);
        assert_relative_eq!(summary.min_hourly.rate.0, 0.20, epsilon = 1e-12);
        assert_eq!(summary.max_hourly.hour, 3);
        // Weighted over three records, not over the two hourly averages.
        assert_relative_eq!(summary.mean.0, (0.10 + 0.30 + 0.25) / 3.0, epsilon = 1e-12);
    }

    #[test]
    fn test_ties_resolve_to_the_earliest_hour() {
        let prices =
            vec![SpotPrice::test_hour(4, 0.20), SpotPrice::test_hour(7, 0.20)];
        let summary = summarize(&prices).unwrap();
        assert_eq!(summary.min_hourly.hour, 4);
        assert_eq!(summary.max_hourly.hour, 4);
    }

    #[test]
    fn test_empty_input() {
        assert!(summarize(&[]).is_none());
        assert!(mean(&[]).is_none());
    }
}
