use chrono::{DateTime, FixedOffset};

use crate::quantity::rate::{EurPerKilowattHour, SekPerEur, SekPerKilowattHour};

/// One spot-price interval as published by the upstream feed.
///
/// Invariant: `ends_at > starts_at`; the parser rejects records violating it.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct SpotPrice {
    pub sek_per_kwh: SekPerKilowattHour,
    pub eur_per_kwh: EurPerKilowattHour,
    pub exchange_rate: SekPerEur,
    pub starts_at: DateTime<FixedOffset>,
    pub ends_at: DateTime<FixedOffset>,
}

#[cfg(test)]
impl SpotPrice {
    /// An hour-long record starting at the given hour of an arbitrary day.
    pub fn test_hour(hour: u32, rate: f64) -> Self {
        let starts_at =
            DateTime::parse_from_rfc3339(&format!("2025-08-30T{hour:02}:00:00+02:00")).unwrap();
        Self {
            sek_per_kwh: SekPerKilowattHour(rate),
            eur_per_kwh: EurPerKilowattHour(rate / 11.4),
            exchange_rate: SekPerEur(11.4),
            starts_at,
            ends_at: starts_at + chrono::TimeDelta::hours(1),
        }
    }
}
