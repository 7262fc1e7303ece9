//! Wire codec for the day-ahead price feed.
//!
//! Deliberately narrow: the upstream payload is a flat JSON array of flat
//! objects with five known fields, and that exact shape is all this module
//! accepts. An unexpected top-level shape yields an empty result, and a
//! malformed object is skipped with a diagnostic while its siblings parse.
//! The feed is never rejected wholesale.

use chrono::{DateTime, FixedOffset};

use crate::{core::price::SpotPrice, prelude::*};

/// Parse one day's raw payload into price records, in payload order.
#[must_use]
pub fn parse(raw: &str) -> Vec<SpotPrice> {
    let raw = raw.trim();
    let Some(body) = raw.strip_prefix('[').and_then(|raw| raw.strip_suffix(']')) else {
        return Vec::new();
    };
    let body = body.trim();
    if body.is_empty() {
        return Vec::new();
    }

    let mut prices = Vec::new();
    for object in split_objects(body) {
        match parse_object(object) {
            Ok(price) => prices.push(price),
            Err(error) => warn!("skipping a malformed price object: {error:#}"),
        }
    }
    prices
}

/// Split the array body at `}` `,` `{` object boundaries, whitespace
/// tolerated in between. Stray braces left on the first and last object are
/// stripped later by [`parse_object`].
fn split_objects(body: &str) -> Vec<&str> {
    let bytes = body.as_bytes();
    let mut objects = Vec::new();
    let mut start = 0;
    let mut index = 0;
    while index < bytes.len() {
        if bytes[index] == b'}' {
            let mut comma = index + 1;
            while comma < bytes.len() && bytes[comma].is_ascii_whitespace() {
                comma += 1;
            }
            if comma < bytes.len() && bytes[comma] == b',' {
                let mut brace = comma + 1;
                while brace < bytes.len() && bytes[brace].is_ascii_whitespace() {
                    brace += 1;
                }
                if brace < bytes.len() && bytes[brace] == b'{' {
                    objects.push(&body[start..index]);
                    start = brace + 1;
                    index = brace + 1;
                    continue;
                }
            }
        }
        index += 1;
    }
    objects.push(&body[start..]);
    objects
}

/// Parse one object's `key: value` pairs into a record.
///
/// Values are split from keys at the first colon so the timestamps keep
/// theirs. Unknown keys are ignored; a missing or unparseable required field
/// fails the whole record.
fn parse_object(object: &str) -> Result<SpotPrice> {
    let object = object.replace(['{', '}'], "");

    let mut sek_per_kwh = None;
    let mut eur_per_kwh = None;
    let mut exchange_rate = None;
    let mut starts_at = None;
    let mut ends_at = None;

    for pair in object.split(',') {
        let (key, value) =
            pair.split_once(':').with_context(|| format!("no `:` in `{}`", pair.trim()))?;
        let key = key.trim().trim_matches('"');
        let value = value.trim().trim_matches('"');
        match key {
            "SEK_per_kWh" => sek_per_kwh = Some(value.parse().context("bad SEK_per_kWh")?),
            "EUR_per_kWh" => eur_per_kwh = Some(value.parse().context("bad EUR_per_kWh")?),
            "EXR" => exchange_rate = Some(value.parse().context("bad EXR")?),
            "time_start" => {
                starts_at = Some(parse_timestamp(value).context("bad time_start")?);
            }
            "time_end" => {
                ends_at = Some(parse_timestamp(value).context("bad time_end")?);
            }
            _ => {}
        }
    }

    let price = SpotPrice {
        sek_per_kwh: sek_per_kwh.context("missing SEK_per_kWh")?,
        eur_per_kwh: eur_per_kwh.context("missing EUR_per_kWh")?,
        exchange_rate: exchange_rate.context("missing EXR")?,
        starts_at: starts_at.context("missing time_start")?,
        ends_at: ends_at.context("missing time_end")?,
    };
    ensure!(price.ends_at > price.starts_at, "the interval ends before it starts");
    Ok(price)
}

fn parse_timestamp(value: &str) -> Result<DateTime<FixedOffset>> {
    Ok(DateTime::parse_from_rfc3339(value)?)
}

#[cfg(test)]
mod tests {
    use crate::quantity::rate::{EurPerKilowattHour, SekPerEur, SekPerKilowattHour};

    use super::*;

    const PAYLOAD: &str = r#"[
        {"SEK_per_kWh": 0.26673, "EUR_per_kWh": 0.02328, "EXR": 11.457239, "time_start": "2025-08-30T00:00:00+02:00", "time_end": "2025-08-30T01:00:00+02:00"},
        {"SEK_per_kWh": 0.25107, "EUR_per_kWh": 0.02191, "EXR": 11.457239, "time_start": "2025-08-30T01:00:00+02:00", "time_end": "2025-08-30T02:00:00+02:00"}
    ]"#;

    #[test]
    fn test_round_trip() -> Result {
        let prices = parse(PAYLOAD);
        assert_eq!(prices.len(), 2);
        assert_eq!(prices[0].sek_per_kwh, SekPerKilowattHour(0.26673));
        assert_eq!(prices[0].eur_per_kwh, EurPerKilowattHour(0.02328));
        assert_eq!(prices[0].exchange_rate, SekPerEur(11.457239));
        assert_eq!(prices[0].starts_at, DateTime::parse_from_rfc3339("2025-08-30T00:00:00+02:00")?);
        assert_eq!(prices[0].ends_at, DateTime::parse_from_rfc3339("2025-08-30T01:00:00+02:00")?);
        assert_eq!(prices[1].sek_per_kwh, SekPerKilowattHour(0.25107));
        assert_eq!(prices[1].starts_at, DateTime::parse_from_rfc3339("2025-08-30T01:00:00+02:00")?);
        Ok(())
    }

    #[test]
    fn test_compact_payload() {
        let compact = PAYLOAD.replace(char::is_whitespace, "");
        assert_eq!(parse(&compact).len(), 2);
    }

    #[test]
    fn test_non_array_is_empty() {
        assert!(parse(r#"{"error": "not found"}"#).is_empty());
        assert!(parse("").is_empty());
        assert!(parse("[]").is_empty());
        assert!(parse("[  ]").is_empty());
    }

    #[test]
    fn test_malformed_object_is_skipped() {
        let payload = r#"[
            {"SEK_per_kWh": 0.26673, "EUR_per_kWh": 0.02328, "EXR": 11.457239, "time_start": "2025-08-30T00:00:00+02:00", "time_end": "2025-08-30T01:00:00+02:00"},
            {"SEK_per_kWh": eleven, "EUR_per_kWh": 0.02191, "EXR": 11.457239, "time_start": "2025-08-30T01:00:00+02:00", "time_end": "2025-08-30T02:00:00+02:00"},
            {"SEK_per_kWh": 0.24001, "EUR_per_kWh": 0.02095, "EXR": 11.457239, "time_start": "2025-08-30T02:00:00+02:00", "time_end": "2025-08-30T03:00:00+02:00"}
        ]"#;
        let prices = parse(payload);
        assert_eq!(prices.len(), 2);
        assert_eq!(prices[0].sek_per_kwh, SekPerKilowattHour(0.26673));
        assert_eq!(prices[1].sek_per_kwh, SekPerKilowattHour(0.24001));
    }

    #[test]
    fn test_missing_field_is_skipped() {
        let payload = r#"[{"SEK_per_kWh": 0.26673, "EUR_per_kWh": 0.02328, "EXR": 11.457239, "time_start": "2025-08-30T00:00:00+02:00"}]"#;
        assert!(parse(payload).is_empty());
    }

    #[test]
    fn test_inverted_interval_is_skipped() {
        let payload = r#"[{"SEK_per_kWh": 0.26673, "EUR_per_kWh": 0.02328, "EXR": 11.457239, "time_start": "2025-08-30T01:00:00+02:00", "time_end": "2025-08-30T00:00:00+02:00"}]"#;
        assert!(parse(payload).is_empty());
    }

    #[test]
    fn test_unknown_fields_are_ignored() {
        let payload = r#"[{"SEK_per_kWh": 0.26673, "EUR_per_kWh": 0.02328, "EXR": 11.457239, "time_start": "2025-08-30T00:00:00+02:00", "time_end": "2025-08-30T01:00:00+02:00", "source": "spot"}]"#;
        assert_eq!(parse(payload).len(), 1);
    }
}
