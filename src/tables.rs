use chrono::Timelike;
use comfy_table::{Attribute, Cell, CellAlignment, Color, Table, modifiers, presets};

use crate::{core::price::SpotPrice, fmt::FormattedOre, quantity::rate::SekPerKilowattHour};

/// The price listing: one row per record, coloured against the mean.
pub fn build_prices_table(prices: &[SpotPrice], mean: SekPerKilowattHour) -> Table {
    let mut table = Table::new();
    table
        .load_preset(presets::UTF8_FULL_CONDENSED)
        .apply_modifier(modifiers::UTF8_ROUND_CORNERS)
        .enforce_styling();
    table.set_header(vec![
        Cell::new("Date"),
        Cell::new("Hours"),
        Cell::new("öre/kWh").set_alignment(CellAlignment::Right),
    ]);
    for price in prices {
        table.add_row(vec![
            Cell::new(price.starts_at.format("%b %d")).add_attribute(Attribute::Dim),
            Cell::new(format!("{:02}-{:02}", price.starts_at.hour(), price.ends_at.hour())),
            Cell::new(FormattedOre(price.sek_per_kwh))
                .set_alignment(CellAlignment::Right)
                .fg(if price.sek_per_kwh >= mean { Color::Red } else { Color::Green }),
        ]);
    }
    table
}

/// The charging plan: one row per interval of the chosen window.
pub fn build_charging_table(window: &[SpotPrice]) -> Table {
    let mut table = Table::new();
    table
        .load_preset(presets::UTF8_FULL_CONDENSED)
        .apply_modifier(modifiers::UTF8_ROUND_CORNERS)
        .enforce_styling();
    table.set_header(vec![
        Cell::new("Start"),
        Cell::new("öre/kWh").set_alignment(CellAlignment::Right),
    ]);
    for price in window {
        table.add_row(vec![
            Cell::new(price.starts_at.format("%H:%M")),
            Cell::new(FormattedOre(price.sek_per_kwh)).set_alignment(CellAlignment::Right),
        ]);
    }
    table
}
