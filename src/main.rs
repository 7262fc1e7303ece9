#![allow(clippy::doc_markdown)]
#![doc = include_str!("../README.md")]

mod api;
mod cli;
mod core;
mod fmt;
mod prelude;
mod quantity;
mod statistics;
mod tables;

use std::{cmp::Reverse, time::Duration};

use chrono::{Local, NaiveTime};
use clap::{Parser, crate_version};
use itertools::Itertools;

use crate::{
    api::Elprisetjustnu,
    cli::Args,
    core::{
        cache::{FileStore, NoStore, PayloadStore, PriceCache},
        repository::PriceRepository,
        window::{Wrap, find_cheapest_window},
    },
    fmt::FormattedOre,
    prelude::*,
    tables::{build_charging_table, build_prices_table},
};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt().without_time().compact().init();
    info!(version = crate_version!(), "starting…");

    let args = Args::parse();

    let store: Box<dyn PayloadStore> = match args.cache_directory() {
        Some(directory) => Box::new(FileStore::new(directory)),
        None => Box::new(NoStore),
    };
    let repository = PriceRepository::builder()
        .feed(Elprisetjustnu::new(Duration::from_secs(args.timeout_secs))?)
        .cache(PriceCache::builder().enabled(!args.no_cache).store(store).build())
        .build();

    let now = Local::now().fixed_offset();
    let on = args.date.unwrap_or_else(|| now.date_naive());
    let mut prices = repository.get_upcoming_prices(on, args.zone).await;

    // Tomorrow's auction results are out by 13:00; from then on the listing
    // only keeps hours that have not started yet.
    if on == now.date_naive()
        && now.time() > NaiveTime::from_hms_opt(13, 0, 0).unwrap()
    {
        prices.retain(|price| price.starts_at >= now);
    }

    if prices.is_empty() {
        info!(zone = %args.zone, %on, "no prices are available");
        return Ok(());
    }
    let summary = statistics::summarize(&prices).context("no prices to summarize")?;

    let listing = if args.sorted {
        prices
            .iter()
            .copied()
            .sorted_by_key(|price| (Reverse(price.sek_per_kwh), price.starts_at))
            .collect_vec()
    } else {
        prices.iter().copied().sorted_by_key(|price| price.starts_at).collect_vec()
    };
    println!("{}", build_prices_table(&listing, summary.mean));

    println!(
        "Cheapest hour: {} öre/kWh ({:02}-{:02})",
        FormattedOre(summary.min_hourly.rate),
        summary.min_hourly.hour,
        (summary.min_hourly.hour + 1) % 24,
    );
    println!(
        "Priciest hour: {} öre/kWh ({:02}-{:02})",
        FormattedOre(summary.max_hourly.rate),
        summary.max_hourly.hour,
        (summary.max_hourly.hour + 1) % 24,
    );
    println!("Mean: {} öre/kWh", FormattedOre(summary.mean));

    if let Some(hours) = args.charging {
        let wrap = if args.no_wrap { Wrap::Forbidden } else { Wrap::Allowed };
        let window = find_cheapest_window(&prices, hours, wrap);
        if window.is_empty() {
            warn!(hours, available = prices.len(), "not enough records for a charging window");
        } else if let Some(window_mean) = statistics::mean(&window) {
            println!("\nCheapest {hours}-hour charging window:");
            println!("{}", build_charging_table(&window));
            println!("Window mean: {} öre/kWh", FormattedOre(window_mean));
        }
    }

    Ok(())
}
