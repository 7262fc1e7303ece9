use std::collections::HashMap;

use chrono::{Days, NaiveDate};

use crate::{
    api::{PriceFeed, feed},
    core::{
        cache::{CacheKey, PriceCache},
        price::SpotPrice,
        zone::Zone,
    },
    prelude::*,
};

/// The single entry point for obtaining a day's prices.
///
/// Resolution order: canned override payloads, then the cache tiers, then the
/// remote feed. Unavailability of any kind degrades to an empty sequence,
/// since "no prices" is a normal outcome for callers, never an error.
#[derive(bon::Builder)]
pub struct PriceRepository<F> {
    feed: F,

    #[builder(default)]
    cache: PriceCache,

    /// Canned payloads by date. When one is present for the requested date it
    /// takes precedence over both cache tiers and suppresses the fetch, so
    /// tests stay deterministic and offline.
    #[builder(default)]
    overrides: HashMap<NaiveDate, String>,
}

impl<F: PriceFeed> PriceRepository<F> {
    /// Fetch one day's prices, empty when the day is unavailable for any
    /// reason.
    #[instrument(skip_all, fields(%on, %zone))]
    pub async fn get_prices(&self, on: NaiveDate, zone: Zone) -> Vec<SpotPrice> {
        let key = CacheKey { zone, on };

        if let Some(payload) = self.overrides.get(&on) {
            debug!(%key, "using the canned payload");
            let prices = feed::parse(payload);
            if !prices.is_empty() {
                self.cache.populate(&key, prices.clone());
            }
            return prices;
        }

        if let Some(prices) = self.cache.get(&key) {
            return prices;
        }

        match self.feed.fetch_day(on, zone).await {
            Ok(Some(payload)) => {
                let prices = feed::parse(&payload);
                if prices.is_empty() {
                    info!(%key, "the feed returned no usable prices");
                } else {
                    self.cache.insert(&key, prices.clone(), &payload);
                }
                prices
            }
            Ok(None) => {
                info!(%key, "prices are not published yet");
                Vec::new()
            }
            Err(error) => {
                error!(%key, "failed to fetch prices: {error:#}");
                Vec::new()
            }
        }
    }

    /// The requested day's and the following day's prices, concatenated
    /// chronologically, so a charging window may span the midnight boundary.
    pub async fn get_upcoming_prices(&self, since: NaiveDate, zone: Zone) -> Vec<SpotPrice> {
        let mut prices = self.get_prices(since, zone).await;
        if let Some(next) = since.checked_add_days(Days::new(1)) {
            prices.extend(self.get_prices(next, zone).await);
        }
        prices
    }
}
