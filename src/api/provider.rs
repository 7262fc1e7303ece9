use async_trait::async_trait;
use chrono::NaiveDate;

use crate::{core::zone::Zone, prelude::*};

/// A remote source of day-ahead price payloads.
#[async_trait]
pub trait PriceFeed: Sync {
    /// Fetch one day's raw payload.
    ///
    /// `Ok(None)` means the feed has not published that day yet, which is a
    /// normal outcome for tomorrow before the daily auction closes.
    async fn fetch_day(&self, on: NaiveDate, zone: Zone) -> Result<Option<String>>;
}
