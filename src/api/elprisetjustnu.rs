//! [elprisetjustnu.se](https://www.elprisetjustnu.se) day-ahead price feed.

use std::time::Duration;

use async_trait::async_trait;
use chrono::NaiveDate;
use reqwest::{Client, StatusCode};

use crate::{
    api::{client, provider::PriceFeed},
    core::zone::Zone,
    prelude::*,
};

const BASE_URL: &str = "https://www.elprisetjustnu.se/api/v1/prices";

pub struct Api(Client);

impl Api {
    pub fn new(timeout: Duration) -> Result<Self> {
        Ok(Self(client::try_new(timeout)?))
    }

    fn url(on: NaiveDate, zone: Zone) -> String {
        format!("{BASE_URL}/{}_{zone}.json", on.format("%Y/%m-%d"))
    }
}

#[async_trait]
impl PriceFeed for Api {
    #[instrument(skip_all, fields(%on, %zone))]
    async fn fetch_day(&self, on: NaiveDate, zone: Zone) -> Result<Option<String>> {
        info!("fetching…");
        let response =
            self.0.get(Self::url(on, zone)).send().await.context("failed to call the feed")?;
        if response.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        let payload = response
            .error_for_status()
            .context("the feed request failed")?
            .text()
            .await
            .context("failed to read the feed response")?;
        Ok(Some(payload))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url() -> Result {
        let on = NaiveDate::from_ymd_opt(2025, 8, 30).context("bad date")?;
        assert_eq!(
            Api::url(on, Zone::Se3),
            "https://www.elprisetjustnu.se/api/v1/prices/2025/08-30_SE3.json",
        );
        Ok(())
    }
}
