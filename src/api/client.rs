use std::time::Duration;

use reqwest::Client;

use crate::prelude::*;

/// Build the shared HTTP client.
///
/// The timeout bounds the only blocking operation in the process: a hung
/// remote call fails the fetch instead of hanging the caller.
pub fn try_new(timeout: Duration) -> Result<Client> {
    Ok(Client::builder().timeout(timeout).build()?)
}
