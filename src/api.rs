mod client;
mod elprisetjustnu;
pub mod feed;
mod provider;

pub use self::{elprisetjustnu::Api as Elprisetjustnu, provider::PriceFeed};
