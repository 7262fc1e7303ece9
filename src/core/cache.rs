//! Two-tier read-through cache: process memory in front of a pluggable
//! payload store. No eviction and no TTL, since prices for a past calendar
//! day never change upstream.

use std::{
    collections::HashMap,
    fmt::{Display, Formatter},
    fs,
    path::PathBuf,
};

use chrono::NaiveDate;
use parking_lot::RwLock;

use crate::{
    api::feed,
    core::{price::SpotPrice, zone::Zone},
    prelude::*,
};

/// Addresses one day of prices in both tiers.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct CacheKey {
    pub zone: Zone,
    pub on: NaiveDate,
}

impl Display for CacheKey {
    /// `2025-08-30_SE3`, which is also the disk-tier file stem.
    fn fmt(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
        write!(formatter, "{}_{}", self.on, self.zone)
    }
}

/// Durable side of the cache, holding raw feed payloads.
///
/// Implementations are best-effort: a read may always miss and a write may
/// silently do nothing. Correctness never depends on this tier, only the
/// number of remote fetches does.
pub trait PayloadStore: Send + Sync {
    fn read(&self, key: &CacheKey) -> Option<String>;

    /// Fire-and-forget; failures must be swallowed (logging them is fine).
    fn write(&self, key: &CacheKey, payload: &str);
}

/// The absent disk tier: every read misses, writes vanish.
pub struct NoStore;

impl PayloadStore for NoStore {
    fn read(&self, _key: &CacheKey) -> Option<String> {
        None
    }

    fn write(&self, _key: &CacheKey, _payload: &str) {}
}

/// One `<key>.json` file per day under the given directory.
pub struct FileStore {
    directory: PathBuf,
}

impl FileStore {
    pub const fn new(directory: PathBuf) -> Self {
        Self { directory }
    }

    fn path(&self, key: &CacheKey) -> PathBuf {
        self.directory.join(format!("{key}.json"))
    }
}

impl PayloadStore for FileStore {
    fn read(&self, key: &CacheKey) -> Option<String> {
        fs::read_to_string(self.path(key)).ok()
    }

    fn write(&self, key: &CacheKey, payload: &str) {
        let result = fs::create_dir_all(&self.directory)
            .and_then(|()| fs::write(self.path(key), payload));
        if let Err(error) = result {
            error!(%key, %error, "failed to write the disk cache");
        }
    }
}

#[derive(bon::Builder)]
pub struct PriceCache {
    /// When `false`, every lookup misses and every insertion is dropped, so
    /// the repository always goes to the feed.
    #[builder(default = true)]
    enabled: bool,

    #[builder(skip = RwLock::new(HashMap::new()))]
    memory: RwLock<HashMap<CacheKey, Vec<SpotPrice>>>,

    #[builder(default = Box::new(NoStore))]
    store: Box<dyn PayloadStore>,
}

impl Default for PriceCache {
    fn default() -> Self {
        Self::builder().build()
    }
}

impl PriceCache {
    /// Look a day up, memory tier first.
    ///
    /// A disk hit repopulates the memory tier, so a repeated lookup for the
    /// same key never touches the disk twice.
    pub fn get(&self, key: &CacheKey) -> Option<Vec<SpotPrice>> {
        if !self.enabled {
            return None;
        }
        if let Some(prices) = self.memory.read().get(key) {
            debug!(%key, "memory hit");
            return Some(prices.clone());
        }
        let payload = self.store.read(key)?;
        let prices = feed::parse(&payload);
        if prices.is_empty() {
            return None;
        }
        debug!(%key, "disk hit");
        Some(self.populate(key, prices))
    }

    /// Cache a freshly fetched day: records in memory, raw payload on disk.
    pub fn insert(&self, key: &CacheKey, prices: Vec<SpotPrice>, payload: &str) {
        if !self.enabled {
            return;
        }
        self.store.write(key, payload);
        self.populate(key, prices);
    }

    /// Insert-if-absent into the memory tier and return the cached set, so a
    /// concurrent racer never replaces what another caller already holds.
    pub fn populate(&self, key: &CacheKey, prices: Vec<SpotPrice>) -> Vec<SpotPrice> {
        if !self.enabled {
            return prices;
        }
        self.memory.write().entry(*key).or_insert(prices).clone()
    }

    /// Drop every memory-tier entry. The disk tier is left alone.
    pub fn clear(&self) {
        self.memory.write().clear();
    }
}
