use crate::constants::MAX_PAGE_SIZE;
use catalog::{
    CatalogOptions, DEFAULT_DEBOUNCE, DEFAULT_ENDPOINT, DEFAULT_PAGE_SIZE, DEFAULT_POLL_INTERVAL,
};
use serde::Deserialize;
use std::time::Duration;

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "kebab-case", default, deny_unknown_fields)]
pub struct CatalogConfig {
    pub endpoint: String,
    pub page_size: u32,
    /// 0 disables periodic refresh
    pub poll_interval_secs: u64,
    pub debounce_ms: u64,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            page_size: DEFAULT_PAGE_SIZE,
            poll_interval_secs: DEFAULT_POLL_INTERVAL.as_secs(),
            debounce_ms: DEFAULT_DEBOUNCE.as_millis() as u64,
        }
    }
}

impl CatalogConfig {
    pub fn options(&self, initial_search: String) -> CatalogOptions {
        CatalogOptions {
            page_size: self.page_size.clamp(1, MAX_PAGE_SIZE),
            debounce: Duration::from_millis(self.debounce_ms),
            poll_interval: Duration::from_secs(self.poll_interval_secs),
            initial_search,
        }
    }
}
