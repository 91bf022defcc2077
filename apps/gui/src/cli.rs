use crate::config::Config;
use crate::constants;
use clap::{ArgAction, Parser};

#[derive(Parser, Debug)]
#[command(version, about)]
pub struct Cli {
    /// Listing endpoint, overrides `catalog.endpoint`
    #[arg(long)]
    pub endpoint: Option<String>,

    /// Movies per page, overrides `catalog.page-size`
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..=constants::MAX_PAGE_SIZE as i64))]
    pub page_size: Option<u32>,

    /// Search term to start with
    #[arg(short, long)]
    pub query: Option<String>,

    /// Increase verbosity. Can be used multiple times (e.g., -v, -vv, -vvv).
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// Command line flags take precedence over `gui.toml`
    pub fn apply(&self, config: &mut Config) {
        if let Some(endpoint) = &self.endpoint {
            config.catalog.endpoint = endpoint.clone();
        }
        if let Some(page_size) = self.page_size {
            config.catalog.page_size = page_size;
        }
    }
}
