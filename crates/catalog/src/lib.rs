//! Movie catalog client.
//!
//! Talks to a YTS-style `list_movies` API and keeps the state a viewer needs:
//! - [`client`]: the listing API and its `reqwest` implementation
//! - [`pagination`]: page-number window for a pagination control
//! - [`session`] / [`driver`]: debounced search, periodic refresh and
//!   stale-response protection, published as [`CatalogSnapshot`]s

pub mod client;
pub mod debounce;
pub mod driver;
pub mod error;
pub mod models;
pub mod pagination;
pub mod query;
pub mod session;

pub use client::{CatalogSource, DEFAULT_ENDPOINT, HttpCatalogClient, decode_list_response};
pub use debounce::{DEFAULT_DEBOUNCE, Debouncer};
pub use driver::{CatalogCommand, CatalogDriver, CatalogHandle, CatalogOptions, DEFAULT_POLL_INTERVAL};
pub use error::FetchError;
pub use models::{Movie, MoviePage};
pub use pagination::{PageToken, page_window, total_pages};
pub use query::{DEFAULT_PAGE_SIZE, ListQuery};
pub use session::{CatalogSnapshot, FetchState, Session};
