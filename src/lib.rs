// src/lib.rs

//! Basketball-Reference table extraction: build a request, fetch the page,
//! locate the first table, normalize it into a column-consistent record set.

pub mod config;
pub mod error;
pub mod export;
pub mod fetch;
pub mod names;
pub mod normalize;
pub mod pipeline;
pub mod record;
pub mod request;
pub mod schema;
pub mod table;
pub mod teams;

pub use config::Config;
pub use error::{FetchError, ScrapeError};
pub use fetch::{FetchResponse, Fetcher, HttpFetcher};
pub use names::{AccentStripper, NameNormalizer};
pub use pipeline::{stack_seasons, Scraper};
pub use record::{RecordSet, Value};
pub use request::{parse_seasons, Endpoints, Entity, Period, PlayerFormat, Request, TeamFormat, View};
