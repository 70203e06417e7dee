//! Adapter for the Wikimedia pageviews REST API.
pub mod client;
pub mod envelope;
pub mod fetcher;
pub mod query;
pub mod records;

pub use client::WikimediaClient;
pub use fetcher::{HttpFetcher, RawResponse, ReqwestFetcher};
pub use query::UpstreamQuery;

pub const DEFAULT_BASE_URL: &str = "https://wikimedia.org/api/rest_v1/metrics/pageviews";
pub const DEFAULT_PROJECT: &str = "en.wikipedia";
