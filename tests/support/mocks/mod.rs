// tests/support/mocks/mod.rs
pub mod fetcher;
pub mod pageviews;
pub mod time;

pub use fetcher::StubFetcher;
pub use pageviews::StubPageviewsSource;
pub use time::{FixedClock, fixed_now};
