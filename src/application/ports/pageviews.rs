// src/application/ports/pageviews.rs
use crate::application::{ApplicationResult, error::ApplicationError};
use crate::domain::{
    calendar::{DateRange, Month, Year},
    pageviews::{ArticleTitle, ArticleViewCount, DailyViews, Granularity},
};
use async_trait::async_trait;
use chrono::NaiveDate;

/// Non-200 answer of a single upstream call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpstreamFailure {
    pub status: u16,
    pub detail: String,
}

/// Result of one upstream call that reached the analytics API.
///
/// Transport failures never produce an outcome; they surface as the `Err`
/// side of the port methods instead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpstreamOutcome<T> {
    Success(T),
    Failure(UpstreamFailure),
}

impl<T> UpstreamOutcome<T> {
    pub fn failure(status: u16, detail: impl Into<String>) -> Self {
        Self::Failure(UpstreamFailure {
            status,
            detail: detail.into(),
        })
    }

    pub fn map<U, F>(self, f: F) -> UpstreamOutcome<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Success(value) => UpstreamOutcome::Success(f(value)),
            Self::Failure(failure) => UpstreamOutcome::Failure(failure),
        }
    }

    pub fn into_result(self) -> ApplicationResult<T> {
        match self {
            Self::Success(value) => Ok(value),
            Self::Failure(UpstreamFailure { status, detail }) => {
                Err(ApplicationError::upstream(status, detail))
            }
        }
    }
}

/// Access to the upstream pageview analytics. One method call is exactly one
/// upstream request; implementations never retry.
#[async_trait]
pub trait PageviewsSource: Send + Sync {
    /// Most viewed articles of a single day, in upstream order.
    async fn top_articles_for_day(
        &self,
        day: NaiveDate,
    ) -> ApplicationResult<UpstreamOutcome<Vec<ArticleViewCount>>>;

    /// Most viewed articles over all days of a month, in upstream order.
    async fn top_articles_for_month(
        &self,
        year: Year,
        month: Month,
    ) -> ApplicationResult<UpstreamOutcome<Vec<ArticleViewCount>>>;

    /// View series of one article over `range` at the given granularity.
    async fn article_views(
        &self,
        article: &ArticleTitle,
        granularity: Granularity,
        range: DateRange,
    ) -> ApplicationResult<UpstreamOutcome<Vec<DailyViews>>>;
}
