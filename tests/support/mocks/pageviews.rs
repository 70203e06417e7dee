// tests/support/mocks/pageviews.rs
use async_trait::async_trait;
use chrono::NaiveDate;
use pageview_stats::application::{
    ApplicationResult,
    error::ApplicationError,
    ports::pageviews::{PageviewsSource, UpstreamOutcome},
};
use pageview_stats::domain::{
    calendar::{DateRange, Month, Year},
    pageviews::{ArticleTitle, ArticleViewCount, DailyViews, Granularity},
};
use std::collections::HashMap;
use std::sync::Mutex;

/// In-memory pageviews source that records every call it receives.
///
/// Days without a configured answer return an empty top list.
#[derive(Default)]
pub struct StubPageviewsSource {
    daily_top: HashMap<NaiveDate, UpstreamOutcome<Vec<ArticleViewCount>>>,
    monthly_top: Option<UpstreamOutcome<Vec<ArticleViewCount>>>,
    series: Option<UpstreamOutcome<Vec<DailyViews>>>,
    unreachable: bool,
    calls: Mutex<Vec<String>>,
}

impl StubPageviewsSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_day(mut self, day: NaiveDate, articles: Vec<ArticleViewCount>) -> Self {
        self.daily_top.insert(day, UpstreamOutcome::Success(articles));
        self
    }

    pub fn failing_day(mut self, day: NaiveDate, status: u16, detail: &str) -> Self {
        self.daily_top
            .insert(day, UpstreamOutcome::failure(status, detail));
        self
    }

    pub fn with_monthly_top(mut self, articles: Vec<ArticleViewCount>) -> Self {
        self.monthly_top = Some(UpstreamOutcome::Success(articles));
        self
    }

    pub fn with_series(mut self, series: Vec<DailyViews>) -> Self {
        self.series = Some(UpstreamOutcome::Success(series));
        self
    }

    pub fn failing_series(mut self, status: u16, detail: &str) -> Self {
        self.series = Some(UpstreamOutcome::failure(status, detail));
        self
    }

    /// Every call fails as if the network were down.
    pub fn unreachable(mut self) -> Self {
        self.unreachable = true;
        self
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: String) -> ApplicationResult<()> {
        self.calls.lock().unwrap().push(call);
        if self.unreachable {
            return Err(ApplicationError::infrastructure(
                "upstream request failed: connection refused",
            ));
        }
        Ok(())
    }
}

#[async_trait]
impl PageviewsSource for StubPageviewsSource {
    async fn top_articles_for_day(
        &self,
        day: NaiveDate,
    ) -> ApplicationResult<UpstreamOutcome<Vec<ArticleViewCount>>> {
        self.record(format!("day {day}"))?;
        Ok(self
            .daily_top
            .get(&day)
            .cloned()
            .unwrap_or(UpstreamOutcome::Success(Vec::new())))
    }

    async fn top_articles_for_month(
        &self,
        year: Year,
        month: Month,
    ) -> ApplicationResult<UpstreamOutcome<Vec<ArticleViewCount>>> {
        self.record(format!("month {year}-{month}"))?;
        Ok(self
            .monthly_top
            .clone()
            .unwrap_or(UpstreamOutcome::Success(Vec::new())))
    }

    async fn article_views(
        &self,
        article: &ArticleTitle,
        granularity: Granularity,
        range: DateRange,
    ) -> ApplicationResult<UpstreamOutcome<Vec<DailyViews>>> {
        self.record(format!("article {article} {granularity} {range}"))?;
        Ok(self
            .series
            .clone()
            .unwrap_or(UpstreamOutcome::Success(Vec::new())))
    }
}
