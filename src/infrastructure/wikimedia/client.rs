use super::{
    envelope::error_detail,
    fetcher::{HttpFetcher, RawResponse},
    query::UpstreamQuery,
    records::{PerArticleResponse, TopArticlesResponse},
};
use crate::application::{
    ApplicationResult,
    error::ApplicationError,
    ports::pageviews::{PageviewsSource, UpstreamOutcome},
};
use crate::domain::{
    calendar::{DateRange, Month, Year, month_range},
    pageviews::{ArticleTitle, ArticleViewCount, DailyViews, Granularity},
};
use async_trait::async_trait;
use chrono::NaiveDate;
use reqwest::Url;
use serde::de::DeserializeOwned;
use std::sync::Arc;

const HTTP_OK: u16 = 200;

/// [`PageviewsSource`] backed by the Wikimedia REST API.
pub struct WikimediaClient {
    fetcher: Arc<dyn HttpFetcher>,
    base_url: Url,
    project: String,
}

impl WikimediaClient {
    pub fn new(
        fetcher: Arc<dyn HttpFetcher>,
        base_url: &str,
        project: impl Into<String>,
    ) -> ApplicationResult<Self> {
        let base_url = Url::parse(base_url).map_err(|err| {
            ApplicationError::infrastructure(format!("invalid upstream base url {base_url}: {err}"))
        })?;
        if base_url.cannot_be_a_base() {
            return Err(ApplicationError::infrastructure(format!(
                "upstream base url {base_url} cannot carry a path"
            )));
        }

        Ok(Self {
            fetcher,
            base_url,
            project: project.into(),
        })
    }

    /// Full request URL. Every segment is percent-encoded on its own, so an
    /// article title can never introduce extra path segments.
    pub fn url_for(&self, query: &UpstreamQuery<'_>) -> ApplicationResult<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|()| ApplicationError::infrastructure("upstream base url cannot carry a path"))?
            .pop_if_empty()
            .extend(query.path_segments(&self.project));
        Ok(url)
    }

    async fn execute<T>(&self, query: UpstreamQuery<'_>) -> ApplicationResult<UpstreamOutcome<T>>
    where
        T: DeserializeOwned,
    {
        let url = self.url_for(&query)?;
        tracing::debug!(%url, "requesting upstream pageviews");

        let response = self.fetcher.get(url.as_str()).await.inspect_err(|err| {
            tracing::error!(%url, error = %err, "upstream request failed");
        })?;
        classify(&url, response)
    }
}

/// Splits a raw response into success and structured failure. Only a 200 is
/// a success; its body must decode into `T`.
fn classify<T>(url: &Url, response: RawResponse) -> ApplicationResult<UpstreamOutcome<T>>
where
    T: DeserializeOwned,
{
    if response.status == HTTP_OK {
        return serde_json::from_slice(&response.body)
            .map(UpstreamOutcome::Success)
            .map_err(|err| {
                tracing::error!(%url, error = %err, "malformed upstream response");
                ApplicationError::infrastructure(format!("malformed upstream response: {err}"))
            });
    }

    let detail = error_detail(&response.body);
    tracing::warn!(%url, status = response.status, %detail, "upstream rejected request");
    Ok(UpstreamOutcome::failure(response.status, detail))
}

#[async_trait]
impl PageviewsSource for WikimediaClient {
    async fn top_articles_for_day(
        &self,
        day: NaiveDate,
    ) -> ApplicationResult<UpstreamOutcome<Vec<ArticleViewCount>>> {
        let outcome: UpstreamOutcome<TopArticlesResponse> = self
            .execute(UpstreamQuery::top_articles_daily(day))
            .await?;
        Ok(outcome.map(TopArticlesResponse::into_counts))
    }

    async fn top_articles_for_month(
        &self,
        year: Year,
        month: Month,
    ) -> ApplicationResult<UpstreamOutcome<Vec<ArticleViewCount>>> {
        let range = month_range(year, month)?;
        let outcome: UpstreamOutcome<TopArticlesResponse> = self
            .execute(UpstreamQuery::top_articles_monthly(range))
            .await?;
        Ok(outcome.map(TopArticlesResponse::into_counts))
    }

    async fn article_views(
        &self,
        article: &ArticleTitle,
        granularity: Granularity,
        range: DateRange,
    ) -> ApplicationResult<UpstreamOutcome<Vec<DailyViews>>> {
        let outcome: UpstreamOutcome<PerArticleResponse> = self
            .execute(UpstreamQuery::per_article(article, granularity, range))
            .await?;
        Ok(outcome.map(PerArticleResponse::into_series))
    }
}
