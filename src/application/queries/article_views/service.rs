use std::sync::Arc;

use crate::application::{
    error::ApplicationResult,
    ports::{pageviews::PageviewsSource, time::Clock},
};
use crate::domain::{
    calendar::DateRange,
    pageviews::{ArticleTitle, DailyViews, Granularity},
};

pub struct ArticleViewsQueryService {
    pub(super) source: Arc<dyn PageviewsSource>,
    pub(super) clock: Arc<dyn Clock>,
}

impl ArticleViewsQueryService {
    pub fn new(source: Arc<dyn PageviewsSource>, clock: Arc<dyn Clock>) -> Self {
        Self { source, clock }
    }

    /// Fetches the whole range in a single upstream request.
    pub(super) async fn fetch_series(
        &self,
        article: &ArticleTitle,
        granularity: Granularity,
        range: DateRange,
    ) -> ApplicationResult<Vec<DailyViews>> {
        tracing::debug!(%article, %granularity, %range, "fetching article pageviews");
        self.source
            .article_views(article, granularity, range)
            .await?
            .into_result()
    }
}
