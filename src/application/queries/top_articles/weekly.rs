use super::TopArticlesQueryService;
use crate::application::{
    dto::RankedArticleDto, error::ApplicationResult, queries::periods::resolve_week,
};
use crate::domain::pageviews::{TOP_N, ViewTally, rank_top};

pub struct WeeklyTopArticlesQuery {
    pub year: i32,
    pub week: u32,
}

impl TopArticlesQueryService {
    /// Top articles of an ISO week, summed over its seven days.
    ///
    /// Days are fetched one by one in calendar order. The first day the
    /// upstream refuses aborts the whole query and nothing aggregated so far
    /// is returned.
    pub async fn weekly_top_articles(
        &self,
        query: WeeklyTopArticlesQuery,
    ) -> ApplicationResult<Vec<RankedArticleDto>> {
        let range = resolve_week(self.clock.as_ref(), query.year, query.week)?;
        tracing::debug!(year = query.year, week = query.week, %range, "aggregating weekly top articles");

        let mut tally = ViewTally::new();
        for day in range.days() {
            let articles = self
                .source
                .top_articles_for_day(day)
                .await?
                .into_result()?;
            tally.merge(articles);
        }

        Ok(rank_top(tally.into_counts(), TOP_N)
            .into_iter()
            .map(Into::into)
            .collect())
    }
}
