use super::TopArticlesQueryService;
use crate::application::{
    dto::RankedArticleDto, error::ApplicationResult, queries::periods::resolve_month,
};
use crate::domain::pageviews::{TOP_N, rank_top};

pub struct MonthlyTopArticlesQuery {
    pub year: i32,
    pub month: u32,
}

impl TopArticlesQueryService {
    pub async fn monthly_top_articles(
        &self,
        query: MonthlyTopArticlesQuery,
    ) -> ApplicationResult<Vec<RankedArticleDto>> {
        let (year, month, range) = resolve_month(self.clock.as_ref(), query.year, query.month)?;
        tracing::debug!(%year, %month, %range, "fetching monthly top articles");

        let articles = self
            .source
            .top_articles_for_month(year, month)
            .await?
            .into_result()?;

        Ok(rank_top(articles, TOP_N)
            .into_iter()
            .map(Into::into)
            .collect())
    }
}
