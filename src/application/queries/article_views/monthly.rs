use super::ArticleViewsQueryService;
use crate::application::{dto::PageviewsDto, error::ApplicationResult, queries::periods::resolve_month};
use crate::domain::pageviews::{ArticleTitle, Granularity, total_views};

pub struct MonthlyArticleViewsQuery {
    pub article: String,
    pub year: i32,
    pub month: u32,
}

impl ArticleViewsQueryService {
    pub async fn monthly_pageviews(
        &self,
        query: MonthlyArticleViewsQuery,
    ) -> ApplicationResult<PageviewsDto> {
        let (_, _, range) = resolve_month(self.clock.as_ref(), query.year, query.month)?;
        let article = ArticleTitle::new(query.article)?;

        // A monthly series holds a single point; summing also copes with none.
        let series = self
            .fetch_series(&article, Granularity::Monthly, range)
            .await?;
        Ok(PageviewsDto::new(total_views(&series)))
    }
}
