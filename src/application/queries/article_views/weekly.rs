use super::ArticleViewsQueryService;
use crate::application::{dto::PageviewsDto, error::ApplicationResult, queries::periods::resolve_week};
use crate::domain::pageviews::{ArticleTitle, Granularity, total_views};

pub struct WeeklyArticleViewsQuery {
    pub article: String,
    pub year: i32,
    pub week: u32,
}

impl ArticleViewsQueryService {
    pub async fn weekly_pageviews(
        &self,
        query: WeeklyArticleViewsQuery,
    ) -> ApplicationResult<PageviewsDto> {
        let range = resolve_week(self.clock.as_ref(), query.year, query.week)?;
        let article = ArticleTitle::new(query.article)?;

        let series = self
            .fetch_series(&article, Granularity::Daily, range)
            .await?;
        Ok(PageviewsDto::new(total_views(&series)))
    }
}
