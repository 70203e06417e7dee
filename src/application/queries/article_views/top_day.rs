use super::ArticleViewsQueryService;
use crate::application::{
    dto::TopDayPageviewsDto, error::ApplicationResult, queries::periods::resolve_month,
};
use crate::domain::pageviews::{ArticleTitle, Granularity, peak_day};

pub struct TopDayOfMonthQuery {
    pub article: String,
    pub year: i32,
    pub month: u32,
}

impl ArticleViewsQueryService {
    /// Day of the month on which the article was viewed the most.
    pub async fn top_day_of_month(
        &self,
        query: TopDayOfMonthQuery,
    ) -> ApplicationResult<TopDayPageviewsDto> {
        let (_, _, range) = resolve_month(self.clock.as_ref(), query.year, query.month)?;
        let article = ArticleTitle::new(query.article)?;

        let series = self
            .fetch_series(&article, Granularity::Daily, range)
            .await?;
        Ok(peak_day(&series).into())
    }
}
