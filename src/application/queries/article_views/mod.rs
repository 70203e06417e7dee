mod monthly;
mod service;
mod top_day;
mod weekly;

pub use monthly::MonthlyArticleViewsQuery;
pub use service::ArticleViewsQueryService;
pub use top_day::TopDayOfMonthQuery;
pub use weekly::WeeklyArticleViewsQuery;
