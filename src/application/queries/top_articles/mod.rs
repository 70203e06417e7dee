mod monthly;
mod service;
mod weekly;

pub use monthly::MonthlyTopArticlesQuery;
pub use service::TopArticlesQueryService;
pub use weekly::WeeklyTopArticlesQuery;
