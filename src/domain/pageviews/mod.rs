pub mod entity;
pub mod ranking;
pub mod series;
pub mod tally;
pub mod value_objects;

pub use entity::{ArticleViewCount, DailyViews, RankedArticle};
pub use ranking::{TOP_N, rank_top};
pub use series::{peak_day, total_views};
pub use tally::ViewTally;
pub use value_objects::{ArticleTitle, Granularity};
