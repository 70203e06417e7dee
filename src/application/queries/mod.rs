pub mod article_views;
mod periods;
pub mod top_articles;
