//! Success bodies of the upstream endpoints. Fields the service does not use
//! (project, access, rank, ...) are ignored on decode.
use crate::domain::pageviews::{ArticleViewCount, DailyViews};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct TopArticlesResponse {
    #[serde(default)]
    pub items: Vec<TopArticlesItem>,
}

#[derive(Debug, Deserialize)]
pub struct TopArticlesItem {
    #[serde(default)]
    pub articles: Vec<TopArticleRecord>,
}

#[derive(Debug, Deserialize)]
pub struct TopArticleRecord {
    pub article: String,
    pub views: u64,
}

impl TopArticlesResponse {
    /// Articles of the first item in upstream order; no items means no articles.
    pub fn into_counts(self) -> Vec<ArticleViewCount> {
        self.items
            .into_iter()
            .next()
            .map(|item| item.articles)
            .unwrap_or_default()
            .into_iter()
            .map(|record| ArticleViewCount::new(record.article, record.views))
            .collect()
    }
}

#[derive(Debug, Deserialize)]
pub struct PerArticleResponse {
    #[serde(default)]
    pub items: Vec<PerArticleRecord>,
}

#[derive(Debug, Deserialize)]
pub struct PerArticleRecord {
    pub timestamp: String,
    pub views: u64,
}

impl PerArticleResponse {
    pub fn into_series(self) -> Vec<DailyViews> {
        self.items
            .into_iter()
            .map(|record| DailyViews::new(record.timestamp, record.views))
            .collect()
    }
}
