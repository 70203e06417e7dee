// src/domain/pageviews/entity.rs

/// Total views of one article over the aggregated period.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArticleViewCount {
    pub article: String,
    pub views: u64,
}

impl ArticleViewCount {
    pub fn new(article: impl Into<String>, views: u64) -> Self {
        Self {
            article: article.into(),
            views,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankedArticle {
    pub article: String,
    pub views: u64,
    /// 1-based position in the ranking.
    pub rank: u32,
}

/// One point of a per-article series. `timestamp` is kept exactly as the
/// upstream reported it (`YYYYMMDDHH`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DailyViews {
    pub timestamp: String,
    pub views: u64,
}

impl DailyViews {
    pub fn new(timestamp: impl Into<String>, views: u64) -> Self {
        Self {
            timestamp: timestamp.into(),
            views,
        }
    }
}
