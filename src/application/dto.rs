// src/application/dto.rs
use crate::domain::pageviews::{DailyViews, RankedArticle};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// One entry of a top-articles ranking.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct RankedArticleDto {
    #[serde(rename = "Article")]
    #[schema(example = "Main_Page")]
    pub article: String,
    #[serde(rename = "Views")]
    pub views: u64,
    #[serde(rename = "Rank")]
    pub rank: u32,
}

impl From<RankedArticle> for RankedArticleDto {
    fn from(ranked: RankedArticle) -> Self {
        Self {
            article: ranked.article,
            views: ranked.views,
            rank: ranked.rank,
        }
    }
}

/// Total views of an article, stringified on the wire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct PageviewsDto {
    #[serde(rename = "Pageviews")]
    #[schema(example = "485684")]
    pub pageviews: String,
}

impl PageviewsDto {
    pub fn new(total: u64) -> Self {
        Self {
            pageviews: total.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct TopDayPageviewsDto {
    #[serde(rename = "Pageviews")]
    #[schema(example = "30724")]
    pub pageviews: String,
    /// Raw upstream timestamp (`YYYYMMDDHH`), empty when the month had no views.
    #[serde(rename = "Timestamp")]
    #[schema(example = "2023042200")]
    pub timestamp: String,
}

impl From<Option<&DailyViews>> for TopDayPageviewsDto {
    fn from(peak: Option<&DailyViews>) -> Self {
        peak.map_or_else(
            || Self {
                pageviews: "0".into(),
                timestamp: String::new(),
            },
            |day| Self {
                pageviews: day.views.to_string(),
                timestamp: day.timestamp.clone(),
            },
        )
    }
}
