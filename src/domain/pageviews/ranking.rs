use super::entity::{ArticleViewCount, RankedArticle};

/// Size of every top-articles response.
pub const TOP_N: usize = 10;

/// Orders `counts` by descending views and keeps the first `limit` entries,
/// ranked from 1.
///
/// The sort is stable: articles with equal views keep their relative input
/// order, so feeding a [`ViewTally`](super::ViewTally) breaks ties by the
/// order in which articles were first seen.
pub fn rank_top(mut counts: Vec<ArticleViewCount>, limit: usize) -> Vec<RankedArticle> {
    counts.sort_by(|a, b| b.views.cmp(&a.views));
    counts
        .into_iter()
        .take(limit)
        .zip(1u32..)
        .map(|(count, rank)| RankedArticle {
            article: count.article,
            views: count.views,
            rank,
        })
        .collect()
}
