use super::entity::ArticleViewCount;
use std::collections::HashMap;

/// Running per-article view totals that remembers the order in which
/// articles were first seen. The ranker relies on that order to break ties.
#[derive(Debug, Default, Clone)]
pub struct ViewTally {
    entries: Vec<ArticleViewCount>,
    index: HashMap<String, usize>,
}

impl ViewTally {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, article: &str, views: u64) {
        if let Some(&position) = self.index.get(article) {
            let entry = &mut self.entries[position];
            entry.views = entry.views.saturating_add(views);
        } else {
            self.index.insert(article.to_owned(), self.entries.len());
            self.entries.push(ArticleViewCount::new(article, views));
        }
    }

    /// Folds one period's counts (typically a single day) into the totals.
    pub fn merge<I>(&mut self, counts: I)
    where
        I: IntoIterator<Item = ArticleViewCount>,
    {
        for count in counts {
            self.add(&count.article, count.views);
        }
    }

    /// Totals in first-seen order.
    pub fn into_counts(self) -> Vec<ArticleViewCount> {
        self.entries
    }
}

impl FromIterator<ArticleViewCount> for ViewTally {
    fn from_iter<T: IntoIterator<Item = ArticleViewCount>>(iter: T) -> Self {
        let mut tally = Self::new();
        tally.merge(iter);
        tally
    }
}
