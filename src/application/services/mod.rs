// src/application/services/mod.rs
use std::sync::Arc;

use crate::application::{
    ports::{pageviews::PageviewsSource, time::Clock},
    queries::{article_views::ArticleViewsQueryService, top_articles::TopArticlesQueryService},
};

pub struct ApplicationServices {
    pub top_articles: Arc<TopArticlesQueryService>,
    pub article_views: Arc<ArticleViewsQueryService>,
}

impl ApplicationServices {
    pub fn new(source: Arc<dyn PageviewsSource>, clock: Arc<dyn Clock>) -> Self {
        let top_articles = Arc::new(TopArticlesQueryService::new(
            Arc::clone(&source),
            Arc::clone(&clock),
        ));
        let article_views = Arc::new(ArticleViewsQueryService::new(source, clock));

        Self {
            top_articles,
            article_views,
        }
    }
}
