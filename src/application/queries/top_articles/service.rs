use std::sync::Arc;

use crate::application::ports::{pageviews::PageviewsSource, time::Clock};

pub struct TopArticlesQueryService {
    pub(super) source: Arc<dyn PageviewsSource>,
    pub(super) clock: Arc<dyn Clock>,
}

impl TopArticlesQueryService {
    pub fn new(source: Arc<dyn PageviewsSource>, clock: Arc<dyn Clock>) -> Self {
        Self { source, clock }
    }
}
