use crate::domain::{
    calendar::DateRange,
    pageviews::{ArticleTitle, Granularity},
};
use chrono::NaiveDate;

const ACCESS: &str = "all-access";
const AGENT: &str = "all-agents";

#[derive(Debug, Clone, Copy)]
enum Subject {
    TopArticles,
    PerArticle,
}

/// Description of one upstream request, turned into URL path segments.
#[derive(Debug, Clone, Copy)]
pub struct UpstreamQuery<'a> {
    subject: Subject,
    article: Option<&'a ArticleTitle>,
    granularity: Granularity,
    range: DateRange,
}

impl<'a> UpstreamQuery<'a> {
    pub fn top_articles_daily(day: NaiveDate) -> Self {
        Self {
            subject: Subject::TopArticles,
            article: None,
            granularity: Granularity::Daily,
            range: DateRange::single_day(day),
        }
    }

    /// Top articles over all days of the month containing `range.start()`.
    pub const fn top_articles_monthly(range: DateRange) -> Self {
        Self {
            subject: Subject::TopArticles,
            article: None,
            granularity: Granularity::Monthly,
            range,
        }
    }

    pub const fn per_article(
        article: &'a ArticleTitle,
        granularity: Granularity,
        range: DateRange,
    ) -> Self {
        Self {
            subject: Subject::PerArticle,
            article: Some(article),
            granularity,
            range,
        }
    }

    /// Path segments below the API base, unencoded.
    pub fn path_segments(&self, project: &str) -> Vec<String> {
        let start = self.range.start();
        match (self.subject, self.article) {
            (Subject::PerArticle, Some(article)) => vec![
                "per-article".into(),
                project.into(),
                ACCESS.into(),
                AGENT.into(),
                article.as_str().into(),
                self.granularity.as_str().into(),
                timestamp(start),
                timestamp(self.range.end()),
            ],
            _ => {
                let mut segments = vec![
                    "top".into(),
                    project.into(),
                    ACCESS.into(),
                    start.format("%Y").to_string(),
                    start.format("%m").to_string(),
                ];
                segments.push(match self.granularity {
                    Granularity::Daily => start.format("%d").to_string(),
                    Granularity::Monthly => "all-days".into(),
                });
                segments
            }
        }
    }
}

/// `YYYYMMDDHH` with the hour always `00`.
pub fn timestamp(day: NaiveDate) -> String {
    format!("{}00", day.format("%Y%m%d"))
}
