// src/presentation/http/controllers/top_articles.rs
use crate::application::{
    dto::RankedArticleDto,
    queries::top_articles::{MonthlyTopArticlesQuery, WeeklyTopArticlesQuery},
};
use crate::presentation::http::error::{ErrorResponse, HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::{MonthPath, WeekPath};
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json};

#[utoipa::path(
    get,
    path = "/articles/top/weekly/{year}/{week}",
    params(
        ("year" = u32, Path, description = "Calendar year, not after the current one"),
        ("week" = u32, Path, description = "ISO-8601 week number")
    ),
    responses(
        (status = 200, description = "Up to ten most viewed articles of the week.", body = [RankedArticleDto]),
        (status = 400, description = "Invalid year or week.", body = ErrorResponse),
        (status = 404, description = "Upstream has no data for one of the days.", body = ErrorResponse),
        (status = 500, description = "Upstream unreachable or malformed.", body = ErrorResponse)
    ),
    tag = "Articles"
)]
pub async fn weekly_top_articles(
    Extension(state): Extension<HttpState>,
    WeekPath { year, week }: WeekPath,
) -> HttpResult<Json<Vec<RankedArticleDto>>> {
    state
        .services
        .top_articles
        .weekly_top_articles(WeeklyTopArticlesQuery { year, week })
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/articles/top/monthly/{year}/{month}",
    params(
        ("year" = u32, Path, description = "Calendar year, not after the current one"),
        ("month" = u32, Path, description = "Month number, 1 to 12")
    ),
    responses(
        (status = 200, description = "Up to ten most viewed articles of the month.", body = [RankedArticleDto]),
        (status = 400, description = "Invalid year or month.", body = ErrorResponse),
        (status = 404, description = "Upstream has no data for the month.", body = ErrorResponse),
        (status = 500, description = "Upstream unreachable or malformed.", body = ErrorResponse)
    ),
    tag = "Articles"
)]
pub async fn monthly_top_articles(
    Extension(state): Extension<HttpState>,
    MonthPath { year, month }: MonthPath,
) -> HttpResult<Json<Vec<RankedArticleDto>>> {
    state
        .services
        .top_articles
        .monthly_top_articles(MonthlyTopArticlesQuery { year, month })
        .await
        .into_http()
        .map(Json)
}
