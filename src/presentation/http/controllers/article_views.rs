// src/presentation/http/controllers/article_views.rs
use crate::application::{
    dto::{PageviewsDto, TopDayPageviewsDto},
    queries::article_views::{
        MonthlyArticleViewsQuery, TopDayOfMonthQuery, WeeklyArticleViewsQuery,
    },
};
use crate::presentation::http::error::{ErrorResponse, HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::{ArticlePath, MonthPath, WeekPath};
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json};

#[utoipa::path(
    get,
    path = "/article/{article}/weekly/{year}/{week}",
    params(
        ("article" = String, Path, description = "Article title, e.g. Albert_Einstein"),
        ("year" = u32, Path, description = "Calendar year, not after the current one"),
        ("week" = u32, Path, description = "ISO-8601 week number")
    ),
    responses(
        (status = 200, description = "Total views of the article over the week.", body = PageviewsDto),
        (status = 400, description = "Invalid input.", body = ErrorResponse),
        (status = 404, description = "Unknown article or no data.", body = ErrorResponse)
    ),
    tag = "Pageviews"
)]
pub async fn weekly_pageviews(
    Extension(state): Extension<HttpState>,
    ArticlePath(article): ArticlePath,
    WeekPath { year, week }: WeekPath,
) -> HttpResult<Json<PageviewsDto>> {
    state
        .services
        .article_views
        .weekly_pageviews(WeeklyArticleViewsQuery {
            article,
            year,
            week,
        })
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/article/{article}/monthly/{year}/{month}",
    params(
        ("article" = String, Path, description = "Article title, e.g. Albert_Einstein"),
        ("year" = u32, Path, description = "Calendar year, not after the current one"),
        ("month" = u32, Path, description = "Month number, 1 to 12")
    ),
    responses(
        (status = 200, description = "Total views of the article over the month.", body = PageviewsDto),
        (status = 400, description = "Invalid input.", body = ErrorResponse),
        (status = 404, description = "Unknown article or no data.", body = ErrorResponse)
    ),
    tag = "Pageviews"
)]
pub async fn monthly_pageviews(
    Extension(state): Extension<HttpState>,
    ArticlePath(article): ArticlePath,
    MonthPath { year, month }: MonthPath,
) -> HttpResult<Json<PageviewsDto>> {
    state
        .services
        .article_views
        .monthly_pageviews(MonthlyArticleViewsQuery {
            article,
            year,
            month,
        })
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/article/{article}/top/monthly/{year}/{month}",
    params(
        ("article" = String, Path, description = "Article title, e.g. Albert_Einstein"),
        ("year" = u32, Path, description = "Calendar year, not after the current one"),
        ("month" = u32, Path, description = "Month number, 1 to 12")
    ),
    responses(
        (status = 200, description = "Day of the month with the most views.", body = TopDayPageviewsDto),
        (status = 400, description = "Invalid input.", body = ErrorResponse),
        (status = 404, description = "Unknown article or no data.", body = ErrorResponse)
    ),
    tag = "Pageviews"
)]
pub async fn top_day_of_month(
    Extension(state): Extension<HttpState>,
    ArticlePath(article): ArticlePath,
    MonthPath { year, month }: MonthPath,
) -> HttpResult<Json<TopDayPageviewsDto>> {
    state
        .services
        .article_views
        .top_day_of_month(TopDayOfMonthQuery {
            article,
            year,
            month,
        })
        .await
        .into_http()
        .map(Json)
}
