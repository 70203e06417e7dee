// src/presentation/http/openapi.rs
use crate::application::dto::{PageviewsDto, RankedArticleDto, TopDayPageviewsDto};
use crate::presentation::http::error::ErrorResponse;
use axum::{Router, response::Redirect, routing::get};
use serde::{Deserialize, Serialize};
use std::{env, fs::File, io::BufWriter, path::Path};
use utoipa::{OpenApi, ToSchema};
use utoipa_redoc::{Redoc, Servable};
use utoipa_swagger_ui::SwaggerUi;

pub const DEFAULT_SNAPSHOT_PATH: &str = "spec/openapi.json";

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct StatusResponse {
    pub status: String,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::presentation::http::controllers::top_articles::weekly_top_articles,
        crate::presentation::http::controllers::top_articles::monthly_top_articles,
        crate::presentation::http::controllers::article_views::weekly_pageviews,
        crate::presentation::http::controllers::article_views::monthly_pageviews,
        crate::presentation::http::controllers::article_views::top_day_of_month,
        crate::presentation::http::routes::health
    ),
    components(
        schemas(
            StatusResponse,
            ErrorResponse,
            RankedArticleDto,
            PageviewsDto,
            TopDayPageviewsDto
        )
    ),
    tags(
        (name = "Articles", description = "Most viewed articles per week or month"),
        (name = "Pageviews", description = "Pageview totals of a single article"),
        (name = "System", description = "System level endpoints")
    ),
    info(
        title = "Pageview Stats API",
        description = "Aggregated Wikipedia pageview statistics",
        version = "0.1.0"
    )
)]
pub struct ApiDoc;

/// Swagger UI at `/docs` (serving `/openapi.json`), ReDoc at `/redoc`.
pub fn docs_router() -> Router {
    let openapi = ApiDoc::openapi();
    let swagger = SwaggerUi::new("/docs").url("/openapi.json", openapi.clone());
    let redoc = Redoc::with_url("/redoc", openapi);
    Router::new()
        .merge(swagger)
        .merge(redoc)
        .route("/", get(|| async { Redirect::permanent("/docs") }))
}

/// Writes the pretty-printed document to `OPENAPI_SNAPSHOT_PATH`
/// (default [`DEFAULT_SNAPSHOT_PATH`]) and returns the path used.
pub fn write_openapi_snapshot() -> std::io::Result<String> {
    let spec = ApiDoc::openapi();
    let output_path =
        env::var("OPENAPI_SNAPSHOT_PATH").unwrap_or_else(|_| DEFAULT_SNAPSHOT_PATH.to_string());
    let path = Path::new(&output_path);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let file = File::create(path)?;
    let writer = BufWriter::new(file);
    serde_json::to_writer_pretty(writer, &spec)?;
    Ok(output_path)
}
