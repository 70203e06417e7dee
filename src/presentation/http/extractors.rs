// src/presentation/http/extractors.rs
//! Path parameter extractors. Period segments must be plain ASCII digits;
//! anything else is rejected with a 400 before a query runs.
use super::error::HttpError;
use crate::application::error::ApplicationError;
use axum::{
    extract::{FromRequestParts, Path},
    http::request::Parts,
};
use std::{collections::HashMap, str::FromStr};

type PathParams = HashMap<String, String>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeekPath {
    pub year: i32,
    pub week: u32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthPath {
    pub year: i32,
    pub month: u32,
}

/// Article title segment, already percent-decoded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArticlePath(pub String);

fn rejected(message: impl Into<String>) -> HttpError {
    HttpError::from_error(ApplicationError::validation(message))
}

async fn path_params<S>(parts: &mut Parts, state: &S) -> Result<PathParams, HttpError>
where
    S: Send + Sync,
{
    Path::<PathParams>::from_request_parts(parts, state)
        .await
        .map(|Path(params)| params)
        .map_err(|rejection| rejected(rejection.body_text()))
}

fn required<'a>(params: &'a PathParams, name: &str) -> Result<&'a str, HttpError> {
    params
        .get(name)
        .map(String::as_str)
        .ok_or_else(|| rejected(format!("missing path parameter {name}")))
}

fn numeric<T: FromStr>(params: &PathParams, name: &str) -> Result<T, HttpError> {
    let raw = required(params, name)?;
    if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return Err(rejected(format!("input {name} must be numeric")));
    }
    raw.parse::<T>()
        .map_err(|_| rejected(format!("input {name} is out of range")))
}

impl<S> FromRequestParts<S> for WeekPath
where
    S: Send + Sync,
{
    type Rejection = HttpError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let params = path_params(parts, state).await?;
        Ok(Self {
            year: numeric(&params, "year")?,
            week: numeric(&params, "week")?,
        })
    }
}

impl<S> FromRequestParts<S> for MonthPath
where
    S: Send + Sync,
{
    type Rejection = HttpError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let params = path_params(parts, state).await?;
        Ok(Self {
            year: numeric(&params, "year")?,
            month: numeric(&params, "month")?,
        })
    }
}

impl<S> FromRequestParts<S> for ArticlePath
where
    S: Send + Sync,
{
    type Rejection = HttpError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let params = path_params(parts, state).await?;
        required(&params, "article").map(|article| Self(article.to_string()))
    }
}
