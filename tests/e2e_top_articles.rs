use axum::http::StatusCode;
use pageview_stats::domain::pageviews::ArticleViewCount;
use serde_json::json;
use std::sync::Arc;
mod support;
use support::{StubPageviewsSource, assert_error, date, get_json, make_test_router};

/// 2023-W03 runs from Monday 2023-01-16 to Sunday 2023-01-22.
fn week_three_source() -> StubPageviewsSource {
    (0..7u64).fold(StubPageviewsSource::new(), |source, offset| {
        let day = date(2023, 1, 16 + u32::try_from(offset).unwrap());
        let mut articles = vec![
            ArticleViewCount::new("Main_Page", 4_000_000 + offset),
            ArticleViewCount::new("Special:Search", 900_000),
        ];
        articles.extend(
            (0..12u64).map(|i| ArticleViewCount::new(format!("Day{offset}_Article{i}"), 10_000 - i * 100 + offset)),
        );
        source.with_day(day, articles)
    })
}

#[tokio::test]
async fn weekly_top_sums_the_seven_days() {
    let source = Arc::new(week_three_source());
    let (status, body) = get_json(make_test_router(source.clone()), "/articles/top/weekly/2023/3").await;

    assert_eq!(status, StatusCode::OK);
    let ranking = body.as_array().unwrap();
    assert_eq!(ranking.len(), 10);
    assert_eq!(
        ranking[0],
        json!({ "Article": "Main_Page", "Views": 28_000_021u64, "Rank": 1 })
    );
    assert_eq!(
        ranking[1],
        json!({ "Article": "Special:Search", "Views": 6_300_000u64, "Rank": 2 })
    );
    assert_eq!(ranking[2]["Article"], "Day6_Article0");
    assert_eq!(ranking[8]["Article"], "Day0_Article0");
    assert_eq!(ranking[9], json!({ "Article": "Day6_Article1", "Views": 9_906, "Rank": 10 }));
    for (index, entry) in ranking.iter().enumerate() {
        assert_eq!(entry["Rank"], index + 1);
    }

    assert_eq!(
        source.calls(),
        vec![
            "day 2023-01-16",
            "day 2023-01-17",
            "day 2023-01-18",
            "day 2023-01-19",
            "day 2023-01-20",
            "day 2023-01-21",
            "day 2023-01-22",
        ]
    );
}

#[tokio::test]
async fn weekly_top_aborts_on_first_failing_day() {
    let source = Arc::new(
        week_three_source().failing_day(date(2023, 1, 18), 404, "no data for 2023-01-18"),
    );
    let (status, body) = get_json(make_test_router(source.clone()), "/articles/top/weekly/2023/3").await;

    assert_error(status, &body, StatusCode::NOT_FOUND, "404 Not Found: no data for 2023-01-18");
    assert_eq!(source.calls().len(), 3);
}

#[tokio::test]
async fn weekly_top_week_can_span_two_years() {
    // 2020-W01 starts on Monday 2019-12-30.
    let source = Arc::new(StubPageviewsSource::new());
    let (status, body) = get_json(make_test_router(source.clone()), "/articles/top/weekly/2020/1").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([]));
    let calls = source.calls();
    assert_eq!(calls.first().map(String::as_str), Some("day 2019-12-30"));
    assert_eq!(calls.last().map(String::as_str), Some("day 2020-01-05"));
}

#[tokio::test]
async fn equal_totals_keep_first_seen_order() {
    let articles = vec![
        ArticleViewCount::new("Beta", 100),
        ArticleViewCount::new("Alpha", 100),
    ];
    let source = Arc::new(StubPageviewsSource::new().with_monthly_top(articles));
    let (status, body) = get_json(make_test_router(source), "/articles/top/monthly/2023/5").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!([
            { "Article": "Beta", "Views": 100, "Rank": 1 },
            { "Article": "Alpha", "Views": 100, "Rank": 2 }
        ])
    );
}

#[tokio::test]
async fn monthly_top_reranks_the_upstream_list() {
    let articles = vec![
        ArticleViewCount::new("a", 711),
        ArticleViewCount::new("b", 2138),
        ArticleViewCount::new("c", 1908),
        ArticleViewCount::new("d", 912),
    ];
    let source = Arc::new(StubPageviewsSource::new().with_monthly_top(articles));
    let (status, body) = get_json(make_test_router(source.clone()), "/articles/top/monthly/2023/12").await;

    assert_eq!(status, StatusCode::OK);
    let names: Vec<_> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|entry| entry["Article"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(names, vec!["b", "c", "d", "a"]);
    assert_eq!(source.calls(), vec!["month 2023-12"]);
}

#[tokio::test]
async fn future_year_is_rejected_before_any_upstream_call() {
    let source = Arc::new(StubPageviewsSource::new());
    let (status, body) = get_json(make_test_router(source.clone()), "/articles/top/weekly/2025/1").await;

    assert_error(
        status,
        &body,
        StatusCode::BAD_REQUEST,
        "400 Bad Request: input year cannot be greater than current year",
    );
    assert!(source.calls().is_empty());
}

#[tokio::test]
async fn week_beyond_last_iso_week_is_rejected() {
    let source = Arc::new(StubPageviewsSource::new());

    let (status, body) = get_json(make_test_router(source.clone()), "/articles/top/weekly/2020/54").await;
    assert_error(
        status,
        &body,
        StatusCode::BAD_REQUEST,
        "400 Bad Request: input week cannot be greater than 53",
    );

    let (status, body) = get_json(make_test_router(source.clone()), "/articles/top/weekly/2023/53").await;
    assert_error(
        status,
        &body,
        StatusCode::BAD_REQUEST,
        "400 Bad Request: input week cannot be greater than 52",
    );

    let (status, body) = get_json(make_test_router(source.clone()), "/articles/top/weekly/2023/0").await;
    assert_error(
        status,
        &body,
        StatusCode::BAD_REQUEST,
        "400 Bad Request: input week must be at least 1",
    );

    assert!(source.calls().is_empty());
}

#[tokio::test]
async fn invalid_month_is_rejected() {
    let source = Arc::new(StubPageviewsSource::new());
    let (status, body) = get_json(make_test_router(source.clone()), "/articles/top/monthly/2023/13").await;

    assert_error(
        status,
        &body,
        StatusCode::BAD_REQUEST,
        "400 Bad Request: input month must be between 1 and 12",
    );
    assert!(source.calls().is_empty());
}

#[tokio::test]
async fn unreachable_upstream_is_an_internal_error() {
    let source = Arc::new(StubPageviewsSource::new().unreachable());
    let (status, body) = get_json(make_test_router(source.clone()), "/articles/top/weekly/2023/3").await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(
        body["Error"]
            .as_str()
            .unwrap()
            .starts_with("500 Internal Server Error: ")
    );
    assert_eq!(source.calls().len(), 1);
}
