// tests/support/mocks/fetcher.rs
use async_trait::async_trait;
use bytes::Bytes;
use pageview_stats::application::{ApplicationResult, error::ApplicationError};
use pageview_stats::infrastructure::wikimedia::{HttpFetcher, RawResponse};
use std::collections::HashMap;
use std::sync::Mutex;

const NOT_FOUND_BODY: &str = r#"{"type":"https://mediawiki.org/wiki/HyperSwitch/errors/not_found","title":"Not found.","method":"get","detail":"The date(s) you used are valid, but we either do not have data for those date(s), or the project you asked for is not loaded yet."}"#;

/// Canned HTTP responses keyed by full URL. Unknown URLs answer with the
/// upstream's 404 envelope.
#[derive(Default)]
pub struct StubFetcher {
    responses: HashMap<String, RawResponse>,
    unreachable: bool,
    requested: Mutex<Vec<String>>,
}

impl StubFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn respond(mut self, url: &str, status: u16, body: &str) -> Self {
        self.responses.insert(
            url.to_string(),
            RawResponse {
                status,
                body: Bytes::from(body.to_string()),
            },
        );
        self
    }

    pub fn unreachable(mut self) -> Self {
        self.unreachable = true;
        self
    }

    pub fn requested(&self) -> Vec<String> {
        self.requested.lock().unwrap().clone()
    }
}

#[async_trait]
impl HttpFetcher for StubFetcher {
    async fn get(&self, url: &str) -> ApplicationResult<RawResponse> {
        self.requested.lock().unwrap().push(url.to_string());
        if self.unreachable {
            return Err(ApplicationError::infrastructure(
                "upstream request failed: connection refused",
            ));
        }
        Ok(self.responses.get(url).cloned().unwrap_or(RawResponse {
            status: 404,
            body: Bytes::from_static(NOT_FOUND_BODY.as_bytes()),
        }))
    }
}
