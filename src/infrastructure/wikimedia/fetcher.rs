use crate::application::{ApplicationResult, error::ApplicationError};
use async_trait::async_trait;
use bytes::Bytes;
use std::time::Duration;

/// Status and body of an HTTP response, whatever the status.
#[derive(Debug, Clone)]
pub struct RawResponse {
    pub status: u16,
    pub body: Bytes,
}

/// Outbound HTTP seam. `Err` means the request never produced a response.
#[async_trait]
pub trait HttpFetcher: Send + Sync {
    async fn get(&self, url: &str) -> ApplicationResult<RawResponse>;
}

pub struct ReqwestFetcher {
    client: reqwest::Client,
}

impl ReqwestFetcher {
    pub fn new(user_agent: &str, timeout: Duration) -> ApplicationResult<Self> {
        let client = reqwest::Client::builder()
            .user_agent(user_agent)
            .timeout(timeout)
            .build()
            .map_err(|err| {
                ApplicationError::infrastructure(format!("failed to build http client: {err}"))
            })?;
        Ok(Self { client })
    }
}

#[async_trait]
impl HttpFetcher for ReqwestFetcher {
    async fn get(&self, url: &str) -> ApplicationResult<RawResponse> {
        let response = self.client.get(url).send().await.map_err(|err| {
            ApplicationError::infrastructure(format!("upstream request failed: {err}"))
        })?;

        let status = response.status().as_u16();
        let body = response.bytes().await.map_err(|err| {
            ApplicationError::infrastructure(format!("failed to read upstream response: {err}"))
        })?;

        Ok(RawResponse { status, body })
    }
}
