//! Decoding of the upstream error envelope
//! (`{"type", "title", "method", "detail", "uri"}`).
use serde::Deserialize;

pub const FALLBACK_DETAIL: &str = "Failed to process error details";

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum Detail {
    One(String),
    Many(Vec<String>),
}

#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    #[serde(default)]
    detail: Option<Detail>,
}

/// Human readable detail of an upstream error body.
///
/// A list of details is flattened by appending `". "` after every entry,
/// trailing separator included. Bodies that are not an error envelope, or
/// carry no detail, yield [`FALLBACK_DETAIL`].
pub fn error_detail(body: &[u8]) -> String {
    match serde_json::from_slice::<ErrorEnvelope>(body) {
        Ok(ErrorEnvelope {
            detail: Some(Detail::One(detail)),
        }) => detail,
        Ok(ErrorEnvelope {
            detail: Some(Detail::Many(details)),
        }) => details.iter().fold(String::new(), |mut joined, detail| {
            joined.push_str(detail);
            joined.push_str(". ");
            joined
        }),
        Ok(ErrorEnvelope { detail: None }) => FALLBACK_DETAIL.to_string(),
        Err(err) => {
            tracing::debug!(error = %err, "upstream error body is not an error envelope");
            FALLBACK_DETAIL.to_string()
        }
    }
}
