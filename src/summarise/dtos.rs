use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::ToSchema;

pub const INVALID_URL: &str = "Invalid URL";
pub const SUMMARISE_FAILED: &str = "Failed to summarise blog.";

#[derive(Debug, Deserialize, ToSchema)]
pub struct SummariseRequest {
    /// Absolute http(s) URL of the page to summarise.
    pub url: String,
}

impl SummariseRequest {
    /// Pull a usable request out of an arbitrary JSON body. Only a non-empty
    /// string `url` qualifies; anything else is treated as a bad URL.
    pub fn from_json(body: &Value) -> Option<Self> {
        match body.get("url") {
            Some(Value::String(url)) if !url.is_empty() => Some(Self { url: url.clone() }),
            _ => None,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}
