use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::ShortenError;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShortenRequest {
    pub long_url: String,
}

impl ShortenRequest {
    pub fn new(long_url: impl Into<String>) -> Self {
        Self {
            long_url: long_url.into(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ShortenResponse {
    pub short_url: Option<String>,
}

impl ShortenResponse {
    // any well-formed json is accepted, only a non-empty string "shortUrl" is usable
    pub fn from_body(body: &[u8]) -> Result<Self, serde_json::Error> {
        let value: Value = serde_json::from_slice(body)?;
        let short_url = value
            .get("shortUrl")
            .and_then(Value::as_str)
            .filter(|s| !s.is_empty())
            .map(str::to_string);
        Ok(Self { short_url })
    }

    pub fn into_short_url(self) -> Result<String, ShortenError> {
        match self.short_url {
            Some(short_url) if !short_url.is_empty() => Ok(short_url),
            _ => Err(ShortenError::MissingShortUrl),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_uses_camel_case_on_the_wire() {
        let body = serde_json::to_value(ShortenRequest::new("example.com")).unwrap();
        assert_eq!(body, serde_json::json!({ "longUrl": "example.com" }));
    }

    #[test]
    fn absent_short_url_is_not_usable() {
        for body in [r#"{"other":1}"#, r#""ok""#, "42", "[]", "null", r#"{"shortUrl":123}"#] {
            let response = ShortenResponse::from_body(body.as_bytes()).unwrap();
            assert!(
                matches!(response.into_short_url(), Err(ShortenError::MissingShortUrl)),
                "body: {body}"
            );
        }
    }

    #[test]
    fn only_malformed_json_is_a_decode_error() {
        assert!(ShortenResponse::from_body(b"<html>").is_err());
        assert!(ShortenResponse::from_body(b"").is_err());
        let response = ShortenResponse::from_body(br#"{"shortUrl":"https://x.y/abc"}"#).unwrap();
        assert_eq!(response.short_url.as_deref(), Some("https://x.y/abc"));
    }
}
