use thiserror::Error;

pub const FALLBACK_MESSAGE: &str = "Unexpected error occurred";

#[derive(Debug, Error)]
pub enum ShortenError {
    #[error("Please enter a valid URL")]
    EmptyInput,
    #[error("Failed to shorten URL")]
    MissingShortUrl,
    #[error("{0}")]
    Transport(#[from] reqwest::Error),
    #[error("{0}")]
    Decode(#[from] serde_json::Error),
}

impl ShortenError {
    pub fn user_message(&self) -> String {
        let message = self.to_string();
        if message.trim().is_empty() {
            FALLBACK_MESSAGE.to_string()
        } else {
            message
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid shortening endpoint '{value}': {reason}")]
    InvalidEndpoint { value: String, reason: String },
}

#[derive(Debug, Error)]
pub enum ClipboardError {
    #[error("clipboard unavailable: {0}")]
    Unavailable(String),
    #[error("clipboard write failed: {0}")]
    Write(String),
}
