use std::fmt;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum InteractionState {
    #[default]
    Idle,
    Submitting,
    Success(String),
    Failure(String),
}

impl InteractionState {
    pub fn is_submitting(&self) -> bool {
        matches!(self, Self::Submitting)
    }

    pub fn short_url(&self) -> Option<&str> {
        match self {
            Self::Success(short_url) => Some(short_url),
            _ => None,
        }
    }

    pub fn failure(&self) -> Option<&str> {
        match self {
            Self::Failure(message) => Some(message),
            _ => None,
        }
    }
}

impl fmt::Display for InteractionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Idle => f.write_str("idle"),
            Self::Submitting => f.write_str("submitting"),
            Self::Success(short_url) => write!(f, "success: {short_url}"),
            Self::Failure(message) => write!(f, "failure: {message}"),
        }
    }
}
