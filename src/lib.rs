//! Client for a remote URL shortening service: a controller that owns the
//! submit/copy interaction state and talks to the service over HTTP.

pub mod api;
pub mod clipboard;
pub mod config;
pub mod controller;
pub mod error;
pub mod logging;
pub mod notice;
pub mod state;
pub mod types;
pub mod utils;

pub use api::{HttpShortener, Shortener};
pub use clipboard::{Clipboard, SystemClipboard};
pub use config::Config;
pub use controller::ShorteningController;
pub use error::{ClipboardError, ConfigError, ShortenError};
pub use notice::{CopyNotice, COPY_NOTICE_TTL};
pub use state::InteractionState;
pub use types::{ShortenRequest, ShortenResponse};
