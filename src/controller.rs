use std::sync::Arc;

use tokio::sync::watch;
use tracing::{debug, error, info, instrument, warn};

use crate::{
    api::{HttpShortener, Shortener},
    clipboard::{Clipboard, SystemClipboard},
    config::Config,
    error::{ClipboardError, ShortenError},
    notice::CopyNotice,
    state::InteractionState,
    types::{ShortenRequest, ShortenResponse},
    utils::is_blank,
};

// a submit issued while `Submitting` is ignored
pub struct ShorteningController {
    shortener: Arc<dyn Shortener>,
    clipboard: Arc<dyn Clipboard>,
    state: watch::Sender<InteractionState>,
    notice: CopyNotice,
}

impl ShorteningController {
    pub fn new(shortener: Arc<dyn Shortener>, clipboard: Arc<dyn Clipboard>) -> Self {
        let (state, _) = watch::channel(InteractionState::Idle);
        Self {
            shortener,
            clipboard,
            state,
            notice: CopyNotice::new(),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(
            Arc::new(HttpShortener::new(config.endpoint.clone())),
            Arc::new(SystemClipboard),
        )
    }

    pub fn state(&self) -> InteractionState {
        self.state.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<InteractionState> {
        self.state.subscribe()
    }

    pub fn notice(&self) -> &CopyNotice {
        &self.notice
    }

    pub fn subscribe_notice(&self) -> watch::Receiver<bool> {
        self.notice.subscribe()
    }

    #[instrument(skip(self, raw_input))]
    pub async fn submit(&self, raw_input: &str) -> InteractionState {
        let blank = is_blank(raw_input);
        let mut busy = false;
        self.state.send_if_modified(|state| {
            if state.is_submitting() {
                busy = true;
                return false;
            }
            *state = if blank {
                InteractionState::Failure(ShortenError::EmptyInput.user_message())
            } else {
                InteractionState::Submitting
            };
            true
        });

        if busy {
            warn!("Submit ignored while a request is in flight");
            return InteractionState::Submitting;
        }
        if blank {
            debug!("Rejected blank input");
            return self.state();
        }

        let guard = SubmitGuard::new(&self.state);
        let request = ShortenRequest::new(raw_input);
        info!(long_url = %request.long_url, "Submitting URL");

        let outcome = match self
            .shortener
            .shorten(&request)
            .await
            .and_then(ShortenResponse::into_short_url)
        {
            Ok(short_url) => {
                info!(short_url = %short_url, "Shortened URL");
                InteractionState::Success(short_url)
            }
            Err(e) => {
                error!(error = %e, "Failed to shorten URL");
                InteractionState::Failure(e.user_message())
            }
        };

        guard.complete(outcome.clone());
        outcome
    }

    pub fn copy(&self) -> Result<bool, ClipboardError> {
        let current = self.state();
        self.copy_short_url(current.short_url())
    }

    // Ok(false) when there is nothing to copy
    pub fn copy_short_url(&self, short_url: Option<&str>) -> Result<bool, ClipboardError> {
        let Some(short_url) = short_url.filter(|s| !s.is_empty()) else {
            debug!("Nothing to copy");
            return Ok(false);
        };

        if let Err(e) = self.clipboard.write_text(short_url) {
            error!(error = %e, "Failed to copy short URL");
            return Err(e);
        }

        info!(short_url = %short_url, "Copied short URL");
        self.notice.raise();
        Ok(true)
    }
}

// dropping an unfinished submit falls back to Idle
struct SubmitGuard<'a> {
    state: &'a watch::Sender<InteractionState>,
    completed: bool,
}

impl<'a> SubmitGuard<'a> {
    fn new(state: &'a watch::Sender<InteractionState>) -> Self {
        Self {
            state,
            completed: false,
        }
    }

    fn complete(mut self, outcome: InteractionState) {
        self.state.send_replace(outcome);
        self.completed = true;
    }
}

impl Drop for SubmitGuard<'_> {
    fn drop(&mut self) {
        if self.completed {
            return;
        }
        let reset = self.state.send_if_modified(|state| {
            if state.is_submitting() {
                *state = InteractionState::Idle;
                true
            } else {
                false
            }
        });
        if reset {
            warn!("Submit abandoned before completion");
        }
    }
}

#[cfg(test)]
#[path = "tests/controller_tests.rs"]
mod tests;
