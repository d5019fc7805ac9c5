use std::{
    sync::{
        atomic::{AtomicU64, Ordering},
        Arc,
    },
    time::Duration,
};

use tokio::sync::watch;
use tracing::debug;

pub const COPY_NOTICE_TTL: Duration = Duration::from_millis(2000);

// a newer raise supersedes older dismissals
#[derive(Debug, Clone)]
pub struct CopyNotice {
    inner: Arc<NoticeInner>,
}

#[derive(Debug)]
struct NoticeInner {
    visible: watch::Sender<bool>,
    generation: AtomicU64,
    ttl: Duration,
}

impl CopyNotice {
    pub fn new() -> Self {
        Self::with_ttl(COPY_NOTICE_TTL)
    }

    pub fn with_ttl(ttl: Duration) -> Self {
        let (visible, _) = watch::channel(false);
        Self {
            inner: Arc::new(NoticeInner {
                visible,
                generation: AtomicU64::new(0),
                ttl,
            }),
        }
    }

    pub fn is_visible(&self) -> bool {
        *self.inner.visible.borrow()
    }

    pub fn subscribe(&self) -> watch::Receiver<bool> {
        self.inner.visible.subscribe()
    }

    // needs a tokio runtime
    pub fn raise(&self) {
        let generation = self.inner.generation.fetch_add(1, Ordering::SeqCst) + 1;
        self.inner.visible.send_replace(true);

        let inner = Arc::clone(&self.inner);
        tokio::spawn(async move {
            tokio::time::sleep(inner.ttl).await;
            if inner.generation.load(Ordering::SeqCst) == generation {
                debug!("dismissing copy notice");
                inner.visible.send_replace(false);
            }
        });
    }
}

impl Default for CopyNotice {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "tests/notice_tests.rs"]
mod tests;
