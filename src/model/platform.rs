//! Host-side state the coordinator reads and writes: the location hash, the
//! page scroll style, and the notification channel the host uses to report
//! asynchronous changes back to the controller.

use tokio::sync::mpsc::UnboundedSender;

use super::fullscreen::{FullscreenError, FullscreenRequest};
use super::types::Overflow;

pub const HOME_HASH: &str = "#";

/// Notifications delivered by the host after the fact
#[derive(Clone, Debug, PartialEq)]
pub enum PlatformEvent {
    HashChanged(String),
    FullscreenChanged,
    FullscreenRejected {
        request: FullscreenRequest,
        error: FullscreenError,
    },
    DisplayModeChanged(bool),
}

/// `""` and `"#"` both address the landing page.
pub fn is_home_hash(hash: &str) -> bool {
    hash.is_empty() || hash == HOME_HASH
}

/// The fragment identifier of the current document
#[derive(Debug)]
pub struct HashLocation {
    hash: String,
    events: Option<UnboundedSender<PlatformEvent>>,
}

impl HashLocation {
    pub fn new(initial: impl Into<String>, events: Option<UnboundedSender<PlatformEvent>>) -> Self {
        Self {
            hash: normalize_hash(initial.into()),
            events,
        }
    }

    pub fn hash(&self) -> &str {
        &self.hash
    }

    /// Assigning a different value queues a `HashChanged` notification.
    pub fn set_hash(&mut self, hash: &str) {
        let hash = normalize_hash(hash.to_string());
        if hash == self.hash {
            return;
        }
        tracing::debug!(from = %self.hash, to = %hash, "Location hash changed");
        self.hash = hash.clone();
        if let Some(events) = &self.events {
            // A closed channel means the listener is gone during shutdown.
            let _ = events.send(PlatformEvent::HashChanged(hash));
        }
    }
}

fn normalize_hash(hash: String) -> String {
    let hash = hash.trim().to_string();
    if hash.is_empty() || hash.starts_with('#') {
        hash
    } else {
        format!("#{hash}")
    }
}

/// Inline style of the page body that the scroll lock manipulates
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PageStyle {
    pub overflow: Overflow,
    pub scroll_offset: u16,
    /// Rows of landing content below the fold, reported by the last frame.
    pub max_scroll: u16,
}

impl PageStyle {
    pub fn scroll_by(&mut self, delta: i32) {
        if !self.overflow.allows_scrolling() {
            return;
        }
        let next = (i32::from(self.scroll_offset) + delta).clamp(0, i32::from(self.max_scroll));
        self.scroll_offset = next as u16;
    }

    pub fn set_max_scroll(&mut self, max_scroll: u16) {
        self.max_scroll = max_scroll;
        self.scroll_offset = self.scroll_offset.min(max_scroll);
    }
}
