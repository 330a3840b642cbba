//! Controller module - Application logic and event handling
//!
//! This module contains the application controller that handles user input,
//! coordinates between the model and the host, and opens outbound links.
//! It is organized into submodules by responsibility:
//!
//! - `input`: Key event handling
//! - `navigation`: Overlays, landing actions, location bar and social links
//! - `releases`: Release browser commands and storefront/media links
//! - `pointer`: Mouse-as-touch gestures, page scrolling and resizes
//! - `platform_events`: Listener for host notifications

mod input;
mod navigation;
mod releases;
mod pointer;
mod platform_events;

use std::sync::Arc;
use tokio::sync::mpsc::UnboundedSender;
use tokio::sync::Mutex;

use crate::config::AppConfig;
use crate::links::LinkOpener;
use crate::model::{AppModel, PlatformEvent};

#[derive(Clone)]
pub struct AppController {
    pub(crate) model: Arc<Mutex<AppModel>>,
    opener: Arc<dyn LinkOpener>,
    config: Arc<AppConfig>,
    events: UnboundedSender<PlatformEvent>,
}

impl AppController {
    pub fn new(
        model: Arc<Mutex<AppModel>>,
        opener: Arc<dyn LinkOpener>,
        config: Arc<AppConfig>,
        events: UnboundedSender<PlatformEvent>,
    ) -> Self {
        Self {
            model,
            opener,
            config,
            events,
        }
    }

    /// Open a link in a new browsing context. Failures end up in the status
    /// line instead of propagating.
    pub(crate) async fn open_external(&self, url: &str) {
        if let Err(e) = self.opener.open(url) {
            tracing::warn!(url, error = ?e, "Failed to open external link");
            self.model
                .lock()
                .await
                .set_notice(Self::format_error(&e));
        }
    }

    /// Queue a host notification as if the platform had sent it.
    pub(crate) fn notify(&self, event: PlatformEvent) {
        if self.events.send(event).is_err() {
            tracing::debug!("Platform event channel closed");
        }
    }

    pub(crate) fn format_error(error: &anyhow::Error) -> String {
        // Alternate form includes the launcher's own cause.
        let error_str = format!("{error:#}");

        if error_str.contains("non-web URL") {
            "That link can only be followed inside the page.".to_string()
        } else if error_str.contains("No such file") || error_str.contains("not found") {
            "No browser available to open links.".to_string()
        } else {
            format!("Error: {}", error_str)
        }
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::links::tests::RecordingOpener;
    use crate::model::{Catalog, HashLocation, TerminalFullscreen, ViewportClassifier};
    use tokio::sync::mpsc::{unbounded_channel, UnboundedReceiver};

    pub(crate) struct Harness {
        pub controller: AppController,
        pub opener: Arc<RecordingOpener>,
        pub events: UnboundedReceiver<PlatformEvent>,
    }

    impl Harness {
        /// Deliver every queued host notification, as the listener would.
        pub async fn pump(&mut self) {
            while let Ok(event) = self.events.try_recv() {
                self.controller.handle_platform_event(event).await;
            }
        }
    }

    /// Controller over the embedded catalog with a terminal of the given
    /// size, wired to a recording link opener.
    pub(crate) fn harness(cols: u16, rows: u16) -> Harness {
        let config = Arc::new(AppConfig::default());
        let (tx, rx) = unbounded_channel();
        let width = config.window_width_px(cols, 0);
        let model = AppModel::new(
            Arc::new(Catalog::embedded().unwrap()),
            config.base_path.clone(),
            ViewportClassifier::new(width, false),
            HashLocation::new("#", Some(tx.clone())),
            Box::new(TerminalFullscreen::new((cols, rows), Some(tx.clone()))),
        );
        let opener = Arc::new(RecordingOpener::default());
        let controller = AppController::new(
            Arc::new(Mutex::new(model)),
            opener.clone(),
            config,
            tx,
        );
        Harness {
            controller,
            opener,
            events: rx,
        }
    }

    #[test]
    fn format_error_explains_in_page_links() {
        let err = anyhow::anyhow!("refusing to open non-web URL `#x`");
        assert_eq!(
            AppController::format_error(&err),
            "That link can only be followed inside the page."
        );
        let err = anyhow::anyhow!("boom");
        assert_eq!(AppController::format_error(&err), "Error: boom");
    }
}
