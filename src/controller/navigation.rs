//! Overlay, landing action, location bar and social link commands

use crate::model::{ActionOutcome, OverlayTarget, PlatformEvent, SOCIAL_LINKS};
use super::AppController;

impl AppController {
    /// Follow one of the two landing actions: open its overlay, or its
    /// outbound link where overlays are not used.
    pub async fn follow_main_action(&self, target: OverlayTarget) {
        let outcome = self.model.lock().await.follow_main_action(target);
        if let ActionOutcome::External(url) = outcome {
            self.open_external(url).await;
        }
    }

    /// Open an overlay directly rather than through a landing action.
    pub async fn open_overlay(&self, target: OverlayTarget) {
        self.model.lock().await.activate_overlay(target);
    }

    pub async fn go_home(&self) {
        self.model.lock().await.go_home();
    }

    /// Follow a link inside the page, e.g. "Back to Home" on the static
    /// releases page.
    pub async fn navigate(&self, hash: &str) {
        self.model.lock().await.navigate(hash);
    }

    /// `index` counts from zero in header order.
    pub async fn open_social_link(&self, index: usize) {
        let Some(link) = SOCIAL_LINKS.get(index) else {
            return;
        };
        tracing::debug!(name = link.name, "Opening social link");
        self.open_external(link.href).await;
    }

    pub async fn toggle_display_fullscreen(&self) {
        let fullscreen = self.model.lock().await.is_display_fullscreen();
        self.notify(PlatformEvent::DisplayModeChanged(!fullscreen));
    }
}
