//! Listener for notifications the host delivers after the fact

use tokio::sync::mpsc::UnboundedReceiver;

use crate::model::PlatformEvent;
use super::AppController;

impl AppController {
    pub fn start_platform_event_listener(&self, mut events: UnboundedReceiver<PlatformEvent>) {
        let controller = self.clone();
        tracing::info!("Starting platform event listener");

        tokio::spawn(async move {
            while let Some(event) = events.recv().await {
                if controller.model.lock().await.should_quit() {
                    tracing::debug!("Platform event listener shutting down");
                    break;
                }
                controller.handle_platform_event(event).await;
            }
        });
    }

    pub async fn handle_platform_event(&self, event: PlatformEvent) {
        let mut model = self.model.lock().await;

        match event {
            PlatformEvent::HashChanged(hash) => {
                tracing::debug!(hash = %hash, "PlatformEvent::HashChanged");
                model.on_hash_change(&hash);
            }
            PlatformEvent::FullscreenChanged => {
                tracing::debug!("PlatformEvent::FullscreenChanged");
                model.on_fullscreen_changed();
            }
            PlatformEvent::FullscreenRejected { request, error } => {
                tracing::debug!(?request, "PlatformEvent::FullscreenRejected");
                model.on_fullscreen_rejected(request, &error);
            }
            PlatformEvent::DisplayModeChanged(fullscreen) => {
                tracing::debug!(fullscreen, "PlatformEvent::DisplayModeChanged");
                model.on_display_mode_change(fullscreen);
            }
        }
    }
}
