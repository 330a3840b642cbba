//! Release browser commands and the links a release points at

use crate::model::{ReleaseTab, Storefront};
use super::AppController;

impl AppController {
    pub async fn next_release(&self) {
        self.model.lock().await.next_release();
    }

    pub async fn previous_release(&self) {
        self.model.lock().await.previous_release();
    }

    pub async fn select_tab(&self, tab: ReleaseTab) {
        self.model.lock().await.select_tab(tab);
    }

    pub async fn cycle_tab(&self) {
        self.model.lock().await.cycle_tab();
    }

    pub async fn start_game(&self) {
        self.model.lock().await.start_game();
    }

    pub async fn toggle_game_fullscreen(&self) {
        self.model.lock().await.toggle_game_fullscreen();
    }

    /// Open whatever the active tab embeds in the system browser.
    pub async fn open_current_media(&self) {
        let url = self.model.lock().await.current_media_url();
        match url {
            Some(url) => self.open_external(&url).await,
            None => {
                tracing::debug!("Active tab has nothing to open");
                self.model.lock().await.set_notice("Nothing to open for this tab.");
            }
        }
    }

    pub async fn open_store_link(&self, store: Storefront) {
        let url = self.model.lock().await.store_link(store);
        match url {
            Some(url) => self.open_external(&url).await,
            None => {
                self.model
                    .lock()
                    .await
                    .set_notice(format!("Not available on {}.", store.label()));
            }
        }
    }
}
