//! Model module - Application state and data types
//!
//! This module contains all the data structures and state management for the application.
//! It is organized into submodules by responsibility:
//!
//! - `types`: Core type definitions (viewport classes, tabs, landing actions)
//! - `catalog`: Static release catalog
//! - `youtube`: Video id extraction and embed URLs
//! - `viewport`: Window width / display mode classification
//! - `platform`: Location hash, page style and host notifications
//! - `navigation`: Overlay flags and scroll lock
//! - `release_browser`: Release carousel and game lifecycle
//! - `gesture`: Swipe detection
//! - `geometry`: Anchor measurement for the releases panel
//! - `fullscreen`: Fullscreen request/notification seam
//! - `app_model`: Main application model tying the pieces together

mod types;
mod catalog;
mod youtube;
mod viewport;
mod platform;
mod navigation;
mod release_browser;
mod gesture;
mod geometry;
mod fullscreen;
mod app_model;

use std::sync::Arc;

pub use types::{
    main_action, MainAction, OverlayTarget, ReleaseTab, ViewportClass, MAIN_ACTIONS, SOCIAL_LINKS,
};

pub use catalog::{Catalog, ReleaseRecord, Storefront};

pub use youtube::{game_embed_src, video_embed_url};

pub use viewport::ViewportClassifier;

pub use platform::{HashLocation, PageStyle, PlatformEvent, HOME_HASH};

pub use release_browser::{tab_content_height, BrowserSnapshot, TabContentHeight};

pub use geometry::{Anchor, Bounds, LayoutGeometry, RenderedAnchors};

pub use fullscreen::TerminalFullscreen;

pub use app_model::{ActionOutcome, AppModel};

/// Read-only snapshot handed to the view each frame
#[derive(Clone, Debug)]
pub struct UiState {
    pub catalog: Arc<Catalog>,
    pub base_path: String,
    pub viewport_class: ViewportClass,
    pub viewport_width: u32,
    pub display_fullscreen: bool,
    pub show_releases_view: bool,
    pub show_updates_view: bool,
    pub current_path: String,
    pub legacy_releases_route: bool,
    pub browser: BrowserSnapshot,
    pub geometry: LayoutGeometry,
    pub page: PageStyle,
    pub address_bar: Option<String>,
    pub notice: Option<String>,
}

impl UiState {
    pub fn current_release(&self) -> Option<&ReleaseRecord> {
        self.catalog.get(self.browser.current_release_index)
    }

    pub fn is_overlay_open(&self) -> bool {
        self.show_releases_view || self.show_updates_view
    }

    pub fn tab_content_height(&self) -> TabContentHeight {
        tab_content_height(
            self.browser.active_tab,
            self.viewport_class,
            self.display_fullscreen,
            self.browser.is_game_fullscreen,
        )
    }

    /// Address shown in the header and location bar.
    pub fn location(&self) -> String {
        format!("{}{}", self.base_path, self.current_path)
    }
}
