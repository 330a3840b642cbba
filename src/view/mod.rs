//! View module - UI rendering
//!
//! This module handles all UI rendering for the application using ratatui.
//! It is organized into submodules by component type:
//!
//! - `utils`: Shared helpers (popup placement, key hints, truncation)
//! - `layout`: Header and status bar
//! - `landing`: Main actions, slideshow area and overlay layout
//! - `releases`: Releases panel, game surface and the static releases page
//! - `overlays`: Notice popup and location bar

mod utils;
mod layout;
mod landing;
mod releases;
mod overlays;

use ratatui::{
    layout::{Constraint, Direction, Layout},
    Frame,
};

use crate::config::AppConfig;
use crate::model::{RenderedAnchors, UiState};

/// What a frame tells the model once it is drawn
#[derive(Debug, Default)]
pub struct RenderReport {
    pub anchors: RenderedAnchors,
    /// Landing rows below the bottom of the screen.
    pub page_overflow_rows: u16,
}

pub struct AppView;

impl AppView {
    pub fn render(frame: &mut Frame, ui_state: &UiState, config: &AppConfig) -> RenderReport {
        let mut report = RenderReport::default();

        if ui_state.show_releases_view && ui_state.browser.is_game_fullscreen {
            releases::render_game_fullscreen(frame, ui_state);
            overlays::render_notice(frame, ui_state);
            return report;
        }

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Header + social links
                Constraint::Min(0),    // Page
                Constraint::Length(3), // Key hints + viewport
            ])
            .split(frame.area());

        if ui_state.legacy_releases_route {
            // The static page replaces the header as well.
            let page = chunks[0].union(chunks[1]);
            releases::render_legacy_page(frame, page);
        } else {
            layout::render_top_bar(frame, chunks[0], ui_state);
            report.page_overflow_rows =
                landing::render_landing(frame, chunks[1], ui_state, config, &mut report.anchors);
        }

        layout::render_status_bar(frame, chunks[2], ui_state);

        if ui_state.address_bar.is_some() {
            overlays::render_address_bar(frame, ui_state);
        }

        // Notice overlay (if there's one)
        if ui_state.notice.is_some() {
            overlays::render_notice(frame, ui_state);
        }

        report
    }
}
