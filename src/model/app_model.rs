//! Main application model: owns every piece of view state and keeps them
//! consistent with each other

use std::sync::Arc;
use std::time::{Duration, Instant};

use super::catalog::{Catalog, Storefront};
use super::fullscreen::{FullscreenError, FullscreenHost, FullscreenRequest};
use super::geometry::{GeometryMeasurer, RenderedAnchors};
use super::gesture::{SwipeDirection, SwipeTracker};
use super::navigation::{NavigationState, ScrollLock};
use super::platform::{HashLocation, PageStyle};
use super::release_browser::{ReleaseBrowser, SessionChange};
use super::types::{main_action, OverlayTarget, Overflow, ReleaseTab};
use super::viewport::ViewportClassifier;
use super::youtube::{game_embed_src, video_embed_url};
use super::UiState;

const NOTICE_TTL: Duration = Duration::from_secs(5);

/// What following a landing-page action led to
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ActionOutcome {
    OverlayOpened(OverlayTarget),
    /// The action's link should open in a new browsing context.
    External(&'static str),
}

pub struct AppModel {
    catalog: Arc<Catalog>,
    base_path: String,
    viewport: ViewportClassifier,
    navigation: NavigationState,
    location: HashLocation,
    page: PageStyle,
    scroll_lock: ScrollLock,
    browser: ReleaseBrowser,
    swipe: SwipeTracker,
    geometry: GeometryMeasurer,
    anchors: RenderedAnchors,
    fullscreen: Box<dyn FullscreenHost + Send>,
    address_bar: Option<String>,
    notice: Option<String>,
    notice_timestamp: Option<Instant>,
    should_quit: bool,
}

impl AppModel {
    pub fn new(
        catalog: Arc<Catalog>,
        base_path: impl Into<String>,
        viewport: ViewportClassifier,
        location: HashLocation,
        fullscreen: Box<dyn FullscreenHost + Send>,
    ) -> Self {
        let navigation = NavigationState::new(&location);
        Self {
            browser: ReleaseBrowser::new(catalog.clone()),
            catalog,
            base_path: base_path.into(),
            viewport,
            navigation,
            location,
            page: PageStyle::default(),
            scroll_lock: ScrollLock::default(),
            swipe: SwipeTracker::default(),
            geometry: GeometryMeasurer::default(),
            anchors: RenderedAnchors::default(),
            fullscreen,
            address_bar: None,
            notice: None,
            notice_timestamp: None,
            should_quit: false,
        }
    }

    pub fn ui_state(&self) -> UiState {
        UiState {
            catalog: self.catalog.clone(),
            base_path: self.base_path.clone(),
            viewport_class: self.viewport.class(),
            viewport_width: self.viewport.width(),
            display_fullscreen: self.viewport.is_display_fullscreen(),
            show_releases_view: self.navigation.show_releases_view(),
            show_updates_view: self.navigation.show_updates_view(),
            current_path: self.navigation.current_path().to_string(),
            legacy_releases_route: self.navigation.is_legacy_releases_route(),
            browser: self.browser.snapshot(),
            geometry: self.geometry.geometry(),
            page: self.page.clone(),
            address_bar: self.address_bar.clone(),
            notice: self.notice.clone(),
        }
    }

    // ========================================================================
    // Reconciliation
    // ========================================================================

    /// Bring the scroll lock, the release browser and the geometry in line
    /// with the overlay flags and the viewport.
    fn reconcile(&mut self) {
        self.scroll_lock
            .sync(self.navigation.is_overlay_open(), &mut self.page);

        let change = self.browser.sync(
            self.navigation.show_releases_view(),
            self.viewport.class(),
            self.fullscreen.as_mut(),
        );
        if change != SessionChange::Unchanged {
            self.geometry.invalidate();
        }
        if !self.swipes_enabled() && self.swipe.is_tracking() {
            tracing::debug!("Dropping touch in progress, carousel is gone");
            self.swipe.cancel();
        }
    }

    // ========================================================================
    // Navigation
    // ========================================================================

    pub fn activate_overlay(&mut self, target: OverlayTarget) {
        self.navigation.activate(target, &mut self.location);
        self.reconcile();
    }

    pub fn go_home(&mut self) {
        self.navigation.go_home(&mut self.location);
        self.reconcile();
    }

    pub fn on_hash_change(&mut self, hash: &str) {
        self.navigation.on_hash_change(hash);
        self.reconcile();
    }

    /// A landing action opens its desktop overlay on tablet/desktop. It
    /// follows its outbound link on mobile, when that overlay is already
    /// showing, or when it has no desktop overlay at all.
    pub fn follow_main_action(&mut self, target: OverlayTarget) -> ActionOutcome {
        let action = main_action(target);
        match action.desktop_target {
            Some(overlay)
                if self.viewport.class().is_wide()
                    && self.navigation.overlay() != Some(overlay) =>
            {
                self.activate_overlay(overlay);
                ActionOutcome::OverlayOpened(overlay)
            }
            _ => {
                tracing::debug!(action = action.id, "Following main action link");
                ActionOutcome::External(action.secondary_link)
            }
        }
    }

    // ========================================================================
    // Viewport
    // ========================================================================

    pub fn on_resize(&mut self, width_px: u32, cols: u16, rows: u16) {
        let change = self.viewport.on_resize(width_px);
        if change.class_changed() {
            tracing::info!(
                width_px,
                class = change.current.label(),
                crossed_mobile_boundary = change.crossed_mobile_boundary(),
                "Viewport class changed on resize"
            );
        }
        self.fullscreen.resize(cols, rows);
        self.geometry.invalidate();
        self.reconcile();
    }

    pub fn on_display_mode_change(&mut self, fullscreen: bool) {
        if self.viewport.on_display_mode_change(fullscreen) {
            tracing::debug!(fullscreen, "Display mode changed");
        }
    }

    pub fn is_display_fullscreen(&self) -> bool {
        self.viewport.is_display_fullscreen()
    }

    /// Called after each frame with the anchors it laid out and how far the
    /// landing page extends past the screen.
    pub fn after_render(&mut self, anchors: RenderedAnchors, page_overflow_rows: u16) {
        self.anchors = anchors;
        self.page.set_max_scroll(page_overflow_rows);
        if !self.scroll_lock.is_engaged() {
            self.page.overflow = if page_overflow_rows > 0 {
                Overflow::Scroll
            } else {
                Overflow::Unset
            };
        }

        // A fullscreen game frame lays out no anchors. Measuring now would
        // publish absent rects, so wait for the panel to be drawn again.
        if self.browser.is_game_fullscreen() {
            return;
        }
        self.geometry.measure_if_dirty(
            &self.anchors,
            self.navigation.show_releases_view(),
            self.viewport.class(),
        );
    }

    pub fn scroll_page(&mut self, delta: i32) {
        self.page.scroll_by(delta);
    }

    /// Assign the location hash, as a followed in-page link would.
    pub fn navigate(&mut self, hash: &str) {
        self.location.set_hash(hash);
    }

    // ========================================================================
    // Release browser
    // ========================================================================

    fn releases_open(&self) -> bool {
        self.navigation.show_releases_view() && self.browser.is_initialized()
    }

    pub fn next_release(&mut self) -> bool {
        self.releases_open() && self.browser.advance(self.fullscreen.as_mut())
    }

    pub fn previous_release(&mut self) -> bool {
        self.releases_open() && self.browser.retreat(self.fullscreen.as_mut())
    }

    pub fn select_tab(&mut self, tab: ReleaseTab) -> bool {
        self.releases_open() && self.browser.select_tab(tab, self.fullscreen.as_mut())
    }

    pub fn cycle_tab(&mut self) -> bool {
        self.releases_open() && self.browser.cycle_tab(self.fullscreen.as_mut())
    }

    pub fn start_game(&mut self) -> bool {
        self.releases_open() && self.browser.start_game()
    }

    pub fn toggle_game_fullscreen(&mut self) -> Option<FullscreenRequest> {
        if !self.releases_open() {
            return None;
        }
        self.browser.toggle_game_fullscreen(self.fullscreen.as_mut())
    }

    pub fn is_game_fullscreen(&self) -> bool {
        self.browser.is_game_fullscreen()
    }

    pub fn on_fullscreen_changed(&mut self) {
        let element = self.fullscreen.fullscreen_element();
        if element.is_some() && element != self.browser.game_surface() {
            tracing::warn!(?element, "Fullscreen granted to a stale game surface, leaving it");
            self.fullscreen.exit_fullscreen();
        }
        let was_fullscreen = self.browser.is_game_fullscreen();
        self.browser
            .on_fullscreen_change(self.fullscreen.fullscreen_element());
        if was_fullscreen != self.browser.is_game_fullscreen() {
            self.geometry.invalidate();
        }
    }

    pub fn on_fullscreen_rejected(&mut self, request: FullscreenRequest, error: &FullscreenError) {
        tracing::error!(
            ?request,
            name = %error.name,
            message = %error.message,
            "Error attempting to enable game fullscreen mode"
        );
        self.set_notice(format!("Fullscreen unavailable: {}", error.message));
        self.browser
            .on_fullscreen_change(self.fullscreen.fullscreen_element());
    }

    /// URL for the active tab's media, as it would be embedded.
    pub fn current_media_url(&self) -> Option<String> {
        let release = self.browser.current_release()?;
        match self.browser.active_tab() {
            ReleaseTab::Music => release
                .has_audio()
                .then(|| release.audio_embed_url.clone()),
            ReleaseTab::Video => release.video_id.as_deref().map(|id| video_embed_url(id, true)),
            ReleaseTab::Game => release
                .playable_game_url()
                .map(|url| game_embed_src(url, self.browser.is_game_started())),
        }
    }

    pub fn store_link(&self, store: Storefront) -> Option<String> {
        self.browser
            .current_release()?
            .details
            .store_link(store)
            .map(str::to_string)
    }

    // ========================================================================
    // Gestures
    // ========================================================================

    pub fn swipes_enabled(&self) -> bool {
        self.navigation.show_releases_view() && self.viewport.class().accepts_swipes()
    }

    pub fn touch_start(&mut self, x: f32, y: f32) {
        let enabled = self.swipes_enabled();
        self.swipe.touch_start(x, y, enabled);
    }

    /// Returns the direction of a recognized swipe after applying it.
    pub fn touch_end(&mut self, x: f32, y: f32) -> Option<SwipeDirection> {
        let enabled = self.swipes_enabled();
        let direction = self.swipe.touch_end(x, y, enabled)?;
        match direction {
            SwipeDirection::Left => self.next_release(),
            SwipeDirection::Right => self.previous_release(),
        };
        tracing::debug!(?direction, "Swipe recognized");
        Some(direction)
    }

    // ========================================================================
    // Location bar
    // ========================================================================

    pub fn is_address_bar_open(&self) -> bool {
        self.address_bar.is_some()
    }

    pub fn open_address_bar(&mut self) {
        self.address_bar = Some(self.location.hash().to_string());
    }

    pub fn close_address_bar(&mut self) {
        self.address_bar = None;
    }

    pub fn address_bar_push(&mut self, c: char) {
        if let Some(input) = &mut self.address_bar {
            input.push(c);
        }
    }

    pub fn address_bar_backspace(&mut self) {
        if let Some(input) = &mut self.address_bar {
            input.pop();
        }
    }

    /// Navigate to the typed fragment. The resulting hash change arrives as a
    /// platform notification.
    pub fn submit_address_bar(&mut self) {
        if let Some(input) = self.address_bar.take() {
            tracing::info!(hash = %input, "Navigating via location bar");
            self.navigate(&input);
        }
    }

    // ========================================================================
    // Notices and lifecycle
    // ========================================================================

    pub fn set_notice(&mut self, message: impl Into<String>) {
        self.notice = Some(message.into());
        self.notice_timestamp = Some(Instant::now());
    }

    pub fn clear_notice(&mut self) {
        self.notice = None;
        self.notice_timestamp = None;
    }

    pub fn auto_clear_old_notices(&mut self) {
        if self
            .notice_timestamp
            .is_some_and(|at| at.elapsed() >= NOTICE_TTL)
        {
            self.clear_notice();
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn set_should_quit(&mut self, quit: bool) {
        self.should_quit = quit;
    }

    /// Undo every side effect on the host before the application exits.
    pub fn teardown(&mut self) {
        self.scroll_lock.release(&mut self.page);
        if self.fullscreen.fullscreen_element().is_some() {
            self.fullscreen.exit_fullscreen();
        }
        tracing::debug!("Model torn down");
    }
}
