//! Release carousel state: which release is shown, which tab is active, and
//! the lifecycle of the embedded game.

use std::sync::Arc;

use super::catalog::{Catalog, ReleaseRecord};
use super::fullscreen::{FullscreenHost, FullscreenRequest, SurfaceId};
use super::types::{ReleaseTab, ViewportClass};

/// Layout a browsing session was entered with. Sessions do not survive a
/// change of layout.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BrowserLayout {
    /// Phone-sized viewport.
    Compact,
    /// Tablet or desktop, with the side panel.
    Wide,
}

impl From<ViewportClass> for BrowserLayout {
    fn from(class: ViewportClass) -> Self {
        if class.is_mobile() {
            Self::Compact
        } else {
            Self::Wide
        }
    }
}

/// What `ReleaseBrowser::sync` did
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionChange {
    Unchanged,
    Entered(BrowserLayout),
    Exited,
    /// Layout changed mid-session: reset, then entered again.
    Reentered(BrowserLayout),
}

/// Read-only copy of the browser fields, handed to the view
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct BrowserSnapshot {
    pub current_release_index: usize,
    pub active_tab: ReleaseTab,
    pub is_game_started: bool,
    pub is_game_fullscreen: bool,
    pub session: Option<BrowserLayout>,
}

impl BrowserSnapshot {
    pub fn initialized(&self) -> bool {
        self.session.is_some()
    }
}

pub struct ReleaseBrowser {
    catalog: Arc<Catalog>,
    current_release_index: usize,
    active_tab: ReleaseTab,
    is_game_started: bool,
    is_game_fullscreen: bool,
    session: Option<BrowserLayout>,
    surface_generation: u64,
}

impl ReleaseBrowser {
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self {
            catalog,
            current_release_index: 0,
            active_tab: ReleaseTab::Music,
            is_game_started: false,
            is_game_fullscreen: false,
            session: None,
            surface_generation: 0,
        }
    }

    pub fn current_release(&self) -> Option<&ReleaseRecord> {
        self.catalog.get(self.current_release_index)
    }

    pub fn active_tab(&self) -> ReleaseTab {
        self.active_tab
    }

    pub fn is_game_started(&self) -> bool {
        self.is_game_started
    }

    pub fn is_game_fullscreen(&self) -> bool {
        self.is_game_fullscreen
    }

    pub fn is_initialized(&self) -> bool {
        self.session.is_some()
    }

    pub fn snapshot(&self) -> BrowserSnapshot {
        BrowserSnapshot {
            current_release_index: self.current_release_index,
            active_tab: self.active_tab,
            is_game_started: self.is_game_started,
            is_game_fullscreen: self.is_game_fullscreen,
            session: self.session,
        }
    }

    /// The running game's surface. Exists only while a game is started.
    pub fn game_surface(&self) -> Option<SurfaceId> {
        (self.active_tab == ReleaseTab::Game && self.is_game_started).then_some(SurfaceId {
            release_index: self.current_release_index,
            generation: self.surface_generation,
        })
    }

    /// Enter, leave or restart the browsing session to match the overlay and
    /// viewport.
    pub fn sync(
        &mut self,
        overlay_active: bool,
        viewport: ViewportClass,
        fullscreen: &mut dyn FullscreenHost,
    ) -> SessionChange {
        let wanted = overlay_active.then(|| BrowserLayout::from(viewport));
        match (self.session, wanted) {
            (None, None) => SessionChange::Unchanged,
            (Some(current), Some(layout)) if current == layout => SessionChange::Unchanged,
            (None, Some(layout)) => {
                self.session = Some(layout);
                tracing::debug!(?layout, "Release browser session entered");
                SessionChange::Entered(layout)
            }
            (Some(_), None) => {
                self.reset(fullscreen);
                SessionChange::Exited
            }
            (Some(previous), Some(layout)) => {
                self.reset(fullscreen);
                self.session = Some(layout);
                tracing::info!(?previous, ?layout, "Viewport crossed layouts, release browser restarted");
                SessionChange::Reentered(layout)
            }
        }
    }

    /// Back to the first release and the MUSIC tab, leaving any game
    /// fullscreen owned by this browser.
    pub fn reset(&mut self, fullscreen: &mut dyn FullscreenHost) {
        self.stop_game(fullscreen);
        self.current_release_index = 0;
        self.active_tab = ReleaseTab::Music;
        self.session = None;
        self.refresh_fullscreen_flag(fullscreen);
        tracing::debug!("Release browser reset");
    }

    /// Returns false when the catalog has a single release.
    pub fn advance(&mut self, fullscreen: &mut dyn FullscreenHost) -> bool {
        let len = self.catalog.len();
        if len <= 1 {
            return false;
        }
        self.show_release((self.current_release_index + 1) % len, fullscreen);
        true
    }

    pub fn retreat(&mut self, fullscreen: &mut dyn FullscreenHost) -> bool {
        let len = self.catalog.len();
        if len <= 1 {
            return false;
        }
        self.show_release((self.current_release_index + len - 1) % len, fullscreen);
        true
    }

    fn show_release(&mut self, index: usize, fullscreen: &mut dyn FullscreenHost) {
        self.stop_game(fullscreen);
        self.current_release_index = index;

        let tab_still_valid = self
            .current_release()
            .is_some_and(|release| release.supports_tab(self.active_tab));
        if !tab_still_valid {
            tracing::debug!(tab = self.active_tab.label(), "Tab unavailable for release, falling back to MUSIC");
            self.active_tab = ReleaseTab::Music;
        }

        self.refresh_fullscreen_flag(fullscreen);
        tracing::info!(
            index,
            release = self.current_release().map(|r| r.id.as_str()).unwrap_or(""),
            "Release shown"
        );
    }

    /// Tabs the current release cannot show are refused.
    pub fn select_tab(&mut self, tab: ReleaseTab, fullscreen: &mut dyn FullscreenHost) -> bool {
        let supported = self
            .current_release()
            .is_some_and(|release| release.supports_tab(tab));
        if !supported {
            tracing::debug!(tab = tab.label(), "Ignoring unavailable tab");
            return false;
        }
        if tab == self.active_tab {
            return false;
        }

        self.stop_game(fullscreen);
        self.active_tab = tab;
        self.refresh_fullscreen_flag(fullscreen);
        true
    }

    /// Move to the next tab the current release offers, wrapping around.
    pub fn cycle_tab(&mut self, fullscreen: &mut dyn FullscreenHost) -> bool {
        let Some(release) = self.current_release() else {
            return false;
        };
        let tabs = release.available_tabs();
        let position = tabs.iter().position(|tab| *tab == self.active_tab).unwrap_or(0);
        let next = tabs[(position + 1) % tabs.len()];
        self.select_tab(next, fullscreen)
    }

    pub fn start_game(&mut self) -> bool {
        let playable = self
            .current_release()
            .is_some_and(ReleaseRecord::has_playable_game);
        if self.active_tab != ReleaseTab::Game || !playable || self.is_game_started {
            return false;
        }
        self.surface_generation += 1;
        self.is_game_started = true;
        tracing::info!(index = self.current_release_index, "Game started");
        true
    }

    /// Ask for fullscreen on the running game, or leave fullscreen if
    /// anything is fullscreen. The flag itself only changes through
    /// `on_fullscreen_change`.
    pub fn toggle_game_fullscreen(
        &mut self,
        fullscreen: &mut dyn FullscreenHost,
    ) -> Option<FullscreenRequest> {
        if fullscreen.fullscreen_element().is_some() {
            fullscreen.exit_fullscreen();
            return None;
        }
        let surface = self.game_surface()?;
        let request = fullscreen.request_fullscreen(surface);
        tracing::debug!(?surface, ?request, "Game fullscreen requested");
        Some(request)
    }

    pub fn on_fullscreen_change(&mut self, element: Option<SurfaceId>) {
        self.is_game_fullscreen = element.is_some() && element == self.game_surface();
    }

    fn refresh_fullscreen_flag(&mut self, fullscreen: &dyn FullscreenHost) {
        self.on_fullscreen_change(fullscreen.fullscreen_element());
    }

    fn stop_game(&mut self, fullscreen: &mut dyn FullscreenHost) {
        let element = fullscreen.fullscreen_element();
        if element.is_some() && element == self.game_surface() {
            fullscreen.exit_fullscreen();
        }
        self.is_game_started = false;
    }
}

/// Height class of the tab content area
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TabContentHeight {
    Pixels(u16),
    ViewportPercent(u8),
}

pub const DEFAULT_TAB_HEIGHT_PX: u16 = 352;

pub fn tab_content_height(
    tab: ReleaseTab,
    viewport: ViewportClass,
    browser_fullscreen: bool,
    game_fullscreen: bool,
) -> TabContentHeight {
    if tab != ReleaseTab::Game {
        return TabContentHeight::Pixels(DEFAULT_TAB_HEIGHT_PX);
    }
    let roomy = browser_fullscreen && !game_fullscreen;
    match (viewport.is_wide(), roomy) {
        (true, true) => TabContentHeight::ViewportPercent(85),
        (true, false) => TabContentHeight::ViewportPercent(60),
        (false, true) => TabContentHeight::ViewportPercent(75),
        (false, false) => TabContentHeight::Pixels(DEFAULT_TAB_HEIGHT_PX),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::catalog::tests::release;
    use crate::model::fullscreen::tests::RecordingFullscreen;
    use pretty_assertions::assert_eq;

    /// Three releases, newest first: `game` (video + game), `video`, `plain`.
    fn catalog() -> Arc<Catalog> {
        let mut game = release("game", "2025-01-01");
        game.video_source_url = "https://youtu.be/g".to_string();
        game.has_game = true;
        game.game_embed_url = Some("https://game.example/".to_string());

        let mut video = release("video", "2024-01-01");
        video.video_source_url = "https://youtu.be/v".to_string();

        let plain = release("plain", "2023-01-01");
        Arc::new(Catalog::from_records(vec![plain, video, game]).unwrap())
    }

    fn entered(catalog: Arc<Catalog>, viewport: ViewportClass) -> (ReleaseBrowser, RecordingFullscreen) {
        let mut host = RecordingFullscreen::default();
        let mut browser = ReleaseBrowser::new(catalog);
        browser.sync(true, viewport, &mut host);
        (browser, host)
    }

    fn playing(browser: &mut ReleaseBrowser, host: &mut RecordingFullscreen) -> SurfaceId {
        assert!(browser.select_tab(ReleaseTab::Game, host));
        assert!(browser.start_game());
        browser.game_surface().unwrap()
    }

    #[test]
    fn advance_and_retreat_wrap_around() {
        let (mut browser, mut host) = entered(catalog(), ViewportClass::Desktop);

        assert!(browser.retreat(&mut host));
        assert_eq!(browser.current_release_index, 2);
        assert!(browser.advance(&mut host));
        assert_eq!(browser.current_release_index, 0);
        assert!(browser.advance(&mut host));
        assert_eq!(browser.current_release_index, 1);
        assert!(browser.retreat(&mut host));
        assert_eq!(browser.current_release_index, 0);
    }

    #[test]
    fn single_release_catalog_never_moves() {
        let catalog = Arc::new(Catalog::from_records(vec![release("only", "2020-01-01")]).unwrap());
        let (mut browser, mut host) = entered(catalog, ViewportClass::Tablet);

        assert!(!browser.advance(&mut host));
        assert!(!browser.retreat(&mut host));
        assert_eq!(browser.current_release_index, 0);
    }

    #[test]
    fn unavailable_tabs_are_refused() {
        let (mut browser, mut host) = entered(catalog(), ViewportClass::Desktop);
        browser.advance(&mut host);
        browser.advance(&mut host);
        assert_eq!(browser.current_release().unwrap().id, "plain");

        assert!(!browser.select_tab(ReleaseTab::Game, &mut host));
        assert!(!browser.select_tab(ReleaseTab::Video, &mut host));
        assert_eq!(browser.active_tab(), ReleaseTab::Music);
    }

    #[test]
    fn changing_release_falls_back_to_music_when_tab_disappears() {
        let (mut browser, mut host) = entered(catalog(), ViewportClass::Desktop);
        assert!(browser.select_tab(ReleaseTab::Video, &mut host));

        browser.advance(&mut host);
        assert_eq!(browser.current_release().unwrap().id, "video");
        assert_eq!(browser.active_tab(), ReleaseTab::Video);

        browser.advance(&mut host);
        assert_eq!(browser.current_release().unwrap().id, "plain");
        assert_eq!(browser.active_tab(), ReleaseTab::Music);
    }

    #[test]
    fn changing_release_stops_the_game() {
        let (mut browser, mut host) = entered(catalog(), ViewportClass::Desktop);
        playing(&mut browser, &mut host);
        assert!(browser.is_game_started());

        browser.advance(&mut host);
        assert!(!browser.is_game_started());
        assert_eq!(browser.game_surface(), None);
    }

    #[test]
    fn switching_tabs_stops_the_game() {
        let (mut browser, mut host) = entered(catalog(), ViewportClass::Desktop);
        playing(&mut browser, &mut host);

        assert!(browser.select_tab(ReleaseTab::Music, &mut host));
        assert!(!browser.is_game_started());
    }

    #[test]
    fn games_only_start_on_the_game_tab() {
        let (mut browser, _host) = entered(catalog(), ViewportClass::Desktop);
        assert!(!browser.start_game());
        assert!(!browser.is_game_started());
    }

    #[test]
    fn fullscreen_flag_follows_notifications_not_requests() {
        let (mut browser, mut host) = entered(catalog(), ViewportClass::Desktop);
        let surface = playing(&mut browser, &mut host);

        let request = browser.toggle_game_fullscreen(&mut host);
        assert!(request.is_some());
        assert_eq!(host.requested, vec![surface]);
        assert!(!browser.is_game_fullscreen(), "request alone changes nothing");

        let granted = host.grant_last();
        browser.on_fullscreen_change(granted);
        assert!(browser.is_game_fullscreen());

        assert_eq!(browser.toggle_game_fullscreen(&mut host), None);
        assert_eq!(host.exits, 1);
        browser.on_fullscreen_change(host.element);
        assert!(!browser.is_game_fullscreen());
    }

    #[test]
    fn toggle_without_a_running_game_requests_nothing() {
        let (mut browser, mut host) = entered(catalog(), ViewportClass::Desktop);
        assert_eq!(browser.toggle_game_fullscreen(&mut host), None);
        assert!(host.requested.is_empty());
    }

    #[test]
    fn stale_grants_do_not_match_a_restarted_game() {
        let (mut browser, mut host) = entered(catalog(), ViewportClass::Desktop);
        let first = playing(&mut browser, &mut host);
        browser.toggle_game_fullscreen(&mut host);

        // Restart the game before the grant lands.
        browser.select_tab(ReleaseTab::Music, &mut host);
        let second = playing(&mut browser, &mut host);
        assert_ne!(first, second);

        browser.on_fullscreen_change(host.grant_last());
        assert!(!browser.is_game_fullscreen());
    }

    #[test]
    fn leaving_the_game_exits_its_fullscreen() {
        let (mut browser, mut host) = entered(catalog(), ViewportClass::Desktop);
        playing(&mut browser, &mut host);
        browser.toggle_game_fullscreen(&mut host);
        browser.on_fullscreen_change(host.grant_last());

        browser.advance(&mut host);
        assert_eq!(host.exits, 1);
        assert_eq!(host.element, None);
        assert!(!browser.is_game_fullscreen());
    }

    #[test]
    fn closing_the_overlay_resets_everything() {
        let (mut browser, mut host) = entered(catalog(), ViewportClass::Desktop);
        browser.advance(&mut host);
        browser.retreat(&mut host);
        playing(&mut browser, &mut host);
        browser.toggle_game_fullscreen(&mut host);
        browser.on_fullscreen_change(host.grant_last());

        assert_eq!(browser.sync(false, ViewportClass::Desktop, &mut host), SessionChange::Exited);
        assert_eq!(browser.snapshot(), BrowserSnapshot::default());
        assert_eq!(host.exits, 1);
    }

    #[test]
    fn crossing_into_mobile_restarts_the_session() {
        let (mut browser, mut host) = entered(catalog(), ViewportClass::from_width(800));
        browser.advance(&mut host);
        browser.select_tab(ReleaseTab::Video, &mut host);

        let change = browser.sync(true, ViewportClass::from_width(500), &mut host);

        assert_eq!(change, SessionChange::Reentered(BrowserLayout::Compact));
        assert_eq!(browser.current_release_index, 0);
        assert_eq!(browser.active_tab(), ReleaseTab::Music);
        assert!(browser.is_initialized());
    }

    #[test]
    fn tablet_to_desktop_keeps_the_session() {
        let (mut browser, mut host) = entered(catalog(), ViewportClass::Tablet);
        browser.advance(&mut host);

        let change = browser.sync(true, ViewportClass::Desktop, &mut host);
        assert_eq!(change, SessionChange::Unchanged);
        assert_eq!(browser.current_release_index, 1);
    }

    #[test]
    fn cycle_tab_visits_only_available_tabs() {
        let (mut browser, mut host) = entered(catalog(), ViewportClass::Desktop);
        let mut seen = vec![browser.active_tab()];
        for _ in 0..3 {
            browser.cycle_tab(&mut host);
            seen.push(browser.active_tab());
        }
        assert_eq!(
            seen,
            vec![ReleaseTab::Music, ReleaseTab::Video, ReleaseTab::Game, ReleaseTab::Music]
        );

        browser.advance(&mut host);
        browser.advance(&mut host);
        assert!(!browser.cycle_tab(&mut host), "only MUSIC is available");
    }

    #[test]
    fn tab_height_depends_on_tab_viewport_and_fullscreen() {
        use TabContentHeight::*;
        let cases = [
            (ReleaseTab::Music, ViewportClass::Desktop, true, false, Pixels(352)),
            (ReleaseTab::Video, ViewportClass::Mobile, true, false, Pixels(352)),
            (ReleaseTab::Game, ViewportClass::Desktop, true, false, ViewportPercent(85)),
            (ReleaseTab::Game, ViewportClass::Tablet, false, false, ViewportPercent(60)),
            (ReleaseTab::Game, ViewportClass::Desktop, true, true, ViewportPercent(60)),
            (ReleaseTab::Game, ViewportClass::Mobile, true, false, ViewportPercent(75)),
            (ReleaseTab::Game, ViewportClass::Mobile, false, false, Pixels(352)),
        ];
        for (tab, viewport, browser_fs, game_fs, expected) in cases {
            assert_eq!(
                tab_content_height(tab, viewport, browser_fs, game_fs),
                expected,
                "{tab:?} {viewport:?} {browser_fs} {game_fs}"
            );
        }
    }
}
