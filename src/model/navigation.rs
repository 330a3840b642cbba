//! Overlay flags, current path and the scroll lock that follows them

use super::platform::{is_home_hash, HashLocation, PageStyle, HOME_HASH};
use super::types::{OverlayTarget, Overflow};

/// Deep link to the static releases page that predates the overlay.
pub const LEGACY_RELEASES_PATH: &str = "#/releases";

/// Which overlay, if any, sits on top of the landing page.
///
/// The two flags are only written through the methods below, which never
/// leave both set.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NavigationState {
    show_releases_view: bool,
    show_updates_view: bool,
    current_path: String,
}

impl NavigationState {
    pub fn new(location: &HashLocation) -> Self {
        Self {
            show_releases_view: false,
            show_updates_view: false,
            current_path: path_for(location.hash()),
        }
    }

    pub fn show_releases_view(&self) -> bool {
        self.show_releases_view
    }

    pub fn show_updates_view(&self) -> bool {
        self.show_updates_view
    }

    pub fn current_path(&self) -> &str {
        &self.current_path
    }

    pub fn overlay(&self) -> Option<OverlayTarget> {
        match (self.show_releases_view, self.show_updates_view) {
            (true, _) => Some(OverlayTarget::Releases),
            (false, true) => Some(OverlayTarget::Updates),
            (false, false) => None,
        }
    }

    pub fn is_overlay_open(&self) -> bool {
        self.overlay().is_some()
    }

    /// The static releases page is only shown when no overlay is open.
    pub fn is_legacy_releases_route(&self) -> bool {
        self.current_path == LEGACY_RELEASES_PATH && !self.is_overlay_open()
    }

    /// Apply an externally changed hash. Returns true if this closed an overlay.
    pub fn on_hash_change(&mut self, hash: &str) -> bool {
        self.current_path = path_for(hash);
        if self.is_overlay_open() && !is_home_hash(hash) {
            tracing::info!(hash, "External navigation closed the overlay");
            self.show_releases_view = false;
            self.show_updates_view = false;
            return true;
        }
        false
    }

    pub fn activate(&mut self, target: OverlayTarget, location: &mut HashLocation) {
        self.show_releases_view = target == OverlayTarget::Releases;
        self.show_updates_view = target == OverlayTarget::Updates;
        self.return_home(location);
        tracing::info!(overlay = ?target, "Overlay activated");
    }

    pub fn go_home(&mut self, location: &mut HashLocation) {
        self.show_releases_view = false;
        self.show_updates_view = false;
        self.return_home(location);
        tracing::debug!("Returned to landing page");
    }

    fn return_home(&mut self, location: &mut HashLocation) {
        if !is_home_hash(location.hash()) {
            location.set_hash(HOME_HASH);
        }
        self.current_path = HOME_HASH.to_string();
    }
}

fn path_for(hash: &str) -> String {
    if hash.is_empty() {
        HOME_HASH.to_string()
    } else {
        hash.to_string()
    }
}

/// Locks page scrolling while an overlay is open and restores the exact
/// value it found when it engaged.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ScrollLock {
    saved: Option<Overflow>,
}

impl ScrollLock {
    pub fn is_engaged(&self) -> bool {
        self.saved.is_some()
    }

    pub fn sync(&mut self, overlay_open: bool, page: &mut PageStyle) {
        if overlay_open {
            if self.saved.is_none() {
                self.saved = Some(std::mem::replace(&mut page.overflow, Overflow::Hidden));
            }
        } else {
            self.release(page);
        }
    }

    pub fn release(&mut self, page: &mut PageStyle) {
        if let Some(previous) = self.saved.take() {
            page.overflow = previous;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::platform::PlatformEvent;
    use tokio::sync::mpsc::unbounded_channel;

    #[test]
    fn initial_path_defaults_to_home() {
        let nav = NavigationState::new(&HashLocation::new("", None));
        assert_eq!(nav.current_path(), "#");
        assert_eq!(nav.overlay(), None);

        let nav = NavigationState::new(&HashLocation::new("#/releases", None));
        assert!(nav.is_legacy_releases_route());
    }

    #[test]
    fn activating_releases_rewrites_hash_home() {
        let (tx, mut rx) = unbounded_channel();
        let mut location = HashLocation::new("#/contact", Some(tx));
        let mut nav = NavigationState::new(&location);

        nav.activate(OverlayTarget::Releases, &mut location);

        assert!(nav.show_releases_view());
        assert!(!nav.show_updates_view());
        assert_eq!(location.hash(), "#");
        assert_eq!(nav.current_path(), "#");
        assert_eq!(rx.try_recv().unwrap(), PlatformEvent::HashChanged("#".into()));

        // The resulting hash change must not undo the activation.
        assert!(!nav.on_hash_change("#"));
        assert!(nav.show_releases_view());
    }

    #[test]
    fn overlays_are_mutually_exclusive() {
        let mut location = HashLocation::new("#", None);
        let mut nav = NavigationState::new(&location);

        nav.activate(OverlayTarget::Releases, &mut location);
        nav.activate(OverlayTarget::Updates, &mut location);
        assert!(!nav.show_releases_view());
        assert!(nav.show_updates_view());

        nav.activate(OverlayTarget::Releases, &mut location);
        assert_eq!(nav.overlay(), Some(OverlayTarget::Releases));
        assert!(!nav.show_updates_view());
    }

    #[test]
    fn external_hash_navigation_closes_overlays() {
        let mut location = HashLocation::new("#", None);
        let mut nav = NavigationState::new(&location);
        nav.activate(OverlayTarget::Releases, &mut location);

        location.set_hash("#/contact");
        assert!(nav.on_hash_change(location.hash()));

        assert!(!nav.show_releases_view());
        assert!(!nav.show_updates_view());
        assert_eq!(nav.current_path(), "#/contact");
    }

    #[test]
    fn legacy_route_is_hidden_behind_an_overlay() {
        let mut location = HashLocation::new("#/releases", None);
        let mut nav = NavigationState::new(&location);
        assert!(nav.is_legacy_releases_route());

        nav.activate(OverlayTarget::Releases, &mut location);
        assert!(!nav.is_legacy_releases_route());
        assert_eq!(location.hash(), "#");
    }

    #[test]
    fn go_home_clears_both_flags() {
        let mut location = HashLocation::new("#", None);
        let mut nav = NavigationState::new(&location);
        nav.activate(OverlayTarget::Updates, &mut location);
        nav.go_home(&mut location);
        assert_eq!(nav.overlay(), None);
        assert_eq!(nav.current_path(), "#");
    }

    #[test]
    fn scroll_lock_restores_the_exact_prior_value() {
        let mut page = PageStyle {
            overflow: Overflow::Scroll,
            ..PageStyle::default()
        };
        let mut lock = ScrollLock::default();

        lock.sync(true, &mut page);
        assert_eq!(page.overflow, Overflow::Hidden);
        lock.sync(true, &mut page);
        assert!(lock.is_engaged());

        lock.sync(false, &mut page);
        assert_eq!(page.overflow, Overflow::Scroll);
        assert!(!lock.is_engaged());
    }

    #[test]
    fn releasing_an_idle_lock_leaves_the_page_alone() {
        let mut page = PageStyle {
            overflow: Overflow::Scroll,
            ..PageStyle::default()
        };
        let mut lock = ScrollLock::default();
        lock.release(&mut page);
        assert_eq!(page.overflow, Overflow::Scroll);
    }
}
