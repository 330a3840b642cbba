//! Core type definitions for the application

/// Width below which the client is treated as a phone.
pub const TABLET_MIN_WIDTH: u32 = 768;
/// Width from which the client is treated as a desktop.
pub const DESKTOP_MIN_WIDTH: u32 = 1024;

/// Coarse device-width bucket driving layout and reset rules
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ViewportClass {
    #[default]
    Mobile,
    Tablet,
    Desktop,
}

impl ViewportClass {
    pub fn from_width(width: u32) -> Self {
        if width >= DESKTOP_MIN_WIDTH {
            Self::Desktop
        } else if width >= TABLET_MIN_WIDTH {
            Self::Tablet
        } else {
            Self::Mobile
        }
    }

    pub fn is_mobile(self) -> bool {
        self == Self::Mobile
    }

    /// Tablet or desktop: the layouts that host the side panel.
    pub fn is_wide(self) -> bool {
        !self.is_mobile()
    }

    /// Viewports where swipe gestures drive the release carousel.
    pub fn accepts_swipes(self) -> bool {
        matches!(self, Self::Mobile | Self::Tablet)
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Mobile => "mobile",
            Self::Tablet => "tablet",
            Self::Desktop => "desktop",
        }
    }
}

/// Content tab shown for the current release
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ReleaseTab {
    #[default]
    Music,
    Video,
    Game,
}

impl ReleaseTab {
    pub const ALL: [ReleaseTab; 3] = [ReleaseTab::Music, ReleaseTab::Video, ReleaseTab::Game];

    pub fn label(self) -> &'static str {
        match self {
            Self::Music => "MUSIC",
            Self::Video => "VIDEO",
            Self::Game => "GAME",
        }
    }
}

/// Value of the page's scroll style, as stored by the scroll lock
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub enum Overflow {
    /// No inline value set on the page.
    #[default]
    Unset,
    /// Content runs past the bottom of the screen.
    Scroll,
    Hidden,
}

impl Overflow {
    pub fn allows_scrolling(&self) -> bool {
        !matches!(self, Overflow::Hidden)
    }
}

/// An outbound social profile shown in the header
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SocialLink {
    pub name: &'static str,
    pub href: &'static str,
}

pub const SOCIAL_LINKS: [SocialLink; 4] = [
    SocialLink {
        name: "Spotify",
        href: "https://open.spotify.com/artist/6ETqKRnxshk8huuB8ubj64?si=Jk_ZJkTZQD66KoQdTfK1fA",
    },
    SocialLink {
        name: "Facebook",
        href: "https://facebook.com/aeonlightsmusic",
    },
    SocialLink {
        name: "Instagram",
        href: "https://instagram.com/aeonlights",
    },
    SocialLink {
        name: "X",
        href: "https://x.com/aeonlights",
    },
];

/// The two in-page overlays
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OverlayTarget {
    Releases,
    Updates,
}

/// One of the two large call-to-action blocks on the landing page
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MainAction {
    pub id: &'static str,
    pub primary_text_lines: [&'static str; 3],
    pub secondary_text: &'static str,
    /// Followed on mobile, when the overlay is already open, or always when
    /// there is no `desktop_target`.
    pub secondary_link: &'static str,
    /// The overlay this action heads; it reads as active while it is open.
    pub overlay: OverlayTarget,
    /// Overlay opened instead of the link on tablet/desktop.
    pub desktop_target: Option<OverlayTarget>,
}

pub const MAIN_ACTIONS: [MainAction; 2] = [
    MainAction {
        id: "music",
        primary_text_lines: ["PLAY", "THE", "MUSIC"],
        secondary_text: "RELEASES →",
        secondary_link: "https://futurecities.vercel.app/",
        overlay: OverlayTarget::Releases,
        desktop_target: Some(OverlayTarget::Releases),
    },
    MainAction {
        id: "story",
        primary_text_lines: ["LIVE", "THE", "STORY"],
        secondary_text: "UPDATES →",
        secondary_link: "https://www.instagram.com/aeonlights/",
        overlay: OverlayTarget::Updates,
        desktop_target: None,
    },
];

pub fn main_action(target: OverlayTarget) -> &'static MainAction {
    match target {
        OverlayTarget::Releases => &MAIN_ACTIONS[0],
        OverlayTarget::Updates => &MAIN_ACTIONS[1],
    }
}
