//! Static release catalog, seeded once at startup

use std::collections::HashSet;

use chrono::NaiveDate;
use serde::Deserialize;

use super::types::ReleaseTab;
use super::youtube::resolve_video_id;

const EMBEDDED_CATALOG: &str = include_str!("../../assets/releases.json");
const RELEASE_DATE_FORMAT: &str = "%Y-%m-%d";

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("release catalog is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("duplicate release id `{0}`")]
    DuplicateId(String),
    #[error("release catalog is empty")]
    Empty,
}

/// A storefront selling a release
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Storefront {
    Beatport,
    AppleMusic,
    Juno,
}

impl Storefront {
    pub fn label(self) -> &'static str {
        match self {
            Self::Beatport => "Beatport",
            Self::AppleMusic => "Apple Music",
            Self::Juno => "Juno",
        }
    }

    /// Placeholder written into the catalog while the real link is unknown.
    pub fn placeholder(self) -> &'static str {
        match self {
            Self::Beatport => "#beatport-link",
            Self::AppleMusic => "#apple-music-link",
            Self::Juno => "#juno-link",
        }
    }
}

#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub struct ReleaseDetails {
    pub credits: String,
    #[serde(default)]
    pub mastering: String,
    pub release_date: String,
    pub label: String,
    pub distribution: String,
    pub isrc: String,
    pub genre: String,
    pub country: String,
    #[serde(default)]
    pub notes: String,
    #[serde(default)]
    pub beatport_url: Option<String>,
    #[serde(default)]
    pub apple_music_url: Option<String>,
    #[serde(default)]
    pub juno_url: Option<String>,
}

impl ReleaseDetails {
    pub fn parsed_release_date(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(self.release_date.trim(), RELEASE_DATE_FORMAT).ok()
    }

    fn raw_store_link(&self, store: Storefront) -> Option<&str> {
        match store {
            Storefront::Beatport => self.beatport_url.as_deref(),
            Storefront::AppleMusic => self.apple_music_url.as_deref(),
            Storefront::Juno => self.juno_url.as_deref(),
        }
    }

    /// Link for `store`, with empty values and placeholders treated as absent.
    pub fn store_link(&self, store: Storefront) -> Option<&str> {
        self.raw_store_link(store)
            .map(str::trim)
            .filter(|url| !url.is_empty() && *url != store.placeholder())
    }
}

#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub struct ReleaseRecord {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub audio_embed_url: String,
    #[serde(default)]
    pub video_source_url: String,
    #[serde(default)]
    pub has_game: bool,
    #[serde(default)]
    pub game_embed_url: Option<String>,
    #[serde(default)]
    pub game_thumbnail_url: Option<String>,
    pub details: ReleaseDetails,
    /// Resolved once at load; `None` for releases without a usable video.
    #[serde(skip)]
    pub video_id: Option<String>,
}

impl ReleaseRecord {
    pub fn has_audio(&self) -> bool {
        !self.audio_embed_url.trim().is_empty()
    }

    pub fn has_video(&self) -> bool {
        !self.video_source_url.trim().is_empty()
    }

    /// The game URL, present only when the release actually ships a game.
    pub fn playable_game_url(&self) -> Option<&str> {
        if !self.has_game {
            return None;
        }
        self.game_embed_url
            .as_deref()
            .filter(|url| !url.trim().is_empty())
    }

    pub fn has_playable_game(&self) -> bool {
        self.playable_game_url().is_some()
    }

    pub fn supports_tab(&self, tab: ReleaseTab) -> bool {
        match tab {
            ReleaseTab::Music => true,
            ReleaseTab::Video => self.has_video(),
            ReleaseTab::Game => self.has_playable_game(),
        }
    }

    pub fn available_tabs(&self) -> Vec<ReleaseTab> {
        ReleaseTab::ALL
            .into_iter()
            .filter(|tab| self.supports_tab(*tab))
            .collect()
    }

    /// Media for releases dated after `today` is replaced by placeholders.
    pub fn is_upcoming(&self, today: NaiveDate) -> bool {
        self.details
            .parsed_release_date()
            .is_some_and(|date| date > today)
    }

    pub fn store_links(&self) -> Vec<(Storefront, &str)> {
        [Storefront::Beatport, Storefront::AppleMusic, Storefront::Juno]
            .into_iter()
            .filter_map(|store| self.details.store_link(store).map(|url| (store, url)))
            .collect()
    }
}

/// Ordered, read-only list of releases, newest first
#[derive(Clone, Debug)]
pub struct Catalog {
    releases: Vec<ReleaseRecord>,
}

impl Catalog {
    /// Load the catalog bundled with the binary.
    pub fn embedded() -> Result<Self, CatalogError> {
        Self::from_json(EMBEDDED_CATALOG)
    }

    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let releases: Vec<ReleaseRecord> = serde_json::from_str(json)?;
        Self::from_records(releases)
    }

    pub fn from_records(mut releases: Vec<ReleaseRecord>) -> Result<Self, CatalogError> {
        if releases.is_empty() {
            return Err(CatalogError::Empty);
        }
        let mut seen = HashSet::new();
        for release in &releases {
            if !seen.insert(release.id.as_str()) {
                return Err(CatalogError::DuplicateId(release.id.clone()));
            }
        }

        for release in &mut releases {
            release.video_id = resolve_video_id(&release.video_source_url);
        }

        let releases = sort_by_release_date(releases);
        tracing::debug!(
            releases = releases.len(),
            newest = releases.first().map(|r| r.id.as_str()).unwrap_or(""),
            "Release catalog loaded"
        );
        Ok(Self { releases })
    }

    pub fn len(&self) -> usize {
        self.releases.len()
    }

    pub fn get(&self, index: usize) -> Option<&ReleaseRecord> {
        self.releases.get(index)
    }

    #[cfg(test)]
    pub fn iter(&self) -> impl Iterator<Item = &ReleaseRecord> {
        self.releases.iter()
    }

    #[cfg(test)]
    pub fn position(&self, id: &str) -> Option<usize> {
        self.releases.iter().position(|r| r.id == id)
    }
}

/// Newest first. Records whose date does not parse keep their slot; the
/// dated records are stably sorted among the remaining slots.
fn sort_by_release_date(releases: Vec<ReleaseRecord>) -> Vec<ReleaseRecord> {
    let mut slots: Vec<Option<ReleaseRecord>> = Vec::with_capacity(releases.len());
    let mut dated = Vec::new();
    let mut dated_slots = Vec::new();

    for (index, release) in releases.into_iter().enumerate() {
        match release.details.parsed_release_date() {
            Some(date) => {
                dated_slots.push(index);
                dated.push((date, release));
                slots.push(None);
            }
            None => {
                tracing::warn!(
                    release = %release.id,
                    release_date = %release.details.release_date,
                    "Unparsable release date, keeping catalog position"
                );
                slots.push(Some(release));
            }
        }
    }

    dated.sort_by(|(a, _), (b, _)| b.cmp(a));
    for (slot, (_, release)) in dated_slots.into_iter().zip(dated) {
        slots[slot] = Some(release);
    }

    slots.into_iter().flatten().collect()
}
