//! Layout geometry for positioning the releases panel

use std::collections::HashMap;

use super::types::ViewportClass;

/// Regions of the landing page the panel is positioned against
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Anchor {
    /// Wrapper around the stacked action titles.
    TextBlock,
    /// Column holding the titles and their links.
    TextActionsArea,
}

/// Bounding box in layout units, origin top-left
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Bounds {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Bounds {
    pub fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self { x, y, width, height }
    }

    pub fn left(&self) -> i32 {
        self.x
    }

    pub fn right(&self) -> i32 {
        self.x + self.width
    }
}

/// Source of anchor measurements. `None` means the anchor is not mounted.
pub trait GeometryProvider {
    fn bounds(&self, anchor: Anchor) -> Option<Bounds>;
}

/// Anchors recorded while drawing the last frame
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RenderedAnchors {
    anchors: HashMap<Anchor, Bounds>,
}

impl RenderedAnchors {
    pub fn record(&mut self, anchor: Anchor, bounds: Bounds) {
        self.anchors.insert(anchor, bounds);
    }
}

impl GeometryProvider for RenderedAnchors {
    fn bounds(&self, anchor: Anchor) -> Option<Bounds> {
        self.anchors.get(&anchor).copied()
    }
}

/// Published measurements, read by the view
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LayoutGeometry {
    pub text_block_rect: Option<Bounds>,
    pub text_actions_area_rect: Option<Bounds>,
}

impl LayoutGeometry {
    /// Rects are only kept while the releases panel is shown beside the text.
    pub fn measure(
        provider: &dyn GeometryProvider,
        releases_overlay_active: bool,
        viewport: ViewportClass,
    ) -> Self {
        if !releases_overlay_active || !viewport.is_wide() {
            return Self::default();
        }
        Self {
            text_block_rect: provider.bounds(Anchor::TextBlock),
            text_actions_area_rect: provider.bounds(Anchor::TextActionsArea),
        }
    }

    /// Offset of the panel from the actions column. `None` suppresses the panel.
    pub fn panel_left(&self) -> Option<i32> {
        let text_block = self.text_block_rect?;
        let actions = self.text_actions_area_rect?;
        Some(text_block.right() - actions.left())
    }
}

/// Keeps `LayoutGeometry` current; measuring waits for a frame with fresh
/// anchors.
#[derive(Clone, Debug, Default)]
pub struct GeometryMeasurer {
    geometry: LayoutGeometry,
    dirty: bool,
}

impl GeometryMeasurer {
    pub fn geometry(&self) -> LayoutGeometry {
        self.geometry
    }

    #[cfg(test)]
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub fn invalidate(&mut self) {
        self.dirty = true;
    }

    /// Remeasure if invalidated since the last call. Returns whether it ran.
    pub fn measure_if_dirty(
        &mut self,
        provider: &dyn GeometryProvider,
        releases_overlay_active: bool,
        viewport: ViewportClass,
    ) -> bool {
        if !self.dirty {
            return false;
        }
        self.geometry = LayoutGeometry::measure(provider, releases_overlay_active, viewport);
        // A frame without the anchors (e.g. a fullscreen game) cannot place
        // the panel; measure again after the next one.
        self.dirty = releases_overlay_active
            && viewport.is_wide()
            && self.geometry.panel_left().is_none();
        tracing::trace!(
            panel_left = ?self.geometry.panel_left(),
            "Layout geometry measured"
        );
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct FakeGeometry {
        text_block: Option<Bounds>,
        actions: Option<Bounds>,
    }

    impl GeometryProvider for FakeGeometry {
        fn bounds(&self, anchor: Anchor) -> Option<Bounds> {
            match anchor {
                Anchor::TextBlock => self.text_block,
                Anchor::TextActionsArea => self.actions,
            }
        }
    }

    fn mounted() -> FakeGeometry {
        FakeGeometry {
            text_block: Some(Bounds::new(40, 5, 30, 20)),
            actions: Some(Bounds::new(24, 0, 100, 40)),
        }
    }

    #[test]
    fn panel_left_is_text_block_right_minus_actions_left() {
        let geometry = LayoutGeometry::measure(&mounted(), true, ViewportClass::Desktop);
        assert_eq!(geometry.panel_left(), Some(70 - 24));
    }

    #[test]
    fn mobile_or_closed_overlay_publishes_nothing() {
        assert_eq!(
            LayoutGeometry::measure(&mounted(), true, ViewportClass::Mobile),
            LayoutGeometry::default()
        );
        assert_eq!(
            LayoutGeometry::measure(&mounted(), false, ViewportClass::Tablet),
            LayoutGeometry::default()
        );
    }

    #[test]
    fn unmounted_anchor_suppresses_panel() {
        let provider = FakeGeometry {
            text_block: Some(Bounds::new(0, 0, 10, 10)),
            actions: None,
        };
        let geometry = LayoutGeometry::measure(&provider, true, ViewportClass::Desktop);
        assert!(geometry.text_block_rect.is_some());
        assert_eq!(geometry.panel_left(), None);
    }

    #[test]
    fn measurer_only_runs_after_invalidation() {
        let mut measurer = GeometryMeasurer::default();
        assert!(!measurer.measure_if_dirty(&mounted(), true, ViewportClass::Desktop));
        assert_eq!(measurer.geometry().panel_left(), None);

        measurer.invalidate();
        assert!(measurer.measure_if_dirty(&mounted(), true, ViewportClass::Desktop));
        assert_eq!(measurer.geometry().panel_left(), Some(46));
        assert!(!measurer.is_dirty());
    }

    #[test]
    fn frame_without_anchors_keeps_measurer_dirty() {
        let mut measurer = GeometryMeasurer::default();
        measurer.invalidate();
        assert!(measurer.measure_if_dirty(&FakeGeometry::default(), true, ViewportClass::Desktop));
        assert_eq!(measurer.geometry().panel_left(), None);
        assert!(measurer.is_dirty());

        assert!(measurer.measure_if_dirty(&mounted(), true, ViewportClass::Desktop));
        assert_eq!(measurer.geometry().panel_left(), Some(46));
        assert!(!measurer.is_dirty());

        measurer.invalidate();
        measurer.measure_if_dirty(&FakeGeometry::default(), false, ViewportClass::Desktop);
        assert!(!measurer.is_dirty());
    }

    #[test]
    fn rendered_anchors_answer_recorded_regions() {
        let mut anchors = RenderedAnchors::default();
        anchors.record(Anchor::TextBlock, Bounds::new(1, 2, 3, 4));
        assert_eq!(anchors.bounds(Anchor::TextBlock), Some(Bounds::new(1, 2, 3, 4)));
        assert_eq!(anchors.bounds(Anchor::TextActionsArea), None);
    }
}
