//! Viewport classification from window width and display mode

use super::types::ViewportClass;

/// Result of feeding a new width to the classifier
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ViewportChange {
    pub previous: ViewportClass,
    pub current: ViewportClass,
}

impl ViewportChange {
    pub fn class_changed(&self) -> bool {
        self.previous != self.current
    }

    /// True when the width moved between mobile and tablet/desktop.
    pub fn crossed_mobile_boundary(&self) -> bool {
        self.previous.is_mobile() != self.current.is_mobile()
    }
}

/// Last observed window width and browser display mode
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ViewportClassifier {
    width: u32,
    class: ViewportClass,
    display_fullscreen: bool,
}

impl ViewportClassifier {
    pub fn new(width: u32, display_fullscreen: bool) -> Self {
        Self {
            width,
            class: ViewportClass::from_width(width),
            display_fullscreen,
        }
    }

    pub fn on_resize(&mut self, width: u32) -> ViewportChange {
        let previous = self.class;
        self.width = width;
        self.class = ViewportClass::from_width(width);
        if previous != self.class {
            tracing::debug!(
                width,
                from = previous.label(),
                to = self.class.label(),
                "Viewport class changed"
            );
        }
        ViewportChange {
            previous,
            current: self.class,
        }
    }

    /// Returns whether the value changed.
    pub fn on_display_mode_change(&mut self, fullscreen: bool) -> bool {
        let changed = self.display_fullscreen != fullscreen;
        self.display_fullscreen = fullscreen;
        changed
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn class(&self) -> ViewportClass {
        self.class
    }

    pub fn is_display_fullscreen(&self) -> bool {
        self.display_fullscreen
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resize_reports_class_transitions() {
        let mut viewport = ViewportClassifier::new(1280, false);
        assert_eq!(viewport.class(), ViewportClass::Desktop);

        let change = viewport.on_resize(800);
        assert!(change.class_changed());
        assert!(!change.crossed_mobile_boundary());

        let change = viewport.on_resize(500);
        assert_eq!(change.previous, ViewportClass::Tablet);
        assert_eq!(change.current, ViewportClass::Mobile);
        assert!(change.crossed_mobile_boundary());

        let change = viewport.on_resize(600);
        assert!(!change.class_changed());
        assert_eq!(viewport.width(), 600);
    }

    #[test]
    fn display_mode_tracks_last_notification() {
        let mut viewport = ViewportClassifier::new(1024, false);
        assert!(viewport.on_display_mode_change(true));
        assert!(!viewport.on_display_mode_change(true));
        assert!(viewport.is_display_fullscreen());
        assert!(viewport.on_display_mode_change(false));
    }
}
