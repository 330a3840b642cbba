//! Horizontal swipe detection for the release carousel

/// Minimum horizontal travel, in pixels, for a swipe.
pub const SWIPE_THRESHOLD: f32 = 50.0;
/// Vertical travel must stay below this fraction of the horizontal travel.
pub const VERTICAL_TO_HORIZONTAL_RATIO: f32 = 0.75;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SwipeDirection {
    /// Finger moved right to left: show the next release.
    Left,
    /// Finger moved left to right: show the previous release.
    Right,
}

/// Remembers where a touch began until it ends
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SwipeTracker {
    start: Option<(f32, f32)>,
}

impl SwipeTracker {
    pub fn is_tracking(&self) -> bool {
        self.start.is_some()
    }

    /// `enabled` is false when the carousel is not on screen.
    pub fn touch_start(&mut self, x: f32, y: f32, enabled: bool) {
        if enabled {
            self.start = Some((x, y));
        }
    }

    pub fn touch_end(&mut self, x: f32, y: f32, enabled: bool) -> Option<SwipeDirection> {
        let start = self.start.take();
        if !enabled {
            return None;
        }
        let (start_x, start_y) = start?;
        classify(x - start_x, y - start_y)
    }

    pub fn cancel(&mut self) {
        self.start = None;
    }
}

fn classify(delta_x: f32, delta_y: f32) -> Option<SwipeDirection> {
    let horizontal = delta_x.abs();
    if horizontal > SWIPE_THRESHOLD && delta_y.abs() < horizontal * VERTICAL_TO_HORIZONTAL_RATIO {
        Some(if delta_x < 0.0 {
            SwipeDirection::Left
        } else {
            SwipeDirection::Right
        })
    } else {
        None
    }
}
