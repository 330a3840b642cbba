//! Fullscreen platform seam.
//!
//! Requests are asynchronous and may be refused: `request_fullscreen` only
//! hands back a token. What is actually fullscreen is reported later through
//! [`PlatformEvent::FullscreenChanged`] and read from
//! [`FullscreenHost::fullscreen_element`].

use tokio::sync::mpsc::UnboundedSender;

use super::platform::PlatformEvent;

/// Identity of an embedded game surface.
///
/// The generation changes whenever the surface is rebuilt, so a grant for an
/// older surface never matches the current one.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SurfaceId {
    pub release_index: usize,
    pub generation: u64,
}

/// Pending-request token returned by [`FullscreenHost::request_fullscreen`]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct FullscreenRequest(pub u64);

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("{name}: {message}")]
pub struct FullscreenError {
    pub name: String,
    pub message: String,
}

impl FullscreenError {
    pub fn new(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            message: message.into(),
        }
    }
}

pub trait FullscreenHost {
    /// The surface currently shown fullscreen, if any.
    fn fullscreen_element(&self) -> Option<SurfaceId>;

    fn request_fullscreen(&mut self, surface: SurfaceId) -> FullscreenRequest;

    fn exit_fullscreen(&mut self);

    /// Hosts that care about the available area are told when it changes.
    fn resize(&mut self, _cols: u16, _rows: u16) {}
}

/// Smallest terminal that can present a fullscreen game surface.
pub const MIN_FULLSCREEN_COLS: u16 = 40;
pub const MIN_FULLSCREEN_ROWS: u16 = 12;

/// Fullscreen host backed by the terminal: a granted surface takes over the
/// whole frame.
#[derive(Debug)]
pub struct TerminalFullscreen {
    element: Option<SurfaceId>,
    next_request: u64,
    area: (u16, u16),
    events: Option<UnboundedSender<PlatformEvent>>,
}

impl TerminalFullscreen {
    pub fn new(area: (u16, u16), events: Option<UnboundedSender<PlatformEvent>>) -> Self {
        Self {
            element: None,
            next_request: 0,
            area,
            events,
        }
    }

    fn notify(&self, event: PlatformEvent) {
        if let Some(events) = &self.events {
            let _ = events.send(event);
        }
    }
}

impl FullscreenHost for TerminalFullscreen {
    fn fullscreen_element(&self) -> Option<SurfaceId> {
        self.element
    }

    fn request_fullscreen(&mut self, surface: SurfaceId) -> FullscreenRequest {
        self.next_request += 1;
        let request = FullscreenRequest(self.next_request);
        let (cols, rows) = self.area;

        if cols < MIN_FULLSCREEN_COLS || rows < MIN_FULLSCREEN_ROWS {
            let error = FullscreenError::new(
                "NotAllowedError",
                format!(
                    "terminal is {cols}x{rows}, fullscreen needs at least \
                     {MIN_FULLSCREEN_COLS}x{MIN_FULLSCREEN_ROWS}"
                ),
            );
            self.notify(PlatformEvent::FullscreenRejected { request, error });
            return request;
        }

        self.element = Some(surface);
        self.notify(PlatformEvent::FullscreenChanged);
        request
    }

    fn exit_fullscreen(&mut self) {
        if self.element.take().is_some() {
            self.notify(PlatformEvent::FullscreenChanged);
        }
    }

    fn resize(&mut self, cols: u16, rows: u16) {
        self.area = (cols, rows);
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use tokio::sync::mpsc::unbounded_channel;

    /// Host that records calls and lets the test decide when grants land.
    #[derive(Debug, Default)]
    pub(crate) struct RecordingFullscreen {
        pub element: Option<SurfaceId>,
        pub requested: Vec<SurfaceId>,
        pub exits: usize,
    }

    impl RecordingFullscreen {
        pub fn grant_last(&mut self) -> Option<SurfaceId> {
            self.element = self.requested.last().copied();
            self.element
        }
    }

    impl FullscreenHost for RecordingFullscreen {
        fn fullscreen_element(&self) -> Option<SurfaceId> {
            self.element
        }

        fn request_fullscreen(&mut self, surface: SurfaceId) -> FullscreenRequest {
            self.requested.push(surface);
            FullscreenRequest(self.requested.len() as u64)
        }

        fn exit_fullscreen(&mut self) {
            self.exits += 1;
            self.element = None;
        }
    }

    const SURFACE: SurfaceId = SurfaceId {
        release_index: 0,
        generation: 1,
    };

    #[test]
    fn grant_is_reported_through_the_channel() {
        let (tx, mut rx) = unbounded_channel();
        let mut host = TerminalFullscreen::new((120, 40), Some(tx));

        let request = host.request_fullscreen(SURFACE);
        assert_eq!(request, FullscreenRequest(1));
        assert_eq!(host.fullscreen_element(), Some(SURFACE));
        assert_eq!(rx.try_recv().unwrap(), PlatformEvent::FullscreenChanged);

        host.exit_fullscreen();
        assert_eq!(host.fullscreen_element(), None);
        assert_eq!(rx.try_recv().unwrap(), PlatformEvent::FullscreenChanged);

        host.exit_fullscreen();
        assert!(rx.try_recv().is_err(), "exiting twice notifies once");
    }

    #[test]
    fn small_terminals_reject_the_request() {
        let (tx, mut rx) = unbounded_channel();
        let mut host = TerminalFullscreen::new((30, 10), Some(tx));

        let request = host.request_fullscreen(SURFACE);
        assert_eq!(host.fullscreen_element(), None);
        match rx.try_recv().unwrap() {
            PlatformEvent::FullscreenRejected { request: r, error } => {
                assert_eq!(r, request);
                assert_eq!(error.name, "NotAllowedError");
            }
            other => panic!("unexpected event {other:?}"),
        }
    }
}
