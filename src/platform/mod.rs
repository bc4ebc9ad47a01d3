//! Host-environment seams.
//!
//! The scroll controller never touches a real DOM, GTK widget, or terminal
//! directly; it drives these traits. Headless implementations live here so
//! the controller is fully testable without a UI toolkit.

mod headless;

pub use headless::{HeadlessViewport, NullScrollHost};

use crate::interaction::ViewportGeometry;

/// Opaque identifier of one scheduled frame callback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FrameHandle(u64);

impl FrameHandle {
    #[must_use]
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    #[must_use]
    pub const fn raw(self) -> u64 {
        self.0
    }
}

/// Contract implemented by any horizontally scrollable host surface.
///
/// Geometry is consulted per call rather than cached: layout can change
/// between any two events or frames.
pub trait ScrollViewport {
    fn scroll_left(&self) -> f64;
    fn set_scroll_left(&mut self, offset: f64);
    fn scroll_width(&self) -> f64;
    fn client_width(&self) -> f64;
    /// Left edge in page coordinates.
    fn offset_left(&self) -> f64;

    fn geometry(&self) -> ViewportGeometry {
        ViewportGeometry::new(self.scroll_width(), self.client_width(), self.offset_left())
    }
}

/// "Schedule work for the next display refresh" primitive.
///
/// Every scheduled callback is identified by a cancellable handle; the
/// controller cancels before rescheduling so at most one physics driver is
/// ever in flight.
pub trait FrameScheduler {
    fn request_frame(&mut self) -> FrameHandle;
    fn cancel_frame(&mut self, handle: FrameHandle);
}

/// Document-level text-selection suppression used while dragging.
///
/// Acquire/release calls are strictly paired by the controller, including on
/// teardown, so a host never leaks the suppressed state.
pub trait SelectionGuard {
    fn suppress_selection(&mut self);
    fn restore_selection(&mut self);
}
