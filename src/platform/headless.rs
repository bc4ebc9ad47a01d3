use super::{FrameHandle, FrameScheduler, ScrollViewport, SelectionGuard};

/// In-memory scrollable surface used by tests and headless engine usage.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeadlessViewport {
    scroll_left: f64,
    scroll_width: f64,
    client_width: f64,
    offset_left: f64,
}

impl HeadlessViewport {
    #[must_use]
    pub fn new(scroll_width: f64, client_width: f64, offset_left: f64) -> Self {
        Self {
            scroll_left: 0.0,
            scroll_width,
            client_width,
            offset_left,
        }
    }

    /// Simulates a layout change between frames.
    pub fn resize(&mut self, scroll_width: f64, client_width: f64) {
        self.scroll_width = scroll_width;
        self.client_width = client_width;
    }
}

impl ScrollViewport for HeadlessViewport {
    fn scroll_left(&self) -> f64 {
        self.scroll_left
    }

    fn set_scroll_left(&mut self, offset: f64) {
        self.scroll_left = offset;
    }

    fn scroll_width(&self) -> f64 {
        self.scroll_width
    }

    fn client_width(&self) -> f64 {
        self.client_width
    }

    fn offset_left(&self) -> f64 {
        self.offset_left
    }
}

/// No-op frame scheduler and selection guard that records its activity.
///
/// Tests assert against the recorded handles and counters to verify the
/// cancel-before-reschedule discipline and strict suppress/restore pairing.
#[derive(Debug, Default)]
pub struct NullScrollHost {
    next_frame: u64,
    pub requested_frames: Vec<FrameHandle>,
    pub cancelled_frames: Vec<FrameHandle>,
    pub selection_suppressions: usize,
    pub selection_restores: usize,
}

impl NullScrollHost {
    /// Handles requested but not cancelled.
    #[must_use]
    pub fn outstanding_frames(&self) -> usize {
        self.requested_frames
            .len()
            .saturating_sub(self.cancelled_frames.len())
    }

    /// `true` while more suppressions than restores have been issued.
    #[must_use]
    pub fn selection_suppressed(&self) -> bool {
        self.selection_suppressions > self.selection_restores
    }
}

impl FrameScheduler for NullScrollHost {
    fn request_frame(&mut self) -> FrameHandle {
        let handle = FrameHandle::new(self.next_frame);
        self.next_frame += 1;
        self.requested_frames.push(handle);
        handle
    }

    fn cancel_frame(&mut self, handle: FrameHandle) {
        self.cancelled_frames.push(handle);
    }
}

impl SelectionGuard for NullScrollHost {
    fn suppress_selection(&mut self) {
        self.selection_suppressions += 1;
    }

    fn restore_selection(&mut self) {
        self.selection_restores += 1;
    }
}
