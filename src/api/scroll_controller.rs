use tracing::trace;

use crate::interaction::{ScrollPanConfig, ScrollPanState, ScrollPhase};
use crate::platform::{FrameHandle, FrameScheduler, ScrollViewport, SelectionGuard};

/// Binds the scroll/pan machine to one host viewport.
///
/// The controller owns the pure machine plus the side-effect discipline the
/// machine itself stays free of: at most one frame callback in flight
/// (cancel before reschedule), strictly paired selection suppression, and
/// explicit no-ops whenever no viewport is attached. Hosts feed it raw
/// wheel/pointer events and call [`advance`](Self::advance) from each frame
/// callback it requested.
#[derive(Debug)]
pub struct ScrollPanController<V, H>
where
    H: FrameScheduler + SelectionGuard,
{
    state: ScrollPanState,
    config: ScrollPanConfig,
    viewport: Option<V>,
    host: H,
    pending_frame: Option<FrameHandle>,
    selection_held: bool,
}

impl<V, H> ScrollPanController<V, H>
where
    V: ScrollViewport,
    H: FrameScheduler + SelectionGuard,
{
    #[must_use]
    pub fn new(host: H, config: ScrollPanConfig) -> Self {
        Self {
            state: ScrollPanState::default(),
            config,
            viewport: None,
            host,
            pending_frame: None,
            selection_held: false,
        }
    }

    /// Binds a viewport, seeding the machine from its current scroll offset.
    pub fn attach_viewport(&mut self, viewport: V) {
        self.state.sync_offset(viewport.scroll_left());
        self.viewport = Some(viewport);
    }

    /// Unbinds and returns the viewport, releasing every held resource.
    ///
    /// Safe to call mid-drag or mid-coast: the pending frame is cancelled,
    /// the selection guard released, and the drag state cleared, so nothing
    /// keeps driving a surface the controller no longer owns.
    pub fn detach_viewport(&mut self) -> Option<V> {
        self.cancel_pending_frame();
        self.release_selection();
        let _ = self.state.end_drag();
        self.viewport.take()
    }

    #[must_use]
    pub fn has_viewport(&self) -> bool {
        self.viewport.is_some()
    }

    #[must_use]
    pub fn state(&self) -> ScrollPanState {
        self.state
    }

    #[must_use]
    pub fn phase(&self) -> ScrollPhase {
        self.state.phase(self.config)
    }

    /// Whether a frame callback is currently in flight.
    #[must_use]
    pub fn is_frame_pending(&self) -> bool {
        self.pending_frame.is_some()
    }

    #[must_use]
    pub fn host(&self) -> &H {
        &self.host
    }

    #[must_use]
    pub fn viewport(&self) -> Option<&V> {
        self.viewport.as_ref()
    }

    /// Applies a wheel/trackpad delta; arms coasting when in bounds.
    pub fn on_wheel(&mut self, delta: f64) {
        let Some(viewport) = self.viewport.as_ref() else {
            return;
        };
        let geometry = viewport.geometry();
        if self.state.on_wheel(delta, geometry, self.config) {
            trace!(delta, velocity = self.state.velocity(), "wheel armed coast");
            self.cancel_pending_frame();
            self.pending_frame = Some(self.host.request_frame());
        }
    }

    /// Begins a pointer drag, suppressing document text selection.
    pub fn on_pointer_down(&mut self, pointer_page_x: f64) {
        let Some(viewport) = self.viewport.as_ref() else {
            return;
        };
        let geometry = viewport.geometry();
        self.cancel_pending_frame();
        self.state.begin_drag(pointer_page_x, geometry);
        if !self.selection_held {
            self.host.suppress_selection();
            self.selection_held = true;
        }
        trace!(pointer_page_x, "drag started");
    }

    /// Follows the pointer while dragging, writing the offset through.
    pub fn on_pointer_move(&mut self, pointer_page_x: f64) {
        let Some(viewport) = self.viewport.as_mut() else {
            return;
        };
        let geometry = viewport.geometry();
        if let Some(offset) = self.state.drag_to(pointer_page_x, geometry, self.config) {
            viewport.set_scroll_left(offset);
        }
    }

    /// Ends a drag; no residual velocity is imparted.
    pub fn on_pointer_up(&mut self) {
        if self.viewport.is_none() {
            return;
        }
        if self.state.end_drag() {
            trace!("drag ended");
        }
        self.release_selection();
    }

    /// The pointer leaving the viewport ends the drag the same way a release
    /// does; selection must be restored on this exit path too.
    pub fn on_pointer_leave(&mut self) {
        self.on_pointer_up();
    }

    /// Advances one coasting frame; call from the host's frame callback.
    ///
    /// Consumes the pending handle first so a stale callback that fires after
    /// cancellation (or after coasting already stopped) is a no-op. While the
    /// machine keeps moving, the next frame is requested before returning.
    pub fn advance(&mut self) {
        if self.pending_frame.take().is_none() {
            return;
        }
        let Some(viewport) = self.viewport.as_mut() else {
            return;
        };
        let geometry = viewport.geometry();
        match self.state.step(geometry, self.config) {
            Some(offset) => {
                viewport.set_scroll_left(offset);
                self.pending_frame = Some(self.host.request_frame());
            }
            None => {
                trace!("coasting stopped");
            }
        }
    }

    fn cancel_pending_frame(&mut self) {
        if let Some(handle) = self.pending_frame.take() {
            self.host.cancel_frame(handle);
        }
    }

    fn release_selection(&mut self) {
        if self.selection_held {
            self.host.restore_selection();
            self.selection_held = false;
        }
    }
}

impl<V, H> Drop for ScrollPanController<V, H>
where
    H: FrameScheduler + SelectionGuard,
{
    fn drop(&mut self) {
        // Teardown mid-drag must not leak the suppressed selection or leave
        // a frame callback driving a detached surface.
        if self.selection_held {
            self.host.restore_selection();
            self.selection_held = false;
        }
        if let Some(handle) = self.pending_frame.take() {
            self.host.cancel_frame(handle);
        }
    }
}
