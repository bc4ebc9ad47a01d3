use serde::{Deserialize, Serialize};

/// Behavioral phase of the scroll/pan machine, derived from its scalars.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScrollPhase {
    Idle,
    Coasting,
    Dragging,
}

/// Tuning for wheel coasting and pointer-drag panning.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScrollPanConfig {
    /// Wheel delta to initial coasting velocity multiplier.
    pub velocity_scale: f64,
    /// Multiplicative velocity decay applied after each committed frame step.
    pub friction: f64,
    /// Coasting stops once `abs(velocity)` is at or below this threshold.
    pub stop_velocity_abs: f64,
    /// Pointer walk amplification while dragging.
    pub drag_multiplier: f64,
}

impl Default for ScrollPanConfig {
    fn default() -> Self {
        Self {
            velocity_scale: 0.8,
            friction: 0.85,
            stop_velocity_abs: 0.1,
            drag_multiplier: 1.5,
        }
    }
}

/// Live scrollable-viewport geometry.
///
/// Read fresh from the host for every transition; layout can change between
/// frames, so nothing here is cached by the machine.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ViewportGeometry {
    /// Full content width.
    pub scroll_width: f64,
    /// Visible width.
    pub client_width: f64,
    /// Viewport left edge in page coordinates.
    pub left_edge: f64,
}

impl ViewportGeometry {
    #[must_use]
    pub fn new(scroll_width: f64, client_width: f64, left_edge: f64) -> Self {
        Self {
            scroll_width,
            client_width,
            left_edge,
        }
    }

    /// Largest valid scroll offset; non-positive when content fits.
    #[must_use]
    pub fn max_scroll(self) -> f64 {
        self.scroll_width - self.client_width
    }
}

/// Deterministic scroll/pan state machine for one horizontal viewport.
///
/// Owns the scroll offset, the coasting velocity, and the drag anchors.
/// Every transition takes the current [`ViewportGeometry`] and a
/// [`ScrollPanConfig`]; the machine performs no side effects, so bindings
/// decide how committed offsets reach the host surface.
///
/// Invariant: `offset` stays within `[0, max(max_scroll, 0)]` after every
/// transition.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ScrollPanState {
    offset: f64,
    velocity: f64,
    dragging: bool,
    drag_anchor_pointer_x: f64,
    drag_anchor_offset: f64,
}

impl ScrollPanState {
    #[must_use]
    pub fn offset(self) -> f64 {
        self.offset
    }

    #[must_use]
    pub fn velocity(self) -> f64 {
        self.velocity
    }

    #[must_use]
    pub fn is_dragging(self) -> bool {
        self.dragging
    }

    #[must_use]
    pub fn phase(self, config: ScrollPanConfig) -> ScrollPhase {
        if self.dragging {
            ScrollPhase::Dragging
        } else if self.velocity.abs() > config.stop_velocity_abs {
            ScrollPhase::Coasting
        } else {
            ScrollPhase::Idle
        }
    }

    /// Adopts the offset currently reported by the host surface.
    pub fn sync_offset(&mut self, offset: f64) {
        self.offset = offset;
    }

    /// Applies a wheel/trackpad delta.
    ///
    /// Arms coasting (`velocity = delta * velocity_scale`) only when the
    /// target offset `offset + delta` stays inside `[0, max_scroll]`;
    /// otherwise the input is ignored entirely, a hard stop at the edges.
    /// No-op while dragging or when the content fits the viewport.
    ///
    /// Returns `true` when coasting was armed and a frame step should be
    /// scheduled (cancelling any step already scheduled).
    #[must_use]
    pub fn on_wheel(
        &mut self,
        delta: f64,
        geometry: ViewportGeometry,
        config: ScrollPanConfig,
    ) -> bool {
        if self.dragging {
            return false;
        }
        let max_scroll = geometry.max_scroll();
        if max_scroll <= 0.0 {
            return false;
        }
        let target = self.offset + delta;
        if !(0.0..=max_scroll).contains(&target) {
            return false;
        }

        self.velocity = delta * config.velocity_scale;
        true
    }

    /// Enters the dragging phase, capturing the pointer anchor and the
    /// current offset. Clears any coasting velocity so the interrupted coast
    /// cannot resume when the drag ends.
    pub fn begin_drag(&mut self, pointer_page_x: f64, geometry: ViewportGeometry) {
        self.drag_anchor_pointer_x = pointer_page_x - geometry.left_edge;
        self.drag_anchor_offset = self.offset;
        self.dragging = true;
        self.velocity = 0.0;
    }

    /// Follows the pointer while dragging.
    ///
    /// The walk is amplified by `drag_multiplier` relative to raw pointer
    /// movement and the resulting offset is clamped to the valid range.
    /// Returns the committed offset, or `None` when not dragging.
    pub fn drag_to(
        &mut self,
        pointer_page_x: f64,
        geometry: ViewportGeometry,
        config: ScrollPanConfig,
    ) -> Option<f64> {
        if !self.dragging {
            return None;
        }

        let pointer_x = pointer_page_x - geometry.left_edge;
        let walk = (pointer_x - self.drag_anchor_pointer_x) * config.drag_multiplier;
        let target = self.drag_anchor_offset - walk;
        self.offset = target.min(geometry.max_scroll()).max(0.0);
        Some(self.offset)
    }

    /// Leaves the dragging phase.
    ///
    /// A drag never imparts velocity, so the machine lands in Idle; only
    /// wheel input produces inertia. Returns whether a drag was active.
    pub fn end_drag(&mut self) -> bool {
        let was_dragging = self.dragging;
        self.dragging = false;
        was_dragging
    }

    /// Advances one coasting frame.
    ///
    /// Commits `offset + velocity` and decays the velocity by `friction`
    /// when the step stays in bounds. Stops (velocity zeroed, nothing
    /// committed) when the velocity is at or below the stop threshold or the
    /// next step would leave the valid range; the last valid offset remains
    /// in effect.
    ///
    /// Returns the committed offset, or `None` when coasting stopped; `None`
    /// means no further frame should be scheduled.
    pub fn step(&mut self, geometry: ViewportGeometry, config: ScrollPanConfig) -> Option<f64> {
        if self.velocity.abs() <= config.stop_velocity_abs {
            self.velocity = 0.0;
            return None;
        }

        let next = self.offset + self.velocity;
        if !(0.0..=geometry.max_scroll()).contains(&next) {
            self.velocity = 0.0;
            return None;
        }

        self.offset = next;
        self.velocity *= config.friction;
        Some(self.offset)
    }
}
