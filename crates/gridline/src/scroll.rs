//! Horizontal scroll control: overflow detection and drag-to-scroll.
//!
//! The controller never measures anything itself. The host reports the
//! viewport through [`Viewport`] after each layout pass, and forwards pointer
//! events with the x coordinate and what was under the pointer.
//!
//! ```text
//!            pointer_down (needs_scroll, non-interactive)
//!   Idle ───────────────────────────────────────────────► Dragging
//!    ▲                                                        │
//!    └──────── pointer_up / pointer_leave / cancel ───────────┘
//! ```
//!
//! While dragging, `scroll_left = origin_scroll_left - (x - origin_x) * speed`,
//! clamped to `[0, scroll_width - client_width]`.

use log::{debug, trace};
use serde::Serialize;

use crate::config::ScrollConfig;

/// Measurement capability of the scroll container.
pub trait Viewport {
    /// Visible width of the container.
    fn client_width(&self) -> u32;
    /// Natural width of the content.
    fn scroll_width(&self) -> u32;
}

/// A plain viewport measurement.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct Measurement {
    pub client_width: u32,
    pub scroll_width: u32,
}

impl Measurement {
    pub fn new(client_width: u32, scroll_width: u32) -> Self {
        Measurement {
            client_width,
            scroll_width,
        }
    }

    pub fn of<V: Viewport + ?Sized>(viewport: &V) -> Self {
        Measurement::new(viewport.client_width(), viewport.scroll_width())
    }

    /// Whether the content overflows the container.
    pub fn overflows(&self) -> bool {
        self.scroll_width > self.client_width
    }

    /// Largest valid scroll offset.
    pub fn max_scroll(&self) -> u32 {
        self.scroll_width.saturating_sub(self.client_width)
    }
}

impl Viewport for Measurement {
    fn client_width(&self) -> u32 {
        self.client_width
    }

    fn scroll_width(&self) -> u32 {
        self.scroll_width
    }
}

/// What the pointer was over when a gesture began.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerTarget {
    /// Table surface, header, or a non-interactive cell area.
    Surface,
    /// A body cell; `interactive` for document, action and clickable
    /// composite cells.
    Cell { interactive: bool },
    /// A button, link or other control.
    Control,
}

impl PointerTarget {
    pub fn is_interactive(self) -> bool {
        match self {
            PointerTarget::Surface => false,
            PointerTarget::Cell { interactive } => interactive,
            PointerTarget::Control => true,
        }
    }
}

/// Overflow mode the host should apply to the scroll container.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Overflow {
    /// Native wheel and touch scrolling enabled.
    Auto,
    /// Nothing to scroll.
    Hidden,
}

#[derive(Clone, Copy, Debug, PartialEq)]
enum DragPhase {
    Idle,
    Dragging { origin_x: f64, origin_scroll_left: f64 },
}

/// Snapshot of the scroll and drag state.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct ScrollState {
    pub needs_scroll: bool,
    pub is_dragging: bool,
    pub drag_origin_x: f64,
    pub drag_origin_scroll_left: f64,
    pub scroll_left: f64,
    pub max_scroll: f64,
    pub overflow: Overflow,
}

/// Drag-to-scroll state machine for one table.
#[derive(Clone, Debug)]
pub struct ScrollController {
    config: ScrollConfig,
    measurement: Measurement,
    needs_scroll: bool,
    scroll_left: f64,
    phase: DragPhase,
    stale: bool,
}

impl Default for ScrollController {
    fn default() -> Self {
        ScrollController::new(ScrollConfig::default())
    }
}

impl ScrollController {
    /// A controller that has not been measured yet.
    pub fn new(config: ScrollConfig) -> Self {
        ScrollController {
            config,
            measurement: Measurement::default(),
            needs_scroll: false,
            scroll_left: 0.0,
            phase: DragPhase::Idle,
            stale: true,
        }
    }

    pub fn config(&self) -> &ScrollConfig {
        &self.config
    }

    pub fn set_config(&mut self, config: ScrollConfig) {
        self.config = config;
    }

    /// Takes a fresh measurement and recomputes `needs_scroll`.
    ///
    /// Returns `true` if `needs_scroll` changed.
    pub fn measure<V: Viewport + ?Sized>(&mut self, viewport: &V) -> bool {
        self.apply(Measurement::of(viewport))
    }

    /// Same as [`ScrollController::measure`] with raw widths.
    pub fn set_extent(&mut self, client_width: u32, scroll_width: u32) -> bool {
        self.apply(Measurement::new(client_width, scroll_width))
    }

    fn apply(&mut self, measurement: Measurement) -> bool {
        let before = self.needs_scroll;
        self.measurement = measurement;
        self.needs_scroll = measurement.overflows();
        self.stale = false;

        if self.needs_scroll {
            self.scroll_left = self.clamp(self.scroll_left);
        } else {
            if self.is_dragging() {
                debug!("scroll: content fits, ending drag");
            }
            self.phase = DragPhase::Idle;
            self.scroll_left = 0.0;
        }

        if before != self.needs_scroll {
            debug!(
                "scroll: needs_scroll {} -> {} (client {}, content {})",
                before, self.needs_scroll, measurement.client_width, measurement.scroll_width
            );
        }
        before != self.needs_scroll
    }

    /// Marks the measurement as outdated, e.g. after a resize or a change
    /// of columns or rows. The host should call [`ScrollController::measure`]
    /// once layout settles.
    pub fn invalidate(&mut self) {
        self.stale = true;
    }

    pub fn is_stale(&self) -> bool {
        self.stale
    }

    pub fn measurement(&self) -> Measurement {
        self.measurement
    }

    pub fn needs_scroll(&self) -> bool {
        self.needs_scroll
    }

    pub fn scroll_left(&self) -> f64 {
        self.scroll_left
    }

    pub fn max_scroll(&self) -> f64 {
        f64::from(self.measurement.max_scroll())
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.phase, DragPhase::Dragging { .. })
    }

    pub fn overflow(&self) -> Overflow {
        if self.needs_scroll {
            Overflow::Auto
        } else {
            Overflow::Hidden
        }
    }

    /// Current state as a plain snapshot.
    pub fn state(&self) -> ScrollState {
        let (origin_x, origin_scroll_left) = match self.phase {
            DragPhase::Idle => (0.0, 0.0),
            DragPhase::Dragging {
                origin_x,
                origin_scroll_left,
            } => (origin_x, origin_scroll_left),
        };
        ScrollState {
            needs_scroll: self.needs_scroll,
            is_dragging: self.is_dragging(),
            drag_origin_x: origin_x,
            drag_origin_scroll_left: origin_scroll_left,
            scroll_left: self.scroll_left,
            max_scroll: self.max_scroll(),
            overflow: self.overflow(),
        }
    }

    /// Handles a pointer press at `x`.
    ///
    /// Starts a drag only when there is something to scroll and the target
    /// is not interactive. Returns `true` if a drag started.
    pub fn pointer_down(&mut self, x: f64, target: PointerTarget) -> bool {
        if !self.needs_scroll || target.is_interactive() {
            return false;
        }
        self.phase = DragPhase::Dragging {
            origin_x: x,
            origin_scroll_left: self.scroll_left,
        };
        debug!("scroll: drag start at x={} scroll_left={}", x, self.scroll_left);
        true
    }

    /// Handles pointer movement. Returns the new offset while dragging.
    pub fn pointer_move(&mut self, x: f64) -> Option<f64> {
        let DragPhase::Dragging {
            origin_x,
            origin_scroll_left,
        } = self.phase
        else {
            return None;
        };
        let delta = (x - origin_x) * self.config.speed_multiplier;
        self.scroll_left = self.clamp(origin_scroll_left - delta);
        trace!("scroll: drag x={} scroll_left={}", x, self.scroll_left);
        Some(self.scroll_left)
    }

    /// Handles a pointer release. Returns `true` if a drag ended.
    pub fn pointer_up(&mut self) -> bool {
        self.end_drag("pointer up")
    }

    /// Handles the pointer leaving the container. Returns `true` if a drag ended.
    pub fn pointer_leave(&mut self) -> bool {
        self.end_drag("pointer leave")
    }

    /// Ends any drag in progress, e.g. on teardown.
    pub fn cancel(&mut self) {
        self.end_drag("cancel");
    }

    fn end_drag(&mut self, reason: &str) -> bool {
        if !self.is_dragging() {
            return false;
        }
        self.phase = DragPhase::Idle;
        debug!("scroll: drag end ({}) scroll_left={}", reason, self.scroll_left);
        true
    }

    /// Applies a horizontal wheel or touch delta. Ignored when nothing
    /// overflows.
    pub fn wheel(&mut self, delta_x: f64) -> Option<f64> {
        if !self.needs_scroll {
            return None;
        }
        self.scroll_left = self.clamp(self.scroll_left + delta_x);
        Some(self.scroll_left)
    }

    /// Syncs the offset after the host scrolled natively.
    pub fn set_scroll_left(&mut self, scroll_left: f64) {
        self.scroll_left = if self.needs_scroll {
            self.clamp(scroll_left)
        } else {
            0.0
        };
    }

    fn clamp(&self, scroll_left: f64) -> f64 {
        if scroll_left.is_nan() {
            return 0.0;
        }
        scroll_left.clamp(0.0, self.max_scroll())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn overflowing() -> ScrollController {
        let mut c = ScrollController::default();
        c.set_extent(500, 1200);
        c
    }

    #[test]
    fn starts_stale_and_idle() {
        let c = ScrollController::default();
        assert!(c.is_stale());
        assert!(!c.needs_scroll());
        assert_eq!(c.overflow(), Overflow::Hidden);
    }

    #[test]
    fn measure_detects_overflow() {
        let mut c = ScrollController::default();
        assert!(c.measure(&Measurement::new(500, 1200)));
        assert!(c.needs_scroll());
        assert!(!c.is_stale());
        assert_eq!(c.max_scroll(), 700.0);
        assert_eq!(c.overflow(), Overflow::Auto);
        // same answer again is not a change
        assert!(!c.set_extent(600, 1200));
    }

    #[test]
    fn exact_fit_does_not_scroll() {
        let mut c = ScrollController::default();
        c.set_extent(800, 800);
        assert!(!c.needs_scroll());
    }

    #[test]
    fn drag_moves_twice_as_fast() {
        let mut c = overflowing();
        c.set_scroll_left(300.0);
        assert!(c.pointer_down(100.0, PointerTarget::Surface));
        assert_eq!(c.pointer_move(80.0), Some(340.0));
        assert_eq!(c.pointer_move(150.0), Some(200.0));
        let state = c.state();
        assert!(state.is_dragging);
        assert_eq!(state.drag_origin_x, 100.0);
        assert_eq!(state.drag_origin_scroll_left, 300.0);
        assert!(c.pointer_up());
        assert!(!c.is_dragging());
        assert_eq!(c.pointer_move(0.0), None);
    }

    #[test]
    fn drag_is_clamped() {
        let mut c = overflowing();
        c.pointer_down(0.0, PointerTarget::Surface);
        assert_eq!(c.pointer_move(100.0), Some(0.0));
        assert_eq!(c.pointer_move(-1000.0), Some(700.0));
    }

    #[test]
    fn interactive_targets_never_drag() {
        let mut c = overflowing();
        assert!(!c.pointer_down(10.0, PointerTarget::Control));
        assert!(!c.pointer_down(10.0, PointerTarget::Cell { interactive: true }));
        assert!(!c.is_dragging());
        assert!(c.pointer_down(10.0, PointerTarget::Cell { interactive: false }));
    }

    #[test]
    fn no_drag_or_wheel_without_overflow() {
        let mut c = ScrollController::default();
        c.set_extent(1000, 900);
        assert!(!c.pointer_down(10.0, PointerTarget::Surface));
        assert_eq!(c.wheel(50.0), None);
        assert_eq!(c.overflow(), Overflow::Hidden);
    }

    #[test]
    fn resize_that_removes_overflow_ends_drag() {
        let mut c = overflowing();
        c.set_scroll_left(400.0);
        c.pointer_down(50.0, PointerTarget::Surface);
        assert!(c.set_extent(1300, 1200));
        assert!(!c.is_dragging());
        assert_eq!(c.scroll_left(), 0.0);
    }

    #[test]
    fn shrinking_content_reclamps_offset() {
        let mut c = overflowing();
        c.set_scroll_left(650.0);
        c.set_extent(500, 900);
        assert_eq!(c.scroll_left(), 400.0);
    }

    #[test]
    fn leave_and_cancel_end_drag() {
        let mut c = overflowing();
        c.pointer_down(0.0, PointerTarget::Surface);
        assert!(c.pointer_leave());
        assert!(!c.pointer_leave());
        c.pointer_down(0.0, PointerTarget::Surface);
        c.cancel();
        assert!(!c.is_dragging());
    }

    #[test]
    fn wheel_scrolls_within_bounds() {
        let mut c = overflowing();
        assert_eq!(c.wheel(250.0), Some(250.0));
        assert_eq!(c.wheel(1000.0), Some(700.0));
        assert_eq!(c.wheel(-5000.0), Some(0.0));
    }

    #[test]
    fn invalidate_marks_stale() {
        let mut c = overflowing();
        assert!(!c.is_stale());
        c.invalidate();
        assert!(c.is_stale());
    }

    #[test]
    fn custom_speed() {
        let mut c = ScrollController::new(ScrollConfig {
            speed_multiplier: 1.0,
        });
        c.set_extent(100, 1000);
        c.set_scroll_left(500.0);
        c.pointer_down(0.0, PointerTarget::Surface);
        assert_eq!(c.pointer_move(30.0), Some(470.0));
    }
}
