// Interaction controller: consumes pointer events, commits layout moves
// under the bounds gate, and tells the host when to repaint. It never
// paints anything itself.

mod tests;

use pinboard_core::{PointerEvent, Rect, Vec2};
use pinboard_layout::{BoardLayout, DragSet};

// ──────────────────────────────────────────────
// Signals
// ──────────────────────────────────────────────

/// What the host should do after an event is processed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Signal {
    /// Nothing changed; no redraw needed.
    None,
    /// The layout or drag decoration changed; redraw the surface.
    Repaint,
}

// ──────────────────────────────────────────────
// Drag state machine
// ──────────────────────────────────────────────

/// Drag gesture state. A press always enters `Dragging`, even when it hit
/// nothing; moves then no-op on the empty set until release. The drag set
/// snapshot lives here and dies with the gesture.
#[derive(Debug, Clone, PartialEq)]
pub enum DragState {
    Idle,
    Dragging {
        drag_set: DragSet,
        /// Press position in surface-local coordinates.
        press: Vec2,
    },
}

pub struct Controller {
    state: DragState,
}

impl Controller {
    pub fn new() -> Self {
        Self {
            state: DragState::Idle,
        }
    }

    pub fn state(&self) -> &DragState {
        &self.state
    }

    /// The active drag set, if a gesture is in progress. The renderer uses
    /// this to decorate grabbed images.
    pub fn drag_set(&self) -> Option<&DragSet> {
        match &self.state {
            DragState::Dragging { drag_set, .. } => Some(drag_set),
            DragState::Idle => None,
        }
    }

    /// Process one pointer event against the layout. `surface` is the
    /// drawing surface rect in the same coordinate space as the event
    /// positions; its origin is subtracted before any hit-testing or delta
    /// computation.
    ///
    /// Events with non-finite coordinates are dropped: there is no durable
    /// state a single bad event could corrupt, so ignoring is safe.
    pub fn process(
        &mut self,
        event: PointerEvent,
        layout: &mut BoardLayout,
        surface: Rect,
    ) -> Signal {
        match event {
            PointerEvent::Down { position } => self.on_down(position, layout, surface),
            PointerEvent::Move { position } => self.on_move(position, layout, surface),
            PointerEvent::Up { .. } | PointerEvent::Leave => self.on_release(),
        }
    }

    fn on_down(&mut self, position: Vec2, layout: &BoardLayout, surface: Rect) -> Signal {
        if !position.is_finite() {
            return Signal::None;
        }
        let press = Vec2::new(position.x - surface.x, position.y - surface.y);
        self.state = DragState::Dragging {
            drag_set: layout.hit_test(press),
            press,
        };
        Signal::None
    }

    fn on_move(&mut self, position: Vec2, layout: &mut BoardLayout, surface: Rect) -> Signal {
        if !position.is_finite() {
            return Signal::None;
        }
        let (drag_set, press) = match &self.state {
            DragState::Dragging { drag_set, press } if !drag_set.is_empty() => {
                (drag_set, *press)
            }
            _ => return Signal::None,
        };

        let point = Vec2::new(position.x - surface.x, position.y - surface.y);
        let delta = Vec2::new(point.x - press.x, point.y - press.y);
        if delta.x == 0.0 && delta.y == 0.0 {
            return Signal::None;
        }

        let candidate = layout.propose_move(drag_set, delta);
        if candidate.within_bounds(surface) {
            *layout = candidate;
            Signal::Repaint
        } else {
            // Rejected proposal: the layout stays at its last committed
            // state. Normal control flow, not an error.
            Signal::None
        }
    }

    fn on_release(&mut self) -> Signal {
        match std::mem::replace(&mut self.state, DragState::Idle) {
            // Repaint clears the drag decoration; an empty set drew none.
            DragState::Dragging { drag_set, .. } if !drag_set.is_empty() => Signal::Repaint,
            _ => Signal::None,
        }
    }
}

impl Default for Controller {
    fn default() -> Self {
        Self::new()
    }
}
