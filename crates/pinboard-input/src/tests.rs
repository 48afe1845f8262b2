#[cfg(test)]
mod tests {
    use crate::{Controller, DragState, Signal};
    use pinboard_core::{PointerEvent, Rect, Size, Vec2};
    use pinboard_layout::BoardLayout;

    const SURFACE: Rect = Rect {
        x: 0.0,
        y: 0.0,
        width: 800.0,
        height: 450.0,
    };

    fn layout_of(widths_heights: &[(f32, f32)]) -> BoardLayout {
        let sizes: Vec<Size> = widths_heights
            .iter()
            .map(|&(w, h)| Size::new(w, h))
            .collect();
        BoardLayout::from_image_sizes(&sizes).unwrap()
    }

    fn down(x: f32, y: f32) -> PointerEvent {
        PointerEvent::Down {
            position: Vec2::new(x, y),
        }
    }

    fn mv(x: f32, y: f32) -> PointerEvent {
        PointerEvent::Move {
            position: Vec2::new(x, y),
        }
    }

    fn up(x: f32, y: f32) -> PointerEvent {
        PointerEvent::Up {
            position: Vec2::new(x, y),
        }
    }

    // ──────────────────────────────────────────
    // Press
    // ──────────────────────────────────────────

    #[test]
    fn test_press_on_image_grabs_it() {
        let mut layout = layout_of(&[(100.0, 50.0)]);
        let mut ctl = Controller::new();

        let signal = ctl.process(down(50.0, 25.0), &mut layout, SURFACE);
        assert_eq!(signal, Signal::None);

        let drag = ctl.drag_set().expect("press should enter Dragging");
        assert_eq!(drag.len(), 1);
        assert!(drag.contains(0));
    }

    #[test]
    fn test_press_on_empty_area_still_enters_dragging() {
        let mut layout = layout_of(&[(100.0, 50.0)]);
        let mut ctl = Controller::new();

        ctl.process(down(500.0, 300.0), &mut layout, SURFACE);
        let drag = ctl.drag_set().expect("empty-hit press still enters Dragging");
        assert!(drag.is_empty());
    }

    #[test]
    fn test_press_translates_surface_offset() {
        let surface = Rect::new(100.0, 50.0, 800.0, 450.0);
        let mut layout = layout_of(&[(100.0, 50.0)]);
        let mut ctl = Controller::new();

        // Window position (150, 75) is surface-local (50, 25) → inside.
        ctl.process(down(150.0, 75.0), &mut layout, surface);
        assert!(ctl.drag_set().unwrap().contains(0));
    }

    #[test]
    fn test_repress_replaces_drag_set() {
        // A second press mid-gesture re-runs the hit test, as the host's
        // mouse-down handler always did.
        let mut layout = layout_of(&[(100.0, 50.0)]);
        let mut ctl = Controller::new();

        ctl.process(down(50.0, 25.0), &mut layout, SURFACE);
        assert_eq!(ctl.drag_set().unwrap().len(), 1);

        ctl.process(down(500.0, 300.0), &mut layout, SURFACE);
        assert!(ctl.drag_set().unwrap().is_empty());
    }

    // ──────────────────────────────────────────
    // Move
    // ──────────────────────────────────────────

    #[test]
    fn test_valid_move_commits_and_repaints() {
        let mut layout = layout_of(&[(100.0, 50.0)]);
        let mut ctl = Controller::new();

        ctl.process(down(50.0, 25.0), &mut layout, SURFACE);
        let signal = ctl.process(mv(60.0, 45.0), &mut layout, SURFACE);

        assert_eq!(signal, Signal::Repaint);
        assert_eq!(layout.placements()[0].x, 10.0);
        assert_eq!(layout.placements()[0].y, 20.0);
    }

    #[test]
    fn test_zero_delta_move_is_noop() {
        let mut layout = layout_of(&[(100.0, 50.0)]);
        let before = layout.clone();
        let mut ctl = Controller::new();

        ctl.process(down(50.0, 25.0), &mut layout, SURFACE);
        let signal = ctl.process(mv(50.0, 25.0), &mut layout, SURFACE);

        assert_eq!(signal, Signal::None);
        assert_eq!(layout, before);
    }

    #[test]
    fn test_move_without_press_is_noop() {
        let mut layout = layout_of(&[(100.0, 50.0)]);
        let before = layout.clone();
        let mut ctl = Controller::new();

        let signal = ctl.process(mv(60.0, 45.0), &mut layout, SURFACE);
        assert_eq!(signal, Signal::None);
        assert_eq!(layout, before);
        assert_eq!(*ctl.state(), DragState::Idle);
    }

    #[test]
    fn test_move_with_empty_drag_set_is_noop() {
        let mut layout = layout_of(&[(100.0, 50.0)]);
        let before = layout.clone();
        let mut ctl = Controller::new();

        ctl.process(down(500.0, 300.0), &mut layout, SURFACE);
        let signal = ctl.process(mv(510.0, 310.0), &mut layout, SURFACE);

        assert_eq!(signal, Signal::None);
        assert_eq!(layout, before);
    }

    #[test]
    fn test_out_of_bounds_move_rejected_whole() {
        // Grab both overlapping images; the proposed move keeps one inside
        // but pushes the other past the right edge → nothing moves.
        let layout_src = layout_of(&[(200.0, 100.0), (50.0, 100.0), (50.0, 100.0)]);
        let mut layout = layout_src.clone();
        let mut ctl = Controller::new();

        // (75, 50) hits placements 0 and 2 (xs 0 and 50).
        ctl.process(down(75.0, 50.0), &mut layout, SURFACE);
        assert_eq!(ctl.drag_set().unwrap().len(), 2);

        // +650 puts placement 0 at x=650, width 200 → right edge 850 > 800.
        let signal = ctl.process(mv(725.0, 50.0), &mut layout, SURFACE);
        assert_eq!(signal, Signal::None);
        assert_eq!(layout, layout_src);
    }

    #[test]
    fn test_overlapping_hits_move_together() {
        let mut layout = layout_of(&[(200.0, 100.0), (50.0, 100.0), (50.0, 100.0)]);
        let mut ctl = Controller::new();

        ctl.process(down(75.0, 50.0), &mut layout, SURFACE);
        let signal = ctl.process(mv(85.0, 70.0), &mut layout, SURFACE);

        assert_eq!(signal, Signal::Repaint);
        // Both grabbed placements shifted by the same (10, 20).
        assert_eq!(layout.placements()[0].x, 10.0);
        assert_eq!(layout.placements()[0].y, 20.0);
        assert_eq!(layout.placements()[2].x, 60.0);
        assert_eq!(layout.placements()[2].y, 20.0);
        // The unhit one stayed put.
        assert_eq!(layout.placements()[1].x, 200.0);
        assert_eq!(layout.placements()[1].y, 0.0);
    }

    #[test]
    fn test_rejected_then_valid_move_uses_anchor() {
        let mut layout = layout_of(&[(100.0, 50.0)]);
        let mut ctl = Controller::new();

        ctl.process(down(50.0, 25.0), &mut layout, SURFACE);

        // Way out of bounds → rejected.
        let signal = ctl.process(mv(2000.0, 25.0), &mut layout, SURFACE);
        assert_eq!(signal, Signal::None);
        assert_eq!(layout.placements()[0].x, 0.0);

        // Back to a valid position → commits relative to the press anchor,
        // not the rejected intermediate.
        let signal = ctl.process(mv(80.0, 25.0), &mut layout, SURFACE);
        assert_eq!(signal, Signal::Repaint);
        assert_eq!(layout.placements()[0].x, 30.0);
    }

    #[test]
    fn test_move_translates_surface_offset() {
        let surface = Rect::new(100.0, 50.0, 800.0, 450.0);
        let mut layout = layout_of(&[(100.0, 50.0)]);
        let mut ctl = Controller::new();

        ctl.process(down(150.0, 75.0), &mut layout, surface);
        ctl.process(mv(160.0, 95.0), &mut layout, surface);

        // Delta in surface-local space is (10, 20); the gate compares
        // surface-local placements against the origin-shifted surface rect,
        // so the placement must clear x >= 100 before a commit can land.
        assert_eq!(layout.placements()[0].x, 0.0);

        // Move far enough that the whole placement sits inside the
        // origin-shifted bounds.
        let signal = ctl.process(mv(300.0, 195.0), &mut layout, surface);
        assert_eq!(signal, Signal::Repaint);
        assert_eq!(layout.placements()[0].x, 150.0);
        assert_eq!(layout.placements()[0].y, 120.0);
    }

    // ──────────────────────────────────────────
    // Release
    // ──────────────────────────────────────────

    #[test]
    fn test_release_clears_state_and_repaints() {
        let mut layout = layout_of(&[(100.0, 50.0)]);
        let mut ctl = Controller::new();

        ctl.process(down(50.0, 25.0), &mut layout, SURFACE);
        let signal = ctl.process(up(50.0, 25.0), &mut layout, SURFACE);

        assert_eq!(signal, Signal::Repaint);
        assert_eq!(*ctl.state(), DragState::Idle);
        assert!(ctl.drag_set().is_none());
    }

    #[test]
    fn test_release_with_empty_drag_set_is_silent() {
        let mut layout = layout_of(&[(100.0, 50.0)]);
        let mut ctl = Controller::new();

        ctl.process(down(500.0, 300.0), &mut layout, SURFACE);
        let signal = ctl.process(up(500.0, 300.0), &mut layout, SURFACE);

        // No decoration was drawn, so there is nothing to clear.
        assert_eq!(signal, Signal::None);
        assert_eq!(*ctl.state(), DragState::Idle);
    }

    #[test]
    fn test_release_while_idle_is_noop() {
        let mut layout = layout_of(&[(100.0, 50.0)]);
        let mut ctl = Controller::new();

        let signal = ctl.process(up(50.0, 25.0), &mut layout, SURFACE);
        assert_eq!(signal, Signal::None);
        assert_eq!(*ctl.state(), DragState::Idle);
    }

    #[test]
    fn test_leave_ends_drag_like_release() {
        let mut layout = layout_of(&[(100.0, 50.0)]);
        let mut ctl = Controller::new();

        ctl.process(down(50.0, 25.0), &mut layout, SURFACE);
        ctl.process(mv(60.0, 45.0), &mut layout, SURFACE);
        let signal = ctl.process(PointerEvent::Leave, &mut layout, SURFACE);

        assert_eq!(signal, Signal::Repaint);
        assert_eq!(*ctl.state(), DragState::Idle);
        // Committed position survives the leave.
        assert_eq!(layout.placements()[0].x, 10.0);
    }

    #[test]
    fn test_full_drag_round_trip() {
        let mut layout = layout_of(&[(100.0, 50.0), (100.0, 50.0)]);
        let original = layout.clone();
        let mut ctl = Controller::new();

        ctl.process(down(50.0, 25.0), &mut layout, SURFACE);
        let signal = ctl.process(mv(250.0, 125.0), &mut layout, SURFACE);
        assert_eq!(signal, Signal::Repaint);
        let signal = ctl.process(up(250.0, 125.0), &mut layout, SURFACE);
        assert_eq!(signal, Signal::Repaint);

        // Placement 0 moved by exactly (200, 100); placement 1 untouched.
        assert_eq!(layout.placements()[0].x, original.placements()[0].x + 200.0);
        assert_eq!(layout.placements()[0].y, original.placements()[0].y + 100.0);
        assert_eq!(layout.placements()[1], original.placements()[1]);
        assert!(ctl.drag_set().is_none());
    }

    // ──────────────────────────────────────────
    // Malformed events
    // ──────────────────────────────────────────

    #[test]
    fn test_non_finite_press_ignored() {
        let mut layout = layout_of(&[(100.0, 50.0)]);
        let mut ctl = Controller::new();

        let signal = ctl.process(down(f32::NAN, 25.0), &mut layout, SURFACE);
        assert_eq!(signal, Signal::None);
        assert_eq!(*ctl.state(), DragState::Idle);
    }

    #[test]
    fn test_non_finite_move_ignored_mid_drag() {
        let mut layout = layout_of(&[(100.0, 50.0)]);
        let mut ctl = Controller::new();

        ctl.process(down(50.0, 25.0), &mut layout, SURFACE);
        let signal = ctl.process(mv(f32::INFINITY, 25.0), &mut layout, SURFACE);

        assert_eq!(signal, Signal::None);
        assert_eq!(layout.placements()[0].x, 0.0);
        // The gesture itself stays alive.
        assert!(ctl.drag_set().is_some());
    }
}
