// Copyright 2025 the Curvepad Authors
// SPDX-License-Identifier: Apache-2.0

//! Interaction controller: pointer events in, point-set mutations out.
//!
//! The controller owns all editing state: the point set, the active curve
//! mode, the pointer state machine and the cursor readout. Every handler
//! returns `true` when the canvas needs to be redrawn.
//!
//! ```text
//!            down on point                 move (inside canvas)
//!   Idle ───────────────────▶ Dragging ◀──────────────┐
//!    │ ▲                        │  └──────────────────┘
//!    │ └──────── up ────────────┘
//!    │ down elsewhere
//!    ▼
//!   AwaitingClickRelease ── up ──▶ Idle (+ new point if quick)
//! ```

use super::event::{CursorReadout, PointerEvent};
use crate::curve::CurveMode;
use crate::model::{PointId, PointSet};
use crate::render::{self, Renderer};
use crate::settings;
use kurbo::{Point, Size, Vec2};
use std::time::Duration;

/// A point being dragged
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragSession {
    /// The point under the pointer
    pub point: PointId,
    /// Pointer position minus point position at grab time
    pub grab_offset: Vec2,
}

/// Pointer state machine
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Interaction {
    /// No button held
    #[default]
    Idle,
    /// Moving an existing point
    Dragging(DragSession),
    /// Pressed on empty canvas; a quick release creates a point
    AwaitingClickRelease { pressed_at: Duration },
}

/// Editing state of one canvas
#[derive(Debug, Clone)]
pub struct InteractionController {
    points: PointSet,
    mode: CurveMode,
    state: Interaction,
    bounds: Size,
    readout: CursorReadout,
    hit_radius: f64,
    click_threshold: Duration,
}

impl InteractionController {
    pub fn new(points: PointSet, mode: CurveMode, bounds: Size) -> Self {
        Self {
            points,
            mode,
            state: Interaction::Idle,
            bounds,
            readout: CursorReadout::Unknown,
            hit_radius: settings::interaction::HIT_RADIUS,
            click_threshold: settings::interaction::CLICK_THRESHOLD,
        }
    }

    /// Controller with the four starting points for a canvas of `bounds`
    pub fn seeded(mode: CurveMode, bounds: Size) -> Self {
        Self::new(PointSet::seeded(bounds.width), mode, bounds)
    }

    pub fn points(&self) -> &PointSet {
        &self.points
    }

    pub fn mode(&self) -> CurveMode {
        self.mode
    }

    pub fn state(&self) -> Interaction {
        self.state
    }

    pub fn readout(&self) -> CursorReadout {
        self.readout
    }

    pub fn bounds(&self) -> Size {
        self.bounds
    }

    /// Update the canvas bounds used for the inside-canvas checks
    pub fn resize(&mut self, bounds: Size) {
        self.bounds = bounds;
    }

    /// Whether `position` lies on the canvas (edges included)
    pub fn contains(&self, position: Point) -> bool {
        position.x >= 0.0
            && position.x <= self.bounds.width
            && position.y >= 0.0
            && position.y <= self.bounds.height
    }

    /// Handle a primary button press
    pub fn pointer_down(&mut self, event: PointerEvent) -> bool {
        if self.state != Interaction::Idle {
            // The matching release never arrived; start over.
            tracing::debug!(
                "[InteractionController::pointer_down] dropping stale state {:?}",
                self.state
            );
            self.state = Interaction::Idle;
        }

        match self.points.hit_test(event.position, self.hit_radius) {
            Some(id) => {
                let Some(point) = self.points.get(id) else {
                    return false;
                };
                tracing::debug!("Collision with {}", point.name);
                self.state = Interaction::Dragging(DragSession {
                    point: id,
                    grab_offset: event.position - point.position,
                });
            }
            None => {
                self.state = Interaction::AwaitingClickRelease {
                    pressed_at: event.timestamp,
                };
            }
        }
        false
    }

    /// Handle pointer motion, with or without a button held
    pub fn pointer_move(&mut self, event: PointerEvent) -> bool {
        let inside = self.contains(event.position);
        self.readout = if inside {
            CursorReadout::At(event.position)
        } else {
            CursorReadout::Unknown
        };

        let Interaction::Dragging(drag) = self.state else {
            return false;
        };
        if !inside {
            // Ignored until the pointer comes back over the canvas
            return false;
        }

        self.points
            .mutate(drag.point, event.position - drag.grab_offset)
    }

    /// The pointer left the canvas without a button held
    pub fn pointer_left(&mut self) -> bool {
        self.readout = CursorReadout::Unknown;
        false
    }

    /// Handle a primary button release
    pub fn pointer_up(&mut self, event: PointerEvent) -> bool {
        match std::mem::take(&mut self.state) {
            Interaction::Idle => false,
            Interaction::Dragging(drag) => {
                tracing::debug!(
                    "[InteractionController::pointer_up] drag of {:?} ended",
                    drag.point
                );
                false
            }
            Interaction::AwaitingClickRelease { pressed_at } => {
                let held = event.timestamp.saturating_sub(pressed_at);
                if held > self.click_threshold {
                    tracing::debug!(
                        "[InteractionController::pointer_up] held {:?}, not a click",
                        held
                    );
                    return false;
                }
                self.points.append(event.position);
                true
            }
        }
    }

    /// Abandon any press in progress (e.g. pointer capture lost)
    pub fn cancel(&mut self) -> bool {
        self.state = Interaction::Idle;
        false
    }

    /// Switch the active curve mode
    ///
    /// Points and any drag in progress are left untouched.
    pub fn set_mode(&mut self, mode: CurveMode) -> bool {
        if mode != self.mode {
            tracing::info!("Curve mode changed: {} -> {}", self.mode, mode);
        }
        self.mode = mode;
        true
    }

    /// Draw the current frame
    pub fn draw<R: Renderer>(&self, renderer: &mut R) {
        render::draw_frame(renderer, &self.points, self.mode);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::curve::eval::SegmentEvaluator;
    use crate::render::testing::RecordingRenderer;

    const WIDTH: f64 = 1200.0;
    const HEIGHT: f64 = 700.0;

    fn controller() -> InteractionController {
        InteractionController::seeded(CurveMode::Bezier3, Size::new(WIDTH, HEIGHT))
    }

    fn at(x: f64, y: f64, ms: u64) -> PointerEvent {
        PointerEvent::new((x, y), Duration::from_millis(ms))
    }

    #[test]
    fn quick_click_on_empty_canvas_adds_point() {
        let mut c = controller();
        assert!(!c.pointer_down(at(600.0, 500.0, 1000)));
        assert!(matches!(c.state(), Interaction::AwaitingClickRelease { .. }));
        assert!(c.pointer_up(at(600.0, 500.0, 1300)));

        assert_eq!(c.points().len(), 5);
        let added = c.points().as_slice().last().unwrap();
        assert_eq!(added.name, "point 5");
        assert_eq!(added.position, Point::new(600.0, 500.0));
        assert_eq!(c.state(), Interaction::Idle);
    }

    #[test]
    fn slow_click_adds_nothing() {
        let mut c = controller();
        c.pointer_down(at(600.0, 500.0, 1000));
        assert!(!c.pointer_up(at(600.0, 500.0, 1301)));
        assert_eq!(c.points().len(), 4);
        assert_eq!(c.state(), Interaction::Idle);
    }

    #[test]
    fn press_on_point_starts_drag_with_offset() {
        let mut c = controller();
        let target = c.points().as_slice()[1].clone();
        c.pointer_down(at(305.0, 296.0, 0));

        match c.state() {
            Interaction::Dragging(drag) => {
                assert_eq!(drag.point, target.id);
                assert_eq!(drag.grab_offset, Vec2::new(5.0, -4.0));
            }
            other => panic!("expected drag, got {other:?}"),
        }
    }

    #[test]
    fn drag_moves_point_keeping_offset() {
        let mut c = controller();
        let target = c.points().as_slice()[1].id;
        c.pointer_down(at(305.0, 296.0, 0));
        assert!(c.pointer_move(at(405.0, 396.0, 16)));

        assert_eq!(c.points().get(target).unwrap().position, Point::new(400.0, 400.0));
        assert!(!c.pointer_up(at(405.0, 396.0, 2000)));
        assert_eq!(c.state(), Interaction::Idle);
        // A long drag never creates points
        assert_eq!(c.points().len(), 4);
    }

    #[test]
    fn drag_outside_canvas_is_ignored_then_resumes() {
        let mut c = controller();
        let target = c.points().as_slice()[0].id;
        c.pointer_down(at(200.0, 100.0, 0));

        assert!(!c.pointer_move(at(-50.0, 100.0, 10)));
        assert_eq!(c.points().get(target).unwrap().position, Point::new(200.0, 100.0));
        assert!(matches!(c.state(), Interaction::Dragging(_)));
        assert_eq!(c.readout(), CursorReadout::Unknown);

        assert!(c.pointer_move(at(10.0, 20.0, 20)));
        assert_eq!(c.points().get(target).unwrap().position, Point::new(10.0, 20.0));
        assert_eq!(c.readout(), CursorReadout::At(Point::new(10.0, 20.0)));
    }

    #[test]
    fn quick_click_released_past_edge_still_adds_point() {
        let mut c = controller();
        c.pointer_down(at(1195.0, 650.0, 0));
        assert!(c.pointer_up(at(1205.0, 650.0, 100)));
        assert_eq!(c.points().len(), 5);
        let added = c.points().as_slice().last().unwrap();
        assert_eq!(added.position, Point::new(1205.0, 650.0));
    }

    #[test]
    fn release_outside_canvas_ends_drag() {
        let mut c = controller();
        c.pointer_down(at(200.0, 100.0, 0));
        c.pointer_up(at(5000.0, -3.0, 50));
        assert_eq!(c.state(), Interaction::Idle);
        assert!(!c.pointer_move(at(300.0, 300.0, 60)));
    }

    #[test]
    fn first_inserted_point_wins_when_overlapping() {
        let mut points = PointSet::new();
        let first = points.append(Point::new(50.0, 50.0));
        points.append(Point::new(50.0, 50.0));
        let mut c = InteractionController::new(points, CurveMode::Line, Size::new(100.0, 100.0));
        c.pointer_down(at(50.0, 50.0, 0));
        assert!(matches!(c.state(), Interaction::Dragging(d) if d.point == first));
    }

    #[test]
    fn readout_tracks_pointer_without_mutation() {
        let mut c = controller();
        let before = c.points().positions();
        assert!(!c.pointer_move(at(WIDTH, HEIGHT, 0)));
        assert_eq!(c.readout(), CursorReadout::At(Point::new(WIDTH, HEIGHT)));
        assert!(!c.pointer_move(at(WIDTH + 1.0, 10.0, 1)));
        assert_eq!(c.readout(), CursorReadout::Unknown);
        assert!(!c.pointer_move(at(5.0, 6.0, 2)));
        assert!(!c.pointer_left());
        assert_eq!(c.readout(), CursorReadout::Unknown);
        assert_eq!(c.points().positions(), before);
    }

    #[test]
    fn mode_switch_keeps_points_and_drag() {
        let mut c = controller();
        let before = c.points().positions();
        c.pointer_down(at(300.0, 300.0, 0));
        let drag_state = c.state();

        assert!(c.set_mode(CurveMode::from_key("line")));
        assert_eq!(c.mode(), CurveMode::Line);
        assert_eq!(c.state(), drag_state);
        assert_eq!(c.points().positions(), before);

        assert!(c.set_mode(CurveMode::from_key("no-such-mode")));
        assert_eq!(c.mode(), CurveMode::Bezier3);

        assert!(c.pointer_move(at(310.0, 310.0, 5)));
        assert_eq!(c.points().as_slice()[1].position, Point::new(310.0, 310.0));
    }

    #[test]
    fn stale_press_is_replaced() {
        let mut c = controller();
        c.pointer_down(at(600.0, 500.0, 0));
        // Release was lost; next press lands on a point
        c.pointer_down(at(200.0, 100.0, 5000));
        assert!(matches!(c.state(), Interaction::Dragging(_)));
    }

    #[test]
    fn cancel_discards_pending_click() {
        let mut c = controller();
        c.pointer_down(at(600.0, 500.0, 0));
        c.cancel();
        assert!(!c.pointer_up(at(600.0, 500.0, 10)));
        assert_eq!(c.points().len(), 4);
    }

    #[test]
    fn seeded_cubic_endpoints() {
        let c = controller();
        let positions = c.points().positions();
        assert_eq!(
            positions,
            vec![
                Point::new(200.0, 100.0),
                Point::new(300.0, 300.0),
                Point::new(WIDTH - 300.0, 300.0),
                Point::new(WIDTH - 200.0, 100.0),
            ]
        );
        let eval = SegmentEvaluator::for_window(c.mode(), &positions).unwrap();
        assert_eq!(eval.eval(0.0), Point::new(200.0, 100.0));
        let end = eval.eval(1.0);
        approx::assert_abs_diff_eq!(end.x, WIDTH - 200.0, epsilon = 1e-9);
        approx::assert_abs_diff_eq!(end.y, 100.0, epsilon = 1e-9);
    }

    #[test]
    fn new_points_extend_the_curve() {
        let mut c = controller();
        for (i, x) in [700.0, 800.0, 900.0].into_iter().enumerate() {
            let t = i as u64 * 1000;
            c.pointer_down(at(x, 600.0, t));
            c.pointer_up(at(x, 600.0, t + 100));
        }
        assert_eq!(c.points().len(), 7);

        let mut r = RecordingRenderer::default();
        c.draw(&mut r);
        let paths = r
            .ops
            .iter()
            .filter(|op| matches!(op, crate::render::testing::Op::Path { .. }))
            .count();
        assert_eq!(paths, 2);
    }
}
