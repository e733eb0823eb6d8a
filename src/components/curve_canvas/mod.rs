// Copyright 2025 the Curvepad Authors
// SPDX-License-Identifier: Apache-2.0

//! Curve canvas widget - hosts the interaction controller and draws it

mod paint;
mod pointer;
mod view;

pub use view::curve_canvas_view;

use crate::curve::CurveMode;
use crate::editing::{CursorReadout, InteractionController};
use masonry::accesskit::{Node, Role};
use masonry::core::{
    AccessCtx, BoxConstraints, ChildrenIds, EventCtx, LayoutCtx, PaintCtx, PointerButton,
    PointerButtonEvent, PointerEvent, PointerUpdate, PropertiesMut, PropertiesRef, RegisterCtx,
    TextEvent, Update, UpdateCtx, Widget,
};
use masonry::kurbo::Size;
use masonry::vello::Scene;
use std::time::Instant;

/// The canvas on which control points are placed and dragged
pub struct CurveCanvasWidget {
    /// Points, mode and pointer state
    pub(super) controller: InteractionController,

    /// Reference instant for pointer event timestamps
    pub(super) epoch: Instant,

    /// Last state reported to the app (to avoid redundant updates)
    pub(super) reported: Option<CanvasUpdate>,
}

impl CurveCanvasWidget {
    /// Create a canvas of `size` seeded with the starting points
    pub fn new(mode: CurveMode, size: Size) -> Self {
        Self {
            controller: InteractionController::seeded(mode, size),
            epoch: Instant::now(),
            reported: None,
        }
    }

    /// Tell the app about readout or point count changes
    pub(super) fn emit_canvas_update(&mut self, ctx: &mut EventCtx<'_>) {
        let update = CanvasUpdate {
            readout: self.controller.readout(),
            point_count: self.controller.points().len(),
        };
        if self.reported == Some(update) {
            return;
        }
        self.reported = Some(update);
        ctx.submit_action::<CanvasUpdate>(update);
    }
}

/// Action emitted when what the app displays about the canvas changes
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CanvasUpdate {
    pub readout: CursorReadout,
    pub point_count: usize,
}

impl Widget for CurveCanvasWidget {
    type Action = CanvasUpdate;

    fn register_children(&mut self, _ctx: &mut RegisterCtx<'_>) {
        // Leaf widget - no children
    }

    fn update(
        &mut self,
        _ctx: &mut UpdateCtx<'_>,
        _props: &mut PropertiesMut<'_>,
        _event: &Update,
    ) {
    }

    fn layout(
        &mut self,
        _ctx: &mut LayoutCtx<'_>,
        _props: &mut PropertiesMut<'_>,
        bc: &BoxConstraints,
    ) -> Size {
        let size = bc.constrain(self.controller.bounds());
        if size != self.controller.bounds() {
            tracing::debug!("[CurveCanvasWidget::layout] canvas constrained to {:?}", size);
            self.controller.resize(size);
        }
        size
    }

    fn paint(&mut self, ctx: &mut PaintCtx<'_>, _props: &PropertiesRef<'_>, scene: &mut Scene) {
        self.paint_canvas(scene, ctx.size());
    }

    fn on_pointer_event(
        &mut self,
        ctx: &mut EventCtx<'_>,
        _props: &mut PropertiesMut<'_>,
        event: &PointerEvent,
    ) {
        match event {
            PointerEvent::Down(PointerButtonEvent {
                button: Some(PointerButton::Primary),
                state,
                ..
            }) => {
                self.handle_pointer_down(ctx, state);
            }

            PointerEvent::Move(PointerUpdate { current, .. }) => {
                self.handle_pointer_move(ctx, current);
            }

            PointerEvent::Up(PointerButtonEvent {
                button: Some(PointerButton::Primary),
                state,
                ..
            }) => {
                self.handle_pointer_up(ctx, state);
            }

            PointerEvent::Cancel(_) => {
                self.handle_pointer_cancel(ctx);
            }

            PointerEvent::Leave(_) => {
                self.handle_pointer_leave(ctx);
            }

            _ => {
                // Ignore other pointer events
            }
        }
    }

    fn on_text_event(
        &mut self,
        _ctx: &mut EventCtx<'_>,
        _props: &mut PropertiesMut<'_>,
        _event: &TextEvent,
    ) {
        // No keyboard handling
    }

    fn accessibility_role(&self) -> Role {
        Role::Canvas
    }

    fn accessibility(
        &mut self,
        _ctx: &mut AccessCtx<'_>,
        _props: &PropertiesRef<'_>,
        node: &mut Node,
    ) {
        node.set_label(format!(
            "Curve canvas: {} points, {} mode",
            self.controller.points().len(),
            self.controller.mode().display_name()
        ));
    }

    fn children_ids(&self) -> ChildrenIds {
        ChildrenIds::new()
    }
}
