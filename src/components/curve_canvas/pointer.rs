// Copyright 2025 the Curvepad Authors
// SPDX-License-Identifier: Apache-2.0

//! Pointer event handlers for CurveCanvasWidget

use super::CurveCanvasWidget;
use crate::editing::PointerEvent;
use masonry::core::{EventCtx, PointerState};

impl CurveCanvasWidget {
    // ============================================================================
    // POINTER EVENT HANDLERS
    // ============================================================================

    /// Convert a masonry pointer state into a canvas-relative event
    fn canvas_event(&self, ctx: &EventCtx<'_>, state: &PointerState) -> PointerEvent {
        PointerEvent::new(ctx.local_position(state.position), self.epoch.elapsed())
    }

    /// Handle pointer down event
    pub(super) fn handle_pointer_down(&mut self, ctx: &mut EventCtx<'_>, state: &PointerState) {
        let event = self.canvas_event(ctx, state);
        tracing::debug!(
            "[CurveCanvasWidget::handle_pointer_down] at {:?}",
            event.position
        );

        // Keep receiving move/up events while the button is held, even
        // outside the canvas.
        ctx.capture_pointer();

        if self.controller.pointer_down(event) {
            ctx.request_render();
        }
        tracing::debug!(
            "[CurveCanvasWidget::handle_pointer_down] now {:?}",
            self.controller.state()
        );
        self.emit_canvas_update(ctx);
    }

    /// Handle pointer move event
    pub(super) fn handle_pointer_move(&mut self, ctx: &mut EventCtx<'_>, current: &PointerState) {
        let event = self.canvas_event(ctx, current);
        if self.controller.pointer_move(event) {
            ctx.request_render();
        }
        self.emit_canvas_update(ctx);
    }

    /// Handle pointer up event
    pub(super) fn handle_pointer_up(&mut self, ctx: &mut EventCtx<'_>, state: &PointerState) {
        let event = self.canvas_event(ctx, state);
        tracing::debug!(
            "[CurveCanvasWidget::handle_pointer_up] at {:?}",
            event.position
        );

        ctx.release_pointer();

        if self.controller.pointer_up(event) {
            tracing::info!(
                "Added point {} at ({:.0}, {:.0})",
                self.controller.points().len(),
                event.position.x,
                event.position.y
            );
            ctx.request_render();
        }
        self.emit_canvas_update(ctx);
    }

    /// Handle pointer cancel (capture lost)
    pub(super) fn handle_pointer_cancel(&mut self, ctx: &mut EventCtx<'_>) {
        tracing::debug!("[CurveCanvasWidget::handle_pointer_cancel]");
        if self.controller.cancel() {
            ctx.request_render();
        }
    }

    /// Handle the pointer leaving the canvas
    pub(super) fn handle_pointer_leave(&mut self, ctx: &mut EventCtx<'_>) {
        if self.controller.pointer_left() {
            ctx.request_render();
        }
        self.emit_canvas_update(ctx);
    }
}
