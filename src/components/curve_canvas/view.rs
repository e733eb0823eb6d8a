// Copyright 2025 the Curvepad Authors
// SPDX-License-Identifier: Apache-2.0

//! Xilem View wrapper for CurveCanvasWidget

use super::{CanvasUpdate, CurveCanvasWidget};
use crate::curve::CurveMode;
use masonry::kurbo::Size;
use std::marker::PhantomData;
use xilem::core::{MessageContext, MessageResult, Mut, View, ViewMarker};
use xilem::{Pod, ViewCtx};

/// Create a curve canvas view
///
/// `mode` is pushed into the widget whenever it changes between rebuilds.
/// The callback receives readout and point count changes.
pub fn curve_canvas_view<State, F>(
    mode: CurveMode,
    size: Size,
    on_canvas_update: F,
) -> CurveCanvasView<State, F>
where
    F: Fn(&mut State, CanvasUpdate),
{
    CurveCanvasView {
        mode,
        size,
        on_canvas_update,
        phantom: PhantomData,
    }
}

/// The Xilem View for CurveCanvasWidget
#[must_use = "View values do nothing unless provided to Xilem."]
pub struct CurveCanvasView<State, F> {
    mode: CurveMode,
    size: Size,
    on_canvas_update: F,
    phantom: PhantomData<fn() -> State>,
}

impl<State, F> ViewMarker for CurveCanvasView<State, F> {}

impl<State: 'static, F: Fn(&mut State, CanvasUpdate) + 'static> View<State, (), ViewCtx>
    for CurveCanvasView<State, F>
{
    type Element = Pod<CurveCanvasWidget>;
    type ViewState = ();

    fn build(&self, ctx: &mut ViewCtx, _app_state: &mut State) -> (Self::Element, Self::ViewState) {
        let widget = CurveCanvasWidget::new(self.mode, self.size);
        let pod = ctx.create_pod(widget);
        ctx.record_action(pod.new_widget.id());
        (pod, ())
    }

    fn rebuild(
        &self,
        prev: &Self,
        _view_state: &mut Self::ViewState,
        _ctx: &mut ViewCtx,
        mut element: Mut<'_, Self::Element>,
        _app_state: &mut State,
    ) {
        // Only the mode flows from the app into the widget. Points and
        // the drag in progress stay owned by the widget.
        if self.mode != prev.mode {
            let mut widget = element.downcast::<CurveCanvasWidget>();
            if widget.widget.controller.set_mode(self.mode) {
                widget.ctx.request_render();
            }
        }
    }

    fn teardown(
        &self,
        _view_state: &mut Self::ViewState,
        _ctx: &mut ViewCtx,
        _element: Mut<'_, Self::Element>,
    ) {
        // No cleanup needed
    }

    fn message(
        &self,
        _view_state: &mut Self::ViewState,
        message: &mut MessageContext,
        _element: Mut<'_, Self::Element>,
        app_state: &mut State,
    ) -> MessageResult<()> {
        match message.take_message::<CanvasUpdate>() {
            Some(update) => {
                (self.on_canvas_update)(app_state, *update);
                MessageResult::Action(())
            }
            None => MessageResult::Stale,
        }
    }
}
