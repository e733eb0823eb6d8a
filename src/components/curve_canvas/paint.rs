// Copyright 2025 the Curvepad Authors
// SPDX-License-Identifier: Apache-2.0

//! Paint helper methods for CurveCanvasWidget

use super::CurveCanvasWidget;
use crate::render::SceneRenderer;
use crate::theme;
use kurbo::{Affine, Stroke};
use masonry::kurbo::Size;
use masonry::vello::Scene;
use masonry::vello::peniko::Brush;

impl CurveCanvasWidget {
    /// Clear and redraw the whole canvas
    pub(super) fn paint_canvas(&self, scene: &mut Scene, canvas_size: Size) {
        let mut renderer = SceneRenderer::new(scene, canvas_size);
        self.controller.draw(&mut renderer);
        self.paint_outline(scene, canvas_size);
    }

    fn paint_outline(&self, scene: &mut Scene, canvas_size: Size) {
        let stroke = Stroke::new(1.0);
        let brush = Brush::Solid(theme::canvas::OUTLINE);
        scene.stroke(
            &stroke,
            Affine::IDENTITY,
            &brush,
            None,
            &canvas_size.to_rect().inset(-0.5),
        );
    }
}
