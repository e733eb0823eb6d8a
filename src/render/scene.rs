// Copyright 2025 the Curvepad Authors
// SPDX-License-Identifier: Apache-2.0

//! `Renderer` backed by a vello `Scene`

use super::{Renderer, StrokeStyle};
use crate::curve;
use crate::theme;
use kurbo::{Affine, Line, Point, Rect, Size, Stroke};
use masonry::util::fill_color;
use masonry::vello::Scene;
use masonry::vello::peniko::{Brush, Color, Fill};

/// Draws into a vello scene covering a `size` canvas
pub struct SceneRenderer<'a> {
    scene: &'a mut Scene,
    size: Size,
    style: StrokeStyle,
}

impl<'a> SceneRenderer<'a> {
    pub fn new(scene: &'a mut Scene, size: Size) -> Self {
        Self {
            scene,
            size,
            style: StrokeStyle::default(),
        }
    }

    fn stroke(&self) -> Stroke {
        let stroke = Stroke::new(self.style.width);
        if self.style.dashes.is_empty() {
            stroke
        } else {
            stroke.with_dashes(0.0, self.style.dashes.iter().copied())
        }
    }
}

impl Renderer for SceneRenderer<'_> {
    fn clear(&mut self) {
        fill_color(self.scene, &self.size.to_rect(), theme::canvas::BACKGROUND);
    }

    fn stroke_line(&mut self, p0: Point, p1: Point) {
        let stroke = self.stroke();
        let brush = Brush::Solid(self.style.color);
        self.scene
            .stroke(&stroke, Affine::IDENTITY, &brush, None, &Line::new(p0, p1));
    }

    fn stroke_path(&mut self, points: &[Point]) {
        if points.len() < 2 {
            return;
        }
        let path = curve::polyline_path(points);
        let stroke = self.stroke();
        let brush = Brush::Solid(self.style.color);
        self.scene
            .stroke(&stroke, Affine::IDENTITY, &brush, None, &path);
    }

    fn fill_square(&mut self, center: Point, size: f64, color: Color) {
        let rect = Rect::from_center_size(center, (size, size));
        let brush = Brush::Solid(color);
        self.scene
            .fill(Fill::NonZero, Affine::IDENTITY, &brush, None, &rect);
    }

    fn style(&self) -> &StrokeStyle {
        &self.style
    }

    fn set_style(&mut self, style: StrokeStyle) -> StrokeStyle {
        std::mem::replace(&mut self.style, style)
    }
}
