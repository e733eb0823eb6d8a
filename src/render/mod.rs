// Copyright 2025 the Curvepad Authors
// SPDX-License-Identifier: Apache-2.0

//! Drawing surface boundary and the per-frame drawing routine.
//!
//! `Renderer` is the small set of primitives the editor needs from a 2D
//! surface. `draw_frame` clears the surface and draws the handle overlay
//! followed by the sampled curve. The surface is redrawn from scratch on
//! every change; nothing is patched incrementally.

mod scene;

pub use scene::SceneRenderer;

use crate::curve::{CurveMode, sample_path};
use crate::model::{PointCategory, PointSet};
use crate::theme;
use kurbo::Point;
use masonry::vello::peniko::Color;

/// Stroke settings for lines and paths
#[derive(Debug, Clone)]
pub struct StrokeStyle {
    pub color: Color,
    pub width: f64,
    /// Dash pattern (on, off, ...); empty for a solid line
    pub dashes: Vec<f64>,
}

impl StrokeStyle {
    pub fn solid(color: Color, width: f64) -> Self {
        Self {
            color,
            width,
            dashes: Vec::new(),
        }
    }

    pub fn dashed(color: Color, width: f64, dashes: &[f64]) -> Self {
        Self {
            color,
            width,
            dashes: dashes.to_vec(),
        }
    }

    /// Style of the sampled curve
    pub fn curve() -> Self {
        Self::solid(theme::path::STROKE, theme::size::PATH_STROKE_WIDTH)
    }

    /// Style of the dashed guides between handles
    pub fn handle_guide() -> Self {
        Self::dashed(
            theme::handle::LINE,
            theme::size::HANDLE_LINE_WIDTH,
            &theme::size::HANDLE_LINE_DASH,
        )
    }
}

impl Default for StrokeStyle {
    fn default() -> Self {
        Self::curve()
    }
}

/// A 2D drawing surface
pub trait Renderer {
    /// Wipe the whole surface
    fn clear(&mut self);

    /// Stroke a single line with the current style
    fn stroke_line(&mut self, p0: Point, p1: Point);

    /// Stroke an open polyline with the current style
    fn stroke_path(&mut self, points: &[Point]);

    /// Fill an axis-aligned square of side `size` centered on `center`
    fn fill_square(&mut self, center: Point, size: f64, color: Color);

    /// The style used by stroke calls
    fn style(&self) -> &StrokeStyle;

    /// Replace the stroke style, returning the previous one
    fn set_style(&mut self, style: StrokeStyle) -> StrokeStyle;

    /// Run `f` with `style` active, then restore the previous style
    fn with_style<F>(&mut self, style: StrokeStyle, f: F)
    where
        Self: Sized,
        F: FnOnce(&mut Self),
    {
        let previous = self.set_style(style);
        f(self);
        self.set_style(previous);
    }
}

/// Draw one full frame: clear, handle overlay, then the curve
pub fn draw_frame<R: Renderer>(renderer: &mut R, points: &PointSet, mode: CurveMode) {
    renderer.clear();
    if points.is_empty() {
        return;
    }
    draw_handles(renderer, points, mode);
    draw_curve(renderer, points, mode);
}

/// Dashed guides between consecutive points and a square per point
pub fn draw_handles<R: Renderer>(renderer: &mut R, points: &PointSet, mode: CurveMode) {
    renderer.with_style(StrokeStyle::handle_guide(), |r| {
        let mut last: Option<Point> = None;
        for (index, point) in points.iter().enumerate() {
            if let Some(prev) = last {
                r.stroke_line(prev, point.position);
            }
            last = Some(point.position);

            let color = match points.category_of(index, mode) {
                PointCategory::Anchor => theme::point::ANCHOR,
                PointCategory::Handle => theme::point::HANDLE,
            };
            r.fill_square(point.position, theme::size::POINT_BOX_SIZE, color);
        }
    });
}

/// Stroke the sampled curve with the renderer's current style
pub fn draw_curve<R: Renderer>(renderer: &mut R, points: &PointSet, mode: CurveMode) {
    let positions = points.positions();
    for polyline in sample_path(&positions, mode).polylines() {
        renderer.stroke_path(&polyline);
    }
}
