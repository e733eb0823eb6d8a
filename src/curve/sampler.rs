// Copyright 2025 the Curvepad Authors
// SPDX-License-Identifier: Apache-2.0

//! Segment sampler: turns the point set into drawable polylines.
//!
//! The point set is cut into windows of `degree + 1` points with a stride
//! of `degree`, so neighbouring segments share their joining anchor. An
//! incomplete trailing window is dropped, not an error. Each window is
//! sampled at `t = 0, Δ, 2Δ, ...` until the first `t >= 1`; the last step
//! can land slightly past 1 because Δ does not divide 1 evenly.

use super::CurveMode;
use super::eval::SegmentEvaluator;
use crate::settings;
use kurbo::{BezPath, Point};

/// Complete segment windows of `points` under `mode`
pub fn segment_windows(points: &[Point], mode: CurveMode) -> impl Iterator<Item = &[Point]> {
    let degree = mode.degree();
    let size = degree + 1;
    (0..points.len())
        .step_by(degree)
        .take_while(move |&start| start + size <= points.len())
        .map(move |start| &points[start..start + size])
}

/// Parameter values `0, Δ, 2Δ, ...` up to and including the first `>= 1`
///
/// The value is accumulated by repeated addition, matching a
/// `t += Δ` drawing loop.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParamSteps {
    delta: f64,
    next: Option<f64>,
}

impl ParamSteps {
    pub fn new(delta: f64) -> Self {
        // A non-positive step would never reach 1.
        let next = (delta > 0.0).then_some(0.0);
        Self { delta, next }
    }
}

impl Default for ParamSteps {
    fn default() -> Self {
        Self::new(settings::sampling::DELTA)
    }
}

impl Iterator for ParamSteps {
    type Item = f64;

    fn next(&mut self) -> Option<f64> {
        let t = self.next?;
        self.next = (t < 1.0).then_some(t + self.delta);
        Some(t)
    }
}

/// Lazily sampled points of one segment
///
/// Cloning restarts the sequence from `t = 0`.
#[derive(Debug, Clone, PartialEq)]
pub struct SampledSegment {
    evaluator: SegmentEvaluator,
    steps: ParamSteps,
}

impl SampledSegment {
    pub fn new(evaluator: SegmentEvaluator, steps: ParamSteps) -> Self {
        Self { evaluator, steps }
    }

    /// Iterate the samples without consuming the segment
    pub fn points(&self) -> SegmentPoints<'_> {
        SegmentPoints {
            evaluator: &self.evaluator,
            steps: self.steps,
        }
    }
}

/// Iterator over the samples of a `SampledSegment`
#[derive(Debug, Clone)]
pub struct SegmentPoints<'a> {
    evaluator: &'a SegmentEvaluator,
    steps: ParamSteps,
}

impl Iterator for SegmentPoints<'_> {
    type Item = Point;

    fn next(&mut self) -> Option<Point> {
        self.steps.next().map(|t| self.evaluator.eval(t))
    }
}

impl<'a> IntoIterator for &'a SampledSegment {
    type Item = Point;
    type IntoIter = SegmentPoints<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.points()
    }
}

/// Everything the renderer strokes for one frame
#[derive(Debug, Clone, PartialEq)]
pub enum SampledPath {
    /// Raw points joined directly (line mode)
    Polyline(Vec<Point>),
    /// One sampled curve per complete window
    Segments(Vec<SampledSegment>),
}

impl SampledPath {
    /// Materialize every polyline
    pub fn polylines(&self) -> Vec<Vec<Point>> {
        match self {
            SampledPath::Polyline(points) if points.len() >= 2 => vec![points.clone()],
            SampledPath::Polyline(_) => Vec::new(),
            SampledPath::Segments(segments) => {
                segments.iter().map(|s| s.points().collect()).collect()
            }
        }
    }
}

/// Join `points` with straight lines
pub fn polyline_path(points: &[Point]) -> BezPath {
    let mut path = BezPath::new();
    let mut iter = points.iter().copied();
    if let Some(first) = iter.next() {
        path.move_to(first);
        for p in iter {
            path.line_to(p);
        }
    }
    path
}

/// Sample the whole point set under `mode`
pub fn sample_path(points: &[Point], mode: CurveMode) -> SampledPath {
    sample_path_with(points, mode, ParamSteps::default())
}

/// Sample with an explicit parameter step sequence
pub fn sample_path_with(points: &[Point], mode: CurveMode, steps: ParamSteps) -> SampledPath {
    if mode == CurveMode::Line {
        return SampledPath::Polyline(points.to_vec());
    }

    let segments = segment_windows(points, mode)
        .filter_map(|window| SegmentEvaluator::for_window(mode, window))
        .map(|evaluator| SampledSegment::new(evaluator, steps))
        .collect();
    SampledPath::Segments(segments)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn points(n: usize) -> Vec<Point> {
        (0..n).map(|i| Point::new(i as f64 * 10.0, (i % 2) as f64 * 50.0)).collect()
    }

    #[test]
    fn steps_start_at_zero_and_stop_after_reaching_one() {
        let steps: Vec<f64> = ParamSteps::default().collect();
        assert_eq!(steps[0], 0.0);
        let last = *steps.last().unwrap();
        assert!(last >= 1.0);
        assert!(last < 1.0 + settings::sampling::DELTA);
        assert!(steps[..steps.len() - 1].iter().all(|&t| t < 1.0));
        assert!(steps.len() == 61 || steps.len() == 62);
    }

    #[test]
    fn steps_with_exact_divisor() {
        let steps: Vec<f64> = ParamSteps::new(0.25).collect();
        assert_eq!(steps, vec![0.0, 0.25, 0.5, 0.75, 1.0]);
    }

    #[test]
    fn steps_with_bad_delta_are_empty() {
        assert_eq!(ParamSteps::new(0.0).count(), 0);
        assert_eq!(ParamSteps::new(-0.1).count(), 0);
    }

    #[test]
    fn incomplete_trailing_window_is_dropped() {
        let pts = points(5);
        let windows: Vec<_> = segment_windows(&pts, CurveMode::Bezier3).collect();
        assert_eq!(windows.len(), 1);
        assert_eq!(windows[0], &pts[0..4]);
    }

    #[test]
    fn windows_share_anchors() {
        let pts = points(7);
        let windows: Vec<_> = segment_windows(&pts, CurveMode::Bezier3).collect();
        assert_eq!(windows, vec![&pts[0..4], &pts[3..7]]);

        let quad: Vec<_> = segment_windows(&pts, CurveMode::BezierN(2)).collect();
        assert_eq!(quad, vec![&pts[0..3], &pts[2..5], &pts[4..7]]);
    }

    #[test]
    fn too_few_points_gives_no_segments() {
        let pts = points(3);
        assert_eq!(segment_windows(&pts, CurveMode::Bezier3).count(), 0);
        let path = sample_path(&pts, CurveMode::Bezier3);
        assert!(path.polylines().is_empty());
    }

    #[test]
    fn five_points_sample_only_first_segment() {
        let pts = points(5);
        let path = sample_path(&pts, CurveMode::Bezier3);
        let polylines = path.polylines();
        assert_eq!(polylines.len(), 1);
        assert_eq!(polylines[0][0], pts[0]);
        // Point 4 lies at x = 40, beyond the segment's reach of x = 30
        // (allowing for the final overshoot step).
        assert!(polylines[0].iter().all(|p| p.x < 31.0));
    }

    #[test]
    fn line_mode_connects_raw_points() {
        let pts = points(5);
        let path = sample_path(&pts, CurveMode::Line);
        assert_eq!(path, SampledPath::Polyline(pts.clone()));
        assert_eq!(path.polylines(), vec![pts]);
    }

    #[test]
    fn line_mode_needs_two_points() {
        let path = sample_path(&points(1), CurveMode::Line);
        assert!(path.polylines().is_empty());
    }

    #[test]
    fn sampled_segment_is_restartable() {
        let pts = points(4);
        let path = sample_path(&pts, CurveMode::Bezier3);
        let SampledPath::Segments(segments) = path else {
            panic!("expected segments");
        };
        let first: Vec<Point> = segments[0].points().collect();
        let second: Vec<Point> = (&segments[0]).into_iter().collect();
        assert_eq!(first, second);
        assert_eq!(first.len(), ParamSteps::default().count());
    }

    #[test]
    fn seeded_scenario_endpoints() {
        let width = 1200.0;
        let pts = [
            Point::new(200.0, 100.0),
            Point::new(300.0, 300.0),
            Point::new(width - 300.0, 300.0),
            Point::new(width - 200.0, 100.0),
        ];
        let eval = SegmentEvaluator::for_window(CurveMode::Bezier3, &pts).unwrap();
        assert_eq!(eval.eval(0.0), Point::new(200.0, 100.0));
        let end = eval.eval(1.0);
        assert_abs_diff_eq!(end.x, width - 200.0, epsilon = 1e-9);
        assert_abs_diff_eq!(end.y, 100.0, epsilon = 1e-9);

        let polylines = sample_path(&pts, CurveMode::Bezier3).polylines();
        assert_eq!(polylines[0][0], Point::new(200.0, 100.0));
    }

    #[test]
    fn seven_points_give_two_cubic_polylines() {
        let pts = points(7);
        let polylines =
            sample_path_with(&pts, CurveMode::Bezier3, ParamSteps::new(0.5)).polylines();
        assert_eq!(polylines.len(), 2);
        assert_eq!(polylines[1][0], pts[3]);
    }

    #[test]
    fn polyline_path_joins_points() {
        let pts = points(3);
        let path = polyline_path(&pts);
        let els = path.elements();
        assert_eq!(els.len(), 3);
        assert_eq!(els[0], kurbo::PathEl::MoveTo(pts[0]));
        assert_eq!(els[2], kurbo::PathEl::LineTo(pts[2]));
        assert!(polyline_path(&[]).elements().is_empty());
    }
}
