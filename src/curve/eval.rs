// Copyright 2025 the Curvepad Authors
// SPDX-License-Identifier: Apache-2.0

//! Curve evaluators: map control points and a parameter `t` to a point.
//!
//! None of these clamp `t`; callers pass values in `[0, 1]` (the sampler
//! may overshoot 1 by less than one step).

use super::CurveMode;
use kurbo::{Point, Vec2};

/// Linear interpolation between two points
pub fn lerp(p0: Point, p1: Point, t: f64) -> Point {
    Point::new((1.0 - t) * p0.x + t * p1.x, (1.0 - t) * p0.y + t * p1.y)
}

/// Evaluate a Bezier curve of any degree with De Casteljau's algorithm
///
/// `points.len() - 1` rounds of pairwise interpolation on a working copy.
/// The caller's slice is never touched. Returns `None` for an empty slice;
/// a single point is returned as-is.
pub fn de_casteljau(points: &[Point], t: f64) -> Option<Point> {
    let mut work = points.to_vec();
    let n = work.len().checked_sub(1)?;
    for round in 0..n {
        for i in 0..n - round {
            work[i] = lerp(work[i], work[i + 1], t);
        }
    }
    Some(work[0])
}

/// Polynomial coefficients of a cubic Bezier segment
///
/// `position(t) = p0 + b·t + c·t² + d·t³`, with `b = 3(p1 − p0)`,
/// `c = 3(p2 − p1) − b` and `d = p3 − p0 − b − c`, per axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CubicCoefficients {
    origin: Point,
    b: Vec2,
    c: Vec2,
    d: Vec2,
}

impl CubicCoefficients {
    pub fn new(p0: Point, p1: Point, p2: Point, p3: Point) -> Self {
        let b = 3.0 * (p1 - p0);
        let c = 3.0 * (p2 - p1) - b;
        let d = (p3 - p0) - b - c;
        Self { origin: p0, b, c, d }
    }

    /// Build from a window of exactly four points
    pub fn from_slice(points: &[Point]) -> Option<Self> {
        match points {
            [p0, p1, p2, p3] => Some(Self::new(*p0, *p1, *p2, *p3)),
            _ => None,
        }
    }

    pub fn eval(&self, t: f64) -> Point {
        let t2 = t * t;
        let t3 = t2 * t;
        self.origin + self.b * t + self.c * t2 + self.d * t3
    }
}

/// Evaluator for one segment window, chosen by curve mode
#[derive(Debug, Clone, PartialEq)]
pub enum SegmentEvaluator {
    /// Straight segment between two points
    Linear(Point, Point),
    /// Closed-form cubic, coefficients precomputed once
    Cubic(CubicCoefficients),
    /// De Casteljau over an owned copy of the window
    Casteljau(Vec<Point>),
}

impl SegmentEvaluator {
    /// Pick the evaluator for `window` under `mode`
    ///
    /// Returns `None` when the window does not hold exactly
    /// `mode.degree() + 1` points.
    pub fn for_window(mode: CurveMode, window: &[Point]) -> Option<Self> {
        if window.len() != mode.degree() + 1 {
            return None;
        }
        match (mode, window) {
            (CurveMode::Line, [p0, p1]) => Some(SegmentEvaluator::Linear(*p0, *p1)),
            (CurveMode::Bezier3, _) => CubicCoefficients::from_slice(window).map(Self::Cubic),
            (CurveMode::BezierN(_), _) => Some(SegmentEvaluator::Casteljau(window.to_vec())),
            _ => None,
        }
    }

    pub fn eval(&self, t: f64) -> Point {
        match self {
            SegmentEvaluator::Linear(p0, p1) => lerp(*p0, *p1, t),
            SegmentEvaluator::Cubic(coeffs) => coeffs.eval(t),
            SegmentEvaluator::Casteljau(points) => {
                // Windows are never empty: `for_window` checks the length.
                de_casteljau(points, t).unwrap_or_default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn sample_cubic() -> [Point; 4] {
        [
            Point::new(200.0, 100.0),
            Point::new(300.0, 300.0),
            Point::new(900.0, 300.0),
            Point::new(1000.0, 100.0),
        ]
    }

    #[test]
    fn lerp_endpoints_and_midpoint() {
        let a = Point::new(0.0, 10.0);
        let b = Point::new(20.0, -10.0);
        assert_eq!(lerp(a, b, 0.0), a);
        assert_eq!(lerp(a, b, 1.0), b);
        assert_eq!(lerp(a, b, 0.5), Point::new(10.0, 0.0));
    }

    #[test]
    fn closed_form_matches_de_casteljau() {
        let pts = sample_cubic();
        let cubic = CubicCoefficients::new(pts[0], pts[1], pts[2], pts[3]);
        for i in 0..=100 {
            let t = i as f64 / 100.0;
            let a = cubic.eval(t);
            let b = de_casteljau(&pts, t).unwrap();
            assert_abs_diff_eq!(a.x, b.x, epsilon = 1e-9);
            assert_abs_diff_eq!(a.y, b.y, epsilon = 1e-9);
        }
    }

    #[test]
    fn closed_form_matches_kurbo() {
        use kurbo::{CubicBez, ParamCurve};

        let pts = sample_cubic();
        let cubic = CubicCoefficients::new(pts[0], pts[1], pts[2], pts[3]);
        let reference = CubicBez::new(pts[0], pts[1], pts[2], pts[3]);
        for t in [0.0, 0.2, 0.5, 0.77, 1.0] {
            let a = cubic.eval(t);
            let b = reference.eval(t);
            assert_abs_diff_eq!(a.x, b.x, epsilon = 1e-9);
            assert_abs_diff_eq!(a.y, b.y, epsilon = 1e-9);
        }
    }

    #[test]
    fn de_casteljau_hits_endpoints_exactly() {
        let pts = [
            Point::new(3.3, 7.1),
            Point::new(-14.0, 2.5),
            Point::new(99.9, 0.1),
            Point::new(42.0, 42.0),
            Point::new(11.7, -8.25),
            Point::new(0.3, 1e3),
        ];
        assert_eq!(de_casteljau(&pts, 0.0), Some(pts[0]));
        assert_eq!(de_casteljau(&pts, 1.0), Some(pts[5]));
    }

    #[test]
    fn de_casteljau_leaves_input_untouched() {
        let pts = vec![
            Point::new(0.0, 0.0),
            Point::new(10.0, 40.0),
            Point::new(30.0, -5.0),
            Point::new(50.0, 0.0),
        ];
        let before = pts.clone();
        let _ = de_casteljau(&pts, 0.37);
        assert_eq!(pts, before);
    }

    #[test]
    fn de_casteljau_quadratic_midpoint() {
        let pts = [Point::new(0.0, 0.0), Point::new(50.0, 100.0), Point::new(100.0, 0.0)];
        assert_eq!(de_casteljau(&pts, 0.5), Some(Point::new(50.0, 50.0)));
    }

    #[test]
    fn de_casteljau_degenerate_inputs() {
        assert_eq!(de_casteljau(&[], 0.5), None);
        let p = Point::new(4.0, 5.0);
        assert_eq!(de_casteljau(&[p], 0.5), Some(p));
    }

    #[test]
    fn cubic_from_slice_needs_four_points() {
        let pts = sample_cubic();
        assert!(CubicCoefficients::from_slice(&pts).is_some());
        assert!(CubicCoefficients::from_slice(&pts[..3]).is_none());
    }

    #[test]
    fn evaluator_selection_by_mode() {
        let pts = sample_cubic();
        assert!(matches!(
            SegmentEvaluator::for_window(CurveMode::Bezier3, &pts),
            Some(SegmentEvaluator::Cubic(_))
        ));
        assert!(matches!(
            SegmentEvaluator::for_window(CurveMode::BezierN(3), &pts),
            Some(SegmentEvaluator::Casteljau(_))
        ));
        assert!(matches!(
            SegmentEvaluator::for_window(CurveMode::Line, &pts[..2]),
            Some(SegmentEvaluator::Linear(_, _))
        ));
        assert_eq!(SegmentEvaluator::for_window(CurveMode::Bezier3, &pts[..3]), None);
        assert_eq!(SegmentEvaluator::for_window(CurveMode::BezierN(2), &pts), None);
    }

    #[test]
    fn evaluator_endpoints() {
        let pts = sample_cubic();
        for mode in [CurveMode::Bezier3, CurveMode::BezierN(3)] {
            let eval = SegmentEvaluator::for_window(mode, &pts).unwrap();
            assert_eq!(eval.eval(0.0), pts[0]);
            let end = eval.eval(1.0);
            assert_abs_diff_eq!(end.x, pts[3].x, epsilon = 1e-9);
            assert_abs_diff_eq!(end.y, pts[3].y, epsilon = 1e-9);
        }
    }
}
