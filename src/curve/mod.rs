// Copyright 2025 the Curvepad Authors
// SPDX-License-Identifier: Apache-2.0

//! Curve modes and the evaluation engine.
//!
//! A `CurveMode` says how the point set is cut into segments and which
//! evaluator draws each one. `Line` connects points directly, `Bezier3`
//! uses the closed-form cubic, and `BezierN` runs De Casteljau at any
//! degree. Modes are selected from the toolbar by string key.

pub mod eval;
pub mod sampler;

pub use sampler::{polyline_path, sample_path};

use std::fmt;

/// The active way of interpreting the point set
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CurveMode {
    /// Straight polyline through every point
    Line,
    /// Cubic Bezier segments, evaluated in closed form
    #[default]
    Bezier3,
    /// Bezier segments of the given degree, evaluated with De Casteljau
    BezierN(usize),
}

impl CurveMode {
    /// Modes offered by the toolbar, in display order
    pub const TOOLBAR: &'static [CurveMode] = &[
        CurveMode::Line,
        CurveMode::BezierN(2),
        CurveMode::Bezier3,
        CurveMode::BezierN(4),
        CurveMode::BezierN(5),
    ];

    /// Resolve a mode key, falling back to the default mode
    ///
    /// Accepted keys: `line`, `bezier`/`bezier3`/`cubic`, `bezier<N>` and
    /// `casteljau<N>` with `N >= 1`.
    pub fn from_key(key: &str) -> Self {
        match Self::parse_key(key) {
            Some(mode) => mode,
            None => {
                let fallback = Self::default();
                tracing::warn!(
                    "Unknown curve mode '{}', falling back to {}",
                    key,
                    fallback
                );
                fallback
            }
        }
    }

    /// Strict key parsing; `None` for unrecognized keys
    pub fn parse_key(key: &str) -> Option<Self> {
        let key = key.trim().to_ascii_lowercase();
        match key.as_str() {
            "line" => return Some(CurveMode::Line),
            "bezier" | "bezier3" | "cubic" => return Some(CurveMode::Bezier3),
            _ => {}
        }

        if let Some(degree) = key.strip_prefix("casteljau") {
            return parse_degree(degree).map(CurveMode::BezierN);
        }

        let degree = parse_degree(key.strip_prefix("bezier")?)?;
        if degree == 3 {
            Some(CurveMode::Bezier3)
        } else {
            Some(CurveMode::BezierN(degree))
        }
    }

    /// Canonical key; `from_key(mode.key())` returns `mode`
    pub fn key(&self) -> String {
        match self {
            CurveMode::Line => "line".to_string(),
            CurveMode::Bezier3 => "bezier3".to_string(),
            CurveMode::BezierN(3) => "casteljau3".to_string(),
            CurveMode::BezierN(n) => format!("bezier{n}"),
        }
    }

    /// Number of intermediate (non-anchor) points per segment
    pub fn handle_count(&self) -> usize {
        match self {
            CurveMode::Line => 0,
            CurveMode::Bezier3 => 2,
            CurveMode::BezierN(n) => n.saturating_sub(1),
        }
    }

    /// Segment stride: control points per segment minus one
    pub fn degree(&self) -> usize {
        self.handle_count() + 1
    }

    /// Short name for the toolbar
    pub fn display_name(&self) -> String {
        match self {
            CurveMode::Line => "Line".to_string(),
            CurveMode::Bezier3 => "Cubic".to_string(),
            CurveMode::BezierN(1) => "Linear".to_string(),
            CurveMode::BezierN(2) => "Quadratic".to_string(),
            CurveMode::BezierN(3) => "Cubic (De Casteljau)".to_string(),
            CurveMode::BezierN(4) => "Quartic".to_string(),
            CurveMode::BezierN(5) => "Quintic".to_string(),
            CurveMode::BezierN(n) => format!("Degree {n}"),
        }
    }
}

impl fmt::Display for CurveMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.key())
    }
}

fn parse_degree(digits: &str) -> Option<usize> {
    match digits.parse::<usize>() {
        Ok(n) if n >= 1 => Some(n),
        _ => None,
    }
}
