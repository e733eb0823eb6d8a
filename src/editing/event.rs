// Copyright 2025 the Curvepad Authors
// SPDX-License-Identifier: Apache-2.0

//! Pointer input as seen by the interaction controller

use kurbo::Point;
use std::fmt;
use std::time::Duration;

/// A pointer event in canvas coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerEvent {
    /// Position relative to the canvas origin (pixels)
    pub position: Point,
    /// Time since an arbitrary fixed epoch
    pub timestamp: Duration,
}

impl PointerEvent {
    pub fn new(position: impl Into<Point>, timestamp: Duration) -> Self {
        Self {
            position: position.into(),
            timestamp,
        }
    }
}

/// Live cursor position shown next to the canvas
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum CursorReadout {
    /// Pointer is over the canvas at these canvas coordinates
    At(Point),
    /// Pointer is outside the canvas
    #[default]
    Unknown,
}

impl CursorReadout {
    /// Text for the x field
    pub fn x_text(&self) -> String {
        match self {
            CursorReadout::At(p) => format!("{:.0}", p.x),
            CursorReadout::Unknown => "?".to_string(),
        }
    }

    /// Text for the y field
    pub fn y_text(&self) -> String {
        match self {
            CursorReadout::At(p) => format!("{:.0}", p.y),
            CursorReadout::Unknown => "?".to_string(),
        }
    }
}

impl fmt::Display for CursorReadout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "x: {}  y: {}", self.x_text(), self.y_text())
    }
}
