// Copyright 2025 the Curvepad Authors
// SPDX-License-Identifier: Apache-2.0

//! A single control point on the canvas

use crate::curve::CurveMode;
use kurbo::Point;

/// Identity of a point within its `PointSet`
///
/// Issued in insertion order by the owning set and never reused, so a drag
/// keeps hold of the same point while its coordinates change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PointId(pub(super) u32);

/// A control point placed by the user
///
/// The id and name never change once the point exists. Only the position
/// is mutated (by dragging).
#[derive(Debug, Clone, PartialEq)]
pub struct ControlPoint {
    /// Stable identity
    pub id: PointId,
    /// Display name ("startpoint", "point 5", ...)
    pub name: String,
    /// Canvas-relative position in pixels
    pub position: Point,
}

/// How a point is displayed under the active curve mode
///
/// Not stored on the point: the same point can be an anchor in one mode
/// and a handle in another.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointCategory {
    /// The curve passes through this point
    Anchor,
    /// Shapes the curve without lying on it
    Handle,
}

impl PointCategory {
    /// Category of the point at `index` when segmented by `mode`
    pub fn for_index(index: usize, mode: CurveMode) -> Self {
        if index % mode.degree() == 0 {
            PointCategory::Anchor
        } else {
            PointCategory::Handle
        }
    }
}
