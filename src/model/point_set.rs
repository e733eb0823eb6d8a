// Copyright 2025 the Curvepad Authors
// SPDX-License-Identifier: Apache-2.0

//! The ordered collection of control points being edited.
//!
//! Insertion order is the curve topology: consecutive points form segments
//! and the earliest point wins a hit test when several overlap. The set only
//! grows; dragging rewrites coordinates but never identity or order.

use super::point::{ControlPoint, PointCategory, PointId};
use crate::curve::CurveMode;
use kurbo::Point;

/// Ordered, append-only set of control points
#[derive(Debug, Clone, Default)]
pub struct PointSet {
    points: Vec<ControlPoint>,
    next_id: u32,
}

impl PointSet {
    /// Create an empty point set
    pub fn new() -> Self {
        Self {
            points: Vec::new(),
            next_id: 0,
        }
    }

    /// The four starting points for a canvas `width` pixels wide
    pub fn seeded(width: f64) -> Self {
        let mut set = Self::new();
        set.insert("startpoint", Point::new(200.0, 100.0));
        set.insert("control point 1", Point::new(300.0, 300.0));
        set.insert("control point 2", Point::new(width - 300.0, 300.0));
        set.insert("endpoint", Point::new(width - 200.0, 100.0));
        set
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Iterate over points in insertion order
    pub fn iter(&self) -> impl Iterator<Item = &ControlPoint> {
        self.points.iter()
    }

    pub fn as_slice(&self) -> &[ControlPoint] {
        &self.points
    }

    /// Look up a point by id
    pub fn get(&self, id: PointId) -> Option<&ControlPoint> {
        self.points.iter().find(|pt| pt.id == id)
    }

    /// Positions in insertion order
    pub fn positions(&self) -> Vec<Point> {
        self.points.iter().map(|pt| pt.position).collect()
    }

    /// Create a new point at the end, named after the new size
    pub fn append(&mut self, position: Point) -> PointId {
        let name = format!("point {}", self.points.len() + 1);
        tracing::debug!("[PointSet::append] {} at {:?}", name, position);
        self.insert(name, position)
    }

    fn insert(&mut self, name: impl Into<String>, position: Point) -> PointId {
        let id = PointId(self.next_id);
        self.next_id += 1;
        self.points.push(ControlPoint {
            id,
            name: name.into(),
            position,
        });
        id
    }

    /// Overwrite the coordinates of an existing point
    ///
    /// Returns false if no point has this id.
    pub fn mutate(&mut self, id: PointId, position: Point) -> bool {
        match self.points.iter_mut().find(|pt| pt.id == id) {
            Some(pt) => {
                pt.position = position;
                true
            }
            None => false,
        }
    }

    /// First point whose square of half-width `radius` contains `position`
    ///
    /// The square is closed: a pointer exactly `radius` away on either axis
    /// still hits.
    pub fn hit_test(&self, position: Point, radius: f64) -> Option<PointId> {
        self.points
            .iter()
            .find(|pt| square_contains(pt.position, radius, position))
            .map(|pt| pt.id)
    }

    /// Display category of the point at `index` under `mode`
    pub fn category_of(&self, index: usize, mode: CurveMode) -> PointCategory {
        PointCategory::for_index(index, mode)
    }
}

fn square_contains(center: Point, half_width: f64, p: Point) -> bool {
    p.x >= center.x - half_width
        && p.x <= center.x + half_width
        && p.y >= center.y - half_width
        && p.y <= center.y + half_width
}
