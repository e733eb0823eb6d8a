// Copyright 2025 the Curvepad Authors
// SPDX-License-Identifier: Apache-2.0

//! Control point data model

pub mod point;
pub mod point_set;

pub use point::{PointCategory, PointId};
pub use point_set::PointSet;
