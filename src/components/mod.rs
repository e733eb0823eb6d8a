// Copyright 2025 the Curvepad Authors
// SPDX-License-Identifier: Apache-2.0

//! UI components for the Curvepad editor

pub mod coordinate_readout;
pub mod curve_canvas;
pub mod mode_toolbar;

// Re-export commonly used widget views and types
pub use coordinate_readout::coordinate_readout;
pub use curve_canvas::{CanvasUpdate, curve_canvas_view};
pub use mode_toolbar::mode_toolbar_view;
