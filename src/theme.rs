// Copyright 2025 the Curvepad Authors
// SPDX-License-Identifier: Apache-2.0

//! Theme colors and constants
//!
//! All colors use hexadecimal format: Color::from_rgb8(0xRR, 0xGG, 0xBB)

use masonry::vello::peniko::Color;

// ============================================================================
// BASE COLORS -- Generic colors for UI, a dark to light gradient by default
// ============================================================================
const BASE_A: Color = Color::from_rgb8(0x10, 0x10, 0x10);
const BASE_B: Color = Color::from_rgb8(0x20, 0x20, 0x20);
const BASE_C: Color = Color::from_rgb8(0x30, 0x30, 0x30);
const BASE_F: Color = Color::from_rgb8(0x60, 0x60, 0x60);
const BASE_H: Color = Color::from_rgb8(0x80, 0x80, 0x80);
const BASE_I: Color = Color::from_rgb8(0x90, 0x90, 0x90);
const BASE_L: Color = Color::from_rgb8(0xc0, 0xc0, 0xc0);
const BASE_O: Color = Color::from_rgb8(0xf0, 0xf0, 0xf0);
const WHITE: Color = Color::from_rgb8(0xff, 0xff, 0xff);

// ============================================================================
// GLOBAL BACKGROUNDS
// ============================================================================
const APP_BACKGROUND: Color = BASE_B;
const CANVAS_BACKGROUND: Color = WHITE;
const CANVAS_OUTLINE: Color = BASE_F;

// ============================================================================
// UI TEXT AND LABELS
// ============================================================================
const PRIMARY_UI_TEXT: Color = BASE_L;
const SECONDARY_UI_TEXT: Color = BASE_I;

// ============================================================================
// UI PANELS (Mode toolbar, cursor readout)
// ============================================================================
const PANEL_BACKGROUND: Color = BASE_C;
const PANEL_OUTLINE: Color = BASE_F;
const MODE_BUTTON_SELECTED: Color = Color::from_rgb8(0x14, 0x64, 0x14);

// ============================================================================
// CURVE PATH
// ============================================================================
const PATH_STROKE: Color = Color::from_rgb8(0x2c, 0x2c, 0x2c);

// ============================================================================
// CONTROL POINT HANDLES
// ============================================================================
// Dashed guide lines joining consecutive points
const HANDLE_LINE: Color = BASE_H;

// Anchors (the curve passes through them)
const ANCHOR_POINT: Color = Color::from_rgb8(0x00, 0x00, 0x00);

// Handles (shape the curve from outside)
const HANDLE_POINT: Color = Color::from_rgb8(0x00, 0x00, 0xff);

// ============================================================================
// SIZES
// ============================================================================
const PATH_STROKE_WIDTH: f64 = 3.0;
const HANDLE_LINE_WIDTH: f64 = 1.5;
const HANDLE_LINE_DASH: [f64; 2] = [12.0, 6.0];
const POINT_BOX_SIZE: f64 = 10.0;
const PANEL_RADIUS: f64 = 8.0;

// ============================================================================
// PUBLIC API - Don't edit below this line unless you know what you're doing
// ============================================================================

/// Global application background color
pub mod app {
    use super::Color;
    pub const BACKGROUND: Color = super::APP_BACKGROUND;
}

/// Colors for the drawing canvas
pub mod canvas {
    use super::Color;
    pub const BACKGROUND: Color = super::CANVAS_BACKGROUND;
    pub const OUTLINE: Color = super::CANVAS_OUTLINE;
}

/// Colors for UI text
pub mod text {
    use super::Color;
    pub const PRIMARY: Color = super::PRIMARY_UI_TEXT;
    pub const SECONDARY: Color = super::SECONDARY_UI_TEXT;
}

/// Colors for UI panels (toolbar, readout)
pub mod panel {
    use super::Color;
    pub const BACKGROUND: Color = super::PANEL_BACKGROUND;
    pub const OUTLINE: Color = super::PANEL_OUTLINE;
    pub const BUTTON_SELECTED: Color = super::MODE_BUTTON_SELECTED;
    pub const BUTTON_OUTLINE: Color = super::BASE_A;
    pub const LIGHT_TEXT: Color = super::BASE_O;
}

/// Colors for the sampled curve
pub mod path {
    use super::Color;
    pub const STROKE: Color = super::PATH_STROKE;
}

/// Colors for handle guide lines
pub mod handle {
    use super::Color;
    pub const LINE: Color = super::HANDLE_LINE;
}

/// Colors for control point squares
pub mod point {
    use super::Color;
    pub const ANCHOR: Color = super::ANCHOR_POINT;
    pub const HANDLE: Color = super::HANDLE_POINT;
}

/// Sizes and stroke widths
pub mod size {
    pub const PATH_STROKE_WIDTH: f64 = super::PATH_STROKE_WIDTH;
    pub const HANDLE_LINE_WIDTH: f64 = super::HANDLE_LINE_WIDTH;
    pub const HANDLE_LINE_DASH: [f64; 2] = super::HANDLE_LINE_DASH;
    pub const POINT_BOX_SIZE: f64 = super::POINT_BOX_SIZE;
    pub const PANEL_RADIUS: f64 = super::PANEL_RADIUS;
}
