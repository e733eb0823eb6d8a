// Copyright 2025 the Curvepad Authors
// SPDX-License-Identifier: Apache-2.0

//! Application settings and configuration constants.
//!
//! This module holds non-visual settings that stay stable across theme
//! changes. Visual styling (colors, sizes) belongs in `theme.rs`. Values a
//! user may want to change per machine live in `config.rs`.

use std::time::Duration;

// ============================================================================
// CURVE SAMPLING
// ============================================================================
/// Parameter step between curve samples (60 samples per segment)
const SAMPLE_DELTA: f64 = 1.0 / 60.0;

// ============================================================================
// POINTER INTERACTION
// ============================================================================
/// Half-width of the square around a point that counts as a hit (pixels)
const HIT_RADIUS: f64 = 12.0;

/// Longest press that still counts as a click (creates a point)
const CLICK_THRESHOLD_MS: u64 = 300;

// ============================================================================
// CANVAS DEFAULTS
// ============================================================================
/// Canvas width when no config file overrides it
const CANVAS_WIDTH: f64 = 1200.0;

/// Canvas height when no config file overrides it
const CANVAS_HEIGHT: f64 = 700.0;

/// Space reserved above the canvas for the toolbar and readout
const CHROME_HEIGHT: f64 = 72.0;

/// Margin around the canvas and panels
const WINDOW_MARGIN: f64 = 16.0;

/// Config file looked up in the working directory
const CONFIG_FILE_NAME: &str = "curvepad.toml";

// ============================================================================
// PUBLIC API - Don't edit below this line unless you know what you're doing
// ============================================================================

/// Curve sampling settings
pub mod sampling {
    /// Parameter step Δ; the sampler walks `t = 0, Δ, 2Δ, ...`
    pub const DELTA: f64 = super::SAMPLE_DELTA;
}

/// Pointer interaction settings
pub mod interaction {
    use std::time::Duration;

    /// Hit radius for grabbing a point (pixels)
    pub const HIT_RADIUS: f64 = super::HIT_RADIUS;

    /// A press released within this time creates a point
    pub const CLICK_THRESHOLD: Duration = super::click_threshold();
}

/// Canvas and window defaults
pub mod canvas {
    pub const WIDTH: f64 = super::CANVAS_WIDTH;
    pub const HEIGHT: f64 = super::CANVAS_HEIGHT;

    /// Extra window height above the canvas
    pub const CHROME_HEIGHT: f64 = super::CHROME_HEIGHT;

    /// Margin between the window edge and the canvas
    pub const MARGIN: f64 = super::WINDOW_MARGIN;
}

/// Config file location
pub mod config {
    pub const FILE_NAME: &str = super::CONFIG_FILE_NAME;
}

const fn click_threshold() -> Duration {
    Duration::from_millis(CLICK_THRESHOLD_MS)
}
