// Copyright 2025 the Curvepad Authors
// SPDX-License-Identifier: Apache-2.0

//! Central application state (`AppState`) that drives the Xilem reactive UI.
//!
//! `AppState` holds what the surrounding UI shows: the selected curve mode,
//! the cursor readout and the point count. The points themselves live in
//! the canvas widget's `InteractionController`; the mode is pushed into it
//! on rebuild and the readout comes back as a `CanvasUpdate` action.

use crate::components::CanvasUpdate;
use crate::config::Config;
use crate::curve::CurveMode;
use crate::editing::CursorReadout;
use kurbo::Size;
use xilem::WindowId;

/// Main application state
pub struct AppState {
    /// Active curve mode (selected from the toolbar)
    pub mode: CurveMode,

    /// Canvas size, fixed at startup
    pub canvas_size: Size,

    /// Last reported pointer position over the canvas
    pub readout: CursorReadout,

    /// Number of control points on the canvas
    pub point_count: usize,

    /// Whether the app should keep running
    pub running: bool,

    /// Main window ID (stable across rebuilds to prevent window
    /// recreation)
    pub main_window_id: WindowId,
}

impl AppState {
    /// Create the state for a validated canvas size
    pub fn new(mode: CurveMode, canvas_size: Size) -> Self {
        Self {
            mode,
            canvas_size,
            readout: CursorReadout::Unknown,
            point_count: 4,
            running: true,
            main_window_id: WindowId::next(),
        }
    }

    /// Build the state from a config, failing if the canvas is unusable
    pub fn from_config(config: &Config) -> anyhow::Result<Self> {
        let canvas_size = config.canvas_size()?;
        Ok(Self::new(config.initial_mode(), canvas_size))
    }

    /// Handle a mode-selection change carrying a mode key
    pub fn select_mode_key(&mut self, key: &str) {
        self.mode = CurveMode::from_key(key);
    }

    /// Apply a readout/point count change reported by the canvas
    pub fn apply_canvas_update(&mut self, update: CanvasUpdate) {
        self.readout = update.readout;
        self.point_count = update.point_count;
    }
}

/// Implement the Xilem AppState trait
impl xilem::AppState for AppState {
    fn keep_running(&self) -> bool {
        self.running
    }
}
