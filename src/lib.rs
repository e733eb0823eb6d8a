// Copyright 2025 the Curvepad Authors
// SPDX-License-Identifier: Apache-2.0

//! Curvepad: an interactive curve-editing canvas built with Xilem

use anyhow::Context;
use winit::dpi::LogicalSize;
use xilem::{EventLoopBuilder, WindowView, Xilem, window};

mod components;
mod config;
mod curve;
mod data;
mod editing;
mod model;
mod render;
mod settings;
mod theme;
mod views;

use config::Config;
use data::AppState;
use views::canvas_tab;

/// Entry point for the Curvepad application
pub fn run(event_loop: EventLoopBuilder) -> anyhow::Result<()> {
    // Initialize tracing subscriber (can be controlled via RUST_LOG env var)
    // Filter out noisy wgpu/naga shader compilation logs
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("curvepad=info".parse()?)
                .add_directive("wgpu=warn".parse()?)
                .add_directive("naga=warn".parse()?)
                .add_directive("wgpu_core=warn".parse()?)
                .add_directive("wgpu_hal=warn".parse()?),
        )
        .init();

    let config = Config::load_or_default(&config_path());
    let initial_state =
        AppState::from_config(&config).context("cannot start without a drawing surface")?;
    tracing::info!(
        "Starting with a {}x{} canvas in {} mode",
        initial_state.canvas_size.width,
        initial_state.canvas_size.height,
        initial_state.mode.display_name()
    );

    let app = Xilem::new(initial_state, app_logic);
    app.run_in(event_loop)?;
    Ok(())
}

/// Config path from the first command-line argument, or the default
fn config_path() -> std::path::PathBuf {
    match std::env::args().nth(1) {
        Some(path) => std::path::PathBuf::from(path),
        None => Config::default_path(),
    }
}

/// Build the single-window UI
fn app_logic(state: &mut AppState) -> impl Iterator<Item = WindowView<AppState>> + use<> {
    let margin = settings::canvas::MARGIN;
    let window_size = LogicalSize::new(
        state.canvas_size.width + 2.0 * margin,
        state.canvas_size.height + settings::canvas::CHROME_HEIGHT + 2.0 * margin,
    );
    let window_view = window(state.main_window_id, "Curvepad", canvas_tab(state));
    let window_with_options = window_view.with_options(|options| {
        options
            .with_initial_inner_size(window_size)
            .on_close(|state: &mut AppState| state.running = false)
    });

    std::iter::once(window_with_options)
}
