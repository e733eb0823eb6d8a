// Copyright 2025 the Curvepad Authors
// SPDX-License-Identifier: Apache-2.0

//! Curve mode toolbar
//!
//! One button per mode in `CurveMode::TOOLBAR`. Clicking a button reports
//! the mode's key, the same string a config file uses.

use masonry::properties::Padding;
use masonry::properties::types::AsUnit;
use xilem::WidgetView;
use xilem::style::Style;
use xilem::view::{CrossAxisAlignment, button, flex_row, label, sized_box};

use crate::curve::CurveMode;
use crate::data::AppState;
use crate::theme;

/// Toolbar with one button per curve mode
pub fn mode_toolbar_view(selected: CurveMode) -> impl WidgetView<AppState> + use<> {
    let buttons: Vec<_> = CurveMode::TOOLBAR
        .iter()
        .map(|&mode| mode_button(mode, mode == selected))
        .collect();

    sized_box(
        flex_row(buttons)
            .gap(4.px())
            .cross_axis_alignment(CrossAxisAlignment::Center),
    )
    .padding(Padding::from_vh(4.0, 4.0))
    .background_color(theme::panel::BACKGROUND)
    .border_color(theme::panel::OUTLINE)
    .border_width(1.5)
    .corner_radius(theme::size::PANEL_RADIUS)
}

/// Single mode button
fn mode_button(mode: CurveMode, is_selected: bool) -> impl WidgetView<AppState> + use<> {
    let key = mode.key();
    let bg_color = if is_selected {
        theme::panel::BUTTON_SELECTED
    } else {
        theme::panel::BACKGROUND
    };
    let text_color = if is_selected {
        theme::panel::LIGHT_TEXT
    } else {
        theme::text::PRIMARY
    };

    button(
        label(mode.display_name())
            .text_size(14.0)
            .color(text_color),
        move |state: &mut AppState| {
            tracing::debug!("Mode toolbar: clicked {}", key);
            state.select_mode_key(&key);
        },
    )
    .background_color(bg_color)
    .border_color(theme::panel::BUTTON_OUTLINE)
}
