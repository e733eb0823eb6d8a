// Copyright 2025 the Curvepad Authors
// SPDX-License-Identifier: Apache-2.0

//! Canvas view - mode toolbar and readout above the drawing surface

use masonry::properties::Padding;
use masonry::properties::types::AsUnit;
use xilem::WidgetView;
use xilem::style::Style;
use xilem::view::{CrossAxisAlignment, MainAxisAlignment, flex_col, flex_row, sized_box};

use crate::components::{CanvasUpdate, coordinate_readout, curve_canvas_view, mode_toolbar_view};
use crate::data::AppState;
use crate::settings;
use crate::theme;

/// Main view: toolbar row on top, canvas below
pub fn canvas_tab(state: &mut AppState) -> impl WidgetView<AppState> + use<> {
    let chrome = flex_row((
        mode_toolbar_view(state.mode),
        coordinate_readout(state.readout, state.point_count),
    ))
    .main_axis_alignment(MainAxisAlignment::SpaceBetween)
    .cross_axis_alignment(CrossAxisAlignment::Center);

    let canvas = curve_canvas_view(
        state.mode,
        state.canvas_size,
        |state: &mut AppState, update: CanvasUpdate| {
            state.apply_canvas_update(update);
        },
    );

    sized_box(
        flex_col((chrome, canvas))
            .gap(settings::canvas::MARGIN.px())
            .cross_axis_alignment(CrossAxisAlignment::Start),
    )
    .padding(Padding::from_vh(settings::canvas::MARGIN, settings::canvas::MARGIN))
    .background_color(theme::app::BACKGROUND)
}
