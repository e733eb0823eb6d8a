// Copyright 2025 the Curvepad Authors
// SPDX-License-Identifier: Apache-2.0

//! Cursor coordinate readout - shows where the pointer is on the canvas

use masonry::properties::Padding;
use masonry::properties::types::AsUnit;
use xilem::WidgetView;
use xilem::style::Style;
use xilem::view::{CrossAxisAlignment, flex_row, label, sized_box};

use crate::data::AppState;
use crate::editing::CursorReadout;
use crate::theme;

/// Width of the readout panel
const READOUT_WIDTH: f64 = 260.0;

/// Readout of the pointer position plus the number of points
pub fn coordinate_readout(
    readout: CursorReadout,
    point_count: usize,
) -> impl WidgetView<AppState> + use<> {
    sized_box(
        flex_row((
            field("X", readout.x_text()),
            field("Y", readout.y_text()),
            label(format!("{point_count} points"))
                .text_size(12.0)
                .color(theme::text::SECONDARY),
        ))
        .gap(12.px())
        .cross_axis_alignment(CrossAxisAlignment::Center),
    )
    .width(READOUT_WIDTH.px())
    .padding(Padding::from_vh(8.0, 8.0))
    .background_color(theme::panel::BACKGROUND)
    .border_color(theme::panel::OUTLINE)
    .border_width(1.5)
    .corner_radius(theme::size::PANEL_RADIUS)
}

/// Label/value pair
fn field(name: &'static str, value: String) -> impl WidgetView<AppState> + use<> {
    flex_row((
        label(name).text_size(12.0).color(theme::text::SECONDARY),
        label(value).text_size(14.0).color(theme::text::PRIMARY),
    ))
    .gap(4.px())
}
