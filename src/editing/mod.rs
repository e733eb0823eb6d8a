// Copyright 2025 the Curvepad Authors
// SPDX-License-Identifier: Apache-2.0

//! Editing model and interaction

pub mod controller;
pub mod event;

pub use controller::InteractionController;
pub use event::{CursorReadout, PointerEvent};
