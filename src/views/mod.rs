// Copyright 2025 the Curvepad Authors
// SPDX-License-Identifier: Apache-2.0

//! Top-level views

mod canvas;

pub use canvas::canvas_tab;
