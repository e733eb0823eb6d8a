// Copyright 2025 the Curvepad Authors
// SPDX-License-Identifier: Apache-2.0

//! Curvepad: an interactive curve-editing canvas built with Xilem

use xilem::EventLoop;

fn main() -> anyhow::Result<()> {
    curvepad::run(EventLoop::with_user_event())
}
