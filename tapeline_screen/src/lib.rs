// Copyright 2026 the Tapeline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tapeline Screen: the measurement screen controller.
//!
//! [`MeasureScreen`] is the single logical owner of a measurement: it holds
//! the [`MeasureSession`](tapeline_session::MeasureSession), drives a
//! [`SceneSurface`](tapeline_scene::SceneSurface), derives the UI-facing
//! status, and reports terminal outcomes (cancel, submit) through the
//! [`ScreenDelegate`] seam.
//!
//! ## Serialized mutation
//!
//! Every mutating entry point takes `&mut self`, so the controller can only
//! ever be driven from one logical thread. Platforms that deliver scene
//! callbacks (tracking changes, frame probes, plane updates) on background
//! contexts enqueue them as [`ScreenCommand`]s through a [`CommandSender`]
//! (a cheap, clonable handle) and the owning thread drains the
//! [`CommandQueue`] in order. User-interaction events can go through the
//! same queue or call the screen directly when they already originate on
//! the owning thread.
//!
//! ## Failure behavior
//!
//! Nothing here is fatal. A missed hit-test leaves the session untouched
//! and updates the advisory status text; an unsupported device marks the
//! screen unavailable once, terminally, for the whole session; invalid
//! state-machine transitions are silently ignored upstream.

mod command;
mod screen;
mod status;

pub use command::{CommandQueue, CommandSender, ScreenCommand};
pub use screen::{MeasureScreen, ScreenDelegate, SurfaceProbe};
pub use status::SessionStatus;
