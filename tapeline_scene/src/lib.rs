// Copyright 2026 the Tapeline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tapeline Scene: the seam between measurement logic and a tracked scene.
//!
//! The measurement core never talks to an AR framework directly. Everything
//! it needs from the platform ("what surface lies behind this screen
//! point", "draw these artifacts") goes through the [`SceneSurface`] trait,
//! and everything the platform reports back (tracking quality, plane
//! anchors) arrives as plain data types defined here.
//!
//! ## Hit-testing
//!
//! [`SceneSurface::hit_test`] takes a screen-space [`kurbo::Point`] and a
//! [`SurfaceQuery`] mask describing which surface classes may answer, and
//! returns a small best-first candidate list of [`SurfaceHit`]s. Callers
//! take the first candidate; an empty list means no surface was found and
//! the operation simply does not place a point.
//!
//! ## Rendering
//!
//! [`SceneSurface::apply`] receives the batched
//! [`SceneEvent`](tapeline_session::SceneEvent) intents a session mutation
//! produced. The trait implementation owns every visual decision; the core
//! only names the artifacts.
//!
//! ## Plane classification
//!
//! The [`planes`] module is an independent, optional consumer of the
//! platform's plane-update feed: it filters plane anchors down to
//! plausibly-rectangular tabletop objects. Nothing in the measurement state
//! machine depends on it.
//!
//! [`RecordingScene`] is a reference implementation used by tests and demos:
//! it models the single surface under the crosshair and records applied
//! intents verbatim.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod planes;
mod recording;
mod surface;
mod types;

pub use recording::RecordingScene;
pub use surface::{HitCandidates, SceneSurface};
pub use types::{SurfaceHit, SurfaceQuery, TrackingState};
