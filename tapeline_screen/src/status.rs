// Copyright 2026 the Tapeline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Session status surfaced to the UI.

use tapeline_scene::TrackingState;

/// Coarse session health shown in the status chip.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub enum SessionStatus {
    /// The session is starting up; tracking has not stabilized.
    #[default]
    Initializing,
    /// Tracking is healthy; measuring works normally.
    Normal,
    /// Tracking is degraded; measurements may drift.
    LimitedTracking,
    /// AR is unavailable on this device or the session failed.
    NotAvailable,
}

impl From<TrackingState> for SessionStatus {
    fn from(state: TrackingState) -> Self {
        match state {
            TrackingState::Initializing => Self::Initializing,
            TrackingState::Normal => Self::Normal,
            TrackingState::Limited => Self::LimitedTracking,
            TrackingState::NotAvailable => Self::NotAvailable,
        }
    }
}

/// Prompt shown before any point is placed.
pub(crate) const PROMPT: &str = "Point the device at a surface to start measuring";

/// Advisory shown when a tap's hit-test finds no surface.
pub(crate) const NO_SURFACE: &str = "No surface detected - move device to find a surface";

/// Confirmation after placing a point on a tracked plane.
pub(crate) const PLACED_DETECTED: &str = "Point placed on detected surface";

/// Confirmation after placing a point on an estimated plane.
pub(crate) const PLACED_ESTIMATED: &str = "Point placed on estimated surface";

/// Advisory shown when AR is unavailable for the session.
pub(crate) const UNAVAILABLE: &str = "AR measurement is not available on this device";
