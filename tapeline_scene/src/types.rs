// Copyright 2026 the Tapeline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Hit-test queries and results, and scene tracking state.

use nalgebra::{Point3, Vector3};

bitflags::bitflags! {
    /// Surface classes a hit-test query may match.
    ///
    /// Detected planes are surfaces the platform has locked onto with a
    /// tracked extent; estimated planes are provisional fits. Queries
    /// usually pass [`SurfaceQuery::all`] and let result ordering prefer
    /// the better class.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct SurfaceQuery: u8 {
        /// A tracked plane with a known extent.
        const DETECTED_PLANE       = 0b0000_0001;
        /// A provisional horizontal plane estimate.
        const ESTIMATED_HORIZONTAL = 0b0000_0010;
        /// A provisional vertical plane estimate.
        const ESTIMATED_VERTICAL   = 0b0000_0100;
    }
}

impl SurfaceQuery {
    /// Whether this class represents a tracked (non-provisional) surface.
    pub fn is_detected(self) -> bool {
        self.contains(Self::DETECTED_PLANE)
    }
}

/// One hit-test candidate: a world-space position on a real surface.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SurfaceHit {
    /// World-space position of the hit, in meters.
    pub position: Point3<f32>,
    /// Surface normal at the hit.
    pub normal: Vector3<f32>,
    /// Distance from the viewpoint to the hit, in meters.
    pub distance: f32,
    /// Which surface class answered (a single [`SurfaceQuery`] flag).
    pub kind: SurfaceQuery,
}

/// Quality of world tracking as reported by the scene.
///
/// Informational only: it is surfaced to the UI as a status indicator and
/// never consulted by the measurement state machine.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub enum TrackingState {
    /// Tracking has not produced a stable estimate yet.
    #[default]
    Initializing,
    /// Tracking is healthy.
    Normal,
    /// Tracking is degraded (poor light, fast motion, low texture).
    Limited,
    /// Tracking is unavailable on this device or session.
    NotAvailable,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_query_mask_covers_every_class() {
        let all = SurfaceQuery::all();
        assert!(all.contains(SurfaceQuery::DETECTED_PLANE));
        assert!(all.contains(SurfaceQuery::ESTIMATED_HORIZONTAL));
        assert!(all.contains(SurfaceQuery::ESTIMATED_VERTICAL));
    }

    #[test]
    fn only_detected_planes_are_detected() {
        assert!(SurfaceQuery::DETECTED_PLANE.is_detected());
        assert!(!SurfaceQuery::ESTIMATED_HORIZONTAL.is_detected());
        assert!(!SurfaceQuery::ESTIMATED_VERTICAL.is_detected());
    }
}
