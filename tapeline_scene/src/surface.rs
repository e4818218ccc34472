// Copyright 2026 the Tapeline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The scene-surface trait the measurement core drives.

use kurbo::{Point, Size};
use smallvec::SmallVec;
use tapeline_session::SceneEvent;

use crate::types::{SurfaceHit, SurfaceQuery};

/// Hit-test candidates, best first. Real scenes rarely produce more than a
/// couple of candidates per query, so the list stays inline.
pub type HitCandidates = SmallVec<[SurfaceHit; 4]>;

/// A tracked, renderable scene the measurement core can query and draw into.
///
/// Implementations wrap whatever actually renders: a platform AR view, a
/// test double, a headless recorder. The contract is narrow on purpose:
/// hit-test a screen point, apply render intents, report the viewport. All
/// calls arrive on the single logical thread that owns the measurement
/// screen; implementations that receive platform callbacks on background
/// contexts must marshal them before touching shared state.
pub trait SceneSurface {
    /// Size of the rendered viewport in screen points.
    ///
    /// The measurement screen aims its crosshair at the center of this.
    fn viewport(&self) -> Size;

    /// Query which real-world surfaces lie behind `at`, restricted to the
    /// classes in `query`. Candidates come back best first; an empty list
    /// means no surface was found.
    fn hit_test(&self, at: Point, query: SurfaceQuery) -> HitCandidates;

    /// Bring visual artifacts in line with a batch of render intents.
    fn apply(&mut self, events: &[SceneEvent]);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::RecordingScene;
    use nalgebra::Point3;
    use tapeline_session::MeasureSession;

    #[test]
    fn scene_surface_is_object_safe() {
        let mut scene = RecordingScene::new();
        let surface: &mut dyn SceneSurface = &mut scene;
        assert!(surface.hit_test(Point::new(0.0, 0.0), SurfaceQuery::all()).is_empty());
    }

    #[test]
    fn applied_intents_round_trip_through_the_trait() {
        let mut session = MeasureSession::new();
        let mut scene = RecordingScene::new();

        let delta = session.add_point(Point3::new(0.0, 0.0, 0.0));
        scene.apply(&delta.events);

        assert_eq!(scene.applied(), &delta.events[..]);
    }
}
