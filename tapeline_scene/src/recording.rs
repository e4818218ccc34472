// Copyright 2026 the Tapeline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A headless reference scene for tests and demos.

use alloc::vec::Vec;

use kurbo::{Point, Size};
use nalgebra::{Point3, Vector3};
use smallvec::smallvec;
use tapeline_session::SceneEvent;

use crate::surface::{HitCandidates, SceneSurface};
use crate::types::{SurfaceHit, SurfaceQuery};

/// A [`SceneSurface`] double that models the one surface under the
/// crosshair and records every applied intent verbatim.
///
/// A real scene resolves hits by ray-casting against tracked planes; this
/// one is driven explicitly. Aim it at a world position with
/// [`RecordingScene::aim_at`] (the next center hit-test answers with that
/// position) or at nothing to simulate a miss. In a live session the
/// device moves between taps; here, re-aiming plays that role.
#[derive(Clone, Debug)]
pub struct RecordingScene {
    viewport: Size,
    viewpoint: Point3<f32>,
    target: Option<(SurfaceQuery, Point3<f32>, Vector3<f32>)>,
    applied: Vec<SceneEvent>,
}

impl Default for RecordingScene {
    fn default() -> Self {
        Self::new()
    }
}

impl RecordingScene {
    /// A scene with a phone-shaped viewport and the viewpoint at standing
    /// eye height, aimed at nothing.
    pub fn new() -> Self {
        Self {
            viewport: Size::new(390.0, 844.0),
            viewpoint: Point3::new(0.0, 1.6, 0.0),
            target: None,
            applied: Vec::new(),
        }
    }

    /// Override the viewport size.
    pub fn with_viewport(mut self, viewport: Size) -> Self {
        self.viewport = viewport;
        self
    }

    /// Place the surface under the crosshair: the next hit-test whose query
    /// mask includes `kind` answers with `position`.
    pub fn aim_at(&mut self, kind: SurfaceQuery, position: Point3<f32>) {
        self.aim_at_oriented(kind, position, Vector3::y());
    }

    /// Like [`RecordingScene::aim_at`], with an explicit surface normal.
    pub fn aim_at_oriented(
        &mut self,
        kind: SurfaceQuery,
        position: Point3<f32>,
        normal: Vector3<f32>,
    ) {
        self.target = Some((kind, position, normal));
    }

    /// Aim at nothing; subsequent hit-tests miss.
    pub fn aim_at_nothing(&mut self) {
        self.target = None;
    }

    /// Every intent applied so far, in order.
    pub fn applied(&self) -> &[SceneEvent] {
        &self.applied
    }

    /// Drop the recorded intents (the simulated target is untouched).
    pub fn reset_recording(&mut self) {
        self.applied.clear();
    }
}

impl SceneSurface for RecordingScene {
    fn viewport(&self) -> Size {
        self.viewport
    }

    fn hit_test(&self, _at: Point, query: SurfaceQuery) -> HitCandidates {
        // Only the surface under the crosshair is modeled; the screen-space
        // coordinate is accepted but does not select between surfaces.
        match self.target {
            Some((kind, position, normal)) if query.intersects(kind) => {
                smallvec![SurfaceHit {
                    position,
                    normal,
                    distance: (position - self.viewpoint).norm(),
                    kind,
                }]
            }
            _ => HitCandidates::new(),
        }
    }

    fn apply(&mut self, events: &[SceneEvent]) {
        self.applied.extend_from_slice(events);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unaimed_scene_misses() {
        let scene = RecordingScene::new();
        let hits = scene.hit_test(Point::new(10.0, 10.0), SurfaceQuery::all());
        assert!(hits.is_empty());
    }

    #[test]
    fn aimed_scene_answers_with_the_target() {
        let mut scene = RecordingScene::new();
        scene.aim_at(SurfaceQuery::ESTIMATED_HORIZONTAL, Point3::new(1.0, 0.0, 2.0));

        let hits = scene.hit_test(Point::new(195.0, 422.0), SurfaceQuery::all());
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].position, Point3::new(1.0, 0.0, 2.0));
        assert_eq!(hits[0].kind, SurfaceQuery::ESTIMATED_HORIZONTAL);
        assert!(hits[0].distance > 0.0);
    }

    #[test]
    fn query_mask_filters_the_target_class() {
        let mut scene = RecordingScene::new();
        scene.aim_at(SurfaceQuery::ESTIMATED_VERTICAL, Point3::new(0.0, 1.0, -1.0));

        let hits = scene.hit_test(Point::new(0.0, 0.0), SurfaceQuery::DETECTED_PLANE);
        assert!(hits.is_empty());

        let hits = scene.hit_test(
            Point::new(0.0, 0.0),
            SurfaceQuery::DETECTED_PLANE | SurfaceQuery::ESTIMATED_VERTICAL,
        );
        assert_eq!(hits.len(), 1);
    }

    #[test]
    fn reaiming_replaces_the_target() {
        let mut scene = RecordingScene::new();
        scene.aim_at(SurfaceQuery::DETECTED_PLANE, Point3::origin());
        scene.aim_at_nothing();
        assert!(
            scene
                .hit_test(Point::new(0.0, 0.0), SurfaceQuery::all())
                .is_empty()
        );
    }
}
