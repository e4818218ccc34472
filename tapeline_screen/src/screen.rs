// Copyright 2026 the Tapeline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The measurement screen controller.

use kurbo::Point;
use tracing::{debug, trace};

use tapeline_format::{format_dimensions, format_distance};
use tapeline_geometry::Vector3;
use tapeline_scene::planes::{DetectedObject, PlaneAnchor, PlaneClassifier};
use tapeline_scene::{SceneSurface, SurfaceHit, SurfaceQuery, TrackingState};
use tapeline_session::{MeasureSession, MeasurementResult, Phase};

use crate::command::ScreenCommand;
use crate::status::{
    NO_SURFACE, PLACED_DETECTED, PLACED_ESTIMATED, PROMPT, SessionStatus, UNAVAILABLE,
};

/// Terminal outcomes of a measurement, reported to whoever opened the
/// screen.
///
/// The host-side adapter implements this and forwards across whatever
/// channel connects the native screen to the host application.
pub trait ScreenDelegate {
    /// The screen was dismissed without a result.
    fn dismissed(&mut self);

    /// The user submitted; `result` is the final snapshot.
    fn submitted(&mut self, result: MeasurementResult);
}

/// Continuous crosshair feedback from the per-frame surface probe.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SurfaceProbe {
    /// Whether a surface currently sits under the crosshair.
    pub surface_detected: bool,
    /// Distance from the viewpoint to that surface, in meters.
    pub depth: f32,
    /// Normal of that surface. Retains its last value across misses.
    pub normal: Vector3<f32>,
}

impl Default for SurfaceProbe {
    fn default() -> Self {
        Self {
            surface_detected: false,
            depth: 0.0,
            normal: Vector3::y(),
        }
    }
}

/// The measurement screen: session, scene, status, and overlay state under
/// a single owner.
///
/// All mutation goes through `&mut self`; see the crate docs for the
/// marshalling contract.
#[derive(Debug)]
pub struct MeasureScreen<S> {
    session: MeasureSession,
    scene: S,
    status: SessionStatus,
    status_text: String,
    probe: SurfaceProbe,
    classifier: PlaneClassifier,
    object_detection: bool,
    unavailable: bool,
}

impl<S: SceneSurface> MeasureScreen<S> {
    /// Wrap a scene surface into a fresh measurement screen.
    pub fn new(scene: S) -> Self {
        Self {
            session: MeasureSession::new(),
            scene,
            status: SessionStatus::Initializing,
            status_text: PROMPT.to_owned(),
            probe: SurfaceProbe::default(),
            classifier: PlaneClassifier::new(),
            object_detection: false,
            unavailable: false,
        }
    }

    /// Apply one serialized command.
    pub fn handle<D: ScreenDelegate>(&mut self, command: ScreenCommand, delegate: &mut D) {
        match command {
            ScreenCommand::Tap => {
                self.tap();
            }
            ScreenCommand::Undo => self.undo(),
            ScreenCommand::Clear => self.clear(),
            ScreenCommand::ClosePolygon => self.close_polygon(),
            ScreenCommand::Cancel => self.cancel(delegate),
            ScreenCommand::Submit => self.submit(delegate),
            ScreenCommand::SetObjectDetection(enabled) => self.set_object_detection(enabled),
            ScreenCommand::TrackingChanged(state) => self.on_tracking_changed(state),
            ScreenCommand::SurfaceProbe(hits) => self.on_surface_probe(&hits),
            ScreenCommand::PlaneUpdate(anchors) => self.on_plane_update(&anchors),
            ScreenCommand::SessionFailed => self.on_session_failure(),
        }
    }

    /// Place a point at the surface under the crosshair.
    ///
    /// Returns `true` when a point was placed. A miss updates the advisory
    /// status text and changes nothing else; a tap while the polygon is
    /// closed is ignored.
    pub fn tap(&mut self) -> bool {
        if self.unavailable {
            trace!("tap ignored: AR unavailable");
            return false;
        }

        let hits = self.scene.hit_test(self.crosshair(), SurfaceQuery::all());
        let Some(hit) = hits.first().copied() else {
            debug!("hit-test miss at crosshair");
            self.status_text = NO_SURFACE.to_owned();
            return false;
        };

        let delta = self.session.add_point(hit.position);
        if delta.is_empty() {
            trace!("point rejected: polygon closed");
            return false;
        }

        self.scene.apply(&delta.events);
        self.status_text = if hit.kind.is_detected() {
            PLACED_DETECTED.to_owned()
        } else {
            PLACED_ESTIMATED.to_owned()
        };
        debug!(
            points = self.session.points().len(),
            total = self.session.total_distance(),
            "point placed"
        );
        true
    }

    /// Undo the most recent step (point placement or polygon close).
    pub fn undo(&mut self) {
        let delta = self.session.undo_last();
        if delta.is_empty() {
            trace!("undo ignored: nothing to undo");
            return;
        }
        self.scene.apply(&delta.events);
        debug!(points = self.session.points().len(), "undid last step");
    }

    /// Clear the measurement and any recognized objects.
    pub fn clear(&mut self) {
        let delta = self.session.clear();
        self.scene.apply(&delta.events);
        self.classifier.clear();
        debug!("measurements cleared");
    }

    /// Close the boundary into a polygon, when allowed.
    pub fn close_polygon(&mut self) {
        let delta = self.session.close_polygon();
        if delta.is_empty() {
            trace!(
                points = self.session.points().len(),
                closed = self.session.is_polygon_closed(),
                "close ignored"
            );
            return;
        }
        self.scene.apply(&delta.events);
        debug!(total = self.session.total_distance(), "polygon closed");
    }

    /// Discard everything and dismiss without a result.
    pub fn cancel<D: ScreenDelegate>(&mut self, delegate: &mut D) {
        let delta = self.session.clear();
        self.scene.apply(&delta.events);
        self.classifier.clear();
        debug!("measurement canceled");
        delegate.dismissed();
    }

    /// Snapshot the measurement and hand it to the delegate.
    ///
    /// Permitted in any phase; an empty session produces a zero-valued
    /// result, so UIs disable their submit affordance via
    /// [`MeasureScreen::can_submit`].
    pub fn submit<D: ScreenDelegate>(&mut self, delegate: &mut D) {
        let result = self.session.snapshot();
        debug!(
            lines = result.lines.len(),
            total = result.total_distance,
            "measurement submitted"
        );
        delegate.submitted(result);
    }

    /// Record a tracking-quality change from the scene.
    ///
    /// Ignored after the session has been marked unavailable; that state
    /// is terminal for the session.
    pub fn on_tracking_changed(&mut self, state: TrackingState) {
        if self.unavailable {
            trace!(?state, "tracking update ignored: session unavailable");
            return;
        }
        let status = SessionStatus::from(state);
        if status != self.status {
            debug!(?status, "session status changed");
        }
        self.status = status;
    }

    /// Record a scene-session failure. Terminal: AR stays unavailable.
    pub fn on_session_failure(&mut self) {
        self.mark_unavailable();
    }

    /// Mark AR as unavailable for the rest of this session (unsupported
    /// device, failed session). Reported once via the status text.
    pub fn mark_unavailable(&mut self) {
        if self.unavailable {
            return;
        }
        self.unavailable = true;
        self.status = SessionStatus::NotAvailable;
        self.status_text = UNAVAILABLE.to_owned();
        debug!("AR marked unavailable for this session");
    }

    /// Feed the per-frame crosshair probe result.
    pub fn on_surface_probe(&mut self, hits: &[SurfaceHit]) {
        match hits.first() {
            Some(hit) => {
                self.probe.surface_detected = true;
                self.probe.depth = hit.distance;
                self.probe.normal = hit.normal;
            }
            None => {
                self.probe.surface_detected = false;
                self.probe.depth = 0.0;
            }
        }
    }

    /// Feed a batch of plane-anchor updates into object recognition.
    ///
    /// A no-op while the recognition toggle is off.
    pub fn on_plane_update(&mut self, anchors: &[PlaneAnchor]) {
        if !self.object_detection {
            return;
        }
        for anchor in anchors {
            if let Some(object) = self.classifier.observe(anchor) {
                debug!(
                    id = object.id.0,
                    dimensions = %format_dimensions(object.width, object.height),
                    "object recognized"
                );
            }
        }
    }

    /// Toggle rectangular-object recognition. Disabling drops every
    /// recognized object.
    pub fn set_object_detection(&mut self, enabled: bool) {
        self.object_detection = enabled;
        if !enabled {
            self.classifier.clear();
        }
        debug!(enabled, "object detection toggled");
    }

    /// Whether object recognition is currently on.
    pub fn object_detection(&self) -> bool {
        self.object_detection
    }

    /// The recognized objects, for overlay rendering.
    pub fn detected_objects(&self) -> impl Iterator<Item = &DetectedObject> {
        self.classifier.objects()
    }

    /// Display label for a recognized object's dimensions.
    pub fn dimensions_label(&self, object: &DetectedObject) -> String {
        format_dimensions(object.width, object.height)
    }

    /// The underlying session (read-only).
    pub fn session(&self) -> &MeasureSession {
        &self.session
    }

    /// The scene surface (read-only).
    pub fn scene(&self) -> &S {
        &self.scene
    }

    /// The scene surface, mutably. Platform glue uses this to feed the
    /// scene itself; measurement state is only reachable through commands.
    pub fn scene_mut(&mut self) -> &mut S {
        &mut self.scene
    }

    /// Coarse session health.
    pub fn status(&self) -> SessionStatus {
        self.status
    }

    /// The current advisory status line.
    pub fn status_text(&self) -> &str {
        &self.status_text
    }

    /// Latest crosshair probe state.
    pub fn probe(&self) -> SurfaceProbe {
        self.probe
    }

    /// Current phase of the measurement state machine.
    pub fn phase(&self) -> Phase {
        self.session.phase()
    }

    /// The running total, formatted for display.
    pub fn formatted_total_distance(&self) -> String {
        format_distance(self.session.total_distance())
    }

    /// Whether an undo would change anything.
    pub fn can_undo(&self) -> bool {
        self.session.can_undo()
    }

    /// Whether the boundary can currently be closed.
    pub fn can_close_polygon(&self) -> bool {
        self.session.can_close_polygon()
    }

    /// Whether submitting would carry a meaningful result.
    pub fn can_submit(&self) -> bool {
        self.session.can_submit()
    }

    fn crosshair(&self) -> Point {
        let viewport = self.scene.viewport();
        Point::new(viewport.width * 0.5, viewport.height * 0.5)
    }
}
