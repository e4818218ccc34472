// Copyright 2026 the Tapeline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The measurement session: ordered points, derived segments, totals.

use alloc::vec::Vec;

use tapeline_geometry::{Point3, distance};

use crate::delta::{SceneDelta, SceneEvent};

/// Identifier for a segment within one session.
///
/// Ids are monotonic per session and never reused, so a renderer can key
/// visual artifacts by them across undo/redo churn.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct SegmentId(u64);

/// A measured segment between two consecutive placed points (or, for the
/// closing segment of a polygon, between the last point and the first).
#[derive(Clone, Debug, PartialEq)]
pub struct Segment {
    /// Session-scoped identifier.
    pub id: SegmentId,
    /// World-space start point.
    pub start: Point3<f32>,
    /// World-space end point.
    pub end: Point3<f32>,
    /// Euclidean length in meters. Always `distance(start, end)`.
    pub distance: f32,
}

/// Phase of the measurement state machine.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Phase {
    /// No points placed yet.
    Empty,
    /// One or more points placed, boundary open.
    Measuring,
    /// Boundary closed into a polygon; point placement is blocked.
    PolygonClosed,
}

/// Immutable snapshot of a session, produced at submission time.
///
/// The snapshot has no further lifecycle inside the core; it is handed to
/// the host application as-is.
#[derive(Clone, Debug, PartialEq)]
pub struct MeasurementResult {
    /// Sum of all segment lengths in meters.
    pub total_distance: f32,
    /// The measured segments, in creation order.
    pub lines: Vec<Segment>,
}

/// The measurement state machine.
///
/// See the crate docs for the phase diagram and transition rules. All
/// mutating operations return a [`SceneDelta`] describing the render intents
/// the mutation produced; ignored transitions return an empty delta.
#[derive(Clone, Debug, Default)]
pub struct MeasureSession {
    points: Vec<Point3<f32>>,
    segments: Vec<Segment>,
    polygon_closed: bool,
    total_distance: f32,
    next_segment_id: u64,
}

impl MeasureSession {
    /// Create an empty session.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a world-space point to the measurement.
    ///
    /// For the second and later points this also creates the segment
    /// connecting the previous point to the new one. Ignored while the
    /// polygon is closed.
    pub fn add_point(&mut self, position: Point3<f32>) -> SceneDelta {
        let mut delta = SceneDelta::default();

        if self.polygon_closed {
            return delta;
        }

        self.points.push(position);
        delta.push(SceneEvent::PointAdded {
            index: self.points.len() - 1,
            position,
        });

        if self.points.len() >= 2 {
            let start = self.points[self.points.len() - 2];
            let segment = self.push_segment(start, position);
            delta.push(SceneEvent::SegmentAdded {
                id: segment.id,
                start: segment.start,
                end: segment.end,
                distance: segment.distance,
            });
        }

        self.recompute_total();
        delta
    }

    /// Close the boundary by connecting the last point back to the first.
    ///
    /// Requires at least three points and an open boundary; otherwise this
    /// is an ignored transition.
    pub fn close_polygon(&mut self) -> SceneDelta {
        let mut delta = SceneDelta::default();

        if self.points.len() < 3 || self.polygon_closed {
            return delta;
        }

        let last = self.points[self.points.len() - 1];
        let first = self.points[0];
        let segment = self.push_segment(last, first);
        delta.push(SceneEvent::SegmentAdded {
            id: segment.id,
            start: segment.start,
            end: segment.end,
            distance: segment.distance,
        });
        delta.push(SceneEvent::PolygonClosed);

        self.polygon_closed = true;
        self.recompute_total();
        delta
    }

    /// Reverse the most recent forward transition.
    ///
    /// A closed polygon reopens (the closing segment goes away, points are
    /// untouched); an open boundary loses its last point and, if one exists,
    /// the trailing segment. Ignored on an empty session.
    pub fn undo_last(&mut self) -> SceneDelta {
        let mut delta = SceneDelta::default();

        if self.points.is_empty() {
            return delta;
        }

        if self.polygon_closed {
            self.polygon_closed = false;
            if let Some(closing) = self.segments.pop() {
                delta.push(SceneEvent::SegmentRemoved { id: closing.id });
            }
            delta.push(SceneEvent::PolygonReopened);
        } else {
            self.points.pop();
            delta.push(SceneEvent::PointRemoved {
                index: self.points.len(),
            });
            if let Some(trailing) = self.segments.pop() {
                delta.push(SceneEvent::SegmentRemoved { id: trailing.id });
            }
        }

        self.recompute_total();
        delta
    }

    /// Reset to [`Phase::Empty`], discarding all points and segments.
    ///
    /// Idempotent: clearing an empty session still reports a single
    /// [`SceneEvent::Cleared`] so renderers can treat it as a terminal reset.
    pub fn clear(&mut self) -> SceneDelta {
        self.points.clear();
        self.segments.clear();
        self.polygon_closed = false;
        self.total_distance = 0.0;

        let mut delta = SceneDelta::default();
        delta.push(SceneEvent::Cleared);
        delta
    }

    /// Build an immutable [`MeasurementResult`] snapshot of the current
    /// segments and total.
    ///
    /// Valid in any phase; an empty session yields a zero-valued result.
    /// Callers should treat submitting from [`Phase::Empty`] as meaningless
    /// and guard it in UI via [`MeasureSession::can_submit`].
    pub fn snapshot(&self) -> MeasurementResult {
        MeasurementResult {
            total_distance: self.total_distance,
            lines: self.segments.clone(),
        }
    }

    /// Current phase of the state machine.
    pub fn phase(&self) -> Phase {
        if self.points.is_empty() {
            Phase::Empty
        } else if self.polygon_closed {
            Phase::PolygonClosed
        } else {
            Phase::Measuring
        }
    }

    /// The ordered placed points.
    pub fn points(&self) -> &[Point3<f32>] {
        &self.points
    }

    /// The derived segments, in creation order.
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Sum of all segment lengths, in meters.
    pub fn total_distance(&self) -> f32 {
        self.total_distance
    }

    /// Whether the boundary is currently closed.
    pub fn is_polygon_closed(&self) -> bool {
        self.polygon_closed
    }

    /// Whether [`MeasureSession::undo_last`] would change anything.
    pub fn can_undo(&self) -> bool {
        !self.points.is_empty()
    }

    /// Whether [`MeasureSession::close_polygon`] would change anything.
    pub fn can_close_polygon(&self) -> bool {
        self.points.len() >= 3 && !self.polygon_closed
    }

    /// Whether a submission would carry a meaningful (non-empty) result.
    pub fn can_submit(&self) -> bool {
        !self.points.is_empty()
    }

    fn push_segment(&mut self, start: Point3<f32>, end: Point3<f32>) -> &Segment {
        let id = SegmentId(self.next_segment_id);
        self.next_segment_id += 1;
        self.segments.push(Segment {
            id,
            start,
            end,
            distance: distance(start, end),
        });
        self.segments.last().expect("segment was just pushed")
    }

    fn recompute_total(&mut self) {
        self.total_distance = self.segments.iter().map(|s| s.distance).sum();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    fn p(x: f32, y: f32, z: f32) -> Point3<f32> {
        Point3::new(x, y, z)
    }

    fn unit_square(session: &mut MeasureSession) {
        session.add_point(p(0.0, 0.0, 0.0));
        session.add_point(p(1.0, 0.0, 0.0));
        session.add_point(p(1.0, 0.0, 1.0));
        session.add_point(p(0.0, 0.0, 1.0));
    }

    #[test]
    fn new_session_is_empty() {
        let session = MeasureSession::new();
        assert_eq!(session.phase(), Phase::Empty);
        assert!(session.points().is_empty());
        assert!(session.segments().is_empty());
        assert_eq!(session.total_distance(), 0.0);
        assert!(!session.can_undo());
        assert!(!session.can_submit());
    }

    #[test]
    fn first_point_creates_no_segment() {
        let mut session = MeasureSession::new();
        let delta = session.add_point(p(0.0, 0.0, 0.0));

        assert_eq!(
            delta.events,
            vec![SceneEvent::PointAdded {
                index: 0,
                position: p(0.0, 0.0, 0.0),
            }]
        );
        assert_eq!(session.phase(), Phase::Measuring);
        assert!(session.segments().is_empty());
        assert_eq!(session.total_distance(), 0.0);
    }

    #[test]
    fn each_later_point_adds_one_segment() {
        let mut session = MeasureSession::new();
        for (i, point) in [p(0.0, 0.0, 0.0), p(1.0, 0.0, 0.0), p(1.0, 0.0, 1.0)]
            .into_iter()
            .enumerate()
        {
            session.add_point(point);
            assert_eq!(session.points().len(), i + 1);
            assert_eq!(session.segments().len(), i);
        }
    }

    #[test]
    fn total_is_the_sum_of_consecutive_distances() {
        let mut session = MeasureSession::new();
        session.add_point(p(0.0, 0.0, 0.0));
        session.add_point(p(3.0, 4.0, 0.0));
        session.add_point(p(3.0, 4.0, 2.0));

        assert!((session.total_distance() - 7.0).abs() < 1e-6);
        let segment_sum: f32 = session.segments().iter().map(|s| s.distance).sum();
        assert_eq!(session.total_distance(), segment_sum);
    }

    #[test]
    fn segment_distance_matches_euclidean_invariant() {
        let mut session = MeasureSession::new();
        session.add_point(p(0.5, 1.5, -2.0));
        session.add_point(p(-1.0, 0.25, 3.0));

        let segment = &session.segments()[0];
        let expected = tapeline_geometry::distance(segment.start, segment.end);
        assert_eq!(segment.distance, expected);
        assert!(segment.distance >= 0.0);
    }

    #[test]
    fn close_polygon_needs_three_points() {
        let mut session = MeasureSession::new();
        assert!(session.close_polygon().is_empty());

        session.add_point(p(0.0, 0.0, 0.0));
        session.add_point(p(1.0, 0.0, 0.0));
        assert!(session.close_polygon().is_empty());
        assert!(!session.is_polygon_closed());
        assert_eq!(session.segments().len(), 1);
    }

    #[test]
    fn close_polygon_adds_closing_segment_and_blocks_points() {
        let mut session = MeasureSession::new();
        unit_square(&mut session);

        let delta = session.close_polygon();
        assert!(matches!(
            delta.events[..],
            [SceneEvent::SegmentAdded { .. }, SceneEvent::PolygonClosed]
        ));
        assert_eq!(session.phase(), Phase::PolygonClosed);
        assert_eq!(session.segments().len(), 4);
        assert!((session.total_distance() - 4.0).abs() < 1e-6);

        // Closing again is ignored.
        assert!(session.close_polygon().is_empty());
        assert_eq!(session.segments().len(), 4);
    }

    #[test]
    fn add_point_while_closed_changes_nothing() {
        let mut session = MeasureSession::new();
        unit_square(&mut session);
        session.close_polygon();

        let before = session.clone();
        let delta = session.add_point(p(5.0, 0.0, 5.0));

        assert!(delta.is_empty());
        assert_eq!(session.points(), before.points());
        assert_eq!(session.segments(), before.segments());
        assert_eq!(session.total_distance(), before.total_distance());
    }

    #[test]
    fn undo_after_close_restores_pre_close_state() {
        let mut session = MeasureSession::new();
        unit_square(&mut session);
        let segments_before_close = session.segments().len();
        let total_before_close = session.total_distance();

        session.close_polygon();
        let delta = session.undo_last();

        assert!(matches!(
            delta.events[..],
            [SceneEvent::SegmentRemoved { .. }, SceneEvent::PolygonReopened]
        ));
        assert_eq!(session.phase(), Phase::Measuring);
        assert_eq!(session.segments().len(), segments_before_close);
        assert_eq!(session.points().len(), 4);
        assert!((session.total_distance() - total_before_close).abs() < 1e-6);
    }

    #[test]
    fn undo_removes_last_point_and_trailing_segment() {
        let mut session = MeasureSession::new();
        session.add_point(p(0.0, 0.0, 0.0));
        session.add_point(p(1.0, 0.0, 0.0));

        let delta = session.undo_last();
        assert!(matches!(
            delta.events[..],
            [
                SceneEvent::PointRemoved { index: 1 },
                SceneEvent::SegmentRemoved { .. }
            ]
        ));
        assert_eq!(session.points().len(), 1);
        assert!(session.segments().is_empty());
        assert_eq!(session.total_distance(), 0.0);
    }

    #[test]
    fn undo_single_point_returns_to_empty() {
        let mut session = MeasureSession::new();
        session.add_point(p(0.0, 0.0, 0.0));

        let delta = session.undo_last();
        assert_eq!(delta.events, vec![SceneEvent::PointRemoved { index: 0 }]);
        assert_eq!(session.phase(), Phase::Empty);
    }

    #[test]
    fn undo_on_empty_session_is_ignored() {
        let mut session = MeasureSession::new();
        assert!(session.undo_last().is_empty());
        assert_eq!(session.phase(), Phase::Empty);
    }

    #[test]
    fn clear_resets_from_any_phase() {
        let mut session = MeasureSession::new();
        unit_square(&mut session);
        session.close_polygon();

        let delta = session.clear();
        assert_eq!(delta.events, vec![SceneEvent::Cleared]);
        assert_eq!(session.phase(), Phase::Empty);
        assert!(session.points().is_empty());
        assert!(session.segments().is_empty());
        assert!(!session.is_polygon_closed());
        assert_eq!(session.total_distance(), 0.0);

        // Idempotent.
        session.clear();
        assert_eq!(session.phase(), Phase::Empty);
    }

    #[test]
    fn segment_count_invariant_holds_across_transitions() {
        let mut session = MeasureSession::new();
        let check = |s: &MeasureSession| {
            let expected =
                s.points().len().saturating_sub(1) + usize::from(s.is_polygon_closed());
            assert_eq!(s.segments().len(), expected);
        };

        check(&session);
        unit_square(&mut session);
        check(&session);
        session.close_polygon();
        check(&session);
        session.undo_last();
        check(&session);
        session.undo_last();
        check(&session);
        session.clear();
        check(&session);
    }

    #[test]
    fn segment_ids_are_unique_across_undo_churn() {
        let mut session = MeasureSession::new();
        session.add_point(p(0.0, 0.0, 0.0));
        session.add_point(p(1.0, 0.0, 0.0));
        let first_id = session.segments()[0].id;

        session.undo_last();
        session.add_point(p(2.0, 0.0, 0.0));
        let second_id = session.segments()[0].id;

        assert_ne!(first_id, second_id);
    }

    #[test]
    fn snapshot_captures_segments_and_total() {
        let mut session = MeasureSession::new();
        unit_square(&mut session);
        session.close_polygon();

        let result = session.snapshot();
        assert_eq!(result.lines.len(), 4);
        assert!((result.total_distance - 4.0).abs() < 1e-6);
        for line in &result.lines {
            assert!((line.distance - 1.0).abs() < 1e-6);
        }

        // Snapshots are detached from later mutation.
        session.clear();
        assert_eq!(result.lines.len(), 4);
    }

    #[test]
    fn snapshot_of_empty_session_is_zero_valued() {
        let session = MeasureSession::new();
        let result = session.snapshot();
        assert_eq!(result.total_distance, 0.0);
        assert!(result.lines.is_empty());
    }

    #[test]
    fn polygon_area_of_closed_square_ring_is_one() {
        let mut session = MeasureSession::new();
        unit_square(&mut session);
        session.close_polygon();

        let area = tapeline_geometry::polygon_area(session.points());
        assert!((area - 1.0).abs() < 1e-6);
    }
}
