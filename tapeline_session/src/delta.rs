// Copyright 2026 the Tapeline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Batched render intents returned from session mutations.

use alloc::vec::Vec;

use tapeline_geometry::Point3;

use crate::session::SegmentId;

/// A single render intent: one visual artifact to create or destroy.
///
/// Events describe *what changed* in measurement terms; how a point marker,
/// segment line, or distance label actually looks is entirely the rendering
/// adapter's concern.
#[derive(Clone, Debug, PartialEq)]
pub enum SceneEvent {
    /// A point was appended at `index` in the session's ordered point list.
    PointAdded {
        /// Position in the ordered point list.
        index: usize,
        /// World-space position of the new point.
        position: Point3<f32>,
    },
    /// The point at `index` was removed (always the last one).
    PointRemoved {
        /// Position the point occupied in the ordered list.
        index: usize,
    },
    /// A segment now connects `start` to `end`.
    SegmentAdded {
        /// Identifier of the new segment.
        id: SegmentId,
        /// World-space start of the segment.
        start: Point3<f32>,
        /// World-space end of the segment.
        end: Point3<f32>,
        /// Euclidean length of the segment in meters, for label text.
        distance: f32,
    },
    /// The segment with `id` no longer exists.
    SegmentRemoved {
        /// Identifier of the removed segment.
        id: SegmentId,
    },
    /// The boundary closed into a polygon (the closing segment arrives as
    /// its own [`SceneEvent::SegmentAdded`]).
    PolygonClosed,
    /// A previously closed boundary reopened.
    PolygonReopened,
    /// All measurement artifacts are gone; renderers drop everything.
    Cleared,
}

/// A batched set of render intents derived from one session mutation.
///
/// An empty delta means the operation was an ignored transition and nothing
/// changed.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SceneDelta {
    /// Intents in the order a renderer should apply them.
    pub events: Vec<SceneEvent>,
}

impl SceneDelta {
    /// Returns `true` when the mutation changed nothing.
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub(crate) fn push(&mut self, event: SceneEvent) {
        self.events.push(event);
    }
}
