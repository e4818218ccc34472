// Copyright 2026 the Tapeline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Plane-anchor classification: picking out plausibly-rectangular objects.
//!
//! Tracked scenes report plane anchors as they grow and merge. This module
//! filters that feed down to anchors that look like discrete rectangular
//! objects (a tabletop, a picture frame, a rug) rather than walls or
//! floors: both extents must sit inside a plausible size band and the
//! aspect ratio must not be extreme.
//!
//! Classification is an independent overlay feature. The measurement state
//! machine never consumes it; the screen controller toggles it at runtime
//! and renderers read [`PlaneClassifier::objects`] to draw outlines and
//! dimension labels.

use hashbrown::HashMap;
use nalgebra::Point3;

/// Identifier the scene assigns to a plane anchor.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct AnchorId(
    /// Raw anchor handle from the platform.
    pub u64,
);

/// A plane anchor as delivered by the scene's plane-update feed.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlaneAnchor {
    /// Stable identifier for this anchor across updates.
    pub id: AnchorId,
    /// World-space center of the plane.
    pub center: Point3<f32>,
    /// Extent along the plane's local x axis, in meters.
    pub extent_x: f32,
    /// Extent along the plane's local z axis, in meters.
    pub extent_z: f32,
}

/// A plane anchor accepted as a discrete rectangular object.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DetectedObject {
    /// The anchor this object came from.
    pub id: AnchorId,
    /// Width (x extent) in meters.
    pub width: f32,
    /// Height (z extent) in meters.
    pub height: f32,
    /// Face area in square meters (`width * height`).
    pub area: f32,
    /// World-space center.
    pub center: Point3<f32>,
}

/// Smallest extent (either axis) an object anchor may have, in meters.
pub const MIN_EXTENT: f32 = 0.05;
/// Largest extent (either axis) an object anchor may have, in meters.
pub const MAX_EXTENT: f32 = 2.0;
/// Lower bound of the accepted x/z aspect ratio.
pub const MIN_ASPECT: f32 = 0.3;
/// Upper bound of the accepted x/z aspect ratio.
pub const MAX_ASPECT: f32 = 3.0;

/// Whether an anchor's shape qualifies as a discrete rectangular object.
pub fn accepts(anchor: &PlaneAnchor) -> bool {
    let in_band = |extent: f32| extent > MIN_EXTENT && extent < MAX_EXTENT;
    if !in_band(anchor.extent_x) || !in_band(anchor.extent_z) {
        return false;
    }
    let aspect = anchor.extent_x / anchor.extent_z;
    aspect > MIN_ASPECT && aspect < MAX_ASPECT
}

/// Accumulates accepted objects from the plane-update feed.
///
/// Each anchor id is classified once; later updates to a known anchor are
/// ignored so the overlay stays stable while the platform refines extents.
#[derive(Clone, Debug, Default)]
pub struct PlaneClassifier {
    objects: HashMap<AnchorId, DetectedObject>,
}

impl PlaneClassifier {
    /// An empty classifier.
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed one anchor from the plane-update feed.
    ///
    /// Returns the freshly accepted object, or `None` when the anchor was
    /// rejected by the shape filter or already known.
    pub fn observe(&mut self, anchor: &PlaneAnchor) -> Option<DetectedObject> {
        if !accepts(anchor) || self.objects.contains_key(&anchor.id) {
            return None;
        }
        let object = DetectedObject {
            id: anchor.id,
            width: anchor.extent_x,
            height: anchor.extent_z,
            area: anchor.extent_x * anchor.extent_z,
            center: anchor.center,
        };
        self.objects.insert(anchor.id, object);
        Some(object)
    }

    /// The accepted objects, in no particular order.
    pub fn objects(&self) -> impl Iterator<Item = &DetectedObject> {
        self.objects.values()
    }

    /// Number of accepted objects.
    pub fn len(&self) -> usize {
        self.objects.len()
    }

    /// Whether no object has been accepted yet.
    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    /// Drop every accepted object.
    pub fn clear(&mut self) {
        self.objects.clear();
    }
}
