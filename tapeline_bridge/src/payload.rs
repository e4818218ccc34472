// Copyright 2026 the Tapeline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Wire payloads for measurement results.

use serde::{Deserialize, Serialize};
use tapeline_session::{MeasurementResult, Segment};
use uuid::Uuid;

/// A world-space coordinate on the wire.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct PointPayload {
    /// X component in meters.
    pub x: f32,
    /// Y component in meters.
    pub y: f32,
    /// Z component in meters.
    pub z: f32,
}

/// One measured line on the wire.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LinePayload {
    /// Opaque line identifier (a UUID string).
    pub id: String,
    /// Length of the line in meters.
    pub distance: f32,
    /// World-space start of the line.
    pub start_point: PointPayload,
    /// World-space end of the line.
    pub end_point: PointPayload,
}

/// The measurement result payload handed back to the host.
///
/// Field names and nesting are frozen: hosts deserialize this shape
/// byte-for-byte, so any change here is a wire break.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MeasurementPayload {
    /// Sum of all line lengths in meters.
    pub total_distance: f32,
    /// The measured lines, in creation order.
    pub measurement_lines: Vec<LinePayload>,
}

impl From<&Segment> for LinePayload {
    fn from(segment: &Segment) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            distance: segment.distance,
            start_point: PointPayload {
                x: segment.start.x,
                y: segment.start.y,
                z: segment.start.z,
            },
            end_point: PointPayload {
                x: segment.end.x,
                y: segment.end.y,
                z: segment.end.z,
            },
        }
    }
}

impl From<&MeasurementResult> for MeasurementPayload {
    fn from(result: &MeasurementResult) -> Self {
        Self {
            total_distance: result.total_distance,
            measurement_lines: result.lines.iter().map(LinePayload::from).collect(),
        }
    }
}
