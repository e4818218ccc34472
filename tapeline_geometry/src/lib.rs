// Copyright 2026 the Tapeline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tapeline Geometry: world-space vector utilities for measurements.
//!
//! Everything in this crate operates on [`nalgebra`] points in world-space
//! meters, matching what a hit-test against a tracked scene produces. The
//! operations are elementary (euclidean distance, midpoints, centroids,
//! and polygon area via the shoelace formula) and carry no state,
//! so both the measurement session and any renderer can call them freely.
//!
//! Polygon area is computed on the ground plane: the ordered point ring is
//! projected onto x/z and the y component is ignored. That matches how a
//! closed boundary walked out on a floor or tabletop is measured.
//!
//! ```
//! use tapeline_geometry::{Point3, distance};
//!
//! let from = Point3::origin();
//! let to = Point3::new(3.0, 4.0, 0.0);
//! assert!((distance(from, to) - 5.0).abs() < 1e-6);
//! ```
//!
//! This crate is `no_std`; enable the `libm` feature for builds without
//! `std` floating-point support.

#![no_std]

pub use nalgebra::{Point3, Vector3};

/// Euclidean distance between two world-space points, in meters.
pub fn distance(a: Point3<f32>, b: Point3<f32>) -> f32 {
    (b - a).norm()
}

/// Midpoint of the segment between two world-space points.
///
/// Used to anchor distance labels on rendered segments.
pub fn midpoint(a: Point3<f32>, b: Point3<f32>) -> Point3<f32> {
    Point3::from((a.coords + b.coords) / 2.0)
}

/// Arithmetic mean of a set of points.
///
/// Returns `None` for an empty slice. Used to anchor area labels inside a
/// closed boundary.
pub fn centroid(points: &[Point3<f32>]) -> Option<Point3<f32>> {
    if points.is_empty() {
        return None;
    }
    let sum = points
        .iter()
        .fold(Vector3::zeros(), |acc, p| acc + p.coords);
    Some(Point3::from(sum / points.len() as f32))
}

/// Area of the simple polygon described by an ordered point ring, in square
/// meters.
///
/// The ring is projected onto the x/z ground plane and evaluated with the
/// shoelace formula, `0.5 * |Σ (x_i*z_{i+1} − x_{i+1}*z_i)|`, treating the
/// slice as cyclic (the last point connects back to the first). Fewer than
/// three points have no enclosed area and return `0.0`.
pub fn polygon_area(points: &[Point3<f32>]) -> f32 {
    if points.len() < 3 {
        return 0.0;
    }

    let mut acc = 0.0_f32;
    for i in 0..points.len() {
        let j = (i + 1) % points.len();
        acc += points[i].x * points[j].z - points[j].x * points[i].z;
    }

    let half = acc / 2.0;
    if half < 0.0 { -half } else { half }
}
