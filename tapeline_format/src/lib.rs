// Copyright 2026 the Tapeline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tapeline Format: unit-aware display strings for measurements.
//!
//! Raw measurements in Tapeline are floating-point meters (lengths) and
//! square meters (areas). This crate turns them into the strings shown on
//! measurement labels and in the heads-up totals:
//!
//! - [`format_distance`] renders a length in imperial units, switching
//!   between decimal inches and feet-and-inches by magnitude.
//! - [`format_area`] renders an area in metric units, switching between
//!   square centimeters and square meters at one square meter.
//! - [`format_dimensions`] renders a width × height pair for recognized
//!   planar objects, switching between centimeters and meters.
//!
//! All functions are pure and deterministic given their numeric input, so
//! label text can be derived anywhere (overlay renderer, debug output,
//! host-side display) without consulting the measurement state.
//!
//! ```
//! use tapeline_format::{format_area, format_distance};
//!
//! assert_eq!(format_distance(0.2), "7.87\"");
//! assert_eq!(format_distance(1.0), "39.4\"");
//! assert_eq!(format_area(0.5), "5000 cm²");
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

use alloc::format;
use alloc::string::String;

/// Inches per meter, the conversion constant for imperial display.
pub const INCHES_PER_METER: f32 = 39.3701;

/// Inches per foot.
pub const INCHES_PER_FOOT: f32 = 12.0;

/// Residual inches below this threshold collapse to a feet-only string.
const RESIDUAL_INCH_EPSILON: f32 = 0.1;

/// Format a length in meters as an imperial display string.
///
/// The precision scales with magnitude:
///
/// - under 12 inches: two-decimal inches, e.g. `7.87"`
/// - under 120 inches: one-decimal inches, e.g. `39.4"`
/// - otherwise: integer feet plus a one-decimal inch residual, e.g.
///   `10' 6.0"`. A residual under 0.1 inch collapses to feet only (`10'`),
///   never a stray `0.0"`.
///
/// Zero is a valid input and renders as `0.00"`.
pub fn format_distance(meters: f32) -> String {
    let inches = meters * INCHES_PER_METER;

    if inches < INCHES_PER_FOOT {
        format!("{inches:.2}\"")
    } else if inches < 10.0 * INCHES_PER_FOOT {
        format!("{inches:.1}\"")
    } else {
        let feet = (inches / INCHES_PER_FOOT) as i32;
        let residual = inches % INCHES_PER_FOOT;
        if residual < RESIDUAL_INCH_EPSILON {
            format!("{feet}'")
        } else {
            format!("{feet}' {residual:.1}\"")
        }
    }
}

/// Format an area in square meters as a metric display string.
///
/// Areas under one square meter render as integer square centimeters
/// (`5000 cm²`); everything else as two-decimal square meters (`2.35 m²`).
pub fn format_area(square_meters: f32) -> String {
    if square_meters < 1.0 {
        format!("{:.0} cm²", square_meters * 10_000.0)
    } else {
        format!("{square_meters:.2} m²")
    }
}

/// Format a width × height pair (meters) for a recognized planar object.
///
/// When both extents are under one meter the pair renders in one-decimal
/// centimeters (`50.0 × 30.0 cm`); otherwise in two-decimal meters
/// (`1.20 × 0.80 m`).
pub fn format_dimensions(width: f32, height: f32) -> String {
    if width < 1.0 && height < 1.0 {
        format!("{:.1} × {:.1} cm", width * 100.0, height * 100.0)
    } else {
        format!("{width:.2} × {height:.2} m")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_distance_renders_without_panicking() {
        assert_eq!(format_distance(0.0), "0.00\"");
    }

    #[test]
    fn short_distances_use_two_decimal_inches() {
        // 0.2 m is about 7.874", under the 12" cutover.
        assert_eq!(format_distance(0.2), "7.87\"");
        assert_eq!(format_distance(0.01), "0.39\"");
    }

    #[test]
    fn medium_distances_use_one_decimal_inches() {
        // One meter is about 39.37", inside the one-decimal band.
        assert_eq!(format_distance(1.0), "39.4\"");
        assert_eq!(format_distance(0.305), "12.0\"");
        assert_eq!(format_distance(2.5), "98.4\"");
    }

    #[test]
    fn long_distances_use_feet_and_inches() {
        // 3.2 m is about 125.98": ten feet and a 6.0" residual.
        assert_eq!(format_distance(3.2), "10' 6.0\"");
        // 4.0 m is about 157.48": thirteen feet, 1.5" residual.
        assert_eq!(format_distance(4.0), "13' 1.5\"");
    }

    #[test]
    fn near_zero_residual_collapses_to_feet_only() {
        // 3.048 m is 120.00007", so the residual is far below 0.1".
        assert_eq!(format_distance(3.048), "10'");
    }

    #[test]
    fn small_areas_render_in_square_centimeters() {
        assert_eq!(format_area(0.5), "5000 cm²");
        assert_eq!(format_area(0.0), "0 cm²");
    }

    #[test]
    fn large_areas_render_in_square_meters() {
        assert_eq!(format_area(2.345), "2.35 m²");
        assert_eq!(format_area(1.0), "1.00 m²");
    }

    #[test]
    fn small_dimensions_render_in_centimeters() {
        assert_eq!(format_dimensions(0.5, 0.3), "50.0 × 30.0 cm");
    }

    #[test]
    fn mixed_dimensions_render_in_meters() {
        assert_eq!(format_dimensions(1.2, 0.8), "1.20 × 0.80 m");
        assert_eq!(format_dimensions(1.5, 2.0), "1.50 × 2.00 m");
    }
}
