// Copyright 2026 the Tapeline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tapeline Session: the measurement state machine.
//!
//! A [`MeasureSession`] owns the ordered list of placed world-space points,
//! derives the connecting segments, tracks whether the boundary has been
//! closed into a polygon, and maintains the aggregate distance total. It is
//! pure logic: no hit-testing, no rendering, no I/O.
//!
//! ## Phases and transitions
//!
//! A session moves between three phases:
//!
//! - [`Phase::Empty`]: no points placed.
//! - [`Phase::Measuring`]: one or more points, boundary open.
//! - [`Phase::PolygonClosed`]: at least three points, boundary closed.
//!
//! Forward transitions are [`MeasureSession::add_point`] and
//! [`MeasureSession::close_polygon`]; [`MeasureSession::undo_last`] reverses
//! exactly one forward transition, and [`MeasureSession::clear`] resets to
//! `Empty` from anywhere. Invalid transitions (adding a point while closed,
//! closing with fewer than three points) are silently ignored: they change
//! nothing and return an empty delta, never an error.
//!
//! ## Observing changes
//!
//! Every mutating operation returns a [`SceneDelta`]: the batched list of
//! render intents ([`SceneEvent`]) a renderer needs to bring its visual
//! artifacts in line with the new state. UIs that only need derived values
//! poll the query methods ([`MeasureSession::total_distance`],
//! [`MeasureSession::phase`], …) after applying commands.
//!
//! ```
//! use tapeline_geometry::Point3;
//! use tapeline_session::{MeasureSession, Phase};
//!
//! let mut session = MeasureSession::new();
//! session.add_point(Point3::new(0.0, 0.0, 0.0));
//! session.add_point(Point3::new(1.0, 0.0, 0.0));
//! session.add_point(Point3::new(1.0, 0.0, 1.0));
//! assert_eq!(session.segments().len(), 2);
//!
//! let delta = session.close_polygon();
//! assert!(!delta.is_empty());
//! assert_eq!(session.phase(), Phase::PolygonClosed);
//!
//! // Undo reopens the polygon without touching the points.
//! session.undo_last();
//! assert_eq!(session.phase(), Phase::Measuring);
//! assert_eq!(session.points().len(), 3);
//! ```
//!
//! A session must only ever be mutated from one logical thread; `&mut self`
//! receivers make concurrent mutation unrepresentable, and callers receiving
//! scene callbacks on background contexts are expected to marshal them onto
//! the owning thread first.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod delta;
mod session;

pub use delta::{SceneDelta, SceneEvent};
pub use session::{MeasureSession, MeasurementResult, Phase, Segment, SegmentId};
