// Copyright 2026 the Tapeline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tapeline Bridge: the host-application side of the measurement screen.
//!
//! The host talks to the native measurement screen over a named method
//! channel with exactly one command, `startARMeasurement`. The screen
//! answers later with either an empty dismissal or a measurement payload.
//! This crate owns that surface:
//!
//! - [`MethodCall`] parses incoming method names and rejects unknown ones.
//! - [`ChannelError`] carries the two failure shapes a host can observe
//!   (unknown method, AR unavailable) with their stable wire codes.
//! - [`MeasurementPayload`] is the wire form of a
//!   [`MeasurementResult`](tapeline_session::MeasurementResult). Its field
//!   names and nesting are frozen for compatibility: `totalDistance`,
//!   `measurementLines`, `startPoint`/`endPoint` with `x`/`y`/`z`.
//! - [`ChannelSink`] adapts the screen's
//!   [`ScreenDelegate`](tapeline_screen::ScreenDelegate) seam into a
//!   [`ChannelResponse`] the transport can encode and deliver.
//!
//! The transport itself (binary messenger, codec, process boundary) is not
//! modeled here; anything that can move a JSON string works.

mod channel;
mod payload;

pub use channel::{CHANNEL_NAME, ChannelError, ChannelResponse, ChannelSink, MethodCall};
pub use payload::{LinePayload, MeasurementPayload, PointPayload};
