// Copyright 2026 the Tapeline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The method channel: names, errors, responses, and the delegate adapter.

use thiserror::Error;

use tapeline_screen::ScreenDelegate;
use tapeline_session::MeasurementResult;

use crate::payload::MeasurementPayload;

/// Name of the method channel the host registers.
pub const CHANNEL_NAME: &str = "org.ostafix.ar_measure";

/// Methods the channel understands.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum MethodCall {
    /// Open the native measurement screen.
    StartArMeasurement,
}

impl MethodCall {
    /// Wire name of the screen-opening method.
    pub const START_AR_MEASUREMENT: &str = "startARMeasurement";

    /// Parse an incoming method name.
    pub fn parse(name: &str) -> Result<Self, ChannelError> {
        match name {
            Self::START_AR_MEASUREMENT => Ok(Self::StartArMeasurement),
            other => Err(ChannelError::NotImplemented(other.to_owned())),
        }
    }

    /// The wire name of this method.
    pub fn name(self) -> &'static str {
        match self {
            Self::StartArMeasurement => Self::START_AR_MEASUREMENT,
        }
    }
}

/// Failures a host can observe on the channel. All are terminal for the
/// request; none retries.
#[derive(Clone, Debug, Eq, PartialEq, Error)]
pub enum ChannelError {
    /// The host invoked a method this channel does not implement.
    #[error("method not implemented: {0}")]
    NotImplemented(String),

    /// AR measurement is not supported on this device.
    #[error("AR measurement is not available on this device")]
    Unavailable,
}

impl ChannelError {
    /// Stable machine-readable error code for the transport.
    pub fn code(&self) -> &'static str {
        match self {
            Self::NotImplemented(_) => "notImplemented",
            Self::Unavailable => "UNAVAILABLE",
        }
    }
}

/// What the measurement screen eventually answers with.
#[derive(Clone, Debug, PartialEq)]
pub enum ChannelResponse {
    /// The screen was dismissed without a measurement.
    Dismissed,
    /// The user submitted a measurement.
    Submitted(MeasurementPayload),
}

impl ChannelResponse {
    /// Encode the response for the transport: `null` for a dismissal, the
    /// payload object otherwise.
    pub fn encode(&self) -> serde_json::Value {
        match self {
            Self::Dismissed => serde_json::Value::Null,
            Self::Submitted(payload) => {
                serde_json::to_value(payload).expect("payload serialization is infallible")
            }
        }
    }
}

/// Adapter from the screen's delegate seam onto the channel.
///
/// Hand a `ChannelSink` to the measurement screen as its
/// [`ScreenDelegate`]; once the screen reports a terminal outcome, take the
/// pending [`ChannelResponse`] and deliver it over the transport.
#[derive(Clone, Debug, Default)]
pub struct ChannelSink {
    pending: Option<ChannelResponse>,
}

impl ChannelSink {
    /// A sink with no pending response.
    pub fn new() -> Self {
        Self::default()
    }

    /// Take the response produced by the screen, if any arrived yet.
    pub fn take_response(&mut self) -> Option<ChannelResponse> {
        self.pending.take()
    }
}

impl ScreenDelegate for ChannelSink {
    fn dismissed(&mut self) {
        self.pending = Some(ChannelResponse::Dismissed);
    }

    fn submitted(&mut self, result: MeasurementResult) {
        self.pending = Some(ChannelResponse::Submitted(MeasurementPayload::from(&result)));
    }
}
