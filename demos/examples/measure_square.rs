// Copyright 2026 the Tapeline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! End-to-end measurement walk: place a square, close it, submit.
//!
//! This demo stands in for the platform glue: a [`RecordingScene`] plays
//! the tracked AR view, re-aiming between taps plays the user walking the
//! device around, and a [`ChannelSink`] plays the host side of the method
//! channel.
//!
//! Run:
//! - `cargo run -p tapeline_demos --example measure_square`

use tapeline_bridge::{CHANNEL_NAME, ChannelSink, MethodCall};
use tapeline_format::{format_area, format_distance};
use tapeline_geometry::{Point3, polygon_area};
use tapeline_scene::{RecordingScene, SurfaceQuery, TrackingState};
use tapeline_screen::{CommandQueue, MeasureScreen, ScreenCommand};

fn main() {
    // The host opens the screen over the method channel.
    let call = MethodCall::parse("startARMeasurement").expect("method is supported");
    println!("host -> {CHANNEL_NAME}: {}", call.name());

    let mut screen = MeasureScreen::new(RecordingScene::new());
    let mut sink = ChannelSink::new();
    let (sender, queue) = CommandQueue::new();

    // Tracking stabilizes; the scene reports it from its own context, so it
    // goes through the command queue like every other callback.
    sender.send(ScreenCommand::TrackingChanged(TrackingState::Normal));
    queue.drain(&mut screen, &mut sink);
    println!("status: {:?} / {}", screen.status(), screen.status_text());

    // Walk a one-meter square on the floor, tapping at each corner.
    let corners = [
        Point3::new(0.0, 0.0, 0.0),
        Point3::new(1.0, 0.0, 0.0),
        Point3::new(1.0, 0.0, 1.0),
        Point3::new(0.0, 0.0, 1.0),
    ];
    for corner in corners {
        screen
            .scene_mut()
            .aim_at(SurfaceQuery::ESTIMATED_HORIZONTAL, corner);
        sender.send(ScreenCommand::Tap);
        queue.drain(&mut screen, &mut sink);
        println!(
            "tap -> {} points, total {}",
            screen.session().points().len(),
            screen.formatted_total_distance()
        );
    }

    // Close the loop and show the per-segment labels a renderer would draw.
    sender.send(ScreenCommand::ClosePolygon);
    queue.drain(&mut screen, &mut sink);
    println!("\nclosed polygon ({:?}):", screen.phase());
    for segment in screen.session().segments() {
        println!(
            "  segment {:?}: {}",
            segment.id,
            format_distance(segment.distance)
        );
    }
    println!("total distance: {}", screen.formatted_total_distance());

    // The area utility is available even though the overlay keeps it quiet.
    let area = polygon_area(screen.session().points());
    println!("enclosed area: {}", format_area(area));

    // Submit; the sink now holds the response the transport would deliver.
    sender.send(ScreenCommand::Submit);
    queue.drain(&mut screen, &mut sink);

    let response = sink.take_response().expect("submit produced a response");
    let encoded = response.encode();
    println!(
        "\nhost <- {CHANNEL_NAME}:\n{}",
        serde_json::to_string_pretty(&encoded).expect("encoding is infallible")
    );
}
