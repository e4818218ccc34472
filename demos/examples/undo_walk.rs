// Copyright 2026 the Tapeline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Undo symmetry walk: every forward step has exactly one inverse.
//!
//! Shows the state machine's two undo shapes (reopening a closed polygon
//! and removing a trailing point) plus the miss and cancel paths.
//!
//! Run:
//! - `cargo run -p tapeline_demos --example undo_walk`

use tapeline_bridge::ChannelSink;
use tapeline_geometry::Point3;
use tapeline_scene::{RecordingScene, SurfaceQuery};
use tapeline_screen::MeasureScreen;

fn report(screen: &MeasureScreen<RecordingScene>, step: &str) {
    println!(
        "{step:<28} phase={:?} points={} segments={} total={}",
        screen.phase(),
        screen.session().points().len(),
        screen.session().segments().len(),
        screen.formatted_total_distance(),
    );
}

fn main() {
    let mut screen = MeasureScreen::new(RecordingScene::new());
    let mut sink = ChannelSink::new();
    report(&screen, "start");

    // A tap with no surface under the crosshair places nothing.
    screen.tap();
    println!("miss -> status: {}", screen.status_text());

    // Place a triangle.
    for corner in [
        Point3::new(0.0, 0.0, 0.0),
        Point3::new(2.0, 0.0, 0.0),
        Point3::new(0.0, 0.0, 2.0),
    ] {
        screen
            .scene_mut()
            .aim_at(SurfaceQuery::DETECTED_PLANE, corner);
        screen.tap();
    }
    report(&screen, "three taps");

    screen.close_polygon();
    report(&screen, "close polygon");

    // First undo reopens the polygon; the points survive.
    screen.undo();
    report(&screen, "undo (reopen)");

    // Further undos peel points off the tail.
    screen.undo();
    report(&screen, "undo (drop point)");
    screen.undo();
    screen.undo();
    report(&screen, "undo to empty");

    // Undo on empty is an ignored transition.
    screen.undo();
    report(&screen, "undo on empty (no-op)");

    // Cancel dismisses without a payload.
    screen.cancel(&mut sink);
    let response = sink.take_response().expect("cancel produced a response");
    println!("cancel -> response: {:?}", response.encode());

    // The scene heard every intent in order; the tail is the final reset.
    let events = screen.scene().applied();
    println!("scene saw {} intents", events.len());
}
