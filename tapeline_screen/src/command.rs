// Copyright 2026 the Tapeline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Command marshalling onto the screen's owning thread.

use std::sync::mpsc::{Receiver, Sender, channel};

use tapeline_scene::planes::PlaneAnchor;
use tapeline_scene::{SceneSurface, SurfaceHit, TrackingState};

use crate::screen::{MeasureScreen, ScreenDelegate};

/// One serialized event for the measurement screen.
///
/// User-interaction events and scene callbacks share the queue; whatever
/// order they are enqueued in is the order the state machine observes.
#[derive(Clone, Debug, PartialEq)]
pub enum ScreenCommand {
    /// The user tapped to place a point at the crosshair.
    Tap,
    /// The user asked to undo the last step.
    Undo,
    /// The user asked to clear all measurements.
    Clear,
    /// The user asked to close the boundary into a polygon.
    ClosePolygon,
    /// The user dismissed the screen without submitting.
    Cancel,
    /// The user submitted the current measurement.
    Submit,
    /// The user toggled rectangular-object recognition.
    SetObjectDetection(bool),
    /// The scene reported a tracking-quality change.
    TrackingChanged(TrackingState),
    /// A per-frame crosshair probe resolved (empty when no surface).
    SurfaceProbe(Vec<SurfaceHit>),
    /// The scene delivered a batch of plane-anchor updates.
    PlaneUpdate(Vec<PlaneAnchor>),
    /// The scene's session failed; AR is gone for this session.
    SessionFailed,
}

/// Clonable producer half of the command queue.
///
/// Background contexts hold one of these and enqueue; they never touch the
/// screen directly.
#[derive(Clone, Debug)]
pub struct CommandSender {
    tx: Sender<ScreenCommand>,
}

impl CommandSender {
    /// Enqueue a command. Returns `false` when the queue has been dropped.
    pub fn send(&self, command: ScreenCommand) -> bool {
        self.tx.send(command).is_ok()
    }
}

/// Consumer half of the command queue, owned by the screen's thread.
#[derive(Debug)]
pub struct CommandQueue {
    rx: Receiver<ScreenCommand>,
}

impl CommandQueue {
    /// Create a queue and its first sender.
    pub fn new() -> (CommandSender, Self) {
        let (tx, rx) = channel();
        (CommandSender { tx }, Self { rx })
    }

    /// Apply every pending command to `screen` in arrival order.
    ///
    /// Returns the number of commands applied. Must be called from the
    /// thread that owns the screen.
    pub fn drain<S, D>(&self, screen: &mut MeasureScreen<S>, delegate: &mut D) -> usize
    where
        S: SceneSurface,
        D: ScreenDelegate,
    {
        let mut applied = 0;
        while let Ok(command) = self.rx.try_recv() {
            screen.handle(command, delegate);
            applied += 1;
        }
        applied
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::screen::tests::NullDelegate;
    use tapeline_geometry::Point3;
    use tapeline_scene::{RecordingScene, SurfaceQuery};
    use tapeline_session::SceneEvent;

    #[test]
    fn drain_applies_commands_in_order() {
        let (sender, queue) = CommandQueue::new();
        let mut scene = RecordingScene::new();
        scene.aim_at(SurfaceQuery::DETECTED_PLANE, Point3::new(0.0, 0.0, 0.0));
        let mut screen = MeasureScreen::new(scene);
        let mut delegate = NullDelegate::default();

        assert!(sender.send(ScreenCommand::Tap));
        assert!(sender.send(ScreenCommand::Undo));

        let applied = queue.drain(&mut screen, &mut delegate);
        assert_eq!(applied, 2);
        assert_eq!(screen.session().points().len(), 0);

        // The scene saw both the placement and the removal.
        let events = screen.scene().applied();
        assert!(matches!(events[0], SceneEvent::PointAdded { .. }));
        assert!(matches!(events[1], SceneEvent::PointRemoved { .. }));
    }

    #[test]
    fn drain_with_nothing_pending_applies_nothing() {
        let (_sender, queue) = CommandQueue::new();
        let mut screen = MeasureScreen::new(RecordingScene::new());
        let mut delegate = NullDelegate::default();
        assert_eq!(queue.drain(&mut screen, &mut delegate), 0);
    }

    #[test]
    fn senders_clone_and_outlive_each_other() {
        let (sender, queue) = CommandQueue::new();
        let second = sender.clone();
        drop(sender);

        assert!(second.send(ScreenCommand::Clear));

        let mut screen = MeasureScreen::new(RecordingScene::new());
        let mut delegate = NullDelegate::default();
        assert_eq!(queue.drain(&mut screen, &mut delegate), 1);
    }

    #[test]
    fn send_fails_once_the_queue_is_dropped() {
        let (sender, queue) = CommandQueue::new();
        drop(queue);
        assert!(!sender.send(ScreenCommand::Tap));
    }
}
