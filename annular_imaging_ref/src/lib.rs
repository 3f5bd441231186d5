// Copyright 2026 the Annular Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=annular_imaging_ref --heading-base-level=0

//! Annular Imaging Reference Surface.
//!
//! This crate provides a small, stateful implementation of
//! [`Surface`] for **instruction recording and state tracing**.
//!
//! It is intentionally *not* a reference renderer:
//! - It does **not** rasterize to pixels.
//! - It does **not** establish golden rendering behavior across backends.
//! - It is intended primarily for tests and debugging that want to assert on
//!   emitted instructions and the surface state at the time each instruction
//!   was applied.
//!
//! Frames are retained in order so that tests can assert on full-redraw
//! semantics: each [`Surface::begin_frame`] starts a fresh [`Frame`], and the
//! latest frame is exactly the output the chart currently shows.

#![no_std]

extern crate alloc;

use alloc::vec::Vec;

use annular_imaging::{Affine, DrawOp, PaintDesc, StateOp, Surface, SurfaceOp};

/// Snapshot of the ambient surface state inside the reference surface.
#[derive(Clone, Debug, PartialEq)]
pub struct StateSnapshot {
    /// Current transform.
    pub transform: Affine,
    /// Current paint, if set.
    pub paint: Option<PaintDesc>,
}

impl Default for StateSnapshot {
    fn default() -> Self {
        Self {
            transform: Affine::IDENTITY,
            paint: None,
        }
    }
}

/// Event recorded by the reference surface.
#[derive(Clone, Debug, PartialEq)]
pub enum Event {
    /// State operation and the resulting state snapshot.
    State {
        /// State operation that was applied.
        op: StateOp,
        /// Snapshot after applying the state operation.
        state: StateSnapshot,
    },
    /// Draw operation and the state snapshot used for drawing.
    Draw {
        /// Draw operation that was applied.
        op: DrawOp,
        /// Snapshot at the time of drawing.
        state: StateSnapshot,
    },
}

/// One recorded frame: the surface size at `begin_frame` plus every
/// instruction and event issued before the next frame began.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Frame {
    /// Frame width in device pixels.
    pub width: f32,
    /// Frame height in device pixels.
    pub height: f32,
    /// Raw instructions in application order.
    pub ops: Vec<SurfaceOp>,
    /// Instructions paired with the surface state at application time.
    pub events: Vec<Event>,
}

impl Frame {
    /// Returns the draw operations of this frame, skipping state operations.
    pub fn draw_ops(&self) -> impl Iterator<Item = &DrawOp> {
        self.ops.iter().filter_map(|op| match op {
            SurfaceOp::Draw(draw) => Some(draw),
            SurfaceOp::State(_) => None,
        })
    }
}

/// Simple recording implementation of [`Surface`].
///
/// This surface:
/// - Starts a fresh [`Frame`] on every `begin_frame`,
/// - Tracks the ambient transform and paint,
/// - Records instructions both raw and paired with [`StateSnapshot`]s.
///
/// Instructions issued before the first `begin_frame` are tolerated by
/// opening an implicit zero-sized frame.
#[derive(Default, Debug)]
pub struct RefSurface {
    frames: Vec<Frame>,
    state: StateSnapshot,
}

impl RefSurface {
    /// Creates an empty reference surface.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns all recorded frames in order.
    #[must_use]
    pub fn frames(&self) -> &[Frame] {
        &self.frames
    }

    /// Returns the most recent frame, if any.
    #[must_use]
    pub fn last_frame(&self) -> Option<&Frame> {
        self.frames.last()
    }

    /// Discards all recorded frames and resets the ambient state.
    pub fn clear(&mut self) {
        self.frames.clear();
        self.state = StateSnapshot::default();
    }

    fn current_frame(&mut self) -> &mut Frame {
        if self.frames.is_empty() {
            self.frames.push(Frame::default());
        }
        self.frames.last_mut().expect("frame pushed above")
    }
}

impl Surface for RefSurface {
    fn begin_frame(&mut self, width: f32, height: f32) {
        self.frames.push(Frame {
            width,
            height,
            ops: Vec::new(),
            events: Vec::new(),
        });
        self.state = StateSnapshot::default();
    }

    fn state(&mut self, op: StateOp) {
        match &op {
            StateOp::SetTransform(tx) => self.state.transform = *tx,
            StateOp::SetPaint(paint) => self.state.paint = Some(paint.clone()),
        }
        let snapshot = self.state.clone();
        let frame = self.current_frame();
        frame.ops.push(SurfaceOp::State(op.clone()));
        frame.events.push(Event::State {
            op,
            state: snapshot,
        });
    }

    fn draw(&mut self, op: DrawOp) {
        let snapshot = self.state.clone();
        let frame = self.current_frame();
        frame.ops.push(SurfaceOp::Draw(op.clone()));
        frame.events.push(Event::Draw {
            op,
            state: snapshot,
        });
    }
}

#[cfg(test)]
mod tests {
    use annular_imaging::{PaintDesc, RectF, SurfaceExt};
    use peniko::{Brush, Color};

    use super::*;

    #[test]
    fn begin_frame_starts_fresh_frame() {
        let mut surface = RefSurface::new();

        surface.begin_frame(100.0, 50.0);
        surface.set_solid_paint(Color::WHITE);
        surface.fill_rect(RectF::new(0.0, 0.0, 10.0, 10.0));

        surface.begin_frame(200.0, 80.0);

        assert_eq!(surface.frames().len(), 2);
        let last = surface.last_frame().expect("two frames recorded");
        assert_eq!((last.width, last.height), (200.0, 80.0));
        assert!(last.ops.is_empty());
        // The first frame is retained untouched for replaced-output asserts.
        assert_eq!(surface.frames()[0].ops.len(), 2);
    }

    #[test]
    fn begin_frame_resets_ambient_state() {
        let mut surface = RefSurface::new();

        surface.begin_frame(10.0, 10.0);
        surface.set_solid_paint(Color::BLACK);
        surface.begin_frame(10.0, 10.0);
        surface.fill_rect(RectF::new(0.0, 0.0, 1.0, 1.0));

        let last = surface.last_frame().expect("frame recorded");
        let Event::Draw { state, .. } = &last.events[0] else {
            panic!("expected a draw event");
        };
        assert_eq!(state.paint, None);
        assert_eq!(state.transform, Affine::IDENTITY);
    }

    #[test]
    fn draw_events_capture_state_at_draw_time() {
        let mut surface = RefSurface::new();

        surface.begin_frame(10.0, 10.0);
        surface.set_transform(Affine::translate((5.0, 5.0)));
        surface.set_solid_paint(Color::WHITE);
        surface.fill_rect(RectF::new(-1.0, -1.0, 1.0, 1.0));

        let frame = surface.last_frame().expect("frame recorded");
        let Event::Draw { state, .. } = frame.events.last().expect("draw recorded") else {
            panic!("expected final event to be a draw");
        };
        assert_eq!(state.transform, Affine::translate((5.0, 5.0)));
        assert_eq!(
            state.paint.as_ref().map(|p| &p.brush),
            Some(&Brush::Solid(Color::WHITE))
        );
    }

    #[test]
    fn ops_before_first_frame_open_implicit_frame() {
        let mut surface = RefSurface::new();
        surface.state(StateOp::SetPaint(PaintDesc::solid(Color::WHITE)));

        assert_eq!(surface.frames().len(), 1);
        let frame = surface.last_frame().expect("implicit frame");
        assert_eq!((frame.width, frame.height), (0.0, 0.0));
        assert_eq!(frame.ops.len(), 1);
    }

    #[test]
    fn draw_ops_filters_state_ops() {
        let mut surface = RefSurface::new();
        surface.begin_frame(10.0, 10.0);
        surface.set_solid_paint(Color::WHITE);
        surface.fill_rect(RectF::new(0.0, 0.0, 1.0, 1.0));
        surface.fill_rect(RectF::new(1.0, 1.0, 2.0, 2.0));

        let frame = surface.last_frame().expect("frame recorded");
        assert_eq!(frame.draw_ops().count(), 2);
    }

    #[test]
    fn clear_discards_frames() {
        let mut surface = RefSurface::new();
        surface.begin_frame(10.0, 10.0);
        surface.fill_rect(RectF::new(0.0, 0.0, 1.0, 1.0));

        surface.clear();
        assert!(surface.frames().is_empty());
        assert!(surface.last_frame().is_none());
    }
}
