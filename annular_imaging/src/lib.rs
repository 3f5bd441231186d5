// Copyright 2026 the Annular Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=annular_imaging --heading-base-level=0

//! Annular Imaging: the drawable-surface instruction set for Annular charts.
//!
//! This crate defines a small, plain-old-data (POD) friendly instruction set
//! and a [`Surface`] trait for backends that consume it. It sits between the
//! chart layer (which computes geometry and issues instructions) and concrete
//! renderers (SVG writers, canvas bindings, rasterizers).
//!
//! # Position in the stack
//!
//! - **Chart**: view-model validation, arc/legend layout, and render
//!   sequencing. This lives in the other `annular_*` crates.
//! - **Instruction set (this crate)**: paths, rectangles, text labels, and
//!   paints expressed as POD state + draw operations, plus the [`Surface`]
//!   trait backends implement.
//! - **Backends**: whatever ultimately turns instructions into pixels or
//!   markup. Out of scope for this repository beyond the recording reference
//!   surface used in tests.
//!
//! # Frame model
//!
//! Charts redraw fully on every update. [`Surface::begin_frame`] therefore
//! both resizes the backing store to the current viewport and discards every
//! previously issued instruction; there is no incremental diffing and no
//! cross-frame resource reuse. For the same reason, geometry and paints are
//! carried inline in the operations rather than behind backend-managed
//! resource handles.
//!
//! # Example
//!
//! A minimal sketch of how a backend might be driven:
//!
//! ```ignore
//! # use annular_imaging::*;
//! # use peniko::Color;
//! # struct MySurface { /* implements Surface */ }
//! let mut surface = MySurface { /* ... */ };
//!
//! surface.begin_frame(200.0, 200.0);
//! surface.state(StateOp::SetTransform(Affine::translate((100.0, 100.0))));
//! surface.state(StateOp::SetPaint(PaintDesc::solid(Color::WHITE)));
//! surface.draw(DrawOp::FillRect {
//!     x0: -5.0,
//!     y0: -5.0,
//!     x1: 5.0,
//!     y1: 5.0,
//! });
//! ```
//!
//! This crate is `no_std`.

#![no_std]

extern crate alloc;

use alloc::boxed::Box;
use alloc::string::String;
use alloc::vec::Vec;

use peniko::{Brush, Color};

/// Affine transform type used by the instruction set.
pub type Affine = kurbo::Affine;

/// A simple axis-aligned rectangle in f32 coordinates.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct RectF {
    /// Minimum X coordinate.
    pub x0: f32,
    /// Minimum Y coordinate.
    pub y0: f32,
    /// Maximum X coordinate.
    pub x1: f32,
    /// Maximum Y coordinate.
    pub y1: f32,
}

impl RectF {
    /// Create a new rectangle from min/max corners.
    #[inline]
    pub const fn new(x0: f32, y0: f32, x1: f32, y1: f32) -> Self {
        Self { x0, y0, x1, y1 }
    }

    /// Convert to kurbo's rectangle type.
    #[inline]
    pub fn to_kurbo(self) -> kurbo::Rect {
        kurbo::Rect::new(
            f64::from(self.x0),
            f64::from(self.y0),
            f64::from(self.x1),
            f64::from(self.y1),
        )
    }
}

/// Simple path command enumeration.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum PathCmd {
    /// Move the current point without drawing.
    MoveTo {
        /// X coordinate of the new point.
        x: f32,
        /// Y coordinate of the new point.
        y: f32,
    },
    /// Draw a line from the current point to the given point.
    LineTo {
        /// X coordinate of the line end.
        x: f32,
        /// Y coordinate of the line end.
        y: f32,
    },
    /// Draw a quadratic Bézier curve from the current point to the given
    /// point, using a single control point.
    QuadTo {
        /// X coordinate of the control point.
        x1: f32,
        /// Y coordinate of the control point.
        y1: f32,
        /// X coordinate of the curve end.
        x: f32,
        /// Y coordinate of the curve end.
        y: f32,
    },
    /// Draw a cubic Bézier curve from the current point to the given point,
    /// using two control points.
    CurveTo {
        /// X coordinate of the first control point.
        x1: f32,
        /// Y coordinate of the first control point.
        y1: f32,
        /// X coordinate of the second control point.
        x2: f32,
        /// Y coordinate of the second control point.
        y2: f32,
        /// X coordinate of the curve end.
        x: f32,
        /// Y coordinate of the curve end.
        y: f32,
    },
    /// Close the current subpath.
    Close,
}

/// Lossy narrowing used when lowering kurbo geometry into the f32 wire shape.
#[allow(
    clippy::cast_possible_truncation,
    reason = "instruction coordinates are f32 by design; chart geometry fits comfortably"
)]
#[inline]
fn f64_to_f32(v: f64) -> f32 {
    v as f32
}

/// Description of a path carried inline in a draw operation.
#[derive(Clone, Debug, PartialEq)]
pub struct PathDesc {
    /// Command buffer describing the path geometry.
    pub commands: Box<[PathCmd]>,
}

impl PathDesc {
    /// Lower a kurbo path into the instruction set's command buffer.
    #[must_use]
    pub fn from_kurbo(path: &kurbo::BezPath) -> Self {
        let commands: Vec<PathCmd> = path
            .elements()
            .iter()
            .map(|el| match *el {
                kurbo::PathEl::MoveTo(p) => PathCmd::MoveTo {
                    x: f64_to_f32(p.x),
                    y: f64_to_f32(p.y),
                },
                kurbo::PathEl::LineTo(p) => PathCmd::LineTo {
                    x: f64_to_f32(p.x),
                    y: f64_to_f32(p.y),
                },
                kurbo::PathEl::QuadTo(p1, p) => PathCmd::QuadTo {
                    x1: f64_to_f32(p1.x),
                    y1: f64_to_f32(p1.y),
                    x: f64_to_f32(p.x),
                    y: f64_to_f32(p.y),
                },
                kurbo::PathEl::CurveTo(p1, p2, p) => PathCmd::CurveTo {
                    x1: f64_to_f32(p1.x),
                    y1: f64_to_f32(p1.y),
                    x2: f64_to_f32(p2.x),
                    y2: f64_to_f32(p2.y),
                    x: f64_to_f32(p.x),
                    y: f64_to_f32(p.y),
                },
                kurbo::PathEl::ClosePath => PathCmd::Close,
            })
            .collect();
        Self {
            commands: commands.into_boxed_slice(),
        }
    }

    /// Returns `true` if the path carries no commands.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}

/// Description of a paint carried inline in state operations.
#[derive(Clone, Debug, PartialEq)]
pub struct PaintDesc {
    /// Brush used when rendering (solid color, gradient, image, etc.).
    ///
    /// This is a [`peniko::Brush`], so backends can directly map it onto
    /// their native paint representation.
    pub brush: Brush,
}

impl PaintDesc {
    /// Create a solid-color paint.
    #[inline]
    pub fn solid(color: Color) -> Self {
        Self {
            brush: Brush::Solid(color),
        }
    }
}

/// State operations that mutate the current surface state.
#[derive(Clone, Debug, PartialEq)]
pub enum StateOp {
    /// Set the current transform matrix.
    SetTransform(Affine),
    /// Set the current paint.
    SetPaint(PaintDesc),
}

/// Draw operations that produce output given the current state.
#[derive(Clone, Debug, PartialEq)]
pub enum DrawOp {
    /// Fill the given path with the current paint.
    FillPath(PathDesc),
    /// Fill an axis-aligned rectangle with the current paint.
    FillRect {
        /// Minimum X coordinate.
        x0: f32,
        /// Minimum Y coordinate.
        y0: f32,
        /// Maximum X coordinate.
        x1: f32,
        /// Maximum Y coordinate.
        y1: f32,
    },
    /// Draw a text run with the current paint.
    ///
    /// `x`/`y` give the baseline origin in local coordinates. Measurement and
    /// shaping are backend concerns; the instruction carries only the run and
    /// a font size.
    FillText {
        /// X coordinate of the baseline origin.
        x: f32,
        /// Y coordinate of the baseline origin.
        y: f32,
        /// Font size in local units.
        size: f32,
        /// Text content.
        text: String,
    },
}

/// Unified surface operation, used by recording backends.
#[derive(Clone, Debug, PartialEq)]
pub enum SurfaceOp {
    /// State-changing operation.
    State(StateOp),
    /// Drawing operation.
    Draw(DrawOp),
}

/// A viewport-sized drawable surface that consumes chart instructions.
///
/// Implementations own their backing store. A surface is driven by exactly
/// one chart instance; there is no sharing and no locking. Updates are
/// serial, so a later frame simply supersedes an earlier one.
pub trait Surface {
    /// Resize the backing store to `width` × `height` device pixels and
    /// discard every previously issued instruction.
    ///
    /// Charts call this once at the top of every render; the frame that
    /// follows fully replaces the previous output. A `begin_frame` with no
    /// subsequent operations leaves the surface cleared.
    fn begin_frame(&mut self, width: f32, height: f32);

    /// Apply a state operation.
    fn state(&mut self, op: StateOp);

    /// Apply a draw operation.
    fn draw(&mut self, op: DrawOp);
}

/// Convenience helpers for `Surface` callers.
///
/// This is separate from [`Surface`] so that methods can accept closures
/// without complicating trait object usage (`&mut dyn Surface`).
pub trait SurfaceExt: Surface {
    /// Set the current transform.
    #[inline]
    fn set_transform(&mut self, transform: Affine) {
        self.state(StateOp::SetTransform(transform));
    }

    /// Set a solid-color paint.
    #[inline]
    fn set_solid_paint(&mut self, color: Color) {
        self.state(StateOp::SetPaint(PaintDesc::solid(color)));
    }

    /// Fill a kurbo path, lowering it into the instruction set.
    #[inline]
    fn fill_kurbo_path(&mut self, path: &kurbo::BezPath) {
        self.draw(DrawOp::FillPath(PathDesc::from_kurbo(path)));
    }

    /// Fill an axis-aligned rectangle.
    #[inline]
    fn fill_rect(&mut self, rect: RectF) {
        self.draw(DrawOp::FillRect {
            x0: rect.x0,
            y0: rect.y0,
            x1: rect.x1,
            y1: rect.y1,
        });
    }
}

impl<S: Surface + ?Sized> SurfaceExt for S {}

#[cfg(test)]
mod tests {
    use alloc::vec::Vec;

    use kurbo::Shape;
    use peniko::Color;

    use super::*;

    /// Trivial in-memory surface that records operations for testing.
    #[derive(Default)]
    struct RecordingSurface {
        size: Option<(f32, f32)>,
        ops: Vec<SurfaceOp>,
    }

    impl Surface for RecordingSurface {
        fn begin_frame(&mut self, width: f32, height: f32) {
            self.size = Some((width, height));
            self.ops.clear();
        }

        fn state(&mut self, op: StateOp) {
            self.ops.push(SurfaceOp::State(op));
        }

        fn draw(&mut self, op: DrawOp) {
            self.ops.push(SurfaceOp::Draw(op));
        }
    }

    #[test]
    fn begin_frame_discards_prior_ops() {
        let mut surface = RecordingSurface::default();

        surface.begin_frame(100.0, 50.0);
        surface.set_solid_paint(Color::WHITE);
        surface.fill_rect(RectF::new(0.0, 0.0, 10.0, 10.0));
        assert_eq!(surface.ops.len(), 2);

        surface.begin_frame(200.0, 80.0);
        assert_eq!(surface.size, Some((200.0, 80.0)));
        assert!(surface.ops.is_empty());
    }

    #[test]
    fn kurbo_rect_lowers_to_line_commands() {
        let path = kurbo::Rect::new(0.0, 0.0, 4.0, 2.0).to_path(1e-3);
        let desc = PathDesc::from_kurbo(&path);

        assert!(!desc.is_empty());
        match desc.commands[0] {
            PathCmd::MoveTo { x, y } => {
                assert_eq!((x, y), (0.0, 0.0));
            }
            ref other => panic!("expected leading MoveTo, got {other:?}"),
        }
        assert!(matches!(desc.commands.last(), Some(PathCmd::Close)));
        assert!(
            desc.commands
                .iter()
                .all(|cmd| !matches!(cmd, PathCmd::QuadTo { .. } | PathCmd::CurveTo { .. })),
            "an axis-aligned rect has no curve segments"
        );
    }

    #[test]
    fn circle_lowers_to_curves() {
        let path = kurbo::Circle::new((0.0, 0.0), 10.0).to_path(1e-3);
        let desc = PathDesc::from_kurbo(&path);
        assert!(
            desc.commands
                .iter()
                .any(|cmd| matches!(cmd, PathCmd::CurveTo { .. })),
            "a circle outline is built from cubic segments"
        );
    }

    #[test]
    fn rectf_converts_to_kurbo() {
        let r = RectF::new(1.0, 2.0, 3.0, 4.0);
        assert_eq!(r.to_kurbo(), kurbo::Rect::new(1.0, 2.0, 3.0, 4.0));
    }

    #[test]
    fn solid_paint_round_trips_color() {
        let paint = PaintDesc::solid(Color::BLACK);
        assert_eq!(paint.brush, Brush::Solid(Color::BLACK));
    }

    #[test]
    fn ext_helpers_emit_expected_ops() {
        let mut surface = RecordingSurface::default();
        surface.begin_frame(10.0, 10.0);
        surface.set_transform(Affine::translate((5.0, 5.0)));
        surface.fill_rect(RectF::new(-1.0, -1.0, 1.0, 1.0));

        assert_eq!(surface.ops.len(), 2);
        assert!(matches!(
            surface.ops[0],
            SurfaceOp::State(StateOp::SetTransform(_))
        ));
        assert!(matches!(
            surface.ops[1],
            SurfaceOp::Draw(DrawOp::FillRect { .. })
        ));
    }
}
