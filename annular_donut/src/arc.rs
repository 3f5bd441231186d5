// Copyright 2026 the Annular Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::vec::Vec;
use core::f64::consts::{FRAC_PI_2, TAU};

use annular_model::{ViewModel, Viewport};
use kurbo::{BezPath, CircleSegment, Point, Shape};
use peniko::Color;

use crate::palette::color_for;

/// Radial thickness of the donut ring, in device pixels.
pub const RING_THICKNESS: f64 = 30.0;

/// Angle at which the first segment begins: 12 o'clock, proceeding clockwise
/// in the y-down device coordinate system.
pub const START_ANGLE: f64 = -FRAC_PI_2;

/// Ring radii for the current viewport, centered on the viewport center.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct RingGeometry {
    /// Outer radius of the ring.
    pub outer_radius: f64,
    /// Inner (hole) radius of the ring; zero when the viewport is too small
    /// to fit the full ring thickness.
    pub inner_radius: f64,
}

impl RingGeometry {
    /// Computes ring radii for a viewport.
    ///
    /// The outer radius is half the smaller viewport extent; the inner radius
    /// sits [`RING_THICKNESS`] inside it, clamped to zero. A degenerate
    /// viewport yields a zero-radius ring rather than an error.
    #[must_use]
    pub fn for_viewport(viewport: Viewport) -> Self {
        let outer_radius = viewport.width.min(viewport.height) / 2.0;
        Self {
            outer_radius,
            inner_radius: (outer_radius - RING_THICKNESS).max(0.0),
        }
    }
}

/// One donut segment, derived 1:1 from a data point for the current viewport.
///
/// Angles are in radians; `start_angle == end_angle` marks a zero-span
/// segment, which the renderer skips in the arc pass but which still occupies
/// its position in color and legend order.
#[derive(Clone, Debug, PartialEq)]
pub struct ArcSegment {
    /// Angle at which the segment begins.
    pub start_angle: f64,
    /// Angle at which the segment ends.
    pub end_angle: f64,
    /// Inner radius of the annulus sector.
    pub inner_radius: f64,
    /// Outer radius of the annulus sector.
    pub outer_radius: f64,
    /// Fill color, assigned positionally from the palette.
    pub color: Color,
}

impl ArcSegment {
    /// Angular width of the segment in radians.
    #[must_use]
    pub fn span(&self) -> f64 {
        self.end_angle - self.start_angle
    }

    /// Builds the annulus-sector outline for this segment, centered on the
    /// origin.
    ///
    /// The caller is expected to have centered the surface origin on the
    /// viewport center via a transform.
    #[must_use]
    pub fn to_path(&self, tolerance: f64) -> BezPath {
        CircleSegment::new(
            Point::ORIGIN,
            self.outer_radius,
            self.inner_radius,
            self.start_angle,
            self.span(),
        )
        .to_path(tolerance)
    }
}

/// Lays out one [`ArcSegment`] per data point, in input order.
///
/// Each point's angular span is proportional to its share of the total count.
/// When the total is zero (including the empty view model), every span is
/// zero at the running start angle; `0 / 0` is defined as `0`, so no NaN ever
/// enters the geometry. Spans otherwise sum to a full turn.
#[must_use]
pub fn layout_arcs(view_model: &ViewModel, geometry: RingGeometry) -> Vec<ArcSegment> {
    let total = view_model.total();
    let mut angle = START_ANGLE;

    view_model
        .data_points
        .iter()
        .enumerate()
        .map(|(index, point)| {
            let span = if total > 0.0 {
                TAU * point.count / total
            } else {
                0.0
            };
            let segment = ArcSegment {
                start_angle: angle,
                end_angle: angle + span,
                inner_radius: geometry.inner_radius,
                outer_radius: geometry.outer_radius,
                color: color_for(index),
            };
            angle += span;
            segment
        })
        .collect()
}
