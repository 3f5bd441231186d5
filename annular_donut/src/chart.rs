// Copyright 2026 the Annular Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use annular_imaging::{Affine, DrawOp, Surface, SurfaceExt};
use annular_model::{ViewModel, Viewport, VisualUpdate, build};

use crate::arc::{RingGeometry, layout_arcs};
use crate::legend::{LEGEND_TEXT_SIZE, layout_legend};

/// Curve flattening tolerance used when lowering arc outlines.
const ARC_TOLERANCE: f64 = 0.1;

/// Host-facing lifecycle of a chart visual.
///
/// Mirrors the usual host plugin contract: construction happens once through
/// an inherent constructor taking the drawable surface, then the host calls
/// [`update`](Self::update) serially once per data or resize event, and
/// [`destroy`](Self::destroy) once at teardown. Implementations must make
/// `destroy` idempotent and `update` after `destroy` a no-op.
pub trait ChartVisual {
    /// Consumes one host update and fully redraws the surface.
    fn update(&mut self, update: Option<&VisualUpdate>);

    /// Releases the owned drawable surface.
    fn destroy(&mut self);
}

/// A donut chart bound to one drawable surface.
///
/// The chart exclusively owns its surface and releases it deterministically
/// in [`ChartVisual::destroy`]; no reliance on drop order or automatic
/// collection. It holds no other state: every update rebuilds the view model
/// and replaces the previous frame entirely, so identical input always
/// produces an identical instruction stream.
#[derive(Debug)]
pub struct DonutChart<S: Surface> {
    surface: Option<S>,
}

impl<S: Surface> DonutChart<S> {
    /// Creates a chart owning `surface`. This is the `construct` hook.
    #[must_use]
    pub fn new(surface: S) -> Self {
        Self {
            surface: Some(surface),
        }
    }

    /// Returns the owned surface, if the chart has not been destroyed.
    #[must_use]
    pub fn surface(&self) -> Option<&S> {
        self.surface.as_ref()
    }

    /// Renders a view model for the given viewport.
    ///
    /// Issues one full frame: resize, a transform centering the origin on the
    /// viewport center, one filled annulus sector per non-zero-span segment,
    /// then the legend rows. Zero-span segments (and a zero-radius ring on a
    /// degenerate viewport) draw nothing in the arc pass but keep their
    /// legend rows.
    pub fn render(&mut self, view_model: &ViewModel, viewport: Viewport) {
        let Some(surface) = self.surface.as_mut() else {
            return;
        };
        render_frame(surface, view_model, viewport);
    }

    fn clear(&mut self, viewport: Viewport) {
        if let Some(surface) = self.surface.as_mut() {
            begin_viewport_frame(surface, viewport);
        }
    }
}

impl<S: Surface> ChartVisual for DonutChart<S> {
    fn update(&mut self, update: Option<&VisualUpdate>) {
        let viewport = update.map_or(Viewport::new(0.0, 0.0), |u| u.viewport);
        match build(update) {
            Some(view_model) => self.render(&view_model, viewport),
            // Insufficient input is a valid terminal state: clear and return.
            None => self.clear(viewport),
        }
    }

    fn destroy(&mut self) {
        // Dropping the surface releases its backing store. Taking through
        // `Option` makes repeated destroys and late updates no-ops.
        drop(self.surface.take());
    }
}

#[allow(
    clippy::cast_possible_truncation,
    reason = "surface extents are f32 by design; viewport extents fit comfortably"
)]
fn begin_viewport_frame<S: Surface + ?Sized>(surface: &mut S, viewport: Viewport) {
    surface.begin_frame(viewport.width as f32, viewport.height as f32);
}

fn render_frame<S: Surface + ?Sized>(
    surface: &mut S,
    view_model: &ViewModel,
    viewport: Viewport,
) {
    begin_viewport_frame(surface, viewport);
    surface.set_transform(Affine::translate((
        viewport.width / 2.0,
        viewport.height / 2.0,
    )));

    let geometry = RingGeometry::for_viewport(viewport);
    for segment in layout_arcs(view_model, geometry) {
        if segment.span() <= 0.0 || segment.outer_radius <= 0.0 {
            continue;
        }
        surface.set_solid_paint(segment.color);
        surface.fill_kurbo_path(&segment.to_path(ARC_TOLERANCE));
    }

    for row in layout_legend(view_model, viewport) {
        surface.set_solid_paint(row.color);
        surface.fill_rect(row.swatch);
        surface.draw(DrawOp::FillText {
            x: row.label_x,
            y: row.label_y,
            size: LEGEND_TEXT_SIZE,
            text: row.label,
        });
    }
}
