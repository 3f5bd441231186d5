// Copyright 2026 the Annular Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=annular_donut --heading-base-level=0

//! Annular Donut: donut chart geometry, palette, legend layout, and lifecycle.
//!
//! This crate turns a validated [`ViewModel`](annular_model::ViewModel) into
//! a full frame of draw instructions against an
//! [`annular_imaging::Surface`]:
//!
//! - [`RingGeometry`] and [`layout_arcs`] compute one [`ArcSegment`] per data
//!   point, with angular spans proportional to each point's share of the
//!   total and colors assigned positionally from the fixed [`PALETTE`].
//! - [`layout_legend`] lays out one [`LegendRow`] (swatch + label) per data
//!   point, stacked vertically and centered as a block on the donut.
//! - [`DonutChart`] ties both to a surface and exposes the host-facing
//!   [`ChartVisual`] lifecycle: construct via [`DonutChart::new`], then
//!   `update` per host event, then `destroy` at teardown.
//!
//! Every update is independent and idempotent: the chart holds no state
//! beyond the owned surface, and each frame fully replaces the previous one.
//! All edge cases (absent input, all-zero counts, degenerate viewports)
//! degrade to drawing less, never to an error.
//!
//! ## Example
//!
//! ```rust
//! use annular_donut::{ChartVisual, DonutChart};
//! use annular_imaging_ref::RefSurface;
//! use annular_model::{DataSource, DataTable, TableRow, Viewport, VisualUpdate};
//!
//! let mut chart = DonutChart::new(RefSurface::new());
//!
//! let update = VisualUpdate {
//!     viewport: Viewport::new(200.0, 200.0),
//!     data: Some(DataSource {
//!         tables: vec![DataTable {
//!             rows: vec![
//!                 TableRow::new(Some(10.0), Some("A")),
//!                 TableRow::new(Some(30.0), Some("B")),
//!             ],
//!         }],
//!     }),
//! };
//! chart.update(Some(&update));
//!
//! let surface = chart.surface().expect("not destroyed");
//! let frame = surface.last_frame().expect("one frame rendered");
//! // Two arcs, two swatches, two labels.
//! assert_eq!(frame.draw_ops().count(), 6);
//!
//! chart.destroy();
//! assert!(chart.surface().is_none());
//! ```
//!
//! This crate is `no_std`.

#![no_std]

extern crate alloc;

mod arc;
mod chart;
mod legend;
mod palette;

pub use arc::{ArcSegment, RING_THICKNESS, RingGeometry, START_ANGLE, layout_arcs};
pub use chart::{ChartVisual, DonutChart};
pub use legend::{
    LEGEND_MARGIN, LEGEND_ROW_HEIGHT, LEGEND_SWATCH_GAP, LEGEND_SWATCH_SIZE, LEGEND_TEXT_SIZE,
    LegendRow, layout_legend,
};
pub use palette::{PALETTE, color_for};
