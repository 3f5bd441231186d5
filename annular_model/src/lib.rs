// Copyright 2026 the Annular Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=annular_model --heading-base-level=0

//! Annular Model: host update shape and view-model builder.
//!
//! This crate defines the raw, loosely-populated tabular shape a host hands to
//! a chart on every update ([`VisualUpdate`], [`DataSource`], [`DataTable`],
//! [`TableRow`]) and a pure builder ([`build`]) that validates it into a
//! render-ready [`ViewModel`] of [`DataPoint`]s.
//!
//! The builder is the only validation boundary in the stack: everything
//! downstream (arc layout, legend layout, the chart component) assumes
//! categories are non-empty and counts are present. It deliberately does
//! **not** sort, deduplicate, or range-check counts; row order is the host's
//! order and is preserved all the way into rendering, where it drives color
//! and legend order.
//!
//! Absence is a valid terminal state, not an error: when the update, its data
//! source, or the first table is missing, [`build`] returns `None` and the
//! caller is expected to render a cleared surface.
//!
//! ## Minimal example
//!
//! ```rust
//! use annular_model::{build, DataSource, DataTable, TableRow, Viewport, VisualUpdate};
//!
//! let update = VisualUpdate {
//!     viewport: Viewport::new(200.0, 200.0),
//!     data: Some(DataSource {
//!         tables: vec![DataTable {
//!             rows: vec![
//!                 TableRow::new(Some(10.0), Some("Apples")),
//!                 TableRow::new(None, Some("Bananas")),
//!                 TableRow::new(Some(5.0), None),
//!             ],
//!         }],
//!     }),
//! };
//!
//! let vm = build(Some(&update)).expect("first table present");
//! // The uncategorized row is dropped; the missing count becomes 0.0.
//! assert_eq!(vm.data_points.len(), 2);
//! assert_eq!(vm.data_points[1].count, 0.0);
//! ```
//!
//! This crate is `no_std`.

#![no_std]

extern crate alloc;

mod builder;
mod update;

pub use builder::{DataPoint, ViewModel, build};
pub use update::{DataSource, DataTable, TableRow, Viewport, VisualUpdate};
