// Copyright 2026 the Annular Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::string::{String, ToString};
use alloc::vec::Vec;

/// Viewport extents in device pixels, supplied by the host on every update.
///
/// Both extents are non-negative by contract. A degenerate viewport (either
/// extent zero) is not rejected here; the renderer degrades to drawing
/// nothing rather than failing.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Viewport {
    /// Width in device pixels.
    pub width: f64,
    /// Height in device pixels.
    pub height: f64,
}

impl Viewport {
    /// Creates a viewport from width and height.
    #[must_use]
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// One raw host row: an optional count cell and an optional category cell.
///
/// Hosts routinely deliver partially populated rows; both cells may be
/// absent. Validation happens in [`build`](crate::build), not here.
#[derive(Clone, Debug, PartialEq)]
pub struct TableRow {
    /// Measure cell; absent counts are treated as zero by the builder.
    pub count: Option<f64>,
    /// Category cell; rows without a non-empty category are dropped by the
    /// builder.
    pub category: Option<String>,
}

impl TableRow {
    /// Creates a row from optional cells.
    #[must_use]
    pub fn new(count: Option<f64>, category: Option<&str>) -> Self {
        Self {
            count,
            category: category.map(ToString::to_string),
        }
    }
}

/// One table of rows inside a data source.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DataTable {
    /// Rows in host order.
    pub rows: Vec<TableRow>,
}

/// The data payload of one host update.
///
/// Hosts may deliver several tables; the builder only consumes the first.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DataSource {
    /// Tables in host order.
    pub tables: Vec<DataTable>,
}

/// One host update: the current viewport plus an optional data payload.
///
/// The payload is optional because resize-only updates carry no data.
#[derive(Clone, Debug, PartialEq)]
pub struct VisualUpdate {
    /// Viewport extents for this update.
    pub viewport: Viewport,
    /// Data payload, if the host supplied one.
    pub data: Option<DataSource>,
}

impl VisualUpdate {
    /// Returns the first data table, if the payload and table are present.
    #[must_use]
    pub fn first_table(&self) -> Option<&DataTable> {
        self.data.as_ref()?.tables.first()
    }
}
