// Copyright 2026 the Annular Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::string::String;
use alloc::vec::Vec;

use crate::update::VisualUpdate;

/// One validated donut segment: a non-empty category and its count.
///
/// Constructed only by [`build`]; immutable afterwards (plain owned fields,
/// no mutators).
#[derive(Clone, Debug, PartialEq)]
pub struct DataPoint {
    /// Segment measure. Absent host cells become `0.0`; zero-count points are
    /// retained so category labels stay stable in the legend across updates.
    pub count: f64,
    /// Segment label; never empty.
    pub category: String,
}

/// Render-ready, host-independent representation of one update's data.
///
/// Point order equals host row order and drives arc, color, and legend order
/// downstream. Built fresh on every update and discarded after rendering;
/// nothing in the core caches view models across updates.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ViewModel {
    /// Validated points in host row order.
    pub data_points: Vec<DataPoint>,
}

impl ViewModel {
    /// Sum of all point counts; `0.0` when there are no points.
    #[must_use]
    pub fn total(&self) -> f64 {
        self.data_points.iter().map(|p| p.count).sum()
    }
}

/// Builds a [`ViewModel`] from a raw host update.
///
/// Returns `None` exactly when there is nothing to render: the update itself,
/// its data payload, or the first data table is absent. Callers must treat
/// `None` by clearing the surface, not as an error.
///
/// Rows without a non-empty category are dropped. Rows with a valid category
/// but an absent count are kept with a count of `0.0`, so their labels remain
/// in the legend. No other validation happens here.
///
/// Pure and deterministic: identical input yields identical output.
#[must_use]
pub fn build(update: Option<&VisualUpdate>) -> Option<ViewModel> {
    let table = update?.first_table()?;

    let data_points = table
        .rows
        .iter()
        .filter_map(|row| {
            let category = row.category.as_ref().filter(|c| !c.is_empty())?;
            Some(DataPoint {
                count: row.count.unwrap_or(0.0),
                category: category.clone(),
            })
        })
        .collect();

    Some(ViewModel { data_points })
}
