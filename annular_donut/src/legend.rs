// Copyright 2026 the Annular Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::string::String;
use alloc::vec::Vec;

use annular_imaging::RectF;
use annular_model::{ViewModel, Viewport};
use peniko::Color;

use crate::palette::color_for;

/// Height of one legend row.
pub const LEGEND_ROW_HEIGHT: f32 = 20.0;
/// Edge length of the filled color swatch in each row.
pub const LEGEND_SWATCH_SIZE: f32 = 10.0;
/// Font size of the legend labels.
pub const LEGEND_TEXT_SIZE: f32 = 11.0;
/// Horizontal gap between a swatch and its label.
pub const LEGEND_SWATCH_GAP: f32 = 5.0;
/// Inset of the legend block from the left viewport edge.
pub const LEGEND_MARGIN: f32 = 10.0;

/// One legend row: a filled swatch plus a label, sharing the color of the
/// data point at the same index.
///
/// Coordinates are in the centered frame the chart renders in (origin on the
/// viewport center), matching the arc geometry.
#[derive(Clone, Debug, PartialEq)]
pub struct LegendRow {
    /// Filled square carrying the row's palette color.
    pub swatch: RectF,
    /// X coordinate of the label's baseline origin.
    pub label_x: f32,
    /// Y coordinate of the label's baseline origin.
    pub label_y: f32,
    /// Row color; identical to the matching arc segment's color.
    pub color: Color,
    /// Category label.
    pub label: String,
}

#[allow(
    clippy::cast_possible_truncation,
    reason = "legend layout is f32 by design; viewport extents fit comfortably"
)]
#[inline]
fn f64_to_f32(v: f64) -> f32 {
    v as f32
}

/// Lays out one legend row per data point, in input order.
///
/// Rows are stacked top to bottom and the block as a whole is vertically
/// centered on the donut center; horizontally it sits [`LEGEND_MARGIN`]
/// inside the left viewport edge. Label baselines are placed so an
/// [`LEGEND_TEXT_SIZE`] run sits roughly centered in its row; precise metrics
/// belong to the consuming renderer.
#[must_use]
pub fn layout_legend(view_model: &ViewModel, viewport: Viewport) -> Vec<LegendRow> {
    #[allow(
        clippy::cast_precision_loss,
        reason = "row counts are far below f32 precision limits"
    )]
    let row_count = view_model.data_points.len() as f32;
    let block_top = -row_count * LEGEND_ROW_HEIGHT / 2.0;
    let left = -f64_to_f32(viewport.width / 2.0) + LEGEND_MARGIN;

    view_model
        .data_points
        .iter()
        .enumerate()
        .map(|(index, point)| {
            #[allow(
                clippy::cast_precision_loss,
                reason = "row counts are far below f32 precision limits"
            )]
            let row_top = block_top + index as f32 * LEGEND_ROW_HEIGHT;
            let swatch_top = row_top + (LEGEND_ROW_HEIGHT - LEGEND_SWATCH_SIZE) / 2.0;
            let swatch = RectF::new(
                left,
                swatch_top,
                left + LEGEND_SWATCH_SIZE,
                swatch_top + LEGEND_SWATCH_SIZE,
            );
            LegendRow {
                swatch,
                label_x: left + LEGEND_SWATCH_SIZE + LEGEND_SWATCH_GAP,
                label_y: row_top + (LEGEND_ROW_HEIGHT + LEGEND_TEXT_SIZE) / 2.0,
                color: color_for(index),
                label: point.category.clone(),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use alloc::string::ToString;
    use alloc::vec::Vec;

    use annular_model::{DataPoint, ViewModel, Viewport};

    use super::*;

    fn view_model(categories: &[&str]) -> ViewModel {
        ViewModel {
            data_points: categories
                .iter()
                .map(|c| DataPoint {
                    count: 1.0,
                    category: c.to_string(),
                })
                .collect(),
        }
    }

    #[test]
    fn one_row_per_point_in_input_order() {
        let vm = view_model(&["A", "B", "C"]);
        let rows = layout_legend(&vm, Viewport::new(200.0, 200.0));
        let labels: Vec<&str> = rows.iter().map(|r| r.label.as_str()).collect();
        assert_eq!(labels, ["A", "B", "C"]);
    }

    #[test]
    fn block_is_vertically_centered() {
        let vm = view_model(&["A", "B", "C", "D"]);
        let rows = layout_legend(&vm, Viewport::new(200.0, 200.0));

        // Four rows span two row heights above and below the center line.
        let first_top = rows[0].swatch.y0 - (LEGEND_ROW_HEIGHT - LEGEND_SWATCH_SIZE) / 2.0;
        let last_bottom = rows[3].swatch.y1 + (LEGEND_ROW_HEIGHT - LEGEND_SWATCH_SIZE) / 2.0;
        assert_eq!(first_top, -2.0 * LEGEND_ROW_HEIGHT);
        assert_eq!(last_bottom, 2.0 * LEGEND_ROW_HEIGHT);
    }

    #[test]
    fn rows_stack_top_to_bottom() {
        let vm = view_model(&["A", "B"]);
        let rows = layout_legend(&vm, Viewport::new(200.0, 200.0));
        assert_eq!(rows[1].swatch.y0 - rows[0].swatch.y0, LEGEND_ROW_HEIGHT);
        assert!(rows[0].label_y < rows[1].label_y);
    }

    #[test]
    fn block_sits_inside_left_edge() {
        let vm = view_model(&["A"]);
        let rows = layout_legend(&vm, Viewport::new(200.0, 200.0));
        // Centered coordinates: the left viewport edge is at x = -100.
        assert_eq!(rows[0].swatch.x0, -100.0 + LEGEND_MARGIN);
        assert_eq!(
            rows[0].label_x,
            rows[0].swatch.x1 + LEGEND_SWATCH_GAP
        );
    }

    #[test]
    fn colors_match_palette_assignment() {
        let vm = view_model(&["A", "B"]);
        let rows = layout_legend(&vm, Viewport::new(200.0, 200.0));
        assert_eq!(rows[0].color, color_for(0));
        assert_eq!(rows[1].color, color_for(1));
    }

    #[test]
    fn empty_view_model_has_no_rows() {
        let vm = view_model(&[]);
        assert!(layout_legend(&vm, Viewport::new(200.0, 200.0)).is_empty());
    }
}
