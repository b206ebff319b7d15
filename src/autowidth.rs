//! The auto-width plugin.
//!
//! When attached to a host grid, sizes every opted-in text column to fit its
//! header and cell content on each refresh. A column opts in with its
//! `auto_width` flag; setting `auto_width_same` as well declares that all
//! cells render at the same width, so only the first cell is measured.
//!
//! This plugin is only suited for single-line text cells.

use crate::grid::{Column, Grid};
use crate::measure::{measure_width, MonospaceMeasurer, TextMeasurer};
use crate::plugin::GridPlugin;

/// Registry type name for [`AutoWidth`].
pub const PLUGIN_TYPE: &str = "autowidth";

/// Sizes opted-in columns to their widest header or cell text.
///
/// Holds the text-measurement capability it sizes with. Hosts with real font
/// metrics pass their own measurer via [`AutoWidth::with_measurer`]; the
/// default is a [`MonospaceMeasurer`].
pub struct AutoWidth {
    measurer: Box<dyn TextMeasurer>,
}

impl AutoWidth {
    /// Creates the plugin with the default monospace measurer.
    #[must_use]
    pub fn new() -> Self {
        Self::with_measurer(Box::new(MonospaceMeasurer::default()))
    }

    /// Creates the plugin with the host's text measurer.
    #[must_use]
    pub fn with_measurer(measurer: Box<dyn TextMeasurer>) -> Self {
        Self { measurer }
    }

    /// Computes the width an opted-in column needs.
    ///
    /// Starts from the header measurement (a missing title measures as the
    /// empty string) and folds in each cell in row order, keeping the
    /// maximum. A missing cell value also measures as the empty string,
    /// which comes out as the padding-only width. Columns flagged
    /// `auto_width_same` stop after the first cell.
    fn size_column(&self, column: &dyn Column) -> f32 {
        let header_text = column.header_text().unwrap_or("");
        let mut largest = measure_width(self.measurer.as_ref(), column.header_element(), header_text);

        for index in 0..column.cell_count() {
            let Some(cell) = column.cell(index) else {
                break;
            };

            let cell_text = cell.raw_value().unwrap_or("");
            let cell_width = measure_width(self.measurer.as_ref(), cell.element(), cell_text);

            if cell_width > largest {
                largest = cell_width;
            }

            if column.auto_width_same() {
                break;
            }
        }

        largest
    }
}

impl Default for AutoWidth {
    fn default() -> Self {
        Self::new()
    }
}

impl GridPlugin for AutoWidth {
    fn type_name(&self) -> &'static str {
        PLUGIN_TYPE
    }

    /// Called on every grid refresh. Sets the grid column widths.
    ///
    /// Columns without the `auto_width` flag are skipped entirely: no
    /// measurement, no mutation. Columns are processed in grid order and
    /// widths are written back in place.
    fn on_refresh(&mut self, grid: &mut dyn Grid) {
        for index in 0..grid.column_count() {
            let width = {
                let column = grid.column(index);
                if !column.auto_width() {
                    continue;
                }
                self.size_column(column)
            };

            grid.column_mut(index).set_width(width);
        }
    }
}

impl std::fmt::Debug for AutoWidth {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AutoWidth").finish_non_exhaustive()
    }
}
