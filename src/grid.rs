//! The consumed host-grid interface.
//!
//! The grid widget, its rendering pipeline, and its data binding all live in
//! the host. This module defines the narrow read/write surface a plugin sees:
//! columns in grid order, cells in row order, each with a rendering element
//! whose computed style can be read, and a width mutator per column.
//!
//! Access is index-based. That keeps the traits object-safe, preserves the
//! host's column and row ordering, and lets a sizing pass measure under a
//! shared borrow while taking an exclusive borrow only to write the width.

use crate::style::ComputedStyle;

/// A rendering element whose computed style can be read.
///
/// This is the explicit "container element" accessor for headers and cells.
/// The element is consulted only for its resolved font and padding; the
/// plugin never walks the host's element tree.
pub trait StyledElement {
    /// Returns the element's computed style at this moment.
    ///
    /// Called once per measurement; the result is not retained.
    fn computed_style(&self) -> ComputedStyle;
}

/// The rendering of one row's value within one column.
pub trait Cell {
    /// The cell's raw underlying text, if any.
    fn raw_value(&self) -> Option<&str>;

    /// The cell's rendering element.
    fn element(&self) -> &dyn StyledElement;
}

/// A vertical slice of the grid: a header label plus a sequence of cells.
///
/// The two boolean flags are configuration declared on the host's column
/// definition; this crate only reads them.
pub trait Column {
    /// Whether this column opts in to automatic sizing.
    fn auto_width(&self) -> bool;

    /// Whether all cells are assumed to render at the same width, in which
    /// case only the first cell is measured.
    fn auto_width_same(&self) -> bool;

    /// The header title text, if the column has one.
    fn header_text(&self) -> Option<&str>;

    /// The header's containing rendering element.
    fn header_element(&self) -> &dyn StyledElement;

    /// Number of rendered cells, in current row order.
    fn cell_count(&self) -> usize;

    /// The cell at `index`, or `None` past the end.
    fn cell(&self, index: usize) -> Option<&dyn Cell>;

    /// Sets the column width in pixels.
    fn set_width(&mut self, width: f32);
}

/// The host grid, as seen by an attached plugin.
pub trait Grid {
    /// Number of columns, in current grid order.
    fn column_count(&self) -> usize;

    /// The column at `index`.
    ///
    /// # Panics
    ///
    /// Hosts may panic when `index >= column_count()`; callers iterate
    /// `0..column_count()`.
    fn column(&self, index: usize) -> &dyn Column;

    /// Mutable access to the column at `index`.
    ///
    /// # Panics
    ///
    /// Same bounds contract as [`Grid::column`].
    fn column_mut(&mut self, index: usize) -> &mut dyn Column;
}
