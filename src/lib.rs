//! Automatic column width sizing for host grid widgets.
//!
//! This crate ships a single grid plugin, [`AutoWidth`], that sizes text
//! columns to fit their header and cell content whenever the host grid
//! refreshes. The grid itself is an external collaborator: its columns,
//! cells, and style resolution are consumed through the narrow traits in
//! [`grid`], and its text metrics through the [`measure::TextMeasurer`] seam.
//!
//! A column opts in with its `auto_width` flag. Adding `auto_width_same`
//! declares that every cell renders at the same width, so only the title and
//! the first cell are measured, increasing performance.
//!
//! # Example
//!
//! ```ignore
//! use grid_autowidth::{AutoWidth, PluginRegistry, PluginSet};
//!
//! // Host-side wiring: instantiate by type name and attach.
//! let registry = PluginRegistry::with_builtins();
//! let mut plugins = PluginSet::new();
//! plugins.attach(registry.create("autowidth")?, &mut grid);
//!
//! // On every refresh dispatch:
//! plugins.refresh(&mut grid);
//! # Ok::<(), grid_autowidth::Error>(())
//! ```
//!
//! # Module Structure
//!
//! - [`grid`]: the consumed host interface (`Grid`, `Column`, `Cell`,
//!   `StyledElement`)
//! - [`style`]: computed style values (`FontDescriptor`, `EdgeInsets`)
//! - [`measure`]: the text-measurement seam and width routine
//! - [`plugin`]: plugin lifecycle, attachment set, and named registry
//! - [`autowidth`]: the `AutoWidth` plugin itself
//! - [`error`]: registry error types

pub mod autowidth;
pub mod error;
pub mod grid;
pub mod measure;
pub mod plugin;
pub mod style;

// Re-exports for convenience
pub use autowidth::{AutoWidth, PLUGIN_TYPE};
pub use error::{Error, Result};
pub use grid::{Cell, Column, Grid, StyledElement};
pub use measure::{measure_width, MonospaceMeasurer, TextMeasurer, TextMetrics};
pub use plugin::{BoxedPlugin, GridPlugin, PluginFactory, PluginRegistry, PluginSet};
pub use style::{ComputedStyle, EdgeInsets, FontAttributes, FontDescriptor};
