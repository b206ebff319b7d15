//! Plugin lifecycle and registration.
//!
//! A host grid dispatches its refresh event to every attached plugin. The
//! [`GridPlugin`] trait replaces a scope-bound event listener with explicit
//! lifecycle hooks: `on_attach` when the plugin joins a grid, `on_refresh` on
//! every refresh dispatch, and `on_detach` on teardown, so a plugin's
//! subscription ends with its attachment instead of living forever.
//!
//! Plugins are also creatable by type name through a [`PluginRegistry`], so a
//! host can declare `plugins: ["autowidth"]` in its grid configuration.

use ahash::AHashMap;
use smallvec::SmallVec;

use crate::error::{Error, Result};
use crate::grid::Grid;

/// A plugin attachable to a host grid.
pub trait GridPlugin {
    /// The plugin's registered type name.
    fn type_name(&self) -> &'static str;

    /// Called when the plugin is attached to a grid.
    fn on_attach(&mut self, grid: &mut dyn Grid) {
        let _ = grid;
    }

    /// Called on every grid refresh, synchronously within the dispatch.
    fn on_refresh(&mut self, grid: &mut dyn Grid);

    /// Called when the plugin is detached from the grid.
    fn on_detach(&mut self, grid: &mut dyn Grid) {
        let _ = grid;
    }
}

/// A boxed plugin.
pub type BoxedPlugin = Box<dyn GridPlugin>;

/// The set of plugins attached to one grid.
///
/// A host embeds one of these and forwards its refresh event through
/// [`PluginSet::refresh`]. Plugins run in attachment order.
#[derive(Default)]
pub struct PluginSet {
    plugins: SmallVec<[BoxedPlugin; 4]>,
}

impl PluginSet {
    /// Creates an empty plugin set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Attaches a plugin, invoking its `on_attach` hook.
    pub fn attach(&mut self, mut plugin: BoxedPlugin, grid: &mut dyn Grid) {
        plugin.on_attach(grid);
        self.plugins.push(plugin);
    }

    /// Dispatches a refresh to every attached plugin, in attachment order.
    pub fn refresh(&mut self, grid: &mut dyn Grid) {
        for plugin in &mut self.plugins {
            plugin.on_refresh(grid);
        }
    }

    /// Detaches every plugin, invoking `on_detach` hooks in attachment order.
    pub fn detach_all(&mut self, grid: &mut dyn Grid) {
        for mut plugin in self.plugins.drain(..) {
            plugin.on_detach(grid);
        }
    }

    /// Number of attached plugins.
    #[must_use]
    pub fn len(&self) -> usize {
        self.plugins.len()
    }

    /// Returns true if no plugins are attached.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.plugins.is_empty()
    }
}

impl std::fmt::Debug for PluginSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list()
            .entries(self.plugins.iter().map(|p| p.type_name()))
            .finish()
    }
}

/// Factory producing a fresh plugin instance.
pub type PluginFactory = Box<dyn Fn() -> BoxedPlugin>;

/// Named plugin factories.
///
/// Maps type names to factories so hosts can instantiate plugins from
/// configuration. [`PluginRegistry::with_builtins`] preregisters the plugins
/// this crate ships.
#[derive(Default)]
pub struct PluginRegistry {
    factories: AHashMap<&'static str, PluginFactory>,
}

impl PluginRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a registry with this crate's plugins preregistered.
    #[must_use]
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        registry
            .register(crate::autowidth::PLUGIN_TYPE, || {
                Box::new(crate::autowidth::AutoWidth::new())
            })
            .unwrap_or_else(|_| unreachable!("empty registry has no duplicates"));
        registry
    }

    /// Registers a factory under `name`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DuplicatePlugin`] if `name` is already registered.
    pub fn register<F>(&mut self, name: &'static str, factory: F) -> Result<()>
    where
        F: Fn() -> BoxedPlugin + 'static,
    {
        if self.factories.contains_key(name) {
            return Err(Error::DuplicatePlugin(name));
        }
        self.factories.insert(name, Box::new(factory));
        Ok(())
    }

    /// Creates a fresh plugin instance for `name`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownPlugin`] if `name` is not registered.
    pub fn create(&self, name: &str) -> Result<BoxedPlugin> {
        self.factories
            .get(name)
            .map(|factory| factory())
            .ok_or_else(|| Error::UnknownPlugin(name.to_string()))
    }

    /// Returns true if `name` is registered.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.factories.contains_key(name)
    }
}

impl std::fmt::Debug for PluginRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_set().entries(self.factories.keys()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::autowidth::PLUGIN_TYPE;
    use crate::grid::Column;

    struct NullGrid;

    impl Grid for NullGrid {
        fn column_count(&self) -> usize {
            0
        }

        fn column(&self, _index: usize) -> &dyn Column {
            panic!("no columns")
        }

        fn column_mut(&mut self, _index: usize) -> &mut dyn Column {
            panic!("no columns")
        }
    }

    struct Recorder {
        log: std::rc::Rc<std::cell::RefCell<Vec<&'static str>>>,
    }

    impl GridPlugin for Recorder {
        fn type_name(&self) -> &'static str {
            "recorder"
        }

        fn on_attach(&mut self, _grid: &mut dyn Grid) {
            self.log.borrow_mut().push("attach");
        }

        fn on_refresh(&mut self, _grid: &mut dyn Grid) {
            self.log.borrow_mut().push("refresh");
        }

        fn on_detach(&mut self, _grid: &mut dyn Grid) {
            self.log.borrow_mut().push("detach");
        }
    }

    #[test]
    fn test_registry_builtins() {
        let registry = PluginRegistry::with_builtins();
        assert!(registry.contains(PLUGIN_TYPE));

        let plugin = registry.create(PLUGIN_TYPE).unwrap();
        assert_eq!(plugin.type_name(), PLUGIN_TYPE);
    }

    #[test]
    fn test_registry_unknown_plugin() {
        let registry = PluginRegistry::new();
        let err = registry.create("rowheight").err().unwrap();
        assert_eq!(err, Error::UnknownPlugin("rowheight".to_string()));
    }

    #[test]
    fn test_registry_duplicate_plugin() {
        let mut registry = PluginRegistry::with_builtins();
        let result = registry.register(PLUGIN_TYPE, || {
            Box::new(crate::autowidth::AutoWidth::new())
        });
        assert_eq!(result, Err(Error::DuplicatePlugin(PLUGIN_TYPE)));
    }

    #[test]
    fn test_plugin_set_lifecycle() {
        let log = std::rc::Rc::new(std::cell::RefCell::new(Vec::new()));
        let mut grid = NullGrid;
        let mut plugins = PluginSet::new();
        assert!(plugins.is_empty());

        plugins.attach(Box::new(Recorder { log: log.clone() }), &mut grid);
        assert_eq!(plugins.len(), 1);

        plugins.refresh(&mut grid);
        plugins.refresh(&mut grid);

        plugins.detach_all(&mut grid);
        assert!(plugins.is_empty());

        assert_eq!(
            *log.borrow(),
            vec!["attach", "refresh", "refresh", "detach"]
        );
    }
}
