//! Import deduplication and aggregation.

use std::collections::BTreeSet;

use indexmap::IndexMap;

use crate::Builder;

/// Tracks imports and deduplicates them.
///
/// Modules keep insertion order and symbols are sorted, so rendering is
/// deterministic. Rendering goes through [`Builder::add_import`], which
/// keeps collected imports under the same formatting policy as everything
/// else the builder emits.
///
/// # Example
///
/// ```
/// use dgen::{Builder, ImportCollector};
///
/// let mut imports = ImportCollector::new();
/// imports.add("std.stdio", "writeln");
/// imports.add("std.stdio", "readln");
/// imports.add_module("std.conv");
///
/// let mut b = Builder::default();
/// imports.render(&mut b);
/// assert_eq!(
///     b.as_str(),
///     "import std.stdio : readln, writeln;\nimport std.conv;\n"
/// );
/// ```
#[derive(Debug, Clone, Default)]
pub struct ImportCollector {
    /// Module path -> set of symbols (sorted for deterministic output)
    imports: IndexMap<String, BTreeSet<String>>,
}

impl ImportCollector {
    /// Create a new empty import collector.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a symbol import from a module.
    pub fn add(&mut self, module: &str, symbol: &str) {
        self.imports
            .entry(module.to_string())
            .or_default()
            .insert(symbol.to_string());
    }

    /// Add a whole-module import without a selection clause.
    pub fn add_module(&mut self, module: &str) {
        self.imports.entry(module.to_string()).or_default();
    }

    /// Merge another collector into this one.
    pub fn merge(&mut self, other: &ImportCollector) {
        for (module, symbols) in &other.imports {
            let entry = self.imports.entry(module.clone()).or_default();
            entry.extend(symbols.iter().cloned());
        }
    }

    /// Check if a module is already imported.
    pub fn has_module(&self, module: &str) -> bool {
        self.imports.contains_key(module)
    }

    /// Check if a specific symbol is imported from a module.
    pub fn has_symbol(&self, module: &str, symbol: &str) -> bool {
        self.imports
            .get(module)
            .is_some_and(|symbols| symbols.contains(symbol))
    }

    /// Iterate over all imports in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &BTreeSet<String>)> {
        self.imports.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Check if the collector is empty.
    pub fn is_empty(&self) -> bool {
        self.imports.is_empty()
    }

    /// Get the number of modules.
    pub fn len(&self) -> usize {
        self.imports.len()
    }

    /// Emit one import declaration per module into the builder.
    pub fn render<'a>(&self, builder: &'a mut Builder) -> &'a mut Builder {
        for (module, symbols) in self.iter() {
            if symbols.is_empty() {
                builder.add_import(module, None);
            } else {
                let selection: Vec<&str> = symbols.iter().map(String::as_str).collect();
                builder.add_import(module, Some(&selection));
            }
        }
        builder
    }
}
