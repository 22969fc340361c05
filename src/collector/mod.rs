use std::collections::HashSet;

use crate::parser::is_module_name;

/// Deduplicating accumulator for module names, plus per-run file counts.
#[derive(Debug, Default)]
pub struct ModuleCollector {
    modules: HashSet<String>,
    files_scanned: usize,
    files_skipped: usize,
}

impl ModuleCollector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true if `name` is a module name not seen before.
    pub fn insert(&mut self, name: &str) -> bool {
        if !is_module_name(name) || self.modules.contains(name) {
            return false;
        }
        self.modules.insert(name.to_string())
    }

    pub fn extend<'s>(&mut self, names: impl IntoIterator<Item = &'s str>) {
        for name in names {
            self.insert(name);
        }
    }

    pub fn record_scanned(&mut self) {
        self.files_scanned += 1;
    }

    pub fn record_skipped(&mut self) {
        self.files_skipped += 1;
    }

    pub fn len(&self) -> usize {
        self.modules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.modules.is_empty()
    }

    pub fn files_scanned(&self) -> usize {
        self.files_scanned
    }

    pub fn files_skipped(&self) -> usize {
        self.files_skipped
    }

    /// Consumes the collector, returning names in ascending code-point order.
    pub fn into_sorted(self) -> Vec<String> {
        let mut modules: Vec<String> = self.modules.into_iter().collect();
        modules.sort_unstable();
        modules
    }
}
