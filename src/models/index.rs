//! The module-keyed dependency index

use serde::Serialize;
use std::collections::btree_map;
use std::collections::BTreeMap;

/// Mapping from module reference to the files that contain it.
///
/// Keys iterate in sorted order; each file list keeps discovery order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct DependencyIndex {
    modules: BTreeMap<String, Vec<String>>,
}

impl DependencyIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `source_file` to the list for `module_name`, creating it on first use
    pub(crate) fn push(&mut self, module_name: String, source_file: String) {
        self.modules.entry(module_name).or_default().push(source_file);
    }

    /// Files referencing `module_name`, if any
    pub fn get(&self, module_name: &str) -> Option<&[String]> {
        self.modules.get(module_name).map(Vec::as_slice)
    }

    pub fn contains(&self, module_name: &str) -> bool {
        self.modules.contains_key(module_name)
    }

    /// Number of distinct modules
    pub fn len(&self) -> usize {
        self.modules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.modules.is_empty()
    }

    /// Total file-list entries across all modules
    pub fn reference_count(&self) -> usize {
        self.modules.values().map(Vec::len).sum()
    }

    pub fn iter(&self) -> btree_map::Iter<'_, String, Vec<String>> {
        self.modules.iter()
    }

    /// Flatten back into `(module, file)` pairs
    pub fn pairs(&self) -> impl Iterator<Item = (&str, &str)> {
        self.modules.iter().flat_map(|(module, files)| {
            files
                .iter()
                .map(move |file| (module.as_str(), file.as_str()))
        })
    }
}

impl<'a> IntoIterator for &'a DependencyIndex {
    type Item = (&'a String, &'a Vec<String>);
    type IntoIter = btree_map::Iter<'a, String, Vec<String>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
