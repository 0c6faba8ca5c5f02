//! Folding reference records into the dependency index

use crate::models::index::DependencyIndex;
use crate::models::reference::ReferenceRecord;

/// Collapse `records` into a module-keyed index.
///
/// Each record appends its file to the list for its module, so the total number
/// of list entries always equals the number of records.
pub fn aggregate<I>(records: I) -> DependencyIndex
where
    I: IntoIterator<Item = ReferenceRecord>,
{
    records
        .into_iter()
        .fold(DependencyIndex::new(), |mut index, record| {
            index.push(record.module_name, record.source_file);
            index
        })
}
