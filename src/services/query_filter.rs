use crate::models::{FilterState, FlattenedSearchRecord};

/// Records matching every active filter, in their original order.
pub fn apply(
    records: &[FlattenedSearchRecord],
    filters: &FilterState,
) -> Vec<FlattenedSearchRecord> {
    if filters.is_empty() {
        return records.to_vec();
    }

    records
        .iter()
        .filter(|record| filters.matches(record))
        .cloned()
        .collect()
}
