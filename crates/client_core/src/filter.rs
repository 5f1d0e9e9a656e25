use shared::domain::EmployeeRecord;

pub fn normalize_query(query: &str) -> String {
    query.trim().to_lowercase()
}

/// Case-insensitive substring match on id or name. `needle` must already be
/// normalized.
pub fn record_matches(record: &EmployeeRecord, needle: &str) -> bool {
    record.id().to_lowercase().contains(needle) || record.name().to_lowercase().contains(needle)
}

/// Records visible for `query`, in store order. A blank query keeps everything.
pub fn filter_records<'a>(records: &'a [EmployeeRecord], query: &str) -> Vec<&'a EmployeeRecord> {
    let needle = normalize_query(query);
    if needle.is_empty() {
        return records.iter().collect();
    }
    records
        .iter()
        .filter(|record| record_matches(record, &needle))
        .collect()
}

#[cfg(test)]
#[path = "tests/filter_tests.rs"]
mod tests;
