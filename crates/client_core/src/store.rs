use shared::domain::EmployeeRecord;

/// The session's only copy of the employee list.
///
/// Replaced wholesale on every load and filtered in place on delete; nothing
/// else mutates it.
#[derive(Debug, Clone, Default)]
pub struct RecordStore {
    records: Vec<EmployeeRecord>,
}

impl RecordStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self) -> &[EmployeeRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn replace(&mut self, records: Vec<EmployeeRecord>) {
        self.records = records;
    }

    /// Drops every record carrying `id`, keeping the order of the rest.
    /// Returns how many were removed.
    pub fn remove_by_id(&mut self, id: &str) -> usize {
        let before = self.records.len();
        self.records.retain(|record| !record.has_id(id));
        before - self.records.len()
    }
}

#[cfg(test)]
#[path = "tests/store_tests.rs"]
mod tests;
