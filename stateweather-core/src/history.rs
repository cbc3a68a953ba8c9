use std::collections::BTreeSet;

use crate::{error::HistoryError, model::HistoryRecord};

/// In-memory lookup history for one session. Insertion order is display order.
#[derive(Debug, Clone, Default)]
pub struct HistoryStore {
    records: Vec<HistoryRecord>,
}

impl HistoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append(&mut self, record: HistoryRecord) {
        self.records.push(record);
    }

    pub fn all(&self) -> &[HistoryRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Remove the rows at `positions` (0-based, duplicates ignored).
    ///
    /// The store is left untouched if the selection is empty or names a row
    /// that does not exist. Returns how many rows were removed.
    pub fn remove_at(&mut self, positions: &[usize]) -> Result<usize, HistoryError> {
        if positions.is_empty() {
            return Err(HistoryError::NoSelection);
        }

        let selected: BTreeSet<usize> = positions.iter().copied().collect();
        if let Some(&index) = selected.iter().find(|&&i| i >= self.records.len()) {
            return Err(HistoryError::OutOfRange { index, len: self.records.len() });
        }

        let mut position = 0;
        self.records.retain(|_| {
            let keep = !selected.contains(&position);
            position += 1;
            keep
        });

        Ok(selected.len())
    }

    pub fn clear(&mut self) {
        self.records.clear();
    }
}
