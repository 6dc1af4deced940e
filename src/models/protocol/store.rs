use std::collections::HashSet;
use std::fmt;
use std::path::Path;

use super::types::ProtocolRecord;

const PROTOCOL_SEED: &str = include_str!("../../../data/seed/protocols.json");

#[derive(Debug)]
pub enum StoreError {
    Io(std::io::Error),
    Json(serde_json::Error),
    DuplicateId(String),
    EmptyDepartment(String),
    DuplicateApprover { record: String, approver: String },
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreError::Io(e) => write!(f, "Seed file error: {e}"),
            StoreError::Json(e) => write!(f, "Seed JSON error: {e}"),
            StoreError::DuplicateId(id) => write!(f, "Duplicate protocol id '{id}'"),
            StoreError::EmptyDepartment(id) => write!(f, "Protocol '{id}' has an empty department"),
            StoreError::DuplicateApprover { record, approver } => {
                write!(f, "Protocol '{record}' lists approver '{approver}' more than once")
            }
        }
    }
}

impl std::error::Error for StoreError {}

impl From<std::io::Error> for StoreError {
    fn from(e: std::io::Error) -> Self {
        StoreError::Io(e)
    }
}

impl From<serde_json::Error> for StoreError {
    fn from(e: serde_json::Error) -> Self {
        StoreError::Json(e)
    }
}

/// Read-only protocol collection, fixed for the lifetime of the process.
#[derive(Debug, Clone)]
pub struct RecordStore {
    records: Vec<ProtocolRecord>,
}

impl RecordStore {
    /// Build a store, rejecting records that break the id, department or
    /// approver invariants. Input order is preserved.
    pub fn from_records(records: Vec<ProtocolRecord>) -> Result<Self, StoreError> {
        let mut seen = HashSet::new();
        for record in &records {
            if !seen.insert(record.id.as_str()) {
                return Err(StoreError::DuplicateId(record.id.clone()));
            }
            if record.department.trim().is_empty() {
                return Err(StoreError::EmptyDepartment(record.id.clone()));
            }
            let mut approver_ids = HashSet::new();
            for approver in &record.approvers {
                if !approver_ids.insert(approver.id.as_str()) {
                    return Err(StoreError::DuplicateApprover {
                        record: record.id.clone(),
                        approver: approver.id.clone(),
                    });
                }
            }
        }
        Ok(Self { records })
    }

    pub fn from_json(json: &str) -> Result<Self, StoreError> {
        let records: Vec<ProtocolRecord> = serde_json::from_str(json)?;
        Self::from_records(records)
    }

    /// The seed compiled into the binary.
    pub fn embedded() -> Result<Self, StoreError> {
        Self::from_json(PROTOCOL_SEED)
    }

    /// Load from a seed file if one is given, otherwise use the embedded seed.
    pub fn load(path: Option<&Path>) -> Result<Self, StoreError> {
        match path {
            Some(p) => {
                let json = std::fs::read_to_string(p)?;
                let store = Self::from_json(&json)?;
                log::info!("Loaded {} protocols from {}", store.len(), p.display());
                Ok(store)
            }
            None => Self::embedded(),
        }
    }

    pub fn records(&self) -> &[ProtocolRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_seed_is_valid() {
        let store = RecordStore::embedded().unwrap();
        assert_eq!(store.len(), 10);
        assert_eq!(store.records()[0].title, "Safety Protocol for Chemical Handling");
    }

    #[test]
    fn duplicate_id_rejected() {
        let json = r#"[
          {"id":"1","title":"a","description":"","department":"Legal","status":"Active","version":"1","last_updated":"2024-01-01"},
          {"id":"1","title":"b","description":"","department":"Legal","status":"Draft","version":"1","last_updated":"2024-01-02"}
        ]"#;
        assert!(matches!(RecordStore::from_json(json), Err(StoreError::DuplicateId(id)) if id == "1"));
    }

    #[test]
    fn blank_department_rejected() {
        let json = r#"[{"id":"1","title":"a","description":"","department":"  ","status":"Active","version":"1","last_updated":"2024-01-01"}]"#;
        assert!(matches!(RecordStore::from_json(json), Err(StoreError::EmptyDepartment(_))));
    }

    #[test]
    fn duplicate_approver_rejected() {
        let json = r#"[{"id":"1","title":"a","description":"","department":"Legal","status":"Active","version":"1","last_updated":"2024-01-01",
            "approvers":[{"id":"7","name":"Ethan Green"},{"id":"7","name":"Ethan Green"}]}]"#;
        assert!(matches!(
            RecordStore::from_json(json),
            Err(StoreError::DuplicateApprover { ref approver, .. }) if approver == "7"
        ));
    }

    #[test]
    fn unparseable_date_rejected() {
        let json = r#"[{"id":"1","title":"a","description":"","department":"Legal","status":"Active","version":"1","last_updated":"2024-13-40"}]"#;
        assert!(matches!(RecordStore::from_json(json), Err(StoreError::Json(_))));
    }
}
