use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Lifecycle status of a protocol document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProtocolStatus {
    Active,
    Draft,
    #[serde(rename = "Under Review")]
    UnderReview,
    Archived,
    Inactive,
}

impl ProtocolStatus {
    pub fn label(&self) -> &'static str {
        match self {
            ProtocolStatus::Active => "Active",
            ProtocolStatus::Draft => "Draft",
            ProtocolStatus::UnderReview => "Under Review",
            ProtocolStatus::Archived => "Archived",
            ProtocolStatus::Inactive => "Inactive",
        }
    }

    /// Badge style used by the table's status pill.
    pub fn badge_variant(&self) -> &'static str {
        match self {
            ProtocolStatus::Active => "default",
            ProtocolStatus::UnderReview => "secondary",
            ProtocolStatus::Draft | ProtocolStatus::Archived | ProtocolStatus::Inactive => "outline",
        }
    }
}

/// A person listed in a protocol's approval history. Display-only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Approver {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProtocolRecord {
    pub id: String,
    pub title: String,
    pub description: String,
    pub department: String,
    pub status: ProtocolStatus,
    pub version: String,
    pub last_updated: NaiveDate,
    #[serde(default)]
    pub approvers: Vec<Approver>,
}

impl ProtocolRecord {
    /// "Jan 15, 2024"
    pub fn last_updated_display(&self) -> String {
        self.last_updated.format("%b %-d, %Y").to_string()
    }
}

/// One page of the filtered, sorted protocol list.
#[derive(Debug, Clone, Serialize)]
pub struct ProtocolPage {
    pub items: Vec<ProtocolRecord>,
    pub page: usize,
    pub per_page: usize,
    pub total_count: usize,
    pub total_pages: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DepartmentCount {
    pub name: String,
    pub count: usize,
}

/// Per-department counts for the side navigation, alphabetical by name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DepartmentSummary {
    pub departments: Vec<DepartmentCount>,
    pub total: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_deserializes_from_display_label() {
        let s: ProtocolStatus = serde_json::from_str("\"Under Review\"").unwrap();
        assert_eq!(s, ProtocolStatus::UnderReview);
        assert_eq!(s.label(), "Under Review");
    }

    #[test]
    fn badge_variants() {
        assert_eq!(ProtocolStatus::Active.badge_variant(), "default");
        assert_eq!(ProtocolStatus::UnderReview.badge_variant(), "secondary");
        assert_eq!(ProtocolStatus::Archived.badge_variant(), "outline");
        assert_eq!(ProtocolStatus::Inactive.badge_variant(), "outline");
        assert_eq!(ProtocolStatus::Draft.badge_variant(), "outline");
    }

    #[test]
    fn date_display_has_no_zero_padding() {
        let r = ProtocolRecord {
            id: "x".into(),
            title: "t".into(),
            description: "d".into(),
            department: "Legal".into(),
            status: ProtocolStatus::Active,
            version: "1.0".into(),
            last_updated: NaiveDate::from_ymd_opt(2023, 11, 5).unwrap(),
            approvers: vec![],
        };
        assert_eq!(r.last_updated_display(), "Nov 5, 2023");
    }
}
