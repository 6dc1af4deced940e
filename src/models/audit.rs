use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

const AUDIT_SEED: &str = include_str!("../../data/seed/audit.json");

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AuditAction {
    Created,
    Updated,
    Deleted,
    Approved,
    Archived,
}

impl AuditAction {
    pub const ALL: [AuditAction; 5] = [
        AuditAction::Created,
        AuditAction::Updated,
        AuditAction::Deleted,
        AuditAction::Approved,
        AuditAction::Archived,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            AuditAction::Created => "created",
            AuditAction::Updated => "updated",
            AuditAction::Deleted => "deleted",
            AuditAction::Approved => "approved",
            AuditAction::Archived => "archived",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|a| a.as_str() == key)
    }

    /// CSS classes for the action badge.
    pub fn badge_class(&self) -> &'static str {
        match self {
            AuditAction::Created => "bg-green-100 text-green-700 border-green-200",
            AuditAction::Updated => "bg-blue-100 text-blue-700 border-blue-200",
            AuditAction::Deleted => "bg-red-100 text-red-700 border-red-200",
            AuditAction::Approved => "bg-emerald-100 text-emerald-700 border-emerald-200",
            AuditAction::Archived => "bg-slate-100 text-slate-700 border-slate-200",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            AuditAction::Created => "file-text",
            AuditAction::Updated => "edit",
            AuditAction::Deleted => "trash",
            AuditAction::Approved => "check-circle",
            AuditAction::Archived => "clock",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditEntry {
    pub id: String,
    pub timestamp: NaiveDateTime,
    pub user: String,
    pub action: AuditAction,
    pub protocol: String,
    pub department: String,
    pub details: String,
}

/// Mock activity feed shown in the audit tab. Not connected to the protocol
/// store.
#[derive(Debug, Clone)]
pub struct AuditLog {
    entries: Vec<AuditEntry>,
}

impl AuditLog {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let mut entries: Vec<AuditEntry> = serde_json::from_str(json)?;
        entries.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
        Ok(Self { entries })
    }

    pub fn embedded() -> Result<Self, serde_json::Error> {
        Self::from_json(AUDIT_SEED)
    }

    /// Newest first, optionally narrowed to one action.
    pub fn find_filtered(&self, action: Option<AuditAction>) -> Vec<&AuditEntry> {
        self.entries
            .iter()
            .filter(|e| action.is_none_or(|a| e.action == a))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

fn plural(n: i64, unit: &str) -> String {
    if n == 1 {
        format!("{n} {unit} ago")
    } else {
        format!("{n} {unit}s ago")
    }
}

/// "N minutes ago" under an hour, hours under a day, days under a week,
/// otherwise the calendar date. Future timestamps read as "0 minutes ago".
pub fn format_relative(timestamp: NaiveDateTime, now: NaiveDateTime) -> String {
    let diff = now - timestamp;
    let minutes = diff.num_minutes().max(0);
    let hours = diff.num_hours().max(0);
    let days = diff.num_days().max(0);
    if minutes < 60 {
        plural(minutes, "minute")
    } else if hours < 24 {
        plural(hours, "hour")
    } else if days < 7 {
        plural(days, "day")
    } else {
        timestamp.format("%b %-d, %Y").to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(s: &str) -> NaiveDateTime {
        NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S").unwrap()
    }

    #[test]
    fn embedded_log_newest_first() {
        let log = AuditLog::embedded().unwrap();
        assert_eq!(log.len(), 8);
        let all = log.find_filtered(None);
        assert_eq!(all[0].user, "John Doe");
        assert_eq!(all[7].user, "Fiona Black");
    }

    #[test]
    fn filter_by_action() {
        let log = AuditLog::embedded().unwrap();
        let approved = log.find_filtered(Some(AuditAction::Approved));
        assert_eq!(approved.len(), 2);
        assert!(approved.iter().all(|e| e.action == AuditAction::Approved));
    }

    #[test]
    fn relative_buckets() {
        let ts = at("2024-12-23T10:30:00");
        assert_eq!(format_relative(ts, at("2024-12-23T10:31:00")), "1 minute ago");
        assert_eq!(format_relative(ts, at("2024-12-23T11:29:00")), "59 minutes ago");
        assert_eq!(format_relative(ts, at("2024-12-23T12:30:00")), "2 hours ago");
        assert_eq!(format_relative(ts, at("2024-12-24T10:30:00")), "1 day ago");
        assert_eq!(format_relative(ts, at("2024-12-29T10:30:00")), "6 days ago");
        assert_eq!(format_relative(ts, at("2025-01-10T00:00:00")), "Dec 23, 2024");
    }

    #[test]
    fn future_timestamp_is_zero_minutes() {
        let ts = at("2024-12-23T10:30:00");
        assert_eq!(format_relative(ts, at("2024-12-23T09:00:00")), "0 minutes ago");
    }

    #[test]
    fn action_keys_roundtrip() {
        for a in AuditAction::ALL {
            assert_eq!(AuditAction::from_key(a.as_str()), Some(a));
        }
        assert_eq!(AuditAction::from_key("all"), None);
    }
}
