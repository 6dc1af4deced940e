use askama::Template;
use chrono::NaiveDateTime;

use crate::models::audit::{AuditAction, AuditEntry, format_relative};
use super::PageContext;

#[derive(Template)]
#[template(path = "audit/list.html")]
pub struct AuditListTemplate {
    pub ctx: PageContext,
    pub entries: Vec<AuditRow>,
    pub action_options: Vec<ActionOption>,
}

pub struct AuditRow {
    pub user: String,
    pub action: String,
    pub action_badge: String,
    pub icon: String,
    pub protocol: String,
    pub department: String,
    pub details: String,
    pub when: String,
}

impl AuditRow {
    pub fn build(entry: &AuditEntry, now: NaiveDateTime) -> Self {
        Self {
            user: entry.user.clone(),
            action: entry.action.as_str().to_string(),
            action_badge: entry.action.badge_class().to_string(),
            icon: entry.action.icon().to_string(),
            protocol: entry.protocol.clone(),
            department: entry.department.clone(),
            details: entry.details.clone(),
            when: format_relative(entry.timestamp, now),
        }
    }
}

/// Entry in the action filter dropdown; empty value means all actions.
pub struct ActionOption {
    pub value: String,
    pub label: String,
    pub is_selected: bool,
}

impl ActionOption {
    pub fn all(selected: Option<AuditAction>) -> Vec<ActionOption> {
        let mut options = vec![ActionOption {
            value: String::new(),
            label: "All actions".to_string(),
            is_selected: selected.is_none(),
        }];
        options.extend(AuditAction::ALL.into_iter().map(|a| ActionOption {
            value: a.as_str().to_string(),
            label: a.as_str().to_string(),
            is_selected: selected == Some(a),
        }));
        options
    }
}
