use std::fmt;

use serde::{Deserialize, Serialize};

/// Left-hand sections of the settings panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SettingsSection {
    #[default]
    General,
    Departments,
    Statuses,
    Notifications,
    Access,
    Approvers,
    DigitalSignature,
}

impl SettingsSection {
    pub const ALL: [SettingsSection; 7] = [
        SettingsSection::General,
        SettingsSection::Departments,
        SettingsSection::Statuses,
        SettingsSection::Notifications,
        SettingsSection::Access,
        SettingsSection::Approvers,
        SettingsSection::DigitalSignature,
    ];

    pub fn id(&self) -> &'static str {
        match self {
            SettingsSection::General => "general",
            SettingsSection::Departments => "departments",
            SettingsSection::Statuses => "statuses",
            SettingsSection::Notifications => "notifications",
            SettingsSection::Access => "access",
            SettingsSection::Approvers => "approvers",
            SettingsSection::DigitalSignature => "digital-signature",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SettingsSection::General => "General",
            SettingsSection::Departments => "Departments",
            SettingsSection::Statuses => "Statuses",
            SettingsSection::Notifications => "Notifications",
            SettingsSection::Access => "Access Control",
            SettingsSection::Approvers => "Approvers",
            SettingsSection::DigitalSignature => "Digital Signature",
        }
    }

    /// Unknown ids land on the General section.
    pub fn from_id(id: &str) -> Self {
        Self::ALL.into_iter().find(|s| s.id() == id).unwrap_or_default()
    }
}

/// A setting for display. Values are defaults only; nothing is saved.
#[derive(Debug, Clone)]
pub struct SettingDisplay {
    pub name: String,
    pub label: String,
    pub value: String,
    pub description: String,
    pub setting_type: String, // "text", "number", "boolean", "select", "textarea"
    pub options: Vec<String>,
}

impl SettingDisplay {
    fn new(name: &str, label: &str, setting_type: &str, value: &str, description: &str) -> Self {
        Self {
            name: name.into(),
            label: label.into(),
            value: value.into(),
            description: description.into(),
            setting_type: setting_type.into(),
            options: vec![],
        }
    }

    fn text(name: &str, label: &str, value: &str, description: &str) -> Self {
        Self::new(name, label, "text", value, description)
    }

    fn number(name: &str, label: &str, value: &str, description: &str) -> Self {
        Self::new(name, label, "number", value, description)
    }

    fn flag(name: &str, label: &str, checked: bool, description: &str) -> Self {
        Self::new(name, label, "boolean", if checked { "true" } else { "false" }, description)
    }

    fn select(name: &str, label: &str, options: &[&str], description: &str) -> Self {
        Self {
            options: options.iter().map(|o| o.to_string()).collect(),
            ..Self::new(name, label, "select", options.first().copied().unwrap_or(""), description)
        }
    }

    pub fn is_checked(&self) -> bool {
        self.value == "true"
    }
}

/// Titled block of settings within a section.
#[derive(Debug, Clone)]
pub struct SettingGroup {
    pub title: String,
    pub settings: Vec<SettingDisplay>,
}

fn group(title: &str, settings: Vec<SettingDisplay>) -> SettingGroup {
    SettingGroup { title: title.into(), settings }
}

/// Static form contents for the sections that have no editable catalog.
pub fn section_groups(section: SettingsSection) -> Vec<SettingGroup> {
    match section {
        SettingsSection::General => vec![group("", vec![
            SettingDisplay::text("version_format", "Default Protocol Version Format", "X.Y",
                "Format for new protocol versions (e.g., 1.0, 2.1)"),
            SettingDisplay::number("auto_archive_days", "Auto-archive protocols after (days)", "365",
                "Automatically archive inactive protocols after specified days"),
            SettingDisplay::text("id_prefix", "Protocol ID Prefix", "PROT",
                "Prefix for auto-generated protocol IDs"),
            SettingDisplay::select("date_format", "Date Format", &["MM/DD/YYYY", "DD/MM/YYYY", "YYYY-MM-DD"],
                "Display format for dates throughout the application"),
        ])],
        SettingsSection::Notifications => vec![
            group("Email Notifications", vec![
                SettingDisplay::flag("notify_updates", "Protocol updates", true,
                    "Receive notifications when protocols are updated"),
                SettingDisplay::flag("notify_approvals", "New approvals", true,
                    "Get notified when protocols receive new approvals"),
                SettingDisplay::flag("notify_weekly", "Weekly summary emails", false,
                    "Receive a weekly digest of protocol changes"),
                SettingDisplay::flag("notify_assignments", "Department assignments", true,
                    "Notify when new protocols are assigned to your department"),
            ]),
            group("In-App Notifications", vec![
                SettingDisplay::flag("notify_realtime", "Real-time updates", true,
                    "Show notifications for real-time protocol changes"),
                SettingDisplay::flag("notify_mentions", "Comments and mentions", true,
                    "Notify when someone mentions you in protocol comments"),
            ]),
        ],
        SettingsSection::Access => vec![
            group("Protocol Permissions", vec![
                SettingDisplay::flag("require_change_approval", "Require approval for protocol changes", true,
                    "All protocol updates must be approved before publishing"),
                SettingDisplay::flag("version_control", "Enable version control", true,
                    "Track all versions of protocols with full history"),
                SettingDisplay::flag("department_permissions", "Department-level permissions", false,
                    "Restrict protocol access and editing by department"),
                SettingDisplay::flag("public_viewing", "Allow public viewing", false,
                    "Enable read-only access for non-authenticated users"),
            ]),
            group("Audit & Compliance", vec![
                SettingDisplay::flag("log_access", "Log all protocol access", true,
                    "Track who views and downloads protocols"),
                SettingDisplay::flag("require_justification", "Require change justification", true,
                    "Users must provide a reason for protocol changes"),
            ]),
        ],
        SettingsSection::Approvers => vec![
            group("", vec![
                SettingDisplay::number("min_approvals", "Minimum number of approvals required", "2",
                    "Protocols need this many approvals before activation"),
                SettingDisplay::number("max_approval_days", "Maximum approval time (days)", "14",
                    "Protocols pending approval for longer will be flagged"),
            ]),
            group("Approval Rules", vec![
                SettingDisplay::flag("department_head_approval", "Require department head approval", true,
                    "Department head must approve all protocols in their department"),
                SettingDisplay::flag("sequential_approval", "Sequential approval workflow", false,
                    "Approvals must happen in a specific order"),
                SettingDisplay::flag("self_approval", "Allow self-approval", true,
                    "Protocol authors can approve their own protocols"),
            ]),
        ],
        SettingsSection::DigitalSignature => vec![
            group("Digital Signature Activation", vec![
                SettingDisplay::flag("signatures_enabled", "Enable digital signatures", true,
                    "Require team members to digitally sign newly created protocols"),
                SettingDisplay::flag("signature_emails", "Send signature request emails automatically", true,
                    "Automatically email signature requests when a new protocol is created"),
            ]),
            group("Signature Policies", vec![
                SettingDisplay::select("signers", "Who must sign new protocols?",
                    &["All department members", "Department heads only", "Specific approvers only", "Everyone in the organization"],
                    "Select who is required to sign newly created protocols"),
                SettingDisplay::number("signature_deadline_days", "Signature deadline (days after protocol creation)", "7",
                    "Number of days members have to sign after receiving the request"),
                SettingDisplay::flag("block_until_signed", "Block protocol activation until all signatures collected", true,
                    "Protocols cannot be activated until all required signatures are obtained"),
                SettingDisplay::flag("signature_delegation", "Allow signature delegation", false,
                    "Users can delegate their signature authority to others"),
            ]),
            group("Signature Request Email Template", vec![
                SettingDisplay::text("email_subject", "Email subject line",
                    "[Action Required] Sign New Protocol: {{protocol_name}}",
                    "Use {{protocol_name}}, {{department}}, {{version}} as variables"),
                SettingDisplay::new("email_body", "Email body", "textarea", SIGNATURE_EMAIL_BODY,
                    "Customize the email body with available variables"),
                SettingDisplay::text("email_footer", "Email footer",
                    "This is an automated message from the Company Protocol Management System", ""),
            ]),
            group("Reminder Notifications", vec![
                SettingDisplay::flag("send_reminders", "Send reminder emails", true,
                    "Automatically send reminders to members who haven't signed"),
                SettingDisplay::number("first_reminder_days", "First reminder (days before deadline)", "3",
                    "Send first reminder this many days before the signature deadline"),
                SettingDisplay::number("final_reminder_days", "Final reminder (days before deadline)", "1",
                    "Send final reminder this many days before the deadline"),
                SettingDisplay::flag("overdue_notifications", "Send overdue notifications", true,
                    "Notify department heads when signatures are overdue"),
            ]),
            group("Completion Notifications", vec![
                SettingDisplay::flag("notify_creator_complete", "Notify protocol creator when all signatures collected", true,
                    "Send confirmation email when all required signatures are obtained"),
                SettingDisplay::flag("notify_signers_complete", "Send completion confirmation to signers", true,
                    "Notify each signer after they successfully sign the protocol"),
                SettingDisplay::flag("notify_heads_progress", "Notify department heads of signature progress", false,
                    "Send daily/weekly summary of signature completion status"),
            ]),
            group("Security & Compliance", vec![
                SettingDisplay::flag("record_ip", "Record IP address and timestamp", true,
                    "Log IP address and exact timestamp for each signature for audit purposes"),
                SettingDisplay::flag("signature_certificate", "Generate signature certificate", true,
                    "Create a PDF certificate as proof of signature for compliance"),
            ]),
        ],
        SettingsSection::Departments | SettingsSection::Statuses => vec![],
    }
}

const SIGNATURE_EMAIL_BODY: &str = "Dear {{recipient_name}},

A new protocol has been created that requires your digital signature:

Protocol: {{protocol_name}}
Department: {{department}}
Version: {{version}}
Created by: {{creator_name}}
Deadline: {{signature_deadline}}

Please review and sign the protocol by clicking the link below:

If you have any questions, please contact the protocol administrator.

Best regards,
Protocol Management Team";

const NEW_STATUS_COLOR: &str = "bg-blue-100 text-blue-700 border-blue-200";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    BlankName,
    NotFound(String),
}

impl fmt::Display for CatalogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogError::BlankName => write!(f, "Name must not be blank"),
            CatalogError::NotFound(id) => write!(f, "No entry with id '{id}'"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogDepartment {
    pub id: String,
    pub name: String,
    pub protocol_count: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogStatus {
    pub id: String,
    pub name: String,
    pub color: String,
}

/// Department and status lists edited in the settings panel. Scoped to one
/// browser session and never applied to protocol records.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SettingsCatalog {
    pub departments: Vec<CatalogDepartment>,
    pub statuses: Vec<CatalogStatus>,
    next_id: u64,
}

impl Default for SettingsCatalog {
    fn default() -> Self {
        let departments = [
            ("Chemistry", 2),
            ("Manufacturing", 1),
            ("Human Resources", 2),
            ("Information Technology", 1),
            ("Legal", 1),
            ("Quality Assurance", 2),
            ("Electrical Engineering", 1),
            ("Logistics", 1),
        ]
        .into_iter()
        .enumerate()
        .map(|(i, (name, protocol_count))| CatalogDepartment {
            id: (i + 1).to_string(),
            name: name.into(),
            protocol_count,
        })
        .collect();
        let statuses = [
            ("Active", "bg-green-100 text-green-700 border-green-200"),
            ("Draft", "bg-slate-100 text-slate-700 border-slate-200"),
            ("Under Review", "bg-yellow-100 text-yellow-700 border-yellow-200"),
            ("Archived", "bg-red-100 text-red-700 border-red-200"),
        ]
        .into_iter()
        .enumerate()
        .map(|(i, (name, color))| CatalogStatus {
            id: (i + 1).to_string(),
            name: name.into(),
            color: color.into(),
        })
        .collect();
        Self { departments, statuses, next_id: 100 }
    }
}

fn clean_name(name: &str) -> Result<String, CatalogError> {
    let name = name.trim();
    if name.is_empty() {
        Err(CatalogError::BlankName)
    } else {
        Ok(name.to_string())
    }
}

impl SettingsCatalog {
    fn allocate_id(&mut self) -> String {
        self.next_id += 1;
        self.next_id.to_string()
    }

    pub fn add_department(&mut self, name: &str) -> Result<&CatalogDepartment, CatalogError> {
        let name = clean_name(name)?;
        let id = self.allocate_id();
        self.departments.push(CatalogDepartment { id, name, protocol_count: 0 });
        Ok(&self.departments[self.departments.len() - 1])
    }

    pub fn rename_department(&mut self, id: &str, name: &str) -> Result<(), CatalogError> {
        let name = clean_name(name)?;
        let dept = self
            .departments
            .iter_mut()
            .find(|d| d.id == id)
            .ok_or_else(|| CatalogError::NotFound(id.to_string()))?;
        dept.name = name;
        Ok(())
    }

    pub fn delete_department(&mut self, id: &str) -> Result<CatalogDepartment, CatalogError> {
        let pos = self
            .departments
            .iter()
            .position(|d| d.id == id)
            .ok_or_else(|| CatalogError::NotFound(id.to_string()))?;
        Ok(self.departments.remove(pos))
    }

    pub fn add_status(&mut self, name: &str) -> Result<&CatalogStatus, CatalogError> {
        let name = clean_name(name)?;
        let id = self.allocate_id();
        self.statuses.push(CatalogStatus { id, name, color: NEW_STATUS_COLOR.into() });
        Ok(&self.statuses[self.statuses.len() - 1])
    }

    pub fn rename_status(&mut self, id: &str, name: &str) -> Result<(), CatalogError> {
        let name = clean_name(name)?;
        let status = self
            .statuses
            .iter_mut()
            .find(|s| s.id == id)
            .ok_or_else(|| CatalogError::NotFound(id.to_string()))?;
        status.name = name;
        Ok(())
    }

    pub fn delete_status(&mut self, id: &str) -> Result<CatalogStatus, CatalogError> {
        let pos = self
            .statuses
            .iter()
            .position(|s| s.id == id)
            .ok_or_else(|| CatalogError::NotFound(id.to_string()))?;
        Ok(self.statuses.remove(pos))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_catalog_matches_seed_lists() {
        let c = SettingsCatalog::default();
        assert_eq!(c.departments.len(), 8);
        assert_eq!(c.statuses.len(), 4);
        assert_eq!(c.departments[0].name, "Chemistry");
        assert_eq!(c.statuses[2].name, "Under Review");
    }

    #[test]
    fn add_department_trims_and_assigns_fresh_id() {
        let mut c = SettingsCatalog::default();
        let id_a = c.add_department("  Finance ").unwrap().id.clone();
        let id_b = c.add_department("Facilities").unwrap().id.clone();
        assert_ne!(id_a, id_b);
        let finance = c.departments.iter().find(|d| d.id == id_a).unwrap();
        assert_eq!(finance.name, "Finance");
        assert_eq!(finance.protocol_count, 0);
    }

    #[test]
    fn blank_names_rejected() {
        let mut c = SettingsCatalog::default();
        assert_eq!(c.add_department("   ").unwrap_err(), CatalogError::BlankName);
        assert_eq!(c.add_status("").unwrap_err(), CatalogError::BlankName);
        assert_eq!(c.rename_status("1", " ").unwrap_err(), CatalogError::BlankName);
        assert_eq!(c.departments.len(), 8);
    }

    #[test]
    fn new_status_gets_default_color() {
        let mut c = SettingsCatalog::default();
        let s = c.add_status("Retired").unwrap();
        assert_eq!(s.color, NEW_STATUS_COLOR);
    }

    #[test]
    fn rename_and_delete() {
        let mut c = SettingsCatalog::default();
        c.rename_department("5", "Legal & Compliance").unwrap();
        assert_eq!(c.departments[4].name, "Legal & Compliance");
        let removed = c.delete_department("5").unwrap();
        assert_eq!(removed.name, "Legal & Compliance");
        assert_eq!(c.departments.len(), 7);
        assert_eq!(c.delete_department("5").unwrap_err(), CatalogError::NotFound("5".into()));
        assert!(c.delete_status("4").is_ok());
        assert_eq!(c.statuses.len(), 3);
    }

    #[test]
    fn catalog_survives_json_roundtrip() {
        let mut c = SettingsCatalog::default();
        c.add_department("Finance").unwrap();
        let json = serde_json::to_string(&c).unwrap();
        let back: SettingsCatalog = serde_json::from_str(&json).unwrap();
        assert_eq!(back, c);
        // ids keep advancing after a roundtrip
        let mut back = back;
        let id = back.add_status("Retired").unwrap().id.clone();
        assert_eq!(id, "102");
    }

    #[test]
    fn sections_resolve_by_id() {
        assert_eq!(SettingsSection::from_id("digital-signature"), SettingsSection::DigitalSignature);
        assert_eq!(SettingsSection::from_id("bogus"), SettingsSection::General);
        assert!(!section_groups(SettingsSection::General).is_empty());
        assert!(section_groups(SettingsSection::Departments).is_empty());
    }
}
