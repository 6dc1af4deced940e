use askama::Template;

use crate::models::setting::{CatalogDepartment, CatalogStatus, SettingGroup, SettingsSection};
use super::PageContext;

#[derive(Template)]
#[template(path = "settings.html")]
pub struct SettingsTemplate {
    pub ctx: PageContext,
    pub sections: Vec<SectionLink>,
    pub active_id: String,
    pub active_label: String,
    pub groups: Vec<SettingGroup>,
    pub departments: Vec<CatalogDepartment>,
    pub statuses: Vec<CatalogStatus>,
    /// Catalog entry currently shown with an inline rename form.
    pub editing_id: String,
}

pub struct SectionLink {
    pub id: String,
    pub label: String,
    pub href: String,
    pub is_active: bool,
}

impl SectionLink {
    pub fn all(active: SettingsSection) -> Vec<SectionLink> {
        SettingsSection::ALL
            .into_iter()
            .map(|s| SectionLink {
                id: s.id().to_string(),
                label: s.label().to_string(),
                href: format!("/settings?section={}", s.id()),
                is_active: s == active,
            })
            .collect()
    }
}
