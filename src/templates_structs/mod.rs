// Template context structures for Askama templates, organized by page.

use actix_session::Session;

use crate::auth::csrf;
use crate::auth::session::take_flash;

pub const APP_NAME: &str = "Company Protocols";

/// Top-level tab in the page header.
pub struct NavTab {
    pub label: String,
    pub url: String,
    pub is_active: bool,
}

/// Common context shared by all pages.
/// Templates access these as `ctx.app_name`, `ctx.nav_tabs`, etc.
pub struct PageContext {
    pub app_name: String,
    pub flash: Option<String>,
    pub csrf_token: String,
    pub nav_tabs: Vec<NavTab>,
}

impl PageContext {
    pub fn build(session: &Session, current_path: &str) -> Self {
        let nav_tabs = [("Protocols", "/protocols"), ("Audit Log", "/audit"), ("Settings", "/settings")]
            .into_iter()
            .map(|(label, url)| NavTab {
                label: label.to_string(),
                url: url.to_string(),
                is_active: current_path.starts_with(url),
            })
            .collect();
        Self {
            app_name: APP_NAME.to_string(),
            flash: take_flash(session),
            csrf_token: csrf::get_or_create_token(session),
            nav_tabs,
        }
    }
}

mod audit;
mod common;
mod protocol;

// Re-export all types for seamless imports
pub use self::audit::{AuditListTemplate, AuditRow, ActionOption};
pub use self::common::{SettingsTemplate, SectionLink};
pub use self::protocol::{
    ProtocolListTemplate, HiddenField, ColumnHeader, ProtocolRow, DepartmentNav, DepartmentNavItem,
    PageLink, PagerLinks, column_headers, search_hidden_fields,
};
