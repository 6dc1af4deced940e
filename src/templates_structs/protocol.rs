use askama::Template;

use crate::models::protocol::avatar::{AvatarStack, avatar_stack};
use crate::models::protocol::{DepartmentSummary, ProtocolRecord};
use crate::models::table_filter::paginate::Pager;
use crate::models::table_filter::selection::{PagePolicy, SelectionState};
use crate::models::table_filter::{ColumnDef, SortDir};
use super::PageContext;

const LIST_PATH: &str = "/protocols";

#[derive(Template)]
#[template(path = "protocols/list.html")]
pub struct ProtocolListTemplate {
    pub ctx: PageContext,
    pub search_query: String,
    pub hidden_fields: Vec<HiddenField>,
    pub columns: Vec<ColumnHeader>,
    pub rows: Vec<ProtocolRow>,
    pub nav: DepartmentNav,
    pub pager: Pager,
    pub pager_links: PagerLinks,
}

/// State the search form must resubmit alongside `q`. Page is left out so a
/// new search starts on page 1.
pub struct HiddenField {
    pub name: String,
    pub value: String,
}

pub fn search_hidden_fields(state: &SelectionState) -> Vec<HiddenField> {
    let mut fields = vec![
        HiddenField { name: "sort".into(), value: state.sort.key().into() },
        HiddenField { name: "dir".into(), value: state.dir.as_str().into() },
    ];
    if let Some(dept) = &state.department {
        fields.push(HiddenField { name: "department".into(), value: dept.clone() });
    }
    fields
}

pub struct ColumnHeader {
    pub label: String,
    pub sortable: bool,
    pub sort_href: String,
    pub indicator: String,
    pub align_right: bool,
}

pub fn column_headers(columns: &[ColumnDef], state: &SelectionState, policy: PagePolicy) -> Vec<ColumnHeader> {
    columns
        .iter()
        .map(|col| match col.sortable {
            Some(field) => ColumnHeader {
                label: col.label.clone(),
                sortable: true,
                sort_href: state.with(|s| s.toggle_sort(field, policy)).href(LIST_PATH),
                indicator: match (state.sort == field, state.dir) {
                    (true, SortDir::Asc) => "▲".into(),
                    (true, SortDir::Desc) => "▼".into(),
                    (false, _) => "↕".into(),
                },
                align_right: col.align_right,
            },
            None => ColumnHeader {
                label: col.label.clone(),
                sortable: false,
                sort_href: String::new(),
                indicator: String::new(),
                align_right: col.align_right,
            },
        })
        .collect()
}

pub struct ProtocolRow {
    pub id: String,
    pub title: String,
    pub description: String,
    pub department: String,
    pub version: String,
    pub last_updated: String,
    pub status_label: String,
    pub status_variant: String,
    pub approvers: AvatarStack,
}

impl From<&ProtocolRecord> for ProtocolRow {
    fn from(r: &ProtocolRecord) -> Self {
        Self {
            id: r.id.clone(),
            title: r.title.clone(),
            description: r.description.clone(),
            department: r.department.clone(),
            version: r.version.clone(),
            last_updated: r.last_updated_display(),
            status_label: r.status.label().into(),
            status_variant: r.status.badge_variant().into(),
            approvers: avatar_stack(&r.approvers),
        }
    }
}

pub struct DepartmentNavItem {
    pub name: String,
    pub count: usize,
    pub href: String,
    pub is_selected: bool,
}

/// Side navigation: "All Protocols" plus one entry per department.
pub struct DepartmentNav {
    pub all_href: String,
    pub all_selected: bool,
    pub total: usize,
    pub items: Vec<DepartmentNavItem>,
}

impl DepartmentNav {
    pub fn build(summary: &DepartmentSummary, state: &SelectionState, policy: PagePolicy) -> Self {
        let items = summary
            .departments
            .iter()
            .map(|d| DepartmentNavItem {
                name: d.name.clone(),
                count: d.count,
                href: state
                    .with(|s| s.set_department(Some(d.name.clone()), policy))
                    .href(LIST_PATH),
                is_selected: state.department.as_deref() == Some(d.name.as_str()),
            })
            .collect();
        Self {
            all_href: state.with(|s| s.set_department(None, policy)).href(LIST_PATH),
            all_selected: state.department.is_none(),
            total: summary.total,
            items,
        }
    }
}

pub struct PageLink {
    pub number: usize,
    pub href: String,
    pub is_current: bool,
}

pub struct PagerLinks {
    pub prev_href: String,
    pub next_href: String,
    pub pages: Vec<PageLink>,
}

impl PagerLinks {
    pub fn build(pager: &Pager, state: &SelectionState) -> Self {
        let link = |n: usize| state.with(|s| s.set_page(n)).href(LIST_PATH);
        Self {
            prev_href: link(pager.page.saturating_sub(1).max(1)),
            next_href: link(pager.page.saturating_add(1)),
            pages: pager
                .page_numbers()
                .into_iter()
                .map(|n| PageLink { number: n, href: link(n), is_current: n == pager.page })
                .collect(),
        }
    }
}
