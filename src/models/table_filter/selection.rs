use std::collections::HashMap;

use serde::Serialize;

use super::{SortDir, SortField, SortSpec};

/// Whether department and sort changes keep the current page.
/// A query change always goes back to page 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PagePolicy {
    #[default]
    CarryOver,
    Reset,
}

/// Everything the protocol table is derived from. Lives in the URL query
/// string so every request carries the complete state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SelectionState {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub q: String,
    pub sort: SortField,
    pub dir: SortDir,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub department: Option<String>,
    pub page: usize,
}

impl Default for SelectionState {
    fn default() -> Self {
        Self {
            q: String::new(),
            sort: SortField::LastUpdated,
            dir: SortDir::Desc,
            department: None,
            page: 1,
        }
    }
}

impl SelectionState {
    /// Lenient parse: unknown or malformed values take their defaults.
    pub fn from_params(params: &HashMap<String, String>) -> Self {
        let sort = SortSpec::from_params(
            params.get("sort").map(String::as_str),
            params.get("dir").map(String::as_str),
        );
        let department = params
            .get("department")
            .filter(|d| !d.is_empty())
            .cloned();
        let page = params
            .get("page")
            .and_then(|p| p.trim().parse::<usize>().ok())
            .unwrap_or(1)
            .max(1);
        Self {
            q: params.get("q").cloned().unwrap_or_default(),
            sort: sort.field,
            dir: sort.dir,
            department,
            page,
        }
    }

    pub fn from_query_str(query: &str) -> Self {
        let pairs: Vec<(String, String)> = serde_urlencoded::from_str(query).unwrap_or_default();
        Self::from_params(&pairs.into_iter().collect())
    }

    pub fn to_query_string(&self) -> String {
        serde_urlencoded::to_string(self).unwrap_or_default()
    }

    /// Link to `base` carrying this state.
    pub fn href(&self, base: &str) -> String {
        format!("{base}?{}", self.to_query_string())
    }

    pub fn sort_spec(&self) -> SortSpec {
        SortSpec { field: self.sort, dir: self.dir }
    }

    pub fn set_query(&mut self, q: impl Into<String>) {
        self.q = q.into();
        self.page = 1;
    }

    pub fn toggle_sort(&mut self, field: SortField, policy: PagePolicy) {
        let next = self.sort_spec().toggled(field);
        self.sort = next.field;
        self.dir = next.dir;
        if policy == PagePolicy::Reset {
            self.page = 1;
        }
    }

    /// `None` selects "All Protocols".
    pub fn set_department(&mut self, department: Option<String>, policy: PagePolicy) {
        self.department = department;
        if policy == PagePolicy::Reset {
            self.page = 1;
        }
    }

    pub fn set_page(&mut self, page: usize) {
        self.page = page.max(1);
    }

    /// Copy of this state with one action applied; used to build links.
    pub fn with(&self, action: impl FnOnce(&mut Self)) -> Self {
        let mut next = self.clone();
        action(&mut next);
        next
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let s = SelectionState::default();
        assert_eq!(s.q, "");
        assert_eq!(s.sort, SortField::LastUpdated);
        assert_eq!(s.dir, SortDir::Desc);
        assert_eq!(s.department, None);
        assert_eq!(s.page, 1);
    }

    #[test]
    fn query_change_resets_page() {
        let mut s = SelectionState { page: 3, ..Default::default() };
        s.set_query("safety");
        assert_eq!(s.page, 1);
        assert_eq!(s.q, "safety");
    }

    #[test]
    fn department_change_carries_page_by_default() {
        let mut s = SelectionState { page: 2, ..Default::default() };
        s.set_department(Some("Chemistry".into()), PagePolicy::CarryOver);
        assert_eq!(s.page, 2);
        s.set_department(None, PagePolicy::Reset);
        assert_eq!(s.page, 1);
        assert_eq!(s.department, None);
    }

    #[test]
    fn sort_toggle_respects_policy() {
        let mut s = SelectionState { page: 2, ..Default::default() };
        s.toggle_sort(SortField::Title, PagePolicy::CarryOver);
        assert_eq!((s.sort, s.dir, s.page), (SortField::Title, SortDir::Asc, 2));
        s.toggle_sort(SortField::Title, PagePolicy::Reset);
        assert_eq!((s.sort, s.dir, s.page), (SortField::Title, SortDir::Desc, 1));
    }

    #[test]
    fn query_string_roundtrip() {
        let s = SelectionState {
            q: "employee benefits".into(),
            sort: SortField::Title,
            dir: SortDir::Asc,
            department: Some("Human Resources".into()),
            page: 2,
        };
        let qs = s.to_query_string();
        assert!(qs.contains("department=Human+Resources"));
        assert_eq!(SelectionState::from_query_str(&qs), s);
    }

    #[test]
    fn defaults_omit_empty_fields() {
        assert_eq!(
            SelectionState::default().to_query_string(),
            "sort=last_updated&dir=desc&page=1"
        );
    }

    #[test]
    fn malformed_params_fall_back() {
        let s = SelectionState::from_query_str("sort=owner&dir=up&page=zero&department=");
        assert_eq!(s, SelectionState::default());
        assert_eq!(SelectionState::from_query_str("page=0").page, 1);
    }

    #[test]
    fn with_leaves_original_untouched() {
        let s = SelectionState::default();
        let next = s.with(|n| n.set_page(4));
        assert_eq!(s.page, 1);
        assert_eq!(next.page, 4);
    }
}
