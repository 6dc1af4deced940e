use std::cmp::Ordering;
use std::collections::BTreeMap;

use crate::models::table_filter::paginate::{page_count, slice_page};
use crate::models::table_filter::selection::SelectionState;
use crate::models::table_filter::{SortDir, SortField, SortSpec};

use super::types::{DepartmentCount, DepartmentSummary, ProtocolPage, ProtocolRecord};

type Comparator = fn(&ProtocolRecord, &ProtocolRecord) -> Ordering;

fn cmp_text(a: &str, b: &str) -> Ordering {
    a.to_lowercase().cmp(&b.to_lowercase())
}

/// Ascending comparator for each sortable field.
pub fn comparator(field: SortField) -> Comparator {
    match field {
        SortField::Title => |a, b| cmp_text(&a.title, &b.title),
        SortField::Department => |a, b| cmp_text(&a.department, &b.department),
        SortField::Version => |a, b| cmp_text(&a.version, &b.version),
        SortField::LastUpdated => |a, b| a.last_updated.cmp(&b.last_updated),
    }
}

/// Case-insensitive substring match on title, description or department.
/// `needle` must already be lowercased; an empty needle matches everything.
pub fn matches_query(record: &ProtocolRecord, needle: &str) -> bool {
    needle.is_empty()
        || record.title.to_lowercase().contains(needle)
        || record.description.to_lowercase().contains(needle)
        || record.department.to_lowercase().contains(needle)
}

/// Exact, case-sensitive department equality; `None` matches everything.
pub fn matches_department(record: &ProtocolRecord, department: Option<&str>) -> bool {
    department.is_none_or(|d| record.department == d)
}

pub fn filter_records<'a>(
    records: &'a [ProtocolRecord],
    query: &str,
    department: Option<&str>,
) -> Vec<&'a ProtocolRecord> {
    let needle = query.to_lowercase();
    records
        .iter()
        .filter(|r| matches_query(r, &needle) && matches_department(r, department))
        .collect()
}

/// Stable sort: records with equal keys keep their input order.
pub fn sort_records(records: &mut [&ProtocolRecord], sort: SortSpec) {
    let cmp = comparator(sort.field);
    match sort.dir {
        SortDir::Asc => records.sort_by(|a, b| cmp(*a, *b)),
        SortDir::Desc => records.sort_by(|a, b| cmp(*b, *a)),
    }
}

/// Full filtered and sorted list, before pagination.
pub fn find_all_filtered<'a>(
    records: &'a [ProtocolRecord],
    selection: &SelectionState,
) -> Vec<&'a ProtocolRecord> {
    let mut matched = filter_records(records, &selection.q, selection.department.as_deref());
    sort_records(&mut matched, selection.sort_spec());
    matched
}

/// Filter, sort and slice one page out of `records`.
pub fn find_paginated(
    records: &[ProtocolRecord],
    selection: &SelectionState,
    per_page: usize,
) -> ProtocolPage {
    let per_page = per_page.max(1);
    let matched = find_all_filtered(records, selection);
    let total_count = matched.len();
    let items: Vec<ProtocolRecord> = slice_page(&matched, selection.page, per_page)
        .iter()
        .map(|r| (*r).clone())
        .collect();

    log::debug!(
        "protocols: q={:?} department={:?} sort={}:{} -> {} matches, page {} has {}",
        selection.q,
        selection.department,
        selection.sort.key(),
        selection.dir.as_str(),
        total_count,
        selection.page,
        items.len()
    );

    ProtocolPage {
        items,
        page: selection.page,
        per_page,
        total_count,
        total_pages: page_count(total_count, per_page),
    }
}

/// Record counts per department (alphabetical) plus the grand total.
pub fn department_counts(records: &[ProtocolRecord]) -> DepartmentSummary {
    let mut groups: BTreeMap<&str, usize> = BTreeMap::new();
    for record in records {
        *groups.entry(record.department.as_str()).or_insert(0) += 1;
    }
    let departments: Vec<DepartmentCount> = groups
        .into_iter()
        .map(|(name, count)| DepartmentCount { name: name.to_string(), count })
        .collect();
    let total = departments.iter().map(|d| d.count).sum();
    DepartmentSummary { departments, total }
}
