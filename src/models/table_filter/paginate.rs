use serde::Serialize;

/// ceil(total / per_page); zero matches means zero pages.
pub fn page_count(total: usize, per_page: usize) -> usize {
    total.div_ceil(per_page.max(1))
}

/// Items on 1-based `page`. Pages past the end are empty, not clamped.
pub fn slice_page<T>(items: &[T], page: usize, per_page: usize) -> &[T] {
    let per_page = per_page.max(1);
    let start = page.saturating_sub(1).saturating_mul(per_page).min(items.len());
    let end = start.saturating_add(per_page).min(items.len());
    &items[start..end]
}

/// Pagination footer state: range summary plus which controls are enabled.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Pager {
    pub page: usize,
    pub per_page: usize,
    pub total_count: usize,
    pub total_pages: usize,
}

impl Pager {
    pub fn new(page: usize, per_page: usize, total_count: usize) -> Self {
        Self {
            page,
            per_page,
            total_count,
            total_pages: page_count(total_count, per_page),
        }
    }

    /// The footer is hidden when nothing matched.
    pub fn is_visible(&self) -> bool {
        self.total_count > 0
    }

    pub fn has_prev(&self) -> bool {
        self.page > 1
    }

    pub fn has_next(&self) -> bool {
        self.page < self.total_pages
    }

    pub fn showing_from(&self) -> usize {
        self.page.saturating_sub(1).saturating_mul(self.per_page).saturating_add(1)
    }

    pub fn showing_to(&self) -> usize {
        self.page.saturating_mul(self.per_page).min(self.total_count)
    }

    pub fn page_numbers(&self) -> Vec<usize> {
        (1..=self.total_pages).collect()
    }
}
