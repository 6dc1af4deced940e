use serde::{Deserialize, Serialize};

pub mod paginate;
pub mod selection;

/// Sortable protocol columns.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum SortField {
    Title,
    Department,
    Version,
    #[default]
    LastUpdated,
}

impl SortField {
    pub const ALL: [SortField; 4] = [
        SortField::Title,
        SortField::Department,
        SortField::Version,
        SortField::LastUpdated,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            SortField::Title => "title",
            SortField::Department => "department",
            SortField::Version => "version",
            SortField::LastUpdated => "last_updated",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|f| f.key() == key)
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum SortDir {
    Asc,
    #[default]
    Desc,
}

impl SortDir {
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "asc" => Some(SortDir::Asc),
            "desc" => Some(SortDir::Desc),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SortDir::Asc => "asc",
            SortDir::Desc => "desc",
        }
    }

    pub fn flipped(&self) -> Self {
        match self {
            SortDir::Asc => SortDir::Desc,
            SortDir::Desc => SortDir::Asc,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SortSpec {
    pub field: SortField,
    pub dir: SortDir,
}

impl SortSpec {
    /// Unknown or missing values fall back to last-updated, descending.
    pub fn from_params(sort: Option<&str>, dir: Option<&str>) -> Self {
        SortSpec {
            field: sort.and_then(SortField::from_key).unwrap_or_default(),
            dir: dir.and_then(SortDir::from_key).unwrap_or_default(),
        }
    }

    /// Header click: the active field flips direction, a new field starts ascending.
    pub fn toggled(&self, field: SortField) -> Self {
        if self.field == field {
            SortSpec { field, dir: self.dir.flipped() }
        } else {
            SortSpec { field, dir: SortDir::Asc }
        }
    }
}

/// Ordered column definition passed to templates.
#[derive(Debug, Clone)]
pub struct ColumnDef {
    pub key: String,
    pub label: String,
    pub sortable: Option<SortField>,
    pub align_right: bool,
}

/// Columns of the protocol table, in display order.
pub fn protocol_columns() -> Vec<ColumnDef> {
    let col = |key: &str, label: &str, sortable: Option<SortField>| ColumnDef {
        key: key.into(),
        label: label.into(),
        sortable,
        align_right: false,
    };
    vec![
        col("title", "Protocol", Some(SortField::Title)),
        col("department", "Department", Some(SortField::Department)),
        col("version", "Version", Some(SortField::Version)),
        col("last_updated", "Last Updated", Some(SortField::LastUpdated)),
        col("approvers", "Approved", None),
        ColumnDef { align_right: true, ..col("actions", "Actions", None) },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sort_spec_from_params() {
        let s = SortSpec::from_params(Some("title"), Some("asc"));
        assert_eq!(s.field, SortField::Title);
        assert_eq!(s.dir, SortDir::Asc);
    }

    #[test]
    fn sort_spec_defaults_when_none_or_unknown() {
        let s = SortSpec::from_params(None, None);
        assert_eq!(s.field, SortField::LastUpdated);
        assert_eq!(s.dir, SortDir::Desc);

        let s = SortSpec::from_params(Some("owner"), Some("sideways"));
        assert_eq!(s, SortSpec::default());
    }

    #[test]
    fn toggling_active_field_flips_direction() {
        let s = SortSpec::default().toggled(SortField::LastUpdated);
        assert_eq!(s.field, SortField::LastUpdated);
        assert_eq!(s.dir, SortDir::Asc);
        assert_eq!(s.toggled(SortField::LastUpdated).dir, SortDir::Desc);
    }

    #[test]
    fn toggling_new_field_starts_ascending() {
        let s = SortSpec { field: SortField::Title, dir: SortDir::Desc }.toggled(SortField::Version);
        assert_eq!(s, SortSpec { field: SortField::Version, dir: SortDir::Asc });
    }

    #[test]
    fn every_sortable_column_has_a_key() {
        let sortable: Vec<_> = protocol_columns().into_iter().filter_map(|c| c.sortable).collect();
        assert_eq!(sortable, SortField::ALL.to_vec());
    }
}
