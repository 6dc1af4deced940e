use super::types::Approver;

const AVATAR_COLORS: [&str; 8] = [
    "bg-blue-500",
    "bg-green-500",
    "bg-purple-500",
    "bg-pink-500",
    "bg-indigo-500",
    "bg-yellow-500",
    "bg-red-500",
    "bg-teal-500",
];

/// Avatars rendered before collapsing the rest into a "+N" badge.
pub const MAX_VISIBLE_AVATARS: usize = 3;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Avatar {
    pub id: String,
    pub name: String,
    pub initials: String,
    pub color: &'static str,
}

/// Approval column contents for one protocol row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AvatarStack {
    pub avatars: Vec<Avatar>,
    pub overflow: usize,
    /// Full approver list for the hover tooltip.
    pub tooltip: String,
}

impl AvatarStack {
    pub fn is_empty(&self) -> bool {
        self.avatars.is_empty()
    }
}

/// First letter of the first two words, or the first two characters of a
/// single-word name.
pub fn initials(name: &str) -> String {
    let parts: Vec<&str> = name.split(' ').collect();
    if parts.len() >= 2 {
        parts[..2]
            .iter()
            .filter_map(|p| p.chars().next())
            .collect::<String>()
            .to_uppercase()
    } else {
        name.chars().take(2).collect::<String>().to_uppercase()
    }
}

/// Stable palette pick: 32-bit shift-and-subtract hash over UTF-16 units.
pub fn avatar_color(name: &str) -> &'static str {
    let hash = name.encode_utf16().fold(0i64, |acc, unit| {
        let shifted = i64::from((acc as i32).wrapping_shl(5));
        i64::from(unit) + (shifted - acc)
    });
    AVATAR_COLORS[(hash.unsigned_abs() % AVATAR_COLORS.len() as u64) as usize]
}

pub fn avatar_stack(approvers: &[Approver]) -> AvatarStack {
    let avatars = approvers
        .iter()
        .take(MAX_VISIBLE_AVATARS)
        .map(|a| Avatar {
            id: a.id.clone(),
            name: a.name.clone(),
            initials: initials(&a.name),
            color: avatar_color(&a.name),
        })
        .collect();
    let tooltip = approvers
        .iter()
        .map(|a| a.name.as_str())
        .collect::<Vec<_>>()
        .join(", ");
    AvatarStack {
        avatars,
        overflow: approvers.len().saturating_sub(MAX_VISIBLE_AVATARS),
        tooltip,
    }
}
