#![forbid(unsafe_code)]

//! Employee records and identifiers.
//!
//! An [`Employee`] is an immutable snapshot row supplied by the external
//! directory service. The visualization never mutates employees; a fresh
//! set arrives with every directory load. The only authoritative structural
//! field is `manager_id`: the record with no manager is the organization
//! root, and every other record hangs off the manager it references.

use std::fmt;

use serde::{Deserialize, Serialize};
use unicode_segmentation::UnicodeSegmentation;

/// Identifier of an employee record.
///
/// Zero is reserved and rejected during snapshot validation.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Default,
)]
#[serde(transparent)]
pub struct EmployeeId(pub u64);

impl EmployeeId {
    #[must_use]
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for EmployeeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One directory record.
///
/// `level` is the directory's own notion of seniority and is carried for
/// display only; hierarchy depth is always recomputed from `manager_id`
/// during tree construction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    pub id: EmployeeId,
    pub name: String,
    #[serde(default)]
    pub initials: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub department: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub manager_id: Option<EmployeeId>,
    #[serde(default)]
    pub level: u32,
    #[serde(default)]
    pub avatar: Option<String>,
}

impl Employee {
    /// Minimal record with the given id and display name.
    #[must_use]
    pub fn new(id: u64, name: impl Into<String>) -> Self {
        Self {
            id: EmployeeId::new(id),
            name: name.into(),
            initials: String::new(),
            title: String::new(),
            department: String::new(),
            email: String::new(),
            phone: String::new(),
            manager_id: None,
            level: 0,
            avatar: None,
        }
    }

    #[must_use]
    pub fn with_manager(mut self, manager: u64) -> Self {
        self.manager_id = Some(EmployeeId::new(manager));
        self
    }

    #[must_use]
    pub fn with_initials(mut self, initials: impl Into<String>) -> Self {
        self.initials = initials.into();
        self
    }

    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    #[must_use]
    pub fn with_department(mut self, department: impl Into<String>) -> Self {
        self.department = department.into();
        self
    }

    #[must_use]
    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = email.into();
        self
    }

    #[must_use]
    pub fn with_phone(mut self, phone: impl Into<String>) -> Self {
        self.phone = phone.into();
        self
    }

    #[must_use]
    pub fn with_level(mut self, level: u32) -> Self {
        self.level = level;
        self
    }

    #[must_use]
    pub fn with_avatar(mut self, avatar: impl Into<String>) -> Self {
        self.avatar = Some(avatar.into());
        self
    }

    /// Whether this record is the organization root.
    #[must_use]
    pub fn is_root(&self) -> bool {
        self.manager_id.is_none()
    }

    /// Initials to render on the node badge.
    ///
    /// Uses the directory-supplied initials when present, otherwise derives
    /// them from the first grapheme cluster of each of the first two words
    /// of the display name.
    #[must_use]
    pub fn display_initials(&self) -> String {
        if !self.initials.trim().is_empty() {
            return self.initials.trim().to_string();
        }
        self.name
            .split_whitespace()
            .take(2)
            .filter_map(|word| word.graphemes(true).next())
            .flat_map(|g| g.chars().flat_map(char::to_uppercase))
            .collect()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_sets_fields() {
        let e = Employee::new(7, "Ada Lovelace")
            .with_manager(1)
            .with_title("Staff Engineer")
            .with_department("Platform")
            .with_email("ada@example.com")
            .with_phone("+44 20 7946 0999")
            .with_level(3);

        assert_eq!(e.id, EmployeeId::new(7));
        assert_eq!(e.manager_id, Some(EmployeeId::new(1)));
        assert_eq!(e.title, "Staff Engineer");
        assert_eq!(e.level, 3);
        assert!(!e.is_root());
    }

    #[test]
    fn root_has_no_manager() {
        assert!(Employee::new(1, "CEO").is_root());
        assert!(!Employee::new(2, "VP").with_manager(1).is_root());
    }

    #[test]
    fn supplied_initials_win() {
        let e = Employee::new(1, "Ada Lovelace").with_initials("XY");
        assert_eq!(e.display_initials(), "XY");
    }

    #[test]
    fn initials_derived_from_first_two_words() {
        assert_eq!(Employee::new(1, "Ada Lovelace").display_initials(), "AL");
        assert_eq!(
            Employee::new(2, "Grace Brewster Hopper").display_initials(),
            "GB"
        );
        assert_eq!(Employee::new(3, "Plato").display_initials(), "P");
    }

    #[test]
    fn initials_are_grapheme_aware() {
        // Family emoji is a single grapheme cluster of several code points.
        let e = Employee::new(1, "👩‍👩‍👦 Smith");
        assert_eq!(e.display_initials(), "👩‍👩‍👦S");
        assert_eq!(Employee::new(2, "Éva Németh").display_initials(), "ÉN");
    }

    #[test]
    fn initials_empty_name() {
        assert_eq!(Employee::new(1, "").display_initials(), "");
        assert_eq!(Employee::new(2, "   ").display_initials(), "");
    }

    #[test]
    fn employee_round_trips_through_json() {
        let e = Employee::new(5, "Ada Lovelace")
            .with_manager(1)
            .with_email("ada@example.com");
        let json = serde_json::to_string(&e).unwrap();
        let back: Employee = serde_json::from_str(&json).unwrap();
        assert_eq!(back, e);
    }

    #[test]
    fn employee_decodes_with_missing_optional_fields() {
        let e: Employee = serde_json::from_str(r#"{"id": 3, "name": "Solo"}"#).unwrap();
        assert_eq!(e.id, EmployeeId::new(3));
        assert!(e.is_root());
        assert!(e.email.is_empty());
        assert_eq!(e.level, 0);
    }
}
