#![forbid(unsafe_code)]

//! Directory snapshots and their load lifecycle.
//!
//! The external directory service delivers employees as point-in-time
//! snapshots, either as already-decoded records or as the portal API's JSON
//! array. A [`DirectorySnapshot`] is a validated snapshot: identifiers are
//! unique and non-zero. [`DirectoryState`] is the three-state load
//! lifecycle the chart consumes.

use std::collections::HashSet;
use std::fmt;

use crate::employee::{Employee, EmployeeId};

// ---------------------------------------------------------------------------
// Snapshot
// ---------------------------------------------------------------------------

/// A validated point-in-time list of employee records.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DirectorySnapshot {
    employees: Vec<Employee>,
}

impl DirectorySnapshot {
    /// Validate and wrap a list of employee records.
    ///
    /// Rejects zero identifiers and duplicates; everything structural
    /// (roots, cycles, orphans) is the hierarchy builder's concern.
    pub fn new(employees: Vec<Employee>) -> Result<Self, DirectoryError> {
        let mut seen = HashSet::with_capacity(employees.len());
        for employee in &employees {
            if employee.id.get() == 0 {
                return Err(DirectoryError::ZeroEmployeeId);
            }
            if !seen.insert(employee.id) {
                return Err(DirectoryError::DuplicateEmployeeId { id: employee.id });
            }
        }
        Ok(Self { employees })
    }

    /// Decode a snapshot from the portal API's JSON array of records.
    pub fn from_json(json: &str) -> Result<Self, DirectoryError> {
        let employees: Vec<Employee> =
            serde_json::from_str(json).map_err(|err| DirectoryError::Json {
                message: err.to_string(),
            })?;
        Self::new(employees)
    }

    #[must_use]
    pub fn employees(&self) -> &[Employee] {
        &self.employees
    }

    #[must_use]
    pub fn get(&self, id: EmployeeId) -> Option<&Employee> {
        self.employees.iter().find(|e| e.id == id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.employees.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.employees.is_empty()
    }
}

// ---------------------------------------------------------------------------
// Load lifecycle
// ---------------------------------------------------------------------------

/// Load lifecycle of the employee directory, as delivered by the host.
///
/// The three states are mutually exclusive; every delivery fully replaces
/// the previous one.
#[derive(Debug, Clone, PartialEq)]
pub enum DirectoryState {
    /// Fetch in flight; nothing to render yet.
    Loading,
    /// Fetch failed; `message` is host-facing text for the error panel.
    LoadFailed { message: String },
    /// Fetch succeeded with a validated snapshot.
    Loaded(DirectorySnapshot),
}

impl DirectoryState {
    #[must_use]
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    #[must_use]
    pub fn is_failed(&self) -> bool {
        matches!(self, Self::LoadFailed { .. })
    }

    #[must_use]
    pub fn snapshot(&self) -> Option<&DirectorySnapshot> {
        match self {
            Self::Loaded(snapshot) => Some(snapshot),
            _ => None,
        }
    }
}

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// Snapshot validation and decode failures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DirectoryError {
    /// An employee record carries the reserved zero identifier.
    ZeroEmployeeId,
    /// Two records share the same identifier.
    DuplicateEmployeeId { id: EmployeeId },
    /// The JSON payload did not decode into employee records.
    Json { message: String },
}

impl fmt::Display for DirectoryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroEmployeeId => write!(f, "employee id 0 is reserved"),
            Self::DuplicateEmployeeId { id } => {
                write!(f, "duplicate employee id {id} in directory snapshot")
            }
            Self::Json { message } => write!(f, "invalid directory JSON: {message}"),
        }
    }
}

impl std::error::Error for DirectoryError {}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
