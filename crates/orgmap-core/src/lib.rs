#![forbid(unsafe_code)]

//! Core data model for the orgmap visualization workspace.
//!
//! This crate owns everything upstream of layout and interaction: employee
//! records and identifiers, point-in-time directory snapshots with their
//! load lifecycle, construction of the management hierarchy from flat
//! records, world-space geometry primitives, and the injectable diagnostics
//! sink the rest of the workspace reports through.
//!
//! Nothing here renders or reacts to input. The crate is deliberately free
//! of host assumptions so the same model drives a browser canvas, a native
//! surface, or a headless test.

pub mod diag;
pub mod directory;
pub mod employee;
pub mod geometry;
pub mod hierarchy;

pub use diag::{DiagLevel, DiagRecord, DiagSink, MemorySink, NullSink};
pub use directory::{DirectoryError, DirectorySnapshot, DirectoryState};
pub use employee::{Employee, EmployeeId};
pub use geometry::{ChartPoint, ChartRect, ChartVec};
pub use hierarchy::{HierarchyError, HierarchyStats, OrgNode, OrgTree, build_hierarchy};

#[cfg(feature = "tracing")]
pub use diag::TracingSink;
