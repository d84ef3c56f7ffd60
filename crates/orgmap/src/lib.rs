#![forbid(unsafe_code)]

//! Orgmap public facade crate.
//!
//! This crate provides the stable, ergonomic surface area for users. It
//! re-exports the common types from the internal crates and offers a
//! lightweight prelude for day-to-day usage.

use std::fmt;

// --- Core re-exports -------------------------------------------------------

#[cfg(feature = "tracing")]
pub use orgmap_core::diag::TracingSink;
pub use orgmap_core::diag::{DiagLevel, DiagRecord, DiagSink, MemorySink, NullSink};
pub use orgmap_core::directory::{DirectoryError, DirectorySnapshot, DirectoryState};
pub use orgmap_core::employee::{Employee, EmployeeId};
pub use orgmap_core::geometry::{ChartPoint, ChartRect, ChartVec};
pub use orgmap_core::hierarchy::{
    HierarchyError, HierarchyStats, OrgNode, OrgTree, build_hierarchy,
};

// --- Layout re-exports -----------------------------------------------------

pub use orgmap_layout::{
    ChartLayout, EdgePath, LayoutConfig, NodePlacement, layout_chart, layout_chart_with_config,
};

// --- View re-exports -------------------------------------------------------

pub use orgmap_view::{
    ChartEvent, ChartPhase, ContactCard, FullscreenError, FullscreenHost, MAX_ZOOM, MIN_ZOOM,
    NoFullscreen, OrgChart, Scene, SceneNode, Selection, SelectionState, ViewTransform, Viewport,
    WHEEL_ZOOM_STEP, ZOOM_STEP,
};

// --- Errors ----------------------------------------------------------------

/// Top-level error type for orgmap apps.
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// Directory snapshot validation or decoding failed.
    Directory(DirectoryError),
    /// Hierarchy construction failed.
    Hierarchy(HierarchyError),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Directory(err) => write!(f, "{err}"),
            Self::Hierarchy(err) => write!(f, "{err}"),
        }
    }
}

impl std::error::Error for Error {}

impl From<DirectoryError> for Error {
    fn from(err: DirectoryError) -> Self {
        Self::Directory(err)
    }
}

impl From<HierarchyError> for Error {
    fn from(err: HierarchyError) -> Self {
        Self::Hierarchy(err)
    }
}

/// Standard result type for orgmap APIs.
pub type Result<T> = std::result::Result<T, Error>;

// --- Prelude ---------------------------------------------------------------

pub mod prelude {
    pub use crate::{
        ChartEvent, ChartLayout, ChartPhase, ChartPoint, DiagSink, DirectorySnapshot,
        DirectoryState, Employee, EmployeeId, Error, LayoutConfig, NullSink, OrgChart, OrgTree,
        Result, Selection, SelectionState, Viewport, build_hierarchy, layout_chart,
    };

    pub use crate::{core, layout, view};
}

pub use orgmap_core as core;
pub use orgmap_layout as layout;
pub use orgmap_view as view;
