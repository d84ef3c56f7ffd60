#![forbid(unsafe_code)]

//! Interaction model for the orgmap chart.
//!
//! Everything in this crate is a pure, synchronous state machine: the
//! pan/zoom [`viewport`], the hover/select [`selection`], the
//! [`fullscreen`] host capability, and the top-level [`chart`] model that
//! owns them all and consumes semantic input events. No rendering happens
//! here; a host feeds events in and reads a [`chart::Scene`] back out every
//! frame.

pub mod chart;
pub mod fullscreen;
pub mod selection;
pub mod viewport;

pub use chart::{ChartEvent, ChartPhase, ContactCard, OrgChart, Scene, SceneNode};
pub use fullscreen::{FullscreenError, FullscreenHost, NoFullscreen};
pub use selection::{Selection, SelectionState};
pub use viewport::{
    MAX_ZOOM, MIN_ZOOM, ViewTransform, Viewport, WHEEL_ZOOM_STEP, ZOOM_STEP,
};
