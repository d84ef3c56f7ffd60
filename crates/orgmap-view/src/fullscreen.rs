#![forbid(unsafe_code)]

//! Fullscreen capability boundary.
//!
//! Fullscreen is the one operation this crate cannot perform itself: it
//! belongs to whatever surface hosts the chart (a browser element, a
//! desktop window). Hosts implement [`FullscreenHost`]; the chart calls
//! it fire-and-forget and flips its own flag only when the host reports
//! the change back, never optimistically. A rejected request is logged
//! and otherwise ignored, so viewport and selection state stay intact.

use std::fmt;

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// Why a fullscreen request did not take effect.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FullscreenError {
    /// The host surface has no fullscreen capability at all.
    Unsupported,
    /// The host refused the request, e.g. a permission denial.
    Denied { reason: String },
}

impl fmt::Display for FullscreenError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unsupported => write!(f, "fullscreen is not supported by this host"),
            Self::Denied { reason } => write!(f, "fullscreen request denied: {reason}"),
        }
    }
}

impl std::error::Error for FullscreenError {}

// ---------------------------------------------------------------------------
// Capability trait
// ---------------------------------------------------------------------------

/// Surface-level fullscreen control supplied by the embedding host.
///
/// Both calls are requests, not state changes: the host answers whether
/// the request was accepted, and the actual transition arrives later
/// through the host's own change notification. Implementations must not
/// block.
pub trait FullscreenHost: Send {
    fn request_fullscreen(&mut self) -> Result<(), FullscreenError>;
    fn exit_fullscreen(&mut self) -> Result<(), FullscreenError>;
}

/// Default host for surfaces without fullscreen. Every request is
/// answered with [`FullscreenError::Unsupported`].
#[derive(Debug, Clone, Copy, Default)]
pub struct NoFullscreen;

impl FullscreenHost for NoFullscreen {
    fn request_fullscreen(&mut self) -> Result<(), FullscreenError> {
        Err(FullscreenError::Unsupported)
    }

    fn exit_fullscreen(&mut self) -> Result<(), FullscreenError> {
        Err(FullscreenError::Unsupported)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
