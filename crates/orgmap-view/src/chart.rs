#![forbid(unsafe_code)]

//! The chart model: one org-chart instance's complete state.
//!
//! [`OrgChart`] owns the four state records of a chart instance: the built
//! tree, its layout, the viewport, and the selection. Hosts drive it with
//! exactly two calls: [`OrgChart::load`] whenever the directory delivers a
//! new lifecycle state, and [`OrgChart::handle`] for every input event.
//! Both run synchronously inside the calling event handler; nothing here
//! blocks or defers.
//!
//! Each load fully replaces the previous tree, layout, and selection, so
//! reloading the same snapshot is idempotent. Rendering reads back a
//! [`Scene`]: the placed nodes paired with their employees and highlight
//! flags, the connector polylines, and the world-to-screen transform. The
//! renderer applies that one transform to the whole scene; node positions
//! stay in world units.

use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use orgmap_core::diag::{DiagSink, NullSink};
use orgmap_core::directory::DirectoryState;
use orgmap_core::employee::{Employee, EmployeeId};
use orgmap_core::geometry::{ChartPoint, ChartRect};
use orgmap_core::hierarchy::{HierarchyError, OrgTree, build_hierarchy};
use orgmap_layout::{ChartLayout, EdgePath, LayoutConfig, NodePlacement, layout_chart_with_config};

use crate::fullscreen::{FullscreenHost, NoFullscreen};
use crate::selection::Selection;
use crate::viewport::{ViewTransform, Viewport};

// ---------------------------------------------------------------------------
// Events
// ---------------------------------------------------------------------------

/// Input events the host forwards to [`OrgChart::handle`].
///
/// Pointer coordinates are screen pixels relative to the chart container;
/// the chart converts to world units itself.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ChartEvent {
    /// Zoom-in button.
    ZoomIn,
    /// Zoom-out button.
    ZoomOut,
    /// Scroll wheel over the chart; only the sign of `delta` matters.
    Wheel { delta: f64 },
    /// Reset / fit-to-screen button: default zoom, recentered, selection
    /// cleared.
    Reset,
    /// Pointer pressed on the chart background; starts a drag.
    PointerDown { x: f64, y: f64 },
    /// Pointer moved; pans while a drag is active, ignored otherwise.
    PointerMove { x: f64, y: f64 },
    /// Pointer released; ends the drag.
    PointerUp,
    /// Pointer entered a node box.
    NodeEntered { id: EmployeeId },
    /// Pointer left the hovered node box.
    NodeLeft,
    /// Click on a node box.
    NodeClicked { id: EmployeeId },
    /// Close button of the detail card.
    CardClosed,
    /// Fullscreen button.
    ToggleFullscreen,
    /// The host surface reports its fullscreen state changed.
    FullscreenChanged { active: bool },
    /// The chart container was resized to the given pixel width.
    Resized { width: f64 },
}

// ---------------------------------------------------------------------------
// Phase
// ---------------------------------------------------------------------------

/// What the chart surface should currently show.
///
/// Hierarchy problems land here as renderable states, never as panics: the
/// chart degrades to an informative panel and waits for the next load.
#[derive(Debug, Clone, PartialEq)]
pub enum ChartPhase {
    /// Directory fetch in flight.
    Loading,
    /// Directory fetch failed; show `message`.
    LoadFailed { message: String },
    /// Snapshot arrived but contains no employees.
    Empty,
    /// Snapshot arrived but no valid hierarchy could be built from it.
    BuildFailed { error: HierarchyError },
    /// Tree and layout are available for rendering.
    Ready,
}

impl ChartPhase {
    #[must_use]
    pub fn is_ready(&self) -> bool {
        matches!(self, Self::Ready)
    }
}

// ---------------------------------------------------------------------------
// Render output
// ---------------------------------------------------------------------------

/// One node ready to draw: directory record, world-space box, highlights.
#[derive(Debug, Clone)]
pub struct SceneNode<'a> {
    pub employee: &'a Employee,
    pub placement: &'a NodePlacement,
    pub hovered: bool,
    pub selected: bool,
}

/// Everything the renderer reads for one frame.
///
/// Nodes and edges carry world coordinates; `transform` maps them to the
/// screen and is applied to the scene as a whole.
#[derive(Debug, Clone)]
pub struct Scene<'a> {
    /// Drawable nodes in depth-first preorder.
    pub nodes: Vec<SceneNode<'a>>,
    pub edges: &'a [EdgePath],
    pub transform: ViewTransform,
    pub bounds: ChartRect,
}

/// Detail-card content for the selected employee.
///
/// The URIs are action targets for the host's "send email" and "start
/// chat" buttons; both are absent when the record has no email address.
#[derive(Debug, Clone, PartialEq)]
pub struct ContactCard<'a> {
    pub employee: &'a Employee,
    pub email_uri: Option<String>,
    pub chat_uri: Option<String>,
}

// ---------------------------------------------------------------------------
// Chart model
// ---------------------------------------------------------------------------

/// A single org-chart instance.
///
/// Instances are independent: each owns its tree, layout, viewport, and
/// selection exclusively, so several charts can coexist without sharing
/// any mutable state.
pub struct OrgChart {
    phase: ChartPhase,
    tree: Option<OrgTree>,
    layout: Option<ChartLayout>,
    viewport: Viewport,
    selection: Selection,
    config: LayoutConfig,
    /// Pixel width of the hosting container, updated via `Resized`.
    container_width: f64,
    host: Box<dyn FullscreenHost>,
    sink: Arc<dyn DiagSink>,
}

impl fmt::Debug for OrgChart {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OrgChart")
            .field("phase", &self.phase)
            .field("tree", &self.tree.as_ref().map(OrgTree::node_count))
            .field("layout", &self.layout.as_ref().map(ChartLayout::len))
            .field("viewport", &self.viewport)
            .field("selection", &self.selection)
            .field("container_width", &self.container_width)
            .field("host", &"<dyn FullscreenHost>")
            .field("sink", &"<dyn DiagSink>")
            .finish()
    }
}

impl Default for OrgChart {
    fn default() -> Self {
        Self::new()
    }
}

impl OrgChart {
    /// A chart with default layout configuration, no fullscreen capability,
    /// and diagnostics discarded.
    #[must_use]
    pub fn new() -> Self {
        Self {
            phase: ChartPhase::Loading,
            tree: None,
            layout: None,
            viewport: Viewport::new(),
            selection: Selection::new(),
            config: LayoutConfig::default(),
            container_width: 0.0,
            host: Box::new(NoFullscreen),
            sink: Arc::new(NullSink),
        }
    }

    #[must_use]
    pub fn with_layout_config(mut self, config: LayoutConfig) -> Self {
        self.config = config;
        self
    }

    #[must_use]
    pub fn with_container_width(mut self, width: f64) -> Self {
        self.container_width = width;
        self
    }

    #[must_use]
    pub fn with_sink(mut self, sink: Arc<dyn DiagSink>) -> Self {
        self.sink = sink;
        self
    }

    #[must_use]
    pub fn with_host(mut self, host: Box<dyn FullscreenHost>) -> Self {
        self.host = host;
        self
    }

    // -- Accessors --------------------------------------------------------

    #[must_use]
    pub fn phase(&self) -> &ChartPhase {
        &self.phase
    }

    #[must_use]
    pub fn tree(&self) -> Option<&OrgTree> {
        self.tree.as_ref()
    }

    #[must_use]
    pub fn layout(&self) -> Option<&ChartLayout> {
        self.layout.as_ref()
    }

    #[must_use]
    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    #[must_use]
    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    #[must_use]
    pub fn container_width(&self) -> f64 {
        self.container_width
    }

    // -- Directory lifecycle ----------------------------------------------

    /// Apply a directory lifecycle state.
    ///
    /// Replaces tree, layout, and selection wholesale. On a successful
    /// build the viewport returns to the centered default view; on any
    /// other outcome it is left alone and the phase says what to render
    /// instead.
    pub fn load(&mut self, state: DirectoryState) {
        self.tree = None;
        self.layout = None;
        self.selection.clear();

        self.phase = match state {
            DirectoryState::Loading => ChartPhase::Loading,
            DirectoryState::LoadFailed { message } => {
                self.sink.error(&format!("directory load failed: {message}"));
                ChartPhase::LoadFailed { message }
            }
            DirectoryState::Loaded(snapshot) => {
                match build_hierarchy(snapshot.employees(), self.sink.as_ref()) {
                    Ok(tree) => {
                        let layout = layout_chart_with_config(&tree.root, &self.config);
                        self.viewport.reset(layout.bounds, self.container_width);
                        self.tree = Some(tree);
                        self.layout = Some(layout);
                        ChartPhase::Ready
                    }
                    Err(HierarchyError::EmptyDirectory) => {
                        self.sink.debug("directory snapshot is empty");
                        ChartPhase::Empty
                    }
                    Err(error) => {
                        self.sink.error(&format!("hierarchy build failed: {error}"));
                        ChartPhase::BuildFailed { error }
                    }
                }
            }
        };
    }

    // -- Input events -----------------------------------------------------

    /// Apply one input event. Every transition completes synchronously;
    /// the only fire-and-forget call is the fullscreen request, whose
    /// outcome arrives later as [`ChartEvent::FullscreenChanged`].
    pub fn handle(&mut self, event: ChartEvent) {
        match event {
            ChartEvent::ZoomIn => self.viewport.zoom_in(),
            ChartEvent::ZoomOut => self.viewport.zoom_out(),
            ChartEvent::Wheel { delta } => self.viewport.wheel(delta),
            ChartEvent::Reset => {
                let content = self.content_bounds();
                self.viewport.reset(content, self.container_width);
                self.selection.clear();
            }
            ChartEvent::PointerDown { x, y } => self.viewport.begin_drag(ChartPoint::new(x, y)),
            ChartEvent::PointerMove { x, y } => self.viewport.drag(ChartPoint::new(x, y)),
            ChartEvent::PointerUp => self.viewport.end_drag(),
            ChartEvent::NodeEntered { id } => self.selection.pointer_enter(id),
            ChartEvent::NodeLeft => self.selection.pointer_leave(),
            ChartEvent::NodeClicked { id } => self.selection.click(id),
            ChartEvent::CardClosed => self.selection.close(),
            ChartEvent::ToggleFullscreen => self.toggle_fullscreen(),
            ChartEvent::FullscreenChanged { active } => self.viewport.set_fullscreen(active),
            ChartEvent::Resized { width } => {
                self.container_width = width;
                let content = self.content_bounds();
                self.viewport.recenter(content, width);
            }
        }
    }

    fn toggle_fullscreen(&mut self) {
        let result = if self.viewport.is_fullscreen() {
            self.host.exit_fullscreen()
        } else {
            self.host.request_fullscreen()
        };
        // The flag flips only on FullscreenChanged, never here.
        if let Err(err) = result {
            self.sink.warn(&format!("fullscreen request failed: {err}"));
        }
    }

    fn content_bounds(&self) -> ChartRect {
        self.layout
            .as_ref()
            .map(|layout| layout.bounds)
            .unwrap_or_default()
    }

    // -- Render output ----------------------------------------------------

    /// The drawable scene, present once a load reached [`ChartPhase::Ready`].
    #[must_use]
    pub fn scene(&self) -> Option<Scene<'_>> {
        let (Some(tree), Some(layout)) = (self.tree.as_ref(), self.layout.as_ref()) else {
            return None;
        };

        let mut nodes = Vec::with_capacity(layout.len());
        for node in tree.root.iter() {
            if let Some(placement) = layout.get(node.id()) {
                nodes.push(SceneNode {
                    employee: &node.employee,
                    placement,
                    hovered: self.selection.is_hovered(node.id()),
                    selected: self.selection.is_selected(node.id()),
                });
            }
        }

        Some(Scene {
            nodes,
            edges: &layout.edges,
            transform: self.viewport.transform(),
            bounds: layout.bounds,
        })
    }

    /// Which node box, if any, sits under the given screen position.
    #[must_use]
    pub fn node_at(&self, screen: ChartPoint) -> Option<EmployeeId> {
        let layout = self.layout.as_ref()?;
        let world = self.viewport.transform().to_world(screen);
        layout.node_at(world)
    }

    /// The currently selected employee's record.
    #[must_use]
    pub fn selected_employee(&self) -> Option<&Employee> {
        let id = self.selection.selected()?;
        Some(&self.tree.as_ref()?.find(id)?.employee)
    }

    /// Detail-card content for the selected employee, with the email and
    /// chat action targets the host wires into its buttons.
    #[must_use]
    pub fn contact_card(&self) -> Option<ContactCard<'_>> {
        let employee = self.selected_employee()?;
        let email = employee.email.trim();
        let (email_uri, chat_uri) = if email.is_empty() {
            (None, None)
        } else {
            (Some(format!("mailto:{email}")), Some(format!("im:{email}")))
        };
        Some(ContactCard {
            employee,
            email_uri,
            chat_uri,
        })
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
