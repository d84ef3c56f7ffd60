#![forbid(unsafe_code)]

//! Two-pass tree layout engine for organization charts.
//!
//! Produces a world-unit f64 position for every node of an `OrgTree`, plus
//! connector polylines, a per-level index, and the overall bounding box.
//! The engine is fully deterministic: same tree and config always produce
//! identical output.
//!
//! # Pipeline
//! 1. Bottom-up measurement: each subtree's horizontal span in spacing
//!    units. A leaf spans one unit; an internal node spans the sum of its
//!    children, floored at one unit.
//! 2. Top-down placement: the root sits at the configured origin; children
//!    partition their parent's span left to right, each centered inside its
//!    own slice, with y advancing a fixed step per level.
//!
//! Because siblings occupy disjoint span slices at every depth, no two
//! node boxes can collide. There is no post-hoc nudging pass.

use std::collections::HashMap;

use orgmap_core::employee::EmployeeId;
use orgmap_core::geometry::{ChartPoint, ChartRect};
use orgmap_core::hierarchy::OrgNode;

// ---------------------------------------------------------------------------
// Output types
// ---------------------------------------------------------------------------

/// A positioned node box in world coordinates.
#[derive(Debug, Clone, PartialEq)]
pub struct NodePlacement {
    pub id: EmployeeId,
    pub cx: f64,
    pub cy: f64,
    pub width: f64,
    pub height: f64,
    /// Depth in the hierarchy, root at 0.
    pub level: usize,
}

impl NodePlacement {
    #[must_use]
    pub fn left(&self) -> f64 {
        self.cx - self.width / 2.0
    }

    #[must_use]
    pub fn right(&self) -> f64 {
        self.cx + self.width / 2.0
    }

    #[must_use]
    pub fn top(&self) -> f64 {
        self.cy - self.height / 2.0
    }

    #[must_use]
    pub fn bottom(&self) -> f64 {
        self.cy + self.height / 2.0
    }

    #[must_use]
    pub fn rect(&self) -> ChartRect {
        ChartRect::from_center(self.cx, self.cy, self.width, self.height)
    }
}

/// A manager-to-report connector as an orthogonal polyline.
///
/// Runs from the parent's bottom-center to the child's top-center through
/// the midline between the two levels.
#[derive(Debug, Clone, PartialEq)]
pub struct EdgePath {
    pub from: EmployeeId,
    pub to: EmployeeId,
    pub points: Vec<ChartPoint>,
}

/// Complete layout result.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartLayout {
    /// Placed nodes in depth-first preorder.
    pub nodes: Vec<NodePlacement>,
    pub edges: Vec<EdgePath>,
    /// Employee ids per level, left to right.
    pub levels: Vec<Vec<EmployeeId>>,
    /// Bounding box of all node boxes.
    pub bounds: ChartRect,
    index: HashMap<EmployeeId, usize>,
}

impl ChartLayout {
    #[must_use]
    pub fn get(&self, id: EmployeeId) -> Option<&NodePlacement> {
        self.index.get(&id).and_then(|&idx| self.nodes.get(idx))
    }

    /// Topmost node box containing the world-space point, if any.
    #[must_use]
    pub fn node_at(&self, point: ChartPoint) -> Option<EmployeeId> {
        self.nodes
            .iter()
            .find(|node| node.rect().contains_point(point))
            .map(|node| node.id)
    }

    #[must_use]
    pub fn level_counts(&self) -> Vec<usize> {
        self.levels.iter().map(Vec::len).collect()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

/// Configuration knobs for the layout engine.
///
/// `unit_width` is the horizontal span reserved per leaf and should stay at
/// least `node_width` plus the desired gap, otherwise sibling boxes touch.
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutConfig {
    /// Horizontal span of one leaf slot, in world units.
    pub unit_width: f64,
    /// Vertical distance between level centers.
    pub level_height: f64,
    /// Drawn node box width.
    pub node_width: f64,
    /// Drawn node box height.
    pub node_height: f64,
    /// Root center x.
    pub origin_x: f64,
    /// Root center y.
    pub origin_y: f64,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            unit_width: 110.0,
            level_height: 100.0,
            node_width: 80.0,
            node_height: 40.0,
            origin_x: 0.0,
            origin_y: 0.0,
        }
    }
}

impl LayoutConfig {
    #[must_use]
    pub fn with_unit_width(mut self, unit_width: f64) -> Self {
        self.unit_width = unit_width;
        self
    }

    #[must_use]
    pub fn with_level_height(mut self, level_height: f64) -> Self {
        self.level_height = level_height;
        self
    }

    #[must_use]
    pub fn with_node_size(mut self, width: f64, height: f64) -> Self {
        self.node_width = width;
        self.node_height = height;
        self
    }

    #[must_use]
    pub fn with_origin(mut self, x: f64, y: f64) -> Self {
        self.origin_x = x;
        self.origin_y = y;
        self
    }
}

// ---------------------------------------------------------------------------
// Pass 1: bottom-up span measurement
// ---------------------------------------------------------------------------

fn measure(node: &OrgNode, units: &mut HashMap<EmployeeId, f64>) -> f64 {
    let total: f64 = node
        .children
        .iter()
        .map(|child| measure(child, units))
        .sum();
    // Leaves (and degenerate zero-sum cases) still claim one full unit.
    let span = total.max(1.0);
    units.insert(node.id(), span);
    span
}

// ---------------------------------------------------------------------------
// Pass 2: top-down placement
// ---------------------------------------------------------------------------

struct Placer<'a> {
    config: &'a LayoutConfig,
    units: HashMap<EmployeeId, f64>,
    nodes: Vec<NodePlacement>,
    edges: Vec<EdgePath>,
    levels: Vec<Vec<EmployeeId>>,
}

impl Placer<'_> {
    fn span_units(&self, id: EmployeeId) -> f64 {
        self.units.get(&id).copied().unwrap_or(1.0)
    }

    fn place(&mut self, node: &OrgNode, cx: f64, level: usize) {
        let cy = self.config.origin_y + level as f64 * self.config.level_height;
        if self.levels.len() <= level {
            self.levels.push(Vec::new());
        }
        self.levels[level].push(node.id());
        self.nodes.push(NodePlacement {
            id: node.id(),
            cx,
            cy,
            width: self.config.node_width,
            height: self.config.node_height,
            level,
        });

        if node.children.is_empty() {
            return;
        }

        let total_units: f64 = node
            .children
            .iter()
            .map(|child| self.span_units(child.id()))
            .sum();
        let mut cursor = cx - total_units * self.config.unit_width / 2.0;

        let parent_bottom = cy + self.config.node_height / 2.0;
        let child_cy = self.config.origin_y + (level + 1) as f64 * self.config.level_height;
        let child_top = child_cy - self.config.node_height / 2.0;
        let mid_y = (parent_bottom + child_top) / 2.0;

        for child in &node.children {
            let span = self.span_units(child.id()) * self.config.unit_width;
            let child_cx = cursor + span / 2.0;
            self.edges.push(EdgePath {
                from: node.id(),
                to: child.id(),
                points: vec![
                    ChartPoint::new(cx, parent_bottom),
                    ChartPoint::new(cx, mid_y),
                    ChartPoint::new(child_cx, mid_y),
                    ChartPoint::new(child_cx, child_top),
                ],
            });
            self.place(child, child_cx, level + 1);
            cursor += span;
        }
    }
}

fn compute_bounds(nodes: &[NodePlacement]) -> ChartRect {
    nodes
        .iter()
        .map(NodePlacement::rect)
        .reduce(|bounds, rect| bounds.union(&rect))
        .unwrap_or_default()
}

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Lay out a hierarchy using default configuration.
#[must_use]
pub fn layout_chart(root: &OrgNode) -> ChartLayout {
    layout_chart_with_config(root, &LayoutConfig::default())
}

/// Lay out a hierarchy with explicit configuration.
#[must_use]
pub fn layout_chart_with_config(root: &OrgNode, config: &LayoutConfig) -> ChartLayout {
    let mut units = HashMap::new();
    measure(root, &mut units);

    let mut placer = Placer {
        config,
        units,
        nodes: Vec::new(),
        edges: Vec::new(),
        levels: Vec::new(),
    };
    placer.place(root, config.origin_x, 0);

    let bounds = compute_bounds(&placer.nodes);
    let index = placer
        .nodes
        .iter()
        .enumerate()
        .map(|(idx, node)| (node.id, idx))
        .collect();

    ChartLayout {
        nodes: placer.nodes,
        edges: placer.edges,
        levels: placer.levels,
        bounds,
        index,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
