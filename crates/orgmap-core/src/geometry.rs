#![forbid(unsafe_code)]

//! World-space geometry primitives.
//!
//! Chart coordinates are continuous f64 "world units": the layout engine
//! places nodes in this space and the viewport maps it to screen pixels.
//! Positions are [`ChartPoint`]s, displacements (pan offsets, drag deltas)
//! are [`ChartVec`]s, and node boxes / bounds are [`ChartRect`]s.

use std::ops::{Add, Sub};

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Point
// ---------------------------------------------------------------------------

/// A position in world (or screen) coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ChartPoint {
    pub x: f64,
    pub y: f64,
}

impl ChartPoint {
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl Sub for ChartPoint {
    type Output = ChartVec;

    fn sub(self, rhs: Self) -> ChartVec {
        ChartVec::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Add<ChartVec> for ChartPoint {
    type Output = ChartPoint;

    fn add(self, rhs: ChartVec) -> ChartPoint {
        ChartPoint::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub<ChartVec> for ChartPoint {
    type Output = ChartPoint;

    fn sub(self, rhs: ChartVec) -> ChartPoint {
        ChartPoint::new(self.x - rhs.x, self.y - rhs.y)
    }
}

// ---------------------------------------------------------------------------
// Vector
// ---------------------------------------------------------------------------

/// A displacement between two points, e.g. a pan offset or drag anchor.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ChartVec {
    pub x: f64,
    pub y: f64,
}

impl ChartVec {
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };

    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl Add for ChartVec {
    type Output = ChartVec;

    fn add(self, rhs: Self) -> ChartVec {
        ChartVec::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for ChartVec {
    type Output = ChartVec;

    fn sub(self, rhs: Self) -> ChartVec {
        ChartVec::new(self.x - rhs.x, self.y - rhs.y)
    }
}

// ---------------------------------------------------------------------------
// Rect
// ---------------------------------------------------------------------------

/// An axis-aligned rectangle in world coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ChartRect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl ChartRect {
    #[must_use]
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Rectangle described by its center point and dimensions.
    #[must_use]
    pub fn from_center(cx: f64, cy: f64, width: f64, height: f64) -> Self {
        Self {
            x: cx - width / 2.0,
            y: cy - height / 2.0,
            width,
            height,
        }
    }

    #[must_use]
    pub fn left(&self) -> f64 {
        self.x
    }

    #[must_use]
    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    #[must_use]
    pub fn top(&self) -> f64 {
        self.y
    }

    #[must_use]
    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    #[must_use]
    pub fn center(&self) -> ChartPoint {
        ChartPoint::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    /// Whether the point lies inside the rectangle (edges inclusive).
    #[must_use]
    pub fn contains_point(&self, p: ChartPoint) -> bool {
        p.x >= self.left() && p.x <= self.right() && p.y >= self.top() && p.y <= self.bottom()
    }

    /// Smallest rectangle covering both `self` and `other`.
    #[must_use]
    pub fn union(&self, other: &ChartRect) -> ChartRect {
        let left = self.left().min(other.left());
        let top = self.top().min(other.top());
        let right = self.right().max(other.right());
        let bottom = self.bottom().max(other.bottom());
        ChartRect::new(left, top, right - left, bottom - top)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
