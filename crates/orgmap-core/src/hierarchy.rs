#![forbid(unsafe_code)]

//! Management hierarchy construction.
//!
//! Turns a flat slice of employee records into a single-rooted [`OrgTree`]
//! by resolving `manager_id` references. The builder never guesses:
//! ambiguous inputs (no root, several roots, cyclic manager chains) fail
//! with a typed [`HierarchyError`] and no partial tree escapes.
//!
//! Employees whose manager chain does not reach the root (the reference is
//! missing from the snapshot, directly or somewhere up the chain) are not
//! errors: they are excluded from the tree, listed in [`OrgTree::orphans`],
//! and reported through the diagnostics sink.
//!
//! # Invariants
//!
//! - Exactly one employee has no manager reference; it becomes the root.
//! - Every employee appears at most once in the tree.
//! - Sibling order equals input order, so identical snapshots build
//!   identical trees.
//! - Any cycle among manager references anywhere in the snapshot is fatal,
//!   never an infinite loop.

use std::collections::{HashMap, HashSet};
use std::fmt;

use crate::diag::DiagSink;
use crate::employee::{Employee, EmployeeId};

// ---------------------------------------------------------------------------
// Tree types
// ---------------------------------------------------------------------------

/// One employee and the reports attached beneath it.
///
/// Children are owned exclusively; no node appears under two parents.
#[derive(Debug, Clone, PartialEq)]
pub struct OrgNode {
    pub employee: Employee,
    pub children: Vec<OrgNode>,
}

impl OrgNode {
    #[must_use]
    pub fn id(&self) -> EmployeeId {
        self.employee.id
    }

    #[must_use]
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Depth-first preorder walk over this node and all descendants.
    #[must_use]
    pub fn iter(&self) -> OrgNodeIter<'_> {
        OrgNodeIter { stack: vec![self] }
    }
}

/// Preorder iterator over an [`OrgNode`] subtree.
#[derive(Debug)]
pub struct OrgNodeIter<'a> {
    stack: Vec<&'a OrgNode>,
}

impl<'a> Iterator for OrgNodeIter<'a> {
    type Item = &'a OrgNode;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        // Reverse push keeps left-to-right sibling order in the walk.
        self.stack.extend(node.children.iter().rev());
        Some(node)
    }
}

/// Per-build statistics, computed once during construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HierarchyStats {
    /// Employees placed in the tree.
    pub node_count: usize,
    /// Number of levels, root inclusive.
    pub depth: usize,
    /// Nodes per level, index 0 being the root level.
    pub level_counts: Vec<usize>,
    /// Employees excluded as unreachable.
    pub orphan_count: usize,
}

/// A built management hierarchy plus its orphan report.
///
/// Trees are immutable once built; a new directory snapshot produces a new
/// tree rather than patching this one.
#[derive(Debug, Clone, PartialEq)]
pub struct OrgTree {
    pub root: OrgNode,
    /// Employees excluded because their manager chain never reaches the
    /// root, in input order.
    pub orphans: Vec<EmployeeId>,
    pub stats: HierarchyStats,
}

impl OrgTree {
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.stats.node_count
    }

    #[must_use]
    pub fn depth(&self) -> usize {
        self.stats.depth
    }

    #[must_use]
    pub fn level_counts(&self) -> &[usize] {
        &self.stats.level_counts
    }

    /// All employee ids in the tree, depth-first preorder.
    #[must_use]
    pub fn flatten(&self) -> Vec<EmployeeId> {
        self.root.iter().map(OrgNode::id).collect()
    }

    #[must_use]
    pub fn find(&self, id: EmployeeId) -> Option<&OrgNode> {
        self.root.iter().find(|node| node.id() == id)
    }

    #[must_use]
    pub fn contains(&self, id: EmployeeId) -> bool {
        self.find(id).is_some()
    }
}

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// Fatal hierarchy construction failures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HierarchyError {
    /// The snapshot contains no employees at all.
    EmptyDirectory,
    /// Every employee references a manager; nothing can be the root.
    NoRootFound,
    /// More than one employee has no manager reference.
    MultipleRootsFound { roots: Vec<EmployeeId> },
    /// Manager references form a cycle; `id` is a member of it.
    CyclicHierarchy { id: EmployeeId },
}

impl fmt::Display for HierarchyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyDirectory => write!(f, "directory snapshot contains no employees"),
            Self::NoRootFound => {
                write!(f, "no root employee: every record references a manager")
            }
            Self::MultipleRootsFound { roots } => {
                let ids: Vec<String> = roots.iter().map(ToString::to_string).collect();
                write!(
                    f,
                    "multiple root employees without a manager: {}",
                    ids.join(", ")
                )
            }
            Self::CyclicHierarchy { id } => {
                write!(f, "cyclic manager references involving employee {id}")
            }
        }
    }
}

impl std::error::Error for HierarchyError {}

// ---------------------------------------------------------------------------
// Construction
// ---------------------------------------------------------------------------

/// Where an employee's manager chain terminates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Resolution {
    /// Chain ends at the root; the employee belongs in the tree.
    Reachable,
    /// Chain ends at a manager id missing from the snapshot.
    Orphaned,
}

/// Build the management hierarchy from a flat snapshot.
///
/// Expects records validated by `DirectorySnapshot` (unique, non-zero ids).
/// Structural problems are reported here: root cardinality and cycles as
/// [`HierarchyError`]s, unreachable employees as warnings through `sink`
/// plus the [`OrgTree::orphans`] listing.
pub fn build_hierarchy(
    employees: &[Employee],
    sink: &dyn DiagSink,
) -> Result<OrgTree, HierarchyError> {
    if employees.is_empty() {
        return Err(HierarchyError::EmptyDirectory);
    }

    let index: HashMap<EmployeeId, usize> = employees
        .iter()
        .enumerate()
        .map(|(idx, employee)| (employee.id, idx))
        .collect();

    let root_indices: Vec<usize> = employees
        .iter()
        .enumerate()
        .filter(|(_, employee)| employee.is_root())
        .map(|(idx, _)| idx)
        .collect();
    let root_idx = match root_indices.as_slice() {
        [] => return Err(HierarchyError::NoRootFound),
        [single] => *single,
        many => {
            return Err(HierarchyError::MultipleRootsFound {
                roots: many.iter().map(|&idx| employees[idx].id).collect(),
            });
        }
    };

    let resolution = resolve_chains(employees, &index)?;

    // Reachable children, keyed by manager, in input order.
    let mut children_of: HashMap<EmployeeId, Vec<usize>> = HashMap::new();
    for (idx, employee) in employees.iter().enumerate() {
        if let Some(manager) = employee.manager_id
            && resolution.get(&employee.id) == Some(&Resolution::Reachable)
        {
            children_of.entry(manager).or_default().push(idx);
        }
    }

    let mut level_counts: Vec<usize> = Vec::new();
    let root = attach(employees, &children_of, root_idx, 0, &mut level_counts);

    let orphans: Vec<EmployeeId> = employees
        .iter()
        .filter(|employee| resolution.get(&employee.id) == Some(&Resolution::Orphaned))
        .map(|employee| employee.id)
        .collect();
    if !orphans.is_empty() {
        let ids: Vec<String> = orphans.iter().map(ToString::to_string).collect();
        sink.warn(&format!(
            "excluded {} unreachable employee(s) from hierarchy: {}",
            orphans.len(),
            ids.join(", ")
        ));
    }

    let stats = HierarchyStats {
        node_count: level_counts.iter().sum(),
        depth: level_counts.len(),
        orphan_count: orphans.len(),
        level_counts,
    };
    sink.debug(&format!(
        "hierarchy built: {} node(s) across {} level(s), {} orphan(s)",
        stats.node_count, stats.depth, stats.orphan_count
    ));

    Ok(OrgTree {
        root,
        orphans,
        stats,
    })
}

/// Classify every employee by walking its manager chain upward.
///
/// Each id is walked at most once: finished chains memoize their verdict
/// for every id along the path. A repeat visit inside one walk is a cycle.
fn resolve_chains(
    employees: &[Employee],
    index: &HashMap<EmployeeId, usize>,
) -> Result<HashMap<EmployeeId, Resolution>, HierarchyError> {
    let mut resolution: HashMap<EmployeeId, Resolution> = HashMap::with_capacity(employees.len());

    for employee in employees {
        if resolution.contains_key(&employee.id) {
            continue;
        }

        let mut path: Vec<EmployeeId> = Vec::new();
        let mut on_path: HashSet<EmployeeId> = HashSet::new();
        let mut current = employee;
        let verdict = loop {
            if let Some(&known) = resolution.get(&current.id) {
                break known;
            }
            if !on_path.insert(current.id) {
                return Err(HierarchyError::CyclicHierarchy { id: current.id });
            }
            path.push(current.id);
            match current.manager_id {
                None => break Resolution::Reachable,
                Some(manager) => match index.get(&manager) {
                    Some(&idx) => current = &employees[idx],
                    None => break Resolution::Orphaned,
                },
            }
        };
        for id in path {
            resolution.insert(id, verdict);
        }
    }

    Ok(resolution)
}

fn attach(
    employees: &[Employee],
    children_of: &HashMap<EmployeeId, Vec<usize>>,
    idx: usize,
    depth: usize,
    level_counts: &mut Vec<usize>,
) -> OrgNode {
    if level_counts.len() <= depth {
        level_counts.resize(depth + 1, 0);
    }
    level_counts[depth] += 1;

    let employee = employees[idx].clone();
    let children = children_of
        .get(&employee.id)
        .map(|kids| {
            kids.iter()
                .map(|&kid| attach(employees, children_of, kid, depth + 1, level_counts))
                .collect()
        })
        .unwrap_or_default();

    OrgNode { employee, children }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
