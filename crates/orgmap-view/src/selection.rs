#![forbid(unsafe_code)]

//! Hover and selection state for chart nodes.
//!
//! Two independent slots: at most one hovered node and at most one
//! selected node. Hover follows the pointer and is free to come and go
//! while a selection is held; selecting a new node implicitly drops the
//! previous one. [`Selection::close`] clears both slots, as does loading
//! a new directory snapshot.
//!
//! Invariants:
//! - At most one node is selected at any time.
//! - Selecting node C while node B is selected moves straight to C,
//!   never through the idle state.
//! - Pointer-leave never disturbs the selected slot.

use orgmap_core::employee::EmployeeId;

// ---------------------------------------------------------------------------
// State machine
// ---------------------------------------------------------------------------

/// The user-visible interaction state, derived from the two slots.
/// A held selection outranks a transient hover.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionState {
    Idle,
    Hovered(EmployeeId),
    Selected(EmployeeId),
}

/// Hovered/selected slots driving node highlighting and the detail card.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Selection {
    hovered: Option<EmployeeId>,
    selected: Option<EmployeeId>,
}

impl Selection {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn hovered(&self) -> Option<EmployeeId> {
        self.hovered
    }

    #[must_use]
    pub fn selected(&self) -> Option<EmployeeId> {
        self.selected
    }

    #[must_use]
    pub fn is_hovered(&self, id: EmployeeId) -> bool {
        self.hovered == Some(id)
    }

    #[must_use]
    pub fn is_selected(&self, id: EmployeeId) -> bool {
        self.selected == Some(id)
    }

    #[must_use]
    pub fn state(&self) -> SelectionState {
        match (self.selected, self.hovered) {
            (Some(id), _) => SelectionState::Selected(id),
            (None, Some(id)) => SelectionState::Hovered(id),
            (None, None) => SelectionState::Idle,
        }
    }

    /// Pointer entered a node. Replaces any previous hover.
    pub fn pointer_enter(&mut self, id: EmployeeId) {
        self.hovered = Some(id);
    }

    /// Pointer left the hovered node. The selected slot is untouched.
    pub fn pointer_leave(&mut self) {
        self.hovered = None;
    }

    /// Click on a node selects it, whatever the prior state.
    pub fn click(&mut self, id: EmployeeId) {
        self.selected = Some(id);
    }

    /// Explicit close of the detail card. Drops both slots.
    pub fn close(&mut self) {
        self.hovered = None;
        self.selected = None;
    }

    /// Full clear, used when a new directory snapshot replaces the tree.
    pub fn clear(&mut self) {
        self.close();
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn id(raw: u64) -> EmployeeId {
        EmployeeId(raw)
    }

    #[test]
    fn starts_idle() {
        let sel = Selection::new();
        assert_eq!(sel.state(), SelectionState::Idle);
        assert_eq!(sel.hovered(), None);
        assert_eq!(sel.selected(), None);
    }

    #[test]
    fn hover_and_leave() {
        let mut sel = Selection::new();
        sel.pointer_enter(id(7));
        assert_eq!(sel.state(), SelectionState::Hovered(id(7)));
        assert!(sel.is_hovered(id(7)));

        sel.pointer_leave();
        assert_eq!(sel.state(), SelectionState::Idle);
    }

    #[test]
    fn hover_moves_between_nodes() {
        let mut sel = Selection::new();
        sel.pointer_enter(id(1));
        sel.pointer_enter(id(2));
        assert_eq!(sel.hovered(), Some(id(2)));
        assert!(!sel.is_hovered(id(1)));
    }

    #[test]
    fn click_selects_from_any_state() {
        let mut sel = Selection::new();
        sel.click(id(3));
        assert_eq!(sel.state(), SelectionState::Selected(id(3)));

        sel.pointer_enter(id(4));
        sel.click(id(4));
        assert_eq!(sel.selected(), Some(id(4)));
    }

    #[test]
    fn reselect_switches_directly() {
        let mut sel = Selection::new();
        sel.click(id(10));
        sel.click(id(11));
        // Straight swap, only one node ever selected.
        assert_eq!(sel.selected(), Some(id(11)));
        assert!(!sel.is_selected(id(10)));
        assert_eq!(sel.state(), SelectionState::Selected(id(11)));
    }

    #[test]
    fn pointer_leave_keeps_selection() {
        let mut sel = Selection::new();
        sel.click(id(5));
        sel.pointer_enter(id(5));
        sel.pointer_leave();
        assert_eq!(sel.state(), SelectionState::Selected(id(5)));
        assert!(sel.is_selected(id(5)));
    }

    #[test]
    fn selected_and_hovered_are_independent() {
        let mut sel = Selection::new();
        sel.click(id(1));
        sel.pointer_enter(id(2));
        assert!(sel.is_selected(id(1)));
        assert!(sel.is_hovered(id(2)));
        // The held selection outranks the hover in the derived state.
        assert_eq!(sel.state(), SelectionState::Selected(id(1)));
    }

    #[test]
    fn close_clears_both_slots() {
        let mut sel = Selection::new();
        sel.click(id(1));
        sel.pointer_enter(id(2));
        sel.close();
        assert_eq!(sel.state(), SelectionState::Idle);
        assert_eq!(sel.hovered(), None);
        assert_eq!(sel.selected(), None);
    }
}
