//! Project dialog state machine.
//!
//! A single dialog exists page-wide. `open` on an id the catalog lacks
//! is a no-op; `open` while already open replaces the rendered project
//! rather than stacking; `close` is idempotent.

use crate::catalog::{Catalog, ProjectEntry};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalState {
    Closed,
    Open(u32),
}

#[derive(Debug, Clone)]
pub struct ModalController {
    catalog: Catalog,
    state: ModalState,
}

impl ModalController {
    pub fn new(catalog: Catalog) -> Self {
        Self {
            catalog,
            state: ModalState::Closed,
        }
    }

    pub fn state(&self) -> ModalState {
        self.state
    }

    pub fn is_open(&self) -> bool {
        matches!(self.state, ModalState::Open(_))
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Open the dialog on `id`. Returns the entry to render, or `None`
    /// when the catalog has no such id — in which case the state is
    /// untouched and the caller renders nothing.
    pub fn open(&mut self, id: u32) -> Option<&ProjectEntry> {
        let entry = self.catalog.get(id)?;
        self.state = ModalState::Open(id);
        Some(entry)
    }

    /// Close the dialog. Returns whether a transition happened, so the
    /// caller can skip re-releasing the scroll lock on a repeat close.
    pub fn close(&mut self) -> bool {
        if self.state == ModalState::Closed {
            return false;
        }
        self.state = ModalState::Closed;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn open_known_id_transitions() {
        let mut ctl = ModalController::new(Catalog::builtin());
        let entry = ctl.open(2);
        assert_eq!(entry.map(|e| e.title.as_str()), Some("Bay Cove Learning Database"));
        assert_eq!(ctl.state(), ModalState::Open(2));
    }

    #[test]
    fn open_missing_id_is_noop() {
        let mut ctl = ModalController::new(Catalog::builtin());
        assert!(ctl.open(999).is_none());
        assert_eq!(ctl.state(), ModalState::Closed);
    }

    #[test]
    fn reopen_replaces_current_project() {
        let mut ctl = ModalController::new(Catalog::builtin());
        ctl.open(1);
        let entry = ctl.open(5);
        assert_eq!(entry.map(|e| e.id), Some(5));
        assert_eq!(ctl.state(), ModalState::Open(5));
    }

    #[test]
    fn reopen_missing_id_keeps_current_project() {
        let mut ctl = ModalController::new(Catalog::builtin());
        ctl.open(3);
        assert!(ctl.open(42).is_none());
        assert_eq!(ctl.state(), ModalState::Open(3));
    }

    #[test]
    fn close_is_idempotent() {
        let mut ctl = ModalController::new(Catalog::builtin());
        ctl.open(4);
        assert!(ctl.close());
        assert!(!ctl.close());
        assert_eq!(ctl.state(), ModalState::Closed);
    }
}
