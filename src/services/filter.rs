//! Filter state and the draft/commit panel state machine.
//!
//! The panel edits a draft copy; only "Apply" commits it. Filtering itself
//! is a pure predicate over the rows of the currently loaded page and never
//! reaches across pages.

use std::collections::BTreeMap;

/// Committed filter for one screen.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FilterState {
    /// Free-text query, matched case-insensitively as a substring.
    pub query: String,
    /// Structured selections (status id, brand id, ...) keyed by field.
    pub structured: BTreeMap<String, String>,
}

impl FilterState {
    pub fn is_empty(&self) -> bool {
        self.query.trim().is_empty() && self.structured.is_empty()
    }
}

/// Draft/commit panel: `Closed → Open(draft = committed) → Applied | Reset |
/// Cancelled → Closed`.
#[derive(Debug, Clone, Default)]
pub struct FilterPanel {
    committed: FilterState,
    draft: Option<FilterState>,
}

impl FilterPanel {
    /// Opens the panel, seeding the draft from the committed filter.
    pub fn open(&mut self) {
        self.draft = Some(self.committed.clone());
    }

    pub fn is_open(&self) -> bool {
        self.draft.is_some()
    }

    /// The editable draft while the panel is open.
    pub fn draft_mut(&mut self) -> Option<&mut FilterState> {
        self.draft.as_mut()
    }

    /// Commits the draft and closes the panel.
    pub fn apply(&mut self) -> &FilterState {
        if let Some(draft) = self.draft.take() {
            self.committed = draft;
        }
        &self.committed
    }

    /// Commits the empty filter and closes the panel.
    pub fn reset(&mut self) -> &FilterState {
        self.draft = None;
        self.committed = FilterState::default();
        &self.committed
    }

    /// Discards the draft, keeping the last committed filter.
    pub fn cancel(&mut self) {
        self.draft = None;
    }

    pub fn committed(&self) -> &FilterState {
        &self.committed
    }

    /// Replaces only the committed free-text query, bypassing the panel.
    /// Used by the debounced search box.
    pub fn commit_query(&mut self, query: impl Into<String>) -> &FilterState {
        self.committed.query = query.into();
        &self.committed
    }
}
