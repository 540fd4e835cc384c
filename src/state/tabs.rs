//! Bounded tab-list reconciliation for the segmented control.
//!
//! A tab list holds between [`MIN_TABS`] and [`MAX_TABS`] labeled,
//! independently-disabled entries plus an active-selection index. Tab identity
//! is positional - there are no stable ids - so reconciliation preserves tabs
//! by position: growth appends generated defaults after the existing entries,
//! shrink truncates from the tail, and user edits to a surviving position are
//! never touched. Regenerating the whole list from the requested count would
//! discard those edits, which is exactly the bug this module exists to avoid.
//!
//! Every operation returns a new value; the caller's previous state is never
//! mutated, so hosts can diff or undo against it.

use tracing::{debug, trace};

// =============================================================================
// Bounds and default labels
// =============================================================================

/// Smallest tab count a list can be reconciled to.
pub const MIN_TABS: usize = 2;

/// Largest tab count a list can be reconciled to.
pub const MAX_TABS: usize = 7;

/// Fixed label pool for generated tabs, indexed by position.
const DEFAULT_LABELS: [&str; MAX_TABS] = [
    "Label A", "Label B", "Label C", "Label D", "Label E", "Label F", "Label G",
];

/// Default label for a tab at `position`: drawn from the pool, synthesized
/// from the position's letter once the pool is exhausted.
fn default_label(position: usize) -> String {
    match DEFAULT_LABELS.get(position) {
        Some(label) => (*label).to_string(),
        None => {
            let letter = char::from_u32('A' as u32 + position as u32).unwrap_or('?');
            format!("Label {letter}")
        }
    }
}

// =============================================================================
// Tab
// =============================================================================

/// One entry in the list. Identity is positional, not by id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tab {
    label: String,
    disabled: bool,
}

impl Tab {
    /// Create an enabled tab.
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            disabled: false,
        }
    }

    /// The tab's label.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Whether the tab rejects selection.
    pub const fn is_disabled(&self) -> bool {
        self.disabled
    }

    /// Builder-style disabled flag.
    pub fn with_disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    fn generated(position: usize) -> Self {
        Self::new(default_label(position))
    }
}

// =============================================================================
// TabListState
// =============================================================================

/// The tab list a hosting surface owns: ordered tabs plus the active index.
///
/// Fields are private so the invariant `active_index < tabs.len()` cannot be
/// broken from outside; the constructors clamp and the mutators only touch
/// per-tab data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TabListState {
    tabs: Vec<Tab>,
    active_index: usize,
}

impl TabListState {
    /// A fresh list of `count` generated tabs (count clamped to bounds),
    /// first tab active.
    pub fn new(count: usize) -> Self {
        let count = count.clamp(MIN_TABS, MAX_TABS);
        Self {
            tabs: (0..count).map(Tab::generated).collect(),
            active_index: 0,
        }
    }

    /// Build from explicit tabs. The list is reconciled into bounds (padded
    /// with generated tabs below [`MIN_TABS`], truncated above [`MAX_TABS`])
    /// and the active index clamped into range.
    pub fn from_tabs(mut tabs: Vec<Tab>, active_index: usize) -> Self {
        if tabs.len() < MIN_TABS {
            let start = tabs.len();
            tabs.extend((start..MIN_TABS).map(Tab::generated));
        } else {
            tabs.truncate(MAX_TABS);
        }
        let active_index = active_index.min(tabs.len() - 1);
        Self { tabs, active_index }
    }

    /// The tabs in order.
    pub fn tabs(&self) -> &[Tab] {
        &self.tabs
    }

    /// Number of tabs. Always within `[MIN_TABS, MAX_TABS]`.
    pub fn len(&self) -> usize {
        self.tabs.len()
    }

    /// Always `false`; kept for idiomatic pairing with [`Self::len`].
    pub fn is_empty(&self) -> bool {
        self.tabs.is_empty()
    }

    /// Index of the active tab.
    pub const fn active_index(&self) -> usize {
        self.active_index
    }

    /// The active tab.
    pub fn active_tab(&self) -> &Tab {
        &self.tabs[self.active_index]
    }

    /// Relabel the tab at `index`. Returns `false` if out of bounds.
    pub fn set_label(&mut self, index: usize, label: impl Into<String>) -> bool {
        match self.tabs.get_mut(index) {
            Some(tab) => {
                tab.label = label.into();
                true
            }
            None => false,
        }
    }

    /// Set the disabled flag of the tab at `index`. Returns `false` if out of
    /// bounds. Disabling the active tab keeps the selection; disabled only
    /// guards future selection changes.
    pub fn set_disabled(&mut self, index: usize, disabled: bool) -> bool {
        match self.tabs.get_mut(index) {
            Some(tab) => {
                tab.disabled = disabled;
                true
            }
            None => false,
        }
    }
}

impl Default for TabListState {
    fn default() -> Self {
        Self::new(MIN_TABS)
    }
}

// =============================================================================
// Reconciliation
// =============================================================================

/// Evolve a tab list to a requested count.
///
/// The count is clamped to `[MIN_TABS, MAX_TABS]` - out-of-range requests are
/// ordinary input (a slider past its end), never an error. Growth keeps every
/// existing tab untouched and appends generated defaults; shrink truncates
/// from the tail. The active index survives when still in range and clamps to
/// the last tab otherwise.
pub fn reconcile_tab_count(current: &TabListState, requested: usize) -> TabListState {
    let clamped = requested.clamp(MIN_TABS, MAX_TABS);
    if clamped != requested {
        trace!(requested, clamped, "tab count clamped to bounds");
    }

    if clamped == current.tabs.len() {
        return current.clone();
    }

    let mut tabs = current.tabs.clone();
    if clamped > tabs.len() {
        debug!(from = tabs.len(), to = clamped, "growing tab list");
        let start = tabs.len();
        tabs.extend((start..clamped).map(Tab::generated));
    } else {
        debug!(from = tabs.len(), to = clamped, "truncating tab list");
        tabs.truncate(clamped);
    }

    TabListState {
        tabs,
        active_index: current.active_index.min(clamped - 1),
    }
}

/// Select the tab at `index`.
///
/// Legal only for in-bounds, enabled tabs; anything else returns the previous
/// state unchanged. A rejected selection is normal interaction with a
/// constrained control, not an error.
pub fn select_tab(current: &TabListState, index: usize) -> TabListState {
    match current.tabs.get(index) {
        Some(tab) if !tab.is_disabled() => TabListState {
            tabs: current.tabs.clone(),
            active_index: index,
        },
        Some(_) => {
            trace!(index, "selection rejected: tab is disabled");
            current.clone()
        }
        None => {
            trace!(index, len = current.tabs.len(), "selection rejected: out of bounds");
            current.clone()
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
