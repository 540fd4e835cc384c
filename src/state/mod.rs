//! Component state logic for facet-ui.
//!
//! Pure value transformations the hosting surface invokes explicitly: it owns
//! the state, calls in on every configuration change, and re-renders from the
//! returned value. Nothing here observes anything.
//!
//! - [`tabs`] - Bounded tab-list reconciliation and selection

pub mod tabs;

pub use tabs::{MAX_TABS, MIN_TABS, Tab, TabListState, reconcile_tab_count, select_tab};
