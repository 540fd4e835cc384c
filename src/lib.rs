//! # facet-ui
//!
//! Design-token resolution and component state core for themed UI surfaces.
//!
//! ## Architecture
//!
//! Two independent pure components sit behind every widget in the catalog:
//!
//! ```text
//! (kind, variant, state, theme) → resolve_style → ResolvedStyle
//! (TabListState, requested count) → reconcile_tab_count → TabListState
//! ```
//!
//! The resolver is table-driven: each component kind owns a closed variant
//! set and a state model, and each family owns a small (variant, state) →
//! tokens table. The reconciler evolves a bounded tab list while preserving
//! entries by position and keeping the selection index valid. Neither holds
//! state, performs I/O, or calls the other; presentation surfaces invoke them
//! per render / per configuration change and draw whatever comes back.
//!
//! Rendering, layout, and the catalog harness live outside this crate.
//!
//! ## Modules
//!
//! - [`types`] - Core types (Rgba, ThemeMode, InteractionState, WidgetState)
//! - [`tokens`] - Design-token tables (color, spacing, radius, shadow, gradient)
//! - [`style`] - Token Resolver (component kinds, variants, resolution)
//! - [`state`] - Component state logic (tab-list reconciliation)

pub mod state;
pub mod style;
pub mod tokens;
pub mod types;

// Re-export commonly used items
pub use types::{InteractionState, Rgba, ThemeMode, WidgetState};

pub use tokens::{ColorToken, Elevation, Gradient, Radius, Spacing};

pub use style::{
    ComponentKind, PropertySet, ResolvedStyle, StateModel, StyleError, StyleProperty, StyleToken,
    Variant, resolve_style,
};

pub use state::{MAX_TABS, MIN_TABS, Tab, TabListState, reconcile_tab_count, select_tab};
