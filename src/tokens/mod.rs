//! Design-token tables for facet-ui.
//!
//! Flat, versionless mappings from symbolic name to literal value, compiled
//! into the crate and never mutated at runtime. Every table that varies by
//! theme carries two structurally identical palettes (same keys, different
//! values) so that no state is stylable in one theme and unstyled in the other.
//!
//! # Tables
//!
//! - [`spacing`] - Spacing scale (rem)
//! - [`radius`] - Corner radius scale (rem)
//! - [`shadow`] - Elevation shadows, theme-scoped
//! - [`gradient`] - Brand gradients (CSS strings)
//! - [`color`] - Semantic color palette, theme-scoped

pub mod color;
pub mod gradient;
pub mod radius;
pub mod shadow;
pub mod spacing;

pub use color::ColorToken;
pub use gradient::Gradient;
pub use radius::Radius;
pub use shadow::Elevation;
pub use spacing::Spacing;
