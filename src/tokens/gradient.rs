//! Brand gradients.
//!
//! A small raw ramp (teal steps plus a blue pair) with semantic names mapped
//! onto it. Components only ever reference the semantic names; the raw ramp is
//! an implementation detail of this table.

// =============================================================================
// Raw ramp
// =============================================================================

const TEAL_50: &str = "linear-gradient(135deg, #99F6E4 0%, #5EEAD4 100%)";
const TEAL_100: &str = "linear-gradient(135deg, #5EEAD4 0%, #2DD4BF 100%)";
const TEAL_200: &str = "linear-gradient(135deg, #2DD4BF 0%, #14B8A6 100%)";
const BLUE_SOFT: &str = "linear-gradient(90deg, #93C5FD 0%, #3B82F6 100%)";
const BLUE_STRONG: &str = "linear-gradient(90deg, #2563EB 0%, #1D4ED8 100%)";

// =============================================================================
// Semantic gradients
// =============================================================================

/// Symbolic gradient reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Gradient {
    /// Primary brand surface (strong blue).
    BrandPrimary,
    /// Secondary brand surface (strong teal).
    BrandSecondary,
    /// Card background wash (soft blue).
    CardBackground,
    /// Highlighted region (mid teal).
    Highlight,
    /// Success status surface (soft teal).
    StatusSuccess,
}

impl Gradient {
    /// The CSS `linear-gradient` value.
    pub const fn css(self) -> &'static str {
        match self {
            Self::BrandPrimary => BLUE_STRONG,
            Self::BrandSecondary => TEAL_200,
            Self::CardBackground => BLUE_SOFT,
            Self::Highlight => TEAL_100,
            Self::StatusSuccess => TEAL_50,
        }
    }

    /// All semantic gradients.
    pub const fn all() -> &'static [Gradient] {
        &[
            Self::BrandPrimary,
            Self::BrandSecondary,
            Self::CardBackground,
            Self::Highlight,
            Self::StatusSuccess,
        ]
    }
}
