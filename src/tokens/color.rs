//! Semantic color palette.
//!
//! Twenty semantic slots organized into surface, text, brand, secondary,
//! feedback, and border groups. Each slot resolves to a literal color through
//! one of two parallel palettes selected by [`ThemeMode`]; the palettes are
//! structurally identical (every slot styled in both) and differ only in value.
//!
//! The brand ramp is the blue family the gradient table pins
//! (#2563EB / #1D4ED8), the secondary ramp its teal counterpart.

use crate::types::{Rgba, ThemeMode};

/// Symbolic color slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColorToken {
    // Surfaces
    Surface,
    SurfaceMuted,
    Overlay,
    DisabledSurface,

    // Text
    TextPrimary,
    TextSecondary,
    TextDisabled,
    TextInverse,

    // Brand (blue) interaction ramp
    Brand,
    BrandHover,
    BrandPressed,

    // Secondary (teal) interaction ramp
    Secondary,
    SecondaryHover,
    SecondaryPressed,

    // Feedback
    Error,
    Success,
    FocusRing,

    // Borders
    Border,
    BorderFocus,
    BorderError,
}

impl ColorToken {
    /// Resolve the slot through the palette for `mode`.
    pub const fn value(self, mode: ThemeMode) -> Rgba {
        match mode {
            ThemeMode::Light => self.light(),
            ThemeMode::Dark => self.dark(),
        }
    }

    const fn light(self) -> Rgba {
        match self {
            Self::Surface => Rgba::from_hex(0xFFFFFF),
            Self::SurfaceMuted => Rgba::from_hex(0xF4F4F5),
            Self::Overlay => Rgba::from_hex(0xE4E4E7),
            Self::DisabledSurface => Rgba::from_hex(0xE4E4E7),
            Self::TextPrimary => Rgba::from_hex(0x18181B),
            Self::TextSecondary => Rgba::from_hex(0x52525B),
            Self::TextDisabled => Rgba::from_hex(0xA1A1AA),
            Self::TextInverse => Rgba::from_hex(0xFFFFFF),
            Self::Brand => Rgba::from_hex(0x2563EB),
            Self::BrandHover => Rgba::from_hex(0x1D4ED8),
            Self::BrandPressed => Rgba::from_hex(0x1E40AF),
            Self::Secondary => Rgba::from_hex(0x14B8A6),
            Self::SecondaryHover => Rgba::from_hex(0x0D9488),
            Self::SecondaryPressed => Rgba::from_hex(0x0F766E),
            Self::Error => Rgba::from_hex(0xDC2626),
            Self::Success => Rgba::from_hex(0x0D9488),
            Self::FocusRing => Rgba::from_hex(0x93C5FD),
            Self::Border => Rgba::from_hex(0xD4D4D8),
            Self::BorderFocus => Rgba::from_hex(0x2563EB),
            Self::BorderError => Rgba::from_hex(0xDC2626),
        }
    }

    const fn dark(self) -> Rgba {
        match self {
            Self::Surface => Rgba::from_hex(0x18181B),
            Self::SurfaceMuted => Rgba::from_hex(0x27272A),
            Self::Overlay => Rgba::from_hex(0x3F3F46),
            Self::DisabledSurface => Rgba::from_hex(0x27272A),
            Self::TextPrimary => Rgba::from_hex(0xFAFAFA),
            Self::TextSecondary => Rgba::from_hex(0xA1A1AA),
            Self::TextDisabled => Rgba::from_hex(0x52525B),
            Self::TextInverse => Rgba::from_hex(0x18181B),
            Self::Brand => Rgba::from_hex(0x3B82F6),
            Self::BrandHover => Rgba::from_hex(0x60A5FA),
            Self::BrandPressed => Rgba::from_hex(0x93C5FD),
            Self::Secondary => Rgba::from_hex(0x2DD4BF),
            Self::SecondaryHover => Rgba::from_hex(0x5EEAD4),
            Self::SecondaryPressed => Rgba::from_hex(0x99F6E4),
            Self::Error => Rgba::from_hex(0xF87171),
            Self::Success => Rgba::from_hex(0x2DD4BF),
            Self::FocusRing => Rgba::from_hex(0x1D4ED8),
            Self::Border => Rgba::from_hex(0x3F3F46),
            Self::BorderFocus => Rgba::from_hex(0x60A5FA),
            Self::BorderError => Rgba::from_hex(0xF87171),
        }
    }

    /// All slots, in declaration order.
    pub const fn all() -> &'static [ColorToken] {
        &[
            Self::Surface,
            Self::SurfaceMuted,
            Self::Overlay,
            Self::DisabledSurface,
            Self::TextPrimary,
            Self::TextSecondary,
            Self::TextDisabled,
            Self::TextInverse,
            Self::Brand,
            Self::BrandHover,
            Self::BrandPressed,
            Self::Secondary,
            Self::SecondaryHover,
            Self::SecondaryPressed,
            Self::Error,
            Self::Success,
            Self::FocusRing,
            Self::Border,
            Self::BorderFocus,
            Self::BorderError,
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_slot_styled_in_both_themes() {
        // Palette-shape symmetry: both palettes cover every slot with an
        // opaque value.
        for token in ColorToken::all() {
            for mode in ThemeMode::all() {
                assert!(token.value(*mode).is_opaque(), "{token:?} in {mode:?}");
            }
        }
    }

    #[test]
    fn test_brand_ramp_matches_gradient_family() {
        assert_eq!(ColorToken::Brand.value(ThemeMode::Light), Rgba::from_hex(0x2563EB));
        assert_eq!(
            ColorToken::BrandHover.value(ThemeMode::Light),
            Rgba::from_hex(0x1D4ED8)
        );
    }

    #[test]
    fn test_themes_diverge() {
        // The palettes must actually differ somewhere for every group that is
        // theme-sensitive; spot-check the anchor slots.
        for token in [
            ColorToken::Surface,
            ColorToken::TextPrimary,
            ColorToken::Brand,
            ColorToken::Border,
        ] {
            assert_ne!(token.value(ThemeMode::Light), token.value(ThemeMode::Dark));
        }
    }

    #[test]
    fn test_inverse_text_mirrors_surface() {
        assert_eq!(
            ColorToken::TextInverse.value(ThemeMode::Light),
            ColorToken::Surface.value(ThemeMode::Light)
        );
        assert_eq!(
            ColorToken::TextInverse.value(ThemeMode::Dark),
            ColorToken::Surface.value(ThemeMode::Dark)
        );
    }

    #[test]
    fn test_all_covers_every_slot() {
        assert_eq!(ColorToken::all().len(), 20);
    }
}
