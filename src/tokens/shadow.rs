//! Elevation shadows.
//!
//! Five elevation levels, theme-scoped. The light and dark tables are
//! value-identical for levels 2-5; level 1 carries one extra blur layer in
//! light. That duplication is carried over from the source palette as-is
//! rather than inventing divergent dark values.

use crate::types::ThemeMode;

/// Symbolic elevation level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Elevation {
    Level1,
    Level2,
    Level3,
    Level4,
    Level5,
}

impl Elevation {
    /// The layered box-shadow for this elevation under the given theme,
    /// as a CSS shadow list.
    pub const fn css(self, mode: ThemeMode) -> &'static str {
        match (self, mode) {
            (Self::Level1, ThemeMode::Light) => {
                "0 0.0625rem 0.1875rem rgba(0, 0, 0, 0.15), 0 0.0625rem 0.125rem rgba(0, 0, 0, 0.3), 0 0.125rem 0.15625rem rgba(0, 0, 0, 0.3)"
            }
            (Self::Level1, ThemeMode::Dark) => {
                "0 0.0625rem 0.1875rem rgba(0, 0, 0, 0.15), 0 0.0625rem 0.125rem rgba(0, 0, 0, 0.3)"
            }
            (Self::Level2, _) => {
                "0 0.125rem 0.375rem rgba(0, 0, 0, 0.15), 0 0.0625rem 0.125rem rgba(0, 0, 0, 0.3)"
            }
            (Self::Level3, _) => {
                "0 0.0625rem 0.1875rem rgba(0, 0, 0, 0.3), 0 0.25rem 0.5rem rgba(0, 0, 0, 0.15)"
            }
            (Self::Level4, _) => {
                "0 0.125rem 0.1875rem rgba(0, 0, 0, 0.3), 0 0.375rem 0.625rem rgba(0, 0, 0, 0.15)"
            }
            (Self::Level5, _) => {
                "0 0.25rem 0.25rem rgba(0, 0, 0, 0.3), 0 0.5rem 0.75rem rgba(0, 0, 0, 0.15)"
            }
        }
    }

    /// All levels, lowest first.
    pub const fn all() -> &'static [Elevation] {
        &[
            Self::Level1,
            Self::Level2,
            Self::Level3,
            Self::Level4,
            Self::Level5,
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_levels_2_to_5_identical_across_themes() {
        for level in &Elevation::all()[1..] {
            assert_eq!(level.css(ThemeMode::Light), level.css(ThemeMode::Dark));
        }
    }

    #[test]
    fn test_level_1_light_has_extra_layer() {
        let light = Elevation::Level1.css(ThemeMode::Light);
        let dark = Elevation::Level1.css(ThemeMode::Dark);
        assert_ne!(light, dark);
        assert_eq!(light.matches("rgba").count(), 3);
        assert_eq!(dark.matches("rgba").count(), 2);
    }

    #[test]
    fn test_every_level_styled_in_both_themes() {
        for level in Elevation::all() {
            for mode in ThemeMode::all() {
                assert!(!level.css(*mode).is_empty());
            }
        }
    }
}
