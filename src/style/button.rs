//! Style tables for the button family.
//!
//! Three kinds share this module: the filled/outlined button, the text button,
//! and the gradient floating button. Each table is a closed match on
//! (variant, state); sizing comes from the variant, colors from the state.

use crate::tokens::{ColorToken, Elevation, Gradient, Radius, Spacing};
use crate::types::InteractionState;

use super::{Entries, StyleProperty as P, Variant};

// =============================================================================
// Button
// =============================================================================

pub(crate) fn button(variant: Variant, state: InteractionState) -> Entries {
    let mut entries = match variant {
        // Regular forms.
        Variant::Primary | Variant::Secondary => vec![
            (P::Radius, Radius::Medium.into()),
            (P::PaddingX, Spacing::Large.into()),
            (P::PaddingY, Spacing::Small.into()),
        ],
        // Small forms share one size.
        _ => vec![
            (P::Radius, Radius::Small.into()),
            (P::PaddingX, Spacing::Medium.into()),
            (P::PaddingY, Spacing::ExtraSmall.into()),
        ],
    };

    match variant {
        Variant::Primary | Variant::PrimarySmall => filled(&mut entries, state),
        Variant::Secondary | Variant::SecondarySmall1 => outlined(&mut entries, state),
        Variant::SecondarySmall2 => tonal(&mut entries, state),
        // SecondarySmall3 is the ghost form: text only at rest, a wash on
        // hover/press.
        _ => ghost(&mut entries, state),
    }

    entries
}

/// Filled brand surface with inverse text.
fn filled(entries: &mut Entries, state: InteractionState) {
    match state {
        InteractionState::Enabled => entries.extend([
            (P::Background, ColorToken::Brand.into()),
            (P::TextColor, ColorToken::TextInverse.into()),
            (P::Shadow, Elevation::Level1.into()),
        ]),
        InteractionState::Hovered => entries.extend([
            (P::Background, ColorToken::BrandHover.into()),
            (P::TextColor, ColorToken::TextInverse.into()),
            (P::Shadow, Elevation::Level2.into()),
        ]),
        InteractionState::Focused => entries.extend([
            (P::Background, ColorToken::Brand.into()),
            (P::TextColor, ColorToken::TextInverse.into()),
            (P::Shadow, Elevation::Level1.into()),
            (P::FocusRing, ColorToken::FocusRing.into()),
        ]),
        InteractionState::Pressed => entries.extend([
            (P::Background, ColorToken::BrandPressed.into()),
            (P::TextColor, ColorToken::TextInverse.into()),
            (P::Shadow, Elevation::Level1.into()),
        ]),
        InteractionState::Disabled => entries.extend([
            (P::Background, ColorToken::DisabledSurface.into()),
            (P::TextColor, ColorToken::TextDisabled.into()),
        ]),
    }
}

/// Outlined surface with brand text.
fn outlined(entries: &mut Entries, state: InteractionState) {
    match state {
        InteractionState::Enabled => entries.extend([
            (P::Background, ColorToken::Surface.into()),
            (P::TextColor, ColorToken::Brand.into()),
            (P::Border, ColorToken::Border.into()),
        ]),
        InteractionState::Hovered => entries.extend([
            (P::Background, ColorToken::SurfaceMuted.into()),
            (P::TextColor, ColorToken::BrandHover.into()),
            (P::Border, ColorToken::Border.into()),
        ]),
        InteractionState::Focused => entries.extend([
            (P::Background, ColorToken::Surface.into()),
            (P::TextColor, ColorToken::Brand.into()),
            (P::Border, ColorToken::BorderFocus.into()),
            (P::FocusRing, ColorToken::FocusRing.into()),
        ]),
        InteractionState::Pressed => entries.extend([
            (P::Background, ColorToken::Overlay.into()),
            (P::TextColor, ColorToken::BrandPressed.into()),
            (P::Border, ColorToken::Border.into()),
        ]),
        InteractionState::Disabled => entries.extend([
            (P::Background, ColorToken::Surface.into()),
            (P::TextColor, ColorToken::TextDisabled.into()),
            (P::Border, ColorToken::Border.into()),
        ]),
    }
}

/// Muted tonal surface with brand text.
fn tonal(entries: &mut Entries, state: InteractionState) {
    match state {
        InteractionState::Enabled => entries.extend([
            (P::Background, ColorToken::SurfaceMuted.into()),
            (P::TextColor, ColorToken::Brand.into()),
        ]),
        InteractionState::Hovered => entries.extend([
            (P::Background, ColorToken::Overlay.into()),
            (P::TextColor, ColorToken::BrandHover.into()),
        ]),
        InteractionState::Focused => entries.extend([
            (P::Background, ColorToken::SurfaceMuted.into()),
            (P::TextColor, ColorToken::Brand.into()),
            (P::FocusRing, ColorToken::FocusRing.into()),
        ]),
        InteractionState::Pressed => entries.extend([
            (P::Background, ColorToken::Overlay.into()),
            (P::TextColor, ColorToken::BrandPressed.into()),
        ]),
        InteractionState::Disabled => entries.extend([
            (P::Background, ColorToken::DisabledSurface.into()),
            (P::TextColor, ColorToken::TextDisabled.into()),
        ]),
    }
}

/// Text only at rest; a surface wash appears on hover/press.
fn ghost(entries: &mut Entries, state: InteractionState) {
    match state {
        InteractionState::Enabled => {
            entries.push((P::TextColor, ColorToken::Brand.into()));
        }
        InteractionState::Hovered => entries.extend([
            (P::Background, ColorToken::SurfaceMuted.into()),
            (P::TextColor, ColorToken::BrandHover.into()),
        ]),
        InteractionState::Focused => entries.extend([
            (P::TextColor, ColorToken::Brand.into()),
            (P::FocusRing, ColorToken::FocusRing.into()),
        ]),
        InteractionState::Pressed => entries.extend([
            (P::Background, ColorToken::Overlay.into()),
            (P::TextColor, ColorToken::BrandPressed.into()),
        ]),
        InteractionState::Disabled => {
            entries.push((P::TextColor, ColorToken::TextDisabled.into()));
        }
    }
}

// =============================================================================
// TextButton
// =============================================================================

pub(crate) fn text_button(variant: Variant, state: InteractionState) -> Entries {
    let mut entries = vec![
        (P::Radius, Radius::ExtraSmall.into()),
        (
            P::PaddingX,
            if variant == Variant::SecondarySmall {
                Spacing::ExtraSmall.into()
            } else {
                Spacing::Small.into()
            },
        ),
        (P::PaddingY, Spacing::ExtraSmall.into()),
    ];

    let (rest, hover, pressed) = match variant {
        Variant::Primary => (
            ColorToken::Brand,
            ColorToken::BrandHover,
            ColorToken::BrandPressed,
        ),
        _ => (
            ColorToken::TextSecondary,
            ColorToken::TextPrimary,
            ColorToken::TextPrimary,
        ),
    };

    match state {
        InteractionState::Enabled => entries.push((P::TextColor, rest.into())),
        InteractionState::Hovered => entries.push((P::TextColor, hover.into())),
        InteractionState::Focused => entries.extend([
            (P::TextColor, rest.into()),
            (P::FocusRing, ColorToken::FocusRing.into()),
        ]),
        InteractionState::Pressed => entries.push((P::TextColor, pressed.into())),
        InteractionState::Disabled => {
            entries.push((P::TextColor, ColorToken::TextDisabled.into()));
        }
    }

    entries
}

// =============================================================================
// FloatingButton
// =============================================================================

pub(crate) fn floating_button(state: InteractionState) -> Entries {
    let mut entries = vec![
        (P::Radius, Radius::Full.into()),
        (P::PaddingX, Spacing::Medium.into()),
        (P::PaddingY, Spacing::Medium.into()),
    ];

    match state {
        InteractionState::Enabled => entries.extend([
            (P::Gradient, Gradient::BrandPrimary.into()),
            (P::IconColor, ColorToken::TextInverse.into()),
            (P::Shadow, Elevation::Level3.into()),
        ]),
        InteractionState::Hovered => entries.extend([
            (P::Gradient, Gradient::BrandPrimary.into()),
            (P::IconColor, ColorToken::TextInverse.into()),
            (P::Shadow, Elevation::Level4.into()),
        ]),
        InteractionState::Focused => entries.extend([
            (P::Gradient, Gradient::BrandPrimary.into()),
            (P::IconColor, ColorToken::TextInverse.into()),
            (P::Shadow, Elevation::Level3.into()),
            (P::FocusRing, ColorToken::FocusRing.into()),
        ]),
        InteractionState::Pressed => entries.extend([
            (P::Gradient, Gradient::BrandPrimary.into()),
            (P::IconColor, ColorToken::TextInverse.into()),
            (P::Shadow, Elevation::Level2.into()),
        ]),
        // The gradient drops entirely when disabled; a flat surface remains.
        InteractionState::Disabled => entries.extend([
            (P::Background, ColorToken::DisabledSurface.into()),
            (P::IconColor, ColorToken::TextDisabled.into()),
        ]),
    }

    entries
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::StyleToken;

    fn get(entries: &Entries, property: P) -> Option<StyleToken> {
        entries
            .iter()
            .find(|(key, _)| *key == property)
            .map(|(_, token)| *token)
    }

    #[test]
    fn test_primary_states_change_background() {
        let enabled = button(Variant::Primary, InteractionState::Enabled);
        let hovered = button(Variant::Primary, InteractionState::Hovered);
        let pressed = button(Variant::Primary, InteractionState::Pressed);

        assert_eq!(
            get(&enabled, P::Background),
            Some(ColorToken::Brand.into())
        );
        assert_eq!(
            get(&hovered, P::Background),
            Some(ColorToken::BrandHover.into())
        );
        assert_eq!(
            get(&pressed, P::Background),
            Some(ColorToken::BrandPressed.into())
        );
    }

    #[test]
    fn test_small_variants_share_small_sizing() {
        for variant in [
            Variant::PrimarySmall,
            Variant::SecondarySmall1,
            Variant::SecondarySmall2,
            Variant::SecondarySmall3,
        ] {
            let entries = button(variant, InteractionState::Enabled);
            assert_eq!(get(&entries, P::Radius), Some(Radius::Small.into()));
            assert_eq!(get(&entries, P::PaddingX), Some(Spacing::Medium.into()));
        }
    }

    #[test]
    fn test_only_focused_carries_focus_ring() {
        for variant in crate::style::ComponentKind::Button.variants() {
            for state in InteractionState::all() {
                let entries = button(*variant, *state);
                assert_eq!(
                    get(&entries, P::FocusRing).is_some(),
                    *state == InteractionState::Focused,
                    "{variant:?} {state:?}"
                );
            }
        }
    }

    #[test]
    fn test_disabled_drops_shadow() {
        let entries = button(Variant::Primary, InteractionState::Disabled);
        assert!(get(&entries, P::Shadow).is_none());
        assert_eq!(
            get(&entries, P::TextColor),
            Some(ColorToken::TextDisabled.into())
        );
    }

    #[test]
    fn test_ghost_has_no_resting_background() {
        let rest = button(Variant::SecondarySmall3, InteractionState::Enabled);
        assert!(get(&rest, P::Background).is_none());

        let hovered = button(Variant::SecondarySmall3, InteractionState::Hovered);
        assert!(get(&hovered, P::Background).is_some());
    }

    #[test]
    fn test_text_button_is_surface_free() {
        for variant in [Variant::Primary, Variant::Secondary, Variant::SecondarySmall] {
            for state in InteractionState::all() {
                let entries = text_button(variant, *state);
                assert!(get(&entries, P::Background).is_none(), "{variant:?} {state:?}");
                assert!(get(&entries, P::TextColor).is_some());
            }
        }
    }

    #[test]
    fn test_floating_button_gradient_drops_when_disabled() {
        let enabled = floating_button(InteractionState::Enabled);
        assert_eq!(
            get(&enabled, P::Gradient),
            Some(Gradient::BrandPrimary.into())
        );

        let disabled = floating_button(InteractionState::Disabled);
        assert!(get(&disabled, P::Gradient).is_none());
        assert_eq!(
            get(&disabled, P::Background),
            Some(ColorToken::DisabledSurface.into())
        );
    }

    #[test]
    fn test_floating_button_elevation_tracks_state() {
        let rest = floating_button(InteractionState::Enabled);
        let hovered = floating_button(InteractionState::Hovered);
        let pressed = floating_button(InteractionState::Pressed);

        assert_eq!(get(&rest, P::Shadow), Some(Elevation::Level3.into()));
        assert_eq!(get(&hovered, P::Shadow), Some(Elevation::Level4.into()));
        assert_eq!(get(&pressed, P::Shadow), Some(Elevation::Level2.into()));
    }
}
