//! Style tables for binary toggles (checkbox, radio button).
//!
//! Both resolve the full five-state set crossed with the selected flag.
//! Selected controls fill with the brand ramp; unselected ones stay an
//! outlined surface. Only the corner treatment tells them apart.

use crate::tokens::{ColorToken, Radius};
use crate::types::InteractionState;

use super::{Entries, StyleProperty as P};

pub(crate) fn checkbox(selected: bool, state: InteractionState) -> Entries {
    control(Radius::ExtraSmall, selected, state)
}

pub(crate) fn radio_button(selected: bool, state: InteractionState) -> Entries {
    control(Radius::Full, selected, state)
}

fn control(radius: Radius, selected: bool, state: InteractionState) -> Entries {
    let mut entries = vec![(P::Radius, radius.into())];

    if selected {
        // Filled: the mark is inverse-colored on the brand ramp.
        let fill = match state {
            InteractionState::Hovered => ColorToken::BrandHover,
            InteractionState::Pressed => ColorToken::BrandPressed,
            InteractionState::Disabled => ColorToken::DisabledSurface,
            _ => ColorToken::Brand,
        };
        let mark = if state == InteractionState::Disabled {
            ColorToken::TextDisabled
        } else {
            ColorToken::TextInverse
        };
        entries.extend([(P::Fill, fill.into()), (P::IconColor, mark.into())]);
    } else {
        // Outlined: an empty surface whose border answers the pointer.
        let border = match state {
            InteractionState::Hovered => ColorToken::BorderFocus,
            InteractionState::Pressed => ColorToken::BrandPressed,
            InteractionState::Disabled => ColorToken::Border,
            _ => ColorToken::Border,
        };
        let background = match state {
            InteractionState::Pressed => ColorToken::SurfaceMuted,
            InteractionState::Disabled => ColorToken::DisabledSurface,
            _ => ColorToken::Surface,
        };
        entries.extend([
            (P::Background, background.into()),
            (P::Border, border.into()),
        ]);
    }

    if state == InteractionState::Focused {
        entries.push((P::FocusRing, ColorToken::FocusRing.into()));
    }

    entries
}

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
    fn test_shape_is_the_only_difference() {
        for selected in [false, true] {
            for state in InteractionState::all() {
                let mut checkbox = checkbox(selected, *state);
                let mut radio = radio_button(selected, *state);
                checkbox.retain(|(key, _)| *key != P::Radius);
                radio.retain(|(key, _)| *key != P::Radius);
                assert_eq!(checkbox, radio, "{selected} {state:?}");
            }
        }
    }

    #[test]
    fn test_radio_is_round_checkbox_is_not() {
        assert_eq!(
            get(&radio_button(true, InteractionState::Enabled), P::Radius),
            Some(Radius::Full.into())
        );
        assert_eq!(
            get(&checkbox(true, InteractionState::Enabled), P::Radius),
            Some(Radius::ExtraSmall.into())
        );
    }

    #[test]
    fn test_selected_fills_unselected_outlines() {
        let selected = checkbox(true, InteractionState::Enabled);
        assert!(get(&selected, P::Fill).is_some());
        assert!(get(&selected, P::Border).is_none());

        let unselected = checkbox(false, InteractionState::Enabled);
        assert!(get(&unselected, P::Fill).is_none());
        assert!(get(&unselected, P::Border).is_some());
    }

    #[test]
    fn test_selected_fill_walks_brand_ramp() {
        assert_eq!(
            get(&checkbox(true, InteractionState::Hovered), P::Fill),
            Some(ColorToken::BrandHover.into())
        );
        assert_eq!(
            get(&checkbox(true, InteractionState::Pressed), P::Fill),
            Some(ColorToken::BrandPressed.into())
        );
    }

    #[test]
    fn test_focus_ring_in_both_selection_states() {
        for selected in [false, true] {
            let entries = checkbox(selected, InteractionState::Focused);
            assert!(get(&entries, P::FocusRing).is_some());
        }
    }

    #[test]
    fn test_disabled_selected_keeps_a_muted_mark() {
        let entries = checkbox(true, InteractionState::Disabled);
        assert_eq!(get(&entries, P::Fill), Some(ColorToken::DisabledSurface.into()));
        assert_eq!(
            get(&entries, P::IconColor),
            Some(ColorToken::TextDisabled.into())
        );
    }
}
