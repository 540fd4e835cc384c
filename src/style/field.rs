//! Style tables for text input fields.
//!
//! The text field and search field share a surface/border treatment; the
//! search field is a rounder, self-contained pill. The catalog's typing stage
//! maps onto `Focused` here; its error stage is host wiring around the
//! palette's `BorderError` token and not an interaction state.

use crate::tokens::{ColorToken, Radius, Spacing};
use crate::types::InteractionState;

use super::{Entries, StyleProperty as P};

pub(crate) fn text_field(state: InteractionState) -> Entries {
    let mut entries = vec![
        (P::Radius, Radius::Small.into()),
        (P::PaddingX, Spacing::Medium.into()),
        (P::PaddingY, Spacing::Small.into()),
    ];
    surface(&mut entries, state);
    entries
}

pub(crate) fn search_field(state: InteractionState) -> Entries {
    let mut entries = vec![
        (P::Radius, Radius::Full.into()),
        (P::PaddingX, Spacing::Large.into()),
        (P::PaddingY, Spacing::Small.into()),
        (P::IconColor, icon_color(state).into()),
    ];
    surface(&mut entries, state);
    entries
}

fn surface(entries: &mut Entries, state: InteractionState) {
    match state {
        InteractionState::Enabled => entries.extend([
            (P::Background, ColorToken::Surface.into()),
            (P::TextColor, ColorToken::TextPrimary.into()),
            (P::Border, ColorToken::Border.into()),
        ]),
        InteractionState::Hovered => entries.extend([
            (P::Background, ColorToken::Surface.into()),
            (P::TextColor, ColorToken::TextPrimary.into()),
            (P::Border, ColorToken::BorderFocus.into()),
        ]),
        InteractionState::Focused => entries.extend([
            (P::Background, ColorToken::Surface.into()),
            (P::TextColor, ColorToken::TextPrimary.into()),
            (P::Border, ColorToken::BorderFocus.into()),
            (P::FocusRing, ColorToken::FocusRing.into()),
        ]),
        InteractionState::Pressed => entries.extend([
            (P::Background, ColorToken::SurfaceMuted.into()),
            (P::TextColor, ColorToken::TextPrimary.into()),
            (P::Border, ColorToken::BorderFocus.into()),
        ]),
        InteractionState::Disabled => entries.extend([
            (P::Background, ColorToken::DisabledSurface.into()),
            (P::TextColor, ColorToken::TextDisabled.into()),
            (P::Border, ColorToken::Border.into()),
        ]),
    }
}

fn icon_color(state: InteractionState) -> ColorToken {
    match state {
        InteractionState::Disabled => ColorToken::TextDisabled,
        InteractionState::Focused | InteractionState::Pressed => ColorToken::TextPrimary,
        _ => ColorToken::TextSecondary,
    }
}
