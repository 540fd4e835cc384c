//! Style tables for progress indicators.
//!
//! Both indicators are track + fill pairs. They are display-only, so most
//! interaction states resolve to the resting style; only disabled mutes the
//! fill.

use crate::tokens::{ColorToken, Radius, Spacing};
use crate::types::InteractionState;

use super::{Entries, StyleProperty as P};

pub(crate) fn progress_bar(state: InteractionState) -> Entries {
    vec![
        (P::Radius, Radius::Full.into()),
        (P::Track, ColorToken::SurfaceMuted.into()),
        (P::Fill, fill_color(state).into()),
    ]
}

pub(crate) fn progress_circular(state: InteractionState) -> Entries {
    vec![
        (P::Track, ColorToken::SurfaceMuted.into()),
        (P::Fill, fill_color(state).into()),
        (P::PaddingX, Spacing::ExtraSmall.into()),
        (P::PaddingY, Spacing::ExtraSmall.into()),
    ]
}

const fn fill_color(state: InteractionState) -> ColorToken {
    match state {
        InteractionState::Disabled => ColorToken::TextDisabled,
        _ => ColorToken::Brand,
    }
}
