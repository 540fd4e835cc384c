//! Style tables for the navigation family.
//!
//! The navbar is a plain container; every item kind inside it is a
//! press-driven toggle (selected × enabled/hovered/pressed - the state model
//! upstream rejects focused/disabled before these tables run). Selected items
//! read from the brand ramp, unselected ones from the secondary text tier,
//! and hover/press washes come from the muted surface tiers.

use crate::tokens::{ColorToken, Elevation, Radius, Spacing};
use crate::types::InteractionState;

use super::{Entries, StyleProperty as P, Variant};

// =============================================================================
// Navbar
// =============================================================================

pub(crate) fn navbar(variant: Variant, state: InteractionState) -> Entries {
    let (padding_x, padding_y) = match variant {
        Variant::Horizontal => (Spacing::Large, Spacing::Medium),
        Variant::HorizontalSmall => (Spacing::Medium, Spacing::Small),
        // Vertical rail: tall and narrow.
        _ => (Spacing::Medium, Spacing::Large),
    };

    let background = if state == InteractionState::Disabled {
        ColorToken::DisabledSurface
    } else {
        ColorToken::Surface
    };

    vec![
        (P::Background, background.into()),
        (P::Shadow, Elevation::Level2.into()),
        (P::PaddingX, padding_x.into()),
        (P::PaddingY, padding_y.into()),
    ]
}

// =============================================================================
// Navigation items
// =============================================================================

/// Horizontal tab-style item: a baseline indicator appears when selected.
pub(crate) fn nav_item_horizontal(selected: bool, state: InteractionState) -> Entries {
    let mut entries = vec![
        (P::Radius, Radius::None.into()),
        (P::PaddingX, Spacing::Medium.into()),
        (P::PaddingY, Spacing::Small.into()),
    ];
    item_colors(&mut entries, selected, state);
    if selected {
        entries.push((P::Fill, indicator_color(state).into()));
    }
    entries
}

/// Vertical list item with a leading indicator when selected.
pub(crate) fn nav_item_vertical(selected: bool, state: InteractionState) -> Entries {
    let mut entries = vec![
        (P::Radius, Radius::Small.into()),
        (P::PaddingX, Spacing::Medium.into()),
        (P::PaddingY, Spacing::Small.into()),
    ];
    item_colors(&mut entries, selected, state);
    if selected {
        entries.push((P::Fill, indicator_color(state).into()));
    }
    entries
}

/// Left-rail item: the whole row highlights instead of drawing an indicator.
pub(crate) fn left_nav_item(selected: bool, state: InteractionState) -> Entries {
    let mut entries = vec![
        (P::Radius, Radius::Small.into()),
        (P::PaddingX, Spacing::Medium.into()),
        (P::PaddingY, Spacing::SmallMedium.into()),
    ];

    if selected {
        entries.extend([
            (P::Background, selected_wash(state).into()),
            (P::TextColor, indicator_color(state).into()),
            (P::IconColor, indicator_color(state).into()),
        ]);
    } else {
        entries.extend([
            (P::TextColor, unselected_text(state).into()),
            (P::IconColor, unselected_text(state).into()),
        ]);
        push_hover_wash(&mut entries, state);
    }

    entries
}

/// Bottom-bar item: icon above label, pill highlight behind the icon.
pub(crate) fn bottom_nav_item(selected: bool, state: InteractionState) -> Entries {
    let mut entries = vec![
        (P::Radius, Radius::Full.into()),
        (P::PaddingX, Spacing::Small.into()),
        (P::PaddingY, Spacing::ExtraSmall.into()),
    ];

    if selected {
        entries.extend([
            (P::Background, selected_wash(state).into()),
            (P::IconColor, indicator_color(state).into()),
            (P::TextColor, ColorToken::TextPrimary.into()),
        ]);
    } else {
        entries.extend([
            (P::IconColor, unselected_text(state).into()),
            (P::TextColor, unselected_text(state).into()),
        ]);
        push_hover_wash(&mut entries, state);
    }

    entries
}

/// Single letter in the alphabetical index rail.
pub(crate) fn alphabetical_index(selected: bool, state: InteractionState) -> Entries {
    let mut entries = vec![
        (P::Radius, Radius::Full.into()),
        (P::PaddingX, Spacing::ExtraSmall.into()),
        (P::PaddingY, Spacing::ExtraSmall.into()),
    ];

    if selected {
        // The active letter inverts: brand disc, inverse glyph.
        entries.extend([
            (P::Background, indicator_color(state).into()),
            (P::TextColor, ColorToken::TextInverse.into()),
        ]);
    } else {
        entries.push((P::TextColor, unselected_text(state).into()));
        push_hover_wash(&mut entries, state);
    }

    entries
}

// =============================================================================
// SegmentedControl
// =============================================================================

/// One tab inside the segmented control. The variant sets the horizontal
/// density (the left-aligned layout packs tabs tighter than the centered one);
/// the selected tab floats on a level-1 shadow.
pub(crate) fn segmented_control(
    variant: Variant,
    selected: bool,
    state: InteractionState,
) -> Entries {
    let padding_x = if variant == Variant::LeftAligned {
        Spacing::Small
    } else {
        Spacing::Medium
    };

    let mut entries = vec![
        (P::Radius, Radius::Full.into()),
        (P::PaddingX, padding_x.into()),
        (P::PaddingY, Spacing::ExtraSmall.into()),
        (P::Track, ColorToken::SurfaceMuted.into()),
    ];

    if selected {
        entries.extend([
            (P::Background, ColorToken::Surface.into()),
            (P::TextColor, ColorToken::TextPrimary.into()),
            (P::Shadow, Elevation::Level1.into()),
        ]);
    } else {
        entries.push((P::TextColor, unselected_text(state).into()));
        push_hover_wash(&mut entries, state);
    }

    entries
}

// =============================================================================
// Shared ramps
// =============================================================================

fn item_colors(entries: &mut Entries, selected: bool, state: InteractionState) {
    if selected {
        entries.extend([
            (P::TextColor, indicator_color(state).into()),
            (P::IconColor, indicator_color(state).into()),
        ]);
    } else {
        entries.extend([
            (P::TextColor, unselected_text(state).into()),
            (P::IconColor, unselected_text(state).into()),
        ]);
        push_hover_wash(entries, state);
    }
}

const fn indicator_color(state: InteractionState) -> ColorToken {
    match state {
        InteractionState::Hovered => ColorToken::BrandHover,
        InteractionState::Pressed => ColorToken::BrandPressed,
        _ => ColorToken::Brand,
    }
}

const fn unselected_text(state: InteractionState) -> ColorToken {
    match state {
        InteractionState::Hovered | InteractionState::Pressed => ColorToken::TextPrimary,
        _ => ColorToken::TextSecondary,
    }
}

const fn selected_wash(state: InteractionState) -> ColorToken {
    match state {
        InteractionState::Pressed => ColorToken::Overlay,
        _ => ColorToken::SurfaceMuted,
    }
}

fn push_hover_wash(entries: &mut Entries, state: InteractionState) {
    match state {
        InteractionState::Hovered => {
            entries.push((P::Background, ColorToken::SurfaceMuted.into()));
        }
        InteractionState::Pressed => {
            entries.push((P::Background, ColorToken::Overlay.into()));
        }
        _ => {}
    }
}

// =============================================================================
// Tests
// =============================================================================
