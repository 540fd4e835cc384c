//! Token Resolver for facet-ui.
//!
//! Pure mapping from `(component kind, variant, widget state, theme)` to a
//! [`ResolvedStyle`]: an ordered set of style-property -> token entries plus
//! the theme they were resolved under. Resolution is table-driven; each
//! component family owns a match on (variant, state) in its own module, and
//! this module owns validation, dispatch, and the output type.
//!
//! Invalid input is a caller bug and fails fast - the resolver never guesses a
//! nearest match and never substitutes a fallback style.
//!
//! # Modules
//!
//! - [`kind`] - Component kinds, variant sets, state models
//! - `button` / `field` / `toggle` / `nav` / `indicator` - per-family tables

use bitflags::bitflags;
use thiserror::Error;

use crate::tokens::{ColorToken, Elevation, Gradient, Radius, Spacing};
use crate::types::{Rgba, ThemeMode, WidgetState};

mod button;
mod field;
mod indicator;
pub mod kind;
mod nav;
mod toggle;

pub use kind::{ComponentKind, StateModel, Variant};

// =============================================================================
// StyleProperty
// =============================================================================

/// Style-property keys a resolved style can carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum StyleProperty {
    Background,
    TextColor,
    IconColor,
    Border,
    FocusRing,
    Shadow,
    Radius,
    PaddingX,
    PaddingY,
    Gradient,
    Track,
    Fill,
}

impl StyleProperty {
    const fn bit(self) -> PropertySet {
        match self {
            Self::Background => PropertySet::BACKGROUND,
            Self::TextColor => PropertySet::TEXT_COLOR,
            Self::IconColor => PropertySet::ICON_COLOR,
            Self::Border => PropertySet::BORDER,
            Self::FocusRing => PropertySet::FOCUS_RING,
            Self::Shadow => PropertySet::SHADOW,
            Self::Radius => PropertySet::RADIUS,
            Self::PaddingX => PropertySet::PADDING_X,
            Self::PaddingY => PropertySet::PADDING_Y,
            Self::Gradient => PropertySet::GRADIENT,
            Self::Track => PropertySet::TRACK,
            Self::Fill => PropertySet::FILL,
        }
    }
}

bitflags! {
    /// Set of style-property keys, used to compare the shape of two resolved
    /// styles without comparing their values.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct PropertySet: u16 {
        const BACKGROUND = 1 << 0;
        const TEXT_COLOR = 1 << 1;
        const ICON_COLOR = 1 << 2;
        const BORDER = 1 << 3;
        const FOCUS_RING = 1 << 4;
        const SHADOW = 1 << 5;
        const RADIUS = 1 << 6;
        const PADDING_X = 1 << 7;
        const PADDING_Y = 1 << 8;
        const GRADIENT = 1 << 9;
        const TRACK = 1 << 10;
        const FILL = 1 << 11;
    }
}

// =============================================================================
// StyleToken
// =============================================================================

/// Symbolic reference into one of the token tables.
///
/// Styles carry these names, never literal values; the palette can change
/// without touching any resolution logic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StyleToken {
    Color(ColorToken),
    Spacing(Spacing),
    Radius(Radius),
    Shadow(Elevation),
    Gradient(Gradient),
}

impl From<ColorToken> for StyleToken {
    fn from(token: ColorToken) -> Self {
        Self::Color(token)
    }
}

impl From<Spacing> for StyleToken {
    fn from(token: Spacing) -> Self {
        Self::Spacing(token)
    }
}

impl From<Radius> for StyleToken {
    fn from(token: Radius) -> Self {
        Self::Radius(token)
    }
}

impl From<Elevation> for StyleToken {
    fn from(token: Elevation) -> Self {
        Self::Shadow(token)
    }
}

impl From<Gradient> for StyleToken {
    fn from(token: Gradient) -> Self {
        Self::Gradient(token)
    }
}

/// Entry list the per-family tables produce.
pub(crate) type Entries = Vec<(StyleProperty, StyleToken)>;

// =============================================================================
// ResolvedStyle
// =============================================================================

/// Output of the Token Resolver.
///
/// An ordered `StyleProperty -> StyleToken` mapping stamped with the theme it
/// was resolved under. Equal inputs produce equal values on every call; there
/// is no hidden context. Color tokens resolve to literal [`Rgba`] through the
/// stamped theme at read time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedStyle {
    theme: ThemeMode,
    entries: Vec<(StyleProperty, StyleToken)>,
}

impl ResolvedStyle {
    fn new(theme: ThemeMode, mut entries: Entries) -> Self {
        entries.sort_by_key(|(property, _)| *property);
        debug_assert!(
            entries.windows(2).all(|w| w[0].0 != w[1].0),
            "duplicate style property in table output"
        );
        Self { theme, entries }
    }

    /// The theme this style was resolved under.
    pub const fn theme(&self) -> ThemeMode {
        self.theme
    }

    /// The token assigned to `property`, if any.
    pub fn get(&self, property: StyleProperty) -> Option<StyleToken> {
        self.entries
            .iter()
            .find(|(key, _)| *key == property)
            .map(|(_, token)| *token)
    }

    /// The set of property keys this style carries.
    pub fn properties(&self) -> PropertySet {
        self.entries
            .iter()
            .fold(PropertySet::empty(), |set, (key, _)| set | key.bit())
    }

    /// Entries in property order.
    pub fn iter(&self) -> impl Iterator<Item = (StyleProperty, StyleToken)> + '_ {
        self.entries.iter().copied()
    }

    /// Number of styled properties.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no properties are styled.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    // =========================================================================
    // Literal-value readers
    // =========================================================================

    /// Literal color for `property`, resolved through the stamped theme.
    pub fn color(&self, property: StyleProperty) -> Option<Rgba> {
        match self.get(property)? {
            StyleToken::Color(token) => Some(token.value(self.theme)),
            _ => None,
        }
    }

    /// Literal spacing in rem for `property`.
    pub fn spacing_rem(&self, property: StyleProperty) -> Option<f32> {
        match self.get(property)? {
            StyleToken::Spacing(token) => Some(token.rem()),
            _ => None,
        }
    }

    /// Literal corner radius in rem for `property`.
    pub fn radius_rem(&self, property: StyleProperty) -> Option<f32> {
        match self.get(property)? {
            StyleToken::Radius(token) => Some(token.rem()),
            _ => None,
        }
    }

    /// Shadow CSS for `property`, resolved through the stamped theme.
    pub fn shadow_css(&self, property: StyleProperty) -> Option<&'static str> {
        match self.get(property)? {
            StyleToken::Shadow(token) => Some(token.css(self.theme)),
            _ => None,
        }
    }

    /// Gradient CSS for `property`.
    pub fn gradient_css(&self, property: StyleProperty) -> Option<&'static str> {
        match self.get(property)? {
            StyleToken::Gradient(token) => Some(token.css()),
            _ => None,
        }
    }
}

// =============================================================================
// StyleError
// =============================================================================

/// Resolution failure. Both kinds indicate a caller/configuration bug; there
/// is no sensible fallback style to substitute, so neither is recoverable at
/// the call site.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum StyleError {
    /// The requested variant is not in the kind's declared set.
    #[error("variant `{variant}` is not defined for component kind `{kind}`")]
    UnknownVariant {
        kind: ComponentKind,
        variant: Variant,
    },

    /// The supplied state does not fit the kind's state model.
    #[error("state {state:?} is not recognized for component kind `{kind}`")]
    UnknownState {
        kind: ComponentKind,
        state: WidgetState,
    },
}

// =============================================================================
// resolve_style
// =============================================================================

/// Resolve the concrete style for a component under the given theme.
///
/// Validates the variant against the kind's declared set and the state against
/// the kind's state model, then consults the kind's style table. Pure: no I/O,
/// no shared mutable state, safe to call concurrently.
///
/// # Errors
///
/// [`StyleError::UnknownVariant`] when the variant does not belong to the
/// kind; [`StyleError::UnknownState`] when the state shape or interaction
/// state is outside what the kind declares.
pub fn resolve_style(
    kind: ComponentKind,
    variant: Variant,
    state: WidgetState,
    theme: ThemeMode,
) -> Result<ResolvedStyle, StyleError> {
    if !kind.variants().contains(&variant) {
        return Err(StyleError::UnknownVariant { kind, variant });
    }
    if !kind.state_model().accepts(&state) {
        return Err(StyleError::UnknownState { kind, state });
    }

    let interaction = state.interaction();
    let selected = state.is_selected();

    let entries = match kind {
        ComponentKind::Button => button::button(variant, interaction),
        ComponentKind::TextButton => button::text_button(variant, interaction),
        ComponentKind::FloatingButton => button::floating_button(interaction),
        ComponentKind::TextField => field::text_field(interaction),
        ComponentKind::SearchField => field::search_field(interaction),
        ComponentKind::Checkbox => toggle::checkbox(selected, interaction),
        ComponentKind::RadioButton => toggle::radio_button(selected, interaction),
        ComponentKind::ProgressIndicator => indicator::progress_bar(interaction),
        ComponentKind::ProgressIndicatorCircular => indicator::progress_circular(interaction),
        ComponentKind::Navbar => nav::navbar(variant, interaction),
        ComponentKind::NavItemHorizontal => nav::nav_item_horizontal(selected, interaction),
        ComponentKind::NavItemVertical => nav::nav_item_vertical(selected, interaction),
        ComponentKind::LeftNavItem => nav::left_nav_item(selected, interaction),
        ComponentKind::BottomNavItem => nav::bottom_nav_item(selected, interaction),
        ComponentKind::AlphabeticalIndex => nav::alphabetical_index(selected, interaction),
        ComponentKind::SegmentedControl => nav::segmented_control(variant, selected, interaction),
    };

    Ok(ResolvedStyle::new(theme, entries))
}

// =============================================================================
// Tests
// =============================================================================
