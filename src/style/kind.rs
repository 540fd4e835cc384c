//! Component kinds and their declared variant/state sets.
//!
//! Every kind owns a closed variant set and a state model; the resolver checks
//! both before consulting any style table, so an invalid combination is
//! rejected up front rather than silently styled.

use std::fmt;

use crate::types::{InteractionState, WidgetState};

// =============================================================================
// Variant
// =============================================================================

/// Named presentation forms across the catalog.
///
/// One closed enum covers every variant name; each [`ComponentKind`] declares
/// which subset belongs to it. Variants are not interchangeable across kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Variant {
    /// The single form of components that come in one shape.
    #[default]
    Default,

    // Button family
    Primary,
    Secondary,
    PrimarySmall,
    SecondarySmall1,
    SecondarySmall2,
    SecondarySmall3,
    /// Small secondary form of the text button.
    SecondarySmall,

    // Navbar layouts
    Horizontal,
    HorizontalSmall,
    Vertical,

    // Segmented-control layouts
    LeftAligned,
    CenterAligned,
}

impl Variant {
    /// Parse from the catalog's kebab-case names (case-insensitive).
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "default" => Some(Self::Default),
            "primary" => Some(Self::Primary),
            "secondary" => Some(Self::Secondary),
            "primary-small" => Some(Self::PrimarySmall),
            "secondary-small-1" => Some(Self::SecondarySmall1),
            "secondary-small-2" => Some(Self::SecondarySmall2),
            "secondary-small-3" => Some(Self::SecondarySmall3),
            "secondary-small" => Some(Self::SecondarySmall),
            "horizontal" => Some(Self::Horizontal),
            "horizontal-small" => Some(Self::HorizontalSmall),
            "vertical" => Some(Self::Vertical),
            "left-aligned" => Some(Self::LeftAligned),
            "center-aligned" => Some(Self::CenterAligned),
            _ => None,
        }
    }

    /// Canonical kebab-case name.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Primary => "primary",
            Self::Secondary => "secondary",
            Self::PrimarySmall => "primary-small",
            Self::SecondarySmall1 => "secondary-small-1",
            Self::SecondarySmall2 => "secondary-small-2",
            Self::SecondarySmall3 => "secondary-small-3",
            Self::SecondarySmall => "secondary-small",
            Self::Horizontal => "horizontal",
            Self::HorizontalSmall => "horizontal-small",
            Self::Vertical => "vertical",
            Self::LeftAligned => "left-aligned",
            Self::CenterAligned => "center-aligned",
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// =============================================================================
// StateModel
// =============================================================================

/// Which shape of [`WidgetState`] a kind accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StateModel {
    /// Interaction state alone, any of the five universal states.
    Plain,
    /// Selected flag crossed with a declared interaction-state subset.
    Toggle {
        /// The interaction states this toggle responds to.
        states: &'static [InteractionState],
    },
}

impl StateModel {
    /// Check a supplied state against this model.
    pub fn accepts(&self, state: &WidgetState) -> bool {
        match (self, state) {
            (Self::Plain, WidgetState::Plain(_)) => true,
            (Self::Toggle { states }, WidgetState::Toggle { state, .. }) => {
                states.contains(state)
            }
            _ => false,
        }
    }
}

// =============================================================================
// ComponentKind
// =============================================================================

/// Every component kind in the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ComponentKind {
    Button,
    TextButton,
    FloatingButton,
    TextField,
    SearchField,
    Checkbox,
    RadioButton,
    ProgressIndicator,
    ProgressIndicatorCircular,
    Navbar,
    NavItemHorizontal,
    NavItemVertical,
    LeftNavItem,
    BottomNavItem,
    AlphabeticalIndex,
    SegmentedControl,
}

impl ComponentKind {
    /// The variant set this kind declares. Membership is checked by the
    /// resolver; a variant outside this slice is a caller bug.
    pub const fn variants(&self) -> &'static [Variant] {
        match self {
            Self::Button => &[
                Variant::Primary,
                Variant::Secondary,
                Variant::PrimarySmall,
                Variant::SecondarySmall1,
                Variant::SecondarySmall2,
                Variant::SecondarySmall3,
            ],
            Self::TextButton => &[
                Variant::Primary,
                Variant::Secondary,
                Variant::SecondarySmall,
            ],
            Self::Navbar => &[
                Variant::Horizontal,
                Variant::HorizontalSmall,
                Variant::Vertical,
            ],
            Self::SegmentedControl => &[Variant::LeftAligned, Variant::CenterAligned],
            _ => &[Variant::Default],
        }
    }

    /// The state model this kind resolves against.
    pub const fn state_model(&self) -> StateModel {
        match self {
            Self::Checkbox | Self::RadioButton => StateModel::Toggle {
                states: InteractionState::all(),
            },
            Self::NavItemHorizontal
            | Self::NavItemVertical
            | Self::LeftNavItem
            | Self::BottomNavItem
            | Self::AlphabeticalIndex
            | Self::SegmentedControl => StateModel::Toggle {
                states: InteractionState::press_subset(),
            },
            _ => StateModel::Plain,
        }
    }

    /// Canonical name.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Button => "button",
            Self::TextButton => "text-button",
            Self::FloatingButton => "floating-button",
            Self::TextField => "text-field",
            Self::SearchField => "search-field",
            Self::Checkbox => "checkbox",
            Self::RadioButton => "radio-button",
            Self::ProgressIndicator => "progress-indicator",
            Self::ProgressIndicatorCircular => "progress-indicator-circular",
            Self::Navbar => "navbar",
            Self::NavItemHorizontal => "nav-item-horizontal",
            Self::NavItemVertical => "nav-item-vertical",
            Self::LeftNavItem => "left-nav-item",
            Self::BottomNavItem => "bottom-nav-item",
            Self::AlphabeticalIndex => "alphabetical-index",
            Self::SegmentedControl => "segmented-control",
        }
    }

    /// All kinds, in declaration order.
    pub const fn all() -> &'static [ComponentKind] {
        &[
            Self::Button,
            Self::TextButton,
            Self::FloatingButton,
            Self::TextField,
            Self::SearchField,
            Self::Checkbox,
            Self::RadioButton,
            Self::ProgressIndicator,
            Self::ProgressIndicatorCircular,
            Self::Navbar,
            Self::NavItemHorizontal,
            Self::NavItemVertical,
            Self::LeftNavItem,
            Self::BottomNavItem,
            Self::AlphabeticalIndex,
            Self::SegmentedControl,
        ]
    }

    /// Every state a kind can legally be resolved in, for exhaustive sweeps.
    pub fn valid_states(&self) -> Vec<WidgetState> {
        match self.state_model() {
            StateModel::Plain => InteractionState::all()
                .iter()
                .map(|s| WidgetState::Plain(*s))
                .collect(),
            StateModel::Toggle { states } => states
                .iter()
                .flat_map(|s| {
                    let state = *s;
                    [false, true]
                        .into_iter()
                        .map(move |selected| WidgetState::Toggle { selected, state })
                })
                .collect(),
        }
    }
}

impl fmt::Display for ComponentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// =============================================================================
// Tests
// =============================================================================
