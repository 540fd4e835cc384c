//! Core types for facet-ui.
//!
//! These types define the foundation that everything builds on: the color value
//! type the palettes resolve to, the theme selector, and the interaction-state
//! model every component is resolved against.

// =============================================================================
// Color
// =============================================================================

/// RGBA color with 8-bit channels (0-255).
///
/// Using integers for exact comparison - no floating point epsilon needed.
/// Alpha 255 = fully opaque, 0 = fully transparent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    /// Create a new RGBA color.
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Create an opaque RGB color.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 255)
    }

    /// Create an opaque color from a hex integer (0xRRGGBB).
    pub const fn from_hex(hex: u32) -> Self {
        Self::rgb(
            ((hex >> 16) & 0xFF) as u8,
            ((hex >> 8) & 0xFF) as u8,
            (hex & 0xFF) as u8,
        )
    }

    /// Replace the alpha channel.
    pub const fn with_alpha(self, a: u8) -> Self {
        Self::new(self.r, self.g, self.b, a)
    }

    /// Transparent color.
    pub const TRANSPARENT: Self = Self::new(0, 0, 0, 0);

    // Standard colors
    pub const BLACK: Self = Self::rgb(0, 0, 0);
    pub const WHITE: Self = Self::rgb(255, 255, 255);

    /// Check if color is fully opaque.
    #[inline]
    pub const fn is_opaque(&self) -> bool {
        self.a == 255
    }

    /// Check if color is fully transparent.
    #[inline]
    pub const fn is_transparent(&self) -> bool {
        self.a == 0
    }
}

// =============================================================================
// ThemeMode
// =============================================================================

/// Theme selector. Every token table carries two structurally identical
/// palettes; the mode picks which one a resolution reads from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ThemeMode {
    /// Light palette.
    #[default]
    Light,
    /// Dark palette.
    Dark,
}

impl ThemeMode {
    /// Parse from string (case-insensitive).
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }

    /// Canonical name.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Both modes, light first.
    pub const fn all() -> &'static [ThemeMode] {
        &[Self::Light, Self::Dark]
    }
}

// =============================================================================
// InteractionState
// =============================================================================

/// The universal interaction-state set.
///
/// Every component resolves against some subset of these five states; most
/// accept all of them, the press-driven navigation items accept only
/// enabled/hovered/pressed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum InteractionState {
    /// At rest, accepting input.
    #[default]
    Enabled,
    /// Pointer over the component.
    Hovered,
    /// Holding keyboard focus.
    Focused,
    /// Actively pressed.
    Pressed,
    /// Not accepting input.
    Disabled,
}

impl InteractionState {
    /// Parse from string (case-insensitive).
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "enabled" => Some(Self::Enabled),
            "hovered" => Some(Self::Hovered),
            "focused" => Some(Self::Focused),
            "pressed" => Some(Self::Pressed),
            "disabled" => Some(Self::Disabled),
            _ => None,
        }
    }

    /// Canonical name.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Enabled => "enabled",
            Self::Hovered => "hovered",
            Self::Focused => "focused",
            Self::Pressed => "pressed",
            Self::Disabled => "disabled",
        }
    }

    /// All five states, in declaration order.
    pub const fn all() -> &'static [InteractionState] {
        &[
            Self::Enabled,
            Self::Hovered,
            Self::Focused,
            Self::Pressed,
            Self::Disabled,
        ]
    }

    /// The subset press-driven items (nav items, index letters, tabs) accept.
    pub const fn press_subset() -> &'static [InteractionState] {
        &[Self::Enabled, Self::Hovered, Self::Pressed]
    }
}

// =============================================================================
// WidgetState
// =============================================================================

/// The state a presentation surface hands to the resolver.
///
/// Plain components carry an interaction state alone; binary controls
/// (checkbox, radio, nav items, tabs) cross it with a selected flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WidgetState {
    /// Interaction state alone.
    Plain(InteractionState),
    /// Interaction state crossed with a selected flag.
    Toggle {
        /// Whether the control is currently selected/checked.
        selected: bool,
        /// The interaction state.
        state: InteractionState,
    },
}

impl WidgetState {
    /// The interaction state regardless of model.
    pub const fn interaction(&self) -> InteractionState {
        match self {
            Self::Plain(state) => *state,
            Self::Toggle { state, .. } => *state,
        }
    }

    /// The selected flag, `false` for plain states.
    pub const fn is_selected(&self) -> bool {
        matches!(self, Self::Toggle { selected: true, .. })
    }
}

impl From<InteractionState> for WidgetState {
    fn from(state: InteractionState) -> Self {
        Self::Plain(state)
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rgba_from_hex() {
        assert_eq!(Rgba::from_hex(0x2563EB), Rgba::rgb(0x25, 0x63, 0xEB));
        assert_eq!(Rgba::from_hex(0xFFFFFF), Rgba::WHITE);
        assert_eq!(Rgba::from_hex(0x000000), Rgba::BLACK);
    }

    #[test]
    fn test_rgba_with_alpha() {
        let c = Rgba::rgb(10, 20, 30).with_alpha(128);
        assert_eq!(c, Rgba::new(10, 20, 30, 128));
        assert!(!c.is_opaque());
        assert!(!c.is_transparent());
        assert!(Rgba::TRANSPARENT.is_transparent());
    }

    #[test]
    fn test_theme_mode_from_str() {
        assert_eq!(ThemeMode::from_str("light"), Some(ThemeMode::Light));
        assert_eq!(ThemeMode::from_str("DARK"), Some(ThemeMode::Dark));
        assert_eq!(ThemeMode::from_str("sepia"), None);
    }

    #[test]
    fn test_theme_mode_round_trip() {
        for mode in ThemeMode::all() {
            assert_eq!(ThemeMode::from_str(mode.as_str()), Some(*mode));
        }
    }

    #[test]
    fn test_interaction_state_round_trip() {
        for state in InteractionState::all() {
            assert_eq!(InteractionState::from_str(state.as_str()), Some(*state));
        }
        assert_eq!(InteractionState::from_str("typing"), None);
    }

    #[test]
    fn test_press_subset_excludes_focus_and_disabled() {
        let subset = InteractionState::press_subset();
        assert!(!subset.contains(&InteractionState::Focused));
        assert!(!subset.contains(&InteractionState::Disabled));
        assert_eq!(subset.len(), 3);
    }

    #[test]
    fn test_widget_state_accessors() {
        let plain = WidgetState::Plain(InteractionState::Hovered);
        assert_eq!(plain.interaction(), InteractionState::Hovered);
        assert!(!plain.is_selected());

        let toggle = WidgetState::Toggle {
            selected: true,
            state: InteractionState::Pressed,
        };
        assert_eq!(toggle.interaction(), InteractionState::Pressed);
        assert!(toggle.is_selected());
    }

    #[test]
    fn test_widget_state_from_interaction() {
        let state: WidgetState = InteractionState::Enabled.into();
        assert_eq!(state, WidgetState::Plain(InteractionState::Enabled));
    }
}
