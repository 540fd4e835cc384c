//! Spacing scale.
//!
//! Eleven steps from zero to 6rem. Components reference steps by name; the
//! literal values live here and nowhere else.

/// Symbolic spacing step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Spacing {
    None,
    ExtraSmall,
    Small,
    SmallMedium,
    Medium,
    Large,
    ExtraLarge,
    XxLarge,
    XxxLarge,
    XxxxLarge,
    XxxxxLarge,
}

impl Spacing {
    /// Literal value in rem.
    pub const fn rem(self) -> f32 {
        match self {
            Self::None => 0.0,
            Self::ExtraSmall => 0.25,
            Self::Small => 0.5,
            Self::SmallMedium => 0.75,
            Self::Medium => 1.0,
            Self::Large => 1.5,
            Self::ExtraLarge => 2.0,
            Self::XxLarge => 3.0,
            Self::XxxLarge => 3.5,
            Self::XxxxLarge => 4.5,
            Self::XxxxxLarge => 6.0,
        }
    }

    /// All steps, smallest first.
    pub const fn all() -> &'static [Spacing] {
        &[
            Self::None,
            Self::ExtraSmall,
            Self::Small,
            Self::SmallMedium,
            Self::Medium,
            Self::Large,
            Self::ExtraLarge,
            Self::XxLarge,
            Self::XxxLarge,
            Self::XxxxLarge,
            Self::XxxxxLarge,
        ]
    }
}

// Scale sanity: endpoints pinned at compile time.
const _: () = {
    assert!(Spacing::None.rem() == 0.0);
    assert!(Spacing::XxxxxLarge.rem() == 6.0);
};
