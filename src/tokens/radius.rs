//! Corner radius scale.
//!
//! Seven named steps plus `Full`, the effectively-infinite pill radius.

/// Symbolic corner radius.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Radius {
    None,
    ExtraSmall,
    Small,
    Medium,
    Large,
    OverLarge,
    ExtraLarge,
    /// Pill shape - large enough to round any practical component.
    Full,
}

impl Radius {
    /// Literal value in rem.
    pub const fn rem(self) -> f32 {
        match self {
            Self::None => 0.0,
            Self::ExtraSmall => 0.25,
            Self::Small => 0.5,
            Self::Medium => 0.75,
            Self::Large => 1.0,
            Self::OverLarge => 1.25,
            Self::ExtraLarge => 1.5,
            Self::Full => 62.5,
        }
    }

    /// All steps, smallest first.
    pub const fn all() -> &'static [Radius] {
        &[
            Self::None,
            Self::ExtraSmall,
            Self::Small,
            Self::Medium,
            Self::Large,
            Self::OverLarge,
            Self::ExtraLarge,
            Self::Full,
        ]
    }
}
