//! Response verbosity tiers and the projection trait.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use oasis_core::StrEnum;

/// How much of an entity a response carries. Tiers are cumulative:
/// `minimum ⊆ regular ⊆ extended`.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, ToSchema,
)]
#[serde(rename_all = "lowercase")]
pub enum Verbosity {
    Minimum,
    #[default]
    Regular,
    Extended,
}

impl StrEnum for Verbosity {
    const VARIANTS: &'static [Self] = &[Self::Minimum, Self::Regular, Self::Extended];

    fn as_str(&self) -> &'static str {
        match self {
            Self::Minimum => "minimum",
            Self::Regular => "regular",
            Self::Extended => "extended",
        }
    }
}

/// A fully populated entity that can be cut down to a verbosity tier.
pub trait Project {
    type View: Serialize;

    /// The fields of `self` declared at or below `verbosity`, and no others.
    fn project(&self, verbosity: Verbosity) -> Self::View;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_regular() {
        assert_eq!(Verbosity::default(), Verbosity::Regular);
    }

    #[test]
    fn tiers_are_ordered() {
        assert!(Verbosity::Minimum < Verbosity::Regular);
        assert!(Verbosity::Regular < Verbosity::Extended);
    }

    #[test]
    fn expected_choice_matches_error_wording() {
        assert_eq!(
            Verbosity::expected_choice(),
            "'minimum', 'regular' or 'extended'"
        );
        assert_eq!(Verbosity::parse_str("extended"), Some(Verbosity::Extended));
        assert_eq!(Verbosity::parse_str("full"), None);
    }
}
