//! Outcome models: how a matchup becomes a probability distribution.
//!
//! Models are trait-based so a simulation can swap strategies by
//! configuration:
//! - [`ClampedRatingModel`](super::ClampedRatingModel): walk, strikeout and
//!   home-run rates from ratings, everything else in play
//! - [`LeagueRateModel`](super::LeagueRateModel): empirical league rates for
//!   the platoon split, ignoring ratings
//! - [`BlendedModel`](super::BlendedModel): league rates adjusted by ratings

use serde::{Deserialize, Serialize};

use super::outcome::OutcomeDistribution;
use crate::players::{BatterRatings, Handedness, PitcherRatings};

/// Whether batter and pitcher work from the same side.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Platoon {
    Same,
    Opposite,
}

impl Platoon {
    /// Platoon split for a batter's and pitcher's handedness.
    ///
    /// A switch hitter always takes the opposite side. A switch pitcher
    /// facing a one-sided batter throws from the same side.
    #[must_use]
    pub fn of(bats: Handedness, throws: Handedness) -> Platoon {
        match (bats, throws) {
            (Handedness::Switch, _) => Platoon::Opposite,
            (_, Handedness::Switch) => Platoon::Same,
            (b, t) if b == t => Platoon::Same,
            _ => Platoon::Opposite,
        }
    }
}

/// The inputs a model sees for one plate appearance.
#[derive(Clone, Copy, Debug)]
pub struct Matchup<'a> {
    pub batter: &'a BatterRatings,
    pub pitcher: &'a PitcherRatings,
    pub platoon: Platoon,
}

impl<'a> Matchup<'a> {
    pub fn new(batter: &'a BatterRatings, pitcher: &'a PitcherRatings, platoon: Platoon) -> Self {
        Self {
            batter,
            pitcher,
            platoon,
        }
    }
}

/// Strategy turning a matchup into an outcome distribution.
///
/// Implementations are pure: the same matchup always yields the same
/// distribution, and no randomness is consumed here.
pub trait OutcomeModel: Send + Sync {
    /// Short name for logs and diagnostics.
    fn name(&self) -> &'static str;

    /// Outcome distribution for a matchup. Entry order is the sampling order.
    fn distribution(&self, matchup: &Matchup<'_>) -> OutcomeDistribution;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_platoon_of() {
        use Handedness::*;

        assert_eq!(Platoon::of(Left, Left), Platoon::Same);
        assert_eq!(Platoon::of(Right, Right), Platoon::Same);
        assert_eq!(Platoon::of(Left, Right), Platoon::Opposite);
        assert_eq!(Platoon::of(Right, Left), Platoon::Opposite);
        assert_eq!(Platoon::of(Switch, Left), Platoon::Opposite);
        assert_eq!(Platoon::of(Switch, Switch), Platoon::Opposite);
        assert_eq!(Platoon::of(Left, Switch), Platoon::Same);
    }
}
