//! League rates adjusted by player ratings.
//!
//! The platoon table supplies the baseline for all eight outcomes. The
//! rating formulas of [`ClampedRatingModel`] are evaluated twice, once for
//! the actual matchup and once for a league-average matchup (every rating
//! 0.5), and their ratio scales the table's walk, strikeout and home-run
//! rates:
//!
//! ```text
//! multiplier = 1 + weight * (rate(matchup) / rate(average) - 1)
//! ```
//!
//! Adjusted rates are clamped with the model's bounds. Hit-by-pitch keeps
//! its league rate. The remaining mass, clamped into the in-play bounds, is
//! shared among singles, doubles, triples and outs in league proportions.

use super::clamped::{ClampedRatingModel, FourWayRates};
use super::league::LeagueRates;
use super::model::{Matchup, OutcomeModel};
use super::outcome::{Outcome, OutcomeDistribution};
use crate::core::Result;
use crate::players::{BatterRatings, PitcherRatings};

/// League tables blended with rating-derived multipliers.
#[derive(Clone, Debug)]
pub struct BlendedModel {
    rates: LeagueRates,
    ratings: ClampedRatingModel,
    weight: f64,
    reference: FourWayRates,
}

impl BlendedModel {
    /// `weight` in [0, 1]: 0 ignores ratings, 1 applies the full ratio.
    ///
    /// Panics if a table has a negative rate or no mass; see
    /// [`try_new`](Self::try_new).
    pub fn new(rates: LeagueRates, ratings: ClampedRatingModel, weight: f64) -> Self {
        Self::try_new(rates, ratings, weight)
            .unwrap_or_else(|e| panic!("league rates cannot be blended: {e}"))
    }

    /// Checks and renormalises both tables before blending.
    pub fn try_new(rates: LeagueRates, ratings: ClampedRatingModel, weight: f64) -> Result<Self> {
        let rates = LeagueRates::new(rates.same, rates.opposite)?;
        let reference =
            ratings.clamped_rates(&BatterRatings::uniform(0.5), &PitcherRatings::uniform(0.5));
        Ok(Self {
            rates,
            ratings,
            weight: weight.clamp(0.0, 1.0),
            reference,
        })
    }

    #[must_use]
    pub fn weight(&self) -> f64 {
        self.weight
    }

    fn multiplier(&self, rate: f64, reference: f64) -> f64 {
        if reference <= 0.0 {
            return 1.0;
        }
        1.0 + self.weight * (rate / reference - 1.0)
    }
}

impl Default for BlendedModel {
    fn default() -> Self {
        Self::new(LeagueRates::default(), ClampedRatingModel::default(), 1.0)
    }
}

impl OutcomeModel for BlendedModel {
    fn name(&self) -> &'static str {
        "blended"
    }

    fn distribution(&self, matchup: &Matchup<'_>) -> OutcomeDistribution {
        let table = self.rates.for_platoon(matchup.platoon);
        let player = self.ratings.clamped_rates(matchup.batter, matchup.pitcher);
        let bounds = self.ratings.bounds();
        let reference = &self.reference;

        let walk = bounds.walk.clamp(table.walk * self.multiplier(player.walk, reference.walk));
        let strikeout = bounds
            .strikeout
            .clamp(table.strikeout * self.multiplier(player.strikeout, reference.strikeout));
        let home_run = bounds
            .home_run
            .clamp(table.home_run * self.multiplier(player.home_run, reference.home_run));
        let hit_by_pitch = table.hit_by_pitch;

        let in_play = bounds
            .in_play
            .clamp(1.0 - walk - hit_by_pitch - strikeout - home_run);

        let league_in_play = table.balls_in_play();
        let (single, double, triple, out) = if league_in_play > 0.0 {
            let scale = in_play / league_in_play;
            (
                table.single * scale,
                table.double * scale,
                table.triple * scale,
                table.out * scale,
            )
        } else {
            (0.0, 0.0, 0.0, in_play)
        };

        OutcomeDistribution::from_weights([
            (Outcome::Walk, walk),
            (Outcome::HitByPitch, hit_by_pitch),
            (Outcome::Single, single),
            (Outcome::Double, double),
            (Outcome::Triple, triple),
            (Outcome::HomeRun, home_run),
            (Outcome::Strikeout, strikeout),
            (Outcome::Out, out),
        ])
        .unwrap_or_else(|e| panic!("blended rates do not form a distribution: {e}"))
    }
}
