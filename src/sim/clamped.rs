//! Rating-formula outcome model.
//!
//! Four steps per matchup:
//! 1. Raw walk, strikeout and home-run rates from the rating formulas
//! 2. Each rate clamped into its plausible range
//! 3. The rest of the mass goes to balls in play, itself clamped
//! 4. All four renormalised to sum to one
//!
//! Sampling order is walk, strikeout, home run, in play.

use serde::{Deserialize, Serialize};

use super::model::{Matchup, OutcomeModel};
use super::outcome::{Outcome, OutcomeDistribution};
use crate::core::{ClampBounds, RateCoefficients};
use crate::players::{BatterRatings, PitcherRatings};

/// Walk, strikeout, home-run and in-play rates before renormalisation.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct FourWayRates {
    pub walk: f64,
    pub strikeout: f64,
    pub home_run: f64,
    pub in_play: f64,
}

impl FourWayRates {
    #[must_use]
    pub fn total(&self) -> f64 {
        self.walk + self.strikeout + self.home_run + self.in_play
    }
}

/// The clamped rating-formula model.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ClampedRatingModel {
    coefficients: RateCoefficients,
    bounds: ClampBounds,
}

impl ClampedRatingModel {
    /// Standard coefficients and bounds.
    pub const STANDARD: Self = Self::new(RateCoefficients::STANDARD, ClampBounds::STANDARD);

    pub const fn new(coefficients: RateCoefficients, bounds: ClampBounds) -> Self {
        Self {
            coefficients,
            bounds,
        }
    }

    pub fn coefficients(&self) -> &RateCoefficients {
        &self.coefficients
    }

    pub fn bounds(&self) -> &ClampBounds {
        &self.bounds
    }

    /// Step 1: unclamped formula rates. `in_play` is the plain residual.
    #[must_use]
    pub fn raw_rates(&self, bat: &BatterRatings, pit: &PitcherRatings) -> FourWayRates {
        let c = &self.coefficients;

        let walk = c.walk_scale * bat.eye * (1.0 - pit.control * c.walk_control_weight);
        let strikeout = c.strikeout_scale
            * (1.0 - bat.contact * c.strikeout_contact_weight)
            * (c.strikeout_stuff_floor + pit.stuff * c.strikeout_stuff_weight);
        let home_run =
            c.home_run_scale * bat.power * (1.0 - pit.movement * c.home_run_movement_weight);

        FourWayRates {
            walk,
            strikeout,
            home_run,
            in_play: 1.0 - walk - strikeout - home_run,
        }
    }

    /// Steps 1-3: rates after clamping, before renormalisation.
    #[must_use]
    pub fn clamped_rates(&self, bat: &BatterRatings, pit: &PitcherRatings) -> FourWayRates {
        let raw = self.raw_rates(bat, pit);
        let b = &self.bounds;

        let walk = b.walk.clamp(raw.walk);
        let strikeout = b.strikeout.clamp(raw.strikeout);
        let home_run = b.home_run.clamp(raw.home_run);
        let in_play = b.in_play.clamp(1.0 - walk - strikeout - home_run);

        FourWayRates {
            walk,
            strikeout,
            home_run,
            in_play,
        }
    }
}

impl OutcomeModel for ClampedRatingModel {
    fn name(&self) -> &'static str {
        "clamped"
    }

    fn distribution(&self, matchup: &Matchup<'_>) -> OutcomeDistribution {
        let rates = self.clamped_rates(matchup.batter, matchup.pitcher);

        OutcomeDistribution::from_weights([
            (Outcome::Walk, rates.walk),
            (Outcome::Strikeout, rates.strikeout),
            (Outcome::HomeRun, rates.home_run),
            (Outcome::InPlay, rates.in_play),
        ])
        .unwrap_or_else(|e| panic!("clamped rates {rates:?} do not form a distribution: {e}"))
    }
}
