//! Plate appearance resolution.
//!
//! A `PlateAppearance` borrows a batter, a pitcher and the simulation
//! stream, builds the outcome distribution once, and then resolves as many
//! times as the caller asks. Each [`resolve`](PlateAppearance::resolve)
//! consumes exactly one uniform draw.
//!
//! ```
//! use baseball_sim::core::SimRng;
//! use baseball_sim::players::{PitcherRatings, Player};
//! use baseball_sim::sim::PlateAppearance;
//!
//! let batter = Player::builder("Batter").build();
//! let pitcher = Player::builder("Pitcher").pitching(PitcherRatings::default()).build();
//! let mut rng = SimRng::new(42);
//!
//! let mut pa = PlateAppearance::new(&batter, &pitcher, &mut rng).unwrap();
//! let outcome = pa.resolve();
//! assert!(pa.distribution().probability(outcome) > 0.0);
//! ```

use tracing::trace;

use super::clamped::ClampedRatingModel;
use super::model::{Matchup, OutcomeModel, Platoon};
use super::outcome::{Outcome, OutcomeDistribution, OutcomeTally};
use crate::core::{Result, SimError, SimRng, UniformSource};
use crate::players::Player;

static STANDARD_MODEL: ClampedRatingModel = ClampedRatingModel::STANDARD;

/// One batter-versus-pitcher confrontation.
pub struct PlateAppearance<'a, R: UniformSource + ?Sized = SimRng> {
    batter: &'a Player,
    pitcher: &'a Player,
    platoon: Platoon,
    model: &'a dyn OutcomeModel,
    distribution: OutcomeDistribution,
    rng: &'a mut R,
}

impl<'a, R: UniformSource + ?Sized> PlateAppearance<'a, R> {
    /// Set up a plate appearance with the standard clamped rating model.
    pub fn new(batter: &'a Player, pitcher: &'a Player, rng: &'a mut R) -> Result<Self> {
        Self::with_model(batter, pitcher, rng, &STANDARD_MODEL)
    }

    /// Set up a plate appearance resolved by `model`.
    ///
    /// Fails when the pitcher has no pitcher ratings, or when a rating the
    /// models read lies outside [0, 1].
    pub fn with_model(
        batter: &'a Player,
        pitcher: &'a Player,
        rng: &'a mut R,
        model: &'a dyn OutcomeModel,
    ) -> Result<Self> {
        let pitching = pitcher
            .pitching
            .as_ref()
            .ok_or_else(|| SimError::MissingPitcherRatings {
                player: pitcher.name.clone(),
            })?;

        let bat = &batter.batting.current;
        let pit = &pitching.current;
        bat.validate(&batter.name)?;
        pit.validate(&pitcher.name)?;

        let platoon = Platoon::of(batter.bats, pitcher.throws);
        let distribution = model.distribution(&Matchup::new(bat, pit, platoon));

        Ok(Self {
            batter,
            pitcher,
            platoon,
            model,
            distribution,
            rng,
        })
    }

    /// Draw one variate and return the outcome it selects.
    pub fn resolve(&mut self) -> Outcome {
        let u = self.rng.uniform();
        let outcome = self.distribution.sample(u);
        trace!(
            batter = %self.batter.name,
            pitcher = %self.pitcher.name,
            model = self.model.name(),
            u,
            %outcome,
            "plate appearance resolved"
        );
        outcome
    }

    /// Resolve `n` times in a row and count the outcomes.
    pub fn resolve_many(&mut self, n: usize) -> OutcomeTally {
        (0..n).map(|_| self.resolve()).collect()
    }

    /// The distribution outcomes are sampled from. Consumes no randomness.
    #[must_use]
    pub fn distribution(&self) -> &OutcomeDistribution {
        &self.distribution
    }

    #[must_use]
    pub fn platoon(&self) -> Platoon {
        self.platoon
    }

    #[must_use]
    pub fn batter(&self) -> &Player {
        self.batter
    }

    #[must_use]
    pub fn pitcher(&self) -> &Player {
        self.pitcher
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::players::{BatterRatings, Handedness, PitcherRatings};

    /// Replays a fixed list of variates.
    struct Scripted {
        values: Vec<f64>,
        next: usize,
    }

    impl Scripted {
        fn new(values: &[f64]) -> Self {
            Self {
                values: values.to_vec(),
                next: 0,
            }
        }
    }

    impl UniformSource for Scripted {
        fn uniform(&mut self) -> f64 {
            let u = self.values[self.next % self.values.len()];
            self.next += 1;
            u
        }
    }

    fn average_pair() -> (Player, Player) {
        let batter = Player::builder("Batter").build();
        let pitcher = Player::builder("Pitcher")
            .pitching(PitcherRatings::uniform(0.5))
            .build();
        (batter, pitcher)
    }

    #[test]
    fn test_average_matchup_in_play_at_half() {
        let (batter, pitcher) = average_pair();
        let mut rng = Scripted::new(&[0.5]);
        let mut pa = PlateAppearance::new(&batter, &pitcher, &mut rng).unwrap();
        assert_eq!(pa.resolve(), Outcome::InPlay);
    }

    #[test]
    fn test_segments_for_average_matchup() {
        // walk 0.036, strikeout 0.0936, home run 0.013, in play 0.8574
        let (batter, pitcher) = average_pair();
        let mut rng = Scripted::new(&[0.0, 0.035, 0.037, 0.128, 0.131, 0.141, 0.144, 0.999]);
        let mut pa = PlateAppearance::new(&batter, &pitcher, &mut rng).unwrap();

        let outcomes: Vec<_> = (0..8).map(|_| pa.resolve()).collect();
        assert_eq!(
            outcomes,
            vec![
                Outcome::Walk,
                Outcome::Walk,
                Outcome::Strikeout,
                Outcome::Strikeout,
                Outcome::HomeRun,
                Outcome::HomeRun,
                Outcome::InPlay,
                Outcome::InPlay,
            ]
        );
    }

    #[test]
    fn test_each_resolve_consumes_one_draw() {
        let (batter, pitcher) = average_pair();
        let mut rng = Scripted::new(&[0.9]);
        {
            let mut pa = PlateAppearance::new(&batter, &pitcher, &mut rng).unwrap();
            pa.resolve();
            pa.resolve();
            let _ = pa.distribution();
            pa.resolve();
        }
        assert_eq!(rng.next, 3);
    }

    #[test]
    fn test_position_player_cannot_pitch() {
        let batter = Player::builder("Batter").build();
        let shortstop = Player::builder("Shortstop").build();
        let mut rng = SimRng::new(1);

        let err = PlateAppearance::new(&batter, &shortstop, &mut rng).err().unwrap();
        assert!(matches!(err, SimError::MissingPitcherRatings { player } if player == "Shortstop"));
    }

    #[test]
    fn test_out_of_range_rating_rejected() {
        let batter = Player::builder("Batter")
            .batting(BatterRatings {
                power: 1.3,
                ..BatterRatings::default()
            })
            .build();
        let pitcher = Player::builder("Pitcher")
            .pitching(PitcherRatings::default())
            .build();
        let mut rng = SimRng::new(1);

        let err = PlateAppearance::new(&batter, &pitcher, &mut rng).err().unwrap();
        assert!(matches!(err, SimError::RatingOutOfRange { field: "batter.power", .. }));
    }

    #[test]
    fn test_platoon_from_handedness() {
        let lefty_bat = Player::builder("L").bats(Handedness::Left).build();
        let lefty_arm = Player::builder("LHP")
            .throws(Handedness::Left)
            .pitching(PitcherRatings::default())
            .build();
        let mut rng = SimRng::new(1);

        let pa = PlateAppearance::new(&lefty_bat, &lefty_arm, &mut rng).unwrap();
        assert_eq!(pa.platoon(), Platoon::Same);
        assert_eq!(pa.batter().name, "L");
        assert_eq!(pa.pitcher().name, "LHP");
    }

    #[test]
    fn test_resolve_many_counts_every_draw() {
        let (batter, pitcher) = average_pair();
        let mut rng = SimRng::new(11);
        let mut pa = PlateAppearance::new(&batter, &pitcher, &mut rng).unwrap();

        let tally = pa.resolve_many(500);
        assert_eq!(tally.total(), 500);
        assert_eq!(tally.count(Outcome::Single), 0);
    }
}
