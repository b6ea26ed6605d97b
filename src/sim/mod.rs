//! Plate appearance simulation.
//!
//! This module turns a batter-versus-pitcher matchup into an outcome:
//! - **Outcome models** map ratings (and platoon split) to an
//!   [`OutcomeDistribution`]; pick one per simulation via
//!   [`SimConfig`](crate::core::SimConfig)
//! - **Resolution** draws one uniform variate per plate appearance and
//!   selects the outcome segment containing it
//!
//! ## Example Usage
//!
//! ```
//! use baseball_sim::core::SimRng;
//! use baseball_sim::players::{BatterRatings, Handedness, PitcherRatings, Player};
//! use baseball_sim::sim::{BlendedModel, Outcome, PlateAppearance};
//!
//! let slugger = Player::builder("Slugger")
//!     .bats(Handedness::Left)
//!     .batting(BatterRatings { power: 0.95, ..BatterRatings::default() })
//!     .build();
//! let ace = Player::builder("Ace")
//!     .pitching(PitcherRatings { stuff: 0.9, ..PitcherRatings::default() })
//!     .build();
//!
//! let model = BlendedModel::default();
//! let mut rng = SimRng::new(2024);
//! let mut pa = PlateAppearance::with_model(&slugger, &ace, &mut rng, &model).unwrap();
//!
//! let tally = pa.resolve_many(1_000);
//! assert_eq!(tally.total(), 1_000);
//! assert_eq!(tally.count(Outcome::InPlay), 0);
//! ```

mod blended;
mod clamped;
mod league;
mod model;
mod outcome;
mod plate_appearance;

pub use blended::BlendedModel;
pub use clamped::{ClampedRatingModel, FourWayRates};
pub use league::{LeagueRateModel, LeagueRates, OutcomeRates};
pub use model::{Matchup, OutcomeModel, Platoon};
pub use outcome::{Outcome, OutcomeDistribution, OutcomeTally};
pub use plate_appearance::PlateAppearance;
