//! # baseball-sim
//!
//! Rating-driven resolution of baseball plate appearances.
//!
//! Players are described by rating vectors on a [0, 1] scale. A plate
//! appearance turns the batter's and pitcher's ratings into a probability
//! distribution over outcomes and samples it with one draw from a seeded
//! random stream.
//!
//! ## Design Principles
//!
//! 1. **Deterministic**: A seed and a sequence of plate appearances fully
//!    determine every outcome. There is no hidden global generator; the
//!    stream is passed by `&mut` into each plate appearance.
//!
//! 2. **Strategy Over Convention**: The outcome model is a trait. The
//!    clamped rating formulas, empirical league tables and their blend are
//!    interchangeable and chosen by configuration.
//!
//! 3. **Read-Only Players**: Player records are built once and borrowed;
//!    optional rating groups are `Option`s, never sentinel values.
//!
//! ## Modules
//!
//! - `core`: Random streams, configuration, errors
//! - `players`: Player records and rating groups
//! - `sim`: Outcomes, outcome models, plate appearance resolution

pub mod core;
pub mod players;
pub mod sim;

// Re-export commonly used types
pub use crate::core::{
    ClampBounds, ModelKind, RateBounds, RateCoefficients, Result, SimConfig, SimError, SimRng,
    SimRngState, UniformSource,
};

pub use crate::players::{
    BatterRatings, CatcherRatings, DefenseRatings, Handedness, HitterType, Pitch, PitchType,
    PitchTypeRatings, PitcherRatings, Player, PlayerBuilder, Position, Ratings,
};

pub use crate::sim::{
    BlendedModel, ClampedRatingModel, FourWayRates, LeagueRateModel, LeagueRates, Matchup,
    Outcome, OutcomeDistribution, OutcomeModel, OutcomeRates, OutcomeTally, PlateAppearance,
    Platoon,
};
