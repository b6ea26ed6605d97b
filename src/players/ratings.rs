//! Rating groups.
//!
//! Every rating is an `f64` on a normalized [0, 1] scale, 0.5 being a
//! league-average player. Groups are flat records so the resolver can read
//! fields directly; validation lives here so a roster loader can reject bad
//! data before any plate appearance is simulated.

use serde::{Deserialize, Serialize};

use crate::core::{Result, SimError};

/// Check one rating value is finite and within [0, 1].
pub(crate) fn check_rating(player: &str, field: &'static str, value: f64) -> Result<()> {
    if value.is_finite() && (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(SimError::RatingOutOfRange {
            player: player.to_string(),
            field,
            value,
        })
    }
}

/// A rating group as it stands today and as projected at peak.
///
/// Simulation reads `current`; `potential` is carried for development
/// and scouting tools.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Ratings<T> {
    pub current: T,
    pub potential: T,
}

impl<T: Clone> Ratings<T> {
    /// Ratings whose potential equals the current values.
    pub fn new(current: T) -> Self {
        Self {
            potential: current.clone(),
            current,
        }
    }
}

impl<T> Ratings<T> {
    /// Set the projected ratings.
    #[must_use]
    pub fn with_potential(mut self, potential: T) -> Self {
        self.potential = potential;
        self
    }
}

/// Hitting ratings.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct BatterRatings {
    pub contact: f64,
    pub power: f64,
    pub eye: f64,
    pub speed: f64,
    pub ground_ball_tendency: f64,
    pub fly_ball_tendency: f64,
}

impl BatterRatings {
    /// Every rating set to `value`.
    pub const fn uniform(value: f64) -> Self {
        Self {
            contact: value,
            power: value,
            eye: value,
            speed: value,
            ground_ball_tendency: value,
            fly_ball_tendency: value,
        }
    }

    pub fn validate(&self, player: &str) -> Result<()> {
        check_rating(player, "batter.contact", self.contact)?;
        check_rating(player, "batter.power", self.power)?;
        check_rating(player, "batter.eye", self.eye)?;
        check_rating(player, "batter.speed", self.speed)?;
        check_rating(player, "batter.ground_ball_tendency", self.ground_ball_tendency)?;
        check_rating(player, "batter.fly_ball_tendency", self.fly_ball_tendency)
    }
}

impl Default for BatterRatings {
    fn default() -> Self {
        Self::uniform(0.5)
    }
}

/// Pitching ratings. Absent for position players.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct PitcherRatings {
    pub stuff: f64,
    pub control: f64,
    pub movement: f64,
    pub stamina: f64,
}

impl PitcherRatings {
    /// Every rating set to `value`.
    pub const fn uniform(value: f64) -> Self {
        Self {
            stuff: value,
            control: value,
            movement: value,
            stamina: value,
        }
    }

    pub fn validate(&self, player: &str) -> Result<()> {
        check_rating(player, "pitcher.stuff", self.stuff)?;
        check_rating(player, "pitcher.control", self.control)?;
        check_rating(player, "pitcher.movement", self.movement)?;
        check_rating(player, "pitcher.stamina", self.stamina)
    }
}

impl Default for PitcherRatings {
    fn default() -> Self {
        Self::uniform(0.5)
    }
}

/// Fielding ratings.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct DefenseRatings {
    pub range: f64,
    pub hands: f64,
    pub infield_arm: f64,
    /// Combined arm strength and accuracy from the outfield.
    pub outfield_arm: f64,
    pub double_play: f64,
}

impl DefenseRatings {
    /// Every rating set to `value`.
    pub const fn uniform(value: f64) -> Self {
        Self {
            range: value,
            hands: value,
            infield_arm: value,
            outfield_arm: value,
            double_play: value,
        }
    }

    pub fn validate(&self, player: &str) -> Result<()> {
        check_rating(player, "defense.range", self.range)?;
        check_rating(player, "defense.hands", self.hands)?;
        check_rating(player, "defense.infield_arm", self.infield_arm)?;
        check_rating(player, "defense.outfield_arm", self.outfield_arm)?;
        check_rating(player, "defense.double_play", self.double_play)
    }
}

impl Default for DefenseRatings {
    fn default() -> Self {
        Self::uniform(0.5)
    }
}

/// Catching ratings. Only present for players who can catch.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct CatcherRatings {
    pub framing: f64,
    pub blocking: f64,
    pub pop_time: f64,
    pub game_call: f64,
}

impl CatcherRatings {
    /// Every rating set to `value`.
    pub const fn uniform(value: f64) -> Self {
        Self {
            framing: value,
            blocking: value,
            pop_time: value,
            game_call: value,
        }
    }

    pub fn validate(&self, player: &str) -> Result<()> {
        check_rating(player, "catcher.framing", self.framing)?;
        check_rating(player, "catcher.blocking", self.blocking)?;
        check_rating(player, "catcher.pop_time", self.pop_time)?;
        check_rating(player, "catcher.game_call", self.game_call)
    }
}

impl Default for CatcherRatings {
    fn default() -> Self {
        Self::uniform(0.5)
    }
}
