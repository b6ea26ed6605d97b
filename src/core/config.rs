//! Simulation configuration.
//!
//! `SimConfig` selects the outcome model and carries its tuning:
//! - `RateCoefficients`: scale factors of the rating formulas
//! - `ClampBounds`: plausible range of each rate before renormalisation
//! - `rating_weight`: how strongly ratings move league rates (blended model)
//!
//! Every field has a default, so a config file only needs the keys it
//! changes.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use super::error::{Result, SimError};
use super::rng::SimRng;
use crate::sim::{BlendedModel, ClampedRatingModel, LeagueRateModel, LeagueRates, OutcomeModel};

/// Which outcome model resolves plate appearances.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ModelKind {
    /// Rating formulas with clamping; four outcomes.
    #[default]
    Clamped,
    /// Empirical league rates per platoon split; eight outcomes.
    League,
    /// League rates scaled by rating-derived multipliers; eight outcomes.
    Blended,
}

/// Inclusive range a rate is clamped into.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct RateBounds {
    pub min: f64,
    pub max: f64,
}

impl RateBounds {
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Bound `value` into `[min, max]`.
    #[must_use]
    pub fn clamp(&self, value: f64) -> f64 {
        self.min.max(self.max.min(value))
    }

    fn validate(&self, name: &str) -> Result<()> {
        let ordered = self.min.is_finite() && self.max.is_finite() && self.min <= self.max;
        if ordered && self.min >= 0.0 && self.max <= 1.0 {
            Ok(())
        } else {
            Err(SimError::InvalidConfig(format!(
                "{name} bounds [{}, {}] must be ordered within [0, 1]",
                self.min, self.max
            )))
        }
    }
}

/// Clamp ranges for each rate.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClampBounds {
    pub walk: RateBounds,
    pub strikeout: RateBounds,
    pub home_run: RateBounds,
    pub in_play: RateBounds,
}

impl Default for ClampBounds {
    fn default() -> Self {
        Self::STANDARD
    }
}

impl ClampBounds {
    /// Ranges that keep every outcome between rare and common.
    pub const STANDARD: Self = Self {
        walk: RateBounds::new(0.02, 0.18),
        strikeout: RateBounds::new(0.08, 0.38),
        home_run: RateBounds::new(0.005, 0.10),
        in_play: RateBounds::new(0.35, 0.90),
    };

    pub fn validate(&self) -> Result<()> {
        self.walk.validate("walk")?;
        self.strikeout.validate("strikeout")?;
        self.home_run.validate("home_run")?;
        self.in_play.validate("in_play")?;

        // Smallest possible total after clamping must stay positive.
        let floor = self.walk.min + self.strikeout.min + self.home_run.min + self.in_play.min;
        if floor <= 0.0 {
            return Err(SimError::InvalidConfig(
                "clamp lower bounds must not all be zero".to_string(),
            ));
        }
        Ok(())
    }
}

/// Coefficients of the rating formulas.
///
/// ```text
/// walk      = walk_scale * eye * (1 - control * walk_control_weight)
/// strikeout = strikeout_scale * (1 - contact * strikeout_contact_weight)
///                             * (strikeout_stuff_floor + stuff * strikeout_stuff_weight)
/// home_run  = home_run_scale * power * (1 - movement * home_run_movement_weight)
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RateCoefficients {
    pub walk_scale: f64,
    pub walk_control_weight: f64,
    pub strikeout_scale: f64,
    pub strikeout_contact_weight: f64,
    pub strikeout_stuff_floor: f64,
    pub strikeout_stuff_weight: f64,
    pub home_run_scale: f64,
    pub home_run_movement_weight: f64,
}

impl Default for RateCoefficients {
    fn default() -> Self {
        Self::STANDARD
    }
}

impl RateCoefficients {
    pub const STANDARD: Self = Self {
        walk_scale: 0.12,
        walk_control_weight: 0.8,
        strikeout_scale: 0.24,
        strikeout_contact_weight: 0.8,
        strikeout_stuff_floor: 0.3,
        strikeout_stuff_weight: 0.7,
        home_run_scale: 0.04,
        home_run_movement_weight: 0.7,
    };

    pub fn validate(&self) -> Result<()> {
        let fields = [
            ("walk_scale", self.walk_scale),
            ("walk_control_weight", self.walk_control_weight),
            ("strikeout_scale", self.strikeout_scale),
            ("strikeout_contact_weight", self.strikeout_contact_weight),
            ("strikeout_stuff_floor", self.strikeout_stuff_floor),
            ("strikeout_stuff_weight", self.strikeout_stuff_weight),
            ("home_run_scale", self.home_run_scale),
            ("home_run_movement_weight", self.home_run_movement_weight),
        ];
        for (name, value) in fields {
            if !value.is_finite() || value < 0.0 {
                return Err(SimError::InvalidConfig(format!(
                    "coefficient {name} must be a non-negative number, got {value}"
                )));
            }
        }
        // A weight above one would let a rating push its factor below zero.
        for (name, value) in [
            ("walk_control_weight", self.walk_control_weight),
            ("strikeout_contact_weight", self.strikeout_contact_weight),
            ("home_run_movement_weight", self.home_run_movement_weight),
        ] {
            if value > 1.0 {
                return Err(SimError::InvalidConfig(format!(
                    "coefficient {name} must not exceed 1.0, got {value}"
                )));
            }
        }
        Ok(())
    }
}

/// Top-level simulation configuration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    /// Seed for the simulation stream. `None` draws one from entropy.
    pub seed: Option<u64>,

    /// Outcome model to resolve plate appearances with.
    pub model: ModelKind,

    /// Rating formula coefficients (clamped and blended models).
    pub coefficients: RateCoefficients,

    /// Clamp ranges (clamped and blended models).
    pub bounds: ClampBounds,

    /// Weight of rating adjustments over league rates, in [0, 1].
    /// 0 reproduces the league tables, 1 applies the full rating ratio.
    pub rating_weight: f64,

    /// JSON file with `same` and `opposite` league rate tables.
    /// Built-in tables are used when absent.
    pub league_rates_path: Option<PathBuf>,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed: None,
            model: ModelKind::Clamped,
            coefficients: RateCoefficients::default(),
            bounds: ClampBounds::default(),
            rating_weight: 1.0,
            league_rates_path: None,
        }
    }
}

impl SimConfig {
    /// Parse a JSON config.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: SimConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read a JSON config file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let config = Self::from_json_str(&json)?;
        debug!(path = %path.display(), model = ?config.model, "loaded simulation config");
        Ok(config)
    }

    /// Create a new config with a fixed seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Create a new config with a different outcome model.
    pub fn with_model(mut self, model: ModelKind) -> Self {
        self.model = model;
        self
    }

    /// Create a new config with custom clamp bounds.
    pub fn with_bounds(mut self, bounds: ClampBounds) -> Self {
        self.bounds = bounds;
        self
    }

    /// Create a new config with custom formula coefficients.
    pub fn with_coefficients(mut self, coefficients: RateCoefficients) -> Self {
        self.coefficients = coefficients;
        self
    }

    /// Create a new config with a different rating weight.
    pub fn with_rating_weight(mut self, weight: f64) -> Self {
        self.rating_weight = weight;
        self
    }

    /// Create a new config reading league rates from a file.
    pub fn with_league_rates_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.league_rates_path = Some(path.into());
        self
    }

    pub fn validate(&self) -> Result<()> {
        self.coefficients.validate()?;
        self.bounds.validate()?;
        if !(0.0..=1.0).contains(&self.rating_weight) {
            return Err(SimError::InvalidConfig(format!(
                "rating_weight must be within [0, 1], got {}",
                self.rating_weight
            )));
        }
        Ok(())
    }

    /// League rate tables: the configured file, or the built-in tables.
    pub fn league_rates(&self) -> Result<LeagueRates> {
        match &self.league_rates_path {
            Some(path) => LeagueRates::from_file(path),
            None => Ok(LeagueRates::default()),
        }
    }

    /// Build the configured outcome model.
    pub fn build_model(&self) -> Result<Box<dyn OutcomeModel>> {
        self.validate()?;

        let clamped = ClampedRatingModel::new(self.coefficients, self.bounds);
        let model: Box<dyn OutcomeModel> = match self.model {
            ModelKind::Clamped => Box::new(clamped),
            ModelKind::League => Box::new(LeagueRateModel::try_new(&self.league_rates()?)?),
            ModelKind::Blended => Box::new(BlendedModel::try_new(
                self.league_rates()?,
                clamped,
                self.rating_weight,
            )?),
        };

        debug!(model = model.name(), "outcome model built");
        Ok(model)
    }

    /// Build the simulation stream.
    pub fn build_rng(&self) -> SimRng {
        match self.seed {
            Some(seed) => SimRng::new(seed),
            None => {
                let rng = SimRng::from_entropy();
                info!(seed = rng.seed(), "simulation seeded from entropy");
                rng
            }
        }
    }
}
