//! Empirical league outcome rates.
//!
//! Rate tables use the same keys as the exported data files
//! (`Walk`, `HBP`, `Single`, `Double`, `Triple`, `HR`, `Strikeout`, `Out`),
//! one table per platoon split. Tables can be loaded from JSON, derived
//! from a sample of play-by-play events, or taken from the built-in
//! defaults.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::model::{Matchup, OutcomeModel, Platoon};
use super::outcome::{Outcome, OutcomeDistribution, OutcomeTally};
use crate::core::{Result, SimError};

/// A loaded table may be off from 1.0 by this much before a warning.
const TOTAL_TOLERANCE: f64 = 1e-3;

/// League-wide rate of each of the eight outcomes.
///
/// Deserialized tables are checked and renormalised, see
/// [`normalized`](Self::normalized).
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RateTable")]
pub struct OutcomeRates {
    #[serde(rename = "Walk")]
    pub walk: f64,
    #[serde(rename = "HBP")]
    pub hit_by_pitch: f64,
    #[serde(rename = "Single")]
    pub single: f64,
    #[serde(rename = "Double")]
    pub double: f64,
    #[serde(rename = "Triple")]
    pub triple: f64,
    #[serde(rename = "HR")]
    pub home_run: f64,
    #[serde(rename = "Strikeout")]
    pub strikeout: f64,
    #[serde(rename = "Out")]
    pub out: f64,
}

/// An outcome table as read from disk, before any checks.
#[derive(Deserialize)]
struct RateTable {
    #[serde(rename = "Walk")]
    walk: f64,
    #[serde(rename = "HBP")]
    hit_by_pitch: f64,
    #[serde(rename = "Single")]
    single: f64,
    #[serde(rename = "Double")]
    double: f64,
    #[serde(rename = "Triple")]
    triple: f64,
    #[serde(rename = "HR")]
    home_run: f64,
    #[serde(rename = "Strikeout")]
    strikeout: f64,
    #[serde(rename = "Out")]
    out: f64,
}

impl TryFrom<RateTable> for OutcomeRates {
    type Error = SimError;

    fn try_from(table: RateTable) -> Result<Self> {
        let rates = OutcomeRates {
            walk: table.walk,
            hit_by_pitch: table.hit_by_pitch,
            single: table.single,
            double: table.double,
            triple: table.triple,
            home_run: table.home_run,
            strikeout: table.strikeout,
            out: table.out,
        };
        rates.normalized()
    }
}

impl OutcomeRates {
    /// Rate for one of the eight table outcomes; `InPlay` has no entry.
    #[must_use]
    pub fn get(&self, outcome: Outcome) -> f64 {
        match outcome {
            Outcome::Walk => self.walk,
            Outcome::HitByPitch => self.hit_by_pitch,
            Outcome::Single => self.single,
            Outcome::Double => self.double,
            Outcome::Triple => self.triple,
            Outcome::HomeRun => self.home_run,
            Outcome::Strikeout => self.strikeout,
            Outcome::Out => self.out,
            Outcome::InPlay => 0.0,
        }
    }

    /// (outcome, rate) pairs in table order.
    pub fn entries(&self) -> [(Outcome, f64); 8] {
        Outcome::EXTENDED.map(|o| (o, self.get(o)))
    }

    #[must_use]
    pub fn total(&self) -> f64 {
        self.entries().iter().map(|(_, r)| r).sum()
    }

    /// Mass of balls put in play: singles, doubles, triples and outs.
    #[must_use]
    pub fn balls_in_play(&self) -> f64 {
        self.single + self.double + self.triple + self.out
    }

    /// Check rates are non-negative with positive total, and rescale them
    /// to sum to one.
    pub fn normalized(&self) -> Result<Self> {
        for (outcome, rate) in self.entries() {
            if !rate.is_finite() || rate < 0.0 {
                return Err(SimError::InvalidRate {
                    outcome: outcome.label(),
                    value: rate,
                });
            }
        }

        let total = self.total();
        if total <= 0.0 {
            return Err(SimError::DegenerateDistribution { total });
        }
        if (total - 1.0).abs() > TOTAL_TOLERANCE {
            warn!(total, "league rates do not sum to 1, renormalising");
        }

        Ok(Self {
            walk: self.walk / total,
            hit_by_pitch: self.hit_by_pitch / total,
            single: self.single / total,
            double: self.double / total,
            triple: self.triple / total,
            home_run: self.home_run / total,
            strikeout: self.strikeout / total,
            out: self.out / total,
        })
    }

    /// Parse one table, e.g. `{"Walk": 0.08, "HBP": 0.01, ...}`.
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Empirical rates from a sample of Statcast event names.
    pub fn from_events<I, S>(events: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let tally: OutcomeTally = events
            .into_iter()
            .map(|e| Outcome::from_event(e.as_ref()))
            .collect();
        Self::from_tally(&tally)
    }

    /// Observed rates of a tally over the eight table outcomes.
    pub fn from_tally(tally: &OutcomeTally) -> Result<Self> {
        if tally.total() == 0 {
            return Err(SimError::EmptySample);
        }
        Ok(Self {
            walk: tally.rate(Outcome::Walk),
            hit_by_pitch: tally.rate(Outcome::HitByPitch),
            single: tally.rate(Outcome::Single),
            double: tally.rate(Outcome::Double),
            triple: tally.rate(Outcome::Triple),
            home_run: tally.rate(Outcome::HomeRun),
            strikeout: tally.rate(Outcome::Strikeout),
            out: tally.rate(Outcome::Out),
        })
    }

    /// The table as a sampling distribution in table order.
    pub fn distribution(&self) -> Result<OutcomeDistribution> {
        OutcomeDistribution::from_weights(self.entries())
    }
}

/// League rates split by platoon matchup.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LeagueRates {
    pub same: OutcomeRates,
    pub opposite: OutcomeRates,
}

impl Default for LeagueRates {
    /// Recent MLB-like averages. Same-handed matchups favour the pitcher:
    /// more strikeouts, fewer walks and less extra-base power.
    fn default() -> Self {
        Self {
            same: OutcomeRates {
                walk: 0.076,
                hit_by_pitch: 0.013,
                single: 0.136,
                double: 0.041,
                triple: 0.003,
                home_run: 0.026,
                strikeout: 0.240,
                out: 0.465,
            },
            opposite: OutcomeRates {
                walk: 0.087,
                hit_by_pitch: 0.009,
                single: 0.145,
                double: 0.045,
                triple: 0.005,
                home_run: 0.031,
                strikeout: 0.214,
                out: 0.464,
            },
        }
    }
}

impl LeagueRates {
    pub fn new(same: OutcomeRates, opposite: OutcomeRates) -> Result<Self> {
        Ok(Self {
            same: same.normalized()?,
            opposite: opposite.normalized()?,
        })
    }

    /// The table for a platoon split.
    #[must_use]
    pub fn for_platoon(&self, platoon: Platoon) -> &OutcomeRates {
        match platoon {
            Platoon::Same => &self.same,
            Platoon::Opposite => &self.opposite,
        }
    }

    /// Parse `{"same": {...}, "opposite": {...}}`.
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read a JSON file in the [`from_json_str`](Self::from_json_str) format.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let rates = Self::from_json_str(&json)?;
        debug!(path = %path.display(), "loaded league rates");
        Ok(rates)
    }

    /// Empirical tables from (event, platoon) pairs of completed plate
    /// appearances. Both splits need at least one sample.
    pub fn from_plate_appearances<I, S>(plate_appearances: I) -> Result<Self>
    where
        I: IntoIterator<Item = (S, Platoon)>,
        S: AsRef<str>,
    {
        let mut same = OutcomeTally::new();
        let mut opposite = OutcomeTally::new();

        for (event, platoon) in plate_appearances {
            let outcome = Outcome::from_event(event.as_ref());
            match platoon {
                Platoon::Same => same.record(outcome),
                Platoon::Opposite => opposite.record(outcome),
            }
        }

        debug!(same = same.total(), opposite = opposite.total(), "tallied league sample");
        Ok(Self {
            same: OutcomeRates::from_tally(&same)?,
            opposite: OutcomeRates::from_tally(&opposite)?,
        })
    }
}

/// Outcome model that samples straight from league tables.
#[derive(Clone, Debug)]
pub struct LeagueRateModel {
    same: OutcomeDistribution,
    opposite: OutcomeDistribution,
}

impl LeagueRateModel {
    /// Panics if a table carries no mass; use [`try_new`](Self::try_new)
    /// for tables that were not normalised on load.
    pub fn new(rates: LeagueRates) -> Self {
        Self::try_new(&rates)
            .unwrap_or_else(|e| panic!("league rates do not form a distribution: {e}"))
    }

    pub fn try_new(rates: &LeagueRates) -> Result<Self> {
        Ok(Self {
            same: rates.same.distribution()?,
            opposite: rates.opposite.distribution()?,
        })
    }
}

impl Default for LeagueRateModel {
    fn default() -> Self {
        Self::new(LeagueRates::default())
    }
}

impl OutcomeModel for LeagueRateModel {
    fn name(&self) -> &'static str {
        "league"
    }

    fn distribution(&self, matchup: &Matchup<'_>) -> OutcomeDistribution {
        match matchup.platoon {
            Platoon::Same => self.same.clone(),
            Platoon::Opposite => self.opposite.clone(),
        }
    }
}
