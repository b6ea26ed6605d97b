//! Plate appearance outcomes, outcome distributions and tallies.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::{Result, SimError};

/// Result of one plate appearance.
///
/// The rating-formula model resolves to `Walk`, `Strikeout`, `HomeRun` or
/// `InPlay`. Table-driven models split balls in play further and use the
/// first eight variants.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    Walk,
    HitByPitch,
    Single,
    Double,
    Triple,
    HomeRun,
    Strikeout,
    Out,
    InPlay,
}

impl Outcome {
    /// Number of variants.
    pub const COUNT: usize = 9;

    /// Every variant, in declaration order.
    pub const ALL: [Outcome; Outcome::COUNT] = [
        Outcome::Walk,
        Outcome::HitByPitch,
        Outcome::Single,
        Outcome::Double,
        Outcome::Triple,
        Outcome::HomeRun,
        Outcome::Strikeout,
        Outcome::Out,
        Outcome::InPlay,
    ];

    /// The eight outcomes of the league-rate tables, in table order.
    pub const EXTENDED: [Outcome; 8] = [
        Outcome::Walk,
        Outcome::HitByPitch,
        Outcome::Single,
        Outcome::Double,
        Outcome::Triple,
        Outcome::HomeRun,
        Outcome::Strikeout,
        Outcome::Out,
    ];

    /// Dense index in `0..COUNT`.
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Short label, matching the keys of exported rate tables.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Outcome::Walk => "Walk",
            Outcome::HitByPitch => "HBP",
            Outcome::Single => "Single",
            Outcome::Double => "Double",
            Outcome::Triple => "Triple",
            Outcome::HomeRun => "HR",
            Outcome::Strikeout => "Strikeout",
            Outcome::Out => "Out",
            Outcome::InPlay => "InPlay",
        }
    }

    /// Classify a Statcast `events` value.
    ///
    /// Unknown events and events that retire the batter on a ball in play
    /// (field outs, double plays, sacrifices, errors) count as `Out`.
    #[must_use]
    pub fn from_event(event: &str) -> Outcome {
        let e = event.trim().to_ascii_lowercase();
        match e.as_str() {
            "walk" => Outcome::Walk,
            "hit_by_pitch" => Outcome::HitByPitch,
            "single" => Outcome::Single,
            "double" => Outcome::Double,
            "triple" => Outcome::Triple,
            "home_run" => Outcome::HomeRun,
            _ if e.contains("strikeout") => Outcome::Strikeout,
            _ => Outcome::Out,
        }
    }

    /// Batter reached base safely.
    #[must_use]
    pub const fn reaches_base(self) -> bool {
        matches!(
            self,
            Outcome::Walk
                | Outcome::HitByPitch
                | Outcome::Single
                | Outcome::Double
                | Outcome::Triple
                | Outcome::HomeRun
        )
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// A categorical distribution over outcomes with a fixed sampling order.
///
/// Entries are kept in the order they were supplied; [`sample`](Self::sample)
/// walks them in that order, so the order is part of the contract for
/// reproducing a simulation from a given random stream.
///
/// Serialized as a list of `[outcome, probability]` pairs. Deserializing goes
/// through [`from_weights`](Self::from_weights), so a loaded distribution
/// holds the same guarantees as a built one.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<(Outcome, f64)>", into = "Vec<(Outcome, f64)>")]
pub struct OutcomeDistribution {
    entries: SmallVec<[(Outcome, f64); 8]>,
}

impl OutcomeDistribution {
    /// Build a distribution from non-negative weights, renormalising them so
    /// they sum to one.
    ///
    /// Fails when a weight is negative or not finite, or when the weights
    /// carry no mass at all.
    pub fn from_weights(weights: impl IntoIterator<Item = (Outcome, f64)>) -> Result<Self> {
        let mut entries: SmallVec<[(Outcome, f64); 8]> = SmallVec::new();
        let mut total = 0.0;

        for (outcome, weight) in weights {
            if !weight.is_finite() || weight < 0.0 {
                return Err(SimError::InvalidRate {
                    outcome: outcome.label(),
                    value: weight,
                });
            }
            total += weight;
            entries.push((outcome, weight));
        }

        if total <= 0.0 || !total.is_finite() {
            return Err(SimError::DegenerateDistribution { total });
        }

        for (_, p) in entries.iter_mut() {
            *p /= total;
        }

        Ok(Self { entries })
    }

    /// Select the outcome whose segment of [0, 1) contains `u`.
    ///
    /// Segments are laid out contiguously in entry order. The last entry
    /// absorbs any floating-point shortfall, so every `u` maps to exactly
    /// one outcome.
    #[must_use]
    pub fn sample(&self, u: f64) -> Outcome {
        let Some((&(last, _), head)) = self.entries.split_last() else {
            unreachable!("distributions are built with at least one entry");
        };

        let mut remaining = u;
        for &(outcome, p) in head {
            if remaining < p {
                return outcome;
            }
            remaining -= p;
        }
        last
    }

    /// Probability of `outcome`, zero if it is not in this distribution.
    #[must_use]
    pub fn probability(&self, outcome: Outcome) -> f64 {
        self.entries
            .iter()
            .filter(|(o, _)| *o == outcome)
            .map(|(_, p)| *p)
            .sum()
    }

    /// Iterate (outcome, probability) pairs in sampling order.
    pub fn iter(&self) -> impl Iterator<Item = (Outcome, f64)> + '_ {
        self.entries.iter().copied()
    }

    /// Outcomes in sampling order.
    pub fn outcomes(&self) -> impl Iterator<Item = Outcome> + '_ {
        self.entries.iter().map(|(o, _)| *o)
    }

    /// Sum of all probabilities (1.0 up to rounding).
    #[must_use]
    pub fn total(&self) -> f64 {
        self.entries.iter().map(|(_, p)| p).sum()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl TryFrom<Vec<(Outcome, f64)>> for OutcomeDistribution {
    type Error = SimError;

    fn try_from(weights: Vec<(Outcome, f64)>) -> Result<Self> {
        Self::from_weights(weights)
    }
}

impl From<OutcomeDistribution> for Vec<(Outcome, f64)> {
    fn from(dist: OutcomeDistribution) -> Self {
        dist.entries.into_vec()
    }
}

/// Outcome counts over a run of plate appearances.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutcomeTally {
    counts: [u64; Outcome::COUNT],
}

impl OutcomeTally {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one outcome.
    pub fn record(&mut self, outcome: Outcome) {
        self.counts[outcome.index()] += 1;
    }

    #[must_use]
    pub fn count(&self, outcome: Outcome) -> u64 {
        self.counts[outcome.index()]
    }

    /// Total plate appearances recorded.
    #[must_use]
    pub fn total(&self) -> u64 {
        self.counts.iter().sum()
    }

    /// Observed frequency of `outcome`; zero when nothing was recorded.
    #[must_use]
    pub fn rate(&self, outcome: Outcome) -> f64 {
        let total = self.total();
        if total == 0 {
            0.0
        } else {
            self.count(outcome) as f64 / total as f64
        }
    }

    /// Add another tally into this one.
    pub fn merge(&mut self, other: &OutcomeTally) {
        for (mine, theirs) in self.counts.iter_mut().zip(other.counts.iter()) {
            *mine += theirs;
        }
    }
}

impl FromIterator<Outcome> for OutcomeTally {
    fn from_iter<I: IntoIterator<Item = Outcome>>(iter: I) -> Self {
        let mut tally = Self::new();
        for outcome in iter {
            tally.record(outcome);
        }
        tally
    }
}
