//! Pitch arsenal ratings.
//!
//! A pitcher's arsenal maps each pitch type thrown to its quality and
//! usage share. Pitch types not in the map are not thrown. Usage shares of
//! the thrown pitches must sum to 1.0.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use super::ratings::check_rating;
use crate::core::{Result, SimError};

/// Allowed deviation of the usage total from 1.0.
pub const USAGE_TOLERANCE: f64 = 1e-3;

/// Pitch type tag.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PitchType {
    Fastball,
    Slider,
    Curveball,
    Changeup,
    Cutter,
    Sinker,
    Splitter,
    Knuckleball,
}

impl PitchType {
    /// All pitch types in canonical order.
    pub const ALL: [PitchType; 8] = [
        PitchType::Fastball,
        PitchType::Slider,
        PitchType::Curveball,
        PitchType::Changeup,
        PitchType::Cutter,
        PitchType::Sinker,
        PitchType::Splitter,
        PitchType::Knuckleball,
    ];
}

/// Quality and usage of one pitch.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Pitch {
    pub velocity: f64,
    pub movement: f64,
    pub control: f64,
    /// Share of all pitches thrown that are this pitch.
    pub usage: f64,
}

impl Pitch {
    pub const fn new(velocity: f64, movement: f64, control: f64, usage: f64) -> Self {
        Self {
            velocity,
            movement,
            control,
            usage,
        }
    }
}

/// A pitcher's arsenal.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PitchTypeRatings {
    pitches: FxHashMap<PitchType, Pitch>,
}

impl PitchTypeRatings {
    /// Create an empty arsenal.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add (or replace) a pitch.
    #[must_use]
    pub fn with_pitch(mut self, pitch_type: PitchType, pitch: Pitch) -> Self {
        self.pitches.insert(pitch_type, pitch);
        self
    }

    /// Rating for a pitch type, `None` if it is not thrown.
    #[must_use]
    pub fn get(&self, pitch_type: PitchType) -> Option<&Pitch> {
        self.pitches.get(&pitch_type)
    }

    /// Iterate thrown pitches in canonical pitch-type order.
    pub fn iter(&self) -> impl Iterator<Item = (PitchType, &Pitch)> {
        PitchType::ALL
            .into_iter()
            .filter_map(move |t| self.pitches.get(&t).map(|p| (t, p)))
    }

    /// Number of pitch types thrown.
    #[must_use]
    pub fn len(&self) -> usize {
        self.pitches.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pitches.is_empty()
    }

    /// Sum of usage shares.
    #[must_use]
    pub fn usage_total(&self) -> f64 {
        self.iter().map(|(_, p)| p.usage).sum()
    }

    /// Check every pitch rating is in range and usage sums to 1.0.
    pub fn validate(&self, player: &str) -> Result<()> {
        for (_, pitch) in self.iter() {
            check_rating(player, "pitch.velocity", pitch.velocity)?;
            check_rating(player, "pitch.movement", pitch.movement)?;
            check_rating(player, "pitch.control", pitch.control)?;
            check_rating(player, "pitch.usage", pitch.usage)?;
        }

        let total = self.usage_total();
        if (total - 1.0).abs() > USAGE_TOLERANCE {
            return Err(SimError::PitchUsage {
                player: player.to_string(),
                total,
            });
        }
        Ok(())
    }
}
