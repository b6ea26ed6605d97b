//! Player rating model: who is at the plate and who is on the mound.
//!
//! Ratings are normalized to [0, 1]. The simulator never mutates a player;
//! it borrows the two participants for the length of one plate appearance.

pub mod pitches;
pub mod player;
pub mod ratings;

pub use pitches::{Pitch, PitchType, PitchTypeRatings, USAGE_TOLERANCE};
pub use player::{Handedness, HitterType, Player, PlayerBuilder, Position};
pub use ratings::{BatterRatings, CatcherRatings, DefenseRatings, PitcherRatings, Ratings};
