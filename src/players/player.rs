//! Player records.
//!
//! A `Player` is built once by roster tooling and only read afterwards.
//! Optional rating groups are `Option`s: a position player has no pitcher
//! ratings at all rather than zeroed ones.

use serde::{Deserialize, Serialize};

use super::pitches::PitchTypeRatings;
use super::ratings::{BatterRatings, CatcherRatings, DefenseRatings, PitcherRatings, Ratings};
use crate::core::Result;

/// Batting or throwing side.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Handedness {
    Left,
    Right,
    Switch,
}

/// Fielding position.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Position {
    #[serde(rename = "P")]
    Pitcher,
    #[serde(rename = "C")]
    Catcher,
    #[serde(rename = "1B")]
    FirstBase,
    #[serde(rename = "2B")]
    SecondBase,
    #[serde(rename = "3B")]
    ThirdBase,
    #[serde(rename = "SS")]
    Shortstop,
    #[serde(rename = "LF")]
    LeftField,
    #[serde(rename = "CF")]
    CenterField,
    #[serde(rename = "RF")]
    RightField,
    #[serde(rename = "DH")]
    DesignatedHitter,
    #[serde(rename = "INF")]
    InfieldUtility,
    #[serde(rename = "OF")]
    OutfieldUtility,
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let abbr = match self {
            Position::Pitcher => "P",
            Position::Catcher => "C",
            Position::FirstBase => "1B",
            Position::SecondBase => "2B",
            Position::ThirdBase => "3B",
            Position::Shortstop => "SS",
            Position::LeftField => "LF",
            Position::CenterField => "CF",
            Position::RightField => "RF",
            Position::DesignatedHitter => "DH",
            Position::InfieldUtility => "INF",
            Position::OutfieldUtility => "OF",
        };
        f.write_str(abbr)
    }
}

/// Batted-ball profile.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HitterType {
    LineDrive,
    GroundBall,
    FlyBall,
    PopFly,
    Grounder,
    Flyer,
}

/// A player and every rating group that applies to them.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub name: String,
    pub age: u32,

    pub bats: Handedness,
    /// Also the pitching hand.
    pub throws: Handedness,

    /// Eligible positions, primary first.
    #[serde(default)]
    pub positions: Vec<Position>,
    #[serde(default)]
    pub hitter_type: Option<HitterType>,

    pub batting: Ratings<BatterRatings>,
    #[serde(default)]
    pub pitching: Option<Ratings<PitcherRatings>>,
    pub defense: Ratings<DefenseRatings>,
    #[serde(default)]
    pub catching: Option<Ratings<CatcherRatings>>,
    #[serde(default)]
    pub pitch_types: Option<PitchTypeRatings>,
}

impl Player {
    /// Start building a player with league-average ratings.
    pub fn builder(name: impl Into<String>) -> PlayerBuilder {
        PlayerBuilder::new(name)
    }

    /// Has pitcher ratings.
    #[must_use]
    pub fn is_pitcher(&self) -> bool {
        self.pitching.is_some()
    }

    /// Pitches and also plays somewhere other than the mound.
    #[must_use]
    pub fn is_two_way(&self) -> bool {
        self.is_pitcher() && self.positions.iter().any(|p| *p != Position::Pitcher)
    }

    /// Primary position, if any are listed.
    #[must_use]
    pub fn primary_position(&self) -> Option<Position> {
        self.positions.first().copied()
    }

    /// Validate every rating group the player carries.
    pub fn validate(&self) -> Result<()> {
        let name = self.name.as_str();
        for ratings in [&self.batting.current, &self.batting.potential] {
            ratings.validate(name)?;
        }
        for ratings in [&self.defense.current, &self.defense.potential] {
            ratings.validate(name)?;
        }
        if let Some(pitching) = &self.pitching {
            pitching.current.validate(name)?;
            pitching.potential.validate(name)?;
        }
        if let Some(catching) = &self.catching {
            catching.current.validate(name)?;
            catching.potential.validate(name)?;
        }
        if let Some(pitch_types) = &self.pitch_types {
            pitch_types.validate(name)?;
        }
        Ok(())
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.primary_position() {
            Some(pos) => write!(f, "{} ({})", self.name, pos),
            None => f.write_str(&self.name),
        }
    }
}

/// Builder for creating a Player.
///
/// Defaults: age 25, bats and throws right, every batting and defense
/// rating 0.5, no optional groups.
pub struct PlayerBuilder {
    player: Player,
}

impl PlayerBuilder {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            player: Player {
                name: name.into(),
                age: 25,
                bats: Handedness::Right,
                throws: Handedness::Right,
                positions: Vec::new(),
                hitter_type: None,
                batting: Ratings::new(BatterRatings::default()),
                pitching: None,
                defense: Ratings::new(DefenseRatings::default()),
                catching: None,
                pitch_types: None,
            },
        }
    }

    pub fn age(mut self, age: u32) -> Self {
        self.player.age = age;
        self
    }

    pub fn bats(mut self, hand: Handedness) -> Self {
        self.player.bats = hand;
        self
    }

    pub fn throws(mut self, hand: Handedness) -> Self {
        self.player.throws = hand;
        self
    }

    pub fn position(mut self, position: Position) -> Self {
        self.player.positions.push(position);
        self
    }

    pub fn hitter_type(mut self, hitter_type: HitterType) -> Self {
        self.player.hitter_type = Some(hitter_type);
        self
    }

    pub fn batting(mut self, ratings: BatterRatings) -> Self {
        self.player.batting = Ratings::new(ratings);
        self
    }

    pub fn pitching(mut self, ratings: PitcherRatings) -> Self {
        self.player.pitching = Some(Ratings::new(ratings));
        self
    }

    pub fn defense(mut self, ratings: DefenseRatings) -> Self {
        self.player.defense = Ratings::new(ratings);
        self
    }

    pub fn catching(mut self, ratings: CatcherRatings) -> Self {
        self.player.catching = Some(Ratings::new(ratings));
        self
    }

    pub fn pitch_types(mut self, pitch_types: PitchTypeRatings) -> Self {
        self.player.pitch_types = Some(pitch_types);
        self
    }

    pub fn build(self) -> Player {
        self.player
    }
}
