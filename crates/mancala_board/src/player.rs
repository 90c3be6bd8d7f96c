//! The two Mancala players.

use crate::pit::PitPlace;
use serde::{Deserialize, Deserializer, Serialize};
use std::str::FromStr;
use tracing::instrument;

/// Player in the game.
///
/// The server names players `PLAYER_1` and `PLAYER_2`; both the serde and the
/// string forms use those names.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
pub enum Player {
    /// Owns pits 0-5 and store 6.
    #[serde(rename = "PLAYER_1")]
    #[strum(serialize = "PLAYER_1")]
    One,
    /// Owns pits 7-12 and store 13.
    #[serde(rename = "PLAYER_2")]
    #[strum(serialize = "PLAYER_2")]
    Two,
}

impl Player {
    /// Player number as shown to humans (1 or 2).
    #[instrument]
    pub fn number(self) -> u8 {
        match self {
            Player::One => 1,
            Player::Two => 2,
        }
    }

    /// Looks up a player by number.
    #[instrument]
    pub fn from_number(number: u8) -> Option<Self> {
        match number {
            1 => Some(Player::One),
            2 => Some(Player::Two),
            _ => None,
        }
    }

    /// Returns the opponent player.
    #[instrument]
    pub fn opponent(self) -> Self {
        match self {
            Player::One => Player::Two,
            Player::Two => Player::One,
        }
    }

    /// The store this player scores into.
    #[instrument]
    pub fn big_pit(self) -> PitPlace {
        match self {
            Player::One => PitPlace::PlayerOneBig,
            Player::Two => PitPlace::PlayerTwoBig,
        }
    }

    /// The six playable pits on this player's side, in index order.
    #[instrument]
    pub fn small_pits(self) -> [PitPlace; 6] {
        match self {
            Player::One => PitPlace::PLAYER_ONE_SMALL,
            Player::Two => PitPlace::PLAYER_TWO_SMALL,
        }
    }
}

/// Deserializes an optional winner, treating `null`, a missing field and the
/// empty string alike.
#[instrument(skip_all)]
pub(crate) fn deserialize_winner<'de, D>(deserializer: D) -> Result<Option<Player>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    match raw.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(name) => Player::from_str(name)
            .map(Some)
            .map_err(|_| serde::de::Error::custom(format!("unknown player: {}", name))),
    }
}
