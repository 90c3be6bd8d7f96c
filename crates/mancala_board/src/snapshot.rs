//! Game snapshots as returned by the game server.
//!
//! A snapshot is the complete state of one game at one point in time. The
//! client never edits one; every server response replaces it wholesale.

use crate::error::BoardError;
use crate::pit::{PIT_COUNT, Pit, PitPlace};
use crate::player::{Player, deserialize_winner};
use derive_more::{Display, From};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Opaque game identifier handed out by the server.
///
/// Numeric identifiers on the wire are kept as their decimal text.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Display, From, Serialize, Deserialize)]
#[serde(from = "GameIdRepr", into = "String")]
pub struct GameId(String);

impl GameId {
    /// Creates an identifier.
    #[instrument(skip(id))]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The identifier text.
    #[instrument]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for GameId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<GameId> for String {
    fn from(id: GameId) -> Self {
        id.0
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum GameIdRepr {
    Text(String),
    Number(u64),
}

impl From<GameIdRepr> for GameId {
    fn from(repr: GameIdRepr) -> Self {
        match repr {
            GameIdRepr::Text(text) => GameId(text),
            GameIdRepr::Number(number) => GameId(number.to_string()),
        }
    }
}

/// Complete state of one game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "RawSnapshot")]
pub struct GameSnapshot {
    game_id: GameId,
    player: Player,
    pits: Vec<Pit>,
    player_winner: Option<Player>,
}

/// Snapshot as it arrives, before the board invariants are checked.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawSnapshot {
    game_id: GameId,
    player: Player,
    pits: Vec<Pit>,
    #[serde(default, deserialize_with = "deserialize_winner")]
    player_winner: Option<Player>,
}

impl TryFrom<RawSnapshot> for GameSnapshot {
    type Error = BoardError;

    fn try_from(raw: RawSnapshot) -> Result<Self, Self::Error> {
        GameSnapshot::new(raw.game_id, raw.player, raw.pits, raw.player_winner)
    }
}

impl GameSnapshot {
    /// Creates a snapshot, checking that there are exactly 14 pits and that
    /// each pit sits at its own index.
    #[instrument(skip(pits), fields(game_id = %game_id, pit_count = pits.len()))]
    pub fn new(
        game_id: GameId,
        player: Player,
        pits: Vec<Pit>,
        player_winner: Option<Player>,
    ) -> Result<Self, BoardError> {
        if pits.len() != PIT_COUNT {
            return Err(BoardError::new(format!(
                "Expected {} pits, got {}",
                PIT_COUNT,
                pits.len()
            )));
        }
        if let Some((index, pit)) = pits
            .iter()
            .enumerate()
            .find(|(index, pit)| pit.pit_place().index() != *index)
        {
            return Err(BoardError::new(format!(
                "Pit {} found at index {}",
                pit.pit_place(),
                index
            )));
        }
        debug!("Snapshot accepted");
        Ok(Self {
            game_id,
            player,
            pits,
            player_winner,
        })
    }

    /// Fresh board: every small pit holds `stones_per_pit`, stores are empty.
    #[instrument(skip(game_id), fields(game_id = %game_id))]
    pub fn initial(game_id: GameId, player: Player, stones_per_pit: u32) -> Self {
        let pits = PitPlace::ALL
            .iter()
            .map(|place| {
                let stones = if place.is_big() { 0 } else { stones_per_pit };
                Pit::new(*place, stones)
            })
            .collect();
        Self {
            game_id,
            player,
            pits,
            player_winner: None,
        }
    }

    /// Game identifier, passed back on every request.
    #[instrument(skip(self))]
    pub fn game_id(&self) -> &GameId {
        &self.game_id
    }

    /// Whose turn it is.
    #[instrument(skip(self))]
    pub fn player(&self) -> Player {
        self.player
    }

    /// The winner, once the game has concluded.
    #[instrument(skip(self))]
    pub fn player_winner(&self) -> Option<Player> {
        self.player_winner
    }

    /// All 14 pits in index order.
    #[instrument(skip(self))]
    pub fn pits(&self) -> &[Pit] {
        &self.pits
    }

    /// The pit at a position.
    #[instrument(skip(self))]
    pub fn pit(&self, place: PitPlace) -> Pit {
        self.pits[place.index()]
    }

    /// True when player 1 is to move.
    #[instrument(skip(self))]
    pub fn is_player_one_turn(&self) -> bool {
        self.player == Player::One
    }

    /// Player 2's playable pits, 12 down to 7, for the mirrored top row.
    #[instrument(skip(self))]
    pub fn opponent_pits(&self) -> Vec<Pit> {
        PitPlace::PLAYER_TWO_SMALL
            .iter()
            .rev()
            .map(|place| self.pit(*place))
            .collect()
    }

    /// Player 1's playable pits, 0 up to 5.
    #[instrument(skip(self))]
    pub fn own_pits(&self) -> Vec<Pit> {
        PitPlace::PLAYER_ONE_SMALL
            .iter()
            .map(|place| self.pit(*place))
            .collect()
    }

    /// Store for player number 1 (pit 6) or 2 (pit 13).
    #[instrument(skip(self))]
    pub fn big_pit_for(&self, player_number: u8) -> Option<Pit> {
        Player::from_number(player_number).map(|player| self.big_pit(player))
    }

    /// Store for a player.
    #[instrument(skip(self))]
    pub fn big_pit(&self, player: Player) -> Pit {
        self.pit(player.big_pit())
    }

    /// True once the server has declared a winner.
    #[instrument(skip(self))]
    pub fn has_winner(&self) -> bool {
        self.player_winner.is_some()
    }

    /// Stones in player 1's and player 2's stores.
    #[instrument(skip(self))]
    pub fn store_totals(&self) -> (u32, u32) {
        (
            self.big_pit(Player::One).stones(),
            self.big_pit(Player::Two).stones(),
        )
    }

    /// Stones on the whole board, saturating at `u32::MAX`. Display only; the
    /// client never checks it.
    #[instrument(skip(self))]
    pub fn total_stones(&self) -> u32 {
        self.pits
            .iter()
            .map(Pit::stones)
            .fold(0u32, u32::saturating_add)
    }
}
