//! Pit positions and pit contents.

use crate::error::BoardError;
use crate::player::Player;
use serde::{Deserialize, Serialize, Serializer};
use std::str::FromStr;
use tracing::instrument;

/// Number of pits on the board, stores included.
pub const PIT_COUNT: usize = 14;

/// A fixed position on the board (0-13).
///
/// Pits 0-5 belong to player 1 and 6 is their store; pits 7-12 belong to
/// player 2 and 13 is their store. The server names positions
/// `PLAYER_ONE_PIT_A` through `PLAYER_TWO_PIT_BIG`; decoding also accepts the
/// bare index.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Deserialize,
    strum::EnumString,
    strum::IntoStaticStr,
    strum::EnumIter,
)]
#[serde(try_from = "PitPlaceRepr")]
#[repr(u8)]
pub enum PitPlace {
    /// Player 1, pit A (index 0)
    #[strum(serialize = "PLAYER_ONE_PIT_A")]
    PlayerOneA = 0,
    /// Player 1, pit B (index 1)
    #[strum(serialize = "PLAYER_ONE_PIT_B")]
    PlayerOneB = 1,
    /// Player 1, pit C (index 2)
    #[strum(serialize = "PLAYER_ONE_PIT_C")]
    PlayerOneC = 2,
    /// Player 1, pit D (index 3)
    #[strum(serialize = "PLAYER_ONE_PIT_D")]
    PlayerOneD = 3,
    /// Player 1, pit E (index 4)
    #[strum(serialize = "PLAYER_ONE_PIT_E")]
    PlayerOneE = 4,
    /// Player 1, pit F (index 5)
    #[strum(serialize = "PLAYER_ONE_PIT_F")]
    PlayerOneF = 5,
    /// Player 1 store (index 6)
    #[strum(serialize = "PLAYER_ONE_PIT_BIG")]
    PlayerOneBig = 6,
    /// Player 2, pit U (index 7)
    #[strum(serialize = "PLAYER_TWO_PIT_U")]
    PlayerTwoU = 7,
    /// Player 2, pit V (index 8)
    #[strum(serialize = "PLAYER_TWO_PIT_V")]
    PlayerTwoV = 8,
    /// Player 2, pit W (index 9)
    #[strum(serialize = "PLAYER_TWO_PIT_W")]
    PlayerTwoW = 9,
    /// Player 2, pit X (index 10)
    #[strum(serialize = "PLAYER_TWO_PIT_X")]
    PlayerTwoX = 10,
    /// Player 2, pit Y (index 11)
    #[strum(serialize = "PLAYER_TWO_PIT_Y")]
    PlayerTwoY = 11,
    /// Player 2, pit Z (index 12)
    #[strum(serialize = "PLAYER_TWO_PIT_Z")]
    PlayerTwoZ = 12,
    /// Player 2 store (index 13)
    #[strum(serialize = "PLAYER_TWO_PIT_BIG")]
    PlayerTwoBig = 13,
}

impl PitPlace {
    /// All 14 positions in index order.
    pub const ALL: [PitPlace; PIT_COUNT] = [
        PitPlace::PlayerOneA,
        PitPlace::PlayerOneB,
        PitPlace::PlayerOneC,
        PitPlace::PlayerOneD,
        PitPlace::PlayerOneE,
        PitPlace::PlayerOneF,
        PitPlace::PlayerOneBig,
        PitPlace::PlayerTwoU,
        PitPlace::PlayerTwoV,
        PitPlace::PlayerTwoW,
        PitPlace::PlayerTwoX,
        PitPlace::PlayerTwoY,
        PitPlace::PlayerTwoZ,
        PitPlace::PlayerTwoBig,
    ];

    /// Player 1's playable pits, index order.
    pub const PLAYER_ONE_SMALL: [PitPlace; 6] = [
        PitPlace::PlayerOneA,
        PitPlace::PlayerOneB,
        PitPlace::PlayerOneC,
        PitPlace::PlayerOneD,
        PitPlace::PlayerOneE,
        PitPlace::PlayerOneF,
    ];

    /// Player 2's playable pits, index order.
    pub const PLAYER_TWO_SMALL: [PitPlace; 6] = [
        PitPlace::PlayerTwoU,
        PitPlace::PlayerTwoV,
        PitPlace::PlayerTwoW,
        PitPlace::PlayerTwoX,
        PitPlace::PlayerTwoY,
        PitPlace::PlayerTwoZ,
    ];

    /// Board index (0-13).
    #[instrument]
    pub fn index(self) -> usize {
        self as usize
    }

    /// Creates a position from a board index.
    #[instrument]
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Name the server uses for this position.
    #[instrument]
    pub fn wire_name(self) -> &'static str {
        self.into()
    }

    /// True for the two stores.
    #[instrument]
    pub fn is_big(self) -> bool {
        matches!(self, PitPlace::PlayerOneBig | PitPlace::PlayerTwoBig)
    }

    /// The player whose side this pit is on.
    #[instrument]
    pub fn owner(self) -> Player {
        if self.index() <= PitPlace::PlayerOneBig.index() {
            Player::One
        } else {
            Player::Two
        }
    }

    /// Short label for display (`A`-`F`, `U`-`Z`, `P1`, `P2`).
    #[instrument]
    pub fn label(self) -> &'static str {
        match self {
            PitPlace::PlayerOneA => "A",
            PitPlace::PlayerOneB => "B",
            PitPlace::PlayerOneC => "C",
            PitPlace::PlayerOneD => "D",
            PitPlace::PlayerOneE => "E",
            PitPlace::PlayerOneF => "F",
            PitPlace::PlayerOneBig => "P1",
            PitPlace::PlayerTwoU => "U",
            PitPlace::PlayerTwoV => "V",
            PitPlace::PlayerTwoW => "W",
            PitPlace::PlayerTwoX => "X",
            PitPlace::PlayerTwoY => "Y",
            PitPlace::PlayerTwoZ => "Z",
            PitPlace::PlayerTwoBig => "P2",
        }
    }
}

impl std::fmt::Display for PitPlace {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.wire_name())
    }
}

impl Serialize for PitPlace {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.wire_name())
    }
}

/// Wire forms accepted for a pit position.
#[derive(Deserialize)]
#[serde(untagged)]
enum PitPlaceRepr {
    Index(u64),
    Name(String),
}

impl TryFrom<PitPlaceRepr> for PitPlace {
    type Error = BoardError;

    fn try_from(repr: PitPlaceRepr) -> Result<Self, Self::Error> {
        match repr {
            PitPlaceRepr::Index(index) => usize::try_from(index)
                .ok()
                .and_then(PitPlace::from_index)
                .ok_or_else(|| BoardError::new(format!("Pit index out of range: {}", index))),
            PitPlaceRepr::Name(name) => PitPlace::from_str(&name)
                .map_err(|_| BoardError::new(format!("Unknown pit: {}", name))),
        }
    }
}

/// One pit and the stones in it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pit {
    pit_place: PitPlace,
    stones: u32,
}

impl Pit {
    /// Creates a pit.
    #[instrument]
    pub fn new(pit_place: PitPlace, stones: u32) -> Self {
        Self { pit_place, stones }
    }

    /// Position of this pit; also the move selector.
    #[instrument]
    pub fn pit_place(&self) -> PitPlace {
        self.pit_place
    }

    /// Stone count.
    #[instrument]
    pub fn stones(&self) -> u32 {
        self.stones
    }
}
