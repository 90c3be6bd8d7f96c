//! Mancala board model
//!
//! Snapshot types for a Mancala game whose rules run on a remote server,
//! plus the read-only views a client needs to draw the board.
//!
//! # Layout
//!
//! ```text
//!        12  11  10   9   8   7
//!   13                            6
//!         0   1   2   3   4   5
//! ```
//!
//! Pits 0-5 and store 6 belong to player 1; pits 7-12 and store 13 belong
//! to player 2.
//!
//! # Example
//!
//! ```
//! use mancala_board::{GameId, GameSnapshot, Player};
//!
//! let snapshot = GameSnapshot::initial(GameId::new("g1"), Player::One, 4);
//! assert!(snapshot.is_player_one_turn());
//! assert_eq!(snapshot.own_pits().len(), 6);
//! assert_eq!(snapshot.big_pit_for(2).map(|pit| pit.stones()), Some(0));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod error;
mod pit;
mod player;
mod snapshot;

pub use error::BoardError;
pub use pit::{PIT_COUNT, Pit, PitPlace};
pub use player::Player;
pub use snapshot::{GameId, GameSnapshot};
