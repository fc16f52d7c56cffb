//! Error types for game operations.

use thiserror::Error;

use crate::card::{Rank, Suit};
use crate::game::Player;

/// Errors that can occur while constructing a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// The configured neutral board lists a rank more than once.
    #[error("invalid configuration: duplicate rank {0} on the neutral board")]
    DuplicateRank(Rank),
    /// The configured neutral board is missing a rank.
    #[error("invalid configuration: incomplete board, missing rank {0}")]
    IncompleteBoard(Rank),
}

/// Errors that can occur when advancing a game.
///
/// These are caller contract violations: a driver should only offer cards
/// that are still in hand. A rejected advance leaves the game untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum AdvanceError {
    /// The card is not in the player's hand (already played, or the match
    /// is complete).
    #[error("could not find card {rank} in {player}'s hand")]
    CardNotInHand {
        /// Whose hand was searched.
        player: Player,
        /// The card that was not found.
        rank: Rank,
    },
}

/// Errors that can occur when assigning suits to lanes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SuitAssignmentError {
    /// The same suit was given to more than one lane.
    #[error("suit {0} is assigned to more than one lane")]
    DuplicateSuit(Suit),
}

/// Errors that can occur when parsing a card from its string form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ParseCardError {
    /// The string was empty.
    #[error("empty card string")]
    Empty,
    /// The trailing character is not a suit symbol.
    #[error("unknown suit symbol {0:?}")]
    UnknownSuit(char),
    /// The text before the suit symbol is not a rank abbreviation.
    #[error("unknown rank abbreviation")]
    UnknownRank,
}
