//! Events published by a game.

use crate::card::Rank;
use crate::result::GameAdvancementOutcome;

/// A resolved round, as announced to subscribers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Advancement {
    /// The rank player 1 played.
    pub p1_card: Rank,
    /// The rank player 2 played.
    pub p2_card: Rank,
    /// How the round was resolved.
    pub outcome: GameAdvancementOutcome,
}

/// Something that happened to a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    /// A round was played with [`Game::advance`](crate::Game::advance).
    Advanced(Advancement),
}
