//! Game state types.

use core::fmt;

/// Game state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    /// Players still hold cards and the game accepts moves.
    Active,
    /// Every card has been played.
    Complete,
}

/// One of the two players.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Player {
    /// Player 1, the human seat in the usual setup.
    P1,
    /// Player 2, the computer opponent in the usual setup.
    P2,
}

impl Player {
    /// Both players, in turn order.
    pub const BOTH: [Self; 2] = [Self::P1, Self::P2];

    /// Returns the other player.
    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            Self::P1 => Self::P2,
            Self::P2 => Self::P1,
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::P1 => f.write_str("P1"),
            Self::P2 => f.write_str("P2"),
        }
    }
}
