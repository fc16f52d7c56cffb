//! Which suit each lane of the table is drawn in.
//!
//! The engine only tracks ranks. A presentation layer shows each lane (player
//! 1's cards, player 2's cards, the neutral board) in its own suit, so the
//! same rank can be told apart on the table.

use rand::Rng;

use crate::card::{Card, Suit};
use crate::error::SuitAssignmentError;
use crate::game::Player;
use crate::shuffle::shuffle_with_rng;

/// A lane of the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Lane {
    /// A player's hand and board.
    Player(Player),
    /// The neutral board.
    Neutral,
}

/// Three distinct suits, one per lane.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SuitAssignments {
    player1: Suit,
    player2: Suit,
    neutral: Suit,
}

impl SuitAssignments {
    /// Creates an assignment.
    ///
    /// # Errors
    ///
    /// Returns an error if any two lanes share a suit.
    pub fn new(player1: Suit, player2: Suit, neutral: Suit) -> Result<Self, SuitAssignmentError> {
        if player1 == player2 || player1 == neutral {
            return Err(SuitAssignmentError::DuplicateSuit(player1));
        }
        if player2 == neutral {
            return Err(SuitAssignmentError::DuplicateSuit(player2));
        }

        Ok(Self {
            player1,
            player2,
            neutral,
        })
    }

    /// Picks three distinct suits at random.
    pub fn random<R: Rng>(rng: &mut R) -> Self {
        let mut suits = Suit::ALL;
        shuffle_with_rng(&mut suits, rng);
        Self {
            player1: suits[0],
            player2: suits[1],
            neutral: suits[2],
        }
    }

    /// Player 1's suit.
    #[must_use]
    pub const fn player1(&self) -> Suit {
        self.player1
    }

    /// Player 2's suit.
    #[must_use]
    pub const fn player2(&self) -> Suit {
        self.player2
    }

    /// The neutral board's suit.
    #[must_use]
    pub const fn neutral(&self) -> Suit {
        self.neutral
    }

    /// Returns the suit for `lane`.
    #[must_use]
    pub const fn suit_of(&self, lane: Lane) -> Suit {
        match lane {
            Lane::Player(Player::P1) => self.player1,
            Lane::Player(Player::P2) => self.player2,
            Lane::Neutral => self.neutral,
        }
    }

    /// Returns the lane a card belongs to, or `None` for the unused suit.
    #[must_use]
    pub fn lane_of(&self, card: Card) -> Option<Lane> {
        if card.suit == self.player1 {
            Some(Lane::Player(Player::P1))
        } else if card.suit == self.player2 {
            Some(Lane::Player(Player::P2))
        } else if card.suit == self.neutral {
            Some(Lane::Neutral)
        } else {
            None
        }
    }
}

impl Default for SuitAssignments {
    fn default() -> Self {
        Self {
            player1: Suit::Spades,
            player2: Suit::Hearts,
            neutral: Suit::Diamonds,
        }
    }
}
