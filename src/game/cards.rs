//! Where every rank of a match currently is.

use alloc::vec::Vec;

use crate::card::{Card, Rank};
use crate::suits::{Lane, SuitAssignments};

use super::Player;

/// Cards laid on the table, in play order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board<T = Rank> {
    /// Cards player 1 has played.
    pub p1: Vec<T>,
    /// Cards player 2 has played.
    pub p2: Vec<T>,
    /// The neutral board, fixed when the game is created.
    pub neutral: Vec<T>,
}

/// Cards the players may still play.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hands<T = Rank> {
    /// Player 1's hand.
    pub p1: Vec<T>,
    /// Player 2's hand.
    pub p2: Vec<T>,
}

/// The full partition of a match's cards.
///
/// For each player, hand and board together always hold every rank exactly
/// once. [`Game::cards`](crate::Game::cards) returns an owned copy of this,
/// so changing it never affects the game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameCardCollection<T = Rank> {
    /// Played cards and the neutral board.
    pub on_board: Board<T>,
    /// Unplayed cards.
    pub in_hand: Hands<T>,
}

impl<T> GameCardCollection<T> {
    /// Returns `player`'s hand.
    #[must_use]
    pub fn hand(&self, player: Player) -> &[T] {
        match player {
            Player::P1 => &self.in_hand.p1,
            Player::P2 => &self.in_hand.p2,
        }
    }

    /// Returns the cards `player` has played.
    #[must_use]
    pub fn board(&self, player: Player) -> &[T] {
        match player {
            Player::P1 => &self.on_board.p1,
            Player::P2 => &self.on_board.p2,
        }
    }

    /// Applies `f` to every card, keeping the layout.
    pub fn map<U, F>(&self, mut f: F) -> GameCardCollection<U>
    where
        F: FnMut(Lane, &T) -> U,
    {
        let mut convert = |lane: Lane, cards: &[T]| -> Vec<U> {
            cards.iter().map(|card| f(lane, card)).collect()
        };
        let p1 = Lane::Player(Player::P1);
        let p2 = Lane::Player(Player::P2);

        GameCardCollection {
            on_board: Board {
                p1: convert(p1, &self.on_board.p1),
                p2: convert(p2, &self.on_board.p2),
                neutral: convert(Lane::Neutral, &self.on_board.neutral),
            },
            in_hand: Hands {
                p1: convert(p1, &self.in_hand.p1),
                p2: convert(p2, &self.in_hand.p2),
            },
        }
    }
}

impl GameCardCollection<Rank> {
    /// Starting layout: full hands, empty player boards, the given neutral board.
    pub(crate) fn deal(neutral: Vec<Rank>) -> Self {
        Self {
            on_board: Board {
                p1: Vec::with_capacity(neutral.len()),
                p2: Vec::with_capacity(neutral.len()),
                neutral,
            },
            in_hand: Hands {
                p1: Rank::all(),
                p2: Rank::all(),
            },
        }
    }

    /// Returns whether `player` still holds `rank`.
    #[must_use]
    pub fn is_in_hand(&self, player: Player, rank: Rank) -> bool {
        self.hand(player).contains(&rank)
    }

    /// Moves `rank` from `player`'s hand to the end of their board.
    ///
    /// Returns `false`, changing nothing, if the rank is not in hand.
    pub(crate) fn play(&mut self, player: Player, rank: Rank) -> bool {
        let (hand, board) = match player {
            Player::P1 => (&mut self.in_hand.p1, &mut self.on_board.p1),
            Player::P2 => (&mut self.in_hand.p2, &mut self.on_board.p2),
        };

        let Some(index) = hand.iter().position(|&r| r == rank) else {
            return false;
        };
        board.push(hand.remove(index));
        true
    }

    /// Turns ranks into cards, each lane in its assigned suit.
    #[must_use]
    pub fn to_cards(&self, suits: &SuitAssignments) -> GameCardCollection<Card> {
        self.map(|lane, &rank| Card::new(rank, suits.suit_of(lane)))
    }
}
