//! Game engine and state management.

use alloc::vec::Vec;
#[cfg(all(not(feature = "std"), feature = "alloc"))]
use hashbrown::HashSet;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
#[cfg(feature = "std")]
use std::collections::HashSet;

use crate::card::{RANK_COUNT, Rank};
use crate::error::ConfigError;
use crate::events::{EventChannel, SubscriptionId};
use crate::options::GameOptions;
use crate::result::{Matchup, MatchupWinner, Score};
use crate::shuffle::shuffle_with_rng;

mod advance;
pub mod cards;
pub mod event;
pub mod state;

pub use cards::{Board, GameCardCollection, Hands};
pub use event::{Advancement, GameEvent};
pub use state::{GameState, Player};

/// A Bastion Breach match between two players.
///
/// Each round both players play one rank from their hand against the next
/// card of a shuffled neutral board. A card that beats both the neutral card
/// and the opponent's card wins the round's pot; otherwise the pot carries
/// over and grows by one. The match is complete once all thirteen ranks have
/// been played.
///
/// The game is only changed by [`Game::advance`]. Every successful advance
/// is recorded in [`Game::matchups`] and announced to subscribers as a
/// [`GameEvent`]. To start over, create a new game.
#[derive(Debug)]
pub struct Game {
    /// Hands, boards and the neutral board.
    cards: GameCardCollection,
    /// Current score.
    score: Score,
    /// Points the next decisive matchup is worth.
    next_matchup_value: u32,
    /// Resolved rounds, oldest first.
    matchups: Vec<Matchup>,
    /// Subscribers to game events.
    events: EventChannel<GameEvent>,
}

impl Game {
    /// Creates a new game.
    ///
    /// Without a configured neutral board, one is shuffled from `seed`; the
    /// same seed always yields the same board.
    ///
    /// # Errors
    ///
    /// Returns an error if the configured neutral board repeats a rank or
    /// leaves one out.
    ///
    /// # Example
    ///
    /// ```
    /// use bastion_breach::{Game, GameOptions};
    ///
    /// let game = Game::new(GameOptions::default(), 42).unwrap();
    /// assert_eq!(game.score().p1, 0);
    /// assert!(!game.is_complete());
    /// ```
    pub fn new(options: GameOptions, seed: u64) -> Result<Self, ConfigError> {
        let neutral = if let Some(board) = options.neutral_board {
            if let Err(err) = validate_neutral_board(&board) {
                log::warn!("rejected neutral board {board:?}: {err}");
                return Err(err);
            }
            log::debug!("new game with configured neutral board {board:?}");
            board
        } else {
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            let mut board = Rank::all();
            shuffle_with_rng(&mut board, &mut rng);
            log::debug!("new game with neutral board shuffled from seed {seed}");
            board
        };

        Ok(Self {
            cards: GameCardCollection::deal(neutral),
            score: Score::default(),
            next_matchup_value: 1,
            matchups: Vec::with_capacity(RANK_COUNT),
            events: EventChannel::new(),
        })
    }

    /// Returns the current game state.
    pub fn state(&self) -> GameState {
        if self.is_complete() {
            GameState::Complete
        } else {
            GameState::Active
        }
    }

    /// Returns whether both hands are empty.
    pub fn is_complete(&self) -> bool {
        self.cards.in_hand.p1.is_empty() && self.cards.in_hand.p2.is_empty()
    }

    /// Returns a copy of the current score.
    pub const fn score(&self) -> Score {
        self.score
    }

    /// Returns the player ahead on points, or [`MatchupWinner::None`] when tied.
    pub const fn leader(&self) -> MatchupWinner {
        self.score.leader()
    }

    /// Returns a copy of every card's whereabouts.
    ///
    /// The copy is independent of the game: changing it has no effect.
    pub fn cards(&self) -> GameCardCollection {
        self.cards.clone()
    }

    /// Returns whether `player` still holds `rank`.
    pub fn has_in_hand(&self, player: Player, rank: Rank) -> bool {
        self.cards.is_in_hand(player, rank)
    }

    /// Returns the resolved rounds, oldest first.
    pub fn matchups(&self) -> &[Matchup] {
        &self.matchups
    }

    /// Returns the number of rounds played so far.
    pub fn round(&self) -> usize {
        self.matchups.len()
    }

    /// Returns the number of rounds left to play.
    pub fn rounds_remaining(&self) -> usize {
        self.cards.on_board.neutral.len() - self.cards.on_board.p1.len()
    }

    /// Returns the points the next decisive matchup is worth.
    ///
    /// This starts at 1, grows by one with every stalemate and resets to 1
    /// once a player wins a round.
    pub const fn next_matchup_value(&self) -> u32 {
        self.next_matchup_value
    }

    /// Registers a handler for game events and returns its subscription id.
    ///
    /// Handlers run synchronously inside [`Game::advance`], in the order they
    /// were registered.
    ///
    /// # Example
    ///
    /// ```
    /// use std::cell::Cell;
    /// use std::rc::Rc;
    ///
    /// use bastion_breach::{Game, GameEvent, GameOptions, Rank};
    ///
    /// let mut game = Game::new(GameOptions::default(), 1).unwrap();
    /// let rounds = Rc::new(Cell::new(0));
    /// let counter = Rc::clone(&rounds);
    /// game.subscribe(move |GameEvent::Advanced(_)| counter.set(counter.get() + 1));
    ///
    /// game.advance(Rank::Two, Rank::Three).unwrap();
    /// assert_eq!(rounds.get(), 1);
    /// ```
    pub fn subscribe<F>(&mut self, handler: F) -> SubscriptionId
    where
        F: FnMut(&GameEvent) + 'static,
    {
        self.events.subscribe(handler)
    }

    /// Removes a handler registered with [`Game::subscribe`].
    ///
    /// Returns `false` if the id is unknown.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.events.unsubscribe(id)
    }

    /// Returns the number of registered handlers.
    pub fn subscriber_count(&self) -> usize {
        self.events.len()
    }
}

/// Checks that a neutral board lists every rank exactly once.
fn validate_neutral_board(board: &[Rank]) -> Result<(), ConfigError> {
    let mut seen = HashSet::with_capacity(RANK_COUNT);
    for &rank in board {
        if !seen.insert(rank) {
            return Err(ConfigError::DuplicateRank(rank));
        }
    }

    match Rank::ALL.into_iter().find(|rank| !seen.contains(rank)) {
        Some(missing) => Err(ConfigError::IncompleteBoard(missing)),
        None => Ok(()),
    }
}
