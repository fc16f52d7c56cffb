//! A Bastion Breach card game rules engine with optional `no_std` support.
//!
//! Two players each hold the thirteen ranks of a suit. Every round both play
//! one rank against the next card of a shuffled neutral board; a card that
//! beats both the neutral card and the opponent's card takes the pot. The
//! crate provides a [`Game`] type that owns the match state, resolves rounds,
//! and publishes a [`GameEvent`] for every round so a presentation layer can
//! follow along.
//!
//! # Example
//!
//! ```
//! use bastion_breach::{Game, GameOptions, Rank};
//!
//! let mut game = Game::new(GameOptions::default(), 42).unwrap();
//! let outcome = game.advance(Rank::Ace, Rank::Two).unwrap();
//! assert_eq!(game.matchups()[0].matchup_winner, outcome.matchup_winner);
//! assert_eq!(game.rounds_remaining(), 12);
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod error;
pub mod events;
pub mod game;
pub mod options;
pub mod result;
pub mod shuffle;
pub mod suits;

// Re-export main types
pub use card::{Card, RANK_COUNT, Rank, Suit};
pub use error::{AdvanceError, ConfigError, ParseCardError, SuitAssignmentError};
pub use events::{EventChannel, SubscriptionId};
pub use game::{
    Advancement, Board, Game, GameCardCollection, GameEvent, GameState, Hands, Player,
};
pub use options::GameOptions;
pub use result::{GameAdvancementOutcome, Matchup, MatchupWinner, Score};
pub use shuffle::{shuffle, shuffle_with_rng};
pub use suits::{Lane, SuitAssignments};
