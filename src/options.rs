//! Game configuration options.

use alloc::vec::Vec;

use crate::card::Rank;

/// Configuration options for a Bastion Breach match.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use bastion_breach::{GameOptions, Rank};
///
/// let options = GameOptions::default().with_neutral_board_prefix(&[Rank::Seven]);
/// assert_eq!(options.neutral_board.as_ref().map(Vec::len), Some(13));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct GameOptions {
    /// Neutral board to play against, in reveal order.
    ///
    /// `None` shuffles a fresh board from the game seed. A configured board
    /// must list every rank exactly once.
    pub neutral_board: Option<Vec<Rank>>,
}

impl GameOptions {
    /// Sets the neutral board.
    ///
    /// The board is validated when the game is created.
    ///
    /// # Example
    ///
    /// ```
    /// use bastion_breach::{GameOptions, Rank};
    ///
    /// let options = GameOptions::default().with_neutral_board(Rank::all());
    /// assert_eq!(options.neutral_board, Some(Rank::all()));
    /// ```
    #[must_use]
    pub fn with_neutral_board(mut self, board: Vec<Rank>) -> Self {
        self.neutral_board = Some(board);
        self
    }

    /// Sets a neutral board that starts with `prefix` and continues with the
    /// remaining ranks in standard order.
    ///
    /// Repeated ranks in `prefix` are kept only once, so the result is always
    /// a complete board.
    ///
    /// # Example
    ///
    /// ```
    /// use bastion_breach::{GameOptions, Rank};
    ///
    /// let options = GameOptions::default().with_neutral_board_prefix(&[Rank::Ace, Rank::Five]);
    /// let board = options.neutral_board.unwrap();
    /// assert_eq!(&board[..3], &[Rank::Ace, Rank::Five, Rank::Two]);
    /// ```
    #[must_use]
    pub fn with_neutral_board_prefix(self, prefix: &[Rank]) -> Self {
        let mut board: Vec<Rank> = Vec::with_capacity(Rank::ALL.len());
        for &rank in prefix.iter().chain(Rank::ALL.iter()) {
            if !board.contains(&rank) {
                board.push(rank);
            }
        }
        self.with_neutral_board(board)
    }

    /// Clears any configured neutral board, so the game shuffles its own.
    #[must_use]
    pub fn with_shuffled_board(mut self) -> Self {
        self.neutral_board = None;
        self
    }
}
