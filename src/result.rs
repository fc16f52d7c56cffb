//! Matchup result types.

use crate::card::Rank;

/// Who won a matchup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MatchupWinner {
    /// Player 1 beat both the neutral card and player 2.
    P1,
    /// Player 2 beat both the neutral card and player 1.
    P2,
    /// Stalemate: neither player beat both other cards.
    None,
}

impl MatchupWinner {
    /// Returns whether the matchup was a stalemate.
    #[must_use]
    pub const fn is_stalemate(self) -> bool {
        matches!(self, Self::None)
    }
}

/// Result of a single [`Game::advance`](crate::Game::advance) call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameAdvancementOutcome {
    /// The neutral card revealed this round.
    pub neutral_card: Rank,
    /// Who won the matchup.
    pub matchup_winner: MatchupWinner,
    /// Points added to the winner's score (0 on a stalemate).
    pub winner_score_increase: u32,
}

/// One resolved round, kept in the game's history.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Matchup {
    /// The rank player 1 played.
    pub p1_card: Rank,
    /// The rank player 2 played.
    pub p2_card: Rank,
    /// The neutral rank both were played against.
    pub neutral_card: Rank,
    /// Who won.
    pub matchup_winner: MatchupWinner,
}

/// Points per player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Score {
    /// Player 1's points.
    pub p1: u32,
    /// Player 2's points.
    pub p2: u32,
}

impl Score {
    /// Returns the player ahead on points, or [`MatchupWinner::None`] when tied.
    #[must_use]
    pub const fn leader(&self) -> MatchupWinner {
        if self.p1 > self.p2 {
            MatchupWinner::P1
        } else if self.p2 > self.p1 {
            MatchupWinner::P2
        } else {
            MatchupWinner::None
        }
    }
}
