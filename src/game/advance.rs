use crate::card::Rank;
use crate::error::AdvanceError;
use crate::result::{GameAdvancementOutcome, Matchup, MatchupWinner};

use super::{Advancement, Game, GameEvent, Player};

impl Game {
    /// Plays one round: `p1_card` and `p2_card` against the next neutral card.
    ///
    /// Both cards move from hand to board. If one of them beats both the
    /// neutral card and the other player's card, its player scores the
    /// current pot and the pot resets to 1. Otherwise the round is a
    /// stalemate and the pot grows by one.
    ///
    /// The round is appended to [`Game::matchups`] and a
    /// [`GameEvent::Advanced`] is published before this returns. Handlers
    /// must not advance this game themselves.
    ///
    /// # Errors
    ///
    /// Returns an error if either card is not in its player's hand, which is
    /// also the case for every call once the game is complete. The game is
    /// left unchanged.
    ///
    /// # Example
    ///
    /// ```
    /// use bastion_breach::{Game, GameOptions, MatchupWinner, Rank};
    ///
    /// let options = GameOptions::default().with_neutral_board_prefix(&[Rank::Seven]);
    /// let mut game = Game::new(options, 0).unwrap();
    ///
    /// let outcome = game.advance(Rank::Queen, Rank::Ten).unwrap();
    /// assert_eq!(outcome.neutral_card, Rank::Seven);
    /// assert_eq!(outcome.matchup_winner, MatchupWinner::P1);
    /// assert_eq!(outcome.winner_score_increase, 1);
    /// ```
    pub fn advance(
        &mut self,
        p1_card: Rank,
        p2_card: Rank,
    ) -> Result<GameAdvancementOutcome, AdvanceError> {
        self.ensure_in_hand(Player::P1, p1_card)?;
        self.ensure_in_hand(Player::P2, p2_card)?;

        // The number of cards p1 has laid down is the round counter.
        let round = self.cards.on_board.p1.len();
        let neutral_card = self.cards.on_board.neutral[round];

        self.cards.play(Player::P1, p1_card);
        self.cards.play(Player::P2, p2_card);

        let matchup_winner = determine_matchup_winner(p1_card, neutral_card, p2_card);
        let winner_score_increase = match matchup_winner {
            MatchupWinner::None => {
                self.next_matchup_value += 1;
                0
            }
            MatchupWinner::P1 | MatchupWinner::P2 => {
                let points = self.next_matchup_value;
                self.award_points(matchup_winner, points);
                self.next_matchup_value = 1;
                points
            }
        };

        log::debug!(
            "round {}: {p1_card} vs {p2_card} on {neutral_card}, winner {matchup_winner:?} (+{winner_score_increase}), pot now {}",
            round + 1,
            self.next_matchup_value
        );

        let outcome = GameAdvancementOutcome {
            neutral_card,
            matchup_winner,
            winner_score_increase,
        };
        self.matchups.push(Matchup {
            p1_card,
            p2_card,
            neutral_card,
            matchup_winner,
        });

        if self.is_complete() {
            log::info!(
                "game complete: {} to {}",
                self.score.p1,
                self.score.p2
            );
        }

        self.events.publish(&GameEvent::Advanced(Advancement {
            p1_card,
            p2_card,
            outcome,
        }));

        Ok(outcome)
    }

    fn ensure_in_hand(&self, player: Player, rank: Rank) -> Result<(), AdvanceError> {
        if self.cards.is_in_hand(player, rank) {
            Ok(())
        } else {
            let err = AdvanceError::CardNotInHand { player, rank };
            log::warn!("illegal move: {err}");
            Err(err)
        }
    }

    const fn award_points(&mut self, winner: MatchupWinner, points: u32) {
        match winner {
            MatchupWinner::P1 => self.score.p1 += points,
            MatchupWinner::P2 => self.score.p2 += points,
            MatchupWinner::None => {}
        }
    }
}

/// P1 wins by beating both other cards, then P2 likewise; otherwise stalemate.
const fn determine_matchup_winner(p1: Rank, neutral: Rank, p2: Rank) -> MatchupWinner {
    if p1.beats(neutral) && p1.beats(p2) {
        MatchupWinner::P1
    } else if p2.beats(neutral) && p2.beats(p1) {
        MatchupWinner::P2
    } else {
        MatchupWinner::None
    }
}
