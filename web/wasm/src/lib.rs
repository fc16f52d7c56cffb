use std::cell::RefCell;
use std::rc::Rc;

use bastion_breach::{
    Advancement, Card, Game, GameCardCollection, GameEvent, GameOptions, GameState, Matchup,
    MatchupWinner, Player, Rank, SubscriptionId, Suit, SuitAssignments,
};
use serde::Serialize;
use wasm_bindgen::prelude::*;

/// Rounds published by the game that the page has not rendered yet.
type Pending = Rc<RefCell<Vec<Advancement>>>;

#[wasm_bindgen]
pub struct WasmGame {
    game: Game,
    suits: SuitAssignments,
    pending: Pending,
    subscription: SubscriptionId,
}

#[wasm_bindgen]
impl WasmGame {
    #[wasm_bindgen(constructor)]
    pub fn new(seed: u32) -> Result<WasmGame, JsValue> {
        let game = Game::new(GameOptions::default(), u64::from(seed)).map_err(js_err)?;
        Ok(Self::attach(game, suits_from_seed(seed)))
    }

    /// Replaces the game with a fresh one; the old game's events are dropped.
    pub fn reset(&mut self, seed: u32) -> Result<(), JsValue> {
        let game = Game::new(GameOptions::default(), u64::from(seed)).map_err(js_err)?;
        self.game.unsubscribe(self.subscription);
        *self = Self::attach(game, suits_from_seed(seed));
        Ok(())
    }

    /// Plays player 1's card against player 2's card, both given as ranks
    /// like `"Q"` or `"10"`.
    pub fn advance(&mut self, p1_card: &str, p2_card: &str) -> Result<JsValue, JsValue> {
        let p1_card = parse_rank(p1_card)?;
        let p2_card = parse_rank(p2_card)?;
        let outcome = self.game.advance(p1_card, p2_card).map_err(js_err)?;

        to_js_value(&JsOutcome {
            neutral_card: outcome.neutral_card.abbreviation(),
            matchup_winner: winner_to_str(outcome.matchup_winner),
            winner_score_increase: outcome.winner_score_increase,
        })
    }

    /// Returns and clears the rounds played since the last call, oldest first.
    pub fn take_advancements(&self) -> Result<JsValue, JsValue> {
        let drained: Vec<JsMatchup> = self
            .pending
            .borrow_mut()
            .drain(..)
            .map(|advancement| JsMatchup {
                p1_card: advancement.p1_card.abbreviation(),
                p2_card: advancement.p2_card.abbreviation(),
                neutral_card: advancement.outcome.neutral_card.abbreviation(),
                matchup_winner: winner_to_str(advancement.outcome.matchup_winner),
            })
            .collect();
        to_js_value(&drained)
    }

    /// Returns the ranks player 2 may still play, for the page's opponent.
    pub fn p2_hand(&self) -> Vec<String> {
        self.game
            .cards()
            .in_hand
            .p2
            .iter()
            .map(|rank| rank.abbreviation().to_string())
            .collect()
    }

    /// Returns whether `card` (e.g. `"Q♠"`) is a card player 1 may play now.
    pub fn is_playable(&self, card: &str) -> bool {
        card.parse::<Card>().is_ok_and(|card| {
            card.suit == self.suits.player1()
                && self.game.has_in_hand(Player::P1, card.rank)
        })
    }

    pub fn snapshot(&self) -> Result<JsValue, JsValue> {
        let score = self.game.score();
        let cards = self.game.cards().to_cards(&self.suits);

        let snapshot = Snapshot {
            state: state_to_str(self.game.state()),
            score_p1: score.p1,
            score_p2: score.p2,
            pot: self.game.next_matchup_value(),
            round: self.game.round() as u32,
            suits: JsSuits {
                player1: self.suits.player1().name(),
                player2: self.suits.player2().name(),
                neutral: self.suits.neutral().name(),
            },
            cards: JsCards::from(&cards),
            matchups: self.game.matchups().iter().map(JsMatchup::from).collect(),
        };

        to_js_value(&snapshot)
    }
}

impl WasmGame {
    fn attach(mut game: Game, suits: SuitAssignments) -> Self {
        let pending: Pending = Rc::default();
        let queue = Rc::clone(&pending);
        let subscription = game.subscribe(move |event| {
            let GameEvent::Advanced(advancement) = event;
            queue.borrow_mut().push(*advancement);
        });

        Self {
            game,
            suits,
            pending,
            subscription,
        }
    }
}

#[derive(Serialize)]
struct Snapshot {
    state: &'static str,
    score_p1: u32,
    score_p2: u32,
    pot: u32,
    round: u32,
    suits: JsSuits,
    cards: JsCards,
    matchups: Vec<JsMatchup>,
}

#[derive(Serialize)]
struct JsSuits {
    player1: &'static str,
    player2: &'static str,
    neutral: &'static str,
}

#[derive(Serialize)]
struct JsCard {
    suit: &'static str,
    rank: &'static str,
    label: String,
}

#[derive(Serialize)]
struct JsCards {
    in_hand_p1: Vec<JsCard>,
    in_hand_p2: Vec<JsCard>,
    on_board_p1: Vec<JsCard>,
    on_board_p2: Vec<JsCard>,
    on_board_neutral: Vec<JsCard>,
}

impl From<&GameCardCollection<Card>> for JsCards {
    fn from(cards: &GameCardCollection<Card>) -> Self {
        let convert =
            |cards: &[Card]| -> Vec<JsCard> { cards.iter().copied().map(card_to_js).collect() };
        Self {
            in_hand_p1: convert(&cards.in_hand.p1),
            in_hand_p2: convert(&cards.in_hand.p2),
            on_board_p1: convert(&cards.on_board.p1),
            on_board_p2: convert(&cards.on_board.p2),
            on_board_neutral: convert(&cards.on_board.neutral),
        }
    }
}

#[derive(Serialize)]
struct JsOutcome {
    neutral_card: &'static str,
    matchup_winner: &'static str,
    winner_score_increase: u32,
}

#[derive(Serialize)]
struct JsMatchup {
    p1_card: &'static str,
    p2_card: &'static str,
    neutral_card: &'static str,
    matchup_winner: &'static str,
}

impl From<&Matchup> for JsMatchup {
    fn from(matchup: &Matchup) -> Self {
        Self {
            p1_card: matchup.p1_card.abbreviation(),
            p2_card: matchup.p2_card.abbreviation(),
            neutral_card: matchup.neutral_card.abbreviation(),
            matchup_winner: winner_to_str(matchup.matchup_winner),
        }
    }
}

fn card_to_js(card: Card) -> JsCard {
    JsCard {
        suit: card.suit.name(),
        rank: card.rank.abbreviation(),
        label: card.to_string(),
    }
}

/// Deterministic suit assignment per seed, so a reset page is reproducible.
fn suits_from_seed(seed: u32) -> SuitAssignments {
    let suits = Suit::ALL;
    let offset = seed as usize % suits.len();
    SuitAssignments::new(
        suits[offset],
        suits[(offset + 1) % suits.len()],
        suits[(offset + 2) % suits.len()],
    )
    .unwrap_or_default()
}

fn parse_rank(abbreviation: &str) -> Result<Rank, JsValue> {
    Rank::from_abbreviation(abbreviation)
        .ok_or_else(|| JsValue::from_str(&format!("unknown rank '{abbreviation}'")))
}

fn state_to_str(state: GameState) -> &'static str {
    match state {
        GameState::Active => "Active",
        GameState::Complete => "Complete",
    }
}

fn winner_to_str(winner: MatchupWinner) -> &'static str {
    match winner {
        MatchupWinner::P1 => "P1",
        MatchupWinner::P2 => "P2",
        MatchupWinner::None => "None",
    }
}

fn js_err<E: core::fmt::Display>(err: E) -> JsValue {
    JsValue::from_str(&err.to_string())
}

fn to_js_value<T: Serialize>(value: &T) -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(value).map_err(|err| JsValue::from_str(&err.to_string()))
}
