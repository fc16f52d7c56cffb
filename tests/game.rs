//! Game integration tests.

extern crate alloc;

use alloc::rc::Rc;
use core::cell::RefCell;

use bastion_breach::{
    AdvanceError, Advancement, Card, ConfigError, Game, GameAdvancementOutcome, GameEvent,
    GameOptions, GameState, MatchupWinner, Player, RANK_COUNT, Rank, Score, Suit,
    SuitAssignments,
};

fn game_with_board_prefix(prefix: &[Rank]) -> Game {
    Game::new(GameOptions::default().with_neutral_board_prefix(prefix), 0).unwrap()
}

#[test]
fn new_game_starts_active_with_full_hands() {
    let game = Game::new(GameOptions::default(), 9).unwrap();
    let cards = game.cards();

    assert_eq!(game.state(), GameState::Active);
    assert_eq!(game.score(), Score { p1: 0, p2: 0 });
    assert_eq!(game.next_matchup_value(), 1);
    assert!(game.matchups().is_empty());
    assert_eq!(game.rounds_remaining(), RANK_COUNT);
    assert_eq!(cards.in_hand.p1, Rank::all());
    assert_eq!(cards.in_hand.p2, Rank::all());
    assert!(cards.on_board.p1.is_empty());
    assert!(cards.on_board.p2.is_empty());

    let mut neutral = cards.on_board.neutral;
    assert_eq!(neutral.len(), RANK_COUNT);
    neutral.sort();
    assert_eq!(neutral, Rank::all());
}

#[test]
fn shuffled_board_depends_only_on_seed() {
    let a = Game::new(GameOptions::default(), 1234).unwrap();
    let b = Game::new(GameOptions::default(), 1234).unwrap();
    assert_eq!(a.cards().on_board.neutral, b.cards().on_board.neutral);

    let boards: Vec<Vec<Rank>> = (0..8)
        .map(|seed| {
            Game::new(GameOptions::default(), seed)
                .unwrap()
                .cards()
                .on_board
                .neutral
        })
        .collect();
    assert!(boards.iter().any(|board| *board != boards[0]));
}

#[test]
fn configured_board_is_used_in_order() {
    let mut board = Rank::all();
    board.reverse();
    let game = Game::new(GameOptions::default().with_neutral_board(board.clone()), 0).unwrap();
    assert_eq!(game.cards().on_board.neutral, board);
}

#[test]
fn duplicate_rank_board_is_rejected() {
    let mut board = vec![Rank::Two, Rank::Two, Rank::Three];
    board.extend(Rank::ALL.iter().copied().skip(2));
    let err = Game::new(GameOptions::default().with_neutral_board(board), 0).unwrap_err();

    assert_eq!(err, ConfigError::DuplicateRank(Rank::Two));
    assert!(err.to_string().starts_with("invalid configuration: duplicate rank"));
}

#[test]
fn incomplete_board_is_rejected() {
    let board: Vec<Rank> = Rank::ALL.iter().copied().filter(|&r| r != Rank::Ace).collect();
    assert_eq!(board.len(), 12);
    let err = Game::new(GameOptions::default().with_neutral_board(board), 0).unwrap_err();

    assert_eq!(err, ConfigError::IncompleteBoard(Rank::Ace));
    assert!(err.to_string().starts_with("invalid configuration: incomplete board"));
}

#[test]
fn empty_board_is_rejected() {
    let err = Game::new(GameOptions::default().with_neutral_board(Vec::new()), 0).unwrap_err();
    assert_eq!(err, ConfigError::IncompleteBoard(Rank::Two));
}

#[test]
fn winner_scores_one_point_without_stalemates() {
    let mut game = game_with_board_prefix(&[Rank::Seven]);
    assert_eq!(game.score().p1, 0);

    let outcome = game.advance(Rank::Queen, Rank::Ten).unwrap();
    assert_eq!(
        outcome,
        GameAdvancementOutcome {
            neutral_card: Rank::Seven,
            matchup_winner: MatchupWinner::P1,
            winner_score_increase: 1,
        }
    );
    assert_eq!(game.score(), Score { p1: 1, p2: 0 });
}

#[test]
fn player_two_can_win() {
    let mut game = game_with_board_prefix(&[Rank::Four]);
    let outcome = game.advance(Rank::Three, Rank::Seven).unwrap();

    assert_eq!(outcome.matchup_winner, MatchupWinner::P2);
    assert_eq!(game.score(), Score { p1: 0, p2: 1 });
    assert_eq!(game.leader(), MatchupWinner::P2);
}

#[test]
fn stalemates_grow_the_pot_until_someone_wins() {
    let mut game = game_with_board_prefix(&[Rank::Ace, Rank::Five, Rank::Jack, Rank::Two]);

    let first = game.advance(Rank::King, Rank::King).unwrap();
    assert_eq!(first.neutral_card, Rank::Ace);
    assert_eq!(first.matchup_winner, MatchupWinner::None);
    assert_eq!(first.winner_score_increase, 0);
    assert_eq!(game.score(), Score { p1: 0, p2: 0 });
    assert_eq!(game.next_matchup_value(), 2);

    let second = game.advance(Rank::Five, Rank::Five).unwrap();
    assert_eq!(second.neutral_card, Rank::Five);
    assert_eq!(second.matchup_winner, MatchupWinner::None);
    assert_eq!(game.score(), Score { p1: 0, p2: 0 });
    assert_eq!(game.next_matchup_value(), 3);

    let third = game.advance(Rank::Queen, Rank::Four).unwrap();
    assert_eq!(third.neutral_card, Rank::Jack);
    assert_eq!(third.matchup_winner, MatchupWinner::P1);
    assert_eq!(third.winner_score_increase, 3);
    assert_eq!(game.score(), Score { p1: 3, p2: 0 });
    assert_eq!(game.next_matchup_value(), 1);

    // Three beats the neutral Two and the Ace.
    let fourth = game.advance(Rank::Three, Rank::Ace).unwrap();
    assert_eq!(fourth.winner_score_increase, 1);
    assert_eq!(game.score(), Score { p1: 4, p2: 0 });
}

#[test]
fn illegal_move_leaves_the_game_untouched() {
    let mut game = game_with_board_prefix(&[Rank::Seven]);
    game.advance(Rank::Queen, Rank::Ten).unwrap();

    let cards = game.cards();
    let score = game.score();

    assert_eq!(
        game.advance(Rank::Queen, Rank::Two).unwrap_err(),
        AdvanceError::CardNotInHand {
            player: Player::P1,
            rank: Rank::Queen,
        }
    );
    // P1's card is legal, P2's is not: neither hand may change.
    let err = game.advance(Rank::Two, Rank::Ten).unwrap_err();
    assert_eq!(
        err,
        AdvanceError::CardNotInHand {
            player: Player::P2,
            rank: Rank::Ten,
        }
    );
    assert_eq!(err.to_string(), "could not find card 10 in P2's hand");

    assert_eq!(game.cards(), cards);
    assert_eq!(game.score(), score);
    assert_eq!(game.matchups().len(), 1);
}

#[test]
fn full_match_completes_after_thirteen_rounds() {
    let mut game = Game::new(GameOptions::default(), 77).unwrap();
    let p2_order: Vec<Rank> = Rank::ALL.iter().rev().copied().collect();

    for (round, (&p1, &p2)) in Rank::ALL.iter().zip(&p2_order).enumerate() {
        assert_eq!(game.state(), GameState::Active);
        assert_eq!(game.round(), round);
        game.advance(p1, p2).unwrap();
    }

    assert!(game.is_complete());
    assert_eq!(game.state(), GameState::Complete);
    assert_eq!(game.matchups().len(), RANK_COUNT);
    assert_eq!(game.rounds_remaining(), 0);

    let cards = game.cards();
    assert!(cards.in_hand.p1.is_empty());
    assert!(cards.in_hand.p2.is_empty());
    assert_eq!(cards.on_board.p1, Rank::all());
    assert_eq!(cards.on_board.p2, p2_order);

    let neutral = cards.on_board.neutral;
    for (matchup, &revealed) in game.matchups().iter().zip(&neutral) {
        assert_eq!(matchup.neutral_card, revealed);
    }

    let awarded: u32 = game
        .matchups()
        .iter()
        .filter(|m| !m.matchup_winner.is_stalemate())
        .count() as u32;
    let score = game.score();
    assert!(score.p1 + score.p2 >= awarded);

    assert_eq!(
        game.advance(Rank::Two, Rank::Two).unwrap_err(),
        AdvanceError::CardNotInHand {
            player: Player::P1,
            rank: Rank::Two,
        }
    );
}

#[test]
fn snapshots_are_independent_of_the_game() {
    let mut game = game_with_board_prefix(&[Rank::Seven]);

    let mut cards = game.cards();
    cards.in_hand.p1.clear();
    cards.on_board.neutral.reverse();
    let mut score = game.score();
    score.p1 = 100;

    assert_eq!(game.cards().in_hand.p1.len(), RANK_COUNT);
    assert_eq!(game.cards().on_board.neutral[0], Rank::Seven);
    assert_eq!(game.score().p1, 0);

    let outcome = game.advance(Rank::Queen, Rank::Ten).unwrap();
    assert_eq!(outcome.neutral_card, Rank::Seven);
    assert_eq!(game.score().p1, 1);
}

#[test]
fn subscribers_receive_each_advance_in_order() {
    let mut game = game_with_board_prefix(&[Rank::Seven]);
    let received = Rc::new(RefCell::new(Vec::new()));

    let first = Rc::clone(&received);
    game.subscribe(move |event| first.borrow_mut().push((1, *event)));
    let second = Rc::clone(&received);
    game.subscribe(move |event| second.borrow_mut().push((2, *event)));
    assert_eq!(game.subscriber_count(), 2);

    let outcome = game.advance(Rank::Queen, Rank::Ten).unwrap();
    let expected = GameEvent::Advanced(Advancement {
        p1_card: Rank::Queen,
        p2_card: Rank::Ten,
        outcome,
    });

    assert_eq!(*received.borrow(), vec![(1, expected), (2, expected)]);
}

#[test]
fn unsubscribed_handlers_are_not_called() {
    let mut game = Game::new(GameOptions::default(), 5).unwrap();
    let calls = Rc::new(RefCell::new(0));

    let counter = Rc::clone(&calls);
    let id = game.subscribe(move |_| *counter.borrow_mut() += 1);
    game.advance(Rank::Two, Rank::Two).unwrap();

    assert!(game.unsubscribe(id));
    assert!(!game.unsubscribe(id));
    game.advance(Rank::Three, Rank::Three).unwrap();

    assert_eq!(*calls.borrow(), 1);
    assert_eq!(game.subscriber_count(), 0);
}

#[test]
fn rejected_advance_publishes_nothing() {
    let mut game = Game::new(GameOptions::default(), 5).unwrap();
    let calls = Rc::new(RefCell::new(0));
    let counter = Rc::clone(&calls);
    game.subscribe(move |_| *counter.borrow_mut() += 1);

    game.advance(Rank::Two, Rank::Two).unwrap();
    assert!(game.advance(Rank::Two, Rank::Three).is_err());

    assert_eq!(*calls.borrow(), 1);
}

#[test]
fn cards_render_in_lane_suits() {
    let mut game = game_with_board_prefix(&[Rank::Seven]);
    game.advance(Rank::Queen, Rank::Ten).unwrap();

    let suits = SuitAssignments::new(Suit::Clubs, Suit::Hearts, Suit::Spades).unwrap();
    let cards = game.cards().to_cards(&suits);

    assert_eq!(cards.on_board.p1, [Card::new(Rank::Queen, Suit::Clubs)]);
    assert_eq!(cards.on_board.p2, [Card::new(Rank::Ten, Suit::Hearts)]);
    assert_eq!(cards.on_board.neutral[0], "7♠".parse::<Card>().unwrap());
    assert!(!cards.in_hand.p1.contains(&Card::new(Rank::Queen, Suit::Clubs)));
}
