//! CLI Bastion Breach example: play player 1 against a random opponent.

#![allow(clippy::missing_docs_in_private_items)]

use std::io::{self, Write};
use std::time::{SystemTime, UNIX_EPOCH};

use bastion_breach::{
    Card, Game, GameEvent, GameOptions, MatchupWinner, Player, Rank, Suit, SuitAssignments,
};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

fn main() {
    println!("Bastion Breach CLI example (type 'quit' to quit, 'reset' to start over)");

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut next_seed = seed;

    'matches: loop {
        let suits = SuitAssignments::random(&mut rng);
        let Ok(mut game) = Game::new(GameOptions::default(), next_seed) else {
            println!("Could not set up a game.");
            break;
        };
        next_seed = next_seed.wrapping_add(1);
        game.subscribe(move |event| print_event(event, &suits));

        while !game.is_complete() {
            print_table(&game, &suits);

            let input = prompt_line("Your card (e.g. Q, 10, A): ");
            match input.as_str() {
                "quit" | "exit" => break 'matches,
                "reset" => {
                    println!("Resetting.");
                    continue 'matches;
                }
                _ => {}
            }

            let Some(p1_card) = Rank::from_abbreviation(&input.to_uppercase()) else {
                println!("Unknown rank '{input}'.");
                continue;
            };
            if !game.has_in_hand(Player::P1, p1_card) {
                println!("You already played {}.", format_card(Card::new(p1_card, suits.player1())));
                continue;
            }

            let p2_hand = game.cards().in_hand.p2;
            let p2_card = p2_hand[rng.random_range(0..p2_hand.len())];

            if let Err(err) = game.advance(p1_card, p2_card) {
                println!("Move error: {err}");
            }
        }

        let score = game.score();
        println!("\nFinal score: you {} - {} opponent", score.p1, score.p2);
        match game.leader() {
            MatchupWinner::P1 => println!("You win!"),
            MatchupWinner::P2 => println!("The opponent wins."),
            MatchupWinner::None => println!("It's a draw."),
        }

        if !matches!(prompt_line("Play again? (y/n): ").as_str(), "y" | "yes") {
            break;
        }
    }
}

fn print_event(event: &GameEvent, suits: &SuitAssignments) {
    let GameEvent::Advanced(advancement) = event;
    let outcome = advancement.outcome;
    println!(
        "\n{} vs {} on {}",
        format_card(Card::new(advancement.p1_card, suits.player1())),
        format_card(Card::new(advancement.p2_card, suits.player2())),
        format_card(Card::new(outcome.neutral_card, suits.neutral())),
    );
    match outcome.matchup_winner {
        MatchupWinner::P1 => println!("You take {} point(s).", outcome.winner_score_increase),
        MatchupWinner::P2 => println!(
            "The opponent takes {} point(s).",
            outcome.winner_score_increase
        ),
        MatchupWinner::None => println!("Stalemate, the pot carries over."),
    }
}

fn print_table(game: &Game, suits: &SuitAssignments) {
    let cards = game.cards().to_cards(suits);
    let score = game.score();

    println!(
        "\nRound {} of {} | score {} - {} | pot {}",
        game.round() + 1,
        game.round() + game.rounds_remaining(),
        score.p1,
        score.p2,
        game.next_matchup_value()
    );
    println!("Neutral:  {}", format_cards(&cards.on_board.neutral[..game.round()]));
    println!("You:      {}", format_cards(&cards.on_board.p1));
    println!("Opponent: {}", format_cards(&cards.on_board.p2));
    println!("Hand:     {}", format_cards(&cards.in_hand.p1));
}

fn prompt_line(prompt: &str) -> String {
    print!("{prompt}");
    let _ = io::stdout().flush();

    let mut input = String::new();
    match io::stdin().read_line(&mut input) {
        // End of input ends the session.
        Ok(0) | Err(_) => return "quit".to_string(),
        Ok(_) => {}
    }
    input.trim().to_lowercase()
}

fn format_cards(cards: &[Card]) -> String {
    if cards.is_empty() {
        return "(none)".to_string();
    }
    cards
        .iter()
        .map(|&card| format_card(card))
        .collect::<Vec<_>>()
        .join(" ")
}

fn format_card(card: Card) -> String {
    let color_code = match card.suit {
        Suit::Hearts | Suit::Diamonds => "31",
        Suit::Clubs => "32",
        Suit::Spades => "34",
    };

    colorize(&card.to_string(), color_code)
}

fn colorize(text: &str, code: &str) -> String {
    format!("\u{1b}[{code}m{text}\u{1b}[0m")
}
