//! Card types: ranks, suits, and their string forms.

use core::fmt;
use core::str::FromStr;

use alloc::vec::Vec;

use crate::error::ParseCardError;

/// Number of ranks in a suit, and therefore cards per lane.
pub const RANK_COUNT: usize = 13;

/// Card rank.
///
/// Ranks are ordered numerically, then faces, then the Ace ("aces high").
/// That order is for display and iteration; who wins a matchup is decided by
/// [`Rank::beats`], which treats the Ace specially.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Rank {
    /// 2.
    Two,
    /// 3.
    Three,
    /// 4.
    Four,
    /// 5.
    Five,
    /// 6.
    Six,
    /// 7.
    Seven,
    /// 8.
    Eight,
    /// 9.
    Nine,
    /// 10.
    Ten,
    /// Jack.
    Jack,
    /// Queen.
    Queen,
    /// King.
    King,
    /// Ace.
    Ace,
}

impl Rank {
    /// Every rank exactly once, in standard order with aces high.
    pub const ALL: [Self; RANK_COUNT] = [
        Self::Two,
        Self::Three,
        Self::Four,
        Self::Five,
        Self::Six,
        Self::Seven,
        Self::Eight,
        Self::Nine,
        Self::Ten,
        Self::Jack,
        Self::Queen,
        Self::King,
        Self::Ace,
    ];

    /// Returns every rank as a vector, in the order of [`Rank::ALL`].
    #[must_use]
    pub fn all() -> Vec<Self> {
        Self::ALL.to_vec()
    }

    /// Position in [`Rank::ALL`].
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Returns whether this is a Jack, Queen or King.
    #[must_use]
    pub const fn is_face(self) -> bool {
        matches!(self, Self::Jack | Self::Queen | Self::King)
    }

    /// Short form used on the card face.
    #[must_use]
    pub const fn abbreviation(self) -> &'static str {
        match self {
            Self::Two => "2",
            Self::Three => "3",
            Self::Four => "4",
            Self::Five => "5",
            Self::Six => "6",
            Self::Seven => "7",
            Self::Eight => "8",
            Self::Nine => "9",
            Self::Ten => "10",
            Self::Jack => "J",
            Self::Queen => "Q",
            Self::King => "K",
            Self::Ace => "A",
        }
    }

    /// English name of the rank.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Two => "Two",
            Self::Three => "Three",
            Self::Four => "Four",
            Self::Five => "Five",
            Self::Six => "Six",
            Self::Seven => "Seven",
            Self::Eight => "Eight",
            Self::Nine => "Nine",
            Self::Ten => "Ten",
            Self::Jack => "Jack",
            Self::Queen => "Queen",
            Self::King => "King",
            Self::Ace => "Ace",
        }
    }

    /// Parses a rank from its abbreviation.
    #[must_use]
    pub fn from_abbreviation(abbreviation: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|rank| rank.abbreviation() == abbreviation)
    }

    /// Collects the ranks of the given cards, preserving order.
    #[must_use]
    pub fn from_cards(cards: &[Card]) -> Vec<Self> {
        cards.iter().map(|card| card.rank).collect()
    }

    /// Returns whether this rank wins against `other` in a matchup.
    ///
    /// - A rank never beats itself.
    /// - The Ace beats face cards and nothing else.
    /// - Numeric cards beat the Ace; face cards lose to it.
    /// - Otherwise the higher rank wins.
    ///
    /// For any two distinct ranks exactly one beats the other.
    #[must_use]
    pub const fn beats(self, other: Self) -> bool {
        if self as usize == other as usize {
            return false;
        }

        if matches!(self, Self::Ace) {
            return other.is_face();
        }

        if matches!(other, Self::Ace) {
            return !self.is_face();
        }

        // With the Ace out of the way, declaration order is the
        // Ace-excluded order Two..King.
        self as usize > other as usize
    }

    /// Returns whether this rank beats every rank in `others`.
    ///
    /// A rank only beats a group that has at least one member, so an empty
    /// slice yields `false`.
    #[must_use]
    pub fn beats_all(self, others: &[Self]) -> bool {
        !others.is_empty() && others.iter().all(|&other| self.beats(other))
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.abbreviation())
    }
}

/// Card suit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Suit {
    /// Spades.
    Spades,
    /// Hearts.
    Hearts,
    /// Diamonds.
    Diamonds,
    /// Clubs.
    Clubs,
}

impl Suit {
    /// Every suit exactly once.
    pub const ALL: [Self; 4] = [Self::Spades, Self::Hearts, Self::Diamonds, Self::Clubs];

    /// Returns every suit as a vector, in the order of [`Suit::ALL`].
    #[must_use]
    pub fn all() -> Vec<Self> {
        Self::ALL.to_vec()
    }

    /// Unicode symbol printed after the rank.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Spades => '♠',
            Self::Hearts => '♥',
            Self::Diamonds => '♦',
            Self::Clubs => '♣',
        }
    }

    /// Lowercase singular name, as used for texture lookups.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Spades => "spade",
            Self::Hearts => "heart",
            Self::Diamonds => "diamond",
            Self::Clubs => "club",
        }
    }

    /// Parses a suit from its symbol.
    #[must_use]
    pub fn from_symbol(symbol: char) -> Option<Self> {
        Self::ALL.into_iter().find(|suit| suit.symbol() == symbol)
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// A playing card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Card {
    /// The rank of the card.
    pub rank: Rank,
    /// The suit of the card.
    pub suit: Suit,
}

impl Card {
    /// Creates a new card.
    #[must_use]
    pub const fn new(rank: Rank, suit: Suit) -> Self {
        Self { rank, suit }
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank, self.suit)
    }
}

impl FromStr for Card {
    type Err = ParseCardError;

    /// Parses the form produced by [`Display`](fmt::Display), e.g. `"Q♠"` or `"10♥"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        let symbol = chars.next_back().ok_or(ParseCardError::Empty)?;
        let suit = Suit::from_symbol(symbol).ok_or(ParseCardError::UnknownSuit(symbol))?;
        let rank = Rank::from_abbreviation(chars.as_str()).ok_or(ParseCardError::UnknownRank)?;

        Ok(Self::new(rank, suit))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ranks_are_in_standard_order_with_aces_high() {
        let expected = [
            Rank::Two,
            Rank::Three,
            Rank::Four,
            Rank::Five,
            Rank::Six,
            Rank::Seven,
            Rank::Eight,
            Rank::Nine,
            Rank::Ten,
            Rank::Jack,
            Rank::Queen,
            Rank::King,
            Rank::Ace,
        ];
        assert_eq!(Rank::all(), expected.to_vec());
        for (index, rank) in Rank::ALL.into_iter().enumerate() {
            assert_eq!(rank.index(), index);
        }
    }

    #[test]
    fn beats_against_neutral_and_opponent() {
        // (p1, neutral, p2, p1 beats both)
        let cases = [
            (Rank::Ace, Rank::Ace, Rank::Ace, false),
            (Rank::Ace, Rank::Ace, Rank::Three, false),
            (Rank::Ace, Rank::Ace, Rank::Queen, false),
            (Rank::Ace, Rank::Two, Rank::King, false),
            (Rank::Ace, Rank::King, Rank::Ace, false),
            (Rank::Ace, Rank::Jack, Rank::Four, false),
            (Rank::Ace, Rank::Queen, Rank::Jack, true),
            (Rank::Five, Rank::Ace, Rank::Seven, false),
            (Rank::Seven, Rank::Ace, Rank::Five, true),
            (Rank::Seven, Rank::Ace, Rank::Queen, false),
            (Rank::Eight, Rank::Nine, Rank::Ten, false),
            (Rank::Ten, Rank::Nine, Rank::Five, true),
            (Rank::Nine, Rank::Ten, Rank::Four, false),
            (Rank::Four, Rank::Five, Rank::Queen, false),
            (Rank::Nine, Rank::Queen, Rank::Ten, false),
            (Rank::Five, Rank::Queen, Rank::King, false),
            (Rank::King, Rank::King, Rank::King, false),
        ];

        for (p1, neutral, p2, p1_wins) in cases {
            assert_eq!(p1.beats_all(&[neutral, p2]), p1_wins, "{p1} vs [{neutral}, {p2}]");
            if p1_wins {
                assert!(p1.beats(neutral));
                assert!(p1.beats(p2));
            }
        }
    }

    #[test]
    fn face_cards_lose_to_the_ace() {
        for face in [Rank::Jack, Rank::Queen, Rank::King] {
            assert!(Rank::Ace.beats(face));
            assert!(!face.beats(Rank::Ace));
            assert!(face.beats(Rank::Ten));
        }
    }

    #[test]
    fn distinct_ranks_have_exactly_one_winner() {
        for a in Rank::ALL {
            assert!(!a.beats(a));
            for b in Rank::ALL.into_iter().filter(|&b| b != a) {
                assert_ne!(a.beats(b), b.beats(a), "{a} vs {b}");
            }
        }
    }

    #[test]
    fn beats_all_of_nothing_is_false() {
        assert!(!Rank::Ace.beats_all(&[]));
    }

    #[test]
    fn card_string_round_trip() {
        for suit in Suit::ALL {
            for rank in Rank::ALL {
                let card = Card::new(rank, suit);
                let text = alloc::format!("{card}");
                assert_eq!(text.parse::<Card>(), Ok(card));
            }
        }
        assert_eq!(alloc::format!("{}", Card::new(Rank::Queen, Suit::Spades)), "Q♠");
        assert_eq!(alloc::format!("{}", Card::new(Rank::Ten, Suit::Hearts)), "10♥");
    }

    #[test]
    fn card_parse_errors() {
        assert_eq!("".parse::<Card>(), Err(ParseCardError::Empty));
        assert_eq!("Qx".parse::<Card>(), Err(ParseCardError::UnknownSuit('x')));
        assert_eq!("1♠".parse::<Card>(), Err(ParseCardError::UnknownRank));
        assert_eq!("♠".parse::<Card>(), Err(ParseCardError::UnknownRank));
    }

    #[test]
    fn ranks_from_cards() {
        let cards = [
            Card::new(Rank::King, Suit::Clubs),
            Card::new(Rank::Two, Suit::Hearts),
        ];
        assert_eq!(Rank::from_cards(&cards), alloc::vec![Rank::King, Rank::Two]);
    }
}
