use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// A playing card. Every player holds the thirteen cards of one suit.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Card {
    pub suit: Suit,
    pub rank: Rank,
}

/// The suit of a [card](Card). Each player is identified with one suit.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum Suit {
    #[serde(rename = "♦")]
    Diamond,
    #[serde(rename = "♥")]
    Heart,
    #[serde(rename = "♠")]
    Spade,
    #[serde(rename = "♣")]
    Club,
}

/// The rank of a [card](Card).
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum Rank {
    #[serde(rename = "2")]
    Two,
    #[serde(rename = "3")]
    Three,
    #[serde(rename = "4")]
    Four,
    #[serde(rename = "5")]
    Five,
    #[serde(rename = "6")]
    Six,
    #[serde(rename = "7")]
    Seven,
    #[serde(rename = "8")]
    Eight,
    #[serde(rename = "9")]
    Nine,
    #[serde(rename = "10")]
    Ten,
    #[serde(rename = "J")]
    Jack,
    #[serde(rename = "Q")]
    Queen,
    #[serde(rename = "K")]
    King,
    #[serde(rename = "A")]
    Ace,
}

impl Suit {
    pub const ALL: [Suit; 4] = [Suit::Diamond, Suit::Heart, Suit::Spade, Suit::Club];

    pub fn symbol(self) -> char {
        match self {
            Suit::Diamond => '♦',
            Suit::Heart => '♥',
            Suit::Spade => '♠',
            Suit::Club => '♣',
        }
    }
}

impl Rank {
    /// The order in which a fresh hand is dealt.
    pub const DEAL_ORDER: [Rank; 13] = [
        Rank::King,
        Rank::Queen,
        Rank::Jack,
        Rank::Ace,
        Rank::Two,
        Rank::Three,
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Seven,
        Rank::Eight,
        Rank::Nine,
        Rank::Ten,
    ];

    /// Aces count one, number cards their face value, court cards ten.
    pub fn value(self) -> u32 {
        match self {
            Rank::Ace => 1,
            Rank::Two => 2,
            Rank::Three => 3,
            Rank::Four => 4,
            Rank::Five => 5,
            Rank::Six => 6,
            Rank::Seven => 7,
            Rank::Eight => 8,
            Rank::Nine => 9,
            Rank::Ten | Rank::Jack | Rank::Queen | Rank::King => 10,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Rank::Two => "2",
            Rank::Three => "3",
            Rank::Four => "4",
            Rank::Five => "5",
            Rank::Six => "6",
            Rank::Seven => "7",
            Rank::Eight => "8",
            Rank::Nine => "9",
            Rank::Ten => "10",
            Rank::Jack => "J",
            Rank::Queen => "Q",
            Rank::King => "K",
            Rank::Ace => "A",
        }
    }
}

impl Card {
    pub fn new(rank: Rank, suit: Suit) -> Self {
        Self { rank, suit }
    }

    pub fn value(&self) -> u32 {
        self.rank.value()
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.rank, self.suit)
    }
}

impl std::fmt::Display for Rank {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl std::fmt::Display for Suit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// The error type for the [`FromStr`] instances of [`Card`], [`Rank`] and [`Suit`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CardFromStrErr {
    Empty,
    InvalidRank,
    InvalidSuit,
}

impl std::error::Error for CardFromStrErr {}

impl std::fmt::Display for CardFromStrErr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CardFromStrErr::Empty => write!(f, "No card given"),
            CardFromStrErr::InvalidRank => {
                write!(f, "Unknown rank, expected one of A, 2-10, J, Q, K")
            }
            CardFromStrErr::InvalidSuit => write!(f, "Unknown suit, expected one of ♦, ♥, ♠, ♣"),
        }
    }
}

impl FromStr for Rank {
    type Err = CardFromStrErr;

    /// Accepts `10`, `T` and `0` for the ten, case-insensitively for letters.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let rank = match s.trim().to_ascii_uppercase().as_str() {
            "" => return Err(CardFromStrErr::Empty),
            "2" => Rank::Two,
            "3" => Rank::Three,
            "4" => Rank::Four,
            "5" => Rank::Five,
            "6" => Rank::Six,
            "7" => Rank::Seven,
            "8" => Rank::Eight,
            "9" => Rank::Nine,
            "10" | "T" | "0" => Rank::Ten,
            "J" => Rank::Jack,
            "Q" => Rank::Queen,
            "K" => Rank::King,
            "A" => Rank::Ace,
            _ => return Err(CardFromStrErr::InvalidRank),
        };
        Ok(rank)
    }
}

impl FromStr for Suit {
    type Err = CardFromStrErr;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "" => Err(CardFromStrErr::Empty),
            "♦" | "D" | "d" => Ok(Suit::Diamond),
            "♥" | "H" | "h" => Ok(Suit::Heart),
            "♠" | "S" | "s" => Ok(Suit::Spade),
            "♣" | "C" | "c" => Ok(Suit::Club),
            _ => Err(CardFromStrErr::InvalidSuit),
        }
    }
}

impl FromStr for Card {
    type Err = CardFromStrErr;

    /// Parses a rank followed by a suit symbol, e.g. `10♥` or `K♣`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let suit_char = s.chars().last().ok_or(CardFromStrErr::Empty)?;
        let rank_part = &s[..s.len() - suit_char.len_utf8()];
        let suit = suit_char.to_string().parse()?;
        let rank = rank_part.parse()?;
        Ok(Card { rank, suit })
    }
}

/// Shorthand for creating cards from a string.
///
/// The rank comes first (`A`, `2`-`10`, `J`, `Q`, `K`), followed by the
/// [suit](Suit) as a unicode character (♦, ♥, ♠, or ♣).
///
/// This macro is just calling the [`FromStr`] instance of [`Card`].
/// ```
/// # use curling::{card, Card, Rank, Suit};
/// assert_eq!(
///     card!("10♥"),
///     Card { rank: Rank::Ten, suit: Suit::Heart }
/// );
/// ```
#[macro_export]
macro_rules! card {
    ($rs:literal) => {
        <$crate::Card as std::str::FromStr>::from_str($rs)
            .expect("Invalid card code given to card! macro")
    };
}
// The import is for using the macro in other modules, see https://stackoverflow.com/a/31749071/1726797
#[allow(unused_imports)]
pub(crate) use card;

/// The thirteen cards of one suit, in dealing order.
pub fn full_suit(suit: Suit) -> Vec<Card> {
    Rank::DEAL_ORDER
        .iter()
        .map(|&rank| Card { rank, suit })
        .collect()
}
