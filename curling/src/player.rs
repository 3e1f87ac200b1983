use serde::{Deserialize, Serialize};

use crate::{full_suit, Card, GameError, Suit};

/// The state of one seat at the table.
///
/// How the seat chooses its moves is not part of this; see the bots.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub name: String,
    pub suit: Suit,
    /// The cards not yet played, in dealing order.
    pub hand: Vec<Card>,
    pub score: u32,
}

impl Player {
    /// A player holding all thirteen cards of their suit.
    pub fn new(name: impl Into<String>, suit: Suit) -> Self {
        Self {
            name: name.into(),
            suit,
            hand: full_suit(suit),
            score: 0,
        }
    }

    pub fn position_in_hand(&self, card: Card) -> Option<usize> {
        self.hand.iter().position(|&c| c == card)
    }

    pub fn holds(&self, card: Card) -> bool {
        self.position_in_hand(card).is_some()
    }

    /// Whether the card belongs to this player and has left the hand.
    pub fn has_played(&self, card: Card) -> bool {
        card.suit == self.suit && !self.holds(card)
    }

    /// Removes the card from the hand and returns where it was.
    pub fn play(&mut self, card: Card) -> Result<usize, GameError> {
        let position = self
            .position_in_hand(card)
            .ok_or(GameError::CardNotInHand { card })?;
        self.hand.remove(position);
        Ok(position)
    }

    /// Puts a played card back where [`Self::play()`] took it from.
    pub fn unplay(&mut self, card: Card, position: usize) -> Result<(), GameError> {
        if self.holds(card) {
            return Err(GameError::CardAlreadyInHand { card });
        }
        self.hand.insert(position.min(self.hand.len()), card);
        Ok(())
    }

    /// The first card of the highest value in the hand.
    pub fn highest_card(&self) -> Option<Card> {
        self.hand.iter().rev().max_by_key(|c| c.value()).copied()
    }

    /// The last card of the lowest value in the hand.
    pub fn lowest_card(&self) -> Option<Card> {
        self.hand.iter().rev().min_by_key(|c| c.value()).copied()
    }

    pub fn hand_value(&self) -> u32 {
        self.hand.iter().map(Card::value).sum()
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.name, self.suit)
    }
}
