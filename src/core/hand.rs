use std::fmt;
use std::str::FromStr;

use super::{Card, ShowdownError, Value};

/// Number of cards in every hand.
pub const HAND_SIZE: usize = 5;

/// Exactly five cards, held in descending value order.
///
/// The sort happens once on construction and is stable, so cards of equal
/// value keep the order they were supplied in. Duplicate cards are accepted;
/// classification never needs them to be distinct.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "String", into = "String"))]
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub struct Hand {
    cards: [Card; HAND_SIZE],
}

impl Hand {
    /// Build a hand from any collection of cards.
    ///
    /// # Examples
    ///
    /// ```
    /// use five_card_showdown::core::{Card, Hand, ShowdownError, Suit, Value};
    ///
    /// let cards = vec![
    ///     Card::new(Value::Five, Suit::Spade),
    ///     Card::new(Value::Nine, Suit::Spade),
    ///     Card::new(Value::Seven, Suit::Spade),
    ///     Card::new(Value::Six, Suit::Spade),
    ///     Card::new(Value::Eight, Suit::Spade),
    /// ];
    /// let hand = Hand::new(cards).unwrap();
    /// assert_eq!(Value::Nine, hand.high_card().value);
    ///
    /// let short = Hand::new(vec![Card::new(Value::Ace, Suit::Club)]);
    /// assert_eq!(Err(ShowdownError::InvalidHandSize(1)), short);
    /// ```
    pub fn new(cards: impl IntoIterator<Item = Card>) -> Result<Self, ShowdownError> {
        let cards: Vec<Card> = cards.into_iter().collect();
        let len = cards.len();
        let mut cards: [Card; HAND_SIZE] = cards
            .try_into()
            .map_err(|_| ShowdownError::InvalidHandSize(len))?;
        cards.sort_by(|a, b| b.value.cmp(&a.value));
        Ok(Self { cards })
    }

    /// Build a hand from numeric `(rank, suit)` pairs such as `(14, 'S')`.
    ///
    /// ```
    /// use five_card_showdown::core::Hand;
    ///
    /// let hand = Hand::from_pairs(&[(7, 'H'), (7, 'D'), (6, 'S'), (6, 'C'), (5, 'D')]).unwrap();
    /// assert_eq!("7h7d6s6c5d", hand.to_string());
    /// ```
    pub fn from_pairs(pairs: &[(u8, char)]) -> Result<Self, ShowdownError> {
        let cards = pairs
            .iter()
            .map(|&pair| Card::try_from(pair))
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(cards)
    }

    /// Parse a hand from five two char cards, e.g. `"AdKdQdJdTd"`.
    pub fn new_from_str(hand_string: &str) -> Result<Self, ShowdownError> {
        let mut chars = hand_string.chars();
        let mut cards = Vec::with_capacity(HAND_SIZE);
        while let Some(value_char) = chars.next() {
            let value = Value::from_char(value_char)
                .ok_or(ShowdownError::UnexpectedValueChar(value_char))?;
            let suit_char = chars.next().ok_or(ShowdownError::UnparsedCharsRemaining)?;
            let suit = super::Suit::from_char(suit_char)
                .ok_or(ShowdownError::UnexpectedSuitChar(suit_char))?;
            cards.push(Card::new(value, suit));
        }
        Self::new(cards)
    }

    pub fn cards(&self) -> &[Card; HAND_SIZE] {
        &self.cards
    }

    pub fn iter(&self) -> impl Iterator<Item = Card> + '_ {
        self.cards.iter().copied()
    }

    /// The card values in descending order.
    pub fn values(&self) -> [Value; HAND_SIZE] {
        self.cards.map(|c| c.value)
    }

    /// The first card of the canonical order.
    pub fn high_card(&self) -> Card {
        self.cards[0]
    }
}

impl FromStr for Hand {
    type Err = ShowdownError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new_from_str(s)
    }
}

impl TryFrom<String> for Hand {
    type Error = ShowdownError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new_from_str(&value)
    }
}

impl From<Hand> for String {
    fn from(hand: Hand) -> Self {
        hand.to_string()
    }
}

impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for card in &self.cards {
            write!(f, "{card}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Suit;

    #[test]
    fn test_sorted_descending_on_construction() {
        let hand = Hand::from_pairs(&[(8, 'D'), (3, 'D'), (4, 'D'), (6, 'D'), (5, 'D')]).unwrap();
        assert_eq!(
            [
                Value::Eight,
                Value::Six,
                Value::Five,
                Value::Four,
                Value::Three
            ],
            hand.values()
        );
    }

    #[test]
    fn test_sort_keeps_equal_values_in_input_order() {
        let hand = Hand::from_pairs(&[(2, 'H'), (9, 'C'), (2, 'D'), (2, 'S'), (2, 'C')]).unwrap();
        let suits: Vec<Suit> = hand.iter().map(|c| c.suit).collect();
        assert_eq!(
            vec![Suit::Club, Suit::Heart, Suit::Diamond, Suit::Spade, Suit::Club],
            suits
        );
    }

    #[test]
    fn test_too_few_cards() {
        let hand = Hand::from_pairs(&[(8, 'D'), (3, 'D'), (4, 'D'), (6, 'D')]);
        assert_eq!(Err(ShowdownError::InvalidHandSize(4)), hand);
    }

    #[test]
    fn test_too_many_cards() {
        let hand = Hand::new_from_str("AdKdQdJdTd9d");
        assert_eq!(Err(ShowdownError::InvalidHandSize(6)), hand);
    }

    #[test]
    fn test_empty_hand() {
        assert_eq!(
            Err(ShowdownError::InvalidHandSize(0)),
            Hand::new(Vec::new())
        );
    }

    #[test]
    fn test_invalid_card_reported_before_size() {
        let hand = Hand::from_pairs(&[(9, 'K'), (9, 'C')]);
        assert_eq!(Err(ShowdownError::InvalidCard { rank: 9, suit: 'K' }), hand);
    }

    #[test]
    fn test_duplicates_are_allowed() {
        let hand = Hand::from_pairs(&[(7, 'D'), (7, 'S'), (7, 'C'), (9, 'S'), (9, 'S')]);
        assert!(hand.is_ok());
    }

    #[test]
    fn test_parse_round_trip() {
        let hand: Hand = "2c3s4h5s6d".parse().unwrap();
        assert_eq!("6d5s4h3s2c", hand.to_string());
        assert_eq!(hand, hand.to_string().parse().unwrap());
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(
            Err(ShowdownError::UnparsedCharsRemaining),
            Hand::new_from_str("2c3s4h5s6")
        );
        assert_eq!(
            Err(ShowdownError::UnexpectedValueChar('1')),
            Hand::new_from_str("1c3s4h5s6d")
        );
        assert_eq!(
            Err(ShowdownError::UnexpectedSuitChar('x')),
            Hand::new_from_str("2x3s4h5s6d")
        );
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_uses_string_form() {
        let hand = Hand::new_from_str("AsKsQsJsTs").unwrap();
        let json = serde_json::to_string(&hand).unwrap();
        assert_eq!("\"AsKsQsJsTs\"", json);
        let back: Hand = serde_json::from_str(&json).unwrap();
        assert_eq!(hand, back);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_rejects_short_hand() {
        let result: Result<Hand, _> = serde_json::from_str("\"AsKs\"");
        assert!(result.is_err());
    }
}
