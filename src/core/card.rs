use std::fmt;

use super::ShowdownError;

/// Card rank. Ordering follows poker strength with the ace high.
///
/// The discriminant is a zero based index; [`Value::rank`] gives the
/// conventional numeric rank where jack is 11 and ace is 14.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Clone, Copy, Hash)]
pub enum Value {
    Two = 0,
    Three = 1,
    Four = 2,
    Five = 3,
    Six = 4,
    Seven = 5,
    Eight = 6,
    Nine = 7,
    Ten = 8,
    Jack = 9,
    Queen = 10,
    King = 11,
    Ace = 12,
}

const VALUES: [Value; 13] = [
    Value::Two,
    Value::Three,
    Value::Four,
    Value::Five,
    Value::Six,
    Value::Seven,
    Value::Eight,
    Value::Nine,
    Value::Ten,
    Value::Jack,
    Value::Queen,
    Value::King,
    Value::Ace,
];

impl Value {
    /// Every value from deuce to ace.
    pub const fn values() -> [Value; 13] {
        VALUES
    }

    /// Look up a value by its numeric rank (2..=14).
    ///
    /// ```
    /// use five_card_showdown::core::Value;
    ///
    /// assert_eq!(Some(Value::Jack), Value::from_rank(11));
    /// assert_eq!(None, Value::from_rank(1));
    /// ```
    pub fn from_rank(rank: u8) -> Option<Self> {
        rank.checked_sub(2)
            .and_then(|idx| VALUES.get(idx as usize))
            .copied()
    }

    /// Numeric rank, 2 for a deuce up to 14 for an ace.
    pub const fn rank(self) -> u8 {
        self as u8 + 2
    }

    /// Parse the single char used in card strings.
    pub fn from_char(c: char) -> Option<Self> {
        match c.to_ascii_uppercase() {
            '2' => Some(Value::Two),
            '3' => Some(Value::Three),
            '4' => Some(Value::Four),
            '5' => Some(Value::Five),
            '6' => Some(Value::Six),
            '7' => Some(Value::Seven),
            '8' => Some(Value::Eight),
            '9' => Some(Value::Nine),
            'T' => Some(Value::Ten),
            'J' => Some(Value::Jack),
            'Q' => Some(Value::Queen),
            'K' => Some(Value::King),
            'A' => Some(Value::Ace),
            _ => None,
        }
    }

    pub const fn to_char(self) -> char {
        match self {
            Value::Two => '2',
            Value::Three => '3',
            Value::Four => '4',
            Value::Five => '5',
            Value::Six => '6',
            Value::Seven => '7',
            Value::Eight => '8',
            Value::Nine => '9',
            Value::Ten => 'T',
            Value::Jack => 'J',
            Value::Queen => 'Q',
            Value::King => 'K',
            Value::Ace => 'A',
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

/// Card suit. Suits carry no strength; they only matter for flushes.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum Suit {
    Club = 0,
    Diamond = 1,
    Heart = 2,
    Spade = 3,
}

const SUITS: [Suit; 4] = [Suit::Club, Suit::Diamond, Suit::Heart, Suit::Spade];

impl Suit {
    pub const fn suits() -> [Suit; 4] {
        SUITS
    }

    /// Parse a suit char. Both `s` and `S` are spades.
    pub fn from_char(c: char) -> Option<Self> {
        match c.to_ascii_lowercase() {
            'c' => Some(Suit::Club),
            'd' => Some(Suit::Diamond),
            'h' => Some(Suit::Heart),
            's' => Some(Suit::Spade),
            _ => None,
        }
    }

    pub const fn to_char(self) -> char {
        match self {
            Suit::Club => 'c',
            Suit::Diamond => 'd',
            Suit::Heart => 'h',
            Suit::Spade => 's',
        }
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

/// A single playing card.
///
/// Cards deliberately do not implement `Ord`: hands order cards by
/// [`Value`] alone and suits never break ties.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub struct Card {
    pub value: Value,
    pub suit: Suit,
}

impl Card {
    pub const fn new(value: Value, suit: Suit) -> Self {
        Self { value, suit }
    }
}

/// Build a card from a numeric rank and a suit letter, e.g. `(11, 'D')`.
impl TryFrom<(u8, char)> for Card {
    type Error = ShowdownError;

    fn try_from((rank, suit): (u8, char)) -> Result<Self, Self::Error> {
        match (Value::from_rank(rank), Suit::from_char(suit)) {
            (Some(value), Some(suit)) => Ok(Card::new(value, suit)),
            _ => Err(ShowdownError::InvalidCard { rank, suit }),
        }
    }
}

impl std::str::FromStr for Card {
    type Err = ShowdownError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        let value_char = chars.next().ok_or(ShowdownError::UnparsedCharsRemaining)?;
        let value =
            Value::from_char(value_char).ok_or(ShowdownError::UnexpectedValueChar(value_char))?;
        let suit_char = chars.next().ok_or(ShowdownError::UnparsedCharsRemaining)?;
        let suit =
            Suit::from_char(suit_char).ok_or(ShowdownError::UnexpectedSuitChar(suit_char))?;
        if chars.next().is_some() {
            return Err(ShowdownError::UnparsedCharsRemaining);
        }
        Ok(Card::new(value, suit))
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.value, self.suit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_value_ordering() {
        assert!(Value::Ace > Value::King);
        assert!(Value::Two < Value::Three);
        let mut values = Value::values();
        values.reverse();
        values.sort();
        assert_eq!(Value::values(), values);
    }

    #[test]
    fn test_rank_round_trip_for_every_value() {
        for value in Value::values() {
            assert_eq!(Some(value), Value::from_rank(value.rank()));
        }
        assert_eq!(14, Value::Ace.rank());
        assert_eq!(2, Value::Two.rank());
    }

    #[test]
    fn test_from_rank_out_of_range() {
        assert_eq!(None, Value::from_rank(0));
        assert_eq!(None, Value::from_rank(1));
        assert_eq!(None, Value::from_rank(15));
    }

    #[test]
    fn test_char_parsing_ignores_case() {
        assert_eq!(Some(Value::Ten), Value::from_char('t'));
        assert_eq!(Some(Suit::Spade), Suit::from_char('S'));
        assert_eq!(None, Suit::from_char('K'));
        assert_eq!(None, Value::from_char('1'));
    }

    #[test]
    fn test_card_from_numeric_pair() {
        let card = Card::try_from((11, 'D')).unwrap();
        assert_eq!(Card::new(Value::Jack, Suit::Diamond), card);
    }

    #[test]
    fn test_card_from_bad_numeric_pair() {
        assert_eq!(
            Err(ShowdownError::InvalidCard { rank: 1, suit: 'K' }),
            Card::try_from((1, 'K'))
        );
        assert_eq!(
            Err(ShowdownError::InvalidCard { rank: 9, suit: 'K' }),
            Card::try_from((9, 'K'))
        );
    }

    #[test]
    fn test_card_parse_and_display() {
        let card: Card = "Td".parse().unwrap();
        assert_eq!(Card::new(Value::Ten, Suit::Diamond), card);
        assert_eq!("Td", card.to_string());
    }

    #[test]
    fn test_card_parse_errors() {
        assert_eq!(
            Err(ShowdownError::UnexpectedValueChar('X')),
            "Xd".parse::<Card>()
        );
        assert_eq!(
            Err(ShowdownError::UnexpectedSuitChar('x')),
            "Ax".parse::<Card>()
        );
        assert_eq!(
            Err(ShowdownError::UnparsedCharsRemaining),
            "A".parse::<Card>()
        );
        assert_eq!(
            Err(ShowdownError::UnparsedCharsRemaining),
            "Ahh".parse::<Card>()
        );
    }
}
