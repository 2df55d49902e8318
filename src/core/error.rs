use thiserror::Error;

/// Errors raised while building cards, hands and decks.
#[derive(Error, Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum ShowdownError {
    #[error("A hand needs exactly 5 cards, got {0}")]
    InvalidHandSize(usize),
    #[error("({rank}, {suit}) is not a playing card")]
    InvalidCard { rank: u8, suit: char },
    #[error("Unexpected character {0:?} where a card value was expected")]
    UnexpectedValueChar(char),
    #[error("Unexpected character {0:?} where a card suit was expected")]
    UnexpectedSuitChar(char),
    #[error("Card string ended in the middle of a card")]
    UnparsedCharsRemaining,
    #[error("Need {needed} cards but the deck only holds {remaining}")]
    NotEnoughCards { needed: usize, remaining: usize },
    #[error("No hand category has strength {0}")]
    UnknownCategoryStrength(u8),
}
