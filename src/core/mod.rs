/// Error type shared by card, hand and deck construction.
mod error;
/// Export `ShowdownError`
pub use self::error::ShowdownError;

/// card.rs has value and suit for cards.
mod card;
/// Export `Card`, `Suit`, and `Value`
pub use self::card::{Card, Suit, Value};

/// The five card `Hand`.
mod hand;
/// Export `Hand` and the fixed hand size.
pub use self::hand::{Hand, HAND_SIZE};

/// A stack of cards that can be shuffled and dealt.
mod deck;
/// Export `Deck`
pub use self::deck::Deck;

/// Optional house rules for ranking.
mod rules;
#[cfg(feature = "serde")]
pub use self::rules::RulesConfigError;
/// Export `RankingRules`
pub use self::rules::RankingRules;

/// Hand classification: categories and the rank groups used to break ties.
mod rank;
/// Export the classifier and everything it produces.
pub use self::rank::{
    classify, classify_with, is_flush, is_straight, Category, Classification, RankGroup,
    RankGroups,
};
