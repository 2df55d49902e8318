//! Five card poker hand evaluation.
//!
//! The crate is split into two modules:
//!
//! - [`core`] has cards, hands, a deck, the optional ranking rules and the
//!   classifier that puts a hand into one of nine categories.
//! - [`showdown`] compares two hands and says which one wins.
//!
//! # Examples
//!
//! ```
//! use five_card_showdown::core::{Category, Hand};
//! use five_card_showdown::showdown::{compare, Verdict};
//!
//! let fours = Hand::new_from_str("4d4s4c4h8s").unwrap();
//! let twos = Hand::new_from_str("2h2d2s2c8s").unwrap();
//!
//! assert_eq!(Category::FourOfAKind, fours.classify().category());
//! assert_eq!(Verdict::FirstWins, compare(&fours, &twos));
//! ```
//!
//! Classification and comparison never fail once a [`core::Hand`] exists;
//! all validation happens when the hand is built.

/// Cards, hands, decks and hand classification.
pub mod core;
/// Comparing two classified hands.
pub mod showdown;
