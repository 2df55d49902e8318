//! Heads up showdowns between two five card hands.
//!
//! Hands are classified first. A stronger category wins outright; hands of
//! the same category go to a tie break chosen by category:
//!
//! - straight flush, straight: the top card.
//! - flush, high card: every card in turn, highest first.
//! - four of a kind, full house, three of a kind: the value of the biggest
//!   group. Kickers only count with [`RankingRules::resolve_kickers`].
//! - two pair: both pairs, then the kicker.
//! - one pair: the pair, then each kicker.
//!
//! ```
//! use five_card_showdown::core::Hand;
//! use five_card_showdown::showdown::{compare, Verdict};
//!
//! let first = Hand::from_pairs(&[(5, 'S'), (6, 'S'), (7, 'S'), (8, 'S'), (9, 'S')]).unwrap();
//! let second = Hand::from_pairs(&[(6, 'D'), (7, 'D'), (8, 'D'), (9, 'D'), (10, 'D')]).unwrap();
//! assert_eq!(Verdict::SecondWins, compare(&first, &second));
//! ```

use std::cmp::Ordering;
use std::fmt;

use tracing::trace;

use crate::core::{classify_with, Classification, Hand, RankingRules};

mod tie_break;

/// Outcome of comparing two hands.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum Verdict {
    FirstWins,
    SecondWins,
    Tie,
}

impl Verdict {
    /// `Greater` means the first hand is stronger.
    pub fn from_ordering(ordering: Ordering) -> Self {
        match ordering {
            Ordering::Greater => Verdict::FirstWins,
            Ordering::Less => Verdict::SecondWins,
            Ordering::Equal => Verdict::Tie,
        }
    }

    pub fn to_ordering(self) -> Ordering {
        match self {
            Verdict::FirstWins => Ordering::Greater,
            Verdict::SecondWins => Ordering::Less,
            Verdict::Tie => Ordering::Equal,
        }
    }

    /// The verdict with the hands swapped.
    pub fn reverse(self) -> Self {
        Self::from_ordering(self.to_ordering().reverse())
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Verdict::FirstWins => "first hand wins",
            Verdict::SecondWins => "second hand wins",
            Verdict::Tie => "tie",
        })
    }
}

/// Compares hands under one set of [`RankingRules`].
///
/// Holds no state besides the rules, so it can be shared freely between
/// threads.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Showdown {
    rules: RankingRules,
}

impl Showdown {
    pub fn new(rules: RankingRules) -> Self {
        Self { rules }
    }

    pub fn rules(&self) -> &RankingRules {
        &self.rules
    }

    pub fn classify(&self, hand: &Hand) -> Classification {
        classify_with(hand, &self.rules)
    }

    /// Compare two hands.
    ///
    /// ```
    /// use five_card_showdown::core::{Hand, RankingRules};
    /// use five_card_showdown::showdown::{Showdown, Verdict};
    ///
    /// let quad_nines_king = Hand::new_from_str("9s9h9d9cKs").unwrap();
    /// let quad_nines_queen = Hand::new_from_str("9s9h9d9cQs").unwrap();
    ///
    /// let reference = Showdown::default();
    /// assert_eq!(Verdict::Tie, reference.compare(&quad_nines_king, &quad_nines_queen));
    ///
    /// let standard = Showdown::new(RankingRules::standard());
    /// assert_eq!(Verdict::FirstWins, standard.compare(&quad_nines_king, &quad_nines_queen));
    /// ```
    pub fn compare(&self, first: &Hand, second: &Hand) -> Verdict {
        let first_class = self.classify(first);
        let second_class = self.classify(second);

        let verdict = match first_class.strength().cmp(&second_class.strength()) {
            Ordering::Equal => tie_break::tie_break(&first_class, &second_class, &self.rules),
            ordering => Verdict::from_ordering(ordering),
        };

        trace!(
            %first,
            first_category = %first_class.category(),
            %second,
            second_category = %second_class.category(),
            %verdict,
            "Compared hands"
        );
        verdict
    }

    /// Compare each pair independently.
    pub fn compare_all(&self, pairs: &[(Hand, Hand)]) -> Vec<Verdict> {
        pairs
            .iter()
            .map(|(first, second)| self.compare(first, second))
            .collect()
    }
}

/// Compare two hands with the reference rules.
pub fn compare(first: &Hand, second: &Hand) -> Verdict {
    Showdown::default().compare(first, second)
}
