use std::fmt;

use super::{Hand, RankingRules, ShowdownError, Value, HAND_SIZE};

/// All the different possible hand categories, weakest first.
///
/// The discriminant is the category strength used when comparing two
/// hands of different categories.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Clone, Hash, Copy)]
pub enum Category {
    /// The lowest category.
    /// No matches
    HighCard = 1,
    /// One Card matches another.
    OnePair = 2,
    /// Two different pair of matching cards.
    TwoPair = 3,
    /// Three of the same value.
    ThreeOfAKind = 4,
    /// Five cards in a sequence
    Straight = 5,
    /// Five cards of the same suit
    Flush = 6,
    /// Three of one value and two of another value
    FullHouse = 7,
    /// Four of the same value.
    FourOfAKind = 8,
    /// Five cards in a sequence all for the same suit.
    StraightFlush = 9,
}

const CATEGORIES: [Category; 9] = [
    Category::HighCard,
    Category::OnePair,
    Category::TwoPair,
    Category::ThreeOfAKind,
    Category::Straight,
    Category::Flush,
    Category::FullHouse,
    Category::FourOfAKind,
    Category::StraightFlush,
];

impl Category {
    /// Every category from weakest to strongest.
    pub const fn categories() -> [Category; 9] {
        CATEGORIES
    }

    /// Fixed strength, 1 for high card through 9 for a straight flush.
    pub const fn strength(self) -> u8 {
        self as u8
    }

    pub const fn name(self) -> &'static str {
        match self {
            Category::HighCard => "high card",
            Category::OnePair => "one pair",
            Category::TwoPair => "two pair",
            Category::ThreeOfAKind => "three of a kind",
            Category::Straight => "straight",
            Category::Flush => "flush",
            Category::FullHouse => "full house",
            Category::FourOfAKind => "four of a kind",
            Category::StraightFlush => "straight flush",
        }
    }
}

impl TryFrom<u8> for Category {
    type Error = ShowdownError;

    fn try_from(strength: u8) -> Result<Self, Self::Error> {
        strength
            .checked_sub(1)
            .and_then(|idx| CATEGORIES.get(idx as usize))
            .copied()
            .ok_or(ShowdownError::UnknownCategoryStrength(strength))
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Every card of one value within a hand.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub struct RankGroup {
    pub value: Value,
    pub size: u8,
}

/// A hand's cards grouped by value.
///
/// Groups are ordered by size, largest first, and groups of the same size
/// by value, highest first. A full house of threes over fives is
/// `[(Three, 3), (Five, 2)]`.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub struct RankGroups {
    groups: [RankGroup; HAND_SIZE],
    len: usize,
}

// Group size patterns, padded with zeros to a fixed width.
const QUADS: [u8; HAND_SIZE] = [4, 1, 0, 0, 0];
const FULL_HOUSE: [u8; HAND_SIZE] = [3, 2, 0, 0, 0];
const TRIPS: [u8; HAND_SIZE] = [3, 1, 1, 0, 0];
const TWO_PAIR: [u8; HAND_SIZE] = [2, 2, 1, 0, 0];
const ONE_PAIR: [u8; HAND_SIZE] = [2, 1, 1, 1, 0];

impl RankGroups {
    pub fn new(hand: &Hand) -> Self {
        let mut value_to_count: [u8; 13] = [0; 13];
        for card in hand.iter() {
            value_to_count[card.value as usize] += 1;
        }

        let mut groups = [RankGroup {
            value: Value::Two,
            size: 0,
        }; HAND_SIZE];
        let mut len = 0;
        // Walk down from the ace so the stable sort below leaves equal sized
        // groups highest first.
        for value in Value::values().into_iter().rev() {
            let size = value_to_count[value as usize];
            if size > 0 {
                groups[len] = RankGroup { value, size };
                len += 1;
            }
        }
        groups[..len].sort_by(|a, b| b.size.cmp(&a.size));

        Self { groups, len }
    }

    /// Group sizes, largest first, zero padded. `[2, 2, 1, 0, 0]` is two pair.
    pub fn sizes(&self) -> [u8; HAND_SIZE] {
        self.groups.map(|g| g.size)
    }

    pub fn as_slice(&self) -> &[RankGroup] {
        &self.groups[..self.len]
    }

    pub fn iter(&self) -> impl Iterator<Item = &RankGroup> {
        self.as_slice().iter()
    }

    /// Number of distinct values in the hand.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The biggest group; the trips of a full house, the higher pair of two
    /// pair, the top card of a high card hand.
    pub fn largest(&self) -> RankGroup {
        self.groups[0]
    }
}

const WHEEL: [Value; HAND_SIZE] = [
    Value::Ace,
    Value::Five,
    Value::Four,
    Value::Three,
    Value::Two,
];

/// True iff every card shares a suit.
pub fn is_flush(hand: &Hand) -> bool {
    let suit = hand.high_card().suit;
    hand.iter().all(|c| c.suit == suit)
}

/// True iff the values run consecutively with no gaps or repeats.
///
/// Without `ace_low_straights` the ace only plays high, so `A-5-4-3-2` is
/// not a straight.
pub fn is_straight(hand: &Hand, rules: &RankingRules) -> bool {
    straight_top(hand, rules).is_some()
}

/// Top value of the straight, if the hand is one. The wheel tops out at five.
fn straight_top(hand: &Hand, rules: &RankingRules) -> Option<Value> {
    let values = hand.values();
    if values.windows(2).all(|w| w[0].rank() == w[1].rank() + 1) {
        Some(values[0])
    } else if rules.ace_low_straights && values == WHEEL {
        Some(Value::Five)
    } else {
        None
    }
}

/// The category of a hand together with everything needed to break ties
/// against another hand of the same category.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub struct Classification {
    category: Category,
    hand: Hand,
    groups: RankGroups,
    top: Value,
}

impl Classification {
    pub fn category(&self) -> Category {
        self.category
    }

    pub fn strength(&self) -> u8 {
        self.category.strength()
    }

    /// The hand, sorted in descending value order.
    pub fn hand(&self) -> &Hand {
        &self.hand
    }

    pub fn groups(&self) -> &RankGroups {
        &self.groups
    }

    /// Highest value of the hand, except that a wheel straight reports five.
    pub fn top_value(&self) -> Value {
        self.top
    }
}

/// Classify a hand with the reference rules.
///
/// # Examples
///
/// ```
/// use five_card_showdown::core::{classify, Category, Hand};
///
/// let hand = Hand::new_from_str("3d3s3h5h5d").unwrap();
/// assert_eq!(Category::FullHouse, classify(&hand).category());
/// ```
pub fn classify(hand: &Hand) -> Classification {
    classify_with(hand, &RankingRules::reference())
}

/// Classify a hand. This will not cache the value.
pub fn classify_with(hand: &Hand, rules: &RankingRules) -> Classification {
    let groups = RankGroups::new(hand);
    let straight = straight_top(hand, rules);
    let flush = is_flush(hand);

    // Straight flush first, then the group patterns that outrank a flush,
    // then flush and straight, then the weaker group patterns.
    let category = match (straight.is_some(), flush, groups.sizes()) {
        (true, true, _) => Category::StraightFlush,
        (_, _, QUADS) => Category::FourOfAKind,
        (_, _, FULL_HOUSE) => Category::FullHouse,
        (_, true, _) => Category::Flush,
        (true, false, _) => Category::Straight,
        (_, _, TRIPS) => Category::ThreeOfAKind,
        (_, _, TWO_PAIR) => Category::TwoPair,
        (_, _, ONE_PAIR) => Category::OnePair,
        _ => Category::HighCard,
    };

    Classification {
        category,
        hand: *hand,
        groups,
        top: straight.unwrap_or(hand.high_card().value),
    }
}

impl Hand {
    /// Shorthand for [`classify`].
    pub fn classify(&self) -> Classification {
        classify(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn category_of(s: &str) -> Category {
        classify(&Hand::new_from_str(s).unwrap()).category()
    }

    #[test]
    fn test_strengths() {
        let strengths: Vec<u8> = Category::categories()
            .iter()
            .map(|c| c.strength())
            .collect();
        assert_eq!(vec![1, 2, 3, 4, 5, 6, 7, 8, 9], strengths);
    }

    #[test]
    fn test_cmp() {
        assert!(Category::HighCard < Category::StraightFlush);
        assert!(Category::HighCard < Category::FourOfAKind);
        assert!(Category::ThreeOfAKind < Category::Straight);
        assert!(Category::Straight < Category::Flush);
        assert!(Category::Flush < Category::FullHouse);
        assert!(Category::FullHouse < Category::FourOfAKind);
        assert!(Category::FourOfAKind < Category::StraightFlush);
    }

    #[test]
    fn test_category_from_strength() {
        for category in Category::categories() {
            assert_eq!(Ok(category), Category::try_from(category.strength()));
        }
        assert_eq!(
            Err(ShowdownError::UnknownCategoryStrength(0)),
            Category::try_from(0)
        );
        assert_eq!(
            Err(ShowdownError::UnknownCategoryStrength(10)),
            Category::try_from(10)
        );
    }

    #[test]
    fn test_category_display() {
        assert_eq!("three of a kind", Category::ThreeOfAKind.to_string());
        assert_eq!("straight flush", Category::StraightFlush.to_string());
    }

    #[test]
    fn test_straight_flush() {
        assert_eq!(Category::StraightFlush, category_of("5s6s7s8s9s"));
        assert_eq!(Category::StraightFlush, category_of("AdKdQdJdTd"));
    }

    #[test]
    fn test_four_of_a_kind() {
        assert_eq!(Category::FourOfAKind, category_of("2h2d2s2c8s"));
    }

    #[test]
    fn test_full_house() {
        assert_eq!(Category::FullHouse, category_of("3d3s3h5h5d"));
    }

    #[test]
    fn test_flush() {
        assert_eq!(Category::Flush, category_of("8d3d4d6d5d"));
    }

    #[test]
    fn test_straight() {
        assert_eq!(Category::Straight, category_of("7h3d4s6d5d"));
        assert_eq!(Category::Straight, category_of("AcKdQhJsTs"));
    }

    #[test]
    fn test_three_of_a_kind() {
        assert_eq!(Category::ThreeOfAKind, category_of("7h7d7s6c5d"));
    }

    #[test]
    fn test_two_pair() {
        assert_eq!(Category::TwoPair, category_of("7h7d6s6c5d"));
    }

    #[test]
    fn test_one_pair() {
        assert_eq!(Category::OnePair, category_of("7h7dQs6c5d"));
    }

    #[test]
    fn test_high_card() {
        assert_eq!(Category::HighCard, category_of("7h2dKs6c5d"));
    }

    #[test]
    fn test_wheel_is_high_card_by_default() {
        let hand = Hand::new_from_str("Ad2c3s4h5s").unwrap();
        assert!(!is_straight(&hand, &RankingRules::reference()));
        let classification = classify(&hand);
        assert_eq!(Category::HighCard, classification.category());
        assert_eq!(Value::Ace, classification.top_value());
    }

    #[test]
    fn test_wheel_with_ace_low_rules() {
        let rules = RankingRules::reference().with_ace_low_straights(true);
        let hand = Hand::new_from_str("Ad2c3s4h5s").unwrap();
        assert!(is_straight(&hand, &rules));
        let classification = classify_with(&hand, &rules);
        assert_eq!(Category::Straight, classification.category());
        assert_eq!(Value::Five, classification.top_value());

        let steel_wheel = Hand::new_from_str("Ah2h3h4h5h").unwrap();
        assert_eq!(
            Category::StraightFlush,
            classify_with(&steel_wheel, &rules).category()
        );
    }

    #[test]
    fn test_no_wraparound() {
        let rules = RankingRules::standard();
        let hand = Hand::new_from_str("QdKcAs2h3s").unwrap();
        assert!(!is_straight(&hand, &rules));
        assert_eq!(Category::HighCard, classify_with(&hand, &rules).category());
    }

    #[test]
    fn test_paired_hand_is_never_a_straight() {
        let hand = Hand::new_from_str("7h7d6s5c4d").unwrap();
        assert!(!is_straight(&hand, &RankingRules::standard()));
    }

    #[test]
    fn test_is_flush() {
        assert!(is_flush(&Hand::new_from_str("Js9s2s7sTs").unwrap()));
        assert!(!is_flush(&Hand::new_from_str("Js9s2s7sTd").unwrap()));
    }

    #[test]
    fn test_flush_outranks_pair_patterns() {
        // Only reachable with a duplicated card.
        assert_eq!(Category::Flush, category_of("9s9s7s5s2s"));
        assert_eq!(Category::Flush, category_of("9s9s7s7s2s"));
        assert_eq!(Category::Flush, category_of("9s9s9s7s2s"));
    }

    #[test]
    fn test_full_house_and_quads_outrank_flush() {
        assert_eq!(Category::FullHouse, category_of("9s9s9s7s7s"));
        assert_eq!(Category::FourOfAKind, category_of("9s9s9s9s7s"));
    }

    #[test]
    fn test_groups_order() {
        let hand = Hand::new_from_str("5h5d3d3s3h").unwrap();
        let groups = RankGroups::new(&hand);
        assert_eq!(
            &[
                RankGroup {
                    value: Value::Three,
                    size: 3
                },
                RankGroup {
                    value: Value::Five,
                    size: 2
                }
            ],
            groups.as_slice()
        );
        assert_eq!([3, 2, 0, 0, 0], groups.sizes());
        assert_eq!(Value::Three, groups.largest().value);
    }

    #[test]
    fn test_groups_of_equal_size_are_highest_first() {
        let hand = Hand::new_from_str("6s6c7h7d5d").unwrap();
        let groups = RankGroups::new(&hand);
        let values: Vec<Value> = groups.iter().map(|g| g.value).collect();
        assert_eq!(vec![Value::Seven, Value::Six, Value::Five], values);
        assert_eq!(3, groups.len());
        assert!(!groups.is_empty());
    }

    #[test]
    fn test_high_card_groups() {
        let hand = Hand::new_from_str("7h2dKs6c5d").unwrap();
        let groups = RankGroups::new(&hand);
        assert_eq!([1, 1, 1, 1, 1], groups.sizes());
        let values: Vec<Value> = groups.iter().map(|g| g.value).collect();
        assert_eq!(hand.values().to_vec(), values);
    }

    #[test]
    fn test_classify_is_idempotent() {
        for s in ["5s6s7s8s9s", "2h2d2s2c8s", "7h7dQs6c5d", "7h2dKs6c5d"] {
            let hand = Hand::new_from_str(s).unwrap();
            assert_eq!(classify(&hand), classify(&hand));
            assert_eq!(classify(&hand), hand.classify());
        }
    }

    #[test]
    fn test_classification_keeps_sorted_hand() {
        let hand = Hand::new_from_str("8d3d4d6d5d").unwrap();
        let classification = classify(&hand);
        assert_eq!(&hand, classification.hand());
        assert_eq!(6, classification.strength());
        assert_eq!(Value::Eight, classification.top_value());
    }
}
