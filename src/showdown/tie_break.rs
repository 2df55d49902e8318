use std::cmp::Ordering;

use crate::core::{Category, Classification, RankGroup, RankingRules};

use super::Verdict;

/// Groups compared for two pair: both pairs and the kicker.
const TWO_PAIR_DEPTH: usize = 3;
/// Groups compared for one pair: the pair and three kickers.
const ONE_PAIR_DEPTH: usize = 4;

/// Decide between two hands of the same category.
///
/// # Panics
///
/// Panics if the two classifications have different categories. Callers
/// must settle those on strength alone.
pub(super) fn tie_break(
    first: &Classification,
    second: &Classification,
    rules: &RankingRules,
) -> Verdict {
    assert_eq!(
        first.category(),
        second.category(),
        "tie break between different categories"
    );

    let ordering = match first.category() {
        Category::StraightFlush | Category::Straight => {
            first.top_value().cmp(&second.top_value())
        }
        Category::Flush | Category::HighCard => first.hand().values().cmp(&second.hand().values()),
        Category::FourOfAKind | Category::FullHouse | Category::ThreeOfAKind => {
            let depth = if rules.resolve_kickers {
                first.groups().len()
            } else {
                1
            };
            compare_groups(first.groups().as_slice(), second.groups().as_slice(), depth)
        }
        Category::TwoPair => compare_groups(
            first.groups().as_slice(),
            second.groups().as_slice(),
            TWO_PAIR_DEPTH,
        ),
        Category::OnePair => compare_groups(
            first.groups().as_slice(),
            second.groups().as_slice(),
            ONE_PAIR_DEPTH,
        ),
    };
    Verdict::from_ordering(ordering)
}

/// Compare group values position by position over the first `depth`
/// groups. The first difference decides.
fn compare_groups(first: &[RankGroup], second: &[RankGroup], depth: usize) -> Ordering {
    first
        .iter()
        .zip(second)
        .take(depth)
        .map(|(a, b)| a.value.cmp(&b.value))
        .find(|o| o.is_ne())
        .unwrap_or(Ordering::Equal)
}
