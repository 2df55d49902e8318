#![no_main]

extern crate arbitrary;
extern crate five_card_showdown;
extern crate libfuzzer_sys;

use five_card_showdown::core::{Card, Category, Hand, RankingRules};
use five_card_showdown::showdown::{Showdown, Verdict};

use libfuzzer_sys::fuzz_target;

#[derive(Debug, Clone, arbitrary::Arbitrary)]
struct Input {
    pub first: [Card; 5],
    pub second: [Card; 5],
    pub ace_low_straights: bool,
    pub resolve_kickers: bool,
}

fuzz_target!(|input: Input| {
    let rules = RankingRules::reference()
        .with_ace_low_straights(input.ace_low_straights)
        .with_resolve_kickers(input.resolve_kickers);
    let showdown = Showdown::new(rules);

    let first = Hand::new(input.first).unwrap();
    let second = Hand::new(input.second).unwrap();

    let class = showdown.classify(&first);
    assert_eq!(class, showdown.classify(&first));
    assert_eq!(Ok(class.category()), Category::try_from(class.strength()));

    let forward = showdown.compare(&first, &second);
    assert_eq!(forward.reverse(), showdown.compare(&second, &first));
    assert_eq!(Verdict::Tie, showdown.compare(&first, &first));
});
