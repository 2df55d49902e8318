use std::ops::Deref;

use rand::{seq::SliceRandom, Rng};
use tracing::debug;

use super::{Card, Hand, ShowdownError, Suit, Value, HAND_SIZE};

/// A stack of cards. Cards are dealt from the end of the stack.
///
/// Shuffling takes the random source as an argument so that nothing else
/// in the crate depends on randomness.
///
/// ```
/// use five_card_showdown::core::Deck;
/// use rand::{rngs::StdRng, SeedableRng};
///
/// let mut deck = Deck::default();
/// deck.shuffle(&mut StdRng::seed_from_u64(7));
/// let (first, second) = deck.deal_heads_up().unwrap();
/// assert_eq!(42, deck.len());
/// # let _ = (first, second);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// An empty deck.
    pub fn new() -> Self {
        Self { cards: Vec::new() }
    }

    /// A deck made of exactly these cards; the last card is dealt first.
    pub fn from_cards(cards: Vec<Card>) -> Self {
        Self { cards }
    }

    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.cards.shuffle(rng);
        debug!(remaining = self.cards.len(), "Shuffled deck");
    }

    /// Take the top card.
    pub fn deal(&mut self) -> Option<Card> {
        self.cards.pop()
    }

    /// Deal five cards to one hand.
    pub fn deal_hand(&mut self) -> Result<Hand, ShowdownError> {
        self.ensure(HAND_SIZE)?;
        let at = self.cards.len() - HAND_SIZE;
        let mut cards = self.cards.split_off(at);
        // Top of the stack first, the order they come off the deck.
        cards.reverse();
        Hand::new(cards)
    }

    /// Deal two hands one card at a time, alternating between them.
    pub fn deal_heads_up(&mut self) -> Result<(Hand, Hand), ShowdownError> {
        self.ensure(2 * HAND_SIZE)?;
        let mut first = Vec::with_capacity(HAND_SIZE);
        let mut second = Vec::with_capacity(HAND_SIZE);
        for _ in 0..HAND_SIZE {
            for hand in [&mut first, &mut second] {
                if let Some(card) = self.cards.pop() {
                    hand.push(card);
                }
            }
        }
        debug!(remaining = self.cards.len(), "Dealt heads up hands");
        Ok((Hand::new(first)?, Hand::new(second)?))
    }

    fn ensure(&self, needed: usize) -> Result<(), ShowdownError> {
        if self.cards.len() < needed {
            return Err(ShowdownError::NotEnoughCards {
                needed,
                remaining: self.cards.len(),
            });
        }
        Ok(())
    }
}

/// The standard 52 card deck, clubs then diamonds then hearts then
/// spades, deuce to ace within each suit.
impl Default for Deck {
    fn default() -> Self {
        let cards = Suit::suits()
            .into_iter()
            .flat_map(|suit| {
                Value::values()
                    .into_iter()
                    .map(move |value| Card::new(value, suit))
            })
            .collect();
        Self { cards }
    }
}

impl Deref for Deck {
    type Target = [Card];

    fn deref(&self) -> &[Card] {
        &self.cards
    }
}
