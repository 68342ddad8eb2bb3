use crate::card::Card;
use crate::config::{Scenario, OPENING_HAND_SIZE};
use crate::game::{Hand, Library};
use crate::rng::GameRng;

/// An ordered deck owned by a single trial
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// Deck in the given order, top card first
    pub fn from_cards(cards: Vec<Card>) -> Self {
        Deck { cards }
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn land_count(&self) -> usize {
        self.cards.iter().filter(|c| c.is_land()).count()
    }

    pub fn combo_piece_count(&self) -> usize {
        self.cards.iter().filter(|c| c.is_combo_piece()).count()
    }

    /// Deal the opening hand off the top and keep the rest as the library.
    /// Order is preserved on both sides. Decks shorter than an opening hand are
    /// dealt entirely into the hand.
    pub fn deal(self) -> (Hand, Library) {
        let mut cards = self.cards;
        let split = OPENING_HAND_SIZE.min(cards.len());
        let library = cards.split_off(split);
        (cards.into_iter().collect(), Library::from_cards(library))
    }
}

/// Build the deck for `scenario` and shuffle it with the trial's own stream
pub fn build_deck(scenario: &Scenario, rng: &mut GameRng) -> Deck {
    let mut cards = Vec::with_capacity(scenario.deck_size());

    cards.extend(std::iter::repeat(Card::land()).take(scenario.lands()));
    cards.extend(std::iter::repeat(Card::spell()).take(scenario.spells()));
    cards.extend(std::iter::repeat(Card::combo_piece()).take(scenario.combo_pieces()));

    rng.shuffle(&mut cards);
    Deck { cards }
}
