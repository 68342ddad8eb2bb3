use crate::card::Card;
use std::collections::VecDeque;

/// Library (deck) - ordered stack of cards, drawn from the top
#[derive(Debug, Clone, Default)]
pub struct Library {
    cards: VecDeque<Card>,
}

impl Library {
    /// Library whose top card is `cards[0]`
    pub fn from_cards(cards: Vec<Card>) -> Self {
        Library { cards: cards.into() }
    }

    /// Peek at the top card without removing it
    pub fn peek_top(&self) -> Option<&Card> {
        self.cards.front()
    }

    pub fn draw(&mut self) -> Option<Card> {
        self.cards.pop_front()
    }

    pub fn size(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

/// Hand - cards in hand.
///
/// Land and combo piece counts are kept up to date as cards are added, so the
/// win check after each draw does not rescan the hand.
#[derive(Debug, Clone, Default)]
pub struct Hand {
    cards: Vec<Card>,
    lands: usize,
    combo_pieces: usize,
}

impl Hand {
    pub fn with_capacity(cap: usize) -> Self {
        Hand {
            cards: Vec::with_capacity(cap),
            ..Hand::default()
        }
    }

    pub fn add_card(&mut self, card: Card) {
        if card.is_land() {
            self.lands += 1;
        }
        if card.is_combo_piece() {
            self.combo_pieces += 1;
        }
        self.cards.push(card);
    }

    pub fn size(&self) -> usize {
        self.cards.len()
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn land_count(&self) -> usize {
        self.lands
    }

    pub fn combo_piece_count(&self) -> usize {
        self.combo_pieces
    }

    /// True once the hand holds at least `required` combo pieces
    pub fn has_combo(&self, required: usize) -> bool {
        self.combo_pieces >= required
    }
}

impl FromIterator<Card> for Hand {
    fn from_iter<I: IntoIterator<Item = Card>>(iter: I) -> Self {
        let iter = iter.into_iter();
        let mut hand = Hand::with_capacity(iter.size_hint().0);
        for card in iter {
            hand.add_card(card);
        }
        hand
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_library_draws_from_top() {
        let mut library = Library::from_cards(vec![Card::combo_piece(), Card::land()]);
        assert_eq!(library.size(), 2);
        assert_eq!(library.peek_top(), Some(&Card::combo_piece()));
        assert_eq!(library.draw(), Some(Card::combo_piece()));
        assert_eq!(library.draw(), Some(Card::land()));
        assert!(library.is_empty());
        assert_eq!(library.draw(), None);
    }

    #[test]
    fn test_hand_tracks_counts() {
        let mut hand = Hand::with_capacity(3);
        hand.add_card(Card::land());
        hand.add_card(Card::spell());
        hand.add_card(Card::combo_piece());

        assert_eq!(hand.size(), 3);
        assert_eq!(hand.land_count(), 1);
        assert_eq!(hand.combo_piece_count(), 1);
        assert!(hand.has_combo(1));
        assert!(!hand.has_combo(2));
    }

    #[test]
    fn test_hand_from_iter_keeps_order() {
        let hand: Hand = [Card::spell(), Card::land(), Card::land()].into_iter().collect();
        assert_eq!(hand.cards(), &[Card::spell(), Card::land(), Card::land()]);
        assert_eq!(hand.land_count(), 2);
        assert_eq!(hand.combo_piece_count(), 0);
    }
}
