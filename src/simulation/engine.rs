use crate::config::Scenario;
use crate::rng::GameRng;
use crate::simulation::deck::{build_deck, Deck};
use serde::Serialize;

/// Result of a single trial
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TrialResult {
    /// Draws after the opening hand until the combo was assembled. Equals the
    /// library size when the deck ran out first.
    pub draws_to_win: usize,
    /// The opening hand already held the combo
    pub opening_hand_win: bool,
    /// Lands among the first seven cards
    pub opening_hand_lands: usize,
    /// The library ran out before the combo was assembled
    pub exhausted: bool,
}

/// Play one trial: deal seven, then draw until `required` combo pieces are in
/// hand or the library is empty.
pub fn run_trial(deck: Deck, required: usize) -> TrialResult {
    let (mut hand, mut library) = deck.deal();
    let opening_hand_lands = hand.land_count();

    if hand.has_combo(required) {
        return TrialResult {
            draws_to_win: 0,
            opening_hand_win: true,
            opening_hand_lands,
            exhausted: false,
        };
    }

    let mut draws = 0;
    while let Some(card) = library.draw() {
        draws += 1;
        hand.add_card(card);
        if hand.has_combo(required) {
            return TrialResult {
                draws_to_win: draws,
                opening_hand_win: false,
                opening_hand_lands,
                exhausted: false,
            };
        }
    }

    TrialResult {
        draws_to_win: draws,
        opening_hand_win: false,
        opening_hand_lands,
        exhausted: true,
    }
}

/// Everything a worker does for trial `trial_index`: derive its stream, build
/// and shuffle its deck, play it.
pub fn simulate_trial(scenario: &Scenario, trial_index: u64) -> TrialResult {
    let mut rng = GameRng::for_trial(scenario.seed(), trial_index);
    let deck = build_deck(scenario, &mut rng);
    run_trial(deck, scenario.required())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::Card;
    use crate::config::SimConfig;
    use proptest::prelude::*;

    fn deck(layout: &str) -> Deck {
        // L = land, S = plain spell, C = combo piece; first seven are the hand
        Deck::from_cards(
            layout
                .chars()
                .map(|c| match c {
                    'L' => Card::land(),
                    'C' => Card::combo_piece(),
                    _ => Card::spell(),
                })
                .collect(),
        )
    }

    #[test]
    fn test_opening_hand_win() {
        let result = run_trial(deck("LLCSCLS"), 2);
        assert_eq!(
            result,
            TrialResult {
                draws_to_win: 0,
                opening_hand_win: true,
                opening_hand_lands: 3,
                exhausted: false,
            }
        );
    }

    #[test]
    fn test_win_after_draws() {
        let result = run_trial(deck("LLLCSSSSLSCL"), 2);
        assert_eq!(result.draws_to_win, 4);
        assert!(!result.opening_hand_win);
        assert_eq!(result.opening_hand_lands, 3);
        assert!(!result.exhausted);
    }

    #[test]
    fn test_win_on_first_draw() {
        let result = run_trial(deck("CSSSSSSC"), 2);
        assert_eq!(result.draws_to_win, 1);
    }

    #[test]
    fn test_exhaustion_counts_whole_library() {
        let result = run_trial(deck("LLLSSSSSLCSL"), 2);
        assert_eq!(
            result,
            TrialResult {
                draws_to_win: 5,
                opening_hand_win: false,
                opening_hand_lands: 3,
                exhausted: true,
            }
        );
    }

    #[test]
    fn test_required_above_deck_pieces_never_wins() {
        let result = run_trial(deck("CCSSSSSLLLLC"), 4);
        assert!(result.exhausted);
        assert_eq!(result.draws_to_win, 5);
    }

    #[test]
    fn test_seven_card_deck_has_empty_library() {
        let result = run_trial(deck("CLLSSSS"), 2);
        assert_eq!(result.draws_to_win, 0);
        assert!(!result.opening_hand_win);
        assert!(result.exhausted);
    }

    #[test]
    fn test_simulate_trial_is_deterministic() {
        let scenario = SimConfig { trials: 1, seed: Some(42), ..SimConfig::default() }
            .validate()
            .expect("valid");
        for i in 0..50 {
            assert_eq!(simulate_trial(&scenario, i), simulate_trial(&scenario, i));
        }
    }

    /// Position (1-based draw number) of the r-th combo piece, 0 inside the hand
    fn rth_piece_draw(cards: &[Card], r: usize) -> Option<usize> {
        let (idx, _) = cards
            .iter()
            .enumerate()
            .filter(|(_, c)| c.is_combo_piece())
            .nth(r - 1)?;
        Some(idx.saturating_sub(6))
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(128))]

        #[test]
        fn draws_match_rth_piece_and_are_monotonic(
            deck_size in 7i64..120,
            lands_pct in 0u32..=60,
            pieces in 1i64..8,
            seed in any::<u64>(),
        ) {
            let pieces = pieces.min(deck_size);
            let lands = ((deck_size - pieces) * lands_pct as i64) / 100;
            let scenario = SimConfig {
                deck_size,
                lands,
                combo_pieces: pieces,
                required: 1,
                trials: 1,
                seed: Some(1),
            }
            .validate()
            .expect("valid");
            let shuffled = build_deck(&scenario, &mut GameRng::new(seed));
            let library_size = scenario.library_size();

            let mut previous = 0;
            for r in 1..=(pieces as usize + 1) {
                let result = run_trial(shuffled.clone(), r);

                prop_assert!(result.draws_to_win <= library_size);
                prop_assert!(result.draws_to_win >= previous);
                previous = result.draws_to_win;

                match rth_piece_draw(shuffled.cards(), r) {
                    Some(draw) => {
                        prop_assert!(!result.exhausted);
                        prop_assert_eq!(result.draws_to_win, draw);
                        prop_assert_eq!(result.opening_hand_win, draw == 0);
                    }
                    None => {
                        prop_assert!(result.exhausted);
                        prop_assert_eq!(result.draws_to_win, library_size);
                    }
                }
            }
        }
    }
}
