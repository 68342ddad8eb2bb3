//! Streaming aggregation of trial results.
//!
//! The aggregator only ever lives on the consuming side of the result channel,
//! so it is plain mutable state with no synchronization of its own.

use crate::config::Scenario;
use crate::simulation::engine::TrialResult;
use serde::Serialize;

/// Running totals over every trial seen so far
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Aggregator {
    trials: u64,
    draw_sum: u64,
    opening_hand_wins: u64,
    opening_land_sum: u64,
    exhausted: u64,
    min_draws: Option<usize>,
    max_draws: Option<usize>,
}

/// Final statistics of a run
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SimulationReport {
    pub scenario: Scenario,
    pub trials: u64,
    pub average_draws_to_win: f64,
    pub opening_hand_wins: u64,
    pub opening_hand_win_rate: f64,
    pub average_opening_lands: f64,
    pub min_draws_to_win: usize,
    pub max_draws_to_win: usize,
    /// Trials whose library ran out before the combo was assembled
    pub exhausted_trials: u64,
}

impl Aggregator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, result: &TrialResult) {
        self.trials += 1;
        self.draw_sum += result.draws_to_win as u64;
        self.opening_land_sum += result.opening_hand_lands as u64;
        if result.opening_hand_win {
            self.opening_hand_wins += 1;
        }
        if result.exhausted {
            self.exhausted += 1;
        }
        let draws = result.draws_to_win;
        self.min_draws = Some(self.min_draws.map_or(draws, |m| m.min(draws)));
        self.max_draws = Some(self.max_draws.map_or(draws, |m| m.max(draws)));
    }

    pub fn trials(&self) -> u64 {
        self.trials
    }

    pub fn draw_sum(&self) -> u64 {
        self.draw_sum
    }

    pub fn opening_hand_wins(&self) -> u64 {
        self.opening_hand_wins
    }

    pub fn opening_land_sum(&self) -> u64 {
        self.opening_land_sum
    }

    /// Derive the final statistics. With no trials every statistic is zero.
    pub fn finish(&self, scenario: Scenario) -> SimulationReport {
        let mean = |sum: u64| {
            if self.trials == 0 {
                0.0
            } else {
                sum as f64 / self.trials as f64
            }
        };

        SimulationReport {
            scenario,
            trials: self.trials,
            average_draws_to_win: mean(self.draw_sum),
            opening_hand_wins: self.opening_hand_wins,
            opening_hand_win_rate: mean(self.opening_hand_wins),
            average_opening_lands: mean(self.opening_land_sum),
            min_draws_to_win: self.min_draws.unwrap_or(0),
            max_draws_to_win: self.max_draws.unwrap_or(0),
            exhausted_trials: self.exhausted,
        }
    }
}

impl Extend<TrialResult> for Aggregator {
    fn extend<I: IntoIterator<Item = TrialResult>>(&mut self, iter: I) {
        for result in iter {
            self.record(&result);
        }
    }
}
