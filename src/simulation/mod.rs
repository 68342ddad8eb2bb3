pub mod deck;
pub mod engine;
pub mod scheduler;
pub mod stats;

pub use deck::{build_deck, Deck};
pub use engine::{run_trial, simulate_trial, TrialResult};
pub use scheduler::{run_scenario, run_scenario_with, SchedulerOptions, SimulationError};
pub use stats::{Aggregator, SimulationReport};
