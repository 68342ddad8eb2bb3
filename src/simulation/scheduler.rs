//! Fan-out/fan-in execution of a scenario's trials.
//!
//! A feeder thread pushes trial indices into a bounded job queue. A fixed set
//! of workers on a dedicated rayon pool pull indices, play the trial and push
//! the result into a bounded result queue. The calling thread is the single
//! consumer of that queue and the only owner of the `Aggregator`.

use crate::config::{ConfigError, Scenario};
use crate::simulation::engine::{simulate_trial, TrialResult};
use crate::simulation::stats::{Aggregator, SimulationReport};
use crossbeam_channel::bounded;
use rayon::ThreadPoolBuilder;
use thiserror::Error;

/// Results buffered between the workers and the aggregator
pub const RESULT_QUEUE_CAPACITY: usize = 10_000;

/// Progress is reported every this many aggregated results
pub const PROGRESS_STRIDE: u64 = 10_000;

#[derive(Error, Debug)]
pub enum SimulationError {
    #[error("invalid config: {0}")]
    Config(#[from] ConfigError),
    #[error("failed to start worker pool: {0}")]
    WorkerPool(#[from] rayon::ThreadPoolBuildError),
}

#[derive(Debug, Clone, Default)]
pub struct SchedulerOptions {
    /// Worker count; defaults to the available hardware parallelism
    pub workers: Option<usize>,
}

impl SchedulerOptions {
    pub fn with_workers(workers: usize) -> Self {
        SchedulerOptions { workers: Some(workers) }
    }

    pub fn worker_count(&self) -> usize {
        match self.workers {
            Some(n) if n > 0 => n,
            _ => std::thread::available_parallelism()
                .map(|n| n.get())
                .unwrap_or(1),
        }
    }
}

/// Run every trial of `scenario` on all available cores
pub fn run_scenario(scenario: &Scenario) -> Result<SimulationReport, SimulationError> {
    run_scenario_with(scenario, &SchedulerOptions::default(), |_| {})
}

/// Run every trial of `scenario`, calling `on_progress` with the number of
/// aggregated results every `PROGRESS_STRIDE` trials and once at the end
pub fn run_scenario_with<F>(
    scenario: &Scenario,
    options: &SchedulerOptions,
    mut on_progress: F,
) -> Result<SimulationReport, SimulationError>
where
    F: FnMut(u64),
{
    let workers = options.worker_count();
    let pool = ThreadPoolBuilder::new()
        .num_threads(workers)
        .thread_name(|i| format!("trial-worker-{}", i))
        .build()?;

    let trials = scenario.trials();
    let (job_tx, job_rx) = bounded::<u64>(workers * 2);
    let (result_tx, result_rx) = bounded::<TrialResult>(RESULT_QUEUE_CAPACITY);
    let mut aggregator = Aggregator::new();

    std::thread::scope(|s| {
        s.spawn(move || {
            for trial_index in 0..trials {
                if job_tx.send(trial_index).is_err() {
                    break;
                }
            }
        });

        // Senders are dropped once every worker is done, which ends the
        // aggregation loop below.
        s.spawn(move || {
            pool.scope(|ps| {
                for _ in 0..workers {
                    let jobs = job_rx.clone();
                    let results = result_tx.clone();
                    ps.spawn(move |_| {
                        for trial_index in jobs.iter() {
                            if results.send(simulate_trial(scenario, trial_index)).is_err() {
                                break;
                            }
                        }
                    });
                }
            });
        });

        for result in result_rx.iter() {
            aggregator.record(&result);
            if aggregator.trials() % PROGRESS_STRIDE == 0 {
                on_progress(aggregator.trials());
            }
        }
    });

    on_progress(aggregator.trials());
    Ok(aggregator.finish(*scenario))
}
