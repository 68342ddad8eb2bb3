use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use mtg_combo_sim::config::{ConfigError, SimConfig};
use mtg_combo_sim::simulation::{run_scenario_with, SchedulerOptions, SimulationReport};

#[derive(Parser)]
#[command(name = "mtg-combo-sim")]
#[command(about = "Monte Carlo simulator for how fast a combo can be drawn into", long_about = None)]
struct Cli {
    /// JSON file with simulation parameters (flags override it)
    #[arg(short, long)]
    config: Option<String>,

    /// Number of cards in the deck [default: 99]
    #[arg(long, allow_negative_numbers = true)]
    deck_size: Option<i64>,

    /// Number of lands in the deck [default: 37]
    #[arg(long, allow_negative_numbers = true)]
    lands: Option<i64>,

    /// Number of combo pieces in the deck [default: 4]
    #[arg(long, allow_negative_numbers = true)]
    combos: Option<i64>,

    /// Number of combo pieces required for a win [default: 2]
    #[arg(long, allow_negative_numbers = true)]
    required: Option<i64>,

    /// Number of simulations to run [default: 10000000]
    #[arg(short, long, allow_negative_numbers = true)]
    runs: Option<i64>,

    /// Random seed (0 or unset uses the current time)
    #[arg(short, long)]
    seed: Option<u64>,

    /// Worker threads (defaults to available parallelism)
    #[arg(short, long)]
    workers: Option<usize>,

    /// Print results as JSON
    #[arg(long)]
    json: bool,

    /// Suppress progress and status output
    #[arg(short, long)]
    quiet: bool,
}

impl Cli {
    /// Start from the config file (or defaults) and apply explicit flags
    fn sim_config(&self) -> Result<SimConfig, ConfigError> {
        let mut cfg = match &self.config {
            Some(path) => SimConfig::from_file(path)?,
            None => SimConfig::default(),
        };
        if let Some(v) = self.deck_size {
            cfg.deck_size = v;
        }
        if let Some(v) = self.lands {
            cfg.lands = v;
        }
        if let Some(v) = self.combos {
            cfg.combo_pieces = v;
        }
        if let Some(v) = self.required {
            cfg.required = v;
        }
        if let Some(v) = self.runs {
            cfg.trials = v;
        }
        if self.seed.is_some() {
            cfg.seed = self.seed;
        }
        Ok(cfg)
    }
}

fn main() {
    let cli = Cli::parse();
    let status = !cli.quiet && !cli.json;

    if status {
        eprintln!("🔮 mtg-combo-sim booting up");
    }

    let scenario = match cli.sim_config().and_then(|cfg| cfg.validate()) {
        Ok(scenario) => scenario,
        Err(e) => {
            eprintln!("✗ invalid config: {}", e);
            std::process::exit(1);
        }
    };

    if status {
        eprintln!("🎲 RNG seed: {}", scenario.seed());
    }

    let progress = if status {
        let bar = ProgressBar::new(scenario.trials());
        let style = ProgressStyle::with_template(
            "{spinner} [{elapsed_precise}] {bar:40} {pos}/{len} trials ({per_sec}, eta {eta})",
        )
        .unwrap_or_else(|_| ProgressStyle::default_bar());
        bar.set_style(style);
        bar
    } else {
        ProgressBar::hidden()
    };

    let options = SchedulerOptions { workers: cli.workers };
    let start = std::time::Instant::now();
    let report = match run_scenario_with(&scenario, &options, |done| progress.set_position(done)) {
        Ok(report) => report,
        Err(e) => {
            progress.abandon();
            eprintln!("✗ simulation failed: {}", e);
            std::process::exit(1);
        }
    };
    let elapsed = start.elapsed();
    progress.finish_and_clear();

    if cli.json {
        match serde_json::to_string_pretty(&report) {
            Ok(json) => println!("{}", json),
            Err(e) => {
                eprintln!("✗ failed to encode results: {}", e);
                std::process::exit(1);
            }
        }
        return;
    }

    print_report(&report);
    println!();
    println!(
        "Simulation completed in {:.2?} ({:.0} trials/sec)",
        elapsed,
        report.trials as f64 / elapsed.as_secs_f64()
    );
}

fn print_report(report: &SimulationReport) {
    let scenario = &report.scenario;

    println!("\n=== Combo Draw Simulation ===\n");
    println!(
        "Deck: {} cards ({} lands, {} combo pieces, {} other)",
        scenario.deck_size(),
        scenario.lands(),
        scenario.combo_pieces(),
        scenario.spells()
    );
    println!("Combo: {} pieces in hand", scenario.required());
    println!("Trials: {}", report.trials);
    println!("Seed: {}", scenario.seed());
    println!();

    println!("📊 results:\n");
    println!("Average draws to win: {:.2}", report.average_draws_to_win);
    println!(
        "Opening hand wins: {:.2}% ({}/{})",
        report.opening_hand_win_rate * 100.0,
        report.opening_hand_wins,
        report.trials
    );
    println!("Average opening lands: {:.2}", report.average_opening_lands);
    println!(
        "Draws to win range: {}..={}",
        report.min_draws_to_win, report.max_draws_to_win
    );
    if report.exhausted_trials > 0 {
        let pct = report.exhausted_trials as f64 / report.trials as f64 * 100.0;
        println!(
            "Never assembled: {:5.1}% ({})",
            pct, report.exhausted_trials
        );
    }
}
