//! walkthrough
//!
//! Prints the outcome of each walkthrough scenario, one line per result.
//!
//! # Usage
//!
//! ```bash
//! cargo run --bin walkthrough -- --scenario lazy --lazy-folds 3
//! RUST_LOG=adtkit_walkthrough=debug cargo run --bin walkthrough
//! ```

use adtkit_walkthrough::{Scenario, WalkthroughConfig, run};
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "walkthrough")]
#[command(about = "Walk through the adtkit data types on small examples")]
struct Cli {
    /// Scenario to run
    #[arg(long, short = 's', value_enum, default_value_t = Scenario::All)]
    scenario: Scenario,

    /// How many times the lazy scenario folds its pipeline
    #[arg(long, default_value_t = 2)]
    lazy_folds: usize,
}

fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "adtkit_walkthrough=info,walkthrough=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    let config = WalkthroughConfig {
        scenario: cli.scenario,
        lazy_folds: cli.lazy_folds,
    };
    tracing::info!(?config, "starting walkthrough");

    for line in run(&config) {
        println!("{line}");
    }
}
