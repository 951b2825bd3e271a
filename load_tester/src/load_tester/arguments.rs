//!
//! The load tester arguments.
//!

use std::path::PathBuf;

use clap::Parser;

///
/// The load tester arguments.
///
#[derive(Debug, Parser)]
#[command(about, long_about = None)]
pub struct Arguments {
    /// Prints every request.
    #[arg(short, long)]
    pub verbose: bool,

    /// Suppresses the output completely.
    #[arg(short, long)]
    pub quiet: bool,

    /// The served documentation site.
    #[arg(long, default_value = "http://localhost:8000")]
    pub host: String,

    /// The scenario: `spike`, `homepage`, `sequential`, `burst`, or `stress`.
    #[arg(short, long, default_value_t = docs_load_tester::Scenario::Spike)]
    pub scenario: docs_load_tester::Scenario,

    /// The number of concurrent users. Ignored by the `spike` scenario.
    #[arg(short, long)]
    pub users: Option<usize>,

    /// The number of users spawned per second. Ignored by the `spike` scenario.
    #[arg(short = 'r', long)]
    pub spawn_rate: Option<f64>,

    /// The run time in seconds. Ignored by the `spike` scenario.
    #[arg(short = 't', long, default_value_t = 60)]
    pub run_time: u64,

    /// The JSON traffic shape file, overriding the scenario shape.
    #[arg(long)]
    pub shape_config: Option<PathBuf>,

    /// The JSON file with the list of page paths.
    #[arg(long)]
    pub pages_config: Option<PathBuf>,

    /// The request statistics CSV output path.
    #[arg(long)]
    pub csv: Option<PathBuf>,

    /// The traffic shape polling interval in milliseconds.
    #[arg(long, default_value_t = 1000)]
    pub tick_interval: u64,

    /// The request timeout in seconds.
    #[arg(long, default_value_t = 30)]
    pub request_timeout: u64,

    /// The random seed, for reproducible user behavior.
    #[arg(long)]
    pub seed: Option<u64>,
}

impl Arguments {
    ///
    /// Validate the arguments passed from user, checking invariants that are not
    /// expressed in the type system.
    ///
    pub fn validate(arguments: Self) -> anyhow::Result<Self> {
        if arguments.verbose && arguments.quiet {
            anyhow::bail!("The `--verbose` and `--quiet` flags are mutually exclusive");
        }
        if arguments.tick_interval == 0 {
            anyhow::bail!("The traffic shape polling interval must be positive");
        }
        if arguments.shape_config.is_some()
            && (arguments.users.is_some() || arguments.spawn_rate.is_some())
        {
            anyhow::bail!(
                "The `--users` and `--spawn-rate` arguments conflict with `--shape-config`"
            );
        }

        Ok(arguments)
    }
}
