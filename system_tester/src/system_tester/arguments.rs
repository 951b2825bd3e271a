//!
//! The system tester arguments.
//!

use clap::Parser;

///
/// The system tester arguments.
///
#[derive(Debug, Parser)]
#[command(about, long_about = None)]
pub struct Arguments {
    /// Prints the passed scenarios as well.
    #[arg(short, long)]
    pub verbose: bool,

    /// Suppresses the output completely.
    #[arg(short, long)]
    pub quiet: bool,

    /// Runs only the named scenarios: `new`, `build`, `build-nav`, or `serve`.
    #[arg(short, long)]
    pub scenario: Vec<docs_system_tester::Scenario>,

    /// The documentation site generator executable.
    #[arg(long, default_value = docs_system_tester::Mkdocs::DEFAULT_EXECUTABLE_NAME)]
    pub mkdocs: String,

    /// The address the development server is started on.
    #[arg(short, long, default_value = docs_system_tester::DEFAULT_SERVE_ADDRESS)]
    pub address: String,

    /// The number of development server connection attempts.
    #[arg(long, default_value_t = docs_system_tester::HealthCheck::DEFAULT_ATTEMPTS)]
    pub attempts: usize,

    /// The pause after a failed connection attempt, in seconds.
    #[arg(long, default_value_t = docs_system_tester::HealthCheck::DEFAULT_BACKOFF.as_secs())]
    pub backoff: u64,

    /// Sets the number of threads, which execute the scenarios concurrently.
    #[arg(short, long)]
    pub threads: Option<usize>,
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
        if arguments.attempts == 0 {
            anyhow::bail!("At least one connection attempt is required");
        }
        if arguments.threads == Some(0) {
            anyhow::bail!("At least one thread is required");
        }

        Ok(arguments)
    }
}
