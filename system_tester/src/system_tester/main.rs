//!
//! The system tester executable.
//!

pub(crate) mod arguments;

use std::time::Duration;
use std::time::Instant;

use clap::Parser;
use colored::Colorize;
use rayon::iter::IntoParallelIterator;
use rayon::iter::ParallelIterator;

use self::arguments::Arguments;

///
/// The application entry point.
///
fn main() {
    let exit_code = match Arguments::try_parse()
        .map_err(|error| anyhow::anyhow!(error))
        .and_then(main_inner)
    {
        Ok(()) => docs_system_tester::EXIT_CODE_SUCCESS,
        Err(error) => {
            eprintln!("{error:?}");
            docs_system_tester::EXIT_CODE_FAILURE
        }
    };
    std::process::exit(exit_code);
}

///
/// The entry point wrapper used for proper error handling.
///
fn main_inner(arguments: Arguments) -> anyhow::Result<()> {
    let arguments = Arguments::validate(arguments)?;
    if !arguments.quiet {
        println!(
            "    {} {} v{}",
            "Starting".bright_green().bold(),
            env!("CARGO_PKG_DESCRIPTION"),
            env!("CARGO_PKG_VERSION"),
        );
    }

    let mut thread_pool_builder = rayon::ThreadPoolBuilder::new();
    if let Some(threads) = arguments.threads {
        thread_pool_builder = thread_pool_builder.num_threads(threads);
    }
    thread_pool_builder
        .build_global()
        .expect("Thread pool configuration failure");

    let mkdocs = docs_system_tester::Mkdocs::new(arguments.mkdocs)?;
    let health_check = docs_system_tester::HealthCheck::new(
        arguments.attempts,
        Duration::from_secs(arguments.backoff),
    )?;
    let context =
        docs_system_tester::ScenarioContext::new(mkdocs, arguments.address, health_check);

    let scenarios = if arguments.scenario.is_empty() {
        docs_system_tester::Scenario::ALL.to_vec()
    } else {
        arguments.scenario
    };

    let summary = docs_system_tester::Summary::new(arguments.verbose, arguments.quiet).wrap();

    let run_time_start = Instant::now();
    if !arguments.quiet {
        println!(
            "     {} {} scenarios with {} worker threads",
            "Running".bright_green().bold(),
            scenarios.len(),
            rayon::current_num_threads(),
        );
    }
    scenarios.into_par_iter().for_each(|scenario| {
        let start = Instant::now();
        let outcome = match scenario.run(&context) {
            Ok(()) => docs_system_tester::Outcome::passed(start.elapsed()),
            Err(error) => docs_system_tester::Outcome::failed(format!("{error:#}")),
        };
        docs_system_tester::Summary::push(&summary, scenario.to_string(), outcome);
    });

    let summary = docs_system_tester::Summary::unwrap_arc(summary);
    print!("{summary}");
    if !arguments.quiet {
        println!(
            "    {} running scenarios in {}m{:02}s",
            "Finished".bright_green().bold(),
            run_time_start.elapsed().as_secs() / 60,
            run_time_start.elapsed().as_secs() % 60,
        );
    }

    if !summary.is_successful() {
        anyhow::bail!("");
    }

    Ok(())
}
