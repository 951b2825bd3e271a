//!
//! The benchmark runner executable.
//!

pub(crate) mod arguments;

use std::time::Instant;

use clap::Parser;
use colored::Colorize;

use self::arguments::Arguments;

///
/// The application entry point.
///
fn main() {
    let exit_code = match Arguments::try_parse()
        .map_err(|error| anyhow::anyhow!(error))
        .and_then(main_inner)
    {
        Ok(()) => docs_benchmark::EXIT_CODE_SUCCESS,
        Err(error) => {
            eprintln!("{error:?}");
            docs_benchmark::EXIT_CODE_FAILURE
        }
    };
    std::process::exit(exit_code);
}

///
/// The entry point wrapper used for proper error handling.
///
fn main_inner(arguments: Arguments) -> anyhow::Result<()> {
    let arguments = Arguments::validate(arguments)?;
    println!(
        "    {} {} v{}",
        "Starting".bright_green().bold(),
        env!("CARGO_PKG_DESCRIPTION"),
        env!("CARGO_PKG_VERSION"),
    );

    let repositories = docs_benchmark::Repository::read_list(arguments.config.as_path())?
        .into_iter()
        .filter(|repository| match arguments.name {
            Some(ref pattern) => repository.name.contains(pattern.as_str()),
            None => true,
        })
        .collect::<Vec<docs_benchmark::Repository>>();

    let runner = docs_benchmark::BuildRunner::new(arguments.mkdocs, arguments.verbose)?
        .with_repetitions(arguments.repetitions);
    let mut orchestrator = docs_benchmark::Orchestrator::new(
        arguments.git,
        runner,
        arguments.output_directory,
        arguments.format,
    )?;

    let run_time_start = Instant::now();
    println!(
        "     {} {} repositories",
        "Running".bright_green().bold(),
        repositories.len()
    );
    for repository in repositories.iter() {
        orchestrator.test_repository(
            repository.url.as_str(),
            repository.name.as_str(),
            repository.branch.as_str(),
        );
    }

    orchestrator.compare_repositories()?;

    if let Some(path) = arguments.results {
        docs_benchmark::BenchmarkResult::write_all(orchestrator.results(), path.as_path())?;
    }

    println!(
        "    {} {} of {} repositories in {}m{:02}s",
        "Finished".bright_green().bold(),
        orchestrator.results().len(),
        repositories.len(),
        run_time_start.elapsed().as_secs() / 60,
        run_time_start.elapsed().as_secs() % 60,
    );

    Ok(())
}
