//!
//! The load tester executable.
//!

pub(crate) mod arguments;

use std::sync::Arc;
use std::time::Duration;

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
        Ok(()) => docs_load_tester::EXIT_CODE_SUCCESS,
        Err(error) => {
            eprintln!("{error:?}");
            docs_load_tester::EXIT_CODE_FAILURE
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

    let pages = match arguments.pages_config {
        Some(ref path) => docs_load_tester::Pages::try_from(path.as_path())?,
        None => docs_load_tester::Pages::default(),
    };
    let pages = Arc::new(pages);

    let scenario = arguments.scenario;
    let shape = match arguments.shape_config {
        Some(ref path) => docs_load_tester::Schedule::try_from(path.as_path())?,
        None => {
            if scenario == docs_load_tester::Scenario::Spike
                && (arguments.users.is_some() || arguments.spawn_rate.is_some())
                && !arguments.quiet
            {
                println!(
                    "     {} the `{scenario}` scenario has a fixed shape, ignoring the user count and spawn rate",
                    "Warning".bright_yellow().bold(),
                );
            }
            scenario.schedule(
                arguments.users,
                arguments.spawn_rate,
                Duration::from_secs(arguments.run_time),
                pages.as_ref(),
            )?
        }
    };

    let base_url = reqwest::Url::parse(arguments.host.as_str())
        .map_err(|error| anyhow::anyhow!("Host `{}` parsing: {error}", arguments.host))?;
    let client = reqwest::blocking::Client::builder()
        .timeout(Duration::from_secs(arguments.request_timeout))
        .build()?;

    let statistics = docs_load_tester::Statistics::new(arguments.verbose).wrap();

    let factory_pages = pages.clone();
    let factory: docs_load_tester::UserFactory =
        Box::new(move |index| scenario.create_user(index, &factory_pages));

    if !arguments.quiet {
        println!(
            "     {} scenario `{scenario}` against {base_url} for {}s",
            "Running".bright_green().bold(),
            shape.duration().as_secs(),
        );
    }

    let report = docs_load_tester::Engine::new(
        client,
        base_url,
        Box::new(shape),
        factory,
        statistics.clone(),
    )
    .with_tick_interval(Duration::from_millis(arguments.tick_interval))
    .with_seed(arguments.seed)
    .with_quiet(arguments.quiet)
    .run()?;

    let statistics = docs_load_tester::Statistics::unwrap_arc(statistics)?;
    if !arguments.quiet {
        println!();
        print!("{statistics}");
        println!(
            "    {} {} users (peak {}) in {}m{:02}s",
            "Finished".bright_green().bold(),
            report.spawned,
            report.peak_users,
            report.elapsed.as_secs() / 60,
            report.elapsed.as_secs() % 60,
        );
    }

    if let Some(path) = arguments.csv {
        statistics.write_csv(path.as_path())?;
    }

    Ok(())
}
