//!
//! The system tester summary.
//!

pub mod outcome;

use std::sync::Arc;
use std::sync::Mutex;

use colored::Colorize;

use self::outcome::Outcome;

///
/// The system tester summary.
///
#[derive(Debug, Default)]
pub struct Summary {
    /// The scenario names and outcomes, in the completion order.
    elements: Vec<(String, Outcome)>,
    /// Whether the passed scenarios are printed.
    verbose: bool,
    /// Whether the output is suppressed.
    quiet: bool,
    /// The passed scenarios counter.
    passed: usize,
    /// The failed scenarios counter.
    failed: usize,
}

impl Summary {
    ///
    /// A shortcut constructor.
    ///
    pub fn new(verbose: bool, quiet: bool) -> Self {
        Self {
            elements: Vec::new(),
            verbose,
            quiet,
            passed: 0,
            failed: 0,
        }
    }

    ///
    /// Whether all scenarios have passed.
    ///
    pub fn is_successful(&self) -> bool {
        self.failed == 0
    }

    ///
    /// Returns the outcome of the scenario.
    ///
    pub fn outcome(&self, name: &str) -> Option<&Outcome> {
        self.elements
            .iter()
            .find(|(element_name, _)| element_name == name)
            .map(|(_, outcome)| outcome)
    }

    ///
    /// Wraps data into a synchronized shared reference.
    ///
    pub fn wrap(self) -> Arc<Mutex<Self>> {
        Arc::new(Mutex::new(self))
    }

    ///
    /// Extracts the data from the synchronized shared reference.
    ///
    pub fn unwrap_arc(summary: Arc<Mutex<Self>>) -> Self {
        Arc::try_unwrap(summary)
            .expect("Last shared reference")
            .into_inner()
            .expect("Last shared reference")
    }

    ///
    /// Adds the scenario outcome, printing it.
    ///
    pub fn push(summary: &Mutex<Self>, name: String, outcome: Outcome) {
        summary.lock().expect("Sync").push_element(name, outcome);
    }

    ///
    /// Pushes an element to the summary, printing it.
    ///
    fn push_element(&mut self, name: String, outcome: Outcome) {
        match outcome {
            Outcome::Passed { duration } => {
                self.passed += 1;
                if self.verbose && !self.quiet {
                    println!(
                        "{:>7} {name} {}",
                        "PASSED".green(),
                        format!("({}ms)", duration.as_millis()).bright_white()
                    );
                }
            }
            Outcome::Failed { ref error } => {
                self.failed += 1;
                if !self.quiet {
                    println!("{:>7} {name} {error}", "FAILED".bright_red());
                }
            }
        }

        self.elements.push((name, outcome));
    }
}

impl std::fmt::Display for Summary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.quiet {
            return Ok(());
        }

        writeln!(
            f,
            "╔══════════════════════╡ SYSTEM TESTING ╞══════════════════════╗"
        )?;
        writeln!(
            f,
            "║                                                              ║"
        )?;
        writeln!(
            f,
            "║     {:7}                                   {:10}     ║",
            "PASSED".green(),
            self.passed.to_string().green(),
        )?;
        writeln!(
            f,
            "║     {:7}                                   {:10}     ║",
            "FAILED".bright_red(),
            self.failed.to_string().bright_red(),
        )?;
        writeln!(
            f,
            "╚══════════════════════════════════════════════════════════════╝"
        )?;

        Ok(())
    }
}
