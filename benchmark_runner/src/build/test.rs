//!
//! The build test variant.
//!

///
/// The build test variant.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Test {
    /// Build into a cleaned output directory.
    Clean,
    /// Rebuild only the changed files.
    Dirty,
    /// Build with verbose logging.
    Verbose,
    /// Build treating warnings as errors.
    Strict,
}

impl Test {
    /// All variants in the execution order.
    pub const ALL: [Self; 4] = [Self::Clean, Self::Dirty, Self::Verbose, Self::Strict];

    ///
    /// Returns the label used in the reports.
    ///
    pub fn label(&self) -> &'static str {
        match self {
            Self::Clean => "clean_build",
            Self::Dirty => "dirty_build",
            Self::Verbose => "verbose_build",
            Self::Strict => "strict_build",
        }
    }

    ///
    /// Returns the build command arguments.
    ///
    pub fn arguments(&self) -> [&'static str; 2] {
        match self {
            Self::Clean => ["build", "--clean"],
            Self::Dirty => ["build", "--dirty"],
            Self::Verbose => ["build", "--verbose"],
            Self::Strict => ["build", "--strict"],
        }
    }
}

impl std::fmt::Display for Test {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}
