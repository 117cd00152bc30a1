use clap::ValueEnum;
use std::path::PathBuf;

/// Which backing environment live verification talks to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Mode {
    /// LocalStack running in a local Docker container.
    Localstack,
    /// A real AWS account with configured credentials.
    Aws,
}

impl Mode {
    pub fn label(self) -> &'static str {
        match self {
            Mode::Localstack => "localstack",
            Mode::Aws => "aws",
        }
    }
}

impl std::fmt::Display for Mode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Parsed flags for one grading run. Built once, never mutated.
#[derive(Debug, Clone)]
pub struct RunConfig {
    /// Directory containing the scenario folders and (optionally) evidence/.
    pub root: PathBuf,
    pub verify: bool,
    pub evidence: bool,
    pub mode: Mode,
}

impl RunConfig {
    /// `all` is shorthand for requesting both optional check groups.
    pub fn new(root: PathBuf, verify: bool, evidence: bool, mode: Mode, all: bool) -> Self {
        Self {
            root,
            verify: verify || all,
            evidence: evidence || all,
            mode,
        }
    }
}
