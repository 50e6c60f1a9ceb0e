use std::path::PathBuf;

use clap::{Args, Subcommand};

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Generate the Go test file for a solution file.
    Generate(GenerateArgs),
    /// Print the signatures of the tagged declarations in a source file.
    Signatures(SignaturesArgs),
    /// Print the test cases declared in a test-case file.
    Cases(CasesArgs),
    /// Print each test-case group paired with its signature.
    Correlate(CorrelateArgs),
}

/// Arguments for `casegen generate`.
#[derive(Clone, Debug, Args)]
pub struct GenerateArgs {
    /// Go source file holding the tagged declarations.
    pub source: PathBuf,
    /// Test-case file (defaults to the `_testcase.go` companion when it exists).
    #[arg(long)]
    pub cases: Option<PathBuf>,
    /// Output path (defaults to the `_test.go` companion).
    #[arg(short, long, conflicts_with = "stdout")]
    pub output: Option<PathBuf>,
    /// Print the generated file instead of writing it.
    #[arg(long)]
    pub stdout: bool,
}

/// Arguments for `casegen signatures`.
#[derive(Clone, Debug, Args)]
pub struct SignaturesArgs {
    pub source: PathBuf,
}

/// Arguments for `casegen cases`.
#[derive(Clone, Debug, Args)]
pub struct CasesArgs {
    pub file: PathBuf,
}

/// Arguments for `casegen correlate`.
#[derive(Clone, Debug, Args)]
pub struct CorrelateArgs {
    pub source: PathBuf,
    #[arg(long)]
    pub cases: Option<PathBuf>,
}
