use std::path::{Path, PathBuf};

use anyhow::{Context, bail};
use casegen_config::CaseGenConfig;
use casegen_core::naming::test_file_name_of;
use casegen_core::{
    CoreError, CorrelatedUnit, ExtractOptions, SignatureUnit, TestCaseUnit, correlate,
    extract_test_cases,
};
use serde::Serialize;
use tracing::{info, warn};

use crate::cli::GlobalFlags;
use crate::cli::root_commands::GenerateArgs;
use crate::commands::shared::{companion_cases_path, load_signatures, parse};
use crate::emit::render_test_file;
use crate::output::output;

/// Summary printed after a test file is written.
#[derive(Debug, Serialize)]
pub struct GenerateReport {
    pub source: PathBuf,
    pub cases: Option<PathBuf>,
    pub output: PathBuf,
    pub functions: Vec<String>,
    pub matched: Vec<String>,
    pub unmatched: Vec<String>,
}

#[derive(Debug)]
pub struct Generated {
    pub report: GenerateReport,
    pub content: String,
}

/// Handle `casegen generate`.
pub fn handle(
    args: &GenerateArgs,
    config: &CaseGenConfig,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let generated = generate(args, config)?;

    if args.stdout {
        print!("{}", generated.content);
        return Ok(());
    }

    write_test_file(&generated.report.output, &generated.content, config.generate.overwrite)?;
    info!(output = %generated.report.output.display(), "wrote test file");

    if !flags.quiet {
        output(&generated.report, flags.format)?;
    }
    Ok(())
}

/// Render the test file for `args.source` without touching the file system.
pub fn generate(args: &GenerateArgs, config: &CaseGenConfig) -> anyhow::Result<Generated> {
    let output_path = match &args.output {
        Some(path) => path.clone(),
        None => args
            .source
            .to_str()
            .and_then(test_file_name_of)
            .map(PathBuf::from)
            .with_context(|| format!("{} is not a .go file", args.source.display()))?,
    };

    let options = config.extract.options();
    let signatures = load_signatures(&args.source, &options)?;

    let cases_path = match &args.cases {
        Some(path) => Some(path.clone()),
        None if config.generate.with_cases => companion_cases_path(&args.source),
        None => None,
    };

    let test_cases = match &cases_path {
        Some(path) => load_cases(path, args.cases.is_some(), &options)?,
        None => None,
    };

    let correlated = test_cases
        .map(|cases| correlate(&signatures, &cases))
        .transpose()
        .context("test-case file does not belong to the source package")?;

    let content = render_test_file(&signatures, correlated.as_ref());
    Ok(Generated {
        report: report_for(args, cases_path, output_path, &signatures, correlated.as_ref()),
        content,
    })
}

/// Load test cases; a discovered companion without cases falls back to scaffolds.
fn load_cases(
    path: &Path,
    explicit: bool,
    options: &ExtractOptions,
) -> anyhow::Result<Option<TestCaseUnit>> {
    let parsed = parse(path)?;
    match extract_test_cases(&parsed.unit, &parsed.resolver, options) {
        Ok(unit) => Ok(Some(unit)),
        Err(CoreError::NoTestCases { namespace }) if !explicit => {
            warn!(
                path = %path.display(),
                %namespace,
                "companion test-case file declares no cases; generating scaffolds"
            );
            Ok(None)
        }
        Err(error) => Err(error)
            .with_context(|| format!("failed to extract test cases from {}", path.display())),
    }
}

fn report_for(
    args: &GenerateArgs,
    cases: Option<PathBuf>,
    output: PathBuf,
    signatures: &SignatureUnit,
    correlated: Option<&CorrelatedUnit>,
) -> GenerateReport {
    let functions: Vec<String> = signatures
        .signatures
        .iter()
        .map(|s| s.function_name.clone())
        .collect();
    let matched = functions
        .iter()
        .filter(|f| correlated.is_some_and(|c| c.group_for(f).is_some()))
        .cloned()
        .collect();
    let unmatched = correlated
        .map(|c| c.unmatched().map(|g| g.function_name.clone()).collect())
        .unwrap_or_default();

    GenerateReport {
        source: args.source.clone(),
        cases,
        output,
        functions,
        matched,
        unmatched,
    }
}

fn write_test_file(path: &Path, content: &str, overwrite: bool) -> anyhow::Result<()> {
    if path.exists() && !overwrite {
        bail!(
            "{} already exists (set generate.overwrite = true to replace it)",
            path.display()
        );
    }
    std::fs::write(path, content).with_context(|| format!("failed to write {}", path.display()))
}
