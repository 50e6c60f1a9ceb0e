use anyhow::Context;
use casegen_config::CaseGenConfig;
use casegen_core::correlate;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::CorrelateArgs;
use crate::commands::shared::{companion_cases_path, load_signatures, load_test_cases};
use crate::output::output;

/// Handle `casegen correlate`.
pub fn handle(
    args: &CorrelateArgs,
    config: &CaseGenConfig,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let cases_path = args
        .cases
        .clone()
        .or_else(|| companion_cases_path(&args.source))
        .with_context(|| {
            format!(
                "no test-case file for {} (pass --cases)",
                args.source.display()
            )
        })?;

    let options = config.extract.options();
    let signatures = load_signatures(&args.source, &options)?;
    let test_cases = load_test_cases(&cases_path, &options)?;
    let unit = correlate(&signatures, &test_cases)?;
    output(&unit, flags.format)
}
