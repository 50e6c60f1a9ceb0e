use casegen_config::CaseGenConfig;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::CasesArgs;
use crate::commands::shared::load_test_cases;
use crate::output::output;

/// Handle `casegen cases`.
pub fn handle(args: &CasesArgs, config: &CaseGenConfig, flags: &GlobalFlags) -> anyhow::Result<()> {
    let unit = load_test_cases(&args.file, &config.extract.options())?;
    output(&unit, flags.format)
}
