use casegen_config::CaseGenConfig;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::SignaturesArgs;
use crate::commands::shared::load_signatures;
use crate::output::output;

/// Handle `casegen signatures`.
pub fn handle(
    args: &SignaturesArgs,
    config: &CaseGenConfig,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let unit = load_signatures(&args.source, &config.extract.options())?;
    output(&unit, flags.format)
}
