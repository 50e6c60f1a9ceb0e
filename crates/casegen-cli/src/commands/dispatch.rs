use casegen_config::CaseGenConfig;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::Commands;
use crate::commands;

/// Dispatch a parsed command to the corresponding handler module.
pub fn dispatch(
    command: &Commands,
    config: &CaseGenConfig,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match command {
        Commands::Generate(args) => commands::generate::handle(args, config, flags),
        Commands::Signatures(args) => commands::signatures::handle(args, config, flags),
        Commands::Cases(args) => commands::cases::handle(args, config, flags),
        Commands::Correlate(args) => commands::correlate::handle(args, config, flags),
    }
}
