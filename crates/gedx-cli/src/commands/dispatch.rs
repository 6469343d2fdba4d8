use gedx_config::GedxConfig;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::Commands;
use crate::commands;

/// Dispatch a parsed command to the corresponding handler module.
pub fn dispatch(command: &Commands, config: &GedxConfig, flags: &GlobalFlags) -> anyhow::Result<()> {
    match command {
        Commands::Convert(args) => commands::convert::handle(args, config, flags),
        Commands::Validate(args) => commands::validate::handle(args, config, flags),
        Commands::Schema { action } => commands::schema::handle(action, flags),
        Commands::Vocab { action } => commands::vocab::handle(action, flags),
    }
}
