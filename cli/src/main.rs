mod commands;
mod terminal;

use commands::{CommandLine, Commands, demo, rules};
use gymnet_common::config::Config;
use terminal::{logging, print};

fn main() -> anyhow::Result<()> {
    let commands = CommandLine::parse_args();

    logging::init_logging()?;

    let cfg = Config {
        no_banner: commands.no_banner,
        quiet: commands.quiet,
    };

    print::banner(cfg.no_banner, cfg.quiet);

    match commands.command.unwrap_or(Commands::Demo) {
        Commands::Demo => demo::demo(&cfg)?,
        Commands::Rules => rules::rules(&cfg),
    }

    print::end_of_program();
    Ok(())
}
