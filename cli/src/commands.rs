pub mod demo;
pub mod rules;

use clap::{ArgAction, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "gymnet")]
#[command(about = "A fitness-center network, from zones to trainer shifts.")]
pub struct CommandLine {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Do not print the banner
    #[arg(long, global = true)]
    pub no_banner: bool,

    /// Hide the banner and section headers
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub quiet: u8,
}

#[derive(Subcommand, Clone, Copy)]
pub enum Commands {
    /// Build a sample network and walk through every rule (default)
    #[command(alias = "d")]
    Demo,
    /// Print the house rules
    #[command(alias = "r")]
    Rules,
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
