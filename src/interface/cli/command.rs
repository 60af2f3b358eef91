//! CLI 명령 파싱 모듈.

use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "xstream")]
#[command(about = "Interactive store-management terminal")]
pub struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Show effective merged config and store file status
    Config,
}

pub enum CliAction {
    Interactive,
    InspectConfig,
}

impl Cli {
    pub fn parse_action() -> CliAction {
        let cli = Cli::parse();

        match cli.command {
            Some(Commands::Config) => CliAction::InspectConfig,
            None => CliAction::Interactive,
        }
    }
}
