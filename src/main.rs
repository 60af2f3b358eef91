//! `xstream` 바이너리 진입점.

use xstream::interface::cli::{AppComposition, Cli, CliAction, ShellExit};

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .init();

    match Cli::parse_action() {
        CliAction::InspectConfig => match xstream::inspect_config_pretty_json() {
            Ok(json) => println!("{json}"),
            Err(err) => {
                eprintln!("error: {err:#}");
                std::process::exit(1);
            }
        },
        CliAction::Interactive => {
            let composition = match AppComposition::new() {
                Ok(composition) => composition,
                Err(err) => {
                    eprintln!("error: {err:#}");
                    std::process::exit(1);
                }
            };

            match xstream::interface::cli::run_repl(&composition).await {
                Ok(ShellExit::Clean) => {}
                Ok(ShellExit::Failed) => std::process::exit(1),
                Err(err) => {
                    eprintln!("error: {err:#}");
                    std::process::exit(1);
                }
            }
        }
    }
}
