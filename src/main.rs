use anyhow::Result;
use clap::{CommandFactory, Parser};
use owo_colors::OwoColorize;
use recap::app::{Overrides, run_summarize_command};
use recap::cli::{Cli, Commands, ConfigAction};
use recap::config::Config;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        None => {
            let config = load_config(cli.config.as_deref())?;
            let overrides = Overrides {
                endpoint: cli.endpoint,
                window_size: cli.window_size,
                instruction: cli.instruction,
                timeout_secs: cli.timeout,
                concurrency: cli.concurrency,
            };
            if let Err(e) = run_summarize_command(
                config,
                cli.input.as_deref(),
                cli.output.as_deref(),
                overrides,
                cli.quiet,
                cli.verbose,
            )
            .await
            {
                eprintln!("{}", format!("Error: {}", e).red());
                std::process::exit(if e.is_input_error() { 2 } else { 1 });
            }
        }
        Some(Commands::Config { action }) => {
            handle_config_command(action, cli.config.as_deref())?;
        }
        Some(Commands::Completions { shell }) => {
            clap_complete::generate(shell, &mut Cli::command(), "recap", &mut std::io::stdout());
        }
    }

    Ok(())
}

/// Load configuration from file or use defaults.
///
/// Priority order:
/// 1. Custom config path from CLI (--config)
/// 2. Default config path (~/.config/recap/config.toml)
/// 3. Built-in defaults with environment variable overrides
fn load_config(custom_path: Option<&std::path::Path>) -> Result<Config> {
    let config = if let Some(path) = custom_path {
        Config::load(path)?
    } else {
        Config::load_or_default(&Config::default_path())?
    };

    Ok(config.with_env_overrides())
}

/// Handle configuration commands.
fn handle_config_command(
    action: ConfigAction,
    custom_path: Option<&std::path::Path>,
) -> Result<()> {
    match action {
        ConfigAction::Dump => {
            let config = load_config(custom_path)?;
            print!("{}", config.to_display_toml()?);
        }
    }
    Ok(())
}
