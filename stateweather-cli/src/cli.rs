use anyhow::{Context, anyhow};
use clap::{Parser, Subcommand};
use stateweather_core::{Config, Session, open_meteo_from_config, reference};

use crate::shell;

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "stateweather", version, about = "Current weather for Indian states")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Interactive session with lookup history (the default).
    Session,

    /// Look up one state and print the result.
    Show {
        /// State or union territory name, e.g. "Tamil Nadu".
        state: String,
    },

    /// List supported states and the capital used for each.
    States,

    /// Edit endpoints, timeout and export directory.
    Configure,
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<()> {
        match self.command.unwrap_or(Command::Session) {
            Command::Session => {
                let config = Config::load()?;
                let (geocoder, forecast) = open_meteo_from_config(&config)?;
                let mut session = Session::new(geocoder, forecast);
                shell::run(&mut session, &config).await?;
            }
            Command::Show { state } => {
                let config = Config::load()?;
                let (geocoder, forecast) = open_meteo_from_config(&config)?;
                let mut session = Session::new(geocoder, forecast);

                let result = session
                    .lookup(&state)
                    .await
                    .map_err(|err| anyhow!("{}: {}", err.kind().title(), err))?;
                println!("{result}");
            }
            Command::States => {
                for (state, capital) in reference::STATE_CAPITALS {
                    println!("{state:<20} {capital}");
                }
            }
            Command::Configure => configure()?,
        }

        Ok(())
    }
}

fn configure() -> anyhow::Result<()> {
    let mut cfg = Config::load()?;

    cfg.geocoding_url = inquire::Text::new("Geocoding endpoint:")
        .with_default(&cfg.geocoding_url)
        .prompt()?;

    cfg.forecast_url = inquire::Text::new("Forecast endpoint:")
        .with_default(&cfg.forecast_url)
        .prompt()?;

    cfg.language = inquire::Text::new("Search language:")
        .with_default(&cfg.language)
        .prompt()?;

    let timeout = cfg.timeout_secs.map(|t| t.to_string()).unwrap_or_default();
    let timeout = inquire::Text::new("Request timeout in seconds:")
        .with_initial_value(&timeout)
        .with_help_message("Leave empty to wait as long as the connection allows")
        .prompt()?;
    cfg.timeout_secs = parse_optional_secs(&timeout)?;

    let export_dir = cfg
        .export_dir
        .as_ref()
        .map(|d| d.display().to_string())
        .unwrap_or_default();
    let export_dir = inquire::Text::new("Default export directory:")
        .with_initial_value(&export_dir)
        .with_help_message("Leave empty to use the current directory")
        .prompt()?;
    cfg.export_dir = Some(export_dir.trim())
        .filter(|d| !d.is_empty())
        .map(Into::into);

    cfg.save()?;
    println!("Saved configuration to {}", Config::config_file_path()?.display());
    Ok(())
}

fn parse_optional_secs(input: &str) -> anyhow::Result<Option<u64>> {
    let input = input.trim();
    if input.is_empty() {
        return Ok(None);
    }

    input
        .parse()
        .map(Some)
        .with_context(|| format!("'{input}' is not a whole number of seconds"))
}
