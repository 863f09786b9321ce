use anyhow::Context;
use clap::{Parser, Subcommand};
use gaode_core::{Config, DetailLevel, GaodeWeatherTool, ToolParameters};

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "gaode-weather", version, about = "Gaode city weather tool")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Store the Gaode API key in the local configuration.
    Configure,

    /// Look up weather for a city and print the output message as JSON.
    Show {
        /// City name, e.g. "西安".
        city: String,

        /// Detail level: "base" for current conditions, "all" for the
        /// multi-day forecast.
        #[arg(long, default_value = "base")]
        extensions: String,
    },

    /// Run a single live lookup to confirm the configured key is accepted.
    Check,
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<()> {
        match self.command {
            Command::Configure => configure(),
            Command::Show { city, extensions } => show(city, &extensions).await,
            Command::Check => check().await,
        }
    }
}

fn configure() -> anyhow::Result<()> {
    let mut config = Config::load()?;

    let api_key = inquire::Password::new("Gaode API key:")
        .without_confirmation()
        .prompt()
        .context("Failed to read API key")?;

    config.set_api_key(api_key);
    config.save()?;

    println!("Saved configuration to {}", Config::config_file_path()?.display());
    Ok(())
}

async fn show(city: String, extensions: &str) -> anyhow::Result<()> {
    let extension = DetailLevel::try_from(extensions)?;
    let config = Config::load()?;
    let tool = GaodeWeatherTool::from_config(&config)
        .context("Hint: run `gaode-weather configure` and enter your API key.")?;

    let output = tool.invoke(&ToolParameters { city, extension }).await;
    println!("{}", serde_json::to_string_pretty(&output)?);

    Ok(())
}

async fn check() -> anyhow::Result<()> {
    let config = Config::load()?;
    let tool = GaodeWeatherTool::from_config(&config)
        .context("Hint: run `gaode-weather configure` and enter your API key.")?;

    tool.validate_credentials().await.context("Credential validation failed")?;
    println!("API key accepted.");
    Ok(())
}
