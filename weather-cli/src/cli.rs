use anyhow::Context;
use clap::{Parser, Subcommand};
use inquire::{Confirm, InquireError, Password, PasswordDisplayMode, Text};
use weather_core::{Config, WeatherPanel, WeatherProvider, WeatherView, provider_from_config};

/// Typing this at the search prompt leaves the interactive view.
const QUIT_COMMAND: &str = ":q";

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "weather", version, about = "Current weather for a city")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Configure the OpenWeather API key and default city.
    Configure,

    /// Show current weather for a city.
    Show {
        /// City name; defaults to the configured default city.
        city: Option<String>,

        /// Print the rendered view as JSON.
        #[arg(long)]
        json: bool,
    },

    /// Open the view on the default city and search interactively.
    Search,
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<()> {
        match self.command {
            Command::Configure => configure(),
            Command::Show { city, json } => {
                let config = Config::load()?;
                let provider = provider_from_config(&config);
                show(&config, provider.as_ref(), city, json).await
            }
            Command::Search => {
                let config = Config::load()?;
                let provider = provider_from_config(&config);
                search(&config, provider.as_ref()).await
            }
        }
    }
}

fn new_view(config: &Config) -> WeatherView {
    tracing::debug!(
        default_city = %config.default_city,
        fallback = config.fallback_on_error,
        "opening weather view"
    );
    WeatherView::new(config.default_city.clone()).with_fallback(config.fallback_on_error)
}

/// Run one fetch cycle for `city` (or the default city) and build the panel.
async fn show_panel(
    config: &Config,
    provider: &dyn WeatherProvider,
    city: Option<&str>,
) -> WeatherPanel {
    let mut view = new_view(config);

    match city.map(str::trim).filter(|c| !c.is_empty()) {
        Some(city) => view.fetch_city(provider, city).await,
        None => view.mount(provider).await,
    }

    WeatherPanel::from_state(view.state())
}

async fn show(
    config: &Config,
    provider: &dyn WeatherProvider,
    city: Option<String>,
    json: bool,
) -> anyhow::Result<()> {
    let panel = show_panel(config, provider, city.as_deref()).await;
    if json {
        let out = serde_json::to_string_pretty(&panel).context("Failed to serialize view")?;
        println!("{out}");
    } else {
        print!("{panel}");
    }

    Ok(())
}

async fn search(config: &Config, provider: &dyn WeatherProvider) -> anyhow::Result<()> {
    let mut view = new_view(config);
    view.mount(provider).await;

    loop {
        println!();
        print!("{}", WeatherPanel::from_state(view.state()));
        println!();

        let input = match Text::new("Search city:")
            .with_help_message("Enter to search, Esc or :q to quit")
            .prompt()
        {
            Ok(input) => input,
            Err(InquireError::OperationCanceled | InquireError::OperationInterrupted) => break,
            Err(e) => return Err(e).context("Failed to read search input"),
        };

        if input.trim() == QUIT_COMMAND {
            break;
        }

        view.set_search_input(input);
        let Some(ticket) = view.submit_search() else {
            continue;
        };

        print!("{}", WeatherPanel::from_state(view.state()));
        let outcome = provider.current_weather(ticket.city()).await;
        view.complete_fetch(ticket, outcome);
    }

    Ok(())
}

fn configure() -> anyhow::Result<()> {
    let mut config = Config::load()?;

    let api_key = Password::new("OpenWeather API key:")
        .with_display_mode(PasswordDisplayMode::Masked)
        .without_confirmation()
        .with_help_message("Leave empty to keep the current key")
        .prompt()
        .context("Failed to read API key")?;
    if !api_key.trim().is_empty() {
        config.set_api_key(&api_key);
    }

    let default_city = Text::new("Default city:")
        .with_default(&config.default_city)
        .prompt()
        .context("Failed to read default city")?;
    let default_city = default_city.trim();
    if !default_city.is_empty() {
        config.default_city = default_city.to_string();
    }

    config.fallback_on_error = Confirm::new("Show demo data when a fetch fails?")
        .with_default(config.fallback_on_error)
        .prompt()
        .context("Failed to read fallback setting")?;

    let path = config.save()?;
    println!("Configuration saved to {}", path.display());

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use weather_core::{FETCH_FAILED_MESSAGE, FetchError, WeatherRecord};

    #[derive(Debug)]
    struct Unreachable;

    #[async_trait]
    impl WeatherProvider for Unreachable {
        async fn current_weather(&self, _city: &str) -> Result<WeatherRecord, FetchError> {
            Err(FetchError::MissingApiKey)
        }
    }

    #[test]
    fn parses_show_with_city_and_json() {
        let cli = Cli::try_parse_from(["weather", "show", "Paris", "--json"]).unwrap();

        match cli.command {
            Command::Show { city, json } => {
                assert_eq!(city.as_deref(), Some("Paris"));
                assert!(json);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn show_city_is_optional() {
        let cli = Cli::try_parse_from(["weather", "show"]).unwrap();
        assert!(matches!(cli.command, Command::Show { city: None, json: false }));
    }

    #[test]
    fn parses_search_and_configure() {
        let cli = Cli::try_parse_from(["weather", "search"]).unwrap();
        assert!(matches!(cli.command, Command::Search));

        let cli = Cli::try_parse_from(["weather", "configure"]).unwrap();
        assert!(matches!(cli.command, Command::Configure));
    }

    #[tokio::test]
    async fn show_falls_back_instead_of_failing() {
        let config = Config::default();
        let result = show(&config, &Unreachable, Some("Nowhereville".into()), true).await;
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn show_panel_renders_error_and_placeholder() {
        let config = Config::default();
        let panel = show_panel(&config, &Unreachable, Some("  Nowhereville ")).await;

        assert_eq!(panel.error.as_deref(), Some(FETCH_FAILED_MESSAGE));
        let card = panel.card.as_ref().unwrap();
        assert_eq!(card.location, "Nowhereville, CA");
        assert_eq!(card.temperature, "12°C");
        assert_eq!(card.humidity, "75%");

        let text = panel.to_string();
        assert!(text.contains(FETCH_FAILED_MESSAGE));
        assert!(text.contains("Nowhereville, CA"));
        assert!(text.contains("10.0 km"));
    }

    #[tokio::test]
    async fn show_panel_without_city_uses_default() {
        let config = Config {
            default_city: "Calgary".into(),
            ..Config::default()
        };
        let panel = show_panel(&config, &Unreachable, None).await;

        assert_eq!(panel.city, "Calgary");
        assert_eq!(panel.card.as_ref().unwrap().location, "Calgary, CA");
    }

    #[tokio::test]
    async fn show_panel_without_fallback_has_no_card() {
        let config = Config {
            fallback_on_error: false,
            ..Config::default()
        };
        let panel = show_panel(&config, &Unreachable, Some("Nowhereville")).await;

        assert!(panel.card.is_none());
        assert_eq!(panel.error.as_deref(), Some(FETCH_FAILED_MESSAGE));
    }
}
