mod cli;

use std::path::Path;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use arbtt_panel::app::{fetch_events_for_tag, refresh_menu};
use arbtt_panel::arbtt::rules::{append_rule_templates, open_categorize_file};
use arbtt_panel::config::{
    default_config_path, write_sample_config, PanelConfig, Settings, StatsInterval,
};
use arbtt_panel::view::render_events_text;

use crate::cli::{Cli, Commands, OutputFormat};

#[tokio::main]
async fn main() -> Result<()> {
    // Diagnostics go to stderr so piped JSON output stays clean
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config_path = cli.config.unwrap_or_else(default_config_path);

    match cli.command {
        Commands::Summary { interval, format } => {
            let settings = load_settings(&config_path, interval)?;
            let view = refresh_menu(&settings).await;
            match format {
                OutputFormat::Text => print!("{}", view.render_text()),
                OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&view)?),
            }
        }

        Commands::Events { tag, format } => {
            let settings = load_settings(&config_path, None)?;
            let events = fetch_events_for_tag(&settings, &tag).await;
            match format {
                OutputFormat::Text => print!("{}", render_events_text(&tag, &events)),
                OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&events)?),
            }
        }

        Commands::Watch { interval } => {
            watch(&config_path, interval).await?;
        }

        Commands::Rules { tag, event, no_open } => {
            let settings = load_settings(&config_path, None)?;
            let events = fetch_events_for_tag(&settings, &tag).await;
            if events.is_empty() {
                println!("No window samples recorded for {} in the selected range", tag);
                return Ok(());
            }
            let picked = events.get(event.saturating_sub(1)).with_context(|| {
                format!("Event {} out of range, {} available", event, events.len())
            })?;

            let path = append_rule_templates(&settings.categorize_file_path, picked)?;
            println!("Appended rule templates for \"{}\" to {}", picked.program, path.display());
            if !no_open {
                open_categorize_file(&settings.categorize_file_path)?;
            }
        }

        Commands::Edit => {
            let settings = load_settings(&config_path, None)?;
            open_categorize_file(&settings.categorize_file_path)?;
        }

        Commands::Init => {
            write_sample_config(&config_path)?;
            println!("Wrote {}", config_path.display());
        }
    }

    Ok(())
}

/// Load settings, applying a command-line interval override when given
fn load_settings(path: &Path, interval: Option<StatsInterval>) -> Result<Settings> {
    let config = PanelConfig::load(path)?;
    let mut settings = Settings::from(config);
    if let Some(interval) = interval {
        settings.stats_interval = interval;
    }
    Ok(settings)
}

/// Periodic refresh loop. Settings are re-read every cycle so edits to the
/// config file take effect without a restart.
async fn watch(config_path: &Path, interval: Option<StatsInterval>) -> Result<()> {
    loop {
        let settings = load_settings(config_path, interval)?;
        let view = refresh_menu(&settings).await;

        println!("--- {}", chrono::Local::now().format("%Y-%m-%d %H:%M:%S"));
        print!("{}", view.render_text());
        println!();

        tokio::time::sleep(settings.refresh_interval).await;
    }
}
