use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use arbtt_panel::config::StatsInterval;

#[derive(Parser)]
#[clap(name = "arbtt-panel")]
#[clap(about = "Menu-style summaries for the arbtt time tracker", long_about = None)]
#[clap(version)]
pub struct Cli {
    /// Settings file (defaults to ~/.config/arbtt-panel/config.yaml)
    #[clap(long, global = true)]
    pub config: Option<PathBuf>,

    #[clap(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print the per-tag time summary for the configured range
    Summary {
        /// Override the configured range: day, week or month
        #[clap(short, long)]
        interval: Option<StatsInterval>,
        #[clap(short, long, value_enum, default_value = "text")]
        format: OutputFormat,
    },
    /// Print the most frequent window samples for one tag
    Events {
        /// Tag or category to inspect, e.g. work:coding
        tag: String,
        #[clap(short, long, value_enum, default_value = "text")]
        format: OutputFormat,
    },
    /// Refresh and print the summary on the configured timer
    Watch {
        #[clap(short, long)]
        interval: Option<StatsInterval>,
    },
    /// Append commented rule templates for one of a tag's windows to the
    /// categorize file
    Rules {
        tag: String,
        /// 1-based position in the tag's event list
        #[clap(short, long, default_value_t = 1)]
        event: usize,
        /// Skip opening the categorize file afterwards
        #[clap(long)]
        no_open: bool,
    },
    /// Open the categorize file in the desktop's default editor
    Edit,
    /// Write a commented default settings file
    Init,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}
