use std::sync::Arc;

use chrono::NaiveDate;
use clap::{
    ArgAction, CommandFactory, Parser, Subcommand,
    builder::{
        Styles,
        styling::{AnsiColor, Effects},
    },
};
use clap_complete::{Shell, generate};

use freshlist::{
    cli::{self, RunOptions},
    config::{self, Config},
    error, utils, warning,
};

fn styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::White.on_default() | Effects::BOLD)
        .usage(AnsiColor::White.on_default() | Effects::BOLD)
        .literal(AnsiColor::BrightBlue.on_default())
        .placeholder(AnsiColor::BrightGreen.on_default())
}

#[derive(Parser, Debug, Clone)]
#[clap(
  version = env!("CARGO_PKG_VERSION"),
  name=env!("CARGO_PKG_NAME"),
  bin_name=env!("CARGO_PKG_NAME"),
  author=env!("CARGO_PKG_AUTHORS"),
  about=env!("CARGO_PKG_DESCRIPTION"),
  styles=styles(),
)]
struct Cli {
    #[clap(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Authorize with Spotify API
    Auth,

    /// Collect new releases and create a playlist from them
    Run(RunArgs),

    /// Collect tracks of new releases into the track file
    Collect(CollectArgs),

    /// Create a playlist from the collected track file
    Playlist(PlaylistOptions),

    /// Get shell completions
    Completions(CompletionsOption),
}

#[derive(Parser, Debug, Clone)]
pub struct WindowArgs {
    /// Number of weeks to look back (defaults to FRESHLIST_LOOKBACK_WEEKS)
    #[clap(long)]
    pub weeks: Option<u32>,

    /// Reference date for the lookback window (YYYY-MM-DD), defaults to now
    #[clap(long, value_parser = utils::parse_date)]
    pub reference_date: Option<NaiveDate>,

    /// Release type(s) to include; can be repeated or comma separated
    #[clap(
        long = "type",
        value_parser = utils::parse_release_kinds,
        action = ArgAction::Append,
        num_args = 1
    )]
    pub release_types: Vec<utils::ReleaseKinds>,
}

impl WindowArgs {
    fn into_options(self, open: bool) -> RunOptions {
        let release_types = if self.release_types.is_empty() {
            None
        } else {
            Some(utils::ReleaseKinds(
                self.release_types
                    .into_iter()
                    .flat_map(|kinds| kinds.0)
                    .collect(),
            ))
        };

        RunOptions {
            weeks: self.weeks,
            reference_date: self.reference_date,
            release_types,
            open,
        }
    }
}

#[derive(Parser, Debug, Clone)]
pub struct RunArgs {
    #[clap(flatten)]
    pub window: WindowArgs,

    /// Open the created playlist in the browser
    #[clap(long)]
    pub open: bool,
}

#[derive(Parser, Debug, Clone)]
pub struct CollectArgs {
    #[clap(flatten)]
    pub window: WindowArgs,
}

#[derive(Parser, Debug, Clone)]
pub struct PlaylistOptions {
    /// Open the created playlist in the browser
    #[clap(long)]
    pub open: bool,
}

#[derive(Parser, Debug, Clone)]
pub struct CompletionsOption {
    shell: Shell,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    if let Command::Completions(opt) = &cli.command {
        let mut cmd = Cli::command_for_update();
        let name = cmd.get_name().to_string();
        generate(opt.shell, &mut cmd, name, &mut std::io::stdout());
        return;
    }

    if let Err(e) = config::load_env().await {
        warning!("Cannot load environment. Err: {}", e);
    }

    let config = match Config::from_env() {
        Ok(config) => Arc::new(config),
        Err(e) => error!("Invalid configuration: {}", e),
    };

    let result = match cli.command {
        Command::Auth => cli::auth(Arc::clone(&config)).await,
        Command::Run(opt) => cli::run(&config, opt.window.into_options(opt.open)).await,
        Command::Collect(opt) => cli::collect(&config, opt.window.into_options(false)).await,
        Command::Playlist(opt) => cli::playlist(&config, opt.open).await,
        Command::Completions(_) => Ok(()),
    };

    if let Err(e) = result {
        error!("{}", e);
    }
}
