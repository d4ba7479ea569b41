use chrono::{Local, NaiveDate, NaiveTime};
use tabled::Table;

use crate::{
    Res,
    config::Config,
    info,
    management::TrackFileManager,
    pipeline::{self, ReleaseWindow, RunContext, RunPlan},
    spotify::SpotifyClient,
    success,
    types::{Album, ReleaseTableRow},
    utils::{self, ReleaseKinds},
};

/// Options shared by `run` and `collect`.
#[derive(Debug, Clone, Default)]
pub struct RunOptions {
    pub weeks: Option<u32>,
    pub reference_date: Option<NaiveDate>,
    pub release_types: Option<ReleaseKinds>,
    pub open: bool,
}

impl RunOptions {
    fn window(&self, config: &Config) -> ReleaseWindow {
        let reference = match self.reference_date {
            Some(date) => date.and_time(NaiveTime::MIN),
            None => Local::now().naive_local(),
        };
        ReleaseWindow::new(reference, config.lookback(self.weeks))
    }

    /// Applies the command line overrides on top of the configuration.
    fn config(&self, config: &Config) -> Config {
        let mut config = config.clone();
        if let Some(kinds) = &self.release_types {
            config.release_types = kinds.clone();
        }
        config
    }
}

pub async fn run(config: &Config, opts: RunOptions) -> Res<()> {
    let config = opts.config(config);
    let window = opts.window(&config);
    // fail before any request when the playlist owner is unknown
    config.user_id()?;

    let token_mgr = super::load_credentials(&config).await?;
    let client = SpotifyClient::new(&config, token_mgr.access_token());
    let mut ctx = RunContext::new(token_mgr.current_token().clone());

    let plan = RunPlan {
        window,
        playlist_name: utils::playlist_name(&config.playlist_prefix, Local::now().date_naive()),
        playlist_description: format!(
            "Releases of followed artists after {}",
            window.cutoff().format("%Y-%m-%d")
        ),
    };

    info!(
        "Collecting {} released after {}",
        config.release_types,
        window.cutoff().format("%Y-%m-%d")
    );

    let pb = super::spinner("Fetching followed artists...");
    let result = pipeline::run(&client, &mut ctx, &plan, &config.cache_dir(), &pb).await;
    pb.finish_and_clear();
    let playlist = result?;

    print_releases(&ctx.releases);

    match playlist {
        Some(playlist) => {
            success!(
                "Playlist {} created with {} tracks: {}",
                plan.playlist_name,
                ctx.track_uris.len(),
                playlist.url
            );
            if opts.open {
                super::open_in_browser(&playlist.url);
            }
        }
        None => info!("No new releases found, no playlist created."),
    }

    Ok(())
}

pub async fn collect(config: &Config, opts: RunOptions) -> Res<()> {
    let config = opts.config(config);
    let window = opts.window(&config);

    let token_mgr = super::load_credentials(&config).await?;
    let client = SpotifyClient::new(&config, token_mgr.access_token());
    let mut ctx = RunContext::new(token_mgr.current_token().clone());

    let pb = super::spinner("Fetching followed artists...");
    let result = pipeline::collect(&client, &mut ctx, window, &pb).await;
    pb.finish_and_clear();
    result?;

    print_releases(&ctx.releases);

    let track_mgr = TrackFileManager::new(&config.cache_dir(), ctx.track_uris);
    track_mgr.persist().await?;

    success!(
        "Collected {} tracks from {} releases of {} artists into {}",
        track_mgr.count(),
        ctx.releases.len(),
        ctx.artist_ids.len(),
        track_mgr.path().display()
    );
    Ok(())
}

fn print_releases(releases: &[Album]) {
    if releases.is_empty() {
        return;
    }

    let rows: Vec<ReleaseTableRow> = releases.iter().map(ReleaseTableRow::from).collect();
    println!("{}", Table::new(rows));
}
