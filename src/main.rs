//! Binary entrypoint for the image carousel.
//!
//! Runs the slider headless: commands typed on stdin drive it and every
//! state change is reported through the log.

use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::{ArgAction, Parser};
use tokio::sync::mpsc;
use tokio::task::JoinSet;
use tokio_util::sync::CancellationToken;
use tracing::{Level, info};
use tracing_subscriber::{EnvFilter, fmt};

use image_carousel::config::{Configuration, SourceOptions};
use image_carousel::events::InputEvent;
use image_carousel::surface::LogSurface;
use image_carousel::tasks;

#[derive(Debug, Parser)]
#[command(name = "image-carousel", version, about = "Headless image carousel")]
struct Cli {
    /// Path to YAML config file
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Directory to load images from (overrides `source.path`)
    #[arg(long, value_name = "DIR")]
    images: Option<PathBuf>,

    /// Override the autoplay interval, e.g. "5s" or "1500ms"
    #[arg(long, value_name = "DURATION", value_parser = humantime::parse_duration)]
    interval: Option<Duration>,

    /// Increase log verbosity (repeatable)
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count)]
    verbose: u8,
}

fn init_tracing(verbosity: u8) -> Result<()> {
    // map -v to log level
    let level = match verbosity {
        0 => Level::INFO,
        1 => Level::DEBUG,
        _ => Level::TRACE,
    };
    let filter = EnvFilter::from_default_env()
        .add_directive(format!("image_carousel={level}").parse()?)
        .add_directive("notify=warn".parse()?);
    fmt().with_env_filter(filter).with_target(true).init();
    Ok(())
}

fn load_config(cli: &Cli) -> Result<Configuration> {
    let mut cfg = match &cli.config {
        Some(path) => Configuration::from_yaml_file(path)
            .with_context(|| format!("failed to load configuration from {}", path.display()))?,
        None => Configuration::default(),
    };
    if let Some(interval) = cli.interval {
        cfg.autoplay.interval = interval;
    }
    if let Some(dir) = &cli.images {
        let mut source = cfg
            .source
            .take()
            .unwrap_or_else(|| SourceOptions::new(dir.clone()));
        source.path = dir.clone();
        cfg.source = Some(source);
    }
    cfg.validated().context("invalid configuration values")
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose)?;

    let cfg = load_config(&cli)?;
    info!(
        images = cfg.default_images.len(),
        source = ?cfg.source.as_ref().map(|s| s.path.display().to_string()),
        "configuration loaded"
    );

    // Console/Source -> Slider
    let (input_tx, input_rx) = mpsc::channel::<InputEvent>(64);
    let cancel = CancellationToken::new();

    {
        let cancel = cancel.clone();
        tokio::spawn(async move {
            if let Err(err) = tokio::signal::ctrl_c().await {
                tracing::warn!("ctrl-c handler failed: {err}");
                return;
            }
            info!("ctrl-c received; initiating shutdown");
            cancel.cancel();
        });
    }

    let mut tasks = JoinSet::new();

    // stdin reads block; keep them on a detached thread so ctrl-c never waits on them
    let (line_tx, line_rx) = mpsc::channel::<String>(16);
    tasks::console::spawn_stdin_reader(line_tx).context("failed to start stdin reader")?;
    tasks.spawn({
        let input_tx = input_tx.clone();
        let cancel = cancel.clone();
        async move {
            tasks::console::run_lines(line_rx, input_tx, cancel)
                .await
                .context("console task failed")
        }
    });

    if let Some(source) = cfg.source.clone() {
        tasks.spawn({
            let input_tx = input_tx.clone();
            let cancel = cancel.clone();
            async move {
                tasks::source::run(source, input_tx, cancel)
                    .await
                    .context("source task failed")
            }
        });
    }
    drop(input_tx);

    // The slider owns all widget state; it returns once cancelled.
    if let Err(e) = tasks::slider::run(cfg, LogSurface, input_rx, cancel.clone())
        .await
        .context("slider failed")
    {
        tracing::error!("{e:?}");
    }
    cancel.cancel();

    while let Some(res) = tasks.join_next().await {
        match res {
            Ok(Ok(())) => {}
            Ok(Err(e)) => tracing::error!("task error: {e:?}"),
            Err(e) => tracing::error!("join error: {e}"),
        }
    }

    Ok(())
}
