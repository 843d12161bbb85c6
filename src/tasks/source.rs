use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use image::ImageFormat;
use notify::event::{CreateKind, ModifyKind, RemoveKind};
use notify::{Event, EventKind, RecursiveMode, Watcher, recommended_watcher};
use rand::seq::SliceRandom;
use tokio::sync::mpsc::{self, Sender};
use tokio::time::sleep;
use tokio_util::sync::CancellationToken;
use tracing::{debug, error, info, instrument, warn};
use walkdir::WalkDir;

use crate::config::{SourceOptions, SourceOrder};
use crate::error::Error;
use crate::events::InputEvent;
use crate::images::ImageRef;

/// Feeds the slider with the images found under `opts.path`, replacing the
/// whole set each time. With `watch` on, rescans whenever files come or go.
#[instrument(skip(to_slider, cancel), fields(root = %opts.path.display()))]
pub async fn run(
    opts: SourceOptions,
    to_slider: Sender<InputEvent>,
    cancel: CancellationToken,
) -> Result<()> {
    publish(&opts, &to_slider).await;
    if !opts.watch {
        return Ok(());
    }

    // Bridge notify callback -> async channel
    let (watch_tx, mut watch_rx) = mpsc::channel::<notify::Result<Event>>(128);
    let mut watcher = recommended_watcher(move |res| {
        let _ = watch_tx.blocking_send(res);
    })?;
    watcher
        .watch(&opts.path, RecursiveMode::Recursive)
        .with_context(|| format!("failed to watch {}", opts.path.display()))?;
    info!("watching image directory");

    loop {
        tokio::select! {
            _ = cancel.cancelled() => {
                info!("cancel received; exiting source task");
                break;
            }

            Some(res) = watch_rx.recv() => match res {
                Ok(event) if changes_inventory(&event) => {
                    debug!(kind = ?event.kind, paths = ?event.paths, "fs change; waiting to settle");
                    if !settle(opts.settle, &mut watch_rx, &cancel).await {
                        break;
                    }
                    publish(&opts, &to_slider).await;
                }
                Ok(event) => debug!(kind = ?event.kind, "fs: ignored"),
                Err(err) => error!("watch error: {err}"),
            }
        }
    }
    Ok(())
}

/// Swallows further watch events until none has arrived for `quiet`.
/// Returns false if cancelled meanwhile.
async fn settle(
    quiet: Duration,
    watch_rx: &mut mpsc::Receiver<notify::Result<Event>>,
    cancel: &CancellationToken,
) -> bool {
    let mut absorbed = 0usize;
    loop {
        tokio::select! {
            _ = cancel.cancelled() => return false,
            _ = sleep(quiet) => break,
            res = watch_rx.recv() => match res {
                Some(_) => absorbed += 1,
                None => break,
            }
        }
    }
    debug!(absorbed, "fs quiet; rescanning");
    true
}

/// Scans and hands the result to the slider. Anything unusable becomes a
/// request to restore the defaults; the slider never sees an empty set.
async fn publish(opts: &SourceOptions, to_slider: &Sender<InputEvent>) {
    let event = match load(opts).await {
        Ok(images) if !images.is_empty() => {
            info!(count = images.len(), "images selected");
            InputEvent::ImagesSelected(images)
        }
        Ok(_) => {
            warn!("no images found; restoring defaults");
            InputEvent::RestoreDefaults
        }
        Err(err) => {
            warn!("image scan failed: {err}; restoring defaults");
            InputEvent::RestoreDefaults
        }
    };
    let _ = to_slider.send(event).await;
}

/// Scans the directory and turns each image into a reference, embedding the
/// bytes if configured. Unreadable files are skipped.
pub async fn load(opts: &SourceOptions) -> Result<Vec<ImageRef>, Error> {
    let paths = scan(opts)?;
    if !opts.embed {
        return Ok(paths
            .iter()
            .map(|p| ImageRef::uri(p.display().to_string()))
            .collect());
    }

    let mut images = Vec::with_capacity(paths.len());
    for path in paths {
        match tokio::fs::read(&path).await {
            Ok(bytes) => images.push(ImageRef::embedded(&path, bytes)),
            Err(err) => warn!(path = %path.display(), "skipping unreadable image: {err}"),
        }
    }
    Ok(images)
}

/// Recursively lists image files under the configured directory in display
/// order.
pub fn scan(opts: &SourceOptions) -> Result<Vec<PathBuf>, Error> {
    if !opts.path.is_dir() {
        return Err(Error::BadDir(opts.path.display().to_string()));
    }
    let mut paths: Vec<PathBuf> = WalkDir::new(&opts.path)
        .follow_links(true)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
        .map(|e| e.into_path())
        .filter(|p| is_image(p))
        .collect();
    match opts.order {
        SourceOrder::Name => paths.sort(),
        SourceOrder::Shuffle => paths.shuffle(&mut rand::rng()),
    }
    debug!(found = paths.len(), "scan complete");
    Ok(paths)
}

pub fn is_image(path: &Path) -> bool {
    ImageFormat::from_path(path).is_ok()
}

/// Whether an event can add or drop images. Folder events and renames have
/// no image extension to go by, so they always count.
fn changes_inventory(event: &Event) -> bool {
    match event.kind {
        EventKind::Create(CreateKind::Folder)
        | EventKind::Remove(RemoveKind::Folder | RemoveKind::Any)
        | EventKind::Modify(ModifyKind::Name(_)) => true,
        EventKind::Create(CreateKind::File | CreateKind::Any)
        | EventKind::Remove(RemoveKind::File) => event.paths.iter().any(|p| is_image(p)),
        _ => false,
    }
}
