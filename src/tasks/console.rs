use std::io::{self, BufRead};
use std::ops::ControlFlow;
use std::thread;

use anyhow::Result;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tokio::sync::mpsc::{Receiver, Sender};
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

use crate::events::{CloseReason, InputEvent, Key};
use crate::images::ImageRef;

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Input(Vec<InputEvent>),
    Quit,
}

/// Parses one console line. Unknown input yields `None`.
///
/// Slide numbers are 1-based as on the indicator dots.
pub fn parse(line: &str) -> Option<Command> {
    let mut words = line.split_whitespace();
    let head = words.next()?;
    let args: Vec<&str> = words.collect();

    let events = match (head, args.as_slice()) {
        ("quit" | "exit" | "q", []) => return Some(Command::Quit),
        ("left" | "prev" | "h", []) => vec![InputEvent::Key(Key::ArrowLeft)],
        ("right" | "next" | "l", []) => vec![InputEvent::Key(Key::ArrowRight)],
        ("esc" | "escape", []) => vec![InputEvent::Key(Key::Escape)],
        ("play" | "pause" | "space", []) => vec![InputEvent::ToggleAutoplay],
        ("click", []) => vec![InputEvent::ClickImage],
        ("reset", []) => vec![InputEvent::ResetZoom],
        ("close", []) => vec![InputEvent::CloseFullscreen(CloseReason::CloseButton)],
        ("backdrop", []) => vec![InputEvent::CloseFullscreen(CloseReason::Backdrop)],
        ("hide", []) => vec![InputEvent::VisibilityChanged { hidden: true }],
        ("show", []) => vec![InputEvent::VisibilityChanged { hidden: false }],
        ("goto", [n]) => {
            let n: usize = n.parse().ok()?;
            vec![InputEvent::GoTo(n.checked_sub(1)?)]
        }
        ("drag", [from, to]) => {
            let from: f32 = from.parse().ok().filter(|x: &f32| x.is_finite())?;
            let to: f32 = to.parse().ok().filter(|x: &f32| x.is_finite())?;
            vec![
                InputEvent::DragStart { x: from },
                InputEvent::DragMove { x: to },
                InputEvent::DragEnd,
            ]
        }
        ("load", []) => vec![InputEvent::RestoreDefaults],
        ("load", uris) => vec![InputEvent::ImagesSelected(
            uris.iter().map(|u| ImageRef::uri(*u)).collect(),
        )],
        (key, []) => {
            let mut chars = key.chars();
            let c = chars.next()?;
            if chars.next().is_some() {
                return None;
            }
            vec![InputEvent::Key(Key::Char(c))]
        }
        _ => return None,
    };
    Some(Command::Input(events))
}

/// Reads commands line by line and forwards them to the slider. `quit` or
/// end of input cancels the whole pipeline.
pub async fn run<I>(input: I, to_slider: Sender<InputEvent>, cancel: CancellationToken) -> Result<()>
where
    I: AsyncBufRead + Unpin,
{
    let mut lines = input.lines();
    loop {
        let line = tokio::select! {
            _ = cancel.cancelled() => break,
            line = lines.next_line() => line?,
        };
        let Some(line) = line else {
            info!("input closed; initiating shutdown");
            cancel.cancel();
            break;
        };
        if dispatch(&line, &to_slider, &cancel).await.is_break() {
            break;
        }
    }
    Ok(())
}

/// Same as [`run`], but fed by a reader thread. Cancellation returns at once
/// even while that thread is still parked in a blocking read.
pub async fn run_lines(
    mut lines: Receiver<String>,
    to_slider: Sender<InputEvent>,
    cancel: CancellationToken,
) -> Result<()> {
    loop {
        let line = tokio::select! {
            _ = cancel.cancelled() => break,
            line = lines.recv() => line,
        };
        let Some(line) = line else {
            info!("input closed; initiating shutdown");
            cancel.cancel();
            break;
        };
        if dispatch(&line, &to_slider, &cancel).await.is_break() {
            break;
        }
    }
    Ok(())
}

/// Reads stdin on a plain thread. The thread is left detached; it ends on
/// EOF, on a read error, or once the receiving side is gone.
pub fn spawn_stdin_reader(lines: Sender<String>) -> Result<thread::JoinHandle<()>> {
    let handle = thread::Builder::new()
        .name("stdin-reader".into())
        .spawn(move || {
            let stdin = io::stdin();
            let mut buf = String::new();
            loop {
                buf.clear();
                match stdin.lock().read_line(&mut buf) {
                    Ok(0) => break,
                    Ok(_) => {
                        let line = buf.trim_end_matches(['\r', '\n']).to_string();
                        if lines.blocking_send(line).is_err() {
                            break;
                        }
                    }
                    Err(err) => {
                        warn!("stdin read failed: {err}");
                        break;
                    }
                }
            }
        })?;
    Ok(handle)
}

async fn dispatch(
    line: &str,
    to_slider: &Sender<InputEvent>,
    cancel: &CancellationToken,
) -> ControlFlow<()> {
    match parse(line) {
        Some(Command::Quit) => {
            info!("quit requested");
            cancel.cancel();
            return ControlFlow::Break(());
        }
        Some(Command::Input(events)) => {
            for event in events {
                if to_slider.send(event).await.is_err() {
                    debug!("slider channel closed");
                    return ControlFlow::Break(());
                }
            }
        }
        None if line.trim().is_empty() => {}
        None => warn!(%line, "unrecognised command"),
    }
    ControlFlow::Continue(())
}
