use anyhow::Result;
use tokio::select;
use tokio::sync::mpsc::{self, Receiver};
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, instrument};

use crate::config::Configuration;
use crate::events::{InputEvent, InputResponse};
use crate::scheduler::{TimerId, TokioScheduler};
use crate::slider::Slider;
use crate::surface::Surface;

/// Owns the slider for the lifetime of the widget. Inputs and timer firings
/// are processed one at a time, each to completion.
#[instrument(skip_all)]
pub async fn run<R>(
    cfg: Configuration,
    surface: R,
    mut inputs: Receiver<InputEvent>,
    cancel: CancellationToken,
) -> Result<()>
where
    R: Surface + Send + 'static,
{
    let (timer_tx, mut timer_rx) = mpsc::channel::<TimerId>(8);
    let mut slider = Slider::new(&cfg, TokioScheduler::new(timer_tx), surface);
    slider.mount();

    loop {
        select! {
            _ = cancel.cancelled() => break,

            Some(event) = inputs.recv() => {
                if slider.handle(event) == InputResponse::SuppressDefault {
                    debug!("drag past suppress threshold");
                }
            }

            Some(id) = timer_rx.recv() => slider.on_timer(id),
        }
    }

    slider.shutdown();
    info!(slide = slider.active_index() + 1, "slider stopped");
    Ok(())
}
