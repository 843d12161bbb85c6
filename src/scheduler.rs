//! Timers behind autoplay.
//!
//! The slider never sleeps itself. It asks a [`Scheduler`] for a repeating
//! timer and is told about each firing through [`crate::slider::Slider::on_timer`]
//! with the timer's id. Cancelling is always done before rescheduling, so at
//! most one id is live per slider.

use std::collections::BTreeMap;
use std::time::Duration;

use tokio::sync::mpsc;
use tokio::time::{Instant, interval_at};
use tokio_util::sync::CancellationToken;
use tracing::{debug, trace};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimerId(u64);

impl TimerId {
    pub const fn raw(self) -> u64 {
        self.0
    }
}

pub trait Scheduler {
    /// Arrange for `id` to fire every `period` until cancelled.
    fn schedule(&mut self, period: Duration) -> TimerId;
    /// Stop a timer. Unknown or already cancelled ids are ignored.
    fn cancel(&mut self, id: TimerId);
}

#[derive(Debug, Clone, Copy)]
struct ManualTimer {
    period: Duration,
    due: Duration,
}

/// Simulated-time scheduler. Time only moves when [`ManualScheduler::advance`]
/// is called, which makes autoplay deterministic in tests.
#[derive(Debug, Default)]
pub struct ManualScheduler {
    now: Duration,
    next_id: u64,
    timers: BTreeMap<TimerId, ManualTimer>,
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn now(&self) -> Duration {
        self.now
    }

    pub fn live(&self) -> usize {
        self.timers.len()
    }

    pub fn is_live(&self, id: TimerId) -> bool {
        self.timers.contains_key(&id)
    }

    /// Moves the clock forward and returns every firing in time order.
    pub fn advance(&mut self, by: Duration) -> Vec<TimerId> {
        let target = self.now + by;
        let mut fired = Vec::new();
        loop {
            let next = self
                .timers
                .iter()
                .filter(|(_, t)| t.due <= target)
                .min_by_key(|(id, t)| (t.due, **id))
                .map(|(id, t)| (*id, t.due));
            let Some((id, due)) = next else { break };
            self.now = due;
            if let Some(timer) = self.timers.get_mut(&id) {
                timer.due += timer.period;
            }
            fired.push(id);
        }
        self.now = target;
        fired
    }
}

impl Scheduler for ManualScheduler {
    fn schedule(&mut self, period: Duration) -> TimerId {
        self.next_id += 1;
        let id = TimerId(self.next_id);
        // A zero period would fire forever inside a single advance.
        let period = period.max(Duration::from_millis(1));
        self.timers.insert(
            id,
            ManualTimer {
                period,
                due: self.now + period,
            },
        );
        id
    }

    fn cancel(&mut self, id: TimerId) {
        self.timers.remove(&id);
    }
}

/// Scheduler backed by tokio tasks. Each timer runs in its own task and
/// reports firings on `fired`; cancelling trips the task's token.
///
/// Must be used from within a tokio runtime.
#[derive(Debug)]
pub struct TokioScheduler {
    fired: mpsc::Sender<TimerId>,
    next_id: u64,
    live: BTreeMap<TimerId, CancellationToken>,
}

impl TokioScheduler {
    pub fn new(fired: mpsc::Sender<TimerId>) -> Self {
        Self {
            fired,
            next_id: 0,
            live: BTreeMap::new(),
        }
    }

    pub fn live(&self) -> usize {
        self.live.len()
    }
}

impl Scheduler for TokioScheduler {
    fn schedule(&mut self, period: Duration) -> TimerId {
        self.next_id += 1;
        let id = TimerId(self.next_id);
        let token = CancellationToken::new();
        let cancel = token.clone();
        let fired = self.fired.clone();
        let period = period.max(Duration::from_millis(1));

        tokio::spawn(async move {
            let mut ticker = interval_at(Instant::now() + period, period);
            loop {
                tokio::select! {
                    _ = cancel.cancelled() => break,
                    _ = ticker.tick() => {
                        trace!(timer = id.raw(), "timer fired");
                        if fired.send(id).await.is_err() {
                            break;
                        }
                    }
                }
            }
        });

        debug!(timer = id.raw(), period = %humantime::format_duration(period), "timer scheduled");
        self.live.insert(id, token);
        id
    }

    fn cancel(&mut self, id: TimerId) {
        if let Some(token) = self.live.remove(&id) {
            token.cancel();
            debug!(timer = id.raw(), "timer cancelled");
        }
    }
}

impl Drop for TokioScheduler {
    fn drop(&mut self) {
        for token in self.live.values() {
            token.cancel();
        }
    }
}
