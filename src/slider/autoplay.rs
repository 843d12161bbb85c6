use std::time::Duration;

use crate::scheduler::{Scheduler, TimerId};

/// Reasons autoplay is paused without being switched off.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Hold {
    PageHidden,
    Fullscreen,
}

/// Autoplay flag plus the single timer that implements it.
///
/// The timer runs iff `enabled` and no hold is in place. Holds never touch
/// `enabled`.
#[derive(Debug)]
pub struct Autoplay {
    enabled: bool,
    period: Duration,
    timer: Option<TimerId>,
    page_hidden: bool,
    fullscreen: bool,
}

impl Autoplay {
    pub fn new(enabled: bool, period: Duration) -> Self {
        Self {
            enabled,
            period,
            timer: None,
            page_hidden: false,
            fullscreen: false,
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn period(&self) -> Duration {
        self.period
    }

    pub fn timer(&self) -> Option<TimerId> {
        self.timer
    }

    pub fn is_held(&self, hold: Hold) -> bool {
        match hold {
            Hold::PageHidden => self.page_hidden,
            Hold::Fullscreen => self.fullscreen,
        }
    }

    pub fn is_current(&self, id: TimerId) -> bool {
        self.timer == Some(id)
    }

    fn should_run(&self) -> bool {
        self.enabled && !self.page_hidden && !self.fullscreen
    }

    /// Switches autoplay on. Always cancel-then-create, so calling this twice
    /// leaves one timer. Returns whether the flag changed.
    pub fn enable<S: Scheduler>(&mut self, sched: &mut S) -> bool {
        let flipped = !self.enabled;
        self.enabled = true;
        self.restart(sched);
        flipped
    }

    /// Switches autoplay off. Returns whether the flag changed.
    pub fn disable<S: Scheduler>(&mut self, sched: &mut S) -> bool {
        let flipped = self.enabled;
        self.enabled = false;
        self.stop_timer(sched);
        flipped
    }

    /// Restarts the period after a manual navigation. No-op while held or off.
    pub fn restart<S: Scheduler>(&mut self, sched: &mut S) {
        self.stop_timer(sched);
        if self.should_run() {
            self.timer = Some(sched.schedule(self.period));
        }
    }

    pub fn hold<S: Scheduler>(&mut self, hold: Hold, sched: &mut S) {
        self.set_hold(hold, true);
        self.sync(sched);
    }

    pub fn release<S: Scheduler>(&mut self, hold: Hold, sched: &mut S) {
        self.set_hold(hold, false);
        self.sync(sched);
    }

    pub fn shutdown<S: Scheduler>(&mut self, sched: &mut S) {
        self.stop_timer(sched);
    }

    fn set_hold(&mut self, hold: Hold, on: bool) {
        match hold {
            Hold::PageHidden => self.page_hidden = on,
            Hold::Fullscreen => self.fullscreen = on,
        }
    }

    fn sync<S: Scheduler>(&mut self, sched: &mut S) {
        match (self.should_run(), self.timer) {
            (true, None) => self.timer = Some(sched.schedule(self.period)),
            (false, Some(_)) => self.stop_timer(sched),
            _ => {}
        }
    }

    fn stop_timer<S: Scheduler>(&mut self, sched: &mut S) {
        if let Some(id) = self.timer.take() {
            sched.cancel(id);
        }
    }
}
