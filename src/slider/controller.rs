use tracing::{debug, info, warn};

use super::Slider;
use crate::images::{ImageRef, ImageSet};
use crate::scheduler::{Scheduler, TimerId};
use crate::surface::Surface;

impl<S: Scheduler, R: Surface> Slider<S, R> {
    /// First render, then autoplay if configured on.
    pub fn mount(&mut self) {
        self.refresh();
        let enabled = self.autoplay.is_enabled();
        if enabled {
            self.autoplay.restart(&mut self.scheduler);
        }
        self.surface.autoplay_changed(enabled);
        info!(
            images = self.images.len(),
            autoplay = enabled,
            interval = %humantime::format_duration(self.autoplay.period()),
            "slider mounted"
        );
    }

    /// Replaces the whole image set and returns to the first slide. An empty
    /// set falls back to the defaults.
    pub fn set_images(&mut self, images: Vec<ImageRef>) {
        self.images = match ImageSet::new(images) {
            Ok(set) => set,
            Err(err) => {
                warn!(%err, "falling back to default images");
                self.defaults.clone()
            }
        };
        self.index = 0;
        info!(count = self.images.len(), "image set replaced");
        self.refresh();
    }

    pub fn restore_defaults(&mut self) {
        self.set_images(self.defaults.as_slice().to_vec());
    }

    pub fn next(&mut self) {
        self.advance();
        self.restart_autoplay();
    }

    pub fn prev(&mut self) {
        let n = self.images.len();
        self.index = (self.index + n - 1) % n;
        self.refresh();
        self.restart_autoplay();
    }

    /// Jumps to slide `index`. Out-of-range indices are clamped to the last
    /// slide.
    pub fn go_to(&mut self, index: usize) {
        let last = self.images.len() - 1;
        if index > last {
            warn!(index, last, "slide index out of range; clamping");
        }
        self.index = index.min(last);
        self.refresh();
        self.restart_autoplay();
    }

    pub fn toggle_autoplay(&mut self) {
        if self.autoplay.is_enabled() {
            self.stop_autoplay();
        } else {
            self.start_autoplay();
        }
    }

    pub fn start_autoplay(&mut self) {
        if self.autoplay.enable(&mut self.scheduler) {
            debug!("autoplay enabled");
            self.surface.autoplay_changed(true);
        }
    }

    pub fn stop_autoplay(&mut self) {
        if self.autoplay.disable(&mut self.scheduler) {
            debug!("autoplay disabled");
            self.surface.autoplay_changed(false);
        }
    }

    /// Delivers a timer firing. Firings from timers that have since been
    /// cancelled are dropped.
    pub fn on_timer(&mut self, id: TimerId) {
        if !self.autoplay.is_current(id) {
            debug!(timer = id.raw(), "ignoring stale timer");
            return;
        }
        self.advance();
    }

    /// Cancels the live timer, if any. The enabled flag is left as is.
    pub fn shutdown(&mut self) {
        self.autoplay.shutdown(&mut self.scheduler);
    }

    fn advance(&mut self) {
        self.index = (self.index + 1) % self.images.len();
        self.refresh();
    }

    fn restart_autoplay(&mut self) {
        if self.autoplay.is_enabled() {
            self.autoplay.restart(&mut self.scheduler);
        }
    }

    /// Every slide change redraws and drops any zoom.
    fn refresh(&mut self) {
        debug!(slide = self.index + 1, total = self.images.len(), "slide");
        self.surface.render(&self.images, self.index);
        self.zoom.reset();
        self.surface.reset_zoom();
    }
}
