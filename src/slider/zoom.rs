use crate::config::ZoomOptions;

/// Zoom level of the active slide.
#[derive(Debug, Clone, Copy)]
pub struct Zoom {
    level: f32,
    opts: ZoomOptions,
}

impl Zoom {
    pub fn new(opts: ZoomOptions) -> Self {
        Self {
            level: opts.min,
            opts,
        }
    }

    pub fn level(&self) -> f32 {
        self.level
    }

    pub fn is_zoomed(&self) -> bool {
        self.level > self.opts.min
    }

    /// Returns whether the level changed.
    pub fn zoom_in(&mut self) -> bool {
        self.set((self.level + self.opts.step).min(self.opts.max))
    }

    pub fn zoom_out(&mut self) -> bool {
        self.set((self.level - self.opts.step).max(self.opts.min))
    }

    pub fn reset(&mut self) {
        self.level = self.opts.min;
    }

    /// Click on the image: unzoom if zoomed, otherwise jump straight to the
    /// click level (not one step).
    pub fn click(&mut self) -> ZoomClick {
        if self.is_zoomed() {
            self.reset();
            ZoomClick::Reset
        } else {
            self.level = self.opts.click_level;
            ZoomClick::Zoomed
        }
    }

    fn set(&mut self, level: f32) -> bool {
        if (level - self.level).abs() < f32::EPSILON {
            return false;
        }
        self.level = level;
        true
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ZoomClick {
    Reset,
    Zoomed,
}
