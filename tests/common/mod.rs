#![allow(dead_code)]

use image_carousel::config::Configuration;
use image_carousel::images::{ImageRef, ImageSet};
use image_carousel::scheduler::ManualScheduler;
use image_carousel::slider::Slider;
use image_carousel::surface::Surface;

#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    Render { active: usize, total: usize },
    Zoom { active: usize, level: f32, zoomed: bool },
    ResetZoom,
    OpenOverlay(ImageRef),
    CloseOverlay,
    Autoplay(bool),
}

/// Surface that remembers every call in order.
#[derive(Debug, Default)]
pub struct Recorder {
    pub calls: Vec<Call>,
}

impl Recorder {
    pub fn renders(&self) -> Vec<usize> {
        self.calls
            .iter()
            .filter_map(|c| match c {
                Call::Render { active, .. } => Some(*active),
                _ => None,
            })
            .collect()
    }

    pub fn clear(&mut self) {
        self.calls.clear();
    }
}

impl Surface for Recorder {
    fn render(&mut self, images: &ImageSet, active: usize) {
        self.calls.push(Call::Render {
            active,
            total: images.len(),
        });
    }

    fn apply_zoom(&mut self, active: usize, level: f32, zoomed: bool) {
        self.calls.push(Call::Zoom {
            active,
            level,
            zoomed,
        });
    }

    fn reset_zoom(&mut self) {
        self.calls.push(Call::ResetZoom);
    }

    fn open_overlay(&mut self, image: &ImageRef) {
        self.calls.push(Call::OpenOverlay(image.clone()));
    }

    fn close_overlay(&mut self) {
        self.calls.push(Call::CloseOverlay);
    }

    fn autoplay_changed(&mut self, enabled: bool) {
        self.calls.push(Call::Autoplay(enabled));
    }
}

pub type TestSlider = Slider<ManualScheduler, Recorder>;

pub fn slider_with(cfg: &Configuration) -> TestSlider {
    let mut slider = Slider::new(cfg, ManualScheduler::new(), Recorder::default());
    slider.mount();
    slider
}

/// Mounted slider with autoplay on and the default five images.
pub fn slider() -> TestSlider {
    slider_with(&Configuration::default())
}

/// Mounted slider with autoplay off.
pub fn paused_slider() -> TestSlider {
    let mut cfg = Configuration::default();
    cfg.autoplay.enabled = false;
    slider_with(&cfg)
}

/// Advances simulated time and feeds every firing back into the slider.
pub fn advance(slider: &mut TestSlider, by: std::time::Duration) {
    let fired = slider.scheduler_mut().advance(by);
    for id in fired {
        slider.on_timer(id);
    }
}

pub fn uris(names: &[&str]) -> Vec<ImageRef> {
    names.iter().map(|n| ImageRef::from(*n)).collect()
}
