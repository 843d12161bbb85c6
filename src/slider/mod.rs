//! The carousel widget.
//!
//! A [`Slider`] is one widget instance. It owns the image set, active index
//! and autoplay timer (navigation lives in `controller`) together with the
//! zoom, drag and fullscreen state (`interaction`). Timers and drawing are
//! injected as a [`Scheduler`] and a [`Surface`].

mod autoplay;
mod controller;
mod fullscreen;
mod gesture;
mod interaction;
mod zoom;

pub use autoplay::{Autoplay, Hold};
pub use fullscreen::{Fullscreen, Overlay};
pub use gesture::{DragState, DragTracker, Swipe};
pub use zoom::{Zoom, ZoomClick};

use crate::config::{Configuration, KeyBindings};
use crate::images::{ImageRef, ImageSet};
use crate::scheduler::Scheduler;
use crate::surface::Surface;

#[derive(Debug)]
pub struct Slider<S, R> {
    images: ImageSet,
    defaults: ImageSet,
    index: usize,
    autoplay: Autoplay,
    zoom: Zoom,
    drag: DragTracker,
    fullscreen: Fullscreen,
    keys: KeyBindings,
    scheduler: S,
    surface: R,
}

impl<S: Scheduler, R: Surface> Slider<S, R> {
    /// Builds a slider showing the configured default images. Nothing is
    /// rendered and no timer runs until [`Slider::mount`].
    pub fn new(cfg: &Configuration, scheduler: S, surface: R) -> Self {
        let defaults = cfg.default_image_set();
        Self {
            images: defaults.clone(),
            defaults,
            index: 0,
            autoplay: Autoplay::new(cfg.autoplay.enabled, cfg.autoplay.interval),
            zoom: Zoom::new(cfg.zoom),
            drag: DragTracker::new(cfg.gesture),
            fullscreen: Fullscreen::default(),
            keys: cfg.keys,
            scheduler,
            surface,
        }
    }
}

impl<S, R> Slider<S, R> {
    pub fn images(&self) -> &ImageSet {
        &self.images
    }

    pub fn default_images(&self) -> &ImageSet {
        &self.defaults
    }

    pub fn active_index(&self) -> usize {
        self.index
    }

    pub fn active_image(&self) -> &ImageRef {
        &self.images[self.index]
    }

    pub fn autoplay(&self) -> &Autoplay {
        &self.autoplay
    }

    pub fn zoom_level(&self) -> f32 {
        self.zoom.level()
    }

    pub fn drag_state(&self) -> DragState {
        self.drag.state()
    }

    pub fn is_fullscreen(&self) -> bool {
        self.fullscreen.is_open()
    }

    pub fn overlay(&self) -> Option<&Overlay> {
        self.fullscreen.overlay()
    }

    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }

    pub fn scheduler_mut(&mut self) -> &mut S {
        &mut self.scheduler
    }

    pub fn surface(&self) -> &R {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut R {
        &mut self.surface
    }
}
