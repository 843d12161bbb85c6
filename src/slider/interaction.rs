use tracing::{debug, trace};

use super::{Hold, Slider, Swipe, ZoomClick};
use crate::events::{CloseReason, InputEvent, InputResponse, Key};
use crate::scheduler::Scheduler;
use crate::surface::Surface;

impl<S: Scheduler, R: Surface> Slider<S, R> {
    /// Routes one input to the matching operation.
    pub fn handle(&mut self, event: InputEvent) -> InputResponse {
        trace!(?event, "input");
        match event {
            InputEvent::Prev => self.prev(),
            InputEvent::Next => self.next(),
            InputEvent::GoTo(index) => self.go_to(index),
            InputEvent::ToggleAutoplay => self.toggle_autoplay(),
            InputEvent::ZoomIn => self.zoom_in(),
            InputEvent::ZoomOut => self.zoom_out(),
            InputEvent::ResetZoom => self.reset_zoom(),
            InputEvent::ClickImage => self.click_image(),
            InputEvent::ToggleFullscreen => self.toggle_fullscreen(),
            InputEvent::CloseFullscreen(reason) => {
                self.close_fullscreen(reason);
            }
            InputEvent::DragStart { x } => self.drag_start(x),
            InputEvent::DragMove { x } => return self.drag_move(x),
            InputEvent::DragEnd => self.drag_end(),
            InputEvent::Key(key) => self.key(key),
            InputEvent::VisibilityChanged { hidden } => self.set_hidden(hidden),
            InputEvent::ImagesSelected(images) => self.set_images(images),
            InputEvent::RestoreDefaults => self.restore_defaults(),
        }
        InputResponse::Default
    }

    pub fn zoom_in(&mut self) {
        if self.zoom.zoom_in() {
            self.push_zoom();
        }
    }

    pub fn zoom_out(&mut self) {
        if self.zoom.zoom_out() {
            self.push_zoom();
        }
    }

    pub fn reset_zoom(&mut self) {
        self.zoom.reset();
        self.surface.reset_zoom();
    }

    /// Click on the active image toggles between unzoomed and the click level.
    pub fn click_image(&mut self) {
        match self.zoom.click() {
            ZoomClick::Reset => self.surface.reset_zoom(),
            ZoomClick::Zoomed => self.push_zoom(),
        }
    }

    pub fn drag_start(&mut self, x: f32) {
        self.drag.start(x);
    }

    pub fn drag_move(&mut self, x: f32) -> InputResponse {
        if self.drag.moved(x) {
            InputResponse::SuppressDefault
        } else {
            InputResponse::Default
        }
    }

    pub fn drag_end(&mut self) {
        match self.drag.end() {
            Some(Swipe::Prev) => {
                debug!("swipe right");
                self.prev();
            }
            Some(Swipe::Next) => {
                debug!("swipe left");
                self.next();
            }
            None => {}
        }
    }

    pub fn toggle_fullscreen(&mut self) {
        if self.fullscreen.is_open() {
            self.close_fullscreen(CloseReason::Toggle);
            return;
        }
        let held = self.autoplay.is_enabled();
        let image = self.active_image().clone();
        if let Some(overlay) = self.fullscreen.open(image, held) {
            self.surface.open_overlay(&overlay.image);
        }
        if held {
            self.autoplay.hold(Hold::Fullscreen, &mut self.scheduler);
        }
        debug!(held_autoplay = held, "fullscreen opened");
    }

    /// Closes the overlay if one is open. Returns whether anything closed.
    pub fn close_fullscreen(&mut self, reason: CloseReason) -> bool {
        let Some(overlay) = self.fullscreen.close() else {
            return false;
        };
        self.surface.close_overlay();
        if overlay.held_autoplay {
            self.autoplay.release(Hold::Fullscreen, &mut self.scheduler);
        }
        debug!(?reason, "fullscreen closed");
        true
    }

    /// Page visibility. Pauses or resumes the timer without touching the
    /// autoplay flag.
    pub fn set_hidden(&mut self, hidden: bool) {
        if hidden {
            self.autoplay.hold(Hold::PageHidden, &mut self.scheduler);
        } else {
            self.autoplay.release(Hold::PageHidden, &mut self.scheduler);
        }
    }

    pub fn key(&mut self, key: Key) {
        match key {
            Key::ArrowLeft => self.prev(),
            Key::ArrowRight => self.next(),
            Key::Escape => {
                self.close_fullscreen(CloseReason::Escape);
            }
            Key::Char(c) if c == self.keys.zoom_in => self.zoom_in(),
            Key::Char(c) if c == self.keys.zoom_out => self.zoom_out(),
            Key::Char(c) if c == self.keys.fullscreen => self.toggle_fullscreen(),
            Key::Char(c) => trace!(key = %c, "unbound key"),
        }
    }

    fn push_zoom(&mut self) {
        let (level, zoomed) = (self.zoom.level(), self.zoom.is_zoomed());
        self.surface.apply_zoom(self.index, level, zoomed);
    }
}
