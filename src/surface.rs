use tracing::info;

use crate::images::{ImageRef, ImageSet};

/// Whatever actually draws the carousel. The slider calls into it after each
/// state change and never reads anything back.
///
/// Implementations must not call back into the slider from these methods.
pub trait Surface {
    /// Show `images` with `active` as the focused slide (track, dots, counter).
    fn render(&mut self, images: &ImageSet, active: usize);

    /// Scale the active image; `zoomed` is the visual marker for level > 1.
    fn apply_zoom(&mut self, _active: usize, _level: f32, _zoomed: bool) {}

    /// Return every image to unit scale and clear zoom markers.
    fn reset_zoom(&mut self) {}

    fn open_overlay(&mut self, _image: &ImageRef) {}

    fn close_overlay(&mut self) {}

    /// Play/pause control state.
    fn autoplay_changed(&mut self, _enabled: bool) {}
}

/// Headless surface that reports every change through `tracing`.
#[derive(Debug, Default)]
pub struct LogSurface;

impl Surface for LogSurface {
    fn render(&mut self, images: &ImageSet, active: usize) {
        info!(
            slide = active + 1,
            total = images.len(),
            image = %images[active],
            "render"
        );
    }

    fn apply_zoom(&mut self, active: usize, level: f32, zoomed: bool) {
        info!(slide = active + 1, level, zoomed, "zoom");
    }

    fn reset_zoom(&mut self) {
        info!("zoom reset");
    }

    fn open_overlay(&mut self, image: &ImageRef) {
        info!(%image, "fullscreen opened");
    }

    fn close_overlay(&mut self) {
        info!("fullscreen closed");
    }

    fn autoplay_changed(&mut self, enabled: bool) {
        info!(enabled, "autoplay");
    }
}
