use crate::images::ImageRef;

/// The single fullscreen overlay, if one is open.
#[derive(Debug, Clone, PartialEq)]
pub struct Overlay {
    pub image: ImageRef,
    /// Autoplay was running when the overlay opened and must resume on close.
    pub held_autoplay: bool,
}

#[derive(Debug, Default)]
pub struct Fullscreen {
    overlay: Option<Overlay>,
}

impl Fullscreen {
    pub fn is_open(&self) -> bool {
        self.overlay.is_some()
    }

    pub fn overlay(&self) -> Option<&Overlay> {
        self.overlay.as_ref()
    }

    /// Opens an overlay unless one already exists. Returns the new overlay.
    pub fn open(&mut self, image: ImageRef, held_autoplay: bool) -> Option<&Overlay> {
        if self.overlay.is_some() {
            return None;
        }
        self.overlay = Some(Overlay {
            image,
            held_autoplay,
        });
        self.overlay.as_ref()
    }

    pub fn close(&mut self) -> Option<Overlay> {
        self.overlay.take()
    }
}
