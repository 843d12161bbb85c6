use crate::images::ImageRef;

/// A key press as seen by the carousel. Arrow keys and Escape are fixed;
/// everything else arrives as a character and is matched against the
/// configured bindings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    ArrowLeft,
    ArrowRight,
    Escape,
    Char(char),
}

/// How a fullscreen overlay was dismissed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CloseReason {
    Toggle,
    CloseButton,
    Backdrop,
    Escape,
}

/// Every input the widget reacts to.
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    Prev,
    Next,
    GoTo(usize),
    ToggleAutoplay,
    ZoomIn,
    ZoomOut,
    ResetZoom,
    /// Click/tap on the active image.
    ClickImage,
    ToggleFullscreen,
    CloseFullscreen(CloseReason),
    DragStart { x: f32 },
    DragMove { x: f32 },
    DragEnd,
    Key(Key),
    VisibilityChanged { hidden: bool },
    /// A source finished loading a replacement set.
    ImagesSelected(Vec<ImageRef>),
    /// A source produced nothing usable.
    RestoreDefaults,
}

/// Advisory returned to the host after an input has been handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputResponse {
    #[default]
    Default,
    /// The host should suppress its default scroll/selection behaviour.
    SuppressDefault,
}
