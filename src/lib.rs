pub mod config;
pub mod error;
pub mod events;
pub mod images;
pub mod scheduler;
pub mod slider;
pub mod surface;
pub mod tasks {
    pub mod console;
    pub mod slider;
    pub mod source;
}

pub use error::Error;
pub use slider::Slider;
