use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result, ensure};
use serde::Deserialize;

use crate::images::{ImageRef, ImageSet};

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct Configuration {
    /// Images shown when no source has supplied any (or supplied none).
    pub default_images: Vec<String>,
    /// Automatic advance settings.
    pub autoplay: AutoplayOptions,
    /// Zoom limits and steps.
    pub zoom: ZoomOptions,
    /// Drag/swipe recognition thresholds.
    pub gesture: GestureOptions,
    /// Configurable keyboard shortcuts.
    pub keys: KeyBindings,
    /// Optional directory that replaces the image set once scanned.
    pub source: Option<SourceOptions>,
}

impl Configuration {
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self> {
        let s = std::fs::read_to_string(path)?;
        Ok(serde_yaml::from_str(&s)?)
    }

    /// Validate runtime invariants that cannot be expressed via serde defaults alone.
    pub fn validated(self) -> Result<Self> {
        ensure!(
            !self.default_images.is_empty(),
            "default-images must list at least one image"
        );
        self.autoplay.validate()?;
        self.zoom.validate().context("invalid zoom configuration")?;
        self.gesture.validate()?;
        self.keys.validate()?;
        Ok(self)
    }

    pub fn default_image_set(&self) -> ImageSet {
        let images: Vec<ImageRef> = self
            .default_images
            .iter()
            .map(|s| ImageRef::uri(s.as_str()))
            .collect();
        ImageSet::new(images).unwrap_or_else(|_| builtin_image_set())
    }
}

impl Default for Configuration {
    fn default() -> Self {
        Self {
            default_images: builtin_images(),
            autoplay: AutoplayOptions::default(),
            zoom: ZoomOptions::default(),
            gesture: GestureOptions::default(),
            keys: KeyBindings::default(),
            source: None,
        }
    }
}

fn builtin_images() -> Vec<String> {
    (1..=5).map(|i| format!("images/image{i}.jpg")).collect()
}

fn builtin_image_set() -> ImageSet {
    let images = builtin_images().into_iter().map(ImageRef::Uri).collect();
    ImageSet::new(images).expect("builtin image list is non-empty")
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct AutoplayOptions {
    /// Whether autoplay starts enabled when the widget mounts.
    pub enabled: bool,
    /// Delay between automatic advances.
    #[serde(with = "humantime_serde")]
    pub interval: Duration,
}

impl AutoplayOptions {
    const fn default_interval() -> Duration {
        Duration::from_secs(3)
    }

    fn validate(&self) -> Result<()> {
        ensure!(
            !self.interval.is_zero(),
            "autoplay.interval must be positive"
        );
        Ok(())
    }
}

impl Default for AutoplayOptions {
    fn default() -> Self {
        Self {
            enabled: true,
            interval: Self::default_interval(),
        }
    }
}

#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct ZoomOptions {
    pub min: f32,
    pub max: f32,
    /// Increment used by the zoom-in/zoom-out controls.
    pub step: f32,
    /// Level a click on an unzoomed image jumps to.
    pub click_level: f32,
}

impl ZoomOptions {
    fn validate(&self) -> Result<()> {
        ensure!(self.min > 0.0, "zoom.min must be positive");
        ensure!(self.max >= self.min, "zoom.max must be >= zoom.min");
        ensure!(self.step > 0.0, "zoom.step must be positive");
        ensure!(
            self.click_level > self.min && self.click_level <= self.max,
            "zoom.click-level must lie in (min, max]"
        );
        Ok(())
    }
}

impl Default for ZoomOptions {
    fn default() -> Self {
        Self {
            min: 1.0,
            max: 3.0,
            step: 0.5,
            click_level: 2.0,
        }
    }
}

#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct GestureOptions {
    /// Minimum horizontal travel for a drag to count as a swipe.
    pub swipe_threshold: f32,
    /// Travel beyond which the host should stop scrolling/selecting.
    pub suppress_threshold: f32,
}

impl GestureOptions {
    fn validate(&self) -> Result<()> {
        ensure!(
            self.swipe_threshold > 0.0,
            "gesture.swipe-threshold must be positive"
        );
        ensure!(
            self.suppress_threshold >= 0.0,
            "gesture.suppress-threshold must not be negative"
        );
        Ok(())
    }
}

impl Default for GestureOptions {
    fn default() -> Self {
        Self {
            swipe_threshold: 50.0,
            suppress_threshold: 10.0,
        }
    }
}

#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct KeyBindings {
    pub zoom_in: char,
    pub zoom_out: char,
    pub fullscreen: char,
}

impl KeyBindings {
    fn validate(&self) -> Result<()> {
        ensure!(
            self.zoom_in != self.zoom_out
                && self.zoom_in != self.fullscreen
                && self.zoom_out != self.fullscreen,
            "keys must be distinct"
        );
        Ok(())
    }
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self {
            zoom_in: '+',
            zoom_out: '-',
            fullscreen: 'f',
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SourceOrder {
    #[default]
    Name,
    Shuffle,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct SourceOptions {
    /// Directory scanned recursively for images.
    pub path: PathBuf,
    #[serde(default)]
    pub order: SourceOrder,
    /// Read files into memory and hand them over as data URIs.
    #[serde(default)]
    pub embed: bool,
    /// Rescan whenever the directory changes.
    #[serde(default)]
    pub watch: bool,
    /// Quiet period a burst of filesystem events must end with before a rescan.
    #[serde(with = "humantime_serde", default = "SourceOptions::default_settle")]
    pub settle: Duration,
}

impl SourceOptions {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            order: SourceOrder::default(),
            embed: false,
            watch: false,
            settle: Self::default_settle(),
        }
    }

    const fn default_settle() -> Duration {
        Duration::from_millis(250)
    }
}
