use image_carousel::config::{Configuration, SourceOrder};
use std::path::PathBuf;
use std::time::Duration;

#[test]
fn empty_yaml_uses_defaults() {
    let cfg: Configuration = serde_yaml::from_str("{}").unwrap();
    let cfg = cfg.validated().unwrap();
    assert_eq!(cfg.default_images.len(), 5);
    assert_eq!(cfg.default_images[0], "images/image1.jpg");
    assert!(cfg.autoplay.enabled);
    assert_eq!(cfg.autoplay.interval, Duration::from_secs(3));
    assert!((cfg.zoom.min - 1.0).abs() < f32::EPSILON);
    assert!((cfg.zoom.max - 3.0).abs() < f32::EPSILON);
    assert!((cfg.zoom.step - 0.5).abs() < f32::EPSILON);
    assert!((cfg.zoom.click_level - 2.0).abs() < f32::EPSILON);
    assert!((cfg.gesture.swipe_threshold - 50.0).abs() < f32::EPSILON);
    assert!((cfg.gesture.suppress_threshold - 10.0).abs() < f32::EPSILON);
    assert_eq!(cfg.keys.zoom_in, '+');
    assert_eq!(cfg.keys.zoom_out, '-');
    assert_eq!(cfg.keys.fullscreen, 'f');
    assert!(cfg.source.is_none());
}

#[test]
fn parse_kebab_case_config() {
    let yaml = r#"
default-images: ["a.jpg", "b.jpg"]
autoplay:
  enabled: false
  interval: 1500ms
zoom:
  step: 0.25
  click-level: 2.5
gesture:
  swipe-threshold: 80
keys:
  fullscreen: "F"
source:
  path: "/photos"
  order: shuffle
  embed: true
  settle: 1s
"#;
    let cfg: Configuration = serde_yaml::from_str(yaml).unwrap();
    let cfg = cfg.validated().unwrap();
    assert_eq!(cfg.default_images, vec!["a.jpg", "b.jpg"]);
    assert!(!cfg.autoplay.enabled);
    assert_eq!(cfg.autoplay.interval, Duration::from_millis(1500));
    assert!((cfg.zoom.step - 0.25).abs() < f32::EPSILON);
    assert!((cfg.zoom.click_level - 2.5).abs() < f32::EPSILON);
    assert!((cfg.zoom.max - 3.0).abs() < f32::EPSILON);
    assert!((cfg.gesture.swipe_threshold - 80.0).abs() < f32::EPSILON);
    assert_eq!(cfg.keys.fullscreen, 'F');
    assert_eq!(cfg.keys.zoom_in, '+');

    let source = cfg.source.unwrap();
    assert_eq!(source.path, PathBuf::from("/photos"));
    assert_eq!(source.order, SourceOrder::Shuffle);
    assert!(source.embed);
    assert!(!source.watch);
    assert_eq!(source.settle, Duration::from_secs(1));
}

#[test]
fn default_image_set_matches_config() {
    let yaml = r#"
default-images: ["one.png"]
"#;
    let cfg: Configuration = serde_yaml::from_str(yaml).unwrap();
    let set = cfg.default_image_set();
    assert_eq!(set.len(), 1);
    assert_eq!(set[0].to_uri(), "one.png");
}

#[test]
fn reject_empty_default_images() {
    let cfg: Configuration = serde_yaml::from_str("default-images: []").unwrap();
    let err = cfg.validated().unwrap_err();
    assert!(err.to_string().contains("default-images"));
}

#[test]
fn reject_zero_interval() {
    let yaml = r#"
autoplay:
  interval: 0s
"#;
    let cfg: Configuration = serde_yaml::from_str(yaml).unwrap();
    assert!(cfg.validated().is_err());
}

#[test]
fn reject_click_level_outside_range() {
    let yaml = r#"
zoom:
  click-level: 4.0
"#;
    let cfg: Configuration = serde_yaml::from_str(yaml).unwrap();
    assert!(cfg.validated().is_err());
}

#[test]
fn reject_duplicate_keys() {
    let yaml = r#"
keys:
  zoom-in: "f"
"#;
    let cfg: Configuration = serde_yaml::from_str(yaml).unwrap();
    assert!(cfg.validated().is_err());
}

#[test]
fn source_requires_path() {
    let yaml = r#"
source:
  embed: true
"#;
    assert!(serde_yaml::from_str::<Configuration>(yaml).is_err());
}

#[test]
fn load_from_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("carousel.yaml");
    std::fs::write(&path, "autoplay:\n  interval: 5s\n").unwrap();
    let cfg = Configuration::from_yaml_file(&path).unwrap();
    assert_eq!(cfg.autoplay.interval, Duration::from_secs(5));
}
