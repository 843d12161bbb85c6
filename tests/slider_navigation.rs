mod common;

use std::time::Duration;

use common::{Call, advance, paused_slider, slider, uris};
use image_carousel::events::InputEvent;

const TICK: Duration = Duration::from_secs(3);

#[test]
fn mount_renders_first_slide_and_starts_autoplay() {
    let s = slider();
    assert_eq!(
        s.surface().calls,
        vec![
            Call::Render {
                active: 0,
                total: 5
            },
            Call::ResetZoom,
            Call::Autoplay(true),
        ]
    );
    assert_eq!(s.scheduler().live(), 1);
    assert!(s.autoplay().is_enabled());
}

#[test]
fn next_and_prev_wrap_around() {
    let mut s = paused_slider();
    s.prev();
    assert_eq!(s.active_index(), 4);
    s.next();
    assert_eq!(s.active_index(), 0);
    for _ in 0..4 {
        s.next();
    }
    assert_eq!(s.active_index(), 4);
    s.next();
    assert_eq!(s.active_index(), 0);
}

#[test]
fn index_stays_in_range_for_any_sequence() {
    let mut s = paused_slider();
    s.set_images(uris(&["a", "b", "c"]));
    // Deterministic mixed walk of 200 steps.
    for step in 0u32..200 {
        if (step * 7 + 3) % 5 < 2 {
            s.prev();
        } else {
            s.next();
        }
        assert!(s.active_index() < 3, "index escaped at step {step}");
    }
}

#[test]
fn single_image_set_stays_on_zero() {
    let mut s = paused_slider();
    s.set_images(uris(&["only.jpg"]));
    s.next();
    s.prev();
    assert_eq!(s.active_index(), 0);
}

#[test]
fn empty_image_set_falls_back_to_defaults() {
    let mut s = paused_slider();
    s.set_images(uris(&["a", "b"]));
    s.next();
    s.set_images(Vec::new());
    assert_eq!(s.images(), s.default_images());
    assert_eq!(s.active_index(), 0);
}

#[test]
fn replacing_images_resets_index_and_rerenders() {
    let mut s = paused_slider();
    s.go_to(3);
    s.surface_mut().clear();
    s.handle(InputEvent::ImagesSelected(uris(&["x.jpg", "y.jpg"])));
    assert_eq!(s.active_index(), 0);
    assert_eq!(s.images().len(), 2);
    assert_eq!(
        s.surface().calls.first(),
        Some(&Call::Render {
            active: 0,
            total: 2
        })
    );
}

#[test]
fn restore_defaults_event() {
    let mut s = paused_slider();
    s.set_images(uris(&["x.jpg"]));
    s.handle(InputEvent::RestoreDefaults);
    assert_eq!(s.images().len(), 5);
}

#[test]
fn go_to_clamps_out_of_range() {
    let mut s = paused_slider();
    s.go_to(2);
    assert_eq!(s.active_index(), 2);
    s.go_to(99);
    assert_eq!(s.active_index(), 4);
}

#[test]
fn start_twice_leaves_one_timer() {
    let mut s = paused_slider();
    s.start_autoplay();
    s.start_autoplay();
    assert_eq!(s.scheduler().live(), 1);
    advance(&mut s, TICK);
    assert_eq!(s.active_index(), 1, "exactly one tick per period");
}

#[test]
fn stop_when_stopped_is_noop() {
    let mut s = paused_slider();
    s.surface_mut().clear();
    s.stop_autoplay();
    s.stop_autoplay();
    assert!(s.surface().calls.is_empty());
    assert_eq!(s.scheduler().live(), 0);
}

#[test]
fn autoplay_advances_each_period() {
    let mut s = slider();
    advance(&mut s, TICK);
    assert_eq!(s.active_index(), 1);
    advance(&mut s, TICK * 2);
    assert_eq!(s.active_index(), 3);
    advance(&mut s, TICK * 2);
    assert_eq!(s.active_index(), 0);
}

#[test]
fn manual_navigation_restarts_the_period() {
    let mut s = slider();
    advance(&mut s, Duration::from_secs(2));
    s.next();
    assert_eq!(s.active_index(), 1);
    advance(&mut s, Duration::from_secs(2));
    assert_eq!(s.active_index(), 1, "timer was restarted by next()");
    advance(&mut s, Duration::from_secs(1));
    assert_eq!(s.active_index(), 2);
    assert_eq!(s.scheduler().live(), 1);
}

#[test]
fn paused_navigation_schedules_nothing() {
    let mut s = paused_slider();
    s.next();
    s.go_to(3);
    assert_eq!(s.scheduler().live(), 0);
}

#[test]
fn stale_timer_firing_is_ignored() {
    let mut s = slider();
    let old = s.autoplay().timer().unwrap();
    s.next();
    assert_ne!(s.autoplay().timer(), Some(old));
    s.on_timer(old);
    assert_eq!(s.active_index(), 1);
}

#[test]
fn toggle_autoplay_flips_flag_and_timer() {
    let mut s = slider();
    s.surface_mut().clear();
    s.handle(InputEvent::ToggleAutoplay);
    assert!(!s.autoplay().is_enabled());
    assert_eq!(s.scheduler().live(), 0);
    advance(&mut s, TICK * 3);
    assert_eq!(s.active_index(), 0);

    s.toggle_autoplay();
    assert!(s.autoplay().is_enabled());
    assert_eq!(s.scheduler().live(), 1);
    assert_eq!(
        s.surface().calls,
        vec![Call::Autoplay(false), Call::Autoplay(true)]
    );
}

#[test]
fn navigation_resets_zoom() {
    let mut s = paused_slider();
    s.zoom_in();
    s.zoom_in();
    assert!((s.zoom_level() - 2.0).abs() < f32::EPSILON);
    s.next();
    assert!((s.zoom_level() - 1.0).abs() < f32::EPSILON);
    assert_eq!(s.surface().calls.last(), Some(&Call::ResetZoom));
}

#[test]
fn autoplay_tick_resets_zoom() {
    let mut s = slider();
    s.click_image();
    advance(&mut s, TICK);
    assert!((s.zoom_level() - 1.0).abs() < f32::EPSILON);
}

#[test]
fn shutdown_cancels_timer_but_keeps_flag() {
    let mut s = slider();
    s.shutdown();
    assert_eq!(s.scheduler().live(), 0);
    assert!(s.autoplay().is_enabled());
}
