//! End-to-end viewer scenarios through the public API.
//!
//! Each test drives the controller the way the page does: a preview click or
//! explicit open, then a stream of button, wheel, key and scroll events.

use property_view::controller::{Intent, PageController, Render};
use property_view::gallery::{ImageSet, preview_slice};
use property_view::replay::{parse_script, replay};
use property_view::scroll;

fn images(names: &[&str]) -> ImageSet {
    names.iter().copied().collect()
}

fn numbered(n: usize) -> ImageSet {
    (0..n).map(|i| format!("photo-{i}.jpg")).collect()
}

#[test]
fn open_then_next_wraps_to_first() {
    let mut c = PageController::new(images(&["a", "b", "c"]));
    c.apply(Intent::Open(1));
    assert_eq!(c.snapshot().current_index, 1);
    c.apply(Intent::Next);
    assert_eq!(c.snapshot().current_index, 2);
    c.apply(Intent::Next);
    assert_eq!(c.snapshot().current_index, 0);
    assert_eq!(c.frame().unwrap().image, "a");
}

#[test]
fn three_zoom_ins_then_one_out() {
    let mut c = PageController::new(numbered(3));
    c.apply(Intent::Open(0));
    for _ in 0..3 {
        c.apply(Intent::ZoomIn);
    }
    assert_eq!(c.snapshot().scale, 1.75);
    c.apply(Intent::ZoomOut);
    assert_eq!(c.snapshot().scale, 1.5);
}

#[test]
fn wheel_clamps_at_both_ends() {
    let mut c = PageController::new(numbered(3));
    c.apply(Intent::Open(0));
    for _ in 0..10 {
        c.apply(Intent::Wheel(1.0));
    }
    assert_eq!(c.snapshot().scale, 1.0);

    for _ in 0..30 {
        c.apply(Intent::Wheel(-1.0));
        let s = c.snapshot().scale;
        assert!((1.0..=3.0).contains(&s));
    }
    assert_eq!(c.snapshot().scale, 3.0);
}

#[test]
fn empty_image_set_never_opens() {
    let mut c = PageController::new(ImageSet::default());
    assert_eq!(c.apply(Intent::Open(0)), Render::Unchanged);
    assert!(!c.snapshot().is_open);
    let slice = preview_slice(c.images());
    assert!(slice.shown.is_empty());
    assert_eq!(slice.overflow_count, 0);
}

#[test]
fn scroll_mapping_control_points() {
    assert_eq!(scroll::map(0.2).overlay_opacity, 0.6);
    assert!((scroll::map(0.6).overlay_opacity - 0.7).abs() < 1e-9);
    assert!((scroll::map(0.1).overlay_opacity - 0.55).abs() < 1e-9);
    assert_eq!(scroll::map(0.0).hue_degrees, 0.0);
    assert_eq!(scroll::map(1.0).hue_degrees, 220.0);
}

#[test]
fn eight_images_overflow_by_three() {
    let set = numbered(8);
    let slice = preview_slice(&set);
    assert_eq!(slice.shown.len(), 5);
    assert_eq!(slice.overflow_count, 3);
}

#[test]
fn browsing_keeps_zoom_until_close() {
    let mut c = PageController::new(numbered(8));
    c.apply(Intent::PreviewClick(4));
    c.apply(Intent::ZoomIn);
    c.apply(Intent::Next);
    c.apply(Intent::Next);
    let snap = c.snapshot();
    assert_eq!(snap.current_index, 6);
    assert_eq!(snap.scale, 1.25);
    assert_eq!(c.frame().unwrap().counter, "7 / 8");

    c.apply(Intent::Close);
    c.apply(Intent::PreviewClick(0));
    assert_eq!(c.snapshot().scale, 1.0);
}

#[test]
fn keyboard_session_via_script() {
    let script = "\
        click 0
        key ArrowLeft   # wraps to the last photo
        key +
        key +
        key 0           # reset
        key Escape
        key ArrowRight  # ignored, closed
    ";
    let mut c = PageController::new(numbered(8));
    let steps = replay(&mut c, &parse_script(script).unwrap());
    assert_eq!(steps.len(), 7);
    assert_eq!(steps[1].counter.as_deref(), Some("8 / 8"));
    assert_eq!(steps[3].viewer.scale, 1.5);
    assert_eq!(steps[4].viewer.scale, 1.0);
    assert!(!steps[5].viewer.is_open);
    assert!(!steps[6].changed);
}

#[test]
fn scroll_events_interleave_without_touching_viewer() {
    let mut c = PageController::new(numbered(3));
    c.apply(Intent::Open(2));
    c.apply(Intent::ZoomIn);
    let viewer = c.snapshot();
    for i in 0..=10 {
        let render = c.apply(Intent::Scroll(i as f64 / 10.0));
        assert!(matches!(render, Render::Backdrop(_)));
    }
    assert_eq!(c.snapshot(), viewer);
}
