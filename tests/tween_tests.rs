// Host-side tests for the tween timeline and easing curves.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod tween {
    include!("../src/core/tween.rs");
}

use tween::*;

fn approx(a: f32, b: f32) -> bool {
    (a - b).abs() < 1e-5
}

#[test]
fn easing_curves_hit_endpoints() {
    for ease in [Ease::Linear, Ease::Power1Out, Ease::Power2Out] {
        assert!(approx(ease.apply(0.0), 0.0), "{:?} at 0", ease);
        assert!(approx(ease.apply(1.0), 1.0), "{:?} at 1", ease);
    }
}

#[test]
fn easing_clamps_out_of_range_progress() {
    assert!(approx(Ease::Power1Out.apply(-0.5), 0.0));
    assert!(approx(Ease::Power2Out.apply(1.7), 1.0));
}

#[test]
fn easing_curves_are_monotonic() {
    for ease in [Ease::Linear, Ease::Power1Out, Ease::Power2Out] {
        let mut prev = ease.apply(0.0);
        for i in 1..=100 {
            let v = ease.apply(i as f32 / 100.0);
            assert!(v >= prev, "{:?} decreased at step {}", ease, i);
            prev = v;
        }
    }
}

#[test]
fn ease_out_curves_lead_linear() {
    // Ease-out curves cover more ground early on
    assert!(approx(Ease::Power1Out.apply(0.5), 0.75));
    assert!(approx(Ease::Power2Out.apply(0.5), 0.875));
    assert!(Ease::Power2Out.apply(0.3) > Ease::Power1Out.apply(0.3));
    assert!(Ease::Power1Out.apply(0.3) > Ease::Linear.apply(0.3));
}

#[test]
fn tween_progress_is_none_before_offset() {
    let t = Tween::new(0.45, 0.4, Ease::Linear).with(Property::Opacity, 1.0, 0.0);
    assert_eq!(t.progress(0.2), None);
    assert!(approx(t.progress(0.65).unwrap(), 0.5));
    assert!(approx(t.progress(2.0).unwrap(), 1.0));
}

#[test]
fn zero_duration_tween_jumps_to_end() {
    let t = Tween::new(0.1, 0.0, Ease::Linear);
    assert_eq!(t.progress(0.05), None);
    assert!(approx(t.progress(0.1).unwrap(), 1.0));
}

#[test]
fn timeline_duration_is_latest_end() {
    let tl = Timeline::new()
        .push(Tween::new(0.0, 0.4, Ease::Linear))
        .push(Tween::new(0.45, 0.4, Ease::Linear));
    assert!(approx(tl.duration(), 0.85));
    assert!(!tl.is_complete(0.5));
    assert!(tl.is_complete(0.9));
    assert_eq!(tl.tweens().len(), 2);
}

#[test]
fn empty_timeline_is_complete_immediately() {
    let tl = Timeline::new();
    assert!(tl.is_complete(0.0));
    let mut style = ElementStyle::default();
    tl.sample(1.0, &mut style);
    assert_eq!(style, ElementStyle::default());
}

#[test]
fn later_tween_overrides_shared_property() {
    let tl = Timeline::new()
        .push(Tween::new(0.0, 1.0, Ease::Linear).with(Property::Scale, 0.0, 1.0))
        .push(Tween::new(0.5, 1.0, Ease::Linear).with(Property::Scale, 1.0, 0.0));

    let mut style = ElementStyle::default();
    tl.sample(0.25, &mut style);
    assert!(approx(style.scale, 0.25));

    // Second tween has started and wins over the first
    tl.sample(1.0, &mut style);
    assert!(approx(style.scale, 0.5));
}

#[test]
fn sample_leaves_unanimated_properties_alone() {
    let tl = Timeline::new().push(Tween::new(0.0, 1.0, Ease::Linear).with(Property::X, 0.0, 10.0));
    let mut style = ElementStyle {
        opacity: 0.3,
        scale: 2.0,
        x: -1.0,
        y: 7.0,
        z_index: 4,
    };
    tl.sample(0.5, &mut style);
    assert!(approx(style.x, 5.0));
    assert!(approx(style.opacity, 0.3));
    assert!(approx(style.scale, 2.0));
    assert!(approx(style.y, 7.0));
    assert_eq!(style.z_index, 4);
}

#[test]
fn element_style_set_covers_every_property() {
    let mut style = ElementStyle::default();
    style.set(Property::Opacity, 0.5);
    style.set(Property::Scale, 1.5);
    style.set(Property::X, 2.5);
    style.set(Property::Y, 3.5);
    assert!(approx(style.opacity, 0.5));
    assert!(approx(style.scale, 1.5));
    assert!(approx(style.x, 2.5));
    assert!(approx(style.y, 3.5));
    assert_eq!(style.z_index, 0);
}
