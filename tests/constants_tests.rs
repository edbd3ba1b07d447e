// Host-side tests for trail constants and their relationships.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/core/constants.rs");
}

use constants::*;

#[test]
#[allow(clippy::assertions_on_constants)]
fn trigger_constants_are_within_reasonable_bounds() {
    assert!(SPAWN_DISTANCE_THRESHOLD > 0.0);
    // Smoothing must lag without overshooting
    assert!(SMOOTHING_FACTOR > 0.0 && SMOOTHING_FACTOR < 1.0);
    assert!(ELEMENT_OFFSET[0] >= 0.0 && ELEMENT_OFFSET[1] >= 0.0);
    assert_eq!(Z_INDEX_BASE, 1);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn phases_overlap_in_the_expected_order() {
    assert!(APPEAR_DURATION_SEC > 0.0);
    assert!(FADE_DURATION_SEC > 0.0);
    // Fade starts after the pop-in has finished growing
    assert!(FADE_OFFSET_SEC >= APPEAR_OFFSET_SEC + APPEAR_DURATION_SEC);
    assert!(APPEAR_SCALE_TO > APPEAR_SCALE_FROM);
    assert!(FADE_SCALE_TO < APPEAR_SCALE_TO && FADE_SCALE_TO > 0.0);
}

#[test]
fn dom_hooks_are_plain_selectors() {
    assert!(DEFAULT_CONTAINER_SELECTOR.starts_with('.'));
    assert!(SLOT_SELECTOR.starts_with('.'));
    assert!(!LOADING_CLASS.starts_with('.'));
    assert!(!READY_EVENT.is_empty());
}
