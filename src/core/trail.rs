// Pointer trail state machine.
//
// Holds everything the trail effect needs between frames: the raw and
// smoothed pointer, the last spawn position, the element pool with its
// round-robin cursor, and the lifecycle counters. Nothing here touches the
// DOM; the web frontend feeds pointer events in, calls [`TrailState::frame`]
// once per animation frame and writes back the returned styles.

use super::constants::*;
use super::tween::{Ease, ElementStyle, Property, Timeline, Tween};
use glam::Vec2;
use smallvec::SmallVec;

/// Tunables for one trail instance.
#[derive(Clone, Debug, PartialEq)]
pub struct TrailConfig {
    /// Pointer travel (viewport px) required before the next spawn.
    pub threshold: f32,
    /// Per-frame lerp weight of the smoothed position toward the pointer.
    pub smoothing: f32,
    /// Subtracted from positions so the element box is centred on the pointer.
    pub element_offset: Vec2,
}

impl Default for TrailConfig {
    fn default() -> Self {
        Self {
            threshold: SPAWN_DISTANCE_THRESHOLD,
            smoothing: SMOOTHING_FACTOR,
            element_offset: Vec2::from(ELEMENT_OFFSET),
        }
    }
}

#[inline]
pub fn lerp(a: f32, b: f32, n: f32) -> f32 {
    (1.0 - n) * a + n * b
}

/// One smoothing step. Seeds from `raw` when there is no previous value.
#[inline]
pub fn smooth_toward(prev: Option<Vec2>, raw: Vec2, factor: f32) -> Vec2 {
    let prev = prev.unwrap_or(raw);
    Vec2::new(lerp(prev.x, raw.x, factor), lerp(prev.y, raw.y, factor))
}

/// Timeline for one spawned element: pop in while travelling from `from` to
/// `to`, then fade and shrink.
pub fn trail_timeline(from: Vec2, to: Vec2) -> Timeline {
    Timeline::new()
        .push(
            Tween::new(APPEAR_OFFSET_SEC, APPEAR_DURATION_SEC, Ease::Power1Out)
                .with(Property::Opacity, 1.0, 1.0)
                .with(Property::Scale, APPEAR_SCALE_FROM, APPEAR_SCALE_TO)
                .with(Property::X, from.x, to.x)
                .with(Property::Y, from.y, to.y),
        )
        .push(
            Tween::new(FADE_OFFSET_SEC, FADE_DURATION_SEC, Ease::Power2Out)
                .with(Property::Opacity, 1.0, 0.0)
                .with(Property::Scale, APPEAR_SCALE_TO, FADE_SCALE_TO),
        )
}

#[derive(Clone, Debug)]
struct SlotAnimation {
    started_at: f64,
    timeline: Timeline,
}

#[derive(Clone, Debug, Default)]
pub struct Slot {
    animation: Option<SlotAnimation>,
    style: ElementStyle,
}

impl Slot {
    pub fn is_animating(&self) -> bool {
        self.animation.is_some()
    }

    pub fn style(&self) -> &ElementStyle {
        &self.style
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StyleUpdate {
    pub slot: usize,
    pub style: ElementStyle,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct FrameReport {
    pub spawned: Option<usize>,
    pub completed: SmallVec<[usize; 4]>,
    /// False once disengaged with nothing left to animate.
    pub keep_running: bool,
}

pub struct TrailState {
    pub config: TrailConfig,
    pointer: Vec2,
    has_sample: bool,
    smoothed: Option<Vec2>,
    last_trigger: Vec2,
    slots: Vec<Slot>,
    current: usize,
    z_index: u32,
    active: usize,
    idle: bool,
    engaged: bool,
}

impl TrailState {
    pub fn new(pool_size: usize, config: TrailConfig) -> anyhow::Result<Self> {
        anyhow::ensure!(pool_size > 0, "trail pool needs at least one element");
        Ok(Self {
            config,
            pointer: Vec2::ZERO,
            has_sample: false,
            smoothed: None,
            last_trigger: Vec2::ZERO,
            slots: vec![Slot::default(); pool_size],
            current: 0,
            z_index: Z_INDEX_BASE,
            active: 0,
            idle: true,
            engaged: false,
        })
    }

    pub fn pool_size(&self) -> usize {
        self.slots.len()
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn z_index(&self) -> u32 {
        self.z_index
    }

    pub fn active_count(&self) -> usize {
        self.active
    }

    pub fn is_idle(&self) -> bool {
        self.idle
    }

    pub fn is_engaged(&self) -> bool {
        self.engaged
    }

    pub fn pointer(&self) -> Vec2 {
        self.pointer
    }

    pub fn smoothed(&self) -> Option<Vec2> {
        self.smoothed
    }

    pub fn last_trigger(&self) -> Vec2 {
        self.last_trigger
    }

    pub fn slot(&self, index: usize) -> Option<&Slot> {
        self.slots.get(index)
    }

    /// Returns true on the Disengaged -> Engaged transition.
    pub fn engage(&mut self) -> bool {
        if self.engaged {
            return false;
        }
        self.engaged = true;
        true
    }

    /// Returns true on the Engaged -> Disengaged transition.
    pub fn disengage(&mut self) -> bool {
        if !self.engaged {
            return false;
        }
        self.engaged = false;
        true
    }

    pub fn pointer_moved(&mut self, pos: Vec2) {
        if self.engaged {
            self.pointer = pos;
            self.has_sample = true;
        }
    }

    pub fn wants_frames(&self) -> bool {
        self.engaged || !self.idle
    }

    /// Advance one animation frame at clock time `now` (seconds).
    pub fn frame(&mut self, now: f64, out: &mut Vec<StyleUpdate>) -> FrameReport {
        let mut report = FrameReport::default();

        let distance = self.pointer.distance(self.last_trigger);
        // No seed until a real pointer sample has arrived.
        if self.has_sample {
            self.smoothed = Some(smooth_toward(
                self.smoothed,
                self.pointer,
                self.config.smoothing,
            ));
        }

        if distance > self.config.threshold {
            report.spawned = Some(self.spawn_next(now));
            self.last_trigger = self.pointer;
        }

        self.advance(now, out, &mut report.completed);

        if self.idle && self.z_index != Z_INDEX_BASE {
            log::debug!("[trail] idle, stacking reset from {}", self.z_index);
            self.z_index = Z_INDEX_BASE;
        }

        report.keep_running = self.wants_frames();
        report
    }

    /// Start the next pooled element's animation and return its index.
    pub fn spawn_next(&mut self, now: f64) -> usize {
        self.z_index += 1;
        self.current = if self.current + 1 < self.slots.len() {
            self.current + 1
        } else {
            0
        };

        let offset = self.config.element_offset;
        let from = self.smoothed.unwrap_or(self.pointer) - offset;
        let to = self.pointer - offset;
        let timeline = trail_timeline(from, to);

        let slot = &mut self.slots[self.current];
        slot.style.z_index = self.z_index;
        timeline.sample(0.0, &mut slot.style);
        let superseded = slot
            .animation
            .replace(SlotAnimation {
                started_at: now,
                timeline,
            })
            .is_some();

        // A superseded animation ends as this one begins; the count stays put.
        if !superseded {
            self.active += 1;
        }
        self.idle = false;

        log::debug!(
            "[trail] spawn slot={} z={} active={} superseded={}",
            self.current,
            self.z_index,
            self.active,
            superseded
        );
        self.current
    }

    fn advance(
        &mut self,
        now: f64,
        out: &mut Vec<StyleUpdate>,
        completed: &mut SmallVec<[usize; 4]>,
    ) {
        for (i, slot) in self.slots.iter_mut().enumerate() {
            let Some(anim) = &slot.animation else {
                continue;
            };
            // Subtract in f64; only the short per-animation span is narrowed.
            let elapsed = (now - anim.started_at).max(0.0) as f32;
            anim.timeline.sample(elapsed, &mut slot.style);
            let done = anim.timeline.is_complete(elapsed);
            out.push(StyleUpdate {
                slot: i,
                style: slot.style,
            });
            if done {
                slot.animation = None;
                completed.push(i);
            }
        }

        for _ in 0..completed.len() {
            self.active = self.active.saturating_sub(1);
            if self.active == 0 {
                self.idle = true;
            }
        }
    }
}
