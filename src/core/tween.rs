// Minimal tween timeline used to animate a single trail element.
//
// A [`Timeline`] is an ordered list of [`Tween`]s placed at fixed offsets.
// Sampling applies every tween that has started, in insertion order, so a
// later tween wins for the properties it animates.

use smallvec::SmallVec;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Ease {
    Linear,
    /// Quadratic ease-out.
    Power1Out,
    /// Cubic ease-out.
    Power2Out,
}

impl Ease {
    #[inline]
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        let inv = 1.0 - t;
        match self {
            Ease::Linear => t,
            Ease::Power1Out => 1.0 - inv * inv,
            Ease::Power2Out => 1.0 - inv * inv * inv,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Property {
    Opacity,
    Scale,
    X,
    Y,
}

/// Visual state of one element as written to the DOM.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ElementStyle {
    pub opacity: f32,
    pub scale: f32,
    pub x: f32,
    pub y: f32,
    pub z_index: u32,
}

impl Default for ElementStyle {
    fn default() -> Self {
        Self {
            opacity: 0.0,
            scale: 1.0,
            x: 0.0,
            y: 0.0,
            z_index: 0,
        }
    }
}

impl ElementStyle {
    #[inline]
    pub fn set(&mut self, property: Property, value: f32) {
        match property {
            Property::Opacity => self.opacity = value,
            Property::Scale => self.scale = value,
            Property::X => self.x = value,
            Property::Y => self.y = value,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PropertyTween {
    pub property: Property,
    pub from: f32,
    pub to: f32,
}

impl PropertyTween {
    pub fn new(property: Property, from: f32, to: f32) -> Self {
        Self { property, from, to }
    }
}

#[derive(Clone, Debug)]
pub struct Tween {
    pub offset: f32,
    pub duration: f32,
    pub ease: Ease,
    pub props: SmallVec<[PropertyTween; 4]>,
}

impl Tween {
    pub fn new(offset: f32, duration: f32, ease: Ease) -> Self {
        Self {
            offset,
            duration,
            ease,
            props: SmallVec::new(),
        }
    }

    pub fn with(mut self, property: Property, from: f32, to: f32) -> Self {
        self.props.push(PropertyTween::new(property, from, to));
        self
    }

    #[inline]
    pub fn end(&self) -> f32 {
        self.offset + self.duration
    }

    /// Eased progress at `elapsed`, or `None` before the tween starts.
    pub fn progress(&self, elapsed: f32) -> Option<f32> {
        if elapsed < self.offset {
            return None;
        }
        let raw = if self.duration <= 0.0 {
            1.0
        } else {
            (elapsed - self.offset) / self.duration
        };
        Some(self.ease.apply(raw))
    }
}

#[derive(Clone, Debug, Default)]
pub struct Timeline {
    tweens: Vec<Tween>,
}

impl Timeline {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(mut self, tween: Tween) -> Self {
        self.tweens.push(tween);
        self
    }

    pub fn tweens(&self) -> &[Tween] {
        &self.tweens
    }

    pub fn duration(&self) -> f32 {
        self.tweens.iter().map(Tween::end).fold(0.0, f32::max)
    }

    #[inline]
    pub fn is_complete(&self, elapsed: f32) -> bool {
        elapsed >= self.duration()
    }

    pub fn sample(&self, elapsed: f32, style: &mut ElementStyle) {
        for tween in &self.tweens {
            let Some(p) = tween.progress(elapsed) else {
                continue;
            };
            for prop in &tween.props {
                style.set(prop.property, prop.from + (prop.to - prop.from) * p);
            }
        }
    }
}
