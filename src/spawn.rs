//! Burst spawning.
//!
//! A burst is a ring of particles launched from one random point on screen.
//! Directions are spaced evenly around the circle with a little jitter, and
//! every particle gets an extra upward kick so the whole burst initially
//! flies up regardless of its direction.
//!
//! All randomness goes through [`RandomSource`], so tests (and replays) can
//! feed a fixed sequence with [`ScriptedRandom`] and assert exact positions.

use crate::config::BurstConfig;
use crate::particle::{Particle, ParticleId};
use crate::viewport::ViewportBounds;
use glam::Vec2;
use rand::RngCore;
use std::f32::consts::TAU;
use std::ops::Range;
use std::sync::Arc;

/// Source of uniform samples in `[0, 1)`.
pub trait RandomSource {
    fn next_unit(&mut self) -> f32;
}

impl<R: RngCore> RandomSource for R {
    #[inline]
    fn next_unit(&mut self) -> f32 {
        rand::Rng::gen::<f32>(self)
    }
}

/// Replays a fixed list of samples, then repeats the last one forever.
///
/// ```
/// use explodiemoji::spawn::{RandomSource, ScriptedRandom};
///
/// let mut rng = ScriptedRandom::new([0.25, 0.5]);
/// assert_eq!(rng.next_unit(), 0.25);
/// assert_eq!(rng.next_unit(), 0.5);
/// assert_eq!(rng.next_unit(), 0.5);
/// ```
#[derive(Debug, Clone)]
pub struct ScriptedRandom {
    samples: Vec<f32>,
    cursor: usize,
}

impl ScriptedRandom {
    /// Samples should lie in `[0, 1)`. An empty list behaves like `constant(0.0)`.
    pub fn new(samples: impl Into<Vec<f32>>) -> Self {
        Self {
            samples: samples.into(),
            cursor: 0,
        }
    }

    /// Always returns `value`.
    pub fn constant(value: f32) -> Self {
        Self::new([value])
    }
}

impl RandomSource for ScriptedRandom {
    fn next_unit(&mut self) -> f32 {
        let Some(&last) = self.samples.last() else {
            return 0.0;
        };
        let value = self.samples.get(self.cursor).copied().unwrap_or(last);
        self.cursor += 1;
        value
    }
}

/// Helpers over a [`RandomSource`] for the common spawn draws.
pub struct SpawnContext<'a, R: RandomSource + ?Sized> {
    rng: &'a mut R,
}

impl<'a, R: RandomSource + ?Sized> SpawnContext<'a, R> {
    pub fn new(rng: &'a mut R) -> Self {
        Self { rng }
    }

    /// Random f32 between 0.0 and 1.0.
    #[inline]
    pub fn random(&mut self) -> f32 {
        self.rng.next_unit()
    }

    /// Random f32 in the given range.
    #[inline]
    pub fn random_range(&mut self, range: &Range<f32>) -> f32 {
        range.start + self.random() * (range.end - range.start)
    }

    /// Random point in the viewport, inset by `padding` on every side.
    ///
    /// Viewports narrower than `2 * padding` give points outside the inset
    /// area (possibly negative); they are not clamped.
    pub fn random_in_viewport(&mut self, bounds: ViewportBounds, padding: f32) -> Vec2 {
        let x = padding + self.random() * (bounds.width() - padding * 2.0);
        let y = padding + self.random() * (bounds.height() - padding * 2.0);
        Vec2::new(x, y)
    }

    /// Random offset within a disk of the given radius.
    ///
    /// Radius and angle are both uniform, so points cluster near the center.
    pub fn random_offset(&mut self, radius: f32) -> Vec2 {
        let r = self.random() * radius;
        let angle = self.random() * TAU;
        Vec2::from_angle(angle) * r
    }
}

/// Create one burst of particles with ids starting at `first_id`.
///
/// Draws, in order: origin x and y, then for each particle the spawn
/// offset (radius, angle), the direction jitter, base speed, speed
/// multiplier and vertical boost.
pub fn burst<R: RandomSource + ?Sized>(
    rng: &mut R,
    bounds: ViewportBounds,
    emoji: Arc<str>,
    first_id: u64,
    cfg: &BurstConfig,
) -> Vec<Particle> {
    let mut ctx = SpawnContext::new(rng);
    let origin = ctx.random_in_viewport(bounds, cfg.padding);
    let count = cfg.count;

    log::trace!(
        "burst origin ({:.1}, {:.1}) in {}x{}",
        origin.x,
        origin.y,
        bounds.width(),
        bounds.height()
    );

    (0..count)
        .map(|i| {
            let position = origin + ctx.random_offset(cfg.spawn_radius);

            let base_angle = TAU * i as f32 / count as f32;
            let angle = base_angle + (ctx.random() - 0.5) * 2.0 * cfg.angle_jitter;

            let base_speed = ctx.random_range(&cfg.base_speed);
            let speed = base_speed * ctx.random_range(&cfg.speed_multiplier);

            // Measured down from the weakest boost
            let boost = &cfg.vertical_boost;
            let vertical_boost = boost.end - ctx.random() * (boost.end - boost.start);

            let velocity = Vec2::from_angle(angle) * speed + Vec2::new(0.0, vertical_boost);

            Particle::new(
                ParticleId(first_id + u64::from(i)),
                position,
                velocity,
                Arc::clone(&emoji),
            )
        })
        .collect()
}
