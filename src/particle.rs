//! Emoji particle state.

use glam::Vec2;
use std::fmt;
use std::sync::Arc;

/// Unique particle identifier.
///
/// Ids are handed out by a per-simulator counter, so they never collide and
/// comparing two ids tells you which particle was created first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ParticleId(pub u64);

impl fmt::Display for ParticleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A single animated emoji.
#[derive(Debug, Clone, PartialEq)]
pub struct Particle {
    pub id: ParticleId,
    /// Screen position in logical pixels, y pointing down.
    pub position: Vec2,
    /// Pixels per tick.
    pub velocity: Vec2,
    /// 1.0 at birth, removed once it reaches 0.
    pub opacity: f32,
    /// Floor bounces consumed so far.
    pub bounce_count: u32,
    emoji: Arc<str>,
}

impl Particle {
    pub fn new(id: ParticleId, position: Vec2, velocity: Vec2, emoji: Arc<str>) -> Self {
        Self {
            id,
            position,
            velocity,
            opacity: 1.0,
            bounce_count: 0,
            emoji,
        }
    }

    /// The glyph drawn for this particle.
    #[inline]
    pub fn emoji(&self) -> &str {
        &self.emoji
    }

    #[inline]
    pub fn is_alive(&self) -> bool {
        self.opacity > 0.0
    }

    /// The view of this particle a renderer needs.
    pub fn render(&self) -> RenderParticle<'_> {
        RenderParticle {
            id: self.id,
            x: self.position.x,
            y: self.position.y,
            opacity: self.opacity.clamp(0.0, 1.0),
            emoji: &self.emoji,
        }
    }
}

/// Drawable snapshot of a particle, borrowed from the simulator.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderParticle<'a> {
    pub id: ParticleId,
    pub x: f32,
    pub y: f32,
    pub opacity: f32,
    pub emoji: &'a str,
}
