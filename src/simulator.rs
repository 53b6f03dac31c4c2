//! The particle simulator: live particles, gravity flag and id counter.

use crate::config::{AppConfig, BurstConfig, PhysicsConfig};
use crate::error::{Result, SimulationError};
use crate::particle::{Particle, RenderParticle};
use crate::physics;
use crate::spawn::{self, RandomSource};
use crate::viewport::ViewportBounds;
use rand::rngs::SmallRng;
use rand::SeedableRng;
use std::sync::Arc;

/// Owns every live particle and advances them one tick at a time.
///
/// The simulator never looks at a clock. The host calls [`tick`](Self::tick)
/// at a fixed cadence while [`is_idle`](Self::is_idle) is false, and stops
/// calling it once the last particle has faded.
///
/// ```
/// use explodiemoji::{Simulator, ViewportBounds};
///
/// let bounds = ViewportBounds::new(800.0, 600.0).unwrap();
/// let mut sim = Simulator::seeded(1);
/// sim.spawn_burst(bounds, "🎉").unwrap();
/// assert_eq!(sim.live_count(), 25);
///
/// while !sim.is_idle() {
///     sim.tick(bounds);
/// }
/// ```
pub struct Simulator<R: RandomSource = SmallRng> {
    particles: Vec<Particle>,
    gravity_enabled: bool,
    next_id: u64,
    physics: PhysicsConfig,
    burst: BurstConfig,
    rng: R,
}

impl Simulator<SmallRng> {
    /// Create a simulator seeded from OS entropy.
    pub fn new() -> Self {
        Self::with_rng(SmallRng::from_entropy())
    }

    /// Create a simulator with a reproducible random sequence.
    pub fn seeded(seed: u64) -> Self {
        Self::with_rng(SmallRng::seed_from_u64(seed))
    }
}

impl Default for Simulator<SmallRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: RandomSource> Simulator<R> {
    /// Create a simulator drawing from the given random source.
    pub fn with_rng(rng: R) -> Self {
        Self {
            particles: Vec::new(),
            gravity_enabled: true,
            next_id: 0,
            physics: PhysicsConfig::default(),
            burst: BurstConfig::default(),
            rng,
        }
    }

    /// Set the physics constants.
    pub fn with_physics(mut self, physics: PhysicsConfig) -> Self {
        self.physics = physics;
        self
    }

    /// Set the burst parameters.
    pub fn with_burst(mut self, burst: BurstConfig) -> Self {
        self.burst = burst;
        self
    }

    /// Set the initial gravity state.
    pub fn with_gravity(mut self, enabled: bool) -> Self {
        self.gravity_enabled = enabled;
        self
    }

    /// Apply physics, burst and gravity settings from an [`AppConfig`].
    pub fn with_config(self, config: &AppConfig) -> Self {
        self.with_physics(config.physics.clone())
            .with_burst(config.burst.clone())
            .with_gravity(config.gravity_enabled)
    }

    /// Spawn one burst of `emoji` particles at a random point in `bounds`.
    ///
    /// The new particles are appended after the existing ones; the returned
    /// slice covers just this burst.
    pub fn spawn_burst(&mut self, bounds: ViewportBounds, emoji: &str) -> Result<&[Particle]> {
        if emoji.is_empty() {
            return Err(SimulationError::EmptyEmoji);
        }

        let shared: Arc<str> = Arc::from(emoji);
        let new = spawn::burst(&mut self.rng, bounds, shared, self.next_id, &self.burst);
        self.next_id += new.len() as u64;

        let start = self.particles.len();
        self.particles.extend(new);

        log::debug!(
            "spawned {} x {} ({} live)",
            self.particles.len() - start,
            emoji,
            self.particles.len()
        );

        Ok(&self.particles[start..])
    }

    /// Advance all particles by one tick and return the survivors.
    ///
    /// Uses the gravity flag as it is right now, so a toggle applies from
    /// the next tick. Does nothing while idle.
    pub fn tick(&mut self, bounds: ViewportBounds) -> &[Particle] {
        if self.particles.is_empty() {
            return &self.particles;
        }

        let retired = physics::tick_in_place(
            &mut self.particles,
            bounds,
            self.gravity_enabled,
            &self.physics,
        );
        if retired > 0 {
            log::trace!("retired {} particles, {} live", retired, self.particles.len());
        }

        &self.particles
    }

    /// Remove every particle immediately.
    pub fn clear(&mut self) {
        if !self.particles.is_empty() {
            log::debug!("cleared {} particles", self.particles.len());
        }
        self.particles.clear();
    }

    /// Flip gravity, returning the new state.
    pub fn toggle_gravity(&mut self) -> bool {
        self.gravity_enabled = !self.gravity_enabled;
        log::debug!("gravity {}", if self.gravity_enabled { "on" } else { "off" });
        self.gravity_enabled
    }

    pub fn set_gravity(&mut self, enabled: bool) {
        self.gravity_enabled = enabled;
    }

    #[inline]
    pub fn gravity_enabled(&self) -> bool {
        self.gravity_enabled
    }

    /// Live particles in creation order.
    #[inline]
    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    /// Drawable views of the live particles, in creation order.
    pub fn render_list(&self) -> impl Iterator<Item = RenderParticle<'_>> {
        self.particles.iter().map(Particle::render)
    }

    #[inline]
    pub fn live_count(&self) -> usize {
        self.particles.len()
    }

    /// True when no particles are live and ticking can stop.
    #[inline]
    pub fn is_idle(&self) -> bool {
        self.particles.is_empty()
    }

    pub fn physics(&self) -> &PhysicsConfig {
        &self.physics
    }
}
