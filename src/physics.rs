//! Per-tick particle physics.
//!
//! One tick is one frame unit: positions advance by the full velocity, with
//! no wall-clock scaling. Each particle is updated independently by [`step`]
//! and the phases run in a fixed order:
//!
//! 1. Integrate position with the velocity from the previous tick
//! 2. Gravity (when enabled)
//! 3. Floor collision, with a bounce cap after which particles settle
//! 4. Ceiling, right wall and left wall collisions
//! 5. Fade: fast once settled on the floor, slow otherwise
//!
//! Particles whose opacity drops to zero are removed by [`tick`].

use crate::config::PhysicsConfig;
use crate::particle::Particle;
use crate::viewport::ViewportBounds;

/// Advance a single particle by one tick.
pub fn step(p: &mut Particle, bounds: ViewportBounds, gravity: bool, cfg: &PhysicsConfig) {
    let floor = bounds.height() - cfg.wall_margin;
    let ceiling = cfg.wall_margin;
    let right = bounds.width() - cfg.wall_margin;
    let left = cfg.wall_margin;

    p.position += p.velocity;

    if gravity {
        p.velocity.y += cfg.gravity;
    }

    // Floor
    if p.position.y > floor && p.velocity.y > 0.0 {
        p.position.y = floor;
        if p.bounce_count < cfg.bounce_cap {
            p.velocity.y = -p.velocity.y * cfg.restitution;
            p.bounce_count += 1;
        } else if gravity {
            // Settled: stick to the floor and slide to a halt
            p.velocity.y = 0.0;
            p.velocity.x *= cfg.floor_friction;
        } else {
            p.velocity.y = -p.velocity.y * cfg.restitution;
        }
    }

    // Ceiling
    if p.position.y < ceiling && p.velocity.y < 0.0 {
        p.velocity.y = -p.velocity.y * cfg.restitution;
        p.position.y = ceiling;
    }

    // Walls
    if p.position.x > right && p.velocity.x > 0.0 {
        p.velocity.x = -p.velocity.x * cfg.restitution;
        p.position.x = right;
    }
    if p.position.x < left && p.velocity.x < 0.0 {
        p.velocity.x = -p.velocity.x * cfg.restitution;
        p.position.x = left;
    }

    p.opacity -= fade_rate(p, gravity, cfg);
}

/// Opacity lost by `p` this tick.
///
/// The fast rate only applies with gravity on, once the bounce cap is reached
/// and both velocity components are below the rest threshold. A capped
/// particle that is still sliding keeps the slow rate.
#[inline]
pub fn fade_rate(p: &Particle, gravity: bool, cfg: &PhysicsConfig) -> f32 {
    let resting = p.velocity.x.abs() < cfg.rest_threshold && p.velocity.y.abs() < cfg.rest_threshold;
    if gravity && resting && p.bounce_count >= cfg.bounce_cap {
        cfg.fast_fade
    } else {
        cfg.slow_fade
    }
}

/// Advance every particle by one tick and drop the ones that faded out.
///
/// Pure form of [`tick_in_place`]: takes ownership of the particles and
/// returns the survivors in their original order.
pub fn tick(
    mut particles: Vec<Particle>,
    bounds: ViewportBounds,
    gravity: bool,
    cfg: &PhysicsConfig,
) -> Vec<Particle> {
    tick_in_place(&mut particles, bounds, gravity, cfg);
    particles
}

/// Advance every particle in place, returning how many were retired.
pub fn tick_in_place(
    particles: &mut Vec<Particle>,
    bounds: ViewportBounds,
    gravity: bool,
    cfg: &PhysicsConfig,
) -> usize {
    let before = particles.len();
    particles.retain_mut(|p| {
        step(p, bounds, gravity, cfg);
        p.is_alive()
    });
    before - particles.len()
}
