//! Scenario tests for the physics rules on an 800x600 viewport.

use std::sync::Arc;

use explodiemoji::physics;
use explodiemoji::prelude::*;

// ============================================================================
// Helpers
// ============================================================================

fn bounds() -> ViewportBounds {
    ViewportBounds::new(800.0, 600.0).unwrap()
}

fn particle(x: f32, y: f32, vx: f32, vy: f32) -> Particle {
    Particle::new(
        ParticleId(0),
        Vec2::new(x, y),
        Vec2::new(vx, vy),
        Arc::from("🎈"),
    )
}

fn assert_close(actual: f32, expected: f32) {
    assert!(
        (actual - expected).abs() < 1e-4,
        "expected {expected}, got {actual}"
    );
}

// ============================================================================
// Gravity on
// ============================================================================

#[test]
fn test_first_tick_moves_by_initial_velocity_then_accelerates() {
    let cfg = PhysicsConfig::default();
    let out = physics::tick(vec![particle(400.0, 300.0, 3.0, -5.0)], bounds(), true, &cfg);

    assert_eq!(out.len(), 1);
    let p = &out[0];
    assert_close(p.position.x, 403.0);
    assert_close(p.position.y, 295.0);
    assert_close(p.velocity.y, -4.7);
    assert_close(p.velocity.x, 3.0);
    assert_close(p.opacity, 0.998);
}

#[test]
fn test_settled_particle_sticks_and_fades_fast() {
    let cfg = PhysicsConfig::default();
    let mut p = particle(400.0, 579.0, 0.05, 2.0);
    p.bounce_count = 3;

    let out = physics::tick(vec![p], bounds(), true, &cfg);
    let p = &out[0];
    assert_close(p.position.y, 580.0);
    assert_eq!(p.velocity.y, 0.0);
    assert_close(p.velocity.x, 0.045);
    assert_eq!(p.bounce_count, 3);
    assert_close(p.opacity, 0.95);
}

#[test]
fn test_sliding_capped_particle_keeps_slow_fade() {
    let cfg = PhysicsConfig::default();
    let mut p = particle(400.0, 579.0, 5.0, 2.0);
    p.bounce_count = 3;

    let out = physics::tick(vec![p], bounds(), true, &cfg);
    assert_close(out[0].velocity.x, 4.5);
    assert_close(out[0].opacity, 0.998);
}

#[test]
fn test_dropped_particle_bounces_three_times_then_vanishes() {
    let cfg = PhysicsConfig::default();
    let mut particles = vec![particle(400.0, 300.0, 2.0, 0.0)];
    let mut max_bounces = 0;
    let mut ticks = 0;

    while !particles.is_empty() {
        particles = physics::tick(particles, bounds(), true, &cfg);
        ticks += 1;
        if let Some(p) = particles.first() {
            assert!(p.bounce_count <= 3);
            max_bounces = max_bounces.max(p.bounce_count);
        }
        assert!(ticks <= 510, "particle never retired");
    }

    assert_eq!(max_bounces, 3);
    // Fast fade kicked in, so it went well before the slow-fade lifetime
    assert!(ticks < 500, "took {ticks} ticks");
}

// ============================================================================
// Gravity off
// ============================================================================

#[test]
fn test_no_gravity_keeps_vertical_velocity() {
    let cfg = PhysicsConfig::default();
    let out = physics::tick(vec![particle(400.0, 300.0, 0.0, -5.0)], bounds(), false, &cfg);
    assert_close(out[0].position.y, 295.0);
    assert_close(out[0].velocity.y, -5.0);
}

#[test]
fn test_no_gravity_floor_keeps_reflecting_past_cap() {
    let cfg = PhysicsConfig::default();
    let mut p = particle(400.0, 575.0, 0.0, 10.0);
    p.bounce_count = 3;

    let out = physics::tick(vec![p], bounds(), false, &cfg);
    let p = &out[0];
    assert_close(p.position.y, 580.0);
    assert_close(p.velocity.y, -6.0);
    assert_eq!(p.bounce_count, 3);
}

#[test]
fn test_no_gravity_only_slow_fade() {
    let cfg = PhysicsConfig::default();
    let mut p = particle(400.0, 300.0, 0.0, 0.0);
    p.bounce_count = 3;

    let mut particles = vec![p];
    for _ in 0..100 {
        particles = physics::tick(particles, bounds(), false, &cfg);
    }
    assert_close(particles[0].opacity, 1.0 - 100.0 * 0.002);
}

// ============================================================================
// Simulator
// ============================================================================

#[test]
fn test_burst_lands_within_spawn_radius() {
    let mut sim = Simulator::seeded(9);
    let burst = sim.spawn_burst(bounds(), "🔥").unwrap().to_vec();
    assert_eq!(burst.len(), 25);

    for a in &burst {
        for b in &burst {
            assert!(a.position.distance(b.position) <= 20.0 + 1e-3);
        }
    }
}

#[test]
fn test_clear_removes_everything() {
    let mut sim = Simulator::seeded(3);
    sim.spawn_burst(bounds(), "🍕").unwrap();
    sim.spawn_burst(bounds(), "🍩").unwrap();
    sim.tick(bounds());
    assert_eq!(sim.live_count(), 50);

    sim.clear();
    assert!(sim.is_idle());
    assert!(sim.tick(bounds()).is_empty());
    assert_eq!(sim.render_list().count(), 0);
}

#[test]
fn test_gravity_toggle_applies_next_tick() {
    let mut sim = Simulator::with_rng(ScriptedRandom::constant(0.5));
    sim.spawn_burst(bounds(), "⭐").unwrap();
    let vy_before = sim.particles()[0].velocity.y;

    assert!(!sim.toggle_gravity());
    sim.tick(bounds());
    assert_close(sim.particles()[0].velocity.y, vy_before);

    assert!(sim.toggle_gravity());
    sim.tick(bounds());
    assert_close(sim.particles()[0].velocity.y, vy_before + 0.3);
}

#[test]
fn test_every_burst_eventually_fades() {
    let mut sim = Simulator::seeded(2024);
    sim.spawn_burst(bounds(), "🎉").unwrap();

    let mut ticks = 0;
    while !sim.is_idle() {
        sim.tick(bounds());
        ticks += 1;
        assert!(ticks <= 510);
    }
}
