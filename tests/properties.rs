//! Property tests for the tick invariants.

use std::collections::HashMap;
use std::sync::Arc;

use explodiemoji::physics;
use explodiemoji::prelude::*;
use proptest::prelude::*;

fn arb_particles() -> impl Strategy<Value = Vec<Particle>> {
    let one = (
        0.0f32..800.0,
        0.0f32..600.0,
        -20.0f32..20.0,
        -20.0f32..20.0,
        0u32..=3,
        0.001f32..=1.0,
    );
    prop::collection::vec(one, 0..40).prop_map(|raw| {
        let emoji: Arc<str> = Arc::from("✨");
        raw.into_iter()
            .enumerate()
            .map(|(i, (x, y, vx, vy, bounces, opacity))| {
                let mut p = Particle::new(
                    ParticleId(i as u64),
                    Vec2::new(x, y),
                    Vec2::new(vx, vy),
                    Arc::clone(&emoji),
                );
                p.bounce_count = bounces;
                p.opacity = opacity;
                p
            })
            .collect()
    })
}

fn bounds() -> ViewportBounds {
    ViewportBounds::new(800.0, 600.0).unwrap()
}

proptest! {
    #[test]
    fn opacity_never_increases_and_bounces_stay_capped(
        particles in arb_particles(),
        gravity in any::<bool>(),
        ticks in 1usize..120,
    ) {
        let cfg = PhysicsConfig::default();
        let mut current = particles;

        for _ in 0..ticks {
            let before: HashMap<ParticleId, f32> =
                current.iter().map(|p| (p.id, p.opacity)).collect();
            current = physics::tick(current, bounds(), gravity, &cfg);

            for p in &current {
                prop_assert!(p.opacity < before[&p.id]);
                prop_assert!(p.opacity > 0.0);
                prop_assert!(p.bounce_count <= 3);
            }
        }
    }

    #[test]
    fn survivors_are_exactly_those_with_positive_opacity(
        particles in arb_particles(),
        gravity in any::<bool>(),
    ) {
        let cfg = PhysicsConfig::default();

        let expected: Vec<Particle> = particles
            .iter()
            .cloned()
            .map(|mut p| {
                physics::step(&mut p, bounds(), gravity, &cfg);
                p
            })
            .filter(|p| p.opacity > 0.0)
            .collect();

        let out = physics::tick(particles, bounds(), gravity, &cfg);
        prop_assert_eq!(out, expected);
    }

    #[test]
    fn burst_ids_are_fresh_and_ordered(seed in any::<u64>(), bursts in 1usize..5) {
        let mut sim = Simulator::seeded(seed);
        for _ in 0..bursts {
            sim.spawn_burst(bounds(), "🚀").unwrap();
        }

        let ids: Vec<u64> = sim.particles().iter().map(|p| p.id.0).collect();
        prop_assert_eq!(ids.len(), 25 * bursts);
        prop_assert!(ids.windows(2).all(|w| w[0] < w[1]));
        prop_assert!(sim.particles().iter().all(|p| p.opacity == 1.0 && p.bounce_count == 0));
    }

    #[test]
    fn viewport_rejects_negative_dimensions(w in -1000.0f32..-0.001, h in 0.0f32..1000.0) {
        prop_assert!(ViewportBounds::new(w, h).is_err());
        prop_assert!(ViewportBounds::new(h, w).is_err());
        prop_assert!(ViewportBounds::new(h, h).is_ok());
    }
}
