//! # Explodiemoji
//!
//! Emoji particle bursts with gravity, bouncing, friction and fade-out.
//!
//! A burst launches 25 copies of an emoji from a random point in the
//! viewport. Every tick each particle moves, falls, bounces off the walls
//! with energy loss, and fades. Once a particle has bounced off the floor
//! three times it settles, slides to a stop under friction, and fades out
//! quickly.
//!
//! ## Quick Start
//!
//! ```
//! use explodiemoji::prelude::*;
//!
//! let bounds = ViewportBounds::new(800.0, 600.0).unwrap();
//! let mut sim = Simulator::seeded(42);
//!
//! sim.spawn_burst(bounds, "💥").unwrap();
//! for p in sim.tick(bounds) {
//!     assert!(p.opacity < 1.0);
//! }
//!
//! for p in sim.render_list() {
//!     println!("{} at ({:.0}, {:.0})", p.emoji, p.x, p.y);
//! }
//! ```
//!
//! ## Core Concepts
//!
//! ### Simulator
//!
//! [`Simulator`] owns the live particles, the gravity flag and the id
//! counter. It has no notion of time: the host calls
//! [`tick`](Simulator::tick) at a fixed cadence (see [`clock::TickClock`])
//! and stops once [`is_idle`](Simulator::is_idle) reports no live particles.
//!
//! ### Physics
//!
//! [`physics::tick`] is a pure function from one particle list to the next,
//! so the rules can be tested without a simulator. All constants live in
//! [`PhysicsConfig`].
//!
//! ### Randomness
//!
//! Bursts draw from any [`RandomSource`](spawn::RandomSource). Every
//! [`rand::RngCore`] is one; tests use [`ScriptedRandom`](spawn::ScriptedRandom)
//! for exact, repeatable samples.
//!
//! ## Desktop Host
//!
//! With the `egui` feature (on by default) the [`app`] module runs the
//! simulator in a winit window, drawing the frame with wgpu and the UI and
//! particles with egui.

pub mod clock;
pub mod config;
pub mod error;
pub mod gpu;
pub mod palette;
pub mod particle;
pub mod physics;
pub mod simulator;
pub mod spawn;
pub mod viewport;

#[cfg(feature = "egui")]
pub mod app;

pub use config::{AppConfig, BurstConfig, PhysicsConfig, WindowConfig};
pub use error::{AppError, ConfigError, GpuError, SimulationError};
pub use glam::Vec2;
pub use particle::{Particle, ParticleId, RenderParticle};
pub use simulator::Simulator;
pub use viewport::ViewportBounds;

/// Common imports.
pub mod prelude {
    pub use crate::clock::TickClock;
    pub use crate::config::{AppConfig, BurstConfig, PhysicsConfig};
    pub use crate::palette::{EmojiButton, EmojiPalette, PaletteAction};
    pub use crate::particle::{Particle, ParticleId, RenderParticle};
    pub use crate::simulator::Simulator;
    pub use crate::spawn::{RandomSource, ScriptedRandom};
    pub use crate::viewport::ViewportBounds;
    pub use crate::Vec2;
}
