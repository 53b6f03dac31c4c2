//! Viewport bounds supplied by the host every tick.

use crate::error::{Result, SimulationError};
use glam::Vec2;

/// Width and height of the drawable area, in logical pixels.
///
/// Construction validates the dimensions, so a `ViewportBounds` value is
/// always finite and non-negative. Tiny viewports (even zero-sized ones) are
/// accepted: the wall and floor clamps cope with them, they just look odd.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewportBounds {
    width: f32,
    height: f32,
}

impl ViewportBounds {
    /// Create bounds, rejecting NaN, infinite, or negative dimensions.
    pub fn new(width: f32, height: f32) -> Result<Self> {
        if !width.is_finite() || !height.is_finite() || width < 0.0 || height < 0.0 {
            return Err(SimulationError::InvalidViewport { width, height });
        }
        Ok(Self { width, height })
    }

    /// Bounds from a winit logical size.
    pub fn from_logical(size: winit::dpi::LogicalSize<f32>) -> Result<Self> {
        Self::new(size.width, size.height)
    }

    #[inline]
    pub fn width(&self) -> f32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> f32 {
        self.height
    }

    /// Size as a vector `(width, height)`.
    #[inline]
    pub fn size(&self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_regular_window() {
        let bounds = ViewportBounds::new(800.0, 600.0).unwrap();
        assert_eq!(bounds.size(), Vec2::new(800.0, 600.0));
    }

    #[test]
    fn test_accepts_degenerate_sizes() {
        assert!(ViewportBounds::new(0.0, 0.0).is_ok());
        assert!(ViewportBounds::new(50.0, 30.0).is_ok());
    }

    #[test]
    fn test_rejects_nan_and_negative() {
        assert!(ViewportBounds::new(f32::NAN, 600.0).is_err());
        assert!(ViewportBounds::new(800.0, f32::INFINITY).is_err());
        assert_eq!(
            ViewportBounds::new(-1.0, 600.0),
            Err(SimulationError::InvalidViewport {
                width: -1.0,
                height: 600.0
            })
        );
    }

    #[test]
    fn test_from_logical_size() {
        let bounds = ViewportBounds::from_logical(winit::dpi::LogicalSize::new(1280.0, 720.0)).unwrap();
        assert_eq!(bounds.width(), 1280.0);
        assert_eq!(bounds.height(), 720.0);
    }
}
