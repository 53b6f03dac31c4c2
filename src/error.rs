//! Error types for Explodiemoji.
//!
//! The physics core itself never fails mid-tick. Errors only surface at the
//! edges: malformed host input (viewport, emoji), configuration loading, and
//! GPU/window setup in the desktop host.

/// Precondition violations reported by the simulator.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SimulationError {
    /// Viewport dimensions must be finite and non-negative.
    #[error("invalid viewport {width}x{height}: dimensions must be finite and non-negative")]
    InvalidViewport { width: f32, height: f32 },
    /// A burst needs a glyph to draw.
    #[error("cannot spawn a burst with an empty emoji")]
    EmptyEmoji,
}

/// Errors that can occur while loading or validating configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Failed to read or write the config file.
    #[error("config file I/O failed: {0}")]
    Io(#[from] std::io::Error),
    /// The config file is not valid JSON for [`crate::AppConfig`].
    #[error("config file is malformed: {0}")]
    Json(#[from] serde_json::Error),
    /// A value parsed but is out of range.
    #[error("invalid config: {0}")]
    Invalid(String),
}

/// Errors that can occur during GPU initialization.
#[derive(Debug, thiserror::Error)]
pub enum GpuError {
    /// Failed to create a surface for rendering.
    #[error("failed to create GPU surface: {0}")]
    SurfaceCreation(#[from] wgpu::CreateSurfaceError),
    /// No compatible GPU adapter found.
    #[error("no compatible GPU adapter found. Ensure your system has a GPU with WebGPU/Vulkan/Metal/DX12 support.")]
    NoAdapter,
    /// The surface is not presentable by the chosen adapter.
    #[error("surface reports no supported texture formats")]
    NoSurfaceFormat,
    /// Failed to create GPU device.
    #[error("failed to create GPU device: {0}")]
    DeviceCreation(#[from] wgpu::RequestDeviceError),
}

/// Errors that can occur when running the desktop host.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Failed to create or run the event loop.
    #[error("event loop failed: {0}")]
    EventLoop(#[from] winit::error::EventLoopError),
    /// Failed to create the window.
    #[error("failed to create window: {0}")]
    Window(#[from] winit::error::OsError),
    /// GPU initialization failed.
    #[error("GPU error: {0}")]
    Gpu(#[from] GpuError),
    /// The configuration could not be loaded.
    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Result alias for simulator operations.
pub type Result<T> = std::result::Result<T, SimulationError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_viewport_message_names_dimensions() {
        let err = SimulationError::InvalidViewport {
            width: -1.0,
            height: 600.0,
        };
        let msg = err.to_string();
        assert!(msg.contains("-1x600"));
    }

    #[test]
    fn test_config_error_wraps_json() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: ConfigError = json_err.into();
        assert!(matches!(err, ConfigError::Json(_)));
    }

    #[test]
    fn test_app_error_from_gpu() {
        let err: AppError = GpuError::NoAdapter.into();
        assert!(err.to_string().starts_with("GPU error"));
    }
}
