//! Error types for rainfield.
//!
//! Configuration problems surface from [`RainField::new`](crate::RainField::new)
//! as [`RainError`]. GPU setup and the windowed demo have their own enums.

use std::fmt;

/// Invalid rain construction parameters.
///
/// These are caller errors: the field refuses to build instead of
/// producing degenerate visuals.
#[derive(Debug, Clone, PartialEq)]
pub enum RainError {
    /// Droplet count must be at least one.
    InvalidCount,
    /// Footprint width and depth must be finite and positive.
    InvalidArea { width: f32, depth: f32 },
    /// Loop box height must be finite and positive.
    InvalidHeight(f32),
    /// Fall speeds must be finite, non-negative and `min <= max`.
    InvalidSpeedRange { min: f32, max: f32 },
    /// A shape parameter fell outside `(0, 1]`.
    InvalidShape { name: &'static str, value: f32 },
    /// Opacity must lie in `[0, 1]`.
    InvalidOpacity(f32),
    /// Sprite base size must be finite and positive.
    InvalidBaseSize(f32),
    /// Wind amplitude and frequency must be finite.
    InvalidWind { amplitude: f32, frequency: f32 },
    /// Color string was not `#rgb` or `#rrggbb`.
    InvalidColor(String),
    /// A supplied droplet lies outside the ranges its config samples from.
    InvalidDroplet { index: usize },
}

impl fmt::Display for RainError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RainError::InvalidCount => write!(f, "Droplet count must be greater than zero"),
            RainError::InvalidArea { width, depth } => {
                write!(f, "Rain area must be positive, got {} x {}", width, depth)
            }
            RainError::InvalidHeight(h) => write!(f, "Rain box height must be positive, got {}", h),
            RainError::InvalidSpeedRange { min, max } => write!(
                f,
                "Invalid fall speed range [{}, {}]: speeds must be non-negative with min <= max",
                min, max
            ),
            RainError::InvalidShape { name, value } => {
                write!(f, "Shape parameter `{}` must be in (0, 1], got {}", name, value)
            }
            RainError::InvalidOpacity(o) => write!(f, "Opacity must be in [0, 1], got {}", o),
            RainError::InvalidBaseSize(s) => write!(f, "Base sprite size must be positive, got {}", s),
            RainError::InvalidWind { amplitude, frequency } => write!(
                f,
                "Wind amplitude and frequency must be finite, got {} and {}",
                amplitude, frequency
            ),
            RainError::InvalidColor(s) => write!(f, "Invalid color `{}`, expected #rgb or #rrggbb", s),
            RainError::InvalidDroplet { index } => {
                write!(f, "Droplet {} lies outside the configured rain box or speed range", index)
            }
        }
    }
}

impl std::error::Error for RainError {}

/// Errors that can occur during GPU initialization.
#[derive(Debug)]
pub enum GpuError {
    /// Failed to create a surface for rendering.
    SurfaceCreation(wgpu::CreateSurfaceError),
    /// No compatible GPU adapter found.
    NoAdapter,
    /// Failed to create GPU device.
    DeviceCreation(wgpu::RequestDeviceError),
    /// Surface reported no usable texture format.
    NoSurfaceFormat,
}

impl fmt::Display for GpuError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GpuError::SurfaceCreation(e) => write!(f, "Failed to create GPU surface: {}", e),
            GpuError::NoAdapter => write!(f, "No compatible GPU adapter found. Ensure your system has a GPU with WebGPU/Vulkan/Metal/DX12 support."),
            GpuError::DeviceCreation(e) => write!(f, "Failed to create GPU device: {}", e),
            GpuError::NoSurfaceFormat => write!(f, "Surface does not support any texture format"),
        }
    }
}

impl std::error::Error for GpuError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            GpuError::SurfaceCreation(e) => Some(e),
            GpuError::DeviceCreation(e) => Some(e),
            _ => None,
        }
    }
}

impl From<wgpu::CreateSurfaceError> for GpuError {
    fn from(e: wgpu::CreateSurfaceError) -> Self {
        GpuError::SurfaceCreation(e)
    }
}

impl From<wgpu::RequestDeviceError> for GpuError {
    fn from(e: wgpu::RequestDeviceError) -> Self {
        GpuError::DeviceCreation(e)
    }
}

/// Errors that can occur when running the demo.
#[derive(Debug)]
pub enum AppError {
    /// Failed to create event loop.
    EventLoop(winit::error::EventLoopError),
    /// Failed to create window.
    Window(winit::error::OsError),
    /// GPU initialization failed.
    Gpu(GpuError),
    /// Rain parameters were rejected.
    Rain(RainError),
    /// Headless frame could not be written.
    Image(image::ImageError),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::EventLoop(e) => write!(f, "Failed to create event loop: {}", e),
            AppError::Window(e) => write!(f, "Failed to create window: {}", e),
            AppError::Gpu(e) => write!(f, "GPU error: {}", e),
            AppError::Rain(e) => write!(f, "Rain configuration error: {}", e),
            AppError::Image(e) => write!(f, "Failed to write frame: {}", e),
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::EventLoop(e) => Some(e),
            AppError::Window(e) => Some(e),
            AppError::Gpu(e) => Some(e),
            AppError::Rain(e) => Some(e),
            AppError::Image(e) => Some(e),
        }
    }
}

impl From<winit::error::EventLoopError> for AppError {
    fn from(e: winit::error::EventLoopError) -> Self {
        AppError::EventLoop(e)
    }
}

impl From<winit::error::OsError> for AppError {
    fn from(e: winit::error::OsError) -> Self {
        AppError::Window(e)
    }
}

impl From<GpuError> for AppError {
    fn from(e: GpuError) -> Self {
        AppError::Gpu(e)
    }
}

impl From<RainError> for AppError {
    fn from(e: RainError) -> Self {
        AppError::Rain(e)
    }
}

impl From<image::ImageError> for AppError {
    fn from(e: image::ImageError) -> Self {
        AppError::Image(e)
    }
}
