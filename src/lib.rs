//! A library for capturing Linux framebuffer contents as image files.
//!
//! This library provides functionality for:
//! - Resolving display geometry, explicitly or from the framebuffer driver
//! - Reading the raw frame contents of a framebuffer device
//! - Correcting the red/blue channel order of 32-bit packed pixels
//! - Encoding the corrected frame to PNG or JPEG

pub mod capture;
pub mod cli;
pub mod config;
pub mod device;
pub mod error;
pub mod frame;
pub mod geometry;
pub mod logging;
pub mod output;

pub use capture::capture;
pub use config::Config;
pub use device::FramebufferDevice;
pub use error::{AppError, Result};
pub use frame::{swap_red_blue, PixelView};
pub use geometry::{DeviceGeometry, GeometrySource};

/// Version of the library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty(), "Version should not be empty");
    }
}
