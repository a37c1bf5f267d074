use crate::error::{AppError, Result};

/// All supported modes are 32-bit packed RGB variants.
pub const BYTES_PER_PIXEL: u32 = 4;

/// Resolution and row pitch of one framebuffer mode.
///
/// `stride_bytes` is the distance between scanline starts and may exceed
/// `width * BYTES_PER_PIXEL` when the driver pads each row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeviceGeometry {
    pub width: u32,
    pub height: u32,
    pub stride_bytes: u32,
}

impl DeviceGeometry {
    pub fn new(width: u32, height: u32, stride_bytes: u32) -> Result<Self> {
        if width == 0 || height == 0 || stride_bytes == 0 {
            return Err(AppError::config(format!(
                "geometry values must be positive (width={}, height={}, line length={})",
                width, height, stride_bytes
            )));
        }
        if (stride_bytes as u64) < width as u64 * BYTES_PER_PIXEL as u64 {
            return Err(AppError::config(format!(
                "line length {} is shorter than one row of pixels ({} * {} bytes)",
                stride_bytes, width, BYTES_PER_PIXEL
            )));
        }
        Ok(Self {
            width,
            height,
            stride_bytes,
        })
    }

    /// Minimum buffer size this geometry can be read from.
    pub fn required_len(&self) -> usize {
        self.stride_bytes as usize * self.height as usize
    }
}

/// Where the geometry comes from: supplied on the command line, or queried
/// from the framebuffer driver once the device is open.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GeometrySource {
    Explicit(DeviceGeometry),
    AutoDetect,
}

impl GeometrySource {
    /// Explicit geometry is all-or-nothing: width, height and line length
    /// must be supplied together, otherwise the driver is queried.
    pub fn from_options(
        width: Option<u32>,
        height: Option<u32>,
        line_length: Option<u32>,
    ) -> Result<Self> {
        match (width, height, line_length) {
            (Some(width), Some(height), Some(line_length)) => Ok(GeometrySource::Explicit(
                DeviceGeometry::new(width, height, line_length)?,
            )),
            (None, None, None) => Ok(GeometrySource::AutoDetect),
            _ => Err(AppError::config(
                "width, height and line length must be supplied together \
                 (omit all three to auto-detect)",
            )),
        }
    }
}
