use std::fs::{self, File};
use std::io::BufWriter;
use std::path::Path;

use image::codecs::jpeg::JpegEncoder;
use image::{DynamicImage, ImageFormat, RgbaImage};
use log::info;

use crate::error::{AppError, Result};
use crate::geometry::{DeviceGeometry, BYTES_PER_PIXEL};

/// Create the destination's parent directories if they are missing.
///
/// Runs before any device I/O so a bad destination never costs a capture.
pub fn ensure_parent_dirs(dest: &Path) -> Result<()> {
    let Some(parent) = dest.parent() else {
        return Ok(());
    };
    if parent.as_os_str().is_empty() || parent.is_dir() {
        return Ok(());
    }
    fs::create_dir_all(parent).map_err(|source| AppError::Filesystem {
        path: parent.to_path_buf(),
        source,
    })?;
    info!("Created folder {} for screen save", parent.display());
    Ok(())
}

/// Encode the corrected frame and write it to `dest`.
///
/// The format is inferred from the extension. JPEG output honors `quality`
/// (0-100); lossless formats ignore it.
pub fn save_image(data: &[u8], geometry: DeviceGeometry, dest: &Path, quality: u8) -> Result<()> {
    let format = ImageFormat::from_path(dest).map_err(|e| encode_error(dest, e))?;
    let image = pack_rows(data, geometry, dest)?;

    match format {
        ImageFormat::Jpeg => {
            let file = File::create(dest).map_err(|e| encode_error(dest, e))?;
            let mut writer = BufWriter::new(file);
            // JPEG has no alpha channel.
            let rgb = DynamicImage::ImageRgba8(image).into_rgb8();
            JpegEncoder::new_with_quality(&mut writer, quality)
                .encode_image(&rgb)
                .map_err(|e| encode_error(dest, e))?;
        }
        _ => image.save(dest).map_err(|e| encode_error(dest, e))?,
    }

    info!("Image saved: {}", dest.display());
    Ok(())
}

/// Drop the per-row padding, leaving tightly packed RGBA rows for the
/// encoder.
fn pack_rows(data: &[u8], geometry: DeviceGeometry, dest: &Path) -> Result<RgbaImage> {
    let stride = geometry.stride_bytes as usize;
    let row_bytes = geometry.width as usize * BYTES_PER_PIXEL as usize;

    let mut packed = Vec::with_capacity(row_bytes * geometry.height as usize);
    for y in 0..geometry.height as usize {
        let start = y * stride;
        packed.extend_from_slice(&data[start..start + row_bytes]);
    }

    RgbaImage::from_raw(geometry.width, geometry.height, packed)
        .ok_or_else(|| encode_error(dest, "packed buffer does not match the image dimensions"))
}

fn encode_error(dest: &Path, detail: impl ToString) -> AppError {
    AppError::Encode {
        path: dest.to_path_buf(),
        detail: detail.to_string(),
    }
}
