//! The capture pipeline: resolve geometry, read the device once, correct
//! the channel order in place, encode to the destination.

use log::{debug, info};

use crate::config::Config;
use crate::device::FramebufferDevice;
use crate::error::Result;
use crate::frame::{swap_red_blue, PixelView};
use crate::geometry::GeometrySource;
use crate::output;

/// Run one capture.
///
/// Fails fast at each stage; nothing is written unless every stage before
/// the encoder succeeded.
pub fn capture(config: &Config) -> Result<()> {
    output::ensure_parent_dirs(&config.dest)?;

    let device = FramebufferDevice::open(&config.device)?;
    let geometry = match config.geometry {
        GeometrySource::Explicit(geometry) => geometry,
        GeometrySource::AutoDetect => device.query_geometry()?,
    };
    debug!(
        "Using geometry {}x{} with line length {} bytes",
        geometry.width, geometry.height, geometry.stride_bytes
    );

    let mut contents = device.read_frame()?;

    let mut view = PixelView::new(&mut contents, geometry)?;
    swap_red_blue(&mut view);

    output::save_image(&contents, geometry, &config.dest, config.quality)?;
    info!(
        "Captured {} to {}",
        config.device.display(),
        config.dest.display()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AppError;
    use crate::geometry::DeviceGeometry;
    use std::fs;
    use std::io::Write;
    use std::path::{Path, PathBuf};

    fn write_device(path: &Path, contents: &[u8]) {
        fs::File::create(path).unwrap().write_all(contents).unwrap();
    }

    fn explicit(width: u32, height: u32, stride: u32) -> GeometrySource {
        GeometrySource::Explicit(DeviceGeometry::new(width, height, stride).unwrap())
    }

    fn config(device: PathBuf, dest: PathBuf, geometry: GeometrySource) -> Config {
        Config {
            device,
            dest,
            quality: 100,
            geometry,
        }
    }

    #[test]
    fn end_to_end_swaps_channels_and_writes_once() {
        let dir = tempfile::tempdir().unwrap();
        let device = dir.path().join("fb");
        let dest = dir.path().join("shot.png");

        // 2x2 frame, row-major, (R, G, B, A) per pixel.
        write_device(
            &device,
            &[
                1, 2, 3, 4, 5, 6, 7, 8, // row 0
                9, 10, 11, 12, 13, 14, 15, 16, // row 1
            ],
        );

        capture(&config(device, dest.clone(), explicit(2, 2, 8))).unwrap();

        let decoded = image::open(&dest).unwrap().into_rgba8();
        assert_eq!(decoded.get_pixel(0, 0).0, [3, 2, 1, 4]);
        assert_eq!(decoded.get_pixel(1, 0).0, [7, 6, 5, 8]);
        assert_eq!(decoded.get_pixel(0, 1).0, [11, 10, 9, 12]);
        assert_eq!(decoded.get_pixel(1, 1).0, [15, 14, 13, 16]);
    }

    #[test]
    fn padded_rows_do_not_shear_the_image() {
        let dir = tempfile::tempdir().unwrap();
        let device = dir.path().join("fb");
        let dest = dir.path().join("shot.png");

        // One pixel per row, 8-byte stride: padding sits between rows.
        write_device(
            &device,
            &[
                1, 2, 3, 4, 0xEE, 0xEE, 0xEE, 0xEE, //
                9, 10, 11, 12, 0xEE, 0xEE, 0xEE, 0xEE,
            ],
        );

        capture(&config(device, dest.clone(), explicit(1, 2, 8))).unwrap();

        let decoded = image::open(&dest).unwrap().into_rgba8();
        assert_eq!(decoded.get_pixel(0, 0).0, [3, 2, 1, 4]);
        assert_eq!(decoded.get_pixel(0, 1).0, [11, 10, 9, 12]);
    }

    #[test]
    fn short_device_contents_abort_before_writing() {
        let dir = tempfile::tempdir().unwrap();
        let device = dir.path().join("fb");
        let dest = dir.path().join("shot.png");

        // 15 bytes where 2x2 at stride 8 needs 16.
        write_device(&device, &[0u8; 15]);

        let err = capture(&config(device, dest.clone(), explicit(2, 2, 8))).unwrap_err();
        assert!(matches!(
            err,
            AppError::ShortRead {
                expected: 16,
                actual: 15,
            }
        ));
        assert!(!dest.exists());
    }

    #[test]
    fn missing_device_aborts_before_writing() {
        let dir = tempfile::tempdir().unwrap();
        let dest = dir.path().join("shot.png");

        let err = capture(&config(
            dir.path().join("no_such_fb"),
            dest.clone(),
            explicit(2, 2, 8),
        ))
        .unwrap_err();
        assert!(matches!(err, AppError::DeviceOpen { .. }));
        assert!(!dest.exists());
    }

    #[test]
    fn creates_destination_directories_before_device_io() {
        let dir = tempfile::tempdir().unwrap();
        let device = dir.path().join("fb");
        let dest = dir.path().join("screens/today/shot.png");
        write_device(&device, &[0u8; 16]);

        capture(&config(device, dest.clone(), explicit(2, 2, 8))).unwrap();
        assert!(dest.exists());
    }

    #[test]
    fn unwritable_destination_parent_fails_without_touching_the_device() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("blocker");
        fs::File::create(&blocker).unwrap();

        // The device path does not exist; a Filesystem error proves the
        // directory check ran first.
        let err = capture(&config(
            dir.path().join("no_such_fb"),
            blocker.join("shot.png"),
            explicit(2, 2, 8),
        ))
        .unwrap_err();
        assert!(matches!(err, AppError::Filesystem { .. }));
    }
}
