use log::info;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::cli::Args;
use crate::device::DEFAULT_DEVICE;
use crate::error::{AppError, Result};
use crate::geometry::GeometrySource;

const DEFAULT_QUALITY: u8 = 100;

/// Optional on-disk settings. Command-line arguments override anything
/// found here.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    #[serde(default)]
    pub device: DeviceSection,
    #[serde(default)]
    pub output: OutputSection,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DeviceSection {
    pub path: Option<PathBuf>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OutputSection {
    pub quality: Option<u8>,
}

impl FileConfig {
    pub fn from_path(path: &Path) -> Result<Self> {
        info!("Loading configuration from {}", path.display());
        let contents = fs::read_to_string(path).map_err(|e| {
            AppError::config(format!("failed to read config file {}: {}", path.display(), e))
        })?;
        toml::from_str(&contents).map_err(|e| {
            AppError::config(format!(
                "failed to parse config file {}: {}",
                path.display(),
                e
            ))
        })
    }
}

/// Fully resolved settings for one capture run.
#[derive(Debug)]
pub struct Config {
    pub device: PathBuf,
    pub dest: PathBuf,
    pub quality: u8,
    pub geometry: GeometrySource,
}

impl Config {
    pub fn load(args: &Args) -> Result<Self> {
        let file = match &args.config {
            Some(path) => FileConfig::from_path(path)?,
            None => FileConfig::default(),
        };

        let device = args
            .device
            .clone()
            .or(file.device.path)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DEVICE));

        let quality = args
            .quality
            .or(file.output.quality)
            .unwrap_or(DEFAULT_QUALITY);
        // The CLI parser enforces the range; the config file has to be
        // checked here.
        if quality > 100 {
            return Err(AppError::config(format!(
                "quality must be between 0 and 100, got {}",
                quality
            )));
        }

        let geometry = GeometrySource::from_options(args.width, args.height, args.line_length)?;

        Ok(Self {
            device,
            dest: args.image_path.clone(),
            quality,
            geometry,
        })
    }
}
