// External crate imports, alphabetized
use clap::Parser;
use std::path::PathBuf;

/// Capture the current framebuffer contents to a compressed image file.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Destination image file; the format is inferred from the extension
    #[arg(short = 'f', long)]
    pub image_path: PathBuf,

    /// Screen width in pixels (explicit geometry)
    #[arg(short = 'w', long)]
    pub width: Option<u32>,

    /// Screen height in pixels (explicit geometry)
    #[arg(short = 't', long)]
    pub height: Option<u32>,

    /// Bytes per scanline (explicit geometry)
    #[arg(short = 'l', long)]
    pub line_length: Option<u32>,

    /// Framebuffer device to capture
    #[arg(short = 'd', long)]
    pub device: Option<PathBuf>,

    /// JPEG quality
    #[arg(short = 'q', long, value_parser = clap::value_parser!(u8).range(0..=100))]
    pub quality: Option<u8>,

    /// Optional TOML configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_the_original_option_set() {
        let args = Args::parse_from([
            "fb2image",
            "-f",
            "/application/images/screenshot.jpg",
            "-w",
            "1280",
            "-t",
            "800",
            "-l",
            "5120",
        ]);
        assert_eq!(
            args.image_path,
            PathBuf::from("/application/images/screenshot.jpg")
        );
        assert_eq!(args.width, Some(1280));
        assert_eq!(args.height, Some(800));
        assert_eq!(args.line_length, Some(5120));
        assert!(args.device.is_none());
    }

    #[test]
    fn destination_is_required() {
        assert!(Args::try_parse_from(["fb2image"]).is_err());
    }

    #[test]
    fn quality_outside_percent_range_is_rejected() {
        assert!(Args::try_parse_from(["fb2image", "-f", "a.jpg", "-q", "101"]).is_err());
        let args = Args::parse_from(["fb2image", "-f", "a.jpg", "-q", "85"]);
        assert_eq!(args.quality, Some(85));
    }
}
