use clap::Parser;
use fb2image::{capture, cli::Args, config::Config, logging};
use log::error;
use std::process::ExitCode;

fn main() -> ExitCode {
    // Parse command-line arguments
    let args = Args::parse();

    // Setup logging
    if let Err(e) = logging::setup_logging(args.debug as u8) {
        eprintln!("Failed to initialize logging: {}", e);
        return ExitCode::from(1);
    }
    logging::log_app_start(env!("CARGO_PKG_VERSION"));

    // Resolve configuration and run the capture pipeline
    let result = Config::load(&args).and_then(|config| capture(&config));

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            ExitCode::from(e.exit_code())
        }
    }
}
