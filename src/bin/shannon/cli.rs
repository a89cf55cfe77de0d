//! Command-line argument parsing.

use std::path::PathBuf;

use clap::Parser;
use color_eyre::eyre::{Result as EyreResult, WrapErr};

use shannon_demo::{
    config::{DEFAULT_SAMPLING_RATE_HZ, MAX_SAMPLING_RATE_HZ, MIN_SAMPLING_RATE_HZ},
    DemoConfig, SamplingRate,
};

/// Command line arguments
#[derive(Parser, Debug)]
#[command(name = "shannon")]
#[command(about = "The generalized Shannon theorem for narrowband signals", long_about = None)]
pub struct Args {
    /// Initial sampling frequency in Hz (300-4000)
    #[arg(long, value_name = "HZ", default_value_t = DEFAULT_SAMPLING_RATE_HZ)]
    pub fs: u32,

    /// Hz moved by the left/right keys
    #[arg(long, value_name = "HZ", default_value = "10")]
    pub step: u32,

    /// Hz moved by the up/down keys
    #[arg(long, value_name = "HZ", default_value = "100")]
    pub coarse_step: u32,

    /// How many times a 0.2 s clip loops when played
    #[arg(long, value_name = "N", default_value = "5")]
    pub repeats: u32,

    /// Do not open an audio output device
    #[arg(long)]
    pub no_audio: bool,

    /// Print a text report for --fs and exit
    #[arg(long)]
    pub report: bool,

    /// Write reference and sampled WAV files for --fs into DIR and exit
    #[arg(long, value_name = "DIR")]
    pub export_wav: Option<PathBuf>,

    /// Write logs to this file (the TUI otherwise runs without logging)
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

impl Args {
    /// Whether the terminal UI will take over the screen
    pub fn is_interactive(&self) -> bool {
        !self.report && self.export_wav.is_none()
    }

    /// Build the demo configuration, rejecting an out-of-range --fs
    pub fn to_config(&self) -> EyreResult<DemoConfig> {
        let rate = SamplingRate::new(self.fs).wrap_err_with(|| {
            format!(
                "--fs must be between {} and {} Hz",
                MIN_SAMPLING_RATE_HZ, MAX_SAMPLING_RATE_HZ
            )
        })?;

        Ok(DemoConfig::default()
            .sampling_rate(rate)
            .fine_step(self.step)
            .coarse_step(self.coarse_step)
            .playback_repeats(self.repeats)
            .audio(!self.no_audio && self.is_interactive()))
    }

    /// Set up env_logger; `RUST_LOG` picks the filter, `info` by default.
    ///
    /// Stderr would corrupt the TUI, so interactive runs only log when a
    /// log file is given.
    pub fn init_logging(&self) -> EyreResult<()> {
        let mut builder =
            env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"));

        match &self.log_file {
            Some(path) => {
                let file = std::fs::File::create(path)
                    .wrap_err_with(|| format!("failed to create log file {}", path.display()))?;
                builder.target(env_logger::Target::Pipe(Box::new(file)));
            }
            None if self.is_interactive() => return Ok(()),
            None => {}
        }

        builder.try_init().wrap_err("failed to initialize logger")
    }
}
