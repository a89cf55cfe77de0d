//! shannon - the generalized Shannon theorem in the terminal
//!
//! Run with: cargo run -- --fs 440

mod app;
mod audio;
mod cli;
mod ui;

use clap::Parser;
use color_eyre::eyre::WrapErr;

use app::App;
use cli::Args;
use shannon_demo::{io::wav, present::TextReport, Presenter, SamplingDemo};

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let args = Args::parse();
    args.init_logging()?;
    let config = args.to_config()?;
    let demo = SamplingDemo::default();

    if args.report {
        let frame = demo.run(config.sampling_rate);
        let mut report = TextReport::new(std::io::stdout().lock());
        report.present(&frame).wrap_err("failed to write report")?;
        return Ok(());
    }

    if let Some(dir) = &args.export_wav {
        let frame = demo.run(config.sampling_rate);
        let [reference, sampled] = wav::export_frame(dir, &frame)
            .wrap_err_with(|| format!("failed to export WAV files to {}", dir.display()))?;
        println!("{}", reference.display());
        println!("{}", sampled.display());
        return Ok(());
    }

    log::info!("starting TUI at Fs = {}", config.sampling_rate);
    let terminal = ratatui::init();
    let result = App::new(config, demo).run(terminal);
    ratatui::restore();
    result
}
