pub mod aliasing; // Excluded sampling frequencies and folded band images
pub mod config;
pub mod dsp;
pub mod error;
pub mod io;
pub mod pipeline; // Fs -> DemoFrame
pub mod present; // Presenter seam between the numeric core and any UI
pub mod synth; // Closed-form test signals

pub use config::DemoConfig;
pub use error::{DemoError, Result};
pub use pipeline::{DemoFrame, SamplingDemo, SamplingRate};
pub use present::Presenter;
