// Purpose: closed-form test signals evaluated on arbitrary time grids
// Signals are synthesized analytically, never resampled from another array

pub mod narrowband;

pub use narrowband::NarrowbandSignal;
