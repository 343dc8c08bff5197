//! DSP Engine — Pure Rust offline audio synthesis.
//!
//! All DSP runs over finite, pre-sized buffers in a single synchronous
//! pass: oscillators and envelopes feed the note renderer, the percussion
//! synthesizer builds its kernels once, and the mixer sums everything into
//! the mastered stereo output.

pub mod drums;
pub mod engine;
pub mod envelope;
pub mod filter;
pub mod mixer;
pub mod notes;
pub mod oscillator;
pub mod renderer;
