//! SongConfig — immutable engine and arrangement parameters.
//!
//! One `SongConfig` value is built up front and passed by reference into
//! every component, so multiple songs or parameter sweeps can render
//! concurrently without shared state.

use serde::{Deserialize, Serialize};

use crate::error::RenderError;

/// Immutable parameters for one rendered song.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SongConfig {
    /// Sample rate in Hz.
    pub sample_rate: f64,
    /// Tempo in beats per minute.
    pub tempo: f64,
    /// Beats per bar.
    pub beats_per_bar: u32,
    /// Number of bars in the song.
    pub bars: u32,
    /// Gain applied to the full mix before peak normalization.
    pub master_gain: f64,
    /// Peak ceiling the mastered mix is normalized to.
    pub target_peak: f64,
    /// Swing amount. Carried from the arrangement config but never applied
    /// to computed onset times; the sequencer produces a quantized grid.
    pub swing: f64,
    /// Seed for the drum noise source. Two renders with the same config
    /// produce bit-identical output.
    pub noise_seed: u64,
}

impl Default for SongConfig {
    fn default() -> Self {
        SongConfig {
            sample_rate: 48_000.0,
            tempo: 78.0,
            beats_per_bar: 4,
            bars: 16,
            master_gain: 0.9,
            target_peak: 0.89,
            swing: 0.05,
            noise_seed: 0x10F1,
        }
    }
}

impl SongConfig {
    /// Duration of one beat in seconds.
    pub fn beat_seconds(&self) -> f64 {
        60.0 / self.tempo
    }

    /// Total song duration in seconds.
    pub fn total_seconds(&self) -> f64 {
        self.bars as f64 * self.beats_per_bar as f64 * self.beat_seconds()
    }

    /// Total sample count. Fixed before any rendering begins and bounds
    /// every buffer write.
    pub fn total_samples(&self) -> usize {
        (self.total_seconds() * self.sample_rate).round() as usize
    }

    /// Check the config for the one fatal condition: values that make the
    /// total-length computation meaningless.
    pub fn validate(&self) -> Result<(), RenderError> {
        if !(self.sample_rate > 0.0) {
            return Err(RenderError::InvalidConfig {
                field: "sample_rate",
                value: self.sample_rate,
            });
        }
        if !(self.tempo > 0.0) {
            return Err(RenderError::InvalidConfig {
                field: "tempo",
                value: self.tempo,
            });
        }
        if self.beats_per_bar == 0 {
            return Err(RenderError::InvalidConfig {
                field: "beats_per_bar",
                value: 0.0,
            });
        }
        if self.bars == 0 {
            return Err(RenderError::InvalidConfig {
                field: "bars",
                value: 0.0,
            });
        }
        Ok(())
    }
}
