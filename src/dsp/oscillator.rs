//! Waveform primitives — pitch conversion and basic oscillators.

use std::f64::consts::PI;

/// Convert a fractional MIDI pitch to frequency using equal temperament.
///
/// A4 (MIDI 69) = 440 Hz. Formula: `440 * 2^((midi - 69) / 12)`.
pub fn midi_to_frequency(midi: f64) -> f64 {
    440.0 * (2.0_f64).powf((midi - 69.0) / 12.0)
}

/// Supported waveform shapes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Waveform {
    Sine,
    Triangle,
}

impl Waveform {
    /// Parse a waveform name. Unknown names fall back to sine — an
    /// explicit default, not an error.
    pub fn parse(name: &str) -> Waveform {
        match name {
            "tri" | "triangle" => Waveform::Triangle,
            "sine" => Waveform::Sine,
            _ => Waveform::Sine,
        }
    }

    /// Render `num_samples` of this waveform at the given frequency.
    ///
    /// The triangle is a folded sawtooth phase: `2*|2*frac(f*t) - 1| - 1`.
    pub fn render(self, frequency: f64, num_samples: usize, sample_rate: f64) -> Vec<f64> {
        (0..num_samples)
            .map(|i| {
                let t = i as f64 / sample_rate;
                match self {
                    Waveform::Sine => (2.0 * PI * frequency * t).sin(),
                    Waveform::Triangle => {
                        2.0 * (2.0 * (frequency * t).fract() - 1.0).abs() - 1.0
                    }
                }
            })
            .collect()
    }
}
