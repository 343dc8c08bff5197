//! Envelope generators — ADSR gain curves and exponential decays.
//!
//! Unlike a gated realtime envelope, these produce a whole curve up front:
//! the note renderer knows the full length of every event before it plays,
//! so the envelope is just a precomputed gain buffer.

use serde::{Deserialize, Serialize};

/// Attack/decay/sustain/release shape, paired with an event's duration to
/// produce a per-sample gain curve.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct EnvelopeShape {
    /// Attack time in seconds.
    pub attack: f64,
    /// Decay time in seconds.
    pub decay: f64,
    /// Sustain level [0, 1].
    pub sustain: f64,
    /// Release time in seconds.
    pub release: f64,
}

/// Build an ADSR gain curve of exactly `len` samples.
///
/// The four segments ramp 0→1, 1→sustain, hold at sustain for
/// `sustain_seconds`, then ramp sustain→0 (inclusive of the final zero).
/// A combined segment length of zero yields a silent all-zero curve.
/// If the segments are shorter than `len` the remainder is zero-padded;
/// if longer, the curve is truncated to `len` — short notes clip off the
/// release tail by design.
pub fn adsr_curve(
    len: usize,
    shape: &EnvelopeShape,
    sustain_seconds: f64,
    sample_rate: f64,
) -> Vec<f64> {
    let a = (shape.attack * sample_rate) as usize;
    let d = (shape.decay * sample_rate) as usize;
    let s = (sustain_seconds.max(0.0) * sample_rate) as usize;
    let r = (shape.release * sample_rate) as usize;
    let total = a + d + s + r;
    if total == 0 {
        return vec![0.0; len];
    }

    let mut env = vec![0.0; total];
    for i in 0..a {
        env[i] = i as f64 / a as f64;
    }
    for i in 0..d {
        env[a + i] = 1.0 - (1.0 - shape.sustain) * (i as f64 / d as f64);
    }
    for i in 0..s {
        env[a + d + i] = shape.sustain;
    }
    if r > 0 {
        let start = a + d + s;
        if r == 1 {
            env[start] = shape.sustain;
        } else {
            for i in 0..r {
                env[start + i] = shape.sustain * (1.0 - i as f64 / (r - 1) as f64);
            }
        }
    }

    env.resize(len, 0.0);
    env
}

/// Exponential decay curve: `exp(-t / time_constant)`.
///
/// Used as the amplitude envelope for drum voices.
pub fn exp_decay(len: usize, time_constant: f64, sample_rate: f64) -> Vec<f64> {
    (0..len)
        .map(|i| (-(i as f64 / sample_rate) / time_constant).exp())
        .collect()
}
