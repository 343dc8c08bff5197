//! One-pole recursive filters and the tanh soft clipper.
//!
//! Each call processes one finite buffer independently; no filter state
//! crosses event boundaries. A cutoff of zero or below is a documented
//! bypass (identity), used when a voice wants no filtering.

use std::f64::consts::PI;

/// Single-stage recursive low-pass.
///
/// `rc = 1/(2π·cutoff)`, `α = dt/(rc + dt)`;
/// `y[0] = x[0]`, `y[i] = y[i-1] + α·(x[i] - y[i-1])`.
pub fn low_pass(input: &[f64], cutoff: f64, sample_rate: f64) -> Vec<f64> {
    if cutoff <= 0.0 || input.is_empty() {
        return input.to_vec();
    }
    let rc = 1.0 / (2.0 * PI * cutoff);
    let dt = 1.0 / sample_rate;
    let alpha = dt / (rc + dt);

    let mut out = vec![0.0; input.len()];
    out[0] = input[0];
    for i in 1..input.len() {
        out[i] = out[i - 1] + alpha * (input[i] - out[i - 1]);
    }
    out
}

/// Single-stage recursive high-pass.
///
/// Same `rc`, `α = rc/(rc + dt)`;
/// `y[0] = x[0]`, `y[i] = α·(y[i-1] + x[i] - x[i-1])`.
pub fn high_pass(input: &[f64], cutoff: f64, sample_rate: f64) -> Vec<f64> {
    if cutoff <= 0.0 || input.is_empty() {
        return input.to_vec();
    }
    let rc = 1.0 / (2.0 * PI * cutoff);
    let dt = 1.0 / sample_rate;
    let alpha = rc / (rc + dt);

    let mut out = vec![0.0; input.len()];
    out[0] = input[0];
    for i in 1..input.len() {
        out[i] = alpha * (out[i - 1] + input[i] - input[i - 1]);
    }
    out
}

/// Soft clipper using tanh to limit peaks without hard digital clipping.
pub fn soft_clip(x: f64) -> f64 {
    x.tanh()
}
