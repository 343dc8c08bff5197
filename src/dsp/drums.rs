//! Percussion synthesizer — kick, snare, and hat voice recipes.
//!
//! Each drum voice is synthesized once as a fixed-length mono kernel and
//! reused by reference at every trigger time. Noise-based voices draw from
//! a single `StdRng` seeded from the song config, so a render is
//! reproducible down to the bit.

use std::f64::consts::PI;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::config::SongConfig;
use crate::dsp::envelope::exp_decay;
use crate::dsp::filter::{high_pass, low_pass, soft_clip};

/// Precomputed drum kernels for one render.
#[derive(Debug, Clone)]
pub struct DrumKit {
    pub kick: Vec<f64>,
    pub snare: Vec<f64>,
    pub closed_hat: Vec<f64>,
    pub open_hat: Vec<f64>,
}

impl DrumKit {
    /// Synthesize every drum voice up front from the config's sample rate
    /// and noise seed.
    pub fn synthesize(config: &SongConfig) -> DrumKit {
        let sr = config.sample_rate;
        let mut rng = StdRng::seed_from_u64(config.noise_seed);
        DrumKit {
            kick: make_kick(sr),
            snare: make_snare(sr, &mut rng),
            closed_hat: make_hat(sr, &mut rng, false),
            open_hat: make_hat(sr, &mut rng, true),
        }
    }
}

/// Kick: 0.5s sine with an exponential 110→50 Hz pitch sweep over 0.2s.
///
/// The instantaneous phase is the running integral of the swept frequency;
/// the amplitude follows a 0.18s exponential decay, pushed through the
/// soft clipper at 1.3x gain.
fn make_kick(sample_rate: f64) -> Vec<f64> {
    let len = (0.5 * sample_rate) as usize;
    let (f0, f1) = (110.0_f64, 50.0);

    let env = exp_decay(len, 0.18, sample_rate);
    let mut phase = 0.0;
    let mut out = Vec::with_capacity(len);
    for i in 0..len {
        let t = i as f64 / sample_rate;
        let freq = f0 * (f1 / f0).powf(t / 0.2);
        phase += freq / sample_rate;
        let body = (2.0 * PI * phase).sin();
        out.push(soft_clip(body * env[i] * 1.3) * 0.9);
    }
    out
}

/// Snare: 0.2s blend of a decaying 220 Hz tone (30%) and band-limited
/// noise (70%), soft-clipped at 1.2x gain.
fn make_snare(sample_rate: f64, rng: &mut StdRng) -> Vec<f64> {
    let len = (0.2 * sample_rate) as usize;

    let tone_env = exp_decay(len, 0.07, sample_rate);
    let tone: Vec<f64> = (0..len)
        .map(|i| {
            let t = i as f64 / sample_rate;
            (2.0 * PI * 220.0 * t).sin() * tone_env[i]
        })
        .collect();

    let raw: Vec<f64> = (0..len).map(|_| rng.gen_range(-1.0..1.0)).collect();
    let band = high_pass(&low_pass(&raw, 2_000.0, sample_rate), 300.0, sample_rate);
    let noise_env = exp_decay(len, 0.05, sample_rate);

    (0..len)
        .map(|i| {
            let blend = tone[i] * 0.3 + band[i] * noise_env[i] * 0.7;
            soft_clip(blend * 1.2) * 0.6
        })
        .collect()
}

/// Hat: white noise high-passed at 5 kHz under a fast exponential decay.
/// Closed = 0.05s kernel / 0.02s decay, open = 0.18s / 0.07s.
fn make_hat(sample_rate: f64, rng: &mut StdRng, open: bool) -> Vec<f64> {
    let (seconds, decay) = if open { (0.18, 0.07) } else { (0.05, 0.02) };
    let len = (seconds * sample_rate) as usize;

    let raw: Vec<f64> = (0..len).map(|_| rng.gen_range(-1.0..1.0)).collect();
    let bright = high_pass(&raw, 5_000.0, sample_rate);
    let env = exp_decay(len, decay, sample_rate);

    (0..len).map(|i| bright[i] * env[i] * 0.4).collect()
}
