//! Audio engine — renders a whole song config to a mastered stereo buffer.
//!
//! The pipeline is single-threaded and single-pass: compose the score,
//! synthesize the drum kernels once, render each pitched part into its own
//! mono buffer, then mix, glue, place drums, and master. A render either
//! completes deterministically or fails fast on an invalid config.

use crate::config::SongConfig;
use crate::dsp::drums::DrumKit;
use crate::dsp::envelope::EnvelopeShape;
use crate::dsp::mixer::StereoMixer;
use crate::dsp::notes::render_notes;
use crate::dsp::oscillator::Waveform;
use crate::error::RenderError;
use crate::score::compose;

/// Fixed voicing for the chord part: mellow triangle under a dark low-pass.
const CHORD_ENV: EnvelopeShape = EnvelopeShape {
    attack: 0.03,
    decay: 0.12,
    sustain: 0.6,
    release: 0.3,
};
const CHORD_CUTOFF: f64 = 1_800.0;

/// Bass: plucky sine kept well below the chords.
const BASS_ENV: EnvelopeShape = EnvelopeShape {
    attack: 0.005,
    decay: 0.05,
    sustain: 0.5,
    release: 0.08,
};
const BASS_CUTOFF: f64 = 200.0;

/// Melody: soft sine, slightly brighter.
const MELODY_ENV: EnvelopeShape = EnvelopeShape {
    attack: 0.01,
    decay: 0.08,
    sustain: 0.5,
    release: 0.2,
};
const MELODY_CUTOFF: f64 = 2_600.0;

// Mix gains and pans: chords slightly left, bass center, melody slightly
// right; drums stay center.
const CHORD_GAIN: f64 = 0.7;
const CHORD_PAN: f64 = -0.1;
const BASS_GAIN: f64 = 0.9;
const BASS_PAN: f64 = 0.0;
const MELODY_GAIN: f64 = 0.6;
const MELODY_PAN: f64 = 0.1;
const KICK_GAIN: f64 = 0.9;
const SNARE_GAIN: f64 = 0.5;

/// Saturation drive for the musical subtotal before drums are added.
const GLUE_DRIVE: f64 = 1.05;

/// The offline rendering engine.
pub struct AudioEngine {
    config: SongConfig,
}

impl AudioEngine {
    pub fn new(config: SongConfig) -> Self {
        AudioEngine { config }
    }

    pub fn config(&self) -> &SongConfig {
        &self.config
    }

    /// Render the full song to interleaved stereo f32 samples in [-1, 1].
    pub fn render(&self) -> Result<Vec<f32>, RenderError> {
        self.config.validate()?;
        let config = &self.config;

        let score = compose(config);
        let kit = DrumKit::synthesize(config);

        let chords = render_notes(
            &score.chords,
            Waveform::Triangle,
            CHORD_CUTOFF,
            &CHORD_ENV,
            config,
        );
        let bass = render_notes(&score.bass, Waveform::Sine, BASS_CUTOFF, &BASS_ENV, config);
        let melody = render_notes(
            &score.melody,
            Waveform::Sine,
            MELODY_CUTOFF,
            &MELODY_ENV,
            config,
        );

        let mut mixer = StereoMixer::new(config.total_samples(), config.sample_rate);
        mixer.add_part(&chords, CHORD_GAIN, CHORD_PAN);
        mixer.add_part(&bass, BASS_GAIN, BASS_PAN);
        mixer.add_part(&melody, MELODY_GAIN, MELODY_PAN);

        // Glue the musical subtotal only; the drum kernels were already
        // saturated at synthesis time.
        mixer.glue(GLUE_DRIVE);

        for &t in &score.kick_onsets {
            mixer.place(&kit.kick, t, KICK_GAIN, 0.0);
        }
        for &t in &score.snare_onsets {
            mixer.place(&kit.snare, t, SNARE_GAIN, 0.0);
        }

        Ok(mixer.master(config.master_gain, config.target_peak))
    }

    /// Render to interleaved stereo i16 PCM (for WAV export).
    pub fn render_pcm_i16(&self) -> Result<Vec<i16>, RenderError> {
        let stereo = self.render()?;
        Ok(stereo
            .iter()
            .map(|&s| (s as f64 * 32_767.0).round().clamp(-32_768.0, 32_767.0) as i16)
            .collect())
    }
}
