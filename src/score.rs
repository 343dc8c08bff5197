//! Score — the deterministic bar-by-bar arrangement.
//!
//! `compose` expands a `SongConfig` into time-stamped event lists: drum
//! trigger times plus pitched note events for chords, bass, and melody.
//! The musical material is fixed (a four-bar lofi progression with matching
//! bass roots and a minor-pentatonic melody scale), so the arrangement is
//! fully reproducible from the config alone.

use serde::{Deserialize, Serialize};

use crate::config::SongConfig;

/// One pitched note, scheduled in seconds. Immutable once scheduled.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct NoteEvent {
    /// Onset time in seconds from the start of the song.
    pub onset: f64,
    /// Sustained duration in seconds (the release tail is added by the
    /// note renderer).
    pub duration: f64,
    /// Fractional MIDI pitch, 69 = A440.
    pub pitch: f64,
    /// Velocity as a 0..1 gain factor.
    pub velocity: f64,
}

/// The full arrangement: drum trigger times and per-part note events.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Score {
    pub kick_onsets: Vec<f64>,
    pub snare_onsets: Vec<f64>,
    pub chords: Vec<NoteEvent>,
    pub bass: Vec<NoteEvent>,
    pub melody: Vec<NoteEvent>,
}

/// Four-bar chord progression (Am7, Em7, Dm7, G7), cycled via `bar % 4`.
const PROGRESSION: [[f64; 4]; 4] = [
    [57.0, 60.0, 64.0, 67.0],
    [52.0, 55.0, 59.0, 62.0],
    [50.0, 53.0, 57.0, 60.0],
    [55.0, 59.0, 62.0, 65.0],
];

/// Bass root for each progression step.
const BASS_ROOTS: [f64; 4] = [45.0, 40.0, 38.0, 43.0];

/// A minor pentatonic, as offsets above A4.
const PENTATONIC: [f64; 5] = [0.0, 3.0, 5.0, 7.0, 10.0];

/// Build the complete arrangement for the configured song length.
///
/// All timestamps derive from the bar index and tempo; the grid is
/// perfectly quantized (the config's swing amount is not applied).
pub fn compose(config: &SongConfig) -> Score {
    let beat = config.beat_seconds();

    let mut score = Score {
        kick_onsets: Vec::new(),
        snare_onsets: Vec::new(),
        chords: Vec::new(),
        bass: Vec::new(),
        melody: Vec::new(),
    };

    for bar in 0..config.bars {
        let base = bar as f64 * config.beats_per_bar as f64 * beat;
        let step = (bar % 4) as usize;
        let chord = &PROGRESSION[step];
        let root = BASS_ROOTS[step];

        // Kick on beats 1 and 3, snare on 2 and 4.
        score.kick_onsets.push(base);
        score.kick_onsets.push(base + 2.0 * beat);
        score.snare_onsets.push(base + beat);
        score.snare_onsets.push(base + 3.0 * beat);

        // Three sustained chord tones spanning most of the bar.
        for &pitch in &chord[..3] {
            score.chords.push(NoteEvent {
                onset: base,
                duration: 3.5 * beat,
                pitch,
                velocity: 0.4,
            });
        }

        // Bass: root on the off-beat of 1, octave on the off-beat of 3.
        score.bass.push(NoteEvent {
            onset: base + 0.5 * beat,
            duration: 0.3,
            pitch: root,
            velocity: 0.6,
        });
        score.bass.push(NoteEvent {
            onset: base + 2.5 * beat,
            duration: 0.3,
            pitch: root + 12.0,
            velocity: 0.5,
        });

        // Melody: two gentle notes per bar, walking the pentatonic.
        for beat_index in [0u32, 2u32] {
            let degree = ((bar + beat_index) % 5) as usize;
            score.melody.push(NoteEvent {
                onset: base + beat_index as f64 * beat,
                duration: 0.6,
                pitch: 69.0 + PENTATONIC[degree],
                velocity: 0.35,
            });
        }
    }

    score
}
