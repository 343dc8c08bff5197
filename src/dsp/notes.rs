//! Note renderer — places pitched events into a song-length mono buffer.

use crate::config::SongConfig;
use crate::dsp::envelope::{adsr_curve, EnvelopeShape};
use crate::dsp::filter::low_pass;
use crate::dsp::oscillator::{midi_to_frequency, Waveform};
use crate::score::NoteEvent;

/// Render a list of note events into one mono part buffer of the song's
/// total length.
///
/// Each event renders `duration + release` seconds of oscillator at the
/// event's pitch, shaped by the ADSR sized to the event's duration, passed
/// through the one-pole low-pass at `cutoff_hz`, scaled by velocity, and
/// accumulated at the onset offset. Events are independent and may overlap;
/// anything past the end of the buffer is silently truncated.
pub fn render_notes(
    events: &[NoteEvent],
    waveform: Waveform,
    cutoff_hz: f64,
    shape: &EnvelopeShape,
    config: &SongConfig,
) -> Vec<f64> {
    let sr = config.sample_rate;
    let total = config.total_samples();
    let mut out = vec![0.0; total];

    for ev in events {
        let n = ((ev.duration + shape.release) * sr) as usize;
        let start = (ev.onset * sr) as usize;
        let end = (start + n).min(total);
        if end <= start {
            continue;
        }
        let len = end - start;

        let freq = midi_to_frequency(ev.pitch);
        let mut sig = waveform.render(freq, len, sr);
        let env = adsr_curve(len, shape, ev.duration, sr);
        for i in 0..len {
            sig[i] *= env[i];
        }
        let sig = low_pass(&sig, cutoff_hz, sr);
        for i in 0..len {
            out[start + i] += sig[i] * ev.velocity;
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config() -> SongConfig {
        SongConfig {
            sample_rate: 8_000.0,
            tempo: 120.0,
            beats_per_bar: 2,
            bars: 1, // 1 second, 8000 samples
            ..SongConfig::default()
        }
    }

    fn test_shape() -> EnvelopeShape {
        EnvelopeShape {
            attack: 0.01,
            decay: 0.05,
            sustain: 0.5,
            release: 0.1,
        }
    }

    fn note(onset: f64, duration: f64, velocity: f64) -> NoteEvent {
        NoteEvent {
            onset,
            duration,
            pitch: 69.0,
            velocity,
        }
    }

    #[test]
    fn empty_events_render_silence() {
        let out = render_notes(&[], Waveform::Sine, 1_000.0, &test_shape(), &test_config());
        assert_eq!(out.len(), 8_000);
        assert!(out.iter().all(|&s| s == 0.0));
    }

    #[test]
    fn buffer_length_is_song_length() {
        let events = [note(0.0, 0.2, 0.8)];
        let out = render_notes(&events, Waveform::Sine, 1_000.0, &test_shape(), &test_config());
        assert_eq!(out.len(), 8_000);
    }

    #[test]
    fn note_produces_sound_in_its_window() {
        let events = [note(0.25, 0.2, 0.8)];
        let out = render_notes(&events, Waveform::Sine, 1_000.0, &test_shape(), &test_config());

        let before = out[..1_990].iter().fold(0.0_f64, |m, &s| m.max(s.abs()));
        let during = out[2_000..3_600].iter().fold(0.0_f64, |m, &s| m.max(s.abs()));
        assert_eq!(before, 0.0, "no sound before the onset");
        assert!(during > 0.01, "note should be audible, peak {during}");
    }

    #[test]
    fn event_past_buffer_end_is_skipped() {
        let events = [note(10.0, 0.2, 0.8)];
        let out = render_notes(&events, Waveform::Sine, 1_000.0, &test_shape(), &test_config());
        assert!(out.iter().all(|&s| s == 0.0));
    }

    #[test]
    fn event_at_buffer_edge_truncates() {
        // Starts 50ms before the end; duration + release overruns.
        let events = [note(0.95, 0.2, 0.8)];
        let out = render_notes(&events, Waveform::Sine, 1_000.0, &test_shape(), &test_config());
        assert_eq!(out.len(), 8_000, "no write past bounds");
        let tail = out[7_600..].iter().fold(0.0_f64, |m, &s| m.max(s.abs()));
        assert!(tail > 0.0, "truncated note still renders its head");
    }

    #[test]
    fn overlapping_events_sum() {
        let one = [note(0.1, 0.3, 0.5)];
        let two = [note(0.1, 0.3, 0.5), note(0.1, 0.3, 0.5)];
        let config = test_config();
        let shape = test_shape();
        let a = render_notes(&one, Waveform::Sine, 1_000.0, &shape, &config);
        let b = render_notes(&two, Waveform::Sine, 1_000.0, &shape, &config);
        for i in 0..a.len() {
            assert!(
                (b[i] - 2.0 * a[i]).abs() < 1e-9,
                "identical overlapping notes should double, sample {i}"
            );
        }
    }

    #[test]
    fn velocity_scales_output() {
        let config = test_config();
        let shape = test_shape();
        let soft = render_notes(&[note(0.0, 0.3, 0.25)], Waveform::Triangle, 0.0, &shape, &config);
        let loud = render_notes(&[note(0.0, 0.3, 0.5)], Waveform::Triangle, 0.0, &shape, &config);
        for i in 0..soft.len() {
            assert!((loud[i] - 2.0 * soft[i]).abs() < 1e-9);
        }
    }

    #[test]
    fn zero_envelope_renders_silence() {
        let shape = EnvelopeShape {
            attack: 0.0,
            decay: 0.0,
            sustain: 0.5,
            release: 0.0,
        };
        // duration rounds to zero sustain samples as well
        let events = [note(0.0, 0.0, 1.0)];
        let out = render_notes(&events, Waveform::Sine, 1_000.0, &shape, &test_config());
        assert!(out.iter().all(|&s| s == 0.0), "silent note, not an error");
    }
}
