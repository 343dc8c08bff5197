//! Stereo mixer and mastering — panning, summation, glue, peak limiting.

use crate::dsp::filter::soft_clip;

/// Constant-power pan law. `pan` is clamped to [-1, 1]; the returned
/// left/right gains satisfy `l² + r² = 1` so perceived loudness stays
/// constant across the pan range.
pub fn pan_gains(pan: f64) -> (f64, f64) {
    let pan = pan.clamp(-1.0, 1.0);
    let angle = (pan + 1.0) * std::f64::consts::PI / 4.0;
    (angle.cos(), angle.sin())
}

/// Stereo accumulator for one render.
///
/// The mixer exclusively owns the left/right buffers; parts and drum
/// kernels are accumulated in, then `master` consumes the mixer and hands
/// the finished interleaved buffer to the caller.
#[derive(Debug, Clone)]
pub struct StereoMixer {
    left: Vec<f64>,
    right: Vec<f64>,
    sample_rate: f64,
}

impl StereoMixer {
    pub fn new(num_samples: usize, sample_rate: f64) -> Self {
        StereoMixer {
            left: vec![0.0; num_samples],
            right: vec![0.0; num_samples],
            sample_rate,
        }
    }

    pub fn len(&self) -> usize {
        self.left.len()
    }

    pub fn is_empty(&self) -> bool {
        self.left.is_empty()
    }

    /// Place a fixed-length kernel (a drum hit) at a trigger time,
    /// truncating at the end of the buffer.
    pub fn place(&mut self, kernel: &[f64], onset_seconds: f64, gain: f64, pan: f64) {
        let start = (onset_seconds * self.sample_rate) as usize;
        let end = (start + kernel.len()).min(self.left.len());
        if end <= start {
            return;
        }
        let (l, r) = pan_gains(pan);
        for i in 0..end - start {
            let s = kernel[i] * gain;
            self.left[start + i] += s * l;
            self.right[start + i] += s * r;
        }
    }

    /// Accumulate a full-length mono part with a mix gain and pan position.
    pub fn add_part(&mut self, part: &[f64], gain: f64, pan: f64) {
        let (l, r) = pan_gains(pan);
        let len = part.len().min(self.left.len());
        for i in 0..len {
            let s = part[i] * gain;
            self.left[i] += s * l;
            self.right[i] += s * r;
        }
    }

    /// Gentle glue: soft-clip the accumulated mix at `drive` gain.
    ///
    /// Applied to the musical subtotal before the drums are placed, so the
    /// drum kernels keep the saturation they received at synthesis time.
    pub fn glue(&mut self, drive: f64) {
        for s in self.left.iter_mut().chain(self.right.iter_mut()) {
            *s = soft_clip(*s * drive);
        }
    }

    /// Master the mix: apply the master gain, normalize the absolute peak
    /// to `target_peak` (when any signal is present), and interleave.
    pub fn master(mut self, master_gain: f64, target_peak: f64) -> Vec<f32> {
        for s in self.left.iter_mut().chain(self.right.iter_mut()) {
            *s *= master_gain;
        }

        let peak = self
            .left
            .iter()
            .chain(self.right.iter())
            .fold(0.0_f64, |m, &s| m.max(s.abs()));
        let scale = if peak > 0.0 { target_peak / peak } else { 1.0 };

        let mut out = Vec::with_capacity(self.left.len() * 2);
        for i in 0..self.left.len() {
            out.push((self.left[i] * scale) as f32);
            out.push((self.right[i] * scale) as f32);
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pan_law_is_constant_power() {
        for pan in [-1.0, -0.5, -0.1, 0.0, 0.1, 0.5, 1.0, 3.0, -7.0] {
            let (l, r) = pan_gains(pan);
            let power = l * l + r * r;
            assert!(
                (power - 1.0).abs() < 1e-12,
                "l² + r² should be 1 at pan {pan}, got {power}"
            );
        }
    }

    #[test]
    fn center_pan_is_balanced() {
        let (l, r) = pan_gains(0.0);
        assert!((l - r).abs() < 1e-12, "center pan: {l} vs {r}");
    }

    #[test]
    fn hard_pans_silence_one_side() {
        let (l, r) = pan_gains(-1.0);
        assert!((l - 1.0).abs() < 1e-12 && r.abs() < 1e-12);
        let (l, r) = pan_gains(1.0);
        assert!(l.abs() < 1e-12 && (r - 1.0).abs() < 1e-12);
    }

    #[test]
    fn place_truncates_at_buffer_end() {
        let mut mixer = StereoMixer::new(100, 100.0);
        let kernel = vec![1.0; 50];
        mixer.place(&kernel, 0.8, 1.0, 0.0); // starts at sample 80
        let out = mixer.master(1.0, 1.0);
        assert_eq!(out.len(), 200);
        assert!(out[2 * 79].abs() < 1e-9, "silent before the hit");
        assert!(out[2 * 80].abs() > 0.0, "hit is placed");
    }

    #[test]
    fn place_past_end_is_ignored() {
        let mut mixer = StereoMixer::new(100, 100.0);
        mixer.place(&[1.0; 10], 5.0, 1.0, 0.0);
        let out = mixer.master(1.0, 1.0);
        assert!(out.iter().all(|&s| s == 0.0));
    }

    #[test]
    fn parts_accumulate() {
        let mut mixer = StereoMixer::new(4, 100.0);
        mixer.add_part(&[0.1, 0.2, 0.3, 0.4], 1.0, 0.0);
        mixer.add_part(&[0.1, 0.2, 0.3, 0.4], 1.0, 0.0);
        let (l, _) = pan_gains(0.0);
        let out = mixer.master(1.0, 0.8 * l); // peak is 0.8*l before normalize
        assert!((out[6] as f64 - 0.8 * l).abs() < 1e-6);
    }

    #[test]
    fn glue_bounds_the_mix() {
        let mut mixer = StereoMixer::new(3, 100.0);
        mixer.add_part(&[5.0, -5.0, 0.1], 1.0, 0.0);
        mixer.glue(1.05);
        let out = mixer.master(1.0, 0.89);
        for &s in &out {
            assert!(s.abs() <= 1.0);
        }
    }

    #[test]
    fn master_normalizes_to_target_peak() {
        let mut mixer = StereoMixer::new(8, 100.0);
        mixer.add_part(&[0.05, 0.2, -0.1, 0.15, 0.0, 0.0, 0.01, -0.02], 1.0, -0.3);
        let out = mixer.master(0.9, 0.89);
        let peak = out.iter().fold(0.0_f32, |m, &s| m.max(s.abs()));
        assert!(
            (peak - 0.89).abs() < 1e-6,
            "peak should land on the target, got {peak}"
        );
    }

    #[test]
    fn silent_mix_stays_silent() {
        let mixer = StereoMixer::new(16, 100.0);
        let out = mixer.master(0.9, 0.89);
        assert!(out.iter().all(|&s| s == 0.0), "no rescale when peak is zero");
    }
}
