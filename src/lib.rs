pub mod config;
pub mod dsp;
pub mod error;
pub mod score;

pub use crate::config::SongConfig;
pub use crate::error::RenderError;

/// The crate version, read from Cargo.toml at compile time.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Render the configured song to interleaved stereo f32 samples in [-1, 1].
pub fn render_song(config: &SongConfig) -> Result<Vec<f32>, RenderError> {
    dsp::engine::AudioEngine::new(config.clone()).render()
}

/// Render the configured song to a WAV byte buffer (16-bit stereo PCM).
pub fn render_song_wav(config: &SongConfig) -> Result<Vec<u8>, RenderError> {
    dsp::renderer::render_wav(config)
}
