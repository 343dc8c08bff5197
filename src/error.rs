use std::fmt;

/// Errors produced by the render pipeline.
///
/// The engine operates on internally generated, always-valid data, so the
/// only fatal condition is a configuration that makes the total buffer
/// length meaningless. Everything else (zero-length envelopes, events past
/// the end of the song, non-positive filter cutoffs) is a documented
/// defensive policy, not an error.
#[derive(Debug)]
pub enum RenderError {
    InvalidConfig { field: &'static str, value: f64 },
}

impl fmt::Display for RenderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RenderError::InvalidConfig { field, value } => {
                write!(f, "Invalid song config: {field} = {value}")
            }
        }
    }
}

impl std::error::Error for RenderError {}
