//! Recording status types and their display glyphs.

const GLYPH_RECORDING: &str = "🔴REC";
const GLYPH_IDLE: &str = "⚪";
const GLYPH_UNKNOWN: &str = "?";

/// The result of a single recording-status poll.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// The capture process is running
    Recording,
    /// The capture process is not running
    Idle,
    /// The process table could not be inspected
    Unknown,
}

impl Status {
    /// The built-in glyph for this status.
    pub fn glyph(&self) -> &'static str {
        match self {
            Status::Recording => GLYPH_RECORDING,
            Status::Idle => GLYPH_IDLE,
            Status::Unknown => GLYPH_UNKNOWN,
        }
    }
}

/// Display strings for each status, with the built-in glyphs as defaults.
/// Overrides come from the config file.
#[derive(Debug, Clone)]
pub struct Glyphs {
    recording: String,
    idle: String,
    unknown: String,
}

impl Glyphs {
    pub fn new(
        recording: Option<String>,
        idle: Option<String>,
        unknown: Option<String>,
    ) -> Self {
        Self {
            recording: recording.unwrap_or_else(|| Status::Recording.glyph().to_owned()),
            idle: idle.unwrap_or_else(|| Status::Idle.glyph().to_owned()),
            unknown: unknown.unwrap_or_else(|| Status::Unknown.glyph().to_owned()),
        }
    }

    /// The display string for the given status.
    pub fn for_status(&self, status: Status) -> &str {
        match status {
            Status::Recording => &self.recording,
            Status::Idle => &self.idle,
            Status::Unknown => &self.unknown,
        }
    }
}

impl Default for Glyphs {
    fn default() -> Self {
        Self::new(None, None, None)
    }
}
