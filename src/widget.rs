//! Host-facing widget adapter around the recording probe.

use tracing::info;

use crate::probe::{ProcessSearch, RecordingProbe};
use crate::{Glyphs, Status};

/// A piece of bar content that the runner refreshes on a schedule. Widgets
/// know nothing about when or how often they are called.
pub trait Widget {
    /// Short identifier used in logs.
    fn name(&self) -> &str;

    /// Produce the text to display for the current tick.
    fn render(&mut self) -> String;
}

/// Widget showing whether an audio recording is in progress.
pub struct RecordingWidget<S: ProcessSearch> {
    probe: RecordingProbe<S>,
    glyphs: Glyphs,
    last: Option<Status>,
}

impl<S: ProcessSearch> RecordingWidget<S> {
    pub fn new(probe: RecordingProbe<S>, glyphs: Glyphs) -> Self {
        Self {
            probe,
            glyphs,
            last: None,
        }
    }
}

impl<S: ProcessSearch> Widget for RecordingWidget<S> {
    fn name(&self) -> &str {
        "recording"
    }

    fn render(&mut self) -> String {
        let status = self.probe.poll();
        if self.last != Some(status) {
            info!(widget = self.name(), status = ?status, "status changed");
            self.last = Some(status);
        }
        self.glyphs.for_status(status).to_string()
    }
}

#[cfg(test)]
mod tests {
    use crate::probe::SearchError;

    use super::*;

    struct FixedSearch {
        running: Option<bool>,
    }

    impl ProcessSearch for FixedSearch {
        fn find(&self, _name: &str) -> Result<bool, SearchError> {
            self.running
                .ok_or_else(|| SearchError::Spawn {
                    utility: "stub".to_owned(),
                    source: std::io::Error::from(std::io::ErrorKind::NotFound),
                })
        }
    }

    fn widget(running: Option<bool>, glyphs: Glyphs) -> RecordingWidget<FixedSearch> {
        RecordingWidget::new(
            RecordingProbe::with_search(FixedSearch { running }),
            glyphs,
        )
    }

    #[test]
    fn test_render_recording_glyph() {
        let mut widget = widget(Some(true), Glyphs::default());
        assert_eq!(widget.render(), Status::Recording.glyph());
    }

    #[test]
    fn test_render_idle_glyph() {
        let mut widget = widget(Some(false), Glyphs::default());
        assert_eq!(widget.render(), Status::Idle.glyph());
    }

    #[test]
    fn test_render_unknown_glyph_on_failure() {
        let mut widget = widget(None, Glyphs::default());
        assert_eq!(widget.render(), Status::Unknown.glyph());
    }

    #[test]
    fn test_render_applies_overridden_glyphs() {
        let glyphs = Glyphs::new(Some("REC".to_owned()), None, None);
        let mut widget = widget(Some(true), glyphs);
        assert_eq!(widget.render(), "REC");
    }

    #[test]
    fn test_render_is_stable_across_ticks() {
        let mut widget = widget(Some(false), Glyphs::default());
        assert_eq!(widget.render(), widget.render());
    }
}
