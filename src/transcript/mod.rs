//! Caption retrieval and formatting
//!
//! This module provides:
//! - `TranscriptFetcher`, the seam to whatever supplies caption entries
//! - `YouTubeFetcher`, backed by the `yt-transcript-rs` client
//! - `format_transcript`, which flattens entries into one `|`-delimited string

mod error;
mod formatter;
mod youtube;

pub use error::{ErrorKind, TranscriptError};
pub use formatter::{format_entry, format_transcript};
pub use youtube::YouTubeFetcher;

/// A single timed caption fragment
#[derive(Debug, Clone, PartialEq)]
pub struct CaptionEntry {
    /// Offset from the start of the video, in seconds
    pub start: f64,

    /// How long the caption stays on screen, if the provider reports it
    pub duration: Option<f64>,

    /// Caption text with markup removed
    pub text: String,
}

impl CaptionEntry {
    pub fn new(start: f64, text: impl Into<String>) -> Self {
        Self {
            start,
            duration: None,
            text: text.into(),
        }
    }

    /// Build an entry from provider data
    ///
    /// `start` must be finite and non-negative; anything else means the
    /// provider sent data we cannot render.
    pub fn from_provider(
        video_id: &str,
        start: f64,
        duration: Option<f64>,
        text: impl Into<String>,
    ) -> Result<Self, TranscriptError> {
        if !start.is_finite() || start < 0.0 {
            return Err(TranscriptError::MalformedResponse(format!(
                "caption for video {} has invalid start offset {}",
                video_id, start
            )));
        }

        Ok(Self {
            start,
            duration: duration.filter(|d| d.is_finite() && *d >= 0.0),
            text: text.into(),
        })
    }
}

/// Source of caption entries for a video
///
/// Implementations:
/// - `YouTubeFetcher`: live YouTube caption tracks
/// - test stubs returning canned entries or errors
#[async_trait::async_trait]
pub trait TranscriptFetcher: Send + Sync {
    /// Fetch the caption entries for `video_id`, in provider order
    async fn fetch(&self, video_id: &str) -> Result<Vec<CaptionEntry>, TranscriptError>;

    /// Get fetcher name for logging
    fn name(&self) -> &str;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_provider_entry_accepts_zero_and_positive() {
        let entry = CaptionEntry::from_provider("vid", 0.0, Some(1.5), "Hi").unwrap();
        assert_eq!(entry.start, 0.0);
        assert_eq!(entry.duration, Some(1.5));

        let entry = CaptionEntry::from_provider("vid", 12.345, None, "there").unwrap();
        assert_eq!(format_entry(&entry), "12.35 seconds: there");
    }

    #[test]
    fn test_provider_entry_rejects_bad_offsets() {
        for start in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY, -3.0] {
            let err = CaptionEntry::from_provider("vid", start, None, "x").unwrap_err();
            assert!(
                matches!(err, TranscriptError::MalformedResponse(_)),
                "start {} should be rejected",
                start
            );
            assert_eq!(err.kind(), ErrorKind::Upstream);
        }
    }

    #[test]
    fn test_provider_entry_drops_bad_duration() {
        let entry = CaptionEntry::from_provider("vid", 1.0, Some(f64::NAN), "x").unwrap();
        assert_eq!(entry.duration, None);
    }
}
