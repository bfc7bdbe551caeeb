use thiserror::Error;

/// Why a transcript could not be retrieved
#[derive(Debug, Error)]
pub enum TranscriptError {
    #[error("video {video_id} is no longer available")]
    VideoUnavailable { video_id: String },

    #[error("{video_id} is not a valid video ID")]
    InvalidVideoId { video_id: String },

    #[error("video {video_id} is unplayable: {reason}")]
    VideoUnplayable { video_id: String, reason: String },

    #[error("video {video_id} is age restricted")]
    AgeRestricted { video_id: String },

    #[error("subtitles are disabled for video {video_id}")]
    TranscriptsDisabled { video_id: String },

    #[error("no transcript found for video {video_id} in {requested:?}")]
    NoTranscriptFound {
        video_id: String,
        requested: Vec<String>,
    },

    #[error("YouTube is asking for a bot check on video {video_id}")]
    RequestBlocked { video_id: String },

    #[error("YouTube is blocking requests from this IP (video {video_id})")]
    IpBlocked { video_id: String },

    #[error("failed to accept the cookie consent page for video {video_id}")]
    FailedToCreateConsentCookie { video_id: String },

    #[error("request to YouTube failed for video {video_id}: {message}")]
    RequestFailed { video_id: String, message: String },

    #[error("fetching video {video_id} timed out after {timeout_secs}s")]
    TimedOut { video_id: String, timeout_secs: u64 },

    #[error("unexpected response from YouTube: {0}")]
    MalformedResponse(String),

    #[error("could not retrieve transcript for video {video_id}: {message}")]
    Provider { video_id: String, message: String },
}

/// Coarse grouping of `TranscriptError` for logging and callers that want to
/// react differently to each category
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The video does not exist or cannot be played
    NotFound,
    /// The video exists but has no usable caption track
    CaptionsDisabled,
    /// Likely to succeed if retried later
    Transient,
    /// The provider answered with something we could not use
    Upstream,
}

impl TranscriptError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::VideoUnavailable { .. }
            | Self::InvalidVideoId { .. }
            | Self::VideoUnplayable { .. }
            | Self::AgeRestricted { .. } => ErrorKind::NotFound,
            Self::TranscriptsDisabled { .. } | Self::NoTranscriptFound { .. } => {
                ErrorKind::CaptionsDisabled
            }
            Self::RequestBlocked { .. }
            | Self::IpBlocked { .. }
            | Self::RequestFailed { .. }
            | Self::TimedOut { .. } => ErrorKind::Transient,
            Self::FailedToCreateConsentCookie { .. }
            | Self::MalformedResponse(_)
            | Self::Provider { .. } => ErrorKind::Upstream,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_grouping() {
        let unavailable = TranscriptError::VideoUnavailable {
            video_id: "abc".to_string(),
        };
        assert_eq!(unavailable.kind(), ErrorKind::NotFound);

        let disabled = TranscriptError::TranscriptsDisabled {
            video_id: "abc".to_string(),
        };
        assert_eq!(disabled.kind(), ErrorKind::CaptionsDisabled);

        let slow = TranscriptError::TimedOut {
            video_id: "abc".to_string(),
            timeout_secs: 30,
        };
        assert_eq!(slow.kind(), ErrorKind::Transient);

        let garbled = TranscriptError::MalformedResponse("transcript XML is empty".to_string());
        assert_eq!(garbled.kind(), ErrorKind::Upstream);
    }

    #[test]
    fn test_message_names_video() {
        let err = TranscriptError::TranscriptsDisabled {
            video_id: "dQw4w9WgXcQ".to_string(),
        };
        assert_eq!(err.to_string(), "subtitles are disabled for video dQw4w9WgXcQ");
    }
}
