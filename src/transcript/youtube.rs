use super::{CaptionEntry, TranscriptError, TranscriptFetcher};
use crate::config::YoutubeConfig;
use std::time::Duration;
use tracing::{debug, info, warn};
use yt_transcript_rs::api::YouTubeTranscriptApi;
use yt_transcript_rs::errors::{CouldNotRetrieveTranscript, CouldNotRetrieveTranscriptReason};

/// Fetches caption tracks from YouTube through `yt-transcript-rs`
///
/// Track choice follows the configured language list; the client prefers an
/// uploaded track over a generated one for the same language.
pub struct YouTubeFetcher {
    api: YouTubeTranscriptApi,
    languages: Vec<String>,
    timeout: Duration,
}

impl YouTubeFetcher {
    pub fn new(config: &YoutubeConfig) -> Result<Self, TranscriptError> {
        let api = YouTubeTranscriptApi::new(None, None, None).map_err(|e| {
            TranscriptError::Provider {
                video_id: String::new(),
                message: format!("failed to create transcript client: {}", e),
            }
        })?;

        Ok(Self {
            api,
            languages: config.languages.clone(),
            timeout: config.timeout(),
        })
    }
}

#[async_trait::async_trait]
impl TranscriptFetcher for YouTubeFetcher {
    async fn fetch(&self, video_id: &str) -> Result<Vec<CaptionEntry>, TranscriptError> {
        info!("Fetching transcript for video: {}", video_id);

        let languages: Vec<&str> = self.languages.iter().map(String::as_str).collect();
        let fetched = tokio::time::timeout(
            self.timeout,
            self.api.fetch_transcript(video_id, &languages, false),
        )
        .await
        .map_err(|_| {
            warn!("Transcript fetch for {} exceeded {:?}", video_id, self.timeout);
            TranscriptError::TimedOut {
                video_id: video_id.to_string(),
                timeout_secs: self.timeout.as_secs(),
            }
        })?
        .map_err(|e| provider_error(video_id, &self.languages, e))?;

        let entries = fetched
            .snippets
            .into_iter()
            .map(|snippet| {
                CaptionEntry::from_provider(
                    video_id,
                    snippet.start,
                    Some(snippet.duration),
                    snippet.text,
                )
            })
            .collect::<Result<Vec<_>, _>>()?;

        info!(
            "Fetched {} caption entries for video: {}",
            entries.len(),
            video_id
        );

        Ok(entries)
    }

    fn name(&self) -> &str {
        "youtube"
    }
}

fn provider_error(
    video_id: &str,
    languages: &[String],
    err: CouldNotRetrieveTranscript,
) -> TranscriptError {
    debug!("Transcript client error for {}: {}", video_id, err);
    classify(video_id, languages, err.reason.as_ref(), err.to_string())
}

/// Map the client's failure reason onto our error variants
fn classify(
    video_id: &str,
    languages: &[String],
    reason: Option<&CouldNotRetrieveTranscriptReason>,
    message: String,
) -> TranscriptError {
    use CouldNotRetrieveTranscriptReason as Reason;

    let video_id = video_id.to_string();
    match reason {
        Some(Reason::VideoUnavailable { .. }) => TranscriptError::VideoUnavailable { video_id },
        Some(Reason::InvalidVideoId { .. }) => TranscriptError::InvalidVideoId { video_id },
        Some(Reason::VideoUnplayable { .. }) => TranscriptError::VideoUnplayable {
            video_id,
            reason: message,
        },
        Some(Reason::AgeRestricted { .. }) => TranscriptError::AgeRestricted { video_id },
        Some(Reason::TranscriptsDisabled { .. }) => {
            TranscriptError::TranscriptsDisabled { video_id }
        }
        Some(Reason::NoTranscriptFound { .. }) => TranscriptError::NoTranscriptFound {
            video_id,
            requested: languages.to_vec(),
        },
        Some(Reason::RequestBlocked { .. }) => TranscriptError::RequestBlocked { video_id },
        Some(Reason::IpBlocked { .. }) => TranscriptError::IpBlocked { video_id },
        Some(Reason::FailedToCreateConsentCookie { .. }) => {
            TranscriptError::FailedToCreateConsentCookie { video_id }
        }
        Some(Reason::YouTubeRequestFailed { .. }) => {
            TranscriptError::RequestFailed { video_id, message }
        }
        Some(Reason::YouTubeDataUnparsable { .. }) => TranscriptError::MalformedResponse(message),
        _ => TranscriptError::Provider { video_id, message },
    }
}
