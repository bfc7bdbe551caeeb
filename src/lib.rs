pub mod config;
pub mod http;
pub mod transcript;

pub use config::Config;
pub use http::{create_router, AppState};
pub use transcript::{
    format_transcript, CaptionEntry, ErrorKind, TranscriptError, TranscriptFetcher,
    YouTubeFetcher,
};
