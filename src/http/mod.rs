//! HTTP API server
//!
//! Routes:
//! - GET / - Identity/liveness check
//! - GET /transcript/:video_id - Flattened, timestamped transcript for a video

mod handlers;
mod routes;
mod state;

pub use handlers::{ErrorResponse, TranscriptResponse, ERROR_PREFIX};
pub use routes::create_router;
pub use state::AppState;
