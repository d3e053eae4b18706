use thiserror::Error;

/// Decoding failures at the engine's data boundaries.
///
/// Engine operations themselves never fail; these only surface while turning
/// external JSON into stations or saved library entries.
#[derive(Debug, Error)]
pub enum GlobeError {
    #[error("malformed station directory: {0}")]
    Directory(#[source] serde_json::Error),
    #[error("malformed saved library: {0}")]
    Library(#[source] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, GlobeError>;
