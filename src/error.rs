//! Error types for the fallible edges of the game
//!
//! The simulation itself never fails; only loading settings and preparing
//! audio can.

/// Settings loading and validation errors
#[derive(thiserror::Error, Debug)]
pub enum SettingsError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Parse error
    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// Value out of range
    #[error("Invalid setting: {0}")]
    Invalid(String),
}

/// Audio preparation errors
#[derive(thiserror::Error, Debug)]
pub enum AudioError {
    /// Synthesized clip has no samples
    #[error("Empty audio clip: {0}")]
    EmptyClip(&'static str),

    /// Backend refused the clip
    #[error("Audio load error: {0}")]
    Load(String),
}
