//! Error types shared across the library.

use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GridError {
    #[error("lights per vine must be greater than zero")]
    ZeroLightsPerVine,

    #[error("{len} cells cannot be split into vines of {lights_per_vine} lights")]
    Ragged { len: usize, lights_per_vine: usize },
}

#[derive(Debug, thiserror::Error)]
pub enum LayoutError {
    #[error("could not access layout file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid layout json: {0}")]
    Json(#[from] serde_json::Error),

    #[error("layout has the wrong shape: {0}")]
    Shape(#[from] GridError),
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SettingsError {
    #[error("help requested")]
    HelpRequested,

    #[error("you must specify a layout file using --layout")]
    MissingLayout,

    #[error("{0} expects a value")]
    MissingValue(String),

    #[error("invalid value {value:?} for {flag}: {reason}")]
    InvalidValue {
        flag: String,
        value: String,
        reason: String,
    },

    #[error("unknown option {0}")]
    UnknownFlag(String),
}
