use std::fmt;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(String),

    /// Missing render container, returned by `PagedList::try_render_list`
    /// and `PagedList::try_render_pagination`
    #[error(transparent)]
    Attachment(#[from] AttachmentError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Unsupported item file format: {0}")]
    UnsupportedFormat(String),
}

pub type Result<T> = std::result::Result<T, Error>;

/// Which of the two owned containers a render step targets
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContainerKind {
    List,
    Pagination,
}

impl fmt::Display for ContainerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ContainerKind::List => f.write_str("list"),
            ContainerKind::Pagination => f.write_str("pagination"),
        }
    }
}

/// A container the component renders into was missing from the document
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{kind} container '{id}' not found in document")]
pub struct AttachmentError {
    pub kind: ContainerKind,
    pub id: String,
}

impl AttachmentError {
    pub fn new(kind: ContainerKind, id: impl Into<String>) -> Self {
        Self {
            kind,
            id: id.into(),
        }
    }
}
