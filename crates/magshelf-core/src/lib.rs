pub mod config;
pub mod error;
pub mod magazine;
pub mod paging;

pub use config::{AppConfig, ListConfig, PageShellConfig};
pub use error::{AttachmentError, ContainerKind, Error, Result};
pub use magazine::Magazine;
pub use paging::{MemoryDocument, PagedList};
