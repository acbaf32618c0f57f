mod document;
mod list;
mod partition;
mod render;
mod reporter;

pub use document::{ClickEvent, Control, Document, MemoryDocument};
pub use list::PagedList;
pub use partition::{split_into_pages, total_pages};
pub use render::{date_label, escape_html, list_markup, pagination_markup};
pub use reporter::{MemoryReporter, Reporter, TracingReporter};
