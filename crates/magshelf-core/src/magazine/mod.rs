mod loader;
mod models;

pub use loader::{load_magazines, parse_magazines_json, parse_magazines_toml};
pub use models::{parse_date, Magazine};
