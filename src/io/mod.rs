pub mod loader;
pub mod writer;

pub use loader::{load_assets, parse_assets, parse_line};
pub use writer::{write_prioritized, JsonWriter};

use std::path::Path;

pub fn file_exists(path: &Path) -> bool {
    path.exists() && path.is_file()
}
