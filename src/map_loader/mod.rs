// error module
mod error;
// loader module
mod loader;

pub use error::MapLoaderError;
pub use loader::{load_map_from_file, parse_map};
