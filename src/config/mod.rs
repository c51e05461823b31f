//! Configuration and storage paths

mod paths;
mod settings;

pub use paths::Paths;
pub use settings::{Config, DEFAULT_DATABASE_URL};
