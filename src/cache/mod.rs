//! In-memory cache of parsed application descriptors
//!
//! Entries are keyed by descriptor file name and carry a two-phase payload:
//! the category tag is parsed eagerly on every reconciliation pass, the
//! remaining fields lazily and at most once per entry lifetime.

mod entry;
mod store;

pub use entry::{category_name, AppDetails, AppEntry, CATEGORY_NONE};
pub use store::AppStore;
