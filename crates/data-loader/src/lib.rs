//! Data Loader
//!
//! Reads delimited insurance data into typed records. This is the only crate
//! that touches the filesystem; everything downstream works on values.

mod cache;
mod error;
mod loader;

pub use cache::DatasetCache;
pub use error::LoadError;
pub use loader::{load_from_reader, load_records, LoaderConfig, REQUIRED_COLUMNS};
