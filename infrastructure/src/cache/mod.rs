//! File-backed storage for the result cache

mod file_store;

pub use file_store::JsonFileStore;
