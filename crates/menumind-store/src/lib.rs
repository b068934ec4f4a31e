//! MenuMind Store — the listing collection as a single JSON file.

pub mod json_store;

pub use json_store::ListingStore;
