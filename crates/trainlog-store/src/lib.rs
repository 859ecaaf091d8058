//! trainlog store - Record store adapters
//!
//! This crate provides the implementations of the `RecordStore` port: a JSON file
//! store for real use and an in-memory store for tests.

mod codec;
pub mod json;
pub mod memory;

pub use json::JsonFileStore;
pub use memory::MemoryRecordStore;
