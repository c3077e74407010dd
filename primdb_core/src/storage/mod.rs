pub mod schema;
pub mod catalog;
pub mod engine;
pub mod disk;
pub mod mem;

// Re-export main types for convenience
pub use schema::{Column, Schema};
pub use catalog::Catalog;
pub use engine::Storage;
pub use disk::DiskStorage;
pub use mem::MemStorage;
