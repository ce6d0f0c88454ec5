pub mod backend;
pub mod external;
pub mod memory;
pub mod r#trait;

// Re-exports for ergonomics
pub use backend::StoreBackend;
pub use external::ExternalStore;
pub use memory::MemoryStore;
pub use r#trait::RouteStore;
