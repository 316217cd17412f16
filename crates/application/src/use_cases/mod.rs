pub mod cache;
pub mod dns;

// Re-export use cases
pub use cache::ManageCacheUseCase;
pub use dns::{IterativeResolver, Resolution};
