pub mod manage_cache;

pub use manage_cache::ManageCacheUseCase;
