// Repository modules
pub mod category_repository;
pub mod record_repository;

// Re-export repository types
pub use category_repository::CategoryRepository;
pub use record_repository::RecordRepository;
