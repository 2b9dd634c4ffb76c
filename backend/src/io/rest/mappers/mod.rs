pub mod category_mapper;
pub mod record_mapper;
pub mod summary_mapper;

pub use category_mapper::CategoryMapper;
pub use record_mapper::RecordMapper;
pub use summary_mapper::SummaryMapper;
