pub mod category;
pub mod period;
pub mod record;
