pub mod audit;
pub mod protocol;
pub mod setting;
pub mod table_filter;
