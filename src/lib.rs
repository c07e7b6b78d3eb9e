pub mod api;
pub mod baseball_reference;
pub mod category;
pub mod cbs;
pub mod data_collector;
pub mod error;
pub mod options;
pub mod pagination;
pub mod record;
pub mod source_trait;
pub mod table;
