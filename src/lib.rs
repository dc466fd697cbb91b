pub mod attribute_store;
mod column_filter_impl;
pub mod field_port;
pub mod filter_config_loader;
pub mod filter_document;
pub mod filter_structs;
