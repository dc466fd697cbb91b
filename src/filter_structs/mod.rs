pub mod column_filter_struct;
pub mod comparison_type_struct;
pub mod filter_config_struct;
