use serde::{Deserialize, Serialize};

use super::column_filter_struct::ColumnFilter;

#[cfg_attr(test, derive(Debug, PartialEq))]
#[derive(Serialize, Deserialize, Default)]
pub struct FilterConfig {
    pub filters: Vec<ColumnFilter>,
}
