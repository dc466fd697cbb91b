use bon::Builder;
use serde::{Deserialize, Serialize};

use super::comparison_type_struct::ComparisonType;

/// A single column-value predicate applied to a key-value store lookup.
#[cfg_attr(test, derive(Debug, PartialEq))]
#[derive(Serialize, Deserialize, Clone, Builder)]
pub struct ColumnFilter {
    /// The column this filter applies to.
    pub field_alias: String,
    /// The type the field had when the filter was defined, so a remapped
    /// field can be detected later against the live schema.
    pub field_type: Option<String>,
    pub comparison: Option<ComparisonType>,
    /// Whether the comparison constant or the column values involve signed
    /// numbers.
    #[serde(default)]
    #[builder(default)]
    pub signed_comparison: bool,
    /// The constant to compare to (or the substring/regex).
    #[serde(default)]
    #[builder(default)]
    pub constant: String,
    /// Formatting pattern for dates and numbers.
    pub format: Option<String>,
}
