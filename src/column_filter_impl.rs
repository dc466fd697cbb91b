use anyhow::Result;

use crate::attribute_store::{AttributeFieldReader, AttributeFieldWriter, StepAttributeStore};
use crate::field_port::{FilterFieldReader, FilterFieldWriter};
use crate::filter_document::{DocumentFieldWriter, FilterNode};
use crate::filter_structs::column_filter_struct::ColumnFilter;
use crate::filter_structs::comparison_type_struct::ComparisonType;

impl ColumnFilter {
    /// Creates a filter for the given column alias with every other field
    /// unset.
    pub fn new(alias: impl Into<String>) -> Self {
        ColumnFilter {
            field_alias: alias.into(),
            field_type: None,
            comparison: None,
            signed_comparison: false,
            constant: String::new(),
            format: None,
        }
    }

    /// A filter is persistable only once the alias, the constant and the
    /// comparison operator are all set. Incomplete filters serialize to
    /// nothing.
    pub fn is_complete(&self) -> bool {
        !self.field_alias.is_empty() && !self.constant.is_empty() && self.comparison.is_some()
    }

    /// Appends this filter as a `<filter>` block to the supplied buffer.
    /// Incomplete filters append nothing.
    pub fn append_document(&self, buf: &mut String) {
        if !self.is_complete() {
            return;
        }
        let Some(comparison) = self.comparison else {
            return;
        };

        let mut writer = DocumentFieldWriter::open(buf);
        match self.write_fields(comparison, &mut writer) {
            Ok(()) => {}
            Err(never) => match never {},
        }
        writer.close();
    }

    /// Rebuilds a filter from a `<filter>` block. Completeness is not
    /// validated; an unrecognized operator string leaves the comparison
    /// unset.
    pub fn read_document(node: &FilterNode<'_>) -> ColumnFilter {
        match Self::read_fields(node) {
            Ok(filter) => filter,
            Err(never) => match never {},
        }
    }

    /// Writes this filter's attributes under the given filter index.
    /// Incomplete filters write nothing; store failures propagate to the
    /// caller.
    pub fn save_attributes(
        &self,
        store: &mut dyn StepAttributeStore,
        transformation_id: &str,
        step_id: &str,
        filter_index: usize,
    ) -> Result<()> {
        if !self.is_complete() {
            return Ok(());
        }
        let Some(comparison) = self.comparison else {
            return Ok(());
        };

        let mut writer = AttributeFieldWriter {
            store,
            transformation_id,
            step_id,
            filter_index,
        };
        self.write_fields(comparison, &mut writer)
    }

    /// Reads a filter back from the attribute store under the given filter
    /// index. The signed flag comes back as a native boolean here, unlike
    /// the document format's Y/N convention.
    pub fn read_attributes(
        store: &dyn StepAttributeStore,
        filter_index: usize,
        step_id: &str,
    ) -> Result<ColumnFilter> {
        let reader = AttributeFieldReader {
            store,
            step_id,
            filter_index,
        };
        Self::read_fields(&reader)
    }

    // The field list and its order are shared by both backends.
    fn write_fields<W: FilterFieldWriter>(
        &self,
        comparison: ComparisonType,
        writer: &mut W,
    ) -> Result<(), W::Error> {
        writer.write_str("alias", &self.field_alias)?;
        writer.write_str("type", self.field_type.as_deref().unwrap_or_default())?;
        writer.write_str("comparison_opp", comparison.display_str())?;
        writer.write_bool("signed_comp", self.signed_comparison)?;
        writer.write_str("constant", &self.constant)?;
        if let Some(format) = &self.format {
            if !format.trim().is_empty() {
                writer.write_str("format", format.trim())?;
            }
        }
        Ok(())
    }

    fn read_fields<R: FilterFieldReader>(reader: &R) -> Result<ColumnFilter, R::Error> {
        let mut filter = ColumnFilter::new(reader.read_str("alias")?.unwrap_or_default());
        filter.field_type = reader.read_str("type")?.filter(|value| !value.is_empty());
        filter.comparison = reader
            .read_str("comparison_opp")?
            .as_deref()
            .and_then(ComparisonType::from_display);
        filter.signed_comparison = reader.read_bool("signed_comp")?;
        filter.constant = reader.read_str("constant")?.unwrap_or_default();
        filter.format = reader.read_str("format")?.filter(|value| !value.is_empty());
        Ok(filter)
    }
}
