use std::collections::HashMap;

use anyhow::Result;

use crate::field_port::{FilterFieldReader, FilterFieldWriter};

/// Keyed attribute persistence for a transformation step.
///
/// Writes are addressed by (transformation id, step id, ordinal index,
/// attribute code); reads by (step id, ordinal index, attribute code).
/// Store-access failures propagate to the caller.
pub trait StepAttributeStore {
    fn save_string(
        &mut self,
        transformation_id: &str,
        step_id: &str,
        index: usize,
        code: &str,
        value: &str,
    ) -> Result<()>;

    fn save_bool(
        &mut self,
        transformation_id: &str,
        step_id: &str,
        index: usize,
        code: &str,
        value: bool,
    ) -> Result<()>;

    fn get_string(&self, step_id: &str, index: usize, code: &str) -> Result<Option<String>>;

    fn get_bool(&self, step_id: &str, index: usize, code: &str) -> Result<bool>;
}

enum AttributeValue {
    Str(String),
    Bool(bool),
}

/// HashMap-backed store for tests and single-process hosts.
#[derive(Default)]
pub struct MemoryAttributeStore {
    entries: HashMap<(String, usize, String), AttributeValue>,
}

impl MemoryAttributeStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl StepAttributeStore for MemoryAttributeStore {
    fn save_string(
        &mut self,
        _transformation_id: &str,
        step_id: &str,
        index: usize,
        code: &str,
        value: &str,
    ) -> Result<()> {
        self.entries.insert(
            (step_id.to_string(), index, code.to_string()),
            AttributeValue::Str(value.to_string()),
        );
        Ok(())
    }

    fn save_bool(
        &mut self,
        _transformation_id: &str,
        step_id: &str,
        index: usize,
        code: &str,
        value: bool,
    ) -> Result<()> {
        self.entries.insert(
            (step_id.to_string(), index, code.to_string()),
            AttributeValue::Bool(value),
        );
        Ok(())
    }

    fn get_string(&self, step_id: &str, index: usize, code: &str) -> Result<Option<String>> {
        match self
            .entries
            .get(&(step_id.to_string(), index, code.to_string()))
        {
            Some(AttributeValue::Str(value)) => Ok(Some(value.clone())),
            _ => Ok(None),
        }
    }

    fn get_bool(&self, step_id: &str, index: usize, code: &str) -> Result<bool> {
        match self
            .entries
            .get(&(step_id.to_string(), index, code.to_string()))
        {
            Some(AttributeValue::Bool(value)) => Ok(*value),
            _ => Ok(false),
        }
    }
}

/// Adapts a [`StepAttributeStore`] to the per-filter field port.
pub(crate) struct AttributeFieldWriter<'a> {
    pub store: &'a mut dyn StepAttributeStore,
    pub transformation_id: &'a str,
    pub step_id: &'a str,
    pub filter_index: usize,
}

impl FilterFieldWriter for AttributeFieldWriter<'_> {
    type Error = anyhow::Error;

    fn write_str(&mut self, code: &str, value: &str) -> Result<()> {
        self.store.save_string(
            self.transformation_id,
            self.step_id,
            self.filter_index,
            code,
            value,
        )
    }

    fn write_bool(&mut self, code: &str, value: bool) -> Result<()> {
        self.store.save_bool(
            self.transformation_id,
            self.step_id,
            self.filter_index,
            code,
            value,
        )
    }
}

pub(crate) struct AttributeFieldReader<'a> {
    pub store: &'a dyn StepAttributeStore,
    pub step_id: &'a str,
    pub filter_index: usize,
}

impl FilterFieldReader for AttributeFieldReader<'_> {
    type Error = anyhow::Error;

    fn read_str(&self, code: &str) -> Result<Option<String>> {
        self.store.get_string(self.step_id, self.filter_index, code)
    }

    fn read_bool(&self, code: &str) -> Result<bool> {
        self.store.get_bool(self.step_id, self.filter_index, code)
    }
}
