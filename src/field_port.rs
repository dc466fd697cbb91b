/// Destination for one filter's fields, written as (code, value) pairs.
///
/// The error type is backend-specific: the document backend cannot fail and
/// uses [`std::convert::Infallible`]; the attribute-store backend surfaces
/// store-access errors.
pub trait FilterFieldWriter {
    type Error;

    fn write_str(&mut self, code: &str, value: &str) -> Result<(), Self::Error>;
    fn write_bool(&mut self, code: &str, value: bool) -> Result<(), Self::Error>;
}

/// Source of one filter's fields, looked up by code.
pub trait FilterFieldReader {
    type Error;

    fn read_str(&self, code: &str) -> Result<Option<String>, Self::Error>;
    fn read_bool(&self, code: &str) -> Result<bool, Self::Error>;
}
