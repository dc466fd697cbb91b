use std::convert::Infallible;

use crate::field_port::{FilterFieldReader, FilterFieldWriter};

/// Escapes the characters the tag-value format reserves, so values carrying
/// markup survive a round-trip.
fn escape(value: &str) -> String {
    value
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

// `&amp;` goes last so escaped sequences are not unescaped twice.
fn unescape(value: &str) -> String {
    value
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&amp;", "&")
}

/// Appends one `<filter>` block of `<code>value</code>` lines to a
/// caller-supplied buffer. Indentation is cosmetic only.
pub struct DocumentFieldWriter<'a> {
    buf: &'a mut String,
}

impl<'a> DocumentFieldWriter<'a> {
    pub fn open(buf: &'a mut String) -> Self {
        buf.push_str("\n        <filter>");
        DocumentFieldWriter { buf }
    }

    pub fn close(self) {
        self.buf.push_str("\n        </filter>");
    }
}

impl FilterFieldWriter for DocumentFieldWriter<'_> {
    type Error = Infallible;

    fn write_str(&mut self, code: &str, value: &str) -> Result<(), Infallible> {
        self.buf
            .push_str(&format!("\n            <{code}>{}</{code}>", escape(value)));
        Ok(())
    }

    fn write_bool(&mut self, code: &str, value: bool) -> Result<(), Infallible> {
        self.write_str(code, if value { "Y" } else { "N" })
    }
}

/// A view over one `<filter>` block, resolving tag values by code.
pub struct FilterNode<'a> {
    text: &'a str,
}

impl<'a> FilterNode<'a> {
    pub fn new(text: &'a str) -> Self {
        FilterNode { text }
    }

    /// Value of the first `<tag>...</tag>` pair inside the block, with the
    /// reserved-character escapes undone. Missing and empty tags are both
    /// reported as absent.
    pub fn tag_value(&self, tag: &str) -> Option<String> {
        let open = format!("<{tag}>");
        let close = format!("</{tag}>");
        let start = self.text.find(&open)? + open.len();
        let end = self.text[start..].find(&close)? + start;
        let value = &self.text[start..end];
        (!value.is_empty()).then(|| unescape(value))
    }
}

impl FilterFieldReader for FilterNode<'_> {
    type Error = Infallible;

    fn read_str(&self, code: &str) -> Result<Option<String>, Infallible> {
        Ok(self.tag_value(code))
    }

    // Documents store the flag as Y/N; anything but "Y" (any case) is false.
    fn read_bool(&self, code: &str) -> Result<bool, Infallible> {
        Ok(self
            .tag_value(code)
            .is_some_and(|value| value.eq_ignore_ascii_case("Y")))
    }
}
