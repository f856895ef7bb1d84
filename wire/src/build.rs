//! Field-by-field encoder for one message line.

use std::fmt::Write as _;

use crate::delim::{EMPTY_FIELD, SEP, SEP2};

/// Builds one message line: the decimal type code, then fields.
///
/// [`param`](Self::param) writes a [`SEP`]-separated parameter (the body of
/// a single-parameter message, or each parameter of a multi-parameter
/// message); the `field` methods write [`SEP2`]-separated fields within the
/// current parameter. Encoding is total: any well-formed message value can
/// be written.
#[derive(Debug, Clone)]
pub struct LineBuilder {
    buf: String,
}

impl LineBuilder {
    /// Starts a line with the given type code. A bodyless message is the
    /// bare code.
    #[must_use]
    pub fn new(type_code: u16) -> Self {
        Self {
            buf: type_code.to_string(),
        }
    }

    /// Writes a [`SEP`]-separated parameter.
    pub fn param(&mut self, s: &str) -> &mut Self {
        self.buf.push(SEP);
        self.buf.push_str(s);
        self
    }

    /// Writes a [`SEP`]-separated parameter, substituting the
    /// [`EMPTY_FIELD`] sentinel for an empty string.
    pub fn param_or_empty(&mut self, s: &str) -> &mut Self {
        if s.is_empty() {
            self.buf.push(SEP);
            self.buf.push(EMPTY_FIELD);
            self
        } else {
            self.param(s)
        }
    }

    /// Writes a [`SEP`]-separated integer parameter.
    pub fn param_i32(&mut self, v: i32) -> &mut Self {
        self.buf.push(SEP);
        let _ = write!(self.buf, "{v}");
        self
    }

    /// Writes a string field.
    pub fn field(&mut self, s: &str) -> &mut Self {
        self.buf.push(SEP2);
        self.buf.push_str(s);
        self
    }

    /// Writes a string field, substituting the [`EMPTY_FIELD`] sentinel
    /// for an empty string.
    pub fn field_or_empty(&mut self, s: &str) -> &mut Self {
        if s.is_empty() {
            self.buf.push(SEP2);
            self.buf.push(EMPTY_FIELD);
            self
        } else {
            self.field(s)
        }
    }

    /// Writes a base-10 integer field.
    pub fn field_i32(&mut self, v: i32) -> &mut Self {
        self.buf.push(SEP2);
        let _ = write!(self.buf, "{v}");
        self
    }

    /// Writes a base-16 integer field, `-` prefixed when negative.
    pub fn field_i32_hex(&mut self, v: i32) -> &mut Self {
        self.buf.push(SEP2);
        if v < 0 {
            let _ = write!(self.buf, "-{:x}", i64::from(v).unsigned_abs());
        } else {
            let _ = write!(self.buf, "{v:x}");
        }
        self
    }

    /// Writes a word-boolean field: `true` or `false`.
    pub fn field_bool_word(&mut self, v: bool) -> &mut Self {
        self.field(if v { "true" } else { "false" })
    }

    /// Writes a letter-boolean field: `t` or `f`.
    pub fn field_bool_letter(&mut self, v: bool) -> &mut Self {
        self.field(if v { "t" } else { "f" })
    }

    /// Writes a bit-boolean field: `1` or `0`.
    pub fn field_bool_bit(&mut self, v: bool) -> &mut Self {
        self.field(if v { "1" } else { "0" })
    }

    /// Writes a decimal field. The formatting always keeps a decimal
    /// point, matching the legacy encoding of robot tuning parameters.
    pub fn field_f32(&mut self, v: f32) -> &mut Self {
        self.buf.push(SEP2);
        let _ = write!(self.buf, "{v:?}");
        self
    }

    /// Appends raw text with no separator, for inner-delimiter escapes.
    pub fn raw(&mut self, s: &str) -> &mut Self {
        self.buf.push_str(s);
        self
    }

    /// Appends a raw character with no separator.
    pub fn raw_char(&mut self, c: char) -> &mut Self {
        self.buf.push(c);
        self
    }

    /// Finishes the line.
    #[must_use]
    pub fn finish(self) -> String {
        self.buf
    }
}
