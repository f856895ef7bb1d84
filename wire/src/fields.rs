//! Tokenizing cursor over one message body.

use crate::delim::SEP2;
use crate::error::{FieldError, FieldResult};

/// A forward-only cursor over the [`SEP2`](crate::SEP2)-separated fields
/// of a message body.
///
/// Tokenization collapses consecutive separators and never yields an
/// empty token, which is why empty string fields travel as the
/// [`EMPTY_FIELD`](crate::EMPTY_FIELD) sentinel. Reads past the last
/// field return [`FieldError::MissingField`] rather than panicking.
#[derive(Debug, Clone)]
pub struct Fields<'a> {
    body: &'a str,
    pos: usize,
}

impl<'a> Fields<'a> {
    /// Creates a cursor at the start of a message body.
    #[must_use]
    pub const fn new(body: &'a str) -> Self {
        Self { body, pos: 0 }
    }

    /// Creates a cursor that splits on an arbitrary separator instead of
    /// [`SEP2`](crate::SEP2), for the text messages with inner delimiters.
    #[must_use]
    pub fn split_on(body: &'a str, sep: char) -> SepFields<'a> {
        SepFields {
            inner: body.split(sep),
        }
    }

    fn skip_seps(&mut self) {
        let rest = &self.body[self.pos..];
        let skipped = rest.len() - rest.trim_start_matches(SEP2).len();
        self.pos += skipped;
    }

    /// Returns `true` if at least one more field remains.
    pub fn has_more(&mut self) -> bool {
        self.skip_seps();
        self.pos < self.body.len()
    }

    /// Counts the fields remaining, without consuming them.
    #[must_use]
    pub fn count_remaining(&self) -> usize {
        self.body[self.pos..]
            .split(SEP2)
            .filter(|t| !t.is_empty())
            .count()
    }

    /// Reads the next field as a raw string slice.
    pub fn next_str(&mut self) -> FieldResult<&'a str> {
        self.skip_seps();
        if self.pos >= self.body.len() {
            return Err(FieldError::MissingField);
        }
        let rest = &self.body[self.pos..];
        let end = rest.find(SEP2).unwrap_or(rest.len());
        self.pos += end;
        Ok(&rest[..end])
    }

    /// Reads the next field as an owned string.
    pub fn next_string(&mut self) -> FieldResult<String> {
        self.next_str().map(str::to_owned)
    }

    /// Reads the next field as a base-10 integer.
    pub fn next_i32(&mut self) -> FieldResult<i32> {
        self.next_str()?.parse().map_err(|_| FieldError::BadInt)
    }

    /// Reads the next field as a base-16 integer, with an optional leading
    /// `-` sign. Used for board-coordinate fields.
    pub fn next_i32_hex(&mut self) -> FieldResult<i32> {
        let tok = self.next_str()?;
        let (neg, digits) = match tok.strip_prefix('-') {
            Some(d) => (true, d),
            None => (false, tok),
        };
        let v = i64::from_str_radix(digits, 16).map_err(|_| FieldError::BadHexInt)?;
        let v = if neg { -v } else { v };
        i32::try_from(v).map_err(|_| FieldError::BadHexInt)
    }

    /// Reads the next field as a word boolean: the token `true` (any case)
    /// is `true`, anything else is `false`. Only a missing field errors,
    /// matching the legacy parser.
    pub fn next_bool_word(&mut self) -> FieldResult<bool> {
        Ok(self.next_str()?.eq_ignore_ascii_case("true"))
    }

    /// Reads the next field as a letter boolean: `t` is `true`, anything
    /// else is `false`.
    pub fn next_bool_letter(&mut self) -> FieldResult<bool> {
        Ok(self.next_str()? == "t")
    }

    /// Reads the next field as a bit boolean: a nonzero integer is `true`.
    pub fn next_bool_bit(&mut self) -> FieldResult<bool> {
        Ok(self.next_i32()? != 0)
    }

    /// Reads the next field as a decimal number.
    pub fn next_f32(&mut self) -> FieldResult<f32> {
        self.next_str()?.parse().map_err(|_| FieldError::BadDecimal)
    }

    /// Takes everything left in the body as one field, crossing any
    /// [`SEP2`](crate::SEP2) inside it.
    ///
    /// This is the escape used by the packed game-option fields, whose
    /// values legitimately contain the secondary separator. One leading
    /// separator (the boundary after the previous field) is stripped.
    pub fn rest(&mut self) -> FieldResult<&'a str> {
        let mut rest = &self.body[self.pos..];
        if let Some(stripped) = rest.strip_prefix(SEP2) {
            rest = stripped;
        }
        self.pos = self.body.len();
        if rest.is_empty() {
            return Err(FieldError::MissingField);
        }
        Ok(rest)
    }

    /// Reads the remaining fields as strings, consuming the cursor.
    /// An exhausted body yields an empty list, which is a valid tail.
    #[must_use]
    pub fn tail(mut self) -> Vec<String> {
        let mut out = Vec::new();
        while let Ok(tok) = self.next_str() {
            out.push(tok.to_owned());
        }
        out
    }

    /// Reads the remaining fields as base-10 integers, consuming the
    /// cursor. Any non-integer field fails the whole tail.
    pub fn tail_i32(mut self) -> FieldResult<Vec<i32>> {
        let mut out = Vec::new();
        while self.has_more() {
            out.push(self.next_i32()?);
        }
        Ok(out)
    }

    /// Reads the remaining fields as base-16 integers, consuming the
    /// cursor.
    pub fn tail_i32_hex(mut self) -> FieldResult<Vec<i32>> {
        let mut out = Vec::new();
        while self.has_more() {
            out.push(self.next_i32_hex()?);
        }
        Ok(out)
    }
}

/// Cursor over a body split on a custom inner separator.
///
/// Same collapsing semantics as [`Fields`], used by the chat and
/// server-text messages.
#[derive(Debug, Clone)]
pub struct SepFields<'a> {
    inner: std::str::Split<'a, char>,
}

impl<'a> SepFields<'a> {
    /// Reads the next field, skipping empty tokens.
    pub fn next_str(&mut self) -> FieldResult<&'a str> {
        self.inner
            .by_ref()
            .find(|t| !t.is_empty())
            .ok_or(FieldError::MissingField)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_fields_in_order() {
        let mut f = Fields::new("game,3,-1");
        assert_eq!(f.next_str().unwrap(), "game");
        assert_eq!(f.next_i32().unwrap(), 3);
        assert_eq!(f.next_i32().unwrap(), -1);
        assert!(!f.has_more());
    }

    #[test]
    fn read_past_end_is_missing_field() {
        let mut f = Fields::new("only");
        assert_eq!(f.next_str().unwrap(), "only");
        assert_eq!(f.next_str(), Err(FieldError::MissingField));
        assert_eq!(f.next_i32(), Err(FieldError::MissingField));
    }

    #[test]
    fn consecutive_separators_collapse() {
        let mut f = Fields::new("a,,b,,,c");
        assert_eq!(f.next_str().unwrap(), "a");
        assert_eq!(f.next_str().unwrap(), "b");
        assert_eq!(f.next_str().unwrap(), "c");
        assert!(!f.has_more());
    }

    #[test]
    fn bad_int_is_typed() {
        let mut f = Fields::new("x");
        assert_eq!(f.next_i32(), Err(FieldError::BadInt));
    }

    #[test]
    fn hex_fields_with_sign() {
        let mut f = Fields::new("a0c,-1b,0");
        assert_eq!(f.next_i32_hex().unwrap(), 0xa0c);
        assert_eq!(f.next_i32_hex().unwrap(), -0x1b);
        assert_eq!(f.next_i32_hex().unwrap(), 0);
        let mut f = Fields::new("zz");
        assert_eq!(f.next_i32_hex(), Err(FieldError::BadHexInt));
    }

    #[test]
    fn bool_conventions() {
        let mut f = Fields::new("true,false,TRUE,yes");
        assert!(f.next_bool_word().unwrap());
        assert!(!f.next_bool_word().unwrap());
        assert!(f.next_bool_word().unwrap());
        assert!(!f.next_bool_word().unwrap());

        let mut f = Fields::new("t,f,x");
        assert!(f.next_bool_letter().unwrap());
        assert!(!f.next_bool_letter().unwrap());
        assert!(!f.next_bool_letter().unwrap());

        let mut f = Fields::new("1,0,7");
        assert!(f.next_bool_bit().unwrap());
        assert!(!f.next_bool_bit().unwrap());
        assert!(f.next_bool_bit().unwrap());
    }

    #[test]
    fn rest_crosses_inner_separators() {
        let mut f = Fields::new("game,7,PL=4,RD=f");
        assert_eq!(f.next_str().unwrap(), "game");
        assert_eq!(f.next_i32().unwrap(), 7);
        assert_eq!(f.rest().unwrap(), "PL=4,RD=f");
        assert!(!f.has_more());
    }

    #[test]
    fn rest_of_empty_body_is_missing() {
        let mut f = Fields::new("game");
        let _ = f.next_str().unwrap();
        assert_eq!(f.rest(), Err(FieldError::MissingField));
    }

    #[test]
    fn count_remaining_does_not_consume() {
        let mut f = Fields::new("g,1,2,3");
        let _ = f.next_str().unwrap();
        assert_eq!(f.count_remaining(), 3);
        assert_eq!(f.next_i32().unwrap(), 1);
        assert_eq!(f.count_remaining(), 2);
    }

    #[test]
    fn tail_variants() {
        let f = Fields::new("alice,bob");
        assert_eq!(f.tail(), vec!["alice".to_owned(), "bob".to_owned()]);

        let f = Fields::new("");
        assert!(f.tail().is_empty());

        let mut f = Fields::new("g,1,2,3");
        let _ = f.next_str().unwrap();
        assert_eq!(f.tail_i32().unwrap(), vec![1, 2, 3]);

        let f = Fields::new("a0,-1");
        assert_eq!(f.tail_i32_hex().unwrap(), vec![0xa0, -1]);
    }

    #[test]
    fn split_on_inner_separator() {
        let mut f = Fields::split_on("game\u{0}alice\u{0}hello, world", '\u{0}');
        assert_eq!(f.next_str().unwrap(), "game");
        assert_eq!(f.next_str().unwrap(), "alice");
        assert_eq!(f.next_str().unwrap(), "hello, world");
        assert_eq!(f.next_str(), Err(FieldError::MissingField));
    }
}
