//! Delimiter grammar and field-level text primitives for the hexline protocol.
//!
//! Every hexline message travels as one line of delimited text:
//! a decimal type code, the primary separator, then the message body.
//! This crate handles that grammar only: separators and sentinel
//! characters, a tokenizing cursor over a message body, and the
//! field-by-field encoders. It does not know about message types—only
//! the structure of fields.
//!
//! # Design Principles
//!
//! - **Stable wire format** - Separators and sentinels are fixed constants;
//!   changes would break cross-version peers.
//! - **Fail-soft decoding** - Field reads return typed errors; nothing in
//!   this crate panics on wire input.
//! - **No domain knowledge** - This crate handles fields, not game messages.

mod build;
mod delim;
mod error;
mod fields;

pub use build::LineBuilder;
pub use delim::{
    is_single_line_and_safe, is_single_line_and_safe_allowing_seps, unescape_empty,
    unescape_optional, EMPTY_FIELD, GAME_NONE, SEP, SEP2, SERVER_TEXT_SEP, TEXT_SEP,
};
pub use error::{FieldError, FieldResult};
pub use fields::{Fields, SepFields};
