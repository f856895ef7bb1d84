//! Message type-code table for the hexline protocol.
//!
//! Every message type has a small integer code that is assigned once and
//! never reused, plus the lowest protocol version able to understand it.
//! This crate is the single source of that table: symbolic code constants,
//! per-type metadata rows, lookups, and validation of the append-only
//! invariants.
//!
//! # Design Principles
//!
//! - **Append-only** - Old codes are never repurposed; retired codes stay
//!   unassigned forever.
//! - **Metadata only** - Decoders live in the codec crate; this crate knows
//!   codes, names, and versions, nothing about field layouts.
//! - **Validated, not trusted** - `validate()` re-checks the invariants and
//!   runs in tests.

pub mod codes;
mod error;
mod table;

pub use error::{RegistryError, RegistryResult};
pub use table::{info, minimum_version, name, validate, TypeInfo, RETIRED_CODES, TYPES};

/// A message type code: a small positive integer, globally unique.
pub type TypeCode = u16;

/// Protocol version number, as in `1107` for version 1.1.07.
pub type Version = i32;

/// Minimum version for message types that predate version gating.
pub const DEFAULT_MIN_VERSION: Version = 1000;

/// Reserved "null message" code: never sent, never registered.
pub const RESERVED_NULL: TypeCode = 1000;
