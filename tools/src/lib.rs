//! Capture-log inspection and decoding tools for the hexline protocol.
//!
//! A capture file is one message line per text line, as read off the
//! wire. These helpers decode captures into structured JSON, summarize
//! traffic per message type, and dump the registry table.
//!
//! # Design Principles
//!
//! - **First-class tooling** - These tools are part of the product, not
//!   afterthoughts.
//! - **Fail-soft like the protocol** - A garbled capture line is
//!   reported and skipped, never fatal.

use std::collections::BTreeMap;

use codec::{decode, DecodeError, Message};
use serde::Serialize;

/// One decoded capture line.
#[derive(Debug, Serialize)]
pub struct DecodedLine {
    /// 1-based line number in the capture.
    pub line: usize,
    pub code: u16,
    pub name: &'static str,
    pub min_version: i32,
    pub message: Message,
}

/// A capture line the dispatcher rejected.
#[derive(Debug, Serialize)]
pub struct RejectedLine {
    /// 1-based line number in the capture.
    pub line: usize,
    pub reason: String,
    pub raw: String,
}

/// Result of decoding a whole capture.
#[derive(Debug, Serialize, Default)]
pub struct DecodeReport {
    pub decoded: Vec<DecodedLine>,
    pub rejected: Vec<RejectedLine>,
}

/// Decodes every line of a capture. Blank lines are skipped.
#[must_use]
pub fn decode_capture(text: &str) -> DecodeReport {
    let mut report = DecodeReport::default();
    for (i, raw) in text.lines().enumerate() {
        let line = i + 1;
        if raw.is_empty() {
            continue;
        }
        match decode(raw) {
            Ok(message) => report.decoded.push(DecodedLine {
                line,
                code: message.type_code(),
                name: message.name(),
                min_version: message.minimum_version(),
                message,
            }),
            Err(err) => report.rejected.push(RejectedLine {
                line,
                reason: err.to_string(),
                raw: raw.to_owned(),
            }),
        }
    }
    report
}

/// Formats one decoded line for human reading.
#[must_use]
pub fn format_decoded_pretty(entry: &DecodedLine) -> String {
    format!(
        "{:>5}  {:<25} {:>5}  {:?}",
        entry.line, entry.name, entry.code, entry.message
    )
}

/// Per-type traffic totals of one capture.
#[derive(Debug, Serialize)]
pub struct InspectReport {
    pub lines: usize,
    pub bytes: usize,
    pub unparseable: usize,
    pub per_type: Vec<TypeCount>,
    /// Codes seen on the wire with no registered decoder.
    pub unknown_codes: Vec<u16>,
}

/// Traffic totals for one message type.
#[derive(Debug, Serialize)]
pub struct TypeCount {
    pub code: u16,
    pub name: &'static str,
    pub count: usize,
    pub bytes: usize,
}

/// Summarizes a capture: message counts and byte totals per type.
#[must_use]
pub fn inspect_capture(text: &str) -> InspectReport {
    let mut per_type: BTreeMap<u16, (usize, usize)> = BTreeMap::new();
    let mut unknown_codes = Vec::new();
    let mut lines = 0;
    let mut bytes = 0;
    let mut unparseable = 0;

    for raw in text.lines() {
        if raw.is_empty() {
            continue;
        }
        lines += 1;
        bytes += raw.len();
        match decode(raw) {
            Ok(message) => {
                let entry = per_type.entry(message.type_code()).or_insert((0, 0));
                entry.0 += 1;
                entry.1 += raw.len();
            }
            Err(DecodeError::UnknownType { code }) => {
                if !unknown_codes.contains(&code) {
                    unknown_codes.push(code);
                }
                unparseable += 1;
            }
            Err(_) => unparseable += 1,
        }
    }

    let per_type = per_type
        .into_iter()
        .map(|(code, (count, bytes))| TypeCount {
            code,
            name: registry::name(code).unwrap_or("?"),
            count,
            bytes,
        })
        .collect();
    InspectReport {
        lines,
        bytes,
        unparseable,
        per_type,
        unknown_codes,
    }
}

/// The registry table as serializable rows.
#[must_use]
pub fn registry_rows() -> &'static [registry::TypeInfo] {
    registry::TYPES
}
