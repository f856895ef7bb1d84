//! Composite value types shared across message shapes.

use std::collections::BTreeMap;
use std::fmt;

use wire::{Fields, LineBuilder};

/// The resource kinds, in the fixed wire order both sides must agree on.
///
/// The numbering is part of the protocol: element-type fields and the
/// per-resource count vectors are keyed by these values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[repr(i32)]
pub enum ResourceType {
    Clay = 1,
    Ore = 2,
    Sheep = 3,
    Wheat = 4,
    Wood = 5,
    /// Face-down or otherwise hidden resources.
    Unknown = 6,
}

impl ResourceType {
    /// All resource types, in wire order.
    pub const ALL: [Self; 6] = [
        Self::Clay,
        Self::Ore,
        Self::Sheep,
        Self::Wheat,
        Self::Wood,
        Self::Unknown,
    ];

    /// The five known (tradeable) types, excluding `Unknown`.
    pub const KNOWN: [Self; 5] = [
        Self::Clay,
        Self::Ore,
        Self::Sheep,
        Self::Wheat,
        Self::Wood,
    ];

    /// Parses a wire value into a resource type.
    #[must_use]
    pub const fn from_i32(v: i32) -> Option<Self> {
        match v {
            1 => Some(Self::Clay),
            2 => Some(Self::Ore),
            3 => Some(Self::Sheep),
            4 => Some(Self::Wheat),
            5 => Some(Self::Wood),
            6 => Some(Self::Unknown),
            _ => None,
        }
    }

    /// The wire value of this resource type.
    #[must_use]
    pub const fn to_i32(self) -> i32 {
        self as i32
    }
}

/// A fixed-order vector of per-resource-type counts.
///
/// Built once at message-construction time and read-only afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ResourceSet {
    counts: [i32; 6],
}

impl ResourceSet {
    /// The empty set.
    pub const EMPTY: Self = Self { counts: [0; 6] };

    /// Creates a set from the six counts in wire order.
    #[must_use]
    pub const fn new(clay: i32, ore: i32, sheep: i32, wheat: i32, wood: i32, unknown: i32) -> Self {
        Self {
            counts: [clay, ore, sheep, wheat, wood, unknown],
        }
    }

    /// Creates a set from a wire-ordered count array.
    #[must_use]
    pub const fn from_counts(counts: [i32; 6]) -> Self {
        Self { counts }
    }

    /// The count of one resource type.
    #[must_use]
    pub const fn amount(&self, rtype: ResourceType) -> i32 {
        self.counts[rtype as usize - 1]
    }

    /// Total count across all six types.
    #[must_use]
    pub fn total(&self) -> i32 {
        self.counts.iter().sum()
    }

    /// Total count across the known types, ignoring `Unknown`.
    #[must_use]
    pub fn known_total(&self) -> i32 {
        self.counts[..5].iter().sum()
    }

    /// Writes the five known counts as fields, the trade-message layout.
    pub(crate) fn push_known(&self, b: &mut LineBuilder) {
        for rtype in ResourceType::KNOWN {
            b.field_i32(self.amount(rtype));
        }
    }

    /// Writes all six counts as fields, the discard/pick layout.
    pub(crate) fn push_all(&self, b: &mut LineBuilder) {
        for rtype in ResourceType::ALL {
            b.field_i32(self.amount(rtype));
        }
    }

    /// Reads the five known counts from fields.
    pub(crate) fn parse_known(f: &mut Fields<'_>) -> Option<Self> {
        let mut counts = [0; 6];
        for slot in &mut counts[..5] {
            *slot = f.next_i32().ok()?;
        }
        Some(Self { counts })
    }

    /// Reads all six counts from fields.
    pub(crate) fn parse_all(f: &mut Fields<'_>) -> Option<Self> {
        let mut counts = [0; 6];
        for slot in &mut counts {
            *slot = f.next_i32().ok()?;
        }
        Some(Self { counts })
    }
}

impl fmt::Display for ResourceSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "clay={}|ore={}|sheep={}|wheat={}|wood={}|unknown={}",
            self.counts[0], self.counts[1], self.counts[2], self.counts[3], self.counts[4],
            self.counts[5]
        )
    }
}

/// One player's trade offer: who offers, who may accept, and the two
/// resource sets on the table.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct TradeOffer {
    /// Seat number of the offering player.
    pub from: i32,
    /// Per-seat flags: `true` where the offer is addressed to that seat.
    /// Length equals the game's seat count.
    pub to: Vec<bool>,
    /// Resources the offerer gives away.
    pub give: ResourceSet,
    /// Resources the offerer wants back.
    pub get: ResourceSet,
}

/// Seat lock states, with their word-boolean wire spellings.
///
/// `Locked`/`Unlocked` predate the third state and keep the legacy
/// `true`/`false` tokens; `ClearOnReset` was added later as `clear`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum SeatLockState {
    Locked,
    Unlocked,
    ClearOnReset,
}

impl SeatLockState {
    /// The wire token for this state.
    #[must_use]
    pub const fn to_wire(self) -> &'static str {
        match self {
            Self::Locked => "true",
            Self::Unlocked => "false",
            Self::ClearOnReset => "clear",
        }
    }

    /// Parses a wire token.
    #[must_use]
    pub fn from_wire(tok: &str) -> Option<Self> {
        match tok {
            "true" => Some(Self::Locked),
            "false" => Some(Self::Unlocked),
            "clear" => Some(Self::ClearOnReset),
            _ => None,
        }
    }
}

/// Tuning parameters pushed to robot clients.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct RobotParameters {
    pub max_game_length: i32,
    pub max_eta: i32,
    pub eta_bonus_factor: f32,
    pub adversarial_factor: f32,
    pub leader_adversarial_factor: f32,
    pub dev_card_multiplier: f32,
    pub threat_multiplier: f32,
    pub strategy_type: i32,
    pub trade_flag: i32,
}

/// A typed game-option value inside a packed option table.
///
/// Values are packed as letter booleans, integers, a letter boolean
/// immediately followed by an integer, or a raw string. A value whose
/// spelling matches none of those patterns stays a string.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum OptionValue {
    Bool(bool),
    Int(i32),
    IntBool(bool, i32),
    Str(String),
}

impl OptionValue {
    fn pack_into(&self, out: &mut String) {
        match self {
            Self::Bool(b) => out.push(if *b { 't' } else { 'f' }),
            Self::Int(v) => out.push_str(&v.to_string()),
            Self::IntBool(b, v) => {
                out.push(if *b { 't' } else { 'f' });
                out.push_str(&v.to_string());
            }
            Self::Str(s) => out.push_str(s),
        }
    }

    fn unpack(raw: &str) -> Self {
        match raw {
            "t" => return Self::Bool(true),
            "f" => return Self::Bool(false),
            _ => {}
        }
        if let Some(num) = raw.strip_prefix(['t', 'f']) {
            if let Ok(v) = num.parse() {
                return Self::IntBool(raw.starts_with('t'), v);
            }
        }
        if let Ok(v) = raw.parse() {
            return Self::Int(v);
        }
        Self::Str(raw.to_owned())
    }
}

/// A name-keyed table of game options, packed into one wire field.
///
/// The packed form is `KEY=value` entries joined by the secondary
/// separator; an empty table packs as `-`. Because the packed form
/// contains the secondary separator, messages always place it last and
/// parse it with the remainder escape.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct GameOptions {
    entries: BTreeMap<String, OptionValue>,
}

impl GameOptions {
    /// Creates an empty option table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an option, replacing any previous value for the key.
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: OptionValue) -> Self {
        self.entries.insert(key.into(), value);
        self
    }

    /// Looks up an option by key.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&OptionValue> {
        self.entries.get(key)
    }

    /// Returns `true` if no options are set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over the entries in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &OptionValue)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Packs the table into its single-field wire form.
    #[must_use]
    pub fn pack(&self) -> String {
        if self.entries.is_empty() {
            return "-".to_owned();
        }
        let mut out = String::new();
        for (i, (key, value)) in self.entries.iter().enumerate() {
            if i > 0 {
                out.push(wire::SEP2);
            }
            out.push_str(key);
            out.push('=');
            value.pack_into(&mut out);
        }
        out
    }

    /// Unpacks a packed option field. `-` is the empty table.
    #[must_use]
    pub fn unpack(packed: &str) -> Option<Self> {
        let mut entries = BTreeMap::new();
        if packed == "-" || packed.is_empty() {
            return Some(Self { entries });
        }
        for entry in packed.split(wire::SEP2) {
            if entry.is_empty() {
                continue;
            }
            let (key, raw) = entry.split_once('=')?;
            if key.is_empty() {
                return None;
            }
            entries.insert(key.to_owned(), OptionValue::unpack(raw));
        }
        Some(Self { entries })
    }
}
