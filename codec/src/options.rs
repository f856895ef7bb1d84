//! Game-option negotiation and localization messages.
//!
//! The packed option table travels as one field that legitimately
//! contains the secondary separator, so every message carrying it puts
//! it last and parses it with the remainder escape.

use registry::codes;
use wire::{unescape_empty, Fields, LineBuilder, GAME_NONE};

use crate::shape;
use crate::types::GameOptions;

/// End-of-list / "none" marker shared by the option-info and
/// scenario-info replies.
pub const MARKER_NO_MORE: &str = "-";

/// Client marker asking for info on any scenario changed since its
/// version.
pub const MARKER_ANY_CHANGED: &str = "?";

/// Token appended to [`GameOptionGetInfos`] asking for localized option
/// descriptions.
pub const OPTKEY_GET_I18N_DESCS: &str = "?I18N";

/// `last_mod_version` marker in a [`ScenarioInfo`] reply for a scenario
/// key the server does not know.
const MARKER_KEY_UNKNOWN: i32 = -2;

/// Announcement of a new game and the options it was created with, for
/// clients new enough to understand options.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct NewGameWithOptions {
    pub game: String,
    /// Minimum client version able to join, or -1 if unrestricted.
    pub min_version: i32,
    pub options: GameOptions,
}

impl NewGameWithOptions {
    pub fn encode(&self) -> String {
        let mut b = LineBuilder::new(codes::NEW_GAME_WITH_OPTIONS);
        b.param(&self.game)
            .field_i32(self.min_version)
            .field(&self.options.pack());
        b.finish()
    }

    pub fn parse(body: &str) -> Option<Self> {
        let mut f = Fields::new(body);
        let game = f.next_string().ok()?;
        let min_version = f.next_i32().ok()?;
        let options = GameOptions::unpack(f.rest().ok()?)?;
        Some(Self {
            game,
            min_version,
            options,
        })
    }
}

/// Client request to create a game with specific options.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct NewGameWithOptionsRequest {
    pub nickname: String,
    /// Optional; travels as the empty-field sentinel when blank.
    pub password: String,
    /// Unused optional server host, by convention `-`.
    pub host: String,
    pub game: String,
    pub options: GameOptions,
}

impl NewGameWithOptionsRequest {
    pub fn encode(&self) -> String {
        let mut b = LineBuilder::new(codes::NEW_GAME_WITH_OPTIONS_REQUEST);
        b.param(&self.nickname)
            .field_or_empty(&self.password)
            .field(&self.host)
            .field(&self.game)
            .field(&self.options.pack());
        b.finish()
    }

    pub fn parse(body: &str) -> Option<Self> {
        let mut f = Fields::new(body);
        let nickname = f.next_string().ok()?;
        let password = unescape_empty(f.next_str().ok()?).to_owned();
        let host = f.next_string().ok()?;
        let game = f.next_string().ok()?;
        let options = GameOptions::unpack(f.rest().ok()?)?;
        Some(Self {
            nickname,
            password,
            host,
            game,
            options,
        })
    }
}

/// Request for the server's default game options, and the reply carrying
/// them. A request from the client has no body.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct GameOptionGetDefaults {
    pub options: Option<GameOptions>,
}

impl GameOptionGetDefaults {
    pub fn encode(&self) -> String {
        let mut b = LineBuilder::new(codes::GAME_OPTION_GET_DEFAULTS);
        if let Some(options) = &self.options {
            b.param(&options.pack());
        }
        b.finish()
    }

    pub fn parse(body: &str) -> Option<Self> {
        let options = if body.is_empty() {
            None
        } else {
            Some(GameOptions::unpack(body)?)
        };
        Some(Self { options })
    }
}

/// Client request for option metadata: specific keys, or `-` for all
/// options newer than the client, plus an optional i18n token.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct GameOptionGetInfos {
    /// Keys to describe, or `None` for "everything I might not know".
    pub option_keys: Option<Vec<String>>,
    /// Whether the client also wants localized option descriptions.
    pub want_i18n_descs: bool,
}

impl GameOptionGetInfos {
    pub fn encode(&self) -> String {
        let mut b = LineBuilder::new(codes::GAME_OPTION_GET_INFOS);
        match &self.option_keys {
            Some(keys) if !keys.is_empty() => {
                b.param(&keys[0]);
                for key in &keys[1..] {
                    b.field(key);
                }
                if self.want_i18n_descs {
                    b.field(OPTKEY_GET_I18N_DESCS);
                }
            }
            _ => {
                if self.want_i18n_descs {
                    b.param(OPTKEY_GET_I18N_DESCS);
                } else {
                    b.param(MARKER_NO_MORE);
                }
            }
        }
        b.finish()
    }

    pub fn parse(body: &str) -> Option<Self> {
        let mut keys = Vec::new();
        let mut want_i18n_descs = false;
        let mut had_dash = false;
        let mut f = Fields::new(body);
        while let Ok(tok) = f.next_str() {
            if tok == OPTKEY_GET_I18N_DESCS {
                want_i18n_descs = true;
            } else if tok == MARKER_NO_MORE {
                had_dash = true;
            } else {
                keys.push(tok.to_owned());
            }
        }
        let option_keys = if had_dash || keys.is_empty() {
            None
        } else {
            Some(keys)
        };
        Some(Self {
            option_keys,
            want_i18n_descs,
        })
    }
}

/// The current value of an option in a [`GameOptionInfo`] reply: an
/// integer for the numeric option types, a string for the string types.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum OptionInfoValue {
    Int(i32),
    Str(String),
}

/// Server reply describing one game option, or the end-of-list marker.
///
/// This is a multi-parameter message: every field is separated by the
/// primary separator, so descriptions may contain commas.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct GameOptionInfo {
    /// Option key, or `-` as the end-of-list marker.
    pub key: String,
    /// Option type: 0 unknown, 1 bool, 2 int, 3 int+bool, 4 enum,
    /// 5 enum+bool, 6 string, 7 hidden string.
    pub option_type: i32,
    pub min_version: i32,
    pub last_mod_version: i32,
    pub default_bool: bool,
    pub default_int: i32,
    pub min_int: i32,
    pub max_int: i32,
    pub current_bool: bool,
    pub current_value: OptionInfoValue,
    pub drop_if_unused: bool,
    pub description: String,
    /// Choice labels for the enum option types; empty otherwise.
    pub enum_values: Vec<String>,
}

impl GameOptionInfo {
    pub const OTYPE_UNKNOWN: i32 = 0;
    pub const OTYPE_BOOL: i32 = 1;
    pub const OTYPE_INT: i32 = 2;
    pub const OTYPE_INTBOOL: i32 = 3;
    pub const OTYPE_ENUM: i32 = 4;
    pub const OTYPE_ENUMBOOL: i32 = 5;
    pub const OTYPE_STR: i32 = 6;
    pub const OTYPE_STRHIDE: i32 = 7;

    const fn is_string_type(otype: i32) -> bool {
        otype == Self::OTYPE_STR || otype == Self::OTYPE_STRHIDE
    }

    const fn is_enum_type(otype: i32) -> bool {
        otype == Self::OTYPE_ENUM || otype == Self::OTYPE_ENUMBOOL
    }

    pub fn encode(&self) -> String {
        let mut b = LineBuilder::new(codes::GAME_OPTION_INFO);
        b.param(&self.key)
            .param_i32(self.option_type)
            .param_i32(self.min_version)
            .param_i32(self.last_mod_version)
            .param(if self.default_bool { "t" } else { "f" })
            .param_i32(self.default_int)
            .param_i32(self.min_int)
            .param_i32(self.max_int)
            .param(if self.current_bool { "t" } else { "f" });
        match &self.current_value {
            OptionInfoValue::Int(v) => b.param_i32(*v),
            OptionInfoValue::Str(s) => b.param_or_empty(s),
        };
        b.param(if self.drop_if_unused { "t" } else { "f" })
            .param_or_empty(&self.description);
        for choice in &self.enum_values {
            b.param_or_empty(choice);
        }
        b.finish()
    }

    pub fn parse(params: &[&str]) -> Option<Self> {
        if params.len() < 11 {
            return None;
        }
        let key = params[0].to_owned();
        let mut option_type: i32 = params[1].parse().ok()?;
        if !(Self::OTYPE_UNKNOWN..=Self::OTYPE_STRHIDE).contains(&option_type) {
            option_type = Self::OTYPE_UNKNOWN;
        }
        let min_version = params[2].parse().ok()?;
        let last_mod_version = params[3].parse().ok()?;
        let default_bool = params[4] == "t";
        let default_int = params[5].parse().ok()?;
        let min_int = params[6].parse().ok()?;
        let max_int = params[7].parse().ok()?;
        let current_bool = params[8] == "t";
        let current_value = if Self::is_string_type(option_type) {
            OptionInfoValue::Str(unescape_empty(params[9]).to_owned())
        } else {
            OptionInfoValue::Int(params[9].parse().ok()?)
        };
        let drop_if_unused = params[10] == "t";
        let description = params
            .get(11)
            .map(|p| unescape_empty(p).to_owned())
            .unwrap_or_default();
        if !Self::is_enum_type(option_type) && params.len() > 12 {
            return None;
        }
        let enum_values = params
            .get(12..)
            .unwrap_or_default()
            .iter()
            .map(|p| unescape_empty(p).to_owned())
            .collect();
        Some(Self {
            key,
            option_type,
            min_version,
            last_mod_version,
            default_bool,
            default_int,
            min_int,
            max_int,
            current_bool,
            current_value,
            drop_if_unused,
            description,
            enum_values,
        })
    }
}

/// One game in a [`GamesWithOptions`] list.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct GameWithOptions {
    pub game: String,
    pub options: GameOptions,
}

/// The game list with each game's creation options, replacing the plain
/// game list for clients new enough to understand options.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct GamesWithOptions {
    pub games: Vec<GameWithOptions>,
}

impl GamesWithOptions {
    pub fn encode(&self) -> String {
        let mut b = LineBuilder::new(codes::GAMES_WITH_OPTIONS);
        b.param(MARKER_NO_MORE);
        for entry in &self.games {
            b.param(&entry.game);
            b.param(&entry.options.pack());
        }
        b.finish()
    }

    pub fn parse(params: &[&str]) -> Option<Self> {
        let (first, rest) = params.split_first()?;
        if *first != MARKER_NO_MORE {
            return None;
        }
        if rest.len() % 2 != 0 {
            return None;
        }
        let mut games = Vec::with_capacity(rest.len() / 2);
        for pair in rest.chunks_exact(2) {
            games.push(GameWithOptions {
                game: pair[0].to_owned(),
                options: GameOptions::unpack(unescape_empty(pair[1]))?,
            });
        }
        Some(Self { games })
    }
}

/// A batch of localized strings keyed by type, such as scenario or game
/// option descriptions.
///
/// Multi-parameter: items may contain commas; blank items travel as the
/// empty-field sentinel.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct LocalizedStrings {
    /// String type token, such as `G` (game options) or `S` (scenarios).
    pub string_type: String,
    /// Flag bits, hex on the wire.
    pub flags: i32,
    pub strings: Vec<String>,
}

impl LocalizedStrings {
    /// Flag: the sender has no more strings of this type.
    pub const FLAG_SENT_ALL: i32 = 0x01;
    /// Flag: the request's locale is unknown to the server.
    pub const FLAG_REQ_ALL: i32 = 0x02;

    pub fn encode(&self) -> String {
        let mut b = LineBuilder::new(codes::LOCALIZED_STRINGS);
        b.param(&self.string_type);
        b.param(&format!("{:x}", self.flags));
        for s in &self.strings {
            b.param_or_empty(s);
        }
        b.finish()
    }

    pub fn parse(params: &[&str]) -> Option<Self> {
        if params.len() < 2 {
            return None;
        }
        let string_type = params[0].to_owned();
        let flags = i32::from_str_radix(params[1], 16).ok()?;
        let strings = params[2..]
            .iter()
            .map(|p| unescape_empty(p).to_owned())
            .collect();
        Some(Self {
            string_type,
            flags,
            strings,
        })
    }
}

/// Scenario metadata exchange: a client request for scenario keys, or a
/// server reply describing one scenario.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum ScenarioInfo {
    /// Client request for one or more scenario keys; `any_changed` also
    /// asks about every scenario changed since the client's version.
    Request {
        keys: Vec<String>,
        any_changed: bool,
    },
    /// Server: no more scenarios to describe.
    NoMoreScenarios,
    /// Server: the requested key is unknown.
    UnknownKey { key: String },
    /// Server: one scenario's metadata.
    Scenario {
        key: String,
        min_version: i32,
        last_mod_version: i32,
        /// Packed game options the scenario turns on; never empty.
        options: String,
        description: String,
        long_description: Option<String>,
    },
}

impl ScenarioInfo {
    pub fn encode(&self) -> String {
        let mut b = LineBuilder::new(codes::SCENARIO_INFO);
        match self {
            Self::Request { keys, any_changed } => {
                b.param(&GAME_NONE.to_string());
                for key in keys {
                    b.param(key);
                }
                if *any_changed {
                    b.param(MARKER_ANY_CHANGED);
                }
            }
            Self::NoMoreScenarios => {
                b.param(MARKER_NO_MORE);
                for _ in 0..4 {
                    b.param_or_empty("");
                }
            }
            Self::UnknownKey { key } => {
                b.param(key);
                b.param_i32(0);
                b.param_i32(MARKER_KEY_UNKNOWN);
                b.param_or_empty("");
                b.param_or_empty("");
            }
            Self::Scenario {
                key,
                min_version,
                last_mod_version,
                options,
                description,
                long_description,
            } => {
                b.param(key);
                b.param_i32(*min_version);
                b.param_i32(*last_mod_version);
                b.param(options);
                b.param_or_empty(description);
                match long_description.as_deref() {
                    Some(long) if !long.is_empty() => {
                        b.param(long);
                    }
                    _ => {}
                }
            }
        }
        b.finish()
    }

    pub fn parse(params: &[&str]) -> Option<Self> {
        let first = *params.first()?;
        if first.chars().eq(std::iter::once(GAME_NONE)) {
            let mut keys: Vec<String> = Vec::new();
            let mut any_changed = false;
            for &p in &params[1..] {
                if p == MARKER_ANY_CHANGED {
                    any_changed = true;
                } else {
                    keys.push(p.to_owned());
                }
            }
            if keys.is_empty() && !any_changed {
                return None;
            }
            return Some(Self::Request { keys, any_changed });
        }

        if params.len() < 5 {
            return None;
        }
        if first == MARKER_NO_MORE {
            return Some(Self::NoMoreScenarios);
        }
        let min_version = params[1].parse().ok()?;
        let last_mod_version: i32 = params[2].parse().ok()?;
        if last_mod_version == MARKER_KEY_UNKNOWN {
            return Some(Self::UnknownKey {
                key: first.to_owned(),
            });
        }
        Some(Self::Scenario {
            key: first.to_owned(),
            min_version,
            last_mod_version,
            options: unescape_empty(params[3]).to_owned(),
            description: unescape_empty(params[4]).to_owned(),
            long_description: params.get(5).map(|p| (*p).to_owned()),
        })
    }
}
