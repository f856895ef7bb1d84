//! Connection, account, and game-lobby messages.

use registry::codes;
use wire::{unescape_empty, unescape_optional, Fields, LineBuilder, SEP2};

use crate::shape;
use crate::types::SeatLockState;

/// Marker prefixed to a game name in [`Games`] when the receiving client
/// is too old to join that game.
pub const GAME_UNJOINABLE_MARKER: char = '?';

/// Version handshake, sent by both sides at connect.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Version {
    /// Version number, as in `2000` for 2.0.00.
    pub version: i32,
    /// Human-readable version, as in `2.0.00`.
    pub version_string: String,
    /// Build identifier, if known.
    pub build: Option<String>,
    /// Server feature list; `None` from clients and old servers.
    pub features: Option<String>,
    /// Client locale; `None` from servers and old clients.
    pub locale: Option<String>,
}

impl Version {
    pub fn encode(&self) -> String {
        let mut b = LineBuilder::new(codes::VERSION);
        b.param_i32(self.version)
            .field(&self.version_string)
            .field_or_empty(self.build.as_deref().unwrap_or(""))
            .field_or_empty(self.features.as_deref().unwrap_or(""));
        if let Some(locale) = &self.locale {
            b.field(locale);
        }
        b.finish()
    }

    pub fn parse(body: &str) -> Option<Self> {
        let mut f = Fields::new(body);
        let version = f.next_i32().ok()?;
        let version_string = f.next_string().ok()?;
        let mut build = None;
        let mut features = None;
        let mut locale = None;
        if let Ok(tok) = f.next_str() {
            build = unescape_optional(tok).map(str::to_owned);
            if let Ok(tok) = f.next_str() {
                features = unescape_optional(tok).map(str::to_owned);
                if let Ok(tok) = f.next_str() {
                    locale = unescape_optional(tok).map(str::to_owned);
                }
            }
        }
        Some(Self {
            version,
            version_string,
            build,
            features,
            locale,
        })
    }
}

/// Server status report: an optional numeric status and display text.
///
/// For backward compatibility a zero status is omitted from the wire
/// entirely; a receiver that finds no leading integer reconstructs 0.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct StatusMessage {
    /// Status value; 0 is "OK" and never encoded.
    pub status_value: i32,
    pub text: String,
}

impl StatusMessage {
    pub fn encode(&self) -> String {
        let mut b = LineBuilder::new(codes::STATUS_MESSAGE);
        if self.status_value > 0 {
            b.param_i32(self.status_value);
            b.field(&self.text);
        } else {
            b.param(&self.text);
        }
        b.finish()
    }

    pub fn parse(body: &str) -> Option<Self> {
        let mut status_value = 0;
        let mut text = body;
        if let Some(i) = body.find(SEP2) {
            if i == 0 {
                // Garbled: started with the separator.
                return None;
            }
            if let Ok(v) = body[..i].parse::<i32>() {
                status_value = v.max(0);
                text = &body[i + 1..];
            }
        }
        Some(Self {
            status_value,
            text: text.to_owned(),
        })
    }
}

/// Server refusal of a new connection; the text explains why.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct RejectConnection {
    pub text: String,
}

impl RejectConnection {
    pub fn encode(&self) -> String {
        shape::encode_name_only(codes::REJECT_CONNECTION, &self.text)
    }

    pub fn parse(body: &str) -> Option<Self> {
        Some(Self {
            text: body.to_owned(),
        })
    }
}

/// Server keepalive, mainly for robot connections.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ServerPing {
    /// Milliseconds until the next expected ping.
    pub sleep_time: i32,
}

impl ServerPing {
    pub fn encode(&self) -> String {
        let mut b = LineBuilder::new(codes::SERVER_PING);
        b.param_i32(self.sleep_time);
        b.finish()
    }

    pub fn parse(body: &str) -> Option<Self> {
        let mut f = Fields::new(body);
        let sleep_time = f.next_i32().ok()?;
        Some(Self { sleep_time })
    }
}

/// Admin liveness probe, answered in the named game.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct AdminPing {
    pub game: String,
}

impl AdminPing {
    pub fn encode(&self) -> String {
        shape::encode_name_only(codes::ADMIN_PING, &self.game)
    }

    pub fn parse(body: &str) -> Option<Self> {
        shape::parse_name_only(body).map(|game| Self { game })
    }
}

/// Admin request to restart the robot fleet. Bodyless on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct AdminReset;

impl AdminReset {
    pub fn encode(&self) -> String {
        LineBuilder::new(codes::ADMIN_RESET).finish()
    }

    pub fn parse(_body: &str) -> Option<Self> {
        Some(Self)
    }
}

/// Text broadcast to every connected client.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct BroadcastTextMsg {
    pub text: String,
}

impl BroadcastTextMsg {
    pub fn encode(&self) -> String {
        shape::encode_name_only(codes::BROADCAST_TEXT_MSG, &self.text)
    }

    pub fn parse(body: &str) -> Option<Self> {
        Some(Self {
            text: body.to_owned(),
        })
    }
}

/// Authentication without joining anything, for tools and account admin.
///
/// The password is the final field and may contain the secondary
/// separator, so it is read with the remainder escape.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct AuthRequest {
    /// Authorization role being requested, such as `P` (play) or `UA`
    /// (user admin).
    pub role: String,
    pub nickname: String,
    /// Authentication scheme number; 1 is the password scheme.
    pub scheme: i32,
    /// Optional server host name the client believes it connected to.
    pub host: Option<String>,
    pub password: String,
}

impl AuthRequest {
    pub fn encode(&self) -> String {
        let mut b = LineBuilder::new(codes::AUTH_REQUEST);
        b.param(&self.role)
            .field(&self.nickname)
            .field_i32(self.scheme)
            .field_or_empty(self.host.as_deref().unwrap_or(""))
            .field(&self.password);
        b.finish()
    }

    pub fn parse(body: &str) -> Option<Self> {
        let mut f = Fields::new(body);
        let role = f.next_string().ok()?;
        let nickname = f.next_string().ok()?;
        let scheme = f.next_i32().ok()?;
        let host = unescape_optional(f.next_str().ok()?).map(str::to_owned);
        let password = f.rest().ok()?.trim().to_owned();
        Some(Self {
            role,
            nickname,
            scheme,
            host,
            password,
        })
    }
}

/// Request to create a user account.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct CreateAccount {
    pub nickname: String,
    pub password: String,
    pub host: String,
    /// Optional; travels as the empty-field sentinel when blank.
    pub email: String,
}

impl CreateAccount {
    pub fn encode(&self) -> String {
        let mut b = LineBuilder::new(codes::CREATE_ACCOUNT);
        b.param(&self.nickname)
            .field(&self.password)
            .field(&self.host)
            .field_or_empty(&self.email);
        b.finish()
    }

    pub fn parse(body: &str) -> Option<Self> {
        let mut f = Fields::new(body);
        let nickname = f.next_string().ok()?;
        let password = f.next_string().ok()?;
        let host = f.next_string().ok()?;
        let email = unescape_empty(f.next_str().ok()?).to_owned();
        Some(Self {
            nickname,
            password,
            host,
            email,
        })
    }
}

/// A robot client announcing itself to the server.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ImARobot {
    pub nickname: String,
    /// Shared-secret cookie proving the bot is allowed to connect.
    pub cookie: String,
    /// Robot brain class, for server-side bookkeeping.
    pub rb_class: String,
}

impl ImARobot {
    pub fn encode(&self) -> String {
        let mut b = LineBuilder::new(codes::IM_A_ROBOT);
        b.param(&self.nickname)
            .field(&self.cookie)
            .field(&self.rb_class);
        b.finish()
    }

    pub fn parse(body: &str) -> Option<Self> {
        let mut f = Fields::new(body);
        let nickname = f.next_string().ok()?;
        let cookie = f.next_string().ok()?;
        let rb_class = f.next_string().ok()?;
        Some(Self {
            nickname,
            cookie,
            rb_class,
        })
    }
}

/// Client request to join or create a game; also echoed by the server to
/// announce another member joining.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct JoinGame {
    pub nickname: String,
    /// Optional; travels as the empty-field sentinel when blank.
    pub password: String,
    /// Unused optional server host, by convention `-`.
    pub host: String,
    pub game: String,
}

impl JoinGame {
    pub fn encode(&self) -> String {
        shape::encode_join(
            codes::JOIN_GAME,
            &self.nickname,
            &self.password,
            &self.host,
            &self.game,
        )
    }

    pub fn parse(body: &str) -> Option<Self> {
        let (nickname, password, host, game) = shape::parse_join(body)?;
        Some(Self {
            nickname,
            password,
            host,
            game,
        })
    }
}

/// Server authorization for a game join request.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct JoinGameAuth {
    pub game: String,
}

impl JoinGameAuth {
    pub fn encode(&self) -> String {
        shape::encode_name_only(codes::JOIN_GAME_AUTH, &self.game)
    }

    pub fn parse(body: &str) -> Option<Self> {
        shape::parse_name_only(body).map(|game| Self { game })
    }
}

/// A member leaving a game.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct LeaveGame {
    pub nickname: String,
    /// Unused optional server host, by convention `-`.
    pub host: String,
    pub game: String,
}

impl LeaveGame {
    pub fn encode(&self) -> String {
        let mut b = LineBuilder::new(codes::LEAVE_GAME);
        b.param(&self.nickname).field(&self.host).field(&self.game);
        b.finish()
    }

    pub fn parse(body: &str) -> Option<Self> {
        let mut f = Fields::new(body);
        let nickname = f.next_string().ok()?;
        let host = f.next_string().ok()?;
        let game = f.next_string().ok()?;
        Some(Self {
            nickname,
            host,
            game,
        })
    }
}

/// Server announcement of a newly created game.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct NewGame {
    /// Game name; may carry the [`GAME_UNJOINABLE_MARKER`] prefix.
    pub game: String,
}

impl NewGame {
    pub fn encode(&self) -> String {
        shape::encode_name_only(codes::NEW_GAME, &self.game)
    }

    pub fn parse(body: &str) -> Option<Self> {
        shape::parse_name_only(body).map(|game| Self { game })
    }
}

/// Server announcement that a finished or emptied game was deleted.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct DeleteGame {
    pub game: String,
}

impl DeleteGame {
    pub fn encode(&self) -> String {
        shape::encode_name_only(codes::DELETE_GAME, &self.game)
    }

    pub fn parse(body: &str) -> Option<Self> {
        shape::parse_name_only(body).map(|game| Self { game })
    }
}

/// Request from the game owner to start play.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct StartGame {
    pub game: String,
}

impl StartGame {
    pub fn encode(&self) -> String {
        shape::encode_name_only(codes::START_GAME, &self.game)
    }

    pub fn parse(body: &str) -> Option<Self> {
        shape::parse_name_only(body).map(|game| Self { game })
    }
}

/// The member list of one game, sent on join.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct GameMembers {
    pub game: String,
    pub members: Vec<String>,
}

impl GameMembers {
    pub fn encode(&self) -> String {
        shape::encode_name_tail(codes::GAME_MEMBERS, &self.game, &self.members)
    }

    pub fn parse(body: &str) -> Option<Self> {
        let (game, members) = shape::parse_name_tail(body)?;
        Some(Self { game, members })
    }
}

/// The game list sent to a connecting client. May be empty.
///
/// Names of games the client is too old to join carry the
/// [`GAME_UNJOINABLE_MARKER`] prefix.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Games {
    pub games: Vec<String>,
}

impl Games {
    pub fn encode(&self) -> String {
        let mut b = LineBuilder::new(codes::GAMES);
        if let Some((first, rest)) = self.games.split_first() {
            b.param(first);
            for g in rest {
                b.field(g);
            }
        } else {
            b.param("");
        }
        b.finish()
    }

    pub fn parse(body: &str) -> Option<Self> {
        Some(Self {
            games: Fields::new(body).tail(),
        })
    }
}

/// A player (human or robot) taking a seat.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct SitDown {
    pub game: String,
    pub nickname: String,
    pub player_number: i32,
    pub robot_flag: bool,
}

impl SitDown {
    pub fn encode(&self) -> String {
        let mut b = LineBuilder::new(codes::SIT_DOWN);
        b.param(&self.game)
            .field(&self.nickname)
            .field_i32(self.player_number)
            .field_bool_word(self.robot_flag);
        b.finish()
    }

    pub fn parse(body: &str) -> Option<Self> {
        let mut f = Fields::new(body);
        let game = f.next_string().ok()?;
        let nickname = f.next_string().ok()?;
        let player_number = f.next_i32().ok()?;
        let robot_flag = f.next_bool_word().ok()?;
        Some(Self {
            game,
            nickname,
            player_number,
            robot_flag,
        })
    }
}

/// A player changing their face icon.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ChangeFace {
    pub game: String,
    pub player_number: i32,
    pub face_id: i32,
}

impl ChangeFace {
    pub fn encode(&self) -> String {
        shape::encode_game_i32x2(
            codes::CHANGE_FACE,
            &self.game,
            self.player_number,
            self.face_id,
        )
    }

    pub fn parse(body: &str) -> Option<Self> {
        let (game, player_number, face_id) = shape::parse_game_i32x2(body)?;
        Some(Self {
            game,
            player_number,
            face_id,
        })
    }
}

/// The lock fields of [`SetSeatLock`]: one seat or the whole table.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum SeatLocks {
    /// Lock state of a single seat.
    One {
        player_number: i32,
        state: SeatLockState,
    },
    /// Lock states of every seat; length is the game's seat count
    /// (4 or 6).
    All(Vec<SeatLockState>),
}

/// Locking or unlocking seats against robot players.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct SetSeatLock {
    pub game: String,
    pub locks: SeatLocks,
}

impl SetSeatLock {
    pub fn encode(&self) -> String {
        let mut b = LineBuilder::new(codes::SET_SEAT_LOCK);
        b.param(&self.game);
        match &self.locks {
            SeatLocks::One {
                player_number,
                state,
            } => {
                b.field_i32(*player_number).field(state.to_wire());
            }
            SeatLocks::All(states) => {
                for st in states {
                    b.field(st.to_wire());
                }
            }
        }
        b.finish()
    }

    pub fn parse(body: &str) -> Option<Self> {
        let mut f = Fields::new(body);
        let game = f.next_string().ok()?;
        let tok = f.next_str().ok()?;
        let locks = if tok.chars().next().is_some_and(|c| c.is_ascii_digit()) {
            let player_number = tok.parse().ok()?;
            let state = SeatLockState::from_wire(f.next_str().ok()?)?;
            SeatLocks::One {
                player_number,
                state,
            }
        } else {
            let count = 1 + f.count_remaining();
            if count != 4 && count != 6 {
                return None;
            }
            let mut states = Vec::with_capacity(count);
            states.push(SeatLockState::from_wire(tok)?);
            for _ in 1..count {
                states.push(SeatLockState::from_wire(f.next_str().ok()?)?);
            }
            SeatLocks::All(states)
        };
        Some(Self { game, locks })
    }
}

/// Final game report: per-seat scores, and which seats were robots.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct GameStats {
    pub game: String,
    pub scores: Vec<i32>,
    pub robots: Vec<bool>,
}

impl GameStats {
    pub fn encode(&self) -> String {
        let mut b = LineBuilder::new(codes::GAME_STATS);
        b.param(&self.game);
        for score in &self.scores {
            b.field_i32(*score);
        }
        for robot in &self.robots {
            b.field_bool_word(*robot);
        }
        b.finish()
    }

    pub fn parse(body: &str) -> Option<Self> {
        let mut f = Fields::new(body);
        let game = f.next_string().ok()?;
        let seats = f.count_remaining() / 2;
        let mut scores = Vec::with_capacity(seats);
        for _ in 0..seats {
            scores.push(f.next_i32().ok()?);
        }
        let mut robots = Vec::with_capacity(seats);
        for _ in 0..seats {
            robots.push(f.next_bool_word().ok()?);
        }
        Some(Self {
            game,
            scores,
            robots,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn version_full_round_trip() {
        let msg = Version {
            version: 2000,
            version_string: "2.0.00".into(),
            build: Some("JM20200229".into()),
            features: Some("6pl;sb".into()),
            locale: Some("en_US".into()),
        };
        assert_eq!(msg.encode(), "9998|2000,2.0.00,JM20200229,6pl;sb,en_US");
        assert_eq!(Version::parse("2000,2.0.00,JM20200229,6pl;sb,en_US"), Some(msg));
    }

    #[test]
    fn version_optionals_absent() {
        let msg = Version {
            version: 1107,
            version_string: "1.1.07".into(),
            build: None,
            features: None,
            locale: None,
        };
        assert_eq!(msg.encode(), "9998|1107,1.1.07,\t,\t");
        assert_eq!(Version::parse("1107,1.1.07,\t,\t"), Some(msg.clone()));
        // An old peer may omit the trailing optionals entirely.
        assert_eq!(Version::parse("1107,1.1.07"), Some(msg));
    }

    #[test]
    fn status_zero_is_omitted() {
        let msg = StatusMessage {
            status_value: 0,
            text: "Welcome to the server".into(),
        };
        assert_eq!(msg.encode(), "1069|Welcome to the server");
        assert_eq!(
            StatusMessage::parse("Welcome to the server"),
            Some(msg)
        );
    }

    #[test]
    fn status_nonzero_has_prefix() {
        let msg = StatusMessage {
            status_value: 4,
            text: "That nickname is already in use".into(),
        };
        assert_eq!(msg.encode(), "1069|4,That nickname is already in use");
        assert_eq!(
            StatusMessage::parse("4,That nickname is already in use"),
            Some(msg)
        );
    }

    #[test]
    fn status_text_with_commas_and_no_numeric_prefix() {
        let parsed = StatusMessage::parse("Sorry, that game is full").unwrap();
        assert_eq!(parsed.status_value, 0);
        assert_eq!(parsed.text, "Sorry, that game is full");
    }

    #[test]
    fn status_leading_separator_is_garbled() {
        assert_eq!(StatusMessage::parse(",oops"), None);
    }

    #[test]
    fn auth_request_password_may_contain_separators() {
        let msg = AuthRequest {
            role: "P".into(),
            nickname: "alice".into(),
            scheme: 1,
            host: None,
            password: "se,sa;me".into(),
        };
        assert_eq!(msg.encode(), "999|P,alice,1,\t,se,sa;me");
        assert_eq!(AuthRequest::parse("P,alice,1,\t,se,sa;me"), Some(msg));
    }

    #[test]
    fn sit_down_robot_flag_is_word_boolean() {
        let msg = SitDown {
            game: "harbor".into(),
            nickname: "robot 3".into(),
            player_number: 2,
            robot_flag: true,
        };
        assert_eq!(msg.encode(), "1012|harbor,robot 3,2,true");
        assert_eq!(SitDown::parse("harbor,robot 3,2,true"), Some(msg));
    }

    #[test]
    fn seat_lock_single_and_whole_table() {
        let one = SetSeatLock {
            game: "g".into(),
            locks: SeatLocks::One {
                player_number: 2,
                state: SeatLockState::Locked,
            },
        };
        assert_eq!(one.encode(), "1068|g,2,true");
        assert_eq!(SetSeatLock::parse("g,2,true"), Some(one));

        let all = SetSeatLock {
            game: "g".into(),
            locks: SeatLocks::All(vec![
                SeatLockState::Unlocked,
                SeatLockState::Locked,
                SeatLockState::ClearOnReset,
                SeatLockState::Unlocked,
            ]),
        };
        assert_eq!(all.encode(), "1068|g,false,true,clear,false");
        assert_eq!(SetSeatLock::parse("g,false,true,clear,false"), Some(all));

        // A state list must cover a full table.
        assert_eq!(SetSeatLock::parse("g,false,true,clear"), None);
    }

    #[test]
    fn game_stats_round_trip() {
        let msg = GameStats {
            game: "harbor".into(),
            scores: vec![10, 7, 4, 8],
            robots: vec![false, true, true, false],
        };
        assert_eq!(msg.encode(), "1061|harbor,10,7,4,8,false,true,true,false");
        assert_eq!(
            GameStats::parse("harbor,10,7,4,8,false,true,true,false"),
            Some(msg)
        );
    }

    #[test]
    fn games_list_with_unjoinable_marker() {
        let msg = Games {
            games: vec!["?old game".into(), "new game".into()],
        };
        assert_eq!(msg.encode(), "1019|?old game,new game");
        let parsed = Games::parse("?old game,new game").unwrap();
        assert!(parsed.games[0].starts_with(GAME_UNJOINABLE_MARKER));
        assert_eq!(parsed, msg);
    }
}
