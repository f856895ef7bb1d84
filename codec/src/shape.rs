//! Shared encode/parse helpers for the recurring message shapes.
//!
//! The protocol has a handful of structural shapes that dozens of types
//! share: a bare game name, a game name plus one to four integers, a
//! name plus a string tail, the join-request layout. Concrete types call
//! these helpers instead of inheriting from anything; only the handful
//! of custom layouts write their fields by hand.

use registry::TypeCode;
use wire::{unescape_empty, Fields, LineBuilder};

/// Encodes `code|name`.
pub(crate) fn encode_name_only(code: TypeCode, name: &str) -> String {
    let mut b = LineBuilder::new(code);
    b.param(name);
    b.finish()
}

/// Parses a bare name body.
pub(crate) fn parse_name_only(body: &str) -> Option<String> {
    let mut f = Fields::new(body);
    let name = f.next_string().ok()?;
    Some(name)
}

/// Encodes `code|game,p1`.
pub(crate) fn encode_game_i32(code: TypeCode, game: &str, p1: i32) -> String {
    let mut b = LineBuilder::new(code);
    b.param(game).field_i32(p1);
    b.finish()
}

/// Parses a game name and one integer.
pub(crate) fn parse_game_i32(body: &str) -> Option<(String, i32)> {
    let mut f = Fields::new(body);
    let game = f.next_string().ok()?;
    let p1 = f.next_i32().ok()?;
    Some((game, p1))
}

/// Encodes `code|game,p1,p2`.
pub(crate) fn encode_game_i32x2(code: TypeCode, game: &str, p1: i32, p2: i32) -> String {
    let mut b = LineBuilder::new(code);
    b.param(game).field_i32(p1).field_i32(p2);
    b.finish()
}

/// Parses a game name and two integers.
pub(crate) fn parse_game_i32x2(body: &str) -> Option<(String, i32, i32)> {
    let mut f = Fields::new(body);
    let game = f.next_string().ok()?;
    let p1 = f.next_i32().ok()?;
    let p2 = f.next_i32().ok()?;
    Some((game, p1, p2))
}

/// Encodes `code|game,p1,p2,p3`.
pub(crate) fn encode_game_i32x3(code: TypeCode, game: &str, p1: i32, p2: i32, p3: i32) -> String {
    let mut b = LineBuilder::new(code);
    b.param(game).field_i32(p1).field_i32(p2).field_i32(p3);
    b.finish()
}

/// Parses a game name and three integers.
pub(crate) fn parse_game_i32x3(body: &str) -> Option<(String, i32, i32, i32)> {
    let mut f = Fields::new(body);
    let game = f.next_string().ok()?;
    let p1 = f.next_i32().ok()?;
    let p2 = f.next_i32().ok()?;
    let p3 = f.next_i32().ok()?;
    Some((game, p1, p2, p3))
}

/// Encodes `code|game,p1,p2,p3,p4`.
pub(crate) fn encode_game_i32x4(
    code: TypeCode,
    game: &str,
    p1: i32,
    p2: i32,
    p3: i32,
    p4: i32,
) -> String {
    let mut b = LineBuilder::new(code);
    b.param(game)
        .field_i32(p1)
        .field_i32(p2)
        .field_i32(p3)
        .field_i32(p4);
    b.finish()
}

/// Parses a game name and four integers.
pub(crate) fn parse_game_i32x4(body: &str) -> Option<(String, i32, i32, i32, i32)> {
    let mut f = Fields::new(body);
    let game = f.next_string().ok()?;
    let p1 = f.next_i32().ok()?;
    let p2 = f.next_i32().ok()?;
    let p3 = f.next_i32().ok()?;
    let p4 = f.next_i32().ok()?;
    Some((game, p1, p2, p3, p4))
}

/// Encodes a name plus a variable-length string tail:
/// `code|name,s1,s2,...`. An empty tail is valid.
pub(crate) fn encode_name_tail(code: TypeCode, name: &str, tail: &[String]) -> String {
    let mut b = LineBuilder::new(code);
    b.param(name);
    for s in tail {
        b.field(s);
    }
    b.finish()
}

/// Parses a name plus a variable-length string tail.
pub(crate) fn parse_name_tail(body: &str) -> Option<(String, Vec<String>)> {
    let mut f = Fields::new(body);
    let name = f.next_string().ok()?;
    Some((name, f.tail()))
}

/// Encodes the join-request shape:
/// `code|nickname,password,host,name`, with the empty-field sentinel
/// standing in for a blank password.
pub(crate) fn encode_join(
    code: TypeCode,
    nickname: &str,
    password: &str,
    host: &str,
    name: &str,
) -> String {
    let mut b = LineBuilder::new(code);
    b.param(nickname)
        .field_or_empty(password)
        .field(host)
        .field(name);
    b.finish()
}

/// Parses the join-request shape, translating the password sentinel back
/// to the empty string.
pub(crate) fn parse_join(body: &str) -> Option<(String, String, String, String)> {
    let mut f = Fields::new(body);
    let nickname = f.next_string().ok()?;
    let password = unescape_empty(f.next_str().ok()?).to_owned();
    let host = f.next_string().ok()?;
    let name = f.next_string().ok()?;
    Some((nickname, password, host, name))
}
