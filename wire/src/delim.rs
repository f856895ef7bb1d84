//! Separator and sentinel characters of the line grammar.

/// Primary separator: splits the type code from the body, and separates
/// parameters of multi-parameter messages. At most one `SEP` appears in a
/// single-parameter message line.
pub const SEP: char = '|';

/// Secondary separator: splits same-level fields inside one parameter.
pub const SEP2: char = ',';

/// Sentinel substituted for an empty string field.
///
/// Two adjacent separators collapse during tokenization, so a genuinely
/// empty field would shift every later field by one position. Senders
/// write this character instead; receivers translate it back to `""`.
pub const EMPTY_FIELD: char = '\t';

/// "Not a game" marker for game-scoped shapes reused by non-game messages.
///
/// No real game name can equal this marker because it fails
/// [`is_single_line_and_safe`].
pub const GAME_NONE: char = '\u{16}';

/// Inner separator of the chat text messages, whose text field may
/// contain [`SEP2`].
pub const TEXT_SEP: char = '\u{0}';

/// Inner separator of the server game-text message.
pub const SERVER_TEXT_SEP: char = '\u{1}';

/// Translates the empty-field sentinel back to `""`.
#[must_use]
pub fn unescape_empty(token: &str) -> &str {
    if is_empty_sentinel(token) {
        ""
    } else {
        token
    }
}

/// Translates the empty-field sentinel (or an empty token) to `None`.
///
/// Used by fields whose absence is meaningful, such as the optional build
/// string of the version handshake.
#[must_use]
pub fn unescape_optional(token: &str) -> Option<&str> {
    if token.is_empty() || is_empty_sentinel(token) {
        None
    } else {
        Some(token)
    }
}

fn is_empty_sentinel(token: &str) -> bool {
    let mut chars = token.chars();
    chars.next() == Some(EMPTY_FIELD) && chars.next().is_none()
}

/// Tests whether a string is non-empty, single-line, and free of the
/// separator characters.
///
/// Rejects control characters and the Unicode line/paragraph separators;
/// ordinary spaces are fine. Names of games, channels, players, and option
/// keys must pass this check before they are placed on the wire.
#[must_use]
pub fn is_single_line_and_safe(s: &str) -> bool {
    is_single_line_and_safe_allowing_seps(s, false)
}

/// Variant of [`is_single_line_and_safe`] that can optionally allow the
/// separator characters, for values that are packed behind an inner
/// delimiter escape.
#[must_use]
pub fn is_single_line_and_safe_allowing_seps(s: &str, allow_sep_chars: bool) -> bool {
    if s.is_empty() {
        return false;
    }
    if !allow_sep_chars && s.contains([SEP, SEP2]) {
        return false;
    }

    s.chars()
        .all(|c| !c.is_control() && c != '\u{2028}' && c != '\u{2029}')
}
