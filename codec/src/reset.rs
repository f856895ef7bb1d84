//! Board-reset negotiation: request, vote, and outcome messages.

use registry::codes;
use wire::{Fields, LineBuilder};

use crate::shape;

/// A player asking to reset the board and start the game over.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ResetBoardRequest {
    pub game: String,
}

impl ResetBoardRequest {
    pub fn encode(&self) -> String {
        shape::encode_name_only(codes::RESET_BOARD_REQUEST, &self.game)
    }

    pub fn parse(body: &str) -> Option<Self> {
        shape::parse_name_only(body).map(|game| Self { game })
    }
}

/// Server announcement that the reset is happening: the old game is
/// torn down and members rejoin the new one.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ResetBoardAuth {
    pub game: String,
    /// Seat that should rejoin first (the robot scheduling anchor).
    pub rejoin_player: i32,
    /// Seat that requested the reset.
    pub requester: i32,
}

impl ResetBoardAuth {
    pub fn encode(&self) -> String {
        shape::encode_game_i32x2(
            codes::RESET_BOARD_AUTH,
            &self.game,
            self.rejoin_player,
            self.requester,
        )
    }

    pub fn parse(body: &str) -> Option<Self> {
        let (game, rejoin_player, requester) = shape::parse_game_i32x2(body)?;
        Some(Self {
            game,
            rejoin_player,
            requester,
        })
    }
}

/// Server prompt that a player must vote on the proposed reset.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ResetBoardVoteRequest {
    pub game: String,
    /// Seat that proposed the reset.
    pub requester: i32,
}

impl ResetBoardVoteRequest {
    pub fn encode(&self) -> String {
        shape::encode_game_i32(codes::RESET_BOARD_VOTE_REQUEST, &self.game, self.requester)
    }

    pub fn parse(body: &str) -> Option<Self> {
        let (game, requester) = shape::parse_game_i32(body)?;
        Some(Self { game, requester })
    }
}

/// One player's reset vote.
///
/// The vote travels as the legacy `1`/`0` bit boolean, not as
/// `true`/`false`.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ResetBoardVote {
    pub game: String,
    pub player_number: i32,
    pub vote_yes: bool,
}

impl ResetBoardVote {
    pub fn encode(&self) -> String {
        let mut b = LineBuilder::new(codes::RESET_BOARD_VOTE);
        b.param(&self.game)
            .field_i32(self.player_number)
            .field_bool_bit(self.vote_yes);
        b.finish()
    }

    pub fn parse(body: &str) -> Option<Self> {
        let mut f = Fields::new(body);
        let game = f.next_string().ok()?;
        let player_number = f.next_i32().ok()?;
        let vote_yes = f.next_bool_bit().ok()?;
        Some(Self {
            game,
            player_number,
            vote_yes,
        })
    }
}

/// Server announcement that the reset was voted down.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ResetBoardReject {
    pub game: String,
}

impl ResetBoardReject {
    pub fn encode(&self) -> String {
        shape::encode_name_only(codes::RESET_BOARD_REJECT, &self.game)
    }

    pub fn parse(body: &str) -> Option<Self> {
        shape::parse_name_only(body).map(|game| Self { game })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vote_uses_bit_boolean() {
        let yes = ResetBoardVote {
            game: "g".into(),
            player_number: 2,
            vote_yes: true,
        };
        assert_eq!(yes.encode(), "1076|g,2,1");
        assert_eq!(ResetBoardVote::parse("g,2,1"), Some(yes));

        let no = ResetBoardVote {
            game: "g".into(),
            player_number: 3,
            vote_yes: false,
        };
        assert_eq!(no.encode(), "1076|g,3,0");
        assert_eq!(ResetBoardVote::parse("g,3,0"), Some(no));
    }

    #[test]
    fn reset_auth_round_trip() {
        let msg = ResetBoardAuth {
            game: "g".into(),
            rejoin_player: 1,
            requester: 3,
        };
        assert_eq!(msg.encode(), "1074|g,1,3");
        assert_eq!(ResetBoardAuth::parse("g,1,3"), Some(msg));
    }
}
