//! The decoding dispatcher: one table from type code to decoder.

use registry::{codes, TypeCode};
use wire::SEP;

use crate::error::{DecodeError, DecodeResult};
use crate::message::Message;
use crate::{action, board, channel, flow, lobby, options, reset, robot, trade};

/// The undecoded remainder of a line, after the type code.
///
/// Single-parameter decoders receive [`data`](Self::data), the text up
/// to the next primary separator; stray separators after it never reach
/// them. Multi-parameter decoders receive [`params`](Self::params),
/// every separator-delimited segment.
#[derive(Debug, Clone, Copy)]
struct Payload<'a> {
    rest: &'a str,
}

impl<'a> Payload<'a> {
    /// The first primary-separated segment, or `""` if the body is
    /// empty.
    fn data(&self) -> &'a str {
        self.rest.split(SEP).find(|s| !s.is_empty()).unwrap_or("")
    }

    /// Every primary-separated segment, empties collapsed.
    fn params(&self) -> Vec<&'a str> {
        self.rest.split(SEP).filter(|s| !s.is_empty()).collect()
    }
}

type DecodeFn = fn(&Payload<'_>) -> Option<Message>;

/// The dispatch table: one `(code, decoder)` entry per registered
/// message type, in ascending code order. This is the only place a
/// type code meets its decoder.
static DECODERS: &[(TypeCode, DecodeFn)] = &[
    (codes::AUTH_REQUEST, |p| {
        lobby::AuthRequest::parse(p.data()).map(Message::AuthRequest)
    }),
    (codes::NEW_CHANNEL, |p| {
        channel::NewChannel::parse(p.data()).map(Message::NewChannel)
    }),
    (codes::CHANNEL_MEMBERS, |p| {
        channel::ChannelMembers::parse(p.data()).map(Message::ChannelMembers)
    }),
    (codes::CHANNELS, |p| {
        channel::Channels::parse(p.data()).map(Message::Channels)
    }),
    (codes::JOIN_CHANNEL, |p| {
        channel::JoinChannel::parse(p.data()).map(Message::JoinChannel)
    }),
    (codes::CHANNEL_TEXT_MSG, |p| {
        channel::ChannelTextMsg::parse(p.data()).map(Message::ChannelTextMsg)
    }),
    (codes::LEAVE_CHANNEL, |p| {
        channel::LeaveChannel::parse(p.data()).map(Message::LeaveChannel)
    }),
    (codes::DELETE_CHANNEL, |p| {
        channel::DeleteChannel::parse(p.data()).map(Message::DeleteChannel)
    }),
    (codes::LEAVE_ALL, |p| {
        channel::LeaveAll::parse(p.data()).map(Message::LeaveAll)
    }),
    (codes::PUT_PIECE, |p| {
        board::PutPiece::parse(p.data()).map(Message::PutPiece)
    }),
    (codes::GAME_TEXT_MSG, |p| {
        flow::GameTextMsg::parse(p.data()).map(Message::GameTextMsg)
    }),
    (codes::LEAVE_GAME, |p| {
        lobby::LeaveGame::parse(p.data()).map(Message::LeaveGame)
    }),
    (codes::SIT_DOWN, |p| {
        lobby::SitDown::parse(p.data()).map(Message::SitDown)
    }),
    (codes::JOIN_GAME, |p| {
        lobby::JoinGame::parse(p.data()).map(Message::JoinGame)
    }),
    (codes::BOARD_LAYOUT, |p| {
        board::BoardLayout::parse(p.data()).map(Message::BoardLayout)
    }),
    (codes::DELETE_GAME, |p| {
        lobby::DeleteGame::parse(p.data()).map(Message::DeleteGame)
    }),
    (codes::NEW_GAME, |p| {
        lobby::NewGame::parse(p.data()).map(Message::NewGame)
    }),
    (codes::GAME_MEMBERS, |p| {
        lobby::GameMembers::parse(p.data()).map(Message::GameMembers)
    }),
    (codes::START_GAME, |p| {
        lobby::StartGame::parse(p.data()).map(Message::StartGame)
    }),
    (codes::GAMES, |p| {
        lobby::Games::parse(p.data()).map(Message::Games)
    }),
    (codes::JOIN_CHANNEL_AUTH, |p| {
        channel::JoinChannelAuth::parse(p.data()).map(Message::JoinChannelAuth)
    }),
    (codes::JOIN_GAME_AUTH, |p| {
        lobby::JoinGameAuth::parse(p.data()).map(Message::JoinGameAuth)
    }),
    (codes::IM_A_ROBOT, |p| {
        lobby::ImARobot::parse(p.data()).map(Message::ImARobot)
    }),
    (codes::BOT_JOIN_GAME_REQUEST, |p| {
        robot::BotJoinGameRequest::parse(p.data()).map(Message::BotJoinGameRequest)
    }),
    (codes::PLAYER_ELEMENT, |p| {
        action::PlayerElement::parse(p.data()).map(Message::PlayerElement)
    }),
    (codes::GAME_STATE, |p| {
        flow::GameState::parse(p.data()).map(Message::GameState)
    }),
    (codes::TURN, |p| flow::Turn::parse(p.data()).map(Message::Turn)),
    (codes::DICE_RESULT, |p| {
        flow::DiceResult::parse(p.data()).map(Message::DiceResult)
    }),
    (codes::DISCARD_REQUEST, |p| {
        action::DiscardRequest::parse(p.data()).map(Message::DiscardRequest)
    }),
    (codes::ROLL_DICE_REQUEST, |p| {
        flow::RollDiceRequest::parse(p.data()).map(Message::RollDiceRequest)
    }),
    (codes::ROLL_DICE, |p| {
        flow::RollDice::parse(p.data()).map(Message::RollDice)
    }),
    (codes::END_TURN, |p| {
        flow::EndTurn::parse(p.data()).map(Message::EndTurn)
    }),
    (codes::DISCARD, |p| {
        action::Discard::parse(p.data()).map(Message::Discard)
    }),
    (codes::MOVE_ROBBER, |p| {
        action::MoveRobber::parse(p.data()).map(Message::MoveRobber)
    }),
    (codes::CHOOSE_PLAYER, |p| {
        action::ChoosePlayer::parse(p.data()).map(Message::ChoosePlayer)
    }),
    (codes::CHOOSE_PLAYER_REQUEST, |p| {
        action::ChoosePlayerRequest::parse(p.data()).map(Message::ChoosePlayerRequest)
    }),
    (codes::REJECT_OFFER, |p| {
        trade::RejectOffer::parse(p.data()).map(Message::RejectOffer)
    }),
    (codes::CLEAR_OFFER, |p| {
        trade::ClearOffer::parse(p.data()).map(Message::ClearOffer)
    }),
    (codes::ACCEPT_OFFER, |p| {
        trade::AcceptOffer::parse(p.data()).map(Message::AcceptOffer)
    }),
    (codes::BANK_TRADE, |p| {
        trade::BankTrade::parse(p.data()).map(Message::BankTrade)
    }),
    (codes::MAKE_OFFER, |p| {
        trade::MakeOffer::parse(p.data()).map(Message::MakeOffer)
    }),
    (codes::CLEAR_TRADE_MSG, |p| {
        trade::ClearTradeMsg::parse(p.data()).map(Message::ClearTradeMsg)
    }),
    (codes::BUILD_REQUEST, |p| {
        action::BuildRequest::parse(p.data()).map(Message::BuildRequest)
    }),
    (codes::CANCEL_BUILD_REQUEST, |p| {
        action::CancelBuildRequest::parse(p.data()).map(Message::CancelBuildRequest)
    }),
    (codes::BUY_DEV_CARD_REQUEST, |p| {
        action::BuyDevCardRequest::parse(p.data()).map(Message::BuyDevCardRequest)
    }),
    (codes::DEV_CARD_ACTION, |p| {
        action::DevCardAction::parse(p.data()).map(Message::DevCardAction)
    }),
    (codes::DEV_CARD_COUNT, |p| {
        action::DevCardCount::parse(p.data()).map(Message::DevCardCount)
    }),
    (codes::SET_PLAYED_DEV_CARD, |p| {
        action::SetPlayedDevCard::parse(p.data()).map(Message::SetPlayedDevCard)
    }),
    (codes::PLAY_DEV_CARD_REQUEST, |p| {
        action::PlayDevCardRequest::parse(p.data()).map(Message::PlayDevCardRequest)
    }),
    (codes::PICK_RESOURCES, |p| {
        action::PickResources::parse(p.data()).map(Message::PickResources)
    }),
    (codes::PICK_RESOURCE_TYPE, |p| {
        action::PickResourceType::parse(p.data()).map(Message::PickResourceType)
    }),
    (codes::FIRST_PLAYER, |p| {
        flow::FirstPlayer::parse(p.data()).map(Message::FirstPlayer)
    }),
    (codes::SET_TURN, |p| {
        flow::SetTurn::parse(p.data()).map(Message::SetTurn)
    }),
    (codes::ROBOT_DISMISS, |p| {
        robot::RobotDismiss::parse(p.data()).map(Message::RobotDismiss)
    }),
    (codes::POTENTIAL_SETTLEMENTS, |p| {
        board::PotentialSettlements::parse(p.data()).map(Message::PotentialSettlements)
    }),
    (codes::CHANGE_FACE, |p| {
        lobby::ChangeFace::parse(p.data()).map(Message::ChangeFace)
    }),
    (codes::REJECT_CONNECTION, |p| {
        lobby::RejectConnection::parse(p.data()).map(Message::RejectConnection)
    }),
    (codes::LAST_SETTLEMENT, |p| {
        board::LastSettlement::parse(p.data()).map(Message::LastSettlement)
    }),
    (codes::GAME_STATS, |p| {
        lobby::GameStats::parse(p.data()).map(Message::GameStats)
    }),
    (codes::BROADCAST_TEXT_MSG, |p| {
        lobby::BroadcastTextMsg::parse(p.data()).map(Message::BroadcastTextMsg)
    }),
    (codes::RESOURCE_COUNT, |p| {
        action::ResourceCount::parse(p.data()).map(Message::ResourceCount)
    }),
    (codes::ADMIN_PING, |p| {
        lobby::AdminPing::parse(p.data()).map(Message::AdminPing)
    }),
    (codes::ADMIN_RESET, |p| {
        lobby::AdminReset::parse(p.data()).map(Message::AdminReset)
    }),
    (codes::LONGEST_ROAD, |p| {
        flow::LongestRoad::parse(p.data()).map(Message::LongestRoad)
    }),
    (codes::LARGEST_ARMY, |p| {
        flow::LargestArmy::parse(p.data()).map(Message::LargestArmy)
    }),
    (codes::SET_SEAT_LOCK, |p| {
        lobby::SetSeatLock::parse(p.data()).map(Message::SetSeatLock)
    }),
    (codes::STATUS_MESSAGE, |p| {
        lobby::StatusMessage::parse(p.data()).map(Message::StatusMessage)
    }),
    (codes::CREATE_ACCOUNT, |p| {
        lobby::CreateAccount::parse(p.data()).map(Message::CreateAccount)
    }),
    (codes::UPDATE_ROBOT_PARAMS, |p| {
        robot::UpdateRobotParams::parse(p.data()).map(Message::UpdateRobotParams)
    }),
    (codes::ROLL_DICE_PROMPT, |p| {
        flow::RollDicePrompt::parse(p.data()).map(Message::RollDicePrompt)
    }),
    (codes::RESET_BOARD_REQUEST, |p| {
        reset::ResetBoardRequest::parse(p.data()).map(Message::ResetBoardRequest)
    }),
    (codes::RESET_BOARD_AUTH, |p| {
        reset::ResetBoardAuth::parse(p.data()).map(Message::ResetBoardAuth)
    }),
    (codes::RESET_BOARD_VOTE_REQUEST, |p| {
        reset::ResetBoardVoteRequest::parse(p.data()).map(Message::ResetBoardVoteRequest)
    }),
    (codes::RESET_BOARD_VOTE, |p| {
        reset::ResetBoardVote::parse(p.data()).map(Message::ResetBoardVote)
    }),
    (codes::RESET_BOARD_REJECT, |p| {
        reset::ResetBoardReject::parse(p.data()).map(Message::ResetBoardReject)
    }),
    (codes::NEW_GAME_WITH_OPTIONS_REQUEST, |p| {
        options::NewGameWithOptionsRequest::parse(p.data()).map(Message::NewGameWithOptionsRequest)
    }),
    (codes::NEW_GAME_WITH_OPTIONS, |p| {
        options::NewGameWithOptions::parse(p.data()).map(Message::NewGameWithOptions)
    }),
    (codes::GAME_OPTION_GET_DEFAULTS, |p| {
        options::GameOptionGetDefaults::parse(p.data()).map(Message::GameOptionGetDefaults)
    }),
    (codes::GAME_OPTION_GET_INFOS, |p| {
        options::GameOptionGetInfos::parse(p.data()).map(Message::GameOptionGetInfos)
    }),
    (codes::GAME_OPTION_INFO, |p| {
        options::GameOptionInfo::parse(&p.params()).map(Message::GameOptionInfo)
    }),
    (codes::GAMES_WITH_OPTIONS, |p| {
        options::GamesWithOptions::parse(&p.params()).map(Message::GamesWithOptions)
    }),
    (codes::BOARD_LAYOUT2, |p| {
        board::BoardLayout2::parse(p.data()).map(Message::BoardLayout2)
    }),
    (codes::PLAYER_STATS, |p| {
        action::PlayerStats::parse(&p.params()).map(Message::PlayerStats)
    }),
    (codes::PLAYER_ELEMENTS, |p| {
        action::PlayerElements::parse(&p.params()).map(Message::PlayerElements)
    }),
    (codes::DEBUG_FREE_PLACE, |p| {
        board::DebugFreePlace::parse(p.data()).map(Message::DebugFreePlace)
    }),
    (codes::TIMING_PING, |p| {
        flow::TimingPing::parse(p.data()).map(Message::TimingPing)
    }),
    (codes::SIMPLE_REQUEST, |p| {
        action::SimpleRequest::parse(p.data()).map(Message::SimpleRequest)
    }),
    (codes::SIMPLE_ACTION, |p| {
        action::SimpleAction::parse(p.data()).map(Message::SimpleAction)
    }),
    (codes::GAME_SERVER_TEXT, |p| {
        flow::GameServerText::parse(p.data()).map(Message::GameServerText)
    }),
    (codes::DICE_RESULT_RESOURCES, |p| {
        flow::DiceResultResources::parse(&p.params()).map(Message::DiceResultResources)
    }),
    (codes::MOVE_PIECE, |p| {
        board::MovePiece::parse(p.data()).map(Message::MovePiece)
    }),
    (codes::REMOVE_PIECE, |p| {
        board::RemovePiece::parse(p.data()).map(Message::RemovePiece)
    }),
    (codes::PIECE_VALUE, |p| {
        board::PieceValue::parse(p.data()).map(Message::PieceValue)
    }),
    (codes::GAME_ELEMENTS, |p| {
        flow::GameElements::parse(&p.params()).map(Message::GameElements)
    }),
    (codes::REVEAL_FOG_HEX, |p| {
        board::RevealFogHex::parse(p.data()).map(Message::RevealFogHex)
    }),
    (codes::LEGAL_EDGES, |p| {
        board::LegalEdges::parse(p.data()).map(Message::LegalEdges)
    }),
    (codes::SVP_TEXT_MSG, |p| {
        flow::SvpTextMsg::parse(p.data()).map(Message::SvpTextMsg)
    }),
    (codes::INVENTORY_ITEM_ACTION, |p| {
        action::InventoryItemAction::parse(p.data()).map(Message::InventoryItemAction)
    }),
    (codes::SET_SPECIAL_ITEM, |p| {
        action::SetSpecialItem::parse(p.data()).map(Message::SetSpecialItem)
    }),
    (codes::LOCALIZED_STRINGS, |p| {
        options::LocalizedStrings::parse(&p.params()).map(Message::LocalizedStrings)
    }),
    (codes::SCENARIO_INFO, |p| {
        options::ScenarioInfo::parse(&p.params()).map(Message::ScenarioInfo)
    }),
    (codes::VERSION, |p| {
        lobby::Version::parse(p.data()).map(Message::Version)
    }),
    (codes::SERVER_PING, |p| {
        lobby::ServerPing::parse(p.data()).map(Message::ServerPing)
    }),
];

/// Decodes one line of wire text into a [`Message`].
///
/// Fail-soft: any garbled line becomes a [`DecodeError`], never a panic.
/// A line without a body separator is accepted for the bodyless types.
pub fn decode(line: &str) -> DecodeResult<Message> {
    if line.is_empty() {
        return Err(DecodeError::EmptyLine);
    }
    let (head, rest) = line.split_once(SEP).unwrap_or((line, ""));
    let code: TypeCode = head.parse().map_err(|_| DecodeError::BadTypeCode)?;
    let decoder = DECODERS
        .binary_search_by_key(&code, |(c, _)| *c)
        .map(|i| DECODERS[i].1)
        .map_err(|_| DecodeError::UnknownType { code })?;
    decoder(&Payload { rest }).ok_or(DecodeError::Malformed { code })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_is_sorted_and_unique() {
        for pair in DECODERS.windows(2) {
            assert!(pair[0].0 < pair[1].0, "table out of order at {}", pair[1].0);
        }
    }

    #[test]
    fn table_covers_registry_exactly() {
        assert_eq!(DECODERS.len(), registry::TYPES.len());
        for (entry, info) in DECODERS.iter().zip(registry::TYPES) {
            assert_eq!(entry.0, info.code, "decoder/registry mismatch");
        }
    }

    #[test]
    fn decode_simple_line() {
        let msg = decode("1025|chess,20").unwrap();
        assert_eq!(msg.type_code(), 1025);
        assert_eq!(msg.encode(), "1025|chess,20");
    }

    #[test]
    fn decode_bodyless_line() {
        assert_eq!(decode("1008").unwrap().type_code(), 1008);
        assert_eq!(decode("1065").unwrap().type_code(), 1065);
    }

    #[test]
    fn unknown_code_is_fail_soft() {
        assert_eq!(decode("4242|whatever"), Err(DecodeError::UnknownType { code: 4242 }));
    }

    #[test]
    fn garbage_is_fail_soft() {
        assert_eq!(decode(""), Err(DecodeError::EmptyLine));
        assert_eq!(decode("not a message"), Err(DecodeError::BadTypeCode));
        assert_eq!(decode("|1025|g,20"), Err(DecodeError::BadTypeCode));
        assert_eq!(
            decode("1025|chess"),
            Err(DecodeError::Malformed { code: 1025 })
        );
        assert_eq!(
            decode("1025|chess,notanumber"),
            Err(DecodeError::Malformed { code: 1025 })
        );
    }

    #[test]
    fn single_parameter_decoder_ignores_extra_segments() {
        // A single-parameter decoder sees only the first segment; stray
        // separators do not change it.
        let msg = decode("1025|chess,20|junk").unwrap();
        assert_eq!(msg.encode(), "1025|chess,20");
    }
}
