//! The type-code metadata table and its validation.

use crate::error::{RegistryError, RegistryResult};
use crate::{codes, TypeCode, Version, DEFAULT_MIN_VERSION, RESERVED_NULL};

/// One registry row: a message type's code, symbolic name, and the lowest
/// protocol version able to send or receive it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct TypeInfo {
    pub code: TypeCode,
    pub name: &'static str,
    pub min_version: Version,
}

const fn row(code: TypeCode, name: &'static str, min_version: Version) -> TypeInfo {
    TypeInfo {
        code,
        name,
        min_version,
    }
}

/// Codes of removed message types. Never reassigned.
pub static RETIRED_CODES: &[TypeCode] = &[1027, 1050, 1051];

/// Minimum version shared by the board-reset message family and the
/// version handshake itself.
const V1100: Version = 1100;
/// Minimum version of the per-game-options message family.
const V1107: Version = 1107;
/// Minimum version of the sea-board generation of messages.
const V2000: Version = 2000;

/// The full registry, in ascending code order.
pub static TYPES: &[TypeInfo] = &[
    row(codes::AUTH_REQUEST, "AuthRequest", 1119),
    row(codes::NEW_CHANNEL, "NewChannel", DEFAULT_MIN_VERSION),
    row(codes::CHANNEL_MEMBERS, "ChannelMembers", DEFAULT_MIN_VERSION),
    row(codes::CHANNELS, "Channels", DEFAULT_MIN_VERSION),
    row(codes::JOIN_CHANNEL, "JoinChannel", DEFAULT_MIN_VERSION),
    row(codes::CHANNEL_TEXT_MSG, "ChannelTextMsg", DEFAULT_MIN_VERSION),
    row(codes::LEAVE_CHANNEL, "LeaveChannel", DEFAULT_MIN_VERSION),
    row(codes::DELETE_CHANNEL, "DeleteChannel", DEFAULT_MIN_VERSION),
    row(codes::LEAVE_ALL, "LeaveAll", DEFAULT_MIN_VERSION),
    row(codes::PUT_PIECE, "PutPiece", DEFAULT_MIN_VERSION),
    row(codes::GAME_TEXT_MSG, "GameTextMsg", DEFAULT_MIN_VERSION),
    row(codes::LEAVE_GAME, "LeaveGame", DEFAULT_MIN_VERSION),
    row(codes::SIT_DOWN, "SitDown", DEFAULT_MIN_VERSION),
    row(codes::JOIN_GAME, "JoinGame", DEFAULT_MIN_VERSION),
    row(codes::BOARD_LAYOUT, "BoardLayout", DEFAULT_MIN_VERSION),
    row(codes::DELETE_GAME, "DeleteGame", DEFAULT_MIN_VERSION),
    row(codes::NEW_GAME, "NewGame", DEFAULT_MIN_VERSION),
    row(codes::GAME_MEMBERS, "GameMembers", DEFAULT_MIN_VERSION),
    row(codes::START_GAME, "StartGame", DEFAULT_MIN_VERSION),
    row(codes::GAMES, "Games", DEFAULT_MIN_VERSION),
    row(codes::JOIN_CHANNEL_AUTH, "JoinChannelAuth", DEFAULT_MIN_VERSION),
    row(codes::JOIN_GAME_AUTH, "JoinGameAuth", DEFAULT_MIN_VERSION),
    row(codes::IM_A_ROBOT, "ImARobot", DEFAULT_MIN_VERSION),
    row(codes::BOT_JOIN_GAME_REQUEST, "BotJoinGameRequest", DEFAULT_MIN_VERSION),
    row(codes::PLAYER_ELEMENT, "PlayerElement", DEFAULT_MIN_VERSION),
    row(codes::GAME_STATE, "GameState", DEFAULT_MIN_VERSION),
    row(codes::TURN, "Turn", DEFAULT_MIN_VERSION),
    row(codes::DICE_RESULT, "DiceResult", DEFAULT_MIN_VERSION),
    row(codes::DISCARD_REQUEST, "DiscardRequest", DEFAULT_MIN_VERSION),
    row(codes::ROLL_DICE_REQUEST, "RollDiceRequest", DEFAULT_MIN_VERSION),
    row(codes::ROLL_DICE, "RollDice", DEFAULT_MIN_VERSION),
    row(codes::END_TURN, "EndTurn", DEFAULT_MIN_VERSION),
    row(codes::DISCARD, "Discard", DEFAULT_MIN_VERSION),
    row(codes::MOVE_ROBBER, "MoveRobber", DEFAULT_MIN_VERSION),
    row(codes::CHOOSE_PLAYER, "ChoosePlayer", DEFAULT_MIN_VERSION),
    row(codes::CHOOSE_PLAYER_REQUEST, "ChoosePlayerRequest", DEFAULT_MIN_VERSION),
    row(codes::REJECT_OFFER, "RejectOffer", DEFAULT_MIN_VERSION),
    row(codes::CLEAR_OFFER, "ClearOffer", DEFAULT_MIN_VERSION),
    row(codes::ACCEPT_OFFER, "AcceptOffer", DEFAULT_MIN_VERSION),
    row(codes::BANK_TRADE, "BankTrade", DEFAULT_MIN_VERSION),
    row(codes::MAKE_OFFER, "MakeOffer", DEFAULT_MIN_VERSION),
    row(codes::CLEAR_TRADE_MSG, "ClearTradeMsg", DEFAULT_MIN_VERSION),
    row(codes::BUILD_REQUEST, "BuildRequest", DEFAULT_MIN_VERSION),
    row(codes::CANCEL_BUILD_REQUEST, "CancelBuildRequest", DEFAULT_MIN_VERSION),
    row(codes::BUY_DEV_CARD_REQUEST, "BuyDevCardRequest", DEFAULT_MIN_VERSION),
    row(codes::DEV_CARD_ACTION, "DevCardAction", DEFAULT_MIN_VERSION),
    row(codes::DEV_CARD_COUNT, "DevCardCount", DEFAULT_MIN_VERSION),
    row(codes::SET_PLAYED_DEV_CARD, "SetPlayedDevCard", DEFAULT_MIN_VERSION),
    row(codes::PLAY_DEV_CARD_REQUEST, "PlayDevCardRequest", DEFAULT_MIN_VERSION),
    row(codes::PICK_RESOURCES, "PickResources", DEFAULT_MIN_VERSION),
    row(codes::PICK_RESOURCE_TYPE, "PickResourceType", DEFAULT_MIN_VERSION),
    row(codes::FIRST_PLAYER, "FirstPlayer", DEFAULT_MIN_VERSION),
    row(codes::SET_TURN, "SetTurn", DEFAULT_MIN_VERSION),
    row(codes::ROBOT_DISMISS, "RobotDismiss", DEFAULT_MIN_VERSION),
    row(codes::POTENTIAL_SETTLEMENTS, "PotentialSettlements", DEFAULT_MIN_VERSION),
    row(codes::CHANGE_FACE, "ChangeFace", DEFAULT_MIN_VERSION),
    row(codes::REJECT_CONNECTION, "RejectConnection", DEFAULT_MIN_VERSION),
    row(codes::LAST_SETTLEMENT, "LastSettlement", DEFAULT_MIN_VERSION),
    row(codes::GAME_STATS, "GameStats", DEFAULT_MIN_VERSION),
    row(codes::BROADCAST_TEXT_MSG, "BroadcastTextMsg", DEFAULT_MIN_VERSION),
    row(codes::RESOURCE_COUNT, "ResourceCount", DEFAULT_MIN_VERSION),
    row(codes::ADMIN_PING, "AdminPing", DEFAULT_MIN_VERSION),
    row(codes::ADMIN_RESET, "AdminReset", DEFAULT_MIN_VERSION),
    row(codes::LONGEST_ROAD, "LongestRoad", DEFAULT_MIN_VERSION),
    row(codes::LARGEST_ARMY, "LargestArmy", DEFAULT_MIN_VERSION),
    row(codes::SET_SEAT_LOCK, "SetSeatLock", DEFAULT_MIN_VERSION),
    row(codes::STATUS_MESSAGE, "StatusMessage", DEFAULT_MIN_VERSION),
    row(codes::CREATE_ACCOUNT, "CreateAccount", DEFAULT_MIN_VERSION),
    row(codes::UPDATE_ROBOT_PARAMS, "UpdateRobotParams", DEFAULT_MIN_VERSION),
    row(codes::ROLL_DICE_PROMPT, "RollDicePrompt", V1100),
    row(codes::RESET_BOARD_REQUEST, "ResetBoardRequest", V1100),
    row(codes::RESET_BOARD_AUTH, "ResetBoardAuth", V1100),
    row(codes::RESET_BOARD_VOTE_REQUEST, "ResetBoardVoteRequest", V1100),
    row(codes::RESET_BOARD_VOTE, "ResetBoardVote", V1100),
    row(codes::RESET_BOARD_REJECT, "ResetBoardReject", V1100),
    row(codes::NEW_GAME_WITH_OPTIONS_REQUEST, "NewGameWithOptionsRequest", V1107),
    row(codes::NEW_GAME_WITH_OPTIONS, "NewGameWithOptions", V1107),
    row(codes::GAME_OPTION_GET_DEFAULTS, "GameOptionGetDefaults", V1107),
    row(codes::GAME_OPTION_GET_INFOS, "GameOptionGetInfos", V1107),
    row(codes::GAME_OPTION_INFO, "GameOptionInfo", V1107),
    row(codes::GAMES_WITH_OPTIONS, "GamesWithOptions", V1107),
    row(codes::BOARD_LAYOUT2, "BoardLayout2", 1108),
    row(codes::PLAYER_STATS, "PlayerStats", 1109),
    row(codes::PLAYER_ELEMENTS, "PlayerElements", V2000),
    row(codes::DEBUG_FREE_PLACE, "DebugFreePlace", 1112),
    row(codes::TIMING_PING, "TimingPing", 1113),
    row(codes::SIMPLE_REQUEST, "SimpleRequest", 1118),
    row(codes::SIMPLE_ACTION, "SimpleAction", 1119),
    row(codes::GAME_SERVER_TEXT, "GameServerText", V2000),
    row(codes::DICE_RESULT_RESOURCES, "DiceResultResources", V2000),
    row(codes::MOVE_PIECE, "MovePiece", V2000),
    row(codes::REMOVE_PIECE, "RemovePiece", V2000),
    row(codes::PIECE_VALUE, "PieceValue", V2000),
    row(codes::GAME_ELEMENTS, "GameElements", V2000),
    row(codes::REVEAL_FOG_HEX, "RevealFogHex", V2000),
    row(codes::LEGAL_EDGES, "LegalEdges", V2000),
    row(codes::SVP_TEXT_MSG, "SvpTextMsg", V2000),
    row(codes::INVENTORY_ITEM_ACTION, "InventoryItemAction", V2000),
    row(codes::SET_SPECIAL_ITEM, "SetSpecialItem", V2000),
    row(codes::LOCALIZED_STRINGS, "LocalizedStrings", V2000),
    row(codes::SCENARIO_INFO, "ScenarioInfo", V2000),
    row(codes::VERSION, "Version", V1100),
    row(codes::SERVER_PING, "ServerPing", DEFAULT_MIN_VERSION),
];

/// Looks up the registry row for a type code.
#[must_use]
pub fn info(code: TypeCode) -> Option<&'static TypeInfo> {
    TYPES
        .binary_search_by_key(&code, |t| t.code)
        .ok()
        .map(|i| &TYPES[i])
}

/// Returns the lowest protocol version able to send or receive this type.
///
/// The sending collaborator consults this before transmitting a newer
/// message type to an older peer; no gating happens in the codec itself.
#[must_use]
pub fn minimum_version(code: TypeCode) -> Option<Version> {
    info(code).map(|t| t.min_version)
}

/// Returns the symbolic name of a type code.
#[must_use]
pub fn name(code: TypeCode) -> Option<&'static str> {
    info(code).map(|t| t.name)
}

/// Validates the registry invariants: ascending unique codes, no retired
/// or reserved code assigned, sane minimum versions.
pub fn validate() -> RegistryResult<()> {
    let mut prev: Option<TypeCode> = None;
    for t in TYPES {
        if let Some(p) = prev {
            if t.code == p {
                return Err(RegistryError::DuplicateCode { code: t.code });
            }
            if t.code < p {
                return Err(RegistryError::OutOfOrder {
                    code: t.code,
                    follows: p,
                });
            }
        }
        if t.code == RESERVED_NULL || RETIRED_CODES.contains(&t.code) {
            return Err(RegistryError::RetiredCodeAssigned { code: t.code });
        }
        if t.min_version < DEFAULT_MIN_VERSION {
            return Err(RegistryError::InvalidMinVersion {
                code: t.code,
                min_version: t.min_version,
            });
        }
        prev = Some(t.code);
    }
    Ok(())
}
