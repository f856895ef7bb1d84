//! Message types, encoders, and the decoding dispatcher for the hexline
//! protocol.
//!
//! This is the main protocol crate: one struct per message type, the
//! [`Message`] enum over all of them, and the line-level entry points
//! [`decode`] and [`Message::encode`]. It ties together the `wire` field
//! primitives and the `registry` type table.
//!
//! # Decoding contract
//!
//! `decode` is fail-soft: a garbled line, an unknown type code, or a
//! malformed body yields a [`DecodeError`], never a panic. The transport
//! layer typically drops such lines and moves on. Encoding is total for
//! any constructed message value.
//!
//! # Design Principles
//!
//! - **One dispatch table** - Decoders are registered per type code in a
//!   single static table; there is no inheritance hierarchy.
//! - **Immutable messages** - A message is built once, by application code
//!   or by the decoder, and only read afterwards.
//! - **Pure functions** - No I/O, no shared mutable state; encode and
//!   decode are safe from any thread.

mod action;
mod board;
mod channel;
mod dispatch;
mod error;
mod flow;
mod lobby;
mod message;
mod options;
mod reset;
mod robot;
mod shape;
mod trade;
mod types;

pub use action::{
    BuildRequest, BuyDevCardRequest, CancelBuildRequest, ChoosePlayer, ChoosePlayerRequest,
    DevCardAction, DevCardCount, Discard, DiscardRequest, InventoryItemAction, MoveRobber,
    PickResourceType, PickResources, PlayDevCardRequest, PlayerElement, PlayerElementAction,
    PlayerElements, PlayerStats, ResourceCount, SetPlayedDevCard, SetSpecialItem, SimpleAction,
    SimpleRequest,
};
pub use board::{
    BoardLayout, BoardLayout2, DebugFreePlace, LandAreas, LastSettlement, LayoutPart, LegalEdges,
    MovePiece, PieceValue, PotentialSettlements, PutPiece, RemovePiece, RevealFogHex,
    CLASSIC_HEX_COUNT,
};
pub use channel::{
    ChannelMembers, Channels, ChannelTextMsg, DeleteChannel, JoinChannel, JoinChannelAuth,
    LeaveAll, LeaveChannel, NewChannel,
};
pub use dispatch::decode;
pub use error::{DecodeError, DecodeResult};
pub use flow::{
    DiceResult, DiceResultResources, EndTurn, FirstPlayer, GameElements, GameServerText,
    GameState, GameTextMsg, LargestArmy, LongestRoad, PlayerRoll, RollDice, RollDicePrompt,
    RollDiceRequest, SetTurn, SvpTextMsg, TimingPing, Turn,
};
pub use lobby::{
    AdminPing, AdminReset, AuthRequest, BroadcastTextMsg, ChangeFace, CreateAccount, DeleteGame,
    GameMembers, Games, GameStats, ImARobot, JoinGame, JoinGameAuth, LeaveGame, NewGame,
    RejectConnection, SeatLocks, ServerPing, SetSeatLock, SitDown, StartGame, StatusMessage,
    Version, GAME_UNJOINABLE_MARKER,
};
pub use message::Message;
pub use options::{
    GameOptionGetDefaults, GameOptionGetInfos, GameOptionInfo, GameWithOptions, GamesWithOptions,
    LocalizedStrings, NewGameWithOptions, NewGameWithOptionsRequest, OptionInfoValue,
    ScenarioInfo, MARKER_ANY_CHANGED, MARKER_NO_MORE, OPTKEY_GET_I18N_DESCS,
};
pub use reset::{
    ResetBoardAuth, ResetBoardReject, ResetBoardRequest, ResetBoardVote, ResetBoardVoteRequest,
};
pub use robot::{BotJoinGameRequest, RobotDismiss, UpdateRobotParams};
pub use trade::{AcceptOffer, BankTrade, ClearOffer, ClearTradeMsg, MakeOffer, RejectOffer};
pub use types::{
    GameOptions, OptionValue, ResourceSet, ResourceType, RobotParameters, SeatLockState,
    TradeOffer,
};
