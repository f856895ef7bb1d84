//! The [`Message`] enum over every concrete message type.

use registry::{codes, TypeCode};

use crate::action::*;
use crate::board::*;
use crate::channel::*;
use crate::flow::*;
use crate::lobby::*;
use crate::options::*;
use crate::reset::*;
use crate::robot::*;
use crate::trade::*;

macro_rules! messages {
    ( $( $code:path => $variant:ident ),+ $(,)? ) => {
        /// One decoded (or to-be-encoded) protocol message.
        ///
        /// Each variant wraps the concrete message struct of the same
        /// name. Values are immutable once constructed.
        #[derive(Debug, Clone, PartialEq)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize))]
        pub enum Message {
            $( $variant($variant), )+
        }

        impl Message {
            /// Encodes this message as one line of wire text. Total for
            /// any constructed message.
            #[must_use]
            pub fn encode(&self) -> String {
                match self {
                    $( Self::$variant(m) => m.encode(), )+
                }
            }

            /// The message's registered type code.
            #[must_use]
            pub const fn type_code(&self) -> TypeCode {
                match self {
                    $( Self::$variant(_) => $code, )+
                }
            }
        }

        $(
            impl From<$variant> for Message {
                fn from(m: $variant) -> Self {
                    Self::$variant(m)
                }
            }
        )+
    };
}

messages! {
    codes::AUTH_REQUEST => AuthRequest,
    codes::NEW_CHANNEL => NewChannel,
    codes::CHANNEL_MEMBERS => ChannelMembers,
    codes::CHANNELS => Channels,
    codes::JOIN_CHANNEL => JoinChannel,
    codes::CHANNEL_TEXT_MSG => ChannelTextMsg,
    codes::LEAVE_CHANNEL => LeaveChannel,
    codes::DELETE_CHANNEL => DeleteChannel,
    codes::LEAVE_ALL => LeaveAll,
    codes::PUT_PIECE => PutPiece,
    codes::GAME_TEXT_MSG => GameTextMsg,
    codes::LEAVE_GAME => LeaveGame,
    codes::SIT_DOWN => SitDown,
    codes::JOIN_GAME => JoinGame,
    codes::BOARD_LAYOUT => BoardLayout,
    codes::DELETE_GAME => DeleteGame,
    codes::NEW_GAME => NewGame,
    codes::GAME_MEMBERS => GameMembers,
    codes::START_GAME => StartGame,
    codes::GAMES => Games,
    codes::JOIN_CHANNEL_AUTH => JoinChannelAuth,
    codes::JOIN_GAME_AUTH => JoinGameAuth,
    codes::IM_A_ROBOT => ImARobot,
    codes::BOT_JOIN_GAME_REQUEST => BotJoinGameRequest,
    codes::PLAYER_ELEMENT => PlayerElement,
    codes::GAME_STATE => GameState,
    codes::TURN => Turn,
    codes::DICE_RESULT => DiceResult,
    codes::DISCARD_REQUEST => DiscardRequest,
    codes::ROLL_DICE_REQUEST => RollDiceRequest,
    codes::ROLL_DICE => RollDice,
    codes::END_TURN => EndTurn,
    codes::DISCARD => Discard,
    codes::MOVE_ROBBER => MoveRobber,
    codes::CHOOSE_PLAYER => ChoosePlayer,
    codes::CHOOSE_PLAYER_REQUEST => ChoosePlayerRequest,
    codes::REJECT_OFFER => RejectOffer,
    codes::CLEAR_OFFER => ClearOffer,
    codes::ACCEPT_OFFER => AcceptOffer,
    codes::BANK_TRADE => BankTrade,
    codes::MAKE_OFFER => MakeOffer,
    codes::CLEAR_TRADE_MSG => ClearTradeMsg,
    codes::BUILD_REQUEST => BuildRequest,
    codes::CANCEL_BUILD_REQUEST => CancelBuildRequest,
    codes::BUY_DEV_CARD_REQUEST => BuyDevCardRequest,
    codes::DEV_CARD_ACTION => DevCardAction,
    codes::DEV_CARD_COUNT => DevCardCount,
    codes::SET_PLAYED_DEV_CARD => SetPlayedDevCard,
    codes::PLAY_DEV_CARD_REQUEST => PlayDevCardRequest,
    codes::PICK_RESOURCES => PickResources,
    codes::PICK_RESOURCE_TYPE => PickResourceType,
    codes::FIRST_PLAYER => FirstPlayer,
    codes::SET_TURN => SetTurn,
    codes::ROBOT_DISMISS => RobotDismiss,
    codes::POTENTIAL_SETTLEMENTS => PotentialSettlements,
    codes::CHANGE_FACE => ChangeFace,
    codes::REJECT_CONNECTION => RejectConnection,
    codes::LAST_SETTLEMENT => LastSettlement,
    codes::GAME_STATS => GameStats,
    codes::BROADCAST_TEXT_MSG => BroadcastTextMsg,
    codes::RESOURCE_COUNT => ResourceCount,
    codes::ADMIN_PING => AdminPing,
    codes::ADMIN_RESET => AdminReset,
    codes::LONGEST_ROAD => LongestRoad,
    codes::LARGEST_ARMY => LargestArmy,
    codes::SET_SEAT_LOCK => SetSeatLock,
    codes::STATUS_MESSAGE => StatusMessage,
    codes::CREATE_ACCOUNT => CreateAccount,
    codes::UPDATE_ROBOT_PARAMS => UpdateRobotParams,
    codes::ROLL_DICE_PROMPT => RollDicePrompt,
    codes::RESET_BOARD_REQUEST => ResetBoardRequest,
    codes::RESET_BOARD_AUTH => ResetBoardAuth,
    codes::RESET_BOARD_VOTE_REQUEST => ResetBoardVoteRequest,
    codes::RESET_BOARD_VOTE => ResetBoardVote,
    codes::RESET_BOARD_REJECT => ResetBoardReject,
    codes::NEW_GAME_WITH_OPTIONS_REQUEST => NewGameWithOptionsRequest,
    codes::NEW_GAME_WITH_OPTIONS => NewGameWithOptions,
    codes::GAME_OPTION_GET_DEFAULTS => GameOptionGetDefaults,
    codes::GAME_OPTION_GET_INFOS => GameOptionGetInfos,
    codes::GAME_OPTION_INFO => GameOptionInfo,
    codes::GAMES_WITH_OPTIONS => GamesWithOptions,
    codes::BOARD_LAYOUT2 => BoardLayout2,
    codes::PLAYER_STATS => PlayerStats,
    codes::PLAYER_ELEMENTS => PlayerElements,
    codes::DEBUG_FREE_PLACE => DebugFreePlace,
    codes::TIMING_PING => TimingPing,
    codes::SIMPLE_REQUEST => SimpleRequest,
    codes::SIMPLE_ACTION => SimpleAction,
    codes::GAME_SERVER_TEXT => GameServerText,
    codes::DICE_RESULT_RESOURCES => DiceResultResources,
    codes::MOVE_PIECE => MovePiece,
    codes::REMOVE_PIECE => RemovePiece,
    codes::PIECE_VALUE => PieceValue,
    codes::GAME_ELEMENTS => GameElements,
    codes::REVEAL_FOG_HEX => RevealFogHex,
    codes::LEGAL_EDGES => LegalEdges,
    codes::SVP_TEXT_MSG => SvpTextMsg,
    codes::INVENTORY_ITEM_ACTION => InventoryItemAction,
    codes::SET_SPECIAL_ITEM => SetSpecialItem,
    codes::LOCALIZED_STRINGS => LocalizedStrings,
    codes::SCENARIO_INFO => ScenarioInfo,
    codes::VERSION => Version,
    codes::SERVER_PING => ServerPing,
}

impl Message {
    /// The message's symbolic name from the registry.
    #[must_use]
    pub fn name(&self) -> &'static str {
        registry::name(self.type_code()).unwrap_or("?")
    }

    /// The lowest protocol version able to send or receive this message.
    #[must_use]
    pub fn minimum_version(&self) -> registry::Version {
        registry::minimum_version(self.type_code()).unwrap_or(registry::DEFAULT_MIN_VERSION)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn type_code_matches_registry() {
        let msg = Message::RollDice(RollDice { game: "g".into() });
        assert_eq!(msg.type_code(), 1031);
        assert_eq!(msg.name(), "RollDice");
        assert_eq!(msg.minimum_version(), 1000);
    }

    #[test]
    fn from_impl_wraps_concrete_type() {
        let msg: Message = Turn {
            game: "g".into(),
            player_number: 2,
        }
        .into();
        assert_eq!(msg.type_code(), 1026);
    }

    #[test]
    fn encode_prefixes_type_code() {
        let msg = Message::EndTurn(EndTurn { game: "g".into() });
        assert_eq!(msg.encode(), "1032|g");
    }
}
