//! Building, development cards, resources, and per-player element
//! bookkeeping.

use registry::codes;
use wire::{unescape_optional, Fields, LineBuilder};

use crate::shape;
use crate::types::ResourceSet;

/// Client request to buy and place a piece.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct BuildRequest {
    pub game: String,
    pub piece_type: i32,
}

impl BuildRequest {
    pub fn encode(&self) -> String {
        shape::encode_game_i32(codes::BUILD_REQUEST, &self.game, self.piece_type)
    }

    pub fn parse(body: &str) -> Option<Self> {
        let (game, piece_type) = shape::parse_game_i32(body)?;
        Some(Self { game, piece_type })
    }
}

/// Cancelling a piece placement that was just bought.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct CancelBuildRequest {
    pub game: String,
    pub piece_type: i32,
}

impl CancelBuildRequest {
    pub fn encode(&self) -> String {
        shape::encode_game_i32(codes::CANCEL_BUILD_REQUEST, &self.game, self.piece_type)
    }

    pub fn parse(body: &str) -> Option<Self> {
        let (game, piece_type) = shape::parse_game_i32(body)?;
        Some(Self { game, piece_type })
    }
}

/// Client request to buy a development card.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct BuyDevCardRequest {
    pub game: String,
}

impl BuyDevCardRequest {
    pub fn encode(&self) -> String {
        shape::encode_name_only(codes::BUY_DEV_CARD_REQUEST, &self.game)
    }

    pub fn parse(body: &str) -> Option<Self> {
        shape::parse_name_only(body).map(|game| Self { game })
    }
}

/// A development card moving in or out of a player's hand.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct DevCardAction {
    pub game: String,
    pub player_number: i32,
    /// 0 draw, 1 play, 2 add new, 3 add old, 4 cannot play.
    pub action: i32,
    pub card_type: i32,
}

impl DevCardAction {
    pub const DRAW: i32 = 0;
    pub const PLAY: i32 = 1;
    pub const ADD_NEW: i32 = 2;
    pub const ADD_OLD: i32 = 3;
    pub const CANNOT_PLAY: i32 = 4;

    pub fn encode(&self) -> String {
        shape::encode_game_i32x3(
            codes::DEV_CARD_ACTION,
            &self.game,
            self.player_number,
            self.action,
            self.card_type,
        )
    }

    pub fn parse(body: &str) -> Option<Self> {
        let (game, player_number, action, card_type) = shape::parse_game_i32x3(body)?;
        Some(Self {
            game,
            player_number,
            action,
            card_type,
        })
    }
}

/// How many development cards remain in the deck.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct DevCardCount {
    pub game: String,
    pub count: i32,
}

impl DevCardCount {
    pub fn encode(&self) -> String {
        shape::encode_game_i32(codes::DEV_CARD_COUNT, &self.game, self.count)
    }

    pub fn parse(body: &str) -> Option<Self> {
        let (game, count) = shape::parse_game_i32(body)?;
        Some(Self { game, count })
    }
}

/// Whether a player has already played a development card this turn.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct SetPlayedDevCard {
    pub game: String,
    pub player_number: i32,
    pub played: bool,
}

impl SetPlayedDevCard {
    pub fn encode(&self) -> String {
        let mut b = LineBuilder::new(codes::SET_PLAYED_DEV_CARD);
        b.param(&self.game)
            .field_i32(self.player_number)
            .field_bool_word(self.played);
        b.finish()
    }

    pub fn parse(body: &str) -> Option<Self> {
        let mut f = Fields::new(body);
        let game = f.next_string().ok()?;
        let player_number = f.next_i32().ok()?;
        let played = f.next_bool_word().ok()?;
        Some(Self {
            game,
            player_number,
            played,
        })
    }
}

/// Client request to play a development card from hand.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct PlayDevCardRequest {
    pub game: String,
    pub card_type: i32,
}

impl PlayDevCardRequest {
    pub fn encode(&self) -> String {
        shape::encode_game_i32(codes::PLAY_DEV_CARD_REQUEST, &self.game, self.card_type)
    }

    pub fn parse(body: &str) -> Option<Self> {
        let (game, card_type) = shape::parse_game_i32(body)?;
        Some(Self { game, card_type })
    }
}

/// The robber being moved by a player.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct MoveRobber {
    pub game: String,
    pub player_number: i32,
    pub coord: i32,
}

impl MoveRobber {
    pub fn encode(&self) -> String {
        shape::encode_game_i32x2(
            codes::MOVE_ROBBER,
            &self.game,
            self.player_number,
            self.coord,
        )
    }

    pub fn parse(body: &str) -> Option<Self> {
        let (game, player_number, coord) = shape::parse_game_i32x2(body)?;
        Some(Self {
            game,
            player_number,
            coord,
        })
    }
}

/// The robbing player's choice of victim.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ChoosePlayer {
    pub game: String,
    /// Chosen seat number; -1 declines when declining is allowed.
    pub choice: i32,
}

impl ChoosePlayer {
    pub fn encode(&self) -> String {
        shape::encode_game_i32(codes::CHOOSE_PLAYER, &self.game, self.choice)
    }

    pub fn parse(body: &str) -> Option<Self> {
        let (game, choice) = shape::parse_game_i32(body)?;
        Some(Self { game, choice })
    }
}

/// Server request to choose a robbery victim among the flagged seats.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ChoosePlayerRequest {
    pub game: String,
    /// Whether choosing nobody is allowed; encoded as a leading `NONE`
    /// token.
    pub allow_choose_none: bool,
    /// Per-seat flags for the choosable players.
    pub choices: Vec<bool>,
}

impl ChoosePlayerRequest {
    pub fn encode(&self) -> String {
        let mut b = LineBuilder::new(codes::CHOOSE_PLAYER_REQUEST);
        b.param(&self.game);
        if self.allow_choose_none {
            b.field("NONE");
        }
        for choice in &self.choices {
            b.field_bool_word(*choice);
        }
        b.finish()
    }

    pub fn parse(body: &str) -> Option<Self> {
        let mut f = Fields::new(body);
        let game = f.next_string().ok()?;
        let mut allow_choose_none = false;
        let mut tok = f.next_str().ok()?;
        if tok == "NONE" {
            allow_choose_none = true;
            tok = f.next_str().ok()?;
        }
        let mut choices = vec![tok == "true"];
        while let Ok(t) = f.next_str() {
            choices.push(t == "true");
        }
        Some(Self {
            game,
            allow_choose_none,
            choices,
        })
    }
}

/// A simple player request that needs no fields of its own beyond a
/// request type and up to two detail values.
///
/// Request types below 1000 are generic; 1000 and above belong to game
/// variants. Unknown types still parse, for forward compatibility.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct SimpleRequest {
    pub game: String,
    pub player_number: i32,
    pub request_type: i32,
    pub value1: i32,
    pub value2: i32,
}

impl SimpleRequest {
    /// Request: build a port piece at the given edge.
    pub const TRADE_PORT_PLACE: i32 = 1;

    pub fn encode(&self) -> String {
        shape::encode_game_i32x4(
            codes::SIMPLE_REQUEST,
            &self.game,
            self.player_number,
            self.request_type,
            self.value1,
            self.value2,
        )
    }

    pub fn parse(body: &str) -> Option<Self> {
        let (game, player_number, request_type, value1, value2) = shape::parse_game_i32x4(body)?;
        Some(Self {
            game,
            player_number,
            request_type,
            value1,
            value2,
        })
    }
}

/// A simple game action announcement, mirror of [`SimpleRequest`].
///
/// Action types below 1000 are generic; 1000 and above belong to game
/// variants. A receiver must ignore, not reject, unknown action types.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct SimpleAction {
    pub game: String,
    pub player_number: i32,
    pub action_type: i32,
    pub value1: i32,
    pub value2: i32,
}

impl SimpleAction {
    /// A development card was bought; `value1` is the deck's remaining
    /// count.
    pub const DEV_CARD_BOUGHT: i32 = 1;
    /// A player trade completed.
    pub const TRADE_SUCCESSFUL: i32 = 2;
    /// Variant-specific: a trade port was removed from the board.
    pub const TRADE_PORT_REMOVED: i32 = 1001;

    pub fn encode(&self) -> String {
        shape::encode_game_i32x4(
            codes::SIMPLE_ACTION,
            &self.game,
            self.player_number,
            self.action_type,
            self.value1,
            self.value2,
        )
    }

    pub fn parse(body: &str) -> Option<Self> {
        let (game, player_number, action_type, value1, value2) = shape::parse_game_i32x4(body)?;
        Some(Self {
            game,
            player_number,
            action_type,
            value1,
            value2,
        })
    }
}

/// An inventory item (dev card or scenario item) changing state.
///
/// The optional trailing integer is omitted when zero. For actions other
/// than `PLAY`/`CANNOT_PLAY` it is a flag bit field; otherwise it is a
/// reason code.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct InventoryItemAction {
    pub game: String,
    pub player_number: i32,
    /// 1 add playable, 2 add other, 3 play, 4 cannot play, 5 played,
    /// 6 placing extra.
    pub action: i32,
    pub item_type: i32,
    /// Raw trailing integer: flags or a reason code, 0 when absent.
    pub reason_code: i32,
    pub is_kept: bool,
    pub is_vp: bool,
    pub can_cancel_play: bool,
}

impl InventoryItemAction {
    pub const ADD_PLAYABLE: i32 = 1;
    pub const ADD_OTHER: i32 = 2;
    pub const PLAY: i32 = 3;
    pub const CANNOT_PLAY: i32 = 4;
    pub const PLAYED: i32 = 5;
    pub const PLACING_EXTRA: i32 = 6;

    const FLAG_IS_KEPT: i32 = 0x01;
    const FLAG_IS_VP: i32 = 0x02;
    const FLAG_CAN_CANCEL: i32 = 0x04;

    /// Builds an add/played announcement with the item flags.
    #[must_use]
    pub fn with_flags(
        game: impl Into<String>,
        player_number: i32,
        action: i32,
        item_type: i32,
        is_kept: bool,
        is_vp: bool,
        can_cancel_play: bool,
    ) -> Self {
        let reason_code = (if is_kept { Self::FLAG_IS_KEPT } else { 0 })
            | (if is_vp { Self::FLAG_IS_VP } else { 0 })
            | (if can_cancel_play {
                Self::FLAG_CAN_CANCEL
            } else {
                0
            });
        Self {
            game: game.into(),
            player_number,
            action,
            item_type,
            reason_code,
            is_kept,
            is_vp,
            can_cancel_play,
        }
    }

    /// Builds a play/decline message with a reason code.
    #[must_use]
    pub fn with_reason(
        game: impl Into<String>,
        player_number: i32,
        action: i32,
        item_type: i32,
        reason_code: i32,
    ) -> Self {
        Self {
            game: game.into(),
            player_number,
            action,
            item_type,
            reason_code,
            is_kept: false,
            is_vp: false,
            can_cancel_play: false,
        }
    }

    pub fn encode(&self) -> String {
        let mut b = LineBuilder::new(codes::INVENTORY_ITEM_ACTION);
        b.param(&self.game)
            .field_i32(self.player_number)
            .field_i32(self.action)
            .field_i32(self.item_type);
        if self.reason_code != 0 {
            b.field_i32(self.reason_code);
        }
        b.finish()
    }

    pub fn parse(body: &str) -> Option<Self> {
        let mut f = Fields::new(body);
        let game = f.next_string().ok()?;
        let player_number = f.next_i32().ok()?;
        let action = f.next_i32().ok()?;
        let item_type = f.next_i32().ok()?;
        let mut msg = Self::with_reason(game, player_number, action, item_type, 0);
        if f.has_more() {
            let rc = f.next_i32().ok()?;
            msg.reason_code = rc;
            if action != Self::PLAY && action != Self::CANNOT_PLAY {
                msg.is_kept = rc & Self::FLAG_IS_KEPT != 0;
                msg.is_vp = rc & Self::FLAG_IS_VP != 0;
                msg.can_cancel_play = rc & Self::FLAG_CAN_CANCEL != 0;
            }
        }
        Some(msg)
    }
}

/// Setting, clearing, or picking a special item slot.
///
/// `-1` (indexes, player, coordinate) and `0` (level) are the "absent"
/// sentinels and travel verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct SetSpecialItem {
    pub game: String,
    /// 1 set, 2 clear, 3 pick, 4 decline, 5 set+pick, 6 clear+pick.
    pub op: i32,
    /// Item type key, such as `_SC_WOND`.
    pub type_key: String,
    /// Index in the game's item list, or -1.
    pub game_item_index: i32,
    /// Index in the owning player's item list, or -1.
    pub player_item_index: i32,
    /// Owning player, or -1.
    pub player_number: i32,
    /// Board coordinate, or -1.
    pub coord: i32,
    /// Level of construction or strength, or 0.
    pub level: i32,
    /// Optional string value; never the empty string.
    pub string_value: Option<String>,
}

impl SetSpecialItem {
    pub const OP_SET: i32 = 1;
    pub const OP_CLEAR: i32 = 2;
    pub const OP_PICK: i32 = 3;
    pub const OP_DECLINE: i32 = 4;
    pub const OP_SET_PICK: i32 = 5;
    pub const OP_CLEAR_PICK: i32 = 6;

    pub fn encode(&self) -> String {
        let mut b = LineBuilder::new(codes::SET_SPECIAL_ITEM);
        b.param(&self.game)
            .field_i32(self.op)
            .field(&self.type_key)
            .field_i32(self.game_item_index)
            .field_i32(self.player_item_index)
            .field_i32(self.player_number)
            .field_i32(self.coord)
            .field_i32(self.level)
            .field_or_empty(self.string_value.as_deref().unwrap_or(""));
        b.finish()
    }

    pub fn parse(body: &str) -> Option<Self> {
        let mut f = Fields::new(body);
        let game = f.next_string().ok()?;
        let op = f.next_i32().ok()?;
        let type_key = f.next_string().ok()?;
        let game_item_index = f.next_i32().ok()?;
        let player_item_index = f.next_i32().ok()?;
        let player_number = f.next_i32().ok()?;
        let coord = f.next_i32().ok()?;
        let level = f.next_i32().ok()?;
        let string_value = unescape_optional(f.next_str().ok()?).map(str::to_owned);
        Some(Self {
            game,
            op,
            type_key,
            game_item_index,
            player_item_index,
            player_number,
            coord,
            level,
            string_value,
        })
    }
}

/// Gold-hex or Discovery free resource picks.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct PickResources {
    pub game: String,
    pub resources: ResourceSet,
}

impl PickResources {
    pub fn encode(&self) -> String {
        let mut b = LineBuilder::new(codes::PICK_RESOURCES);
        b.param(&self.game);
        self.resources.push_all(&mut b);
        b.finish()
    }

    pub fn parse(body: &str) -> Option<Self> {
        let mut f = Fields::new(body);
        let game = f.next_string().ok()?;
        let resources = ResourceSet::parse_all(&mut f)?;
        Some(Self { game, resources })
    }
}

/// Monopoly: the resource type being claimed from every player.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct PickResourceType {
    pub game: String,
    /// A [`ResourceType`] wire value.
    pub resource_type: i32,
}

impl PickResourceType {
    pub fn encode(&self) -> String {
        shape::encode_game_i32(codes::PICK_RESOURCE_TYPE, &self.game, self.resource_type)
    }

    pub fn parse(body: &str) -> Option<Self> {
        let (game, resource_type) = shape::parse_game_i32(body)?;
        Some(Self {
            game,
            resource_type,
        })
    }
}

/// Resources discarded to the robber.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Discard {
    pub game: String,
    pub resources: ResourceSet,
}

impl Discard {
    pub fn encode(&self) -> String {
        let mut b = LineBuilder::new(codes::DISCARD);
        b.param(&self.game);
        self.resources.push_all(&mut b);
        b.finish()
    }

    pub fn parse(body: &str) -> Option<Self> {
        let mut f = Fields::new(body);
        let game = f.next_string().ok()?;
        let resources = ResourceSet::parse_all(&mut f)?;
        Some(Self { game, resources })
    }
}

/// Server request that a player discard down to the hand limit.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct DiscardRequest {
    pub game: String,
    pub number_of_discards: i32,
}

impl DiscardRequest {
    pub fn encode(&self) -> String {
        shape::encode_game_i32(codes::DISCARD_REQUEST, &self.game, self.number_of_discards)
    }

    pub fn parse(body: &str) -> Option<Self> {
        let (game, number_of_discards) = shape::parse_game_i32(body)?;
        Some(Self {
            game,
            number_of_discards,
        })
    }
}

/// What a [`PlayerElement`] update does to the element's value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum PlayerElementAction {
    Set,
    Gain,
    Lose,
}

impl PlayerElementAction {
    const fn to_i32(self) -> i32 {
        match self {
            Self::Set => 100,
            Self::Gain => 101,
            Self::Lose => 102,
        }
    }

    /// Parses a wire action value. The negated values are the legacy
    /// "news" spellings and also set the news flag.
    const fn from_i32(v: i32) -> Option<(Self, bool)> {
        match v {
            100 => Some((Self::Set, false)),
            101 => Some((Self::Gain, false)),
            102 => Some((Self::Lose, false)),
            -100 => Some((Self::Set, true)),
            -101 => Some((Self::Gain, true)),
            -102 => Some((Self::Lose, true)),
            _ => None,
        }
    }
}

/// An update to one counted thing a player has: a resource count, piece
/// count, knight count, or a scenario-specific element.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct PlayerElement {
    pub game: String,
    pub player_number: i32,
    pub action: PlayerElementAction,
    /// Element type: resource types 1–6, pieces 10–13, knights 15, and
    /// scenario elements above that.
    pub element_type: i32,
    pub amount: i32,
    /// Marks an update worth announcing, such as a robbery result.
    pub is_news: bool,
}

impl PlayerElement {
    pub const ROADS: i32 = 10;
    pub const SETTLEMENTS: i32 = 11;
    pub const CITIES: i32 = 12;
    pub const SHIPS: i32 = 13;
    pub const NUM_KNIGHTS: i32 = 15;

    pub fn encode(&self) -> String {
        let mut b = LineBuilder::new(codes::PLAYER_ELEMENT);
        b.param(&self.game)
            .field_i32(self.player_number)
            .field_i32(self.action.to_i32())
            .field_i32(self.element_type)
            .field_i32(self.amount);
        if self.is_news {
            b.field("Y");
        }
        b.finish()
    }

    pub fn parse(body: &str) -> Option<Self> {
        let mut f = Fields::new(body);
        let game = f.next_string().ok()?;
        let player_number = f.next_i32().ok()?;
        let (action, mut is_news) = PlayerElementAction::from_i32(f.next_i32().ok()?)?;
        let element_type = f.next_i32().ok()?;
        let amount = f.next_i32().ok()?;
        if let Ok(tok) = f.next_str() {
            is_news = is_news || tok == "Y";
        }
        Some(Self {
            game,
            player_number,
            action,
            element_type,
            amount,
            is_news,
        })
    }
}

/// Several [`PlayerElement`] updates for one player in one message.
///
/// Multi-parameter layout: player number, action, then element/amount
/// pairs.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct PlayerElements {
    pub game: String,
    pub player_number: i32,
    pub action: PlayerElementAction,
    pub elements: Vec<(i32, i32)>,
}

impl PlayerElements {
    pub fn encode(&self) -> String {
        let mut b = LineBuilder::new(codes::PLAYER_ELEMENTS);
        b.param(&self.game)
            .param_i32(self.player_number)
            .param_i32(self.action.to_i32());
        for (etype, amount) in &self.elements {
            b.param_i32(*etype);
            b.param_i32(*amount);
        }
        b.finish()
    }

    pub fn parse(params: &[&str]) -> Option<Self> {
        if params.len() < 5 || params.len() % 2 == 0 {
            return None;
        }
        let game = params[0].to_owned();
        let player_number = params[1].parse().ok()?;
        let (action, _) = PlayerElementAction::from_i32(params[2].parse().ok()?)?;
        let mut elements = Vec::with_capacity((params.len() - 3) / 2);
        for pair in params[3..].chunks_exact(2) {
            elements.push((pair[0].parse().ok()?, pair[1].parse().ok()?));
        }
        Some(Self {
            game,
            player_number,
            action,
            elements,
        })
    }
}

/// End-of-game statistics for one player.
///
/// Multi-parameter layout: a stat type, then that type's values. Type 1
/// is resource-roll totals, indexed by resource type.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct PlayerStats {
    pub game: String,
    pub stat_type: i32,
    pub values: Vec<i32>,
}

impl PlayerStats {
    /// Stat type: resources gained per roll, one value per resource
    /// type.
    pub const STYPE_RES_ROLL: i32 = 1;

    pub fn encode(&self) -> String {
        let mut b = LineBuilder::new(codes::PLAYER_STATS);
        b.param(&self.game).param_i32(self.stat_type);
        for v in &self.values {
            b.param_i32(*v);
        }
        b.finish()
    }

    pub fn parse(params: &[&str]) -> Option<Self> {
        if params.len() < 2 {
            return None;
        }
        let game = params[0].to_owned();
        let stat_type = params[1].parse().ok()?;
        let values = params[2..]
            .iter()
            .map(|p| p.parse().ok())
            .collect::<Option<_>>()?;
        Some(Self {
            game,
            stat_type,
            values,
        })
    }
}

/// A player's total resource count, for cross-checking client state.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ResourceCount {
    pub game: String,
    pub player_number: i32,
    pub count: i32,
}

impl ResourceCount {
    pub fn encode(&self) -> String {
        shape::encode_game_i32x2(
            codes::RESOURCE_COUNT,
            &self.game,
            self.player_number,
            self.count,
        )
    }

    pub fn parse(body: &str) -> Option<Self> {
        let (game, player_number, count) = shape::parse_game_i32x2(body)?;
        Some(Self {
            game,
            player_number,
            count,
        })
    }
}
