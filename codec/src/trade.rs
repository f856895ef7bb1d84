//! Player-to-player and bank trading messages.

use registry::codes;
use wire::{Fields, LineBuilder};

use crate::shape;
use crate::types::{ResourceSet, TradeOffer};

/// A trade offer placed on the table.
///
/// The addressed-seat flags are word booleans; their count is the
/// game's seat count and is recovered on parse from the token count.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct MakeOffer {
    pub game: String,
    pub offer: TradeOffer,
}

impl MakeOffer {
    pub fn encode(&self) -> String {
        let mut b = LineBuilder::new(codes::MAKE_OFFER);
        b.param(&self.game).field_i32(self.offer.from);
        for addressed in &self.offer.to {
            b.field_bool_word(*addressed);
        }
        self.offer.give.push_known(&mut b);
        self.offer.get.push_known(&mut b);
        b.finish()
    }

    pub fn parse(body: &str) -> Option<Self> {
        let mut f = Fields::new(body);
        let game = f.next_string().ok()?;
        let from = f.next_i32().ok()?;
        let seat_count = f.count_remaining().checked_sub(10)?;
        if seat_count == 0 {
            return None;
        }
        let mut to = Vec::with_capacity(seat_count);
        for _ in 0..seat_count {
            to.push(f.next_bool_word().ok()?);
        }
        let give = ResourceSet::parse_known(&mut f)?;
        let get = ResourceSet::parse_known(&mut f)?;
        Some(Self {
            game,
            offer: TradeOffer {
                from,
                to,
                give,
                get,
            },
        })
    }
}

/// A player clearing their own offer from the table.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ClearOffer {
    pub game: String,
    /// Seat whose offer is cleared, or -1 for all seats.
    pub player_number: i32,
}

impl ClearOffer {
    pub fn encode(&self) -> String {
        shape::encode_game_i32(codes::CLEAR_OFFER, &self.game, self.player_number)
    }

    pub fn parse(body: &str) -> Option<Self> {
        let (game, player_number) = shape::parse_game_i32(body)?;
        Some(Self {
            game,
            player_number,
        })
    }
}

/// A player rejecting the offers on the table.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct RejectOffer {
    pub game: String,
    pub player_number: i32,
}

impl RejectOffer {
    pub fn encode(&self) -> String {
        shape::encode_game_i32(codes::REJECT_OFFER, &self.game, self.player_number)
    }

    pub fn parse(body: &str) -> Option<Self> {
        let (game, player_number) = shape::parse_game_i32(body)?;
        Some(Self {
            game,
            player_number,
        })
    }
}

/// A player accepting another player's offer.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct AcceptOffer {
    pub game: String,
    /// Seat accepting the offer.
    pub accepting: i32,
    /// Seat whose offer is accepted.
    pub offering: i32,
}

impl AcceptOffer {
    pub fn encode(&self) -> String {
        shape::encode_game_i32x2(codes::ACCEPT_OFFER, &self.game, self.accepting, self.offering)
    }

    pub fn parse(body: &str) -> Option<Self> {
        let (game, accepting, offering) = shape::parse_game_i32x2(body)?;
        Some(Self {
            game,
            accepting,
            offering,
        })
    }
}

/// A trade with the bank or a port: give one set, get another.
///
/// The trailing player number was added later and is omitted when
/// negative, so old peers still parse the message.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct BankTrade {
    pub game: String,
    pub give: ResourceSet,
    pub get: ResourceSet,
    /// Trading seat, or -1 when not sent.
    pub player_number: i32,
}

impl BankTrade {
    pub fn encode(&self) -> String {
        let mut b = LineBuilder::new(codes::BANK_TRADE);
        b.param(&self.game);
        self.give.push_known(&mut b);
        self.get.push_known(&mut b);
        if self.player_number >= 0 {
            b.field_i32(self.player_number);
        }
        b.finish()
    }

    pub fn parse(body: &str) -> Option<Self> {
        let mut f = Fields::new(body);
        let game = f.next_string().ok()?;
        let give = ResourceSet::parse_known(&mut f)?;
        let get = ResourceSet::parse_known(&mut f)?;
        let player_number = if f.has_more() {
            f.next_i32().ok()?
        } else {
            -1
        };
        Some(Self {
            game,
            give,
            get,
            player_number,
        })
    }
}

/// Clearing the trade-offer display area for a seat.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ClearTradeMsg {
    pub game: String,
    /// Seat to clear, or -1 for all seats.
    pub player_number: i32,
}

impl ClearTradeMsg {
    pub fn encode(&self) -> String {
        shape::encode_game_i32(codes::CLEAR_TRADE_MSG, &self.game, self.player_number)
    }

    pub fn parse(body: &str) -> Option<Self> {
        let (game, player_number) = shape::parse_game_i32(body)?;
        Some(Self {
            game,
            player_number,
        })
    }
}
