//! Robot-coordination messages.

use registry::codes;
use wire::{Fields, LineBuilder};

use crate::shape;
use crate::types::{GameOptions, RobotParameters};

/// Server request that a connected robot join a game and take a seat.
///
/// The game's options are the final field, read with the remainder
/// escape.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct BotJoinGameRequest {
    pub game: String,
    pub player_number: i32,
    pub options: GameOptions,
}

impl BotJoinGameRequest {
    pub fn encode(&self) -> String {
        let mut b = LineBuilder::new(codes::BOT_JOIN_GAME_REQUEST);
        b.param(&self.game)
            .field_i32(self.player_number)
            .field(&self.options.pack());
        b.finish()
    }

    pub fn parse(body: &str) -> Option<Self> {
        let mut f = Fields::new(body);
        let game = f.next_string().ok()?;
        let player_number = f.next_i32().ok()?;
        let options = GameOptions::unpack(f.rest().ok()?)?;
        Some(Self {
            game,
            player_number,
            options,
        })
    }
}

/// Server request that a robot leave, so a human can take the seat.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct RobotDismiss {
    pub game: String,
}

impl RobotDismiss {
    pub fn encode(&self) -> String {
        shape::encode_name_only(codes::ROBOT_DISMISS, &self.game)
    }

    pub fn parse(body: &str) -> Option<Self> {
        shape::parse_name_only(body).map(|game| Self { game })
    }
}

/// New strategy tuning parameters for a robot.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct UpdateRobotParams {
    pub params: RobotParameters,
}

impl UpdateRobotParams {
    pub fn encode(&self) -> String {
        let p = &self.params;
        let mut b = LineBuilder::new(codes::UPDATE_ROBOT_PARAMS);
        b.param_i32(p.max_game_length)
            .field_i32(p.max_eta)
            .field_f32(p.eta_bonus_factor)
            .field_f32(p.adversarial_factor)
            .field_f32(p.leader_adversarial_factor)
            .field_f32(p.dev_card_multiplier)
            .field_f32(p.threat_multiplier)
            .field_i32(p.strategy_type)
            .field_i32(p.trade_flag);
        b.finish()
    }

    pub fn parse(body: &str) -> Option<Self> {
        let mut f = Fields::new(body);
        let params = RobotParameters {
            max_game_length: f.next_i32().ok()?,
            max_eta: f.next_i32().ok()?,
            eta_bonus_factor: f.next_f32().ok()?,
            adversarial_factor: f.next_f32().ok()?,
            leader_adversarial_factor: f.next_f32().ok()?,
            dev_card_multiplier: f.next_f32().ok()?,
            threat_multiplier: f.next_f32().ok()?,
            strategy_type: f.next_i32().ok()?,
            trade_flag: f.next_i32().ok()?,
        };
        Some(Self { params })
    }
}
