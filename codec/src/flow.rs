//! Turn sequencing, dice, game-element, and in-game text messages.

use registry::codes;
use wire::{Fields, LineBuilder, SERVER_TEXT_SEP, TEXT_SEP};

use crate::shape;
use crate::types::{ResourceSet, ResourceType};

/// The game's current state-machine number.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct GameState {
    pub game: String,
    pub state: i32,
}

impl GameState {
    pub fn encode(&self) -> String {
        shape::encode_game_i32(codes::GAME_STATE, &self.game, self.state)
    }

    pub fn parse(body: &str) -> Option<Self> {
        let (game, state) = shape::parse_game_i32(body)?;
        Some(Self { game, state })
    }
}

/// Whose turn has begun.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Turn {
    pub game: String,
    pub player_number: i32,
}

impl Turn {
    pub fn encode(&self) -> String {
        shape::encode_game_i32(codes::TURN, &self.game, self.player_number)
    }

    pub fn parse(body: &str) -> Option<Self> {
        let (game, player_number) = shape::parse_game_i32(body)?;
        Some(Self {
            game,
            player_number,
        })
    }
}

/// Server adjustment of whose turn it is, without starting a new turn.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct SetTurn {
    pub game: String,
    pub player_number: i32,
}

impl SetTurn {
    pub fn encode(&self) -> String {
        shape::encode_game_i32(codes::SET_TURN, &self.game, self.player_number)
    }

    pub fn parse(body: &str) -> Option<Self> {
        let (game, player_number) = shape::parse_game_i32(body)?;
        Some(Self {
            game,
            player_number,
        })
    }
}

/// Which player goes first this game.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct FirstPlayer {
    pub game: String,
    pub player_number: i32,
}

impl FirstPlayer {
    pub fn encode(&self) -> String {
        shape::encode_game_i32(codes::FIRST_PLAYER, &self.game, self.player_number)
    }

    pub fn parse(body: &str) -> Option<Self> {
        let (game, player_number) = shape::parse_game_i32(body)?;
        Some(Self {
            game,
            player_number,
        })
    }
}

/// The total of the dice just rolled.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct DiceResult {
    pub game: String,
    /// Sum of both dice, or -1 while nothing has been rolled.
    pub result: i32,
}

impl DiceResult {
    pub fn encode(&self) -> String {
        shape::encode_game_i32(codes::DICE_RESULT, &self.game, self.result)
    }

    pub fn parse(body: &str) -> Option<Self> {
        let (game, result) = shape::parse_game_i32(body)?;
        Some(Self { game, result })
    }
}

/// One player's gains from a dice roll, inside [`DiceResultResources`].
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct PlayerRoll {
    pub player_number: i32,
    /// The player's total resource count after gaining.
    pub total: i32,
    /// What was gained; only the known resource types are encoded.
    pub resources: ResourceSet,
}

/// Per-player resource gains from one dice roll, so clients can report
/// everything in a single announcement.
///
/// Multi-parameter layout: a player count, then for each player their
/// number, new total, and (amount, resource-type) pairs, with a `0`
/// separating players.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct DiceResultResources {
    pub game: String,
    /// One entry per player who gained resources; never empty.
    pub rolls: Vec<PlayerRoll>,
}

impl DiceResultResources {
    pub fn encode(&self) -> String {
        let mut b = LineBuilder::new(codes::DICE_RESULT_RESOURCES);
        b.param(&self.game);
        b.param_i32(i32::try_from(self.rolls.len()).unwrap_or(0));
        for (i, roll) in self.rolls.iter().enumerate() {
            b.param_i32(roll.player_number);
            b.param_i32(roll.total);
            for rtype in ResourceType::KNOWN {
                let amount = roll.resources.amount(rtype);
                if amount != 0 {
                    b.param_i32(amount);
                    b.param_i32(rtype.to_i32());
                }
            }
            if i != self.rolls.len() - 1 {
                b.param_i32(0);
            }
        }
        b.finish()
    }

    pub fn parse(params: &[&str]) -> Option<Self> {
        let game = (*params.first()?).to_owned();
        let ints: Vec<i32> = params[1..]
            .iter()
            .map(|p| p.parse().ok())
            .collect::<Option<_>>()?;
        let count = usize::try_from(*ints.first()?).ok()?;
        let mut rolls = Vec::with_capacity(count);

        let mut i = 1;
        while i < ints.len() {
            let player_number = ints[i];
            i += 1;
            let total = *ints.get(i)?;
            i += 1;
            let mut counts = [0; 6];
            let mut amount = *ints.get(i)?;
            i += 1;
            while amount != 0 && i < ints.len() {
                let rtype = ResourceType::from_i32(ints[i])?;
                counts[rtype as usize - 1] += amount;
                i += 1;
                if i < ints.len() {
                    amount = ints[i];
                    i += 1;
                } else {
                    amount = 0;
                }
            }
            rolls.push(PlayerRoll {
                player_number,
                total,
                resources: ResourceSet::from_counts(counts),
            });
        }
        if rolls.len() != count {
            return None;
        }
        Some(Self { game, rolls })
    }
}

/// Client request to roll the dice.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct RollDice {
    pub game: String,
}

impl RollDice {
    pub fn encode(&self) -> String {
        shape::encode_name_only(codes::ROLL_DICE, &self.game)
    }

    pub fn parse(body: &str) -> Option<Self> {
        shape::parse_name_only(body).map(|game| Self { game })
    }
}

/// Server request that the current player roll or play a card.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct RollDiceRequest {
    pub game: String,
}

impl RollDiceRequest {
    pub fn encode(&self) -> String {
        shape::encode_name_only(codes::ROLL_DICE_REQUEST, &self.game)
    }

    pub fn parse(body: &str) -> Option<Self> {
        shape::parse_name_only(body).map(|game| Self { game })
    }
}

/// Server prompt that a player may auto-roll now.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct RollDicePrompt {
    pub game: String,
    pub player_number: i32,
}

impl RollDicePrompt {
    pub fn encode(&self) -> String {
        shape::encode_game_i32(codes::ROLL_DICE_PROMPT, &self.game, self.player_number)
    }

    pub fn parse(body: &str) -> Option<Self> {
        let (game, player_number) = shape::parse_game_i32(body)?;
        Some(Self {
            game,
            player_number,
        })
    }
}

/// Client notice that its turn is done.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct EndTurn {
    pub game: String,
}

impl EndTurn {
    pub fn encode(&self) -> String {
        shape::encode_name_only(codes::END_TURN, &self.game)
    }

    pub fn parse(body: &str) -> Option<Self> {
        shape::parse_name_only(body).map(|game| Self { game })
    }
}

/// Robot timing keepalive within a game.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct TimingPing {
    pub game: String,
}

impl TimingPing {
    pub fn encode(&self) -> String {
        shape::encode_name_only(codes::TIMING_PING, &self.game)
    }

    pub fn parse(body: &str) -> Option<Self> {
        shape::parse_name_only(body).map(|game| Self { game })
    }
}

/// Holder of the longest trade route.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct LongestRoad {
    pub game: String,
    /// Seat number of the holder, or -1 for nobody.
    pub player_number: i32,
}

impl LongestRoad {
    pub fn encode(&self) -> String {
        shape::encode_game_i32(codes::LONGEST_ROAD, &self.game, self.player_number)
    }

    pub fn parse(body: &str) -> Option<Self> {
        let (game, player_number) = shape::parse_game_i32(body)?;
        Some(Self {
            game,
            player_number,
        })
    }
}

/// Holder of the largest army.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct LargestArmy {
    pub game: String,
    /// Seat number of the holder, or -1 for nobody.
    pub player_number: i32,
}

impl LargestArmy {
    pub fn encode(&self) -> String {
        shape::encode_game_i32(codes::LARGEST_ARMY, &self.game, self.player_number)
    }

    pub fn parse(body: &str) -> Option<Self> {
        let (game, player_number) = shape::parse_game_i32(body)?;
        Some(Self {
            game,
            player_number,
        })
    }
}

/// Numeric game-status fields, as (element type, value) pairs.
///
/// Element types: 1 round count, 2 dev cards left, 3 first player,
/// 4 current player, 5 largest army holder, 6 longest road holder.
/// Unknown element types are carried through for forward compatibility.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct GameElements {
    pub game: String,
    pub elements: Vec<(i32, i32)>,
}

impl GameElements {
    pub const ROUND_COUNT: i32 = 1;
    pub const DEV_CARD_COUNT: i32 = 2;
    pub const FIRST_PLAYER: i32 = 3;
    pub const CURRENT_PLAYER: i32 = 4;
    pub const LARGEST_ARMY_PLAYER: i32 = 5;
    pub const LONGEST_ROAD_PLAYER: i32 = 6;

    pub fn encode(&self) -> String {
        let mut b = LineBuilder::new(codes::GAME_ELEMENTS);
        b.param(&self.game);
        for (etype, value) in &self.elements {
            b.param_i32(*etype);
            b.param_i32(*value);
        }
        b.finish()
    }

    pub fn parse(params: &[&str]) -> Option<Self> {
        if params.len() < 3 || params.len() % 2 == 0 {
            return None;
        }
        let game = params[0].to_owned();
        let mut elements = Vec::with_capacity((params.len() - 1) / 2);
        for pair in params[1..].chunks_exact(2) {
            elements.push((pair[0].parse().ok()?, pair[1].parse().ok()?));
        }
        Some(Self { game, elements })
    }
}

/// A line of chat said into a game.
///
/// The text may contain the secondary separator, so the body uses the
/// NUL inner separator.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct GameTextMsg {
    pub game: String,
    pub nickname: String,
    pub text: String,
}

impl GameTextMsg {
    pub fn encode(&self) -> String {
        let mut b = LineBuilder::new(codes::GAME_TEXT_MSG);
        b.param(&self.game)
            .raw_char(TEXT_SEP)
            .raw(&self.nickname)
            .raw_char(TEXT_SEP)
            .raw(&self.text);
        b.finish()
    }

    pub fn parse(body: &str) -> Option<Self> {
        let mut f = Fields::split_on(body, TEXT_SEP);
        let game = f.next_str().ok()?.to_owned();
        let nickname = f.next_str().ok()?.to_owned();
        let text = f.next_str().ok()?.to_owned();
        Some(Self {
            game,
            nickname,
            text,
        })
    }
}

/// Server text announced into a game, without a nickname.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct GameServerText {
    pub game: String,
    pub text: String,
}

impl GameServerText {
    pub fn encode(&self) -> String {
        let mut b = LineBuilder::new(codes::GAME_SERVER_TEXT);
        b.param(&self.game)
            .raw_char(SERVER_TEXT_SEP)
            .raw(&self.text);
        b.finish()
    }

    pub fn parse(body: &str) -> Option<Self> {
        let mut f = Fields::split_on(body, SERVER_TEXT_SEP);
        let game = f.next_str().ok()?.to_owned();
        let text = f.next_str().ok()?.to_owned();
        Some(Self { game, text })
    }
}

/// Special victory points awarded, with the reason text.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct SvpTextMsg {
    pub game: String,
    pub player_number: i32,
    /// Number of special victory points awarded.
    pub svp: i32,
    /// Reason text; read with the remainder escape, so it may contain
    /// the secondary separator.
    pub description: String,
}

impl SvpTextMsg {
    pub fn encode(&self) -> String {
        let mut b = LineBuilder::new(codes::SVP_TEXT_MSG);
        b.param(&self.game)
            .field_i32(self.player_number)
            .field_i32(self.svp)
            .field(&self.description);
        b.finish()
    }

    pub fn parse(body: &str) -> Option<Self> {
        let mut f = Fields::new(body);
        let game = f.next_string().ok()?;
        let player_number = f.next_i32().ok()?;
        let svp = f.next_i32().ok()?;
        let description = f.rest().ok()?.to_owned();
        Some(Self {
            game,
            player_number,
            svp,
            description,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn game_state_round_trip() {
        let msg = GameState {
            game: "g".into(),
            state: 20,
        };
        assert_eq!(msg.encode(), "1025|g,20");
        assert_eq!(GameState::parse("g,20"), Some(msg));
    }

    #[test]
    fn dice_result_resources_round_trip() {
        let msg = DiceResultResources {
            game: "g".into(),
            rolls: vec![
                PlayerRoll {
                    player_number: 1,
                    total: 7,
                    resources: ResourceSet::new(2, 0, 0, 1, 0, 0),
                },
                PlayerRoll {
                    player_number: 3,
                    total: 2,
                    resources: ResourceSet::new(0, 0, 0, 0, 1, 0),
                },
            ],
        };
        assert_eq!(msg.encode(), "1092|g|2|1|7|2|1|1|4|0|3|2|1|5");
        let params: Vec<&str> = ["g", "2", "1", "7", "2", "1", "1", "4", "0", "3", "2", "1", "5"]
            .to_vec();
        assert_eq!(DiceResultResources::parse(&params), Some(msg));
    }

    #[test]
    fn dice_result_resources_count_mismatch_fails() {
        let params = ["g", "3", "1", "7", "2", "1"];
        assert_eq!(DiceResultResources::parse(&params), None);
    }

    #[test]
    fn game_elements_pairs() {
        let msg = GameElements {
            game: "g".into(),
            elements: vec![
                (GameElements::DEV_CARD_COUNT, 22),
                (GameElements::CURRENT_PLAYER, 3),
            ],
        };
        assert_eq!(msg.encode(), "1096|g|2|22|4|3");
        assert_eq!(
            GameElements::parse(&["g", "2", "22", "4", "3"]),
            Some(msg)
        );
        // An element type without its value is malformed.
        assert_eq!(GameElements::parse(&["g", "2", "22", "4"]), None);
    }

    #[test]
    fn game_text_round_trip_with_commas() {
        let msg = GameTextMsg {
            game: "g".into(),
            nickname: "alice".into(),
            text: "trade you wheat, ore for wood?".into(),
        };
        let line = msg.encode();
        assert_eq!(
            GameTextMsg::parse(line.strip_prefix("1010|").unwrap()),
            Some(msg)
        );
    }

    #[test]
    fn server_text_round_trip() {
        let msg = GameServerText {
            game: "g".into(),
            text: "alice rolled a 4 and a 3.".into(),
        };
        assert_eq!(msg.encode(), "1091|g\u{1}alice rolled a 4 and a 3.");
        assert_eq!(
            GameServerText::parse("g\u{1}alice rolled a 4 and a 3."),
            Some(msg)
        );
    }

    #[test]
    fn svp_text_description_keeps_commas() {
        let msg = SvpTextMsg {
            game: "g".into(),
            player_number: 2,
            svp: 2,
            description: "settling a new island, well done".into(),
        };
        assert_eq!(
            SvpTextMsg::parse("g,2,2,settling a new island, well done"),
            Some(msg)
        );
    }
}
