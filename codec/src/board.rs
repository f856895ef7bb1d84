//! Board layout and piece-placement messages.

use std::collections::BTreeMap;

use registry::codes;
use wire::{Fields, LineBuilder};

use crate::shape;

/// Number of hexes in the classic board encoding, water ring included.
pub const CLASSIC_HEX_COUNT: usize = 37;

/// Serializes a `[i32; CLASSIC_HEX_COUNT]` as a sequence. serde's derived
/// `Serialize` only covers arrays up to length 32, so the 37-element board
/// arrays need an explicit helper that emits the same sequence form.
#[cfg(feature = "serde")]
fn serialize_hex_array<S>(
    arr: &[i32; CLASSIC_HEX_COUNT],
    serializer: S,
) -> Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    serializer.collect_seq(arr.iter())
}

/// Dice number → wire value for the classic board layout message.
/// Index by the rolled number 0–12; 7 and the out-of-play slots map
/// to -1.
const NUM_TO_WIRE: [i32; 13] = [-1, -1, 0, 1, 2, 3, 4, -1, 5, 6, 7, 8, 9];

/// Wire value 0–9 → dice number for the classic board layout message.
const WIRE_TO_NUM: [i32; 10] = [2, 3, 4, 5, 6, 8, 9, 10, 11, 12];

/// Water hex terrain value on the wire (legacy encoding).
const WIRE_WATER: i32 = 6;
/// Desert hex terrain value on the wire (legacy encoding).
const WIRE_DESERT: i32 = 0;
/// Water hex terrain value in the current board model.
const BOARD_WATER: i32 = 0;
/// Desert hex terrain value in the current board model.
const BOARD_DESERT: i32 = 6;

/// The classic board layout: 37 terrain hexes, 37 dice numbers, and the
/// robber's hex.
///
/// This message predates the internal renumbering of terrain and dice
/// values, so both arrays are stored and transmitted in the legacy wire
/// domain; [`from_board`](Self::from_board) and the `board_*` accessors
/// apply the compatibility remap in each direction. The remap is
/// asymmetric by history: both dice number 0 and the "no number" -1
/// encode to wire -1, and wire -1 always decodes to 0.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct BoardLayout {
    pub game: String,
    /// Terrain values, wire domain: 0 desert, 1–5 resource hexes,
    /// 6 water, ports above that.
    #[cfg_attr(feature = "serde", serde(serialize_with = "serialize_hex_array"))]
    pub hex_layout: [i32; CLASSIC_HEX_COUNT],
    /// Dice numbers, wire domain: -1 none, 0–9 for 2,3,4,5,6,8,9,10,11,12.
    #[cfg_attr(feature = "serde", serde(serialize_with = "serialize_hex_array"))]
    pub number_layout: [i32; CLASSIC_HEX_COUNT],
    pub robber_hex: i32,
}

impl BoardLayout {
    /// Builds the message from board-domain values, applying the legacy
    /// remap of terrain (water 0 ↔ 6 desert swap) and dice numbers.
    #[must_use]
    pub fn from_board(
        game: impl Into<String>,
        hexes: [i32; CLASSIC_HEX_COUNT],
        numbers: [i32; CLASSIC_HEX_COUNT],
        robber_hex: i32,
    ) -> Self {
        let hex_layout = hexes.map(|h| match h {
            BOARD_WATER => WIRE_WATER,
            BOARD_DESERT => WIRE_DESERT,
            other => other,
        });
        let number_layout = numbers.map(|n| {
            if n == -1 {
                -1
            } else {
                usize::try_from(n)
                    .ok()
                    .and_then(|i| NUM_TO_WIRE.get(i).copied())
                    .unwrap_or(-1)
            }
        });
        Self {
            game: game.into(),
            hex_layout,
            number_layout,
            robber_hex,
        }
    }

    /// Terrain values in the board domain.
    #[must_use]
    pub fn board_hexes(&self) -> [i32; CLASSIC_HEX_COUNT] {
        self.hex_layout.map(|h| match h {
            WIRE_WATER => BOARD_WATER,
            WIRE_DESERT => BOARD_DESERT,
            other => other,
        })
    }

    /// Dice numbers in the board domain; wire -1 becomes 0, never -1.
    #[must_use]
    pub fn board_numbers(&self) -> [i32; CLASSIC_HEX_COUNT] {
        self.number_layout.map(|n| {
            if n == -1 {
                0
            } else {
                usize::try_from(n)
                    .ok()
                    .and_then(|i| WIRE_TO_NUM.get(i).copied())
                    .unwrap_or(0)
            }
        })
    }

    pub fn encode(&self) -> String {
        let mut b = LineBuilder::new(codes::BOARD_LAYOUT);
        b.param(&self.game);
        for h in &self.hex_layout {
            b.field_i32(*h);
        }
        for n in &self.number_layout {
            b.field_i32(*n);
        }
        b.field_i32(self.robber_hex);
        b.finish()
    }

    pub fn parse(body: &str) -> Option<Self> {
        let mut f = Fields::new(body);
        let game = f.next_string().ok()?;
        let mut hex_layout = [0; CLASSIC_HEX_COUNT];
        for h in &mut hex_layout {
            *h = f.next_i32().ok()?;
        }
        let mut number_layout = [0; CLASSIC_HEX_COUNT];
        for n in &mut number_layout {
            *n = f.next_i32().ok()?;
        }
        let robber_hex = f.next_i32().ok()?;
        Some(Self {
            game,
            hex_layout,
            number_layout,
            robber_hex,
        })
    }
}

/// One part of a [`BoardLayout2`] layout: a scalar or an integer array.
///
/// On the wire an array part is a `[`-prefixed length followed by that
/// many integer fields; a scalar part is a bare token. Numeric scalars
/// are kept as integers; anything else stays a string.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum LayoutPart {
    Int(i32),
    IntArray(Vec<i32>),
    Str(String),
}

/// The keyed board layout for newer encodings: sea boards, six-player
/// boards, scenario extras.
///
/// Known part keys are `HL` (hex layout), `NL` (number layout), `RH`
/// (robber hex), `PL` (port layout), `LH` (land hexes), `PH` (pirate
/// hex), `PX`/`RX` (pirate/robber exclusion lists), `CV` (cloth
/// villages); unknown keys round-trip for forward compatibility.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct BoardLayout2 {
    pub game: String,
    /// Board encoding format number.
    pub encoding: i32,
    pub parts: BTreeMap<String, LayoutPart>,
}

impl BoardLayout2 {
    pub fn encode(&self) -> String {
        let mut b = LineBuilder::new(codes::BOARD_LAYOUT2);
        b.param(&self.game).field_i32(self.encoding);
        for (key, part) in &self.parts {
            b.field(key);
            match part {
                LayoutPart::Int(v) => {
                    b.field_i32(*v);
                }
                LayoutPart::IntArray(arr) => {
                    b.field(&format!("[{}", arr.len()));
                    for v in arr {
                        b.field_i32(*v);
                    }
                }
                LayoutPart::Str(s) => {
                    b.field(s);
                }
            }
        }
        b.finish()
    }

    pub fn parse(body: &str) -> Option<Self> {
        let mut f = Fields::new(body);
        let game = f.next_string().ok()?;
        let encoding = f.next_i32().ok()?;
        let mut parts = BTreeMap::new();
        while f.has_more() {
            let key = f.next_string().ok()?;
            let value = f.next_str().ok()?;
            let part = if let Some(len) = value.strip_prefix('[') {
                let len: usize = len.parse().ok()?;
                if len > f.count_remaining() {
                    return None;
                }
                let mut arr = Vec::with_capacity(len);
                for _ in 0..len {
                    arr.push(f.next_i32().ok()?);
                }
                LayoutPart::IntArray(arr)
            } else if let Ok(v) = value.parse() {
                LayoutPart::Int(v)
            } else {
                LayoutPart::Str(value.to_owned())
            };
            parts.insert(key, part);
        }
        Some(Self {
            game,
            encoding,
            parts,
        })
    }
}

/// Potential settlement nodes for one player, optionally with the whole
/// board's land areas and legal sea edges.
///
/// The simple form is just the node list. The land-area form appends
/// `NA`,count,`PAN`,area then each other area's `LA<n>` node list; the
/// starting area's own nodes are the leading node list and are not
/// repeated. Legal sea edges follow as `SE`-marked hex lists, with a
/// lone `0` padding a trailing empty list.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct PotentialSettlements {
    pub game: String,
    pub player_number: i32,
    /// Potential nodes; with land areas, the starting area's legal nodes.
    pub nodes: Vec<i32>,
    pub land_areas: Option<LandAreas>,
}

/// The land-area portion of [`PotentialSettlements`].
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct LandAreas {
    /// Total number of land areas on the board.
    pub area_count: i32,
    /// The area players start in (whose nodes are the message's node
    /// list), or 0.
    pub starting_area: i32,
    /// Node lists of the other areas, as (area number, nodes) pairs.
    pub other_areas: Vec<(i32, Vec<i32>)>,
    /// Legal sea edge lists, hex-encoded on the wire.
    pub legal_sea_edges: Option<Vec<Vec<i32>>>,
}

impl PotentialSettlements {
    pub fn encode(&self) -> String {
        let mut b = LineBuilder::new(codes::POTENTIAL_SETTLEMENTS);
        b.param(&self.game).field_i32(self.player_number);
        for node in &self.nodes {
            b.field_i32(*node);
        }
        if let Some(la) = &self.land_areas {
            b.field("NA").field_i32(la.area_count);
            b.field("PAN").field_i32(la.starting_area);
            for (num, nodes) in &la.other_areas {
                b.field(&format!("LA{num}"));
                for node in nodes {
                    b.field_i32(*node);
                }
            }
            if let Some(lse) = &la.legal_sea_edges {
                for (i, edges) in lse.iter().enumerate() {
                    b.field("SE");
                    if edges.is_empty() && i == lse.len() - 1 {
                        // Pad a trailing empty list; earlier empties are
                        // implied by the next SE marker.
                        b.field_i32(0);
                    } else {
                        for edge in edges {
                            b.field_i32_hex(*edge);
                        }
                    }
                }
            }
        }
        b.finish()
    }

    pub fn parse(body: &str) -> Option<Self> {
        let mut f = Fields::new(body);
        let game = f.next_string().ok()?;
        let player_number = f.next_i32().ok()?;

        let mut nodes = Vec::new();
        let mut had_na = false;
        while let Ok(tok) = f.next_str() {
            if tok == "NA" {
                had_na = true;
                break;
            }
            nodes.push(tok.parse().ok()?);
        }
        if !had_na {
            return Some(Self {
                game,
                player_number,
                nodes,
                land_areas: None,
            });
        }

        let area_count: i32 = f.next_i32().ok()?;
        // Each area except the starting one needs its own LA token, so
        // the count is bounded by what is actually left in the body.
        if area_count < 1 || usize::try_from(area_count).ok()? > f.count_remaining() + 1 {
            return None;
        }
        if f.next_str().ok()? != "PAN" {
            return None;
        }
        let starting_area = f.next_i32().ok()?;
        if starting_area < 0 {
            return None;
        }

        let mut other_areas: Vec<(i32, Vec<i32>)> = Vec::new();
        let mut legal_sea_edges = None;
        let mut tok = match f.next_str() {
            Ok(t) => Some(t.to_owned()),
            // No area lists at all: only valid for a single-area board.
            Err(_) if area_count == 1 && starting_area == 1 => None,
            Err(_) => return None,
        };

        while let Some(current) = tok.take() {
            if current == "SE" {
                let mut lists: Vec<Vec<i32>> = Vec::new();
                let mut edges = Vec::new();
                while let Ok(t) = f.next_str() {
                    if t == "SE" {
                        lists.push(std::mem::take(&mut edges));
                        continue;
                    }
                    let edge = parse_hex_i32(t)?;
                    if edge != 0 {
                        edges.push(edge);
                    }
                }
                lists.push(edges);
                legal_sea_edges = Some(lists);
                break;
            }
            let num: i32 = current.strip_prefix("LA")?.parse().ok()?;
            let mut area_nodes = Vec::new();
            loop {
                match f.next_str() {
                    Ok(t) if t.starts_with("LA") || t == "SE" => {
                        tok = Some(t.to_owned());
                        break;
                    }
                    Ok(t) => area_nodes.push(t.parse().ok()?),
                    Err(_) => break,
                }
            }
            other_areas.push((num, area_nodes));
        }

        // Every area except the starting one must have been listed.
        let mut seen = vec![false; usize::try_from(area_count).ok()? + 1];
        for (num, _) in &other_areas {
            let i = usize::try_from(*num).ok()?;
            if i == 0 || i > seen.len() - 1 || seen[i] {
                return None;
            }
            seen[i] = true;
        }
        let pan = usize::try_from(starting_area).ok()?;
        if pan >= seen.len() || seen[pan] {
            return None;
        }
        for (i, s) in seen.iter().enumerate().skip(1) {
            if i != pan && !s {
                return None;
            }
        }

        Some(Self {
            game,
            player_number,
            nodes,
            land_areas: Some(LandAreas {
                area_count,
                starting_area,
                other_areas,
                legal_sea_edges,
            }),
        })
    }
}

fn parse_hex_i32(tok: &str) -> Option<i32> {
    let (neg, digits) = match tok.strip_prefix('-') {
        Some(d) => (true, d),
        None => (false, tok),
    };
    let v = i64::from_str_radix(digits, 16).ok()?;
    i32::try_from(if neg { -v } else { v }).ok()
}

/// Legal edges for roads or ships, for boards where not every edge is
/// buildable. Edge coordinates are hex on the wire.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct LegalEdges {
    pub game: String,
    pub player_number: i32,
    /// `true` if these are ship edges, `false` for road edges.
    pub edges_are_ships: bool,
    pub edges: Vec<i32>,
}

impl LegalEdges {
    pub fn encode(&self) -> String {
        let mut b = LineBuilder::new(codes::LEGAL_EDGES);
        b.param(&self.game)
            .field_i32(self.player_number)
            .field_bool_letter(self.edges_are_ships);
        for edge in &self.edges {
            b.field_i32_hex(*edge);
        }
        b.finish()
    }

    pub fn parse(body: &str) -> Option<Self> {
        let mut f = Fields::new(body);
        let game = f.next_string().ok()?;
        let player_number = f.next_i32().ok()?;
        let edges_are_ships = f.next_bool_letter().ok()?;
        let edges = f.tail_i32_hex().ok()?;
        Some(Self {
            game,
            player_number,
            edges_are_ships,
            edges,
        })
    }
}

/// A fog hex being revealed: its coordinate, terrain, and dice number.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct RevealFogHex {
    pub game: String,
    pub hex_coord: i32,
    pub hex_type: i32,
    pub dice_number: i32,
}

impl RevealFogHex {
    pub fn encode(&self) -> String {
        shape::encode_game_i32x3(
            codes::REVEAL_FOG_HEX,
            &self.game,
            self.hex_coord,
            self.hex_type,
            self.dice_number,
        )
    }

    pub fn parse(body: &str) -> Option<Self> {
        let (game, hex_coord, hex_type, dice_number) = shape::parse_game_i32x3(body)?;
        Some(Self {
            game,
            hex_coord,
            hex_type,
            dice_number,
        })
    }
}

/// A piece being placed on the board.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct PutPiece {
    pub game: String,
    pub player_number: i32,
    pub piece_type: i32,
    pub coord: i32,
}

impl PutPiece {
    pub fn encode(&self) -> String {
        shape::encode_game_i32x3(
            codes::PUT_PIECE,
            &self.game,
            self.player_number,
            self.piece_type,
            self.coord,
        )
    }

    pub fn parse(body: &str) -> Option<Self> {
        let (game, player_number, piece_type, coord) = shape::parse_game_i32x3(body)?;
        Some(Self {
            game,
            player_number,
            piece_type,
            coord,
        })
    }
}

/// A ship being moved from one edge to another.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct MovePiece {
    pub game: String,
    pub player_number: i32,
    pub piece_type: i32,
    pub from_coord: i32,
    pub to_coord: i32,
}

impl MovePiece {
    pub fn encode(&self) -> String {
        shape::encode_game_i32x4(
            codes::MOVE_PIECE,
            &self.game,
            self.player_number,
            self.piece_type,
            self.from_coord,
            self.to_coord,
        )
    }

    pub fn parse(body: &str) -> Option<Self> {
        let (game, player_number, piece_type, from_coord, to_coord) =
            shape::parse_game_i32x4(body)?;
        Some(Self {
            game,
            player_number,
            piece_type,
            from_coord,
            to_coord,
        })
    }
}

/// A piece being removed from the board (pirate-islands scenario).
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct RemovePiece {
    pub game: String,
    pub player_number: i32,
    pub piece_type: i32,
    pub coord: i32,
}

impl RemovePiece {
    pub fn encode(&self) -> String {
        shape::encode_game_i32x3(
            codes::REMOVE_PIECE,
            &self.game,
            self.player_number,
            self.piece_type,
            self.coord,
        )
    }

    pub fn parse(body: &str) -> Option<Self> {
        let (game, player_number, piece_type, coord) = shape::parse_game_i32x3(body)?;
        Some(Self {
            game,
            player_number,
            piece_type,
            coord,
        })
    }
}

/// Scenario value fields of one piece, such as a village's cloth count.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct PieceValue {
    pub game: String,
    pub piece_type: i32,
    pub coord: i32,
    pub value1: i32,
    pub value2: i32,
}

impl PieceValue {
    pub fn encode(&self) -> String {
        shape::encode_game_i32x4(
            codes::PIECE_VALUE,
            &self.game,
            self.piece_type,
            self.coord,
            self.value1,
            self.value2,
        )
    }

    pub fn parse(body: &str) -> Option<Self> {
        let (game, piece_type, coord, value1, value2) = shape::parse_game_i32x4(body)?;
        Some(Self {
            game,
            piece_type,
            coord,
            value1,
            value2,
        })
    }
}

/// Debug free-placement mode: place a piece outside the normal rules.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct DebugFreePlace {
    pub game: String,
    pub player_number: i32,
    pub piece_type: i32,
    pub coord: i32,
}

impl DebugFreePlace {
    pub fn encode(&self) -> String {
        shape::encode_game_i32x3(
            codes::DEBUG_FREE_PLACE,
            &self.game,
            self.player_number,
            self.piece_type,
            self.coord,
        )
    }

    pub fn parse(body: &str) -> Option<Self> {
        let (game, player_number, piece_type, coord) = shape::parse_game_i32x3(body)?;
        Some(Self {
            game,
            player_number,
            piece_type,
            coord,
        })
    }
}

/// A player's most recent settlement, used by robots joining mid-game.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct LastSettlement {
    pub game: String,
    pub player_number: i32,
    pub coord: i32,
}

impl LastSettlement {
    pub fn encode(&self) -> String {
        shape::encode_game_i32x2(
            codes::LAST_SETTLEMENT,
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dice_remap_is_invertible_for_real_rolls() {
        for n in [2, 3, 4, 5, 6, 8, 9, 10, 11, 12] {
            let wire = NUM_TO_WIRE[n as usize];
            assert!((0..=9).contains(&wire), "roll {n} maps off the wire range");
            assert_eq!(WIRE_TO_NUM[wire as usize], n);
        }
    }

    #[test]
    fn robber_sentinel_is_asymmetric() {
        let mut numbers = [0; CLASSIC_HEX_COUNT];
        numbers[3] = -1;
        let msg = BoardLayout::from_board("g", [0; CLASSIC_HEX_COUNT], numbers, 0x33);
        // Both 0 and -1 encode to wire -1...
        assert_eq!(msg.number_layout[3], -1);
        assert_eq!(msg.number_layout[4], -1);
        // ...and wire -1 always decodes to 0, never back to -1.
        assert_eq!(msg.board_numbers()[3], 0);
        assert_eq!(msg.board_numbers()[4], 0);
    }

    #[test]
    fn hex_terrain_swap() {
        let mut hexes = [1; CLASSIC_HEX_COUNT];
        hexes[0] = 0; // water in the board domain
        hexes[1] = 6; // desert in the board domain
        let msg = BoardLayout::from_board("g", hexes, [0; CLASSIC_HEX_COUNT], 0);
        assert_eq!(msg.hex_layout[0], 6);
        assert_eq!(msg.hex_layout[1], 0);
        let back = msg.board_hexes();
        assert_eq!(back[0], 0);
        assert_eq!(back[1], 6);
    }

    #[test]
    fn board_layout_concrete_scenario() {
        // Hexes 0..=36, number 8 on hex 5 (wire value 5), robber on 0x39.
        let mut hexes = [0; CLASSIC_HEX_COUNT];
        for (i, h) in hexes.iter_mut().enumerate() {
            *h = i32::try_from(i).unwrap();
        }
        let mut numbers = [0; CLASSIC_HEX_COUNT];
        numbers[5] = 8;
        let msg = BoardLayout::from_board("g", hexes, numbers, 0x39);
        assert_eq!(msg.number_layout[5], 5);

        let line = msg.encode();
        let parsed = BoardLayout::parse(line.strip_prefix("1014|").unwrap()).unwrap();
        assert_eq!(parsed, msg);
        assert_eq!(parsed.board_numbers()[5], 8);
        assert_eq!(parsed.board_numbers()[6], 0);
        assert_eq!(parsed.robber_hex, 0x39);
    }

    #[test]
    fn board_layout_truncated_fails() {
        assert_eq!(BoardLayout::parse("g,1,2,3"), None);
    }

    #[test]
    fn board_layout2_parts_round_trip() {
        let mut parts = BTreeMap::new();
        parts.insert("HL".to_owned(), LayoutPart::IntArray(vec![6, 0, 3, 2]));
        parts.insert("RH".to_owned(), LayoutPart::Int(0xb5));
        let msg = BoardLayout2 {
            game: "sea".into(),
            encoding: 3,
            parts,
        };
        assert_eq!(msg.encode(), "1084|sea,3,HL,[4,6,0,3,2,RH,181");
        assert_eq!(BoardLayout2::parse("sea,3,HL,[4,6,0,3,2,RH,181"), Some(msg));
    }

    #[test]
    fn board_layout2_unknown_scalar_part_stays_string() {
        let parsed = BoardLayout2::parse("sea,3,XX,abc").unwrap();
        assert_eq!(parsed.parts["XX"], LayoutPart::Str("abc".into()));
    }

    #[test]
    fn board_layout2_bad_array_length_fails() {
        assert_eq!(BoardLayout2::parse("sea,3,HL,[9,1,2"), None);
        assert_eq!(BoardLayout2::parse("sea,3,HL,[x,1,2"), None);
    }

    #[test]
    fn potential_settlements_simple_round_trip() {
        let msg = PotentialSettlements {
            game: "g".into(),
            player_number: 2,
            nodes: vec![0x23, 0x45, 0x67],
            land_areas: None,
        };
        assert_eq!(msg.encode(), "1057|g,2,35,69,103");
        assert_eq!(PotentialSettlements::parse("g,2,35,69,103"), Some(msg));
    }

    #[test]
    fn potential_settlements_empty_node_list_is_valid() {
        let msg = PotentialSettlements {
            game: "g".into(),
            player_number: -1,
            nodes: vec![],
            land_areas: None,
        };
        assert_eq!(msg.encode(), "1057|g,-1");
        assert_eq!(PotentialSettlements::parse("g,-1"), Some(msg));
    }

    #[test]
    fn potential_settlements_land_areas_round_trip() {
        let msg = PotentialSettlements {
            game: "g".into(),
            player_number: 0,
            nodes: vec![101, 102],
            land_areas: Some(LandAreas {
                area_count: 3,
                starting_area: 1,
                other_areas: vec![(2, vec![201, 202]), (3, vec![301])],
                legal_sea_edges: None,
            }),
        };
        let line = msg.encode();
        assert_eq!(line, "1057|g,0,101,102,NA,3,PAN,1,LA2,201,202,LA3,301");
        assert_eq!(
            PotentialSettlements::parse(line.strip_prefix("1057|").unwrap()),
            Some(msg)
        );
    }

    #[test]
    fn potential_settlements_with_sea_edges() {
        let msg = PotentialSettlements {
            game: "g".into(),
            player_number: 0,
            nodes: vec![101],
            land_areas: Some(LandAreas {
                area_count: 2,
                starting_area: 1,
                other_areas: vec![(2, vec![201])],
                legal_sea_edges: Some(vec![vec![0xc07, -0xc0b], vec![]]),
            }),
        };
        let line = msg.encode();
        assert_eq!(line, "1057|g,0,101,NA,2,PAN,1,LA2,201,SE,c07,-c0b,SE,0");
        assert_eq!(
            PotentialSettlements::parse(line.strip_prefix("1057|").unwrap()),
            Some(msg)
        );
    }

    #[test]
    fn potential_settlements_missing_area_fails() {
        // Area count says 3, but LA3 is never sent.
        assert_eq!(
            PotentialSettlements::parse("g,0,101,NA,3,PAN,1,LA2,201"),
            None
        );
        // Starting area repeated as an LA list.
        assert_eq!(
            PotentialSettlements::parse("g,0,101,NA,2,PAN,1,LA1,201"),
            None
        );
    }

    #[test]
    fn legal_edges_round_trip() {
        let msg = LegalEdges {
            game: "g".into(),
            player_number: 3,
            edges_are_ships: true,
            edges: vec![0xc07, 0xc08, 0xd09],
        };
        assert_eq!(msg.encode(), "1098|g,3,t,c07,c08,d09");
        assert_eq!(LegalEdges::parse("g,3,t,c07,c08,d09"), Some(msg));
    }

    #[test]
    fn put_piece_round_trip() {
        let msg = PutPiece {
            game: "g".into(),
            player_number: 2,
            piece_type: 1,
            coord: 0x45,
        };
        assert_eq!(msg.encode(), "1009|g,2,1,69");
        assert_eq!(PutPiece::parse("g,2,1,69"), Some(msg));
    }
}
