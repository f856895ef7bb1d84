//! One-instance-per-type round-trip sweep through the public
//! `decode`/`encode` entry points, plus fail-soft checks on mangled
//! lines.

use std::collections::BTreeMap;
use std::collections::BTreeSet;

use codec::*;

fn opts() -> GameOptions {
    GameOptions::new()
        .with("BC", OptionValue::IntBool(true, 4))
        .with("PL", OptionValue::Int(4))
        .with("RD", OptionValue::Bool(false))
}

/// One representative instance of every registered message type.
fn sample_messages() -> Vec<Message> {
    let g = || "harbor game".to_owned();
    let mut layout2_parts = BTreeMap::new();
    layout2_parts.insert("HL".to_owned(), LayoutPart::IntArray(vec![6, 0, 3, 2, 1]));
    layout2_parts.insert("RH".to_owned(), LayoutPart::Int(0xb5));
    layout2_parts.insert("XX".to_owned(), LayoutPart::Str("future".into()));

    let mut hexes = [1; 37];
    hexes[0] = 6;
    let mut numbers = [-1; 37];
    numbers[5] = 5;

    vec![
        AuthRequest {
            role: "P".into(),
            nickname: "alice".into(),
            scheme: 1,
            host: None,
            password: "sesame".into(),
        }
        .into(),
        NewChannel { channel: "dock".into() }.into(),
        ChannelMembers {
            channel: "dock".into(),
            members: vec!["alice".into(), "bob".into()],
        }
        .into(),
        Channels {
            channels: vec!["dock".into(), "pier".into()],
        }
        .into(),
        JoinChannel {
            nickname: "alice".into(),
            password: String::new(),
            host: "-".into(),
            channel: "dock".into(),
        }
        .into(),
        ChannelTextMsg {
            channel: "dock".into(),
            nickname: "bob".into(),
            text: "wood, anyone?".into(),
        }
        .into(),
        LeaveChannel {
            nickname: "bob".into(),
            host: "-".into(),
            channel: "dock".into(),
        }
        .into(),
        DeleteChannel { channel: "dock".into() }.into(),
        LeaveAll.into(),
        PutPiece {
            game: g(),
            player_number: 2,
            piece_type: 1,
            coord: 0x45,
        }
        .into(),
        GameTextMsg {
            game: g(),
            nickname: "alice".into(),
            text: "one wheat for one ore, anyone?".into(),
        }
        .into(),
        LeaveGame {
            nickname: "carol".into(),
            host: "-".into(),
            game: g(),
        }
        .into(),
        SitDown {
            game: g(),
            nickname: "robot 3".into(),
            player_number: 1,
            robot_flag: true,
        }
        .into(),
        JoinGame {
            nickname: "alice".into(),
            password: String::new(),
            host: "-".into(),
            game: g(),
        }
        .into(),
        BoardLayout::from_board(g(), hexes, numbers, 0x39).into(),
        DeleteGame { game: g() }.into(),
        NewGame { game: g() }.into(),
        GameMembers {
            game: g(),
            members: vec!["alice".into(), "robot 3".into()],
        }
        .into(),
        StartGame { game: g() }.into(),
        Games {
            games: vec!["?ancient".into(), "harbor game".into()],
        }
        .into(),
        JoinChannelAuth { channel: "dock".into() }.into(),
        JoinGameAuth { game: g() }.into(),
        ImARobot {
            nickname: "robot 3".into(),
            cookie: "cookie73".into(),
            rb_class: "fast.Brain".into(),
        }
        .into(),
        BotJoinGameRequest {
            game: g(),
            player_number: 3,
            options: opts(),
        }
        .into(),
        PlayerElement {
            game: g(),
            player_number: 1,
            action: PlayerElementAction::Gain,
            element_type: 4,
            amount: 2,
            is_news: true,
        }
        .into(),
        GameState { game: g(), state: 20 }.into(),
        Turn {
            game: g(),
            player_number: 2,
        }
        .into(),
        DiceResult { game: g(), result: 7 }.into(),
        DiscardRequest {
            game: g(),
            number_of_discards: 4,
        }
        .into(),
        RollDiceRequest { game: g() }.into(),
        RollDice { game: g() }.into(),
        EndTurn { game: g() }.into(),
        Discard {
            game: g(),
            resources: ResourceSet::new(1, 0, 2, 0, 1, 0),
        }
        .into(),
        MoveRobber {
            game: g(),
            player_number: 2,
            coord: 0x55,
        }
        .into(),
        ChoosePlayer { game: g(), choice: 3 }.into(),
        ChoosePlayerRequest {
            game: g(),
            allow_choose_none: false,
            choices: vec![true, false, false, true],
        }
        .into(),
        RejectOffer {
            game: g(),
            player_number: 2,
        }
        .into(),
        ClearOffer {
            game: g(),
            player_number: -1,
        }
        .into(),
        AcceptOffer {
            game: g(),
            accepting: 2,
            offering: 0,
        }
        .into(),
        BankTrade {
            game: g(),
            give: ResourceSet::new(4, 0, 0, 0, 0, 0),
            get: ResourceSet::new(0, 0, 0, 1, 0, 0),
            player_number: 2,
        }
        .into(),
        MakeOffer {
            game: g(),
            offer: TradeOffer {
                from: 1,
                to: vec![false, false, true, true],
                give: ResourceSet::new(0, 0, 1, 0, 0, 0),
                get: ResourceSet::new(0, 1, 0, 0, 0, 0),
            },
        }
        .into(),
        ClearTradeMsg {
            game: g(),
            player_number: -1,
        }
        .into(),
        BuildRequest {
            game: g(),
            piece_type: 2,
        }
        .into(),
        CancelBuildRequest {
            game: g(),
            piece_type: 2,
        }
        .into(),
        BuyDevCardRequest { game: g() }.into(),
        DevCardAction {
            game: g(),
            player_number: 1,
            action: DevCardAction::DRAW,
            card_type: 4,
        }
        .into(),
        DevCardCount { game: g(), count: 19 }.into(),
        SetPlayedDevCard {
            game: g(),
            player_number: 1,
            played: false,
        }
        .into(),
        PlayDevCardRequest {
            game: g(),
            card_type: 9,
        }
        .into(),
        PickResources {
            game: g(),
            resources: ResourceSet::new(1, 1, 0, 0, 0, 0),
        }
        .into(),
        PickResourceType {
            game: g(),
            resource_type: ResourceType::Wheat.to_i32(),
        }
        .into(),
        FirstPlayer {
            game: g(),
            player_number: 0,
        }
        .into(),
        SetTurn {
            game: g(),
            player_number: 3,
        }
        .into(),
        RobotDismiss { game: g() }.into(),
        PotentialSettlements {
            game: g(),
            player_number: 0,
            nodes: vec![0x23, 0x25],
            land_areas: Some(LandAreas {
                area_count: 2,
                starting_area: 1,
                other_areas: vec![(2, vec![0x43, 0x45])],
                legal_sea_edges: Some(vec![vec![0xc07, -0xc0b]]),
            }),
        }
        .into(),
        ChangeFace {
            game: g(),
            player_number: 2,
            face_id: 7,
        }
        .into(),
        RejectConnection {
            text: "Take a break, come back later".into(),
        }
        .into(),
        LastSettlement {
            game: g(),
            player_number: 1,
            coord: 0x67,
        }
        .into(),
        GameStats {
            game: g(),
            scores: vec![10, 7, 4, 8],
            robots: vec![false, true, true, false],
        }
        .into(),
        BroadcastTextMsg {
            text: "Server restarting in 5 minutes".into(),
        }
        .into(),
        ResourceCount {
            game: g(),
            player_number: 2,
            count: 9,
        }
        .into(),
        AdminPing { game: g() }.into(),
        AdminReset.into(),
        LongestRoad {
            game: g(),
            player_number: 2,
        }
        .into(),
        LargestArmy {
            game: g(),
            player_number: -1,
        }
        .into(),
        SetSeatLock {
            game: g(),
            locks: SeatLocks::All(vec![
                SeatLockState::Unlocked,
                SeatLockState::Locked,
                SeatLockState::ClearOnReset,
                SeatLockState::Unlocked,
            ]),
        }
        .into(),
        StatusMessage {
            status_value: 4,
            text: "That nickname is already in use".into(),
        }
        .into(),
        CreateAccount {
            nickname: "dave".into(),
            password: "sesame".into(),
            host: "-".into(),
            email: String::new(),
        }
        .into(),
        UpdateRobotParams {
            params: RobotParameters {
                max_game_length: 120,
                max_eta: 99,
                eta_bonus_factor: 1.0,
                adversarial_factor: 1.5,
                leader_adversarial_factor: 3.0,
                dev_card_multiplier: 2.0,
                threat_multiplier: 1.1,
                strategy_type: 1,
                trade_flag: 1,
            },
        }
        .into(),
        RollDicePrompt {
            game: g(),
            player_number: 2,
        }
        .into(),
        ResetBoardRequest { game: g() }.into(),
        ResetBoardAuth {
            game: g(),
            rejoin_player: 1,
            requester: 3,
        }
        .into(),
        ResetBoardVoteRequest {
            game: g(),
            requester: 3,
        }
        .into(),
        ResetBoardVote {
            game: g(),
            player_number: 0,
            vote_yes: true,
        }
        .into(),
        ResetBoardReject { game: g() }.into(),
        NewGameWithOptionsRequest {
            nickname: "alice".into(),
            password: String::new(),
            host: "-".into(),
            game: g(),
            options: opts(),
        }
        .into(),
        NewGameWithOptions {
            game: g(),
            min_version: 1107,
            options: opts(),
        }
        .into(),
        GameOptionGetDefaults {
            options: Some(opts()),
        }
        .into(),
        GameOptionGetInfos {
            option_keys: Some(vec!["PL".into(), "RD".into()]),
            want_i18n_descs: true,
        }
        .into(),
        GameOptionInfo {
            key: "PL".into(),
            option_type: GameOptionInfo::OTYPE_INT,
            min_version: -1,
            last_mod_version: 1107,
            default_bool: false,
            default_int: 4,
            min_int: 2,
            max_int: 6,
            current_bool: false,
            current_value: OptionInfoValue::Int(4),
            drop_if_unused: false,
            description: "Maximum # players".into(),
            enum_values: vec![],
        }
        .into(),
        GamesWithOptions {
            games: vec![
                GameWithOptions {
                    game: "plain".into(),
                    options: GameOptions::new(),
                },
                GameWithOptions {
                    game: "harbor game".into(),
                    options: opts(),
                },
            ],
        }
        .into(),
        BoardLayout2 {
            game: g(),
            encoding: 3,
            parts: layout2_parts,
        }
        .into(),
        PlayerStats {
            game: g(),
            stat_type: PlayerStats::STYPE_RES_ROLL,
            values: vec![0, 3, 1, 0, 4, 2],
        }
        .into(),
        PlayerElements {
            game: g(),
            player_number: 2,
            action: PlayerElementAction::Set,
            elements: vec![(1, 3), (4, 1)],
        }
        .into(),
        DebugFreePlace {
            game: g(),
            player_number: 0,
            piece_type: 1,
            coord: 0x87,
        }
        .into(),
        TimingPing { game: g() }.into(),
        SimpleRequest {
            game: g(),
            player_number: 2,
            request_type: SimpleRequest::TRADE_PORT_PLACE,
            value1: 0xc07,
            value2: 0,
        }
        .into(),
        SimpleAction {
            game: g(),
            player_number: 2,
            action_type: SimpleAction::DEV_CARD_BOUGHT,
            value1: 18,
            value2: 0,
        }
        .into(),
        GameServerText {
            game: g(),
            text: "alice rolled a 4 and a 3.".into(),
        }
        .into(),
        DiceResultResources {
            game: g(),
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
        }
        .into(),
        MovePiece {
            game: g(),
            player_number: 3,
            piece_type: 3,
            from_coord: 0xc06,
            to_coord: 0xc08,
        }
        .into(),
        RemovePiece {
            game: g(),
            player_number: 3,
            piece_type: 3,
            coord: 0xc08,
        }
        .into(),
        PieceValue {
            game: g(),
            piece_type: 5,
            coord: 0x408,
            value1: 2,
            value2: 0,
        }
        .into(),
        GameElements {
            game: g(),
            elements: vec![
                (GameElements::DEV_CARD_COUNT, 22),
                (GameElements::CURRENT_PLAYER, 3),
            ],
        }
        .into(),
        RevealFogHex {
            game: g(),
            hex_coord: 0x709,
            hex_type: 3,
            dice_number: 5,
        }
        .into(),
        LegalEdges {
            game: g(),
            player_number: 3,
            edges_are_ships: true,
            edges: vec![0xc07, 0xc08, 0xd09],
        }
        .into(),
        SvpTextMsg {
            game: g(),
            player_number: 2,
            svp: 2,
            description: "settling a new island".into(),
        }
        .into(),
        InventoryItemAction::with_flags("harbor game", 2, InventoryItemAction::ADD_OTHER, 5, true, false, true)
            .into(),
        SetSpecialItem {
            game: g(),
            op: SetSpecialItem::OP_SET,
            type_key: "_SC_WOND".into(),
            game_item_index: 2,
            player_item_index: -1,
            player_number: -1,
            coord: -1,
            level: 0,
            string_value: None,
        }
        .into(),
        LocalizedStrings {
            string_type: "S".into(),
            flags: LocalizedStrings::FLAG_SENT_ALL,
            strings: vec!["SC_FOG".into(), "Fog islands, with hidden hexes".into()],
        }
        .into(),
        ScenarioInfo::Scenario {
            key: "SC_FOG".into(),
            min_version: 2000,
            last_mod_version: 2000,
            options: "_SC_FOG=t,PLL=t".into(),
            description: "Fog islands".into(),
            long_description: None,
        }
        .into(),
        Version {
            version: 2000,
            version_string: "2.0.00".into(),
            build: Some("JM20200229".into()),
            features: None,
            locale: Some("en_US".into()),
        }
        .into(),
        ServerPing { sleep_time: 30000 }.into(),
    ]
}

#[test]
fn every_registered_type_has_a_sample() {
    let sampled: BTreeSet<u16> = sample_messages().iter().map(Message::type_code).collect();
    let registered: BTreeSet<u16> = registry::TYPES.iter().map(|t| t.code).collect();
    assert_eq!(sampled, registered);
}

#[test]
fn every_sample_round_trips_through_the_dispatcher() {
    for msg in sample_messages() {
        let line = msg.encode();
        let decoded = decode(&line)
            .unwrap_or_else(|e| panic!("decode failed for {} ({line:?}): {e}", msg.name()));
        assert_eq!(decoded, msg, "round trip mismatch for {line:?}");
        // Encoding is stable across a round trip.
        assert_eq!(decoded.encode(), line);
    }
}

#[test]
fn every_sample_line_starts_with_its_code() {
    for msg in sample_messages() {
        let line = msg.encode();
        let head: String = line.chars().take_while(char::is_ascii_digit).collect();
        assert_eq!(head, msg.type_code().to_string(), "bad prefix in {line:?}");
    }
}

#[test]
fn truncating_any_sample_never_panics() {
    for msg in sample_messages() {
        let line = msg.encode();
        for cut in 0..line.len() {
            if line.is_char_boundary(cut) {
                let _ = decode(&line[..cut]);
            }
        }
    }
}

#[test]
fn minimum_versions_are_exposed_for_senders() {
    for msg in sample_messages() {
        let min = msg.minimum_version();
        assert!(min >= 1000, "{} has min version {min}", msg.name());
        assert_eq!(registry::minimum_version(msg.type_code()), Some(min));
    }
}
