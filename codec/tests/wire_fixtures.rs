//! Literal wire fixtures.
//!
//! These lines are the protocol's compatibility surface: if any of them
//! changes shape, older peers stop understanding us. The mixed boolean
//! spellings across types are historical and deliberately not unified.

use codec::*;

#[test]
fn word_boolean_types() {
    // Seat robot flag and trade-offer address flags spell out the words.
    assert_eq!(
        decode("1012|g,robot 3,2,true").unwrap(),
        Message::SitDown(SitDown {
            game: "g".into(),
            nickname: "robot 3".into(),
            player_number: 2,
            robot_flag: true,
        })
    );
    let offer = decode("1041|g,1,true,false,false,false,1,0,0,0,0,0,1,0,0,0").unwrap();
    assert!(matches!(offer, Message::MakeOffer(_)));
}

#[test]
fn letter_boolean_types() {
    // Legal-edge ship flags and packed option values use single letters.
    assert_eq!(
        decode("1098|g,3,t,c07").unwrap(),
        Message::LegalEdges(LegalEdges {
            game: "g".into(),
            player_number: 3,
            edges_are_ships: true,
            edges: vec![0xc07],
        })
    );
    let msg = decode("1079|g,-1,RD=f").unwrap();
    match msg {
        Message::NewGameWithOptions(m) => {
            assert_eq!(m.options.get("RD"), Some(&OptionValue::Bool(false)));
        }
        other => panic!("unexpected {other:?}"),
    }
}

#[test]
fn bit_boolean_types() {
    // The board-reset vote is the legacy 1/0 spelling.
    assert_eq!(
        decode("1076|g,2,1").unwrap(),
        Message::ResetBoardVote(ResetBoardVote {
            game: "g".into(),
            player_number: 2,
            vote_yes: true,
        })
    );
    assert_eq!(
        decode("1076|g,2,0").unwrap(),
        Message::ResetBoardVote(ResetBoardVote {
            game: "g".into(),
            player_number: 2,
            vote_yes: false,
        })
    );
}

#[test]
fn empty_password_travels_as_tab_sentinel() {
    let msg = JoinGame {
        nickname: "alice".into(),
        password: String::new(),
        host: "-".into(),
        game: "g".into(),
    };
    let line = msg.encode();
    assert_eq!(line, "1013|alice,\t,-,g");
    match decode(&line).unwrap() {
        Message::JoinGame(m) => {
            // The sentinel comes back as an empty string, and the later
            // fields are not shifted.
            assert_eq!(m.password, "");
            assert_eq!(m.host, "-");
            assert_eq!(m.game, "g");
        }
        other => panic!("unexpected {other:?}"),
    }
}

#[test]
fn option_value_with_inner_separator_round_trips() {
    // The packed option field contains SEP2 between entries; the outer
    // message must treat SEP, not SEP2, as that field's boundary.
    let options = GameOptions::new()
        .with("BC", OptionValue::IntBool(true, 4))
        .with("N7", OptionValue::IntBool(false, 7))
        .with("PL", OptionValue::Int(4));
    let packed = options.pack();
    assert!(packed.contains(','));

    let msg = Message::NewGameWithOptions(NewGameWithOptions {
        game: "g".into(),
        min_version: 1107,
        options: options.clone(),
    });
    let decoded = decode(&msg.encode()).unwrap();
    match decoded {
        Message::NewGameWithOptions(m) => assert_eq!(m.options, options),
        other => panic!("unexpected {other:?}"),
    }
}

#[test]
fn status_message_concrete_scenarios() {
    // Encoding status 0 omits the numeric prefix entirely.
    let ok = Message::StatusMessage(StatusMessage {
        status_value: 0,
        text: "Welcome!".into(),
    });
    assert_eq!(ok.encode(), "1069|Welcome!");

    // A bare-text line with no leading integer yields status 0.
    match decode("1069|Welcome!").unwrap() {
        Message::StatusMessage(m) => {
            assert_eq!(m.status_value, 0);
            assert_eq!(m.text, "Welcome!");
        }
        other => panic!("unexpected {other:?}"),
    }
}

#[test]
fn board_layout_concrete_scenario() {
    // Hexes 0..=36 (already wire values here), dice number 8 on hex 5
    // (wire value 5), robber on hex 0x39.
    let mut hexes = [0i32; 37];
    for (i, h) in hexes.iter_mut().enumerate() {
        *h = i32::try_from(i).unwrap();
    }
    let mut numbers = [0i32; 37];
    numbers[5] = 8;
    let msg = BoardLayout::from_board("g", hexes, numbers, 0x39);
    assert_eq!(msg.number_layout[5], 5);

    match decode(&msg.encode()).unwrap() {
        Message::BoardLayout(m) => {
            assert_eq!(m.board_numbers()[5], 8);
            assert_eq!(m.board_numbers()[4], 0);
            assert_eq!(m.robber_hex, 0x39);
        }
        other => panic!("unexpected {other:?}"),
    }
}

#[test]
fn simple_action_forward_compatibility() {
    // An action type this build knows nothing about still parses; only
    // its interpretation is left to the handler.
    match decode("1090|g,2,64123,5,6").unwrap() {
        Message::SimpleAction(m) => {
            assert_eq!(m.action_type, 64123);
            assert_eq!(m.value1, 5);
            assert_eq!(m.value2, 6);
        }
        other => panic!("unexpected {other:?}"),
    }
}

#[test]
fn garbage_lines_are_fail_soft() {
    for line in [
        "",
        "|",
        "xyzzy",
        "99999999999999|g",
        "1014|g,1,2,3",          // truncated board layout
        "1025|g,NaN",            // non-numeric int field
        "4242|future,message",   // unknown type code
        "1057|g,0,101,NA,junk",  // malformed land areas
        "1102|S",                // missing flag field
    ] {
        assert!(decode(line).is_err(), "expected failure for {line:?}");
    }
}

#[test]
fn set_special_item_sentinels_survive() {
    let line = "1101|g,3,_SC_WOND,1,0,3,-1,0,\t";
    match decode(line).unwrap() {
        Message::SetSpecialItem(m) => {
            assert_eq!(m.coord, -1);
            assert_eq!(m.level, 0);
            assert_eq!(m.string_value, None);
            assert_eq!(m.encode(), line);
        }
        other => panic!("unexpected {other:?}"),
    }
}

#[test]
fn member_list_tails_may_be_empty() {
    assert_eq!(
        decode("1017|g").unwrap(),
        Message::GameMembers(GameMembers {
            game: "g".into(),
            members: vec![],
        })
    );
    assert_eq!(
        decode("1019|").unwrap(),
        Message::Games(Games { games: vec![] })
    );
}
