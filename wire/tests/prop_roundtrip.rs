use proptest::prelude::*;
use wire::{unescape_empty, Fields, LineBuilder, SEP};

#[derive(Clone, Debug)]
enum Op {
    Str(String),
    MaybeEmptyStr(String),
    I32(i32),
    HexI32(i32),
    WordBool(bool),
    LetterBool(bool),
    BitBool(bool),
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        "[a-zA-Z0-9 _.-]{1,12}".prop_map(Op::Str),
        prop_oneof![Just(String::new()), "[a-z]{1,6}".prop_map(String::from)]
            .prop_map(Op::MaybeEmptyStr),
        any::<i32>().prop_map(Op::I32),
        any::<i32>().prop_map(Op::HexI32),
        any::<bool>().prop_map(Op::WordBool),
        any::<bool>().prop_map(Op::LetterBool),
        any::<bool>().prop_map(Op::BitBool),
    ]
}

proptest! {
    #[test]
    fn prop_roundtrip_fields(code in 999u16..10000, ops in prop::collection::vec(op_strategy(), 1..24)) {
        let mut b = LineBuilder::new(code);
        b.param("body");
        for op in &ops {
            match op {
                Op::Str(s) => b.field(s),
                Op::MaybeEmptyStr(s) => b.field_or_empty(s),
                Op::I32(v) => b.field_i32(*v),
                Op::HexI32(v) => b.field_i32_hex(*v),
                Op::WordBool(v) => b.field_bool_word(*v),
                Op::LetterBool(v) => b.field_bool_letter(*v),
                Op::BitBool(v) => b.field_bool_bit(*v),
            };
        }
        let line = b.finish();

        let (head, body) = line.split_once(SEP).expect("line has a body");
        prop_assert_eq!(head.parse::<u16>().unwrap(), code);

        let mut f = Fields::new(body);
        prop_assert_eq!(f.next_str().unwrap(), "body");
        for op in &ops {
            match op {
                Op::Str(s) => prop_assert_eq!(f.next_str().unwrap(), s.as_str()),
                Op::MaybeEmptyStr(s) => {
                    prop_assert_eq!(unescape_empty(f.next_str().unwrap()), s.as_str());
                }
                Op::I32(v) => prop_assert_eq!(f.next_i32().unwrap(), *v),
                Op::HexI32(v) => prop_assert_eq!(f.next_i32_hex().unwrap(), *v),
                Op::WordBool(v) => prop_assert_eq!(f.next_bool_word().unwrap(), *v),
                Op::LetterBool(v) => prop_assert_eq!(f.next_bool_letter().unwrap(), *v),
                Op::BitBool(v) => prop_assert_eq!(f.next_bool_bit().unwrap(), *v),
            }
        }
        prop_assert!(!f.has_more());
    }

    #[test]
    fn prop_fields_never_panic_on_garbage(body in "\\PC*") {
        let mut f = Fields::new(&body);
        while f.has_more() {
            let _ = f.next_str();
        }
        let mut f = Fields::new(&body);
        let _ = f.next_i32();
        let _ = f.next_i32_hex();
        let _ = f.rest();
    }
}
