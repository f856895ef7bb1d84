use criterion::{black_box, criterion_group, criterion_main, Criterion};

use codec::{decode, Discard, GameTextMsg, Message, PutPiece, ResourceSet};

fn sample_lines() -> Vec<String> {
    vec![
        Message::PutPiece(PutPiece {
            game: "bench game".into(),
            player_number: 2,
            piece_type: 1,
            coord: 0x45,
        })
        .encode(),
        Message::Discard(Discard {
            game: "bench game".into(),
            resources: ResourceSet::new(1, 0, 2, 0, 1, 3),
        })
        .encode(),
        Message::GameTextMsg(GameTextMsg {
            game: "bench game".into(),
            nickname: "alice".into(),
            text: "one wheat for one ore, anyone?".into(),
        })
        .encode(),
        "1014|g,0,1,2,3,4,5,6,7,8,9,10,11,12,13,14,15,16,17,18,19,20,21,22,23,24,25,26,27,\
         28,29,30,31,32,33,34,35,36,-1,-1,-1,-1,-1,5,-1,-1,-1,-1,-1,-1,-1,-1,-1,-1,-1,-1,\
         -1,-1,-1,-1,-1,-1,-1,-1,-1,-1,-1,-1,-1,-1,57"
            .to_owned(),
    ]
}

fn bench_decode(c: &mut Criterion) {
    let lines = sample_lines();
    c.bench_function("decode_mixed_lines", |b| {
        b.iter(|| {
            for line in &lines {
                let _ = black_box(decode(black_box(line)));
            }
        });
    });
}

fn bench_encode(c: &mut Criterion) {
    let messages: Vec<Message> = sample_lines()
        .iter()
        .map(|l| decode(l).expect("bench lines decode"))
        .collect();
    c.bench_function("encode_mixed_messages", |b| {
        b.iter(|| {
            for msg in &messages {
                let _ = black_box(msg.encode());
            }
        });
    });
}

criterion_group!(benches, bench_decode, bench_encode);
criterion_main!(benches);
