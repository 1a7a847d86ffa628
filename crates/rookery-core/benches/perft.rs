use std::hint::black_box;

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};

use rookery_core::{GameState, STARTING_FEN, perft};

struct BenchCase {
    name: &'static str,
    fen: &'static str,
    depth: u32,
    nodes: u64,
}

const CASES: &[BenchCase] = &[
    BenchCase {
        name: "startpos",
        fen: STARTING_FEN,
        depth: 4,
        nodes: 197_281,
    },
    BenchCase {
        name: "kiwipete",
        fen: "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1",
        depth: 3,
        nodes: 97_862,
    },
    BenchCase {
        name: "position_3",
        fen: "8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - - 0 1",
        depth: 4,
        nodes: 43_238,
    },
];

fn bench_perft(c: &mut Criterion) {
    let mut group = c.benchmark_group("perft");
    group.sample_size(10);

    for case in CASES {
        let state: GameState = match case.fen.parse() {
            Ok(state) => state,
            Err(err) => panic!("bad bench FEN {}: {err}", case.name),
        };
        assert_eq!(perft(&state, case.depth), case.nodes, "{}", case.name);

        group.throughput(Throughput::Elements(case.nodes));
        group.bench_with_input(BenchmarkId::new(case.name, case.depth), &state, |b, state| {
            b.iter(|| perft(black_box(state), black_box(case.depth)))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_perft);
criterion_main!(benches);
