use std::hint::black_box;
use std::time::Duration;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use plum_pieces::pieces::piece::Piece;
use plum_pieces::utils::piece_codec::{parse_piece, piece_to_char, piece_to_unicode};

#[derive(Clone, Copy)]
struct BenchCase {
    name: &'static str,
    input: &'static str,
}

const CASES_QUICK: &[BenchCase] = &[
    BenchCase {
        name: "all_pieces",
        input: "PNBRQKpnbrqk",
    },
    BenchCase {
        name: "back_ranks",
        input: "rnbqkbnrRNBQKBNR",
    },
];

const CASES_STANDARD: &[BenchCase] = &[
    BenchCase {
        name: "all_pieces",
        input: "PNBRQKpnbrqk",
    },
    BenchCase {
        name: "back_ranks",
        input: "rnbqkbnrRNBQKBNR",
    },
    BenchCase {
        name: "start_position",
        input: "rnbqkbnrppppppppPPPPPPPPRNBQKBNR",
    },
    BenchCase {
        name: "midgame",
        input: "rqrkpbbpnppnpPPQNPNBPPBPPRRK",
    },
];

fn suite_name() -> &'static str {
    match std::env::var("PIECES_BENCH_SUITE") {
        Ok(value) if value.eq_ignore_ascii_case("standard") => "standard",
        _ => "quick",
    }
}

fn selected_cases() -> &'static [BenchCase] {
    match suite_name() {
        "standard" => CASES_STANDARD,
        _ => CASES_QUICK,
    }
}

fn parse_all(input: &str) -> Vec<Piece> {
    input
        .chars()
        .map(|ch| parse_piece(ch).expect("benchmark input should parse"))
        .collect()
}

fn bench_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group(format!("parse_{}", suite_name()));
    group.warm_up_time(Duration::from_secs(1));
    group.measurement_time(Duration::from_secs(3));

    for case in selected_cases() {
        // Correctness guard before benchmarking.
        let round_trip: String = parse_all(case.input).into_iter().map(piece_to_char).collect();
        assert_eq!(round_trip, case.input, "round trip mismatch for {}", case.name);

        group.throughput(Throughput::Elements(case.input.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(case.name), case.input, |b, input| {
            b.iter(|| black_box(parse_all(black_box(input))));
        });
    }

    group.finish();
}

fn bench_serialize(c: &mut Criterion) {
    let mut group = c.benchmark_group(format!("serialize_{}", suite_name()));
    group.warm_up_time(Duration::from_secs(1));
    group.measurement_time(Duration::from_secs(3));

    for case in selected_cases() {
        let pieces = parse_all(case.input);

        group.throughput(Throughput::Elements(pieces.len() as u64));
        group.bench_with_input(
            BenchmarkId::new("ascii", case.name),
            &pieces,
            |b, pieces| {
                b.iter(|| {
                    black_box(pieces)
                        .iter()
                        .map(|piece| piece_to_char(*piece))
                        .collect::<String>()
                });
            },
        );
        group.bench_with_input(
            BenchmarkId::new("unicode", case.name),
            &pieces,
            |b, pieces| {
                b.iter(|| {
                    black_box(pieces)
                        .iter()
                        .map(|piece| piece_to_unicode(*piece))
                        .collect::<String>()
                });
            },
        );
    }

    group.finish();
}

criterion_group!(piece_codec_benches, bench_parse, bench_serialize);
criterion_main!(piece_codec_benches);
