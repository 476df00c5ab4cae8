#[macro_use]
extern crate criterion;

use criterion::Criterion;
use base32_codec::{decode, encode};

const EXAMPLE_PLAIN: &[u8; 269] = b"Man is distinguished, not only by his reason, but by this singular passion from other animals, which is a lust of the mind, that by a perseverance of delight in the continued and indefatigable generation of knowledge, exceeds the short vehemence of any carnal pleasure.";

pub fn bench_decode(c: &mut Criterion) {
    c.bench_function("decode-empty", |b| b.iter(|| decode("")));

    let encoded = encode(&EXAMPLE_PLAIN[..]);
    c.bench_function("decode-example", |b| b.iter(|| decode(&encoded)));

    let decoded: Vec<u8> = (0..u8::MAX)
        .cycle()
        .take(10 * 1024 * 1024)
        .collect();
    let encoded = encode(&decoded[..]);
    c.bench_function("decode-10mb", |b| b.iter(|| decode(&encoded)));

    let noisy: String = encoded
        .as_bytes()
        .chunks(76)
        .map(|line| {
            let mut line = String::from_utf8_lossy(line).into_owned();
            line.push('\n');
            line
        })
        .collect();
    let noisy = &noisy[..noisy.len() / 4 * 4];
    c.bench_function("decode-10mb-skip-newlines", |b| b.iter(|| decode(noisy)));
}

pub fn bench_encode(c: &mut Criterion) {
    c.bench_function("encode-empty", |b| b.iter(|| encode(b"")));

    c.bench_function("encode-example", |b| b.iter(|| encode(&EXAMPLE_PLAIN[..])));

    let decoded: Vec<u8> = (0..u8::MAX)
        .cycle()
        .take(10 * 1024 * 1024)
        .collect();
    c.bench_function("encode-10mb", |b| b.iter(|| encode(&decoded[..])));

    let decoded = vec![0_u8; 10 * 1024 * 1024];
    c.bench_function("encode-zero", |b| b.iter(|| encode(&decoded[..])));
}

criterion_group!(group_decode, bench_decode);
criterion_group!(group_encode, bench_encode);
criterion_main!(group_decode, group_encode);
