//! Decode benchmark: Stream decoding under different chunkings.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use lifeloom::StreamDecoder;

fn stream_body(lines: usize) -> String {
    let mut body = String::new();
    for i in 0..lines {
        body.push_str(&format!(
            "data: {{\"choices\":[{{\"delta\":{{\"content\":\"token {i} \"}}}}]}}\n"
        ));
    }
    body.push_str("data: [DONE]\n");
    body
}

fn decode_unsplit(c: &mut Criterion) {
    let body = stream_body(512);
    c.bench_function("decode_unsplit", |b| {
        b.iter(|| {
            let mut decoder = StreamDecoder::new();
            decoder.feed(black_box(body.as_bytes()), |_| {});
            decoder.finish(|_| {})
        })
    });
}

fn decode_small_blocks(c: &mut Criterion) {
    let body = stream_body(512);
    let blocks: Vec<&[u8]> = body.as_bytes().chunks(16).collect();
    c.bench_function("decode_small_blocks", |b| {
        b.iter(|| {
            let mut decoder = StreamDecoder::new();
            for block in &blocks {
                decoder.feed(black_box(block), |_| {});
            }
            decoder.finish(|_| {})
        })
    });
}

criterion_group!(benches, decode_unsplit, decode_small_blocks);
criterion_main!(benches);
