use criterion::{black_box, criterion_group, criterion_main, Criterion};
use lipika_core::Detector;

fn bench_detect(c: &mut Criterion) {
    let detector = Detector::new().unwrap();

    let inputs = vec![
        "धर्मक्षेत्रे कुरुक्षेत्रे समवेता युयुत्सवः",
        "dharmakṣetre kurukṣetre samavetā yuyutsavaḥ",
        "dharmakShetre kurukShetre samavetaa yuyutsavaH",
        "Darmakzetre kurukzetre samavetA yuyutsavaH",
        "dharmak.setre kuruk.setre samavetaa yuyutsava.h",
        "dharmakSetre kurukSetre samavetA yuyutsavaH",
    ];

    c.bench_function("detect_brahmic", |b| {
        b.iter(|| detector.detect(black_box(inputs[0])));
    });

    c.bench_function("detect_fallback", |b| {
        b.iter(|| detector.detect(black_box(inputs[5])));
    });

    c.bench_function("detect_batch_6", |b| {
        b.iter(|| {
            for input in &inputs {
                let _ = detector.detect(black_box(input));
            }
        });
    });
}

criterion_group!(benches, bench_detect);
criterion_main!(benches);
