//! Filter Benchmarks
//!
//! Criterion benchmarks for the per-sample hot paths. At 100 Hz the budget
//! is generous, but the stages are also used for offline replay of long
//! recordings.

use criterion::{Criterion, criterion_group, criterion_main};
use rollsense_filters::prelude::*;

fn bench_lowpass_filter(c: &mut Criterion) {
    let Ok(mut filter) = LowPassFilter::new(100.0, 5.0) else {
        return;
    };
    let mut frame = Frame::from_magnitude(42.0);

    c.bench_function("lowpass_filter", |b| {
        b.iter(|| {
            lowpass_filter(std::hint::black_box(&mut frame), std::hint::black_box(&mut filter));
        })
    });
}

fn bench_lowpass_bypass(c: &mut Criterion) {
    let mut filter = LowPassFilter::bypass();
    let mut frame = Frame::from_magnitude(42.0);

    c.bench_function("lowpass_filter_bypass", |b| {
        b.iter(|| {
            lowpass_filter(std::hint::black_box(&mut frame), std::hint::black_box(&mut filter));
        })
    });
}

fn bench_roll_detector(c: &mut Criterion) {
    let Ok(mut detector) = RollDetector::new(RollDetectorConfig::new(50, 10).with_trigger_time(3))
    else {
        return;
    };
    let mut frame = Frame::from_magnitude(0.0);
    let mut i = 0u32;

    c.bench_function("roll_detector", |b| {
        b.iter(|| {
            i = i.wrapping_add(1);
            frame.filtered = if i % 8 < 5 { 60.0 } else { 30.0 };
            roll_detector(std::hint::black_box(&mut frame), std::hint::black_box(&mut detector));
        })
    });
}

fn bench_full_chain(c: &mut Criterion) {
    let (Ok(mut filter), Ok(mut detector)) = (
        LowPassFilter::new(100.0, 5.0),
        RollDetector::new(RollDetectorConfig::new(50, 10)),
    ) else {
        return;
    };

    c.bench_function("full_chain", |b| {
        b.iter(|| {
            let mut frame = Frame::from_magnitude(std::hint::black_box(55.0));
            lowpass_filter(&mut frame, &mut filter);
            roll_detector(&mut frame, &mut detector);
            frame
        })
    });
}

criterion_group!(
    benches,
    bench_lowpass_filter,
    bench_lowpass_bypass,
    bench_roll_detector,
    bench_full_chain
);
criterion_main!(benches);
