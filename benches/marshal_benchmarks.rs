//! 编组性能基准测试
//!
//! 测试数组/字符串转换以及脚本分发的开销

use std::hint::black_box;
use std::sync::Arc;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use gr_binding::bindings::dispatch_json;
use gr_binding::ffi::RecordingBackend;
use gr_binding::marshal::{encode_text, float_array, int_array};
use gr_binding::{scripting, Gr};

fn bench_float_array(c: &mut Criterion) {
    let mut group = c.benchmark_group("float_array");

    for size in [16usize, 1_024, 65_536] {
        let values: Vec<f64> = (0..size).map(|i| i as f64 * 0.5).collect();
        group.bench_with_input(BenchmarkId::from_parameter(size), &values, |b, values| {
            b.iter(|| black_box(float_array(values.len(), values)));
        });
    }

    group.finish();
}

fn bench_int_array(c: &mut Criterion) {
    let colors: Vec<i32> = (0..256 * 256).collect();
    c.bench_function("int_array_256x256", |b| {
        b.iter(|| black_box(int_array(colors.len(), &colors)));
    });
}

fn bench_encode_text(c: &mut Criterion) {
    let mut group = c.benchmark_group("encode_text");

    group.bench_function("ascii", |b| {
        b.iter(|| black_box(encode_text("x axis label")));
    });

    group.bench_function("latin9", |b| {
        b.iter(|| black_box(encode_text("Temperatur in °C, Preis in €")));
    });

    group.finish();
}

fn bench_dispatch(c: &mut Criterion) {
    let backend = Arc::new(RecordingBackend::new());
    let api = scripting::standard_api(Gr::with_backend(backend.clone()), None);
    let args = serde_json::to_string(&(
        100,
        (0..100).map(f64::from).collect::<Vec<_>>(),
        (0..100).map(|i| f64::from(i).sin()).collect::<Vec<_>>(),
    ))
    .unwrap();

    c.bench_function("dispatch_polyline_100", |b| {
        b.iter(|| {
            let reply = dispatch_json(&api, "gr.polyline", black_box(&args));
            backend.clear_calls();
            reply
        });
    });
}

criterion_group!(
    benches,
    bench_float_array,
    bench_int_array,
    bench_encode_text,
    bench_dispatch
);
criterion_main!(benches);
