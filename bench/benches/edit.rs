use std::hint::black_box;

use criterion::{BatchSize, Criterion, criterion_group, criterion_main};
use na_tagtree::{CompoundTag, IntTag, ListTag, TextComponent};

fn int_list(len: i32) -> ListTag {
    ListTag::from_tags((0..len).map(IntTag::of)).unwrap()
}

fn wide_compound(len: usize) -> CompoundTag {
    let mut builder = CompoundTag::builder();
    for i in 0..len {
        builder = builder.put(format!("key{i}"), i as i64);
    }
    builder.build()
}

fn bench_list(c: &mut Criterion) {
    let mut group = c.benchmark_group("list");
    for len in [16, 1024] {
        let list = int_list(len);
        group.bench_function(format!("add/{len}"), |b| {
            b.iter(|| black_box(&list).add(IntTag::of(7)).unwrap())
        });
        group.bench_function(format!("set/{len}"), |b| {
            b.iter(|| black_box(&list).set(0, IntTag::of(7)).unwrap())
        });
        group.bench_function(format!("builder/{len}"), |b| {
            b.iter_batched(
                || list.to_builder(),
                |mut builder| builder.add(IntTag::of(7)).unwrap().build(),
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

fn bench_compound(c: &mut Criterion) {
    let mut group = c.benchmark_group("compound");
    for len in [16, 1024] {
        let compound = wide_compound(len);
        group.bench_function(format!("put/{len}"), |b| {
            b.iter(|| black_box(&compound).put("extra", 1))
        });
        group.bench_function(format!("get_long/{len}"), |b| {
            b.iter(|| black_box(&compound).get_long("key7", 0))
        });
        group.bench_function(format!("to_json/{len}"), |b| {
            b.iter(|| serde_json::to_vec(black_box(&compound)).unwrap())
        });
    }
    group.finish();
}

fn bench_component(c: &mut Criterion) {
    let node = TextComponent::new("hello").append("world");
    c.bench_function("component/with_content_same", |b| {
        b.iter(|| black_box(&node).with_content("hello"))
    });
    c.bench_function("component/with_content_new", |b| {
        b.iter(|| black_box(&node).with_content("bye"))
    });
}

criterion_group!(benches, bench_list, bench_compound, bench_component);
criterion_main!(benches);
