use criterion::*;

use objstack::ObjectStack;

fn byte_growth(c: &mut Criterion) {
    let mut group = c.benchmark_group("grow-bytes");

    group.bench_function("objstack", |b| {
        let mut stack = ObjectStack::new();
        b.iter(|| {
            for i in 0..1024u32 {
                stack.grow_byte(i as u8);
            }
            let object = black_box(stack.finish());
            stack.free(object);
        });
    });

    group.bench_function("vec", |b| {
        b.iter(|| {
            let mut vec = Vec::new();
            for i in 0..1024u32 {
                vec.push(i as u8);
            }
            black_box(&vec);
        });
    });

    group.finish();
}

fn copy_strings(c: &mut Criterion) {
    let words: Vec<String> = (0..256).map(|i| format!("identifier_{}", i * 37)).collect();

    let mut group = c.benchmark_group("copy-str");

    group.bench_function("objstack", |b| {
        let mut stack = ObjectStack::new();
        b.iter(|| {
            for word in &words {
                black_box(stack.copy_str(word));
            }
            stack.reset();
        });
    });

    group.bench_function("bumpalo", |b| {
        let mut bump = bumpalo::Bump::new();
        b.iter(|| {
            for word in &words {
                black_box(bump.alloc_str(word));
            }
            bump.reset();
        });
    });

    group.finish();
}

criterion_group!(benches, byte_growth, copy_strings);
criterion_main!(benches);
