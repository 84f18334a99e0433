// Criterion benchmarks for marksix-smart.
//
// Run:
//   cargo bench -p marksix-smart

use std::hint::black_box;

use criterion::{Criterion, criterion_group, criterion_main};

use marksix_smart::random::{random_selection, seeded_rng};
use marksix_smart::{CombinationType, generate};

/// Generate Smart Combination 9 for a fixed selection.
fn bench_generate_smart_9(c: &mut Criterion) {
    let ty = CombinationType::default_type();
    let selection = [3, 7, 12, 19, 22, 28, 31, 35, 40, 49];
    c.bench_function("generate_smart_9", |b| {
        b.iter(|| generate(black_box(&selection), ty))
    });
}

/// Quick pick followed by generation, for every registered type.
fn bench_quick_pick(c: &mut Criterion) {
    let mut rng = seeded_rng(42);
    c.bench_function("quick_pick_all_types", |b| {
        b.iter(|| {
            for ty in CombinationType::all() {
                let selection = random_selection(ty, &mut rng);
                let _ = black_box(generate(&selection, ty));
            }
        })
    });
}

criterion_group!(benches, bench_generate_smart_9, bench_quick_pick);
criterion_main!(benches);
