use criterion::{criterion_group, criterion_main, Criterion};
use once_cell::sync::Lazy;
use outfitter_lib::{
    add_outfit, compute_aggregates, remove_outfit, AggregateCache, Build, Catalog, HullId,
    OutfitId,
};
use std::hint::black_box;
use std::num::NonZeroU32;
use std::path::PathBuf;

fn fixture_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../docs/fixtures/catalog.json")
}

static CATALOG: Lazy<Catalog> =
    Lazy::new(|| Catalog::from_path(&fixture_path()).expect("fixture loads"));
static MULE: Lazy<Build> = Lazy::new(|| {
    CATALOG
        .default_build(&HullId::new("mule"), "bench")
        .expect("default build resolves")
});

fn benchmark_aggregates(c: &mut Criterion) {
    let build = &*MULE;

    c.bench_function("compute_aggregates_mule", |b| {
        b.iter(|| black_box(compute_aggregates(black_box(build))))
    });

    c.bench_function("cached_aggregates_mule", |b| {
        let mut cache = AggregateCache::new();
        b.iter(|| black_box(cache.get_or_compute(build).heat.action_heat))
    });
}

fn benchmark_mutations(c: &mut Criterion) {
    let build = &*MULE;
    let cooling = CATALOG
        .outfit(&OutfitId::new("water-cooling"))
        .expect("fixture outfit");
    let launcher = CATALOG
        .outfit(&OutfitId::new("meteor-launcher"))
        .expect("fixture outfit");
    let one = NonZeroU32::MIN;

    c.bench_function("add_remove_cycle", |b| {
        b.iter(|| {
            let added = add_outfit(build, cooling, one).expect("cooling fits");
            let grown = build.clone().with_outfits(added.outfits);
            let removed = remove_outfit(&grown, cooling, one).expect("cooling present");
            black_box(removed.amount)
        });
    });

    c.bench_function("launcher_cascade", |b| {
        b.iter(|| {
            let change = remove_outfit(build, launcher, one).expect("launcher present");
            black_box(change.ammo_removed)
        });
    });
}

criterion_group!(benches, benchmark_aggregates, benchmark_mutations);
criterion_main!(benches);
