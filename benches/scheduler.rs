use criterion::{black_box, criterion_group, criterion_main, Criterion};
use frame_coro::core::{Scheduler, Script, Step, Wait};

fn bench_update_timed(c: &mut Criterion) {
    let mut scheduler = Scheduler::new();
    for _ in 0..1000 {
        scheduler.start(|| Step::Wait(Wait::seconds(1.0)));
    }

    c.bench_function("update_1000_timed_waits", |b| {
        b.iter(|| {
            scheduler.update(black_box(0.016));
        })
    });
}

fn bench_update_plain_yields(c: &mut Criterion) {
    let mut scheduler = Scheduler::new();
    for _ in 0..1000 {
        scheduler.start(|| Step::Next);
    }

    c.bench_function("update_1000_plain_yields", |b| {
        b.iter(|| {
            scheduler.update(black_box(0.016));
        })
    });
}

fn bench_start_script(c: &mut Criterion) {
    c.bench_function("start_and_drain_script", |b| {
        b.iter(|| {
            let mut scheduler = Scheduler::new();
            scheduler.start(
                Script::new()
                    .then(|| {})
                    .next_frame()
                    .wait_seconds(0.032)
                    .then(|| {}),
            );
            while !scheduler.is_empty() {
                scheduler.update(black_box(0.016));
            }
        })
    });
}

fn bench_snapshot(c: &mut Criterion) {
    let mut scheduler = Scheduler::new();
    for i in 0..256 {
        scheduler.start_labeled(format!("co-{}", i), || Step::Wait(Wait::next_frame()));
    }

    c.bench_function("snapshot_256", |b| {
        b.iter(|| black_box(scheduler.snapshot()))
    });
}

criterion_group!(
    benches,
    bench_update_timed,
    bench_update_plain_yields,
    bench_start_script,
    bench_snapshot
);
criterion_main!(benches);
