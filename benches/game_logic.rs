use criterion::{black_box, criterion_group, criterion_main, Criterion};
use lane_rush::core::{collides, GameState, ObstacleSpawner};
use lane_rush::types::{GameAction, Rect, VehicleKind, BASE_OBSTACLE_SPEED};

fn bench_tick(c: &mut Criterion) {
    let mut state = GameState::new(VehicleKind::Car, 12345);
    state.apply_action(GameAction::Start);

    c.bench_function("game_tick_16ms", |b| {
        b.iter(|| {
            if !state.tick() {
                state.apply_action(GameAction::Restart);
            }
            black_box(state.frame_count());
        })
    });
}

fn bench_snapshot(c: &mut Criterion) {
    let mut state = GameState::new(VehicleKind::Car, 12345);
    state.apply_action(GameAction::Start);
    // Populate a few obstacles first.
    for _ in 0..240 {
        state.tick();
    }
    let mut snap = state.snapshot();

    c.bench_function("snapshot_into", |b| {
        b.iter(|| {
            state.snapshot_into(black_box(&mut snap));
        })
    });
}

fn bench_spawn(c: &mut Criterion) {
    let mut spawner = ObstacleSpawner::new(12345);

    c.bench_function("spawn_obstacle", |b| {
        b.iter(|| black_box(spawner.spawn(BASE_OBSTACLE_SPEED)))
    });
}

fn bench_collision_scan(c: &mut Criterion) {
    let vehicle = Rect::new(225.0, 480.0, 50.0, 100.0);
    let obstacles: Vec<Rect> = (0..16)
        .map(|i| Rect::new(125.0 + (i % 4) as f64 * 100.0, i as f64 * 40.0, 50.0, 100.0))
        .collect();

    c.bench_function("collision_scan_16", |b| {
        b.iter(|| {
            obstacles
                .iter()
                .any(|ob| collides(black_box(&vehicle), ob))
        })
    });
}

criterion_group!(
    benches,
    bench_tick,
    bench_snapshot,
    bench_spawn,
    bench_collision_scan
);
criterion_main!(benches);
