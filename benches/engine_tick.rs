use criterion::{black_box, criterion_group, criterion_main, Criterion};
use tui_lockpick::core::{LockSession, LockSnapshot, LockpickEngine};
use tui_lockpick::term::{LockView, Viewport};
use tui_lockpick::types::Difficulty;

fn bench_tick(c: &mut Criterion) {
    let session = LockSession::new(40, Difficulty::Medium, 5);
    let mut engine = LockpickEngine::new(12345, &session.view());
    engine.set_engaged(true);
    let _ = engine.turn_key_down(&session.view());

    c.bench_function("engine_tick_16ms", |b| {
        b.iter(|| {
            engine.tick(black_box(16), &session.view());
        })
    });
}

fn bench_pointer_move(c: &mut Criterion) {
    let session = LockSession::new(40, Difficulty::Medium, 5);
    let mut engine = LockpickEngine::new(12345, &session.view());

    c.bench_function("pointer_move", |b| {
        b.iter(|| {
            engine.pointer_move(black_box(0.7), black_box(-0.7), &session.view());
        })
    });
}

fn bench_render(c: &mut Criterion) {
    let session = LockSession::new(40, Difficulty::Medium, 5);
    let engine = LockpickEngine::new(12345, &session.view());
    let mut snap = LockSnapshot::default();
    LockSnapshot::capture(&engine, &session.view(), &mut snap);

    let view = LockView::default();
    let viewport = Viewport::new(80, 24);
    let mut fb = tui_lockpick::term::FrameBuffer::new(80, 24);

    c.bench_function("render_80x24", |b| {
        b.iter(|| {
            view.render_into(&snap, None, viewport, &mut fb);
        })
    });
}

criterion_group!(benches, bench_tick, bench_pointer_move, bench_render);
criterion_main!(benches);
