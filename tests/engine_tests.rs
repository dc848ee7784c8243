//! End-to-end engine scenarios driven through the public API.

use tui_lockpick::core::{LockSession, LockpickEngine, RecordingSink, SoundSink};
use tui_lockpick::types::{Difficulty, SoundCue, MAX_ATTEMPTS, TICK_MS};

/// Pointer delta that maps to a given dial angle (0° up, clockwise positive).
fn delta_for_angle(deg: f32) -> (f32, f32) {
    let rad = deg.to_radians();
    (rad.sin(), -rad.cos())
}

fn new_game(seed: u32) -> (LockSession, LockpickEngine) {
    let session = LockSession::new(40, Difficulty::Medium, 5);
    let engine = LockpickEngine::new(seed, &session.view());
    (session, engine)
}

/// Park the pick in the middle of the green zone.
fn aim_at_zone_center(engine: &mut LockpickEngine, session: &LockSession) {
    let target = engine.green_zone().start() + engine.green_zone().size() / 2.0;
    let (dx, dy) = delta_for_angle(target);
    engine.set_engaged(true);
    let _ = engine.pointer_move(dx, dy, &session.view());
    assert!(engine.is_success(), "pick should sit inside the zone");
}

/// Park the pick a fixed 10° below the zone start (always reachable: the
/// start is at least -45°, so the clamp never pushes the pick back).
fn aim_below_zone(engine: &mut LockpickEngine, session: &LockSession) {
    let target = engine.green_zone().start() - 10.0;
    let (dx, dy) = delta_for_angle(target);
    engine.set_engaged(true);
    let _ = engine.pointer_move(dx, dy, &session.view());
    assert!(!engine.is_success());
    assert!((engine.pin_angle() - target).abs() < 1e-3);
}

#[test]
fn full_turn_inside_zone_cracks_the_lock_once() {
    let (mut session, mut engine) = new_game(7);
    aim_at_zone_center(&mut engine, &session);

    let mut sink = RecordingSink::new();
    if let Some(cue) = engine.turn_key_down(&session.view()) {
        sink.cue(cue);
    }

    for _ in 0..100 {
        let events = engine.tick(TICK_MS, &session.view());
        if events.pin_broken {
            session.record_broken_pin();
        }
        for cue in &events.cues {
            sink.cue(*cue);
        }
    }

    assert!(engine.cracked());
    assert!(engine.is_game_over(&session.view()));
    assert_eq!(sink.cues().first(), Some(&SoundCue::PickStart));
    assert_eq!(sink.count_of(SoundCue::Unlock), 1);
    assert_eq!(sink.last(), Some(SoundCue::Unlock));
    assert_eq!(session.broken_pins(), 0);
    // Cracked is terminal until a reset: the turn no longer relaxes.
    let angle = engine.screwdriver_angle();
    let _ = engine.tick(TICK_MS, &session.view());
    assert_eq!(engine.screwdriver_angle(), angle);
}

#[test]
fn turning_outside_zone_never_cracks() {
    let (session, mut engine) = new_game(11);
    aim_below_zone(&mut engine, &session);
    let _ = engine.turn_key_down(&session.view());

    // 100 ticks sits safely below the earliest possible pick snap, so the
    // pick stays parked off-zone the whole time.
    for _ in 0..100 {
        let _ = engine.tick(TICK_MS, &session.view());
        assert!(!engine.cracked());
        // Off-zone strength keeps the screwdriver far short of a full turn.
        assert!(engine.screwdriver_angle() < 90.0);
    }
}

#[test]
fn overstressing_breaks_the_pick_and_consumes_a_pin() {
    let (mut session, mut engine) = new_game(3);
    aim_below_zone(&mut engine, &session);
    let _ = engine.turn_key_down(&session.view());

    // Hold the turn until the pick snaps.
    let mut snapped = false;
    for _ in 0..1000 {
        let events = engine.tick(TICK_MS, &session.view());
        if events.cues.contains(&SoundCue::PickBreak) {
            snapped = true;
            break;
        }
    }
    assert!(snapped, "sustained off-zone turning must eventually snap the pick");
    assert!(engine.breaking());

    // Let go of the key while the break plays out.
    engine.turn_key_up(&session.view());

    // The break resolves about half a second later, exactly once.
    let mut broken_events = 0usize;
    for _ in 0..40 {
        let events = engine.tick(TICK_MS, &session.view());
        if events.pin_broken {
            broken_events += 1;
            session.record_broken_pin();
        }
    }
    assert_eq!(broken_events, 1);
    assert_eq!(session.broken_pins(), 1);
    assert!(!engine.breaking());
    assert_eq!(engine.attempt_count(), 0);
    assert_eq!(engine.pin_angle(), 0.0);
    assert_eq!(engine.screwdriver_angle(), 0.0);
    assert_eq!(engine.pin_generation(), 1);
}

#[test]
fn attempts_cap_and_pressure_never_goes_negative() {
    let session = LockSession::new(40, Difficulty::Medium, 500);
    let mut engine = LockpickEngine::new(5, &session.view());
    aim_below_zone(&mut engine, &session);
    let _ = engine.turn_key_down(&session.view());

    for _ in 0..2000 {
        let _ = engine.tick(TICK_MS, &session.view());
        assert!(engine.attempt_count() <= MAX_ATTEMPTS);
        assert!(engine.pressure() >= 0.0);
    }
}

#[test]
fn pressure_reads_zero_once_the_game_is_over() {
    let (mut session, mut engine) = new_game(19);
    aim_below_zone(&mut engine, &session);
    let _ = engine.turn_key_down(&session.view());

    // Build pressure across several sampler periods.
    for _ in 0..60 {
        let _ = engine.tick(TICK_MS, &session.view());
    }
    assert!(engine.pressure() > 0.0);

    for _ in 0..5 {
        session.record_broken_pin();
    }
    let _ = engine.tick(TICK_MS, &session.view());
    assert_eq!(engine.pressure(), 0.0);
}

#[test]
fn exhausted_pin_budget_freezes_the_game() {
    let (mut session, mut engine) = new_game(13);
    for _ in 0..5 {
        session.record_broken_pin();
    }
    assert!(session.out_of_picks());
    assert!(engine.is_game_over(&session.view()));

    // Inputs are ignored and ticks change nothing observable.
    assert_eq!(engine.pointer_move(1.0, 0.0, &session.view()), None);
    engine.set_engaged(true);
    assert_eq!(engine.turn_key_down(&session.view()), None);
    let events = engine.tick(TICK_MS, &session.view());
    assert!(events.cues.is_empty());
    assert!(!events.pin_broken);
    assert_eq!(engine.pin_angle(), 0.0);
    assert!(!engine.turning());
}

#[test]
fn retry_revives_a_spent_session_without_moving_the_zone() {
    let (mut session, mut engine) = new_game(13);
    let zone_start = engine.green_zone().start();
    for _ in 0..5 {
        session.record_broken_pin();
    }
    let _ = engine.tick(TICK_MS, &session.view());

    // Spent budget: every input is dead.
    engine.set_engaged(true);
    assert_eq!(engine.turn_key_down(&session.view()), None);
    assert_eq!(engine.pointer_move(0.5, -0.5, &session.view()), None);
    assert!(engine.is_game_over(&session.view()));

    // The retry surface (the runner's `r` key) restores the budget and
    // requests the reset in one step.
    session.retry();
    let _ = engine.tick(TICK_MS, &session.view());

    assert!(!engine.is_game_over(&session.view()));
    assert_eq!(session.pins_left(), session.pin_budget());
    assert_eq!(engine.green_zone().start(), zone_start);
    assert_eq!(engine.attempt_count(), 0);

    // Play works again end to end.
    let (dx, dy) = delta_for_angle(zone_start);
    assert!(engine.pointer_move(dx, dy, &session.view()).is_some());
    engine.set_engaged(true);
    assert_eq!(engine.turn_key_down(&session.view()), Some(SoundCue::PickStart));
}

#[test]
fn reset_cancels_a_pending_break() {
    let (mut session, mut engine) = new_game(3);
    aim_below_zone(&mut engine, &session);
    let _ = engine.turn_key_down(&session.view());

    let mut snapped = false;
    for _ in 0..1000 {
        let events = engine.tick(TICK_MS, &session.view());
        if events.cues.contains(&SoundCue::PickBreak) {
            snapped = true;
            break;
        }
    }
    assert!(snapped);

    session.request_reset();
    let mut broken = false;
    for _ in 0..100 {
        let events = engine.tick(TICK_MS, &session.view());
        broken |= events.pin_broken;
    }
    assert!(!broken, "a reset must cancel the scheduled break");
    assert!(!engine.breaking());
    assert_eq!(session.broken_pins(), 0);
}

#[test]
fn danger_loop_starts_before_it_stops() {
    let (session, mut engine) = new_game(17);
    aim_below_zone(&mut engine, &session);
    let _ = engine.turn_key_down(&session.view());

    let mut cues: Vec<SoundCue> = Vec::new();
    for _ in 0..1000 {
        let events = engine.tick(TICK_MS, &session.view());
        cues.extend(events.cues.iter().copied());
        if cues.contains(&SoundCue::DangerLoopStart) {
            break;
        }
    }
    let first_start = cues.iter().position(|c| *c == SoundCue::DangerLoopStart);
    assert!(first_start.is_some(), "sustained danger must start the loop");
    assert!(!cues.contains(&SoundCue::DangerLoopStop));

    // Releasing the key silences the loop on the next tick.
    engine.turn_key_up(&session.view());
    let events = engine.tick(TICK_MS, &session.view());
    assert!(events.cues.contains(&SoundCue::DangerLoopStop));
}

#[test]
fn same_seed_and_script_reproduce_the_session() {
    let script = |seed: u32| -> (Vec<SoundCue>, f32, u32) {
        let (session, mut engine) = new_game(seed);
        aim_below_zone(&mut engine, &session);
        let _ = engine.turn_key_down(&session.view());

        let mut cues = Vec::new();
        for _ in 0..300 {
            let events = engine.tick(TICK_MS, &session.view());
            cues.extend(events.cues.iter().copied());
        }
        (cues, engine.pressure(), engine.attempt_count())
    };

    assert_eq!(script(99), script(99));

    // Seeds actually influence the session: zone placement varies.
    let session = LockSession::new(40, Difficulty::Medium, 5);
    let mut starts: Vec<i32> = (1..20)
        .map(|seed| LockpickEngine::new(seed, &session.view()).green_zone().start() as i32)
        .collect();
    starts.sort_unstable();
    starts.dedup();
    assert!(starts.len() > 1);
}
