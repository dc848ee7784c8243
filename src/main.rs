//! Terminal lockpick runner (default binary).
//!
//! Move the mouse over the dial to position the pick, hold `a` to turn the
//! lock, `r` to retry a lock after running out, `q` to quit. Uses crossterm
//! for input and a framebuffer-based renderer.

use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use anyhow::{anyhow, Result};
use crossterm::event::{self, Event, KeyEventKind};

use tui_lockpick::core::{LockSession, LockSnapshot, LockpickEngine, SoundSink};
use tui_lockpick::input::{
    is_reset_key, is_turn_key, pointer_position, should_quit, TurnKeyHandler,
};
use tui_lockpick::term::{FrameBuffer, LockView, TerminalRenderer, Viewport};
use tui_lockpick::types::{Difficulty, SoundCue, TICK_MS};

#[derive(Debug, Clone, PartialEq, Eq)]
struct RunConfig {
    skill: u32,
    difficulty: Difficulty,
    pin_budget: u32,
    seed: Option<u32>,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            skill: 40,
            difficulty: Difficulty::Medium,
            pin_budget: 5,
            seed: None,
        }
    }
}

fn parse_run_args(args: &[String]) -> Result<RunConfig> {
    let mut config = RunConfig::default();
    let mut i = 0usize;
    while i < args.len() {
        match args[i].as_str() {
            "--skill" => {
                i += 1;
                let v = args
                    .get(i)
                    .ok_or_else(|| anyhow!("missing value for --skill"))?;
                config.skill = v
                    .parse::<u32>()
                    .map_err(|_| anyhow!("invalid --skill value: {}", v))?;
            }
            "--difficulty" => {
                i += 1;
                let v = args
                    .get(i)
                    .ok_or_else(|| anyhow!("missing value for --difficulty"))?;
                config.difficulty = Difficulty::from_str(v)
                    .ok_or_else(|| anyhow!("invalid --difficulty value: {} (easy|medium|hard)", v))?;
            }
            "--pins" => {
                i += 1;
                let v = args
                    .get(i)
                    .ok_or_else(|| anyhow!("missing value for --pins"))?;
                config.pin_budget = v
                    .parse::<u32>()
                    .map_err(|_| anyhow!("invalid --pins value: {}", v))?;
                if config.pin_budget == 0 {
                    return Err(anyhow!("--pins must be at least 1"));
                }
            }
            "--seed" => {
                i += 1;
                let v = args
                    .get(i)
                    .ok_or_else(|| anyhow!("missing value for --seed"))?;
                config.seed = Some(
                    v.parse::<u32>()
                        .map_err(|_| anyhow!("invalid --seed value: {}", v))?,
                );
            }
            other => {
                return Err(anyhow!(
                    "unknown argument: {} (supported: --skill N --difficulty easy|medium|hard --pins N --seed N)",
                    other
                ));
            }
        }
        i += 1;
    }
    Ok(config)
}

fn wall_clock_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos() ^ d.as_secs() as u32)
        .unwrap_or(0)
}

/// Remembers the most recent cue for the on-screen indicator.
#[derive(Default)]
struct LastCueSink {
    last: Option<SoundCue>,
}

impl SoundSink for LastCueSink {
    fn cue(&mut self, cue: SoundCue) {
        self.last = Some(cue);
    }
}

fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let config = parse_run_args(&args)?;

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &config);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn run(term: &mut TerminalRenderer, config: &RunConfig) -> Result<()> {
    let seed = config.seed.unwrap_or_else(wall_clock_seed);
    let mut session = LockSession::new(config.skill, config.difficulty, config.pin_budget);
    let mut engine = LockpickEngine::new(seed, &session.view());

    let view = LockView::default();
    let mut fb = FrameBuffer::new(80, 24);
    let mut snap = LockSnapshot::default();
    let mut turn_key = TurnKeyHandler::new();
    let mut sink = LastCueSink::default();

    let mut last_tick = Instant::now();
    let tick_duration = Duration::from_millis(TICK_MS as u64);

    loop {
        // Render.
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        let viewport = Viewport::new(w, h);
        LockSnapshot::capture(&engine, &session.view(), &mut snap);
        view.render_into(&snap, sink.last, viewport, &mut fb);
        term.draw(&fb)?;

        // Input with timeout until next tick.
        let timeout = tick_duration
            .checked_sub(last_tick.elapsed())
            .unwrap_or_else(|| Duration::from_secs(0));

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) => match key.kind {
                    KeyEventKind::Press => {
                        if should_quit(key) {
                            return Ok(());
                        }
                        if is_turn_key(key.code) {
                            if turn_key.handle_press() {
                                if let Some(cue) = engine.turn_key_down(&session.view()) {
                                    sink.cue(cue);
                                }
                            }
                        } else if is_reset_key(key.code) {
                            // Retry restores the pin budget; the engine
                            // reinitializes when it sees the counter change.
                            session.retry();
                            sink.last = None;
                            turn_key.reset();
                        }
                    }
                    KeyEventKind::Repeat => {
                        // Auto-repeat keeps the hold alive on terminals
                        // without release events.
                        if is_turn_key(key.code) {
                            turn_key.handle_press();
                        }
                    }
                    KeyEventKind::Release => {
                        if is_turn_key(key.code) && turn_key.handle_release() {
                            engine.turn_key_up(&session.view());
                        }
                    }
                },
                Event::Mouse(mouse) => {
                    if let Some((col, row)) = pointer_position(&mouse) {
                        let layout = view.layout(viewport);
                        match layout.pointer_delta(col, row) {
                            Some((dx, dy)) => {
                                engine.set_engaged(true);
                                if let Some(cue) =
                                    engine.pointer_move(dx, dy, &session.view())
                                {
                                    sink.cue(cue);
                                }
                            }
                            None => {
                                engine.set_engaged(false);
                            }
                        }
                    }
                }
                _ => {}
            }
        }

        // Tick.
        if last_tick.elapsed() >= tick_duration {
            last_tick = Instant::now();

            if turn_key.update() {
                engine.turn_key_up(&session.view());
            }

            let events = engine.tick(TICK_MS, &session.view());
            for cue in &events.cues {
                sink.cue(*cue);
            }
            if events.pin_broken {
                session.record_broken_pin();
            }
        }
    }
}
