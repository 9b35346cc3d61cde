//! frame-coro demo runner (default binary).
//!
//! Drives a scheduler from a fixed-timestep loop. Interactive mode shows the
//! live coroutines in the terminal; `--headless` prints one JSON snapshot per
//! frame instead.

use std::io::{self, Write};
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};
use log::{debug, info, LevelFilter};

use frame_coro::core::{Scheduler, SchedulerConfig, SchedulerSnapshot};
use frame_coro::demo::{parse_args, start_demo, DemoArgs, DemoHandles, DemoWorld};
use frame_coro::term::{clip_lines, StatusLine, StatusView, TerminalRenderer};

fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let args = parse_args(&args).context("parsing command line")?;

    let mut logger =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"));
    if !args.headless {
        // Per-step library logs would land inside the alternate screen.
        logger.filter_module("frame_coro_core", LevelFilter::Warn);
    }
    logger.init();

    let config = SchedulerConfig::from_env();
    info!(
        "tick {}ms, time scale {}, max delta {:?}",
        args.tick_ms, config.time_scale, config.max_delta
    );

    let mut scheduler = Scheduler::with_config(config);
    let world = DemoWorld::new();
    let handles = start_demo(&mut scheduler, &world);

    if args.headless {
        return run_headless(&args, &mut scheduler);
    }

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&args, &mut term, &mut scheduler, &world, handles);

    // Always try to restore terminal state.
    let _ = term.exit();
    info!("stopped at frame {}", scheduler.frame());
    result
}

fn run_headless(args: &DemoArgs, scheduler: &mut Scheduler) -> Result<()> {
    let frames = args.frame_limit().unwrap_or_default();
    let dt = args.tick_seconds();
    let stdout = io::stdout();
    let mut out = stdout.lock();
    let mut snapshot = SchedulerSnapshot::default();

    for _ in 0..frames {
        scheduler.update(dt);
        scheduler.snapshot_into(&mut snapshot);
        serde_json::to_writer(&mut out, &snapshot)?;
        out.write_all(b"\n")?;
        if scheduler.is_empty() {
            break;
        }
    }
    out.flush()?;
    info!("headless run finished at frame {}", scheduler.frame());
    Ok(())
}

fn run(
    args: &DemoArgs,
    term: &mut TerminalRenderer,
    scheduler: &mut Scheduler,
    world: &DemoWorld,
    handles: DemoHandles,
) -> Result<()> {
    let view = StatusView {
        footer: vec!["p pause/resume all   s stop blinker   q quit".to_string()],
        ..StatusView::default()
    };
    let tick_duration = Duration::from_millis(args.tick_ms as u64);
    let dt = args.tick_seconds();
    let limit = args.frame_limit();

    let mut snapshot = SchedulerSnapshot::default();
    let mut lines: Vec<StatusLine> = Vec::new();
    let mut paused = false;
    let mut last_tick = Instant::now();

    loop {
        // Render.
        let (w, _) = crossterm::terminal::size().unwrap_or((80, 24));
        scheduler.snapshot_into(&mut snapshot);
        view.render_into(&snapshot, w, &mut lines);
        lines.push(StatusLine::new(world.status_line(), Default::default()));
        clip_lines(&mut lines, w);
        term.draw(&lines)?;

        // Input with timeout until next tick.
        let timeout = tick_duration
            .checked_sub(last_tick.elapsed())
            .unwrap_or_else(|| Duration::from_secs(0));

        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    match key.code {
                        KeyCode::Char('q') | KeyCode::Char('Q') => return Ok(()),
                        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                            return Ok(())
                        }
                        KeyCode::Char('p') | KeyCode::Char('P') => {
                            paused = !paused;
                            if paused {
                                scheduler.pause_all();
                            } else {
                                scheduler.resume_all();
                            }
                        }
                        KeyCode::Char('s') | KeyCode::Char('S') => {
                            if let Err(err) = scheduler.stop(handles.blinker) {
                                debug!("stop blinker: {}", err);
                            }
                        }
                        _ => {}
                    }
                }
            }
        }

        // Tick.
        if last_tick.elapsed() >= tick_duration {
            last_tick = Instant::now();
            scheduler.update(dt);

            if limit.is_some_and(|n| scheduler.frame() >= n) {
                return Ok(());
            }
        }
    }
}
