//! Demo routines driven headlessly at a fixed 0.25s tick.

use frame_coro::core::Scheduler;
use frame_coro::demo::{start_demo, DemoWorld, COUNTDOWN_FROM};
use frame_coro::term::StatusView;

const DT: f32 = 0.25;

#[test]
fn demo_world_plays_out() {
    let mut scheduler = Scheduler::new();
    let world = DemoWorld::new();
    let handles = start_demo(&mut scheduler, &world);
    assert_eq!(world.countdown.get(), COUNTDOWN_FROM);
    assert!(world.blink_on.get());

    // One countdown step per second.
    for _ in 0..4 {
        scheduler.update(DT);
    }
    assert_eq!(world.countdown.get(), COUNTDOWN_FROM - 1);

    for _ in 4..12 {
        scheduler.update(DT);
    }
    assert_eq!(world.countdown.get(), 0);
    assert!(!scheduler.contains(handles.countdown));
    assert_eq!(world.spawned.get(), 1);

    for _ in 12..17 {
        scheduler.update(DT);
    }
    assert_eq!(world.spawned.get(), 4);
    assert!(!scheduler.contains(handles.spawner));
    assert!(scheduler.is_running(handles.blinker));
    assert_eq!(world.blinks.get(), 18);
}

#[test]
fn stopping_blinker_freezes_flag() {
    let mut scheduler = Scheduler::new();
    let world = DemoWorld::new();
    let handles = start_demo(&mut scheduler, &world);

    scheduler.update(DT);
    scheduler.stop(handles.blinker).unwrap();
    let frozen = world.blink_on.get();
    for _ in 0..8 {
        scheduler.update(DT);
    }
    assert_eq!(world.blink_on.get(), frozen);
    assert!(!scheduler.contains(handles.blinker));
}

#[test]
fn status_view_lists_demo_routines() {
    let mut scheduler = Scheduler::new();
    let world = DemoWorld::new();
    start_demo(&mut scheduler, &world);

    let lines = StatusView::default().render(&scheduler.snapshot(), 120);
    let text: Vec<&str> = lines.iter().map(|l| l.text.as_str()).collect();
    assert!(text.iter().any(|l| l.contains("countdown")));
    assert!(text.iter().any(|l| l.contains("blinker")));
    assert!(text.iter().any(|l| l.contains("spawner") && l.contains("until")));
}
