use crate::*;

use std::sync::{Arc, Mutex};

use proptest::prelude::*;
use scroll_snap::{CellSize, SnapOptions, Strip};

fn controller(count: usize, options: SnapOptions) -> Controller<Strip<usize>> {
    let host = Strip::new(CellSize::new(100.0, 100.0).unwrap(), 400.0).with_cells(0..count);
    Controller::new(host, options)
}

fn settle(c: &mut Controller<Strip<usize>>, mut now_ms: u64) -> u64 {
    while c.tick(now_ms).animating {
        now_ms += 16;
        assert!(now_ms < 60_000, "animation did not settle");
    }
    now_ms
}

/// Drags from `from_x` to `to_x` in `steps` moves spaced 16ms apart, starting at `now_ms`.
fn drag(c: &mut Controller<Strip<usize>>, from_x: f32, to_x: f32, steps: u32, now_ms: u64) -> u64 {
    assert!(c.pointer_down(from_x, now_ms));
    let mut t = now_ms;
    for i in 1..steps {
        t += 16;
        let x = from_x + (to_x - from_x) * i as f32 / steps as f32;
        c.pointer_move(x, t);
    }
    t + 16
}

#[test]
fn quick_flick_advances_one_cell() {
    let mut c = controller(10, SnapOptions::default());
    assert!(c.pointer_down(500.0, 0));
    // 20px in 16ms is above the default 1px/ms trigger.
    c.pointer_move(480.0, 16);
    assert_eq!(c.engine().content_offset(), -20.0);
    assert_eq!(c.pointer_up(478.0, 32), Some(1));
    assert!(!c.is_dragging());

    settle(&mut c, 48);
    assert_eq!(c.engine().content_offset(), -100.0);
}

#[test]
fn slow_drag_past_threshold_advances() {
    let mut c = controller(10, SnapOptions::default());
    // 60px over 12 moves is 0.3px/ms: only the distance counts.
    let t = drag(&mut c, 500.0, 440.0, 12, 0);
    assert_eq!(c.pointer_up(440.0, t), Some(1));
    settle(&mut c, t);
    assert_eq!(c.engine().content_offset(), -100.0);
}

#[test]
fn slow_short_drag_returns_to_the_current_cell() {
    let mut c = controller(10, SnapOptions::new().with_starting_index(2));
    let t = drag(&mut c, 500.0, 505.0, 10, 0);
    assert_eq!(c.engine().content_offset(), -195.5);
    assert_eq!(c.pointer_up(505.0, t), Some(2));
    settle(&mut c, t);
    assert_eq!(c.engine().content_offset(), -200.0);
}

#[test]
fn long_drag_skips_several_cells() {
    let mut c = controller(10, SnapOptions::new().with_trigger_percent(20.0));
    let t = drag(&mut c, 600.0, 365.0, 40, 0);
    assert_eq!(c.pointer_up(365.0, t), Some(3));
    settle(&mut c, t);
    assert_eq!(c.engine().content_offset(), -300.0);
}

#[test]
fn presses_are_ignored_while_animating() {
    let mut c = controller(10, SnapOptions::default());
    c.engine_mut().snap_to_next();
    assert!(!c.pointer_down(300.0, 0));
    assert!(!c.is_dragging());
    c.pointer_move(100.0, 16);
    assert_eq!(c.pointer_up(100.0, 32), None);

    settle(&mut c, 0);
    assert_eq!(c.engine().content_offset(), -100.0);
    assert!(c.pointer_down(300.0, 500));
}

#[test]
fn press_interrupts_animation_when_blocking_is_off() {
    let mut c = controller(10, SnapOptions::new().with_block_input_during_lerp(false));
    c.engine_mut().snap_to_index(4);
    c.tick(0);
    c.tick(100);
    assert!(c.pointer_down(300.0, 100));
    assert!(!c.engine().is_animating());
    // Dragging owns the offset: ticks do not move it.
    let before = c.engine().content_offset();
    assert!(!c.tick(400).animating);
    assert_eq!(c.engine().content_offset(), before);
}

#[test]
fn cancel_returns_without_releasing() {
    let mut c = controller(10, SnapOptions::default());
    let released = Arc::new(Mutex::new(Vec::<usize>::new()));
    {
        let released = Arc::clone(&released);
        c.engine_mut()
            .on_release(move |i| released.lock().unwrap().push(i));
    }

    let t = drag(&mut c, 500.0, 440.0, 12, 0);
    c.pointer_cancel();
    assert!(!c.is_dragging());
    assert!(c.engine().is_animating());
    settle(&mut c, t);
    assert_eq!(c.engine().content_offset(), 0.0);
    assert!(released.lock().unwrap().is_empty());
}

#[derive(Clone, Debug)]
enum Gesture {
    Swipe { dx: f32, steps: u32 },
    Cancelled { dx: f32 },
    Wait(u64),
}

fn gesture() -> impl Strategy<Value = Gesture> {
    prop_oneof![
        (-700.0f32..700.0, 1u32..20).prop_map(|(dx, steps)| Gesture::Swipe { dx, steps }),
        (-300.0f32..300.0).prop_map(|dx| Gesture::Cancelled { dx }),
        (0u64..300).prop_map(Gesture::Wait),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn gestures_always_come_to_rest_on_a_cell(
        count in 1usize..15,
        wrap_around in any::<bool>(),
        gestures in proptest::collection::vec(gesture(), 0..25),
    ) {
        let mut c = controller(count, SnapOptions::new().with_wrap_around(wrap_around));
        let mut now_ms = 0u64;

        for g in &gestures {
            match *g {
                Gesture::Swipe { dx, steps } => {
                    if c.engine().is_input_blocked() {
                        now_ms = settle(&mut c, now_ms);
                    }
                    let t = drag(&mut c, 800.0, 800.0 + dx, steps, now_ms);
                    c.pointer_up(800.0 + dx, t);
                    now_ms = t;
                }
                Gesture::Cancelled { dx } => {
                    if c.engine().is_input_blocked() {
                        now_ms = settle(&mut c, now_ms);
                    }
                    let t = drag(&mut c, 800.0, 800.0 + dx, 4, now_ms);
                    c.pointer_cancel();
                    now_ms = t;
                }
                Gesture::Wait(ms) => {
                    now_ms += ms;
                    c.tick(now_ms);
                }
            }
            prop_assert!(c.engine().current_displayed_index() < count);
        }

        settle(&mut c, now_ms);
        let e = c.engine();
        prop_assert_eq!(e.content_offset(), -100.0 * e.cell_index() as f32);
        if !e.is_wrapping() {
            prop_assert!(e.cell_index() >= 0 && e.cell_index() <= e.max_index() as i64);
        }
    }
}
