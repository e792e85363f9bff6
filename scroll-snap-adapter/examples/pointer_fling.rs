use scroll_snap::{CellSize, SnapOptions, Strip};
use scroll_snap_adapter::Controller;

fn main() {
    // Example: an adapter forwarding pointer events and rendering from the host offset.
    //
    // A real UI would:
    // - call pointer_down/move/up from its input callbacks
    // - call tick(now_ms) once per frame
    // - position the strip at the returned offset
    let cell = match CellSize::new(100.0, 100.0) {
        Ok(cell) => cell,
        Err(err) => {
            eprintln!("{err}");
            return;
        }
    };
    let host = Strip::new(cell, 400.0).with_cells(0..12);
    let mut c = Controller::new(host, SnapOptions::new().with_trigger_percent(15.0));
    c.engine_mut()
        .on_release(|i| println!("released on cell {i}"));

    // A quick flick to the left: 20px per 16ms frame is above the 1px/ms trigger.
    let mut now_ms = 0u64;
    c.pointer_down(640.0, now_ms);
    for x in [620.0, 600.0, 580.0] {
        now_ms += 16;
        c.pointer_move(x, now_ms);
    }
    now_ms += 16;
    c.pointer_up(580.0, now_ms);

    loop {
        now_ms += 16;
        let frame = c.tick(now_ms);
        println!("t={now_ms} offset={:.1}", frame.offset);
        if !frame.animating {
            break;
        }
    }

    // A slow drag across two and a half cells moves three: the half-cell remainder is above
    // the trigger percent.
    c.pointer_down(600.0, now_ms);
    for step in 1..=50 {
        now_ms += 16;
        c.pointer_move(600.0 - step as f32 * 5.0, now_ms);
    }
    now_ms += 16;
    let index = c.pointer_up(350.0, now_ms);
    println!("slow drag resolved to {index:?}");
    while c.tick(now_ms).animating {
        now_ms += 16;
    }
    println!("resting at offset {}", c.engine().content_offset());
}
