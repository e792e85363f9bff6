// Example: a wrap-around carousel driven by programmatic navigation and a 60fps tick.
use scroll_snap::{CellSize, SnapEngine, SnapError, SnapHost, SnapOptions, Strip};

fn run<H: SnapHost>(engine: &mut SnapEngine<H>, mut now_ms: u64) -> u64 {
    loop {
        let frame = engine.tick(now_ms);
        if !frame.animating {
            return now_ms;
        }
        now_ms += 16;
    }
}

fn main() -> Result<(), SnapError> {
    let cell = CellSize::new(120.0, 80.0)?;
    let host = Strip::new(cell, 360.0).with_cells(["red", "orange", "yellow", "green", "blue"]);

    let mut engine = SnapEngine::new(host, SnapOptions::new().with_wrap_around(true));
    engine.on_index_changed(|i| println!("index changed -> {i}"));
    engine.on_lerp_complete(|| println!("settled"));

    let mut now_ms = 0u64;
    for _ in 0..4 {
        engine.snap_to_next();
        now_ms = run(&mut engine, now_ms);
        println!(
            "displayed={} cell_index={} offset={} strip={:?}",
            engine.current_displayed_index(),
            engine.cell_index(),
            engine.content_offset(),
            engine.host().cells()
        );
    }

    engine.push("violet");
    engine.unshift_front("black");
    println!(
        "after push/unshift: count={} max_index={} displayed={}",
        engine.cell_count(),
        engine.max_index(),
        engine.current_displayed_index()
    );

    engine.move_to_index(0);
    let popped = engine.pop()?;
    println!("popped {popped}, strip={:?}", engine.host().cells());
    Ok(())
}
