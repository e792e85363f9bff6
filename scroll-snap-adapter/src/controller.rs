use scroll_snap::{Frame, SnapEngine, SnapHost, SnapOptions};

#[derive(Clone, Copy, Debug, PartialEq)]
struct Pointer {
    press_x: f32,
    last_x: f32,
    last_ms: u64,
}

/// A framework-neutral controller that wraps a [`SnapEngine`] and turns pointer events into
/// drag gestures.
///
/// This type does not hold any UI objects. Adapters drive it by calling:
/// - `pointer_down` / `pointer_move` / `pointer_up` (or `pointer_cancel`) from input events
/// - `tick(now_ms)` each frame, then render from the host's content offset
///
/// While a gesture is active the content offset follows the pointer one-to-one; on release
/// the engine resolves the index and animates the content to rest.
#[derive(Clone, Debug)]
pub struct Controller<H> {
    engine: SnapEngine<H>,
    pointer: Option<Pointer>,
}

impl<H: SnapHost> Controller<H> {
    pub fn new(host: H, options: SnapOptions) -> Self {
        Self::from_engine(SnapEngine::new(host, options))
    }

    pub fn from_engine(engine: SnapEngine<H>) -> Self {
        Self {
            engine,
            pointer: None,
        }
    }

    pub fn engine(&self) -> &SnapEngine<H> {
        &self.engine
    }

    pub fn engine_mut(&mut self) -> &mut SnapEngine<H> {
        &mut self.engine
    }

    pub fn into_engine(self) -> SnapEngine<H> {
        self.engine
    }

    pub fn is_dragging(&self) -> bool {
        self.pointer.is_some()
    }

    /// Starts a gesture at pointer position `x`.
    ///
    /// Returns `false` (and ignores the press) while the engine reports input as blocked.
    pub fn pointer_down(&mut self, x: f32, now_ms: u64) -> bool {
        if self.engine.is_input_blocked() {
            atrace!(x, "press ignored: input blocked");
            return false;
        }
        self.engine.on_drag_begin();
        self.pointer = Some(Pointer {
            press_x: x,
            last_x: x,
            last_ms: now_ms,
        });
        true
    }

    /// Moves the content with the pointer and samples the drag speed.
    ///
    /// Ignored when no gesture is active.
    pub fn pointer_move(&mut self, x: f32, now_ms: u64) {
        let Some(pointer) = self.pointer.as_mut() else {
            return;
        };
        let dx = x - pointer.last_x;
        let dt = now_ms.saturating_sub(pointer.last_ms) as f32;
        pointer.last_x = x;
        pointer.last_ms = now_ms;

        let offset = self.engine.content_offset() + dx;
        self.engine.host_mut().set_content_offset(offset);
        self.engine.on_drag_sample(dx, dt);
    }

    /// Ends the gesture at `x` and lets the engine snap.
    ///
    /// Returns the resolved displayed index, or `None` when no gesture was active.
    pub fn pointer_up(&mut self, x: f32, now_ms: u64) -> Option<usize> {
        self.pointer_move(x, now_ms);
        let pointer = self.pointer.take()?;
        let index = self.engine.on_drag_end(pointer.press_x, x);
        adebug!(press_x = pointer.press_x, x, index, "gesture released");
        Some(index)
    }

    /// Abandons the gesture; the content animates back to the current cell.
    pub fn pointer_cancel(&mut self) {
        if self.pointer.take().is_some() {
            self.engine.cancel_drag();
        }
    }

    /// Advances the engine. While dragging the content belongs to the pointer and the frame
    /// only reports the current offset.
    pub fn tick(&mut self, now_ms: u64) -> Frame {
        if self.is_dragging() {
            return Frame {
                animating: false,
                offset: self.engine.content_offset(),
            };
        }
        self.engine.tick(now_ms)
    }
}
