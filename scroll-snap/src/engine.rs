use std::sync::Arc;

use crate::drag::DragState;
use crate::events::Listeners;
use crate::index::{self, normalize_index};
use crate::lerp::{Lerp, LerpDriver, LerpStep, OnComplete};
use crate::{Frame, ListenerId, SnapError, SnapHost, SnapOptions};

/// A headless snap-scrolling engine.
///
/// The engine owns the index state, the drag latch and the release animation. Everything
/// visual lives behind the [`SnapHost`] port:
/// - geometry (cell size, viewport width) and the content offset are read from the host,
/// - offsets produced by the animation are written back to the host,
/// - cells only pass through the engine during `push`/`pop`/`unshift_front`/`shift_front`
///   and wrap-around reordering.
///
/// Adapters drive it by calling:
/// - `on_drag_begin` / `on_drag_sample` / `on_drag_end` while the user drags,
/// - `tick(now_ms)` every frame,
/// - `snap_to_*` / `move_to_index` for programmatic navigation.
///
/// Index `i` rests at content offset `-cell_width * i`. Dragging content toward negative x
/// advances the index.
#[derive(Clone, Debug)]
pub struct SnapEngine<H> {
    host: H,
    options: SnapOptions,
    // Positional index used to compute offsets; may leave `[0, max_index]` in wrap mode
    // until the wrap fix-up runs.
    cell_index: i64,
    // Net displacement across wraps. The displayed index is derived from it.
    actual_index: i64,
    drag: DragState,
    lerp: LerpDriver,
    listeners: Listeners,
}

impl<H: SnapHost> SnapEngine<H> {
    /// Creates an engine and positions the host content at `options.starting_index`.
    ///
    /// The starting index is clamped to `[0, max_index]`, and the host content width is
    /// written immediately.
    pub fn new(host: H, options: SnapOptions) -> Self {
        let options = options.sanitized();
        let mut engine = Self {
            host,
            options,
            cell_index: 0,
            actual_index: 0,
            drag: DragState::default(),
            lerp: LerpDriver::default(),
            listeners: Listeners::default(),
        };
        let start = to_i64(options.starting_index).clamp(0, engine.max_index() as i64);
        engine.cell_index = start;
        engine.actual_index = start;
        engine.host.set_content_offset(engine.offset_for(start));
        engine.sync_content_width();
        sdebug!(
            cell_count = engine.cell_count(),
            max_index = engine.max_index(),
            start,
            wrap_around = options.wrap_around,
            "SnapEngine::new"
        );
        engine
    }

    pub fn options(&self) -> &SnapOptions {
        &self.options
    }

    /// Replaces the options. The current index and any running animation are kept.
    pub fn set_options(&mut self, options: SnapOptions) {
        self.options = options.sanitized();
        strace!(options = ?self.options, "SnapEngine::set_options");
    }

    /// Copies the current options, applies `f`, then delegates to `set_options`.
    pub fn update_options(&mut self, f: impl FnOnce(&mut SnapOptions)) {
        let mut next = self.options;
        f(&mut next);
        self.set_options(next);
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    /// Mutable access to the host.
    ///
    /// Changing the cell collection through this handle bypasses index bookkeeping; prefer
    /// the engine's mutators for that.
    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    pub fn into_host(self) -> H {
        self.host
    }

    pub fn cell_count(&self) -> usize {
        self.host.cell_count()
    }

    pub fn cell_width(&self) -> f32 {
        self.host.cell_size().width()
    }

    pub fn cells_per_viewport(&self) -> usize {
        index::cells_per_viewport(self.host.viewport_width(), self.cell_width())
    }

    /// `max(cell_count - cells_per_viewport, 0)`, recomputed from the host on every call.
    pub fn max_index(&self) -> usize {
        index::max_index(self.cell_count(), self.cells_per_viewport())
    }

    /// Whether wrap-around is in effect: enabled in the options and the content overflows.
    pub fn is_wrapping(&self) -> bool {
        self.options.wrap_around && self.max_index() > 0
    }

    /// The positional index the content rests (or is animating) at.
    pub fn cell_index(&self) -> i64 {
        self.cell_index
    }

    /// The unbounded index tracking net movement across wraps.
    ///
    /// Wrapping moves that overshoot by more than a full turn count only their remainder.
    pub fn actual_index(&self) -> i64 {
        self.actual_index
    }

    /// The current cell, always in `[0, cell_count)` (0 for an empty strip).
    ///
    /// This is [`Self::actual_index`] modulo the cell count, so it names a cell by its
    /// original position rather than by its slot. Once wrap-around has rotated cells it can
    /// differ from [`Self::cell_index`]: after a forward wrap from the last slot of five cells
    /// with three in view, `cell_index` is 2 while the displayed index is 3.
    pub fn current_displayed_index(&self) -> usize {
        normalize_index(self.actual_index, self.cell_count())
    }

    pub fn content_offset(&self) -> f32 {
        self.host.content_offset()
    }

    /// Where the content is heading: the animation target, or the resting offset of the
    /// current cell when idle.
    pub fn target_offset(&self) -> f32 {
        self.lerp
            .target()
            .unwrap_or_else(|| self.offset_for(self.cell_index))
    }

    pub fn is_animating(&self) -> bool {
        self.lerp.is_active()
    }

    /// Advisory flag for pointer adapters: `true` while a snap animation runs and
    /// `block_input_during_lerp` is set.
    pub fn is_input_blocked(&self) -> bool {
        self.options.block_input_during_lerp && self.lerp.is_active()
    }

    /// Subscribes to index changes. The listener receives the displayed index.
    ///
    /// Fires once per resolution that attempted to move: a drag that qualified (by velocity
    /// or distance), or a programmatic call targeting a different cell. It fires even when
    /// clamping left the index where it was.
    pub fn on_index_changed(
        &mut self,
        f: impl Fn(usize) + Send + Sync + 'static,
    ) -> ListenerId {
        self.listeners.add_index_changed(Arc::new(f))
    }

    /// Subscribes to resolutions. Fires once for every drag end, `snap_to_*` and
    /// `move_to_index` call with the resolved displayed index.
    pub fn on_release(&mut self, f: impl Fn(usize) + Send + Sync + 'static) -> ListenerId {
        self.listeners.add_release(Arc::new(f))
    }

    /// Subscribes to animation completion. Replaced or cancelled animations do not fire.
    pub fn on_lerp_complete(&mut self, f: impl Fn() + Send + Sync + 'static) -> ListenerId {
        self.listeners.add_lerp_complete(Arc::new(f))
    }

    /// Returns `true` if a listener was removed.
    pub fn remove_listener(&mut self, id: ListenerId) -> bool {
        self.listeners.remove(id)
    }

    /// Starts a gesture: clears any stale drag state and hands the offset back to the user by
    /// cancelling the running animation.
    pub fn on_drag_begin(&mut self) {
        self.drag.reset();
        if self.lerp.is_active() {
            strace!("drag begin cancels running lerp");
            self.lerp.cancel();
        }
    }

    /// Feeds one motion sample of the active gesture.
    ///
    /// Samples with a non-positive or non-finite `delta_time_ms` are ignored.
    pub fn on_drag_sample(&mut self, delta_x: f32, delta_time_ms: f32) {
        self.drag
            .sample(delta_x, delta_time_ms, self.options.trigger_acceleration);
    }

    /// Ends the gesture: decides the new index, notifies, and starts the snap animation.
    ///
    /// `press_x` and `current_x` are pointer positions at press and release. Returns the
    /// resolved displayed index.
    pub fn on_drag_end(&mut self, press_x: f32, current_x: f32) -> usize {
        let cell_width = self.cell_width();
        let displacement = self.host.content_offset() + self.cell_index as f32 * cell_width;
        let outcome = self.drag.release(
            press_x,
            current_x,
            displacement,
            cell_width,
            self.options.trigger_percent,
        );
        sdebug!(
            triggered = outcome.triggered,
            delta = outcome.delta,
            displacement,
            "drag released"
        );
        let proposed = self.cell_index.saturating_add(outcome.delta);
        self.resolve_and_snap(proposed, outcome.triggered)
    }

    /// Abandons the gesture without resolving it and animates back to the current cell.
    pub fn cancel_drag(&mut self) {
        self.drag.reset();
        self.start_lerp(self.offset_for(self.cell_index), None);
    }

    /// Animates to `index`, honoring the clamp/wrap policy. Returns the displayed index.
    pub fn snap_to_index(&mut self, index: usize) -> usize {
        self.snap_to(to_i64(index))
    }

    pub fn snap_to_next(&mut self) -> usize {
        self.snap_to(self.cell_index.saturating_add(1))
    }

    pub fn snap_to_prev(&mut self) -> usize {
        self.snap_to(self.cell_index.saturating_sub(1))
    }

    /// Jumps to `index` without animating. Cancels a running animation (without firing
    /// `on_lerp_complete`) and skips the wrap fix-up.
    ///
    /// The target is clamped to `[0, max_index]` even when wrapping, since no fix-up follows.
    pub fn move_to_index(&mut self, index: usize) -> usize {
        let proposed = to_i64(index);
        let attempted = proposed != self.cell_index;
        let resolved = proposed.clamp(0, to_i64(self.max_index()));
        self.set_cell_index(resolved, resolved.saturating_sub(self.cell_index));
        self.lerp.cancel();
        self.host.stop_movement();
        self.host.set_content_offset(self.offset_for(self.cell_index));
        self.notify_resolution(attempted)
    }

    /// Advances the snap animation to `now_ms`.
    ///
    /// The first tick after an animation starts binds its start time. When the animation
    /// settles, the offset is written exactly, the wrap fix-up registered for it runs, and
    /// `on_lerp_complete` listeners fire.
    pub fn tick(&mut self, now_ms: u64) -> Frame {
        match self.lerp.advance(now_ms, self.options.settle_epsilon) {
            LerpStep::Idle => Frame {
                animating: false,
                offset: self.host.content_offset(),
            },
            LerpStep::Running(offset) => {
                self.host.set_content_offset(offset);
                Frame {
                    animating: true,
                    offset,
                }
            }
            LerpStep::Finished {
                offset,
                on_complete,
            } => {
                self.host.set_content_offset(offset);
                if on_complete == Some(OnComplete::WrapFixUp) {
                    self.wrap_fix_up();
                }
                sdebug!(
                    cell_index = self.cell_index,
                    displayed = self.current_displayed_index(),
                    "lerp complete"
                );
                self.listeners.emit_lerp_complete();
                Frame {
                    animating: false,
                    offset: self.host.content_offset(),
                }
            }
        }
    }

    /// Appends a cell.
    pub fn push(&mut self, cell: H::Cell) {
        self.host.push_cell(cell);
        self.sync_content_width();
    }

    /// Removes the last cell.
    ///
    /// If the current cell index was the old max index, it steps back by one and the content
    /// glides to the new resting offset.
    pub fn pop(&mut self) -> Result<H::Cell, SnapError> {
        let old_max = self.max_index() as i64;
        let Some(cell) = self.host.pop_cell() else {
            swarn!("pop on an empty cell collection");
            return Err(SnapError::EmptyCollection);
        };
        self.sync_content_width();
        if self.cell_index == old_max && self.cell_index > 0 {
            self.cell_index -= 1;
            self.actual_index -= 1;
            self.start_lerp(self.offset_for(self.cell_index), None);
        }
        self.restore_bounds();
        Ok(cell)
    }

    /// Prepends a cell, keeping the same cell in view.
    pub fn unshift_front(&mut self, cell: H::Cell) {
        let cell_width = self.cell_width();
        self.host.unshift_cell(cell);
        self.cell_index += 1;
        self.actual_index += 1;
        self.shift_content(-cell_width);
        self.sync_content_width();
    }

    /// Removes the first cell, keeping the same cell in view.
    ///
    /// When the removed cell is the current one (index 0, no wrap-around) the index stays at
    /// 0 and the next cell slides into place.
    pub fn shift_front(&mut self) -> Result<H::Cell, SnapError> {
        let keep_in_view = self.cell_index > 0 || self.is_wrapping();
        let Some(cell) = self.host.shift_cell() else {
            swarn!("shift_front on an empty cell collection");
            return Err(SnapError::EmptyCollection);
        };
        if keep_in_view {
            self.cell_index -= 1;
            self.actual_index -= 1;
            self.shift_content(self.cell_width());
        }
        self.sync_content_width();
        self.restore_bounds();
        Ok(cell)
    }

    fn snap_to(&mut self, proposed: i64) -> usize {
        let attempted = proposed != self.cell_index;
        self.resolve_and_snap(proposed, attempted)
    }

    fn resolve_and_snap(&mut self, proposed: i64, attempted: bool) -> usize {
        self.resolve(proposed);
        let on_complete = self.is_wrapping().then_some(OnComplete::WrapFixUp);
        self.start_lerp(self.offset_for(self.cell_index), on_complete);
        self.notify_resolution(attempted)
    }

    fn resolve(&mut self, proposed: i64) {
        let resolved = index::resolve(
            proposed,
            self.max_index(),
            self.cell_count(),
            self.options.wrap_around,
        );
        self.set_cell_index(resolved, resolved.saturating_sub(self.cell_index));
        strace!(
            proposed,
            resolved,
            actual = self.actual_index,
            "index resolved"
        );
    }

    fn set_cell_index(&mut self, cell_index: i64, actual_delta: i64) {
        self.cell_index = cell_index;
        self.actual_index = self.actual_index.saturating_add(actual_delta);
    }

    // Removing cells can turn wrapping off with the index past an end and no fix-up left
    // to repair it.
    fn restore_bounds(&mut self) {
        if self.is_wrapping() {
            return;
        }
        let clamped = self.cell_index.clamp(0, to_i64(self.max_index()));
        let delta = clamped - self.cell_index;
        if delta != 0 {
            sdebug!(from = self.cell_index, to = clamped, "index restored to bounds");
            self.set_cell_index(clamped, delta);
            self.shift_content(-self.cell_width() * delta as f32);
        }
    }

    fn notify_resolution(&self, attempted: bool) -> usize {
        let displayed = self.current_displayed_index();
        if attempted {
            self.listeners.emit_index_changed(displayed);
        }
        self.listeners.emit_release(displayed);
        displayed
    }

    fn start_lerp(&mut self, to: f32, on_complete: Option<OnComplete>) {
        self.host.stop_movement();
        let from = self.host.content_offset();
        strace!(from, to, "lerp start");
        self.lerp.start(
            Lerp::new(from, to, self.options.lerp_duration_ms),
            on_complete,
        );
    }

    // Front is checked first; at most one side is adjusted per completion. The index moves
    // by one cell plus every cell it overshot the boundary by; full turns of the strip are
    // skipped when reordering.
    fn wrap_fix_up(&mut self) {
        if !self.is_wrapping() {
            return;
        }
        let count = self.cell_count() as i64;
        let max = self.max_index() as i64;
        let cell_width = self.cell_width();

        if self.cell_index <= 0 {
            let rotations = (-self.cell_index).max(1);
            for _ in 0..rotations % count {
                self.host.move_last_to_first();
            }
            self.cell_index += rotations;
            self.shift_content(-cell_width * rotations as f32);
            sdebug!(rotations, cell_index = self.cell_index, "wrap fix-up (front)");
        } else if self.cell_index >= max {
            let rotations = (self.cell_index - max).max(1);
            for _ in 0..rotations % count {
                self.host.move_first_to_last();
            }
            self.cell_index -= rotations;
            self.shift_content(cell_width * rotations as f32);
            sdebug!(rotations, cell_index = self.cell_index, "wrap fix-up (back)");
        }
    }

    // Moves the content and any running animation by `dx` so the same cell stays in view.
    fn shift_content(&mut self, dx: f32) {
        let offset = self.host.content_offset() + dx;
        self.host.set_content_offset(offset);
        self.lerp.shift(dx);
    }

    fn sync_content_width(&mut self) {
        let width = self.cell_width() * self.cell_count() as f32;
        self.host.set_content_width(width);
    }

    fn offset_for(&self, cell_index: i64) -> f32 {
        -(self.cell_width() * cell_index as f32)
    }
}

fn to_i64(index: usize) -> i64 {
    i64::try_from(index).unwrap_or(i64::MAX)
}
