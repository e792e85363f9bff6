use crate::Direction;

/// Per-gesture state: the velocity latch and the last observed movement direction.
///
/// A gesture leaves nothing behind: [`DragState::release`] resets the state regardless of
/// its outcome.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub(crate) struct DragState {
    triggered_by_velocity: bool,
    direction: Option<Direction>,
}

/// How a released gesture should move the index.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct DragOutcome {
    /// The gesture qualified as an index change attempt.
    pub triggered: bool,
    /// Signed number of cells to move by (0 when not triggered or direction is unknown).
    pub delta: i64,
}

impl DragState {
    pub(crate) fn reset(&mut self) {
        *self = Self::default();
    }

    #[cfg(test)]
    pub(crate) fn is_latched(&self) -> bool {
        self.triggered_by_velocity
    }

    /// Feeds one motion sample. Samples without usable timing are ignored.
    pub(crate) fn sample(&mut self, delta_x: f32, delta_time_ms: f32, trigger_acceleration: f32) {
        if !delta_x.is_finite() || !delta_time_ms.is_finite() || delta_time_ms <= 0.0 {
            return;
        }
        if let Some(direction) = Direction::from_delta(delta_x) {
            self.direction = Some(direction);
        }
        let acceleration = delta_x.abs() / delta_time_ms;
        if acceleration > trigger_acceleration && acceleration.is_finite() {
            strace!(acceleration, "drag velocity latch set");
            self.triggered_by_velocity = true;
        }
    }

    /// Resolves the gesture and resets the state.
    ///
    /// `displacement` is the content offset relative to the resting offset of the current
    /// cell (`content_offset + cell_index * cell_width`).
    pub(crate) fn release(
        &mut self,
        press_x: f32,
        current_x: f32,
        displacement: f32,
        cell_width: f32,
        trigger_percent: f32,
    ) -> DragOutcome {
        let latched = self.triggered_by_velocity;
        let direction = Direction::from_delta(current_x - press_x).or(self.direction);
        self.reset();

        let normalized = if cell_width > 0.0 && displacement.is_finite() {
            (displacement / cell_width).abs()
        } else {
            0.0
        };
        let triggered = latched || normalized * 100.0 > trigger_percent;
        if !triggered {
            return DragOutcome {
                triggered,
                delta: 0,
            };
        }

        let whole = normalized.floor();
        let mut cells = whole as i64;
        if (normalized - whole) * 100.0 > trigger_percent {
            cells += 1;
        }
        let cells = cells.max(1);
        let delta = direction.map_or(0, |d| d.sign() * cells);
        DragOutcome { triggered, delta }
    }
}
