/// Default snap animation length.
pub const DEFAULT_LERP_DURATION_MS: u64 = 200;
/// Default share of a cell (in percent) a drag must cover to change the index.
pub const DEFAULT_TRIGGER_PERCENT: f32 = 10.0;
/// Default drag speed (px per ms) above which a gesture counts as a fling.
pub const DEFAULT_TRIGGER_ACCELERATION: f32 = 1.0;
/// Default distance under which an animation is considered settled.
pub const DEFAULT_SETTLE_EPSILON: f32 = 1e-3;

/// Configuration for [`crate::SnapEngine`].
///
/// Values are sanitized when handed to the engine: negative thresholds become zero and NaN
/// falls back to the default.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SnapOptions {
    /// How long a snap animation takes from release to rest.
    pub lerp_duration_ms: u64,
    /// Minimum drag distance, as a percentage of the cell width, that changes the index.
    pub trigger_percent: f32,
    /// Minimum `|dx| / dt` of a single drag sample that changes the index regardless of the
    /// distance covered.
    pub trigger_acceleration: f32,
    /// Treats the strip as circular (only effective when the content overflows the viewport).
    pub wrap_around: bool,
    /// Index the strip is positioned at on construction.
    pub starting_index: usize,
    /// Reports input as blocked while a snap animation runs.
    ///
    /// The engine itself keeps accepting calls; pointer adapters are expected to honor
    /// [`crate::SnapEngine::is_input_blocked`].
    pub block_input_during_lerp: bool,
    /// Distance in px from the target at which a snap animation is considered settled.
    pub settle_epsilon: f32,
}

impl Default for SnapOptions {
    fn default() -> Self {
        Self {
            lerp_duration_ms: DEFAULT_LERP_DURATION_MS,
            trigger_percent: DEFAULT_TRIGGER_PERCENT,
            trigger_acceleration: DEFAULT_TRIGGER_ACCELERATION,
            wrap_around: false,
            starting_index: 0,
            block_input_during_lerp: true,
            settle_epsilon: DEFAULT_SETTLE_EPSILON,
        }
    }
}

impl SnapOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_lerp_duration_ms(mut self, lerp_duration_ms: u64) -> Self {
        self.lerp_duration_ms = lerp_duration_ms;
        self
    }

    pub fn with_trigger_percent(mut self, trigger_percent: f32) -> Self {
        self.trigger_percent = trigger_percent;
        self
    }

    pub fn with_trigger_acceleration(mut self, trigger_acceleration: f32) -> Self {
        self.trigger_acceleration = trigger_acceleration;
        self
    }

    pub fn with_wrap_around(mut self, wrap_around: bool) -> Self {
        self.wrap_around = wrap_around;
        self
    }

    pub fn with_starting_index(mut self, starting_index: usize) -> Self {
        self.starting_index = starting_index;
        self
    }

    pub fn with_block_input_during_lerp(mut self, block: bool) -> Self {
        self.block_input_during_lerp = block;
        self
    }

    pub fn with_settle_epsilon(mut self, settle_epsilon: f32) -> Self {
        self.settle_epsilon = settle_epsilon;
        self
    }

    /// Returns a copy with out-of-range values replaced by usable ones.
    pub fn sanitized(self) -> Self {
        Self {
            trigger_percent: non_negative_or(self.trigger_percent, DEFAULT_TRIGGER_PERCENT),
            trigger_acceleration: non_negative_or(
                self.trigger_acceleration,
                DEFAULT_TRIGGER_ACCELERATION,
            ),
            settle_epsilon: non_negative_or(self.settle_epsilon, DEFAULT_SETTLE_EPSILON),
            ..self
        }
    }
}

fn non_negative_or(value: f32, fallback: f32) -> f32 {
    if value.is_nan() { fallback } else { value.max(0.0) }
}
