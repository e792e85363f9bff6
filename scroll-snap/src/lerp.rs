/// A linear interpolation of the content offset toward a resting position.
///
/// The start timestamp is bound on the first sample, so an animation can be started from
/// code paths that have no clock.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct Lerp {
    pub from: f32,
    pub to: f32,
    pub start_ms: Option<u64>,
    pub duration_ms: u64,
}

impl Lerp {
    pub(crate) fn new(from: f32, to: f32, duration_ms: u64) -> Self {
        Self {
            from,
            to,
            start_ms: None,
            duration_ms,
        }
    }

    /// Samples the offset at `now_ms`. Returns the offset and whether the lerp has settled.
    pub(crate) fn sample(&mut self, now_ms: u64, epsilon: f32) -> (f32, bool) {
        let start_ms = *self.start_ms.get_or_insert(now_ms);
        let t = if self.duration_ms == 0 {
            1.0
        } else {
            now_ms.saturating_sub(start_ms) as f32 / self.duration_ms as f32
        };
        let offset = self.from + (self.to - self.from) * t;
        if t >= 1.0 || (offset - self.to).abs() < epsilon {
            (self.to, true)
        } else {
            (offset, false)
        }
    }
}

/// Work deferred until the running animation settles.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum OnComplete {
    WrapFixUp,
}

/// Idle/Animating state machine with a single one-shot completion slot.
///
/// Starting a new lerp replaces the running one together with its completion action.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub(crate) struct LerpDriver {
    lerp: Option<Lerp>,
    on_complete: Option<OnComplete>,
}

/// The outcome of advancing a [`LerpDriver`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) enum LerpStep {
    Idle,
    Running(f32),
    Finished {
        offset: f32,
        on_complete: Option<OnComplete>,
    },
}

impl LerpDriver {
    pub(crate) fn start(&mut self, lerp: Lerp, on_complete: Option<OnComplete>) {
        self.lerp = Some(lerp);
        self.on_complete = on_complete;
    }

    pub(crate) fn cancel(&mut self) {
        self.lerp = None;
        self.on_complete = None;
    }

    /// Translates the running lerp, e.g. after cells were inserted before the viewport.
    pub(crate) fn shift(&mut self, dx: f32) {
        if let Some(lerp) = self.lerp.as_mut() {
            lerp.from += dx;
            lerp.to += dx;
        }
    }

    pub(crate) fn is_active(&self) -> bool {
        self.lerp.is_some()
    }

    pub(crate) fn target(&self) -> Option<f32> {
        self.lerp.map(|l| l.to)
    }

    pub(crate) fn advance(&mut self, now_ms: u64, epsilon: f32) -> LerpStep {
        let Some(lerp) = self.lerp.as_mut() else {
            return LerpStep::Idle;
        };
        let (offset, done) = lerp.sample(now_ms, epsilon);
        if !done {
            return LerpStep::Running(offset);
        }
        self.lerp = None;
        LerpStep::Finished {
            offset,
            on_complete: self.on_complete.take(),
        }
    }
}
