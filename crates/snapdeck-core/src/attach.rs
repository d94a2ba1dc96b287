/// Bounded retry policy for attaching to a scroll container that may not
/// exist yet.
///
/// The caller owns the loop: it tries to attach, reports the outcome with
/// [`AttachRetry::record`], and schedules another attempt (one frame later)
/// only on [`AttachStep::Retry`].
#[derive(Clone, Debug)]
pub struct AttachRetry {
    max_attempts: u32,
    attempts: u32,
    finished: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AttachStep {
    Attached,
    Retry { attempt: u32 },
    GaveUp,
    Cancelled,
}

impl AttachRetry {
    pub fn new(max_attempts: u32) -> Self {
        Self {
            max_attempts: max_attempts.max(1),
            attempts: 0,
            finished: false,
        }
    }

    pub fn attempts(&self) -> u32 {
        self.attempts
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    pub fn record(&mut self, attached: bool) -> AttachStep {
        if self.finished {
            return AttachStep::Cancelled;
        }
        self.attempts += 1;
        if attached {
            self.finished = true;
            return AttachStep::Attached;
        }
        if self.attempts >= self.max_attempts {
            self.finished = true;
            log::warn!(
                "[attach] scroll container never appeared after {} attempts",
                self.attempts
            );
            return AttachStep::GaveUp;
        }
        AttachStep::Retry {
            attempt: self.attempts,
        }
    }

    /// Stop retrying; later `record` calls report `Cancelled`.
    pub fn cancel(&mut self) {
        self.finished = true;
    }
}
