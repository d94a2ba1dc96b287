/// Time-based filter enforcing one transition per gesture.
///
/// Holds the timestamp of the last accepted signal. A signal is admitted
/// only while no tween is running and at least `cooldown_ms` has passed
/// since the previous admission. Rejected signals are dropped, never queued.
#[derive(Clone, Debug)]
pub struct CooldownGate {
    cooldown_ms: f64,
    last_accepted_ms: Option<f64>,
}

impl CooldownGate {
    pub fn new(cooldown_ms: f64) -> Self {
        Self {
            cooldown_ms,
            last_accepted_ms: None,
        }
    }

    pub fn cooldown_ms(&self) -> f64 {
        self.cooldown_ms
    }

    pub fn last_accepted_ms(&self) -> Option<f64> {
        self.last_accepted_ms
    }

    pub fn would_admit(&self, now_ms: f64, animating: bool) -> bool {
        if animating {
            return false;
        }
        match self.last_accepted_ms {
            None => true,
            Some(last) => now_ms - last >= self.cooldown_ms,
        }
    }

    /// Admit a signal at `now_ms`, stamping the window on success.
    pub fn admit(&mut self, now_ms: f64, animating: bool) -> bool {
        if !self.would_admit(now_ms, animating) {
            return false;
        }
        self.last_accepted_ms = Some(now_ms);
        true
    }

    pub fn reset(&mut self) {
        self.last_accepted_ms = None;
    }
}
