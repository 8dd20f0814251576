/// Accepts at most one event per interval, measured from the last accepted one.
/// Events arriving early are dropped, never queued.
#[derive(Clone, Copy, Debug)]
pub struct KeyThrottle {
    interval_ms: f64,
    last_accepted_ms: Option<f64>,
}

impl KeyThrottle {
    pub fn new(interval_ms: f64) -> Self {
        Self {
            interval_ms: interval_ms.max(0.0),
            last_accepted_ms: None,
        }
    }

    pub fn try_accept(&mut self, now_ms: f64) -> bool {
        if let Some(last) = self.last_accepted_ms {
            if now_ms - last < self.interval_ms {
                return false;
            }
        }
        self.last_accepted_ms = Some(now_ms);
        true
    }
}

/// Guard held while a page transition is playing.
#[derive(Clone, Copy, Debug, Default)]
pub struct TransitionLock {
    engaged: bool,
}

impl TransitionLock {
    pub fn try_engage(&mut self) -> bool {
        if self.engaged {
            return false;
        }
        self.engaged = true;
        true
    }

    pub fn release(&mut self) {
        self.engaged = false;
    }

    pub fn is_engaged(&self) -> bool {
        self.engaged
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn drops_events_inside_interval() {
        let mut throttle = KeyThrottle::new(150.0);
        assert!(throttle.try_accept(1_000.0));
        assert!(!throttle.try_accept(1_100.0));
        assert!(!throttle.try_accept(1_149.0));
        assert!(throttle.try_accept(1_150.0));
    }

    #[test]
    fn interval_counts_from_last_accepted_event() {
        let mut throttle = KeyThrottle::new(150.0);
        assert!(throttle.try_accept(0.0));
        assert!(!throttle.try_accept(100.0));
        // the dropped event at 100 does not push the window out
        assert!(throttle.try_accept(160.0));
    }

    #[test]
    fn lock_rejects_until_released() {
        let mut lock = TransitionLock::default();
        assert!(lock.try_engage());
        assert!(!lock.try_engage());
        lock.release();
        assert!(!lock.is_engaged());
        assert!(lock.try_engage());
    }
}
