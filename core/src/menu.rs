/// Visibility of the floating control bar.
///
/// Every activity signal shows the bar and pushes the hide deadline out by the
/// quiet period; the bar hides once a deadline passes with no newer activity.
#[derive(Clone, Copy, Debug)]
pub struct MenuVisibility {
    visible: bool,
    quiet_ms: f64,
    deadline_ms: Option<f64>,
}

impl MenuVisibility {
    pub fn new(quiet_ms: f64) -> Self {
        Self {
            visible: true,
            quiet_ms: quiet_ms.max(0.0),
            deadline_ms: None,
        }
    }

    pub fn visible(&self) -> bool {
        self.visible
    }

    pub fn quiet_ms(&self) -> f64 {
        self.quiet_ms
    }

    pub fn deadline_ms(&self) -> Option<f64> {
        self.deadline_ms
    }

    /// Returns true when the bar was hidden and is now shown.
    pub fn activity(&mut self, now_ms: f64) -> bool {
        let shown = !self.visible;
        self.visible = true;
        self.deadline_ms = Some(now_ms + self.quiet_ms);
        shown
    }

    /// Hides the bar if the current deadline has passed.
    pub fn poll(&mut self, now_ms: f64) -> bool {
        match self.deadline_ms {
            Some(deadline) if now_ms >= deadline => self.timer_fired(),
            _ => false,
        }
    }

    /// The hide timer for the latest activity went off.
    pub fn timer_fired(&mut self) -> bool {
        self.deadline_ms = None;
        let hidden = self.visible;
        self.visible = false;
        hidden
    }

    pub fn cancel(&mut self) {
        self.deadline_ms = None;
    }
}
