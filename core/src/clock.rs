/// Elapsed presenting time, advanced by an external one-second tick.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PresenterClock {
    elapsed_seconds: u64,
}

impl PresenterClock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn elapsed_seconds(&self) -> u64 {
        self.elapsed_seconds
    }

    pub fn tick(&mut self) {
        self.elapsed_seconds = self.elapsed_seconds.saturating_add(1);
    }

    pub fn reset(&mut self) {
        self.elapsed_seconds = 0;
    }

    pub fn display(&self) -> String {
        format_elapsed(self.elapsed_seconds)
    }
}

/// Formats seconds as `HH:MM:SS`; hours keep growing past 24.
pub fn format_elapsed(total_seconds: u64) -> String {
    let hours = total_seconds / 3600;
    let minutes = (total_seconds % 3600) / 60;
    let seconds = total_seconds % 60;
    format!("{hours:02}:{minutes:02}:{seconds:02}")
}
