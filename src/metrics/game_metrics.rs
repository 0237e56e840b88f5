use std::time::{Duration, Instant};

/// Session clock and tick counter shown in the header
pub struct GameMetrics {
    pub start_time: Instant,
    pub elapsed_time: Duration,
    pub ticks: u64,
    pub stopped: bool,
}

impl GameMetrics {
    pub fn new() -> Self {
        Self {
            start_time: Instant::now(),
            elapsed_time: Duration::ZERO,
            ticks: 0,
            stopped: false,
        }
    }

    pub fn update(&mut self) {
        if !self.stopped {
            self.elapsed_time = self.start_time.elapsed();
        }
    }

    pub fn on_tick(&mut self) {
        self.ticks += 1;
    }

    /// Freeze the clock at the moment the game halted
    pub fn on_halt(&mut self) {
        self.update();
        self.stopped = true;
    }

    pub fn format_time(&self) -> String {
        let total_secs = self.elapsed_time.as_secs();
        let minutes = total_secs / 60;
        let seconds = total_secs % 60;
        format!("{:02}:{:02}", minutes, seconds)
    }
}

impl Default for GameMetrics {
    fn default() -> Self {
        Self::new()
    }
}
